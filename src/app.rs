//! Demo application state (Model in TEA)

use std::time::Instant;

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use tokio::sync::mpsc;

use termalert_core::prelude::*;
use termalert_tui::{AlertAction, AlertPresenter, TerminalDisplay};

use crate::config::Settings;
use crate::message::Message;

/// One line in the on-screen event history
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

/// Mutable state for the demo
pub struct DemoApp {
    /// Settings loaded at startup
    pub settings: Settings,

    /// The alert under demonstration
    pub alert: AlertPresenter,

    /// Display profile alerts are presented against
    pub display: TerminalDisplay,

    /// What happened so far, newest last
    pub history: Vec<HistoryEntry>,

    /// Frame area from the last draw, for mouse hit-testing
    pub viewport: Rect,

    /// Set when the event loop should exit
    pub should_quit: bool,

    /// Button handlers report back through this channel
    msg_tx: mpsc::Sender<Message>,
}

impl DemoApp {
    pub fn new(settings: Settings, msg_tx: mpsc::Sender<Message>) -> Self {
        let display = TerminalDisplay::new(settings.display.idiom);
        Self {
            settings,
            alert: AlertPresenter::new(),
            display,
            history: Vec::new(),
            viewport: Rect::default(),
            should_quit: false,
            msg_tx,
        }
    }

    /// Append a line to the event history
    pub fn log(&mut self, text: impl Into<String>) {
        self.history.push(HistoryEntry {
            at: Local::now(),
            text: text.into(),
        });
    }

    /// Configure a fresh plain-text alert and present it
    pub fn present_plain(&mut self, now: Instant) {
        let actions = vec![
            self.alert_action("Keep editing"),
            self.alert_action("Discard"),
        ];

        self.alert = AlertPresenter::new();
        self.alert.configure(
            Some("Close project?"),
            Some("Unsaved changes will be lost."),
            actions,
        );
        self.alert.present(&self.display, now);
        self.log_presented("plain");
    }

    /// Configure a fresh alert with styled title and subtitle and present it
    pub fn present_styled(&mut self, now: Instant) {
        let actions = vec![
            self.alert_action("Restart now"),
            self.alert_action("Later"),
            self.alert_action("Release notes"),
        ];

        let title = Text::from(Span::styled(
            "Update ready",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        let subtitle = Text::from(vec![
            Line::from("Version 2.1 has been downloaded."),
            Line::from(Span::styled(
                "Restart to apply it.",
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ]);

        self.alert = AlertPresenter::new();
        self.alert.configure_styled(Some(title), Some(subtitle), actions);
        self.alert.present(&self.display, now);
        self.log_presented("styled");
    }

    /// Register one more button on the live alert (appended at the bottom)
    pub fn add_action(&mut self) {
        let n = self.alert.registry().len() + 1;
        let label = format!("Extra {}", n);
        let action = self.alert_action(&label);
        self.alert.configure(None, None, vec![action]);
        self.log(format!("appended action \"{}\"", label));
    }

    /// Build an action whose handler reports back through the message channel
    fn alert_action(&self, label: &str) -> AlertAction {
        let tx = self.msg_tx.clone();
        let name = label.to_string();
        AlertAction::new(label, move |ctl| {
            let invoked = Message::ActionInvoked {
                label: name.clone(),
            };
            if let Err(e) = tx.try_send(invoked) {
                warn!("Dropping action notification: {}", e);
            }
            ctl.dismiss();
        })
    }

    fn log_presented(&mut self, kind: &str) {
        self.log(format!(
            "presented {} alert: {} cols wide, screen class {}",
            kind,
            self.alert.card_width(),
            self.alert.screen_class()
        ));
    }
}
