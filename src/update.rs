//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termalert_core::prelude::*;
use termalert_tui::AlertLayout;

use crate::app::DemoApp;
use crate::message::Message;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}

/// Process a message and update state
pub fn update(app: &mut DemoApp, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            app.should_quit = true;
            UpdateResult::none()
        }

        Message::Tick => {
            if app.alert.tick(Instant::now()) {
                app.log("entrance settled; alert is interactive");
            }
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(app, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Click { column, row } => {
            handle_click(app, column, row);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Alert Messages
        // ─────────────────────────────────────────────────────────
        Message::PresentPlain => {
            app.present_plain(Instant::now());
            UpdateResult::none()
        }

        Message::PresentStyled => {
            app.present_styled(Instant::now());
            UpdateResult::none()
        }

        Message::AddAction => {
            app.add_action();
            UpdateResult::none()
        }

        Message::SelectNext => {
            app.alert.select_next();
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            app.alert.select_previous();
            UpdateResult::none()
        }

        Message::ActivateSelected => {
            app.alert.activate_selected();
            UpdateResult::none()
        }

        Message::TapButton { index } => {
            match app.alert.registry().tag_at(index) {
                Some(tag) => app.alert.tap(tag),
                None => debug!(index, "no button at that index"),
            }
            UpdateResult::none()
        }

        Message::DismissAlert => {
            app.alert.dismiss();
            app.log("alert dismissed");
            UpdateResult::none()
        }

        Message::ActionInvoked { label } => {
            app.log(format!("action ran: {}", label));
            UpdateResult::none()
        }
    }
}

/// Convert key events to messages; keys change meaning while an alert is up
fn handle_key(app: &DemoApp, key: KeyEvent) -> Option<Message> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    if app.alert.is_active() {
        handle_key_alert(key)
    } else {
        handle_key_normal(key)
    }
}

/// Key events while the alert is up
fn handle_key_alert(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Navigation
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Some(Message::SelectNext),
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Some(Message::SelectPrevious),

        // Activation
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::ActivateSelected),
        KeyCode::Char(c @ '1'..='9') => Some(Message::TapButton {
            index: c as usize - '1' as usize,
        }),

        // Extend the live alert
        KeyCode::Char('a') => Some(Message::AddAction),

        // Close without running a handler
        KeyCode::Esc => Some(Message::DismissAlert),

        _ => None,
    }
}

/// Key events with no alert on screen
fn handle_key_normal(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('p') => Some(Message::PresentPlain),
        KeyCode::Char('s') => Some(Message::PresentStyled),
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}

/// Route a click through the alert layout
fn handle_click(app: &mut DemoApp, column: u16, row: u16) {
    if !app.alert.is_active() {
        return;
    }

    let layout = AlertLayout::of(&app.alert, app.viewport);
    if let Some(tag) = layout.tag_at(column, row) {
        app.alert.tap(tag);
    } else if !layout.contains(column, row) {
        debug!(column, row, "click outside the alert card ignored");
    }
}
