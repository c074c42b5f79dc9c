//! Main render/view function (View in TEA pattern)

use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use termalert_tui::AlertView;

use crate::app::DemoApp;

/// Render the complete UI
pub fn view(frame: &mut Frame, app: &DemoApp) {
    let area = frame.area();
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    render_history(frame, app, chunks[0]);
    render_footer(frame, app, chunks[1]);

    // Alert overlay goes over the whole frame
    if app.alert.is_active() {
        frame.render_widget(AlertView::new(&app.alert, Instant::now()), area);
    }
}

/// Event history, newest entries pinned to the bottom
fn render_history(frame: &mut Frame, app: &DemoApp, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" termalert demo ");

    let visible = area.height.saturating_sub(2) as usize;
    let start = app.history.len().saturating_sub(visible);
    let lines: Vec<Line> = app.history[start..]
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.at.format("%H:%M:%S ").to_string(),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(entry.text.clone()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One-line footer with key hints and alert status
fn render_footer(frame: &mut Frame, app: &DemoApp, area: Rect) {
    let status = if app.alert.is_active() {
        let phase = if app.alert.entrance_complete() {
            "settled"
        } else {
            "entering"
        };
        format!(
            " {} | {} cols | {}   j/k select  Enter activate  1-9 tap  a append  Esc dismiss",
            app.alert.screen_class(),
            app.alert.card_width(),
            phase,
        )
    } else {
        format!(
            " idiom: {}   p plain alert  s styled alert  q quit",
            app.settings.display.idiom
        )
    };

    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
