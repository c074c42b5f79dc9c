//! Semantic style builders for the alert overlay.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn title() -> Style {
    Style::default()
        .fg(palette::TITLE_FG)
        .add_modifier(Modifier::BOLD)
}

pub fn subtitle() -> Style {
    Style::default().fg(palette::SUBTITLE_FG)
}

// --- Button styles ---
pub fn button() -> Style {
    Style::default()
        .fg(palette::BUTTON_LABEL)
        .bg(palette::BUTTON_BG)
        .add_modifier(Modifier::BOLD)
}

/// Inverted button colors for the keyboard-selected row.
pub fn button_selected() -> Style {
    Style::default()
        .fg(palette::CARD_BG)
        .bg(palette::BUTTON_LABEL)
        .add_modifier(Modifier::BOLD)
}

// --- Effects ---
pub fn shadow() -> Style {
    Style::default().fg(palette::SHADOW).bg(palette::SHADOW)
}

// --- Block builders ---
pub fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::CARD_BORDER))
        .style(Style::default().bg(palette::CARD_BG))
}
