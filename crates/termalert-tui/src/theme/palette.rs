//! Color palette for the alert overlay.

use ratatui::style::Color;

// --- Overlay ---
/// Strength of the black overlay drawn behind the card (0.0..=1.0).
pub const OVERLAY_ALPHA: f32 = 0.6;
/// Fallback colors for cells whose colors cannot be blended (non-RGB).
pub const OVERLAY_FALLBACK_FG: Color = Color::DarkGray;
pub const OVERLAY_FALLBACK_BG: Color = Color::Black;

// --- Card ---
pub const CARD_BG: Color = Color::Rgb(0x20, 0x20, 0x20);
pub const CARD_BORDER: Color = Color::Rgb(0x4a, 0x4a, 0x4a);
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Text ---
pub const TITLE_FG: Color = Color::White;
pub const SUBTITLE_FG: Color = Color::White;

// --- Buttons ---
pub const BUTTON_BG: Color = Color::Rgb(0x5b, 0x5a, 0x5a);
pub const BUTTON_LABEL: Color = Color::Rgb(0xff, 0xec, 0x41);
