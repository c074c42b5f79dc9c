//! Shared overlay drawing utilities.
//!
//! Provides reusable functions for centering and scaling rects, dimming
//! backgrounds, and rendering shadows: the drawing vocabulary the alert
//! card is built on.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Clear, Widget};

use crate::theme::{palette, styles};

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Scale a rect about its own center, keeping the result inside `within`.
///
/// Scales below 1.0 shrink toward the center; scales above 1.0 grow past
/// the original bounds but never past `within`. A scale of 0 collapses the
/// rect to nothing.
pub fn scaled_rect(rect: Rect, scale: f32, within: Rect) -> Rect {
    let scale = scale.max(0.0);
    let w = ((f32::from(rect.width) * scale).round() as u16).min(within.width);
    let h = ((f32::from(rect.height) * scale).round() as u16).min(within.height);

    let center_x = f32::from(rect.x) + f32::from(rect.width) / 2.0;
    let center_y = f32::from(rect.y) + f32::from(rect.height) / 2.0;
    let x = (center_x - f32::from(w) / 2.0).round().max(0.0) as u16;
    let y = (center_y - f32::from(h) / 2.0).round().max(0.0) as u16;

    let x = x.clamp(within.x, within.x + within.width.saturating_sub(w));
    let y = y.clamp(within.y, within.y + within.height.saturating_sub(h));
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area, simulating a black overlay at
/// [`palette::OVERLAY_ALPHA`] strength.
///
/// RGB cell colors are blended toward black channel by channel; colors that
/// cannot be blended (named or indexed) fall back to a fixed dark style.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = dimmed(cell.fg).unwrap_or(palette::OVERLAY_FALLBACK_FG);
                let bg = dimmed(cell.bg).unwrap_or(palette::OVERLAY_FALLBACK_BG);
                cell.set_fg(fg);
                cell.set_bg(bg);
            }
        }
    }
}

/// Blend an RGB color toward black by the overlay alpha. Non-RGB colors
/// have no channel values to blend and return `None`.
fn dimmed(color: Color) -> Option<Color> {
    let keep = 1.0 - palette::OVERLAY_ALPHA;
    match color {
        Color::Rgb(r, g, b) => Some(Color::Rgb(
            scale_channel(r, keep),
            scale_channel(g, keep),
            scale_channel(b, keep),
        )),
        _ => None,
    }
}

fn scale_channel(value: u8, factor: f32) -> u8 {
    (f32::from(value) * factor).round() as u8
}

/// Render a 1-cell shadow offset to the right and bottom of a card rect.
///
/// Creates the illusion of elevation by drawing darker cells along the
/// right edge and bottom edge, offset by 1 cell.
pub fn render_shadow(buf: &mut Buffer, card: Rect) {
    let shadow_style = styles::shadow();

    // Right edge shadow (1 cell wide, full height)
    let right_x = card.x.saturating_add(card.width);
    for y in card.y.saturating_add(1)..card.y.saturating_add(card.height).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge shadow (full width, 1 cell tall)
    let bottom_y = card.y.saturating_add(card.height);
    for x in card.x.saturating_add(1)..card.x.saturating_add(card.width).saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Clear a rect and prepare it for card content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
