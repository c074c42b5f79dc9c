//! Modal alert widget and hit-test layout

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Margin, Position, Rect};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::action::ActionTag;
use crate::overlay;
use crate::presenter::AlertPresenter;
use crate::theme::styles;

/// Floor for the card width under very narrow selections.
const MIN_CARD_WIDTH: u16 = 16;

/// Horizontal padding between the card border and its content.
const PAD_X: u16 = 2;

/// Resolved geometry of the settled alert: the card rect plus each button
/// rect with its action tag, for pointer hit-testing. Hit-testing always
/// uses the settled layout, not the scaled one the entrance animation is
/// drawing through.
pub struct AlertLayout {
    card: Rect,
    buttons: Vec<(ActionTag, Rect)>,
}

impl AlertLayout {
    /// Compute the settled layout of the alert within an area.
    pub fn of(presenter: &AlertPresenter, area: Rect) -> Self {
        let (width, height) = card_size(presenter, area);
        let card = overlay::centered_rect(width, height, area);
        let rows = content_rows(presenter, card.inner(Margin::new(1, 1)));
        Self {
            card,
            buttons: rows.buttons,
        }
    }

    pub fn card(&self) -> Rect {
        self.card
    }

    pub fn buttons(&self) -> &[(ActionTag, Rect)] {
        &self.buttons
    }

    /// Tag of the button under a terminal position, if any.
    pub fn tag_at(&self, column: u16, row: u16) -> Option<ActionTag> {
        let position = Position::new(column, row);
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(tag, _)| *tag)
    }

    /// True when the position lies inside the card.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.card.contains(Position::new(column, row))
    }
}

/// Renders the alert overlay: dimmed backdrop, drop shadow, rounded card,
/// title, subtitle, and one pill button per registered action.
pub struct AlertView<'a> {
    presenter: &'a AlertPresenter,
    scale: f32,
}

impl<'a> AlertView<'a> {
    /// Widget for the presenter's visual state at `now`.
    pub fn new(presenter: &'a AlertPresenter, now: Instant) -> Self {
        Self {
            presenter,
            scale: presenter.scale(now),
        }
    }

    /// Widget at an explicit entrance scale.
    pub fn with_scale(presenter: &'a AlertPresenter, scale: f32) -> Self {
        Self { presenter, scale }
    }
}

impl Widget for AlertView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.presenter.is_active() || area.is_empty() {
            return;
        }

        overlay::dim_background(buf, area);

        let layout = AlertLayout::of(self.presenter, area);
        let card = overlay::scaled_rect(layout.card(), self.scale, area);
        if card.width < 2 || card.height < 2 {
            return;
        }

        overlay::clear_area(buf, card);
        overlay::render_shadow(buf, card);

        let block = styles::card_block();
        let inner = block.inner(card);
        block.render(card, buf);

        let rows = content_rows(self.presenter, inner);

        if let (Some(rect), Some(text)) = (rows.title, self.presenter.title_content().resolve()) {
            Paragraph::new(text)
                .style(styles::title())
                .alignment(Alignment::Center)
                .render(rect, buf);
        }

        if let (Some(rect), Some(text)) = (
            rows.subtitle,
            self.presenter.subtitle_content().resolve(),
        ) {
            Paragraph::new(text)
                .style(styles::subtitle())
                .alignment(Alignment::Center)
                .render(rect, buf);
        }

        let selected = self.presenter.selected();
        let labels = self.presenter.registry().titles();
        for (index, ((_, rect), label)) in rows.buttons.iter().zip(labels).enumerate() {
            let style = if index == selected {
                styles::button_selected()
            } else {
                styles::button()
            };
            Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center)
                .render(*rect, buf);
        }
    }
}

/// Card size from the presenter's selected width and its content, clamped
/// to the render area.
fn card_size(presenter: &AlertPresenter, area: Rect) -> (u16, u16) {
    let label_floor = presenter
        .registry()
        .titles()
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0) as u16
        + PAD_X * 2
        + 2;
    let width = presenter
        .card_width()
        .max(label_floor)
        .max(MIN_CARD_WIDTH)
        .min(area.width);
    let height = (content_height(presenter) + 2).min(area.height);
    (width, height)
}

/// Rows the card interior needs: a breathing row under the top border,
/// then each populated section followed by one blank row (the final blank
/// doubles as bottom padding).
fn content_height(presenter: &AlertPresenter) -> u16 {
    let mut height = 1;
    let title_lines = presenter.title_content().line_count() as u16;
    if title_lines > 0 {
        height += title_lines + 1;
    }
    let subtitle_lines = presenter.subtitle_content().line_count() as u16;
    if subtitle_lines > 0 {
        height += subtitle_lines + 1;
    }
    height += presenter.registry().len() as u16 * 2;
    height
}

struct ContentRows {
    title: Option<Rect>,
    subtitle: Option<Rect>,
    buttons: Vec<(ActionTag, Rect)>,
}

/// Place content rows inside the card interior, truncating whatever no
/// longer fits once the interior has been scaled or clamped down.
fn content_rows(presenter: &AlertPresenter, inner: Rect) -> ContentRows {
    let mut rows = ContentRows {
        title: None,
        subtitle: None,
        buttons: Vec::new(),
    };
    let text_w = inner.width.saturating_sub(PAD_X * 2);
    if text_w == 0 || inner.height == 0 {
        return rows;
    }
    let text_x = inner.x + PAD_X;
    let bottom = inner.bottom();
    let mut y = inner.y.saturating_add(1);

    let title_lines = presenter.title_content().line_count() as u16;
    if title_lines > 0 && y < bottom {
        let h = title_lines.min(bottom - y);
        rows.title = Some(Rect::new(text_x, y, text_w, h));
        y += h + 1;
    }

    let subtitle_lines = presenter.subtitle_content().line_count() as u16;
    if subtitle_lines > 0 && y < bottom {
        let h = subtitle_lines.min(bottom - y);
        rows.subtitle = Some(Rect::new(text_x, y, text_w, h));
        y += h + 1;
    }

    for (tag, _) in presenter.registry().entries() {
        if y >= bottom {
            break;
        }
        rows.buttons.push((tag, Rect::new(text_x, y, text_w, 1)));
        y += 2;
    }

    rows
}
