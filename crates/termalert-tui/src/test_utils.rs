//! In-memory rendering helpers built on ratatui's [`TestBackend`].
//!
//! Widgets draw into a buffer that assertions can inspect directly, so the
//! tests need no PTY and no timing. Compiled for this crate's own tests and
//! exported to dependent test suites through the `test-helpers` feature.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Fixed-size terminal over an in-memory buffer.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
    area: Rect,
}

impl TestTerminal {
    /// Standard 80x24 surface.
    pub fn new() -> Self {
        Self::sized(80, 24)
    }

    /// Deliberately cramped 40x12 surface for clamping tests.
    pub fn compact() -> Self {
        Self::sized(40, 12)
    }

    fn sized(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test backend terminal");
        Self {
            terminal,
            area: Rect::new(0, 0, width, height),
        }
    }

    /// Full area of the surface.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Render a single widget into the given area.
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("render to test backend");
    }

    /// Draw a full frame through a closure, for view functions that lay out
    /// the whole screen themselves.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw to test backend");
    }

    /// Rendered buffer, for cell-level assertions.
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// True if any single row contains `needle`.
    pub fn buffer_contains(&self, needle: &str) -> bool {
        (0..self.area.height).any(|y| self.line(y).contains(needle))
    }

    /// True if row `y` contains `needle`.
    pub fn line_contains(&self, y: u16, needle: &str) -> bool {
        self.line(y).contains(needle)
    }

    fn line(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..self.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
