//! termalert-tui - Modal alert widget for ratatui
//!
//! A dimmed full-screen overlay with a centered, shadowed card: title,
//! subtitle, and a vertical stack of action buttons, presented with a
//! scale-bounce entrance. Hosts drive an [`AlertPresenter`] from their
//! event loop and render an [`AlertView`] over their normal frame; button
//! activations route back through stable action tags.
//!
//! ```no_run
//! use std::time::Instant;
//! use termalert_tui::{AlertAction, AlertPresenter, AlertView};
//! use termalert_tui::TerminalDisplay;
//!
//! let mut alert = AlertPresenter::new();
//! alert.configure(
//!     Some("Close project?"),
//!     Some("Unsaved changes will be lost"),
//!     vec![AlertAction::new("Close", |ctl| ctl.dismiss())],
//! );
//! alert.present(&TerminalDisplay::default(), Instant::now());
//! # let _ = AlertView::new(&alert, Instant::now());
//! ```

pub mod action;
pub mod content;
pub mod display;
pub mod overlay;
pub mod presenter;
pub mod theme;
pub mod widget;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export the component surface at crate root
pub use action::{ActionHandler, ActionRegistry, ActionTag, AlertAction, AlertController};
pub use content::LabelContent;
pub use display::TerminalDisplay;
pub use presenter::AlertPresenter;
pub use widget::{AlertLayout, AlertView};
