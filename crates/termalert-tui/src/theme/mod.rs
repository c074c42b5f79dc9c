//! Centralized theme for the alert overlay.
//!
//! Split into:
//! - `palette` - raw color constants
//! - `styles` - semantic style builder functions

pub mod palette;
pub mod styles;
