//! # termalert-core - Core Domain Types
//!
//! Foundation crate for termalert. Provides display classification, card
//! width selection, the entrance animation sequencer, error handling, and
//! logging setup.
//!
//! This crate has **zero UI dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing) and never touches the terminal, which
//! keeps every rule in it testable without a backend.
//!
//! ## Public API
//!
//! ### Display (`display`)
//! - [`DisplayProfile`] - Injectable capability describing the presenting display
//! - [`FixedDisplay`] - Constructor-supplied profile for tests and overrides
//! - [`ScreenClass`], [`classify()`] - Native-height classification table
//! - [`Idiom`] - Phone/tablet interface idiom
//! - [`card_width()`] - Tablet-fixed / phone-fractional width selection
//!
//! ### Motion (`motion`)
//! - [`ScaleSequence`] - Ordered scale steps with explicit hand-off
//! - [`ScaleStep`] - One target/duration pair
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use termalert_core::prelude::*;
//! ```

pub mod display;
pub mod error;
pub mod logging;
pub mod motion;

/// Prelude for common imports used throughout all termalert crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use display::{
    card_width, classify, DisplayProfile, FixedDisplay, Idiom, ScreenClass, PHONE_WIDTH_FRACTION,
    TABLET_CARD_WIDTH,
};
pub use error::{Error, Result, ResultExt};
pub use motion::{
    ScaleSequence, ScaleStep, ENTRANCE_OVERSHOOT, ENTRANCE_PHASE, ENTRANCE_SETTLE, ENTRANCE_SHRINK,
};
