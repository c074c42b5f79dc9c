//! Display classification and alert card width selection
//!
//! The alert sizes its card from an injected [`DisplayProfile`] rather than a
//! global screen handle: tablet-idiom displays get a fixed card width, phone
//! idiom displays get a fraction of the available columns. Screen classes are
//! derived from the native pixel height a display reports and are purely
//! informational.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed card width on tablet-idiom displays, in cells.
pub const TABLET_CARD_WIDTH: u16 = 350;

/// Fraction of the display width the card occupies on phone-idiom displays.
pub const PHONE_WIDTH_FRACTION: f32 = 0.8;

/// Named bucket for a display's native vertical resolution.
///
/// Classification is a fixed lookup over well-known handset panel heights,
/// kept as a compatibility table. Displays that report nothing, or a height
/// outside the table, classify as [`ScreenClass::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenClass {
    SmallPhone,
    StandardPhone,
    WidePhone,
    PlusPhone,
    ProPhone,
    XClassPhone,
    MaxPhone,
    Unknown,
}

impl ScreenClass {
    /// True when the height matched an entry in the classification table.
    pub fn is_known(&self) -> bool {
        !matches!(self, ScreenClass::Unknown)
    }

    /// True for the 1125×2436 panel class.
    pub fn is_x_class(&self) -> bool {
        matches!(self, ScreenClass::XClassPhone)
    }
}

impl fmt::Display for ScreenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScreenClass::SmallPhone => "small-phone",
            ScreenClass::StandardPhone => "standard-phone",
            ScreenClass::WidePhone => "wide-phone",
            ScreenClass::PlusPhone => "plus-phone",
            ScreenClass::ProPhone => "pro-phone",
            ScreenClass::XClassPhone => "x-class-phone",
            ScreenClass::MaxPhone => "max-phone",
            ScreenClass::Unknown => "unknown",
        };
        write!(f, "{label}")
    }
}

/// Classify a display by its native vertical resolution in pixels.
pub fn classify(native_height_px: u32) -> ScreenClass {
    match native_height_px {
        1136 => ScreenClass::SmallPhone,    // 640×1136
        1334 => ScreenClass::StandardPhone, // 750×1334
        1792 => ScreenClass::WidePhone,     // 828×1792
        1920 | 2208 => ScreenClass::PlusPhone,
        2426 => ScreenClass::ProPhone,
        2436 => ScreenClass::XClassPhone, // 1125×2436
        2688 => ScreenClass::MaxPhone,    // 1242×2688
        _ => ScreenClass::Unknown,
    }
}

/// Interface idiom a display presents as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Idiom {
    #[default]
    Phone,
    Tablet,
}

impl Idiom {
    pub fn is_tablet(&self) -> bool {
        matches!(self, Idiom::Tablet)
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Idiom::Phone => write!(f, "phone"),
            Idiom::Tablet => write!(f, "tablet"),
        }
    }
}

/// Capability handle describing the display an alert is presented on.
///
/// Implementations answer three questions: how many cells wide the display
/// is, what native pixel height it reports (if any), and which idiom it
/// presents as. Tests and embedders that want deterministic sizing use
/// [`FixedDisplay`]; live terminals are probed by the TUI layer.
pub trait DisplayProfile {
    /// Logical width of the display in cells.
    fn columns(&self) -> u16;

    /// Native vertical resolution in pixels, when the display reports one.
    fn native_height_px(&self) -> Option<u32>;

    /// Interface idiom the display presents as.
    fn idiom(&self) -> Idiom;

    /// Screen class derived from the native resolution.
    fn screen_class(&self) -> ScreenClass {
        self.native_height_px()
            .map(classify)
            .unwrap_or(ScreenClass::Unknown)
    }
}

/// A [`DisplayProfile`] with constructor-supplied answers.
#[derive(Debug, Clone, Copy)]
pub struct FixedDisplay {
    columns: u16,
    native_height_px: Option<u32>,
    idiom: Idiom,
}

impl FixedDisplay {
    pub fn new(columns: u16, idiom: Idiom) -> Self {
        Self {
            columns,
            native_height_px: None,
            idiom,
        }
    }

    /// Shorthand for a phone-idiom display of the given width.
    pub fn phone(columns: u16) -> Self {
        Self::new(columns, Idiom::Phone)
    }

    /// Shorthand for a tablet-idiom display of the given width.
    pub fn tablet(columns: u16) -> Self {
        Self::new(columns, Idiom::Tablet)
    }

    /// Attach a native pixel height to the profile.
    pub fn with_native_height(mut self, px: u32) -> Self {
        self.native_height_px = Some(px);
        self
    }
}

impl DisplayProfile for FixedDisplay {
    fn columns(&self) -> u16 {
        self.columns
    }

    fn native_height_px(&self) -> Option<u32> {
        self.native_height_px
    }

    fn idiom(&self) -> Idiom {
        self.idiom
    }
}

/// Select the alert card width for a display.
///
/// Tablet idiom always gets [`TABLET_CARD_WIDTH`] regardless of the actual
/// display size; everything else gets [`PHONE_WIDTH_FRACTION`] of the
/// columns, rounded. Selection is pure; clamping to the render area is the
/// layout's job.
pub fn card_width(profile: &dyn DisplayProfile) -> u16 {
    if profile.idiom().is_tablet() {
        TABLET_CARD_WIDTH
    } else {
        (f32::from(profile.columns()) * PHONE_WIDTH_FRACTION).round() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_heights() {
        assert_eq!(classify(1136), ScreenClass::SmallPhone);
        assert_eq!(classify(1334), ScreenClass::StandardPhone);
        assert_eq!(classify(1792), ScreenClass::WidePhone);
        assert_eq!(classify(1920), ScreenClass::PlusPhone);
        assert_eq!(classify(2208), ScreenClass::PlusPhone);
        assert_eq!(classify(2426), ScreenClass::ProPhone);
        assert_eq!(classify(2436), ScreenClass::XClassPhone);
        assert_eq!(classify(2688), ScreenClass::MaxPhone);
    }

    #[test]
    fn test_classify_unknown_heights() {
        assert_eq!(classify(0), ScreenClass::Unknown);
        assert_eq!(classify(1135), ScreenClass::Unknown);
        assert_eq!(classify(999_999), ScreenClass::Unknown);
        assert!(!classify(999_999).is_known());
    }

    #[test]
    fn test_x_class_check() {
        assert!(classify(2436).is_x_class());
        assert!(!classify(2688).is_x_class());
        assert!(!classify(1334).is_x_class());
    }

    #[test]
    fn test_screen_class_labels() {
        assert_eq!(classify(1334).to_string(), "standard-phone");
        assert_eq!(classify(2436).to_string(), "x-class-phone");
        assert_eq!(ScreenClass::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_tablet_width_is_fixed() {
        // The tablet width ignores how wide the display actually is.
        assert_eq!(card_width(&FixedDisplay::tablet(500)), TABLET_CARD_WIDTH);
        assert_eq!(card_width(&FixedDisplay::tablet(40)), TABLET_CARD_WIDTH);
    }

    #[test]
    fn test_phone_width_is_fractional() {
        assert_eq!(card_width(&FixedDisplay::phone(100)), 80);
        assert_eq!(card_width(&FixedDisplay::phone(80)), 64);
        // 0.8 × 99 = 79.2 rounds down
        assert_eq!(card_width(&FixedDisplay::phone(99)), 79);
    }

    #[test]
    fn test_profile_screen_class_defaults_to_unknown() {
        let profile = FixedDisplay::phone(80);
        assert_eq!(profile.screen_class(), ScreenClass::Unknown);

        let profile = FixedDisplay::phone(80).with_native_height(2436);
        assert_eq!(profile.screen_class(), ScreenClass::XClassPhone);
    }

    #[test]
    fn test_idiom_labels_and_default() {
        assert_eq!(Idiom::default(), Idiom::Phone);
        assert_eq!(Idiom::Phone.to_string(), "phone");
        assert_eq!(Idiom::Tablet.to_string(), "tablet");
        assert!(Idiom::Tablet.is_tablet());
        assert!(!Idiom::Phone.is_tablet());
    }
}
