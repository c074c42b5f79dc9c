//! Live display profile backed by the attached terminal

use crossterm::terminal;
use termalert_core::display::{DisplayProfile, Idiom};
use termalert_core::prelude::*;

/// [`DisplayProfile`] that probes the attached terminal.
///
/// Columns come from the terminal size and the native pixel height from the
/// window-size report, on terminals that fill it in. Terminals carry no
/// hardware idiom, so the embedder picks one; phone is the default and
/// keeps the card at a fraction of the window width.
#[derive(Debug, Clone, Copy)]
pub struct TerminalDisplay {
    idiom: Idiom,
}

impl TerminalDisplay {
    pub fn new(idiom: Idiom) -> Self {
        Self { idiom }
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new(Idiom::Phone)
    }
}

impl DisplayProfile for TerminalDisplay {
    fn columns(&self) -> u16 {
        match terminal::size() {
            Ok((columns, _)) => columns,
            Err(err) => {
                warn!(%err, "terminal size unavailable, assuming 80 columns");
                80
            }
        }
    }

    fn native_height_px(&self) -> Option<u32> {
        match terminal::window_size() {
            // Most terminals report 0 pixels; treat that as "not reported".
            Ok(size) if size.height > 0 => Some(u32::from(size.height)),
            Ok(_) => None,
            Err(err) => {
                debug!(%err, "window pixel size unavailable");
                None
            }
        }
    }

    fn idiom(&self) -> Idiom {
        self.idiom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_idiom_is_phone() {
        assert_eq!(TerminalDisplay::default().idiom(), Idiom::Phone);
        assert_eq!(TerminalDisplay::new(Idiom::Tablet).idiom(), Idiom::Tablet);
    }

    #[test]
    fn test_probing_never_panics_without_a_tty() {
        let display = TerminalDisplay::default();
        let _ = display.columns();
        let _ = display.native_height_px();
        let _ = display.screen_class();
    }
}
