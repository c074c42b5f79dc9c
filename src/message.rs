//! Message types for the demo application (TEA pattern)

use crossterm::event::KeyEvent;

/// All possible messages/actions in the demo
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Left mouse press at terminal coordinates
    Click { column: u16, row: u16 },

    /// Tick event for animations
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Alert Messages
    // ─────────────────────────────────────────────────────────
    /// Present the plain-text demo alert
    PresentPlain,
    /// Present the styled demo alert
    PresentStyled,
    /// Register one more button on the live alert
    AddAction,
    /// Move the button highlight down
    SelectNext,
    /// Move the button highlight up
    SelectPrevious,
    /// Activate the highlighted button
    ActivateSelected,
    /// Tap the button at a stack index (number-row shortcut)
    TapButton { index: usize },
    /// Close the alert without running a handler
    DismissAlert,
    /// A button handler ran
    ActionInvoked { label: String },
}
