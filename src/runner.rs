//! Demo lifecycle and event loop
//!
//! - `run`: set up the terminal, channels, and signal handler, then loop
//! - `run_loop`: drain external messages, draw, poll terminal events

use std::time::Duration;

use tokio::sync::mpsc;

use termalert_core::prelude::*;

use crate::app::DemoApp;
use crate::config::Settings;
use crate::message::Message;
use crate::{event, render, signals, terminal, update};

/// Run the demo TUI until quit
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mouse_requested = settings.ui.mouse;
    let mouse = capture_mouse(mouse_requested);

    // Unified message channel (signal handler, button handlers)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    let mut app = DemoApp::new(settings, msg_tx);
    app.log("ready: p presents a plain alert, s a styled one, q quits");
    if mouse_requested && !mouse {
        app.log("mouse capture unavailable, clicks are off");
    }

    let result = run_loop(&mut term, &mut app, msg_rx, tick_rate);

    if mouse {
        let _ = terminal::disable_mouse();
    }
    ratatui::restore();

    result
}

/// Try to start mouse reporting; a refusal downgrades to keyboard-only
fn capture_mouse(requested: bool) -> bool {
    if !requested {
        return false;
    }
    match terminal::enable_mouse() {
        Ok(()) => true,
        Err(e) => {
            warn!("Mouse capture unavailable: {}", e);
            false
        }
    }
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut DemoApp,
    mut msg_rx: mpsc::Receiver<Message>,
    tick_rate: Duration,
) -> Result<()> {
    while !app.should_quit {
        // Process external messages (signal handler, button handlers)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(app, msg);
        }

        // Render, remembering the frame area for mouse hit-testing
        terminal.draw(|frame| {
            app.viewport = frame.area();
            render::view(frame, app);
        })?;

        // Handle terminal events
        if let Some(message) = event::poll(tick_rate)? {
            process_message(app, message);
        }
    }

    Ok(())
}

/// Process a message and any follow-ups through the update function
fn process_message(app: &mut DemoApp, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update::update(app, m);
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_capture_is_best_effort() {
        // Keyboard-only sessions never emit the capture sequence
        assert!(!capture_mouse(false));

        // A refusal reports unavailability instead of aborting setup; when
        // the terminal accepts the sequence, hand it back
        if capture_mouse(true) {
            let _ = terminal::disable_mouse();
        }
    }
}
