//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use termalert_core::prelude::*;

use crate::message::Message;

/// Poll for terminal events with timeout
pub fn poll(tick_rate: Duration) -> Result<Option<Message>> {
    if event::poll(tick_rate)? {
        match event::read()? {
            Event::Key(key) => {
                // Windows and kitty also deliver Release/Repeat; act on Press only
                if key.kind == KeyEventKind::Press {
                    Ok(Some(Message::Key(key)))
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    Ok(Some(Message::Click {
                        column: mouse.column,
                        row: mouse.row,
                    }))
                } else {
                    Ok(None)
                }
            }
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for the entrance animation
        Ok(Some(Message::Tick))
    }
}
