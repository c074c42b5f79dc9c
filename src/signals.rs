//! SIGINT/SIGTERM turn into quit messages so teardown stays in one place

use tokio::sync::mpsc;

use termalert_core::prelude::*;

use crate::message::Message;

/// Forward the first termination signal to the update loop as a quit message.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match wait_for_signal().await {
            Ok(name) => {
                info!(signal = name, "Shutting down");
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Signal listener unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    let name = tokio::select! {
        _ = sigint.recv() => "SIGINT",
        _ = sigterm.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("ctrl-c")
}
