//! File-backed tracing setup for the workspace
//!
//! The demo runs full-screen, so logs go to a daily rolling file instead of
//! stderr. Set `TERMALERT_LOG` to override the per-crate defaults, e.g.
//! `TERMALERT_LOG=termalert_tui=trace`.

use std::fs;
use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem.
///
/// Logs land under the platform data directory, `termalert/logs/` (on Linux
/// `~/.local/share/termalert/logs/`).
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "termalert.log");
    let timestamps = fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".into());

    // Each workspace crate is its own filter target.
    let filter = EnvFilter::try_from_env("TERMALERT_LOG").unwrap_or_else(|_| {
        EnvFilter::new("termalert=info,termalert_core=info,termalert_tui=info,warn")
    });

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_timer(timestamps);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!("═══════════════════════════════════════════════");
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "termalert starting");
    tracing::info!(dir = %log_dir.display(), "Logging to a daily rolling file");
    tracing::info!("═══════════════════════════════════════════════");

    Ok(())
}

fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("termalert")
        .join("logs")
}
