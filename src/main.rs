//! termalert - interactive demo for the modal alert component
//!
//! This is the binary entry point. The component itself lives in the
//! termalert-core and termalert-tui crates; this binary wires it into a
//! real event loop.

use clap::Parser;

use termalert_core::prelude::*;
use termalert_core::{logging, Idiom};

mod app;
mod config;
mod event;
mod message;
mod render;
mod runner;
mod signals;
mod terminal;
mod update;

/// Interactive demo for the termalert modal alert component
#[derive(Parser, Debug)]
#[command(name = "termalert")]
#[command(about = "Modal alert component demo for the terminal", long_about = None)]
struct Args {
    /// Present against a tablet-class display (fixed-width cards)
    #[arg(long)]
    tablet: bool,

    /// Poll timeout between animation ticks, in milliseconds
    #[arg(long, value_name = "MS")]
    tick_rate: Option<u64>,

    /// Don't capture mouse presses
    #[arg(long)]
    no_mouse: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let mut settings = config::load_settings();
    if args.tablet {
        settings.display.idiom = Idiom::Tablet;
    }
    if let Some(ms) = args.tick_rate {
        settings.ui.tick_rate_ms = ms;
    }
    if args.no_mouse {
        settings.ui.mouse = false;
    }

    info!(
        idiom = %settings.display.idiom,
        tick_rate_ms = settings.ui.tick_rate_ms,
        mouse = settings.ui.mouse,
        "Demo starting"
    );

    let result = runner::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Demo exiting");
    result
}
