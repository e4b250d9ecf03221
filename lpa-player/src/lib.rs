//! # LPA Player
//!
//! Terminal player for the agent-based label propagation animation.
//!
//! This crate runs the [`lpa_core`] frame sequencer in a tokio task, prints
//! every frame change and takes playback controls from stdin.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    lpa-player                           │
//! │  ┌─────────────┐  ┌─────────────┐  ┌──────────────────┐ │
//! │  │ Controls    │  │ Renderer    │  │ Config / CLI     │ │
//! │  │ (stdin)     │  │ (text/json) │  │ (serde, clap)    │ │
//! │  └──────┬──────┘  └──────▲──────┘  └──────────────────┘ │
//! │         │ commands       │ broadcast                    │
//! │         ▼                │                              │
//! │  ┌─────────────────────────────────────────────────────┐│
//! │  │              FramePlayer (tokio task)               ││
//! │  │  - Owns the FrameSequencer                          ││
//! │  │  - Single sleep_until on the pending tick           ││
//! │  └─────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! - [`player::FramePlayer`] - Handle to the playback task
//! - [`config::PlayerConfig`] - Config file and defaults
//! - [`input`] - Control line parsing and the stdin loop
//! - [`render`] - Text and JSON output
//!
//! ## Example: Embedding the Player
//!
//! ```rust,no_run
//! use lpa_core::{demo_trace, SequencerOptions};
//! use lpa_player::player::FramePlayer;
//!
//! #[tokio::main]
//! async fn main() {
//!     let player = FramePlayer::spawn(demo_trace(), SequencerOptions::default()).unwrap();
//!     let mut updates = player.subscribe();
//!     player.next();
//!     while let Ok(update) = updates.recv().await {
//!         println!("{}: {}", update.status.step, update.frame.description);
//!     }
//! }
//! ```
//!
//! ## Command-Line Interface
//!
//! See [`Cli`] for all available options. Key options:
//!
//! - `--interval-ms` - Auto-advance interval (clamped to 500..=3000)
//! - `--paused` - Start without auto-advance
//! - `--format json` - Machine readable output
//! - `-v` - Increase verbosity (use multiple times)

use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use tokio::sync::broadcast::error::RecvError;
use tokio_graceful_shutdown::{SubsystemBuilder, SubsystemHandle};

use lpa_core::demo_trace;

pub mod config;
pub mod error;
pub mod input;
pub mod player;
pub mod render;

pub use config::PlayerConfig;
pub use error::PlayerError;
pub use player::{FramePlayer, FrameUpdate};
pub use render::OutputFormat;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Clone, Debug)]
#[command(version, about)]
pub struct Cli {
    #[clap(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    /// Auto-advance interval in milliseconds
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Start paused
    #[arg(long, default_value_t = false)]
    pub paused: bool,

    /// Config file (default: config.json in the user config directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value_t, value_enum)]
    pub format: OutputFormat,

    /// Do not read controls from stdin
    #[arg(long, default_value_t = false)]
    pub no_input: bool,
}

/// Playback subsystem: starts the player, the optional stdin controls, and
/// prints frame updates until shutdown.
pub async fn run(
    subsys: SubsystemHandle,
    args: Cli,
    config: PlayerConfig,
) -> Result<(), PlayerError> {
    let options = config.sequencer_options()?;
    let player = FramePlayer::spawn(demo_trace(), options)?;
    let mut updates = player.subscribe();
    let format = args.format;

    if format == OutputFormat::Text {
        println!("{}\n", render::INTRO);
    }
    let initial = player.snapshot().await?;
    println!("{}", render::render(format, &initial));

    if args.no_input {
        info!("Controls disabled");
    } else {
        if format == OutputFormat::Text {
            println!("{}\n", input::HELP);
        }
        let controls = player.clone();
        let speed_step_ms = config.speed_step_ms;
        subsys.start(SubsystemBuilder::new("Controls", move |s| {
            input::run(s, controls, speed_step_ms, format)
        }));
    }

    loop {
        tokio::select! {
            _ = subsys.on_shutdown_requested() => {
                info!("Shutdown requested");
                break;
            }
            update = updates.recv() => match update {
                Ok(update) => println!("{}", render::render(format, &update)),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Renderer fell behind, skipped {} frames", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    player.dispose();
    Ok(())
}
