//! # LPA Core
//!
//! Platform-independent playback engine for the agent-based label
//! propagation animation.
//!
//! This crate contains pure state machines and data with **zero I/O
//! dependencies**. Time is an input: every call that can schedule the
//! auto-advance tick takes the current time in milliseconds, and the
//! platform layer decides how to wait for the reported deadline.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  lpa-core (platform-independent, no tokio/async deps)       │
//! │  ├── sequencer/          (frame sequencer state machine)    │
//! │  ├── label_propagation/  (graph, frame model, demo trace)   │
//! │  └── error/              (SequencerError)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              ▲
//!                 ┌────────────┴────────────┐
//!                 │  lpa-player             │
//!                 │  (tokio task, CLI)      │
//!                 └─────────────────────────┘
//! ```
//!
//! ## Key Modules
//!
//! - [`sequencer`] - Cyclic traversal of a fixed frame sequence with a single
//!   pending auto-advance tick
//! - [`label_propagation`] - The fixed five vertex graph and the scripted
//!   12-frame trace
//! - [`error`] - Error types
//!
//! ## Example: Driving the Sequencer
//!
//! ```rust
//! use lpa_core::{demo_trace, FrameSequencer, SequencerOptions};
//!
//! let options = SequencerOptions { interval_ms: 1000, ..Default::default() };
//! let mut seq = FrameSequencer::new(demo_trace(), options, 0).unwrap();
//!
//! assert_eq!(seq.poll(2500), 2);
//! assert_eq!(seq.progress(), (2, 12));
//! println!("{}", seq.current_frame().description);
//!
//! seq.set_playing(false, 2500);
//! assert_eq!(seq.pending_tick_ms(), None);
//! ```

pub mod error;
pub mod label_propagation;
pub mod sequencer;

// Re-export commonly used types
pub use error::SequencerError;
pub use label_propagation::{demo_trace, Frame, Graph, Phase};
pub use sequencer::{
    FrameSequencer, IntervalRange, PlaybackMode, PlaybackState, PlaybackStatus, SequencerOptions,
};
