//! Error types for the frame sequencer

use thiserror::Error;

/// Errors that can occur when setting up a sequencer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequencerError {
    /// The sequencer cannot be started with the given input
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SequencerError {
    pub(crate) fn empty_sequence() -> Self {
        SequencerError::InvalidConfiguration("frame sequence is empty".to_string())
    }

    pub(crate) fn invalid_range(min_ms: u64, max_ms: u64) -> Self {
        SequencerError::InvalidConfiguration(format!(
            "interval range {}..={} ms is not valid",
            min_ms, max_ms
        ))
    }
}
