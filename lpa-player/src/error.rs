use std::path::PathBuf;

use lpa_core::SequencerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("I/O operation failed")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Sequencer(#[from] SequencerError),
    #[error("Config file '{0}' does not exist")]
    ConfigNotFound(PathBuf),
    #[error("Cannot read config file '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse JSON '{0}'")]
    ParseJson(String),
    #[error("Unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),
    #[error("Invalid value '{0}' for command '{1}'")]
    InvalidArgument(String, String),
    #[error("Player has been disposed")]
    Disposed,
}
