//! Player configuration.
//!
//! Settings are read from `config.json` in the platform config directory
//! (`~/.config/lpa-player/config.json` on Linux) unless `--config` names a
//! different file. Every field is optional; command line flags override the
//! file.
//!
//! ```json
//! {
//!   "intervalMs": 1000,
//!   "minIntervalMs": 500,
//!   "maxIntervalMs": 3000,
//!   "autoplay": true,
//!   "speedStepMs": 250
//! }
//! ```

use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use lpa_core::sequencer::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use lpa_core::{IntervalRange, SequencerError, SequencerOptions};

use crate::error::PlayerError;
use crate::Cli;

/// Step used by the faster/slower controls (milliseconds)
pub const DEFAULT_SPEED_STEP_MS: u64 = 250;

const CONFIG_FILE: &str = "config.json";

pub fn get_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "lpa", "lpa-player")
}

/// Location of the default config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    get_project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Auto-advance interval at startup
    pub interval_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Start playing immediately
    pub autoplay: bool,
    /// Interval change per faster/slower command
    pub speed_step_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            interval_ms: DEFAULT_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            max_interval_ms: MAX_INTERVAL_MS,
            autoplay: true,
            speed_step_ms: DEFAULT_SPEED_STEP_MS,
        }
    }
}

impl PlayerConfig {
    /// Load the config for this invocation.
    ///
    /// An explicitly given file must exist. The default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, PlayerError> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(PlayerError::ConfigNotFound(path.to_path_buf()));
                }
                Self::from_file(path)
            }
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                Some(path) => {
                    debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
                None => {
                    debug!("No config directory on this platform, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, PlayerError> {
        let file = File::open(path).map_err(|source| PlayerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: PlayerConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PlayerError::ParseJson(format!("{}: {}", path.display(), e)))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_cli(mut self, args: &Cli) -> Self {
        if let Some(interval_ms) = args.interval_ms {
            self.interval_ms = interval_ms;
        }
        if args.paused {
            self.autoplay = false;
        }
        self
    }

    /// Sequencer options; fails if the interval bounds are not a valid range.
    pub fn sequencer_options(&self) -> Result<SequencerOptions, SequencerError> {
        let interval_range = IntervalRange::new(self.min_interval_ms, self.max_interval_ms)?;
        if !interval_range.contains(self.interval_ms) {
            log::warn!(
                "Interval {}ms is outside {}..={}ms, clamping",
                self.interval_ms,
                self.min_interval_ms,
                self.max_interval_ms
            );
        }
        Ok(SequencerOptions {
            interval_ms: self.interval_ms,
            autoplay: self.autoplay,
            interval_range,
        })
    }
}
