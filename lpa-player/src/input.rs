//! Line based playback controls read from stdin.

use log::{debug, info, warn};
use std::io::{self, BufRead};
use std::thread;
use tokio::sync::mpsc;
use tokio_graceful_shutdown::SubsystemHandle;

use lpa_core::Frame;

use crate::error::PlayerError;
use crate::player::FramePlayer;
use crate::render::{render, OutputFormat};

pub const HELP: &str = "\
Controls (one per line):
  n, next          next frame
  p, prev          previous frame
  <enter>, t       toggle play/pause
  play, pause      start or stop auto-advance
  +, faster        shorter interval
  -, slower        longer interval
  speed <ms>       set interval in milliseconds
  r, rewind        back to the first frame
  s, status        print the current frame again
  h, help          this text
  q, quit          exit";

/// A parsed control line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Next,
    Previous,
    Toggle,
    Play,
    Pause,
    Faster,
    Slower,
    Speed(u64),
    Rewind,
    Status,
    Help,
    Quit,
}

impl std::str::FromStr for ControlCommand {
    type Err = PlayerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(ControlCommand::Toggle);
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "n" | "next" => ControlCommand::Next,
            "p" | "prev" | "previous" => ControlCommand::Previous,
            "t" | "toggle" => ControlCommand::Toggle,
            "play" => ControlCommand::Play,
            "pause" => ControlCommand::Pause,
            "+" | "faster" => ControlCommand::Faster,
            "-" | "slower" => ControlCommand::Slower,
            "speed" => {
                let value = words.next().unwrap_or_default();
                let interval_ms = value
                    .parse()
                    .map_err(|_| PlayerError::InvalidArgument(value.to_string(), word.to_string()))?;
                ControlCommand::Speed(interval_ms)
            }
            "r" | "rewind" => ControlCommand::Rewind,
            "s" | "status" => ControlCommand::Status,
            "h" | "help" | "?" => ControlCommand::Help,
            "q" | "quit" | "exit" => ControlCommand::Quit,
            _ => return Err(PlayerError::UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

/// What the caller has to do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    PrintStatus,
    PrintHelp,
    Quit,
}

/// Forward a command to the player.
pub fn apply<T>(player: &FramePlayer<T>, command: ControlCommand, speed_step_ms: u64) -> Outcome {
    let step = i64::try_from(speed_step_ms).unwrap_or(i64::MAX);
    match command {
        ControlCommand::Next => player.next(),
        ControlCommand::Previous => player.previous(),
        ControlCommand::Toggle => player.toggle_playing(),
        ControlCommand::Play => player.set_playing(true),
        ControlCommand::Pause => player.set_playing(false),
        ControlCommand::Faster => player.adjust_interval_ms(-step),
        ControlCommand::Slower => player.adjust_interval_ms(step),
        ControlCommand::Speed(interval_ms) => player.set_interval_ms(interval_ms),
        ControlCommand::Rewind => player.rewind(),
        ControlCommand::Status => return Outcome::PrintStatus,
        ControlCommand::Help => return Outcome::PrintHelp,
        ControlCommand::Quit => return Outcome::Quit,
    }
    Outcome::Continue
}

/// Read stdin on a plain thread so a pending read never holds up runtime shutdown.
fn spawn_stdin_reader() -> mpsc::Receiver<io::Result<String>> {
    let (line_tx, line_rx) = mpsc::channel(16);
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if line_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    line_rx
}

/// Read controls from stdin until shutdown, `quit` or end of input.
pub async fn run(
    subsys: SubsystemHandle,
    player: FramePlayer<Frame>,
    speed_step_ms: u64,
    format: OutputFormat,
) -> Result<(), PlayerError> {
    let lines = spawn_stdin_reader();
    debug!("Reading controls from stdin");

    tokio::select! {
        _ = subsys.on_shutdown_requested() => {}
        quit = read_controls(lines, &player, speed_step_ms, format) => {
            if quit? {
                info!("Quit requested");
                subsys.request_shutdown();
            }
        }
    }
    Ok(())
}

/// Apply control lines until `quit` (returns `true`) or end of input.
///
/// Lines that are not valid UTF-8 are reported and skipped, like unknown
/// commands. Any other read error ends the controls.
async fn read_controls(
    mut lines: mpsc::Receiver<io::Result<String>>,
    player: &FramePlayer<Frame>,
    speed_step_ms: u64,
    format: OutputFormat,
) -> Result<bool, PlayerError> {
    while let Some(line) = lines.recv().await {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Ignoring unreadable input line: {}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let command = match line.parse::<ControlCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };
        match apply(player, command, speed_step_ms) {
            Outcome::Continue => {}
            Outcome::PrintStatus => match player.snapshot().await {
                Ok(update) => println!("{}", render(format, &update)),
                Err(e) => warn!("{}", e),
            },
            Outcome::PrintHelp => println!("{}", HELP),
            Outcome::Quit => return Ok(true),
        }
    }
    debug!("End of input, controls disabled");
    Ok(false)
}
