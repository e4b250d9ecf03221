//! Frame playback - drives a [`FrameSequencer`] from a tokio task.
//!
//! The task owns the sequencer. Handles talk to it over a command channel,
//! so navigation and the auto-advance tick are applied one at a time and in
//! order. The only timer is a single `sleep_until` on the deadline the
//! sequencer reports; it is rebuilt on every loop iteration and thus follows
//! every change of position, play flag or interval.

use log::{debug, info, trace, warn};
use std::future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::time::{sleep_until, Instant};

use lpa_core::{FrameSequencer, PlaybackStatus, SequencerOptions};

use crate::error::PlayerError;

/// Frame updates buffered per subscriber before it starts lagging
const UPDATE_CHANNEL_CAPACITY: usize = 32;

/// Current frame together with the playback status.
///
/// Broadcast after every state change and returned by
/// [`FramePlayer::snapshot`].
#[derive(Debug)]
pub struct FrameUpdate<T> {
    pub status: PlaybackStatus,
    pub frame: Arc<T>,
}

impl<T> Clone for FrameUpdate<T> {
    fn clone(&self) -> Self {
        FrameUpdate {
            status: self.status.clone(),
            frame: Arc::clone(&self.frame),
        }
    }
}

enum Command<T> {
    Next,
    Previous,
    Rewind,
    SetPlaying(bool),
    TogglePlaying,
    SetInterval(u64),
    AdjustInterval(i64),
    Snapshot(oneshot::Sender<FrameUpdate<T>>),
    Dispose,
}

/// Handle to a running playback task.
///
/// Cloning is cheap; all clones control the same task. The task ends when
/// [`FramePlayer::dispose`] is called or the last handle is dropped.
pub struct FramePlayer<T> {
    command_tx: mpsc::UnboundedSender<Command<T>>,
    update_tx: broadcast::Sender<FrameUpdate<T>>,
    disposed: Arc<AtomicBool>,
}

impl<T> Clone for FramePlayer<T> {
    fn clone(&self) -> Self {
        FramePlayer {
            command_tx: self.command_tx.clone(),
            update_tx: self.update_tx.clone(),
            disposed: self.disposed.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> FramePlayer<T> {
    /// Create the sequencer and start the playback task.
    ///
    /// Fails before anything is spawned if the sequencer rejects the input.
    /// Must be called from within a tokio runtime.
    pub fn spawn(frames: Vec<T>, options: SequencerOptions) -> Result<Self, PlayerError> {
        let start = Instant::now();
        let frames: Vec<Arc<T>> = frames.into_iter().map(Arc::new).collect();
        let sequencer = FrameSequencer::new(frames, options, 0)?;

        info!(
            "Starting playback: {} frames, {}ms interval, {}",
            sequencer.len(),
            sequencer.interval_ms(),
            sequencer.mode()
        );

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (update_tx, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        let disposed = Arc::new(AtomicBool::new(false));

        tokio::spawn(playback_task(
            sequencer,
            start,
            command_rx,
            update_tx.clone(),
            disposed.clone(),
        ));

        Ok(FramePlayer {
            command_tx,
            update_tx,
            disposed,
        })
    }
}

impl<T> FramePlayer<T> {
    /// Advance one frame
    pub fn next(&self) {
        self.send(Command::Next);
    }

    /// Go back one frame
    pub fn previous(&self) {
        self.send(Command::Previous);
    }

    /// Jump to the first frame
    pub fn rewind(&self) {
        self.send(Command::Rewind);
    }

    /// Start or stop auto-advance
    pub fn set_playing(&self, playing: bool) {
        self.send(Command::SetPlaying(playing));
    }

    pub fn toggle_playing(&self) {
        self.send(Command::TogglePlaying);
    }

    /// Set the auto-advance interval; clamped by the sequencer
    pub fn set_interval_ms(&self, interval_ms: u64) {
        self.send(Command::SetInterval(interval_ms));
    }

    /// Change the auto-advance interval relative to the current one
    pub fn adjust_interval_ms(&self, delta_ms: i64) {
        self.send(Command::AdjustInterval(delta_ms));
    }

    /// Receive a [`FrameUpdate`] after every state change
    pub fn subscribe(&self) -> broadcast::Receiver<FrameUpdate<T>> {
        self.update_tx.subscribe()
    }

    /// Current frame and status, after all previously sent commands
    pub async fn snapshot(&self) -> Result<FrameUpdate<T>, PlayerError> {
        if self.is_disposed() {
            return Err(PlayerError::Disposed);
        }
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(Command::Snapshot(reply_tx))
            .map_err(|_| PlayerError::Disposed)?;
        reply_rx.await.map_err(|_| PlayerError::Disposed)
    }

    /// Stop playback for good. Safe to call more than once.
    pub fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            debug!("Disposing player");
            let _ = self.command_tx.send(Command::Dispose);
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    fn send(&self, command: Command<T>) {
        if self.is_disposed() {
            debug!("Player disposed, ignoring command");
            return;
        }
        if self.command_tx.send(command).is_err() {
            debug!("Playback task has finished, ignoring command");
        }
    }
}

/// Playback task that runs in the background
async fn playback_task<T>(
    mut sequencer: FrameSequencer<Arc<T>>,
    start: Instant,
    mut command_rx: mpsc::UnboundedReceiver<Command<T>>,
    update_tx: broadcast::Sender<FrameUpdate<T>>,
    disposed: Arc<AtomicBool>,
) {
    let now_ms = || start.elapsed().as_millis() as u64;
    debug!("Playback task started");

    loop {
        let deadline = sequencer
            .pending_tick_ms()
            .map(|due_ms| start + Duration::from_millis(due_ms));

        tokio::select! {
            // A due tick is applied before any queued command
            biased;

            _ = wait_until(deadline) => {
                let fired = sequencer.poll(now_ms());
                if fired > 1 {
                    warn!(
                        "Playback fell behind, advanced {} frames at once ({} not shown)",
                        fired,
                        fired - 1
                    );
                }
                if fired > 0 {
                    trace!("Tick: frame {}/{}", sequencer.current_index() + 1, sequencer.len());
                    publish(&update_tx, &sequencer);
                }
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    debug!("All player handles dropped");
                    break;
                };
                if !handle_command(&mut sequencer, command, now_ms(), &update_tx) {
                    break;
                }
            }
        }
    }

    sequencer.dispose();
    disposed.store(true, Ordering::SeqCst);
    info!("Playback finished");
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending().await,
    }
}

/// Apply one command. Returns `false` once the task should stop.
fn handle_command<T>(
    sequencer: &mut FrameSequencer<Arc<T>>,
    command: Command<T>,
    current_time_ms: u64,
    update_tx: &broadcast::Sender<FrameUpdate<T>>,
) -> bool {
    match command {
        Command::Next => sequencer.next(current_time_ms),
        Command::Previous => sequencer.previous(current_time_ms),
        Command::Rewind => sequencer.rewind(current_time_ms),
        Command::SetPlaying(playing) => {
            if !sequencer.set_playing(playing, current_time_ms) {
                return true;
            }
            debug!("Playback {}", sequencer.mode());
        }
        Command::TogglePlaying => {
            sequencer.toggle_playing(current_time_ms);
            debug!("Playback {}", sequencer.mode());
        }
        Command::SetInterval(interval_ms) => {
            let applied = sequencer.set_interval_ms(interval_ms, current_time_ms);
            debug!("Interval set to {}ms (requested {}ms)", applied, interval_ms);
        }
        Command::AdjustInterval(delta_ms) => {
            let applied = sequencer.adjust_interval_ms(delta_ms, current_time_ms);
            debug!("Interval set to {}ms", applied);
        }
        Command::Snapshot(reply_tx) => {
            let _ = reply_tx.send(snapshot(sequencer));
            return true;
        }
        Command::Dispose => {
            sequencer.dispose();
            publish(update_tx, sequencer);
            return false;
        }
    }
    publish(update_tx, sequencer);
    true
}

fn snapshot<T>(sequencer: &FrameSequencer<Arc<T>>) -> FrameUpdate<T> {
    FrameUpdate {
        status: sequencer.status(),
        frame: Arc::clone(sequencer.current_frame()),
    }
}

fn publish<T>(update_tx: &broadcast::Sender<FrameUpdate<T>>, sequencer: &FrameSequencer<Arc<T>>) {
    if let Err(e) = update_tx.send(snapshot(sequencer)) {
        // No subscribers - nothing is rendering right now
        trace!("No receivers for frame update: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpa_core::{PlaybackMode, SequencerError};
    use tokio::sync::broadcast::error::TryRecvError;
    use tokio::time::advance;

    fn options(interval_ms: u64, autoplay: bool) -> SequencerOptions {
        SequencerOptions {
            interval_ms,
            autoplay,
            ..Default::default()
        }
    }

    fn twelve_frames(interval_ms: u64, autoplay: bool) -> FramePlayer<usize> {
        FramePlayer::spawn((0..12).collect(), options(interval_ms, autoplay)).unwrap()
    }

    async fn index(player: &FramePlayer<usize>) -> usize {
        player.snapshot().await.unwrap().status.index
    }

    #[tokio::test]
    async fn test_spawn_rejects_empty_sequence() {
        let result = FramePlayer::<u8>::spawn(Vec::new(), SequencerOptions::default());
        assert!(matches!(
            result,
            Err(PlayerError::Sequencer(SequencerError::InvalidConfiguration(_)))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_timing() {
        let player = twelve_frames(1000, true);
        assert_eq!(index(&player).await, 0);

        advance(Duration::from_millis(999)).await;
        assert_eq!(index(&player).await, 0);

        advance(Duration::from_millis(1)).await;
        assert_eq!(index(&player).await, 1);

        // t = 2500: two ticks, not three
        advance(Duration::from_millis(1500)).await;
        assert_eq!(index(&player).await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_frame_payload() {
        let player = FramePlayer::spawn(vec!["A", "B", "C"], options(1000, false)).unwrap();
        player.next();
        player.next();
        player.next();
        player.previous();
        let update = player.snapshot().await.unwrap();
        assert_eq!(*update.frame, "C");
        assert_eq!(update.status.index, 2);
        assert_eq!(update.status.step, 3);
        assert_eq!(update.status.frame_count, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_ticks() {
        let player = twelve_frames(1000, true);
        player.set_playing(false);
        let update = player.snapshot().await.unwrap();
        assert_eq!(update.status.state, PlaybackMode::Paused);
        assert!(!update.status.tick_pending);

        advance(Duration::from_secs(10)).await;
        assert_eq!(index(&player).await, 0);

        player.next();
        let update = player.snapshot().await.unwrap();
        assert_eq!(update.status.index, 1);
        assert!(!update.status.tick_pending);

        advance(Duration::from_secs(10)).await;
        assert_eq!(index(&player).await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_play_keeps_single_tick() {
        let player = twelve_frames(1000, false);
        player.set_playing(true);
        assert!(player.snapshot().await.unwrap().status.tick_pending);

        advance(Duration::from_millis(500)).await;
        player.set_playing(true);
        assert!(player.snapshot().await.unwrap().status.tick_pending);

        // Still the tick scheduled at t = 0
        advance(Duration::from_millis(500)).await;
        assert_eq!(index(&player).await, 1);

        advance(Duration::from_millis(1000)).await;
        assert_eq!(index(&player).await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_restarts_wait() {
        let player = twelve_frames(1000, true);
        advance(Duration::from_millis(900)).await;
        player.next();
        assert_eq!(index(&player).await, 1);

        advance(Duration::from_millis(100)).await;
        assert_eq!(index(&player).await, 1);

        advance(Duration::from_millis(900)).await;
        assert_eq!(index(&player).await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_interval_reschedules() {
        let player = twelve_frames(3000, true);
        advance(Duration::from_millis(2900)).await;
        player.set_interval_ms(500);
        let update = player.snapshot().await.unwrap();
        assert_eq!(update.status.interval_ms, 500);

        advance(Duration::from_millis(100)).await;
        assert_eq!(index(&player).await, 0);

        advance(Duration::from_millis(400)).await;
        assert_eq!(index(&player).await, 1);

        player.set_interval_ms(50);
        player.adjust_interval_ms(10_000);
        let update = player.snapshot().await.unwrap();
        assert_eq!(update.status.interval_ms, 3000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_updates_broadcast() {
        let player = twelve_frames(1000, true);
        let mut rx = player.subscribe();

        player.next();
        let update = rx.recv().await.unwrap();
        assert_eq!(update.status.index, 1);
        assert_eq!(*update.frame, 1);

        // Nothing else is runnable, so the paused clock jumps to the tick
        let update = rx.recv().await.unwrap();
        assert_eq!(update.status.index, 2);

        player.set_playing(false);
        let update = rx.recv().await.unwrap();
        assert_eq!(update.status.state, PlaybackMode::Paused);

        // No-op commands do not publish
        player.set_playing(false);
        player.snapshot().await.unwrap();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_stops_playback() {
        let player = twelve_frames(500, true);
        let mut rx = player.subscribe();
        let other = player.clone();

        player.dispose();
        player.dispose();
        assert!(player.is_disposed());
        assert!(other.is_disposed());

        let update = rx.recv().await.unwrap();
        assert_eq!(update.status.state, PlaybackMode::Disposed);
        assert!(!update.status.tick_pending);

        other.next();
        other.set_playing(true);
        advance(Duration::from_secs(10)).await;
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert!(matches!(other.snapshot().await, Err(PlayerError::Disposed)));
    }
}
