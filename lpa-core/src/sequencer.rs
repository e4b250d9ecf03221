//! Frame sequencer state machine.
//!
//! This module provides platform-independent playback of a fixed sequence of
//! frames. It owns the frames, the current position, the play/pause flag and
//! the auto-advance interval, and it tracks the single outstanding
//! auto-advance tick as a deadline.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  FrameSequencer (this module)                               │
//! │  - Pure state transitions, no I/O, no timers of its own     │
//! │  - Time is passed in as milliseconds since start            │
//! │  - At most one pending tick deadline                        │
//! └─────────────────────────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Runtime driver (lpa-player)                                │
//! │  - Sleeps until pending_tick_ms(), then calls poll()        │
//! │  - Forwards navigation commands                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use lpa_core::sequencer::{FrameSequencer, SequencerOptions};
//!
//! let options = SequencerOptions { interval_ms: 1000, ..Default::default() };
//! let mut seq = FrameSequencer::new(vec!['a', 'b', 'c'], options, 0).unwrap();
//! assert_eq!(seq.pending_tick_ms(), Some(1000));
//!
//! // The driver wakes up at t=1000 and lets the sequencer fire the tick
//! assert_eq!(seq.poll(1000), 1);
//! assert_eq!(*seq.current_frame(), 'b');
//!
//! // Explicit navigation restarts the wait from the moment of the call
//! seq.previous(1200);
//! assert_eq!(*seq.current_frame(), 'a');
//! assert_eq!(seq.pending_tick_ms(), Some(2200));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SequencerError;

/// Default auto-advance interval (milliseconds)
pub const DEFAULT_INTERVAL_MS: u64 = 1500;

/// Shortest allowed auto-advance interval (milliseconds)
pub const MIN_INTERVAL_MS: u64 = 500;

/// Longest allowed auto-advance interval (milliseconds)
pub const MAX_INTERVAL_MS: u64 = 3000;

// =============================================================================
// Options
// =============================================================================

/// Inclusive range that the playback interval is clamped into.
///
/// Deserializing goes through [`IntervalRange::new`], so an invalid range is
/// rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IntervalBounds", rename_all = "camelCase")]
pub struct IntervalRange {
    min_ms: u64,
    max_ms: u64,
}

impl Default for IntervalRange {
    fn default() -> Self {
        IntervalRange {
            min_ms: MIN_INTERVAL_MS,
            max_ms: MAX_INTERVAL_MS,
        }
    }
}

impl IntervalRange {
    /// Create a range. The lower bound must be non-zero and not above the upper bound.
    pub fn new(min_ms: u64, max_ms: u64) -> Result<Self, SequencerError> {
        if min_ms == 0 || min_ms > max_ms {
            return Err(SequencerError::invalid_range(min_ms, max_ms));
        }
        Ok(IntervalRange { min_ms, max_ms })
    }

    pub fn min_ms(&self) -> u64 {
        self.min_ms
    }

    pub fn max_ms(&self) -> u64 {
        self.max_ms
    }

    /// Clamp an interval into this range.
    pub fn clamp(&self, interval_ms: u64) -> u64 {
        interval_ms.clamp(self.min_ms, self.max_ms)
    }

    pub fn contains(&self, interval_ms: u64) -> bool {
        (self.min_ms..=self.max_ms).contains(&interval_ms)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalBounds {
    min_ms: u64,
    max_ms: u64,
}

impl TryFrom<IntervalBounds> for IntervalRange {
    type Error = SequencerError;

    fn try_from(bounds: IntervalBounds) -> Result<Self, Self::Error> {
        IntervalRange::new(bounds.min_ms, bounds.max_ms)
    }
}

/// Options applied when a sequencer is created. Missing fields take their
/// default when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequencerOptions {
    /// Initial auto-advance interval, clamped into `interval_range`
    pub interval_ms: u64,
    /// Start auto-advancing immediately
    pub autoplay: bool,
    /// Valid interval range for the lifetime of the sequencer
    pub interval_range: IntervalRange,
}

impl Default for SequencerOptions {
    fn default() -> Self {
        SequencerOptions {
            interval_ms: DEFAULT_INTERVAL_MS,
            autoplay: true,
            interval_range: IntervalRange::default(),
        }
    }
}

// =============================================================================
// Playback State
// =============================================================================

/// Coarse playback mode, mostly for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// Auto-advance is active
    Playing,
    /// Only explicit navigation moves the position
    Paused,
    /// The sequencer has been torn down, no tick will ever fire again
    Disposed,
}

impl std::fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackMode::Playing => write!(f, "playing"),
            PlaybackMode::Paused => write!(f, "paused"),
            PlaybackMode::Disposed => write!(f, "disposed"),
        }
    }
}

/// Mutable playback state of a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Always a valid index into the frame sequence
    pub current_index: usize,
    pub is_playing: bool,
    pub interval_ms: u64,
}

/// Playback status snapshot handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatus {
    /// Current mode
    pub state: PlaybackMode,
    /// Current frame index (0-based)
    pub index: usize,
    /// Current step for display (1-based)
    pub step: usize,
    /// Total frame count
    pub frame_count: usize,
    /// Auto-advance interval in milliseconds
    pub interval_ms: u64,
    /// Whether an auto-advance tick is scheduled
    pub tick_pending: bool,
}

// =============================================================================
// Frame Sequencer
// =============================================================================

/// Cyclic traversal of a fixed, non-empty frame sequence.
///
/// This is a pure state machine with no I/O - the platform layer owns the
/// actual timer and calls [`FrameSequencer::poll`] when the deadline
/// reported by [`FrameSequencer::pending_tick_ms`] has passed.
///
/// Every operation that changes the position, the play flag or the interval
/// first drops the pending deadline and then decides whether to schedule a
/// new one, so there is never more than one tick outstanding.
#[derive(Debug, Clone)]
pub struct FrameSequencer<T> {
    frames: Vec<T>,
    state: PlaybackState,
    interval_range: IntervalRange,
    /// Deadline of the outstanding auto-advance tick (milliseconds since start)
    pending_tick_ms: Option<u64>,
    disposed: bool,
}

impl<T> FrameSequencer<T> {
    /// Create a sequencer positioned at the first frame.
    ///
    /// Fails with [`SequencerError::InvalidConfiguration`] if `frames` is
    /// empty or the interval range is not valid. With `autoplay` the first
    /// tick is scheduled one interval after `current_time_ms`.
    pub fn new(
        frames: Vec<T>,
        options: SequencerOptions,
        current_time_ms: u64,
    ) -> Result<Self, SequencerError> {
        if frames.is_empty() {
            return Err(SequencerError::empty_sequence());
        }
        let range = options.interval_range;
        let interval_range = IntervalRange::new(range.min_ms, range.max_ms)?;

        let mut sequencer = FrameSequencer {
            frames,
            state: PlaybackState {
                current_index: 0,
                is_playing: options.autoplay,
                interval_ms: interval_range.clamp(options.interval_ms),
            },
            interval_range,
            pending_tick_ms: None,
            disposed: false,
        };
        sequencer.reschedule(current_time_ms);
        Ok(sequencer)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Frame at the current position.
    pub fn current_frame(&self) -> &T {
        &self.frames[self.state.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Number of frames (never zero).
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn frames(&self) -> &[T] {
        &self.frames
    }

    /// Position and length, for progress display.
    pub fn progress(&self) -> (usize, usize) {
        (self.state.current_index, self.frames.len())
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn interval_ms(&self) -> u64 {
        self.state.interval_ms
    }

    pub fn interval_range(&self) -> IntervalRange {
        self.interval_range
    }

    /// Deadline of the pending auto-advance tick, if one is scheduled.
    pub fn pending_tick_ms(&self) -> Option<u64> {
        self.pending_tick_ms
    }

    /// Time left until the pending tick is due, zero if it is overdue.
    pub fn time_until_tick_ms(&self, current_time_ms: u64) -> Option<u64> {
        self.pending_tick_ms
            .map(|due_ms| due_ms.saturating_sub(current_time_ms))
    }

    pub fn mode(&self) -> PlaybackMode {
        if self.disposed {
            PlaybackMode::Disposed
        } else if self.state.is_playing {
            PlaybackMode::Playing
        } else {
            PlaybackMode::Paused
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            state: self.mode(),
            index: self.state.current_index,
            step: self.state.current_index + 1,
            frame_count: self.frames.len(),
            interval_ms: self.state.interval_ms,
            tick_pending: self.pending_tick_ms.is_some(),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Move to the next frame, wrapping to the first after the last.
    pub fn next(&mut self, current_time_ms: u64) {
        self.step_forward();
        self.reschedule(current_time_ms);
    }

    /// Move to the previous frame, wrapping to the last before the first.
    pub fn previous(&mut self, current_time_ms: u64) {
        let len = self.frames.len();
        self.state.current_index = (self.state.current_index + len - 1) % len;
        self.reschedule(current_time_ms);
    }

    /// Jump back to the first frame.
    pub fn rewind(&mut self, current_time_ms: u64) {
        self.state.current_index = 0;
        self.reschedule(current_time_ms);
    }

    /// Start or stop auto-advance.
    ///
    /// Returns `false` without touching the pending tick if the flag already
    /// matches, or if the sequencer has been disposed.
    pub fn set_playing(&mut self, playing: bool, current_time_ms: u64) -> bool {
        if self.disposed || self.state.is_playing == playing {
            return false;
        }
        self.state.is_playing = playing;
        self.reschedule(current_time_ms);
        true
    }

    /// Flip the play flag. Returns the new flag.
    pub fn toggle_playing(&mut self, current_time_ms: u64) -> bool {
        let playing = !self.state.is_playing;
        self.set_playing(playing, current_time_ms);
        self.state.is_playing
    }

    /// Change the auto-advance interval. Returns the clamped value in effect.
    ///
    /// While playing, the pending tick is replaced by one a full new
    /// interval after `current_time_ms`.
    pub fn set_interval_ms(&mut self, interval_ms: u64, current_time_ms: u64) -> u64 {
        self.state.interval_ms = self.interval_range.clamp(interval_ms);
        self.reschedule(current_time_ms);
        self.state.interval_ms
    }

    /// Change the interval relative to the current one.
    pub fn adjust_interval_ms(&mut self, delta_ms: i64, current_time_ms: u64) -> u64 {
        let interval_ms = self.state.interval_ms.saturating_add_signed(delta_ms);
        self.set_interval_ms(interval_ms, current_time_ms)
    }

    /// Fire every tick that is due at `current_time_ms`.
    ///
    /// Each fired tick advances one frame and schedules the following tick
    /// one interval after its own deadline. Returns the number of frames
    /// advanced.
    ///
    /// A late call fires several ticks at once, and a driver that reports
    /// the position afterwards only shows the last of them. Drivers that
    /// wake up on time see exactly one tick per call.
    pub fn poll(&mut self, current_time_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(due_ms) = self.pending_tick_ms {
            if due_ms > current_time_ms {
                break;
            }
            self.step_forward();
            self.pending_tick_ms = Some(due_ms.saturating_add(self.state.interval_ms));
            fired += 1;
        }
        fired
    }

    /// Cancel the pending tick for good. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.pending_tick_ms = None;
        self.state.is_playing = false;
        self.disposed = true;
    }

    fn step_forward(&mut self) {
        self.state.current_index = (self.state.current_index + 1) % self.frames.len();
    }

    fn reschedule(&mut self, current_time_ms: u64) {
        self.pending_tick_ms = None;
        if self.state.is_playing && !self.disposed {
            self.pending_tick_ms = Some(current_time_ms.saturating_add(self.state.interval_ms));
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn paused() -> SequencerOptions {
        SequencerOptions {
            autoplay: false,
            ..Default::default()
        }
    }

    fn sequencer(len: usize, options: SequencerOptions) -> FrameSequencer<usize> {
        FrameSequencer::new((0..len).collect(), options, 0).unwrap()
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let result = FrameSequencer::<u8>::new(Vec::new(), SequencerOptions::default(), 0);
        assert!(matches!(
            result,
            Err(SequencerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_interval_range() {
        assert!(IntervalRange::new(0, 100).is_err());
        assert!(IntervalRange::new(200, 100).is_err());
        assert!(IntervalRange::new(100, 100).is_ok());

        let options = SequencerOptions {
            interval_range: IntervalRange {
                min_ms: 3000,
                max_ms: 500,
            },
            ..Default::default()
        };
        assert!(FrameSequencer::new(vec![1], options, 0).is_err());
    }

    #[test]
    fn test_initial_state() {
        let seq = sequencer(12, SequencerOptions::default());
        assert_eq!(seq.current_index(), 0);
        assert!(seq.is_playing());
        assert_eq!(seq.interval_ms(), DEFAULT_INTERVAL_MS);
        assert_eq!(seq.pending_tick_ms(), Some(DEFAULT_INTERVAL_MS));
        assert_eq!(seq.progress(), (0, 12));
        assert_eq!(seq.mode(), PlaybackMode::Playing);

        let seq = sequencer(12, paused());
        assert!(!seq.is_playing());
        assert_eq!(seq.pending_tick_ms(), None);
        assert_eq!(seq.mode(), PlaybackMode::Paused);
    }

    #[test]
    fn test_initial_interval_clamped() {
        let options = SequencerOptions {
            interval_ms: 10,
            ..Default::default()
        };
        let seq = sequencer(3, options);
        assert_eq!(seq.interval_ms(), MIN_INTERVAL_MS);
    }

    #[test]
    fn test_single_frame() {
        let mut seq = sequencer(1, paused());
        assert_eq!(seq.current_index(), 0);
        seq.next(0);
        assert_eq!(seq.current_index(), 0);
        seq.previous(0);
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_next_k_times() {
        for len in 1..6 {
            let mut seq = sequencer(len, paused());
            for k in 1..20 {
                seq.next(0);
                assert_eq!(seq.current_index(), k % len);
            }
        }
    }

    #[test]
    fn test_previous_k_times() {
        for len in 1..6 {
            let mut seq = sequencer(len, paused());
            for k in 1..20 {
                seq.previous(0);
                assert_eq!(seq.current_index(), (len - (k % len)) % len);
            }
        }
    }

    #[test]
    fn test_round_trip_from_every_index() {
        let mut seq = sequencer(5, paused());
        for start in 0..5 {
            seq.rewind(0);
            for _ in 0..start {
                seq.next(0);
            }
            seq.next(0);
            seq.previous(0);
            assert_eq!(seq.current_index(), start);
            seq.previous(0);
            seq.next(0);
            assert_eq!(seq.current_index(), start);
        }
    }

    #[test]
    fn test_three_frame_scenario() {
        let mut seq = FrameSequencer::new(vec!["A", "B", "C"], paused(), 0).unwrap();
        seq.next(0);
        assert_eq!(*seq.current_frame(), "B");
        seq.next(0);
        assert_eq!(*seq.current_frame(), "C");
        seq.next(0);
        assert_eq!(*seq.current_frame(), "A");
        seq.previous(0);
        assert_eq!(*seq.current_frame(), "C");
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_set_playing_is_idempotent() {
        let mut seq = sequencer(3, paused());
        assert!(seq.set_playing(true, 100));
        assert_eq!(seq.pending_tick_ms(), Some(100 + DEFAULT_INTERVAL_MS));

        // A repeated call keeps the original deadline
        assert!(!seq.set_playing(true, 700));
        assert_eq!(seq.pending_tick_ms(), Some(100 + DEFAULT_INTERVAL_MS));

        assert!(seq.set_playing(false, 800));
        assert_eq!(seq.pending_tick_ms(), None);
        assert!(!seq.set_playing(false, 900));
    }

    #[test]
    fn test_toggle_playing() {
        let mut seq = sequencer(3, SequencerOptions::default());
        assert!(!seq.toggle_playing(0));
        assert!(seq.pending_tick_ms().is_none());
        assert!(seq.toggle_playing(10));
        assert_eq!(seq.pending_tick_ms(), Some(10 + DEFAULT_INTERVAL_MS));
    }

    #[test]
    fn test_paused_never_advances() {
        let mut seq = sequencer(3, SequencerOptions::default());
        seq.set_playing(false, 0);
        for t in (0..20_000).step_by(250) {
            assert_eq!(seq.poll(t), 0);
        }
        assert_eq!(seq.current_index(), 0);

        // Explicit navigation still works while paused, without scheduling
        seq.next(20_000);
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.pending_tick_ms(), None);
    }

    #[test]
    fn test_ticks_at_interval() {
        let options = SequencerOptions {
            interval_ms: 1000,
            ..Default::default()
        };
        let mut seq = sequencer(12, options);

        assert_eq!(seq.poll(999), 0);
        assert_eq!(seq.poll(1000), 1);
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.poll(2500), 1);
        assert_eq!(seq.current_index(), 2);
        assert_eq!(seq.pending_tick_ms(), Some(3000));
    }

    #[test]
    fn test_late_poll_catches_up() {
        let options = SequencerOptions {
            interval_ms: 1000,
            ..Default::default()
        };
        let mut seq = sequencer(12, options);

        // Driver woke up late: both the 1000 and 2000 ticks are due, 3000 is not
        assert_eq!(seq.poll(2500), 2);
        assert_eq!(seq.current_index(), 2);
        assert_eq!(seq.time_until_tick_ms(2500), Some(500));
    }

    #[test]
    fn test_playback_loops() {
        let options = SequencerOptions {
            interval_ms: 500,
            ..Default::default()
        };
        let mut seq = sequencer(3, options);
        assert_eq!(seq.poll(1500), 3);
        assert_eq!(seq.current_index(), 0);
        assert!(seq.is_playing());
    }

    #[test]
    fn test_navigation_restarts_wait() {
        let options = SequencerOptions {
            interval_ms: 1000,
            ..Default::default()
        };
        let mut seq = sequencer(5, options);

        seq.next(900);
        assert_eq!(seq.pending_tick_ms(), Some(1900));
        // The tick that was due at 1000 is gone
        assert_eq!(seq.poll(1000), 0);
        assert_eq!(seq.current_index(), 1);

        seq.previous(1200);
        assert_eq!(seq.pending_tick_ms(), Some(2200));
        assert_eq!(seq.poll(2200), 1);
        assert_eq!(seq.current_index(), 1);
    }

    #[test]
    fn test_set_interval_reschedules_from_now() {
        let options = SequencerOptions {
            interval_ms: 3000,
            ..Default::default()
        };
        let mut seq = sequencer(5, options);

        // Shortening the interval late in a wait does not fire immediately
        assert_eq!(seq.set_interval_ms(500, 2900), 500);
        assert_eq!(seq.pending_tick_ms(), Some(3400));
        assert_eq!(seq.poll(3000), 0);
        assert_eq!(seq.poll(3400), 1);
        assert_eq!(seq.current_index(), 1);
    }

    #[test]
    fn test_set_interval_clamps() {
        let mut seq = sequencer(5, paused());
        assert_eq!(seq.set_interval_ms(100, 0), MIN_INTERVAL_MS);
        assert_eq!(seq.set_interval_ms(10_000, 0), MAX_INTERVAL_MS);
        assert_eq!(seq.set_interval_ms(1234, 0), 1234);
        // Paused: no tick scheduled by an interval change
        assert_eq!(seq.pending_tick_ms(), None);
    }

    #[test]
    fn test_adjust_interval() {
        let mut seq = sequencer(5, paused());
        assert_eq!(seq.adjust_interval_ms(-250, 0), 1250);
        assert_eq!(seq.adjust_interval_ms(-5000, 0), MIN_INTERVAL_MS);
        assert_eq!(seq.adjust_interval_ms(250, 0), 750);
        assert_eq!(seq.adjust_interval_ms(i64::MAX, 0), MAX_INTERVAL_MS);
    }

    #[test]
    fn test_dispose() {
        let mut seq = sequencer(5, SequencerOptions::default());
        seq.dispose();
        assert!(seq.is_disposed());
        assert_eq!(seq.pending_tick_ms(), None);
        assert_eq!(seq.mode(), PlaybackMode::Disposed);

        // Idempotent, and nothing schedules a tick afterwards
        seq.dispose();
        assert!(!seq.set_playing(true, 0));
        seq.next(0);
        seq.set_interval_ms(1000, 0);
        assert_eq!(seq.pending_tick_ms(), None);
        assert_eq!(seq.poll(u64::MAX), 0);
    }

    #[test]
    fn test_status() {
        let mut seq = sequencer(12, SequencerOptions::default());
        seq.next(0);
        let status = seq.status();
        assert_eq!(status.state, PlaybackMode::Playing);
        assert_eq!(status.index, 1);
        assert_eq!(status.step, 2);
        assert_eq!(status.frame_count, 12);
        assert!(status.tick_pending);

        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["state"], "playing");
        assert_eq!(json["frameCount"], 12);
        assert_eq!(json["intervalMs"], DEFAULT_INTERVAL_MS);
        assert_eq!(json["tickPending"], true);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: SequencerOptions = serde_json::from_str(r#"{ "intervalMs": 800 }"#).unwrap();
        assert_eq!(options.interval_ms, 800);
        assert!(options.autoplay);
        assert_eq!(options.interval_range, IntervalRange::default());

        let options: SequencerOptions = serde_json::from_str(
            r#"{ "autoplay": false, "intervalRange": { "minMs": 100, "maxMs": 900 } }"#,
        )
        .unwrap();
        assert_eq!(options.interval_ms, DEFAULT_INTERVAL_MS);
        assert!(!options.autoplay);
        assert_eq!(options.interval_range.max_ms(), 900);

        let json = serde_json::to_value(options).unwrap();
        assert_eq!(json["intervalRange"]["minMs"], 100);
    }

    #[test]
    fn test_options_reject_invalid_range() {
        let result = serde_json::from_str::<SequencerOptions>(
            r#"{ "intervalRange": { "minMs": 3000, "maxMs": 500 } }"#,
        );
        assert!(result.is_err());
        assert!(serde_json::from_str::<IntervalRange>(r#"{ "minMs": 0, "maxMs": 10 }"#).is_err());
    }
}
