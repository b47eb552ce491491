//! Message sinks and the frame observer.
//!
//! The sim narrates into a [`MessageSink`]; rendering and the console own
//! display.  [`SimObserver`] gets coarser frame-level callbacks for progress
//! reporting and data collection.

use rg_core::SimTime;

// ── Severity ──────────────────────────────────────────────────────────────────

/// How loudly a message should be surfaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Ambient narration (wandering, fleeing, pickups).
    Info,
    /// Hits, misses, and heals.
    Combat,
    /// Kills and game-over events.
    Critical,
}

// ── MessageSink ───────────────────────────────────────────────────────────────

/// Receiver for player-visible narration.
pub trait MessageSink {
    fn print_message(&mut self, text: &str, severity: Severity);
}

/// Discards everything.  For tests and headless runs.
pub struct NoopSink;

impl MessageSink for NoopSink {
    fn print_message(&mut self, _text: &str, _severity: Severity) {}
}

/// Collects messages in memory.
#[derive(Default)]
pub struct BufferSink {
    pub lines: Vec<(Severity, String)>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<(Severity, String)> {
        std::mem::take(&mut self.lines)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, text)| text.as_str()).collect()
    }
}

impl MessageSink for BufferSink {
    fn print_message(&mut self, text: &str, severity: Severity) {
        self.lines.push((severity, text.to_owned()));
    }
}

/// Prints every message to stdout, for demos.
pub struct StdoutSink;

impl MessageSink for StdoutSink {
    fn print_message(&mut self, text: &str, _severity: Severity) {
        println!("{text}");
    }
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Frame-level callbacks from [`Sim::run_frames`][crate::Sim::run_frames].
///
/// All methods default to no-ops so implementors override only what they
/// need.
pub trait SimObserver {
    /// Called after each frame with the clock value and the number of actor
    /// turns the frame processed.
    fn on_frame_end(&mut self, _now: SimTime, _acted: usize) {}

    /// Called once when stepping stops, either at the frame budget or at
    /// game over.
    fn on_run_end(&mut self, _now: SimTime) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
