//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `f64` of simulated seconds.  Agents are
//! queued by a float *ready time* — the instant at which they are next
//! eligible to act — and the clock only advances (by a fixed `tick_delta`)
//! after a frame in which at least one agent acted.  Float time is the
//! canonical unit because action durations are fractional: a fast actor may
//! consume 0.7 s per turn and slot in between slower actors' turns.

use std::fmt;

/// Simulated-clock value in seconds.  Ready times and action durations share
/// this unit.
pub type SimTime = f64;

/// Offset applied to a newly spawned NPC's first ready time so the player
/// (seeded at exactly 0.0) always wins the first same-time tie.
pub const NPC_SPAWN_DELAY: SimTime = 0.1;

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock.  Advanced by `tick_delta` once per frame in which at
/// least one agent acted; never advanced mid-turn.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimClock {
    /// Current simulated time in seconds.
    pub now: SimTime,
    /// Seconds the clock moves per acting frame.
    pub tick_delta: f64,
}

impl SimClock {
    pub fn new(tick_delta: f64) -> Self {
        Self { now: 0.0, tick_delta }
    }

    /// Advance the clock by one tick delta.
    #[inline]
    pub fn advance(&mut self) {
        self.now += self.tick_delta;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.1}s", self.now)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Seconds the clock advances per acting frame.  Default: 1.0.
    pub tick_delta: f64,

    /// When set, lethal damage against the player is clamped to leave 1
    /// health instead of killing (debug/god-mode safety policy).
    pub protect_player: bool,

    /// Sight radius (in tile units) used for actors whose blueprint does not
    /// override it.
    pub default_sight_radius: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            tick_delta: 1.0,
            protect_player: false,
            default_sight_radius: 8.0,
        }
    }
}

impl SimConfig {
    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_delta)
    }
}
