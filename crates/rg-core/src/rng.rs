//! Deterministic per-actor and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each actor gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (actor_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive actor IDs uniformly across the seed space.
//! Because every actor draws from its own stream, the outcome of one actor's
//! turn never perturbs another's rolls — runs replay identically for a given
//! seed even as actors spawn and die.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::ActorId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ActorRng ──────────────────────────────────────────────────────────────────

/// Per-actor deterministic RNG.
///
/// Created when the actor spawns (or is reloaded from a save) and consulted
/// for every probabilistic decision that actor makes: hit rolls, wander
/// direction draws, chance-to-run gates.
pub struct ActorRng(SmallRng);

impl ActorRng {
    /// Seed deterministically from the run's global seed and an actor ID.
    pub fn new(global_seed: u64, actor: ActorId) -> Self {
        let seed = global_seed ^ (actor.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ActorRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform roll in `[0, 1)` — compared against percent-chance values so
    /// a chance of exactly 1.0 can never fail and 0.0 can never pass.
    #[inline]
    pub fn roll(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }

    /// Choose a random element from a slice.  Returns `None` if empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (open-tile sampling, item
/// scatter, anything not owned by a single actor).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
