//! Attack input and output types.

use rg_core::ActorId;

// ── AttackIntent ──────────────────────────────────────────────────────────────

/// One attack (or heal) about to be resolved.
///
/// A negative damage range signals healing.  For heals the `min`/`max`
/// naming inverts numerically: `max_damage` is the *more negative* bound
/// because "max healing" restores the most health.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackIntent {
    pub attacker: ActorId,
    pub target: ActorId,
    pub min_damage: i32,
    pub max_damage: i32,
    /// Probability of the attack landing, compared against a uniform
    /// `[0, 1)` roll.
    pub hit_chance: f64,
}

impl AttackIntent {
    #[inline]
    pub fn is_healing(&self) -> bool {
        self.min_damage < 0
    }
}

// ── AttackOutcome ─────────────────────────────────────────────────────────────

/// The result tag of one resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// The hit roll failed on a damaging intent.
    Miss,
    /// The hit roll failed on a healing intent.
    HealMiss,
    /// Damage landed, target survived.
    Hit,
    /// Damage landed and dropped the target to zero or below.
    Kill,
    /// Healing landed.
    Heal,
}

// ── AttackReport ──────────────────────────────────────────────────────────────

/// Everything the caller needs after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackReport {
    pub outcome: AttackOutcome,
    /// Damage applied to the target's health (negative for heals, zero on a
    /// miss).  Already includes weapon/armor modifiers and lethal clamping.
    pub damage: i32,
    /// `true` when the hit roll passed.
    pub hit: bool,
    /// Human-readable, perspective-aware narration.  The caller gates it by
    /// player visibility before surfacing.
    pub message: String,
}
