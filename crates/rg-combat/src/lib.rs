//! `rg-combat` — attack resolution for the `rust_rg` roguelike simulation core.
//!
//! # Crate layout
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`intent`] | `AttackIntent`, `AttackOutcome`, `AttackReport`      |
//! | [`engine`] | `CombatEngine` — the resolution pipeline             |
//! | [`error`]  | `CombatError`, `CombatResult<T>`                     |
//!
//! A negative damage range on an intent signals healing; the same pipeline
//! resolves both, so "heal the cleric" and "stab the orc" share one code
//! path and one report shape.

pub mod engine;
pub mod error;
pub mod intent;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::CombatEngine;
pub use error::{CombatError, CombatResult};
pub use intent::{AttackIntent, AttackOutcome, AttackReport};
