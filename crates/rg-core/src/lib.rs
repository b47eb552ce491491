//! `rg-core` — foundational types for the `rust_rg` roguelike simulation core.
//!
//! This crate is a dependency of every other `rg-*` crate.  It intentionally
//! has no `rg-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`ids`]   | `ActorId`, `ItemId`, `FactionId`                        |
//! | [`grid`]  | `TileCoord`, `PointF`, `Direction`, distance metrics    |
//! | [`clock`] | `SimTime`, `SimClock`, `SimConfig`                      |
//! | [`rng`]   | `ActorRng` (per-actor), `SimRng` (global)               |
//! | [`attrs`] | `AttributeMap` — named config values with defaults      |
//! | [`error`] | `CoreError`, `CoreResult`                               |

pub mod attrs;
pub mod clock;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attrs::AttributeMap;
pub use clock::{NPC_SPAWN_DELAY, SimClock, SimConfig, SimTime};
pub use error::{CoreError, CoreResult};
pub use grid::{Direction, PointF, TileCoord};
pub use ids::{ActorId, FactionId, ItemId};
pub use rng::{ActorRng, SimRng};
