//! `rg-actor` — entity state for the `rust_rg` roguelike simulation core.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`actor`]     | `Actor`, `Item`, `ItemKind`, `Vision`                  |
//! | [`arena`]     | `ActorArena`, `ItemArena` — stable-ID slot maps        |
//! | [`blueprint`] | `Blueprint` + CSV loader                               |
//! | [`faction`]   | `FactionTable` — standings and enemy/ally thresholds   |
//! | [`error`]     | `ActorError`, `ActorResult<T>`                         |
//!
//! # Ownership model
//!
//! Actors and items live in arenas keyed by stable monotonic IDs.  Every
//! cross-reference anywhere in the workspace (behavior targets, inventory
//! contents, tile occupants, faction rows) is an ID resolved through an
//! arena, never a pointer: a dead entity's slot is simply vacated and stale
//! lookups return `None` instead of dangling.

pub mod actor;
pub mod arena;
pub mod blueprint;
pub mod error;
pub mod faction;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use actor::{Actor, Item, ItemKind, Vision};
pub use arena::{ActorArena, ItemArena};
pub use blueprint::{Blueprint, load_blueprints_reader};
pub use error::{ActorError, ActorResult};
pub use faction::FactionTable;
