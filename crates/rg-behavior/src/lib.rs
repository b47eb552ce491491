//! `rg-behavior` — utility-AI behavior arbitration for the `rust_rg`
//! roguelike simulation core.
//!
//! Each NPC carries an ordered list of [`Behavior`] instances.  Every turn
//! the selector asks each one for a utility score, runs the highest scorer,
//! and the behavior answers with a single atomic [`Action`] for the turn
//! loop to apply.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`model`]    | The [`Behavior`] trait, [`BehaviorState`] save records  |
//! | [`action`]   | [`Action`] — what a behavior asks the world to do       |
//! | [`context`]  | [`WorldView`] read-only snapshot, [`MessageBuffer`]     |
//! | [`selector`] | Highest-utility arbitration                             |
//! | [`registry`] | Name → factory map driven by blueprint configuration    |
//! | [`behaviors`]| The six concrete behaviors                              |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                    |

pub mod action;
pub mod behaviors;
pub mod context;
pub mod error;
pub mod model;
pub mod registry;
pub mod selector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use behaviors::{Chase, Flee, HealAlly, MeleeAttack, PickUpItem, Wander};
pub use context::{MessageBuffer, WorldView};
pub use error::{BehaviorError, BehaviorResult};
pub use model::{Behavior, BehaviorState};
pub use registry::BehaviorRegistry;
pub use selector::select;
