//! `rg-sim` — the turn scheduler and simulation loop of the `rust_rg`
//! roguelike simulation core.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`turn_queue`] | Float ready-time priority queue with stable ties      |
//! | [`sim`]        | [`Sim`] — spawning, frame stepping, cleanup           |
//! | [`builder`]    | Fluent [`SimBuilder`]                                 |
//! | [`observer`]   | [`MessageSink`], [`Severity`], [`SimObserver`]        |
//! | [`save`]       | Serde save records and ID-indirected reconstruction   |
//! | [`error`]      | `SimError`, `SimResult<T>`                            |
//!
//! The scheduler pops the earliest-ready actor, lets it act once, and
//! re-queues it at `now + duration`.  The player is input-gated: the frame
//! halts on the player's turn until an action is queued, so no actor ever
//! acts out of time order.

pub mod builder;
pub mod error;
pub mod observer;
pub mod save;
pub mod sim;
pub mod turn_queue;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{BufferSink, MessageSink, NoopObserver, NoopSink, Severity, SimObserver, StdoutSink};
pub use save::{ActorRecord, ItemRecord, SaveGame, from_json, to_json};
pub use sim::{FrameReport, Sim};
pub use turn_queue::TurnQueue;
