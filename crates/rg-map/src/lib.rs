//! `rg-map` — spatial queries for the `rust_rg` roguelike simulation core.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`grid`]    | `TileGrid` — occupancy, walkability, opacity, open-tile sampling |
//! | [`astar`]   | `Pathfinder` (incremental A*), `Path`, `PathfindState`     |
//! | [`raycast`] | segment-stepping line of sight, `RaycastResult`            |
//! | [`error`]   | `MapError`, `MapResult<T>`                                 |
//!
//! The grid is the leaf every other component queries: behaviors ask for
//! directions and open tiles, the pathfinder asks for walkability, the
//! raycaster asks for opacity, and the sim keeps tile occupancy in sync with
//! actor positions.

pub mod astar;
pub mod error;
pub mod grid;
pub mod raycast;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use astar::{Path, Pathfinder, PathfindState, find_path};
pub use error::{MapError, MapResult};
pub use grid::{Tile, TileGrid};
pub use raycast::{RaycastResult, cast, line_of_sight};
