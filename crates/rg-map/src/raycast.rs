//! Segment-stepping line of sight.
//!
//! The raycaster walks the straight line between two continuous points in
//! sub-tile increments and stops at the first opaque tile.  It serves both
//! gameplay (rebuilding each actor's visible-entity sets after a move) and
//! debug visualization.

use rg_core::{PointF, TileCoord};

use crate::TileGrid;

/// Sample spacing along the ray, in tile units.  Small enough that a ray
/// cannot skip across the corner of an opaque tile at any angle.
const RAY_STEP: f32 = 0.125;

/// The outcome of one cast.
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastResult {
    /// `true` if the ray reached the target point unobstructed.
    pub reached: bool,
    /// The opaque tile that stopped the ray, when not `reached`.
    pub hit_tile: Option<TileCoord>,
    /// Where the ray ended: the target point, or the entry sample of the
    /// blocking tile.
    pub hit_point: PointF,
}

/// Cast a ray from `from` toward `to`, stopping at the first opaque tile.
///
/// The origin's own tile never blocks — an observer standing in a doorway
/// can see out of it.
pub fn cast(grid: &TileGrid, from: PointF, to: PointF) -> RaycastResult {
    let total = from.distance(to);
    if total <= f32::EPSILON {
        return RaycastResult { reached: true, hit_tile: None, hit_point: to };
    }

    let dir_x = (to.x - from.x) / total;
    let dir_y = (to.y - from.y) / total;
    let origin_tile = from.tile();

    let mut travelled = RAY_STEP;
    while travelled < total {
        let sample = PointF::new(from.x + dir_x * travelled, from.y + dir_y * travelled);
        let tile = sample.tile();
        if tile != origin_tile && grid.is_opaque(tile) {
            return RaycastResult {
                reached: false,
                hit_tile: Some(tile),
                hit_point: sample,
            };
        }
        travelled += RAY_STEP;
    }

    RaycastResult { reached: true, hit_tile: None, hit_point: to }
}

/// `true` if the centers of `a` and `b` see each other.
pub fn line_of_sight(grid: &TileGrid, a: TileCoord, b: TileCoord) -> bool {
    cast(grid, a.center(), b.center()).reached
}
