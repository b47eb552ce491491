//! The dense tile grid and its query surface.
//!
//! Invariant: a tile's `occupant` always matches the position of exactly one
//! live actor, and vice versa.  The sim maintains this on every spawn, move,
//! and despawn; the grid enforces the "one occupant per tile" half via
//! [`TileGrid::set_occupant`].

use rg_core::{ActorId, Direction, ItemId, PointF, SimRng, TileCoord};

use crate::{MapError, MapResult};

// ── Tile ──────────────────────────────────────────────────────────────────────

/// One grid cell.
#[derive(Copy, Clone, Debug)]
pub struct Tile {
    /// Can actors stand here / paths route through here?
    pub walkable: bool,
    /// Does this tile block line of sight?
    pub opaque: bool,
    /// The actor standing here, or `ActorId::INVALID`.
    pub occupant: ActorId,
    /// The item lying here, or `ItemId::INVALID`.
    pub item: ItemId,
}

impl Tile {
    fn floor() -> Tile {
        Tile {
            walkable: true,
            opaque: false,
            occupant: ActorId::INVALID,
            item: ItemId::INVALID,
        }
    }

    fn wall() -> Tile {
        Tile {
            walkable: false,
            opaque: true,
            occupant: ActorId::INVALID,
            item: ItemId::INVALID,
        }
    }
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

/// A rectangular tile map stored row-major.
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// An all-floor grid of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::floor(); (width * height) as usize],
        }
    }

    /// Build a grid from ASCII rows: `#` is a wall, anything else is floor.
    ///
    /// Handy for tests and demos; map generation proper lives outside the
    /// core.  All rows must have equal length.
    pub fn from_rows(rows: &[&str]) -> MapResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for row in rows {
            if row.chars().count() as u32 != width {
                return Err(MapError::RaggedRows);
            }
            for ch in row.chars() {
                tiles.push(if ch == '#' { Tile::wall() } else { Tile::floor() });
            }
        }
        Ok(Self { width, height, tiles })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, coord: TileCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    #[inline]
    fn idx(&self, coord: TileCoord) -> usize {
        (coord.y as u32 * self.width + coord.x as u32) as usize
    }

    pub fn tile(&self, coord: TileCoord) -> Option<&Tile> {
        self.in_bounds(coord).then(|| &self.tiles[self.idx(coord)])
    }

    /// Turn a tile into a wall (unwalkable + opaque).
    pub fn set_wall(&mut self, coord: TileCoord) {
        if self.in_bounds(coord) {
            let i = self.idx(coord);
            self.tiles[i].walkable = false;
            self.tiles[i].opaque = true;
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Out-of-bounds tiles are unwalkable.
    #[inline]
    pub fn is_walkable(&self, coord: TileCoord) -> bool {
        self.tile(coord).is_some_and(|t| t.walkable)
    }

    /// Out-of-bounds tiles block sight.
    #[inline]
    pub fn is_opaque(&self, coord: TileCoord) -> bool {
        self.tile(coord).is_none_or(|t| t.opaque)
    }

    /// Walkable and unoccupied — a tile an actor could step onto right now.
    #[inline]
    pub fn is_open(&self, coord: TileCoord) -> bool {
        self.tile(coord)
            .is_some_and(|t| t.walkable && !t.occupant.is_valid())
    }

    /// The continuous center point of a tile.
    #[inline]
    pub fn tile_center(&self, coord: TileCoord) -> PointF {
        coord.center()
    }

    /// The rough compass direction from `a` toward `b`, or `None` if equal.
    #[inline]
    pub fn direction_to(&self, a: TileCoord, b: TileCoord) -> Option<Direction> {
        Direction::from_delta(b.x - a.x, b.y - a.y)
    }

    /// Walkable neighbors of `coord` in all eight directions, in the fixed
    /// clockwise order of [`Direction::ALL`] (deterministic expansion order
    /// for the pathfinder).
    pub fn walkable_neighbors(&self, coord: TileCoord) -> impl Iterator<Item = TileCoord> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| coord.step(d))
            .filter(|&c| self.is_walkable(c))
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    /// The actor standing on `coord`, if any.
    pub fn occupant(&self, coord: TileCoord) -> Option<ActorId> {
        self.tile(coord)
            .map(|t| t.occupant)
            .filter(|id| id.is_valid())
    }

    /// Claim `coord` for `actor`.  Fails if out of bounds or already claimed
    /// by a different actor — the caller's position bookkeeping is wrong.
    pub fn set_occupant(&mut self, coord: TileCoord, actor: ActorId) -> MapResult<()> {
        if !self.in_bounds(coord) {
            return Err(MapError::OutOfBounds(coord));
        }
        let i = self.idx(coord);
        let current = self.tiles[i].occupant;
        if current.is_valid() && current != actor {
            return Err(MapError::TileOccupied(coord));
        }
        self.tiles[i].occupant = actor;
        Ok(())
    }

    /// Release `coord`'s occupant reference.  No-op when out of bounds.
    pub fn clear_occupant(&mut self, coord: TileCoord) {
        if self.in_bounds(coord) {
            let i = self.idx(coord);
            self.tiles[i].occupant = ActorId::INVALID;
        }
    }

    // ── Ground items ──────────────────────────────────────────────────────

    pub fn item_at(&self, coord: TileCoord) -> Option<ItemId> {
        self.tile(coord).map(|t| t.item).filter(|id| id.is_valid())
    }

    /// Place `item` on `coord`.  Fails if another item already lies there.
    pub fn place_item(&mut self, coord: TileCoord, item: ItemId) -> MapResult<()> {
        if !self.in_bounds(coord) {
            return Err(MapError::OutOfBounds(coord));
        }
        let i = self.idx(coord);
        if self.tiles[i].item.is_valid() && self.tiles[i].item != item {
            return Err(MapError::TileOccupied(coord));
        }
        self.tiles[i].item = item;
        Ok(())
    }

    /// Remove and return the item on `coord`, if any.
    pub fn take_item(&mut self, coord: TileCoord) -> Option<ItemId> {
        if !self.in_bounds(coord) {
            return None;
        }
        let i = self.idx(coord);
        let item = self.tiles[i].item;
        self.tiles[i].item = ItemId::INVALID;
        item.is_valid().then_some(item)
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// A uniformly random open tile (walkable, unoccupied), or `None` if the
    /// grid has none.
    ///
    /// Tries 64 random draws, then falls back to a linear scan so the method
    /// stays correct on nearly-full maps.  Returning `None` is a resource
    /// exhaustion report, not an error — callers pick an alternative action.
    pub fn random_open_coord(&self, rng: &mut SimRng) -> Option<TileCoord> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        for _ in 0..64 {
            let coord = TileCoord::new(
                rng.gen_range(0..self.width as i32),
                rng.gen_range(0..self.height as i32),
            );
            if self.is_open(coord) {
                return Some(coord);
            }
        }
        // Fallback scan with a random starting offset to avoid biasing
        // toward the top-left corner.
        let total = (self.width * self.height) as usize;
        let offset = rng.gen_range(0..total);
        for step in 0..total {
            let i = (offset + step) % total;
            let coord = TileCoord::new(
                (i as u32 % self.width) as i32,
                (i as u32 / self.width) as i32,
            );
            if self.is_open(coord) {
                return Some(coord);
            }
        }
        None
    }
}
