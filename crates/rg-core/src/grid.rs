//! Tile coordinates, continuous points, and the eight-way direction rose.
//!
//! The world is a dense integer grid.  `TileCoord` is the discrete address of
//! one tile; `PointF` is a continuous position used by the raycaster (tile
//! centers sit at `x + 0.5, y + 0.5`).  Three distance metrics coexist on
//! purpose:
//!
//! - **Manhattan** — range tests in behavior utilities (glossary metric).
//! - **Chebyshev** — the admissible A* heuristic for unit-cost 8-way movement.
//! - **Euclidean** — adjacency and sight-radius checks in continuous space.

use std::fmt;

// ── TileCoord ─────────────────────────────────────────────────────────────────

/// The discrete address of one tile.  `y` grows southward (screen order).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences.
    #[inline]
    pub fn manhattan(self, other: TileCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Maximum of absolute coordinate differences — the number of unit-cost
    /// 8-way steps between two tiles, and therefore the A* heuristic.
    #[inline]
    pub fn chebyshev(self, other: TileCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Straight-line distance between tile centers, in tile units.
    #[inline]
    pub fn euclidean(self, other: TileCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// The tile one step in `dir` from `self`.
    #[inline]
    pub fn step(self, dir: Direction) -> TileCoord {
        let (dx, dy) = dir.delta();
        TileCoord::new(self.x + dx, self.y + dy)
    }

    /// The continuous center point of this tile.
    #[inline]
    pub fn center(self) -> PointF {
        PointF::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── PointF ────────────────────────────────────────────────────────────────────

/// A continuous world-space position in tile units.
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: PointF) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// The tile containing this point.
    #[inline]
    pub fn tile(self) -> TileCoord {
        TileCoord::new(self.x.floor() as i32, self.y.floor() as i32)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the eight grid directions.  North is `(0, -1)` (screen order).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions in clockwise order starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The `(dx, dy)` tile offset of one step in this direction.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// The direction whose signs match `(dx, dy)`, or `None` for `(0, 0)`.
    ///
    /// Magnitudes are ignored — only the signum of each component matters, so
    /// this answers "roughly which way is `b` from `a`" for any two tiles.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx.signum(), dy.signum()) {
            (0, 0) => None,
            (0, -1) => Some(Direction::North),
            (1, -1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, 1) => Some(Direction::SouthEast),
            (0, 1) => Some(Direction::South),
            (-1, 1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, -1) => Some(Direction::NorthWest),
            _ => unreachable!("signum returns -1, 0, or 1"),
        }
    }
}
