//! Incremental A* over the tile grid.
//!
//! # Two usage modes
//!
//! - **Bulk**: [`Pathfinder::solve`] (or the [`find_path`] helper) runs the
//!   search to completion.  Behaviors do this every turn; repeated bulk
//!   solves allocate only the solver's own scratch maps, so tight-loop
//!   stress usage is fine.
//! - **Incremental**: [`Pathfinder::step`] expands exactly one open node per
//!   call, for interactive/debug stepping.
//!
//! # Heuristic
//!
//! Movement is 8-way at unit cost, so the admissible (and consistent)
//! heuristic is Chebyshev distance.  Manhattan would over-estimate across
//! diagonals and break the equal-length-path guarantee.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rg_core::TileCoord;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::TileGrid;

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered tile sequence from just past the start tile up to and including
/// the goal.  Consumed one step per behavior invocation — agents never
/// teleport along a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    steps: Vec<TileCoord>,
    cursor: usize,
}

impl Path {
    fn new(steps: Vec<TileCoord>) -> Self {
        Self { steps, cursor: 0 }
    }

    /// Total number of steps from start to goal.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The next tile to move onto, without consuming it.
    pub fn first_step(&self) -> Option<TileCoord> {
        self.steps.get(self.cursor).copied()
    }

    /// Consume and return the next tile toward the goal.
    pub fn step_towards_end(&mut self) -> Option<TileCoord> {
        let step = self.steps.get(self.cursor).copied();
        if step.is_some() {
            self.cursor += 1;
        }
        step
    }

    /// The final tile, or `None` for the empty (start == goal) path.
    pub fn goal(&self) -> Option<TileCoord> {
        self.steps.last().copied()
    }
}

// ── PathfindState ─────────────────────────────────────────────────────────────

/// The solver state machine.  `NoPath` is a normal outcome — callers skip
/// movement for the turn — never an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PathfindState {
    /// The open set still holds candidates.
    Incomplete,
    /// The goal was expanded; a [`Path`] is available.
    PathFound,
    /// The open set was exhausted without reaching the goal.
    NoPath,
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

/// A* search from `start` to `goal` against the grid's walkability.
///
/// Tie-breaking is deterministic: equal-cost open nodes pop in insertion
/// order via a monotonic sequence number, so identical maps yield identical
/// paths.
pub struct Pathfinder<'a> {
    grid: &'a TileGrid,
    start: TileCoord,
    goal: TileCoord,
    // Min-heap of (f = g + h, insertion seq, node).
    open: BinaryHeap<Reverse<(u32, u64, TileCoord)>>,
    g_cost: FxHashMap<TileCoord, u32>,
    parent: FxHashMap<TileCoord, TileCoord>,
    closed: FxHashSet<TileCoord>,
    seq: u64,
    state: PathfindState,
    path: Option<Path>,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a TileGrid, start: TileCoord, goal: TileCoord) -> Self {
        let mut finder = Self {
            grid,
            start,
            goal,
            open: BinaryHeap::new(),
            g_cost: FxHashMap::default(),
            parent: FxHashMap::default(),
            closed: FxHashSet::default(),
            seq: 0,
            state: PathfindState::Incomplete,
            path: None,
        };
        // The start tile is always expandable — the agent is standing on it
        // even if (say) a door closed behind it.
        finder.g_cost.insert(start, 0);
        finder.push_open(start, 0);
        finder
    }

    pub fn state(&self) -> PathfindState {
        self.state
    }

    /// The found path.  `Some` only after the state is `PathFound`.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_ref()
    }

    /// Take ownership of the found path.
    pub fn take_path(&mut self) -> Option<Path> {
        self.path.take()
    }

    /// Expand one open node.  Returns the state after the expansion.
    pub fn step(&mut self) -> PathfindState {
        if self.state != PathfindState::Incomplete {
            return self.state;
        }

        // Pop until a non-stale entry; stale entries are nodes that were
        // re-pushed with a better cost before this copy surfaced.
        let node = loop {
            let Some(Reverse((_, _, node))) = self.open.pop() else {
                self.state = PathfindState::NoPath;
                return self.state;
            };
            if self.closed.insert(node) {
                break node;
            }
        };

        if node == self.goal {
            self.path = Some(self.reconstruct());
            self.state = PathfindState::PathFound;
            return self.state;
        }

        let g_here = self.g_cost[&node];
        let grid = self.grid;
        for neighbor in grid.walkable_neighbors(node) {
            let tentative = g_here + 1;
            let better = self
                .g_cost
                .get(&neighbor)
                .is_none_or(|&known| tentative < known);
            if better {
                self.g_cost.insert(neighbor, tentative);
                self.parent.insert(neighbor, node);
                self.push_open(neighbor, tentative);
            }
        }

        self.state
    }

    /// Run the search to completion.
    pub fn solve(&mut self) -> PathfindState {
        while self.step() == PathfindState::Incomplete {}
        self.state
    }

    fn push_open(&mut self, node: TileCoord, g: u32) {
        let f = g + node.chebyshev(self.goal);
        self.seq += 1;
        self.open.push(Reverse((f, self.seq, node)));
    }

    /// Walk the parent chain back from the goal.  Excludes the start tile;
    /// a search from a tile to itself yields the empty path.
    fn reconstruct(&self) -> Path {
        let mut steps = Vec::new();
        let mut cur = self.goal;
        while cur != self.start {
            steps.push(cur);
            cur = self.parent[&cur];
        }
        steps.reverse();
        Path::new(steps)
    }
}

/// Bulk-solve convenience: `Some(path)` on `PathFound`, `None` on `NoPath`.
pub fn find_path(grid: &TileGrid, start: TileCoord, goal: TileCoord) -> Option<Path> {
    let mut finder = Pathfinder::new(grid, start, goal);
    match finder.solve() {
        PathfindState::PathFound => finder.take_path(),
        _ => None,
    }
}
