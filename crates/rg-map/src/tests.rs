//! Unit tests for rg-map.

use rg_core::{ActorId, Direction, ItemId, SimRng, TileCoord};

use crate::{Pathfinder, PathfindState, TileGrid, find_path, line_of_sight};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn open_grid() -> TileGrid {
    TileGrid::new(10, 10)
}

/// A grid with a full vertical wall at x=5 except a gap at y=5, plus an
/// isolated pocket in the corner.
fn walled_grid() -> TileGrid {
    let mut grid = TileGrid::new(12, 12);
    for y in 0..12 {
        if y != 5 {
            grid.set_wall(TileCoord::new(5, y));
        }
    }
    // Seal (10, 10) into a one-tile pocket.
    for (x, y) in [(9, 9), (10, 9), (11, 9), (9, 10), (11, 10), (9, 11), (10, 11), (11, 11)] {
        grid.set_wall(TileCoord::new(x, y));
    }
    grid
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use super::*;

    #[test]
    fn bounds_and_walkability() {
        let grid = open_grid();
        assert!(grid.is_walkable(TileCoord::new(0, 0)));
        assert!(grid.is_walkable(TileCoord::new(9, 9)));
        assert!(!grid.is_walkable(TileCoord::new(-1, 0)));
        assert!(!grid.is_walkable(TileCoord::new(10, 0)));
        assert!(grid.is_opaque(TileCoord::new(-1, -1))); // out of bounds blocks sight
    }

    #[test]
    fn from_rows_parses_walls() {
        let grid = TileGrid::from_rows(&["..#", "...", "#.."]).unwrap();
        assert!(!grid.is_walkable(TileCoord::new(2, 0)));
        assert!(grid.is_walkable(TileCoord::new(1, 1)));
        assert!(grid.is_opaque(TileCoord::new(0, 2)));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(TileGrid::from_rows(&["...", ".."]).is_err());
    }

    #[test]
    fn occupancy_sync() {
        let mut grid = open_grid();
        let tile = TileCoord::new(3, 3);
        grid.set_occupant(tile, ActorId(1)).unwrap();
        assert_eq!(grid.occupant(tile), Some(ActorId(1)));
        assert!(!grid.is_open(tile));

        // A second actor cannot claim the same tile.
        assert!(grid.set_occupant(tile, ActorId(2)).is_err());
        // The same actor re-claiming is fine (idempotent move bookkeeping).
        assert!(grid.set_occupant(tile, ActorId(1)).is_ok());

        grid.clear_occupant(tile);
        assert_eq!(grid.occupant(tile), None);
        assert!(grid.is_open(tile));
    }

    #[test]
    fn ground_items() {
        let mut grid = open_grid();
        let tile = TileCoord::new(4, 4);
        grid.place_item(tile, ItemId(9)).unwrap();
        assert_eq!(grid.item_at(tile), Some(ItemId(9)));
        assert!(grid.place_item(tile, ItemId(10)).is_err());
        assert_eq!(grid.take_item(tile), Some(ItemId(9)));
        assert_eq!(grid.take_item(tile), None);
    }

    #[test]
    fn direction_between_tiles() {
        let grid = open_grid();
        let a = TileCoord::new(5, 5);
        assert_eq!(grid.direction_to(a, TileCoord::new(8, 5)), Some(Direction::East));
        assert_eq!(grid.direction_to(a, TileCoord::new(4, 4)), Some(Direction::NorthWest));
        assert_eq!(grid.direction_to(a, a), None);
    }

    #[test]
    fn random_open_coord_respects_occupancy() {
        // Every tile but one is walled or occupied; sampling must find it.
        let mut grid = TileGrid::new(3, 1);
        grid.set_wall(TileCoord::new(0, 0));
        grid.set_occupant(TileCoord::new(1, 0), ActorId(1)).unwrap();

        let mut rng = SimRng::new(7);
        assert_eq!(grid.random_open_coord(&mut rng), Some(TileCoord::new(2, 0)));
    }

    #[test]
    fn random_open_coord_exhausted() {
        let mut grid = TileGrid::new(1, 1);
        grid.set_wall(TileCoord::new(0, 0));
        let mut rng = SimRng::new(7);
        assert_eq!(grid.random_open_coord(&mut rng), None);
    }
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use super::*;

    #[test]
    fn path_to_self_is_found_and_empty() {
        let grid = open_grid();
        let here = TileCoord::new(4, 4);
        let mut finder = Pathfinder::new(&grid, here, here);
        assert_eq!(finder.solve(), PathfindState::PathFound);
        let path = finder.take_path().unwrap();
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
    }

    #[test]
    fn straight_line_path_length() {
        let grid = open_grid();
        let path = find_path(&grid, TileCoord::new(0, 0), TileCoord::new(5, 0)).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.goal(), Some(TileCoord::new(5, 0)));
    }

    #[test]
    fn diagonal_counts_one_step() {
        let grid = open_grid();
        let path = find_path(&grid, TileCoord::new(0, 0), TileCoord::new(4, 4)).unwrap();
        assert_eq!(path.len(), 4); // pure diagonal run
    }

    #[test]
    fn path_excludes_start_includes_goal() {
        let grid = open_grid();
        let start = TileCoord::new(2, 2);
        let goal = TileCoord::new(4, 2);
        let mut path = find_path(&grid, start, goal).unwrap();
        let first = path.step_towards_end().unwrap();
        assert_ne!(first, start);
        assert_eq!(first.chebyshev(start), 1);
        assert_eq!(path.step_towards_end(), Some(goal));
        assert_eq!(path.step_towards_end(), None);
    }

    #[test]
    fn routes_through_the_gap() {
        let grid = walled_grid();
        let path = find_path(&grid, TileCoord::new(1, 1), TileCoord::new(8, 1)).unwrap();
        assert!(path.len() >= 8); // must detour via the gap at (5, 5)
        // Every step crossing x=5 must be the gap row.
        let mut path = path;
        while let Some(step) = path.step_towards_end() {
            if step.x == 5 {
                assert_eq!(step.y, 5);
            }
        }
    }

    #[test]
    fn unreachable_pocket_is_no_path() {
        let grid = walled_grid();
        let mut finder = Pathfinder::new(&grid, TileCoord::new(1, 1), TileCoord::new(10, 10));
        assert_eq!(finder.solve(), PathfindState::NoPath);
        assert!(finder.take_path().is_none());
    }

    #[test]
    fn repeated_solves_equal_length() {
        // Admissible heuristic + deterministic map ⇒ identical lengths on
        // every solve, including under tight-loop stress usage.
        let grid = walled_grid();
        let from = TileCoord::new(1, 1);
        let to = TileCoord::new(8, 8);
        let baseline = find_path(&grid, from, to).unwrap().len();
        for _ in 0..100 {
            assert_eq!(find_path(&grid, from, to).unwrap().len(), baseline);
        }
    }

    #[test]
    fn incremental_stepping_matches_bulk() {
        let grid = walled_grid();
        let from = TileCoord::new(1, 1);
        let to = TileCoord::new(8, 1);

        let mut finder = Pathfinder::new(&grid, from, to);
        let mut expansions = 0;
        while finder.step() == PathfindState::Incomplete {
            expansions += 1;
        }
        assert_eq!(finder.state(), PathfindState::PathFound);
        assert!(expansions > 0);

        let incremental = finder.take_path().unwrap();
        let bulk = find_path(&grid, from, to).unwrap();
        assert_eq!(incremental.len(), bulk.len());
    }
}

// ── Raycast ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod raycast {
    use super::*;
    use crate::cast;

    #[test]
    fn clear_line_reaches() {
        let grid = open_grid();
        assert!(line_of_sight(&grid, TileCoord::new(0, 0), TileCoord::new(9, 9)));
    }

    #[test]
    fn wall_blocks_sight() {
        let grid = walled_grid();
        assert!(!line_of_sight(&grid, TileCoord::new(1, 1), TileCoord::new(8, 1)));
        // Through the gap it's clear.
        assert!(line_of_sight(&grid, TileCoord::new(4, 5), TileCoord::new(6, 5)));
    }

    #[test]
    fn hit_reports_blocking_tile() {
        let grid = walled_grid();
        let result = cast(
            &grid,
            TileCoord::new(1, 1).center(),
            TileCoord::new(8, 1).center(),
        );
        assert!(!result.reached);
        assert_eq!(result.hit_tile, Some(TileCoord::new(5, 1)));
    }

    #[test]
    fn own_tile_never_blocks() {
        let mut grid = open_grid();
        // Observer standing inside an opaque tile (e.g. smoke) still sees out.
        grid.set_wall(TileCoord::new(2, 2));
        let result = cast(
            &grid,
            TileCoord::new(2, 2).center(),
            TileCoord::new(4, 2).center(),
        );
        assert!(result.reached);
    }

    #[test]
    fn zero_length_ray_reaches() {
        let grid = open_grid();
        let p = TileCoord::new(3, 3).center();
        assert!(cast(&grid, p, p).reached);
    }
}
