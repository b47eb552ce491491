//! Unit tests for rg-core.

use crate::{ActorId, ActorRng, AttributeMap, Direction, PointF, SimConfig, TileCoord};

// ── Grid geometry ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use super::*;

    #[test]
    fn distance_metrics() {
        let a = TileCoord::new(0, 0);
        let b = TileCoord::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(a.chebyshev(b), 4);
        assert!((a.euclidean(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn diagonal_neighbor_is_one_chebyshev_step() {
        let a = TileCoord::new(2, 2);
        let b = TileCoord::new(3, 3);
        assert_eq!(a.chebyshev(b), 1);
        assert_eq!(a.manhattan(b), 2);
    }

    #[test]
    fn step_and_opposite_round_trip() {
        let origin = TileCoord::new(5, 5);
        for dir in Direction::ALL {
            let there = origin.step(dir);
            assert_eq!(there.step(dir.opposite()), origin);
        }
    }

    #[test]
    fn from_delta_uses_signum_only() {
        assert_eq!(Direction::from_delta(7, 0), Some(Direction::East));
        assert_eq!(Direction::from_delta(-3, 9), Some(Direction::SouthWest));
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn tile_center_and_back() {
        let tile = TileCoord::new(4, 7);
        let center = tile.center();
        assert_eq!(center, PointF::new(4.5, 7.5));
        assert_eq!(center.tile(), tile);
    }
}

// ── AttributeMap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod attrs {
    use super::*;

    #[test]
    fn absent_keys_take_defaults() {
        let map = AttributeMap::new();
        assert_eq!(map.get_f64_or("chance_to_run", 1.0).unwrap(), 1.0);
        assert_eq!(map.get_i32_or("threshold", 3).unwrap(), 3);
        assert_eq!(map.get_range_or("damage", (1, 2)).unwrap(), (1, 2));
    }

    #[test]
    fn range_token_parses() {
        let mut map = AttributeMap::new();
        map.set("healing_power", "1~3");
        assert_eq!(map.get_range_or("healing_power", (0, 0)).unwrap(), (1, 3));
    }

    #[test]
    fn malformed_range_is_fatal() {
        let mut map = AttributeMap::new();
        map.set("damage", "1-3");
        assert!(map.get_range_or("damage", (0, 0)).is_err());

        map.set("damage", "5~2");
        assert!(map.get_range_or("damage", (0, 0)).is_err());
    }

    #[test]
    fn malformed_number_is_fatal() {
        let mut map = AttributeMap::new();
        map.set("chance_to_run", "often");
        assert!(map.get_f64_or("chance_to_run", 1.0).is_err());
    }

    #[test]
    fn kv_list_round_trip() {
        let map = AttributeMap::parse_kv_list("damage=1~3; hit_chance=0.8").unwrap();
        assert_eq!(map.get("damage"), Some("1~3"));
        assert_eq!(map.get_f64_or("hit_chance", 0.0).unwrap(), 0.8);
    }

    #[test]
    fn kv_list_without_equals_is_fatal() {
        assert!(AttributeMap::parse_kv_list("damage").is_err());
    }
}

// ── RNG determinism ───────────────────────────────────────────────────────────

#[cfg(test)]
mod rng {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = ActorRng::new(42, ActorId(7));
        let mut b = ActorRng::new(42, ActorId(7));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn different_actors_different_streams() {
        let mut a = ActorRng::new(42, ActorId(0));
        let mut b = ActorRng::new(42, ActorId(1));
        let draws_a: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let draws_b: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn roll_is_half_open() {
        let mut rng = ActorRng::new(0, ActorId(0));
        for _ in 0..1000 {
            let r = rng.roll();
            assert!((0.0..1.0).contains(&r));
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

#[test]
fn clock_advances_by_tick_delta() {
    let config = SimConfig { tick_delta: 0.5, ..SimConfig::default() };
    let mut clock = config.make_clock();
    assert_eq!(clock.now, 0.0);
    clock.advance();
    clock.advance();
    assert_eq!(clock.now, 1.0);
}
