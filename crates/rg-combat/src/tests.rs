use rg_actor::{Actor, ActorArena, Item, ItemArena, ItemKind, Vision};
use rg_core::{ActorId, ActorRng, FactionId, TileCoord};

use crate::{AttackIntent, AttackOutcome, CombatEngine};

fn actor(name: &str, health: i32, is_player: bool) -> Actor {
    Actor {
        id: ActorId::INVALID,
        name: name.to_owned(),
        glyph: if is_player { '@' } else { name.chars().next().unwrap() },
        pos: TileCoord { x: 0, y: 0 },
        health,
        max_health: health,
        faction: FactionId(0),
        is_player,
        sight_radius: 8.0,
        inventory: Vec::new(),
        inventory_capacity: 4,
        equipped_weapon: None,
        equipped_armor: None,
        vision: Vision::default(),
    }
}

fn item(name: &str, kind: ItemKind, power: i32) -> Item {
    Item {
        id: rg_core::ItemId::INVALID,
        name: name.to_owned(),
        glyph: '/',
        pos: None,
        kind,
        power,
    }
}

fn duel(attacker_hp: i32, target_hp: i32) -> (ActorArena, ActorId, ActorId) {
    let mut actors = ActorArena::new();
    let a = actors.insert(actor("orc", attacker_hp, false));
    let t = actors.insert(actor("rat", target_hp, false));
    (actors, a, t)
}

fn rng() -> ActorRng {
    ActorRng::new(7, ActorId(0))
}

mod hit_roll {
    use super::*;

    #[test]
    fn certain_attack_never_misses() {
        let (mut actors, a, t) = duel(10, 100);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 1, max_damage: 3, hit_chance: 1.0 };
        for _ in 0..200 {
            let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
            assert!(report.hit);
            assert_ne!(report.outcome, AttackOutcome::Miss);
        }
    }

    #[test]
    fn impossible_attack_always_misses() {
        let (mut actors, a, t) = duel(10, 10);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 1, max_damage: 3, hit_chance: 0.0 };
        for _ in 0..200 {
            let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
            assert_eq!(report.outcome, AttackOutcome::Miss);
            assert_eq!(report.damage, 0);
        }
        assert_eq!(actors.get(t).unwrap().health, 10);
    }

    #[test]
    fn failed_heal_reports_heal_miss() {
        let (mut actors, a, t) = duel(10, 10);
        actors.get_mut(t).unwrap().health = 4;
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: -1, max_damage: -3, hit_chance: 0.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.outcome, AttackOutcome::HealMiss);
        assert_eq!(actors.get(t).unwrap().health, 4);
    }
}

mod damage {
    use super::*;

    #[test]
    fn damage_stays_within_sampled_bounds() {
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        for _ in 0..200 {
            let (mut actors, a, t) = duel(10, 1000);
            let intent = AttackIntent { attacker: a, target: t, min_damage: 2, max_damage: 5, hit_chance: 1.0 };
            let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
            assert!(report.damage >= 2 && report.damage <= 5, "damage {}", report.damage);
            assert_eq!(actors.get(t).unwrap().health, 1000 - report.damage);
        }
    }

    #[test]
    fn weapon_power_adds_to_damage() {
        let (mut actors, a, t) = duel(10, 1000);
        let mut items = ItemArena::new();
        let sword = items.insert(item("sword", ItemKind::Weapon, 4));
        actors.get_mut(a).unwrap().equipped_weapon = Some(sword);
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 2, max_damage: 2, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.damage, 6);
    }

    #[test]
    fn armor_subtracts_half_power_floored() {
        let (mut actors, a, t) = duel(10, 1000);
        let mut items = ItemArena::new();
        let mail = items.insert(item("mail", ItemKind::Armor, 5));
        actors.get_mut(t).unwrap().equipped_armor = Some(mail);
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 3, max_damage: 3, hit_chance: 1.0 };
        // 3 - floor(5 / 2) = 1
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.damage, 1);
    }

    #[test]
    fn heavy_armor_clamps_damage_to_zero() {
        let (mut actors, a, t) = duel(10, 10);
        let mut items = ItemArena::new();
        let plate = items.insert(item("plate", ItemKind::Armor, 20));
        actors.get_mut(t).unwrap().equipped_armor = Some(plate);
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 1, max_damage: 3, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.damage, 0);
        assert_eq!(report.outcome, AttackOutcome::Hit);
        assert_eq!(actors.get(t).unwrap().health, 10);
    }
}

mod healing {
    use super::*;

    #[test]
    fn heal_restores_within_range_and_clamps_at_max() {
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        for _ in 0..200 {
            let (mut actors, a, t) = duel(10, 10);
            actors.get_mut(t).unwrap().health = 8;
            let intent = AttackIntent { attacker: a, target: t, min_damage: -1, max_damage: -3, hit_chance: 1.0 };
            let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
            assert_eq!(report.outcome, AttackOutcome::Heal);
            assert!(report.damage <= 0);
            let health = actors.get(t).unwrap().health;
            assert!(health >= 9 && health <= 10, "health {health}");
        }
    }

    #[test]
    fn heal_never_kills() {
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        for _ in 0..200 {
            let (mut actors, a, t) = duel(10, 10);
            actors.get_mut(t).unwrap().health = 1;
            let intent = AttackIntent { attacker: a, target: t, min_damage: -1, max_damage: -3, hit_chance: 1.0 };
            let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
            assert_ne!(report.outcome, AttackOutcome::Kill);
            assert!(actors.get(t).unwrap().health >= 1);
        }
        assert_eq!(engine.kill_count, 0);
        assert!(!engine.game_over);
    }
}

mod lethality {
    use super::*;

    #[test]
    fn lethal_damage_reports_kill_and_goes_negative() {
        let (mut actors, a, t) = duel(10, 3);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 5, max_damage: 5, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.outcome, AttackOutcome::Kill);
        assert_eq!(actors.get(t).unwrap().health, -2);
        assert!(actors.get(t).unwrap().is_dead());
    }

    #[test]
    fn player_kill_increments_kill_count() {
        let mut actors = ActorArena::new();
        let a = actors.insert(actor("hero", 20, true));
        let t = actors.insert(actor("rat", 2, false));
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 5, max_damage: 5, hit_chance: 1.0 };
        engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(engine.kill_count, 1);
        assert!(!engine.game_over);
    }

    #[test]
    fn npc_kill_does_not_increment_kill_count() {
        let (mut actors, a, t) = duel(10, 2);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 5, max_damage: 5, hit_chance: 1.0 };
        engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(engine.kill_count, 0);
    }

    #[test]
    fn player_death_raises_game_over() {
        let mut actors = ActorArena::new();
        let a = actors.insert(actor("orc", 10, false));
        let t = actors.insert(actor("hero", 3, true));
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 5, max_damage: 5, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.outcome, AttackOutcome::Kill);
        assert!(engine.game_over);
    }

    #[test]
    fn protective_mode_clamps_player_to_one_health() {
        let mut actors = ActorArena::new();
        let a = actors.insert(actor("orc", 10, false));
        let t = actors.insert(actor("hero", 3, true));
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(true);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 50, max_damage: 50, hit_chance: 1.0 };
        for _ in 0..5 {
            let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
            assert_eq!(report.outcome, AttackOutcome::Hit);
            assert_eq!(actors.get(t).unwrap().health, 1);
        }
        assert!(!engine.game_over);
    }

    #[test]
    fn protective_mode_does_not_shield_npcs() {
        let (mut actors, a, t) = duel(10, 2);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(true);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 5, max_damage: 5, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.outcome, AttackOutcome::Kill);
    }
}

mod narration {
    use super::*;

    #[test]
    fn messages_take_the_player_perspective() {
        let mut actors = ActorArena::new();
        let hero = actors.insert(actor("hero", 20, true));
        let orc = actors.insert(actor("orc", 200, false));
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();

        let outgoing = AttackIntent { attacker: hero, target: orc, min_damage: 2, max_damage: 2, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &outgoing, &mut rng).unwrap();
        assert_eq!(report.message, "You hit the orc for 2 damage.");

        let incoming = AttackIntent { attacker: orc, target: hero, min_damage: 2, max_damage: 2, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &incoming, &mut rng).unwrap();
        assert_eq!(report.message, "The orc hits you for 2 damage.");
    }

    #[test]
    fn third_party_messages_name_both_sides() {
        let (mut actors, a, t) = duel(10, 200);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 2, max_damage: 2, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.message, "The orc hits the rat for 2 damage.");
    }

    #[test]
    fn kill_message_exclaims() {
        let (mut actors, a, t) = duel(10, 1);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 5, max_damage: 5, hit_chance: 1.0 };
        let report = engine.perform_attack(&mut actors, &items, &intent, &mut rng).unwrap();
        assert_eq!(report.message, "The orc kills the rat!");
    }
}

mod errors {
    use super::*;

    #[test]
    fn stale_target_id_is_an_error() {
        let (mut actors, a, t) = duel(10, 10);
        actors.remove(t);
        let items = ItemArena::new();
        let mut engine = CombatEngine::new(false);
        let mut rng = rng();
        let intent = AttackIntent { attacker: a, target: t, min_damage: 1, max_damage: 3, hit_chance: 1.0 };
        assert!(engine.perform_attack(&mut actors, &items, &intent, &mut rng).is_err());
    }
}
