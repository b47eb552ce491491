//! arena — smallest demo for the rust_rg roguelike simulation core.
//!
//! A lone hero clears a walled arena of goblins while a shaman keeps the
//! warband patched up.  The hero is driven by a tiny scripted policy (attack
//! if adjacent, otherwise close distance); everything else runs on the
//! utility-AI behaviors from blueprint configuration.

use std::io::Cursor;

use anyhow::Result;

use rg_actor::load_blueprints_reader;
use rg_behavior::Action;
use rg_combat::AttackIntent;
use rg_core::{SimConfig, TileCoord};
use rg_map::{TileGrid, find_path};
use rg_sim::{Sim, SimBuilder, StdoutSink};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const MAX_FRAMES: usize = 200;

const HERO_DAMAGE: (i32, i32) = (2, 4);
const HERO_HIT_CHANCE: f64 = 0.9;

// ── Map ───────────────────────────────────────────────────────────────────────

const ARENA_ROWS: [&str; 11] = [
    "###############",
    "#.............#",
    "#.....#.......#",
    "#.....#.......#",
    "#.....#.......#",
    "#.............#",
    "#.......#.....#",
    "#.......#.....#",
    "#.......#.....#",
    "#.............#",
    "###############",
];

// ── Blueprints ────────────────────────────────────────────────────────────────

const BLUEPRINT_CSV: &str = "\
name,glyph,faction,max_health,sight_radius,inventory_capacity,behaviors,attrs
goblin,g,1,6,8.0,2,flee;melee_attack;chase;wander,damage=1~3;hit_chance=0.7;flee_threshold=2
shaman,s,1,5,8.0,1,flee;heal_ally;melee_attack;wander,damage=1~2;hit_chance=0.5;healing_power=1~3;flee_threshold=2
";

// ── Hero policy ───────────────────────────────────────────────────────────────

/// Attack the closest visible enemy if adjacent, otherwise walk toward it.
fn hero_action(sim: &Sim) -> Action {
    let Some(hero) = sim.actors.get(sim.player()) else {
        return Action::Rest;
    };
    let target = hero
        .vision
        .actors
        .iter()
        .map(|&(_, id)| id)
        .find(|&id| {
            sim.actors.get(id).is_some_and(|other| {
                sim.factions
                    .is_enemy(hero.id, hero.faction, other.id, other.faction)
            })
        });
    let Some(target) = target else {
        return Action::Rest;
    };
    let Some(target_pos) = sim.actors.get(target).map(|a| a.pos) else {
        return Action::Rest;
    };

    if hero.pos.euclidean(target_pos) < 2.0 {
        return Action::Attack(AttackIntent {
            attacker: hero.id,
            target,
            min_damage: HERO_DAMAGE.0,
            max_damage: HERO_DAMAGE.1,
            hit_chance: HERO_HIT_CHANCE,
        });
    }
    let step = find_path(&sim.grid, hero.pos, target_pos)
        .and_then(|path| path.first_step())
        .and_then(|next| sim.grid.direction_to(hero.pos, next));
    match step {
        Some(dir) => Action::Step(dir),
        None => Action::Rest,
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== arena — rust_rg roguelike core ===");
    println!("Seed: {SEED}  |  Frame budget: {MAX_FRAMES}");
    println!();

    // 1. Build the map and the sim.
    let grid = TileGrid::from_rows(&ARENA_ROWS)?;
    let config = SimConfig {
        seed: SEED,
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::new(config).grid(grid).build()?;

    // 2. Load blueprints from the embedded CSV.
    let blueprints = load_blueprints_reader(Cursor::new(BLUEPRINT_CSV))?;
    println!("Loaded {} blueprints", blueprints.len());

    // 3. Populate: hero vs. a goblin warband.
    sim.factions
        .set_faction_default(rg_core::FactionId(0), rg_core::FactionId(1), -5);
    let hero = sim.spawn_player("hero", TileCoord::new(2, 2))?;
    for pos in [TileCoord::new(11, 3), TileCoord::new(12, 8), TileCoord::new(3, 8)] {
        sim.spawn_npc(&blueprints["goblin"], pos)?;
    }
    sim.spawn_npc(&blueprints["shaman"], TileCoord::new(12, 4))?;
    println!("Spawned 1 hero, 3 goblins, 1 shaman");
    println!();

    // 4. Run until the arena is clear, someone wins, or the budget runs out.
    let mut sink = StdoutSink;
    let mut frames = 0;
    for _ in 0..MAX_FRAMES {
        sim.queue_player_action(hero_action(&sim));
        let report = sim.step_frame(&mut sink)?;
        frames += 1;
        if report.game_over {
            println!();
            println!("The hero has fallen.");
            break;
        }
        if sim.actors.len() == 1 {
            println!();
            println!("The arena is clear.");
            break;
        }
    }

    // 5. Summary.
    println!();
    println!(
        "Frames: {frames}  |  Sim time: {:.1}  |  Kills: {}",
        sim.clock.now, sim.combat.kill_count
    );
    if let Some(hero) = sim.actors.get(hero) {
        println!(
            "Hero: {}/{} health at {}",
            hero.health, hero.max_health, hero.pos
        );
    }
    println!("Survivors:");
    for actor in sim.actors.iter() {
        println!(
            "  {:<8} {} {}/{} hp",
            actor.name, actor.pos, actor.health, actor.max_health
        );
    }

    Ok(())
}
