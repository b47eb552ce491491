//! Save records and ID-indirected reconstruction.
//!
//! Entity cross-references (behavior targets, inventory, standings) are
//! serialized as IDs, never as anything resembling a pointer.  Loading runs
//! in two passes: reconstruct every entity first, then resolve the saved
//! IDs — anything that no longer resolves (a target that died between save
//! and, say, a hand-edited file) is dropped rather than trusted.

use rg_actor::{Actor, Item, ItemKind, Vision};
use rg_behavior::{BehaviorRegistry, BehaviorState};
use rg_core::{ActorId, ActorRng, FactionId, ItemId, SimConfig, SimTime, TileCoord};
use rg_map::TileGrid;

use crate::{Sim, SimResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// One saved actor, behaviors included.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ActorRecord {
    pub id: ActorId,
    pub name: String,
    pub glyph: char,
    pub pos: TileCoord,
    pub health: i32,
    pub max_health: i32,
    pub faction: FactionId,
    pub is_player: bool,
    pub sight_radius: f32,
    pub inventory: Vec<ItemId>,
    pub inventory_capacity: usize,
    pub equipped_weapon: Option<ItemId>,
    pub equipped_armor: Option<ItemId>,
    pub behaviors: Vec<BehaviorState>,
}

/// One saved item.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub glyph: char,
    pub pos: Option<TileCoord>,
    pub kind: ItemKind,
    pub power: i32,
}

/// A full session snapshot.  The map itself is regenerated or supplied by
/// the caller; only entity state and the scheduler travel in the file.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct SaveGame {
    pub sim_time: SimTime,
    pub next_actor_id: u32,
    pub next_item_id: u32,
    pub kill_count: u64,
    pub game_over: bool,
    /// Scheduler entries in pop order; same-time runs keep their order.
    pub queue: Vec<(SimTime, ActorId)>,
    pub actors: Vec<ActorRecord>,
    pub items: Vec<ItemRecord>,
    /// Actor-pair standing overrides accumulated from combat.
    pub standings: Vec<(ActorId, ActorId, i32)>,
}

// ── Serialization helpers ─────────────────────────────────────────────────────

pub fn to_json(save: &SaveGame) -> SimResult<String> {
    Ok(serde_json::to_string_pretty(save)?)
}

pub fn from_json(text: &str) -> SimResult<SaveGame> {
    Ok(serde_json::from_str(text)?)
}

// ── Sim round-trip ────────────────────────────────────────────────────────────

impl Sim {
    /// Snapshot the whole session.
    pub fn write_state(&self) -> SaveGame {
        let actors = self
            .actors
            .iter()
            .map(|actor| ActorRecord {
                id: actor.id,
                name: actor.name.clone(),
                glyph: actor.glyph,
                pos: actor.pos,
                health: actor.health,
                max_health: actor.max_health,
                faction: actor.faction,
                is_player: actor.is_player,
                sight_radius: actor.sight_radius,
                inventory: actor.inventory.clone(),
                inventory_capacity: actor.inventory_capacity,
                equipped_weapon: actor.equipped_weapon,
                equipped_armor: actor.equipped_armor,
                behaviors: self
                    .behaviors
                    .get(&actor.id)
                    .map(|set| set.iter().map(|b| b.write_state()).collect())
                    .unwrap_or_default(),
            })
            .collect();
        let items = self
            .items
            .iter()
            .map(|item| ItemRecord {
                id: item.id,
                name: item.name.clone(),
                glyph: item.glyph,
                pos: item.pos,
                kind: item.kind,
                power: item.power,
            })
            .collect();
        SaveGame {
            sim_time: self.clock.now,
            next_actor_id: self.actors.next_id(),
            next_item_id: self.items.next_id(),
            kill_count: self.combat.kill_count,
            game_over: self.combat.game_over,
            queue: self.queue.entries(),
            actors,
            items,
            standings: self.factions.pair_entries(),
        }
    }

    /// Reconstruct a session from a snapshot.
    ///
    /// Pass one restores items then actors under their saved IDs.  Pass two
    /// resolves every saved cross-reference through the arenas, silently
    /// dropping IDs that no longer exist, then rebuilds vision from scratch.
    pub fn from_save(
        config: SimConfig,
        grid: TileGrid,
        registry: BehaviorRegistry,
        save: &SaveGame,
    ) -> SimResult<Sim> {
        let mut sim = Sim::new(config, grid, registry);
        sim.clock.now = save.sim_time;
        sim.combat.kill_count = save.kill_count;
        sim.combat.game_over = save.game_over;

        for record in &save.items {
            sim.items.restore(Item {
                id: record.id,
                name: record.name.clone(),
                glyph: record.glyph,
                pos: record.pos,
                kind: record.kind,
                power: record.power,
            });
            if let Some(pos) = record.pos {
                sim.grid.place_item(pos, record.id)?;
            }
        }
        sim.items.set_next_id(save.next_item_id);

        for record in &save.actors {
            let inventory: Vec<ItemId> = record
                .inventory
                .iter()
                .copied()
                .filter(|&id| sim.items.contains(id))
                .collect();
            sim.actors.restore(Actor {
                id: record.id,
                name: record.name.clone(),
                glyph: record.glyph,
                pos: record.pos,
                health: record.health,
                max_health: record.max_health,
                faction: record.faction,
                is_player: record.is_player,
                sight_radius: record.sight_radius,
                inventory,
                inventory_capacity: record.inventory_capacity,
                equipped_weapon: record
                    .equipped_weapon
                    .filter(|&id| sim.items.contains(id)),
                equipped_armor: record.equipped_armor.filter(|&id| sim.items.contains(id)),
                vision: Vision::default(),
            });
            sim.grid.set_occupant(record.pos, record.id)?;
            sim.rngs
                .insert(record.id, ActorRng::new(sim.config.seed, record.id));
            if record.is_player {
                sim.player = record.id;
            }
        }
        sim.actors.set_next_id(save.next_actor_id);

        // Pointer resolution: every actor exists now, so stale behavior
        // targets can be told apart from live ones.
        for record in &save.actors {
            if record.behaviors.is_empty() {
                continue;
            }
            let mut set = Vec::with_capacity(record.behaviors.len());
            for state in &record.behaviors {
                let mut resolved = state.clone();
                resolved.target = resolved.target.filter(|&id| sim.actors.contains(id));
                resolved.item_target = resolved
                    .item_target
                    .filter(|&id| sim.items.contains(id));
                set.push(sim.registry.restore(&resolved)?);
            }
            sim.behaviors.insert(record.id, set);
        }

        for &(time, id) in &save.queue {
            if sim.actors.contains(id) {
                sim.queue.push(time, id);
            }
        }
        for &(observer, other, standing) in &save.standings {
            if sim.actors.contains(observer) && sim.actors.contains(other) {
                sim.factions.restore_pair(observer, other, standing);
            }
        }

        sim.refresh_all_vision();
        Ok(sim)
    }
}
