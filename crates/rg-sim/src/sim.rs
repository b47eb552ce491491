//! The `Sim` struct: spawning, the frame loop, action application, vision
//! refresh, and entity cleanup.

use std::collections::BTreeMap;

use rg_actor::{Actor, ActorArena, Blueprint, FactionTable, Item, ItemArena, ItemKind, Vision};
use rg_behavior::{Action, Behavior, BehaviorRegistry, MessageBuffer, WorldView, select};
use rg_combat::{AttackIntent, AttackOutcome, CombatEngine};
use rg_core::{
    ActorId, ActorRng, Direction, FactionId, ItemId, NPC_SPAWN_DELAY, SimClock, SimConfig, SimRng,
    TileCoord,
};
use rg_map::{TileGrid, line_of_sight};

use crate::observer::{MessageSink, Severity, SimObserver};
use crate::turn_queue::TurnQueue;
use crate::{SimError, SimResult};

/// Faction shift applied to the victim's view of an attacker on a landed hit.
const HIT_STANDING_DELTA: i32 = -2;
/// Faction shift applied to the patient's view of a healer on a landed heal.
const HEAL_STANDING_DELTA: i32 = 1;

// ── FrameReport ───────────────────────────────────────────────────────────────

/// What one call to [`Sim::step_frame`] accomplished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Actor turns processed this frame.
    pub acted: usize,
    /// Mirrors the combat engine's game-over flag after the frame.
    pub game_over: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation context: exclusive owner of the map, the entity arenas,
/// the scheduler queue, and every per-actor decision stream.
///
/// Behaviors and per-actor RNGs live in side tables keyed by `ActorId`
/// rather than on `Actor` itself: the turn loop needs them `&mut` while the
/// behavior reads the rest of the world through a [`WorldView`], and the
/// split keeps those borrows disjoint.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub config: SimConfig,
    pub clock: SimClock,
    pub grid: TileGrid,
    pub actors: ActorArena,
    pub items: ItemArena,
    pub factions: FactionTable,
    pub combat: CombatEngine,
    pub(crate) queue: TurnQueue,
    pub(crate) registry: BehaviorRegistry,
    pub(crate) behaviors: BTreeMap<ActorId, Vec<Box<dyn Behavior>>>,
    pub(crate) rngs: BTreeMap<ActorId, ActorRng>,
    pub(crate) rng: SimRng,
    pub(crate) player: ActorId,
    pub(crate) pending_player_action: Option<Action>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, grid: TileGrid, registry: BehaviorRegistry) -> Self {
        Self {
            clock: config.make_clock(),
            combat: CombatEngine::new(config.protect_player),
            rng: SimRng::new(config.seed),
            config,
            grid,
            actors: ActorArena::new(),
            items: ItemArena::new(),
            factions: FactionTable::new(),
            queue: TurnQueue::new(),
            registry,
            behaviors: BTreeMap::new(),
            rngs: BTreeMap::new(),
            player: ActorId::INVALID,
            pending_player_action: None,
        }
    }

    pub fn player(&self) -> ActorId {
        self.player
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_queued(&self, id: ActorId) -> bool {
        self.queue.contains(id)
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Create the player at `pos`, queued to act at the current clock so its
    /// first action is processed before any same-instant NPC.
    pub fn spawn_player(&mut self, name: &str, pos: TileCoord) -> SimResult<ActorId> {
        let id = self.actors.insert(Actor {
            id: ActorId::INVALID,
            name: name.to_owned(),
            glyph: '@',
            pos,
            health: 10,
            max_health: 10,
            faction: FactionId(0),
            is_player: true,
            sight_radius: self.config.default_sight_radius,
            inventory: Vec::new(),
            inventory_capacity: 8,
            equipped_weapon: None,
            equipped_armor: None,
            vision: Vision::default(),
        });
        self.grid.set_occupant(pos, id)?;
        self.rngs.insert(id, ActorRng::new(self.config.seed, id));
        self.queue.push(self.clock.now, id);
        self.player = id;
        self.refresh_all_vision();
        Ok(id)
    }

    /// Instantiate `blueprint` at `pos`.  NPCs are queued slightly behind
    /// the current clock so the player wins same-instant ties.
    pub fn spawn_npc(&mut self, blueprint: &Blueprint, pos: TileCoord) -> SimResult<ActorId> {
        let id = self.actors.insert(blueprint.instantiate(pos));
        self.grid.set_occupant(pos, id)?;
        let behaviors = self
            .registry
            .build_set(&blueprint.behaviors, &blueprint.attrs)?;
        self.behaviors.insert(id, behaviors);
        self.rngs.insert(id, ActorRng::new(self.config.seed, id));
        self.queue.push(self.clock.now + NPC_SPAWN_DELAY, id);
        self.refresh_all_vision();
        Ok(id)
    }

    /// Instantiate `blueprint` on a random open tile.
    pub fn spawn_npc_anywhere(&mut self, blueprint: &Blueprint) -> SimResult<ActorId> {
        let pos = self
            .grid
            .random_open_coord(&mut self.rng)
            .ok_or(SimError::NoSpawnTile)?;
        self.spawn_npc(blueprint, pos)
    }

    /// Add an item to the world.  With `pos`, it is placed on the ground.
    pub fn spawn_item(&mut self, mut item: Item, pos: Option<TileCoord>) -> SimResult<ItemId> {
        item.pos = pos;
        let id = self.items.insert(item);
        if let Some(pos) = pos {
            self.grid.place_item(pos, id)?;
        }
        self.refresh_all_vision();
        Ok(id)
    }

    // ── Player input ──────────────────────────────────────────────────────

    /// Queue the player's next action.  The frame loop halts on the player's
    /// turn until one is present.
    pub fn queue_player_action(&mut self, action: Action) {
        self.pending_player_action = Some(action);
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Process every actor turn due at or before the current clock, advance
    /// the clock if anything acted, then run the cleanup pass.
    ///
    /// Stepping halts early when the next actor's ready time is in the
    /// future, or when it is the player's turn and no action is queued — a
    /// blocked actor is never skipped, so strict time ordering holds.
    pub fn step_frame(&mut self, sink: &mut dyn MessageSink) -> SimResult<FrameReport> {
        let mut acted = 0;
        loop {
            let Some((ready, next)) = self.queue.peek() else {
                break;
            };
            if ready > self.clock.now {
                break;
            }
            if next == self.player && self.pending_player_action.is_none() {
                break;
            }
            let Some((_, actor)) = self.queue.pop() else {
                break;
            };
            let action = if actor == self.player {
                self.pending_player_action.take().unwrap_or(Action::Rest)
            } else {
                self.decide_npc(actor, sink)?
            };
            let duration = action.duration();
            self.apply_action(actor, action, sink)?;
            acted += 1;
            if self.actors.get(actor).is_some_and(|a| !a.is_dead()) {
                self.queue.push(self.clock.now + duration, actor);
            }
        }
        if acted > 0 {
            self.clock.advance();
        }
        self.cleanup();
        Ok(FrameReport {
            acted,
            game_over: self.combat.game_over,
        })
    }

    /// Step up to `frames` frames, stopping early at game over.
    pub fn run_frames(
        &mut self,
        frames: usize,
        sink: &mut dyn MessageSink,
        observer: &mut dyn SimObserver,
    ) -> SimResult<()> {
        for _ in 0..frames {
            let report = self.step_frame(sink)?;
            observer.on_frame_end(self.clock.now, report.acted);
            if report.game_over {
                break;
            }
        }
        observer.on_run_end(self.clock.now);
        Ok(())
    }

    // ── NPC decisions ─────────────────────────────────────────────────────

    /// Run arbitration for one NPC and return its chosen action.
    ///
    /// The behavior list and RNG are taken out of their side tables for the
    /// duration of the call so the behavior can borrow the rest of the world
    /// immutably through a [`WorldView`].
    fn decide_npc(&mut self, id: ActorId, sink: &mut dyn MessageSink) -> SimResult<Action> {
        let mut behaviors = self.behaviors.remove(&id).unwrap_or_default();
        let mut rng = self
            .rngs
            .remove(&id)
            .unwrap_or_else(|| ActorRng::new(self.config.seed, id));
        let mut messages = MessageBuffer::new();

        let action = {
            let view = WorldView {
                now: self.clock.now,
                grid: &self.grid,
                actors: &self.actors,
                items: &self.items,
                factions: &self.factions,
            };
            match self.actors.get(id) {
                None => Action::Rest,
                Some(actor) => match select(&mut behaviors, actor, &view) {
                    None => Action::Rest,
                    Some(index) => {
                        if behaviors[index].passes_chance_to_run(&mut rng) {
                            behaviors[index].run(actor, &view, &mut rng, &mut messages)
                        } else {
                            Action::Rest
                        }
                    }
                },
            }
        };

        self.behaviors.insert(id, behaviors);
        self.rngs.insert(id, rng);

        if self.player_sees(id) {
            for line in messages.drain() {
                sink.print_message(&line, Severity::Info);
            }
        }
        Ok(action)
    }

    // ── Action application ────────────────────────────────────────────────

    fn apply_action(
        &mut self,
        id: ActorId,
        action: Action,
        sink: &mut dyn MessageSink,
    ) -> SimResult<()> {
        match action {
            Action::Rest => Ok(()),
            Action::Step(dir) => self.apply_step(id, dir),
            Action::Attack(intent) => self.apply_attack(&intent, sink),
            Action::PickUp(item) => self.apply_pickup(id, item, sink),
        }
    }

    /// Move one tile.  A blocked destination silently spends the turn.
    fn apply_step(&mut self, id: ActorId, dir: Direction) -> SimResult<()> {
        let Some(actor) = self.actors.get(id) else {
            return Ok(());
        };
        let from = actor.pos;
        let dest = from.step(dir);
        if !self.grid.is_open(dest) {
            return Ok(());
        }
        self.grid.clear_occupant(from);
        self.grid.set_occupant(dest, id)?;
        if let Some(actor) = self.actors.get_mut(id) {
            actor.pos = dest;
        }
        self.refresh_vision(id);
        Ok(())
    }

    fn apply_attack(&mut self, intent: &AttackIntent, sink: &mut dyn MessageSink) -> SimResult<()> {
        // A target that died since arbitration turns the attack into a
        // wasted turn, not an error.  That includes corpses still awaiting
        // the end-of-frame cleanup: one kill, one report.
        if !self.actors.contains(intent.attacker) {
            return Ok(());
        }
        if self.actors.get(intent.target).is_none_or(|t| t.is_dead()) {
            return Ok(());
        }
        let Some(rng) = self.rngs.get_mut(&intent.attacker) else {
            return Ok(());
        };
        let report = self
            .combat
            .perform_attack(&mut self.actors, &self.items, intent, rng)?;

        if report.hit {
            let attacker = self.actors.get(intent.attacker).map(|a| a.faction);
            let target = self.actors.get(intent.target).map(|t| t.faction);
            if let (Some(af), Some(tf)) = (attacker, target) {
                let delta = if report.outcome == AttackOutcome::Heal {
                    HEAL_STANDING_DELTA
                } else {
                    HIT_STANDING_DELTA
                };
                self.factions
                    .adjust(intent.target, tf, intent.attacker, af, delta);
            }
        }

        if self.player_sees(intent.attacker) || self.player_sees(intent.target) {
            let severity = if report.outcome == AttackOutcome::Kill {
                Severity::Critical
            } else {
                Severity::Combat
            };
            sink.print_message(&report.message, severity);
        }
        Ok(())
    }

    fn apply_pickup(
        &mut self,
        id: ActorId,
        item_id: ItemId,
        sink: &mut dyn MessageSink,
    ) -> SimResult<()> {
        let Some(actor) = self.actors.get(id) else {
            return Ok(());
        };
        if actor.inventory_full() {
            return Ok(());
        }
        let pos = actor.pos;
        if self.grid.item_at(pos) != Some(item_id) || !self.items.contains(item_id) {
            return Ok(());
        }
        self.grid.take_item(pos);

        let mut item_name = String::new();
        let mut kind = ItemKind::Trinket;
        if let Some(item) = self.items.get_mut(item_id) {
            item.pos = None;
            item_name = item.name.clone();
            kind = item.kind;
        }
        if let Some(actor) = self.actors.get_mut(id) {
            actor.inventory.push(item_id);
            match kind {
                ItemKind::Weapon if actor.equipped_weapon.is_none() => {
                    actor.equipped_weapon = Some(item_id);
                }
                ItemKind::Armor if actor.equipped_armor.is_none() => {
                    actor.equipped_armor = Some(item_id);
                }
                _ => {}
            }
        }

        // The item left the ground: nobody can see or chase it any more.
        self.forget_item(item_id);

        if self.player_sees(id) {
            let line = if id == self.player {
                format!("You pick up the {item_name}.")
            } else {
                let name = self
                    .actors
                    .get(id)
                    .map(|a| a.name.clone())
                    .unwrap_or_default();
                format!("The {name} picks up the {item_name}.")
            };
            sink.print_message(&line, Severity::Info);
        }
        Ok(())
    }

    // ── Vision ────────────────────────────────────────────────────────────

    /// Rebuild one actor's visible-entity cache: everything within its sight
    /// radius with clear line of sight, sorted nearest-first.
    pub(crate) fn refresh_vision(&mut self, id: ActorId) {
        let Some(observer) = self.actors.get(id) else {
            return;
        };
        let (pos, radius) = (observer.pos, observer.sight_radius);

        let mut seen_actors: Vec<(f32, ActorId)> = Vec::new();
        for other in self.actors.iter() {
            if other.id == id {
                continue;
            }
            let dist = pos.euclidean(other.pos);
            if dist <= radius && line_of_sight(&self.grid, pos, other.pos) {
                seen_actors.push((dist, other.id));
            }
        }
        let mut seen_items: Vec<(f32, ItemId)> = Vec::new();
        for item in self.items.iter() {
            let Some(item_pos) = item.pos else {
                continue;
            };
            let dist = pos.euclidean(item_pos);
            if dist <= radius && line_of_sight(&self.grid, pos, item_pos) {
                seen_items.push((dist, item.id));
            }
        }
        // Stable sorts; the arena iterates in ascending ID, so equidistant
        // entries keep that order.
        seen_actors.sort_by(|a, b| a.0.total_cmp(&b.0));
        seen_items.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(observer) = self.actors.get_mut(id) {
            observer.vision.actors = seen_actors;
            observer.vision.items = seen_items;
        }
    }

    pub(crate) fn refresh_all_vision(&mut self) {
        for id in self.actors.ids() {
            self.refresh_vision(id);
        }
    }

    fn player_sees(&self, id: ActorId) -> bool {
        id == self.player
            || self
                .actors
                .get(self.player)
                .is_some_and(|p| p.vision.sees_actor(id))
    }

    // ── Cleanup ───────────────────────────────────────────────────────────

    /// Reap everything with `health <= 0`: vacate its tile, drop it from the
    /// queue and the faction table, null every cached reference to it, and
    /// remove it (and its carried items) from the arenas.  Runs every frame;
    /// a no-op when nothing is dead.
    fn cleanup(&mut self) {
        let dead: Vec<ActorId> = self
            .actors
            .iter()
            .filter(|a| a.is_dead())
            .map(|a| a.id)
            .collect();

        for id in dead {
            let Some(corpse) = self.actors.remove(id) else {
                continue;
            };
            self.grid.clear_occupant(corpse.pos);
            self.queue.remove_actor(id);
            self.factions.forget_actor(id);
            self.behaviors.remove(&id);
            self.rngs.remove(&id);

            for survivor in self.actors.iter_mut() {
                survivor.vision.forget_actor(id);
            }
            for set in self.behaviors.values_mut() {
                for behavior in set.iter_mut() {
                    behavior.on_actor_removed(id);
                }
            }

            // Carried items go down with their owner.
            for item in corpse.inventory {
                self.items.remove(item);
                self.forget_item(item);
            }
        }
    }

    /// Dereference pass for one removed (or pocketed) item.
    fn forget_item(&mut self, id: ItemId) {
        for actor in self.actors.iter_mut() {
            actor.vision.forget_item(id);
        }
        for set in self.behaviors.values_mut() {
            for behavior in set.iter_mut() {
                behavior.on_item_removed(id);
            }
        }
    }
}
