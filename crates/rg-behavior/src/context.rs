//! Read-only world snapshot handed to behaviors, plus the message buffer
//! they narrate into.

use rg_actor::{Actor, ActorArena, FactionTable, ItemArena};
use rg_core::{ActorId, ItemId, SimTime, TileCoord};
use rg_map::TileGrid;

// ── WorldView ─────────────────────────────────────────────────────────────────

/// Everything a behavior may read while scoring or running.
///
/// Borrowed immutably from the sim for the duration of one actor's turn.
/// The common "closest X" queries walk the actor's vision cache, which is
/// sorted nearest-first, so each is a linear scan with early exit.
pub struct WorldView<'a> {
    pub now: SimTime,
    pub grid: &'a TileGrid,
    pub actors: &'a ActorArena,
    pub items: &'a ItemArena,
    pub factions: &'a FactionTable,
}

impl WorldView<'_> {
    /// The closest visible actor `observer` regards as an enemy, with its
    /// distance.
    pub fn nearest_enemy(&self, observer: &Actor) -> Option<(f32, ActorId)> {
        observer.vision.actors.iter().copied().find(|&(_, id)| {
            self.actors.get(id).is_some_and(|other| {
                self.factions
                    .is_enemy(observer.id, observer.faction, other.id, other.faction)
            })
        })
    }

    /// The closest visible ally of `observer` that is missing health.
    pub fn nearest_wounded_ally(&self, observer: &Actor) -> Option<(f32, ActorId)> {
        observer.vision.actors.iter().copied().find(|&(_, id)| {
            self.actors.get(id).is_some_and(|other| {
                !other.at_full_health()
                    && self
                        .factions
                        .is_ally(observer.id, observer.faction, other.id, other.faction)
            })
        })
    }

    /// The closest visible item still lying on the ground within `radius`.
    pub fn nearest_ground_item(&self, observer: &Actor, radius: f64) -> Option<(f32, ItemId)> {
        observer
            .vision
            .items
            .iter()
            .copied()
            .take_while(|&(dist, _)| f64::from(dist) <= radius)
            .find(|&(_, id)| self.items.get(id).is_some_and(|item| item.pos.is_some()))
    }

    /// Current position of an actor, if it still exists.
    pub fn actor_pos(&self, id: ActorId) -> Option<TileCoord> {
        self.actors.get(id).map(|a| a.pos)
    }
}

// ── MessageBuffer ─────────────────────────────────────────────────────────────

/// Narration lines produced during one turn.
///
/// Behaviors push plain text; the sim drains the buffer after the turn,
/// gates each line by player visibility, and forwards the survivors to the
/// message sink.
#[derive(Debug, Default)]
pub struct MessageBuffer {
    lines: Vec<String>,
}

impl MessageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take all buffered lines, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}
