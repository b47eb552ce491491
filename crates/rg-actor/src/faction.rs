//! Faction standings: who counts as an enemy or ally of whom.
//!
//! Standings are plain integers.  Classification is threshold-based:
//! standing below zero is an enemy, above zero an ally, zero neutral.
//! Lookup precedence, most specific first:
//!
//! 1. per-(actor, actor) override — accumulated from combat outcomes
//! 2. per-(actor, faction) override
//! 3. symmetric (faction, faction) default
//! 4. same faction ⇒ [`SAME_FACTION_STANDING`]; otherwise 0 (neutral)

use rg_core::{ActorId, FactionId};
use rustc_hash::FxHashMap;

/// Default standing between members of the same faction when no override
/// exists — kin are allies out of the box.
pub const SAME_FACTION_STANDING: i32 = 2;

/// Integer relationship scores per actor pair and per faction pair.
#[derive(Default)]
pub struct FactionTable {
    actor_pairs: FxHashMap<(ActorId, ActorId), i32>,
    actor_factions: FxHashMap<(ActorId, FactionId), i32>,
    faction_defaults: FxHashMap<(FactionId, FactionId), i32>,
}

impl FactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symmetric default standing between two factions.
    pub fn set_faction_default(&mut self, a: FactionId, b: FactionId, standing: i32) {
        self.faction_defaults.insert((a, b), standing);
        self.faction_defaults.insert((b, a), standing);
    }

    /// Set how `observer` (specifically) regards everyone in `faction`.
    pub fn set_actor_faction(&mut self, observer: ActorId, faction: FactionId, standing: i32) {
        self.actor_factions.insert((observer, faction), standing);
    }

    /// Shift how `observer` regards `other` by `delta` (combat-outcome
    /// adjustment).  Creates the pair override from the current effective
    /// standing if absent, so the first hit already flips a neutral pair
    /// hostile.
    pub fn adjust(
        &mut self,
        observer: ActorId,
        observer_faction: FactionId,
        other: ActorId,
        other_faction: FactionId,
        delta: i32,
    ) {
        let base = self.standing(observer, observer_faction, other, other_faction);
        self.actor_pairs.insert((observer, other), base + delta);
    }

    /// The effective standing of `observer` toward `other`.
    pub fn standing(
        &self,
        observer: ActorId,
        observer_faction: FactionId,
        other: ActorId,
        other_faction: FactionId,
    ) -> i32 {
        if let Some(&s) = self.actor_pairs.get(&(observer, other)) {
            return s;
        }
        if let Some(&s) = self.actor_factions.get(&(observer, other_faction)) {
            return s;
        }
        if let Some(&s) = self.faction_defaults.get(&(observer_faction, other_faction)) {
            return s;
        }
        if observer_faction == other_faction {
            SAME_FACTION_STANDING
        } else {
            0
        }
    }

    pub fn is_enemy(
        &self,
        observer: ActorId,
        observer_faction: FactionId,
        other: ActorId,
        other_faction: FactionId,
    ) -> bool {
        observer != other && self.standing(observer, observer_faction, other, other_faction) < 0
    }

    pub fn is_ally(
        &self,
        observer: ActorId,
        observer_faction: FactionId,
        other: ActorId,
        other_faction: FactionId,
    ) -> bool {
        observer != other && self.standing(observer, observer_faction, other, other_faction) > 0
    }

    /// Drop every row mentioning a removed actor (cleanup pass).
    pub fn forget_actor(&mut self, id: ActorId) {
        self.actor_pairs.retain(|&(a, b), _| a != id && b != id);
        self.actor_factions.retain(|&(a, _), _| a != id);
    }

    /// Flat dump of actor-pair overrides for save files, sorted for
    /// deterministic output.
    pub fn pair_entries(&self) -> Vec<(ActorId, ActorId, i32)> {
        let mut rows: Vec<_> = self
            .actor_pairs
            .iter()
            .map(|(&(a, b), &s)| (a, b, s))
            .collect();
        rows.sort_unstable();
        rows
    }

    /// Restore one actor-pair override (save/load reconstruction).
    pub fn restore_pair(&mut self, observer: ActorId, other: ActorId, standing: i32) {
        self.actor_pairs.insert((observer, other), standing);
    }
}
