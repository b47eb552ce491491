//! Stable-ID slot maps for actors and items.
//!
//! Backed by `BTreeMap` rather than a hash map so that whole-arena scans
//! (cleanup, vision rebuilds, save serialization) iterate in ascending ID
//! order — a determinism requirement, not a performance choice.  IDs are
//! monotonic and never reused within a session, so a lookup of a removed
//! entity's ID fails soft forever.

use std::collections::BTreeMap;

use rg_core::{ActorId, ItemId};

use crate::{Actor, Item};

// ── ActorArena ────────────────────────────────────────────────────────────────

/// Owner of all live actors.
#[derive(Default)]
pub struct ActorArena {
    slots: BTreeMap<ActorId, Actor>,
    next_id: u32,
}

impl ActorArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `actor`, assigning it the next fresh ID.  Returns the ID.
    pub fn insert(&mut self, mut actor: Actor) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        actor.id = id;
        self.slots.insert(id, actor);
        id
    }

    /// Re-insert an actor under its existing ID (save/load reconstruction).
    /// Bumps the ID counter past it so fresh IDs stay unique.
    pub fn restore(&mut self, actor: Actor) {
        self.next_id = self.next_id.max(actor.id.0 + 1);
        self.slots.insert(actor.id, actor);
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.slots.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.slots.get_mut(&id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Vacate the slot.  Stale lookups of `id` return `None` from now on.
    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        self.slots.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All live actors in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.slots.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Actor> {
        self.slots.values_mut()
    }

    /// All live IDs in ascending order.
    pub fn ids(&self) -> Vec<ActorId> {
        self.slots.keys().copied().collect()
    }

    /// The next ID the arena would assign (persisted in save files).
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn set_next_id(&mut self, next: u32) {
        self.next_id = self.next_id.max(next);
    }
}

// ── ItemArena ─────────────────────────────────────────────────────────────────

/// Owner of all items, carried or on the ground.
#[derive(Default)]
pub struct ItemArena {
    slots: BTreeMap<ItemId, Item>,
    next_id: u32,
}

impl ItemArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, mut item: Item) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        item.id = id;
        self.slots.insert(id, item);
        id
    }

    pub fn restore(&mut self, item: Item) {
        self.next_id = self.next_id.max(item.id.0 + 1);
        self.slots.insert(item.id, item);
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.slots.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.slots.get_mut(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        self.slots.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.slots.values()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn set_next_id(&mut self, next: u32) {
        self.next_id = self.next_id.max(next);
    }
}
