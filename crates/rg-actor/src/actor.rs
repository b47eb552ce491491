//! Actor and item state.

use rg_core::{ActorId, FactionId, ItemId, TileCoord};

// ── Actor ─────────────────────────────────────────────────────────────────────

/// One autonomous agent — the player or an NPC.
///
/// Behavior instances and the per-actor RNG live beside the arena in the sim
/// (split-borrow pattern: the turn loop needs `&mut` behaviors while reading
/// the arena), so `Actor` itself is plain data.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Stable identity.  Assigned by the arena on spawn; preserved across
    /// save/load.
    pub id: ActorId,
    pub name: String,
    pub glyph: char,
    pub pos: TileCoord,

    /// Current health.  May go negative internally on a kill; the cleanup
    /// pass treats `health <= 0` as dead.
    pub health: i32,
    pub max_health: i32,

    pub faction: FactionId,
    pub is_player: bool,

    /// How far (tile units) this actor's vision reaches.
    pub sight_radius: f32,

    /// Carried item IDs, capped at `inventory_capacity`.
    pub inventory: Vec<ItemId>,
    pub inventory_capacity: usize,
    pub equipped_weapon: Option<ItemId>,
    pub equipped_armor: Option<ItemId>,

    /// Rebuilt after every move; see [`Vision`].
    pub vision: Vision,
}

impl Actor {
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    #[inline]
    pub fn at_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    #[inline]
    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= self.inventory_capacity
    }
}

// ── Vision ────────────────────────────────────────────────────────────────────

/// The entities an actor can currently see, keyed by distance-to-observer
/// and sorted nearest-first, so "closest enemy / ally / item" queries are a
/// linear scan with early exit.
#[derive(Debug, Clone, Default)]
pub struct Vision {
    /// `(distance, actor)` pairs, ascending by distance.
    pub actors: Vec<(f32, ActorId)>,
    /// `(distance, item)` pairs, ascending by distance.
    pub items: Vec<(f32, ItemId)>,
}

impl Vision {
    pub fn clear(&mut self) {
        self.actors.clear();
        self.items.clear();
    }

    pub fn sees_actor(&self, id: ActorId) -> bool {
        self.actors.iter().any(|&(_, a)| a == id)
    }

    /// Drop a removed actor from the cache (dereference pass).
    pub fn forget_actor(&mut self, id: ActorId) {
        self.actors.retain(|&(_, a)| a != id);
    }

    /// Drop a removed item from the cache (dereference pass).
    pub fn forget_item(&mut self, id: ItemId) {
        self.items.retain(|&(_, i)| i != id);
    }
}

// ── Item ──────────────────────────────────────────────────────────────────────

/// What equipping an item does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum ItemKind {
    /// `power` adds to attack damage while equipped.
    Weapon,
    /// `power` is the armor bonus (half of it, floored, is subtracted from
    /// incoming damage) while equipped.
    Armor,
    /// No combat effect.
    Trinket,
}

/// One item, on the ground or carried.
#[derive(Debug, Clone)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub glyph: char,
    /// `Some` while lying on the map; `None` while carried.
    pub pos: Option<TileCoord>,
    pub kind: ItemKind,
    pub power: i32,
}
