//! Configuration-driven NPC templates, loaded from CSV.
//!
//! # CSV format
//!
//! ```text
//! name,glyph,faction,max_health,sight_radius,inventory_capacity,behaviors,attrs
//! orc,o,2,10,8.0,4,melee_attack;chase;wander,damage=1~3;hit_chance=0.8
//! ```
//!
//! `behaviors` is a `;`-separated list of behavior registry names, in
//! priority order (the tie-break order of utility arbitration).  `attrs` is a
//! `;`-separated `key=value` list feeding every behavior's `AttributeMap`.
//! Malformed rows are fatal at load time.

use std::io::Read;

use rg_core::{ActorId, AttributeMap, FactionId, TileCoord};
use serde::Deserialize;

use crate::{Actor, ActorError, ActorResult, Vision};

// ── Blueprint ─────────────────────────────────────────────────────────────────

/// A template for instantiating NPCs with default stats and a behavior set.
#[derive(Debug, Clone)]
pub struct Blueprint {
    pub name: String,
    pub glyph: char,
    pub faction: FactionId,
    pub max_health: i32,
    pub sight_radius: f32,
    pub inventory_capacity: usize,
    /// Behavior registry names in arbitration tie-break order.
    pub behaviors: Vec<String>,
    /// Tunable parameters handed to every behavior factory.
    pub attrs: AttributeMap,
}

impl Blueprint {
    /// Stamp out an actor at `pos`.  The arena assigns the real ID; behavior
    /// instances are built separately by the registry (this crate does not
    /// depend on rg-behavior).
    pub fn instantiate(&self, pos: TileCoord) -> Actor {
        Actor {
            id: ActorId::INVALID,
            name: self.name.clone(),
            glyph: self.glyph,
            pos,
            health: self.max_health,
            max_health: self.max_health,
            faction: self.faction,
            is_player: false,
            sight_radius: self.sight_radius,
            inventory: Vec::new(),
            inventory_capacity: self.inventory_capacity,
            equipped_weapon: None,
            equipped_armor: None,
            vision: Vision::default(),
        }
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

/// Raw CSV row shape.
#[derive(Debug, Deserialize)]
struct BlueprintRecord {
    name: String,
    glyph: String,
    faction: u16,
    max_health: i32,
    sight_radius: f32,
    inventory_capacity: usize,
    behaviors: String,
    attrs: String,
}

/// Load blueprints from CSV, keyed by name.  Duplicate names and malformed
/// rows are fatal configuration errors.
pub fn load_blueprints_reader<R: Read>(
    reader: R,
) -> ActorResult<std::collections::BTreeMap<String, Blueprint>> {
    let mut out = std::collections::BTreeMap::new();
    let mut csv_reader = csv::Reader::from_reader(reader);

    for row in csv_reader.deserialize() {
        let record: BlueprintRecord = row?;

        let glyph = record.glyph.chars().next().ok_or_else(|| {
            ActorError::Parse(format!("blueprint {:?}: empty glyph", record.name))
        })?;
        if record.max_health <= 0 {
            return Err(ActorError::Parse(format!(
                "blueprint {:?}: max_health must be positive",
                record.name
            )));
        }

        let behaviors: Vec<String> = record
            .behaviors
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();

        let attrs = AttributeMap::parse_kv_list(&record.attrs)?;

        let blueprint = Blueprint {
            name: record.name.clone(),
            glyph,
            faction: FactionId(record.faction),
            max_health: record.max_health,
            sight_radius: record.sight_radius,
            inventory_capacity: record.inventory_capacity,
            behaviors,
            attrs,
        };

        if out.insert(record.name.clone(), blueprint).is_some() {
            return Err(ActorError::DuplicateBlueprint(record.name));
        }
    }

    Ok(out)
}
