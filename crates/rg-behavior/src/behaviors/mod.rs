//! The six stock behaviors.
//!
//! | Behavior      | Utility condition                                   | Score |
//! |---------------|-----------------------------------------------------|-------|
//! | `Flee`        | wounded below threshold, enemy within 5 tiles       | 10.0  |
//! | `HealAlly`    | wounded ally adjacent                               | 6.0   |
//! | `MeleeAttack` | enemy adjacent (diagonals count)                    | 5.0   |
//! | `Chase`       | enemy visible, more than one tile away (Manhattan)  | 3.0   |
//! | `PickUpItem`  | room in inventory, item visible within travel range | 2.0   |
//! | `Wander`      | always                                              | 1.0   |

mod chase;
mod flee;
mod heal;
mod melee;
mod pickup;
mod wander;

pub use chase::Chase;
pub use flee::Flee;
pub use heal::HealAlly;
pub use melee::MeleeAttack;
pub use pickup::PickUpItem;
pub use wander::Wander;

use rg_core::{AttributeMap, CoreResult, Direction, TileCoord};
use rg_map::{TileGrid, find_path};

/// Attribute keys shared across behaviors.
pub mod keys {
    pub const CHANCE_TO_RUN: &str = "chance_to_run";
    pub const DAMAGE: &str = "damage";
    pub const HIT_CHANCE: &str = "hit_chance";
    pub const HEALING_POWER: &str = "healing_power";
    pub const FLEE_THRESHOLD: &str = "flee_threshold";
    pub const TRAVEL_RADIUS: &str = "travel_radius";
    pub const REST_CHANCE: &str = "rest_chance";
    pub const STRAIGHT_CHANCE: &str = "straight_chance";
}

/// Validate the attributes every behavior accepts.  `chance_to_run` must
/// parse even though the run gate doesn't consult it yet; a malformed value
/// is still a configuration error.
pub(crate) fn validate_common(attrs: &AttributeMap) -> CoreResult<()> {
    attrs.get_f64_or(keys::CHANCE_TO_RUN, 1.0)?;
    Ok(())
}

/// The direction of the first step on a shortest path from `from` to `to`,
/// or `None` when no path exists (the caller rests this turn).
pub(crate) fn step_along_path(grid: &TileGrid, from: TileCoord, to: TileCoord) -> Option<Direction> {
    let path = find_path(grid, from, to)?;
    let next = path.first_step()?;
    grid.direction_to(from, next)
}
