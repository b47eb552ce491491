//! What a behavior asks the world to do.

use rg_combat::AttackIntent;
use rg_core::{Direction, ItemId, SimTime};

/// The single atomic action a behavior contributes per turn.
///
/// Behaviors never mutate the world themselves; they return one of these and
/// the turn loop applies it, so every world write goes through one audited
/// code path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Do nothing this turn.
    Rest,
    /// Move one tile.  Applied only if the destination is walkable and
    /// unoccupied; otherwise the turn is spent standing still.
    Step(Direction),
    /// Attack or heal (negative damage range) another actor.
    Attack(AttackIntent),
    /// Pick up an item from the actor's own tile.
    PickUp(ItemId),
}

impl Action {
    /// Simulated time the action consumes.  Every action currently costs one
    /// full turn.
    pub fn duration(&self) -> SimTime {
        1.0
    }
}
