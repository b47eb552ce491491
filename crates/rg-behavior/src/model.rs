//! The `Behavior` trait — the decision-making extension point.

use rg_core::{ActorId, ActorRng, AttributeMap, ItemId};
use rg_actor::Actor;

use crate::{Action, MessageBuffer, WorldView};

// ── Behavior ──────────────────────────────────────────────────────────────────

/// One pluggable strategy an actor may follow.
///
/// Every turn the selector calls [`utility`][Self::utility] on each of the
/// actor's behaviors and [`run`][Self::run] on the highest scorer.  `utility`
/// takes `&mut self` because scoring typically acquires the transient target
/// that `run` then acts on — the two calls form one turn-scoped transaction.
///
/// # Target hygiene
///
/// Targets are IDs, never references, so a stale target can't dangle — but it
/// can silently pin a behavior to a corpse.  The cleanup pass calls
/// [`on_actor_removed`][Self::on_actor_removed] /
/// [`on_item_removed`][Self::on_item_removed] on every live behavior so
/// removed entities are forgotten before the next turn.
pub trait Behavior {
    /// Registry name, also used in save records.
    fn name(&self) -> &'static str;

    /// Score how valuable running this behavior is right now.  Non-negative;
    /// zero means "do not select this turn".  May store a target for `run`.
    fn utility(&mut self, actor: &Actor, view: &WorldView<'_>) -> f64;

    /// Perform the selected behavior's one atomic action for this turn.
    fn run(
        &mut self,
        actor: &Actor,
        view: &WorldView<'_>,
        rng: &mut ActorRng,
        messages: &mut MessageBuffer,
    ) -> Action;

    /// Probabilistic gate evaluated after selection, before `run`.
    ///
    /// Always passes.  The `chance_to_run` attribute is parsed and carried in
    /// every behavior's state but deliberately not consulted here; wiring it
    /// up is a reserved extension point, and flipping it would change NPC
    /// turn outcomes for existing seeds.
    fn passes_chance_to_run(&self, _rng: &mut ActorRng) -> bool {
        true
    }

    /// Null any transient target pointing at a removed actor.
    fn on_actor_removed(&mut self, _id: ActorId) {}

    /// Null any transient target pointing at a removed item.
    fn on_item_removed(&mut self, _id: ItemId) {}

    fn clone_box(&self) -> Box<dyn Behavior>;

    /// Snapshot configuration and targets for a save file.
    fn write_state(&self) -> BehaviorState;

    /// Restore transient targets from a save record.  The record's IDs may
    /// be stale; the loader filters those before calling this.
    fn load_state(&mut self, _state: &BehaviorState) {}
}

impl std::fmt::Debug for dyn Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Behavior").field("name", &self.name()).finish()
    }
}

impl Clone for Box<dyn Behavior> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ── BehaviorState ─────────────────────────────────────────────────────────────

/// The serialized form of one behavior instance.
///
/// Configuration travels as the raw attribute map and targets as IDs; on
/// load the registry rebuilds the behavior from `name` + `attrs`, then the
/// pointer-resolution pass re-links whichever targets still exist.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct BehaviorState {
    pub name: String,
    pub attrs: AttributeMap,
    pub target: Option<ActorId>,
    pub item_target: Option<ItemId>,
}

impl BehaviorState {
    pub fn new(name: &str, attrs: &AttributeMap) -> Self {
        Self {
            name: name.to_owned(),
            attrs: attrs.clone(),
            target: None,
            item_target: None,
        }
    }

    pub fn with_target(mut self, target: Option<ActorId>) -> Self {
        self.target = target;
        self
    }

    pub fn with_item_target(mut self, item_target: Option<ItemId>) -> Self {
        self.item_target = item_target;
        self
    }
}
