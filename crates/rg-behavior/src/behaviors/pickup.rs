//! Walk to a visible item and take it.

use rg_actor::Actor;
use rg_core::{ActorRng, AttributeMap, CoreResult, ItemId};

use crate::behaviors::{keys, step_along_path, validate_common};
use crate::{Action, Behavior, BehaviorState, MessageBuffer, WorldView};

const UTILITY: f64 = 2.0;

const DEFAULT_TRAVEL_RADIUS: f64 = 6.0;

#[derive(Clone)]
pub struct PickUpItem {
    attrs: AttributeMap,
    travel_radius: f64,
    target: Option<ItemId>,
}

impl PickUpItem {
    pub const NAME: &'static str = "pick_up_item";

    pub fn from_attrs(attrs: &AttributeMap) -> CoreResult<Self> {
        validate_common(attrs)?;
        Ok(Self {
            attrs: attrs.clone(),
            travel_radius: attrs.get_f64_or(keys::TRAVEL_RADIUS, DEFAULT_TRAVEL_RADIUS)?,
            target: None,
        })
    }
}

impl Behavior for PickUpItem {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn utility(&mut self, actor: &Actor, view: &WorldView<'_>) -> f64 {
        self.target = None;
        if actor.inventory_full() {
            return 0.0;
        }
        let Some((_, item)) = view.nearest_ground_item(actor, self.travel_radius) else {
            return 0.0;
        };
        self.target = Some(item);
        UTILITY
    }

    fn run(
        &mut self,
        actor: &Actor,
        view: &WorldView<'_>,
        _rng: &mut ActorRng,
        _messages: &mut MessageBuffer,
    ) -> Action {
        let Some((item, item_pos)) = self
            .target
            .and_then(|id| view.items.get(id))
            .and_then(|item| item.pos.map(|pos| (item.id, pos)))
        else {
            return Action::Rest;
        };
        if item_pos == actor.pos {
            return Action::PickUp(item);
        }
        match step_along_path(view.grid, actor.pos, item_pos) {
            Some(dir) => Action::Step(dir),
            None => Action::Rest,
        }
    }

    fn on_item_removed(&mut self, id: ItemId) {
        if self.target == Some(id) {
            self.target = None;
        }
    }

    fn clone_box(&self) -> Box<dyn Behavior> {
        Box::new(self.clone())
    }

    fn write_state(&self) -> BehaviorState {
        BehaviorState::new(Self::NAME, &self.attrs).with_item_target(self.target)
    }

    fn load_state(&mut self, state: &BehaviorState) {
        self.target = state.item_target;
    }
}
