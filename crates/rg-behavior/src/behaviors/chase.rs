//! Close distance to the nearest visible enemy.

use rg_actor::Actor;
use rg_core::{ActorId, ActorRng, AttributeMap, CoreResult};

use crate::behaviors::{step_along_path, validate_common};
use crate::{Action, Behavior, BehaviorState, MessageBuffer, WorldView};

const UTILITY: f64 = 3.0;

#[derive(Clone)]
pub struct Chase {
    attrs: AttributeMap,
    target: Option<ActorId>,
}

impl Chase {
    pub const NAME: &'static str = "chase";

    pub fn from_attrs(attrs: &AttributeMap) -> CoreResult<Self> {
        validate_common(attrs)?;
        Ok(Self {
            attrs: attrs.clone(),
            target: None,
        })
    }
}

impl Behavior for Chase {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn utility(&mut self, actor: &Actor, view: &WorldView<'_>) -> f64 {
        self.target = None;
        let Some((_, enemy)) = view.nearest_enemy(actor) else {
            return 0.0;
        };
        let Some(enemy_pos) = view.actor_pos(enemy) else {
            return 0.0;
        };
        // Adjacent enemies are the melee behavior's business.
        if actor.pos.manhattan(enemy_pos) <= 1 {
            return 0.0;
        }
        self.target = Some(enemy);
        UTILITY
    }

    fn run(
        &mut self,
        actor: &Actor,
        view: &WorldView<'_>,
        _rng: &mut ActorRng,
        _messages: &mut MessageBuffer,
    ) -> Action {
        let Some(goal) = self.target.and_then(|id| view.actor_pos(id)) else {
            return Action::Rest;
        };
        match step_along_path(view.grid, actor.pos, goal) {
            Some(dir) => Action::Step(dir),
            None => Action::Rest,
        }
    }

    fn on_actor_removed(&mut self, id: ActorId) {
        if self.target == Some(id) {
            self.target = None;
        }
    }

    fn clone_box(&self) -> Box<dyn Behavior> {
        Box::new(self.clone())
    }

    fn write_state(&self) -> BehaviorState {
        BehaviorState::new(Self::NAME, &self.attrs).with_target(self.target)
    }

    fn load_state(&mut self, state: &BehaviorState) {
        self.target = state.target;
    }
}
