//! Mend a wounded ally standing next to us.

use rg_actor::Actor;
use rg_combat::AttackIntent;
use rg_core::{ActorId, ActorRng, AttributeMap, CoreResult};

use crate::behaviors::{keys, validate_common};
use crate::{Action, Behavior, BehaviorState, MessageBuffer, WorldView};

const UTILITY: f64 = 6.0;

/// Same adjacency bound as melee: diagonals count.
const REACH: f32 = 2.0;

const DEFAULT_HEALING: (i32, i32) = (1, 3);
const DEFAULT_HIT_CHANCE: f64 = 1.0;

#[derive(Clone)]
pub struct HealAlly {
    attrs: AttributeMap,
    healing: (i32, i32),
    hit_chance: f64,
    target: Option<ActorId>,
}

impl HealAlly {
    pub const NAME: &'static str = "heal_ally";

    pub fn from_attrs(attrs: &AttributeMap) -> CoreResult<Self> {
        validate_common(attrs)?;
        Ok(Self {
            attrs: attrs.clone(),
            healing: attrs.get_range_or(keys::HEALING_POWER, DEFAULT_HEALING)?,
            hit_chance: attrs.get_f64_or(keys::HIT_CHANCE, DEFAULT_HIT_CHANCE)?,
            target: None,
        })
    }
}

impl Behavior for HealAlly {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn utility(&mut self, actor: &Actor, view: &WorldView<'_>) -> f64 {
        self.target = None;
        let Some((_, ally)) = view.nearest_wounded_ally(actor) else {
            return 0.0;
        };
        // Reach is measured against the ally's live position, not the
        // cached distance (the patient may have moved since our last look).
        let Some(ally_pos) = view.actor_pos(ally) else {
            return 0.0;
        };
        if actor.pos.euclidean(ally_pos) >= REACH {
            return 0.0;
        }
        self.target = Some(ally);
        UTILITY
    }

    fn run(
        &mut self,
        actor: &Actor,
        view: &WorldView<'_>,
        _rng: &mut ActorRng,
        _messages: &mut MessageBuffer,
    ) -> Action {
        let Some(target) = self.target.filter(|&id| view.actors.contains(id)) else {
            return Action::Rest;
        };
        // A heal is an attack with a negated range; "max" healing is the
        // more negative bound.
        Action::Attack(AttackIntent {
            attacker: actor.id,
            target,
            min_damage: -self.healing.0,
            max_damage: -self.healing.1,
            hit_chance: self.hit_chance,
        })
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
