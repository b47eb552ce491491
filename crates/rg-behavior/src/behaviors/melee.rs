//! Strike an adjacent enemy.

use rg_actor::Actor;
use rg_combat::AttackIntent;
use rg_core::{ActorId, ActorRng, AttributeMap, CoreResult};

use crate::behaviors::{keys, validate_common};
use crate::{Action, Behavior, BehaviorState, MessageBuffer, WorldView};

const UTILITY: f64 = 5.0;

/// Euclidean adjacency bound: diagonal neighbors (√2) are in range, tiles
/// two steps away are not.
const REACH: f32 = 2.0;

const DEFAULT_DAMAGE: (i32, i32) = (1, 3);
const DEFAULT_HIT_CHANCE: f64 = 0.8;

#[derive(Clone)]
pub struct MeleeAttack {
    attrs: AttributeMap,
    damage: (i32, i32),
    hit_chance: f64,
    target: Option<ActorId>,
}

impl MeleeAttack {
    pub const NAME: &'static str = "melee_attack";

    pub fn from_attrs(attrs: &AttributeMap) -> CoreResult<Self> {
        validate_common(attrs)?;
        Ok(Self {
            attrs: attrs.clone(),
            damage: attrs.get_range_or(keys::DAMAGE, DEFAULT_DAMAGE)?,
            hit_chance: attrs.get_f64_or(keys::HIT_CHANCE, DEFAULT_HIT_CHANCE)?,
            target: None,
        })
    }
}

impl Behavior for MeleeAttack {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn utility(&mut self, actor: &Actor, view: &WorldView<'_>) -> f64 {
        self.target = None;
        let Some((_, enemy)) = view.nearest_enemy(actor) else {
            return 0.0;
        };
        // The vision cache only orders candidates; the reach test uses live
        // positions, since the cached distance ages until the next refresh.
        let Some(enemy_pos) = view.actor_pos(enemy) else {
            return 0.0;
        };
        if actor.pos.euclidean(enemy_pos) >= REACH {
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
        let Some(target) = self.target.filter(|&id| view.actors.contains(id)) else {
            return Action::Rest;
        };
        Action::Attack(AttackIntent {
            attacker: actor.id,
            target,
            min_damage: self.damage.0,
            max_damage: self.damage.1,
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
