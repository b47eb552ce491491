//! Run from the nearest enemy when badly hurt.

use rg_actor::Actor;
use rg_core::{ActorId, ActorRng, AttributeMap, CoreResult};

use crate::behaviors::{keys, validate_common};
use crate::{Action, Behavior, BehaviorState, MessageBuffer, WorldView};

const UTILITY: f64 = 10.0;

/// How close (tile units) an enemy must be to be worth fleeing from.
const THREAT_RADIUS: f32 = 5.0;

const DEFAULT_THRESHOLD: i32 = 3;

#[derive(Clone)]
pub struct Flee {
    attrs: AttributeMap,
    threshold: i32,
    threat: Option<ActorId>,
    announced: bool,
}

impl Flee {
    pub const NAME: &'static str = "flee";

    pub fn from_attrs(attrs: &AttributeMap) -> CoreResult<Self> {
        validate_common(attrs)?;
        Ok(Self {
            attrs: attrs.clone(),
            threshold: attrs.get_i32_or(keys::FLEE_THRESHOLD, DEFAULT_THRESHOLD)?,
            threat: None,
            announced: false,
        })
    }

    /// The nearest enemy within the threat radius, measured against its live
    /// position (the cached distance ages until the next vision refresh).
    fn find_threat(&self, actor: &Actor, view: &WorldView<'_>) -> Option<ActorId> {
        if actor.health > self.threshold {
            return None;
        }
        let (_, enemy) = view.nearest_enemy(actor)?;
        let enemy_pos = view.actor_pos(enemy)?;
        if actor.pos.euclidean(enemy_pos) > THREAT_RADIUS {
            return None;
        }
        Some(enemy)
    }
}

impl Behavior for Flee {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn utility(&mut self, actor: &Actor, view: &WorldView<'_>) -> f64 {
        self.threat = self.find_threat(actor, view);
        if self.threat.is_none() {
            // The flight episode is over; the next one announces again.
            self.announced = false;
            return 0.0;
        }
        UTILITY
    }

    fn run(
        &mut self,
        actor: &Actor,
        view: &WorldView<'_>,
        _rng: &mut ActorRng,
        messages: &mut MessageBuffer,
    ) -> Action {
        let Some(threat_pos) = self.threat.and_then(|id| view.actor_pos(id)) else {
            return Action::Rest;
        };
        if !self.announced {
            self.announced = true;
            messages.push(format!("The {} flees!", actor.name));
        }
        let Some(towards) = view.grid.direction_to(actor.pos, threat_pos) else {
            return Action::Rest;
        };
        let away = towards.opposite();
        if view.grid.is_open(actor.pos.step(away)) {
            Action::Step(away)
        } else {
            // Cornered.  Stand and take it; melee may still win next turn.
            Action::Rest
        }
    }

    fn on_actor_removed(&mut self, id: ActorId) {
        if self.threat == Some(id) {
            self.threat = None;
        }
    }

    fn clone_box(&self) -> Box<dyn Behavior> {
        Box::new(self.clone())
    }

    fn write_state(&self) -> BehaviorState {
        BehaviorState::new(Self::NAME, &self.attrs).with_target(self.threat)
    }

    fn load_state(&mut self, state: &BehaviorState) {
        self.threat = state.target;
    }
}
