//! Amble around with no particular goal.

use rg_actor::Actor;
use rg_core::{ActorRng, AttributeMap, CoreResult, Direction};

use crate::behaviors::{keys, validate_common};
use crate::{Action, Behavior, BehaviorState, MessageBuffer, WorldView};

const UTILITY: f64 = 1.0;

const DEFAULT_REST_CHANCE: f64 = 0.3;
const DEFAULT_STRAIGHT_CHANCE: f64 = 0.5;

/// Bound on fresh-direction draws.  In a sealed one-tile pocket no draw can
/// succeed, so the loop must not spin until one does.
const MAX_DIRECTION_ATTEMPTS: usize = 8;

#[derive(Clone)]
pub struct Wander {
    attrs: AttributeMap,
    rest_chance: f64,
    straight_chance: f64,
    heading: Option<Direction>,
}

impl Wander {
    pub const NAME: &'static str = "wander";

    pub fn from_attrs(attrs: &AttributeMap) -> CoreResult<Self> {
        validate_common(attrs)?;
        Ok(Self {
            attrs: attrs.clone(),
            rest_chance: attrs.get_f64_or(keys::REST_CHANCE, DEFAULT_REST_CHANCE)?,
            straight_chance: attrs.get_f64_or(keys::STRAIGHT_CHANCE, DEFAULT_STRAIGHT_CHANCE)?,
            heading: None,
        })
    }
}

impl Behavior for Wander {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Always applicable: the fallback when nothing else scores.
    fn utility(&mut self, _actor: &Actor, _view: &WorldView<'_>) -> f64 {
        UTILITY
    }

    fn run(
        &mut self,
        actor: &Actor,
        view: &WorldView<'_>,
        rng: &mut ActorRng,
        _messages: &mut MessageBuffer,
    ) -> Action {
        if rng.roll() < self.rest_chance {
            return Action::Rest;
        }

        // Keep going the way we were, most of the time.
        if let Some(dir) = self.heading {
            if rng.roll() < self.straight_chance && view.grid.is_open(actor.pos.step(dir)) {
                return Action::Step(dir);
            }
        }

        for _ in 0..MAX_DIRECTION_ATTEMPTS {
            let Some(&dir) = rng.choose(&Direction::ALL) else {
                break;
            };
            if Some(dir) == self.heading {
                continue;
            }
            if view.grid.is_open(actor.pos.step(dir)) {
                self.heading = Some(dir);
                return Action::Step(dir);
            }
        }

        self.heading = None;
        Action::Rest
    }

    fn clone_box(&self) -> Box<dyn Behavior> {
        Box::new(self.clone())
    }

    fn write_state(&self) -> BehaviorState {
        BehaviorState::new(Self::NAME, &self.attrs)
    }
}
