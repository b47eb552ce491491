//! Name → factory registry so blueprints can instantiate behaviors by
//! string key.

use std::collections::BTreeMap;

use rg_core::AttributeMap;

use crate::behaviors::{Chase, Flee, HealAlly, MeleeAttack, PickUpItem, Wander};
use crate::{Behavior, BehaviorError, BehaviorResult, BehaviorState};

/// Builds one behavior instance from its configuration attributes.
pub type BehaviorFactory = fn(&AttributeMap) -> BehaviorResult<Box<dyn Behavior>>;

/// Explicitly constructed per session — no global mutable registry.  The
/// sim owns one and threads it through spawning and save loading.
#[derive(Default)]
pub struct BehaviorRegistry {
    factories: BTreeMap<String, BehaviorFactory>,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the six stock behaviors registered.
    pub fn with_defaults() -> BehaviorResult<Self> {
        let mut registry = Self::new();
        registry.register(Chase::NAME, |attrs| Ok(Box::new(Chase::from_attrs(attrs)?)))?;
        registry.register(Flee::NAME, |attrs| Ok(Box::new(Flee::from_attrs(attrs)?)))?;
        registry.register(MeleeAttack::NAME, |attrs| {
            Ok(Box::new(MeleeAttack::from_attrs(attrs)?))
        })?;
        registry.register(HealAlly::NAME, |attrs| {
            Ok(Box::new(HealAlly::from_attrs(attrs)?))
        })?;
        registry.register(PickUpItem::NAME, |attrs| {
            Ok(Box::new(PickUpItem::from_attrs(attrs)?))
        })?;
        registry.register(Wander::NAME, |attrs| {
            Ok(Box::new(Wander::from_attrs(attrs)?))
        })?;
        Ok(registry)
    }

    /// Register a factory under `name`.  Duplicate registration is fatal.
    pub fn register(&mut self, name: &str, factory: BehaviorFactory) -> BehaviorResult<()> {
        if self.factories.contains_key(name) {
            return Err(BehaviorError::Duplicate(name.to_owned()));
        }
        self.factories.insert(name.to_owned(), factory);
        Ok(())
    }

    /// Instantiate the behavior registered under `name`.
    pub fn build(&self, name: &str, attrs: &AttributeMap) -> BehaviorResult<Box<dyn Behavior>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| BehaviorError::Unknown(name.to_owned()))?;
        factory(attrs)
    }

    /// Instantiate a blueprint's whole behavior list, preserving order.
    /// Order matters: it is the arbitration tie-break.
    pub fn build_set(
        &self,
        names: &[String],
        attrs: &AttributeMap,
    ) -> BehaviorResult<Vec<Box<dyn Behavior>>> {
        names.iter().map(|name| self.build(name, attrs)).collect()
    }

    /// Rebuild one behavior from a save record, restoring its targets.
    pub fn restore(&self, state: &BehaviorState) -> BehaviorResult<Box<dyn Behavior>> {
        let mut behavior = self.build(&state.name, &state.attrs)?;
        behavior.load_state(state);
        Ok(behavior)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }
}
