//! The float ready-time priority queue at the heart of the turn loop.

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use rg_core::{ActorId, SimTime};

/// Actors ordered by the simulated time at which they may next act.
///
/// Keys are `OrderedFloat` ready times; each key holds the actors that share
/// it in insertion order, which makes the tie-break an explicit contract: two
/// actors queued for the same instant act in the order they were queued.
#[derive(Default)]
pub struct TurnQueue {
    slots: BTreeMap<OrderedFloat<SimTime>, Vec<ActorId>>,
    len: usize,
}

impl TurnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Queue `actor` to act at `time`.
    pub fn push(&mut self, time: SimTime, actor: ActorId) {
        self.slots.entry(OrderedFloat(time)).or_default().push(actor);
        self.len += 1;
    }

    /// The earliest entry without removing it.
    pub fn peek(&self) -> Option<(SimTime, ActorId)> {
        self.slots
            .first_key_value()
            .and_then(|(&time, actors)| actors.first().map(|&actor| (time.0, actor)))
    }

    /// Remove and return the earliest entry.
    pub fn pop(&mut self) -> Option<(SimTime, ActorId)> {
        let (&time, actors) = self.slots.first_key_value()?;
        let time = time.0;
        let actor = *actors.first()?;
        self.remove_front(time);
        Some((time, actor))
    }

    fn remove_front(&mut self, time: SimTime) {
        let key = OrderedFloat(time);
        if let Some(actors) = self.slots.get_mut(&key) {
            if !actors.is_empty() {
                actors.remove(0);
                self.len -= 1;
            }
            if actors.is_empty() {
                self.slots.remove(&key);
            }
        }
    }

    /// The earliest ready time, if any entry exists.
    pub fn next_time(&self) -> Option<SimTime> {
        self.slots.first_key_value().map(|(&time, _)| time.0)
    }

    pub fn contains(&self, actor: ActorId) -> bool {
        self.slots.values().any(|actors| actors.contains(&actor))
    }

    /// Drop every entry for `actor` (death cleanup).
    pub fn remove_actor(&mut self, actor: ActorId) {
        let mut removed = 0;
        self.slots.retain(|_, actors| {
            let before = actors.len();
            actors.retain(|&a| a != actor);
            removed += before - actors.len();
            !actors.is_empty()
        });
        self.len -= removed;
    }

    /// Every entry in pop order, for save files.
    pub fn entries(&self) -> Vec<(SimTime, ActorId)> {
        self.slots
            .iter()
            .flat_map(|(&time, actors)| actors.iter().map(move |&actor| (time.0, actor)))
            .collect()
    }
}
