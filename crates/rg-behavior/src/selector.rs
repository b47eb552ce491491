//! Highest-utility arbitration.

use rg_actor::Actor;

use crate::{Behavior, WorldView};

/// Pick the behavior to run this turn: the one with the strictly highest
/// utility, ties going to the earliest-registered.  Returns its index, or
/// `None` when every behavior scored zero (the caller rests).
///
/// Scores below zero are treated as zero, so a buggy utility can never make
/// a behavior *more* attractive by going negative.
pub fn select(
    behaviors: &mut [Box<dyn Behavior>],
    actor: &Actor,
    view: &WorldView<'_>,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, behavior) in behaviors.iter_mut().enumerate() {
        let score = behavior.utility(actor, view).max(0.0);
        if score <= 0.0 {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    best.map(|(index, _)| index)
}
