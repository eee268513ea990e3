// Final pass: fill whatever the strategy phases left open.

use std::cmp::Ordering;

use tracing::debug;

use super::AllocationState;
use crate::candidate::Candidate;

/// Price charged for a fallback fill. Nobody goes for less than $1.
fn fill_price(candidate: &Candidate) -> f64 {
    candidate.price.max(1.0)
}

/// Visit every open slot in roster order and fill it with the cheapest
/// affordable unused eligible candidate (best ranked wins ties). With no such
/// candidate, a $1 placeholder goes in if the budget allows; otherwise the
/// slot stays empty.
///
/// Only the remaining budget limits this pass; strategy ceilings do not apply.
pub fn fill_remaining(state: &mut AllocationState<'_>) {
    for idx in 0..state.roster.slots.len() {
        if !state.roster.slots[idx].is_open() {
            continue;
        }
        let position = state.roster.slots[idx].position;

        let cheapest = state
            .fill_candidates(position)
            .into_iter()
            .filter(|c| !state.used.contains(&c.id) && fill_price(c) <= state.budget)
            .min_by(|a, b| {
                fill_price(a)
                    .partial_cmp(&fill_price(b))
                    .unwrap_or(Ordering::Equal)
            });

        match cheapest {
            Some(candidate) => state.commit(idx, candidate, fill_price(candidate)),
            None if state.budget >= 1.0 => state.commit_placeholder(idx),
            None => debug!("{} slot {} left empty, ${:.2} left", position, idx, state.budget),
        }
    }
}
