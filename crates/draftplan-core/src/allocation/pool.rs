// Candidate pool filtering and ranking.
//
// The ranked list produced here is the single notion of "best available"
// used by every allocation phase. It is rebuilt on every call because the
// used-set changes between slot assignments.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::candidate::{slot_accepts, Candidate, Position};

/// Candidates that are neither on the user's roster nor drafted elsewhere.
pub fn available_candidates<'a>(
    pool: &'a [Candidate],
    rostered_ids: &HashSet<&str>,
    drafted_elsewhere: &[Candidate],
) -> Vec<&'a Candidate> {
    let taken: HashSet<&str> = drafted_elsewhere.iter().map(|c| c.id.as_str()).collect();
    pool.iter()
        .filter(|c| !rostered_ids.contains(c.id.as_str()) && !taken.contains(c.id.as_str()))
        .collect()
}

/// Whether a strategy may place a `candidate` player in a `target` slot:
/// an exact match, or RB/WR/TE for FLEX. Nobody matches BENCH here, so bench
/// slots are always left to the fallback pass.
pub fn matches_target(target: Position, candidate: Position) -> bool {
    candidate == target || (target == Position::Flex && candidate.is_flex_eligible())
}

/// Keep only candidates a strategy may place in a `target` slot.
pub fn eligible_for<'a>(candidates: Vec<&'a Candidate>, target: Position) -> Vec<&'a Candidate> {
    candidates
        .into_iter()
        .filter(|c| matches_target(target, c.position))
        .collect()
}

/// Canonical preference order: tier ascending (unranked last), then price
/// descending. Stable, so pool order breaks remaining ties.
pub fn rank(candidates: &mut [&Candidate]) {
    candidates.sort_by(|a, b| {
        a.effective_tier()
            .cmp(&b.effective_tier())
            .then_with(|| b.price.partial_cmp(&a.price).unwrap_or(Ordering::Equal))
    });
}

/// Filter, restrict to what a strategy may place at `target`, and rank.
pub fn ranked_for_slot<'a>(
    pool: &'a [Candidate],
    rostered_ids: &HashSet<&str>,
    drafted_elsewhere: &[Candidate],
    target: Position,
) -> Vec<&'a Candidate> {
    let mut candidates = eligible_for(
        available_candidates(pool, rostered_ids, drafted_elsewhere),
        target,
    );
    rank(&mut candidates);
    candidates
}

/// Filter, restrict to what a `slot` may hold under the roster rule (BENCH
/// takes anyone), and rank. Used by the fallback pass.
pub fn ranked_for_fill<'a>(
    pool: &'a [Candidate],
    rostered_ids: &HashSet<&str>,
    drafted_elsewhere: &[Candidate],
    slot: Position,
) -> Vec<&'a Candidate> {
    let mut candidates: Vec<&Candidate> = available_candidates(pool, rostered_ids, drafted_elsewhere)
        .into_iter()
        .filter(|c| slot_accepts(slot, c.position))
        .collect();
    rank(&mut candidates);
    candidates
}
