// Scenario roster allocation.
//
// A build clones the real roster, then repeatedly asks the slot assigner for
// the best ranked candidate that fits a position and a set of price/tier
// ceilings. Each strategy is a fixed schedule of such requests; whatever is
// still open afterwards goes through the fallback filler.

pub mod fallback;
pub mod pool;
pub mod strategies;

use std::collections::HashSet;

use tracing::debug;

use crate::candidate::{Candidate, Position, UNRANKED_TIER};
use crate::roster::{Occupant, Roster};
use crate::scenario::{Scenario, StrategyKind};

/// Working state for one scenario build. Never shared between builds.
#[derive(Debug)]
pub struct AllocationState<'a> {
    /// The hypothetical roster being filled. Starts as a copy of the real one.
    pub roster: Roster,
    /// Budget left for hypothetical fills.
    pub budget: f64,
    /// Candidate ids already committed, really or hypothetically.
    pub used: HashSet<String>,
    pool: &'a [Candidate],
    real_roster: &'a Roster,
    drafted_elsewhere: &'a [Candidate],
    placeholder_seq: usize,
}

impl<'a> AllocationState<'a> {
    /// Start a build from a snapshot of the real draft.
    ///
    /// The used-set is seeded with every candidate already on the real roster.
    pub fn new(
        real_roster: &'a Roster,
        budget: f64,
        pool: &'a [Candidate],
        drafted_elsewhere: &'a [Candidate],
    ) -> Self {
        AllocationState {
            roster: real_roster.clone(),
            budget,
            used: real_roster.committed_ids().map(str::to_string).collect(),
            pool,
            real_roster,
            drafted_elsewhere,
            placeholder_seq: 0,
        }
    }

    /// Undrafted candidates a strategy may place at `target`, best first.
    pub fn ranked_for(&self, target: Position) -> Vec<&'a Candidate> {
        pool::ranked_for_slot(self.pool, &self.rostered_ids(), self.drafted_elsewhere, target)
    }

    /// Undrafted candidates a `slot` may hold in the fallback pass, best first.
    pub fn fill_candidates(&self, slot: Position) -> Vec<&'a Candidate> {
        pool::ranked_for_fill(self.pool, &self.rostered_ids(), self.drafted_elsewhere, slot)
    }

    fn rostered_ids(&self) -> HashSet<&'a str> {
        self.real_roster
            .real_occupants()
            .map(|o| o.candidate_id.as_str())
            .collect()
    }

    /// Fill the first open `position` slot with the best ranked candidate that
    /// is unused, affordable, priced at or below `max_price` and tiered at or
    /// better than `max_tier`.
    ///
    /// Returns `false` without touching any state when the position has no
    /// open slot or no candidate qualifies.
    pub fn assign(
        &mut self,
        position: Position,
        max_price: Option<f64>,
        max_tier: Option<u32>,
    ) -> bool {
        let Some(slot_idx) = self.roster.first_open_slot(position) else {
            return false;
        };

        let pick = self.ranked_for(position).into_iter().find(|c| {
            !self.used.contains(&c.id)
                && c.price <= self.budget
                && max_price.map_or(true, |cap| c.price <= cap)
                && max_tier.map_or(true, |tier| c.effective_tier() <= tier)
        });

        match pick {
            Some(candidate) => {
                self.commit(slot_idx, candidate, candidate.price);
                true
            }
            None => {
                debug!(
                    "no candidate for {} (max price {:?}, max tier {:?}, budget ${:.2})",
                    position, max_price, max_tier, self.budget
                );
                false
            }
        }
    }

    /// Place `candidate` in slot `slot_idx` as a hypothetical fill.
    pub(crate) fn commit(&mut self, slot_idx: usize, candidate: &Candidate, price: f64) {
        let slot = &mut self.roster.slots[slot_idx];
        debug!(
            "{} <- {} (tier {}, ${:.2}), ${:.2} left",
            slot.position,
            candidate.name,
            candidate.effective_tier(),
            price,
            self.budget - price
        );
        slot.occupant = Some(Occupant::projected(candidate, price));
        self.budget -= price;
        self.used.insert(candidate.id.clone());
    }

    /// Place a $1 placeholder in slot `slot_idx`.
    pub(crate) fn commit_placeholder(&mut self, slot_idx: usize) {
        let position = self.roster.slots[slot_idx].position;
        let id = self.next_placeholder_id(position);
        debug!("{} <- placeholder {}", position, id);
        self.roster.slots[slot_idx].occupant = Some(Occupant {
            candidate_id: id.clone(),
            name: format!("Placeholder {position}"),
            position: None,
            price: 1.0,
            projected_points: Some(0.0),
            tier: Some(UNRANKED_TIER),
            position_rank: Some(999),
            hypothetical: true,
        });
        self.budget -= 1.0;
        self.used.insert(id);
    }

    /// An id no candidate or earlier placeholder uses.
    fn next_placeholder_id(&mut self, position: Position) -> String {
        loop {
            self.placeholder_seq += 1;
            let id = format!(
                "placeholder-{}-{}",
                position.display_str().to_lowercase(),
                self.placeholder_seq
            );
            if !self.used.contains(&id) && !self.pool.iter().any(|c| c.id == id) {
                return id;
            }
        }
    }

    /// Consume the state, yielding the finished roster copy.
    pub fn finish(self) -> Roster {
        self.roster
    }
}

/// Build a complete hypothetical roster for `scenario`.
///
/// The real roster is never modified; the returned roster holds the real
/// occupants plus as many hypothetical fills as budget and pool allow.
pub fn build_scenario_roster(
    scenario: &Scenario,
    real_roster: &Roster,
    budget: f64,
    pool: &[Candidate],
    drafted_elsewhere: &[Candidate],
) -> Roster {
    let mut state = AllocationState::new(real_roster, budget, pool, drafted_elsewhere);

    match scenario.kind {
        StrategyKind::Balanced => strategies::balanced(&mut state, scenario),
        StrategyKind::StarsAndScrubs => strategies::stars_and_scrubs(&mut state),
        StrategyKind::Depth => strategies::depth(&mut state),
    }
    debug!(
        "{}: strategy phases filled {}/{} slots, ${:.2} left",
        scenario.id,
        state.roster.filled_count(),
        state.roster.total_count(),
        state.budget
    );

    fallback::fill_remaining(&mut state);

    state.finish()
}
