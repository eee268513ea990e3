// Strategy builders: each one is a fixed schedule of slot assignments.

use std::cmp::Ordering;

use tracing::debug;

use super::AllocationState;
use crate::candidate::Position;
use crate::scenario::Scenario;

/// Tier a "star" must be at or better than.
pub const STAR_TIER: u32 = 1;

/// Default ceiling for stars-and-scrubs filler picks.
pub const SCRUB_PRICE: f64 = 3.0;

/// Upper bound of the relaxed QB/TE ceiling in stars-and-scrubs.
pub const SCRUB_QB_TE_MAX: f64 = 8.0;

/// Flat per-player ceiling of the depth strategy.
pub const DEPTH_PRICE_CAP: f64 = 35.0;

const SCRUB_ORDER: [Position; 7] = [
    Position::WideReceiver,
    Position::Quarterback,
    Position::TightEnd,
    Position::Flex,
    Position::Kicker,
    Position::Defense,
    Position::Bench,
];

const DEPTH_ORDER: [Position; 8] = [
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::Flex,
    Position::Kicker,
    Position::Defense,
    Position::Bench,
];

/// Balanced: spend in proportion to the scenario's weight map.
///
/// Positions are visited heaviest weight first (ties keep roster order). The
/// per-slot ceiling is `max(1, budget * share / open_slots)`, where `budget`
/// is re-read before every slot and `open_slots` is the count of open slots
/// at that position when the position was reached.
pub fn balanced(state: &mut AllocationState<'_>, scenario: &Scenario) {
    let total = scenario.total_weight();

    let mut positions: Vec<(Position, f64)> = scenario
        .budget_allocation
        .iter()
        .map(|(&pos, &weight)| (pos, weight))
        .collect();
    positions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    for (position, weight) in positions {
        let open = state.roster.open_slots_at(position);
        if open == 0 {
            continue;
        }

        let share = if total > 0.0 { weight / total } else { 0.0 };
        for _ in 0..open {
            let ceiling = (state.budget * share / open as f64).max(1.0);
            state.assign(position, Some(ceiling), None);
        }
    }
}

/// Stars and scrubs: up to two tier-1 RBs and a tier-1 WR at any price, then
/// cheap fills everywhere else.
pub fn stars_and_scrubs(state: &mut AllocationState<'_>) {
    // Phase 1: stars
    state.assign(Position::RunningBack, None, Some(STAR_TIER));
    state.assign(Position::RunningBack, None, Some(STAR_TIER));
    state.assign(Position::WideReceiver, None, Some(STAR_TIER));
    debug!("stars phase done, ${:.2} left", state.budget);

    // Phase 2: scrubs
    for position in SCRUB_ORDER {
        let open = state.roster.open_slots_at(position);
        for _ in 0..open {
            let mut ceiling = SCRUB_PRICE;
            if matches!(position, Position::Quarterback | Position::TightEnd) {
                let remaining_slots = state.roster.open_slots();
                if remaining_slots > 0 {
                    ceiling = (state.budget / remaining_slots as f64)
                        .max(SCRUB_PRICE)
                        .min(SCRUB_QB_TE_MAX);
                }
            }
            state.assign(position, Some(ceiling), None);
        }
    }
}

/// Depth: nobody over $35, positions in roster order.
pub fn depth(state: &mut AllocationState<'_>) {
    for position in DEPTH_ORDER {
        let open = state.roster.open_slots_at(position);
        for _ in 0..open {
            state.assign(position, Some(DEPTH_PRICE_CAP), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::Candidate;
    use crate::roster::Roster;
    use crate::scenario::default_scenarios;

    fn c(id: &str, pos: Position, price: f64, tier: Option<u32>) -> Candidate {
        Candidate::new(id, id, pos, price, tier)
    }

    fn occupant_at(roster: &Roster, pos: Position, nth: usize) -> Option<String> {
        roster
            .slots
            .iter()
            .filter(|s| s.position == pos)
            .nth(nth)
            .and_then(|s| s.occupant.as_ref())
            .map(|o| o.candidate_id.clone())
    }

    #[test]
    fn balanced_caps_price_by_position_share() {
        // RB share = 35%, two open RB slots, $200 budget: first ceiling $35.
        let pool = vec![
            c("rb-40", Position::RunningBack, 40.0, Some(1)),
            c("rb-34", Position::RunningBack, 34.0, Some(1)),
            c("rb-20", Position::RunningBack, 20.0, Some(2)),
        ];
        let real = Roster::standard();
        let scenario = &default_scenarios()[0];
        let mut state = AllocationState::new(&real, 200.0, &pool, &[]);
        balanced(&mut state, scenario);

        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 0).as_deref(), Some("rb-34"));
        // Second ceiling: (200 - 34) * 0.35 / 2 = 29.05, so the $20 tier-2 back.
        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 1).as_deref(), Some("rb-20"));
        assert_eq!(state.budget, 146.0);
    }

    #[test]
    fn balanced_visits_heaviest_weight_first() {
        // A single flexible back: RB (35) outranks FLEX (5), so RB gets him.
        let pool = vec![c("rb", Position::RunningBack, 5.0, Some(1))];
        let real = Roster::standard();
        let scenario = &default_scenarios()[0];
        let mut state = AllocationState::new(&real, 200.0, &pool, &[]);
        balanced(&mut state, scenario);
        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 0).as_deref(), Some("rb"));
        assert_eq!(occupant_at(&state.roster, Position::Flex, 0), None);
    }

    #[test]
    fn balanced_ceiling_never_below_one_dollar() {
        // K share 1% of $50 = $0.50, floored to $1.
        let pool = vec![
            c("k-2", Position::Kicker, 2.0, Some(1)),
            c("k-1", Position::Kicker, 1.0, Some(1)),
        ];
        let mut config = std::collections::HashMap::new();
        config.insert("K".to_string(), 1);
        let real = Roster::new(&config);
        let scenario = &default_scenarios()[0];
        let mut state = AllocationState::new(&real, 50.0, &pool, &[]);
        balanced(&mut state, scenario);
        assert_eq!(occupant_at(&state.roster, Position::Kicker, 0).as_deref(), Some("k-1"));
        assert_eq!(state.budget, 49.0);
    }

    #[test]
    fn stars_phase_takes_tier_one_backs_at_any_price() {
        let pool = vec![
            c("rb1", Position::RunningBack, 60.0, Some(1)),
            c("rb2", Position::RunningBack, 55.0, Some(1)),
            c("rb3", Position::RunningBack, 50.0, Some(1)),
            c("wr1", Position::WideReceiver, 45.0, Some(1)),
            c("wr-scrub", Position::WideReceiver, 2.0, Some(5)),
        ];
        let real = Roster::standard();
        let mut state = AllocationState::new(&real, 200.0, &pool, &[]);
        stars_and_scrubs(&mut state);

        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 0).as_deref(), Some("rb1"));
        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 1).as_deref(), Some("rb2"));
        assert_eq!(occupant_at(&state.roster, Position::WideReceiver, 0).as_deref(), Some("wr1"));
        assert_eq!(occupant_at(&state.roster, Position::WideReceiver, 1).as_deref(), Some("wr-scrub"));
        // rb3 costs more than $3, so FLEX stays open after phase 2.
        assert_eq!(occupant_at(&state.roster, Position::Flex, 0), None);
        assert_eq!(state.budget, 200.0 - 60.0 - 55.0 - 45.0 - 2.0);
    }

    #[test]
    fn stars_phase_skips_rostered_back() {
        let pool = vec![
            c("rb-owned", Position::RunningBack, 58.0, Some(1)),
            c("rb-t2", Position::RunningBack, 30.0, Some(2)),
        ];
        let mut real = Roster::standard();
        assert!(real.commit_real(&pool[0], 58.0, None));
        let mut state = AllocationState::new(&real, 142.0, &pool, &[]);
        stars_and_scrubs(&mut state);
        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 0).as_deref(), Some("rb-owned"));
        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 1), None);
        assert_eq!(state.budget, 142.0);
    }

    #[test]
    fn scrub_qb_ceiling_relaxes_with_budget() {
        // 200 / 14 open slots ~ 14.3, clamped to $8.
        let pool = vec![
            c("qb-9", Position::Quarterback, 9.0, Some(1)),
            c("qb-8", Position::Quarterback, 8.0, Some(2)),
        ];
        let real = Roster::standard();
        let mut state = AllocationState::new(&real, 200.0, &pool, &[]);
        stars_and_scrubs(&mut state);
        assert_eq!(occupant_at(&state.roster, Position::Quarterback, 0).as_deref(), Some("qb-8"));
    }

    #[test]
    fn scrub_qb_ceiling_floors_at_three() {
        // 20 / 14 open slots < 3, so the ceiling stays $3.
        let pool = vec![
            c("qb-4", Position::Quarterback, 4.0, Some(1)),
            c("qb-3", Position::Quarterback, 3.0, Some(2)),
        ];
        let real = Roster::standard();
        let mut state = AllocationState::new(&real, 20.0, &pool, &[]);
        stars_and_scrubs(&mut state);
        assert_eq!(occupant_at(&state.roster, Position::Quarterback, 0).as_deref(), Some("qb-3"));
    }

    #[test]
    fn depth_never_exceeds_cap() {
        let pool = vec![
            c("qb-40", Position::Quarterback, 40.0, Some(1)),
            c("rb-35", Position::RunningBack, 35.0, Some(1)),
            c("rb-36", Position::RunningBack, 36.0, Some(1)),
        ];
        let real = Roster::standard();
        let mut state = AllocationState::new(&real, 200.0, &pool, &[]);
        depth(&mut state);
        assert_eq!(occupant_at(&state.roster, Position::Quarterback, 0), None);
        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 0).as_deref(), Some("rb-35"));
        assert_eq!(occupant_at(&state.roster, Position::RunningBack, 1), None);
        assert!(state.roster.occupants().all(|o| o.price <= DEPTH_PRICE_CAP));
    }
}
