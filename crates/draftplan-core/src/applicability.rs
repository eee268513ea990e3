// Whether a strategy still fits the picks already made.
//
// Advisory only: builds run regardless of the answer.

use crate::allocation::strategies::{DEPTH_PRICE_CAP, SCRUB_PRICE};
use crate::roster::Roster;
use crate::scenario::{Scenario, StrategyKind};

/// Mid-priced real picks stars-and-scrubs tolerates before it stops applying.
const MAX_MID_PRICED_PICKS: usize = 1;

/// Check a scenario against the real (non-hypothetical) occupants.
///
/// - Stars and scrubs: at most one real pick priced in `($3, $35]`.
/// - Depth: no real pick priced above $35.
/// - Balanced: always applicable.
pub fn is_strategy_applicable(scenario: &Scenario, real_roster: &Roster) -> bool {
    match scenario.kind {
        StrategyKind::StarsAndScrubs => {
            let mid_priced = real_roster
                .real_occupants()
                .filter(|o| o.price > SCRUB_PRICE && o.price <= DEPTH_PRICE_CAP)
                .count();
            mid_priced <= MAX_MID_PRICED_PICKS
        }
        StrategyKind::Depth => real_roster
            .real_occupants()
            .all(|o| o.price <= DEPTH_PRICE_CAP),
        StrategyKind::Balanced => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::{Candidate, Position};
    use crate::roster::Occupant;
    use crate::scenario::default_scenarios;

    fn roster_with_prices(prices: &[f64]) -> Roster {
        let mut roster = Roster::standard();
        for (i, &price) in prices.iter().enumerate() {
            let c = Candidate::new(&format!("p{i}"), "P", Position::WideReceiver, price, Some(1));
            assert!(roster.commit_real(&c, price, None));
        }
        roster
    }

    fn scenario(kind: StrategyKind) -> Scenario {
        default_scenarios()
            .into_iter()
            .find(|s| s.kind == kind)
            .unwrap()
    }

    #[test]
    fn empty_roster_fits_everything() {
        let roster = Roster::standard();
        for s in default_scenarios() {
            assert!(is_strategy_applicable(&s, &roster));
        }
    }

    #[test]
    fn stars_and_scrubs_tolerates_one_mid_priced_pick() {
        let s = scenario(StrategyKind::StarsAndScrubs);
        assert!(is_strategy_applicable(&s, &roster_with_prices(&[60.0, 3.0, 20.0])));
        assert!(!is_strategy_applicable(&s, &roster_with_prices(&[20.0, 35.0])));
        // Boundaries: $3 is a scrub, $35 is mid-priced, $36 is a star.
        assert!(is_strategy_applicable(&s, &roster_with_prices(&[3.0, 3.0, 36.0, 35.0])));
    }

    #[test]
    fn depth_rejects_any_pick_over_cap() {
        let s = scenario(StrategyKind::Depth);
        assert!(is_strategy_applicable(&s, &roster_with_prices(&[35.0, 35.0])));
        assert!(!is_strategy_applicable(&s, &roster_with_prices(&[35.5])));
    }

    #[test]
    fn balanced_always_applies() {
        let s = scenario(StrategyKind::Balanced);
        assert!(is_strategy_applicable(&s, &roster_with_prices(&[70.0, 20.0, 20.0])));
    }

    #[test]
    fn hypothetical_occupants_are_ignored() {
        let s = scenario(StrategyKind::Depth);
        let mut roster = Roster::standard();
        let c = Candidate::new("x", "X", Position::Quarterback, 50.0, Some(1));
        roster.slots[0].occupant = Some(Occupant::projected(&c, 50.0));
        assert!(is_strategy_applicable(&s, &roster));
    }
}
