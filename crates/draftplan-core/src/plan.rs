// Scenario plans: a built roster annotated for display.

use serde::Serialize;

use crate::allocation::build_scenario_roster;
use crate::applicability::is_strategy_applicable;
use crate::candidate::{Candidate, Position};
use crate::roster::Roster;
use crate::scenario::{Scenario, StrategyKind};

/// Read-only inputs of a build, taken from the live draft.
#[derive(Debug, Clone)]
pub struct DraftSnapshot {
    pub real_roster: Roster,
    /// Real remaining budget.
    pub budget: f64,
    pub pool: Vec<Candidate>,
    pub drafted_elsewhere: Vec<Candidate>,
}

/// Budget guidance for one position label of a built roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionProjection {
    pub position: Position,
    pub slots: usize,
    /// Slots still open after the build.
    pub open_slots: usize,
    /// Suggested spend per open slot; `None` once the position is complete.
    pub per_slot: Option<f64>,
}

/// A scenario's finished roster plus display annotations.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioPlan {
    pub scenario: Scenario,
    pub roster: Roster,
    pub applicable: bool,
    pub projections: Vec<PositionProjection>,
    /// Dollars committed to hypothetical fills.
    pub projected_spend: f64,
    /// Real budget minus projected spend.
    pub leftover: f64,
    pub projected_points: f64,
}

/// Per-position spend guidance for a built roster.
///
/// Stars and scrubs shows the whole real budget split over the open slots of
/// each position. Other strategies first reserve $1 for every open slot, then
/// split the rest by the scenario's weight (read as a percentage) and add the
/// reserved dollar back per slot.
pub fn budget_projections(
    scenario: &Scenario,
    built: &Roster,
    real_budget: f64,
) -> Vec<PositionProjection> {
    let total_open = built.open_slots() as f64;
    let available = (real_budget - total_open).max(0.0);

    built
        .positions()
        .into_iter()
        .map(|position| {
            let open = built.open_slots_at(position);
            let per_slot = (open > 0).then(|| {
                let open = open as f64;
                match scenario.kind {
                    StrategyKind::StarsAndScrubs => real_budget / open,
                    _ => {
                        let position_budget = available * scenario.weight(position) / 100.0 + open;
                        (position_budget / open).max(1.0)
                    }
                }
            });
            PositionProjection {
                position,
                slots: built.slots_at(position),
                open_slots: open,
                per_slot,
            }
        })
        .collect()
}

/// Build `scenario` against `snapshot` and annotate the result.
pub fn plan_scenario(scenario: &Scenario, snapshot: &DraftSnapshot) -> ScenarioPlan {
    let roster = build_scenario_roster(
        scenario,
        &snapshot.real_roster,
        snapshot.budget,
        &snapshot.pool,
        &snapshot.drafted_elsewhere,
    );
    let projected_spend = roster.hypothetical_spend();

    ScenarioPlan {
        scenario: scenario.clone(),
        applicable: is_strategy_applicable(scenario, &snapshot.real_roster),
        projections: budget_projections(scenario, &roster, snapshot.budget),
        projected_spend,
        leftover: snapshot.budget - projected_spend,
        projected_points: roster.projected_points(),
        roster,
    }
}
