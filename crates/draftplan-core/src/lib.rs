// Scenario-based roster allocation for auction drafts.
//
// Given the real roster, the remaining budget and the undrafted pool, each
// scenario produces a complete hypothetical roster using a deterministic
// multi-phase greedy fill. No I/O happens in this crate.

pub mod allocation;
pub mod applicability;
pub mod candidate;
pub mod plan;
pub mod roster;
pub mod scenario;

pub use allocation::build_scenario_roster;
pub use applicability::is_strategy_applicable;
pub use candidate::{Candidate, Position};
pub use plan::{plan_scenario, DraftSnapshot, ScenarioPlan};
pub use roster::{Occupant, Roster, RosterSlot};
pub use scenario::{default_scenarios, Scenario, StrategyKind};
