// Runs every scenario build against one draft snapshot.
//
// Builds are independent and read-only over the snapshot, so each runs on
// the blocking pool and results are put back in scenario order.

use std::sync::Arc;

use draftplan_core::{plan_scenario, DraftSnapshot, Scenario, ScenarioPlan};
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, info};

/// Plan all scenarios concurrently. Plans come back in the order of
/// `scenarios`.
pub async fn plan_all(
    scenarios: Vec<Scenario>,
    snapshot: Arc<DraftSnapshot>,
) -> Result<Vec<ScenarioPlan>, JoinError> {
    let count = scenarios.len();
    let mut builds = JoinSet::new();

    for (index, scenario) in scenarios.into_iter().enumerate() {
        let snapshot = Arc::clone(&snapshot);
        builds.spawn_blocking(move || {
            debug!(scenario = %scenario.id, "building scenario");
            (index, plan_scenario(&scenario, &snapshot))
        });
    }

    let mut slots: Vec<Option<ScenarioPlan>> = (0..count).map(|_| None).collect();
    while let Some(joined) = builds.join_next().await {
        let (index, plan) = joined?;
        slots[index] = Some(plan);
    }

    let plans: Vec<ScenarioPlan> = slots.into_iter().flatten().collect();
    info!("planned {} scenarios", plans.len());
    Ok(plans)
}

/// Plan all scenarios on the calling thread.
pub fn plan_all_sequential(scenarios: &[Scenario], snapshot: &DraftSnapshot) -> Vec<ScenarioPlan> {
    scenarios
        .iter()
        .map(|scenario| plan_scenario(scenario, snapshot))
        .collect()
}
