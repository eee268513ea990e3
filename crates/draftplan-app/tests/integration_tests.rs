// Integration tests for the draft planner.
//
// These exercise the full pipeline through the library crate's public API:
// config loading, CSV pool and JSON draft-state providers, concurrent
// scenario planning and report rendering.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use draftplan::config::{self, LeagueConfig};
use draftplan::planner::{plan_all, plan_all_sequential};
use draftplan::report;
use draftplan::source::{load_snapshot, FileDraftSource};
use draftplan_core::{default_scenarios, DraftSnapshot, Position, ScenarioPlan, StrategyKind};

// ===========================================================================
// Test helpers
// ===========================================================================

/// Fixture directory path (relative to the crate root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES).join(name)
}

/// The standard 14-slot league used by the fixtures.
fn league() -> LeagueConfig {
    let mut roster = HashMap::new();
    roster.insert("QB".into(), 1);
    roster.insert("RB".into(), 2);
    roster.insert("WR".into(), 2);
    roster.insert("TE".into(), 1);
    roster.insert("FLEX".into(), 1);
    roster.insert("K".into(), 1);
    roster.insert("DEF".into(), 1);
    roster.insert("BENCH".into(), 6);
    LeagueConfig {
        name: "Fixture League".into(),
        total_budget: 200.0,
        roster,
    }
}

fn fixture_snapshot() -> DraftSnapshot {
    let source = FileDraftSource::new(fixture("candidates.csv"), fixture("draft_state.json"));
    load_snapshot(&source, &league()).expect("fixtures should load")
}

fn plan_for(plans: &[ScenarioPlan], kind: StrategyKind) -> &ScenarioPlan {
    plans
        .iter()
        .find(|p| p.scenario.kind == kind)
        .expect("plan for every stock kind")
}

/// Invariants every plan must hold against the snapshot it was built from.
fn assert_plan_invariants(plan: &ScenarioPlan, snapshot: &DraftSnapshot) {
    let roster = &plan.roster;
    assert_eq!(roster.total_count(), snapshot.real_roster.total_count());
    assert!(
        plan.projected_spend <= snapshot.budget + 1e-9,
        "{}: spent {} of {}",
        plan.scenario.id,
        plan.projected_spend,
        snapshot.budget
    );
    assert!((plan.leftover - (snapshot.budget - plan.projected_spend)).abs() < 1e-9);

    let mut seen = HashSet::new();
    for id in roster.committed_ids() {
        assert!(seen.insert(id), "{}: {id} used twice", plan.scenario.id);
    }

    for taken in &snapshot.drafted_elsewhere {
        assert!(
            !roster.has_candidate(&taken.id),
            "{}: {} was drafted elsewhere",
            plan.scenario.id,
            taken.id
        );
    }

    for (real, built) in snapshot.real_roster.slots.iter().zip(&roster.slots) {
        if real.occupant.is_some() {
            assert_eq!(real, built, "{}: real pick moved", plan.scenario.id);
        }
    }
}

// ===========================================================================
// Providers
// ===========================================================================

#[test]
fn fixtures_resolve_into_snapshot() {
    let snapshot = fixture_snapshot();

    // 29 rows minus an unknown position and a duplicate id.
    assert_eq!(snapshot.pool.len(), 27);
    // 200 - (58 + 2 + 7)
    assert_eq!(snapshot.budget, 133.0);
    assert_eq!(snapshot.real_roster.filled_count(), 3);

    let rb = &snapshot.real_roster.slots[1];
    assert_eq!(rb.position, Position::RunningBack);
    assert_eq!(rb.occupant.as_ref().unwrap().candidate_id, "rb-mccaffrey");

    let elsewhere: Vec<&str> = snapshot
        .drafted_elsewhere
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(elsewhere, vec!["wr-lamb", "rb-robinson", "te-kelce"]);

    let defenses = snapshot
        .pool
        .iter()
        .filter(|c| c.position == Position::Defense)
        .count();
    assert_eq!(defenses, 2);
}

#[test]
fn missing_draft_state_means_fresh_draft() {
    let source = FileDraftSource::new(fixture("candidates.csv"), fixture("no_such_state.json"));
    let snapshot = load_snapshot(&source, &league()).unwrap();
    assert_eq!(snapshot.budget, 200.0);
    assert_eq!(snapshot.real_roster.filled_count(), 0);
    assert!(snapshot.drafted_elsewhere.is_empty());
}

// ===========================================================================
// Planning
// ===========================================================================

#[tokio::test]
async fn all_plans_hold_invariants() {
    let snapshot = Arc::new(fixture_snapshot());
    let plans = plan_all(default_scenarios(), Arc::clone(&snapshot))
        .await
        .unwrap();
    assert_eq!(plans.len(), 3);
    for plan in &plans {
        assert_plan_invariants(plan, &snapshot);
    }
}

#[tokio::test]
async fn applicability_reflects_real_picks() {
    // Real picks: $58, $2, $7. One mid-priced pick is fine for stars and
    // scrubs; the $58 back rules out depth.
    let plans = plan_all(default_scenarios(), Arc::new(fixture_snapshot()))
        .await
        .unwrap();
    assert!(plan_for(&plans, StrategyKind::Balanced).applicable);
    assert!(plan_for(&plans, StrategyKind::StarsAndScrubs).applicable);
    assert!(!plan_for(&plans, StrategyKind::Depth).applicable);
}

#[test]
fn stars_and_scrubs_targets_remaining_stars() {
    let snapshot = fixture_snapshot();
    let plans = plan_all_sequential(&default_scenarios(), &snapshot);
    let stars = plan_for(&plans, StrategyKind::StarsAndScrubs);

    // McCaffrey is ours and Robinson is gone, so Hall fills the open RB slot;
    // Lamb is gone, so Hill is the top affordable WR.
    assert!(stars.roster.has_candidate("rb-hall"));
    assert!(stars.roster.has_candidate("wr-hill"));
    assert_plan_invariants(stars, &snapshot);
}

#[test]
fn depth_plan_keeps_new_fills_under_cap() {
    let snapshot = fixture_snapshot();
    let plans = plan_all_sequential(&default_scenarios(), &snapshot);
    let depth = plan_for(&plans, StrategyKind::Depth);
    assert!(depth
        .roster
        .occupants()
        .filter(|o| o.hypothetical)
        .all(|o| o.price <= 35.0));
}

// ===========================================================================
// End to end through config
// ===========================================================================

#[tokio::test]
async fn pipeline_from_seeded_config() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let tmp = std::env::temp_dir().join("draftplan_integration_pipeline");
    let _ = fs::remove_dir_all(&tmp);
    fs::create_dir_all(tmp.join("defaults")).unwrap();
    fs::create_dir_all(tmp.join("data")).unwrap();
    for name in ["league.toml", "scenarios.toml"] {
        fs::copy(crate_root.join("defaults").join(name), tmp.join("defaults").join(name)).unwrap();
    }
    fs::copy(
        crate_root.join(FIXTURES).join("candidates.csv"),
        tmp.join("data/candidates.csv"),
    )
    .unwrap();
    fs::copy(
        crate_root.join(FIXTURES).join("draft_state.json"),
        tmp.join("data/draft_state.json"),
    )
    .unwrap();

    let copied = config::ensure_config_files(&tmp).unwrap();
    assert_eq!(copied.len(), 2);
    let config = config::load_config_from(&tmp).unwrap();

    let source = FileDraftSource::from_paths(&tmp, &config.data_paths);
    let snapshot = load_snapshot(&source, &config.league).unwrap();
    assert_eq!(snapshot.budget, 133.0);

    let plans = plan_all(config.scenarios.clone(), Arc::new(snapshot))
        .await
        .unwrap();
    let ids: Vec<&str> = plans.iter().map(|p| p.scenario.id.as_str()).collect();
    assert_eq!(ids, vec!["balanced", "stars-scrubs", "depth-build"]);

    let text = report::render_text(&plans);
    assert!(text.contains("=== Stars & Scrubs (stars-scrubs) ==="));
    assert!(text.contains("Christian McCaffrey  $58"));
    assert!(text.contains("(potential)"));
    assert!(text.contains("WARNING"));

    let json: serde_json::Value =
        serde_json::from_str(&report::render_json(&plans).unwrap()).unwrap();
    assert_eq!(json["plans"].as_array().unwrap().len(), 3);
    assert_eq!(json["plans"][2]["applicable"], false);

    let _ = fs::remove_dir_all(&tmp);
}
