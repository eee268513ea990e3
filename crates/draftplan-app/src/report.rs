// Rendering of scenario plans for the terminal and for machine consumers.

use std::fmt::Write;

use draftplan_core::plan::PositionProjection;
use draftplan_core::{RosterSlot, ScenarioPlan};
use serde::Serialize;

/// Whole-dollar display, e.g. `$35`.
fn dollars(value: f64) -> String {
    format!("${}", value.round() as i64)
}

fn slot_line(slot: &RosterSlot) -> String {
    let label = slot.position.display_str();
    match &slot.occupant {
        None => format!("    {label:<5} --"),
        Some(o) => {
            let marker = if o.hypothetical { " (potential)" } else { "" };
            let plays = match o.position {
                Some(pos) if pos != slot.position => format!(" [{}]", pos.display_str()),
                _ => String::new(),
            };
            format!(
                "    {label:<5} {}{plays}{marker}  {}",
                o.name,
                dollars(o.price)
            )
        }
    }
}

fn projection_line(projection: &PositionProjection) -> String {
    let guidance = match projection.per_slot {
        Some(per_slot) => format!("{}/each", dollars(per_slot)),
        None => "Complete".to_string(),
    };
    let noun = if projection.slots == 1 { "slot" } else { "slots" };
    format!(
        "  {} ({} {noun}, {} open): {guidance}",
        projection.position.display_str(),
        projection.slots,
        projection.open_slots
    )
}

/// Render one plan as a block of text.
pub fn render_plan(plan: &ScenarioPlan) -> String {
    let mut out = String::new();
    let scenario = &plan.scenario;

    let _ = writeln!(out, "=== {} ({}) ===", scenario.name, scenario.kind);
    if !scenario.description.is_empty() {
        let _ = writeln!(out, "{}", scenario.description);
    }
    if !plan.applicable {
        let _ = writeln!(out, "WARNING: this strategy no longer fits the picks already made");
    }
    for bullet in &scenario.strategy {
        let _ = writeln!(out, "  - {bullet}");
    }

    let _ = writeln!(
        out,
        "Filled {}/{} | projected spend {} | leftover {} | projected points {:.1}",
        plan.roster.filled_count(),
        plan.roster.total_count(),
        dollars(plan.projected_spend),
        dollars(plan.leftover),
        plan.projected_points
    );

    for projection in &plan.projections {
        let _ = writeln!(out, "{}", projection_line(projection));
        for slot in plan
            .roster
            .slots
            .iter()
            .filter(|s| s.position == projection.position)
        {
            let _ = writeln!(out, "{}", slot_line(slot));
        }
    }

    out
}

/// Render every plan, separated by blank lines.
pub fn render_text(plans: &[ScenarioPlan]) -> String {
    plans
        .iter()
        .map(render_plan)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    plans: &'a [ScenarioPlan],
}

/// Render every plan as pretty-printed JSON.
pub fn render_json(plans: &[ScenarioPlan]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        generated_at: chrono::Utc::now(),
        plans,
    })
}
