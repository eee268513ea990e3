// Draft planner entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, stdout carries the report)
// 2. Load config
// 3. Load the candidate pool and replay the live draft
// 4. Build every scenario concurrently
// 5. Print the report

use std::sync::Arc;

use draftplan::config;
use draftplan::planner;
use draftplan::report;
use draftplan::source::{self, FileDraftSource};

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let json = match std::env::args().nth(1).as_deref() {
        None => false,
        Some("--json") => true,
        Some(other) => anyhow::bail!("unknown argument `{other}` (usage: draftplan [--json])"),
    };

    // 1. Initialize tracing
    init_tracing()?;
    info!("Draft planner starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, ${} budget, {} scenarios",
        config.league.name,
        config.league.total_budget,
        config.scenarios.len()
    );

    // 3. Load pool and draft state
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let draft_source = FileDraftSource::from_paths(&cwd, &config.data_paths);
    let snapshot = source::load_snapshot(&draft_source, &config.league)
        .context("failed to load draft data")?;

    // 4. Build scenarios
    let plans = planner::plan_all(config.scenarios.clone(), Arc::new(snapshot))
        .await
        .context("scenario build task failed")?;

    // 5. Print
    if json {
        println!(
            "{}",
            report::render_json(&plans).context("failed to serialize plans")?
        );
    } else {
        print!("{}", report::render_text(&plans));
    }

    info!("Draft planner finished");
    Ok(())
}

/// Initialize tracing to log to a file so stdout stays clean for the report.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draftplan.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draftplan=info,draftplan_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
