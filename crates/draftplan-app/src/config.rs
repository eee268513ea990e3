// Configuration loading and parsing (league.toml, scenarios.toml).

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use draftplan_core::scenario::{default_scenarios, Scenario, StrategyKind};
use draftplan_core::Position;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub league: LeagueConfig,
    pub scenarios: Vec<Scenario>,
    pub data_paths: DataPaths,
}

// ---------------------------------------------------------------------------
// league.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire league.toml file.
#[derive(Debug, Clone, Deserialize)]
struct LeagueFile {
    league: LeagueConfig,
    data_paths: DataPaths,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueConfig {
    pub name: String,
    /// Auction budget each team starts with.
    pub total_budget: f64,
    /// Slot label -> count, e.g. `QB = 1`, `BENCH = 6`.
    pub roster: HashMap<String, usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub candidates: String,
    pub draft_state: String,
}

// ---------------------------------------------------------------------------
// scenarios.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct ScenariosFile {
    scenarios: Vec<RawScenario>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawScenario {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    kind: String,
    #[serde(default)]
    strategy: Vec<String>,
    #[serde(default)]
    projected_points: Option<f64>,
    budget_allocation: HashMap<String, f64>,
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/league.toml` and
/// (optionally) `config/scenarios.toml`, relative to `base_dir`.
///
/// Without a scenarios.toml the stock balanced / stars-and-scrubs / depth
/// scenarios are used.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    // --- league.toml (required) ---
    let league_path = config_dir.join("league.toml");
    let league_text = read_file(&league_path)?;
    let league_file: LeagueFile =
        toml::from_str(&league_text).map_err(|e| ConfigError::ParseError {
            path: league_path.clone(),
            source: e,
        })?;

    // --- scenarios.toml (optional) ---
    let scenarios_path = config_dir.join("scenarios.toml");
    let scenarios = if scenarios_path.exists() {
        let text = read_file(&scenarios_path)?;
        let file: ScenariosFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: scenarios_path.clone(),
            source: e,
        })?;
        file.scenarios
            .into_iter()
            .map(convert_scenario)
            .collect::<Result<Vec<_>, _>>()?
    } else {
        default_scenarios()
    };

    let config = Config {
        league: league_file.league,
        scenarios,
        data_paths: league_file.data_paths,
    };

    validate(&config)?;

    Ok(config)
}

/// Config files seeded from `defaults/`, in copy order.
const SEEDED_FILES: [&str; 2] = ["league.toml", "scenarios.toml"];

/// Copy `league.toml` and `scenarios.toml` from `defaults/` into `config/`
/// when `config/` lacks them. Existing files are never overwritten.
/// Returns the files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    let league = SEEDED_FILES[0];
    if !config_dir.join(league).exists() && !defaults_dir.join(league).is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no {league} in {} or {}",
                config_dir.display(),
                defaults_dir.display()
            ),
        });
    }

    let mut copied = Vec::new();
    for name in SEEDED_FILES {
        let target = config_dir.join(name);
        let source = defaults_dir.join(name);
        if target.exists() || !source.is_file() {
            continue;
        }

        std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", config_dir.display()),
        })?;
        std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to copy {} to {}: {e}", source.display(), target.display()),
        })?;
        info!("seeded {} from {}", target.display(), source.display());
        copied.push(target);
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn convert_scenario(raw: RawScenario) -> Result<Scenario, ConfigError> {
    let kind = StrategyKind::from_str_kind(&raw.kind).ok_or_else(|| {
        ConfigError::ValidationError {
            field: format!("scenarios.{}.kind", raw.id),
            message: format!(
                "unknown strategy `{}` (expected balanced, stars-scrubs or depth-build)",
                raw.kind
            ),
        }
    })?;

    let mut budget_allocation = BTreeMap::new();
    for (label, weight) in raw.budget_allocation {
        let pos = Position::from_str_pos(&label).ok_or_else(|| ConfigError::ValidationError {
            field: format!("scenarios.{}.budget_allocation", raw.id),
            message: format!("unknown position `{label}`"),
        })?;
        budget_allocation.insert(pos, weight);
    }

    Ok(Scenario {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        kind,
        strategy: raw.strategy,
        budget_allocation,
        projected_points: raw.projected_points,
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let budget = config.league.total_budget;
    if !budget.is_finite() || budget <= 0.0 {
        return Err(ConfigError::ValidationError {
            field: "league.total_budget".into(),
            message: format!("must be > 0, got {budget}"),
        });
    }

    for label in config.league.roster.keys() {
        if Position::from_str_pos(label).is_none() {
            return Err(ConfigError::ValidationError {
                field: format!("league.roster.{label}"),
                message: "unknown position label".into(),
            });
        }
    }

    let slots: usize = config.league.roster.values().sum();
    if slots == 0 {
        return Err(ConfigError::ValidationError {
            field: "league.roster".into(),
            message: "must define at least one slot".into(),
        });
    }

    if config.scenarios.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "scenarios".into(),
            message: "must define at least one scenario".into(),
        });
    }

    let mut ids = HashSet::new();
    for scenario in &config.scenarios {
        if !ids.insert(scenario.id.as_str()) {
            return Err(ConfigError::ValidationError {
                field: format!("scenarios.{}", scenario.id),
                message: "duplicate scenario id".into(),
            });
        }

        for (pos, weight) in &scenario.budget_allocation {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ConfigError::ValidationError {
                    field: format!("scenarios.{}.budget_allocation.{pos}", scenario.id),
                    message: format!("must be >= 0, got {weight}"),
                });
            }
        }

        if scenario.kind == StrategyKind::Balanced && scenario.total_weight() <= 0.0 {
            return Err(ConfigError::ValidationError {
                field: format!("scenarios.{}.budget_allocation", scenario.id),
                message: "balanced scenarios need at least one positive weight".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
