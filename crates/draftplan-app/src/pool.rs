// Candidate pool loading from CSV.
//
// Columns: id,name,position,team,cost_value,tier,position_rank,projected_points,adp.
// Only id, name and position are required; cost_value may carry a `$` prefix.

use draftplan_core::candidate::parse_price;
use draftplan_core::{Candidate, Position};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawCandidate {
    id: String,
    name: String,
    position: String,
    #[serde(default)]
    team: Option<String>,
    #[serde(default, alias = "price", alias = "costValue")]
    cost_value: Option<String>,
    #[serde(default)]
    tier: Option<u32>,
    #[serde(default, alias = "positionRank")]
    position_rank: Option<u32>,
    #[serde(default, alias = "projectedPoints")]
    projected_points: Option<f64>,
    #[serde(default)]
    adp: Option<f64>,
}

impl RawCandidate {
    /// Convert to a `Candidate`, or explain why the row cannot be used.
    fn into_candidate(self) -> Result<Candidate, String> {
        let id = self.id.trim();
        let name = self.name.trim();
        if id.is_empty() {
            return Err(format!("row for '{name}' has no id"));
        }

        let position = match Position::from_str_pos(&self.position) {
            Some(pos) if !pos.is_meta_slot() => pos,
            Some(_) => return Err(format!("'{name}' lists slot label '{}'", self.position.trim())),
            None => return Err(format!("'{name}' has unknown position '{}'", self.position.trim())),
        };

        let price = parse_price(self.cost_value.as_deref().unwrap_or(""));

        let mut candidate = Candidate::new(id, name, position, price, self.tier);
        candidate.team = self
            .team
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        candidate.position_rank = self.position_rank;
        candidate.projected_points = self.projected_points.filter(|p| p.is_finite());
        candidate.adp = self.adp.filter(|a| a.is_finite());
        Ok(candidate)
    }
}

// ---------------------------------------------------------------------------
// Reader-based loader (private, enables testing without temp files)
// ---------------------------------------------------------------------------

fn load_pool_from_reader<R: Read>(rdr: R) -> Result<Vec<Candidate>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for result in reader.deserialize::<RawCandidate>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed candidate row: {}", e);
                continue;
            }
        };
        match raw.into_candidate() {
            Ok(candidate) => {
                if !seen.insert(candidate.id.clone()) {
                    warn!("duplicate candidate id '{}', keeping first row", candidate.id);
                    continue;
                }
                candidates.push(candidate);
            }
            Err(reason) => warn!("skipping candidate: {}", reason),
        }
    }

    Ok(candidates)
}

// ---------------------------------------------------------------------------
// Public path-based loader
// ---------------------------------------------------------------------------

/// Load the candidate pool from a CSV file. A file with no usable rows is an
/// error.
pub fn load_pool(path: &Path) -> Result<Vec<Candidate>, PoolError> {
    let file = std::fs::File::open(path).map_err(|e| PoolError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let candidates = load_pool_from_reader(file).map_err(|e| PoolError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if candidates.is_empty() {
        return Err(PoolError::Validation(format!(
            "{} produced zero valid candidates",
            path.display()
        )));
    }

    Ok(candidates)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
