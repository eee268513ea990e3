// Live draft snapshot: our purchases and players taken by other teams.
//
// The file is JSON:
//
//   {
//     "roster": [
//       { "player_id": "cmc", "purchase_price": 58, "drafted_at": "2025-08-30T19:02:11Z" },
//       { "player_id": "kelce", "purchase_price": 21, "roster_position": "FLEX",
//         "drafted_at": "2025-08-30T19:10:40Z" }
//     ],
//     "drafted_elsewhere": ["jefferson", "hill"]
//   }

use chrono::{DateTime, Utc};
use draftplan_core::{Candidate, Position, Roster};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DraftStateError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid draft state in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

/// One of our own purchases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: String,
    pub purchase_price: f64,
    /// Slot label the player was drafted into, when the draft room records it.
    #[serde(default)]
    pub roster_position: Option<String>,
    pub drafted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftStateFile {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
    /// Ids of candidates bought by other teams.
    #[serde(default)]
    pub drafted_elsewhere: Vec<String>,
}

/// Draft state resolved against the candidate pool.
#[derive(Debug, Clone)]
pub struct ResolvedDraft {
    pub real_roster: Roster,
    /// Total budget minus what was actually paid for placed entries.
    pub budget: f64,
    pub drafted_elsewhere: Vec<Candidate>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Parse a draft state from JSON text.
pub fn parse_draft_state(text: &str) -> Result<DraftStateFile, serde_json::Error> {
    serde_json::from_str(text)
}

/// Load the draft state file. A missing file means nothing has been drafted
/// yet.
pub fn load_draft_state(path: &Path) -> Result<DraftStateFile, DraftStateError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!("no draft state at {}, starting empty", path.display());
            return Ok(DraftStateFile::default());
        }
        Err(e) => {
            return Err(DraftStateError::Io {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    parse_draft_state(&text).map_err(|e| DraftStateError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Replay the draft into a fresh roster of the configured shape.
///
/// Purchases are applied in `drafted_at` order, so earlier picks claim slots
/// first. Unknown ids, invalid prices and players with no open slot are
/// skipped with a warning and do not count against the budget.
pub fn resolve(
    state: &DraftStateFile,
    pool: &[Candidate],
    roster_shape: &HashMap<String, usize>,
    total_budget: f64,
) -> ResolvedDraft {
    let by_id: HashMap<&str, &Candidate> = pool.iter().map(|c| (c.id.as_str(), c)).collect();

    let mut entries: Vec<&RosterEntry> = state.roster.iter().collect();
    entries.sort_by_key(|e| e.drafted_at);

    let mut roster = Roster::new(roster_shape);

    for entry in entries {
        let Some(candidate) = by_id.get(entry.player_id.as_str()) else {
            warn!("drafted player '{}' is not in the candidate pool", entry.player_id);
            continue;
        };
        if !entry.purchase_price.is_finite() || entry.purchase_price < 0.0 {
            warn!(
                "ignoring '{}': invalid purchase price {}",
                entry.player_id, entry.purchase_price
            );
            continue;
        }

        let requested = entry.roster_position.as_deref().and_then(|label| {
            let pos = Position::from_str_pos(label);
            if pos.is_none() {
                warn!("unknown roster position '{}' for '{}'", label, entry.player_id);
            }
            pos
        });

        if !roster.commit_real(candidate, entry.purchase_price, requested) {
            warn!("no open slot for drafted player '{}'", entry.player_id);
        }
    }

    let spent = roster.real_spend();
    let budget = total_budget - spent;
    if budget < 0.0 {
        warn!("purchases (${}) exceed the ${} budget", spent, total_budget);
    }

    let mut seen = HashSet::new();
    let mut drafted_elsewhere = Vec::new();
    for id in &state.drafted_elsewhere {
        if roster.has_candidate(id) {
            warn!("'{}' is listed as ours and as drafted elsewhere", id);
            continue;
        }
        if !seen.insert(id.as_str()) {
            continue;
        }
        match by_id.get(id.as_str()) {
            Some(candidate) => drafted_elsewhere.push((*candidate).clone()),
            None => warn!("player '{}' drafted elsewhere is not in the candidate pool", id),
        }
    }

    info!(
        "draft resolved: {} of {} slots filled, ${} remaining, {} taken elsewhere",
        roster.filled_count(),
        roster.total_count(),
        budget,
        drafted_elsewhere.len()
    );

    ResolvedDraft {
        real_roster: roster,
        budget,
        drafted_elsewhere,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
