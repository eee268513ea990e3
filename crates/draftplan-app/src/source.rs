// Where the planner gets its inputs: the candidate pool and the live draft.

use std::path::{Path, PathBuf};

use draftplan_core::{Candidate, DraftSnapshot};
use tracing::info;

use crate::config::{DataPaths, LeagueConfig};
use crate::draft_state::{self, DraftStateError, DraftStateFile};
use crate::pool::{self, PoolError};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error(transparent)]
    Pool(#[from] PoolError),

    #[error(transparent)]
    DraftState(#[from] DraftStateError),
}

/// Provider of the two external inputs a plan needs.
pub trait DraftSource {
    /// Every candidate known to the draft, including ones already taken.
    fn candidate_pool(&self) -> Result<Vec<Candidate>, SourceError>;

    /// Our purchases so far and the ids taken by other teams.
    fn draft_state(&self) -> Result<DraftStateFile, SourceError>;
}

/// Reads the pool from CSV and the draft state from JSON.
#[derive(Debug, Clone)]
pub struct FileDraftSource {
    pub candidates: PathBuf,
    pub draft_state: PathBuf,
}

impl FileDraftSource {
    pub fn new(candidates: impl Into<PathBuf>, draft_state: impl Into<PathBuf>) -> Self {
        FileDraftSource {
            candidates: candidates.into(),
            draft_state: draft_state.into(),
        }
    }

    /// Resolve the configured data paths against `base_dir`.
    pub fn from_paths(base_dir: &Path, paths: &DataPaths) -> Self {
        FileDraftSource::new(
            base_dir.join(&paths.candidates),
            base_dir.join(&paths.draft_state),
        )
    }
}

impl DraftSource for FileDraftSource {
    fn candidate_pool(&self) -> Result<Vec<Candidate>, SourceError> {
        Ok(pool::load_pool(&self.candidates)?)
    }

    fn draft_state(&self) -> Result<DraftStateFile, SourceError> {
        Ok(draft_state::load_draft_state(&self.draft_state)?)
    }
}

/// Pull both inputs from `source` and replay the draft into a snapshot.
pub fn load_snapshot<S: DraftSource + ?Sized>(
    source: &S,
    league: &LeagueConfig,
) -> Result<DraftSnapshot, SourceError> {
    let pool = source.candidate_pool()?;
    info!("loaded {} candidates", pool.len());

    let state = source.draft_state()?;
    let resolved = draft_state::resolve(&state, &pool, &league.roster, league.total_budget);

    Ok(DraftSnapshot {
        real_roster: resolved.real_roster,
        budget: resolved.budget,
        pool,
        drafted_elsewhere: resolved.drafted_elsewhere,
    })
}
