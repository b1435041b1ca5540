//! The in-memory record store and its load path.
//!
//! `DraftStore` is constructed once after every team source has been
//! attempted, then passed by reference wherever records are queried; there
//! is no ambient global collection and no in-place mutation after load.

use crate::cache::TextCache;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::models::{DraftPick, FilterState, TeamDirectory};
use crate::services::normalizer::parse_team_file;
use crate::services::pipeline::{
    distinct_pre_draft_teams, numeric_bounds, visible_picks, NumericField,
};
use std::path::Path;
use tracing::{info, warn};

/// Read one team's raw payload from disk
async fn read_source(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::SourceUnavailable(format!("{}: {}", path.display(), e)))
}

#[derive(Debug, Default)]
pub struct DraftStore {
    picks: Vec<DraftPick>,
}

impl DraftStore {
    /// Build a store from already-normalized records (used by tests and
    /// alternative loaders)
    pub fn from_picks(picks: Vec<DraftPick>) -> Self {
        Self { picks }
    }

    /// Load every team file named by the manifest. Sources fail
    /// independently: a team whose file cannot be read or whose header is
    /// unusable contributes zero records and the load continues. The store
    /// is only returned once all teams were attempted.
    pub async fn load(
        config: &AppConfig,
        directory: &TeamDirectory,
        cache: &mut TextCache,
    ) -> Self {
        let reads = directory.codes().map(|code| {
            let path = config.team_file_path(code);
            let code = code.to_string();
            async move {
                let result = read_source(&path).await;
                (code, result)
            }
        });
        let results = futures::future::join_all(reads).await;

        let mut picks = Vec::new();
        for (code, result) in results {
            let contents = match result {
                Ok(text) => {
                    cache.put(&code, &text);
                    text
                }
                Err(e) => match cache.get(&code) {
                    Some(cached) => {
                        info!("{}: {}; using cached payload", code, e);
                        cached
                    }
                    None => {
                        warn!("{}: {}; no records loaded", code, e);
                        continue;
                    }
                },
            };

            match parse_team_file(&code, &contents) {
                Ok(mut team_picks) => {
                    info!("{}: loaded {} picks", code, team_picks.len());
                    picks.append(&mut team_picks);
                }
                Err(e) => {
                    warn!("{}: rejected source file ({})", code, e);
                }
            }
        }

        info!("Loaded {} picks across {} teams", picks.len(), directory.len());
        Self { picks }
    }

    /// The full record set
    pub fn records(&self) -> &[DraftPick] {
        &self.picks
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Visible records for a filter state (pure, recomputed on demand)
    pub fn visible(&self, filter: &FilterState, reference_year: u16) -> Vec<DraftPick> {
        visible_picks(&self.picks, filter, reference_year)
    }

    /// Distinct pre-draft teams across all loaded records
    pub fn pre_draft_teams(&self) -> Vec<String> {
        distinct_pre_draft_teams(&self.picks)
    }

    /// Min/max of a numeric field, used to seed range-filter bounds
    pub fn bounds(&self, field: NumericField) -> Option<(u32, u32)> {
        numeric_bounds(&self.picks, field)
    }
}
