//! Draftboard Library
//!
//! Core of a browser over historical per-team NBA draft-pick records:
//! team-identity resolution across relocations and renames, draft-night
//! trade-chain parsing, defensive CSV normalization, and a pure
//! filter/sort/paginate pipeline over the loaded record set.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use models::{DraftPick, FilterState, TeamDirectory};
pub use store::DraftStore;

use cache::TextCache;

/// Application state bundling everything the presentation layer queries
pub struct AppState {
    pub config: AppConfig,
    pub directory: TeamDirectory,
    pub store: DraftStore,
}

impl AppState {
    /// Load the manifest and every team source, returning the assembled
    /// state. Only manifest problems are fatal; per-team failures degrade
    /// to fewer records.
    pub async fn load(config: AppConfig) -> AppResult<Self> {
        let manifest = tokio::fs::read_to_string(config.manifest_path()).await?;
        let directory = TeamDirectory::from_json(&manifest)?;

        let mut cache = TextCache::open(&config.cache);
        let store = DraftStore::load(&config, &directory, &mut cache).await;

        Ok(Self {
            config,
            directory,
            store,
        })
    }
}
