//! Draftboard
//!
//! Loads the per-team draft-pick sources named by the manifest, reports
//! what was assembled, and optionally exports the full record set as CSV.

use draftboard::models::FilterState;
use draftboard::services::export::export_csv;
use draftboard::services::pipeline::NumericField;
use draftboard::{AppConfig, AppError, AppResult, AppState};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("draftboard={}", config.log_level).into()),
        )
        .init();

    info!("Loading draft data from {:?}", config.data_dir);

    let state = AppState::load(config).await?;
    info!("Manifest lists {} teams", state.directory.len());

    if state.store.is_empty() {
        warn!("No records loaded; check DATA_DIR");
    }

    if let Some((min_year, max_year)) = state.store.bounds(NumericField::Year) {
        info!(
            "{} picks, drafts {}-{}, {} distinct pre-draft teams",
            state.store.len(),
            min_year,
            max_year,
            state.store.pre_draft_teams().len()
        );
    }

    if let Some(path) = &state.config.export_path {
        let visible = state
            .store
            .visible(&FilterState::default(), state.config.reference_year);
        tokio::fs::write(path, export_csv(&visible)).await?;
        info!("Exported {} records to {:?}", visible.len(), path);
    }

    Ok(())
}
