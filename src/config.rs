use std::env;
use std::path::PathBuf;

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub dir: PathBuf,
    pub app_version: String,
    pub enabled: bool,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub cache: CacheConfig,
    pub log_level: String,
    /// Year used for active/retired derivation, so the pipeline stays
    /// deterministic instead of reading the wall clock.
    pub reference_year: u16,
    pub export_path: Option<PathBuf>,
}

impl CacheConfig {
    /// Create cache config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let dir = env::var("CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".draftboard-cache"));

        let app_version =
            env::var("APP_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        let enabled = env::var("CACHE_ENABLED")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .unwrap_or(true);

        if app_version.trim().is_empty() {
            return Err("APP_VERSION must not be empty".to_string());
        }

        Ok(Self {
            dir,
            app_version,
            enabled,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".draftboard-cache"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            enabled: true,
        }
    }
}

impl AppConfig {
    /// Create application config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let cache = CacheConfig::from_env()?;

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let reference_year = match env::var("REFERENCE_YEAR") {
            Ok(s) => s
                .parse::<u16>()
                .map_err(|_| format!("Invalid REFERENCE_YEAR: {}", s))?,
            Err(_) => 2025,
        };

        let export_path = env::var("EXPORT_PATH").ok().map(PathBuf::from);

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid LOG_LEVEL: {}. Must be one of: {:?}",
                log_level, valid_log_levels
            ));
        }

        // Draft records start in the late 1940s
        if reference_year < 1947 {
            return Err(format!(
                "Invalid REFERENCE_YEAR: {} predates the draft",
                reference_year
            ));
        }

        Ok(Self {
            data_dir,
            cache,
            log_level: log_level.to_lowercase(),
            reference_year,
            export_path,
        })
    }

    /// Path to the team manifest inside the data directory
    pub fn manifest_path(&self) -> PathBuf {
        self.data_dir.join("teams.json")
    }

    /// Path of the CSV file for one team code
    pub fn team_file_path(&self, code: &str) -> PathBuf {
        self.data_dir.join(format!("{}.csv", code))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            cache: CacheConfig::default(),
            log_level: "info".to_string(),
            reference_year: 2025,
            export_path: None,
        }
    }
}
