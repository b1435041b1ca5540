use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A per-team source file could not be read
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A source file was structurally unusable (bad header, wrong shape)
    #[error("Malformed source: {0}")]
    MalformedSource(#[from] ParseError),

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Message(String),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Check if error means a single source failed (load continues without it)
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            AppError::SourceUnavailable(_) | AppError::MalformedSource(_)
        )
    }
}

/// Normalizer-specific error types
#[derive(Error, Debug)]
pub enum ParseError {
    /// A required header column is missing, rejecting the whole file
    #[error("Required column '{0}' not found in header")]
    MissingColumn(String),

    /// The file has no header row at all
    #[error("Source file is empty")]
    EmptyFile,

    /// The manifest of team files could not be decoded
    #[error("Invalid team manifest: {0}")]
    InvalidManifest(String),
}
