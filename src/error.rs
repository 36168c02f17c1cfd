//! Error types for recocido

/// Crate-wide error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Learning rate table is empty (at least one rate is required)")]
    EmptyLrTable,
}

/// Result type for recocido operations
pub type Result<T> = std::result::Result<T, Error>;
