//! Unified error types for PostForge Core.

use postforge_types::ConfigError;
use thiserror::Error;

/// Internal error type for setup and wiring failures.
///
/// Request-time failures never use this type; they end as a
/// [`postforge_types::ClientError`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Network client could not be built.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Configuration loading or validation failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for PostForge Core operations.
pub type AppResult<T> = Result<T, AppError>;
