//! Error types shared across the crate.

use std::path::PathBuf;

/// Errors raised while assembling the application.
///
/// Rendering itself never fails; these cover configuration and the
/// translation catalog loaded at startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Layered configuration could not be built or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A translation catalog exists but could not be read.
    #[error("Failed to read translation catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A translation catalog is not a flat JSON object of strings.
    #[error("Invalid translation catalog {origin}: {source}")]
    CatalogParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}
