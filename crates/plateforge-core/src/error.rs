//! Error types for PlateForge

use thiserror::Error;

/// Main error type for PlateForge operations
#[derive(Debug, Error)]
pub enum PlateForgeError {
    /// Site boundary cannot form a simple polygon
    #[error("Invalid site: {0}")]
    InvalidSite(String),

    /// Generation request is out of range
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Geometry kernel produced an unusable result
    #[error("Geometry error: {0}")]
    Geometry(String),

    /// Catalog lookup or construction failed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Error in regulation or generator configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for PlateForge operations
pub type Result<T> = std::result::Result<T, PlateForgeError>;
