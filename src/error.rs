//! Error types for the extensions manager.

use thiserror::Error;

use crate::catalog::ExtensionId;

/// Errors that can occur while loading configuration or catalog data.
///
/// Intents on the store never fail; unknown ids are silently ignored.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Catalog file is structurally wrong
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Two catalog entries share an id
    #[error("Duplicate extension id: {0}")]
    DuplicateId(ExtensionId),

    /// A filter name outside all/active/inactive
    #[error("Unknown filter: {0:?}")]
    InvalidFilter(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON catalog errors
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for manager operations
pub type ManagerResult<T> = Result<T, ManagerError>;
