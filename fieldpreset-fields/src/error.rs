//! Error types for the metadata catalog

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur in catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Model not found by name
    #[error("model not found: {name}")]
    ModelNotFound { name: String },

    /// Field not found on a model
    #[error("field not found: {model}.{name}")]
    FieldNotFound { model: String, name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
