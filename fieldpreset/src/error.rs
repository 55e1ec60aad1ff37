//! Error types for the default-value registry

use thiserror::Error;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, PresetError>;

/// Errors that can occur in registry operations
#[derive(Debug, Error)]
pub enum PresetError {
    /// Entry not found
    #[error("default value entry not found: {id}")]
    EntryNotFound { id: String },

    /// Target field already carries a programmatic default in its model
    #[error("the field {field} has already a default value")]
    FieldHasDefault { field: String },

    /// Target field is computed/derived
    #[error("the field {field} is a functional field")]
    FieldIsFunctional { field: String },

    /// A default value entry already exists for this field
    #[error("more than one default value for {model}.{field}")]
    DuplicateEntry { model: String, field: String },

    /// Supplied value kind does not match the field kind
    #[error("value kind {got} does not match field kind {expected} for {field}")]
    KindMismatch {
        field: String,
        expected: String,
        got: String,
    },

    /// Stored or supplied text cannot be converted for the field kind
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Choices are only defined for selection and many2one fields
    #[error("field {field} has no enumerable choices")]
    NoChoices { field: String },

    /// No record lookup configured for many2one enumeration
    #[error("no record lookup configured")]
    NoLookup,

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] fieldpreset_fields::CatalogError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PresetError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PresetError::FieldHasDefault {
            field: "status".into(),
        };
        assert_eq!(err.to_string(), "the field status has already a default value");
    }

    #[test]
    fn test_functional_display() {
        let err = PresetError::FieldIsFunctional {
            field: "age_days".into(),
        };
        assert_eq!(err.to_string(), "the field age_days is a functional field");
    }

    #[test]
    fn test_duplicate_display() {
        let err = PresetError::DuplicateEntry {
            model: "task".into(),
            field: "priority".into(),
        };
        assert!(err.to_string().contains("task.priority"));
    }
}
