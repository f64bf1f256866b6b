//! Error types for the controlled vocabulary field

use std::path::PathBuf;
use thiserror::Error;

/// Result type for field operations
pub type Result<T> = std::result::Result<T, VocabularyFieldError>;

/// Errors raised by the provider, field type and configuration layer.
///
/// Constraint violations are not errors: they are returned as data by
/// [`crate::constraint::ComplexDataConstraint::validate`].
#[derive(Debug, Error)]
pub enum VocabularyFieldError {
    /// The field storage has no vocabulary selected
    #[error("field '{field}' has no controlled vocabulary configured")]
    VocabularyNotConfigured { field: String },

    /// The configured vocabulary id is not registered
    #[error("unknown controlled vocabulary: {id}")]
    UnknownVocabulary { id: String },

    /// The vocabulary has no labeled list for the label language
    #[error("vocabulary '{vocabulary}' has no labels for language '{language}'")]
    MissingLanguage { vocabulary: String, language: String },

    /// The vocabulary resolved but offers no codes
    #[error("vocabulary '{vocabulary}' has no codes")]
    EmptyVocabulary { vocabulary: String },

    /// A vocabulary id was registered twice
    #[error("duplicate vocabulary id: {id}")]
    DuplicateVocabulary { id: String },

    /// A vocabulary was registered with a blank id or display name
    #[error("invalid vocabulary registration '{id}': {message}")]
    InvalidRegistration { id: String, message: String },

    /// Explicit configuration file does not exist
    #[error("configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file extension is not TOML, YAML or JSON
    #[error("unsupported configuration file format: {path}")]
    UnsupportedConfigFormat { path: PathBuf },

    /// Configuration parsed but holds an unusable value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// Configuration could not be extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Vocabulary document could not be loaded
    #[error(transparent)]
    Vocabulary(#[from] elm_vocabulary::VocabularyError),
}

impl From<figment::Error> for VocabularyFieldError {
    fn from(error: figment::Error) -> Self {
        VocabularyFieldError::Config(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VocabularyFieldError::UnknownVocabulary {
            id: "nonexistent".into(),
        };
        assert_eq!(err.to_string(), "unknown controlled vocabulary: nonexistent");
    }

    #[test]
    fn test_not_configured_names_field() {
        let err = VocabularyFieldError::VocabularyNotConfigured {
            field: "field_assessment".into(),
        };
        assert!(err.to_string().contains("field_assessment"));
    }

    #[test]
    fn test_vocabulary_error_is_transparent() {
        let err: VocabularyFieldError = elm_vocabulary::VocabularyError::EmptyId.into();
        assert_eq!(err.to_string(), "vocabulary id cannot be empty");
    }
}
