//! Error types for vocabulary loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type for vocabulary operations
pub type Result<T> = std::result::Result<T, VocabularyError>;

/// Errors that can occur while loading a controlled vocabulary
#[derive(Debug, Error)]
pub enum VocabularyError {
    /// The vocabulary document has no id
    #[error("vocabulary id cannot be empty")]
    EmptyId,

    /// The vocabulary document declares no language at all
    #[error("vocabulary '{id}' has no labeled list")]
    NoLanguages { id: String },

    /// Vocabulary file could not be read
    #[error("failed to read vocabulary file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
