//! Core vocabulary types.
//!
//! A controlled vocabulary is a named set of `code → label` pairs, one
//! labeled list per language. Lists keep the order in which the document
//! declares them.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, VocabularyError};

/// A single label in a labeled list.
///
/// Well-formed vocabularies only contain `Text` entries. Anything else found
/// in a vocabulary document (numbers, sequences, nested maps) is preserved as
/// `Other` rather than rejecting the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LabelEntry {
    Text(String),
    Other(serde_yaml_ng::Value),
}

impl LabelEntry {
    /// The label text, if this entry is a plain string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LabelEntry::Text(text) => Some(text),
            LabelEntry::Other(_) => None,
        }
    }
}

impl From<&str> for LabelEntry {
    fn from(text: &str) -> Self {
        LabelEntry::Text(text.to_string())
    }
}

impl From<String> for LabelEntry {
    fn from(text: String) -> Self {
        LabelEntry::Text(text)
    }
}

/// Ordered mapping from code to label for one language.
pub type LabeledList = IndexMap<String, LabelEntry>;

/// A controlled vocabulary: an id plus one labeled list per language.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlledVocabulary {
    id: String,
    #[serde(default)]
    labels: IndexMap<String, LabeledList>,
}

impl ControlledVocabulary {
    /// Build a vocabulary from already-assembled labeled lists.
    pub fn new(id: impl Into<String>, labels: IndexMap<String, LabeledList>) -> Result<Self> {
        let vocabulary = Self {
            id: id.into(),
            labels,
        };
        vocabulary.check()?;
        Ok(vocabulary)
    }

    /// Parse a vocabulary document.
    ///
    /// ```yaml
    /// id: learning_schedule
    /// labels:
    ///   en:
    ///     full_time: Full-time
    ///     part_time: Part-time
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self> {
        let vocabulary: ControlledVocabulary = serde_yaml_ng::from_str(source)?;
        vocabulary.check()?;
        trace!(
            id = %vocabulary.id,
            languages = vocabulary.labels.len(),
            "parsed vocabulary"
        );
        Ok(vocabulary)
    }

    /// Read and parse a vocabulary document from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| VocabularyError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    /// The vocabulary id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Languages this vocabulary has a labeled list for, in document order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }

    /// The labeled list for a language.
    pub fn labeled_list(&self, language: &str) -> Option<&LabeledList> {
        self.labels.get(language)
    }

    /// The text label of a code. `None` for unknown codes and malformed labels.
    pub fn label(&self, language: &str, code: &str) -> Option<&str> {
        self.labeled_list(language)?
            .get(code)
            .and_then(LabelEntry::as_text)
    }

    /// All codes of a language, including those with malformed labels.
    pub fn codes(&self, language: &str) -> Vec<&str> {
        self.labeled_list(language)
            .map(|list| list.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether `code` belongs to the labeled list of `language`.
    pub fn contains(&self, language: &str, code: &str) -> bool {
        self.labeled_list(language)
            .is_some_and(|list| list.contains_key(code))
    }

    fn check(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(VocabularyError::EmptyId);
        }
        if self.labels.is_empty() {
            return Err(VocabularyError::NoLanguages {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}
