//! ELM controlled vocabularies
//!
//! `elm-vocabulary` ships the controlled vocabularies of the European Learning
//! Model as language-keyed labeled lists. It knows nothing about fields, forms
//! or rendering. Consumers look vocabularies up and decide what to do with
//! the labels.
//!
//! # Architecture
//!
//! - **Data as YAML**: each built-in vocabulary is an embedded YAML document
//! - **Ordered**: labeled lists keep declaration order (`IndexMap`)
//! - **Tolerant**: malformed (non-string) labels are kept as [`LabelEntry::Other`]
//!   so callers can decide to drop them instead of failing the whole vocabulary
//!
//! ```rust
//! use elm_vocabulary::Builtin;
//!
//! let vocabulary = Builtin::LearningSettingType.load().unwrap();
//! assert_eq!(vocabulary.label("en", "formal"), Some("Formal learning"));
//! ```

pub mod builtin;
pub mod error;
pub mod types;

pub use builtin::Builtin;
pub use error::{Result, VocabularyError};
pub use types::{ControlledVocabulary, LabelEntry, LabeledList};
