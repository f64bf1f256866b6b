//! Controlled vocabulary field
//!
//! `elm-vocabulary-field` exposes ELM controlled vocabularies as a selectable
//! field type for content-authoring forms. It provides four pieces, each
//! resolving vocabularies through a shared [`VocabularyProvider`]:
//!
//! - **Provider**: registry of vocabulary ids ([`ControlledVocabularyProvider`])
//! - **Field type**: settings forms, schema, constraints, sample values
//!   ([`ControlledVocabularyItem`])
//! - **Widget**: select list input ([`ControlledVocabularySelectWidget`])
//! - **Formatter**: read-only label output ([`ControlledVocabularyDefaultFormatter`])
//!
//! The host framework owns persistence, form rendering and the request
//! cycle. This crate hands it plain data: [`FormElement`] trees, constraint
//! rules and [`RenderedItem`]s.
//!
//! # Settings
//!
//! | Scope | Key | Meaning |
//! |-------|-----|---------|
//! | storage | `vocabulary` | vocabulary id, locked once the field has data |
//! | field | `allow_selection` | `code → bool`; nothing checked means every code |
//! | widget / formatter | `prefix` | show `"<code> - <label>"` |

pub mod config;
pub mod constraint;
pub mod error;
pub mod field;
pub mod form;
pub mod formatter;
pub mod item;
pub mod module;
pub mod plugin;
pub mod provider;
pub mod selection;
pub mod settings;
pub mod widget;

pub use config::{ElmFieldConfig, VocabularySource, DEFAULT_LANGUAGE};
pub use constraint::{ComplexDataConstraint, Constraint, ConstraintViolation};
pub use error::{Result, VocabularyFieldError};
pub use field::{Cardinality, FieldDefinition, FieldItem};
pub use form::{ElementKind, FormElement};
pub use formatter::{ControlledVocabularyDefaultFormatter, RenderedItem, FORMATTER_ID};
pub use item::{ControlledVocabularyItem, FieldSchema, FIELD_TYPE_ID};
pub use module::VocabularyFieldModule;
pub use plugin::PluginInfo;
pub use provider::{
    ControlledVocabularyProvider, ProviderBuilder, VocabularyProvider, PROVIDER_SERVICE_ID,
};
pub use settings::{DisplaySettings, FieldSettings, StorageSettings};
pub use widget::{ControlledVocabularySelectWidget, WIDGET_ID};

pub use elm_vocabulary::{Builtin, ControlledVocabulary, LabelEntry, LabeledList};
