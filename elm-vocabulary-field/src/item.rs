//! The `elm_controlled_vocabulary` field type.

use std::sync::Arc;

use indexmap::IndexMap;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DEFAULT_LANGUAGE;
use crate::constraint::{ComplexDataConstraint, Constraint, ConstraintViolation};
use crate::error::{Result, VocabularyFieldError};
use crate::field::{FieldDefinition, FieldItem};
use crate::form::{ElementKind, FormElement};
use crate::formatter::FORMATTER_ID;
use crate::provider::VocabularyProvider;
use crate::selection::{allowed_codes, labeled_list, resolve_vocabulary, text_labels};
use crate::settings::{FieldSettings, StorageSettings};
use crate::widget::WIDGET_ID;

/// Field type plugin id.
pub const FIELD_TYPE_ID: &str = "elm_controlled_vocabulary";

/// Maximum length of a stored code.
pub const VALUE_MAX_LENGTH: u32 = 255;

/// Static plugin metadata for the field type.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldTypeInfo {
    pub id: &'static str,
    pub module: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub default_widget: &'static str,
    pub default_formatter: &'static str,
}

/// Storage column types.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Varchar,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColumnSpec {
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub length: u32,
}

/// Storage schema: columns plus named indexes over them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldSchema {
    pub columns: IndexMap<String, ColumnSpec>,
    pub indexes: IndexMap<String, Vec<String>>,
}

/// Typed property of a field item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub data_type: &'static str,
    pub label: &'static str,
    pub required: bool,
}

/// The controlled vocabulary field type.
pub struct ControlledVocabularyItem {
    provider: Arc<dyn VocabularyProvider>,
    language: String,
}

impl ControlledVocabularyItem {
    pub fn new(provider: Arc<dyn VocabularyProvider>) -> Self {
        Self::with_language(provider, DEFAULT_LANGUAGE)
    }

    pub fn with_language(provider: Arc<dyn VocabularyProvider>, language: impl Into<String>) -> Self {
        Self {
            provider,
            language: language.into(),
        }
    }

    pub fn info() -> FieldTypeInfo {
        FieldTypeInfo {
            id: FIELD_TYPE_ID,
            module: "elm_vocabulary_field",
            label: "Controlled vocabulary",
            description: "Choice of ELM controlled vocabularies.",
            category: "selection_list",
            default_widget: WIDGET_ID,
            default_formatter: FORMATTER_ID,
        }
    }

    pub fn default_storage_settings() -> StorageSettings {
        StorageSettings::default()
    }

    pub fn default_field_settings() -> FieldSettings {
        FieldSettings::default()
    }

    /// Vocabulary chooser. Locked once the field holds data.
    pub fn storage_settings_form(&self, definition: &FieldDefinition, has_data: bool) -> FormElement {
        let vocabulary = FormElement::new(ElementKind::Select {
            options: self.provider.list(),
            empty_value: Some(String::new()),
            default_value: definition.vocabulary_id().map(str::to_string),
            required: !has_data,
            disabled: has_data,
        })
        .with_title("Controlled vocabulary");

        FormElement::container().with_child("vocabulary", vocabulary)
    }

    /// One checkbox per code to restrict the selectable subset.
    pub fn field_settings_form(&self, definition: &FieldDefinition) -> FormElement {
        let options = match self.labels(definition) {
            Ok(list) => list,
            Err(VocabularyFieldError::VocabularyNotConfigured { .. }) => IndexMap::new(),
            Err(err) => {
                warn!(field = %definition.name, %err, "no codes offered for selection");
                IndexMap::new()
            }
        };

        let default_value = definition
            .settings
            .allow_selection
            .iter()
            .filter(|(code, _)| options.contains_key(code.as_str()))
            .map(|(code, checked)| (code.clone(), *checked))
            .collect();

        let allow_selection = FormElement::new(ElementKind::Checkboxes {
            options,
            default_value,
        })
        .with_title("Allow selection")
        .with_description("If no values are checked then all values can be selected.");

        FormElement::container().with_child("allow_selection", allow_selection)
    }

    pub fn property_definitions() -> IndexMap<String, PropertyDefinition> {
        let mut properties = IndexMap::new();
        properties.insert(
            "value".to_string(),
            PropertyDefinition {
                data_type: "string",
                label: "Value",
                required: true,
            },
        );
        properties
    }

    /// Constraints for items of this field: the value must be one of the
    /// effective allowed codes and must not be blank.
    pub fn constraints(&self, definition: &FieldDefinition) -> Result<Vec<ComplexDataConstraint>> {
        let vocabulary = resolve_vocabulary(self.provider.as_ref(), definition)?;
        let list = labeled_list(&vocabulary, &self.language)?;
        let choices: Vec<String> = allowed_codes(list, &definition.settings)
            .into_iter()
            .map(str::to_string)
            .collect();

        debug!(
            field = %definition.name,
            vocabulary = %vocabulary.id(),
            allowed = choices.len(),
            "built field constraints"
        );

        Ok(vec![ComplexDataConstraint::new()
            .with("value", Constraint::AllowedValues { choices })
            .with("value", Constraint::NotBlank)])
    }

    /// Validate items against [`Self::constraints`].
    pub fn validate(
        &self,
        definition: &FieldDefinition,
        items: &[FieldItem],
    ) -> Result<Vec<ConstraintViolation>> {
        let constraints = self.constraints(definition)?;
        let mut violations = Vec::new();
        for (delta, item) in items.iter().enumerate() {
            for constraint in &constraints {
                violations.extend(constraint.validate(delta, item));
            }
        }
        Ok(violations)
    }

    pub fn schema() -> FieldSchema {
        let mut columns = IndexMap::new();
        columns.insert(
            "value".to_string(),
            ColumnSpec {
                column_type: ColumnType::Varchar,
                length: VALUE_MAX_LENGTH,
            },
        );
        let mut indexes = IndexMap::new();
        indexes.insert("value".to_string(), vec!["value".to_string()]);
        FieldSchema { columns, indexes }
    }

    pub fn is_empty(item: &FieldItem) -> bool {
        item.is_empty()
    }

    /// A random code of the field's vocabulary, for fixtures and previews.
    ///
    /// An unconfigured, unknown or empty vocabulary is a configuration error.
    pub fn generate_sample_value<R: Rng + ?Sized>(
        &self,
        definition: &FieldDefinition,
        rng: &mut R,
    ) -> Result<FieldItem> {
        let vocabulary = resolve_vocabulary(self.provider.as_ref(), definition)?;
        let list = labeled_list(&vocabulary, &self.language)?;
        let codes: Vec<&String> = list.keys().collect();
        let code = codes
            .choose(rng)
            .ok_or_else(|| VocabularyFieldError::EmptyVocabulary {
                vocabulary: vocabulary.id().to_string(),
            })?;
        Ok(FieldItem::new(code.as_str()))
    }

    fn labels(&self, definition: &FieldDefinition) -> Result<IndexMap<String, String>> {
        let vocabulary = resolve_vocabulary(self.provider.as_ref(), definition)?;
        Ok(text_labels(labeled_list(&vocabulary, &self.language)?))
    }
}
