//! The `elm_controlled_vocabulary_select` widget.
//!
//! Renders one select per delta, populated from the field's vocabulary and
//! narrowed by the field's `allow_selection` settings.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{trace, warn};

use crate::config::DEFAULT_LANGUAGE;
use crate::constraint::ConstraintViolation;
use crate::error::{Result, VocabularyFieldError};
use crate::field::{FieldDefinition, FieldItem};
use crate::form::{ElementKind, FormElement};
use crate::item::FIELD_TYPE_ID;
use crate::plugin::PluginInfo;
use crate::provider::VocabularyProvider;
use crate::selection::{labeled_list, resolve_vocabulary, select_options};
use crate::settings::{DisplaySettings, PREFIX_SETTING_TITLE};

/// Widget plugin id.
pub const WIDGET_ID: &str = "elm_controlled_vocabulary_select";

/// Select list widget for controlled vocabulary fields.
pub struct ControlledVocabularySelectWidget {
    provider: Arc<dyn VocabularyProvider>,
    settings: DisplaySettings,
    language: String,
}

impl ControlledVocabularySelectWidget {
    pub fn new(provider: Arc<dyn VocabularyProvider>, settings: DisplaySettings) -> Self {
        Self {
            provider,
            settings,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn info() -> PluginInfo {
        PluginInfo {
            id: WIDGET_ID,
            label: "Select list",
            field_types: &[FIELD_TYPE_ID],
        }
    }

    pub fn default_settings() -> DisplaySettings {
        DisplaySettings::default()
    }

    pub fn settings(&self) -> DisplaySettings {
        self.settings
    }

    pub fn settings_form(&self) -> FormElement {
        FormElement::container().with_child(
            "prefix",
            FormElement::checkbox(self.settings.prefix).with_title(PREFIX_SETTING_TITLE),
        )
    }

    pub fn settings_summary(&self) -> Vec<String> {
        vec![self.settings.summary()]
    }

    /// Options offered for `definition`, keyed by code.
    ///
    /// Empty when no vocabulary is configured or it cannot be resolved.
    pub fn options(&self, definition: &FieldDefinition) -> IndexMap<String, String> {
        match self.try_options(definition) {
            Ok(options) => options,
            Err(VocabularyFieldError::VocabularyNotConfigured { .. }) => IndexMap::new(),
            Err(err) => {
                warn!(field = %definition.name, %err, "select widget has no options");
                IndexMap::new()
            }
        }
    }

    fn try_options(&self, definition: &FieldDefinition) -> Result<IndexMap<String, String>> {
        let vocabulary = resolve_vocabulary(self.provider.as_ref(), definition)?;
        let list = labeled_list(&vocabulary, &self.language)?;
        Ok(select_options(list, &definition.settings, self.settings))
    }

    /// Build the input for `items[delta]` inside the host's wrapper `element`.
    pub fn form_element(
        &self,
        definition: &FieldDefinition,
        items: &[FieldItem],
        delta: usize,
        element: FormElement,
    ) -> FormElement {
        let default_value = items
            .get(delta)
            .and_then(FieldItem::code)
            .map(str::to_string);

        let mut value = FormElement::new(ElementKind::Select {
            options: self.options(definition),
            empty_value: Some(String::new()),
            default_value,
            required: false,
            disabled: false,
        });

        // Single-value fields reuse the field title on the select.
        if definition.cardinality.is_single() {
            value.title = element.title.clone();
        }

        element.with_child("value", value)
    }

    /// The element a violation should be reported on.
    ///
    /// The property segment of the violation path (`"0.value"` → `value`)
    /// selects the nested input. Paths without a property segment report on
    /// the whole element; a property with no matching input yields `None`.
    pub fn error_element<'a>(
        &self,
        element: &'a FormElement,
        violation: &ConstraintViolation,
    ) -> Option<&'a FormElement> {
        match violation.property() {
            Some(property) => element.child(property),
            None => Some(element),
        }
    }

    /// Store empty selections as absent values.
    pub fn massage_form_values(&self, values: Vec<FieldItem>) -> Vec<FieldItem> {
        values
            .into_iter()
            .map(|item| {
                if item.value.as_deref() == Some("") {
                    trace!("normalized empty selection to no value");
                    FieldItem::empty()
                } else {
                    item
                }
            })
            .collect()
    }
}
