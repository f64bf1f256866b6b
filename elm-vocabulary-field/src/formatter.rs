//! The `elm_controlled_vocabulary_default` formatter.

use std::sync::Arc;

use elm_vocabulary::LabelEntry;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DEFAULT_LANGUAGE;
use crate::field::{FieldDefinition, FieldItem};
use crate::form::FormElement;
use crate::item::FIELD_TYPE_ID;
use crate::plugin::PluginInfo;
use crate::provider::VocabularyProvider;
use crate::selection::{labeled_list, resolve_vocabulary};
use crate::settings::{DisplaySettings, PREFIX_SETTING_TITLE};

/// Formatter plugin id.
pub const FORMATTER_ID: &str = "elm_controlled_vocabulary_default";

/// Rendered output for one delta.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedItem {
    pub delta: usize,
    pub markup: String,
}

/// Renders stored codes as their labels.
pub struct ControlledVocabularyDefaultFormatter {
    provider: Arc<dyn VocabularyProvider>,
    settings: DisplaySettings,
    language: String,
}

impl ControlledVocabularyDefaultFormatter {
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
            id: FORMATTER_ID,
            label: "Default",
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

    /// Render every non-empty item.
    ///
    /// Nothing is rendered when the field's vocabulary cannot be resolved or
    /// has no labels in the configured language.
    /// A code without a text label renders as the raw code.
    pub fn view_elements(&self, definition: &FieldDefinition, items: &[FieldItem]) -> Vec<RenderedItem> {
        if items.iter().all(FieldItem::is_empty) {
            return Vec::new();
        }

        let vocabulary = match resolve_vocabulary(self.provider.as_ref(), definition) {
            Ok(vocabulary) => vocabulary,
            Err(err) => {
                warn!(field = %definition.name, %err, "cannot render controlled vocabulary values");
                return Vec::new();
            }
        };
        let list = match labeled_list(&vocabulary, &self.language) {
            Ok(list) => list,
            Err(err) => {
                warn!(field = %definition.name, %err, "cannot render controlled vocabulary values");
                return Vec::new();
            }
        };

        items
            .iter()
            .enumerate()
            .filter_map(|(delta, item)| {
                let code = item.code()?;
                let label = list.get(code).and_then(LabelEntry::as_text).unwrap_or_else(|| {
                    debug!(
                        vocabulary = %vocabulary.id(),
                        %code,
                        language = %self.language,
                        "no label for stored code"
                    );
                    code
                });
                Some(RenderedItem {
                    delta,
                    markup: self.settings.display_text(code, label),
                })
            })
            .collect()
    }
}
