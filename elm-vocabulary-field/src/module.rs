//! Module wiring: builds the provider once and hands out plugins with the
//! provider injected.

use std::sync::Arc;

use tracing::info;

use crate::config::ElmFieldConfig;
use crate::error::Result;
use crate::formatter::ControlledVocabularyDefaultFormatter;
use crate::item::ControlledVocabularyItem;
use crate::provider::{ControlledVocabularyProvider, VocabularyProvider};
use crate::settings::DisplaySettings;
use crate::widget::ControlledVocabularySelectWidget;

/// The vocabulary field module.
///
/// ```rust
/// use elm_vocabulary_field::{DisplaySettings, FieldDefinition, FieldItem, VocabularyFieldModule};
///
/// let module = VocabularyFieldModule::builtin().unwrap();
/// let field = FieldDefinition::new("field_setting", "Setting", "learning_setting");
///
/// let rendered = module
///     .formatter(DisplaySettings::prefixed())
///     .view_elements(&field, &[FieldItem::new("formal")]);
/// assert_eq!(rendered[0].markup, "formal - Formal learning");
/// ```
pub struct VocabularyFieldModule {
    provider: Arc<dyn VocabularyProvider>,
    language: String,
}

impl VocabularyFieldModule {
    /// Build from configuration: built-ins plus configured vocabularies.
    pub fn new(config: &ElmFieldConfig) -> Result<Self> {
        let provider = ControlledVocabularyProvider::from_config(config)?;
        info!(
            language = %config.language,
            vocabularies = provider.list().len(),
            "vocabulary field module initialized"
        );
        Ok(Self::with_provider(Arc::new(provider), config.language.clone()))
    }

    /// Built-in vocabularies with default configuration.
    pub fn builtin() -> Result<Self> {
        Self::new(&ElmFieldConfig::default())
    }

    /// Use an already-built provider.
    pub fn with_provider(provider: Arc<dyn VocabularyProvider>, language: impl Into<String>) -> Self {
        Self {
            provider,
            language: language.into(),
        }
    }

    pub fn provider(&self) -> Arc<dyn VocabularyProvider> {
        Arc::clone(&self.provider)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn field_type(&self) -> ControlledVocabularyItem {
        ControlledVocabularyItem::with_language(self.provider(), self.language.clone())
    }

    pub fn widget(&self, settings: DisplaySettings) -> ControlledVocabularySelectWidget {
        ControlledVocabularySelectWidget::new(self.provider(), settings).with_language(self.language.clone())
    }

    pub fn formatter(&self, settings: DisplaySettings) -> ControlledVocabularyDefaultFormatter {
        ControlledVocabularyDefaultFormatter::new(self.provider(), settings)
            .with_language(self.language.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDefinition;

    #[test]
    fn plugins_share_one_provider() {
        let module = VocabularyFieldModule::builtin().unwrap();
        assert_eq!(module.language(), "en");

        let a = module.provider().vocabulary("assessment").unwrap();
        let b = module.provider().vocabulary("assessment").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn configured_language_reaches_plugins() {
        let config = ElmFieldConfig {
            language: "fr".into(),
            ..ElmFieldConfig::default()
        };
        let module = VocabularyFieldModule::new(&config).unwrap();
        let definition = FieldDefinition::new("field_a", "A", "assessment");

        // Built-ins ship English only.
        assert!(module.widget(DisplaySettings::default()).options(&definition).is_empty());
        assert!(module.field_type().constraints(&definition).is_err());
    }
}
