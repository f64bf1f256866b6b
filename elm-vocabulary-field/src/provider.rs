//! Vocabulary registry: the lookup service every plugin resolves through.
//!
//! The registry is a map from vocabulary id to vocabulary, built once at
//! startup and immutable afterwards. Components receive it as an
//! `Arc<dyn VocabularyProvider>`; there is no global lookup.

use std::sync::Arc;

use elm_vocabulary::{Builtin, ControlledVocabulary};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::config::ElmFieldConfig;
use crate::error::{Result, VocabularyFieldError};

/// Service name the provider is published under in the host container.
pub const PROVIDER_SERVICE_ID: &str = "elm_vocabulary_field.provider";

/// Lookup service for controlled vocabularies.
pub trait VocabularyProvider: Send + Sync {
    /// Supported vocabulary ids with their display names, in registration order.
    fn list(&self) -> IndexMap<String, String>;

    /// The vocabulary registered under `id`, or `None` for unknown ids
    /// (including the empty string).
    fn vocabulary(&self, id: &str) -> Option<Arc<ControlledVocabulary>>;
}

/// Display name of a built-in vocabulary.
pub fn builtin_name(builtin: Builtin) -> &'static str {
    match builtin {
        Builtin::AssessmentType => "Assessment type",
        Builtin::LearningActivityType => "Learning activity type",
        Builtin::LearningOpportunityType => "Learning opportunity type",
        Builtin::LearningScheduleType => "Learning schedule type",
        Builtin::LearningSettingType => "Learning setting type",
        Builtin::ModeOfLearningAndAssessment => "Mode of learning and assessment",
    }
}

struct Registration {
    name: String,
    vocabulary: Arc<ControlledVocabulary>,
}

/// Builder for [`ControlledVocabularyProvider`].
#[derive(Default)]
pub struct ProviderBuilder {
    registry: IndexMap<String, Registration>,
}

impl ProviderBuilder {
    /// Register a vocabulary under `id`. Ids must be unique and neither the
    /// id nor the display name may be blank.
    pub fn register(
        mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        vocabulary: ControlledVocabulary,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(VocabularyFieldError::InvalidRegistration {
                id,
                message: "id cannot be empty".into(),
            });
        }
        if name.trim().is_empty() {
            return Err(VocabularyFieldError::InvalidRegistration {
                id,
                message: "display name cannot be empty".into(),
            });
        }
        if self.registry.contains_key(&id) {
            return Err(VocabularyFieldError::DuplicateVocabulary { id });
        }
        if vocabulary.id() != id {
            warn!(
                registry_id = %id,
                document_id = %vocabulary.id(),
                "vocabulary registered under a different id than it declares"
            );
        }
        debug!(%id, "registered vocabulary");
        self.registry.insert(
            id,
            Registration {
                name,
                vocabulary: Arc::new(vocabulary),
            },
        );
        Ok(self)
    }

    /// Register the six built-in ELM vocabularies.
    pub fn with_builtins(mut self) -> Result<Self> {
        for builtin in Builtin::ALL {
            self = self.register(builtin.id(), builtin_name(builtin), builtin.load()?)?;
        }
        Ok(self)
    }

    pub fn build(self) -> ControlledVocabularyProvider {
        ControlledVocabularyProvider {
            registry: self.registry,
        }
    }
}

/// Registry-backed [`VocabularyProvider`].
pub struct ControlledVocabularyProvider {
    registry: IndexMap<String, Registration>,
}

impl ControlledVocabularyProvider {
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// A provider holding exactly the built-in vocabularies.
    pub fn builtin() -> Result<Self> {
        Ok(Self::builder().with_builtins()?.build())
    }

    /// Built-ins plus the extra vocabularies declared in configuration.
    pub fn from_config(config: &ElmFieldConfig) -> Result<Self> {
        let mut builder = Self::builder().with_builtins()?;
        for source in &config.vocabularies {
            let path = source.resolved_path();
            let vocabulary = ControlledVocabulary::from_path(&path)?;
            builder = builder.register(source.id.clone(), source.name.clone(), vocabulary)?;
        }
        let provider = builder.build();
        debug!(vocabularies = provider.registry.len(), "vocabulary provider ready");
        Ok(provider)
    }
}

impl VocabularyProvider for ControlledVocabularyProvider {
    fn list(&self) -> IndexMap<String, String> {
        self.registry
            .iter()
            .map(|(id, registration)| (id.clone(), registration.name.clone()))
            .collect()
    }

    fn vocabulary(&self, id: &str) -> Option<Arc<ControlledVocabulary>> {
        self.registry
            .get(id)
            .map(|registration| Arc::clone(&registration.vocabulary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VocabularySource;
    use std::fs;
    use tempfile::TempDir;

    fn tiny(id: &str) -> ControlledVocabulary {
        ControlledVocabulary::from_yaml(&format!("id: {id}\nlabels:\n  en:\n    a: Alpha\n")).unwrap()
    }

    #[test]
    fn builtin_list_order_and_names() {
        let provider = ControlledVocabularyProvider::builtin().unwrap();
        let list = provider.list();
        let ids: Vec<_> = list.keys().map(String::as_str).collect();
        assert_eq!(
            ids,
            vec![
                "assessment",
                "learning_activity",
                "learning_opportunity",
                "learning_schedule",
                "learning_setting",
                "learning_assessment",
            ]
        );
        assert_eq!(list["learning_assessment"], "Mode of learning and assessment");
        assert!(list.values().all(|name| !name.is_empty()));
    }

    #[test]
    fn unknown_ids_resolve_to_none() {
        let provider = ControlledVocabularyProvider::builtin().unwrap();
        assert!(provider.vocabulary("nonexistent").is_none());
        assert!(provider.vocabulary("").is_none());
        assert!(provider.vocabulary("Assessment").is_none());
    }

    #[test]
    fn resolved_vocabulary_is_shared() {
        let provider = ControlledVocabularyProvider::builtin().unwrap();
        let first = provider.vocabulary("assessment").unwrap();
        let second = provider.vocabulary("assessment").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let result = ControlledVocabularyProvider::builder()
            .register("a", "A", tiny("a"))
            .unwrap()
            .register("a", "Again", tiny("a"));
        assert!(matches!(
            result,
            Err(VocabularyFieldError::DuplicateVocabulary { ref id }) if id == "a"
        ));
    }

    #[test]
    fn blank_id_or_name_rejected() {
        let blank_id = ControlledVocabularyProvider::builder().register(" ", "Blank", tiny("a"));
        assert!(matches!(
            blank_id,
            Err(VocabularyFieldError::InvalidRegistration { ref message, .. }) if message.contains("id")
        ));

        let blank_name = ControlledVocabularyProvider::builder().register("a", "", tiny("a"));
        assert!(matches!(
            blank_name,
            Err(VocabularyFieldError::InvalidRegistration { ref id, ref message })
                if id == "a" && message.contains("display name")
        ));
    }

    #[test]
    fn custom_registration_keeps_order() {
        let provider = ControlledVocabularyProvider::builder()
            .register("zeta", "Zeta", tiny("zeta"))
            .unwrap()
            .register("alpha", "Alpha", tiny("alpha"))
            .unwrap()
            .build();
        let ids: Vec<_> = provider.list().into_keys().collect();
        assert_eq!(ids, vec!["zeta", "alpha"]);
    }

    #[test]
    fn usable_as_trait_object() {
        let provider: Arc<dyn VocabularyProvider> =
            Arc::new(ControlledVocabularyProvider::builtin().unwrap());
        assert_eq!(provider.list().len(), 6);
        assert!(provider.vocabulary("learning_setting").is_some());
    }

    #[test]
    fn from_config_adds_extra_vocabularies() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("credit.yaml");
        fs::write(&path, "id: credit\nlabels:\n  en:\n    ects: ECTS\n").unwrap();

        let config = ElmFieldConfig {
            vocabularies: vec![VocabularySource::new("credit", "Credit system", &path)],
            ..ElmFieldConfig::default()
        };
        let provider = ControlledVocabularyProvider::from_config(&config).unwrap();

        let list = provider.list();
        assert_eq!(list.len(), 7);
        assert_eq!(list.get_index(6).unwrap(), (&"credit".to_string(), &"Credit system".to_string()));
        assert_eq!(
            provider.vocabulary("credit").unwrap().label("en", "ects"),
            Some("ECTS")
        );
    }

    #[test]
    fn from_config_rejects_shadowing_builtin() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("assessment.yaml");
        fs::write(&path, "id: assessment\nlabels:\n  en:\n    x: X\n").unwrap();

        let config = ElmFieldConfig {
            vocabularies: vec![VocabularySource::new("assessment", "Mine", &path)],
            ..ElmFieldConfig::default()
        };
        let err = ControlledVocabularyProvider::from_config(&config).err().unwrap();
        assert!(matches!(err, VocabularyFieldError::DuplicateVocabulary { .. }));
    }

    #[test]
    fn from_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = ElmFieldConfig {
            vocabularies: vec![VocabularySource::new(
                "credit",
                "Credit",
                temp.path().join("absent.yaml"),
            )],
            ..ElmFieldConfig::default()
        };
        let err = ControlledVocabularyProvider::from_config(&config).err().unwrap();
        assert!(matches!(err, VocabularyFieldError::Vocabulary(_)));
    }
}
