//! Field definition and stored field values.

use serde::{Deserialize, Serialize};

use crate::settings::{FieldSettings, StorageSettings};

/// How many values a field holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    Limited(u32),
    Unlimited,
}

impl Cardinality {
    pub fn is_single(self) -> bool {
        self == Cardinality::Limited(1)
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Cardinality::Limited(1)
    }
}

/// A configured field: storage settings plus instance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub cardinality: Cardinality,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub settings: FieldSettings,
}

impl FieldDefinition {
    /// A single-value field using `vocabulary`, without restriction.
    pub fn new(name: impl Into<String>, label: impl Into<String>, vocabulary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            cardinality: Cardinality::default(),
            storage: StorageSettings::new(vocabulary),
            settings: FieldSettings::default(),
        }
    }

    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_settings(mut self, settings: FieldSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The selected vocabulary id, if any.
    pub fn vocabulary_id(&self) -> Option<&str> {
        self.storage.vocabulary_id()
    }
}

/// One stored value of the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldItem {
    #[serde(default)]
    pub value: Option<String>,
}

impl FieldItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    pub fn empty() -> Self {
        Self { value: None }
    }

    /// True when the value is absent or the empty string.
    pub fn is_empty(&self) -> bool {
        matches!(self.value.as_deref(), None | Some(""))
    }

    /// The stored code, when non-empty.
    pub fn code(&self) -> Option<&str> {
        self.value.as_deref().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_items() {
        assert!(FieldItem::empty().is_empty());
        assert!(FieldItem::new("").is_empty());
        assert!(!FieldItem::new("lecture").is_empty());
        assert_eq!(FieldItem::new("").code(), None);
        assert_eq!(FieldItem::new("lecture").code(), Some("lecture"));
    }

    #[test]
    fn cardinality() {
        assert!(Cardinality::default().is_single());
        assert!(!Cardinality::Limited(3).is_single());
        assert!(!Cardinality::Unlimited.is_single());
    }

    #[test]
    fn definition_from_json() {
        let def: FieldDefinition = serde_json::from_str(
            r#"{
                "name": "field_setting",
                "label": "Setting",
                "cardinality": "unlimited",
                "storage": {"vocabulary": "learning_setting"},
                "settings": {"allow_selection": {"formal": true}}
            }"#,
        )
        .unwrap();
        assert_eq!(def.cardinality, Cardinality::Unlimited);
        assert_eq!(def.vocabulary_id(), Some("learning_setting"));
        assert!(def.settings.is_restricted());
    }

    #[test]
    fn definition_defaults() {
        let def: FieldDefinition =
            serde_json::from_str(r#"{"name": "field_x", "label": "X"}"#).unwrap();
        assert!(def.cardinality.is_single());
        assert_eq!(def.vocabulary_id(), None);
    }
}
