//! Persisted settings for the field storage, the field instance and the
//! widget/formatter displays. The host stores these as configuration; every
//! key is optional on the way in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field storage settings. The vocabulary is fixed once the field has data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    #[serde(default)]
    pub vocabulary: String,
}

impl StorageSettings {
    pub fn new(vocabulary: impl Into<String>) -> Self {
        Self {
            vocabulary: vocabulary.into(),
        }
    }

    /// The selected vocabulary id, if one has been chosen.
    pub fn vocabulary_id(&self) -> Option<&str> {
        Some(self.vocabulary.as_str()).filter(|id| !id.is_empty())
    }
}

/// Field instance settings.
///
/// `allow_selection` restricts the codes offered for this field. When no
/// code is checked every code of the vocabulary is allowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldSettings {
    #[serde(default)]
    pub allow_selection: IndexMap<String, bool>,
}

impl FieldSettings {
    /// Restrict selection to the given codes.
    pub fn allowing<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allow_selection: codes.into_iter().map(|code| (code.into(), true)).collect(),
        }
    }

    /// True when at least one code is checked.
    pub fn is_restricted(&self) -> bool {
        self.allow_selection.values().any(|&checked| checked)
    }

    /// Whether `code` is explicitly checked.
    pub fn is_checked(&self, code: &str) -> bool {
        self.allow_selection.get(code).copied().unwrap_or(false)
    }
}

/// Widget and formatter settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    /// Show `"<code> - <label>"` instead of the bare label.
    #[serde(default)]
    pub prefix: bool,
}

impl DisplaySettings {
    pub fn prefixed() -> Self {
        Self { prefix: true }
    }

    /// Visible text for a code.
    pub fn display_text(&self, code: &str, label: &str) -> String {
        if self.prefix {
            format!("{code} - {label}")
        } else {
            label.to_string()
        }
    }

    /// One-line summary shown next to the settings in the admin UI.
    pub fn summary(&self) -> String {
        format!(
            "{}: {}",
            PREFIX_SETTING_TITLE,
            if self.prefix { "Yes" } else { "No" }
        )
    }
}

/// Title of the `prefix` checkbox.
pub const PREFIX_SETTING_TITLE: &str = "Prefix the label with the respective code";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let storage: StorageSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(storage, StorageSettings::default());
        assert_eq!(storage.vocabulary_id(), None);

        let field: FieldSettings = serde_json::from_str("{}").unwrap();
        assert!(field.allow_selection.is_empty());

        let display: DisplaySettings = serde_json::from_str("{}").unwrap();
        assert!(!display.prefix);
    }

    #[test]
    fn all_false_is_unrestricted() {
        let settings: FieldSettings =
            serde_json::from_str(r#"{"allow_selection": {"a": false, "b": false}}"#).unwrap();
        assert!(!settings.is_restricted());
        assert!(!settings.is_checked("a"));
    }

    #[test]
    fn one_checked_is_restricted() {
        let settings: FieldSettings =
            serde_json::from_str(r#"{"allow_selection": {"a": true, "b": false}}"#).unwrap();
        assert!(settings.is_restricted());
        assert!(settings.is_checked("a"));
        assert!(!settings.is_checked("b"));
        assert!(!settings.is_checked("c"));
    }

    #[test]
    fn allowing_checks_each_code() {
        let settings = FieldSettings::allowing(["x", "y"]);
        assert!(settings.is_checked("x"));
        assert!(settings.is_checked("y"));
        assert_eq!(settings.allow_selection.len(), 2);
    }

    #[test]
    fn display_text_and_summary() {
        let plain = DisplaySettings::default();
        assert_eq!(plain.display_text("lecture", "Lecture"), "Lecture");
        assert_eq!(
            plain.summary(),
            "Prefix the label with the respective code: No"
        );

        let prefixed = DisplaySettings::prefixed();
        assert_eq!(prefixed.display_text("lecture", "Lecture"), "lecture - Lecture");
        assert_eq!(
            prefixed.summary(),
            "Prefix the label with the respective code: Yes"
        );
    }
}
