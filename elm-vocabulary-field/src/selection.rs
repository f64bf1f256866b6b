//! Vocabulary resolution and the effective allowed-code set shared by the
//! field type, widget and formatter.

use std::sync::Arc;

use elm_vocabulary::{ControlledVocabulary, LabeledList};
use indexmap::IndexMap;

use crate::error::{Result, VocabularyFieldError};
use crate::field::FieldDefinition;
use crate::provider::VocabularyProvider;
use crate::settings::{DisplaySettings, FieldSettings};

/// Resolve the vocabulary configured on a field.
///
/// Fails with `VocabularyNotConfigured` when the storage has no vocabulary
/// and `UnknownVocabulary` when the id is not registered.
pub fn resolve_vocabulary(
    provider: &dyn VocabularyProvider,
    definition: &FieldDefinition,
) -> Result<Arc<ControlledVocabulary>> {
    let id = definition
        .vocabulary_id()
        .ok_or_else(|| VocabularyFieldError::VocabularyNotConfigured {
            field: definition.name.clone(),
        })?;
    provider
        .vocabulary(id)
        .ok_or_else(|| VocabularyFieldError::UnknownVocabulary { id: id.to_string() })
}

/// The labeled list of `language`, or `MissingLanguage`.
pub fn labeled_list<'a>(
    vocabulary: &'a ControlledVocabulary,
    language: &str,
) -> Result<&'a LabeledList> {
    vocabulary
        .labeled_list(language)
        .ok_or_else(|| VocabularyFieldError::MissingLanguage {
            vocabulary: vocabulary.id().to_string(),
            language: language.to_string(),
        })
}

/// Codes a field accepts, in vocabulary order.
///
/// Every code of the list when nothing is checked in `allow_selection`,
/// otherwise only the checked codes. Checked codes missing from the list
/// are ignored.
pub fn allowed_codes<'a>(list: &'a LabeledList, settings: &FieldSettings) -> Vec<&'a str> {
    let restricted = settings.is_restricted();
    list.keys()
        .map(String::as_str)
        .filter(|code| !restricted || settings.is_checked(code))
        .collect()
}

/// Select options for the allowed codes.
///
/// Codes whose label is not a plain string are left out.
pub fn select_options(
    list: &LabeledList,
    settings: &FieldSettings,
    display: DisplaySettings,
) -> IndexMap<String, String> {
    allowed_codes(list, settings)
        .into_iter()
        .filter_map(|code| {
            let label = list.get(code)?.as_text()?;
            Some((code.to_string(), display.display_text(code, label)))
        })
        .collect()
}

/// Every code with a plain-string label, labeled with its text.
pub fn text_labels(list: &LabeledList) -> IndexMap<String, String> {
    list.iter()
        .filter_map(|(code, entry)| Some((code.clone(), entry.as_text()?.to_string())))
        .collect()
}
