//! Configuration for the vocabulary field, loaded with figment.
//!
//! Sources are merged in precedence order (later sources win):
//! 1. Built-in defaults
//! 2. An optional configuration file (TOML, YAML or JSON, chosen by extension)
//! 3. Environment variables prefixed with `ELM_VOCABULARY_`
//!
//! ```yaml
//! language: en
//! vocabularies:
//!   - id: credit_system
//!     name: Credit system
//!     path: vocabularies/credit_system.yaml
//! ```
//!
//! Vocabulary paths are resolved relative to the file that declares them.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use figment::value::magic::RelativePathBuf;
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VocabularyFieldError};

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ELM_VOCABULARY_";

/// Language labels are resolved in unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "en";

/// An additional vocabulary registered next to the built-ins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularySource {
    /// Registry id the vocabulary is published under.
    pub id: String,
    /// Display name offered in the vocabulary chooser.
    pub name: String,
    /// YAML vocabulary document.
    pub path: RelativePathBuf,
}

impl VocabularySource {
    pub fn new(id: impl Into<String>, name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: RelativePathBuf::from(path.as_ref()),
        }
    }

    /// The document path, resolved against the declaring config file.
    pub fn resolved_path(&self) -> PathBuf {
        self.path.relative()
    }
}

/// Module configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElmFieldConfig {
    /// Label language used by the field type, widget and formatter.
    #[serde(default = "default_language")]
    pub language: String,
    /// Extra vocabularies, registered in order after the built-ins.
    #[serde(default)]
    pub vocabularies: Vec<VocabularySource>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for ElmFieldConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            vocabularies: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

impl ElmFieldConfig {
    /// Load from defaults and environment only.
    pub fn load() -> Result<Self> {
        Self::extract(Self::figment(None)?)
    }

    /// Load from defaults, the given file and environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::extract(Self::figment(Some(path))?)
    }

    /// Build the figment with all sources in precedence order.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(ElmFieldConfig::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(VocabularyFieldError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            let format = ConfigFormat::from_path(path).ok_or_else(|| {
                VocabularyFieldError::UnsupportedConfigFormat {
                    path: path.to_path_buf(),
                }
            })?;
            debug!(path = %path.display(), ?format, "merging configuration file");
            figment = match format {
                ConfigFormat::Toml => figment.merge(Toml::file(path)),
                ConfigFormat::Yaml => figment.merge(Yaml::file(path)),
                ConfigFormat::Json => figment.merge(Json::file(path)),
            };
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: ElmFieldConfig = figment.extract()?;
        config.check()?;
        debug!(
            language = %config.language,
            vocabularies = config.vocabularies.len(),
            "loaded vocabulary field configuration"
        );
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(VocabularyFieldError::InvalidConfig {
                key: "language".into(),
                message: "cannot be empty".into(),
            });
        }
        for source in &self.vocabularies {
            if source.id.trim().is_empty() {
                return Err(VocabularyFieldError::InvalidConfig {
                    key: "vocabularies.id".into(),
                    message: format!("vocabulary '{}' has an empty id", source.name),
                });
            }
            if source.name.trim().is_empty() {
                return Err(VocabularyFieldError::InvalidConfig {
                    key: "vocabularies.name".into(),
                    message: format!("vocabulary '{}' has an empty name", source.id),
                });
            }
        }
        Ok(())
    }
}
