//! User-facing message catalogue.
//!
//! The codec never produces text for humans; the controller looks every
//! notification and label up here. A catalogue can be loaded from TOML,
//! with any missing key falling back to the English default:
//!
//! ```toml
//! invalid_base64 = "Not Base64"
//! char_count = "{count} chars"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder substituted by [`Messages::char_count_label`].
pub const COUNT_PLACEHOLDER: &str = "{count}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid messages file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown language {0:?}, expected \"en\" or \"uk\"")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown when decoding fails.
    pub invalid_base64: String,
    /// Shown after the output was copied.
    pub copied: String,
    /// Counter label; `{count}` is replaced with the input length.
    pub char_count: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_base64: "Invalid Base64 format".to_string(),
            copied: "Result copied to clipboard!".to_string(),
            char_count: "{count} characters".to_string(),
        }
    }
}

impl Messages {
    pub fn ukrainian() -> Self {
        Self {
            invalid_base64: "Невірний формат Base64".to_string(),
            copied: "Результат скопійовано в буфер обміну!".to_string(),
            char_count: "{count} символів".to_string(),
        }
    }

    /// Built-in catalogue for a language tag (`en` or `uk`).
    pub fn for_language(lang: &str) -> Result<Self, ConfigError> {
        match lang {
            "en" => Ok(Self::default()),
            "uk" => Ok(Self::ukrainian()),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn char_count_label(&self, count: usize) -> String {
        self.char_count.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let messages = Messages::from_toml_str("copied = \"Copied\"\n").unwrap();
        assert_eq!(messages.copied, "Copied");
        assert_eq!(messages.invalid_base64, Messages::default().invalid_base64);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Messages::from_toml_str("").unwrap(), Messages::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            Messages::from_toml_str("copied = "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn counter_label() {
        assert_eq!(Messages::default().char_count_label(3), "3 characters");
        assert_eq!(Messages::ukrainian().char_count_label(0), "0 символів");
    }

    #[test]
    fn language_presets() {
        assert_eq!(Messages::for_language("uk").unwrap(), Messages::ukrainian());
        assert!(matches!(
            Messages::for_language("fr"),
            Err(ConfigError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.toml");
        std::fs::write(&path, "invalid_base64 = \"bad\"\n").unwrap();
        assert_eq!(Messages::load(&path).unwrap().invalid_base64, "bad");
        assert!(matches!(
            Messages::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
