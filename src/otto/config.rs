use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "address_book.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";
const DEFAULT_BIRTHDAY_WINDOW: u32 = 14;

/// Configuration for the assistant, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssistantConfig {
    /// File name of the address book, relative to the data directory
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// File name of the notebook, relative to the data directory
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Days ahead that `search_by_bd` looks by default
    #[serde(default = "default_birthday_window")]
    pub birthday_window_days: u32,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_birthday_window() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW,
        }
    }
}

impl AssistantConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AssistantError::Io)?;
        let config: AssistantConfig =
            serde_json::from_str(&content).map_err(AssistantError::Serialization)?;
        Ok(config)
    }

    pub fn contacts_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.contacts_file)
    }

    pub fn notes_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.notes_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AssistantConfig::default();
        assert_eq!(config.contacts_file, "address_book.json");
        assert_eq!(config.notes_file, "notes.json");
        assert_eq!(config.birthday_window_days, 14);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(config, AssistantConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"birthday_window_days": 30}"#).unwrap();

        let config = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(config.birthday_window_days, 30);
        assert_eq!(config.contacts_file, "address_book.json");
    }

    #[test]
    fn test_paths_follow_configured_names() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"notes_file": "my-notes.json"}"#,
        )
        .unwrap();

        let config = AssistantConfig::load(dir.path()).unwrap();
        assert_eq!(config.notes_path(dir.path()), dir.path().join("my-notes.json"));
        assert_eq!(
            config.contacts_path(dir.path()),
            dir.path().join("address_book.json")
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(matches!(
            AssistantConfig::load(dir.path()),
            Err(AssistantError::Serialization(_))
        ));
    }
}
