//! # Configuration
//!
//! Configuration is managed by [`confique`], layered in priority order:
//!
//! 1. **Environment variables**: `HISTPROP_DATA_FILE`, `HISTPROP_LINE_WIDTH`.
//! 2. **Project config**: `histprop.toml` at the project root.
//! 3. **Global config**: `config.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**.
//!
//! The `--data` CLI flag overrides the resolved `data_file`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `json_data/all_properties.json` | Dataset to load; relative paths resolve against the project root |
//! | `line_width` | `100` | Width used to lay out cards |

use crate::error::Result;
use confique::Config;
use serde::Serialize;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "histprop.toml";
pub const GLOBAL_CONFIG_FILENAME: &str = "config.toml";

#[derive(Config, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistPropConfig {
    /// Dataset to load: a JSON array of property records
    #[config(default = "json_data/all_properties.json", env = "HISTPROP_DATA_FILE")]
    pub data_file: String,

    /// Width used to lay out cards
    #[config(default = 100, env = "HISTPROP_LINE_WIDTH")]
    pub line_width: usize,
}

impl Default for HistPropConfig {
    fn default() -> Self {
        Self {
            data_file: crate::store::fs::DEFAULT_DATA_FILE.to_string(),
            line_width: 100,
        }
    }
}

impl HistPropConfig {
    /// Loads the layered configuration. Missing files are skipped.
    pub fn load(project_file: Option<&Path>, global_file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = project_file {
            builder = builder.file(path);
        }
        if let Some(path) = global_file {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data_file", self.data_file.clone()),
            ("line_width", self.line_width.to_string()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let normalized = key.replace('-', "_");
        self.list_all()
            .into_iter()
            .find(|(k, _)| *k == normalized)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = HistPropConfig::default();
        assert_eq!(config.data_file, "json_data/all_properties.json");
        assert_eq!(config.line_width, 100);
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join(CONFIG_FILENAME);
        fs::write(&project, "data_file = \"survey/medford.json\"\n").unwrap();

        let config = HistPropConfig::load(Some(&project), None).unwrap();
        assert_eq!(config.data_file, "survey/medford.json");
        assert_eq!(config.line_width, 100);
    }

    #[test]
    fn test_project_file_wins_over_global() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join(CONFIG_FILENAME);
        let global = temp.path().join(GLOBAL_CONFIG_FILENAME);
        fs::write(&project, "line_width = 80\n").unwrap();
        fs::write(&global, "line_width = 120\ndata_file = \"global.json\"\n").unwrap();

        let config = HistPropConfig::load(Some(&project), Some(&global)).unwrap();
        assert_eq!(config.line_width, 80);
        assert_eq!(config.data_file, "global.json");
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let config = HistPropConfig::load(
            Some(&temp.path().join("absent.toml")),
            Some(&temp.path().join("also-absent.toml")),
        )
        .unwrap();
        assert_eq!(config.line_width, 100);
    }

    #[test]
    fn test_get_accepts_kebab_keys() {
        let config = HistPropConfig::default();
        assert_eq!(config.get("line-width"), Some("100".to_string()));
        assert_eq!(config.get("colour"), None);
    }
}
