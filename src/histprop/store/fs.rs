use super::PropertySource;
use crate::error::{HistPropError, Result};
use crate::model::Property;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "json_data/all_properties.json";

/// Reads the dataset from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PropertySource for FileSource {
    fn fetch(&self) -> Result<Vec<Property>> {
        if !self.path.exists() {
            return Err(HistPropError::Load(format!(
                "Dataset not found: {}",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path).map_err(HistPropError::Io)?;
        let properties: Vec<Property> =
            serde_json::from_str(&content).map_err(HistPropError::Serialization)?;
        Ok(properties)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
