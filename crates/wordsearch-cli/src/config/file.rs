use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileGridConfig {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub min_side: Option<usize>,
    pub max_side: Option<usize>,
    pub growth_step: Option<usize>,
    pub packing_factor: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileSearchConfig {
    pub time_ms: Option<u64>,
    pub seed: Option<u64>,
    pub backtrack_depth: Option<usize>,
    pub backtrack_attempts: Option<usize>,
    pub prefer_overlap: Option<bool>,
    pub strict: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileFillConfig {
    pub alphabet: Option<String>,
}

/// The contents of a `--config` TOML file. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub mandatory_marker: Option<char>,
    pub grid: Option<FileGridConfig>,
    pub search: Option<FileSearchConfig>,
    pub fill: Option<FileFillConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
