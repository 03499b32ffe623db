//! Runtime configuration for the `grid_splitter` binary.

use crate::splitter::SplitParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub split: SplitConfig,
    /// Optional path for the JSON run report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_paths(input: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input,
            output_dir,
            split: SplitConfig::default(),
            report_json: None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitConfig {
    pub near_white_min: Option<u8>,
    pub padding_threshold: Option<usize>,
    pub min_width: Option<usize>,
    pub min_height: Option<usize>,
}

impl SplitConfig {
    pub fn resolve(&self) -> SplitParams {
        let mut params = SplitParams::default();
        if let Some(v) = self.near_white_min {
            params.near_white_min = v;
        }
        if let Some(v) = self.padding_threshold {
            params.padding_threshold = v;
        }
        if let Some(v) = self.min_width {
            params.min_width = v;
        }
        if let Some(v) = self.min_height {
            params.min_height = v;
        }
        params
    }
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
