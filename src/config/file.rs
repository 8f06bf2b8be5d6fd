use crate::utils::error::{ClinicError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional on-disk configuration, merged under the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub verbose: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| ClinicError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        toml::from_str(&text).map_err(|e| ClinicError::ConfigError {
            message: format!("invalid config {}: {}", path.display(), e),
        })
    }
}
