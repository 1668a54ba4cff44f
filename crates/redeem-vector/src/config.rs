use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// Default upper bound on the number of elements a vector may hold.
///
/// Fixed at 2^40 on every platform, independent of `usize::MAX`.
pub const DEFAULT_MAX_SIZE: u64 = 1 << 40;

/// Construction-time settings for a `Vector`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct VectorConfig {
    /// Largest logical size the vector may reach.
    pub max_size: u64,
}

impl VectorConfig {
    pub fn new(max_size: u64) -> std::result::Result<Self, VectorError> {
        let config = Self { max_size };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), VectorError> {
        if self.max_size == 0 {
            return Err(VectorError::InvalidOperand(
                "max size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// Load a `VectorConfig` from a JSON file. Missing fields take their defaults.
pub fn load_vector_config<P: AsRef<Path>>(path: P) -> Result<VectorConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: VectorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    log::debug!(
        "Loaded vector config from {}: max_size={}",
        path.as_ref().display(),
        config.max_size
    );
    Ok(config)
}
