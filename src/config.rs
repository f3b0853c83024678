use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cores must be nonzero")]
    ZeroCores,
    #[error("cores must be a power of two, got {0}")]
    CoresNotPowerOfTwo(usize),
}

/// Run-time knobs of one kernel invocation. The partition formula requires a
/// power-of-two core count, so `validate` must pass before any dispatch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunConfig {
    pub channels_in: usize,
    pub channels_out: usize,
    pub cores: usize,
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { channels_in: 1024, channels_out: 512, cores: 8, seed: 0x5eed }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cores == 0 {
            return Err(ConfigError::ZeroCores);
        }
        if !self.cores.is_power_of_two() {
            return Err(ConfigError::CoresNotPowerOfTwo(self.cores));
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("read config: {}", path.as_ref().display()))?;
        let cfg: Self = serde_json::from_str(&text).context("parse config json")?;
        cfg.validate()?;
        Ok(cfg)
    }
}
