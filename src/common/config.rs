use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::common::error::{GenError, Result};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default = "default_target_mb")]
    pub target_mb: f64,
}

fn default_target_mb() -> f64 { 10.0 }

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: None,
            target_mb: default_target_mb(),
        }
    }
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GenError::Config(format!(
                "Config file not found: {}", path.display()
            )));
        }

        tracing::debug!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| GenError::Config(format!("Config parse error: {}", e)))?;

        Ok(config)
    }

    /// Apply command-line values on top of whatever the file provided.
    pub fn with_overrides(mut self, output: Option<PathBuf>, target_mb: Option<f64>) -> Self {
        if let Some(output) = output {
            self.generator.output = Some(output);
        }
        if let Some(target_mb) = target_mb {
            self.generator.target_mb = target_mb;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        let target_mb = self.generator.target_mb;
        if !target_mb.is_finite() || target_mb < 0.0 {
            return Err(GenError::InvalidTarget(format!(
                "target size must be a non-negative number of megabytes, got {}", target_mb
            )));
        }

        match &self.generator.output {
            None => Err(GenError::Config(
                "No output path given; pass --output or set generator.output".into()
            )),
            Some(path) if path.as_os_str().is_empty() => Err(GenError::Config(
                "Output path must not be empty".into()
            )),
            Some(_) => Ok(()),
        }
    }

    /// Output path; only meaningful after `validate` succeeded.
    pub fn output(&self) -> Option<&Path> {
        self.generator.output.as_deref()
    }

    /// Target size in bytes, truncated toward zero.
    pub fn target_bytes(&self) -> u64 {
        (self.generator.target_mb * BYTES_PER_MB) as u64
    }
}
