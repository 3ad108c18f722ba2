//! YAML configuration file
//!
//! ```yaml
//! monte_carlo:
//!   iterations: 5000
//!   seed: 42
//! sensitivity:
//!   min_pct: -30
//!   max_pct: 30
//!   steps: 13
//! plausibility:
//!   min_pct: -50
//!   max_pct: 50
//! ```
//!
//! Every section and field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use bizsim_core::config::SimulatorConfig;

use crate::data::LoadError;

/// Get the default data directory path (~/.bizsim/)
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".bizsim")
}

/// Parse a configuration document.
pub fn parse_config(yaml: &str) -> Result<SimulatorConfig, LoadError> {
    if yaml.trim().is_empty() {
        return Ok(SimulatorConfig::default());
    }
    serde_saphyr::from_str(yaml)
        .map_err(|e| LoadError::Parse(format!("Failed to parse config: {}", e)))
}

/// Load the configuration file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> Result<SimulatorConfig, LoadError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(SimulatorConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| LoadError::Io(format!("Failed to read config: {}", e)))?;

    let config = parse_config(&content)?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}
