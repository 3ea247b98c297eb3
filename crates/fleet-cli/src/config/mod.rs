//! Per-checkout settings (`fleetc.toml` in the provider root).

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings pinned to a provider checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Pin every compile run to one environment. An explicit conflicting
    /// ENVIRONMENT argument is rejected while a pin is set.
    pub environment: Option<String>,
}

impl Settings {
    /// Load settings, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("invalid settings in {}", path.display()))
    }
}
