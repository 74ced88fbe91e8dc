use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

pub const DEFAULT_PALETTE: [&str; 6] = [
    "#e11d48", "#ea580c", "#d97706", "#65a30d", "#0891b2", "#4f46e5",
];
const DEFAULT_DISMISS_AFTER_MS: u64 = 2_000;

/// Presentation preferences consumed by the tracker core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    #[serde(default = "TrackerConfig::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "TrackerConfig::default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "TrackerConfig::default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
    /// Start with the demo records instead of an empty store.
    #[serde(default)]
    pub seed_sample_data: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            palette: Self::default_palette(),
            dismiss_after_ms: Self::default_dismiss_after_ms(),
            seed_sample_data: false,
        }
    }
}

impl TrackerConfig {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_palette() -> Vec<String> {
        DEFAULT_PALETTE.iter().map(|color| color.to_string()).collect()
    }

    pub fn default_dismiss_after_ms() -> u64 {
        DEFAULT_DISMISS_AFTER_MS
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }

    pub fn from_json_str(data: &str) -> Result<Self, TrackerError> {
        let config: TrackerConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, TrackerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.palette.is_empty() {
            return Err(TrackerError::Config("palette must not be empty".into()));
        }
        if let Some(blank) = self.palette.iter().position(|color| color.trim().is_empty()) {
            return Err(TrackerError::Config(format!(
                "palette entry {blank} is blank"
            )));
        }
        Ok(())
    }
}

/// Reads a [`TrackerConfig`] from a JSON file supplied by the host app.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the configuration, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<TrackerConfig, TrackerError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "config file missing, using defaults");
            return Ok(TrackerConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        TrackerConfig::from_json_str(&data)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
