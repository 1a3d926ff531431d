//! Effect timing and appearance configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CLONE_LIFETIME_MS: u64 = 1000;
pub const DEFAULT_PARTICLE_LIFETIME_MS: u64 = 900;
pub const DEFAULT_BURST_SIZE: usize = 8;
pub const DEFAULT_MIN_VISIBLE_MS: u64 = 300;

/// Warm pastry tones used for particle dots, assigned round-robin.
pub const DEFAULT_PALETTE: [&str; 4] = ["#f6d3c6", "#d6b89a", "#f0e1d8", "#c9987d"];

/// Error returned when a configuration cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid effect configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("particle palette must contain at least one color")]
    EmptyPalette,
    #[error("burst size must be at least 1")]
    ZeroBurstSize,
}

/// Lifetimes and burst shape for [`crate::EffectManager`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// How long a clone stays on screen after spawning.
    pub clone_lifetime_ms: u64,
    /// How long a particle burst stays on screen after spawning.
    pub particle_lifetime_ms: u64,
    /// Particles per burst. Undo removes the same number of recent particles.
    pub burst_size: usize,
    pub palette: Vec<String>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            clone_lifetime_ms: DEFAULT_CLONE_LIFETIME_MS,
            particle_lifetime_ms: DEFAULT_PARTICLE_LIFETIME_MS,
            burst_size: DEFAULT_BURST_SIZE,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_owned()).collect(),
        }
    }
}

impl EffectConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the validation
    /// errors of [`EffectConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPalette`] or [`ConfigError::ZeroBurstSize`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.burst_size == 0 {
            return Err(ConfigError::ZeroBurstSize);
        }
        Ok(())
    }

    /// Color of the `index`-th particle in a burst.
    #[must_use]
    pub fn color_for(&self, index: usize) -> &str {
        match self.palette.len() {
            0 => DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()],
            len => &self.palette[index % len],
        }
    }
}

/// Timing for [`crate::LoadingTracker`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Minimum time the indicator stays visible after the action settles.
    pub min_visible_ms: u64,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { min_visible_ms: DEFAULT_MIN_VISIBLE_MS }
    }
}
