//! Game tunables, loadable from TOML.
//!
//! ```toml
//! score_per_match = 10
//! combo_duration_ms = 5000
//! cascaded_color_multiplier = 0.6
//! seed = 7
//! ```
//!
//! Missing keys fall back to the defaults in `shelf_match_types`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::types::{
    DEFAULT_CASCADED_COLOR_MULTIPLIER, DEFAULT_COMBO_DURATION_MS, DEFAULT_SCORE_PER_MATCH,
    DEFAULT_SEED,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub score_per_match: u32,
    pub combo_duration_ms: u64,
    pub cascaded_color_multiplier: f32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_per_match: DEFAULT_SCORE_PER_MATCH,
            combo_duration_ms: DEFAULT_COMBO_DURATION_MS,
            cascaded_color_multiplier: DEFAULT_CASCADED_COLOR_MULTIPLIER,
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn validate(&self) -> Result<()> {
        let m = self.cascaded_color_multiplier;
        if !m.is_finite() || !(0.0..=1.0).contains(&m) {
            return Err(BoardError::Config {
                message: format!("cascaded_color_multiplier must be within 0..=1, got {}", m),
            });
        }
        Ok(())
    }
}
