//! Search configuration
//!
//! Configs can be built in code or loaded from JSON, e.g.
//! `{"algorithm": "alpha_beta", "depth": 6, "maximising": false}`.
//! Missing fields fall back to [`SearchConfig::default`].

use crate::error::SearchError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Deepest search a config may request
pub const MAX_DEPTH: u32 = 64;

/// Which adversarial search to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Plain minimax, every branch evaluated
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    AlphaBeta,
}

/// Parameters for a single search
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Plies to look ahead
    pub depth: u32,
    /// Whether the player to move maximises the score
    pub maximising: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth: 4,
            maximising: true,
        }
    }
}

impl SearchConfig {
    /// Create config for plain minimax at given depth
    pub fn minimax(depth: u32) -> Self {
        Self {
            algorithm: Algorithm::Minimax,
            depth,
            ..Default::default()
        }
    }

    /// Create config for alpha-beta at given depth
    pub fn alpha_beta(depth: u32) -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth,
            ..Default::default()
        }
    }

    /// Set which side the root player is on
    pub fn with_maximising(mut self, maximising: bool) -> Self {
        self.maximising = maximising;
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.depth > MAX_DEPTH {
            return Err(SearchError::InvalidConfig(format!(
                "depth {} exceeds the maximum of {}",
                self.depth, MAX_DEPTH
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: SearchConfig =
            serde_json::from_str(json).context("malformed search config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("in {}", path.display()))
    }
}
