//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// UCT search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// UCB exploration constant (default: 1.0).
    /// At 1.0 the selection score is exactly
    /// `wins/visits + sqrt(ln(parent_visits) / visits)`.
    pub exploration_constant: f64,

    /// Random seed for the expansion and rollout RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            exploration_constant: 1.0,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
