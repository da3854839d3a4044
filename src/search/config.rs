//! Search agent configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::eval::SCORE_EVALUATION;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 2;

/// Configuration shared by every tree-search agent.
///
/// Also parses from the comma-separated `key=value` agent-argument form:
///
/// ```
/// use multiagent_search::search::SearchConfig;
///
/// let config: SearchConfig = "evalFn=better,depth=3".parse().unwrap();
/// assert_eq!(config.evaluation, "better");
/// assert_eq!(config.depth, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Registry name of the evaluation function.
    pub evaluation: String,

    /// Maximum depth in plies (one ply = every agent moves once).
    /// Must be at least 1.
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            evaluation: SCORE_EVALUATION.to_string(),
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchConfig {
    /// Create a new config with a custom search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a custom evaluation function name.
    #[must_use]
    pub fn with_evaluation(mut self, name: impl Into<String>) -> Self {
        self.evaluation = name.into();
        self
    }

    /// Check values that do not depend on a registry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        Ok(())
    }
}

impl FromStr for SearchConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = SearchConfig::default();

        for pair in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| ConfigError::InvalidArgument(pair.to_string()))?;

            match key.trim() {
                "evalFn" | "evaluation" | "eval" => {
                    config.evaluation = value.trim().to_string();
                }
                "depth" => {
                    config.depth = value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidArgument(pair.to_string()))?;
                }
                _ => return Err(ConfigError::InvalidArgument(pair.to_string())),
            }
        }

        config.validate()?;
        Ok(config)
    }
}
