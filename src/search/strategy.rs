//! Strategy selection by name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::eval::EvaluationRegistry;
use crate::rules::GameState;

use super::agent::{SearchAgent, SearchCore};
use super::alpha_beta::AlphaBetaAgent;
use super::config::SearchConfig;
use super::expectimax::ExpectimaxAgent;
use super::minimax::MinimaxAgent;

/// The interchangeable tree-search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Minimax,
    AlphaBeta,
    Expectimax,
}

impl Strategy {
    /// All strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [Strategy::Minimax, Strategy::AlphaBeta, Strategy::Expectimax];

    /// Build an agent using the built-in evaluation functions.
    pub fn build<S: GameState + 'static>(
        self,
        config: &SearchConfig,
    ) -> Result<Box<dyn SearchAgent<S>>, ConfigError> {
        self.build_with_registry(config, &EvaluationRegistry::with_defaults())
    }

    /// Build an agent resolving its evaluation in `registry`.
    pub fn build_with_registry<S: GameState + 'static>(
        self,
        config: &SearchConfig,
        registry: &EvaluationRegistry<S>,
    ) -> Result<Box<dyn SearchAgent<S>>, ConfigError> {
        let core = SearchCore::with_registry(config, registry)?;
        Ok(match self {
            Strategy::Minimax => Box::new(MinimaxAgent::from_core(core)),
            Strategy::AlphaBeta => Box::new(AlphaBetaAgent::from_core(core)),
            Strategy::Expectimax => Box::new(ExpectimaxAgent::from_core(core)),
        })
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(Strategy::AlphaBeta),
            "expectimax" => Ok(Strategy::Expectimax),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alpha-beta",
            Strategy::Expectimax => "expectimax",
        };
        f.write_str(name)
    }
}
