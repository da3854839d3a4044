//! Minimax search.
//!
//! Agent 0 maximizes; every other agent minimizes, one after another within
//! a ply. Ties keep the first action seen.

use std::time::Instant;

use crate::core::{ConfigError, SearchError, Turn};
use crate::eval::EvaluationRegistry;
use crate::rules::GameState;

use super::agent::{root_action, Agent, SearchAgent, SearchCore, SearchResult};
use super::config::SearchConfig;
use super::stats::SearchStats;

/// Worst-case adversary search.
pub struct MinimaxAgent<S> {
    core: SearchCore<S>,
}

impl<S: GameState + 'static> MinimaxAgent<S> {
    /// Create an agent from configuration, using the built-in evaluations.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_core(SearchCore::from_config(config)?))
    }
}

impl<S: GameState> MinimaxAgent<S> {
    /// Create an agent resolving its evaluation in `registry`.
    pub fn with_registry(
        config: &SearchConfig,
        registry: &EvaluationRegistry<S>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_core(SearchCore::with_registry(config, registry)?))
    }

    /// Wrap an already-configured core.
    #[must_use]
    pub fn from_core(core: SearchCore<S>) -> Self {
        Self { core }
    }

    fn value(core: &mut SearchCore<S>, state: &S, turn: Turn) -> SearchResult<S::Action> {
        core.visit(turn);

        if core.is_cutoff(state, turn) {
            return SearchResult::leaf(core.evaluate(state));
        }

        let actions = state.legal_actions(turn.agent);
        if actions.is_empty() {
            return SearchResult::leaf(core.evaluate(state));
        }
        core.expand();

        let next = turn.next(state.agent_count());
        let maximizing = turn.agent.is_protagonist();
        let mut best = SearchResult::leaf(if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });

        for action in actions {
            let child = Self::value(core, &state.successor(turn.agent, &action), next);
            let improves = if maximizing {
                child.value > best.value
            } else {
                child.value < best.value
            };
            if best.action.is_none() || improves {
                best = SearchResult::new(child.value, action);
            }
        }

        best
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent<S> {
    fn choose_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        let result = self.search(state)?;
        root_action(state, result)
    }
}

impl<S: GameState> SearchAgent<S> for MinimaxAgent<S> {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&mut self, state: &S) -> Result<SearchResult<S::Action>, SearchError> {
        let start = Instant::now();
        if let Some(terminal) = self.core.begin(state)? {
            return Ok(terminal);
        }

        let result = Self::value(&mut self.core, state, Turn::root());
        self.core.finish(self.name(), start, result.value);
        Ok(result)
    }

    fn root_values(&mut self, state: &S) -> Result<Vec<(S::Action, f64)>, SearchError> {
        let name = self.name();
        self.core
            .root_values(name, state, |core, child, turn| Self::value(core, child, turn).value)
    }

    fn stats(&self) -> &SearchStats {
        self.core.stats()
    }

    fn depth(&self) -> u32 {
        self.core.depth()
    }
}
