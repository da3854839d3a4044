//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the best value the maximizer can already guarantee on the
//! path to the root, `beta` the best the minimizers can. A node whose
//! running value falls outside that window stops expanding siblings.
//! Cutoffs use strict comparisons, so the root value and action always
//! match [`MinimaxAgent`](super::minimax::MinimaxAgent).

use std::time::Instant;

use tracing::trace;

use crate::core::{ConfigError, SearchError, Turn};
use crate::eval::EvaluationRegistry;
use crate::rules::GameState;

use super::agent::{root_action, Agent, SearchAgent, SearchCore, SearchResult};
use super::config::SearchConfig;
use super::stats::SearchStats;

/// Minimax search that skips provably irrelevant subtrees.
///
/// Values returned from pruned nodes are bounds, not exact values, so this
/// agent does not provide [`SearchAgent::root_values`].
pub struct AlphaBetaAgent<S> {
    core: SearchCore<S>,
}

impl<S: GameState + 'static> AlphaBetaAgent<S> {
    /// Create an agent from configuration, using the built-in evaluations.
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_core(SearchCore::from_config(config)?))
    }
}

impl<S: GameState> AlphaBetaAgent<S> {
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

    fn value(
        &mut self,
        state: &S,
        turn: Turn,
        mut alpha: f64,
        mut beta: f64,
    ) -> SearchResult<S::Action> {
        self.core.visit(turn);

        if self.core.is_cutoff(state, turn) {
            return SearchResult::leaf(self.core.evaluate(state));
        }

        let actions = state.legal_actions(turn.agent);
        if actions.is_empty() {
            return SearchResult::leaf(self.core.evaluate(state));
        }
        self.core.expand();

        let next = turn.next(state.agent_count());

        if turn.agent.is_protagonist() {
            let mut best = SearchResult::leaf(f64::NEG_INFINITY);
            for action in actions {
                let child = self.value(&state.successor(turn.agent, &action), next, alpha, beta);
                if best.action.is_none() || child.value > best.value {
                    best = SearchResult::new(child.value, action);
                }
                if best.value > beta {
                    self.core.stats.cutoffs += 1;
                    trace!(
                        ply = turn.ply,
                        agent = turn.agent.0,
                        value = best.value,
                        beta,
                        "Beta cutoff"
                    );
                    return best;
                }
                alpha = alpha.max(best.value);
            }
            best
        } else {
            let mut best = SearchResult::leaf(f64::INFINITY);
            for action in actions {
                let child = self.value(&state.successor(turn.agent, &action), next, alpha, beta);
                if best.action.is_none() || child.value < best.value {
                    best = SearchResult::new(child.value, action);
                }
                if best.value < alpha {
                    self.core.stats.cutoffs += 1;
                    trace!(
                        ply = turn.ply,
                        agent = turn.agent.0,
                        value = best.value,
                        alpha,
                        "Alpha cutoff"
                    );
                    return best;
                }
                beta = beta.min(best.value);
            }
            best
        }
    }
}

impl<S: GameState> Agent<S> for AlphaBetaAgent<S> {
    fn choose_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        let result = self.search(state)?;
        root_action(state, result)
    }
}

impl<S: GameState> SearchAgent<S> for AlphaBetaAgent<S> {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(&mut self, state: &S) -> Result<SearchResult<S::Action>, SearchError> {
        let start = Instant::now();
        if let Some(terminal) = self.core.begin(state)? {
            return Ok(terminal);
        }

        let result = self.value(state, Turn::root(), f64::NEG_INFINITY, f64::INFINITY);
        self.core.finish(self.name(), start, result.value);
        Ok(result)
    }

    fn stats(&self) -> &SearchStats {
        self.core.stats()
    }

    fn depth(&self) -> u32 {
        self.core.depth()
    }
}
