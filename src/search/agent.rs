//! Agent traits and the state shared by every tree-search strategy.

use std::time::Instant;

use tracing::debug;

use crate::core::{AgentId, ConfigError, SearchError, Turn};
use crate::eval::{EvalFn, EvaluationRegistry};
use crate::rules::GameState;

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Value of a search node and the action that achieves it.
///
/// Only the root's action is meaningful to callers. Leaves and chance
/// nodes report no action.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<A> {
    pub value: f64,
    pub action: Option<A>,
}

impl<A> SearchResult<A> {
    /// Result carrying an action.
    #[must_use]
    pub fn new(value: f64, action: A) -> Self {
        Self {
            value,
            action: Some(action),
        }
    }

    /// Result of a leaf or chance node.
    #[must_use]
    pub fn leaf(value: f64) -> Self {
        Self { value, action: None }
    }
}

/// Anything that picks an action for the protagonist.
pub trait Agent<S: GameState> {
    /// Choose an action for agent 0 in `state`.
    ///
    /// Fails with [`SearchError::TerminalState`] on a won or lost state and
    /// with [`SearchError::NoLegalActions`] when agent 0 cannot move.
    fn choose_action(&mut self, state: &S) -> Result<S::Action, SearchError>;
}

/// Depth-limited tree search over the full agent roster.
pub trait SearchAgent<S: GameState>: Agent<S> {
    /// Strategy name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Root value and selecting action.
    ///
    /// A terminal root evaluates to its static value with no action and
    /// expands nothing.
    fn search(&mut self, state: &S) -> Result<SearchResult<S::Action>, SearchError>;

    /// Exact value of each root action, in legal-action order.
    fn root_values(&mut self, _state: &S) -> Result<Vec<(S::Action, f64)>, SearchError> {
        Err(SearchError::Unimplemented {
            strategy: self.name(),
            operation: "root_values",
        })
    }

    /// Statistics of the most recent search.
    fn stats(&self) -> &SearchStats;

    /// Configured depth in plies.
    fn depth(&self) -> u32;
}

/// Turn a root search result into the action `choose_action` returns.
pub(crate) fn root_action<S: GameState>(
    state: &S,
    result: SearchResult<S::Action>,
) -> Result<S::Action, SearchError> {
    match result.action {
        Some(action) => Ok(action),
        None if state.is_terminal() => Err(SearchError::TerminalState),
        None => Err(SearchError::NoLegalActions {
            agent: AgentId::PROTAGONIST,
        }),
    }
}

/// Evaluation function, depth limit and statistics shared by the
/// minimax, alpha-beta and expectimax agents.
pub struct SearchCore<S> {
    evaluation: EvalFn<S>,
    evaluation_name: String,
    depth: u32,
    pub(crate) stats: SearchStats,
}

impl<S: GameState + 'static> SearchCore<S> {
    /// Resolve `config` against the built-in evaluation functions.
    pub fn from_config(config: &SearchConfig) -> Result<Self, ConfigError> {
        Self::with_registry(config, &EvaluationRegistry::with_defaults())
    }
}

impl<S: GameState> SearchCore<S> {
    /// Resolve `config` against a caller-supplied registry.
    pub fn with_registry(
        config: &SearchConfig,
        registry: &EvaluationRegistry<S>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let evaluation = registry.resolve(&config.evaluation)?;
        debug!(
            evaluation = %config.evaluation,
            depth = config.depth,
            "Resolved search configuration"
        );
        Ok(Self {
            evaluation,
            evaluation_name: config.evaluation.clone(),
            depth: config.depth,
            stats: SearchStats::default(),
        })
    }

    /// Use an evaluation function directly, bypassing the registry.
    pub fn with_evaluation(
        name: impl Into<String>,
        evaluation: EvalFn<S>,
        depth: u32,
    ) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::InvalidDepth(depth));
        }
        Ok(Self {
            evaluation,
            evaluation_name: name.into(),
            depth,
            stats: SearchStats::default(),
        })
    }

    /// Configured depth in plies.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Name the evaluation function was resolved from.
    #[must_use]
    pub fn evaluation_name(&self) -> &str {
        &self.evaluation_name
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Reset statistics and validate the root.
    ///
    /// Returns `Some` when the root is terminal and needs no search.
    pub(crate) fn begin(
        &mut self,
        state: &S,
    ) -> Result<Option<SearchResult<S::Action>>, SearchError> {
        self.stats.reset();

        let count = state.agent_count();
        if count > AgentId::MAX_AGENTS {
            return Err(SearchError::TooManyAgents {
                count,
                max: AgentId::MAX_AGENTS,
            });
        }
        if state.is_terminal() {
            self.stats.nodes_visited = 1;
            return Ok(Some(SearchResult::leaf(self.evaluate(state))));
        }
        if state.legal_actions(AgentId::PROTAGONIST).is_empty() {
            return Err(SearchError::NoLegalActions {
                agent: AgentId::PROTAGONIST,
            });
        }
        Ok(None)
    }

    /// Exact value of every root action, scored by `value` from the turn
    /// after the root.
    pub(crate) fn root_values<F>(
        &mut self,
        strategy: &'static str,
        state: &S,
        mut value: F,
    ) -> Result<Vec<(S::Action, f64)>, SearchError>
    where
        F: FnMut(&mut Self, &S, Turn) -> f64,
    {
        let start = Instant::now();
        if self.begin(state)?.is_some() {
            return Err(SearchError::TerminalState);
        }

        let root = Turn::root();
        self.visit(root);
        self.expand();

        let next = root.next(state.agent_count());
        let mut values = Vec::new();
        for action in state.legal_actions(root.agent) {
            let child = state.successor(root.agent, &action);
            let score = value(self, &child, next);
            values.push((action, score));
        }

        let best = values.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
        self.finish(strategy, start, best);
        Ok(values)
    }

    /// Record elapsed time and log a summary.
    pub(crate) fn finish(&mut self, strategy: &'static str, start: Instant, value: f64) {
        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            strategy,
            value,
            nodes = self.stats.nodes_visited,
            evaluations = self.stats.evaluations,
            cutoffs = self.stats.cutoffs,
            branching = self.stats.effective_branching(),
            nodes_per_sec = self.stats.nodes_per_second(),
            time_us = self.stats.time_us,
            "Search complete"
        );
    }

    /// Count a node visit.
    pub(crate) fn visit(&mut self, turn: Turn) {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(turn.ply);
    }

    /// Count a node expansion.
    pub(crate) fn expand(&mut self) {
        self.stats.nodes_expanded += 1;
    }

    /// True when the node at `turn` must be evaluated statically.
    ///
    /// The protagonist stops at the depth limit. Adversaries only stop past
    /// it, which never happens when plies advance one roster at a time.
    pub(crate) fn is_cutoff(&self, state: &S, turn: Turn) -> bool {
        if state.is_terminal() {
            return true;
        }
        if turn.agent.is_protagonist() {
            turn.ply >= self.depth
        } else {
            turn.ply > self.depth
        }
    }

    /// Apply the evaluation function.
    pub(crate) fn evaluate(&mut self, state: &S) -> f64 {
        self.stats.evaluations += 1;
        (self.evaluation)(state)
    }
}
