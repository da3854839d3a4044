//! One-ply reflex agent.
//!
//! Scores each legal action of agent 0 directly, without looking at any
//! adversary reply, and picks uniformly at random among the best-scoring
//! actions. The random tie-break is seeded, so runs are reproducible.

use std::sync::Arc;

use crate::core::{AgentId, GameRng, SearchError};
use crate::eval::EvalFn;
use crate::rules::GameState;

use super::agent::Agent;

/// Shared reference to a state/action evaluation.
pub type ActionEvalFn<S> = Arc<dyn Fn(&S, &<S as GameState>::Action) -> f64 + Send + Sync>;

/// Score of the state reached by the protagonist taking `action`.
pub fn successor_score<S: GameState>(state: &S, action: &S::Action) -> f64 {
    state.successor(AgentId::PROTAGONIST, action).score()
}

/// Greedy single-step agent with random tie-breaking.
pub struct ReflexAgent<S: GameState> {
    evaluation: ActionEvalFn<S>,
    rng: GameRng,
}

impl<S: GameState + 'static> ReflexAgent<S> {
    /// Reflex agent scoring actions by their successor's score.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            evaluation: Arc::new(successor_score::<S>),
            rng: GameRng::new(seed),
        }
    }

    /// Score actions with a state evaluation applied to each successor.
    #[must_use]
    pub fn with_state_evaluation(mut self, evaluation: EvalFn<S>) -> Self {
        self.evaluation = Arc::new(move |state: &S, action: &S::Action| {
            evaluation(&state.successor(AgentId::PROTAGONIST, action))
        });
        self
    }
}

impl<S: GameState> ReflexAgent<S> {
    /// Score actions with a custom state/action evaluation.
    #[must_use]
    pub fn with_evaluation<F>(mut self, evaluation: F) -> Self
    where
        F: Fn(&S, &S::Action) -> f64 + Send + Sync + 'static,
    {
        self.evaluation = Arc::new(evaluation);
        self
    }

    /// Every legal action of agent 0 with its score, in legal-action order.
    pub fn action_scores(&self, state: &S) -> Vec<(S::Action, f64)> {
        state
            .legal_actions(AgentId::PROTAGONIST)
            .into_iter()
            .map(|action| {
                let score = (self.evaluation)(state, &action);
                (action, score)
            })
            .collect()
    }
}

impl<S: GameState> Agent<S> for ReflexAgent<S> {
    fn choose_action(&mut self, state: &S) -> Result<S::Action, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::TerminalState);
        }

        let mut scores = self.action_scores(state);
        if scores.is_empty() {
            return Err(SearchError::NoLegalActions {
                agent: AgentId::PROTAGONIST,
            });
        }

        let best = scores
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|(_, (_, score))| *score == best)
            .map(|(i, _)| i)
            .collect();

        // NaN never ties with the best score; all-NaN picks the first action.
        let chosen = self.rng.choose(&tied).copied().unwrap_or(0);
        Ok(scores.swap_remove(chosen).0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvaluationRegistry;
    use crate::games::tree::{branch, leaf, TreeSpec, TreeState};

    #[test]
    fn test_picks_best_successor() {
        let state = TreeState::build(
            2,
            branch([("A", leaf(1.0)), ("B", leaf(7.0)), ("C", leaf(3.0))]),
        );
        let mut reflex = ReflexAgent::new(1);

        assert_eq!(reflex.choose_action(&state).unwrap(), "B");
    }

    #[test]
    fn test_ties_broken_among_best_only() {
        let state = TreeState::build(
            2,
            branch([("A", leaf(5.0)), ("B", leaf(1.0)), ("C", leaf(5.0))]),
        );
        let mut reflex = ReflexAgent::new(7);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(reflex.choose_action(&state).unwrap());
        }

        assert!(!seen.contains("B"));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_seeded_tie_break_reproducible() {
        let state = TreeState::build(
            2,
            branch([("A", leaf(0.0)), ("B", leaf(0.0)), ("C", leaf(0.0))]),
        );
        let mut first = ReflexAgent::new(99);
        let mut second = ReflexAgent::new(99);

        for _ in 0..10 {
            assert_eq!(
                first.choose_action(&state).unwrap(),
                second.choose_action(&state).unwrap()
            );
        }
    }

    #[test]
    fn test_custom_evaluation() {
        let state = TreeState::build(2, branch([("A", leaf(1.0)), ("B", leaf(7.0))]));
        let mut reflex = ReflexAgent::new(0).with_evaluation(|s: &TreeState, a: &String| {
            -s.successor(AgentId::PROTAGONIST, a).score()
        });

        assert_eq!(reflex.choose_action(&state).unwrap(), "A");
    }

    #[test]
    fn test_nan_scores() {
        let state = TreeState::build(
            2,
            branch([("A", leaf(1.0)), ("B", leaf(f64::NAN)), ("C", leaf(3.0))]),
        );
        let mut reflex = ReflexAgent::new(4);
        assert_eq!(reflex.choose_action(&state).unwrap(), "C");

        let mut undecided =
            ReflexAgent::new(4).with_evaluation(|_: &TreeState, _: &String| f64::NAN);
        assert_eq!(undecided.choose_action(&state).unwrap(), "A");
    }

    #[test]
    fn test_state_evaluation_from_registry() {
        let mut registry = EvaluationRegistry::<TreeState>::with_defaults();
        registry.register("inverted", |s: &TreeState| -s.score());
        let eval = registry.resolve("inverted").unwrap();

        let state = TreeState::build(2, branch([("A", leaf(1.0)), ("B", leaf(7.0))]));
        let mut reflex = ReflexAgent::new(0).with_state_evaluation(eval);

        assert_eq!(reflex.choose_action(&state).unwrap(), "A");
        assert_eq!(
            reflex.action_scores(&state),
            vec![("A".to_string(), -1.0), ("B".to_string(), -7.0)]
        );
    }

    #[test]
    fn test_precondition_errors() {
        let mut reflex = ReflexAgent::new(0);

        let stuck = TreeState::build(2, leaf(0.0));
        assert_eq!(
            reflex.choose_action(&stuck),
            Err(SearchError::NoLegalActions { agent: AgentId::PROTAGONIST })
        );

        let won = TreeState::build(2, TreeSpec::Win(1.0));
        assert_eq!(reflex.choose_action(&won), Err(SearchError::TerminalState));
    }
}
