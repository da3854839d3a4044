//! Evaluation function registry.
//!
//! Agents name their evaluation function in configuration. The registry
//! maps those names to function references; an agent resolves its name once
//! at construction and holds the returned reference for its lifetime.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::core::ConfigError;
use crate::rules::GameState;

use super::functions::{better_evaluation, score_evaluation};

/// Shared reference to an evaluation function.
pub type EvalFn<S> = Arc<dyn Fn(&S) -> f64 + Send + Sync>;

/// Canonical name of [`score_evaluation`].
pub const SCORE_EVALUATION: &str = "score_evaluation";

/// Canonical name of [`better_evaluation`].
pub const BETTER_EVALUATION: &str = "better_evaluation";

/// Registry of named evaluation functions.
///
/// ## Example
///
/// ```
/// use multiagent_search::eval::EvaluationRegistry;
/// use multiagent_search::games::tree::{leaf, TreeState};
///
/// let mut registry = EvaluationRegistry::<TreeState>::with_defaults();
/// registry.register("negated", |state: &TreeState| -state.static_score());
///
/// let eval = registry.resolve("negated").unwrap();
/// assert_eq!(eval(&TreeState::build(2, leaf(3.0))), -3.0);
/// assert!(registry.resolve("missing").is_err());
/// ```
pub struct EvaluationRegistry<S> {
    functions: FxHashMap<String, EvalFn<S>>,
}

impl<S> Default for EvaluationRegistry<S> {
    fn default() -> Self {
        Self {
            functions: FxHashMap::default(),
        }
    }
}

impl<S> Clone for EvaluationRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            functions: self.functions.clone(),
        }
    }
}

impl<S> std::fmt::Debug for EvaluationRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvaluationRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl<S: GameState + 'static> EvaluationRegistry<S> {
    /// Registry holding the built-in functions and their aliases.
    ///
    /// | Name | Aliases |
    /// |------|---------|
    /// | `score_evaluation` | `scoreEvaluationFunction`, `score` |
    /// | `better_evaluation` | `betterEvaluationFunction`, `better` |
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let score: EvalFn<S> = Arc::new(score_evaluation::<S>);
        for name in [SCORE_EVALUATION, "scoreEvaluationFunction", "score"] {
            registry.functions.insert(name.to_string(), Arc::clone(&score));
        }

        let better: EvalFn<S> = Arc::new(better_evaluation::<S>);
        for name in [BETTER_EVALUATION, "betterEvaluationFunction", "better"] {
            registry.functions.insert(name.to_string(), Arc::clone(&better));
        }

        registry
    }
}

impl<S> EvaluationRegistry<S> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, function: F)
    where
        F: Fn(&S) -> f64 + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(function));
    }

    /// Make `alias` resolve to whatever `target` resolves to.
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> Result<(), ConfigError> {
        let function = self.resolve(target)?;
        self.insert(alias.into(), function);
        Ok(())
    }

    /// Look up a function by name.
    pub fn resolve(&self, name: &str) -> Result<EvalFn<S>, ConfigError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownEvaluation(name.to_string()))
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of registered names, aliases included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn insert(&mut self, name: String, function: EvalFn<S>) {
        if self.functions.contains_key(&name) {
            warn!(name = %name, "Overriding existing evaluation function");
        }
        self.functions.insert(name, function);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tree::{leaf, TreeState};

    #[test]
    fn test_defaults_and_aliases() {
        let registry = EvaluationRegistry::<TreeState>::with_defaults();

        for name in [
            "score_evaluation",
            "scoreEvaluationFunction",
            "score",
            "better_evaluation",
            "betterEvaluationFunction",
            "better",
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_resolve_builtin() {
        let registry = EvaluationRegistry::<TreeState>::with_defaults();
        let state = TreeState::build(2, leaf(12.0));

        let score = registry.resolve("scoreEvaluationFunction").unwrap();
        assert_eq!(score(&state), 12.0);

        // Trees carry no spatial features, so the heuristic is the score.
        let better = registry.resolve("better").unwrap();
        assert_eq!(better(&state), 12.0);
    }

    #[test]
    fn test_unknown_name() {
        let registry = EvaluationRegistry::<TreeState>::with_defaults();
        let err = registry.resolve("bogusEvaluationFunction").err();
        assert_eq!(
            err,
            Some(ConfigError::UnknownEvaluation("bogusEvaluationFunction".into()))
        );
    }

    #[test]
    fn test_register_and_override() {
        let mut registry = EvaluationRegistry::<TreeState>::new();
        assert!(registry.is_empty());

        registry.register("constant", |_: &TreeState| 1.0);
        registry.register("constant", |_: &TreeState| 2.0);

        let state = TreeState::build(2, leaf(0.0));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve("constant").unwrap()(&state), 2.0);
    }

    #[test]
    fn test_alias() {
        let mut registry = EvaluationRegistry::<TreeState>::with_defaults();
        registry.alias("default", SCORE_EVALUATION).unwrap();
        assert!(registry.contains("default"));

        assert_eq!(
            registry.alias("broken", "missing"),
            Err(ConfigError::UnknownEvaluation("missing".into()))
        );
    }

    #[test]
    fn test_names_sorted() {
        let registry = EvaluationRegistry::<TreeState>::with_defaults();
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
