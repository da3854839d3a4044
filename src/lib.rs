//! # multiagent-search
//!
//! Depth-limited adversarial search for turn-based games with one
//! maximizing agent and any number of adversaries.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Search only talks to the [`GameState`] trait.
//!    Any game providing legal actions, successors and a score can be
//!    searched.
//!
//! 2. **N-Agent First**: Agent 0 maximizes; agents `1..n` all respond
//!    within the same ply. No API assumes exactly two agents.
//!
//! 3. **Configuration by Name**: Agents are built from a [`SearchConfig`]
//!    naming an evaluation function and a depth, resolved once through an
//!    [`EvaluationRegistry`].
//!
//! ## Modules
//!
//! - `core`: Agent indices, turn order, RNG, error types
//! - `rules`: The `GameState` trait and spatial feature types
//! - `eval`: Evaluation functions and their registry
//! - `search`: Minimax, alpha-beta, expectimax and reflex agents
//! - `games`: A synthetic game tree and a maze chase game

pub mod core;
pub mod eval;
pub mod games;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{AgentId, ConfigError, GameRng, SearchError, Turn};

pub use crate::rules::{ActionList, Adversary, GameState, Position};

pub use crate::eval::{
    better_evaluation, score_evaluation, EvalFn, EvaluationRegistry, HeuristicWeights,
};

pub use crate::search::{
    Agent, AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent, ReflexAgent, SearchAgent, SearchConfig,
    SearchResult, SearchStats, Strategy,
};
