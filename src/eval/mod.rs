//! Static evaluation of game states.
//!
//! Evaluation functions estimate how good a state is for agent 0 when the
//! search stops short of a terminal state. Agents pick one by name from an
//! [`EvaluationRegistry`] at construction.

pub mod functions;
pub mod registry;

pub use functions::{better_evaluation, score_evaluation, weighted_evaluation, HeuristicWeights};
pub use registry::{EvalFn, EvaluationRegistry, BETTER_EVALUATION, SCORE_EVALUATION};
