//! Depth-limited adversarial search.
//!
//! ## Overview
//!
//! Agent 0 maximizes the evaluation; agents `1..n` respond in round-robin
//! order within each ply. Three strategies share that turn structure:
//!
//! - **Minimax**: adversaries minimize
//! - **Alpha-beta**: minimax with pruning, same root value and action
//! - **Expectimax**: adversaries are uniform chance nodes
//!
//! A one-ply [`ReflexAgent`] is also provided for comparison.
//!
//! ## Usage
//!
//! ```rust
//! use multiagent_search::games::tree::{branch, leaf, TreeState};
//! use multiagent_search::search::{Agent, SearchConfig, Strategy};
//!
//! let state = TreeState::build(
//!     2,
//!     branch([
//!         ("A", branch([("a1", leaf(3.0)), ("a2", leaf(1.0))])),
//!         ("B", branch([("b1", leaf(2.0))])),
//!     ]),
//! );
//!
//! let config: SearchConfig = "evalFn=score,depth=1".parse().unwrap();
//! let mut agent = Strategy::Minimax.build::<TreeState>(&config).unwrap();
//! assert_eq!(agent.choose_action(&state).unwrap(), "B");
//! ```

pub mod agent;
pub mod alpha_beta;
pub mod config;
pub mod expectimax;
pub mod minimax;
pub mod reflex;
pub mod stats;
pub mod strategy;

// Re-export main types
pub use agent::{Agent, SearchAgent, SearchCore, SearchResult};
pub use alpha_beta::AlphaBetaAgent;
pub use config::{SearchConfig, DEFAULT_DEPTH};
pub use expectimax::ExpectimaxAgent;
pub use minimax::MinimaxAgent;
pub use reflex::{successor_score, ActionEvalFn, ReflexAgent};
pub use stats::SearchStats;
pub use strategy::Strategy;
