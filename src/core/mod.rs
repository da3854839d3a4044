//! Core search types: agents, turn order, RNG, errors.
//!
//! This module contains the game-agnostic building blocks shared by every
//! strategy. Games plug in through `rules::GameState`, not by modifying
//! the core.

pub mod agent;
pub mod error;
pub mod rng;

pub use agent::{AgentId, Turn};
pub use error::{ConfigError, SearchError};
pub use rng::GameRng;
