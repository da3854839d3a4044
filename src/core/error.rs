//! Error types for configuration and search.

use thiserror::Error;

use super::agent::AgentId;

/// Errors raised while building an agent from configuration.
///
/// All of these are fatal: an agent is never constructed from a
/// configuration that fails to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown evaluation function: {0}")]
    UnknownEvaluation(String),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("Search depth must be at least 1, got {0}")]
    InvalidDepth(u32),

    #[error("Invalid agent argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised by a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{agent} has no legal actions")]
    NoLegalActions { agent: AgentId },

    #[error("Cannot choose an action in a terminal state")]
    TerminalState,

    #[error("Game has {count} agents, at most {max} are supported")]
    TooManyAgents { count: usize, max: usize },

    #[error("{strategy} does not implement {operation}")]
    Unimplemented {
        strategy: &'static str,
        operation: &'static str,
    },
}
