//! Agent identification and round-robin turn bookkeeping.
//!
//! ## AgentId
//!
//! Type-safe agent index. Agent 0 is the protagonist (the maximizing
//! agent); every other index is an adversary evaluated in round-robin
//! order within a ply.
//!
//! ## Turn
//!
//! The (agent, ply) pair a search node is evaluated at. A ply completes
//! only after every agent has moved once.

use serde::{Deserialize, Serialize};

/// Agent index supporting up to [`AgentId::MAX_AGENTS`] agents.
///
/// Agent indices are 0-based: the protagonist is `AgentId(0)`.
/// Games reporting more agents are rejected by the search with
/// `SearchError::TooManyAgents`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// The maximizing agent.
    pub const PROTAGONIST: AgentId = AgentId(0);

    /// Largest agent roster an `AgentId` can index.
    pub const MAX_AGENTS: usize = u8::MAX as usize + 1;

    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw agent index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// True for agent 0, the only maximizing agent.
    #[must_use]
    pub const fn is_protagonist(self) -> bool {
        self.0 == 0
    }

    /// True if this is the last agent to move in a ply of `agent_count` agents.
    ///
    /// Counts above [`AgentId::MAX_AGENTS`] are clamped.
    #[must_use]
    pub fn is_last(self, agent_count: usize) -> bool {
        self.index() + 1 >= agent_count.min(Self::MAX_AGENTS)
    }

    /// Iterate over all agent IDs for a game with `agent_count` agents.
    ///
    /// ```
    /// use multiagent_search::core::AgentId;
    ///
    /// let agents: Vec<_> = AgentId::all(3).collect();
    /// assert_eq!(agents, vec![AgentId::new(0), AgentId::new(1), AgentId::new(2)]);
    /// ```
    ///
    /// Stops after [`AgentId::MAX_AGENTS`] agents.
    pub fn all(agent_count: usize) -> impl Iterator<Item = AgentId> {
        (0..agent_count).map_while(|i| u8::try_from(i).ok().map(AgentId))
    }

    /// Iterate over the adversaries (every agent except the protagonist).
    pub fn adversaries(agent_count: usize) -> impl Iterator<Item = AgentId> {
        Self::all(agent_count).skip(1)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

/// Position in the round-robin move order: which agent acts, at which ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// The acting agent.
    pub agent: AgentId,
    /// Completed plies so far.
    pub ply: u32,
}

impl Turn {
    /// The protagonist's turn at ply 0, where every search starts.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            agent: AgentId::PROTAGONIST,
            ply: 0,
        }
    }

    /// The turn after this one.
    ///
    /// The last agent hands over to the protagonist at the next ply;
    /// everyone else hands over to the following agent at the same ply.
    ///
    /// ```
    /// use multiagent_search::core::{AgentId, Turn};
    ///
    /// let turn = Turn::root().next(2);
    /// assert_eq!(turn, Turn { agent: AgentId::new(1), ply: 0 });
    /// assert_eq!(turn.next(2), Turn { agent: AgentId::new(0), ply: 1 });
    /// ```
    #[must_use]
    pub fn next(self, agent_count: usize) -> Self {
        match self.agent.0.checked_add(1) {
            Some(id) if !self.agent.is_last(agent_count) => Self {
                agent: AgentId(id),
                ply: self.ply,
            },
            _ => Self {
                agent: AgentId::PROTAGONIST,
                ply: self.ply + 1,
            },
        }
    }
}
