//! Game state trait for game implementations.
//!
//! Games implement `GameState` to expose:
//! - Legal actions for each agent
//! - Successor states
//! - Win/loss predicates and the running score
//!
//! Search only ever reads a state. Every transition returns a new value.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::AgentId;

/// Legal actions for one agent.
///
/// Inline capacity covers the common case of a handful of moves
/// (four directions plus stop) without heap allocation.
pub type ActionList<A> = SmallVec<[A; 5]>;

/// Grid coordinate used by spatial features.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An adversary as seen by a heuristic evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adversary {
    pub position: Position,
    /// Remaining moves during which the adversary can be captured.
    /// Zero when the adversary is dangerous.
    pub scared_timer: u32,
}

impl Adversary {
    #[must_use]
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

/// Game state trait.
///
/// Any type providing the six required operations can be searched. The
/// spatial accessors are optional: their defaults report no spatial
/// information, and heuristics fall back to [`GameState::score`].
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty if the agent can't act
/// - `successor`: Must be deterministic; `action` comes from `legal_actions`
/// - `score`: Higher is better for agent 0
pub trait GameState: Sized {
    /// An action an agent can take.
    type Action: Clone + Debug + PartialEq;

    /// Legal actions for an agent, in a stable order.
    fn legal_actions(&self, agent: AgentId) -> ActionList<Self::Action>;

    /// The state after `agent` takes `action`.
    fn successor(&self, agent: AgentId, action: &Self::Action) -> Self;

    /// Total number of agents, protagonist included.
    fn agent_count(&self) -> usize;

    /// The protagonist has won.
    fn is_win(&self) -> bool;

    /// The protagonist has lost.
    fn is_lose(&self) -> bool;

    /// Intrinsic game score.
    fn score(&self) -> f64;

    /// Win or loss.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }

    /// Location of agent 0, if the game has a spatial layout.
    fn protagonist_position(&self) -> Option<Position> {
        None
    }

    /// Remaining consumable items.
    fn food_positions(&self) -> Vec<Position> {
        Vec::new()
    }

    /// Remaining power-ups that scare adversaries.
    fn capsule_positions(&self) -> Vec<Position> {
        Vec::new()
    }

    /// Adversary positions and scared timers, in agent order.
    fn adversaries(&self) -> Vec<Adversary> {
        Vec::new()
    }
}
