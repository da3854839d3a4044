//! Playing a full game against policy-driven ghosts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AgentId, GameRng, SearchError};
use crate::rules::GameState;
use crate::search::Agent;

use super::game::{Direction, GridState, Outcome};

/// Fixed behaviour for a ghost during an episode.
pub trait GhostPolicy: Send + Sync {
    /// Choose a move for `ghost`.
    ///
    /// Returns `None` if no legal moves exist.
    fn choose_move(&self, state: &GridState, ghost: AgentId, rng: &mut GameRng)
        -> Option<Direction>;
}

/// Picks uniformly among legal moves.
#[derive(Clone, Debug, Default)]
pub struct RandomGhost;

impl GhostPolicy for RandomGhost {
    fn choose_move(
        &self,
        state: &GridState,
        ghost: AgentId,
        rng: &mut GameRng,
    ) -> Option<Direction> {
        let moves = state.legal_actions(ghost);
        rng.choose(&moves).copied()
    }
}

/// Episode limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Episode {
    /// Rounds to play before stopping. A round is one move per agent.
    pub max_turns: u32,
    /// Seed for the ghost policies.
    pub seed: u64,
}

impl Default for Episode {
    fn default() -> Self {
        Self {
            max_turns: 500,
            seed: 0,
        }
    }
}

/// How an episode ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Completed rounds, including the one that ended the game.
    pub turns: u32,
    pub score: f64,
    /// `Playing` if the turn limit was reached first.
    pub outcome: Outcome,
}

impl Episode {
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Play from `state` until the game ends or the turn limit is hit.
    ///
    /// Every ghost draws from its own stream derived from the episode seed.
    pub fn run<A, P>(
        &self,
        mut state: GridState,
        agent: &mut A,
        policy: &P,
    ) -> Result<EpisodeResult, SearchError>
    where
        A: Agent<GridState> + ?Sized,
        P: GhostPolicy + ?Sized,
    {
        let rng = GameRng::new(self.seed);
        let mut ghost_rngs: Vec<GameRng> = AgentId::adversaries(state.agent_count())
            .map(|ghost| rng.for_agent(ghost))
            .collect();

        let mut turns = 0;
        while turns < self.max_turns && !state.is_terminal() {
            turns += 1;

            let action = agent.choose_action(&state)?;
            state = state.successor(AgentId::PROTAGONIST, &action);

            let ghosts = AgentId::adversaries(state.agent_count());
            for (ghost, ghost_rng) in ghosts.zip(ghost_rngs.iter_mut()) {
                if state.is_terminal() {
                    break;
                }
                if let Some(direction) = policy.choose_move(&state, ghost, ghost_rng) {
                    state = state.successor(ghost, &direction);
                }
            }
        }

        debug!(turns, score = state.points(), outcome = ?state.outcome(), "Episode finished");

        Ok(EpisodeResult {
            turns,
            score: state.score(),
            outcome: state.outcome(),
        })
    }
}
