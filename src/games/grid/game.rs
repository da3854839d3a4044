//! Maze chase rules.

use std::str::FromStr;
use std::sync::Arc;

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use crate::core::AgentId;
use crate::rules::{ActionList, Adversary, GameState, Position};

use super::layout::{Layout, LayoutError};

/// Points lost per protagonist move.
pub const TIME_PENALTY: i64 = 1;
/// Points per food pellet.
pub const FOOD_POINTS: i64 = 10;
/// Bonus for clearing the maze.
pub const WIN_POINTS: i64 = 500;
/// Penalty for being caught.
pub const LOSE_POINTS: i64 = 500;
/// Points for catching a scared ghost.
pub const GHOST_POINTS: i64 = 200;
/// Ghost moves a capsule keeps ghosts scared for.
pub const SCARED_TIME: u32 = 40;

/// A move on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// Moves other than `Stop`, in legal-action order.
    pub const MOVES: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The opposite direction. `Stop` reverses to itself.
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }

    /// The cell one step away in this direction.
    #[must_use]
    pub fn step(self, from: Position) -> Position {
        match self {
            Direction::North => Position::new(from.x, from.y - 1),
            Direction::South => Position::new(from.x, from.y + 1),
            Direction::East => Position::new(from.x + 1, from.y),
            Direction::West => Position::new(from.x - 1, from.y),
            Direction::Stop => from,
        }
    }
}

/// Mutable per-ghost data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ghost {
    pub position: Position,
    pub start: Position,
    /// Last move taken, `Stop` before the first move.
    pub direction: Direction,
    pub scared_timer: u32,
}

impl Ghost {
    fn spawn(start: Position) -> Self {
        Self {
            position: start,
            start,
            direction: Direction::Stop,
            scared_timer: 0,
        }
    }
}

/// Game progress from the protagonist's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

/// Full maze state.
///
/// The layout is shared; food, capsules and ghosts are persistent
/// collections, so successors share structure with their parent.
#[derive(Clone, Debug)]
pub struct GridState {
    layout: Arc<Layout>,
    protagonist: Position,
    food: OrdSet<Position>,
    capsules: OrdSet<Position>,
    ghosts: Vector<Ghost>,
    score: i64,
    outcome: Outcome,
}

impl GridState {
    /// Initial state of a layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let food = layout.food().iter().copied().collect();
        let capsules = layout.capsules().iter().copied().collect();
        let ghosts = layout.ghosts().iter().copied().map(Ghost::spawn).collect();
        let protagonist = layout.protagonist();

        Self {
            layout: Arc::new(layout),
            protagonist,
            food,
            capsules,
            ghosts,
            score: 0,
            outcome: Outcome::Playing,
        }
    }

    /// The static maze.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Protagonist location.
    #[must_use]
    pub fn protagonist(&self) -> Position {
        self.protagonist
    }

    /// Ghosts in agent order (ghost `i` is agent `i + 1`).
    pub fn ghosts(&self) -> impl Iterator<Item = &Ghost> {
        self.ghosts.iter()
    }

    /// Remaining food pellets.
    #[must_use]
    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    /// Check for food at a cell.
    #[must_use]
    pub fn has_food(&self, pos: Position) -> bool {
        self.food.contains(&pos)
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Integer score.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.score
    }

    fn ghost_index(agent: AgentId) -> usize {
        agent.index() - 1
    }

    fn open_moves(&self, from: Position) -> impl Iterator<Item = Direction> + '_ {
        Direction::MOVES
            .into_iter()
            .filter(move |d| !self.layout.is_wall(d.step(from)))
    }

    fn protagonist_moves(&self) -> ActionList<Direction> {
        let mut moves: ActionList<Direction> = self.open_moves(self.protagonist).collect();
        moves.push(Direction::Stop);
        moves
    }

    /// Ghosts never stop and only reverse at dead ends.
    fn ghost_moves(&self, ghost: &Ghost) -> ActionList<Direction> {
        let open: ActionList<Direction> = self.open_moves(ghost.position).collect();
        if open.is_empty() {
            return ActionList::from_slice(&[Direction::Stop]);
        }

        let reverse = ghost.direction.reverse();
        let forward: ActionList<Direction> = open
            .iter()
            .copied()
            .filter(|&d| d != reverse)
            .collect();
        if forward.is_empty() {
            open
        } else {
            forward
        }
    }

    fn move_protagonist(&mut self, direction: Direction) {
        self.protagonist = direction.step(self.protagonist);
        self.score -= TIME_PENALTY;

        if self.food.remove(&self.protagonist).is_some() {
            self.score += FOOD_POINTS;
            if self.food.is_empty() {
                self.score += WIN_POINTS;
                self.outcome = Outcome::Won;
                return;
            }
        }

        if self.capsules.remove(&self.protagonist).is_some() {
            for ghost in self.ghosts.iter_mut() {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for index in 0..self.ghosts.len() {
            self.resolve_contact(index);
        }
    }

    fn move_ghost(&mut self, index: usize, direction: Direction) {
        if let Some(ghost) = self.ghosts.get_mut(index) {
            ghost.position = direction.step(ghost.position);
            ghost.direction = direction;
            ghost.scared_timer = ghost.scared_timer.saturating_sub(1);
        }
        self.resolve_contact(index);
    }

    /// Handle the protagonist and ghost `index` sharing a cell.
    fn resolve_contact(&mut self, index: usize) {
        if self.outcome != Outcome::Playing {
            return;
        }
        let protagonist = self.protagonist;
        let Some(ghost) = self.ghosts.get_mut(index) else {
            return;
        };
        if ghost.position != protagonist {
            return;
        }

        if ghost.scared_timer > 0 {
            *ghost = Ghost::spawn(ghost.start);
            self.score += GHOST_POINTS;
        } else {
            self.score -= LOSE_POINTS;
            self.outcome = Outcome::Lost;
        }
    }
}

impl FromStr for GridState {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.parse()?))
    }
}

impl GameState for GridState {
    type Action = Direction;

    fn legal_actions(&self, agent: AgentId) -> ActionList<Direction> {
        if self.outcome != Outcome::Playing {
            return ActionList::new();
        }
        if agent.is_protagonist() {
            return self.protagonist_moves();
        }
        match self.ghosts.get(Self::ghost_index(agent)) {
            Some(ghost) => self.ghost_moves(ghost),
            None => ActionList::new(),
        }
    }

    /// Terminal states and unknown agents succeed to an unchanged copy.
    fn successor(&self, agent: AgentId, action: &Direction) -> Self {
        let mut next = self.clone();
        if self.outcome != Outcome::Playing {
            return next;
        }

        if agent.is_protagonist() {
            next.move_protagonist(*action);
        } else {
            next.move_ghost(Self::ghost_index(agent), *action);
        }
        next
    }

    fn agent_count(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn is_win(&self) -> bool {
        self.outcome == Outcome::Won
    }

    fn is_lose(&self) -> bool {
        self.outcome == Outcome::Lost
    }

    fn score(&self) -> f64 {
        self.score as f64
    }

    fn protagonist_position(&self) -> Option<Position> {
        Some(self.protagonist)
    }

    fn food_positions(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn capsule_positions(&self) -> Vec<Position> {
        self.capsules.iter().copied().collect()
    }

    fn adversaries(&self) -> Vec<Adversary> {
        self.ghosts
            .iter()
            .map(|ghost| Adversary {
                position: ghost.position,
                scared_timer: ghost.scared_timer,
            })
            .collect()
    }
}
