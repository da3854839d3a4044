//! A maze chase: one protagonist collecting food while ghosts hunt it.
//!
//! Agent 0 is the protagonist; ghost `i` is agent `i + 1`. Food, capsules
//! and ghosts live in persistent `im` collections, so a successor shares
//! most of its storage with its parent.

mod episode;
mod game;
mod layout;

pub use episode::{Episode, EpisodeResult, GhostPolicy, RandomGhost};
pub use game::{
    Direction, Ghost, GridState, Outcome, FOOD_POINTS, GHOST_POINTS, LOSE_POINTS, SCARED_TIME,
    TIME_PENALTY, WIN_POINTS,
};
pub use layout::{Layout, LayoutError, MAX_GHOSTS};
