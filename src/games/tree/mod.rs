//! Hand-built game trees for testing search strategies.
//!
//! A tree is described with [`TreeSpec`] and flattened into a shared
//! arena. States are cursors into that arena, so successor generation is
//! a pointer copy. Turn order is implicit: the search decides which agent
//! acts at each depth, and the tree answers with the same children for
//! any agent.
//!
//! ```
//! use multiagent_search::games::tree::{branch, leaf, TreeState};
//!
//! let state = TreeState::build(2, branch([("A", leaf(3.0)), ("B", leaf(5.0))]));
//! assert_eq!(state.tree().len(), 3);
//! ```

mod game;

pub use game::{branch, leaf, scored_branch, GameTree, TreeSpec, TreeState};
