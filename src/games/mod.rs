//! Reference games implementing [`GameState`](crate::rules::GameState).

pub mod grid;
pub mod tree;
