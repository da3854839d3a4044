//! Explicit game tree implementation.

use std::sync::Arc;

use crate::core::AgentId;
use crate::rules::{ActionList, GameState};

/// Declarative description of a game tree.
///
/// Children are listed in legal-action order; their labels are the
/// actions. A node without children is a leaf: non-terminal, no legal
/// actions, evaluated by its score.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeSpec {
    /// Non-terminal node with a static score.
    Node {
        score: f64,
        children: Vec<(String, TreeSpec)>,
    },
    /// Terminal node where the protagonist has won.
    Win(f64),
    /// Terminal node where the protagonist has lost.
    Lose(f64),
}

/// Childless node with the given score.
#[must_use]
pub fn leaf(score: f64) -> TreeSpec {
    TreeSpec::Node {
        score,
        children: Vec::new(),
    }
}

/// Interior node scored 0.
#[must_use]
pub fn branch<L: Into<String>>(children: impl IntoIterator<Item = (L, TreeSpec)>) -> TreeSpec {
    scored_branch(0.0, children)
}

/// Interior node with a static score, used when the depth limit cuts the
/// search off at this node.
#[must_use]
pub fn scored_branch<L: Into<String>>(
    score: f64,
    children: impl IntoIterator<Item = (L, TreeSpec)>,
) -> TreeSpec {
    TreeSpec::Node {
        score,
        children: children
            .into_iter()
            .map(|(label, child)| (label.into(), child))
            .collect(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Open,
    Win,
    Lose,
}

#[derive(Debug)]
struct TreeNode {
    score: f64,
    outcome: Outcome,
    children: Vec<(String, usize)>,
}

/// Arena-allocated game tree.
#[derive(Debug)]
pub struct GameTree {
    agent_count: usize,
    nodes: Vec<TreeNode>,
}

impl GameTree {
    /// Flatten a spec into an arena. The root is node 0.
    ///
    /// Panics if `agent_count` is zero.
    #[must_use]
    pub fn new(agent_count: usize, spec: TreeSpec) -> Self {
        assert!(agent_count > 0, "Must have at least 1 agent");
        assert!(agent_count <= 255, "At most 255 agents supported");

        let mut tree = Self {
            agent_count,
            nodes: Vec::new(),
        };
        tree.alloc(spec);
        tree
    }

    fn alloc(&mut self, spec: TreeSpec) -> usize {
        let id = self.nodes.len();
        let (score, outcome, children) = match spec {
            TreeSpec::Node { score, children } => (score, Outcome::Open, children),
            TreeSpec::Win(score) => (score, Outcome::Win, Vec::new()),
            TreeSpec::Lose(score) => (score, Outcome::Lose, Vec::new()),
        };
        self.nodes.push(TreeNode {
            score,
            outcome,
            children: Vec::new(),
        });

        let edges = children
            .into_iter()
            .map(|(label, child)| (label, self.alloc(child)))
            .collect();
        self.nodes[id].children = edges;
        id
    }

    /// Total number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes (never true for a built tree).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of agents taking turns on this tree.
    #[must_use]
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }
}

/// Cursor into a shared [`GameTree`].
///
/// Cloning and successor generation copy a pointer and an index.
#[derive(Clone, Debug)]
pub struct TreeState {
    tree: Arc<GameTree>,
    node: usize,
}

impl TreeState {
    /// Build a tree and return a state at its root.
    #[must_use]
    pub fn build(agent_count: usize, spec: TreeSpec) -> Self {
        Self {
            tree: Arc::new(GameTree::new(agent_count, spec)),
            node: 0,
        }
    }

    /// The underlying tree.
    #[must_use]
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    /// Arena index of the current node.
    #[must_use]
    pub fn node(&self) -> usize {
        self.node
    }

    /// Score stored on the current node.
    #[must_use]
    pub fn static_score(&self) -> f64 {
        self.tree.nodes[self.node].score
    }

    /// Follow the child labelled `label`, if any.
    #[must_use]
    pub fn child(&self, label: &str) -> Option<TreeState> {
        self.tree.nodes[self.node]
            .children
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, node)| TreeState {
                tree: Arc::clone(&self.tree),
                node,
            })
    }
}

impl GameState for TreeState {
    type Action = String;

    fn legal_actions(&self, _agent: AgentId) -> ActionList<String> {
        self.tree.nodes[self.node]
            .children
            .iter()
            .map(|(label, _)| label.clone())
            .collect()
    }

    /// Panics if `action` is not a child label of the current node.
    fn successor(&self, _agent: AgentId, action: &String) -> Self {
        match self.child(action) {
            Some(next) => next,
            None => panic!("Illegal action {action:?} at tree node {}", self.node),
        }
    }

    fn agent_count(&self) -> usize {
        self.tree.agent_count
    }

    fn is_win(&self) -> bool {
        self.tree.nodes[self.node].outcome == Outcome::Win
    }

    fn is_lose(&self) -> bool {
        self.tree.nodes[self.node].outcome == Outcome::Lose
    }

    fn score(&self) -> f64 {
        self.static_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeState {
        TreeState::build(
            2,
            branch([
                ("A", branch([("a1", leaf(3.0)), ("a2", TreeSpec::Win(9.0))])),
                ("B", TreeSpec::Lose(-1.0)),
            ]),
        )
    }

    #[test]
    fn test_arena_layout() {
        let state = sample();
        assert_eq!(state.tree().len(), 5);
        assert_eq!(state.node(), 0);
        assert_eq!(state.agent_count(), 2);
    }

    #[test]
    fn test_legal_actions_in_order() {
        let state = sample();
        let actions: Vec<String> = state.legal_actions(AgentId::new(0)).into_vec();
        assert_eq!(actions, vec!["A".to_string(), "B".to_string()]);

        // Labels do not depend on which agent asks.
        assert_eq!(
            state.legal_actions(AgentId::new(1)).into_vec(),
            actions
        );
    }

    #[test]
    fn test_successors_and_outcomes() {
        let root = sample();
        let a = root.successor(AgentId::new(0), &"A".to_string());
        let b = root.successor(AgentId::new(0), &"B".to_string());

        assert!(!a.is_terminal());
        assert!(b.is_lose());
        assert_eq!(b.score(), -1.0);

        let a2 = a.successor(AgentId::new(1), &"a2".to_string());
        assert!(a2.is_win());
        assert_eq!(a2.score(), 9.0);

        let a1 = a.child("a1").unwrap();
        assert!(a1.legal_actions(AgentId::new(0)).is_empty());
        assert_eq!(a1.static_score(), 3.0);
    }

    #[test]
    fn test_successor_does_not_move_original() {
        let root = sample();
        let _ = root.successor(AgentId::new(0), &"A".to_string());
        assert_eq!(root.node(), 0);
    }

    #[test]
    #[should_panic(expected = "Illegal action")]
    fn test_illegal_action_panics() {
        let root = sample();
        let _ = root.successor(AgentId::new(0), &"Z".to_string());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 agent")]
    fn test_zero_agents() {
        let _ = TreeState::build(0, leaf(0.0));
    }
}
