//! Search strategy integration tests using hand-built game trees.

use multiagent_search::core::{AgentId, ConfigError, SearchError};
use multiagent_search::eval::EvaluationRegistry;
use multiagent_search::games::tree::{branch, leaf, scored_branch, TreeSpec, TreeState};
use multiagent_search::search::{
    Agent, AlphaBetaAgent, ExpectimaxAgent, MinimaxAgent, SearchAgent, SearchConfig, Strategy,
};

fn config(depth: u32) -> SearchConfig {
    SearchConfig::default().with_depth(depth)
}

/// Max chooses between A and B; Min replies evaluate to {A -> 3, B -> 5}.
fn two_choice_game() -> TreeState {
    TreeState::build(
        2,
        branch([
            ("A", branch([("a1", leaf(3.0)), ("a2", leaf(8.0))])),
            ("B", branch([("b1", leaf(5.0)), ("b2", leaf(6.0))])),
        ]),
    )
}

fn all_agents(depth: u32) -> Vec<Box<dyn SearchAgent<TreeState>>> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| strategy.build(&config(depth)).unwrap())
        .collect()
}

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_minimax_and_alpha_beta_pick_b() {
    let state = two_choice_game();

    let mut minimax = MinimaxAgent::<TreeState>::new(&config(2)).unwrap();
    let mut alpha_beta = AlphaBetaAgent::<TreeState>::new(&config(2)).unwrap();

    let mm = minimax.search(&state).unwrap();
    let ab = alpha_beta.search(&state).unwrap();

    assert_eq!(mm.value, 5.0);
    assert_eq!(mm.action.as_deref(), Some("B"));
    assert_eq!(ab.value, 5.0);
    assert_eq!(ab.action.as_deref(), Some("B"));
    assert!(alpha_beta.stats().nodes_visited <= minimax.stats().nodes_visited);
}

#[test]
fn test_alpha_beta_prunes_when_a_reply_refutes() {
    // B's first reply (1) is already below A's value (3).
    let state = TreeState::build(
        2,
        branch([
            ("A", branch([("a1", leaf(3.0)), ("a2", leaf(4.0))])),
            ("B", branch([("b1", leaf(1.0)), ("b2", leaf(9.0)), ("b3", leaf(7.0))])),
        ]),
    );

    let mut minimax = MinimaxAgent::<TreeState>::new(&config(1)).unwrap();
    let mut alpha_beta = AlphaBetaAgent::<TreeState>::new(&config(1)).unwrap();

    assert_eq!(minimax.choose_action(&state).unwrap(), "A");
    assert_eq!(alpha_beta.choose_action(&state).unwrap(), "A");
    assert!(alpha_beta.stats().cutoffs >= 1);
    assert!(alpha_beta.stats().nodes_visited < minimax.stats().nodes_visited);
}

#[test]
fn test_expectimax_averages_chance_children() {
    let state = TreeState::build(
        2,
        branch([("X", branch([("low", leaf(2.0)), ("high", leaf(10.0))]))]),
    );
    let mut agent = ExpectimaxAgent::<TreeState>::new(&config(1)).unwrap();

    let result = agent.search(&state).unwrap();
    assert_eq!(result.value, 6.0);
    assert_eq!(result.action.as_deref(), Some("X"));
}

#[test]
fn test_expectimax_takes_gamble_minimax_refuses() {
    let state = TreeState::build(
        2,
        branch([
            ("safe", branch([("s1", leaf(4.0)), ("s2", leaf(4.0))])),
            ("gamble", branch([("g1", leaf(0.0)), ("g2", leaf(10.0))])),
        ]),
    );

    let mut minimax = MinimaxAgent::<TreeState>::new(&config(1)).unwrap();
    let mut expectimax = ExpectimaxAgent::<TreeState>::new(&config(1)).unwrap();

    assert_eq!(minimax.choose_action(&state).unwrap(), "safe");
    assert_eq!(expectimax.choose_action(&state).unwrap(), "gamble");
}

#[test]
fn test_three_agents_share_a_ply() {
    // Both adversaries move before the depth-1 cutoff.
    let state = TreeState::build(
        3,
        branch([
            (
                "A",
                branch([
                    ("x", branch([("x1", leaf(7.0)), ("x2", leaf(2.0))])),
                    ("y", branch([("y1", leaf(6.0))])),
                ]),
            ),
            ("B", branch([("z", branch([("z1", leaf(4.0))]))])),
        ]),
    );

    let mut minimax = MinimaxAgent::<TreeState>::new(&config(1)).unwrap();
    let result = minimax.search(&state).unwrap();

    assert_eq!(result.value, 4.0);
    assert_eq!(result.action.as_deref(), Some("B"));
    assert_eq!(minimax.stats().max_ply, 1);
}

#[test]
fn test_depth_limit_uses_static_score() {
    // At depth 1 the agent stops at A's and B's grandchildren and reads
    // their static scores instead of the deeper leaves.
    let state = TreeState::build(
        2,
        branch([
            ("A", branch([("a", scored_branch(1.0, [("deep", leaf(100.0))]))])),
            ("B", branch([("b", scored_branch(2.0, [("deep", leaf(-100.0))]))])),
        ]),
    );

    let mut shallow = MinimaxAgent::<TreeState>::new(&config(1)).unwrap();
    let mut deep = MinimaxAgent::<TreeState>::new(&config(2)).unwrap();

    assert_eq!(shallow.choose_action(&state).unwrap(), "B");
    assert_eq!(deep.choose_action(&state).unwrap(), "A");
}

// =============================================================================
// Contract Tests
// =============================================================================

#[test]
fn test_choose_action_is_idempotent() {
    let state = two_choice_game();

    for mut agent in all_agents(2) {
        let first = agent.choose_action(&state).unwrap();
        let second = agent.choose_action(&state).unwrap();
        assert_eq!(first, second, "{} changed its mind", agent.name());
    }
}

#[test]
fn test_terminal_root_short_circuits() {
    let state = TreeState::build(2, TreeSpec::Win(42.0));

    for mut agent in all_agents(3) {
        let result = agent.search(&state).unwrap();
        assert_eq!(result.value, 42.0);
        assert_eq!(result.action, None);
        assert_eq!(agent.stats().nodes_expanded, 0);
        assert_eq!(agent.stats().nodes_visited, 1);

        assert_eq!(agent.choose_action(&state), Err(SearchError::TerminalState));
    }
}

#[test]
fn test_root_without_actions_is_an_error() {
    let state = TreeState::build(2, leaf(1.0));

    for mut agent in all_agents(1) {
        assert_eq!(
            agent.choose_action(&state),
            Err(SearchError::NoLegalActions {
                agent: AgentId::PROTAGONIST
            })
        );
    }
}

#[test]
fn test_root_values_per_strategy() {
    let state = two_choice_game();

    let mut minimax = MinimaxAgent::<TreeState>::new(&config(1)).unwrap();
    let values = minimax.root_values(&state).unwrap();
    assert_eq!(values, vec![("A".to_string(), 3.0), ("B".to_string(), 5.0)]);

    let mut expectimax = ExpectimaxAgent::<TreeState>::new(&config(1)).unwrap();
    let values = expectimax.root_values(&state).unwrap();
    assert_eq!(values, vec![("A".to_string(), 5.5), ("B".to_string(), 5.5)]);

    let mut alpha_beta = AlphaBetaAgent::<TreeState>::new(&config(1)).unwrap();
    assert!(matches!(
        alpha_beta.root_values(&state),
        Err(SearchError::Unimplemented { strategy: "alpha-beta", .. })
    ));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_zero_depth_rejected() {
    assert_eq!(
        MinimaxAgent::<TreeState>::new(&config(0)).err(),
        Some(ConfigError::InvalidDepth(0))
    );
}

#[test]
fn test_unknown_evaluation_rejected() {
    let config: SearchConfig = "evalFn=nonexistent,depth=2".parse().unwrap();
    assert_eq!(
        ExpectimaxAgent::<TreeState>::new(&config).err(),
        Some(ConfigError::UnknownEvaluation("nonexistent".into()))
    );
}

#[test]
fn test_config_error_converts_to_search_error() {
    let error: SearchError = ConfigError::InvalidDepth(0).into();
    assert_eq!(error, SearchError::Config(ConfigError::InvalidDepth(0)));
}

#[test]
fn test_custom_registry_evaluation() {
    let mut registry = EvaluationRegistry::<TreeState>::new();
    registry.register("inverted", |state: &TreeState| -state.static_score());

    let config = SearchConfig::default().with_evaluation("inverted").with_depth(1);
    let mut agent = MinimaxAgent::with_registry(&config, &registry).unwrap();

    // Negated replies: A -> -8, B -> -6.
    let result = agent.search(&two_choice_game()).unwrap();
    assert_eq!(result.value, -6.0);
    assert_eq!(result.action.as_deref(), Some("B"));
}
