//! Built-in evaluation functions.

use serde::{Deserialize, Serialize};

use crate::rules::GameState;

/// Returns the state's intrinsic score unmodified.
pub fn score_evaluation<S: GameState>(state: &S) -> f64 {
    state.score()
}

/// Blend of the intrinsic score with distance-weighted spatial features,
/// using [`HeuristicWeights::default`].
pub fn better_evaluation<S: GameState>(state: &S) -> f64 {
    weighted_evaluation(state, &HeuristicWeights::default())
}

/// Feature weights for [`weighted_evaluation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Reward scaled by `1 / (1 + d)` for the nearest food at distance `d`.
    pub food_proximity: f64,

    /// Penalty per remaining food item.
    pub food_remaining: f64,

    /// Penalty per remaining capsule.
    pub capsule_remaining: f64,

    /// Reward scaled by `1 / (1 + d)` for each scared adversary that can be
    /// reached before its timer runs out.
    pub hunt: f64,

    /// Penalty scaled by `1 / (1 + d)` for each active adversary within
    /// `danger_radius`.
    pub danger: f64,

    /// Distance at or under which an active adversary counts as a threat.
    pub danger_radius: u32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            food_proximity: 10.0,
            food_remaining: 4.0,
            capsule_remaining: 20.0,
            hunt: 200.0,
            danger: 500.0,
            danger_radius: 1,
        }
    }
}

impl HeuristicWeights {
    /// Set the danger penalty and radius.
    #[must_use]
    pub fn with_danger(mut self, danger: f64, radius: u32) -> Self {
        self.danger = danger;
        self.danger_radius = radius;
        self
    }

    /// Set the scared-adversary hunting reward.
    #[must_use]
    pub fn with_hunt(mut self, hunt: f64) -> Self {
        self.hunt = hunt;
        self
    }
}

/// Score plus weighted spatial features.
///
/// States without a protagonist position evaluate to their score.
pub fn weighted_evaluation<S: GameState>(state: &S, weights: &HeuristicWeights) -> f64 {
    let score = state.score();
    let Some(me) = state.protagonist_position() else {
        return score;
    };

    let food = state.food_positions();
    let capsules = state.capsule_positions();

    let mut value = score;

    if let Some(nearest) = food.iter().map(|&f| me.manhattan(f)).min() {
        value += weights.food_proximity / (1.0 + nearest as f64);
    }
    value -= weights.food_remaining * food.len() as f64;
    value -= weights.capsule_remaining * capsules.len() as f64;

    for adversary in state.adversaries() {
        let distance = me.manhattan(adversary.position);
        let falloff = 1.0 / (1.0 + distance as f64);

        if adversary.scared_timer > distance {
            value += weights.hunt * falloff;
        } else if !adversary.is_scared() && distance <= weights.danger_radius {
            value -= weights.danger * falloff;
        }
    }

    value
}
