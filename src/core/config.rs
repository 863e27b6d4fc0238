//! Configuration types.
//!
//! - `RulesConfig`: how strictly the rules engine validates placements
//! - `HeuristicWeights`: the constants of the heuristic scoring formula
//! - `MatchConfig`: turn cap, seed and rules for an arena match
//!
//! All configs follow the same builder shape: `Default` gives the standard
//! game, `with_*` methods override single fields.

use serde::{Deserialize, Serialize};

/// Where a card may be placed on an empty cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementRule {
    /// Any empty cell is playable. This is the bare engine behavior; the
    /// move enumerator still applies adjacency on top of it.
    #[default]
    Anywhere,
    /// After the first card, an empty cell must touch an occupied cell
    /// (8-directionally).
    Adjacent,
}

/// Rules engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Placement rule for empty cells.
    pub placement: PlacementRule,
}

impl RulesConfig {
    /// Permissive engine: any empty cell is playable.
    #[must_use]
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Engine that also enforces adjacency for empty-cell placement.
    #[must_use]
    pub fn adjacent() -> Self {
        Self {
            placement: PlacementRule::Adjacent,
        }
    }

    /// Set the placement rule.
    #[must_use]
    pub fn with_placement(mut self, placement: PlacementRule) -> Self {
        self.placement = placement;
        self
    }
}

/// Weights of the heuristic move score.
///
/// `score = center + capture + line + economy` where
/// - `center = center_base - center_slope * (|x - 2.5| + |y - 2.5|)`
/// - `capture` is `capture_opponent` for taking an opponent card,
///   `capture_own_other_color` for overwriting an own card of another color
/// - `line` sums, over the four directions, `line_four` / `line_three` /
///   `line_two` for a resulting run of >= 4 / 3 / 2
/// - `economy` is `high_card_penalty` when the best run is shorter than
///   `weak_line_threshold` and the card is at least `high_card_threshold`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeuristicWeights {
    pub center_base: f64,
    pub center_slope: f64,
    pub capture_opponent: f64,
    pub capture_own_other_color: f64,
    pub line_four: f64,
    pub line_three: f64,
    pub line_two: f64,
    pub high_card_threshold: u8,
    pub weak_line_threshold: usize,
    pub high_card_penalty: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            center_base: 3.0,
            center_slope: 0.5,
            capture_opponent: 3.0,
            capture_own_other_color: -1.0,
            line_four: 50.0,
            line_three: 15.0,
            line_two: 4.0,
            high_card_threshold: 7,
            weak_line_threshold: 3,
            high_card_penalty: -2.0,
        }
    }
}

impl HeuristicWeights {
    /// Set the run bonuses for lengths >= 4, 3 and 2.
    #[must_use]
    pub fn with_line_bonuses(mut self, four: f64, three: f64, two: f64) -> Self {
        self.line_four = four;
        self.line_three = three;
        self.line_two = two;
        self
    }

    /// Set the capture bonus and the self-sabotage penalty.
    #[must_use]
    pub fn with_capture(mut self, opponent: f64, own_other_color: f64) -> Self {
        self.capture_opponent = opponent;
        self.capture_own_other_color = own_other_color;
        self
    }

    /// Set the center bonus shape.
    #[must_use]
    pub fn with_center(mut self, base: f64, slope: f64) -> Self {
        self.center_base = base;
        self.center_slope = slope;
        self
    }
}

/// Arena match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Hard cap on applied moves before the tie-break decides.
    pub max_turns: u32,

    /// Seed for deck shuffles and the starting side.
    pub seed: u64,

    /// Rules used to validate proposed moves.
    pub rules: RulesConfig,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            seed: 42,
            rules: RulesConfig::default(),
        }
    }
}

impl MatchConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }
}
