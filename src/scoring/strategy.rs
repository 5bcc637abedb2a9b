use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::engine::{public_whip_score, simplified_gradiated_score, simplified_score};
use super::pair::WeightedPair;

/// Returned when no meaningful comparison is possible.
pub const NO_COMPARISON: f64 = -1.0;

/// True if `score` is a real distance rather than the [`NO_COMPARISON`] sentinel.
pub fn is_comparable(score: f64) -> bool {
    score != NO_COMPARISON
}

/// The six aggregated count pairs behind one comparison.
///
/// Any pair omitted from YAML input defaults to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreInput {
    #[serde(default)]
    pub votes_same: WeightedPair,
    #[serde(default)]
    pub votes_different: WeightedPair,
    #[serde(default)]
    pub votes_absent: WeightedPair,
    #[serde(default)]
    pub votes_abstain: WeightedPair,
    #[serde(default)]
    pub agreements_same: WeightedPair,
    #[serde(default)]
    pub agreements_different: WeightedPair,
}

/// Anything that turns a [`ScoreInput`] into a distance in [0, 1] (or the sentinel).
pub trait ScoringStrategy {
    fn score(&self, input: &ScoreInput) -> f64;
}

/// The fixed set of scoring schemes, selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Classic scheme: weak 10 / strong 50, absences partially charged
    #[default]
    PublicWhip,
    /// Absences ignored, abstentions half marks, agreements count as votes
    SimplifiedGradiated,
    /// As simplified-gradiated, but weak votes carry no weight
    Simplified,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::PublicWhip,
        Strategy::SimplifiedGradiated,
        Strategy::Simplified,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::PublicWhip => "public-whip",
            Strategy::SimplifiedGradiated => "simplified-gradiated",
            Strategy::Simplified => "simplified",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::PublicWhip => {
                "weak 10 / strong 50; absences and abstentions cost 1/2 (weak) and 25/50 (strong)"
            }
            Strategy::SimplifiedGradiated => {
                "weak 10 / strong 50; absences ignored, abstentions half marks, agreements scored as votes"
            }
            Strategy::Simplified => {
                "strong votes only (10); absences ignored, abstentions half marks, agreements scored as votes"
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ScoringStrategy for Strategy {
    fn score(&self, input: &ScoreInput) -> f64 {
        match self {
            Strategy::PublicWhip => public_whip_score(input),
            Strategy::SimplifiedGradiated => simplified_gradiated_score(input),
            Strategy::Simplified => simplified_score(input),
        }
    }
}

/// Score one comparison with the chosen strategy.
pub fn score(
    strategy: Strategy,
    votes_same: WeightedPair,
    votes_different: WeightedPair,
    votes_absent: WeightedPair,
    votes_abstain: WeightedPair,
    agreements_same: WeightedPair,
    agreements_different: WeightedPair,
) -> f64 {
    let input = ScoreInput {
        votes_same,
        votes_different,
        votes_absent,
        votes_abstain,
        agreements_same,
        agreements_different,
    };
    strategy.score(&input)
}
