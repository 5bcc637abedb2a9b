use serde::{Deserialize, Serialize};

use crate::scoring::{ScoreInput, Strategy, WeightedPair};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Strategy for comparisons that don't name their own
    #[serde(default)]
    pub strategy: Option<Strategy>,
    #[serde(default)]
    pub comparisons: Vec<ComparisonConfig>,
}

/// One comparison: a label, an optional strategy override, and its six count pairs.
/// Omitted pairs are zero.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub strategy: Option<Strategy>,
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

impl ComparisonConfig {
    pub fn input(&self) -> ScoreInput {
        ScoreInput {
            votes_same: self.votes_same,
            votes_different: self.votes_different,
            votes_absent: self.votes_absent,
            votes_abstain: self.votes_abstain,
            agreements_same: self.agreements_same,
            agreements_different: self.agreements_different,
        }
    }

    /// Resolve the strategy to use: explicit override, then this comparison's
    /// own choice, then the file default, then public-whip.
    pub fn resolve_strategy(&self, config: &Config, cli: Option<Strategy>) -> Strategy {
        cli.or(self.strategy)
            .or(config.strategy)
            .unwrap_or_default()
    }

    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("comparison {}", index + 1),
        }
    }
}
