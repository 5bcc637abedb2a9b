use serde::{Deserialize, Serialize};
use std::ops::{Add, Div};

/// A count (or weighted count) split by importance tier.
///
/// Used for every vote and agreement category, and for the per-tier weights
/// the strategies multiply them by. Values are plain copies; `add` and
/// `divide` always return a new pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WeightedPair {
    #[serde(default)]
    pub weak: f64,
    #[serde(default)]
    pub strong: f64,
}

impl WeightedPair {
    pub const ZERO: WeightedPair = WeightedPair::new(0.0, 0.0);

    pub const fn new(weak: f64, strong: f64) -> Self {
        Self { weak, strong }
    }

    /// Componentwise sum.
    pub fn add(self, other: WeightedPair) -> WeightedPair {
        WeightedPair::new(self.weak + other.weak, self.strong + other.strong)
    }

    /// Divide both components by `scalar`. A zero scalar yields inf/NaN.
    pub fn divide(self, scalar: f64) -> WeightedPair {
        WeightedPair::new(self.weak / scalar, self.strong / scalar)
    }

    /// Weighted sum of the two tiers: `weights.weak * weak + weights.strong * strong`.
    pub fn weighted_by(self, weights: WeightedPair) -> f64 {
        weights.weak * self.weak + weights.strong * self.strong
    }

    /// Sum of both tiers, ignoring weights.
    pub fn total(self) -> f64 {
        self.weak + self.strong
    }
}

impl Add for WeightedPair {
    type Output = WeightedPair;

    fn add(self, other: WeightedPair) -> WeightedPair {
        WeightedPair::add(self, other)
    }
}

impl Div<f64> for WeightedPair {
    type Output = WeightedPair;

    fn div(self, scalar: f64) -> WeightedPair {
        self.divide(scalar)
    }
}
