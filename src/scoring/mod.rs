pub mod engine;
pub mod pair;
pub mod strategy;
pub mod validation;

pub use engine::{
    explain, public_whip_score, simplified_gradiated_score, simplified_score, BoundAdjustment,
    ScoreBreakdown,
};
pub use pair::WeightedPair;
pub use strategy::{is_comparable, score, ScoreInput, ScoringStrategy, Strategy, NO_COMPARISON};
pub use validation::validate_input;
