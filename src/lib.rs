//! Distance between a voting record and a policy position.
//!
//! Aggregated vote and agreement counts, split into weak and strong tiers,
//! are turned into a single score in [0, 1] (0 = always agreed, 1 = always
//! opposed) by one of the strategies in [`scoring::Strategy`]. A score of
//! [`scoring::NO_COMPARISON`] means there was nothing to compare.

pub mod config;
pub mod output;
pub mod scoring;
