use super::pair::WeightedPair;
use super::strategy::{ScoreInput, Strategy, NO_COMPARISON};

// Public Whip weights. Absences on weak votes are charged 1 point out of 2,
// absences on strong votes 25 out of 50.
const PW_VOTE_WEIGHT: WeightedPair = WeightedPair::new(10.0, 50.0);
const PW_ABSENCE_WEIGHT: WeightedPair = WeightedPair::new(1.0, 25.0);
const PW_ABSENCE_TOTAL_WEIGHT: WeightedPair = WeightedPair::new(2.0, 50.0);

const GRADIATED_VOTE_WEIGHT: WeightedPair = WeightedPair::new(10.0, 50.0);
const SIMPLIFIED_VOTE_WEIGHT: WeightedPair = WeightedPair::new(0.0, 10.0);

/// Clamp applied when strong-tier absences make the sample thin.
struct Bound {
    label: &'static str,
    low: f64,
    floor: f64,
    high: f64,
    ceiling: f64,
}

impl Bound {
    fn apply(&self, score: f64) -> f64 {
        if score <= self.low {
            self.floor
        } else if score >= self.high {
            self.ceiling
        } else {
            score
        }
    }
}

const REPEATED_ABSENCE_BOUND: Bound = Bound {
    label: "more than one strong absence",
    low: 0.05,
    floor: 0.06,
    high: 0.95,
    ceiling: 0.94,
};

const MAJORITY_ABSENCE_BOUND: Bound = Bound {
    label: "strong absences at least a third of strong votes",
    low: 0.15,
    floor: 0.16,
    high: 0.85,
    ceiling: 0.84,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BoundAdjustment {
    pub label: String,
    pub before: f64,
    pub after: f64,
}

/// Intermediate values of one score computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub strategy: Strategy,
    pub points: f64,
    pub available: f64,
    /// `points / available` before bounding; None when the sentinel was returned
    pub ratio: Option<f64>,
    pub score: f64,
    pub adjustments: Vec<BoundAdjustment>,
}

impl ScoreBreakdown {
    fn no_comparison(strategy: Strategy, points: f64, available: f64) -> Self {
        Self {
            strategy,
            points,
            available,
            ratio: None,
            score: NO_COMPARISON,
            adjustments: Vec::new(),
        }
    }
}

/// Compute a score along with the values that produced it.
pub fn explain(strategy: Strategy, input: &ScoreInput) -> ScoreBreakdown {
    match strategy {
        Strategy::PublicWhip => public_whip_breakdown(input),
        Strategy::SimplifiedGradiated => simplified_breakdown(strategy, input, GRADIATED_VOTE_WEIGHT),
        Strategy::Simplified => simplified_breakdown(strategy, input, SIMPLIFIED_VOTE_WEIGHT),
    }
}

/// Classic Public Whip distance between a voting record and a policy.
///
/// Weak votes are worth 10 points and strong votes 50. Abstentions are treated
/// as absences. An absence costs 1 of 2 points on a weak vote and 25 of 50 on a
/// strong vote, so absences are only lightly penalised unless the votes missed
/// were important. Agreements are ignored.
///
/// Returns [`NO_COMPARISON`] if the record is nothing but absences, or if there
/// is nothing to compare.
pub fn public_whip_score(input: &ScoreInput) -> f64 {
    public_whip_breakdown(input).score
}

/// Simplified scheme keeping weak votes at a fifth of a strong vote.
///
/// Absences are left out entirely, abstentions count as present for half
/// marks, and agreements are scored the same as votes. Results are pulled
/// away from 0 and 1 when strong-tier absences are common.
pub fn simplified_gradiated_score(input: &ScoreInput) -> f64 {
    simplified_breakdown(Strategy::SimplifiedGradiated, input, GRADIATED_VOTE_WEIGHT).score
}

/// Simplified scheme in which weak votes are informative only.
///
/// Identical to [`simplified_gradiated_score`] with a weak weight of zero.
pub fn simplified_score(input: &ScoreInput) -> f64 {
    simplified_breakdown(Strategy::Simplified, input, SIMPLIFIED_VOTE_WEIGHT).score
}

fn public_whip_breakdown(input: &ScoreInput) -> ScoreBreakdown {
    let absent_or_abstain = input.votes_absent.add(input.votes_abstain);

    let points = input.votes_different.weighted_by(PW_VOTE_WEIGHT)
        + absent_or_abstain.weighted_by(PW_ABSENCE_WEIGHT);

    let available = input.votes_same.weighted_by(PW_VOTE_WEIGHT)
        + input.votes_different.weighted_by(PW_VOTE_WEIGHT)
        + absent_or_abstain.weighted_by(PW_ABSENCE_TOTAL_WEIGHT);

    // A record of nothing but absences is not a comparison, whatever it would score
    let all_absences = input.votes_absent.total();
    let all_others =
        input.votes_same.total() + input.votes_different.total() + input.votes_abstain.total();

    if all_others == 0.0 && all_absences > 0.0 {
        return ScoreBreakdown::no_comparison(Strategy::PublicWhip, points, available);
    }

    if available == 0.0 {
        return ScoreBreakdown::no_comparison(Strategy::PublicWhip, points, available);
    }

    let ratio = points / available;
    ScoreBreakdown {
        strategy: Strategy::PublicWhip,
        points,
        available,
        ratio: Some(ratio),
        score: ratio,
        adjustments: Vec::new(),
    }
}

fn simplified_breakdown(
    strategy: Strategy,
    input: &ScoreInput,
    vote_weight: WeightedPair,
) -> ScoreBreakdown {
    let agreement_weight = vote_weight;
    let abstain_weight = vote_weight.divide(2.0);
    let abstain_total_weight = vote_weight;

    let points = input.votes_different.weighted_by(vote_weight)
        + input.votes_abstain.weighted_by(abstain_weight)
        + input.agreements_different.weighted_by(agreement_weight);

    let available = input
        .votes_same
        .add(input.votes_different)
        .weighted_by(vote_weight)
        + input
            .agreements_same
            .add(input.agreements_different)
            .weighted_by(agreement_weight)
        + input.votes_abstain.weighted_by(abstain_total_weight);

    if available == 0.0 {
        return ScoreBreakdown::no_comparison(strategy, points, available);
    }

    let ratio = points / available;
    let mut score = ratio;
    let mut adjustments = Vec::new();

    let strong_absent = input.votes_absent.strong;
    let strong_total = input
        .votes_same
        .add(input.votes_different)
        .add(input.votes_absent)
        .add(input.votes_abstain)
        .strong;

    // Second bound sees the output of the first
    let bounds = [
        (strong_absent > 1.0, &REPEATED_ABSENCE_BOUND),
        (strong_absent >= strong_total / 3.0, &MAJORITY_ABSENCE_BOUND),
    ];
    for (triggered, bound) in bounds {
        if !triggered {
            continue;
        }
        let before = score;
        score = bound.apply(score);
        if score != before {
            adjustments.push(BoundAdjustment {
                label: bound.label.to_string(),
                before,
                after: score,
            });
        }
    }

    ScoreBreakdown {
        strategy,
        points,
        available,
        ratio: Some(ratio),
        score,
        adjustments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringStrategy;

    fn pair(weak: f64, strong: f64) -> WeightedPair {
        WeightedPair::new(weak, strong)
    }

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_public_whip_weak_absences() {
        // Five weak votes: two in line with the policy, three absent
        let input = ScoreInput {
            votes_same: pair(2.0, 0.0),
            votes_absent: pair(3.0, 0.0),
            ..Default::default()
        };
        let breakdown = explain(Strategy::PublicWhip, &input);
        assert_eq!(breakdown.points, 3.0);
        assert_eq!(breakdown.available, 26.0);
        assert!(approx(breakdown.score, 3.0 / 26.0));
        assert_eq!(format!("{:.2}", public_whip_score(&input)), "0.12");
    }

    #[test]
    fn test_public_whip_only_absences_is_sentinel() {
        for absent in [pair(1.0, 0.0), pair(0.0, 1.0), pair(40.0, 12.0)] {
            let input = ScoreInput {
                votes_absent: absent,
                ..Default::default()
            };
            assert_eq!(public_whip_score(&input), NO_COMPARISON);
        }
    }

    #[test]
    fn test_public_whip_only_abstentions_scores() {
        // Abstentions are charged like absences but are not "only absences"
        let input = ScoreInput {
            votes_abstain: pair(1.0, 0.0),
            ..Default::default()
        };
        assert_eq!(public_whip_score(&input), 0.5);
    }

    #[test]
    fn test_public_whip_abstain_matches_absent() {
        let absent = ScoreInput {
            votes_same: pair(2.0, 1.0),
            votes_different: pair(1.0, 0.0),
            votes_absent: pair(3.0, 2.0),
            ..Default::default()
        };
        let abstain = ScoreInput {
            votes_absent: WeightedPair::ZERO,
            votes_abstain: pair(3.0, 2.0),
            ..absent
        };
        assert_eq!(public_whip_score(&absent), public_whip_score(&abstain));
    }

    #[test]
    fn test_public_whip_strong_absence_half_charge() {
        let input = ScoreInput {
            votes_same: pair(0.0, 1.0),
            votes_absent: pair(0.0, 1.0),
            ..Default::default()
        };
        // 25 / (50 + 50)
        assert_eq!(public_whip_score(&input), 0.25);
    }

    #[test]
    fn test_public_whip_extremes() {
        let aligned = ScoreInput {
            votes_same: pair(3.0, 2.0),
            ..Default::default()
        };
        let opposed = ScoreInput {
            votes_different: pair(3.0, 2.0),
            ..Default::default()
        };
        assert_eq!(public_whip_score(&aligned), 0.0);
        assert_eq!(public_whip_score(&opposed), 1.0);
    }

    #[test]
    fn test_public_whip_ignores_agreements() {
        let base = ScoreInput {
            votes_same: pair(1.0, 2.0),
            votes_different: pair(2.0, 1.0),
            ..Default::default()
        };
        let with_agreements = ScoreInput {
            agreements_same: pair(5.0, 5.0),
            agreements_different: pair(0.0, 9.0),
            ..base
        };
        assert_eq!(public_whip_score(&base), public_whip_score(&with_agreements));

        let agreements_only = ScoreInput {
            agreements_different: pair(1.0, 1.0),
            ..Default::default()
        };
        assert_eq!(public_whip_score(&agreements_only), NO_COMPARISON);
    }

    #[test]
    fn test_gradiated_weak_and_strong_weights() {
        let input = ScoreInput {
            votes_same: pair(0.0, 1.0),
            votes_different: pair(1.0, 0.0),
            ..Default::default()
        };
        // 10 / (50 + 10)
        assert!(approx(simplified_gradiated_score(&input), 10.0 / 60.0));
    }

    #[test]
    fn test_gradiated_abstain_half_marks() {
        let input = ScoreInput {
            votes_same: pair(0.0, 1.0),
            votes_abstain: pair(0.0, 1.0),
            ..Default::default()
        };
        // 25 / (50 + 50)
        assert_eq!(simplified_gradiated_score(&input), 0.25);
    }

    #[test]
    fn test_gradiated_agreements_scored_as_votes() {
        let input = ScoreInput {
            votes_same: pair(0.0, 3.0),
            agreements_different: pair(0.0, 1.0),
            ..Default::default()
        };
        let as_votes = ScoreInput {
            votes_same: pair(0.0, 3.0),
            votes_different: pair(0.0, 1.0),
            ..Default::default()
        };
        assert_eq!(simplified_gradiated_score(&input), 0.25);
        assert_eq!(
            simplified_gradiated_score(&input),
            simplified_gradiated_score(&as_votes)
        );
    }

    #[test]
    fn test_gradiated_single_absence_not_bounded() {
        let input = ScoreInput {
            votes_same: pair(0.0, 10.0),
            votes_absent: pair(0.0, 1.0),
            ..Default::default()
        };
        assert_eq!(simplified_gradiated_score(&input), 0.0);
    }

    #[test]
    fn test_gradiated_low_bound() {
        // total = 12, 2 < 12 / 3 so only the first clamp applies
        let input = ScoreInput {
            votes_same: pair(0.0, 10.0),
            votes_absent: pair(0.0, 2.0),
            ..Default::default()
        };
        let breakdown = explain(Strategy::SimplifiedGradiated, &input);
        assert_eq!(breakdown.ratio, Some(0.0));
        assert_eq!(breakdown.score, 0.06);
        assert_eq!(breakdown.adjustments.len(), 1);
        assert_eq!(breakdown.adjustments[0].before, 0.0);
        assert_eq!(breakdown.adjustments[0].after, 0.06);
    }

    #[test]
    fn test_gradiated_wider_bound_reapplied() {
        // total = 6, 2 >= 6 / 3 so both clamps apply in turn
        let input = ScoreInput {
            votes_same: pair(0.0, 4.0),
            votes_absent: pair(0.0, 2.0),
            ..Default::default()
        };
        let breakdown = explain(Strategy::SimplifiedGradiated, &input);
        assert_eq!(breakdown.score, 0.16);
        let steps: Vec<(f64, f64)> = breakdown
            .adjustments
            .iter()
            .map(|a| (a.before, a.after))
            .collect();
        assert_eq!(steps, vec![(0.0, 0.06), (0.06, 0.16)]);
    }

    #[test]
    fn test_gradiated_high_bounds() {
        let mostly_present = ScoreInput {
            votes_different: pair(0.0, 10.0),
            votes_absent: pair(0.0, 2.0),
            ..Default::default()
        };
        assert_eq!(simplified_gradiated_score(&mostly_present), 0.94);

        let mostly_absent = ScoreInput {
            votes_different: pair(0.0, 4.0),
            votes_absent: pair(0.0, 2.0),
            ..Default::default()
        };
        assert_eq!(simplified_gradiated_score(&mostly_absent), 0.84);
    }

    #[test]
    fn test_gradiated_middle_scores_untouched() {
        let input = ScoreInput {
            votes_same: pair(0.0, 2.0),
            votes_different: pair(0.0, 2.0),
            votes_absent: pair(0.0, 4.0),
            ..Default::default()
        };
        let breakdown = explain(Strategy::SimplifiedGradiated, &input);
        assert_eq!(breakdown.score, 0.5);
        assert!(breakdown.adjustments.is_empty());
    }

    #[test]
    fn test_gradiated_absences_alone_is_sentinel() {
        let input = ScoreInput {
            votes_absent: pair(3.0, 7.0),
            ..Default::default()
        };
        assert_eq!(simplified_gradiated_score(&input), NO_COMPARISON);
        assert_eq!(simplified_score(&input), NO_COMPARISON);
    }

    #[test]
    fn test_gradiated_no_strong_votes_uses_wider_bound() {
        // With no strong votes at all, 0 >= 0 / 3 and the wider clamp still fires
        let input = ScoreInput {
            votes_same: pair(3.0, 0.0),
            ..Default::default()
        };
        assert_eq!(simplified_gradiated_score(&input), 0.16);
    }

    #[test]
    fn test_simplified_weak_only_is_sentinel() {
        let input = ScoreInput {
            votes_same: pair(4.0, 0.0),
            votes_different: pair(2.0, 0.0),
            votes_abstain: pair(1.0, 0.0),
            agreements_same: pair(3.0, 0.0),
            agreements_different: pair(1.0, 0.0),
            ..Default::default()
        };
        let breakdown = explain(Strategy::Simplified, &input);
        assert_eq!(breakdown.available, 0.0);
        assert_eq!(breakdown.score, NO_COMPARISON);
        assert_eq!(breakdown.ratio, None);
    }

    #[test]
    fn test_simplified_weak_votes_do_not_move_score() {
        let strong = ScoreInput {
            votes_same: pair(0.0, 3.0),
            votes_different: pair(0.0, 1.0),
            ..Default::default()
        };
        let with_weak = ScoreInput {
            votes_same: pair(7.0, 3.0),
            votes_different: pair(5.0, 1.0),
            ..Default::default()
        };
        assert_eq!(simplified_score(&strong), 0.25);
        assert_eq!(simplified_score(&strong), simplified_score(&with_weak));
    }

    #[test]
    fn test_simplified_shares_bounds() {
        let input = ScoreInput {
            votes_same: pair(0.0, 4.0),
            votes_absent: pair(0.0, 2.0),
            ..Default::default()
        };
        assert_eq!(simplified_score(&input), 0.16);
    }

    #[test]
    fn test_strategies_differ_on_weak_votes() {
        let input = ScoreInput {
            votes_same: pair(0.0, 3.0),
            votes_different: pair(2.0, 1.0),
            ..Default::default()
        };
        // gradiated: 70 / 220, simplified: 10 / 40
        assert!(approx(simplified_gradiated_score(&input), 70.0 / 220.0));
        assert_eq!(simplified_score(&input), 0.25);
    }

    #[test]
    fn test_scores_are_deterministic() {
        let input = ScoreInput {
            votes_same: pair(3.0, 7.0),
            votes_different: pair(1.0, 2.0),
            votes_absent: pair(2.0, 3.0),
            votes_abstain: pair(1.0, 1.0),
            agreements_same: pair(0.0, 2.0),
            agreements_different: pair(1.0, 0.0),
        };
        for strategy in Strategy::ALL {
            let first = strategy.score(&input);
            for _ in 0..10 {
                assert_eq!(strategy.score(&input).to_bits(), first.to_bits());
            }
            assert_eq!(explain(strategy, &input).score.to_bits(), first.to_bits());
        }
    }

    #[test]
    fn test_scores_in_range() {
        let inputs = [
            ScoreInput {
                votes_same: pair(1.0, 1.0),
                votes_different: pair(1.0, 1.0),
                votes_absent: pair(1.0, 1.0),
                votes_abstain: pair(1.0, 1.0),
                agreements_same: pair(1.0, 1.0),
                agreements_different: pair(1.0, 1.0),
            },
            ScoreInput {
                votes_different: pair(9.0, 9.0),
                votes_abstain: pair(4.0, 4.0),
                ..Default::default()
            },
        ];
        for input in &inputs {
            for strategy in Strategy::ALL {
                let score = strategy.score(input);
                assert!((0.0..=1.0).contains(&score), "{} gave {}", strategy, score);
            }
        }
    }
}
