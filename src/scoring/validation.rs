use super::pair::WeightedPair;
use super::strategy::ScoreInput;

/// Validate externally supplied counts before scoring.
/// Returns all validation errors at once (not just the first).
///
/// Scoring never fails on bad input, but negative or non-finite counts
/// produce meaningless distances, so callers reading counts from files
/// should check them here first.
pub fn validate_input(input: &ScoreInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let fields = [
        ("votes_same", input.votes_same),
        ("votes_different", input.votes_different),
        ("votes_absent", input.votes_absent),
        ("votes_abstain", input.votes_abstain),
        ("agreements_same", input.agreements_same),
        ("agreements_different", input.agreements_different),
    ];

    for (name, pair) in fields {
        check_pair(name, pair, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_pair(name: &str, pair: WeightedPair, errors: &mut Vec<String>) {
    for (tier, value) in [("weak", pair.weak), ("strong", pair.strong)] {
        if !value.is_finite() {
            errors.push(format!("{}.{}: must be a finite number", name, tier));
        } else if value < 0.0 {
            errors.push(format!("{}.{}: must be non-negative", name, tier));
        }
    }
}
