use std::collections::BTreeMap;

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::ModelError;

/// Calculate the probability of a team scoring above each of its historical
/// score lines.
///
/// Models the team's scoring as normally distributed around `mean` with
/// spread `std_dev` and evaluates `P(score > line)` for every distinct line
/// in the sample. Duplicate lines collapse to a single key on purpose: a
/// line's exceedance probability does not depend on how often it was
/// observed. Results stay as fractions in [0, 1] so they compose
/// multiplicatively downstream.
///
/// # Arguments
/// * `mean` - The team's average points scored
/// * `lines` - Score lines to evaluate (the team's own recent scores)
/// * `std_dev` - Pooled standard deviation, must be positive
///
/// # Returns
/// Map from line to `P(score > line)`, keyed in ascending order.
pub fn line_probabilities(
    mean: f64,
    lines: &[i64],
    std_dev: f64,
) -> Result<BTreeMap<i64, f64>, ModelError> {
    if std_dev <= 0.0 {
        return Err(ModelError::ZeroSpread);
    }

    let normal = Normal::new(0.0, 1.0).unwrap();

    let mut probabilities = BTreeMap::new();
    for &line in lines {
        let z = (line as f64 - mean) / std_dev;
        probabilities.insert(line, 1.0 - normal.cdf(z));
    }

    Ok(probabilities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_probabilities_within_unit_interval() {
        let probs = line_probabilities(12.0, &[2, 8, 12, 19, 40], 3.5).unwrap();
        for (_, p) in probs {
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_line_at_the_mean_is_a_coin_flip() {
        let probs = line_probabilities(12.0, &[12], 3.0).unwrap();
        assert_relative_eq!(probs[&12], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_higher_lines_are_harder_to_clear() {
        let probs = line_probabilities(12.0, &[8, 12, 16], 3.0).unwrap();
        assert!(probs[&8] > probs[&12]);
        assert!(probs[&12] > probs[&16]);
    }

    #[test]
    fn test_duplicate_lines_collapse() {
        let probs = line_probabilities(12.0, &[10, 14, 14], 2.5).unwrap();
        assert_eq!(probs.len(), 2);
        assert!(probs.contains_key(&10));
        assert!(probs.contains_key(&14));
    }

    #[test]
    fn test_zero_spread_is_rejected() {
        assert_eq!(
            line_probabilities(10.0, &[10], 0.0),
            Err(ModelError::ZeroSpread)
        );
    }
}
