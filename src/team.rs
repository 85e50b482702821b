use crate::error::ModelError;

/// Summary of a team's recent scoring form.
///
/// `std_dev` is the population standard deviation of the team's own scores
/// concatenated with the points conceded to its opponents, never of the
/// scores alone. The probability model downstream requires it to be positive.
#[derive(Clone, Debug, PartialEq)]
pub struct TeamStats {
    /// Average points scored in recent games
    pub mean: f64,

    /// Average points conceded in recent games
    pub opponent_mean: f64,

    /// Population standard deviation of scored and conceded combined
    pub std_dev: f64,
}

/// Reduce a team's recent scores and points conceded to summary statistics.
///
/// # Arguments
/// * `scored` - Points the team scored in its recent games
/// * `conceded` - Points opponents scored against it over the same games
///
/// # Returns
/// `TeamStats`, or an insufficient-data error if either sample is empty.
pub fn summarize(scored: &[i64], conceded: &[i64]) -> Result<TeamStats, ModelError> {
    if scored.is_empty() {
        return Err(ModelError::EmptySample { which: "scored" });
    }
    if conceded.is_empty() {
        return Err(ModelError::EmptySample { which: "conceded" });
    }

    let n = (scored.len() + conceded.len()) as f64;
    let pooled_mean = (scored.iter().sum::<i64>() + conceded.iter().sum::<i64>()) as f64 / n;
    let squared_deviations: f64 = scored
        .iter()
        .chain(conceded.iter())
        .map(|&points| {
            let deviation = points as f64 - pooled_mean;
            deviation * deviation
        })
        .sum();

    Ok(TeamStats {
        mean: mean(scored),
        opponent_mean: mean(conceded),
        std_dev: (squared_deviations / n).sqrt(),
    })
}

fn mean(values: &[i64]) -> f64 {
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_means_cover_both_samples() {
        let stats = summarize(&[10, 14, 14], &[7, 9, 11]).unwrap();
        assert_relative_eq!(stats.mean, 38.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(stats.opponent_mean, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_std_dev_is_pooled_and_population() {
        let stats = summarize(&[10, 14, 14], &[7, 9, 11]).unwrap();
        // Pooled sample [10, 14, 14, 7, 9, 11], mean 65/6, variance 1398/216.
        assert_relative_eq!(stats.std_dev, (1398.0_f64 / 216.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_constant_pooled_sample_has_zero_spread() {
        let stats = summarize(&[10], &[10]).unwrap();
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_empty_samples_fail_fast() {
        assert_eq!(
            summarize(&[], &[7, 9]),
            Err(ModelError::EmptySample { which: "scored" })
        );
        assert_eq!(
            summarize(&[10, 14], &[]),
            Err(ModelError::EmptySample { which: "conceded" })
        );
    }
}
