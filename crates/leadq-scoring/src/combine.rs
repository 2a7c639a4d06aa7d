use crate::dimension::DimensionScores;
use crate::profile::{CombinationStrategy, WeightingProfile};

/// Folds per-dimension scores into a total in `[0, 100]`.
///
/// Dimensions the profile weights but `scores` lacks contribute nothing;
/// dimensions outside the profile are ignored.
#[must_use]
pub fn combine(scores: &DimensionScores, profile: &WeightingProfile) -> u8 {
    let weighted_sum: f64 = profile
        .weights()
        .filter_map(|(dimension, weight)| {
            scores
                .get(dimension)
                .map(|score| f64::from(score) * weight)
        })
        .sum();

    let total = match profile.strategy() {
        CombinationStrategy::Linear => weighted_sum,
        CombinationStrategy::Logistic { gain, bias } => {
            100.0 * sigmoid(gain * (weighted_sum / 100.0) + bias)
        }
    };
    to_score(total)
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

// Clamped to [0, 100] first, so the cast cannot truncate or lose sign.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::profile::{builtin, LOGISTIC, RULE_BASED};

    fn uniform(score: u8) -> DimensionScores {
        Dimension::ALL.into_iter().map(|d| (d, score)).collect()
    }

    #[test]
    fn linear_is_weighted_sum() {
        let profile = builtin(RULE_BASED).unwrap();
        let scores: DimensionScores = [
            (Dimension::CompanySize, 100),
            (Dimension::IndustryValue, 100),
            (Dimension::JobTitleAuthority, 100),
            (Dimension::FundingStage, 90),
        ]
        .into_iter()
        .collect();
        assert_eq!(combine(&scores, &profile), 98);
    }

    #[test]
    fn linear_ignores_unweighted_dimensions() {
        let profile = builtin(RULE_BASED).unwrap();
        let mut scores = uniform(60);
        scores.set(Dimension::TechStackModernity, 0);
        scores.set(Dimension::GrowthIndicators, 100);
        assert_eq!(combine(&scores, &profile), 60);
    }

    #[test]
    fn linear_bounds() {
        let profile = builtin(RULE_BASED).unwrap();
        assert_eq!(combine(&uniform(0), &profile), 0);
        assert_eq!(combine(&uniform(100), &profile), 100);
    }

    #[test]
    fn logistic_midpoint_is_fifty() {
        let profile = builtin(LOGISTIC).unwrap();
        // gain 10 * 0.5 - 5 = 0
        assert_eq!(combine(&uniform(50), &profile), 50);
    }

    #[test]
    fn logistic_saturates_towards_extremes() {
        let profile = builtin(LOGISTIC).unwrap();
        // sigmoid(5) = 0.9933, sigmoid(-5) = 0.0067
        assert_eq!(combine(&uniform(100), &profile), 99);
        assert_eq!(combine(&uniform(0), &profile), 1);
    }

    #[test]
    fn logistic_is_monotonic() {
        let profile = builtin(LOGISTIC).unwrap();
        let mut previous = 0;
        for score in (0..=100).step_by(5) {
            let total = combine(&uniform(score), &profile);
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn nan_maps_to_zero() {
        assert_eq!(to_score(f64::NAN), 0);
        assert_eq!(to_score(150.0), 100);
        assert_eq!(to_score(-3.0), 0);
    }
}
