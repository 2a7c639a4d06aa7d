use leadq_core::Lead;

use crate::dimension::DimensionScores;
use crate::profile::WeightingProfile;

/// Divides score variance into a confidence penalty.
pub const VARIANCE_DIVISOR: f64 = 20.0;
/// Largest penalty score disagreement can impose.
pub const VARIANCE_PENALTY_CAP: f64 = 25.0;
pub const CONFIDENCE_FLOOR: f64 = 30.0;
/// Upper bound on confidence for a lead carrying only its required fields.
pub const MISSING_DATA_CEILING: u8 = 50;

/// How far the total score can be trusted, in `[0, 100]`.
///
/// Starts from data completeness (`present_fields` out of
/// [`Lead::EXPECTED_FIELD_COUNT`]) and subtracts a capped penalty for
/// disagreement between the profile's dimension scores.
#[must_use]
pub fn estimate_confidence(
    present_fields: usize,
    scores: &DimensionScores,
    profile: &WeightingProfile,
) -> u8 {
    let completeness = as_f64(present_fields) / as_f64(Lead::EXPECTED_FIELD_COUNT) * 100.0;
    let penalty = (variance(scores, profile) / VARIANCE_DIVISOR).min(VARIANCE_PENALTY_CAP);
    to_confidence(completeness - penalty)
}

/// Population variance of the scores for the dimensions `profile` weights.
fn variance(scores: &DimensionScores, profile: &WeightingProfile) -> f64 {
    let values: Vec<f64> = profile
        .weights()
        .filter_map(|(dimension, _)| scores.get(dimension))
        .map(f64::from)
        .collect();
    if values.is_empty() {
        return 0.0;
    }
    let n = as_f64(values.len());
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

// Field and dimension counts are tiny; precision loss is impossible.
#[allow(clippy::cast_precision_loss)]
fn as_f64(count: usize) -> f64 {
    count as f64
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_confidence(value: f64) -> u8 {
    value.clamp(CONFIDENCE_FLOOR, 100.0).round() as u8
}
