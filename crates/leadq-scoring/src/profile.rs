//! Weighting profiles: which dimensions count, how much, and how their
//! weighted scores become a total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::ConfigurationError;

/// Allowed distance of a profile's weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

pub const DEFAULT_LOGISTIC_GAIN: f64 = 10.0;
pub const DEFAULT_LOGISTIC_BIAS: f64 = -5.0;

/// How weighted dimension scores are folded into a total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CombinationStrategy {
    Linear,
    /// `sigmoid(gain * sum(weight * score / 100) + bias)`, scaled to 0-100.
    Logistic { gain: f64, bias: f64 },
}

impl CombinationStrategy {
    #[must_use]
    pub fn logistic() -> Self {
        CombinationStrategy::Logistic {
            gain: DEFAULT_LOGISTIC_GAIN,
            bias: DEFAULT_LOGISTIC_BIAS,
        }
    }
}

impl std::fmt::Display for CombinationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CombinationStrategy::Linear => write!(f, "linear"),
            CombinationStrategy::Logistic { gain, bias } => {
                write!(f, "logistic(gain={gain}, bias={bias})")
            }
        }
    }
}

/// Inclusive lower bounds of the High and Medium tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierThresholds {
    pub high: u8,
    pub medium: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            high: 80,
            medium: 60,
        }
    }
}

/// Dimension scores at or above `positive` are strengths; at or below
/// `negative` they are weaknesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplanationThresholds {
    pub positive: u8,
    pub negative: u8,
}

impl Default for ExplanationThresholds {
    fn default() -> Self {
        Self {
            positive: 80,
            negative: 40,
        }
    }
}

/// A validated, immutable scoring configuration.
///
/// The only way to build one is [`WeightingProfile::new`] (or the
/// `with_*` builders, which re-validate), so every instance in circulation
/// satisfies the weight and threshold invariants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightingProfile {
    name: String,
    strategy: CombinationStrategy,
    weights: BTreeMap<Dimension, f64>,
    thresholds: TierThresholds,
    explanation: ExplanationThresholds,
}

impl WeightingProfile {
    /// Builds a profile with default tier and explanation thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the name is blank, there are no
    /// weights, any weight is negative or non-finite, the weights do not sum
    /// to 1.0 within [`WEIGHT_SUM_TOLERANCE`], or logistic parameters are
    /// non-finite.
    pub fn new(
        name: impl Into<String>,
        strategy: CombinationStrategy,
        weights: impl IntoIterator<Item = (Dimension, f64)>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigurationError::EmptyName);
        }

        let mut map = BTreeMap::new();
        for (dimension, weight) in weights {
            if map.insert(dimension, weight).is_some() {
                return Err(ConfigurationError::DuplicateDimension {
                    profile: name,
                    dimension,
                });
            }
        }

        let profile = Self {
            name,
            strategy,
            weights: map,
            thresholds: TierThresholds::default(),
            explanation: ExplanationThresholds::default(),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Replaces the tier thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidThresholds`] unless
    /// `medium < high <= 100`.
    pub fn with_thresholds(
        mut self,
        thresholds: TierThresholds,
    ) -> Result<Self, ConfigurationError> {
        self.thresholds = thresholds;
        self.validate()?;
        Ok(self)
    }

    /// Replaces the explanation thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidThresholds`] unless
    /// `negative < positive <= 100`.
    pub fn with_explanation(
        mut self,
        explanation: ExplanationThresholds,
    ) -> Result<Self, ConfigurationError> {
        self.explanation = explanation;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let profile = || self.name.clone();

        if self.weights.is_empty() {
            return Err(ConfigurationError::EmptyProfile { profile: profile() });
        }

        for (&dimension, &weight) in &self.weights {
            if !weight.is_finite() {
                return Err(ConfigurationError::NonFinite {
                    profile: profile(),
                    field: format!("weights.{dimension}"),
                });
            }
            if weight < 0.0 {
                return Err(ConfigurationError::NegativeWeight {
                    profile: profile(),
                    dimension,
                    weight,
                });
            }
        }

        let sum: f64 = self.weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigurationError::WeightSum {
                profile: profile(),
                sum,
            });
        }

        if let CombinationStrategy::Logistic { gain, bias } = self.strategy {
            for (field, value) in [("gain", gain), ("bias", bias)] {
                if !value.is_finite() {
                    return Err(ConfigurationError::NonFinite {
                        profile: profile(),
                        field: field.to_string(),
                    });
                }
            }
        }

        let TierThresholds { high, medium } = self.thresholds;
        if high > 100 || medium >= high {
            return Err(ConfigurationError::InvalidThresholds {
                profile: profile(),
                reason: format!("tiers need medium < high <= 100, got medium={medium} high={high}"),
            });
        }

        let ExplanationThresholds { positive, negative } = self.explanation;
        if positive > 100 || negative >= positive {
            return Err(ConfigurationError::InvalidThresholds {
                profile: profile(),
                reason: format!(
                    "factors need negative < positive <= 100, got negative={negative} positive={positive}"
                ),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn strategy(&self) -> CombinationStrategy {
        self.strategy
    }

    #[must_use]
    pub fn thresholds(&self) -> TierThresholds {
        self.thresholds
    }

    #[must_use]
    pub fn explanation(&self) -> ExplanationThresholds {
        self.explanation
    }

    /// Weight of `dimension`, or `None` if the profile ignores it.
    #[must_use]
    pub fn weight(&self, dimension: Dimension) -> Option<f64> {
        self.weights.get(&dimension).copied()
    }

    #[must_use]
    pub fn includes(&self, dimension: Dimension) -> bool {
        self.weights.contains_key(&dimension)
    }

    /// Weighted dimensions in [`Dimension`] order.
    pub fn weights(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.weights.iter().map(|(d, w)| (*d, *w))
    }
}

// ---------------------------------------------------------------------------
// Built-in profiles
// ---------------------------------------------------------------------------

pub const RULE_BASED: &str = "rule_based";
pub const ADVANCED: &str = "advanced";
pub const LOGISTIC: &str = "logistic";

const RULE_BASED_WEIGHTS: &[(Dimension, f64)] = &[
    (Dimension::CompanySize, 0.25),
    (Dimension::IndustryValue, 0.25),
    (Dimension::JobTitleAuthority, 0.25),
    (Dimension::FundingStage, 0.25),
];

const ADVANCED_WEIGHTS: &[(Dimension, f64)] = &[
    (Dimension::CompanySize, 0.15),
    (Dimension::IndustryValue, 0.15),
    (Dimension::JobTitleAuthority, 0.20),
    (Dimension::FundingStage, 0.10),
    (Dimension::TechStackModernity, 0.10),
    (Dimension::EngagementSignals, 0.15),
    (Dimension::MarketPosition, 0.05),
    (Dimension::GrowthIndicators, 0.10),
];

const LOGISTIC_WEIGHTS: &[(Dimension, f64)] = &[
    (Dimension::CompanySize, 0.20),
    (Dimension::IndustryValue, 0.15),
    (Dimension::JobTitleAuthority, 0.25),
    (Dimension::FundingStage, 0.15),
    (Dimension::TechStackModernity, 0.10),
    (Dimension::EngagementSignals, 0.15),
];

/// Names of the profiles compiled into the engine.
pub const BUILTIN_PROFILE_NAMES: [&str; 3] = [RULE_BASED, ADVANCED, LOGISTIC];

/// Looks up a built-in profile by name.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownProfile`] for any other name.
pub fn builtin(name: &str) -> Result<WeightingProfile, ConfigurationError> {
    let (strategy, weights) = match name {
        RULE_BASED => (CombinationStrategy::Linear, RULE_BASED_WEIGHTS),
        ADVANCED => (CombinationStrategy::Linear, ADVANCED_WEIGHTS),
        LOGISTIC => (CombinationStrategy::logistic(), LOGISTIC_WEIGHTS),
        other => return Err(ConfigurationError::UnknownProfile(other.to_string())),
    };
    WeightingProfile::new(name, strategy, weights.iter().copied())
}

/// Every built-in profile, in [`BUILTIN_PROFILE_NAMES`] order.
///
/// # Errors
///
/// Propagates a validation failure in a built-in table.
pub fn builtin_profiles() -> Result<Vec<WeightingProfile>, ConfigurationError> {
    BUILTIN_PROFILE_NAMES.into_iter().map(builtin).collect()
}
