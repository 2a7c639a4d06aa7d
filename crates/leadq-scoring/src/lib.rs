//! Lead quality scoring and qualification.
//!
//! A [`LeadScorer`] runs a fixed pipeline over one [`leadq_core::Lead`]:
//! feature extraction, score combination under a [`WeightingProfile`],
//! confidence estimation, tier classification and explanation. The pipeline
//! is pure; it performs no I/O and never fails once a profile is built.

pub mod classify;
pub mod combine;
pub mod confidence;
pub mod dimension;
pub mod engine;
pub mod error;
pub mod explain;
pub mod extract;
pub mod keywords;
pub mod profile;
pub mod profile_file;
pub mod types;

pub use classify::{classify, Tier};
pub use combine::combine;
pub use confidence::{estimate_confidence, MISSING_DATA_CEILING};
pub use dimension::{Dimension, DimensionScores};
pub use engine::LeadScorer;
pub use error::{ConfigurationError, ExtractionWarning};
pub use explain::{explain, Explanation};
pub use extract::{extract_features, Extraction};
pub use keywords::KEYWORD_TABLE_VERSION;
pub use profile::{
    builtin, builtin_profiles, CombinationStrategy, ExplanationThresholds, TierThresholds,
    WeightingProfile, ADVANCED, BUILTIN_PROFILE_NAMES, LOGISTIC, RULE_BASED,
};
pub use profile_file::{load_profiles, parse_profiles, resolve_profile};
pub use types::{DimensionBreakdown, ScoringResult};
