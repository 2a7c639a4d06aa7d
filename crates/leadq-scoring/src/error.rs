use thiserror::Error;

use crate::dimension::Dimension;

/// An invalid weighting profile or profile file.
///
/// Raised only while profiles are constructed or loaded, never while a lead
/// is being scored.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("profile '{profile}' has no weighted dimensions")]
    EmptyProfile { profile: String },

    #[error("profile '{profile}' weights sum to {sum:.6}, expected 1.0")]
    WeightSum { profile: String, sum: f64 },

    #[error("profile '{profile}' has negative weight {weight} for {dimension}")]
    NegativeWeight {
        profile: String,
        dimension: Dimension,
        weight: f64,
    },

    #[error("profile '{profile}' has non-finite value for {field}")]
    NonFinite { profile: String, field: String },

    #[error("profile '{profile}' has unknown dimension key '{key}'")]
    UnknownDimension { profile: String, key: String },

    #[error("profile '{profile}' lists {dimension} more than once")]
    DuplicateDimension {
        profile: String,
        dimension: Dimension,
    },

    #[error("profile '{profile}' has invalid thresholds: {reason}")]
    InvalidThresholds { profile: String, reason: String },

    #[error("profile name must be non-empty")]
    EmptyName,

    #[error("duplicate profile name: '{0}'")]
    DuplicateProfile(String),

    #[error("unknown profile '{0}'")]
    UnknownProfile(String),

    #[error("failed to read profiles file {path}: {source}")]
    ProfilesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profiles file: {0}")]
    ProfilesFileParse(#[from] serde_yaml::Error),
}

/// A lead field that was present but could not be interpreted.
///
/// Always resolved by substituting the dimension's neutral default; logged,
/// never returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionWarning {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

impl std::fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.field, self.value, self.reason)
    }
}
