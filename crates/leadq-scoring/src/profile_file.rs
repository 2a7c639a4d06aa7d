//! YAML profile files.
//!
//! ```yaml
//! profiles:
//!   - name: enterprise
//!     strategy: linear        # or logistic
//!     scale: points           # or fraction (default)
//!     weights:
//!       companySize: 40
//!       job_title_authority: 35
//!       fundingStage: 25
//!     thresholds: { high: 75, medium: 55 }
//! ```
//!
//! Every entry is validated when the file is loaded. A file profile whose
//! name matches a built-in replaces the built-in.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::dimension::Dimension;
use crate::error::ConfigurationError;
use crate::profile::{
    builtin, CombinationStrategy, ExplanationThresholds, TierThresholds, WeightingProfile,
    DEFAULT_LOGISTIC_BIAS, DEFAULT_LOGISTIC_GAIN,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum StrategyKind {
    #[default]
    Linear,
    Logistic,
}

/// Unit the weights in a file entry are written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum WeightScale {
    /// Weights sum to 1.0.
    #[default]
    Fraction,
    /// Per-dimension point caps summing to 100.
    Points,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileEntry {
    name: String,
    #[serde(default)]
    strategy: StrategyKind,
    #[serde(default)]
    scale: WeightScale,
    weights: BTreeMap<String, f64>,
    thresholds: Option<TierThresholds>,
    explanation: Option<ExplanationThresholds>,
    gain: Option<f64>,
    bias: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfilesFile {
    profiles: Vec<ProfileEntry>,
}

/// Load and validate every profile in a YAML file.
///
/// # Errors
///
/// Returns [`ConfigurationError`] if the file cannot be read or parsed, or
/// any entry fails validation.
pub fn load_profiles(path: &Path) -> Result<Vec<WeightingProfile>, ConfigurationError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigurationError::ProfilesFileIo {
            path: path.display().to_string(),
            source: e,
        })?;

    let profiles = parse_profiles(&content)?;
    tracing::info!(
        path = %path.display(),
        count = profiles.len(),
        "loaded weighting profiles"
    );
    Ok(profiles)
}

/// Parse and validate profiles from YAML text.
///
/// # Errors
///
/// Returns [`ConfigurationError`] on malformed YAML, unknown or repeated
/// dimension keys, duplicate profile names, or any
/// [`WeightingProfile::new`] validation failure.
pub fn parse_profiles(yaml: &str) -> Result<Vec<WeightingProfile>, ConfigurationError> {
    let file: ProfilesFile = serde_yaml::from_str(yaml)?;

    let mut seen_names = HashSet::new();
    let mut profiles = Vec::with_capacity(file.profiles.len());
    for entry in file.profiles {
        if !seen_names.insert(entry.name.trim().to_lowercase()) {
            return Err(ConfigurationError::DuplicateProfile(entry.name));
        }
        profiles.push(build_profile(entry)?);
    }
    Ok(profiles)
}

fn build_profile(entry: ProfileEntry) -> Result<WeightingProfile, ConfigurationError> {
    let name = entry.name.trim().to_string();
    if name.is_empty() {
        return Err(ConfigurationError::EmptyName);
    }

    let divisor = match entry.scale {
        WeightScale::Fraction => 1.0,
        WeightScale::Points => 100.0,
    };

    let mut weights: BTreeMap<Dimension, f64> = BTreeMap::new();
    for (key, weight) in &entry.weights {
        let dimension =
            Dimension::from_key(key).ok_or_else(|| ConfigurationError::UnknownDimension {
                profile: name.clone(),
                key: key.clone(),
            })?;
        if weights.insert(dimension, weight / divisor).is_some() {
            return Err(ConfigurationError::DuplicateDimension {
                profile: name,
                dimension,
            });
        }
    }

    let strategy = match entry.strategy {
        StrategyKind::Linear => {
            if entry.gain.is_some() || entry.bias.is_some() {
                tracing::warn!(profile = %name, "gain and bias are ignored for linear profiles");
            }
            CombinationStrategy::Linear
        }
        StrategyKind::Logistic => CombinationStrategy::Logistic {
            gain: entry.gain.unwrap_or(DEFAULT_LOGISTIC_GAIN),
            bias: entry.bias.unwrap_or(DEFAULT_LOGISTIC_BIAS),
        },
    };

    let mut profile = WeightingProfile::new(name, strategy, weights)?;
    if let Some(thresholds) = entry.thresholds {
        profile = profile.with_thresholds(thresholds)?;
    }
    if let Some(explanation) = entry.explanation {
        profile = profile.with_explanation(explanation)?;
    }
    Ok(profile)
}

/// Find `name` in the profiles file if one is given, else among built-ins.
///
/// # Errors
///
/// Returns [`ConfigurationError::UnknownProfile`] if neither source defines
/// `name`, or any error from [`load_profiles`].
pub fn resolve_profile(
    name: &str,
    profiles_path: Option<&Path>,
) -> Result<WeightingProfile, ConfigurationError> {
    if let Some(path) = profiles_path {
        let wanted = name.trim().to_lowercase();
        if let Some(profile) = load_profiles(path)?
            .into_iter()
            .find(|p| p.name().to_lowercase() == wanted)
        {
            return Ok(profile);
        }
    }
    builtin(name.trim())
}
