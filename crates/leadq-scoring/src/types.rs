use std::collections::BTreeMap;

use leadq_core::Priority;
use serde::{Deserialize, Serialize};

use crate::classify::Tier;
use crate::dimension::Dimension;

/// Score, weight and reasoning for one weighted dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    pub score: u8,
    pub weight: f64,
    pub reasoning: String,
}

/// Full evaluation of a single lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// Name of the weighting profile that produced this result.
    pub profile: String,
    pub total_score: u8,
    pub tier: Tier,
    pub priority: Priority,
    pub confidence: u8,
    /// Only the dimensions the profile weights.
    pub breakdown: BTreeMap<Dimension, DimensionBreakdown>,
    pub positive_factors: Vec<String>,
    pub negative_factors: Vec<String>,
    pub neutral_factors: Vec<String>,
    pub recommendations: Vec<String>,
    /// Keyword table the dimension scores were extracted with.
    pub keyword_table_version: String,
}
