use serde::{Deserialize, Deserializer, Serialize};

use crate::CoreError;

/// Self-reported or inferred purchase intent attached to a lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyingIntent {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for BuyingIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuyingIntent::High => write!(f, "high"),
            BuyingIntent::Medium => write!(f, "medium"),
            BuyingIntent::Low => write!(f, "low"),
            BuyingIntent::Unknown => write!(f, "unknown"),
        }
    }
}

/// Sales priority stored alongside a lead once it has been scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Hot,
    Warm,
    Cold,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Hot => write!(f, "hot"),
            Priority::Warm => write!(f, "warm"),
            Priority::Cold => write!(f, "cold"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Priority::Hot),
            "warm" => Ok(Priority::Warm),
            "cold" => Ok(Priority::Cold),
            _ => Err(CoreError::InvalidPriority(s.to_string())),
        }
    }
}

/// A company/contact profile under evaluation.
///
/// Only `company_name`, `job_title` and `industry` are required. Every other
/// field may be absent, either because nobody entered it or because an
/// upstream enrichment step has not filled it in yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub company_name: String,
    #[serde(default)]
    pub contact_name: Option<String>,
    pub job_title: String,
    /// Bracket label such as `"51-200"` or `"1000+"`.
    #[serde(default)]
    pub company_size: Option<String>,
    /// Raw headcount. Takes precedence over `company_size` when both are set.
    #[serde(default)]
    pub employee_count: Option<u32>,
    pub industry: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tech_stack: Vec<String>,
    /// Free-text funding description, e.g. `"Series C - $50M"`.
    #[serde(default, alias = "fundingStage")]
    pub funding_info: Option<String>,
    #[serde(default)]
    pub recent_activity: Option<String>,
    #[serde(default)]
    pub buying_intent: BuyingIntent,
}

impl Lead {
    /// Number of fields that contribute to data completeness.
    pub const EXPECTED_FIELD_COUNT: usize = 11;

    /// Counts populated fields out of [`Lead::EXPECTED_FIELD_COUNT`].
    ///
    /// Blank strings count as absent. Company size counts once whether it
    /// came from the bracket label or the raw headcount.
    #[must_use]
    pub fn present_field_count(&self) -> usize {
        let text = |s: &str| !s.trim().is_empty();
        let opt = |s: &Option<String>| s.as_deref().is_some_and(text);

        [
            text(&self.company_name),
            opt(&self.contact_name),
            text(&self.job_title),
            opt(&self.company_size) || self.employee_count.is_some(),
            text(&self.industry),
            opt(&self.location),
            opt(&self.website),
            self.tech_stack.iter().any(|t| text(t)),
            opt(&self.funding_info),
            opt(&self.recent_activity),
            self.buying_intent != BuyingIntent::Unknown,
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A stored lead together with the last score a caller persisted for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: i64,
    #[serde(flatten)]
    pub lead: Lead,
    #[serde(default)]
    pub score: Option<u8>,
    #[serde(default)]
    pub priority: Option<Priority>,
}
