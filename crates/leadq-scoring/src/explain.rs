//! Human-readable factors and next-step recommendations for a scored lead.

use leadq_core::{BuyingIntent, Lead};

use crate::classify::Tier;
use crate::dimension::{Dimension, DimensionScores};
use crate::profile::WeightingProfile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Explanation {
    pub positive_factors: Vec<String>,
    pub negative_factors: Vec<String>,
    pub neutral_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum Condition {
    Tier(Tier),
    AtMost(Dimension, u8),
    AtLeast(Dimension, u8),
    ConfidenceBelow(u8),
}

/// Evaluated top to bottom; every matching rule contributes its text once.
const RECOMMENDATION_RULES: &[(Condition, &str)] = &[
    (
        Condition::Tier(Tier::High),
        "Prioritize immediate outreach with executive-level materials",
    ),
    (
        Condition::Tier(Tier::Medium),
        "Schedule a discovery call to qualify budget and timeline",
    ),
    (
        Condition::Tier(Tier::Low),
        "Add to long-term nurture campaign",
    ),
    (
        Condition::AtMost(Dimension::JobTitleAuthority, 50),
        "Identify and engage a senior decision-maker",
    ),
    (
        Condition::AtLeast(Dimension::FundingStage, 80),
        "Reference their recent funding and growth plans in outreach",
    ),
    (
        Condition::AtLeast(Dimension::TechStackModernity, 70),
        "Lead with integrations for their modern tech stack",
    ),
    (
        Condition::AtMost(Dimension::TechStackModernity, 40),
        "Position the product as part of a modernization initiative",
    ),
    (
        Condition::AtLeast(Dimension::EngagementSignals, 80),
        "Follow up quickly while engagement is high",
    ),
    (
        Condition::AtMost(Dimension::EngagementSignals, 40),
        "Share educational content to build engagement",
    ),
    (
        Condition::AtLeast(Dimension::CompanySize, 80),
        "Prepare enterprise security and compliance documentation",
    ),
    (
        Condition::AtMost(Dimension::CompanySize, 40),
        "Offer a starter plan sized for small teams",
    ),
    (
        Condition::AtLeast(Dimension::GrowthIndicators, 70),
        "Emphasize scalability to support their growth",
    ),
    (
        Condition::ConfidenceBelow(50),
        "Enrich missing lead data before investing sales time",
    ),
];

/// Builds factors for every dimension `profile` weights, plus the
/// recommendations whose conditions hold.
#[must_use]
pub fn explain(
    lead: &Lead,
    scores: &DimensionScores,
    profile: &WeightingProfile,
    tier: Tier,
    confidence: u8,
) -> Explanation {
    let thresholds = profile.explanation();
    let mut explanation = Explanation::default();

    for (dimension, _) in profile.weights() {
        let Some(score) = scores.get(dimension) else {
            continue;
        };
        let raw = raw_value(dimension, lead);
        if score >= thresholds.positive {
            explanation
                .positive_factors
                .push(format!("{} ({raw})", strength(dimension)));
        } else if score <= thresholds.negative {
            explanation
                .negative_factors
                .push(format!("{} ({raw})", weakness(dimension)));
        } else {
            explanation
                .neutral_factors
                .push(format!("{} is moderate ({raw})", label(dimension)));
        }
    }

    for (condition, text) in RECOMMENDATION_RULES {
        let applies = match *condition {
            Condition::Tier(wanted) => tier == wanted,
            Condition::AtMost(dimension, max) => profile.includes(dimension)
                && scores.get(dimension).is_some_and(|s| s <= max),
            Condition::AtLeast(dimension, min) => profile.includes(dimension)
                && scores.get(dimension).is_some_and(|s| s >= min),
            Condition::ConfidenceBelow(limit) => confidence < limit,
        };
        if applies && !explanation.recommendations.iter().any(|r| r == text) {
            explanation.recommendations.push((*text).to_string());
        }
    }

    explanation
}

fn label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::CompanySize => "Company size",
        Dimension::IndustryValue => "Industry fit",
        Dimension::JobTitleAuthority => "Decision authority",
        Dimension::FundingStage => "Funding",
        Dimension::TechStackModernity => "Tech stack",
        Dimension::EngagementSignals => "Engagement",
        Dimension::MarketPosition => "Market position",
        Dimension::GrowthIndicators => "Growth",
    }
}

fn strength(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::CompanySize => "Large organization",
        Dimension::IndustryValue => "High-value industry",
        Dimension::JobTitleAuthority => "Senior decision-maker",
        Dimension::FundingStage => "Well funded",
        Dimension::TechStackModernity => "Modern tech stack",
        Dimension::EngagementSignals => "Strong engagement",
        Dimension::MarketPosition => "Established market presence",
        Dimension::GrowthIndicators => "Strong growth signals",
    }
}

fn weakness(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::CompanySize => "Small organization",
        Dimension::IndustryValue => "Lower-value industry",
        Dimension::JobTitleAuthority => "Limited decision authority",
        Dimension::FundingStage => "Early or limited funding",
        Dimension::TechStackModernity => "Legacy tech stack",
        Dimension::EngagementSignals => "Weak engagement",
        Dimension::MarketPosition => "Weak market presence",
        Dimension::GrowthIndicators => "Contraction signals",
    }
}

/// The lead value a factor is about, quoted back to the reader.
fn raw_value(dimension: Dimension, lead: &Lead) -> String {
    let or_unknown = |value: Option<&str>, missing: &str| {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(|| missing.to_string(), str::to_string)
    };

    match dimension {
        Dimension::CompanySize => match lead.employee_count {
            Some(count) => format!("{count} employees"),
            None => lead.company_size.as_deref().map_or_else(
                || "size unknown".to_string(),
                |label| format!("{} employees", label.trim()),
            ),
        },
        Dimension::IndustryValue => or_unknown(Some(lead.industry.as_str()), "industry unknown"),
        Dimension::JobTitleAuthority => or_unknown(Some(lead.job_title.as_str()), "title unknown"),
        Dimension::FundingStage => {
            or_unknown(lead.funding_info.as_deref(), "no funding information")
        }
        Dimension::TechStackModernity => {
            let stack: Vec<&str> = lead
                .tech_stack
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect();
            if stack.is_empty() {
                "no tech stack listed".to_string()
            } else {
                stack.join(", ")
            }
        }
        Dimension::EngagementSignals => {
            let activity = lead
                .recent_activity
                .as_deref()
                .map(str::trim)
                .filter(|a| !a.is_empty());
            match (lead.buying_intent, activity) {
                (BuyingIntent::Unknown, None) => "no engagement recorded".to_string(),
                (BuyingIntent::Unknown, Some(activity)) => activity.to_string(),
                (intent, None) => format!("{intent} buying intent"),
                (intent, Some(activity)) => format!("{intent} buying intent; {activity}"),
            }
        }
        Dimension::MarketPosition => {
            or_unknown(Some(lead.company_name.as_str()), "company unknown")
        }
        Dimension::GrowthIndicators => {
            or_unknown(lead.recent_activity.as_deref(), "no recent activity")
        }
    }
}
