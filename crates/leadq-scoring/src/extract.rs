//! Feature extraction: raw [`Lead`] fields to per-dimension scores.
//!
//! Extraction never fails. Absent fields get the dimension's documented
//! neutral default, and present-but-unreadable fields additionally produce an
//! [`ExtractionWarning`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use leadq_core::{BuyingIntent, Lead};
use regex::Regex;

use crate::dimension::{Dimension, DimensionScores};
use crate::error::ExtractionWarning;
use crate::keywords::{
    is_large_company, match_terms, tech_entry_matches, BLOG_DOMAIN_PENALTY, BLOG_PLATFORMS,
    COMPANY_SIZE_BRACKETS, DEFAULT_INDUSTRY_SCORE, DEFAULT_TITLE_SCORE, EMPLOYEE_COUNT_LADDER,
    ENGAGEMENT_ACTIVITY, ENGAGEMENT_AGREEMENT_BONUS, ENGAGEMENT_AGREEMENT_FLOOR,
    ENTERPRISE_HEADCOUNT, ENTERPRISE_HEADCOUNT_BOOST, FUNDING_AMOUNT_LADDER, FUNDING_GROWTH_BOOST,
    FUNDING_MENTIONS, FUNDING_STAGES, GROWTH_BASE_SCORE, GROWTH_SIGNALS, INDUSTRY_RANKS,
    INTENT_HIGH, INTENT_LOW, INTENT_MEDIUM, JOB_TITLE_AUTHORITY, LEGACY_TECH, LEGACY_TECH_PENALTY,
    MARKET_BASE_SCORE, MODERN_TECH, MODERN_TECH_BONUS, NEUTRAL_SCORE, PROFESSIONAL_DOMAIN_BOOST,
    PUBLIC_MARKERS, RECOGNIZED_COMPANY_BOOST, SUPPORT_ROLES, TECH_BASE_SCORE,
};

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?P<cur>[$€£]|\busd\b|\beur\b|\bgbp\b)?\s*(?P<num>\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)\s*(?P<suf>thousand|million|billion|bn|mm|k|m|b)?\b",
    )
    .expect("valid funding amount regex")
});

/// Everything the later pipeline stages need from a lead.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub scores: DimensionScores,
    /// Short explanation of how each dimension score was reached.
    pub reasoning: BTreeMap<Dimension, String>,
    /// Populated fields out of [`Lead::EXPECTED_FIELD_COUNT`].
    pub present_fields: usize,
    pub warnings: Vec<ExtractionWarning>,
}

struct Feature {
    score: u8,
    reasoning: String,
}

impl Feature {
    fn new(score: u8, reasoning: impl Into<String>) -> Self {
        Self {
            score,
            reasoning: reasoning.into(),
        }
    }
}

/// What could be read from the free-text funding description.
#[derive(Debug)]
struct FundingRead {
    stage: Option<(&'static str, u8)>,
    amount: Option<f64>,
    public: bool,
}

impl FundingRead {
    fn is_funding_round(&self) -> bool {
        self.amount.is_some()
            || self.stage.is_some_and(|(stage, _)| {
                stage.starts_with("series")
                    || matches!(stage, "seed" | "pre seed" | "preseed" | "angel")
            })
    }
}

/// Scores every [`Dimension`] for `lead`.
#[must_use]
pub fn extract_features(lead: &Lead) -> Extraction {
    let mut warnings = Vec::new();
    let funding = non_blank(lead.funding_info.as_deref()).map(read_funding);

    let features = [
        (Dimension::CompanySize, company_size(lead, &mut warnings)),
        (Dimension::IndustryValue, industry_value(&lead.industry)),
        (
            Dimension::JobTitleAuthority,
            job_title_authority(&lead.job_title),
        ),
        (
            Dimension::FundingStage,
            funding_stage(lead.funding_info.as_deref(), funding.as_ref(), &mut warnings),
        ),
        (
            Dimension::TechStackModernity,
            tech_stack_modernity(&lead.tech_stack),
        ),
        (
            Dimension::EngagementSignals,
            engagement_signals(lead.buying_intent, lead.recent_activity.as_deref()),
        ),
        (
            Dimension::MarketPosition,
            market_position(lead, funding.as_ref(), &mut warnings),
        ),
        (
            Dimension::GrowthIndicators,
            growth_indicators(lead.recent_activity.as_deref(), funding.as_ref()),
        ),
    ];

    let mut scores = DimensionScores::default();
    let mut reasoning = BTreeMap::new();
    for (dimension, feature) in features {
        scores.set(dimension, feature.score);
        reasoning.insert(dimension, feature.reasoning);
    }

    Extraction {
        scores,
        reasoning,
        present_fields: lead.present_field_count(),
        warnings,
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn clamp_score(value: i32) -> u8 {
    u8::try_from(value.clamp(0, 100)).unwrap_or(100)
}

fn headcount_score(count: u32) -> u8 {
    EMPLOYEE_COUNT_LADDER
        .iter()
        .find(|(min, _)| count >= *min)
        .map_or(NEUTRAL_SCORE, |(_, score)| *score)
}

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

fn company_size(lead: &Lead, warnings: &mut Vec<ExtractionWarning>) -> Feature {
    if let Some(count) = lead.employee_count {
        return Feature::new(headcount_score(count), format!("{count} employees"));
    }

    let Some(label) = non_blank(lead.company_size.as_deref()) else {
        return Feature::new(NEUTRAL_SCORE, "company size not provided; neutral default");
    };

    let normalized: String = label
        .to_lowercase()
        .replace(['\u{2013}', '\u{2014}'], "-")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let normalized = normalized.trim_end_matches("employees");

    if let Some((bracket, score)) = COMPANY_SIZE_BRACKETS
        .iter()
        .find(|(bracket, _)| *bracket == normalized)
    {
        return Feature::new(*score, format!("{bracket} employee bracket"));
    }

    let digits: String = normalized
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if let Ok(count) = digits.parse::<u32>() {
        return Feature::new(
            headcount_score(count),
            format!("size label '{label}' read as {count} employees"),
        );
    }

    warnings.push(ExtractionWarning {
        field: "companySize",
        value: label.to_string(),
        reason: "not a recognized size bracket".to_string(),
    });
    Feature::new(
        NEUTRAL_SCORE,
        format!("unrecognized size label '{label}'; neutral default"),
    )
}

fn industry_value(industry: &str) -> Feature {
    let industry = industry.trim();
    if industry.is_empty() {
        return Feature::new(
            DEFAULT_INDUSTRY_SCORE,
            "industry not provided; neutral default",
        );
    }

    let lower = industry.to_lowercase();
    let best = INDUSTRY_RANKS
        .iter()
        .filter(|(term, _)| lower.contains(term))
        .fold(None, |best: Option<&(&str, u8)>, entry| match best {
            Some(current) if current.1 >= entry.1 => Some(current),
            _ => Some(entry),
        });

    match best {
        Some((term, score)) => {
            Feature::new(*score, format!("industry '{industry}' ranked as {term}"))
        }
        None => Feature::new(
            DEFAULT_INDUSTRY_SCORE,
            format!("industry '{industry}' not ranked; neutral default"),
        ),
    }
}

fn job_title_authority(title: &str) -> Feature {
    let title = title.trim();
    if title.is_empty() {
        return Feature::new(DEFAULT_TITLE_SCORE, "job title not provided; low default");
    }

    if let Some((term, score)) = match_terms(title, SUPPORT_ROLES).first() {
        return Feature::new(*score, format!("title '{title}' is a support role ('{term}')"));
    }

    let best = match_terms(title, JOB_TITLE_AUTHORITY)
        .into_iter()
        .fold(None, |best: Option<(&str, u8)>, hit| match best {
            Some(current) if current.1 >= hit.1 => Some(current),
            _ => Some(hit),
        });

    match best {
        Some((term, score)) => Feature::new(score, format!("title '{title}' matched '{term}'")),
        None => Feature::new(
            DEFAULT_TITLE_SCORE,
            format!("no seniority keywords in '{title}'; low default"),
        ),
    }
}

fn read_funding(text: &str) -> FundingRead {
    let stage = match_terms(text, FUNDING_STAGES)
        .into_iter()
        .fold(None, |best: Option<(&'static str, u8)>, hit| match best {
            Some(current) if current.1 >= hit.1 => Some(current),
            _ => Some(hit),
        });

    FundingRead {
        stage,
        amount: parse_amount(text),
        public: !match_terms(text, PUBLIC_MARKERS).is_empty(),
    }
}

/// Largest currency amount in `text`, in whole units.
///
/// A number counts only with a currency marker or a magnitude suffix, so
/// years and round counts are ignored.
fn parse_amount(text: &str) -> Option<f64> {
    AMOUNT_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let currency = caps.name("cur");
            let suffix = caps.name("suf").map(|m| m.as_str().to_lowercase());
            if currency.is_none() && suffix.is_none() {
                return None;
            }
            let number: f64 = caps.name("num")?.as_str().replace(',', "").parse().ok()?;
            let multiplier = match suffix.as_deref() {
                Some("k" | "thousand") => 1e3,
                Some("m" | "mm" | "million") => 1e6,
                Some("b" | "bn" | "billion") => 1e9,
                _ => 1.0,
            };
            Some(number * multiplier)
        })
        .fold(None, |max: Option<f64>, amount| {
            Some(max.map_or(amount, |m| m.max(amount)))
        })
}

fn funding_stage(
    raw: Option<&str>,
    funding: Option<&FundingRead>,
    warnings: &mut Vec<ExtractionWarning>,
) -> Feature {
    let (Some(text), Some(funding)) = (non_blank(raw), funding) else {
        return Feature::new(NEUTRAL_SCORE, "funding not provided; neutral default");
    };

    if let Some((stage, score)) = funding.stage {
        return Feature::new(score, format!("funding stage '{stage}' from '{text}'"));
    }

    if let Some(amount) = funding.amount {
        let score = FUNDING_AMOUNT_LADDER
            .iter()
            .find(|(min, _)| amount >= *min)
            .map_or(NEUTRAL_SCORE, |(_, score)| *score);
        return Feature::new(score, format!("raised about {}", format_amount(amount)));
    }

    warnings.push(ExtractionWarning {
        field: "fundingInfo",
        value: text.to_string(),
        reason: "no funding stage or amount found".to_string(),
    });
    Feature::new(
        NEUTRAL_SCORE,
        format!("unreadable funding '{text}'; neutral default"),
    )
}

fn format_amount(amount: f64) -> String {
    if amount >= 1e9 {
        format!("${:.1}B", amount / 1e9)
    } else if amount >= 1e6 {
        format!("${:.1}M", amount / 1e6)
    } else if amount >= 1e3 {
        format!("${:.0}K", amount / 1e3)
    } else {
        format!("${amount:.0}")
    }
}

fn tech_stack_modernity(stack: &[String]) -> Feature {
    let entries: Vec<String> = stack
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    if entries.is_empty() {
        return Feature::new(
            clamp_score(TECH_BASE_SCORE),
            "tech stack not provided; neutral default",
        );
    }

    let mut modern = 0_i32;
    let mut legacy = 0_i32;
    for entry in &entries {
        if MODERN_TECH.iter().any(|kw| tech_entry_matches(entry, kw)) {
            modern += 1;
        } else if LEGACY_TECH.iter().any(|kw| tech_entry_matches(entry, kw)) {
            legacy += 1;
        }
    }

    let score =
        clamp_score(TECH_BASE_SCORE + MODERN_TECH_BONUS * modern - LEGACY_TECH_PENALTY * legacy);
    Feature::new(
        score,
        format!(
            "{modern} modern and {legacy} legacy technologies out of {}",
            entries.len()
        ),
    )
}

fn engagement_signals(intent: BuyingIntent, activity: Option<&str>) -> Feature {
    let intent_score = match intent {
        BuyingIntent::High => Some(INTENT_HIGH),
        BuyingIntent::Medium => Some(INTENT_MEDIUM),
        BuyingIntent::Low => Some(INTENT_LOW),
        BuyingIntent::Unknown => None,
    };

    let activity_hit = non_blank(activity)
        .map(|text| match_terms(text, ENGAGEMENT_ACTIVITY))
        .and_then(|hits| {
            hits.into_iter()
                .fold(None, |best: Option<(&str, u8)>, hit| match best {
                    Some(current) if current.1 >= hit.1 => Some(current),
                    _ => Some(hit),
                })
        });

    match (intent_score, activity_hit) {
        (Some(intent_score), Some((term, activity_score))) => {
            let strongest = intent_score.max(activity_score);
            let bonus = if intent_score.min(activity_score) >= ENGAGEMENT_AGREEMENT_FLOOR {
                ENGAGEMENT_AGREEMENT_BONUS
            } else {
                0
            };
            Feature::new(
                strongest.saturating_add(bonus).min(100),
                format!("{intent} buying intent and '{term}' activity"),
            )
        }
        (Some(intent_score), None) => Feature::new(intent_score, format!("{intent} buying intent")),
        (None, Some((term, activity_score))) => {
            Feature::new(activity_score, format!("'{term}' activity"))
        }
        (None, None) => Feature::new(NEUTRAL_SCORE, "no engagement signals; neutral default"),
    }
}

fn market_position(
    lead: &Lead,
    funding: Option<&FundingRead>,
    warnings: &mut Vec<ExtractionWarning>,
) -> Feature {
    let mut score = MARKET_BASE_SCORE;
    let mut notes = Vec::new();

    if is_large_company(&lead.company_name) {
        score += RECOGNIZED_COMPANY_BOOST;
        notes.push("recognized large company".to_string());
    } else if funding.is_some_and(|f| f.public) {
        score += RECOGNIZED_COMPANY_BOOST;
        notes.push("publicly traded".to_string());
    }

    let enterprise = match lead.employee_count {
        Some(count) => count >= ENTERPRISE_HEADCOUNT,
        None => {
            let mut ignored = Vec::new();
            lead.company_size.is_some() && company_size(lead, &mut ignored).score >= 100
        }
    };
    if enterprise {
        score += ENTERPRISE_HEADCOUNT_BOOST;
        notes.push("enterprise headcount".to_string());
    }

    if let Some(raw) = non_blank(lead.website.as_deref()) {
        match website_host(raw) {
            Some(host) if is_blog_platform(&host) => {
                score -= BLOG_DOMAIN_PENALTY;
                notes.push(format!("hosted on blog platform {host}"));
            }
            Some(host) => {
                score += PROFESSIONAL_DOMAIN_BOOST;
                notes.push(format!("professional domain {host}"));
            }
            None => warnings.push(ExtractionWarning {
                field: "website",
                value: raw.to_string(),
                reason: "not a valid domain".to_string(),
            }),
        }
    }

    let reasoning = if notes.is_empty() {
        "no market position signals; neutral default".to_string()
    } else {
        notes.join(", ")
    };
    Feature::new(clamp_score(score), reasoning)
}

fn growth_indicators(activity: Option<&str>, funding: Option<&FundingRead>) -> Feature {
    let mut score = GROWTH_BASE_SCORE;
    let mut notes = Vec::new();

    if let Some(text) = non_blank(activity) {
        for (term, delta) in match_terms(text, GROWTH_SIGNALS) {
            score += delta;
            notes.push(format!("'{term}'"));
        }
    }

    let funding_in_activity =
        non_blank(activity).is_some_and(|text| !match_terms(text, FUNDING_MENTIONS).is_empty());
    if funding_in_activity || funding.is_some_and(FundingRead::is_funding_round) {
        score += FUNDING_GROWTH_BOOST;
        notes.push("recent funding".to_string());
    }

    let reasoning = if notes.is_empty() {
        "no growth signals; neutral default".to_string()
    } else {
        format!("growth signals: {}", notes.join(", "))
    };
    Feature::new(clamp_score(score), reasoning)
}

// ---------------------------------------------------------------------------
// Websites
// ---------------------------------------------------------------------------

/// Lowercased host of a website URL without `www.`, or `None` if malformed.
pub(crate) fn website_host(raw: &str) -> Option<String> {
    let lower = raw.trim().to_lowercase();
    let rest = lower
        .split_once("://")
        .map_or(lower.as_str(), |(_, rest)| rest);
    let host = rest.split(['/', '?', '#']).next()?.split(':').next()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let valid = host.contains('.')
        && !host.starts_with('.')
        && !host.ends_with('.')
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    valid.then(|| host.to_string())
}

pub(crate) fn is_blog_platform(host: &str) -> bool {
    BLOG_PLATFORMS
        .iter()
        .any(|platform| host == *platform || host.ends_with(&format!(".{platform}")))
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
