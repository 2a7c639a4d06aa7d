use std::collections::BTreeMap;

use leadq_core::Lead;
use rayon::prelude::*;

use crate::classify::classify;
use crate::combine::combine;
use crate::confidence::estimate_confidence;
use crate::explain::explain;
use crate::extract::extract_features;
use crate::keywords::KEYWORD_TABLE_VERSION;
use crate::profile::WeightingProfile;
use crate::types::{DimensionBreakdown, ScoringResult};

/// Scores leads against one fixed [`WeightingProfile`].
///
/// Holds no state besides the profile, so a single scorer can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct LeadScorer {
    profile: WeightingProfile,
}

impl LeadScorer {
    #[must_use]
    pub fn new(profile: WeightingProfile) -> Self {
        Self { profile }
    }

    #[must_use]
    pub fn profile(&self) -> &WeightingProfile {
        &self.profile
    }

    /// Runs extract, combine, confidence, classify and explain for one lead.
    #[must_use]
    pub fn score(&self, lead: &Lead) -> ScoringResult {
        let extraction = extract_features(lead);
        for warning in &extraction.warnings {
            tracing::warn!(
                company = %lead.company_name,
                field = warning.field,
                value = %warning.value,
                reason = %warning.reason,
                "unreadable lead field; using neutral default"
            );
        }

        let total_score = combine(&extraction.scores, &self.profile);
        let confidence =
            estimate_confidence(extraction.present_fields, &extraction.scores, &self.profile);
        let tier = classify(total_score, &self.profile.thresholds());
        let explanation = explain(lead, &extraction.scores, &self.profile, tier, confidence);

        let breakdown: BTreeMap<_, _> = self
            .profile
            .weights()
            .filter_map(|(dimension, weight)| {
                let score = extraction.scores.get(dimension)?;
                let reasoning = extraction
                    .reasoning
                    .get(&dimension)
                    .cloned()
                    .unwrap_or_default();
                Some((
                    dimension,
                    DimensionBreakdown {
                        score,
                        weight,
                        reasoning,
                    },
                ))
            })
            .collect();

        tracing::debug!(
            company = %lead.company_name,
            profile = self.profile.name(),
            score = total_score,
            tier = %tier,
            confidence,
            "scored lead"
        );

        ScoringResult {
            profile: self.profile.name().to_string(),
            total_score,
            tier,
            priority: tier.priority(),
            confidence,
            breakdown,
            positive_factors: explanation.positive_factors,
            negative_factors: explanation.negative_factors,
            neutral_factors: explanation.neutral_factors,
            recommendations: explanation.recommendations,
            keyword_table_version: KEYWORD_TABLE_VERSION.to_string(),
        }
    }

    /// Scores every lead in parallel. Results are in input order.
    #[must_use]
    pub fn score_all(&self, leads: &[Lead]) -> Vec<ScoringResult> {
        leads.par_iter().map(|lead| self.score(lead)).collect()
    }
}

#[cfg(test)]
mod tests {
    use leadq_core::Priority;

    use super::*;
    use crate::classify::Tier;
    use crate::dimension::Dimension;
    use crate::profile::{builtin, ADVANCED, RULE_BASED};

    fn scorer(name: &str) -> LeadScorer {
        LeadScorer::new(builtin(name).unwrap())
    }

    fn lead(company: &str, title: &str, size: &str) -> Lead {
        Lead {
            company_name: company.to_string(),
            job_title: title.to_string(),
            industry: "SaaS".to_string(),
            company_size: Some(size.to_string()),
            ..Lead::default()
        }
    }

    #[test]
    fn scorer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LeadScorer>();
    }

    #[test]
    fn breakdown_covers_profile_dimensions_only() {
        let result = scorer(RULE_BASED).score(&lead("Acme", "CTO", "51-200"));
        let keys: Vec<Dimension> = result.breakdown.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                Dimension::CompanySize,
                Dimension::IndustryValue,
                Dimension::JobTitleAuthority,
                Dimension::FundingStage,
            ]
        );
        let size = &result.breakdown[&Dimension::CompanySize];
        assert_eq!(size.score, 60);
        assert!((size.weight - 0.25).abs() < 1e-12);
        assert!(size.reasoning.contains("51-200"));
    }

    #[test]
    fn advanced_profile_reports_all_dimensions() {
        let result = scorer(ADVANCED).score(&lead("Acme", "CTO", "51-200"));
        assert_eq!(result.breakdown.len(), Dimension::ALL.len());
        assert_eq!(result.profile, ADVANCED);
    }

    #[test]
    fn priority_mirrors_tier() {
        let result = scorer(RULE_BASED).score(&lead("Acme", "Intern", "1-10"));
        assert_eq!(result.tier, Tier::Low);
        assert_eq!(result.priority, Priority::Cold);
    }

    #[test]
    fn score_all_preserves_input_order() {
        let leads = vec![
            lead("One", "CTO", "1000+"),
            lead("Two", "Intern", "1-10"),
            lead("Three", "Director", "201-500"),
        ];
        let s = scorer(RULE_BASED);
        let batch = s.score_all(&leads);
        let single: Vec<ScoringResult> = leads.iter().map(|l| s.score(l)).collect();
        assert_eq!(batch, single);
    }

    #[test]
    fn serializes_camel_case() {
        let result = scorer(RULE_BASED).score(&lead("Acme", "CTO", "1000+"));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("totalScore").is_some());
        assert!(json.get("positiveFactors").is_some());
        assert_eq!(json["priority"], "hot");
        assert!(json["breakdown"].get("companySize").is_some());
        assert_eq!(json["keywordTableVersion"], KEYWORD_TABLE_VERSION);
    }
}
