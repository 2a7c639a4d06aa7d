use leadq_core::{BuyingIntent, Lead, Priority};
use leadq_scoring::{
    builtin, classify, combine, CombinationStrategy, ConfigurationError, Dimension,
    DimensionScores, LeadScorer, Tier, TierThresholds, WeightingProfile, ADVANCED, LOGISTIC,
    MISSING_DATA_CEILING, RULE_BASED,
};

fn scorer(name: &str) -> LeadScorer {
    LeadScorer::new(builtin(name).expect("builtin profile"))
}

fn enterprise_cto() -> Lead {
    Lead {
        company_name: "Northwind Cloud".to_string(),
        job_title: "CTO".to_string(),
        company_size: Some("1000+".to_string()),
        industry: "SaaS".to_string(),
        tech_stack: vec!["React".to_string(), "Kubernetes".to_string()],
        funding_info: Some("Series C - $50M".to_string()),
        ..Lead::default()
    }
}

fn tiny_farm_intern() -> Lead {
    Lead {
        company_name: "Green Acres".to_string(),
        job_title: "Intern".to_string(),
        company_size: Some("1-10".to_string()),
        industry: "Agriculture".to_string(),
        ..Lead::default()
    }
}

#[test]
fn enterprise_cto_is_hot() {
    let result = scorer(RULE_BASED).score(&enterprise_cto());

    // (100 + 100 + 100 + 90) / 4
    assert_eq!(result.total_score, 98);
    assert_eq!(result.tier, Tier::High);
    assert_eq!(result.priority, Priority::Hot);
    assert!(result
        .positive_factors
        .iter()
        .any(|f| f.contains("1000+")));
    assert!(result.positive_factors.iter().any(|f| f.contains("SaaS")));
    assert_eq!(
        result.recommendations.first().map(String::as_str),
        Some("Prioritize immediate outreach with executive-level materials")
    );
}

#[test]
fn small_agriculture_intern_is_cold() {
    let result = scorer(RULE_BASED).score(&tiny_farm_intern());

    // (20 + 30 + 10 + 50) / 4 = 27.5
    assert_eq!(result.total_score, 28);
    assert_eq!(result.tier, Tier::Low);
    assert_eq!(result.priority, Priority::Cold);
    assert!(result.positive_factors.len() <= 1);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("long-term nurture")));
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("senior decision-maker")));
}

#[test]
fn required_fields_only_is_scored_with_low_confidence() {
    let lead = Lead {
        company_name: "Acme".to_string(),
        job_title: "Operations".to_string(),
        industry: "Consulting".to_string(),
        ..Lead::default()
    };
    for name in [RULE_BASED, ADVANCED, LOGISTIC] {
        let result = scorer(name).score(&lead);
        assert!(result.total_score <= 100, "{name}");
        assert!(result.confidence <= MISSING_DATA_CEILING, "{name}");
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.contains("Enrich missing lead data")));
    }
}

#[test]
fn fully_enriched_lead_under_advanced_profile() {
    let lead = Lead {
        contact_name: Some("Dana Reyes".to_string()),
        location: Some("Austin, TX".to_string()),
        website: Some("https://northwind.io".to_string()),
        recent_activity: Some("Requested a demo; hiring 40 engineers".to_string()),
        buying_intent: BuyingIntent::High,
        ..enterprise_cto()
    };
    let result = scorer(ADVANCED).score(&lead);

    assert_eq!(result.breakdown.len(), 8);
    assert_eq!(result.breakdown[&Dimension::EngagementSignals].score, 100);
    assert_eq!(result.breakdown[&Dimension::GrowthIndicators].score, 85);
    assert_eq!(result.tier, Tier::High);
    assert!(result.confidence >= 80);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("Follow up quickly")));
}

#[test]
fn weighted_sum_of_eighty_is_high_and_seventy_nine_is_medium() {
    let profile = builtin(RULE_BASED).unwrap();
    let thresholds = TierThresholds::default();

    let at = |score: u8| -> DimensionScores {
        [
            (Dimension::CompanySize, score),
            (Dimension::IndustryValue, score),
            (Dimension::JobTitleAuthority, score),
            (Dimension::FundingStage, score),
        ]
        .into_iter()
        .collect()
    };

    let eighty = combine(&at(80), &profile);
    assert_eq!(eighty, 80);
    assert_eq!(classify(eighty, &thresholds), Tier::High);
    assert_eq!(classify(eighty, &thresholds).priority(), Priority::Hot);

    let seventy_nine = combine(&at(79), &profile);
    assert_eq!(seventy_nine, 79);
    assert_eq!(classify(seventy_nine, &thresholds), Tier::Medium);
    assert_eq!(classify(seventy_nine, &thresholds).priority(), Priority::Warm);
}

#[test]
fn weights_summing_to_point_nine_fail_at_construction() {
    let result = WeightingProfile::new(
        "underweight",
        CombinationStrategy::Linear,
        [
            (Dimension::CompanySize, 0.3),
            (Dimension::IndustryValue, 0.3),
            (Dimension::JobTitleAuthority, 0.3),
        ],
    );
    assert!(matches!(result, Err(ConfigurationError::WeightSum { .. })));
}

#[test]
fn unreadable_fields_degrade_to_neutral() {
    let lead = Lead {
        company_size: Some("enormous".to_string()),
        funding_info: Some("undisclosed".to_string()),
        website: Some("not a website".to_string()),
        ..tiny_farm_intern()
    };
    let result = scorer(ADVANCED).score(&lead);
    assert_eq!(result.breakdown[&Dimension::CompanySize].score, 50);
    assert_eq!(result.breakdown[&Dimension::FundingStage].score, 50);
    assert_eq!(result.breakdown[&Dimension::MarketPosition].score, 50);
}

#[test]
fn profiles_disagree_but_each_is_deterministic() {
    let lead = enterprise_cto();
    let rule = scorer(RULE_BASED).score(&lead);
    let logistic = scorer(LOGISTIC).score(&lead);
    assert_eq!(rule.profile, RULE_BASED);
    assert_eq!(logistic.profile, LOGISTIC);
    assert_eq!(scorer(LOGISTIC).score(&lead), logistic);
}
