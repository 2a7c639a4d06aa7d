use std::io::Write as _;

use leadq_core::{InMemoryLeadRepository, Lead, LeadRepository};
use leadq_scoring::{builtin, LeadScorer, RULE_BASED};

use super::*;

fn config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        profile: RULE_BASED.to_string(),
        profiles_path: None,
    }
}

fn lead(company: &str, title: &str, size: &str, industry: &str) -> Lead {
    Lead {
        company_name: company.to_string(),
        job_title: title.to_string(),
        company_size: Some(size.to_string()),
        industry: industry.to_string(),
        ..Lead::default()
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["leadq"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_score_command_with_defaults() {
    let cli = Cli::try_parse_from(["leadq", "score", "--lead", "lead.json"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            ref lead,
            profile: ProfileArgs { profile: None, profiles_file: None },
            format: OutputFormat::Json,
        }) if lead == &PathBuf::from("lead.json")
    ));
}

#[test]
fn parses_score_command_with_profile_overrides() {
    let cli = Cli::try_parse_from([
        "leadq",
        "score",
        "--lead",
        "lead.json",
        "--profile",
        "advanced",
        "--profiles-file",
        "profiles.yaml",
        "--format",
        "text",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            profile: ProfileArgs { profile: Some(ref p), profiles_file: Some(_) },
            format: OutputFormat::Text,
            ..
        }) if p == "advanced"
    ));
}

#[test]
fn parses_batch_filters() {
    let cli = Cli::try_parse_from([
        "leadq",
        "batch",
        "--input",
        "leads.json",
        "--priority",
        "hot",
        "--min-score",
        "70",
        "--industry",
        "saas",
        "--limit",
        "5",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Batch {
            priority: Some(Priority::Hot),
            min_score: Some(70),
            industry: Some(ref i),
            limit: Some(5),
            format: OutputFormat::Text,
            ..
        }) if i == "saas"
    ));
}

#[test]
fn rejects_unknown_priority() {
    let result = Cli::try_parse_from([
        "leadq",
        "batch",
        "--input",
        "leads.json",
        "--priority",
        "lukewarm",
    ]);
    assert!(result.is_err());
}

#[test]
fn score_requires_lead_path() {
    assert!(Cli::try_parse_from(["leadq", "score"]).is_err());
}

#[test]
fn profile_flag_overrides_config() {
    let args = ProfileArgs {
        profile: Some("advanced".to_string()),
        profiles_file: None,
    };
    let profile = args.resolve(&config()).unwrap();
    assert_eq!(profile.name(), "advanced");

    let profile = ProfileArgs::default().resolve(&config()).unwrap();
    assert_eq!(profile.name(), RULE_BASED);
}

#[test]
fn unknown_profile_is_an_error() {
    let args = ProfileArgs {
        profile: Some("missing".to_string()),
        profiles_file: None,
    };
    let err = args.resolve(&config()).unwrap_err();
    assert!(format!("{err:#}").contains("missing"));
}

#[test]
fn profiles_file_from_config_is_used() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"profiles:\n  - name: titles_only\n    weights: { jobTitleAuthority: 1.0 }\n")
        .unwrap();
    let config = AppConfig {
        profile: "titles_only".to_string(),
        profiles_path: Some(file.path().to_path_buf()),
        ..config()
    };
    let profile = ProfileArgs::default().resolve(&config).unwrap();
    assert_eq!(profile.weights().count(), 1);
}

#[test]
fn only_production_uses_compact_logs() {
    assert!(compact_logs(&Environment::Production));
    assert!(!compact_logs(&Environment::Development));
    assert!(!compact_logs(&Environment::Test));
}

#[test]
fn read_json_reports_parse_failures() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    let err = read_json::<Lead>(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse"));
}

#[test]
fn batch_stores_scores_and_priorities() {
    let repo = InMemoryLeadRepository::new();
    let scorer = LeadScorer::new(builtin(RULE_BASED).unwrap());
    let leads = vec![
        lead("Northwind", "CTO", "1000+", "SaaS"),
        lead("Green Acres", "Intern", "1-10", "Agriculture"),
    ];

    let count = batch::score_into(&repo, &scorer, leads).unwrap();
    assert_eq!(count, 2);

    let first = repo.get(1).unwrap();
    assert_eq!(first.priority, Some(Priority::Hot));
    let second = repo.get(2).unwrap();
    assert_eq!(second.priority, Some(Priority::Cold));

    let hot = repo.query(&leadq_core::LeadFilter {
        priority: Some(Priority::Hot),
        ..leadq_core::LeadFilter::default()
    });
    assert_eq!(hot.len(), 1);
    let rendered = batch::render_records(&hot);
    assert!(rendered.contains("Northwind"));
    assert!(rendered.contains("hot"));
}

#[test]
fn empty_batch_listing_says_so() {
    assert_eq!(batch::render_records(&[]), "no leads matched the filter\n");
}

#[test]
fn text_rendering_lists_breakdown_and_recommendations() {
    let lead = lead("Northwind", "CTO", "1000+", "SaaS");
    let result = LeadScorer::new(builtin(RULE_BASED).unwrap()).score(&lead);
    let text = score::render_result(&lead, &result);
    assert!(text.starts_with("Northwind (CTO, SaaS)"));
    assert!(text.contains("companySize"));
    assert!(text.contains("Recommendations:"));
}

#[test]
fn profiles_listing_includes_weights() {
    let profiles = leadq_scoring::builtin_profiles().unwrap();
    let text = profiles::render_profiles(&profiles);
    assert!(text.contains("rule_based [linear] high>=80 medium>=60"));
    assert!(text.contains("  fundingStage"));
    assert!(text.contains("logistic [logistic(gain=10, bias=-5)]"));
}
