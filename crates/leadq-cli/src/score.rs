use std::fmt::Write as _;
use std::path::Path;

use leadq_core::Lead;
use leadq_scoring::{LeadScorer, ScoringResult, WeightingProfile};

use crate::OutputFormat;

/// Score one lead from a JSON file and print the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid lead.
pub(crate) fn run_score(
    profile: WeightingProfile,
    path: &Path,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let lead: Lead = crate::read_json(path)?;
    let result = LeadScorer::new(profile).score(&lead);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", render_result(&lead, &result)),
    }
    Ok(())
}

pub(crate) fn render_result(lead: &Lead, result: &ScoringResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, {})",
        lead.company_name, lead.job_title, lead.industry
    );
    let _ = writeln!(
        out,
        "Score: {}/100  Tier: {}  Priority: {}  Confidence: {}%  Profile: {}",
        result.total_score, result.tier, result.priority, result.confidence, result.profile
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<22}{:>7}{:>8}  REASONING", "DIMENSION", "SCORE", "WEIGHT");
    for (dimension, breakdown) in &result.breakdown {
        let _ = writeln!(
            out,
            "{:<22}{:>7}{:>8.2}  {}",
            dimension.key(),
            breakdown.score,
            breakdown.weight,
            breakdown.reasoning
        );
    }

    for (heading, items) in [
        ("Strengths", &result.positive_factors),
        ("Weaknesses", &result.negative_factors),
        ("Neutral", &result.neutral_factors),
        ("Recommendations", &result.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{heading}:");
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
    }
    out
}
