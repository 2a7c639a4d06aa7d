use std::fmt::Write as _;
use std::path::Path;

use leadq_core::{InMemoryLeadRepository, Lead, LeadFilter, LeadRecord, LeadRepository};
use leadq_scoring::{LeadScorer, WeightingProfile};

use crate::OutputFormat;

/// Score every lead in a JSON array, store the scores, and list the records
/// matching `filter`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a scored record
/// cannot be written back.
pub(crate) fn run_batch(
    profile: WeightingProfile,
    path: &Path,
    filter: &LeadFilter,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let leads: Vec<Lead> = crate::read_json(path)?;
    let repo = InMemoryLeadRepository::new();
    let scorer = LeadScorer::new(profile);

    let scored = score_into(&repo, &scorer, leads)?;
    tracing::info!(
        count = scored,
        profile = scorer.profile().name(),
        "scored lead batch"
    );

    let records = repo.query(filter);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Text => print!("{}", render_records(&records)),
    }
    Ok(())
}

/// Inserts `leads`, scores them in parallel, and writes score and priority
/// back. Returns the number of leads scored.
///
/// # Errors
///
/// Returns an error if the repository rejects a write.
pub(crate) fn score_into<R: LeadRepository>(
    repo: &R,
    scorer: &LeadScorer,
    leads: Vec<Lead>,
) -> anyhow::Result<usize> {
    let results = scorer.score_all(&leads);
    let count = results.len();

    for (lead, result) in leads.into_iter().zip(results) {
        let mut record = repo.insert(lead);
        record.score = Some(result.total_score);
        record.priority = Some(result.priority);
        repo.put(record)?;
    }
    Ok(count)
}

pub(crate) fn render_records(records: &[LeadRecord]) -> String {
    if records.is_empty() {
        return "no leads matched the filter\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6}{:<28}{:<22}{:>6}  PRIORITY",
        "ID", "COMPANY", "INDUSTRY", "SCORE"
    );
    for record in records {
        let score = record
            .score
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        let priority = record
            .priority
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        let _ = writeln!(
            out,
            "{:<6}{:<28}{:<22}{:>6}  {}",
            record.id,
            truncate(&record.lead.company_name, 26),
            truncate(&record.lead.industry, 20),
            score,
            priority
        );
    }
    out
}

fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        format!("{}...", value.chars().take(max - 3).collect::<String>())
    } else {
        value.to_string()
    }
}
