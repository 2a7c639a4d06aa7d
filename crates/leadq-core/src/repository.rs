//! Storage seam for lead records.
//!
//! The scoring engine never touches storage. Callers fetch a [`LeadRecord`],
//! score its lead, and write the resulting score and priority back through a
//! [`LeadRepository`] they own.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::{Lead, LeadRecord, Priority, RepositoryError};

/// Query options for [`LeadRepository::query`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    /// Case-insensitive substring of the lead's industry.
    pub industry: Option<String>,
    pub priority: Option<Priority>,
    /// Records without a stored score never match a minimum score.
    pub min_score: Option<u8>,
    pub limit: Option<usize>,
}

impl LeadFilter {
    #[must_use]
    pub fn matches(&self, record: &LeadRecord) -> bool {
        if let Some(industry) = &self.industry {
            let needle = industry.to_lowercase();
            if !record.lead.industry.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if record.priority != Some(priority) {
                return false;
            }
        }
        if let Some(min_score) = self.min_score {
            if record.score.is_none_or(|score| score < min_score) {
                return false;
            }
        }
        true
    }
}

pub trait LeadRepository: Send + Sync {
    fn get(&self, id: i64) -> Option<LeadRecord>;

    /// Stores a new, unscored lead and returns the record with its assigned id.
    fn insert(&self, lead: Lead) -> LeadRecord;

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no record has `record.id`.
    fn put(&self, record: LeadRecord) -> Result<(), RepositoryError>;

    /// Returns matching records in ascending id order.
    fn query(&self, filter: &LeadFilter) -> Vec<LeadRecord>;
}

#[derive(Debug, Default)]
struct Rows {
    records: BTreeMap<i64, LeadRecord>,
    last_id: i64,
}

/// Process-local repository with auto-incrementing ids, starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryLeadRepository {
    rows: RwLock<Rows>,
}

impl InMemoryLeadRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().records.is_empty()
    }
}

impl LeadRepository for InMemoryLeadRepository {
    fn get(&self, id: i64) -> Option<LeadRecord> {
        self.rows.read().records.get(&id).cloned()
    }

    fn insert(&self, lead: Lead) -> LeadRecord {
        let mut rows = self.rows.write();
        rows.last_id += 1;
        let record = LeadRecord {
            id: rows.last_id,
            lead,
            score: None,
            priority: None,
        };
        rows.records.insert(record.id, record.clone());
        record
    }

    fn put(&self, record: LeadRecord) -> Result<(), RepositoryError> {
        let mut rows = self.rows.write();
        match rows.records.get_mut(&record.id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound(record.id)),
        }
    }

    fn query(&self, filter: &LeadFilter) -> Vec<LeadRecord> {
        let rows = self.rows.read();
        let matching = rows.records.values().filter(|r| filter.matches(r)).cloned();
        match filter.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(company: &str, industry: &str) -> Lead {
        Lead {
            company_name: company.to_string(),
            job_title: "CTO".to_string(),
            industry: industry.to_string(),
            ..Lead::default()
        }
    }

    fn scored(repo: &InMemoryLeadRepository, company: &str, industry: &str, score: u8) -> i64 {
        let mut record = repo.insert(lead(company, industry));
        record.score = Some(score);
        record.priority = Some(if score >= 80 {
            Priority::Hot
        } else if score >= 60 {
            Priority::Warm
        } else {
            Priority::Cold
        });
        let id = record.id;
        repo.put(record).unwrap();
        id
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let repo = InMemoryLeadRepository::new();
        let first = repo.insert(lead("Acme", "SaaS"));
        let second = repo.insert(lead("Globex", "Retail"));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let repo = InMemoryLeadRepository::new();
        assert!(repo.get(42).is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn put_updates_existing_record() {
        let repo = InMemoryLeadRepository::new();
        let id = scored(&repo, "Acme", "SaaS", 91);
        let stored = repo.get(id).unwrap();
        assert_eq!(stored.score, Some(91));
        assert_eq!(stored.priority, Some(Priority::Hot));
    }

    #[test]
    fn put_unknown_id_is_not_found() {
        let repo = InMemoryLeadRepository::new();
        let record = LeadRecord {
            id: 9,
            lead: lead("Acme", "SaaS"),
            score: None,
            priority: None,
        };
        let err = repo.put(record).unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(9)));
    }

    #[test]
    fn query_filters_by_industry_substring() {
        let repo = InMemoryLeadRepository::new();
        repo.insert(lead("Acme", "B2B SaaS"));
        repo.insert(lead("Globex", "Retail"));
        let filter = LeadFilter {
            industry: Some("saas".to_string()),
            ..LeadFilter::default()
        };
        let found = repo.query(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].lead.company_name, "Acme");
    }

    #[test]
    fn query_filters_by_priority_and_min_score() {
        let repo = InMemoryLeadRepository::new();
        scored(&repo, "Acme", "SaaS", 91);
        scored(&repo, "Globex", "Retail", 65);
        scored(&repo, "Initech", "Retail", 30);
        repo.insert(lead("Unscored", "Retail"));

        let warm = repo.query(&LeadFilter {
            priority: Some(Priority::Warm),
            ..LeadFilter::default()
        });
        assert_eq!(warm.len(), 1);
        assert_eq!(warm[0].lead.company_name, "Globex");

        let above_60 = repo.query(&LeadFilter {
            min_score: Some(60),
            ..LeadFilter::default()
        });
        let names: Vec<&str> = above_60
            .iter()
            .map(|r| r.lead.company_name.as_str())
            .collect();
        assert_eq!(names, vec!["Acme", "Globex"]);
    }

    #[test]
    fn query_respects_limit_in_id_order() {
        let repo = InMemoryLeadRepository::new();
        for name in ["A", "B", "C"] {
            repo.insert(lead(name, "SaaS"));
        }
        let found = repo.query(&LeadFilter {
            limit: Some(2),
            ..LeadFilter::default()
        });
        let ids: Vec<i64> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
