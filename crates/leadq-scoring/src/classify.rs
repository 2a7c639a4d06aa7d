use leadq_core::Priority;
use serde::{Deserialize, Serialize};

use crate::profile::TierThresholds;

/// Qualification tier of a scored lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    /// The sales-facing label stored with a lead.
    #[must_use]
    pub fn priority(self) -> Priority {
        match self {
            Tier::High => Priority::Hot,
            Tier::Medium => Priority::Warm,
            Tier::Low => Priority::Cold,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::High => write!(f, "high"),
            Tier::Medium => write!(f, "medium"),
            Tier::Low => write!(f, "low"),
        }
    }
}

/// Maps a total score to a tier. Lower bounds are inclusive.
#[must_use]
pub fn classify(score: u8, thresholds: &TierThresholds) -> Tier {
    let table = [(thresholds.high, Tier::High), (thresholds.medium, Tier::Medium)];
    table
        .into_iter()
        .find(|(min, _)| score >= *min)
        .map_or(Tier::Low, |(_, tier)| tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boundaries_are_inclusive() {
        let t = TierThresholds::default();
        assert_eq!(classify(100, &t), Tier::High);
        assert_eq!(classify(80, &t), Tier::High);
        assert_eq!(classify(79, &t), Tier::Medium);
        assert_eq!(classify(60, &t), Tier::Medium);
        assert_eq!(classify(59, &t), Tier::Low);
        assert_eq!(classify(0, &t), Tier::Low);
    }

    #[test]
    fn custom_thresholds() {
        let t = TierThresholds {
            high: 70,
            medium: 40,
        };
        assert_eq!(classify(70, &t), Tier::High);
        assert_eq!(classify(45, &t), Tier::Medium);
    }

    #[test]
    fn tiers_mirror_priorities() {
        assert_eq!(Tier::High.priority(), Priority::Hot);
        assert_eq!(Tier::Medium.priority(), Priority::Warm);
        assert_eq!(Tier::Low.priority(), Priority::Cold);
    }
}
