use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One scored aspect of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    CompanySize,
    IndustryValue,
    JobTitleAuthority,
    FundingStage,
    TechStackModernity,
    EngagementSignals,
    MarketPosition,
    GrowthIndicators,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::CompanySize,
        Dimension::IndustryValue,
        Dimension::JobTitleAuthority,
        Dimension::FundingStage,
        Dimension::TechStackModernity,
        Dimension::EngagementSignals,
        Dimension::MarketPosition,
        Dimension::GrowthIndicators,
    ];

    /// The camelCase key used in profiles and serialized results.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Dimension::CompanySize => "companySize",
            Dimension::IndustryValue => "industryValue",
            Dimension::JobTitleAuthority => "jobTitleAuthority",
            Dimension::FundingStage => "fundingStage",
            Dimension::TechStackModernity => "techStackModernity",
            Dimension::EngagementSignals => "engagementSignals",
            Dimension::MarketPosition => "marketPosition",
            Dimension::GrowthIndicators => "growthIndicators",
        }
    }

    /// Parses a profile key. Accepts camelCase or snake_case, any letter case.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let folded: String = key
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.key().to_lowercase() == folded)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-dimension scores in `[0, 100]`, ordered by [`Dimension`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores(BTreeMap<Dimension, u8>);

impl DimensionScores {
    /// Sets a score, clamping it to 100.
    pub fn set(&mut self, dimension: Dimension, score: u8) {
        self.0.insert(dimension, score.min(100));
    }

    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<u8> {
        self.0.get(&dimension).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        self.0.iter().map(|(d, s)| (*d, *s))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Dimension, u8)> for DimensionScores {
    fn from_iter<I: IntoIterator<Item = (Dimension, u8)>>(iter: I) -> Self {
        let mut scores = Self::default();
        for (dimension, score) in iter {
            scores.set(dimension, score);
        }
        scores
    }
}
