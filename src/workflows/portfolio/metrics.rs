use super::domain::{BranchEntity, RevenueRange, UnitRecord, UnitType};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Acquisition channel bucket derived from a tenant's free-text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceCategory {
    ListingPlatforms,
    PaidSocialAdvertising,
    WordOfMouth,
    WalkIn,
    Other,
}

/// Keyword table checked in order; the first category with a matching keyword wins.
const SOURCE_KEYWORDS: &[(SourceCategory, &[&str])] = &[
    (SourceCategory::ListingPlatforms, &["bayut", "aqar", "listing"]),
    (
        SourceCategory::PaidSocialAdvertising,
        &["social", "facebook", "instagram", "tiktok"],
    ),
    (SourceCategory::WordOfMouth, &["word of mouth"]),
    (SourceCategory::WalkIn, &["walk in", "building board"]),
];

impl SourceCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ListingPlatforms,
            Self::PaidSocialAdvertising,
            Self::WordOfMouth,
            Self::WalkIn,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ListingPlatforms => "Listing Platforms",
            Self::PaidSocialAdvertising => "Paid Social Advertising",
            Self::WordOfMouth => "Word of Mouth",
            Self::WalkIn => "Walk-in",
            Self::Other => "Other",
        }
    }

    pub fn classify(source: &str) -> Self {
        let cleaned = source.to_lowercase();
        SOURCE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| cleaned.contains(keyword)))
            .map(|(category, _)| *category)
            .unwrap_or(Self::Other)
    }
}

/// Unit counts per type. Every type is present, including those with no units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UnitTypeCounts {
    pub studio: usize,
    pub one_bedroom: usize,
    pub two_bedroom: usize,
}

impl UnitTypeCounts {
    pub fn get(&self, unit_type: UnitType) -> usize {
        match unit_type {
            UnitType::Studio => self.studio,
            UnitType::OneBedroom => self.one_bedroom,
            UnitType::TwoBedroom => self.two_bedroom,
        }
    }

    fn increment(&mut self, unit_type: UnitType) {
        match unit_type {
            UnitType::Studio => self.studio += 1,
            UnitType::OneBedroom => self.one_bedroom += 1,
            UnitType::TwoBedroom => self.two_bedroom += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.studio + self.one_bedroom + self.two_bedroom
    }
}

/// Portfolio-wide totals, recomputed from the branches on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedMetrics {
    pub total_target_yearly_revenue: RevenueRange,
    pub total_cash_collected: f64,
    pub total_lifetime_value: f64,
    pub source_category_counts: BTreeMap<SourceCategory, usize>,
}

impl AggregatedMetrics {
    pub fn compute(branches: &[BranchEntity]) -> Self {
        let metrics = Self {
            total_target_yearly_revenue: total_target_yearly_revenue(branches),
            total_cash_collected: total_cash_collected(branches),
            total_lifetime_value: total_lifetime_value(branches),
            source_category_counts: source_category_counts(branches),
        };
        debug!(
            branches = branches.len(),
            cash_collected = metrics.total_cash_collected,
            lifetime_value = metrics.total_lifetime_value,
            "aggregated portfolio metrics"
        );
        metrics
    }
}

fn all_units(branches: &[BranchEntity]) -> impl Iterator<Item = &UnitRecord> {
    branches.iter().flat_map(|branch| branch.apartments.iter())
}

pub fn total_target_yearly_revenue(branches: &[BranchEntity]) -> RevenueRange {
    branches
        .iter()
        .fold(RevenueRange::zero(), |total, branch| {
            total + branch.target_yearly_revenue
        })
}

pub fn total_cash_collected(branches: &[BranchEntity]) -> f64 {
    all_units(branches).map(|unit| unit.cash_collected).sum()
}

pub fn total_lifetime_value(branches: &[BranchEntity]) -> f64 {
    all_units(branches).map(|unit| unit.lifetime_value).sum()
}

pub fn unit_type_counts(branch: &BranchEntity) -> UnitTypeCounts {
    branch
        .apartments
        .iter()
        .fold(UnitTypeCounts::default(), |mut counts, unit| {
            counts.increment(unit.unit_type);
            counts
        })
}

/// Counts rented units with a known source per category. Categories without units are absent.
pub fn source_category_counts(branches: &[BranchEntity]) -> BTreeMap<SourceCategory, usize> {
    all_units(branches)
        .filter(|unit| unit.is_rented())
        .filter_map(|unit| unit.how_heard.as_deref())
        .fold(BTreeMap::new(), |mut counts, source| {
            *counts.entry(SourceCategory::classify(source)).or_insert(0) += 1;
            counts
        })
}
