use serde::{Deserialize, Serialize};
use std::ops::Add;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Studio,
    OneBedroom,
    TwoBedroom,
}

impl UnitType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Studio, Self::OneBedroom, Self::TwoBedroom]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Studio => "Studio",
            Self::OneBedroom => "One Bedroom",
            Self::TwoBedroom => "Two Bedroom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Rented,
    Reserved,
    Vacant,
}

impl UnitStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Rented, Self::Reserved, Self::Vacant]
    }

    /// Upper-case code used by rent roll exports.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Rented => "RENTED",
            Self::Reserved => "RESERVED",
            Self::Vacant => "VACANT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rented => "Rented",
            Self::Reserved => "Reserved",
            Self::Vacant => "Vacant",
        }
    }
}

/// Current lease and occupancy state of one apartment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRecord {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    pub status: UnitStatus,
    pub monthly_rent: f64,
    pub contract_duration_months: u32,
    pub cash_collected: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_heard: Option<String>,
    pub lifetime_value: f64,
}

impl UnitRecord {
    pub fn is_rented(&self) -> bool {
        self.status == UnitStatus::Rented
    }
}

/// Inclusive yearly revenue range; `min <= max` holds for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawRevenueRange")]
pub struct RevenueRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawRevenueRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawRevenueRange> for RevenueRange {
    type Error = PortfolioError;

    fn try_from(raw: RawRevenueRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl RevenueRange {
    pub fn new(min: f64, max: f64) -> Result<Self, PortfolioError> {
        if min > max || min.is_nan() || max.is_nan() {
            return Err(PortfolioError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn zero() -> Self {
        Self { min: 0.0, max: 0.0 }
    }

    pub const fn min(self) -> f64 {
        self.min
    }

    pub const fn max(self) -> f64 {
        self.max
    }

    /// Multiplies both bounds; a negative factor swaps them so the order holds.
    pub fn scale(self, factor: f64) -> Self {
        let (low, high) = (self.min * factor, self.max * factor);
        if low <= high {
            Self { min: low, max: high }
        } else {
            Self { min: high, max: low }
        }
    }

    /// Spreads a yearly range over twelve months.
    pub fn monthly(self) -> Self {
        self.scale(1.0 / 12.0)
    }
}

impl Add for RevenueRange {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            min: self.min + other.min,
            max: self.max + other.max,
        }
    }
}

/// One managed property and the units it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchEntity {
    pub id: String,
    pub name: String,
    pub apartments: Vec<UnitRecord>,
    pub target_yearly_revenue: RevenueRange,
}

impl BranchEntity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target_yearly_revenue: RevenueRange,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            apartments: Vec::new(),
            target_yearly_revenue,
        }
    }

    pub fn with_apartments(mut self, apartments: Vec<UnitRecord>) -> Self {
        self.apartments = apartments;
        self
    }

    /// Swaps in a fully validated unit collection, returning the previous one.
    pub fn replace_apartments(&mut self, apartments: Vec<UnitRecord>) -> Vec<UnitRecord> {
        std::mem::replace(&mut self.apartments, apartments)
    }

    pub fn cash_collected(&self) -> f64 {
        self.apartments.iter().map(|unit| unit.cash_collected).sum()
    }

    pub fn lifetime_value(&self) -> f64 {
        self.apartments.iter().map(|unit| unit.lifetime_value).sum()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("no branch found with id {0}")]
    BranchNotFound(String),
    #[error("portfolio has no branches to update")]
    Empty,
    #[error("target revenue minimum {min} exceeds maximum {max}")]
    InvertedRange { min: f64, max: f64 },
}
