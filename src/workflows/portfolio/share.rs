use super::domain::RevenueRange;
use serde::Serialize;

/// Fraction of revenue retained by the management company. Always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SharePercentage(f64);

impl SharePercentage {
    pub const DEFAULT: Self = Self(0.2);

    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    pub const fn value(self) -> f64 {
        self.0
    }

    /// The owner's portion, `1 - share`.
    pub fn complement(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for SharePercentage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Management (`primary`) and owner (`secondary`) portions of a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShareBreakdown<T> {
    pub primary: T,
    pub secondary: T,
}

/// Values that can be split by a share percentage.
pub trait Shareable: Copy {
    fn scaled(self, factor: f64) -> Self;
}

impl Shareable for f64 {
    fn scaled(self, factor: f64) -> Self {
        self * factor
    }
}

impl Shareable for RevenueRange {
    fn scaled(self, factor: f64) -> Self {
        self.scale(factor)
    }
}

pub fn share_breakdown<T: Shareable>(value: T, share: SharePercentage) -> ShareBreakdown<T> {
    ShareBreakdown {
        primary: value.scaled(share.value()),
        secondary: value.scaled(share.complement()),
    }
}
