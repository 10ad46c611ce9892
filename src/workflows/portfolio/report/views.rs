use super::super::domain::RevenueRange;
use super::super::metrics::{SourceCategory, UnitTypeCounts};
use super::super::share::{ShareBreakdown, SharePercentage};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SourceCategoryEntry {
    pub category: SourceCategory,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BranchSummaryView {
    pub branch_id: String,
    pub branch_name: String,
    pub unit_count: usize,
    pub unit_types: UnitTypeCounts,
    pub cash_collected: f64,
    pub lifetime_value: f64,
    pub target_yearly_revenue: RevenueRange,
    pub target_monthly_revenue: RevenueRange,
    pub monthly_target_share: ShareBreakdown<RevenueRange>,
}

/// Cash collected against the top of the target range, one entry per branch.
#[derive(Debug, Clone, Serialize)]
pub struct BranchPerformanceEntry {
    pub branch_name: String,
    pub cash_collected: f64,
    pub target_revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioTotalsView {
    pub target_yearly_revenue: RevenueRange,
    pub target_share: ShareBreakdown<RevenueRange>,
    pub cash_collected: f64,
    pub cash_share: ShareBreakdown<f64>,
    pub lifetime_value: f64,
    pub lifetime_share: ShareBreakdown<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport {
    pub generated_on: NaiveDate,
    pub management_share: SharePercentage,
    pub totals: PortfolioTotalsView,
    pub branches: Vec<BranchSummaryView>,
    pub branch_performance: Vec<BranchPerformanceEntry>,
    pub source_breakdown: Vec<SourceCategoryEntry>,
}
