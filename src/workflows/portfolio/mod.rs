pub mod domain;
pub mod metrics;
mod registry;
pub mod report;
mod sample;
mod share;

pub use domain::{BranchEntity, PortfolioError, RevenueRange, UnitRecord, UnitStatus, UnitType};
pub use metrics::{
    source_category_counts, total_cash_collected, total_lifetime_value,
    total_target_yearly_revenue, unit_type_counts, AggregatedMetrics, SourceCategory,
    UnitTypeCounts,
};
pub use registry::Portfolio;
pub use report::PortfolioReport;
pub use share::{share_breakdown, ShareBreakdown, Shareable, SharePercentage};
