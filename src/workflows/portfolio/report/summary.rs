use super::super::domain::BranchEntity;
use super::super::metrics::{unit_type_counts, AggregatedMetrics, SourceCategory};
use super::super::share::{share_breakdown, SharePercentage};
use super::views::{
    BranchPerformanceEntry, BranchSummaryView, PortfolioReport, PortfolioTotalsView,
    SourceCategoryEntry,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::info;

impl PortfolioReport {
    pub fn build(
        branches: &[BranchEntity],
        share: SharePercentage,
        generated_on: NaiveDate,
    ) -> Self {
        let metrics = AggregatedMetrics::compute(branches);

        let totals = PortfolioTotalsView {
            target_yearly_revenue: metrics.total_target_yearly_revenue,
            target_share: share_breakdown(metrics.total_target_yearly_revenue, share),
            cash_collected: metrics.total_cash_collected,
            cash_share: share_breakdown(metrics.total_cash_collected, share),
            lifetime_value: metrics.total_lifetime_value,
            lifetime_share: share_breakdown(metrics.total_lifetime_value, share),
        };

        let branch_views = branches
            .iter()
            .map(|branch| summarize_branch(branch, share))
            .collect();

        let branch_performance = branches
            .iter()
            .map(|branch| BranchPerformanceEntry {
                branch_name: branch.name.clone(),
                cash_collected: branch.cash_collected(),
                target_revenue: branch.target_yearly_revenue.max(),
            })
            .collect();

        let source_breakdown = source_entries(&metrics.source_category_counts);

        info!(
            branches = branches.len(),
            %generated_on,
            "portfolio report generated"
        );

        PortfolioReport {
            generated_on,
            management_share: share,
            totals,
            branches: branch_views,
            branch_performance,
            source_breakdown,
        }
    }
}

fn summarize_branch(branch: &BranchEntity, share: SharePercentage) -> BranchSummaryView {
    let monthly = branch.target_yearly_revenue.monthly();
    BranchSummaryView {
        branch_id: branch.id.clone(),
        branch_name: branch.name.clone(),
        unit_count: branch.apartments.len(),
        unit_types: unit_type_counts(branch),
        cash_collected: branch.cash_collected(),
        lifetime_value: branch.lifetime_value(),
        target_yearly_revenue: branch.target_yearly_revenue,
        target_monthly_revenue: monthly,
        monthly_target_share: share_breakdown(monthly, share),
    }
}

/// Chart-ready entries in category order; only categories that were counted appear.
pub fn source_entries(counts: &BTreeMap<SourceCategory, usize>) -> Vec<SourceCategoryEntry> {
    SourceCategory::ordered()
        .into_iter()
        .filter_map(|category| {
            counts.get(&category).map(|count| SourceCategoryEntry {
                category,
                label: category.label(),
                count: *count,
            })
        })
        .collect()
}
