use chrono::NaiveDate;
use rent_roll::workflows::portfolio::{
    source_category_counts, total_cash_collected, total_lifetime_value, unit_type_counts,
    AggregatedMetrics, BranchEntity, Portfolio, RevenueRange, SharePercentage, SourceCategory,
    UnitRecord, UnitStatus, UnitType,
};

const EXPORT: &str = include_str!("fixtures/rent_roll.csv");

fn rented(number: &str, source: &str) -> UnitRecord {
    UnitRecord {
        id: number.to_string(),
        number: number.to_string(),
        unit_type: UnitType::OneBedroom,
        status: UnitStatus::Rented,
        monthly_rent: 1000.0,
        contract_duration_months: 12,
        cash_collected: 1000.0,
        how_heard: Some(source.to_string()),
        lifetime_value: 12000.0,
    }
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid report date")
}

#[test]
fn source_categories_are_sparse() {
    let branch = BranchEntity::new("b", "Branch", RevenueRange::zero()).with_apartments(vec![
        rented("1", "Facebook Ads"),
        rented("2", "word of mouth referral"),
        rented("3", "Unknown Source"),
    ]);

    let counts = source_category_counts(&[branch]);
    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&SourceCategory::PaidSocialAdvertising], 1);
    assert_eq!(counts[&SourceCategory::WordOfMouth], 1);
    assert_eq!(counts[&SourceCategory::Other], 1);
    assert!(!counts.contains_key(&SourceCategory::ListingPlatforms));
    assert!(!counts.contains_key(&SourceCategory::WalkIn));
}

#[test]
fn imported_export_drives_portfolio_metrics() {
    let mut portfolio = Portfolio::sample();
    let branch_id = portfolio
        .default_branch_id()
        .expect("sample has a branch")
        .to_string();
    let imported = portfolio
        .import_csv(&branch_id, EXPORT)
        .expect("export imports");
    assert_eq!(imported, 9);

    let metrics = portfolio.metrics();
    assert_eq!(metrics.total_cash_collected, 60637.0);
    assert_eq!(metrics.total_lifetime_value, 354623.0);
    assert_eq!(
        metrics.total_target_yearly_revenue,
        RevenueRange::new(1_625_832.0, 1_954_920.0).expect("range")
    );
    assert_eq!(metrics.source_category_counts[&SourceCategory::WordOfMouth], 2);
    assert_eq!(metrics.source_category_counts[&SourceCategory::WalkIn], 1);
    assert_eq!(
        metrics.source_category_counts[&SourceCategory::PaidSocialAdvertising],
        1
    );

    let branch = portfolio.branch(&branch_id).expect("branch present");
    let counts = unit_type_counts(branch);
    assert_eq!(counts.studio, 2);
    assert_eq!(counts.one_bedroom, 5);
    assert_eq!(counts.two_bedroom, 2);
}

#[test]
fn sample_portfolio_totals() {
    let portfolio = Portfolio::sample();
    let branches = portfolio.branches();
    assert_eq!(branches[0].apartments.len(), 26);
    assert_eq!(total_cash_collected(branches), 163_527.0);
    assert_eq!(total_lifetime_value(branches), 1_402_523.0);
    assert_eq!(branches[0].target_yearly_revenue.min(), 1_625_832.0);
    assert_eq!(branches[0].target_yearly_revenue.max(), 1_954_920.0);

    let counts = unit_type_counts(&branches[0]);
    assert_eq!(counts.studio, 7);
    assert_eq!(counts.one_bedroom, 17);
    assert_eq!(counts.two_bedroom, 2);
}

#[test]
fn report_splits_totals_by_share() {
    let portfolio = Portfolio::new(vec![BranchEntity::new(
        "b",
        "Branch",
        RevenueRange::new(1200.0, 2400.0).expect("range"),
    )
    .with_apartments(vec![rented("1", "TikTok"), rented("2", "Bayut")])]);

    let share = SharePercentage::new(0.25).expect("share");
    let report = portfolio.report(share, report_date());

    assert_eq!(report.totals.cash_collected, 2000.0);
    assert_eq!(report.totals.cash_share.primary, 500.0);
    assert_eq!(report.totals.cash_share.secondary, 1500.0);
    assert_eq!(report.totals.target_share.primary.max(), 600.0);

    let branch = &report.branches[0];
    assert_eq!(branch.target_monthly_revenue, RevenueRange::new(100.0, 200.0).expect("range"));
    assert_eq!(branch.monthly_target_share.primary.min(), 25.0);
    assert_eq!(branch.monthly_target_share.secondary.max(), 150.0);

    assert_eq!(report.branch_performance[0].target_revenue, 2400.0);
    let labels: Vec<_> = report.source_breakdown.iter().map(|entry| entry.label).collect();
    assert_eq!(labels, vec!["Listing Platforms", "Paid Social Advertising"]);
}

#[test]
fn report_serializes_for_json_output() {
    let portfolio = Portfolio::sample();
    let report = portfolio.report(SharePercentage::DEFAULT, report_date());
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["generated_on"], "2025-09-24");
    assert_eq!(value["management_share"], 0.2);
    assert_eq!(value["branches"][0]["unit_count"], 26);
    assert_eq!(value["source_breakdown"][0]["category"], "listing_platforms");
}

#[test]
fn aggregation_does_not_mutate_branches() {
    let portfolio = Portfolio::sample();
    let before = portfolio.clone();
    let _ = AggregatedMetrics::compute(portfolio.branches());
    let _ = portfolio.report(SharePercentage::DEFAULT, report_date());
    assert_eq!(portfolio, before);
}
