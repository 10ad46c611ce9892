use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rent_roll::config::{parse_share, AppConfig};
use rent_roll::error::AppError;
use rent_roll::telemetry;
use rent_roll::workflows::portfolio::{
    Portfolio, PortfolioReport, RevenueRange, SharePercentage, UnitRecord, UnitStatus, UnitType,
};
use rent_roll::workflows::rent_roll::RentRollImporter;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rent-roll",
    about = "Import rent roll exports and report portfolio revenue and occupancy",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the portfolio report (default command)
    Report(ReportArgs),
    /// Check a rent roll export without building a report
    Validate(ValidateArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    /// Rent roll CSV export replacing the branch's units
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Branch receiving the import (defaults to the first branch)
    #[arg(long)]
    branch: Option<String>,
    /// Management share between 0 and 1 (overrides APP_MANAGEMENT_SHARE)
    #[arg(long, value_parser = parse_share_arg)]
    share: Option<SharePercentage>,
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Include a unit listing per branch in text output
    #[arg(long)]
    list_units: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Rent roll CSV export to check
    #[arg(long)]
    csv: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(err.exit_code());
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    match command {
        Command::Report(args) => run_report(args, &config),
        Command::Validate(args) => run_validate(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_share_arg(raw: &str) -> Result<SharePercentage, String> {
    parse_share(raw).map_err(|err| err.to_string())
}

fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let share = args.share.unwrap_or(config.reporting.management_share);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let mut portfolio = Portfolio::sample();
    if let Some(path) = &args.csv {
        let branch_id = match &args.branch {
            Some(id) => id.clone(),
            None => portfolio.default_branch_id()?.to_string(),
        };
        let raw = std::fs::read_to_string(path)?;
        let imported = portfolio.import_csv(&branch_id, &raw)?;
        info!(path = %path.display(), branch = %branch_id, imported, "rent roll imported");
    }

    let report = portfolio.report(share, today);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            print!(
                "{}",
                render_report(&report, &portfolio, &config.reporting.currency, args.list_units)
            );
        }
    }

    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let units = RentRollImporter::from_path(&args.csv)?;
    info!(path = %args.csv.display(), units = units.len(), "rent roll validated");

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&units)?),
        OutputFormat::Text => print!("{}", render_validation(&units)),
    }
    Ok(())
}

fn format_currency(value: f64, currency: &str) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{currency} {sign}{grouped}")
}

fn format_range(range: RevenueRange, currency: &str) -> String {
    format!(
        "{} to {}",
        format_currency(range.min(), currency),
        format_currency(range.max(), currency)
    )
}

fn render_report(
    report: &PortfolioReport,
    portfolio: &Portfolio,
    currency: &str,
    list_units: bool,
) -> String {
    let mut out = String::new();
    let totals = &report.totals;
    let share_pct = report.management_share.value() * 100.0;

    out.push_str("Property performance report\n");
    out.push_str(&format!("Generated {}\n", report.generated_on));
    out.push_str(&format!("Management share: {share_pct:.0}%\n"));

    out.push_str("\nPortfolio totals\n");
    out.push_str(&format!(
        "- Target yearly revenue: {}\n",
        format_range(totals.target_yearly_revenue, currency)
    ));
    out.push_str(&format!(
        "  management {} | owner {}\n",
        format_range(totals.target_share.primary, currency),
        format_range(totals.target_share.secondary, currency)
    ));
    out.push_str(&format!(
        "- Cash collected: {} (management {}, owner {})\n",
        format_currency(totals.cash_collected, currency),
        format_currency(totals.cash_share.primary, currency),
        format_currency(totals.cash_share.secondary, currency)
    ));
    out.push_str(&format!(
        "- Lifetime value: {} (management {}, owner {})\n",
        format_currency(totals.lifetime_value, currency),
        format_currency(totals.lifetime_share.primary, currency),
        format_currency(totals.lifetime_share.secondary, currency)
    ));

    for branch in &report.branches {
        out.push_str(&format!("\n{} ({} units)\n", branch.branch_name, branch.unit_count));
        out.push_str(&format!(
            "- {} one bedroom, {} studio, {} two bedroom\n",
            branch.unit_types.one_bedroom, branch.unit_types.studio, branch.unit_types.two_bedroom
        ));
        out.push_str(&format!(
            "- Monthly target: {}\n",
            format_range(branch.target_monthly_revenue, currency)
        ));
        out.push_str(&format!(
            "  management {} | owner {}\n",
            format_range(branch.monthly_target_share.primary, currency),
            format_range(branch.monthly_target_share.secondary, currency)
        ));
        out.push_str(&format!(
            "- Cash collected: {} of {} target\n",
            format_currency(branch.cash_collected, currency),
            format_currency(branch.target_yearly_revenue.max(), currency)
        ));

        if list_units {
            if let Some(entity) = portfolio.branch(&branch.branch_id) {
                for unit in &entity.apartments {
                    out.push_str(&render_unit(unit, currency));
                }
            }
        }
    }

    if report.source_breakdown.is_empty() {
        out.push_str("\nTenant acquisition channels: no data\n");
    } else {
        out.push_str("\nTenant acquisition channels\n");
        for entry in &report.source_breakdown {
            out.push_str(&format!("- {}: {}\n", entry.label, entry.count));
        }
    }

    out
}

fn render_unit(unit: &UnitRecord, currency: &str) -> String {
    format!(
        "  {} | {} | {} | {} x {} months | collected {} | {}\n",
        unit.number,
        unit.unit_type.label(),
        unit.status.label(),
        format_currency(unit.monthly_rent, currency),
        unit.contract_duration_months,
        format_currency(unit.cash_collected, currency),
        unit.how_heard.as_deref().unwrap_or("unknown source")
    )
}

fn render_validation(units: &[UnitRecord]) -> String {
    let mut out = format!("Rent roll accepted: {} units\n", units.len());

    out.push_str("\nBy type\n");
    for unit_type in UnitType::ordered() {
        let count = units.iter().filter(|unit| unit.unit_type == unit_type).count();
        out.push_str(&format!("- {}: {}\n", unit_type.label(), count));
    }

    out.push_str("\nBy status\n");
    for status in UnitStatus::ordered() {
        let count = units.iter().filter(|unit| unit.status == status).count();
        out.push_str(&format!("- {}: {}\n", status.label(), count));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid report date")
    }

    #[test]
    fn currency_groups_thousands_without_decimals() {
        assert_eq!(format_currency(0.0, "SAR"), "SAR 0");
        assert_eq!(format_currency(999.4, "SAR"), "SAR 999");
        assert_eq!(format_currency(1_625_832.0, "SAR"), "SAR 1,625,832");
        assert_eq!(format_currency(-1234.5, "USD"), "USD -1,235");
    }

    #[test]
    fn cli_defaults_to_report() {
        let cli = Cli::try_parse_from(["rent-roll"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["rent-roll", "report", "--share", "0.3", "--format", "json"])
            .expect("parses");
        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.share.map(SharePercentage::value), Some(0.3));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_share_above_one() {
        assert!(Cli::try_parse_from(["rent-roll", "report", "--share", "2"]).is_err());
    }

    #[test]
    fn text_report_lists_totals_and_channels() {
        let portfolio = Portfolio::sample();
        let report = portfolio.report(SharePercentage::DEFAULT, report_date());
        let text = render_report(&report, &portfolio, "SAR", true);

        assert!(text.contains("Target yearly revenue: SAR 1,625,832 to SAR 1,954,920"));
        assert!(text.contains("Mathwaa 33 - Al Olaya (26 units)"));
        assert!(text.contains("Word of Mouth: 7"));
        assert!(text.contains("33-005 (AirBnB) | Studio | Reserved"));
    }

    #[test]
    fn validation_summary_counts_types_and_statuses() {
        let units = RentRollImporter::parse(
            "Apt #,Type,Status,Cash Collected,Lifetime Value,Booking Source\n\
A-1,ST,RENTED,0,0,\nA-2,ST,VACANT,0,0,\n",
        )
        .expect("parse");
        let text = render_validation(&units);
        assert!(text.contains("accepted: 2 units"));
        assert!(text.contains("- Studio: 2"));
        assert!(text.contains("- Vacant: 1"));
    }
}
