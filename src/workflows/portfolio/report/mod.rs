mod summary;
pub mod views;

pub use summary::source_entries;
pub use views::PortfolioReport;
