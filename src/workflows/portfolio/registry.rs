use super::domain::{BranchEntity, PortfolioError, UnitRecord};
use super::metrics::AggregatedMetrics;
use super::report::PortfolioReport;
use super::share::SharePercentage;
use crate::workflows::rent_roll::{RentRollImportError, RentRollImporter};
use chrono::NaiveDate;
use tracing::info;

/// The set of managed branches a report is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Portfolio {
    branches: Vec<BranchEntity>,
}

impl Portfolio {
    pub fn new(branches: Vec<BranchEntity>) -> Self {
        Self { branches }
    }

    pub fn branches(&self) -> &[BranchEntity] {
        &self.branches
    }

    pub fn branch(&self, branch_id: &str) -> Option<&BranchEntity> {
        self.branches.iter().find(|branch| branch.id == branch_id)
    }

    /// Branch targeted when an import does not name one.
    pub fn default_branch_id(&self) -> Result<&str, PortfolioError> {
        self.branches
            .first()
            .map(|branch| branch.id.as_str())
            .ok_or(PortfolioError::Empty)
    }

    /// Replaces a branch's units wholesale and returns the previous collection.
    pub fn replace_apartments(
        &mut self,
        branch_id: &str,
        apartments: Vec<UnitRecord>,
    ) -> Result<Vec<UnitRecord>, PortfolioError> {
        let branch = self
            .branches
            .iter_mut()
            .find(|branch| branch.id == branch_id)
            .ok_or_else(|| PortfolioError::BranchNotFound(branch_id.to_string()))?;

        let previous = branch.replace_apartments(apartments);
        info!(
            branch = %branch.id,
            replaced = previous.len(),
            units = branch.apartments.len(),
            "branch apartments replaced"
        );
        Ok(previous)
    }

    /// Parses a rent roll export and swaps it into the branch.
    ///
    /// The branch is looked up before parsing and left untouched if either step fails.
    pub fn import_csv(&mut self, branch_id: &str, raw: &str) -> Result<usize, RentRollImportError> {
        if self.branch(branch_id).is_none() {
            return Err(PortfolioError::BranchNotFound(branch_id.to_string()).into());
        }

        let units = RentRollImporter::parse(raw)?;
        let imported = units.len();
        self.replace_apartments(branch_id, units)?;
        Ok(imported)
    }

    pub fn metrics(&self) -> AggregatedMetrics {
        AggregatedMetrics::compute(&self.branches)
    }

    pub fn report(&self, share: SharePercentage, generated_on: NaiveDate) -> PortfolioReport {
        PortfolioReport::build(&self.branches, share, generated_on)
    }
}
