mod classify;
mod header;
mod numeric;
mod parser;

use crate::workflows::portfolio::{PortfolioError, UnitRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

pub use classify::{classify_unit_status, classify_unit_type, UnrecognizedValue};

/// Reasons a rent roll export is rejected. Any of these aborts the whole import.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("insufficient rows: a header and at least one data row are required (found {found} non-empty lines)")]
    InsufficientRows { found: usize },
    #[error("missing column: {0}")]
    MissingColumn(&'static str),
    #[error("row {row}: empty apartment number")]
    EmptyApartmentNumber { row: usize },
    #[error("row {row}: invalid type \"{value}\"")]
    InvalidType { row: usize, value: String },
    #[error("row {row}: invalid status \"{value}\"")]
    InvalidStatus { row: usize, value: String },
}

impl ValidationError {
    /// Spreadsheet row number (header is row 1) for row-level failures.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::InsufficientRows { .. } | Self::MissingColumn(_) => None,
            Self::EmptyApartmentNumber { row }
            | Self::InvalidType { row, .. }
            | Self::InvalidStatus { row, .. } => Some(*row),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RentRollImportError {
    #[error("failed to read rent roll export: {0}")]
    Io(#[from] std::io::Error),
    #[error("rent roll rejected: {0}")]
    Validation(#[from] ValidationError),
    #[error("could not apply rent roll to portfolio: {0}")]
    Portfolio(#[from] PortfolioError),
}

impl RentRollImportError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

pub struct RentRollImporter;

impl RentRollImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<UnitRecord>, RentRollImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Vec<UnitRecord>, RentRollImportError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Self::parse(&raw)
    }

    /// Normalizes a full export into unit records, or rejects it without partial results.
    pub fn parse(raw: &str) -> Result<Vec<UnitRecord>, RentRollImportError> {
        match parser::parse_units(raw) {
            Ok(units) => {
                debug!(units = units.len(), "rent roll parsed");
                Ok(units)
            }
            Err(err) => {
                warn!(error = %err, row = err.row(), "rent roll import rejected");
                Err(err.into())
            }
        }
    }
}
