use super::ValidationError;
use csv::StringRecord;

/// Logical columns recognised in a rent roll header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Column {
    AptNumber,
    Type,
    Status,
    MonthlyRent,
    CashCollected,
    Duration,
    LifetimeValue,
    Source,
}

impl Column {
    const COUNT: usize = 8;

    /// Recognition order: a header cell maps to the first column whose prefix it starts with.
    const RECOGNITION: [Self; Self::COUNT] = [
        Self::AptNumber,
        Self::Type,
        Self::Status,
        Self::MonthlyRent,
        Self::CashCollected,
        Self::Duration,
        Self::LifetimeValue,
        Self::Source,
    ];

    const REQUIRED: [Self; 6] = [
        Self::AptNumber,
        Self::Type,
        Self::Status,
        Self::CashCollected,
        Self::LifetimeValue,
        Self::Source,
    ];

    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::AptNumber => "Apt #",
            Self::Type => "Type",
            Self::Status => "Status",
            Self::MonthlyRent => "Monthly Rent",
            Self::CashCollected => "Cash Collected",
            Self::Duration => "Duration",
            Self::LifetimeValue => "Lifetime Value",
            Self::Source => "Source",
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::AptNumber => "apt",
            Self::Type => "type",
            Self::Status => "status",
            Self::MonthlyRent => "monthly rent",
            Self::CashCollected => "cash collected",
            Self::Duration => "estimated",
            Self::LifetimeValue => "lifetime",
            Self::Source => "booking source",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }

    fn recognize(header: &str) -> Option<Self> {
        let lowered = header.to_lowercase();
        Self::RECOGNITION
            .into_iter()
            .find(|column| lowered.starts_with(column.prefix()))
    }
}

/// Column positions resolved from a header row. Required columns are guaranteed present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnIndex {
    pub(crate) apt_number: usize,
    pub(crate) unit_type: usize,
    pub(crate) status: usize,
    pub(crate) monthly_rent: Option<usize>,
    pub(crate) cash_collected: usize,
    pub(crate) duration: Option<usize>,
    pub(crate) lifetime_value: usize,
    pub(crate) source: usize,
}

pub(crate) fn clean_header_cell(cell: &str) -> String {
    cell.replace(['"', '\u{feff}'], "").trim().to_string()
}

pub(crate) fn resolve(header: &StringRecord) -> Result<ColumnIndex, ValidationError> {
    let mut slots: [Option<usize>; Column::COUNT] = [None; Column::COUNT];

    for (index, cell) in header.iter().enumerate() {
        if let Some(column) = Column::recognize(&clean_header_cell(cell)) {
            let slot = &mut slots[column.slot()];
            if slot.is_none() {
                *slot = Some(index);
            }
        }
    }

    if let Some(missing) = Column::REQUIRED
        .into_iter()
        .find(|column| slots[column.slot()].is_none())
    {
        return Err(ValidationError::MissingColumn(missing.label()));
    }

    let required = |column: Column| slots[column.slot()].unwrap_or_default();

    Ok(ColumnIndex {
        apt_number: required(Column::AptNumber),
        unit_type: required(Column::Type),
        status: required(Column::Status),
        monthly_rent: slots[Column::MonthlyRent.slot()],
        cash_collected: required(Column::CashCollected),
        duration: slots[Column::Duration.slot()],
        lifetime_value: required(Column::LifetimeValue),
        source: required(Column::Source),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> StringRecord {
        StringRecord::from(cells.to_vec())
    }

    #[test]
    fn resolves_prefixes_case_insensitively() {
        let index = resolve(&header(&[
            "\"Booking Source\"",
            " LIFETIME VALUE (SAR) ",
            "Apt#",
            "Unit Notes",
            "type",
            "Status Detail",
            "Cash collected to date",
        ]))
        .expect("header resolves");

        assert_eq!(index.source, 0);
        assert_eq!(index.lifetime_value, 1);
        assert_eq!(index.apt_number, 2);
        assert_eq!(index.unit_type, 4);
        assert_eq!(index.status, 5);
        assert_eq!(index.cash_collected, 6);
        assert_eq!(index.monthly_rent, None);
        assert_eq!(index.duration, None);
    }

    #[test]
    fn first_matching_cell_wins() {
        let index = resolve(&header(&[
            "Apt #",
            "Type",
            "Status",
            "Cash Collected",
            "Lifetime Value",
            "Booking Source",
            "Apt Notes",
            "Estimated Duration",
            "Estimated Move Out",
        ]))
        .expect("header resolves");

        assert_eq!(index.apt_number, 0);
        assert_eq!(index.duration, Some(7));
    }

    #[test]
    fn reports_first_missing_required_column() {
        let error = resolve(&header(&["Apt #", "Type", "Status", "Booking Source"]))
            .expect_err("missing columns");
        assert_eq!(error, ValidationError::MissingColumn("Cash Collected"));
    }

    #[test]
    fn strips_quotes_and_byte_order_mark() {
        assert_eq!(clean_header_cell("\u{feff}\"Apt #\" "), "Apt #");
    }
}
