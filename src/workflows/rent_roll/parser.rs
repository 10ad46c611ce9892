use super::classify::{classify_unit_status, classify_unit_type};
use super::header::{self, ColumnIndex};
use super::numeric::{parse_amount, parse_months, round_cents};
use super::ValidationError;
use crate::workflows::portfolio::UnitRecord;
use csv::StringRecord;

/// Duration assumed when the export has no usable value.
const DEFAULT_DURATION_MONTHS: u32 = 1;

pub(crate) fn parse_units(raw: &str) -> Result<Vec<UnitRecord>, ValidationError> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(ValidationError::InsufficientRows { found: lines.len() });
    }

    // Quoting is off: every comma separates cells, quotes included. Records end at
    // `\n` only, so a stray `\r` stays inside its cell like any other character.
    let text = lines.join("\n");
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(text.as_bytes());

    // The text is valid UTF-8 and unquoted with flexible widths, so reading cannot fail.
    let mut records = csv_reader.records().flatten();

    let header_row = records
        .next()
        .ok_or(ValidationError::InsufficientRows { found: 0 })?;
    let columns = header::resolve(&header_row)?;

    records
        .enumerate()
        .map(|(index, record)| parse_row(&columns, &record, index + 2))
        .collect()
}

fn parse_row(
    columns: &ColumnIndex,
    record: &StringRecord,
    row: usize,
) -> Result<UnitRecord, ValidationError> {
    let cell = move |index: usize| record.get(index).unwrap_or_default();
    let optional_cell = move |index: Option<usize>| index.and_then(|index| record.get(index));

    let number = cell(columns.apt_number).trim();
    if number.is_empty() {
        return Err(ValidationError::EmptyApartmentNumber { row });
    }

    let unit_type = classify_unit_type(cell(columns.unit_type))
        .map_err(|err| ValidationError::InvalidType { row, value: err.value })?;
    let status = classify_unit_status(cell(columns.status))
        .map_err(|err| ValidationError::InvalidStatus { row, value: err.value })?;

    let lifetime_value = parse_amount(Some(cell(columns.lifetime_value)));

    let mut contract_duration_months =
        parse_months(optional_cell(columns.duration)).unwrap_or(DEFAULT_DURATION_MONTHS);
    if contract_duration_months == 0 && lifetime_value > 0.0 {
        contract_duration_months = DEFAULT_DURATION_MONTHS;
    }

    let mut monthly_rent = parse_amount(optional_cell(columns.monthly_rent));
    if monthly_rent == 0.0 && lifetime_value > 0.0 && contract_duration_months > 0 {
        monthly_rent = round_cents(lifetime_value / f64::from(contract_duration_months));
    }

    let cash_collected = parse_amount(Some(cell(columns.cash_collected)));

    let source = cell(columns.source).trim();
    let how_heard = (!source.is_empty()).then(|| source.to_string());

    Ok(UnitRecord {
        id: number.to_string(),
        number: number.to_string(),
        unit_type,
        status,
        monthly_rent,
        contract_duration_months,
        cash_collected,
        how_heard,
        lifetime_value,
    })
}
