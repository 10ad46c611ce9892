use crate::workflows::portfolio::{UnitStatus, UnitType};

/// A categorical cell that matched none of the known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} \"{value}\"")]
pub struct UnrecognizedValue {
    pub kind: &'static str,
    pub value: String,
}

/// Shorthand type codes used by leasing spreadsheets, checked before full labels.
const UNIT_TYPE_ALIASES: &[(&str, UnitType)] = &[
    ("1br", UnitType::OneBedroom),
    ("2br", UnitType::TwoBedroom),
    ("st", UnitType::Studio),
];

pub fn classify_unit_type(raw: &str) -> Result<UnitType, UnrecognizedValue> {
    let cleaned = raw.trim().to_lowercase();

    UNIT_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map(|(_, unit_type)| *unit_type)
        .or_else(|| {
            UnitType::ordered()
                .into_iter()
                .find(|unit_type| unit_type.label().to_lowercase() == cleaned)
        })
        .ok_or_else(|| UnrecognizedValue {
            kind: "type",
            value: raw.trim().to_string(),
        })
}

/// Matches on the status code prefix, so `RENTED - renewal pending` is still rented.
pub fn classify_unit_status(raw: &str) -> Result<UnitStatus, UnrecognizedValue> {
    let cleaned = raw.trim().to_uppercase();

    UnitStatus::ordered()
        .into_iter()
        .find(|status| cleaned.starts_with(status.code()))
        .ok_or_else(|| UnrecognizedValue {
            kind: "status",
            value: raw.trim().to_string(),
        })
}
