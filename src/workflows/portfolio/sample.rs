use super::domain::{BranchEntity, RevenueRange, UnitRecord, UnitStatus, UnitType};
use super::registry::Portfolio;

use super::domain::UnitStatus::{Rented, Reserved};
use super::domain::UnitType::{OneBedroom, Studio, TwoBedroom};

// number, type, status, monthly rent, duration, cash collected, source, lifetime value
type SampleRow = (&'static str, UnitType, UnitStatus, f64, u32, f64, &'static str, f64);

const AL_OLAYA_UNITS: &[SampleRow] = &[
    ("33-001", OneBedroom, Rented, 5800.0, 1, 5800.0, "Word of Mouth", 5800.0),
    ("33-002", OneBedroom, Rented, 6280.0, 12, 6280.0, "Word of Mouth", 75360.0),
    ("33-003", TwoBedroom, Rented, 6800.0, 12, 6800.0, "Word of Mouth", 81600.0),
    ("33-004", TwoBedroom, Rented, 7000.0, 12, 7000.0, "Word of Mouth", 84000.0),
    ("33-005 (AirBnB)", Studio, Reserved, 7675.0, 0, 0.0, "AirBnB", 0.0),
    ("33-006", OneBedroom, Rented, 6820.0, 12, 6820.0, "Paid Social Advertising", 81840.0),
    ("33-007", OneBedroom, Rented, 6990.0, 12, 6990.0, "Paid Social Advertising", 83880.0),
    ("33-008", OneBedroom, Rented, 6210.0, 1, 6210.0, "Paid Social Advertising", 6210.0),
    ("33-009", OneBedroom, Rented, 4583.33, 12, 27500.0, "Uknown", 55000.0),
    ("33-010", OneBedroom, Rented, 5940.0, 3, 5940.0, "Uknown", 17820.0),
    ("33-011", OneBedroom, Rented, 6250.0, 12, 6250.0, "Word of Mouth", 75000.0),
    ("33-012", OneBedroom, Rented, 5330.0, 12, 5330.0, "Walk in", 63960.0),
    ("33-013", OneBedroom, Rented, 5640.0, 12, 5640.0, "Bayut listing", 67680.0),
    ("33-014", OneBedroom, Rented, 6490.0, 12, 6490.0, "Paid Social Advertising", 77880.0),
    ("33-015", Studio, Rented, 5470.0, 12, 5470.0, "Word of Mouth", 65640.0),
    ("33-016", OneBedroom, Rented, 6090.0, 12, 6090.0, "Word of Mouth", 73080.0),
    ("33-017", OneBedroom, Rented, 6270.0, 12, 6270.0, "Bayut listing", 75240.0),
    ("33-018", OneBedroom, Rented, 5600.0, 12, 5600.0, "Walk in", 67200.0),
    ("33-019", OneBedroom, Rented, 5506.0, 12, 5506.0, "Aqiq Building Board", 66072.0),
    ("33-020", OneBedroom, Rented, 6480.0, 12, 6480.0, "Paid Social Advertising", 77760.0),
    ("33-021 (AirBnB)", Studio, Reserved, 7400.0, 1, 3111.0, "AirBnB", 3111.0),
    ("33-022 (AirBnB)", Studio, Reserved, 7238.0, 0, 0.0, "AirBnB", 0.0),
    ("33-023", Studio, Rented, 5350.0, 3, 5350.0, "Walk in", 16050.0),
    ("33-024", Studio, Rented, 5620.0, 9, 5620.0, "Bayut listing", 50580.0),
    ("33-025", Studio, Rented, 5100.0, 12, 5100.0, "Bayut listing", 61200.0),
    ("33-026", OneBedroom, Rented, 5880.0, 12, 5880.0, "Paid Social Advertising", 70560.0),
];

const TARGET_YEARLY_MIN: f64 = 1_625_832.0;
const TARGET_YEARLY_MAX: f64 = 1_954_920.0;

impl Portfolio {
    /// Reference portfolio used when no rent roll export is supplied.
    pub fn sample() -> Self {
        let target = RevenueRange::new(TARGET_YEARLY_MIN, TARGET_YEARLY_MAX).unwrap_or_default();
        let units = AL_OLAYA_UNITS.iter().map(sample_unit).collect();
        Portfolio::new(vec![
            BranchEntity::new("mathwaa-33", "Mathwaa 33 - Al Olaya", target).with_apartments(units)
        ])
    }
}

fn sample_unit(row: &SampleRow) -> UnitRecord {
    let &(number, unit_type, status, monthly_rent, duration, cash_collected, source, lifetime) = row;
    UnitRecord {
        id: number.to_string(),
        number: number.to_string(),
        unit_type,
        status,
        monthly_rent,
        contract_duration_months: duration,
        cash_collected,
        how_heard: Some(source.to_string()),
        lifetime_value: lifetime,
    }
}
