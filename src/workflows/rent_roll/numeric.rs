//! Lenient numeric cell parsing. Malformed amounts fall back to defaults instead of failing.

/// Keeps digits and dots, then reads the leading decimal number. `"SAR 6,000"` splits
/// on the comma before reaching here, so only `"SAR 6"` would be seen.
pub(crate) fn parse_amount(cell: Option<&str>) -> f64 {
    let digits: String = cell
        .unwrap_or_default()
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();

    leading_decimal(&digits)
        .and_then(|number| number.parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn leading_decimal(value: &str) -> Option<&str> {
    let mut seen_dot = false;
    let mut seen_digit = false;
    let mut end = 0;

    for (index, ch) in value.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = index + ch.len_utf8();
    }

    seen_digit.then(|| &value[..end])
}

/// Leading run of digits in a duration cell such as `"12 months"`. Runs too long for
/// a `u32` saturate rather than falling back to the default duration.
pub(crate) fn parse_months(cell: Option<&str>) -> Option<u32> {
    let trimmed = cell?.trim();
    let end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u32::MAX))
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_strips_currency_noise() {
        assert_eq!(parse_amount(Some("SAR 6000")), 6000.0);
        assert_eq!(parse_amount(Some(" 4583.33 ")), 4583.33);
        assert_eq!(parse_amount(Some("12.5.7")), 12.5);
        assert_eq!(parse_amount(Some(".5")), 0.5);
    }

    #[test]
    fn amount_defaults_to_zero() {
        assert_eq!(parse_amount(None), 0.0);
        assert_eq!(parse_amount(Some("")), 0.0);
        assert_eq!(parse_amount(Some("n/a")), 0.0);
        assert_eq!(parse_amount(Some(".")), 0.0);
    }

    #[test]
    fn months_reads_leading_digits() {
        assert_eq!(parse_months(Some("12 months")), Some(12));
        assert_eq!(parse_months(Some(" 6")), Some(6));
        assert_eq!(parse_months(Some("0")), Some(0));
        assert_eq!(parse_months(Some("about 3")), None);
        assert_eq!(parse_months(Some("")), None);
        assert_eq!(parse_months(None), None);
    }

    #[test]
    fn months_saturate_on_overflow() {
        assert_eq!(parse_months(Some("99999999999")), Some(u32::MAX));
        assert_eq!(parse_months(Some("4294967295 months")), Some(u32::MAX));
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_cents(55000.0 / 12.0), 4583.33);
        assert_eq!(round_cents(1000.0), 1000.0);
    }
}
