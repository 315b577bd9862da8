//! Utility helpers shared by the repository modules.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a TEXT column into a Decimal, falling back to zero on garbage.
///
/// Decimal columns are stored as strings; a row that fails to parse is a
/// bug elsewhere, so it is logged rather than bubbled up as a query error.
pub(crate) fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e) => {
            log::error!(
                "Failed to parse {} '{}' as Decimal (err: {}). Falling back to ZERO.",
                field_name,
                value_str,
                e
            );
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_decimal("175.50", "price"), dec!(175.50));
        assert_eq!(parse_decimal("-12.5", "pl"), dec!(-12.5));
    }

    #[test]
    fn falls_back_to_zero_on_garbage() {
        assert_eq!(parse_decimal("not-a-number", "price"), Decimal::ZERO);
    }
}
