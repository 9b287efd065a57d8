//! Input validation rules.
//!
//! Everything the user types is checked here before any inventory operation
//! runs. The inventory itself trusts its callers: it never rejects a name or a
//! quantity, so these rules are the only line of defence for user input.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};
use crate::DISPLAY_DATE_FORMAT;

/// Validates an item name and returns it trimmed.
///
/// ```
/// use foodtrack_core::validation::validate_name;
///
/// assert_eq!(validate_name("  Milk ").unwrap(), "Milk");
/// assert!(validate_name("   ").is_err());
/// ```
pub fn validate_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::required("name"));
    }
    Ok(name.to_string())
}

/// Validates a search keyword and returns it trimmed.
pub fn validate_keyword(keyword: &str) -> DomainResult<String> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(DomainError::required("keyword"));
    }
    Ok(keyword.to_string())
}

/// Parses a base-10 integer quantity. Sign is not checked here.
pub fn parse_quantity(input: &str) -> DomainResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|e| DomainError::invalid_format("quantity", e.to_string()))
}

/// Parses a quantity that must be strictly positive (new stock).
pub fn parse_positive_quantity(input: &str) -> DomainResult<i64> {
    let qty = parse_quantity(input)?;
    if qty <= 0 {
        return Err(DomainError::must_be_positive("quantity"));
    }
    Ok(qty)
}

/// Parses a day count for near-expiry queries.
pub fn parse_days(input: &str) -> DomainResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|e| DomainError::invalid_format("days", e.to_string()))
}

/// Parses a user-facing `DD/MM/YYYY` date.
pub fn parse_display_date(input: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DISPLAY_DATE_FORMAT)
        .map_err(|_| DomainError::invalid_format("expiry date", "use DD/MM/YYYY"))
}

/// Formats a date in the user-facing `DD/MM/YYYY` form.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(validate_name(" Greek yoghurt ").unwrap(), "Greek yoghurt");
        assert_eq!(validate_name("").unwrap_err(), DomainError::required("name"));
    }

    #[test]
    fn keyword_is_required() {
        assert_eq!(validate_keyword("\t").unwrap_err().field(), "keyword");
        assert_eq!(validate_keyword(" mil ").unwrap(), "mil");
    }

    #[test]
    fn positive_quantity_rejects_zero_and_negative() {
        assert_eq!(parse_positive_quantity("3").unwrap(), 3);
        assert_eq!(
            parse_positive_quantity("0").unwrap_err(),
            DomainError::must_be_positive("quantity")
        );
        assert_eq!(
            parse_positive_quantity("-2").unwrap_err(),
            DomainError::must_be_positive("quantity")
        );
    }

    #[test]
    fn quantity_must_be_an_integer() {
        assert!(matches!(
            parse_quantity("2.5"),
            Err(DomainError::InvalidFormat { field: "quantity", .. })
        ));
        assert!(parse_quantity("abc").is_err());
        // Updates may set any integer, including zero.
        assert_eq!(parse_quantity("0").unwrap(), 0);
    }

    #[test]
    fn days_accepts_signed_integers() {
        assert_eq!(parse_days("3").unwrap(), 3);
        assert_eq!(parse_days("-1").unwrap(), -1);
        assert_eq!(parse_days("soon").unwrap_err().field(), "days");
    }

    #[test]
    fn display_dates_use_day_month_year() {
        assert_eq!(parse_display_date("10/06/2024").unwrap(), date(2024, 6, 10));
        assert_eq!(format_display_date(date(2024, 6, 1)), "01/06/2024");
    }

    #[test]
    fn display_date_rejects_iso_and_impossible_dates() {
        assert!(parse_display_date("2024-06-10").is_err());
        assert!(parse_display_date("31/02/2024").is_err());
        assert!(parse_display_date("").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: display formatting and parsing agree for every valid date.
            #[test]
            fn display_date_round_trips(days in 0i64..200_000) {
                let d = date(1900, 1, 1) + chrono::Duration::days(days);
                prop_assert_eq!(parse_display_date(&format_display_date(d)).unwrap(), d);
            }
        }
    }
}
