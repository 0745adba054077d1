//! Numeric normalization for API payloads.
//!
//! The backend is loose about number formats: amounts arrive either as JSON
//! numbers or as locale-formatted strings (`"1.234,56"`), and interest rates
//! arrive either as decimal fractions (`0.6`) or as percentages (`60`).
//! These functions fold every form into one canonical representation so the
//! rest of the code only ever sees plain `f64` values.

use thiserror::Error;

/// Errors raised when parsing a locale-formatted decimal string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecimalParseError {
    #[error("Empty decimal string")]
    Empty,
    #[error("Invalid decimal string: {0}")]
    Invalid(String),
}

/// Parse a decimal string that may use `.` or `,` as separators.
///
/// Accepted forms:
/// - Plain decimal: `"1234.56"` -> `1234.56`
/// - Decimal comma: `"1234,56"` -> `1234.56`
/// - Mixed separators, where the rightmost of `.`/`,` is the decimal
///   separator and the other one groups thousands: `"1.234,56"` and
///   `"1,234.56"` both -> `1234.56`
/// - A single separator kind repeated is grouping only: `"1.234.567"` and
///   `"1,234,567"` both -> `1234567.0`
///
/// A separator that appears exactly once is always read as the decimal
/// separator, so `"1.234"` parses as `1.234`, not `1234.0`. Grouped
/// integers must repeat the separator or carry both kinds.
///
/// # Examples
///
/// ```
/// use credidesk_core::numeric::parse_flexible_decimal;
///
/// assert_eq!(parse_flexible_decimal("1.234,56"), Ok(1234.56));
/// assert_eq!(parse_flexible_decimal("60"), Ok(60.0));
/// assert!(parse_flexible_decimal("n/a").is_err());
/// ```
pub fn parse_flexible_decimal(input: &str) -> Result<f64, DecimalParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DecimalParseError::Empty);
    }

    let dots = trimmed.matches('.').count();
    let commas = trimmed.matches(',').count();

    let normalized = match (dots, commas) {
        // Both separators present: the rightmost one is the decimal point.
        (1.., 1..) => {
            let last_dot = trimmed.rfind('.').unwrap_or(0);
            let last_comma = trimmed.rfind(',').unwrap_or(0);
            if last_dot > last_comma {
                trimmed.replace(',', "")
            } else {
                trimmed.replace('.', "").replace(',', ".")
            }
        }
        // Repeated commas group thousands; a single comma is the decimal.
        (0, 1) => trimmed.replace(',', "."),
        (0, 2..) => trimmed.replace(',', ""),
        // Repeated dots group thousands; a single dot is already canonical.
        (2.., 0) => trimmed.replace('.', ""),
        _ => trimmed.to_string(),
    };

    normalized
        .parse::<f64>()
        .map_err(|_| DecimalParseError::Invalid(input.to_string()))
}

/// Normalize an interest rate into a decimal fraction.
///
/// Values above `1` are percentages and are divided by 100 (`60` -> `0.60`);
/// values at or below `1` pass through as already-decimal fractions, so a
/// literal `1` reads as 100%, not 1%.
///
/// # Examples
///
/// ```
/// use credidesk_core::numeric::normalize_rate;
///
/// assert_eq!(normalize_rate(60.0), 0.60);
/// assert_eq!(normalize_rate(0.60), 0.60);
/// assert_eq!(normalize_rate(100.0), 1.0);
/// ```
pub fn normalize_rate(rate: f64) -> f64 {
    if rate > 1.0 {
        rate / 100.0
    } else {
        rate
    }
}
