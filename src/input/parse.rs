//! Parsing of user-supplied amounts, rates and frequencies

use thiserror::Error;

/// Named compounding/contribution periods and their periods-per-year
pub const FREQUENCY_NAMES: [(&str, u32); 8] = [
    ("daily", 365),
    ("weekly", 52),
    ("biweekly", 26),
    ("monthly", 12),
    ("quarterly", 4),
    ("semiannually", 2),
    ("annually", 1),
    ("yearly", 1),
];

/// Errors from parsing CLI parameter strings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Unparseable currency amount
    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    /// Unparseable interest rate
    #[error("Invalid rate: {value}")]
    InvalidRate { value: String },

    /// Frequency that is neither a known name nor a positive integer
    #[error("Invalid frequency '{value}'. Use: {}, or an integer.", valid_frequency_names())]
    InvalidFrequency { value: String },
}

/// Comma-separated list of the recognized frequency names
fn valid_frequency_names() -> String {
    FREQUENCY_NAMES
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse an amount string, allowing commas and currency symbols.
///
/// `"10,000"`, `"$1234.56"` and `"10000"` all parse; anything left
/// unparseable after stripping `$`, commas and spaces is an error.
pub fn parse_amount(value: &str) -> Result<f64, ParseError> {
    let cleaned: String = value
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidAmount {
            value: value.to_string(),
        })
}

/// Parse a rate from its accepted spellings.
///
/// `"7%"` and `"7 %"` mean 0.07; `"0.07"` and `".07"` pass through.
/// Bare numbers of at least 1 are taken as percentages (7 means 7%),
/// values below 1 as decimal fractions.
pub fn parse_rate(value: &str) -> Result<f64, ParseError> {
    let trimmed = value.trim();

    if trimmed.contains('%') {
        let number: String = trimmed
            .chars()
            .filter(|c| *c != '%' && !c.is_whitespace())
            .collect();
        let rate = number
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidRate {
                value: value.to_string(),
            })?;
        return Ok(rate / 100.0);
    }

    let rate = trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidRate {
            value: value.to_string(),
        })?;

    if rate < 1.0 {
        Ok(rate)
    } else {
        Ok(rate / 100.0)
    }
}

/// Parse a frequency from a named period or a positive integer.
///
/// Names are matched case-insensitively against [`FREQUENCY_NAMES`].
pub fn parse_frequency(value: &str) -> Result<u32, ParseError> {
    let normalized = value.trim().to_lowercase();

    if let Some((_, freq)) = FREQUENCY_NAMES.iter().find(|(name, _)| *name == normalized) {
        return Ok(*freq);
    }

    match normalized.parse::<u32>() {
        Ok(freq) if freq >= 1 => Ok(freq),
        _ => Err(ParseError::InvalidFrequency {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_amount_plain_and_decorated() {
        assert_eq!(parse_amount("10000").unwrap(), 10_000.0);
        assert_eq!(parse_amount("10,000").unwrap(), 10_000.0);
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1_234.56);
        assert_eq!(parse_amount(" $ 500 ").unwrap(), 500.0);
        assert_eq!(parse_amount("-250").unwrap(), -250.0);
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("ten dollars"),
            Err(ParseError::InvalidAmount { .. })
        ));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("$,").is_err());
    }

    #[test]
    fn test_parse_rate_percent_forms() {
        assert_abs_diff_eq!(parse_rate("7%").unwrap(), 0.07);
        assert_abs_diff_eq!(parse_rate("7 %").unwrap(), 0.07);
        assert_abs_diff_eq!(parse_rate("7.5%").unwrap(), 0.075);
        assert_abs_diff_eq!(parse_rate("-5%").unwrap(), -0.05);
    }

    #[test]
    fn test_parse_rate_decimal_forms() {
        assert_abs_diff_eq!(parse_rate("0.07").unwrap(), 0.07);
        assert_abs_diff_eq!(parse_rate(".07").unwrap(), 0.07);
        assert_abs_diff_eq!(parse_rate("-0.02").unwrap(), -0.02);
    }

    #[test]
    fn test_parse_rate_bare_numbers_at_least_one_are_percentages() {
        assert_abs_diff_eq!(parse_rate("7").unwrap(), 0.07);
        assert_abs_diff_eq!(parse_rate("1").unwrap(), 0.01);
        assert_abs_diff_eq!(parse_rate("0.99").unwrap(), 0.99);
    }

    #[test]
    fn test_parse_rate_rejects_garbage() {
        assert!(matches!(
            parse_rate("seven"),
            Err(ParseError::InvalidRate { .. })
        ));
        assert!(parse_rate("%").is_err());
    }

    #[test]
    fn test_parse_frequency_names() {
        assert_eq!(parse_frequency("daily").unwrap(), 365);
        assert_eq!(parse_frequency("weekly").unwrap(), 52);
        assert_eq!(parse_frequency("biweekly").unwrap(), 26);
        assert_eq!(parse_frequency("monthly").unwrap(), 12);
        assert_eq!(parse_frequency("quarterly").unwrap(), 4);
        assert_eq!(parse_frequency("semiannually").unwrap(), 2);
        assert_eq!(parse_frequency("annually").unwrap(), 1);
        assert_eq!(parse_frequency("yearly").unwrap(), 1);
    }

    #[test]
    fn test_parse_frequency_is_case_insensitive() {
        assert_eq!(parse_frequency("Monthly").unwrap(), 12);
        assert_eq!(parse_frequency(" DAILY ").unwrap(), 365);
    }

    #[test]
    fn test_parse_frequency_raw_integer() {
        assert_eq!(parse_frequency("12").unwrap(), 12);
        assert_eq!(parse_frequency("365").unwrap(), 365);
        assert_eq!(parse_frequency("1").unwrap(), 1);
    }

    #[test]
    fn test_parse_frequency_rejects_unknown_and_non_positive() {
        let err = parse_frequency("fortnightly").unwrap_err();
        assert!(err.to_string().contains("daily"));
        assert!(err.to_string().contains("yearly"));
        assert!(parse_frequency("0").is_err());
        assert!(parse_frequency("-4").is_err());
    }
}
