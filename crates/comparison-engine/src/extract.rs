//! Best-effort parsers for the free-text fields of an analysis payload.
//!
//! Each parser returns `None` when nothing usable is found; a miss is not
//! an error, the contract is simply excluded from winner selection for
//! that metric.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(\.\d+)?").expect("valid number pattern"));

static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([\d,]+)").expect("valid currency pattern"));

static TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(year|month)").expect("valid term pattern"));

/// First number in a royalty-rate string: `"15% of net"` → `15.0`.
pub fn parse_rate(text: &str) -> Option<f64> {
    NUMBER_RE.find(text)?.as_str().parse().ok()
}

/// First currency-looking amount, commas stripped: `"$5,000"` → `5000.0`.
pub fn parse_amount(text: &str) -> Option<f64> {
    let captures = CURRENCY_RE.captures(text)?;
    let digits = captures.get(1)?.as_str().replace(',', "");
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Duration normalized to months: `"2 years"` → `24.0`, `"18 months"` → `18.0`.
pub fn parse_term_months(text: &str) -> Option<f64> {
    let captures = TERM_RE.captures(text)?;
    let count: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2)?.as_str().to_lowercase();
    if unit == "year" {
        Some(count * 12.0)
    } else {
        Some(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_takes_first_number() {
        assert_eq!(parse_rate("15%"), Some(15.0));
        assert_eq!(parse_rate("12.5% escalating to 15%"), Some(12.5));
        assert_eq!(parse_rate("to be negotiated"), None);
        assert_eq!(parse_rate(""), None);
    }

    #[test]
    fn amount_strips_separators() {
        assert_eq!(parse_amount("$5,000"), Some(5000.0));
        assert_eq!(parse_amount("$1,250,000 recoupable"), Some(1_250_000.0));
        assert_eq!(parse_amount("5000 USD"), Some(5000.0));
        assert_eq!(parse_amount("no advance"), None);
    }

    #[test]
    fn term_normalizes_years_to_months() {
        assert_eq!(parse_term_months("2 years"), Some(24.0));
        assert_eq!(parse_term_months("1 year"), Some(12.0));
        assert_eq!(parse_term_months("18 months"), Some(18.0));
        assert_eq!(parse_term_months("3 Year initial period"), Some(36.0));
        assert_eq!(parse_term_months("perpetual"), None);
    }
}
