use regex::Regex;
use std::sync::OnceLock;

/// Price-text normalization for listings entered as free text.
///
/// Admins type prices the way Indian listings are written ("₹1.75 Crore",
/// "₹45 Lakh", "1250000"), so the search filter needs a comparable
/// magnitude, not the raw string. Parsing is deliberately lenient: the
/// filter must never crash on dirty data, so anything unparsable
/// normalizes to 0.

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

fn amount_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // first maximal run of digits with at most one decimal point
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)?").unwrap())
}

/// Parse a free-text price into a non-negative magnitude in base currency
/// units. "crore" and "lakh" (any case) act as unit multipliers; without a
/// unit the numeric portion is taken literally.
pub fn normalize_price(text: &str) -> f64 {
    let magnitude = amount_pattern()
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    let lower = text.to_lowercase();
    let multiplier = if lower.contains("crore") {
        CRORE
    } else if lower.contains("lakh") {
        LAKH
    } else {
        1.0
    };

    magnitude * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crore_multiplier() {
        assert_eq!(normalize_price("₹1.75 Crore"), 17_500_000.0);
        assert_eq!(normalize_price("2 crore"), 20_000_000.0);
    }

    #[test]
    fn test_lakh_multiplier() {
        assert_eq!(normalize_price("₹45 Lakh"), 4_500_000.0);
        assert_eq!(normalize_price("3.5 LAKH"), 350_000.0);
    }

    #[test]
    fn test_plain_numeric() {
        assert_eq!(normalize_price("1250000"), 1_250_000.0);
        assert_eq!(normalize_price("₹ 99500"), 99_500.0);
    }

    #[test]
    fn test_no_digits_is_zero() {
        assert_eq!(normalize_price("free"), 0.0);
        assert_eq!(normalize_price(""), 0.0);
        assert_eq!(normalize_price("price on request"), 0.0);
    }

    #[test]
    fn test_first_digit_run_wins() {
        // only the first maximal run is read
        assert_eq!(normalize_price("45 to 60 Lakh"), 4_500_000.0);
    }
}
