/// Salary text as entered by recruiters, e.g. "80k-120k USD" or "90k EUR",
/// parsed once at write time into a numeric range so filters stay exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: i64,
    pub max: Option<i64>,
    pub currency: Option<String>,
}

impl SalaryRange {
    /// Best-effort parse of the "NNk-MMk CUR" / "NNk CUR" shapes. Anything
    /// else yields `None` and the job stays out of salary-filtered results.
    pub fn parse(text: &str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        let amounts = tokens.next()?;
        let rest: Vec<&str> = tokens.collect();
        let currency = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };

        let (min, max) = match amounts.split_once('-') {
            Some((lo, hi)) => (parse_k(lo)?, Some(parse_k(hi)?)),
            None => (parse_k(amounts)?, None),
        };
        if let Some(max) = max {
            if max < min {
                return None;
            }
        }
        Some(SalaryRange { min, max, currency })
    }
}

fn parse_k(token: &str) -> Option<i64> {
    let digits = token
        .trim()
        .strip_suffix('k')
        .or_else(|| token.trim().strip_suffix('K'))?;
    let n: i64 = digits.parse().ok()?;
    if n < 0 {
        return None;
    }
    // oversized amounts fall into the unparseable path instead of wrapping
    n.checked_mul(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_range_with_currency() {
        let parsed = SalaryRange::parse("80k-120k USD").unwrap();
        assert_eq!(parsed.min, 80_000);
        assert_eq!(parsed.max, Some(120_000));
        assert_eq!(parsed.currency.as_deref(), Some("USD"));
    }

    #[test]
    fn parses_single_value() {
        let parsed = SalaryRange::parse("90k EUR").unwrap();
        assert_eq!(parsed.min, 90_000);
        assert_eq!(parsed.max, None);
        assert_eq!(parsed.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn parses_without_currency() {
        let parsed = SalaryRange::parse("100k-150k").unwrap();
        assert_eq!(parsed.min, 100_000);
        assert_eq!(parsed.max, Some(150_000));
        assert_eq!(parsed.currency, None);
    }

    #[test]
    fn rejects_amounts_that_overflow() {
        assert_eq!(SalaryRange::parse("9223372036854775807k"), None);
        assert_eq!(SalaryRange::parse("80k-9223372036854775807k USD"), None);
        assert_eq!(SalaryRange::parse("9223372036854776k USD"), None);
        // the largest amount that still fits stays parseable
        assert_eq!(
            SalaryRange::parse("9223372036854775k").map(|s| s.min),
            Some(9_223_372_036_854_775_000)
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(SalaryRange::parse("competitive"), None);
        assert_eq!(SalaryRange::parse("80000-120000 USD"), None);
        assert_eq!(SalaryRange::parse(""), None);
        assert_eq!(SalaryRange::parse("120k-80k USD"), None);
    }
}
