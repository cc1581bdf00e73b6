//! Input shapes accepted by [`parse_when`](crate::parse_when).
//!
//! A "when" value is either a scalar (a number, or text such as `"75"`,
//! `">=50"` or `"100/200"`) or an object carrying a list of Linked Places
//! style timespans. Both are modeled by [`When`], which deserializes from
//! either shape without a tag.

use serde::{Deserialize, Serialize};

// ── Scalars ─────────────────────────────────────────────────────────────────

/// A number or a piece of text encoding a year, a lower bound, or a range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Whether this scalar short-circuits `parse_when` to `None`.
    ///
    /// Numeric zero, NaN and the empty string are blank. The text `"0"` is
    /// not.
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Number(n) => *n == 0.0 || n.is_nan(),
            Scalar::Text(s) => s.is_empty(),
        }
    }

    /// Coerce this scalar to a whole year.
    ///
    /// Numbers are truncated toward zero. Text uses leading-integer parsing
    /// (see [`parse_leading_int`]).
    pub fn to_year(&self) -> Option<i64> {
        match self {
            Scalar::Number(n) => truncate_to_year(*n),
            Scalar::Text(s) => parse_leading_int(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n as f64)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

// ── Timespans ───────────────────────────────────────────────────────────────

/// One end of a timespan. Only the `in` property is read; sibling properties
/// such as `earliest`/`latest` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimespanBound {
    #[serde(rename = "in", default, skip_serializing_if = "Option::is_none")]
    pub at: Option<Scalar>,
}

impl TimespanBound {
    pub fn at(value: impl Into<Scalar>) -> Self {
        Self {
            at: Some(value.into()),
        }
    }
}

/// A single timespan entry with optional start and end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timespan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<TimespanBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<TimespanBound>,
}

impl Timespan {
    /// Build a timespan from optional start and end years.
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self {
            start: start.map(TimespanBound::at),
            end: end.map(TimespanBound::at),
        }
    }

    /// The start year, if the entry has a usable `start.in`.
    pub fn start_year(&self) -> Option<i64> {
        self.start.as_ref()?.at.as_ref()?.to_year()
    }

    /// The end year, if the entry has a usable `end.in`.
    pub fn end_year(&self) -> Option<i64> {
        self.end.as_ref()?.at.as_ref()?.to_year()
    }
}

/// An object holding a `timespans` sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimespanContainer {
    pub timespans: Vec<Timespan>,
}

// ── When ────────────────────────────────────────────────────────────────────

/// Any value `parse_when` accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum When {
    Scalar(Scalar),
    Timespans(TimespanContainer),
}

impl When {
    /// Whether this input short-circuits `parse_when` to `None`.
    ///
    /// A timespan container is never blank, even with no entries.
    pub fn is_blank(&self) -> bool {
        match self {
            When::Scalar(scalar) => scalar.is_blank(),
            When::Timespans(_) => false,
        }
    }
}

impl From<Scalar> for When {
    fn from(scalar: Scalar) -> Self {
        When::Scalar(scalar)
    }
}

impl From<&str> for When {
    fn from(s: &str) -> Self {
        When::Scalar(s.into())
    }
}

impl From<String> for When {
    fn from(s: String) -> Self {
        When::Scalar(s.into())
    }
}

impl From<i64> for When {
    fn from(n: i64) -> Self {
        When::Scalar(n.into())
    }
}

impl From<f64> for When {
    fn from(n: f64) -> Self {
        When::Scalar(n.into())
    }
}

impl From<TimespanContainer> for When {
    fn from(container: TimespanContainer) -> Self {
        When::Timespans(container)
    }
}

impl From<Vec<Timespan>> for When {
    fn from(timespans: Vec<Timespan>) -> Self {
        When::Timespans(TimespanContainer { timespans })
    }
}

// ── Coercion helpers ────────────────────────────────────────────────────────

/// Parse the integer at the start of `text`.
///
/// Leading whitespace is skipped, an optional `+` or `-` sign is accepted,
/// and ASCII digits are consumed up to the first non-digit. Anything after
/// the digits is ignored, so `"1850-01-01"` yields `1850` and `"100 AD"`
/// yields `100`. Returns `None` when there are no digits or the value does
/// not fit in an `i64`.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = match text.as_bytes().first() {
        Some(b'-') | Some(b'+') => 1,
        _ => 0,
    };
    let digit_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digit_len == 0 {
        return None;
    }
    text[..sign_len + digit_len].parse().ok()
}

/// Truncate a finite number toward zero, rejecting values outside `i64`.
fn truncate_to_year(n: f64) -> Option<i64> {
    // 2^63; i64::MAX is not exactly representable as f64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if !n.is_finite() {
        return None;
    }
    let whole = n.trunc();
    if whole >= LIMIT || whole < -LIMIT {
        return None;
    }
    Some(whole as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parse_leading_int ───────────────────────────────────────────────

    #[test]
    fn test_leading_int_plain() {
        assert_eq!(parse_leading_int("75"), Some(75));
        assert_eq!(parse_leading_int("-100"), Some(-100));
        assert_eq!(parse_leading_int("+12"), Some(12));
    }

    #[test]
    fn test_leading_int_skips_leading_whitespace() {
        assert_eq!(parse_leading_int("  \t 42"), Some(42));
    }

    #[test]
    fn test_leading_int_ignores_trailing_text() {
        assert_eq!(parse_leading_int("1850-01-01"), Some(1850));
        assert_eq!(parse_leading_int("-0050-03-15"), Some(-50));
        assert_eq!(parse_leading_int("100 AD"), Some(100));
        assert_eq!(parse_leading_int("12.9"), Some(12));
    }

    #[test]
    fn test_leading_int_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("AD 100"), None);
        assert_eq!(parse_leading_int("--5"), None);
    }

    #[test]
    fn test_leading_int_overflow_is_none() {
        assert_eq!(parse_leading_int("99999999999999999999"), None);
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
    }

    // ── Scalar ──────────────────────────────────────────────────────────

    #[test]
    fn test_scalar_blank() {
        assert!(Scalar::Number(0.0).is_blank());
        assert!(Scalar::Number(f64::NAN).is_blank());
        assert!(Scalar::Text(String::new()).is_blank());
        assert!(!Scalar::Text("0".into()).is_blank());
        assert!(!Scalar::Text(" ".into()).is_blank());
        assert!(!Scalar::Number(-1.0).is_blank());
    }

    #[test]
    fn test_scalar_number_truncates() {
        assert_eq!(Scalar::Number(75.9).to_year(), Some(75));
        assert_eq!(Scalar::Number(-75.9).to_year(), Some(-75));
        assert_eq!(Scalar::Number(f64::INFINITY).to_year(), None);
        assert_eq!(Scalar::Number(1e30).to_year(), None);
    }

    // ── Deserialization ─────────────────────────────────────────────────

    #[test]
    fn test_deserialize_scalar_number() {
        let when: When = serde_json::from_str("75").unwrap();
        assert_eq!(when, When::Scalar(Scalar::Number(75.0)));
    }

    #[test]
    fn test_deserialize_scalar_text() {
        let when: When = serde_json::from_str(r#"">=50""#).unwrap();
        assert_eq!(when, When::Scalar(Scalar::Text(">=50".into())));
    }

    #[test]
    fn test_deserialize_timespans() {
        let json = r#"{"timespans":[{"start":{"in":-50},"end":{"in":"100"}},{}]}"#;
        let when: When = serde_json::from_str(json).unwrap();
        let When::Timespans(container) = when else {
            panic!("expected timespans");
        };
        assert_eq!(container.timespans.len(), 2);
        assert_eq!(container.timespans[0].start_year(), Some(-50));
        assert_eq!(container.timespans[0].end_year(), Some(100));
        assert_eq!(container.timespans[1].start_year(), None);
        assert_eq!(container.timespans[1].end_year(), None);
    }

    #[test]
    fn test_deserialize_bound_ignores_other_properties() {
        let json = r#"{"start":{"earliest":"-0100","in":"-0050"}}"#;
        let ts: Timespan = serde_json::from_str(json).unwrap();
        assert_eq!(ts.start_year(), Some(-50));
        assert_eq!(ts.end, None);
    }

    #[test]
    fn test_bound_without_in_has_no_year() {
        let json = r#"{"start":{"earliest":"-0100"},"end":null}"#;
        let ts: Timespan = serde_json::from_str(json).unwrap();
        assert!(ts.start.is_some());
        assert_eq!(ts.start_year(), None);
        assert_eq!(ts.end_year(), None);
    }

    #[test]
    fn test_object_without_timespans_fails() {
        assert!(serde_json::from_str::<When>(r#"{"start":1}"#).is_err());
    }
}
