//! Normalization of "when" values into bounded, labelled year ranges.
//!
//! [`parse_when`] never fails. Text that does not start with an integer
//! simply leaves the corresponding field unset, so a malformed value degrades
//! to a less complete [`NormalizedRange`] (typically one without a label).
//! Errors only exist at the JSON boundary ([`parse_when_json`],
//! [`parse_when_str`]) where the value has the wrong shape altogether.
//!
//! # Accepted shapes
//!
//! | input | earliest | latest | year | label |
//! |---|---|---|---|---|
//! | `"100/200"` | 100 | 200 | - | `AD 100 - AD 200` |
//! | `">=50"` | 50 | - | - | `after AD 50` |
//! | `"75"` | 75 | 75 | 75 | `AD 75` |
//! | `{timespans: [...]}` | running min `start.in` | running max `end.in` | - | depends on bounds |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Result, WhenError};
use crate::input::{parse_leading_int, Scalar, Timespan, TimespanContainer, When};
use crate::year::{HistoricalYear, LabelOptions};

/// The normalized form of a "when" value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRange {
    /// Lower bound, falling back to `year` for single-year inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest: Option<i64>,
    /// Upper bound, falling back to `year` for single-year inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<i64>,
    /// The bare year, only set for single-year scalar inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    /// Human-readable label (e.g., "100 BC - AD 200", "after AD 50").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Bounds as produced by the scalar or timespan parser, before fallback.
#[derive(Debug, Default, PartialEq, Eq)]
struct RawBounds {
    earliest: Option<i64>,
    latest: Option<i64>,
    year: Option<i64>,
}

// ── parse_when ──────────────────────────────────────────────────────────────

/// Normalize a "when" value using the default label options.
///
/// Returns `None` if `input` is absent or blank (numeric zero, NaN, or the
/// empty string).
///
/// # Examples
///
/// ```
/// use peripleo_when::{parse_when, When};
///
/// let range = parse_when(Some(&When::from(">=50"))).unwrap();
/// assert_eq!(range.earliest, Some(50));
/// assert_eq!(range.latest, None);
/// assert_eq!(range.label.as_deref(), Some("after AD 50"));
///
/// assert_eq!(parse_when(None), None);
/// assert_eq!(parse_when(Some(&When::from(0i64))), None);
/// ```
pub fn parse_when(input: Option<&When>) -> Option<NormalizedRange> {
    parse_when_with_options(input, &LabelOptions::default())
}

/// Normalize a "when" value with explicit label options.
///
/// See [`parse_when`].
pub fn parse_when_with_options(
    input: Option<&When>,
    options: &LabelOptions,
) -> Option<NormalizedRange> {
    let input = input?;
    if input.is_blank() {
        debug!(?input, "blank when value, nothing to normalize");
        return None;
    }

    let bounds = match input {
        When::Scalar(scalar) => parse_scalar(scalar),
        When::Timespans(container) => parse_timespans(&container.timespans),
    };
    trace!(?bounds, "parsed when value");

    let label = build_label(&bounds, options);
    if label.is_none() {
        debug!(?input, "when value has no usable year, leaving label unset");
    }

    Some(NormalizedRange {
        earliest: bounds.earliest.or(bounds.year),
        latest: bounds.latest.or(bounds.year),
        year: bounds.year,
        label,
    })
}

// ── JSON entry points ───────────────────────────────────────────────────────

/// Normalize a "when" value given as JSON.
///
/// `null` and `false` are absent values and yield `Ok(None)`. Numbers,
/// strings and objects with a `timespans` array are normalized as by
/// [`parse_when_with_options`]. `true` is read as the text `"true"`, which
/// holds no year and so yields an empty range.
///
/// # Errors
///
/// Returns [`WhenError::UnsupportedInput`] for any other shape: an object
/// without `timespans` (or with a malformed one), or an array.
pub fn parse_when_json(
    value: &Value,
    options: &LabelOptions,
) -> Result<Option<NormalizedRange>> {
    let when = match value {
        Value::Null | Value::Bool(false) => return Ok(None),
        Value::Bool(true) => When::Scalar(Scalar::Text("true".to_string())),
        Value::Number(n) => n
            .as_f64()
            .map(|n| When::Scalar(Scalar::Number(n)))
            .ok_or_else(|| WhenError::UnsupportedInput(format!("number '{}'", n)))?,
        Value::String(s) => When::Scalar(Scalar::Text(s.clone())),
        Value::Object(map) if map.contains_key("timespans") => {
            let container = TimespanContainer::deserialize(value)
                .map_err(|e| WhenError::UnsupportedInput(format!("timespans: {}", e)))?;
            When::Timespans(container)
        }
        Value::Object(_) => {
            return Err(WhenError::UnsupportedInput(
                "object without 'timespans'".to_string(),
            ))
        }
        Value::Array(_) => return Err(WhenError::UnsupportedInput("array".to_string())),
    };

    Ok(parse_when_with_options(Some(&when), options))
}

/// Normalize a "when" value given as JSON text.
///
/// # Errors
///
/// Returns [`WhenError::InvalidJson`] if `json` is not valid JSON, otherwise
/// the errors of [`parse_when_json`].
pub fn parse_when_str(json: &str, options: &LabelOptions) -> Result<Option<NormalizedRange>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| WhenError::InvalidJson(format!("'{}': {}", json, e)))?;
    parse_when_json(&value, options)
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Parse a scalar: `"A/B"` range, `">=N"` lower bound, or a bare year.
fn parse_scalar(scalar: &Scalar) -> RawBounds {
    let text = match scalar {
        // A number never contains a range or bound marker.
        Scalar::Number(_) => {
            return RawBounds {
                year: scalar.to_year(),
                ..RawBounds::default()
            }
        }
        Scalar::Text(text) => text.as_str(),
    };

    if text.contains('/') {
        let mut parts = text.split('/').map(str::trim);
        RawBounds {
            earliest: parts.next().and_then(parse_leading_int),
            latest: parts.next().and_then(parse_leading_int),
            year: None,
        }
    } else if text.contains(">=") {
        RawBounds {
            earliest: parse_leading_int(&text.replacen(">=", "", 1)),
            ..RawBounds::default()
        }
    } else {
        RawBounds {
            year: parse_leading_int(text),
            ..RawBounds::default()
        }
    }
}

/// Fold timespans into a running minimum start and maximum end.
fn parse_timespans(timespans: &[Timespan]) -> RawBounds {
    RawBounds {
        earliest: fold_bound(timespans.iter().map(Timespan::start_year), |acc, v| acc < v),
        latest: fold_bound(timespans.iter().map(Timespan::end_year), |acc, v| acc > v),
        year: None,
    }
}

/// Left fold seeded with `None`.
///
/// A present, non-zero accumulator survives only when `keep(acc, value)`
/// holds for a present entry value. In every other case the entry's value
/// replaces it, so an entry without the bound clears it and a zero
/// accumulator is overwritten by the next entry.
fn fold_bound(
    values: impl Iterator<Item = Option<i64>>,
    keep: impl Fn(i64, i64) -> bool,
) -> Option<i64> {
    values.fold(None, |acc, value| match (acc, value) {
        (Some(a), Some(v)) if a != 0 && keep(a, v) => Some(a),
        _ => value,
    })
}

/// Build the label. Zero counts as absent for every field.
fn build_label(bounds: &RawBounds, options: &LabelOptions) -> Option<String> {
    let render = |year: i64| HistoricalYear(year).render(options.era);
    let present = |year: &i64| *year != 0;

    match (
        bounds.earliest.filter(present),
        bounds.latest.filter(present),
    ) {
        (Some(lo), Some(hi)) => Some(format!("{} - {}", render(lo), render(hi))),
        (Some(lo), None) => Some(format!("after {}", render(lo))),
        (None, Some(hi)) => Some(format!("before {}", render(hi))),
        (None, None) => bounds.year.filter(present).map(render),
    }
}
