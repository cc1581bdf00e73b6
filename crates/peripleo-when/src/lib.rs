//! # peripleo-when
//!
//! Normalization of loosely-typed "when" values into bounded year ranges.
//!
//! Gazetteer and collection records describe time in several shapes: a bare
//! year (`75`), an open lower bound (`">=50"`), a closed range (`"-100/200"`),
//! or a list of Linked Places timespans. This crate folds all of them into a
//! single [`NormalizedRange`] with an earliest bound, a latest bound and a
//! human-readable label such as `"100 BC - AD 200"`.
//!
//! ## Modules
//!
//! - [`input`] — The accepted input shapes ([`When`], [`Scalar`], [`Timespan`])
//! - [`year`] — Signed-year rendering and label options
//! - [`parse`] — [`parse_when`] and its JSON entry points
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use peripleo_when::{parse_when, When};
//!
//! let when = When::from("-100/200");
//! let range = parse_when(Some(&when)).unwrap();
//! assert_eq!(range.earliest, Some(-100));
//! assert_eq!(range.latest, Some(200));
//! assert_eq!(range.label.as_deref(), Some("100 BC - AD 200"));
//! ```

pub mod error;
pub mod input;
pub mod parse;
pub mod year;

pub use error::{Result, WhenError};
pub use input::{Scalar, Timespan, TimespanBound, TimespanContainer, When};
pub use parse::{
    parse_when, parse_when_json, parse_when_str, parse_when_with_options, NormalizedRange,
};
pub use year::{format_year, EraStyle, HistoricalYear, LabelOptions};
