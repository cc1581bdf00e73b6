//! Signed-year rendering.
//!
//! Years are plain signed integers: negative values are BC, everything else
//! is AD. There is no year zero adjustment; `-1` renders as `1 BC` and `0`
//! as `AD 0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WhenError;

// ── Era style ───────────────────────────────────────────────────────────────

/// Which era markers to use when rendering a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EraStyle {
    /// `50 BC`, `AD 100`.
    #[default]
    BcAd,
    /// `50 BCE`, `100 CE`.
    CommonEra,
}

impl EraStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            EraStyle::BcAd => "bc-ad",
            EraStyle::CommonEra => "common-era",
        }
    }
}

impl fmt::Display for EraStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts `bc-ad`, `common-era` and its alias `bce-ce`, ignoring case and
/// surrounding whitespace.
impl FromStr for EraStyle {
    type Err = WhenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bc-ad" => Ok(EraStyle::BcAd),
            "common-era" | "bce-ce" => Ok(EraStyle::CommonEra),
            _ => Err(WhenError::InvalidEraStyle(format!("'{}'", s))),
        }
    }
}

/// Options for [`parse_when_with_options`](crate::parse_when_with_options).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Era markers used in labels.
    pub era: EraStyle,
}

// ── HistoricalYear ──────────────────────────────────────────────────────────

/// A signed year that knows how to render itself with era markers.
///
/// # Examples
///
/// ```
/// use peripleo_when::{EraStyle, HistoricalYear};
///
/// assert_eq!(HistoricalYear(-50).to_string(), "50 BC");
/// assert_eq!(HistoricalYear(100).to_string(), "AD 100");
/// assert_eq!(HistoricalYear(-50).render(EraStyle::CommonEra), "50 BCE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HistoricalYear(pub i64);

impl HistoricalYear {
    pub fn is_bc(self) -> bool {
        self.0 < 0
    }

    /// Render with the given era style.
    pub fn render(self, era: EraStyle) -> String {
        let magnitude = self.0.unsigned_abs();
        match (era, self.is_bc()) {
            (EraStyle::BcAd, true) => format!("{magnitude} BC"),
            (EraStyle::BcAd, false) => format!("AD {magnitude}"),
            (EraStyle::CommonEra, true) => format!("{magnitude} BCE"),
            (EraStyle::CommonEra, false) => format!("{magnitude} CE"),
        }
    }
}

impl fmt::Display for HistoricalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(EraStyle::default()))
    }
}

/// Render `year` with era markers (e.g. `"50 BC"`, `"AD 100"`).
pub fn format_year(year: i64, era: EraStyle) -> String {
    HistoricalYear(year).render(era)
}
