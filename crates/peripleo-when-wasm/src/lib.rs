//! WASM bindings for peripleo-when.
//!
//! Exposes `parseWhen` and `formatYear` to JavaScript. Values cross the
//! boundary as JSON text so the map UI can hand over whatever it finds in a
//! record's `when` property.

use peripleo_when::{format_year, parse_when_str, EraStyle, LabelOptions};
use wasm_bindgen::prelude::*;

/// Normalize a JSON-encoded "when" value.
///
/// Returns the normalized range as JSON text, or `"null"` when the input is
/// absent or blank. Throws on malformed JSON or unsupported shapes.
#[wasm_bindgen(js_name = parseWhen)]
pub fn parse_when(input: &str, era: Option<String>) -> Result<String, JsValue> {
    parse_when_json_text(input, era.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Render a signed year, e.g. `formatYear(-50)` → `"50 BC"`.
#[wasm_bindgen(js_name = formatYear)]
pub fn format_year_js(year: f64, era: Option<String>) -> Result<String, JsValue> {
    format_year_text(year, era.as_deref()).map_err(|e| JsValue::from_str(&e))
}

fn parse_era(era: Option<&str>) -> Result<EraStyle, String> {
    era.map_or(Ok(EraStyle::default()), |s| {
        s.parse::<EraStyle>().map_err(|e| e.to_string())
    })
}

fn parse_when_json_text(input: &str, era: Option<&str>) -> Result<String, String> {
    let options = LabelOptions {
        era: parse_era(era)?,
    };
    let range = parse_when_str(input, &options).map_err(|e| e.to_string())?;
    serde_json::to_string(&range).map_err(|e| e.to_string())
}

fn format_year_text(year: f64, era: Option<&str>) -> Result<String, String> {
    if !year.is_finite() {
        return Err(format!("year must be finite, got {year}"));
    }
    Ok(format_year(year.trunc() as i64, parse_era(era)?))
}
