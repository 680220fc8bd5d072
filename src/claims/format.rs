use serde_json::Number;

use super::clock::LocaleClock;
use super::value::ClaimValue;

pub const NULL_TEXT: &str = "null";
pub const ABSENT_TEXT: &str = "undefined";

// Largest magnitude a JS Date accepts, in milliseconds.
const MAX_EPOCH_MILLIS: f64 = 8.64e15;

/// Display text for a single claim value.
pub fn format_claim_value(value: &ClaimValue<'_>) -> String {
    match value {
        ClaimValue::Null => NULL_TEXT.to_string(),
        ClaimValue::Absent => ABSENT_TEXT.to_string(),
        ClaimValue::Boolean(b) => b.to_string(),
        ClaimValue::Json(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        ClaimValue::Number(n) => number_text(n),
        ClaimValue::String(s) => s.to_string(),
    }
}

// Whole floats print without a fraction, like `Number.prototype.toString`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// Local date-time for a seconds-since-epoch claim.
///
/// Non-numeric values and instants outside the representable range give
/// `None`, so callers show the raw value alone.
pub fn format_timestamp(value: &ClaimValue<'_>, clock: &dyn LocaleClock) -> Option<String> {
    let millis = value.as_epoch_seconds()? * 1000.0;
    if !millis.is_finite() || millis.abs() > MAX_EPOCH_MILLIS {
        return None;
    }
    clock.format_epoch_millis(millis)
}
