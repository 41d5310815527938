//! Tolerant numeric parsing for API-reported strings.
//!
//! WeatherSTEM reports every scalar as a string, and a station that is down
//! substitutes sentinel text for normally-numeric fields. A single bad field
//! must never take out the whole batch, so parsing degrades to zero with no
//! error return.

/// Parse a decimal string, yielding `0.0` for anything unparseable.
pub fn parse_f64_or_zero(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}
