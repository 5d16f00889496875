use super::scalar::{number, parse_frequency, parse_resistance, parse_temperature, parse_voltage};
use crate::TolerancePolicy;
use serde::Serialize;

/// An independently-optional `(min, max)` pair.
///
/// Range attributes ("-40℃~+85℃", "1.5V~2.5V") may be missing either side
/// in catalog data; each bound is parsed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ValueRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Both bounds set to `value`.
    pub fn point(value: f64) -> Self {
        Self { min: Some(value), max: Some(value) }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// One number standing for the whole range: the upper bound when known.
    pub fn representative(&self) -> Option<f64> {
        self.max.or(self.min)
    }
}

/// Split on the first range separator ("~" or " to ").
fn split_range(text: &str) -> Option<(&str, &str)> {
    if let Some(parts) = text.split_once('~') {
        return Some(parts);
    }
    let m = regex!(r"(?i)\s+to\s+").find(text)?;
    Some((&text[..m.start()], &text[m.end()..]))
}

fn range_with(text: &str, side: fn(&str) -> Option<f64>, single_is_point: bool) -> ValueRange {
    if text.trim().is_empty() {
        return ValueRange::default();
    }
    match split_range(text) {
        Some((low, high)) => ValueRange::new(side(low), side(high)),
        None if single_is_point => side(text).map(ValueRange::point).unwrap_or_default(),
        None => ValueRange::default(),
    }
}

/// Operating temperature range: "-40℃~+85℃" -> (-40, 85).
pub fn parse_temperature_range(text: &str) -> ValueRange {
    range_with(text, parse_temperature, false)
}

/// Gate threshold voltage: "1.5V~2.5V" -> (1.5, 2.5); "2V" -> (2, 2).
pub fn parse_vgs_range(text: &str) -> ValueRange {
    range_with(text, bare_or_voltage, true)
}

/// Input voltage range: "2.5V~5.5V" -> (2.5, 5.5); a single value is a point.
pub fn parse_vin_range(text: &str) -> ValueRange {
    range_with(text, bare_or_voltage, true)
}

/// Frequency range: "2.4GHz~2.5GHz" -> (2.4e9, 2.5e9).
pub fn parse_frequency_range(text: &str) -> ValueRange {
    range_with(text, parse_frequency, true)
}

/// Range sides often drop the unit on the low end ("1.5~2.5V").
fn bare_or_voltage(text: &str) -> Option<f64> {
    parse_voltage(text).or_else(|| {
        let caps = regex!(r"^\s*([\d.]+)\s*$").captures(text)?;
        number(&caps[1])
    })
}

// --- Impedance @ frequency ---------------------------------------------------

/// A ferrite-bead style rating: impedance measured at a test frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpedanceAtFrequency {
    pub ohms: f64,
    pub hertz: f64,
}

fn normalize_ohm(text: &str) -> String {
    regex!(r"(?i)[\x{03A9}\x{2126}]|ohms?").replace_all(text, "Ohm").into_owned()
}

/// "600Ω @ 100MHz" -> 600 ohms at 100 MHz.
pub fn parse_impedance_at_frequency(text: &str) -> Option<ImpedanceAtFrequency> {
    let normalized = normalize_ohm(text);
    let caps = regex!(r"(?i)([\d.]+)\s*([km])?Ohm\s*@\s*([\d.]+)\s*([kmg])?Hz").captures(&normalized)?;

    let ohms = number(&caps[1])?
        * match caps.get(2).map(|m| m.as_str()) {
            Some("k" | "K") => 1e3,
            Some("m" | "M") => 1e6,
            _ => 1.0,
        };
    let hertz = number(&caps[3])?
        * match caps.get(4).map(|m| m.as_str().to_ascii_uppercase()).as_deref() {
            Some("K") => 1e3,
            Some("M") => 1e6,
            Some("G") => 1e9,
            _ => 1.0,
        };

    (ohms.is_finite() && hertz.is_finite()).then_some(ImpedanceAtFrequency { ohms, hertz })
}

/// Impedance alone, for filter targets like "600Ohm" that carry no frequency.
pub(crate) fn parse_impedance_only(text: &str) -> Option<f64> {
    parse_impedance_at_frequency(text).map(|z| z.ohms).or_else(|| parse_resistance(text))
}

/// Both impedance and frequency agree within the alternative tolerance.
/// Unreadable values fall back to a normalized, case-insensitive comparison.
pub fn impedance_matches(original: &str, candidate: &str, policy: &TolerancePolicy) -> bool {
    match (parse_impedance_at_frequency(original), parse_impedance_at_frequency(candidate)) {
        (Some(a), Some(b)) => {
            policy.alternative_matches(a.ohms, b.ohms) && policy.alternative_matches(a.hertz, b.hertz)
        }
        _ => normalize_ohm(original).to_lowercase() == normalize_ohm(candidate).to_lowercase(),
    }
}
