//! Numeric value extraction.
//!
//! Each `scan_*` function reports every match of one pattern family as a
//! [`Candidate`]; none of them edits the text. [`extract_values`] runs the
//! scanners in a fixed order and resolves overlaps once, at the end.
//!
//! Order matters in two ways:
//!
//! - Tolerance and frequency run before resistance and voltage so "8MHz"
//!   is not partly claimed by a resistance or voltage pattern.
//! - European resistance ("4k7") runs before standard resistance so the
//!   standard pattern never splits it into "4k" + "7".
//!
//! A few scanners also skip matches that start inside an already-reported
//! candidate (standard resistance, standard power, positions, pin
//! structures, pitch); the rest rely on the final selection pass alone.

use super::spans::{Candidate, inside_any, remove_spans, select_non_overlapping};
use crate::{SpecValue, UnitType};

type Scanner = fn(&str, &mut Vec<Candidate>);

/// Scanners in priority order.
const SCANNERS: &[(&str, Scanner)] = &[
    ("tolerance", scan_tolerance),
    ("frequency", scan_frequency),
    ("resistance_euro", scan_resistance_euro),
    ("resistance", scan_resistance),
    ("capacitance", scan_capacitance),
    ("inductance", scan_inductance),
    ("voltage", scan_voltage),
    ("current", scan_current),
    ("power_fraction", scan_power_fraction),
    ("power", scan_power),
    ("pin_count", scan_pin_count),
    ("position_count", scan_position_count),
    ("pin_structure", scan_pin_structure),
    ("pitch", scan_pitch),
    ("dimensions", scan_dimensions),
];

/// Connector pitches worth treating as a pitch value; any other "N mm" is
/// left in the text.
const COMMON_PITCHES: &[f64] = &[0.5, 0.8, 1.0, 1.25, 1.27, 2.0, 2.54, 3.5, 3.81, 5.0, 5.08, 7.62];

/// Extract every numeric value from `text`.
///
/// Returns the kept values in text order and `text` with their spans removed.
pub(crate) fn extract_values(text: &str) -> (Vec<SpecValue>, String) {
    let mut found: Vec<Candidate> = Vec::new();
    for (name, scan) in SCANNERS {
        let before = found.len();
        scan(text, &mut found);
        if found.len() > before {
            tracing::trace!(scanner = name, added = found.len() - before, "value candidates");
        }
    }

    let kept = select_non_overlapping(found);
    let remaining = remove_spans(text, &kept);
    (kept.into_iter().map(|c| c.value).collect(), remaining)
}

fn num(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn push(found: &mut Vec<Candidate>, m: regex::Match<'_>, value: f64, unit: UnitType, normalized: String) {
    found.push(Candidate::new(m.start(), m.end(), SpecValue::new(m.as_str(), value, unit, normalized)));
}

// --- Scanners ----------------------------------------------------------------

fn scan_tolerance(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*%").captures_iter(text) {
        let (Some(m), Some(pct)) = (caps.get(0), num(&caps[1])) else { continue };
        push(found, m, pct, UnitType::Tolerance, format!("{}%", &caps[1]));
    }
}

fn scan_frequency(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*([kKmMgG])?[hH][zZ]\b").captures_iter(text) {
        let (Some(m), Some(base)) = (caps.get(0), num(&caps[1])) else { continue };
        let digits = &caps[1];
        let (value, normalized) = match caps.get(2).map(|p| p.as_str().to_ascii_uppercase()).as_deref() {
            Some("K") => (base * 1e3, format!("{digits}kHz")),
            Some("M") => (base * 1e6, format!("{digits}MHz")),
            Some("G") => (base * 1e9, format!("{digits}GHz")),
            _ => (base, format!("{digits}Hz")),
        };
        push(found, m, value, UnitType::Frequency, normalized);
    }
}

fn scan_resistance_euro(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+)([kKmMrR])(\d+)\b").captures_iter(text) {
        let Some(m) = caps.get(0) else { continue };
        let (whole, frac) = (&caps[1], &caps[3]);
        let Some(base) = num(&format!("{whole}.{frac}")) else { continue };
        let (value, normalized) = match caps[2].to_ascii_uppercase().as_str() {
            "K" => (base * 1e3, format!("{whole}k{frac}")),
            "M" => (base * 1e6, format!("{whole}M{frac}")),
            _ => (base, format!("{whole}R{frac}")),
        };
        push(found, m, value, UnitType::Resistance, normalized);
    }
}

fn scan_resistance(text: &str, found: &mut Vec<Candidate>) {
    let pattern = regex!(
        r"(?i)\b(\d+(?:\.\d+)?)\s*(kohms?|mohms?|ohms?|[km]?[\x{03A9}\x{2126}]|[kmr])\b"
    );
    for caps in pattern.captures_iter(text) {
        let (Some(m), Some(base)) = (caps.get(0), num(&caps[1])) else { continue };
        if inside_any(m.start(), found) {
            continue;
        }
        let digits = &caps[1];
        let suffix = &caps[2];
        // A lowercase "m" in front of an ohm symbol is milliohm; a bare or
        // uppercase "M" on a resistor means mega.
        let (value, normalized) = match suffix.chars().next() {
            Some('k' | 'K') => (base * 1e3, format!("{digits}kOhm")),
            Some('m') if suffix.chars().count() > 1 => (base / 1e3, format!("{digits}mOhm")),
            Some('m' | 'M') => (base * 1e6, format!("{digits}MOhm")),
            _ => (base, format!("{digits}Ohm")),
        };
        push(found, m, value, UnitType::Resistance, normalized);
    }
}

fn scan_capacitance(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*([unpµμ])[fF]\b").captures_iter(text) {
        let (Some(m), Some(base)) = (caps.get(0), num(&caps[1])) else { continue };
        let digits = &caps[1];
        let (value, normalized) = match &caps[2] {
            "n" => (base * 1e-9, format!("{digits}nF")),
            "p" => (base * 1e-12, format!("{digits}pF")),
            _ => (base * 1e-6, format!("{digits}uF")),
        };
        push(found, m, value, UnitType::Capacitance, normalized);
    }
}

fn scan_inductance(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*([unmµμ])[hH]\b").captures_iter(text) {
        let (Some(m), Some(base)) = (caps.get(0), num(&caps[1])) else { continue };
        let digits = &caps[1];
        let (value, normalized) = match &caps[2] {
            "n" => (base * 1e-9, format!("{digits}nH")),
            "m" => (base * 1e-3, format!("{digits}mH")),
            _ => (base * 1e-6, format!("{digits}uH")),
        };
        push(found, m, value, UnitType::Inductance, normalized);
    }
}

fn scan_voltage(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*([kK])?[vV]\b").captures_iter(text) {
        let (Some(m), Some(base)) = (caps.get(0), num(&caps[1])) else { continue };
        let digits = &caps[1];
        let (value, normalized) =
            if caps.get(2).is_some() { (base * 1e3, format!("{digits}kV")) } else { (base, format!("{digits}V")) };
        push(found, m, value, UnitType::Voltage, normalized);
    }
}

fn scan_current(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*([uµμ]|[mM])?[aA]\b").captures_iter(text) {
        let (Some(m), Some(base)) = (caps.get(0), num(&caps[1])) else { continue };
        let digits = &caps[1];
        let (value, normalized) = match caps.get(2).map(|p| p.as_str()) {
            Some("m" | "M") => (base * 1e-3, format!("{digits}mA")),
            Some(_) => (base * 1e-6, format!("{digits}uA")),
            None => (base, format!("{digits}A")),
        };
        push(found, m, value, UnitType::Current, normalized);
    }
}

fn scan_power_fraction(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+)/(\d+)\s*[wW]\b").captures_iter(text) {
        let (Some(m), Some(numerator), Some(denominator)) = (caps.get(0), num(&caps[1]), num(&caps[2])) else {
            continue;
        };
        if denominator == 0.0 {
            continue;
        }
        push(found, m, numerator / denominator, UnitType::Power, format!("{}/{}W", &caps[1], &caps[2]));
    }
}

fn scan_power(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*([mM])?[wW]\b").captures_iter(text) {
        let (Some(m), Some(base)) = (caps.get(0), num(&caps[1])) else { continue };
        if inside_any(m.start(), found) {
            continue;
        }
        let digits = &caps[1];
        let (value, normalized) =
            if caps.get(2).is_some() { (base * 1e-3, format!("{digits}mW")) } else { (base, format!("{digits}W")) };
        push(found, m, value, UnitType::Power, normalized);
    }
}

fn scan_pin_count(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"(?i)\b(\d+)\s*-?pins?\b").captures_iter(text) {
        let (Some(m), Some(pins)) = (caps.get(0), num(&caps[1])) else { continue };
        push(found, m, pins, UnitType::PinCount, format!("{pins}P"));
    }
}

fn scan_position_count(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"(?i)\b(\d+)\s*-?\s*(?:pos(?:ition)?s?|way|p)\b").captures_iter(text) {
        let (Some(m), Some(positions)) = (caps.get(0), num(&caps[1])) else { continue };
        if inside_any(m.start(), found) {
            continue;
        }
        push(found, m, positions, UnitType::PositionCount, format!("{positions}P"));
    }
}

fn scan_pin_structure(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b([12])\s*[xX]\s*(\d+)\b").captures_iter(text) {
        let (Some(m), Some(rows), Some(per_row)) = (caps.get(0), num(&caps[1]), num(&caps[2])) else { continue };
        if inside_any(m.start(), found) {
            continue;
        }
        push(found, m, rows * per_row, UnitType::PinStructure, format!("{rows}x{per_row}P"));
    }
}

fn scan_pitch(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"(?i)\b(\d+(?:\.\d+)?)\s*mm(?:\s+pitch)?\b").captures_iter(text) {
        let (Some(m), Some(pitch)) = (caps.get(0), num(&caps[1])) else { continue };
        if inside_any(m.start(), found) || !COMMON_PITCHES.iter().any(|p| (p - pitch).abs() < 1e-9) {
            continue;
        }
        push(found, m, pitch, UnitType::Pitch, format!("{}mm", &caps[1]));
    }
}

fn scan_dimensions(text: &str, found: &mut Vec<Candidate>) {
    for caps in regex!(r"\b(\d+(?:\.\d+)?)\s*[xX]\s*(\d+(?:\.\d+)?)\s*(?:mm)?\b").captures_iter(text) {
        let (Some(m), Some(width), Some(height)) = (caps.get(0), num(&caps[1]), num(&caps[2])) else { continue };
        push(found, m, width * height, UnitType::Dimensions, format!("{}x{}mm", &caps[1], &caps[2]));
    }
}
