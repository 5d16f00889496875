use regex::Regex;

// --- Shared helpers ----------------------------------------------------------

/// Parse a captured decimal, rejecting "1.2.3" and non-finite results.
pub(crate) fn number(s: &str) -> Option<f64> {
    let value = s.parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// First `<number><optional prefix letter>` after removing `unit` from `text`.
fn prefixed(text: &str, unit: &Regex, prefix: fn(char) -> Option<f64>) -> Option<f64> {
    let stripped = unit.replace_all(text.trim(), "");
    let caps = regex!(r"([\d.]+)\s*([^\d\s.])?").captures(&stripped)?;
    let value = number(&caps[1])?;
    let scale = caps.get(2).and_then(|m| m.as_str().chars().next()).and_then(prefix).unwrap_or(1.0);
    finite(value * scale)
}

/// Sub-unit prefixes used by capacitance and inductance.
fn small_prefix(c: char) -> Option<f64> {
    match c {
        'p' | 'P' => Some(1e-12),
        'n' | 'N' => Some(1e-9),
        'u' | 'U' | 'µ' | 'μ' => Some(1e-6),
        'm' | 'M' => Some(1e-3),
        _ => None,
    }
}

/// Multiplying prefixes used by frequency.
fn large_prefix(c: char) -> Option<f64> {
    match c {
        'k' | 'K' => Some(1e3),
        'm' | 'M' => Some(1e6),
        'g' | 'G' => Some(1e9),
        _ => None,
    }
}

// --- Electrical quantities ---------------------------------------------------

/// Voltage in volts: "100V", "1.5kV", "550mV".
pub fn parse_voltage(text: &str) -> Option<f64> {
    if let Some(caps) = regex!(r"(?i)([\d.]+)\s*kV").captures(text) {
        return finite(number(&caps[1])? * 1e3);
    }
    if let Some(caps) = regex!(r"([\d.]+)\s*mV").captures(text) {
        return finite(number(&caps[1])? / 1e3);
    }
    let caps = regex!(r"(?i)([\d.]+)\s*V").captures(text)?;
    number(&caps[1])
}

/// Forward voltage: the voltage before any "@ test current" suffix.
pub fn parse_forward_voltage(text: &str) -> Option<f64> {
    let head = text.split('@').next().unwrap_or(text);
    parse_voltage(head)
}

/// Current in amperes: "2A", "500mA", "10uA", "50nA".
pub fn parse_current(text: &str) -> Option<f64> {
    if let Some(caps) = regex!(r"(?i)([\d.]+)\s*[uµμ]A").captures(text) {
        return finite(number(&caps[1])? / 1e6);
    }
    if let Some(caps) = regex!(r"([\d.]+)\s*nA").captures(text) {
        return finite(number(&caps[1])? / 1e9);
    }
    if let Some(caps) = regex!(r"(?i)([\d.]+)\s*mA").captures(text) {
        return finite(number(&caps[1])? / 1e3);
    }
    let caps = regex!(r"(?i)([\d.]+)\s*A").captures(text)?;
    number(&caps[1])
}

/// Power in watts: "1/4W", "250mW", "1W", "1.5kW".
pub fn parse_power(text: &str) -> Option<f64> {
    if let Some(caps) = regex!(r"(?i)(\d+)\s*/\s*(\d+)\s*W").captures(text) {
        let numerator = number(&caps[1])?;
        let denominator = number(&caps[2])?;
        if denominator == 0.0 {
            return None;
        }
        return finite(numerator / denominator);
    }
    if let Some(caps) = regex!(r"([\d.]+)\s*mW").captures(text) {
        return finite(number(&caps[1])? / 1e3);
    }
    if let Some(caps) = regex!(r"(?i)([\d.]+)\s*kW").captures(text) {
        return finite(number(&caps[1])? * 1e3);
    }
    let caps = regex!(r"(?i)([\d.]+)\s*W").captures(text)?;
    number(&caps[1])
}

/// Resistance in ohms.
///
/// Accepts standard notation ("10k", "10kΩ", "2.2MOhm", "50mΩ"), European
/// inline notation ("4k7", "4R7", "1M5") and the jumper forms "0R" / "0".
/// A lowercase `m` directly before the ohm symbol means milliohm; an
/// uppercase `M` is always mega.
pub fn parse_resistance(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let milliohm = regex!(r"m\s*(?:[\x{03A9}\x{2126}]|[Oo][Hh][Mm])").is_match(trimmed);
    let stripped = regex!(r"(?i)ohms?|[\x{03A9}\x{2126}]").replace_all(trimmed, "");
    let stripped = stripped.trim();

    if !milliohm {
        if let Some(caps) = regex!(r"(?i)(\d+)([kmr])(\d+)").captures(stripped) {
            let value = number(&format!("{}.{}", &caps[1], &caps[3]))?;
            let scale = match caps[2].chars().next() {
                Some('k' | 'K') => 1e3,
                Some('m' | 'M') => 1e6,
                _ => 1.0,
            };
            return finite(value * scale);
        }
    }

    if stripped.eq_ignore_ascii_case("0r") || stripped == "0" {
        return Some(0.0);
    }

    let caps = regex!(r"([\d.]+)\s*([kKmMrR])?").captures(stripped)?;
    let value = number(&caps[1])?;
    if milliohm {
        return finite(value / 1e3);
    }
    let scale = match caps.get(2).map(|m| m.as_str()) {
        Some("k" | "K") => 1e3,
        Some("m" | "M") => 1e6,
        _ => 1.0,
    };
    finite(value * scale)
}

/// Capacitance in farads: "100nF", "4.7uF", "10pF", "1µF".
pub fn parse_capacitance(text: &str) -> Option<f64> {
    prefixed(text, regex!(r"[Ff]"), small_prefix)
}

/// Capacitance in picofarads, for crystal load capacitance ("12.5pF", "12").
pub fn parse_capacitance_pf(text: &str) -> Option<f64> {
    let stripped = regex!(r"[Ff]").replace_all(text.trim(), "");
    let caps = regex!(r"([\d.]+)\s*([pnuµμ])?").captures(&stripped)?;
    let value = number(&caps[1])?;
    let scale = match caps.get(2).map(|m| m.as_str()) {
        Some("n") => 1e3,
        Some("u" | "µ" | "μ") => 1e6,
        _ => 1.0,
    };
    finite(value * scale)
}

/// Inductance in henries: "10uH", "100nH", "1mH".
pub fn parse_inductance(text: &str) -> Option<f64> {
    prefixed(text, regex!(r"[Hh]"), small_prefix)
}

/// Frequency in hertz: "8MHz", "32.768kHz", "2.4GHz".
pub fn parse_frequency(text: &str) -> Option<f64> {
    prefixed(text, regex!(r"(?i)hz"), large_prefix)
}

// --- Ratios and misc ---------------------------------------------------------

/// Percentage as a plain number: "±1%" -> 1.0.
pub fn parse_percentage(text: &str) -> Option<f64> {
    let caps = regex!(r"([\d.]+)\s*%").captures(text)?;
    number(&caps[1])
}

/// Tolerance is stored as a percentage.
pub fn parse_tolerance(text: &str) -> Option<f64> {
    parse_percentage(text)
}

/// Parts per million: "±20ppm" -> 20.0.
pub fn parse_ppm(text: &str) -> Option<f64> {
    let caps = regex!(r"(?i)[±+\-]?([\d.]+)\s*ppm").captures(text)?;
    number(&caps[1])
}

/// Decibels: "60dB".
pub fn parse_decibels(text: &str) -> Option<f64> {
    let caps = regex!(r"(?i)([\d.]+)\s*dB").captures(text)?;
    number(&caps[1])
}

/// Temperature in °C: "-40℃", "+85°C", "125".
pub fn parse_temperature(text: &str) -> Option<f64> {
    let caps = regex!(r"([+-]?[\d.]+)\s*(?:°|℃)?\s*C?").captures(text)?;
    number(&caps[1])
}

/// Memory size in bytes, 1024-based. Bit sizes are converted to bytes.
pub fn parse_memory(text: &str) -> Option<f64> {
    let upper = text.trim().to_uppercase();
    let scale = |prefix: Option<&str>| match prefix {
        Some("K") => 1024.0,
        Some("M") => 1024.0 * 1024.0,
        Some("G") => 1024.0 * 1024.0 * 1024.0,
        _ => 1.0,
    };
    if let Some(caps) = regex!(r"([\d.]+)\s*([KMG])?BIT").captures(&upper) {
        let value = number(&caps[1])?;
        return finite(value * scale(caps.get(2).map(|m| m.as_str())) / 8.0);
    }
    let caps = regex!(r"([\d.]+)\s*([KMG])?B").captures(&upper)?;
    let value = number(&caps[1])?;
    finite(value * scale(caps.get(2).map(|m| m.as_str())))
}

/// Wavelength in nanometres: "625nm".
pub fn parse_wavelength(text: &str) -> Option<f64> {
    let caps = regex!(r"(?i)([\d.]+)\s*nm").captures(text)?;
    number(&caps[1])
}

/// Luminous intensity in millicandela: "120mcd".
pub fn parse_luminosity(text: &str) -> Option<f64> {
    let caps = regex!(r"(?i)([\d.]+)\s*mcd").captures(text)?;
    number(&caps[1])
}

/// Length in millimetres: "2.54mm", "2.54".
pub fn parse_length_mm(text: &str) -> Option<f64> {
    let caps = regex!(r"(?i)([\d.]+)\s*(?:mm)?").captures(text)?;
    number(&caps[1])
}

/// First unsigned integer in `text`: "40 Pin" -> 40.0.
pub fn parse_integer(text: &str) -> Option<f64> {
    let caps = regex!(r"(\d+)").captures(text)?;
    number(&caps[1])
}
