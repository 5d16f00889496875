//! Manufacturer part-number detection.
//!
//! Patterns run from most to least specific. Each pattern only gets one shot:
//! its first match is checked against the blocklists, and a rejected match
//! hands over to the next pattern rather than searching further along the
//! text. The generic letters+digits shape runs last so it never truncates a
//! vendor family ("ESP32-S3-MINI-1" must not become "ESP32").

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::spans::collapse_whitespace;

static MODEL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // ESP32 module variants: ESP32-{variant}-{form factor}-{version}.
        r"(?i)\b(ESP32(?:-[A-Z0-9]+)+)\b",
        r"(?i)\b(STM32[A-Z]\d+[A-Z0-9]*|GD32[A-Z]\d+[A-Z0-9]*|CH32V\d+[A-Z0-9]*|RP2040|RP2350[AB]?|ATMEGA\d+[A-Z]*|ATTINY\d+[A-Z]*|PIC\d+[A-Z0-9]*)\b",
        r"(?i)\b(NRF5\d{4}[A-Z0-9]*|CH340[A-Z]?|CH9102[A-Z]?|CP210\d[A-Z]?)\b",
        r"(?i)\b(TP[45]\d{3}|AMS\d{4}|LM\d{4}|NE555|TL\d{3}|LMV?\d{3,4}|TPS\d{4,5})\b",
        r"(?i)\b(AO\d{4}|SI\d{4}|IRF\d{3,4}|IRLZ?\d{2,4}|2N\d{4}|BC\d{3})\b",
        r"(?i)\b(WS2812[A-Z]*|SK6812|APA102|TLC5940)\b",
        r"(?i)\b(BME\d{3}|BMP\d{3}|MPU\d{4}|SHT\d{2}|AHT\d{2}|DS18B20|INA\d{3}|AXP\d{3}|IP5306)\b",
        r"(?i)\b(1N\d{4}[A-Z]*|1SS\d{3}[A-Z]*|BAT\d{2}[A-Z]*|BAS\d{2}[A-Z]*|BAV\d{2}[A-Z]*)\b",
        r"(?i)\b([A-Z]{2,5}\d{2,5}[A-Z]?\d*(?:-[A-Z0-9]+)?)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("model pattern must compile"))
    .collect()
});

/// Abbreviations and connector codes that look like part numbers.
static GENERIC_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "LED", "LCD", "USB", "SPI", "I2C", "ADC", "DAC", "MCU", "CPU", "GPU", "RJ45", "RJ11", "RJ12", "RJ9", "RJ22",
        "RJ25", "RS485", "RS232", "RS422",
    ]
    .into_iter()
    .collect()
});

/// Package families that, glued to a pin count, look like part numbers
/// ("SOT23", "QFN32", "TO220").
const PACKAGE_PREFIXES: &[&str] = &[
    "WLCSP", "LFCSP", "TSSOP", "SSOP", "MSOP", "QSOP", "SOIC", "LQFP", "TQFP", "UCSP", "VCSP", "SOT", "SOD", "SOP",
    "QFN", "DFN", "QFP", "BGA", "DIP", "SIP", "CSP", "SMD", "LGA", "TO", "DO",
];

/// Find a part number in `text`.
///
/// Returns the model as typed and `text` without it.
pub(crate) fn extract_model_number(text: &str) -> (Option<String>, String) {
    for pattern in MODEL_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else { continue };
        let (Some(whole), Some(model)) = (caps.get(0), caps.get(1)) else { continue };
        if !is_plausible_model(model.as_str()) {
            continue;
        }
        let remaining = collapse_whitespace(&format!("{} {}", &text[..whole.start()], &text[whole.end()..]));
        return (Some(model.as_str().to_string()), remaining);
    }
    (None, text.to_string())
}

fn is_plausible_model(model: &str) -> bool {
    let upper = model.to_ascii_uppercase();
    !GENERIC_TERMS.contains(upper.as_str()) && !looks_like_package(&upper)
}

/// "SOT23", "QFN32", "SOT23L": a package prefix followed by digits, where
/// the tail may also carry an "L" (long-body variants).
pub(crate) fn looks_like_package(upper: &str) -> bool {
    PACKAGE_PREFIXES.iter().any(|prefix| {
        let Some(rest) = upper.strip_prefix(prefix) else { return false };
        let mut chars = rest.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_digit()) && chars.all(|c| c.is_ascii_digit() || c == 'L')
    })
}
