use crate::UnitType;

/// Prefix ladders, largest first. Values below the last rung still use it.
const RESISTANCE: &[(f64, &str)] = &[(1e6, "M"), (1e3, "k"), (1.0, ""), (1e-3, "m")];
const CAPACITANCE: &[(f64, &str)] = &[(1.0, ""), (1e-3, "m"), (1e-6, "u"), (1e-9, "n"), (1e-12, "p")];
const INDUCTANCE: &[(f64, &str)] = &[(1.0, ""), (1e-3, "m"), (1e-6, "u"), (1e-9, "n")];
const VOLTAGE: &[(f64, &str)] = &[(1e3, "k"), (1.0, ""), (1e-3, "m")];
const CURRENT: &[(f64, &str)] = &[(1.0, ""), (1e-3, "m"), (1e-6, "u")];
const FREQUENCY: &[(f64, &str)] = &[(1e9, "G"), (1e6, "M"), (1e3, "k"), (1.0, "")];
const POWER: &[(f64, &str)] = &[(1e3, "k"), (1.0, ""), (1e-3, "m")];

/// Render `value` with up to six decimals and no trailing zeros.
pub(crate) fn trim_number(value: f64) -> String {
    let text = format!("{value:.6}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_string() } else { text.to_string() }
}

fn with_prefix(value: f64, ladder: &[(f64, &str)], symbol: &str) -> String {
    if value == 0.0 {
        return format!("0{symbol}");
    }
    let magnitude = value.abs();
    let (scale, prefix) = ladder
        .iter()
        .find(|(scale, _)| magnitude >= *scale * (1.0 - 1e-9))
        .or_else(|| ladder.last())
        .copied()
        .unwrap_or((1.0, ""));
    format!("{}{prefix}{symbol}", trim_number(value / scale))
}

/// Render an SI `value` of `unit` in the notation the unit parsers accept.
///
/// `format_quantity(4700.0, UnitType::Resistance)` is `"4.7kOhm"`, and
/// `parse_resistance` reads it back as 4700.
pub fn format_quantity(value: f64, unit: UnitType) -> String {
    match unit {
        UnitType::Resistance | UnitType::Impedance => with_prefix(value, RESISTANCE, "Ohm"),
        UnitType::Capacitance => with_prefix(value, CAPACITANCE, "F"),
        UnitType::Inductance => with_prefix(value, INDUCTANCE, "H"),
        UnitType::Voltage => with_prefix(value, VOLTAGE, "V"),
        UnitType::Current => with_prefix(value, CURRENT, "A"),
        UnitType::Frequency => with_prefix(value, FREQUENCY, "Hz"),
        UnitType::Power => with_prefix(value, POWER, "W"),
        UnitType::Tolerance => format!("{}%", trim_number(value)),
        UnitType::PinCount | UnitType::PositionCount | UnitType::PinStructure => format!("{}P", trim_number(value)),
        UnitType::Pitch => format!("{}mm", trim_number(value)),
        UnitType::Dimensions => format!("{}mm²", trim_number(value)),
    }
}
