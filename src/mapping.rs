//! Category-aware attribute mapping.
//!
//! A bare "100V" means different things per category: drain-source voltage
//! for a MOSFET, reverse voltage for a diode, rated voltage for a capacitor.
//! [`map`] picks the catalog attribute name in three steps:
//!
//! 1. the keyword the user typed ("schottky", "ldo"),
//! 2. the subcategory the query resolved to ("mosfets"),
//! 3. a fixed default per unit type.
//!
//! The operator depends only on the unit type: identity quantities
//! (resistance, capacitance, counts, ...) filter with `=`, ratings
//! (voltage, current, power) with `>=`. "100V mosfet" means rated for at
//! least 100V.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::compile::Operator;
use crate::extract::{CHIP_RESISTORS, MOSFETS};
use crate::{SpecValue, UnitMask, UnitType};

type AttributeTable = &'static [(UnitType, &'static str)];

// --- Attribute groups --------------------------------------------------------

const MOSFET: AttributeTable = &[(UnitType::Voltage, "Vds"), (UnitType::Current, "Id")];
const DIODE: AttributeTable = &[(UnitType::Voltage, "Vr"), (UnitType::Current, "If")];
const ZENER: AttributeTable = &[(UnitType::Voltage, "Zener Voltage(Nom)"), (UnitType::Current, "If")];
const TVS: AttributeTable = &[
    (UnitType::Voltage, "Reverse Stand-Off Voltage (Vrwm)"),
    (UnitType::Current, "Peak Pulse Current-Ipp (10/1000us)"),
];
const INDUCTOR: AttributeTable = &[(UnitType::Current, "Current Rating")];
const FERRITE: AttributeTable = &[(UnitType::Current, "Current Rating"), (UnitType::Impedance, "Impedance @ Frequency")];
const CAPACITOR: AttributeTable = &[(UnitType::Voltage, "Voltage Rating")];
const ELECTROLYTIC: AttributeTable = &[(UnitType::Voltage, "Voltage Rating"), (UnitType::Current, "Ripple Current")];
const CRYSTAL: AttributeTable = &[(UnitType::Frequency, "Frequency")];
const BJT: AttributeTable = &[(UnitType::Voltage, "Vceo"), (UnitType::Current, "Ic")];
const CHARGER: AttributeTable =
    &[(UnitType::Current, "Charge Current - Max"), (UnitType::Voltage, "Charging Saturation Voltage")];
const REGULATOR: AttributeTable = &[(UnitType::Voltage, "Output Voltage"), (UnitType::Current, "Output Current")];
const LED: AttributeTable =
    &[(UnitType::Current, "Forward Current(If)"), (UnitType::Voltage, "Voltage - Forward(Vf@If)")];
const FUSE: AttributeTable = &[(UnitType::Voltage, "Voltage Rating"), (UnitType::Current, "Hold Current")];
const USB_CONNECTOR: AttributeTable = &[
    (UnitType::PinCount, "Number of Contacts"),
    (UnitType::Pitch, "Pitch"),
    (UnitType::PositionCount, "Number of Contacts"),
];
const CONNECTOR: AttributeTable = &[
    (UnitType::PinCount, "Number of Pins"),
    (UnitType::Pitch, "Pitch"),
    (UnitType::PositionCount, "Number of Pins"),
];
const FLAT_CONNECTOR: AttributeTable = &[(UnitType::PinCount, "Number of Pins"), (UnitType::Pitch, "Pitch")];
const TERMINAL_BLOCK: AttributeTable = &[
    (UnitType::PinCount, "Number of Pins"),
    (UnitType::Pitch, "Pitch"),
    (UnitType::PositionCount, "Number of Pins"),
    (UnitType::Voltage, "Voltage Rating (Max)"),
    (UnitType::Current, "Current Rating"),
];
const SWITCH: AttributeTable = &[(UnitType::Dimensions, "Size")];

/// Keyword or subcategory name -> attribute names by unit type.
static CATEGORY_ATTRIBUTE_MAP: Lazy<HashMap<&'static str, AttributeTable>> = Lazy::new(|| {
    let entries: &[(&str, AttributeTable)] = &[
        ("mosfet", MOSFET),
        ("mosfets", MOSFET),
        ("n-channel mosfet", MOSFET),
        ("p-channel mosfet", MOSFET),
        ("power mosfet", MOSFET),
        ("nmos", MOSFET),
        ("pmos", MOSFET),
        ("diode", DIODE),
        ("switching diodes", DIODE),
        ("schottky", DIODE),
        ("schottky diode", DIODE),
        ("schottky diodes", DIODE),
        ("rectifier", DIODE),
        ("rectifier diode", DIODE),
        ("diodes - general purpose", DIODE),
        ("zener", ZENER),
        ("zener diode", ZENER),
        ("zener diodes", ZENER),
        ("tvs", TVS),
        ("tvs diode", TVS),
        ("esd and surge protection (tvs/esd)", TVS),
        ("inductor", INDUCTOR),
        ("inductors", INDUCTOR),
        ("inductors (smd)", INDUCTOR),
        ("power inductor", INDUCTOR),
        ("power inductors", INDUCTOR),
        ("coil", INDUCTOR),
        ("ferrite bead", FERRITE),
        ("ferrite", FERRITE),
        ("ferrite beads", FERRITE),
        ("capacitor", CAPACITOR),
        ("capacitors", CAPACITOR),
        ("mlcc", CAPACITOR),
        ("multilayer ceramic capacitors mlcc - smd/smt", CAPACITOR),
        ("tantalum", CAPACITOR),
        ("tantalum capacitors", CAPACITOR),
        ("electrolytic", ELECTROLYTIC),
        ("aluminum electrolytic capacitors - smd", ELECTROLYTIC),
        ("aluminum electrolytic capacitors - leaded", ELECTROLYTIC),
        ("crystal", CRYSTAL),
        ("crystals", CRYSTAL),
        ("oscillator", CRYSTAL),
        ("crystal oscillators", CRYSTAL),
        ("bjt", BJT),
        ("transistor", BJT),
        ("npn", BJT),
        ("pnp", BJT),
        ("bipolar (bjt)", BJT),
        ("battery charger", CHARGER),
        ("lipo charger", CHARGER),
        ("lithium charger", CHARGER),
        ("battery management", CHARGER),
        ("charging ic", CHARGER),
        ("ldo", REGULATOR),
        ("regulator", REGULATOR),
        ("linear regulator", REGULATOR),
        ("voltage regulators - linear, low drop out (ldo) regulators", REGULATOR),
        ("buck", REGULATOR),
        ("boost", REGULATOR),
        ("dc-dc", REGULATOR),
        ("dc-dc converters", REGULATOR),
        ("led", LED),
        ("leds", LED),
        ("led indication - discrete", LED),
        ("fuse", FUSE),
        ("ptc", FUSE),
        ("resettable fuse", FUSE),
        ("resettable fuses", FUSE),
        ("disposable fuses", FUSE),
        ("usb connector", USB_CONNECTOR),
        ("usb connectors", USB_CONNECTOR),
        ("usb-c", USB_CONNECTOR),
        ("type-c", USB_CONNECTOR),
        ("connector", CONNECTOR),
        ("header", CONNECTOR),
        ("pin header", CONNECTOR),
        ("pin headers", CONNECTOR),
        ("female header", CONNECTOR),
        ("female headers", CONNECTOR),
        ("jst", CONNECTOR),
        ("wire to board connector", CONNECTOR),
        ("idc connector", FLAT_CONNECTOR),
        ("idc connectors", FLAT_CONNECTOR),
        ("ffc", FLAT_CONNECTOR),
        ("fpc", FLAT_CONNECTOR),
        ("terminal block", TERMINAL_BLOCK),
        ("screw terminal", TERMINAL_BLOCK),
        ("screw terminal blocks", TERMINAL_BLOCK),
        ("pluggable system terminal block", TERMINAL_BLOCK),
        ("tactile switch", SWITCH),
        ("tactile switches", SWITCH),
        ("push button", SWITCH),
    ];
    entries.iter().copied().collect()
});

fn default_attribute(unit: UnitType) -> &'static str {
    match unit {
        UnitType::Voltage => "Voltage Rating",
        UnitType::Current => "Current Rating",
        UnitType::Resistance => "Resistance",
        UnitType::Capacitance => "Capacitance",
        UnitType::Inductance => "Inductance",
        UnitType::Frequency => "Frequency",
        UnitType::Tolerance => "Tolerance",
        UnitType::Power => "Power",
        UnitType::PinCount | UnitType::PositionCount => "Number of Pins",
        UnitType::PinStructure => "Pin Structure",
        UnitType::Pitch => "Pitch",
        UnitType::Dimensions => "Dimensions",
        UnitType::Impedance => "Impedance @ Frequency",
    }
}

fn lookup(key: Option<&str>, unit: UnitType) -> Option<&'static str> {
    let table = CATEGORY_ATTRIBUTE_MAP.get(key?.to_lowercase().as_str())?;
    table.iter().find(|(u, _)| *u == unit).map(|(_, name)| *name)
}

/// Default comparison for a unit type.
pub(crate) fn operator_for(unit: UnitType) -> Operator {
    if unit.is_exact_match() { Operator::Eq } else { Operator::Ge }
}

/// Resolve the catalog attribute and operator for an extracted value.
pub(crate) fn map(
    value: &SpecValue,
    component_type: Option<&str>,
    matched_keyword: Option<&str>,
) -> (&'static str, Operator) {
    let name = lookup(matched_keyword, value.unit)
        .or_else(|| lookup(component_type, value.unit))
        .unwrap_or_else(|| default_attribute(value.unit));
    (name, operator_for(value.unit))
}

/// Guess a subcategory from the kinds of values a query carries.
///
/// Inductance alone never decides: inductors are split over several
/// subcategories and free-text search covers them all.
pub(crate) fn infer_subcategory(units: UnitMask) -> Option<&'static str> {
    if units.contains(UnitMask::RESISTANCE) && !units.intersects(UnitMask::INDUCTANCE | UnitMask::CAPACITANCE) {
        return Some(CHIP_RESISTORS);
    }
    if units.contains(UnitMask::CAPACITANCE) {
        return Some("multilayer ceramic capacitors mlcc - smd/smt");
    }
    None
}

/// Subcategories where a dimensions token names a package ("SMD,4x4mm").
pub(crate) fn dimensions_are_package(subcategory: &str) -> bool {
    ["inductors (smd)", "power inductors", "inductors, coils, chokes", "led", "light emitting diodes"]
        .iter()
        .any(|name| subcategory.contains(name))
}

/// Subcategories that take channel-count filters ("dual" -> "2 N-Channel").
pub(crate) fn is_mosfet(subcategory: &str) -> bool {
    subcategory == MOSFETS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(unit: UnitType) -> SpecValue {
        SpecValue::new("x", 1.0, unit, "x")
    }

    #[test]
    fn lookup_order_keyword_then_type_then_default() {
        let cases: Vec<(UnitType, Option<&str>, Option<&str>, (&str, Operator))> = vec![
            (UnitType::Voltage, Some(MOSFETS), Some("mosfet"), ("Vds", Operator::Ge)),
            (UnitType::Voltage, Some("schottky diodes"), Some("schottky"), ("Vr", Operator::Ge)),
            (UnitType::Voltage, Some(MOSFETS), None, ("Vds", Operator::Ge)),
            (UnitType::Voltage, None, None, ("Voltage Rating", Operator::Ge)),
            (UnitType::Resistance, Some(CHIP_RESISTORS), Some("resistor"), ("Resistance", Operator::Eq)),
            (UnitType::Frequency, None, Some("crystal"), ("Frequency", Operator::Eq)),
            (UnitType::PinCount, Some("usb connectors"), None, ("Number of Contacts", Operator::Eq)),
            (UnitType::Impedance, Some("ferrite beads"), Some("ferrite bead"), ("Impedance @ Frequency", Operator::Eq)),
            (UnitType::Power, None, None, ("Power", Operator::Ge)),
            (UnitType::Current, None, Some("LDO"), ("Output Current", Operator::Ge)),
        ];

        for (unit, component_type, keyword, expected) in cases {
            assert_eq!(map(&value(unit), component_type, keyword), expected, "{unit} with {keyword:?}/{component_type:?}");
        }
    }

    #[test]
    fn subcategory_inference() {
        assert_eq!(infer_subcategory(UnitMask::RESISTANCE | UnitMask::TOLERANCE), Some(CHIP_RESISTORS));
        assert_eq!(
            infer_subcategory(UnitMask::CAPACITANCE | UnitMask::VOLTAGE),
            Some("multilayer ceramic capacitors mlcc - smd/smt")
        );
        assert_eq!(infer_subcategory(UnitMask::RESISTANCE | UnitMask::INDUCTANCE), None);
        assert_eq!(infer_subcategory(UnitMask::INDUCTANCE), None);
    }
}
