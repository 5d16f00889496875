use super::ranges::{
    ValueRange, parse_frequency_range, parse_impedance_only, parse_temperature_range, parse_vgs_range, parse_vin_range,
};
use super::scalar::*;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// How to read the stored value of one catalog attribute.
#[derive(Debug, Clone, Copy)]
pub enum SpecParser {
    /// A single quantity in SI units.
    Scalar(fn(&str) -> Option<f64>),
    /// A `min~max` pair.
    Range(fn(&str) -> ValueRange),
    /// "600Ω @ 100MHz" style ratings; numeric views use the impedance.
    ImpedanceAtFrequency,
}

impl SpecParser {
    /// Parser registered for the exact catalog attribute `name`.
    pub fn for_attribute(name: &str) -> Option<SpecParser> {
        SPEC_PARSERS.get(name).copied()
    }

    /// One number for `text`: the scalar itself, a range's upper bound, or
    /// the impedance of an impedance-at-frequency rating.
    pub fn scalar(&self, text: &str) -> Option<f64> {
        match self {
            SpecParser::Scalar(parse) => parse(text),
            SpecParser::Range(parse) => parse(text).representative(),
            SpecParser::ImpedanceAtFrequency => parse_impedance_only(text),
        }
    }

    /// `text` as a range; scalars become a single point.
    pub fn range(&self, text: &str) -> ValueRange {
        match self {
            SpecParser::Range(parse) => parse(text),
            _ => self.scalar(text).map(ValueRange::point).unwrap_or_default(),
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, SpecParser::Range(_))
    }
}

static SPEC_PARSERS: Lazy<HashMap<&'static str, SpecParser>> = Lazy::new(|| {
    use SpecParser::{ImpedanceAtFrequency, Range, Scalar};

    let scalars: &[(&str, fn(&str) -> Option<f64>)] = &[
        // Voltages
        ("Voltage Rating", parse_voltage),
        ("Voltage Rating (Max)", parse_voltage),
        ("Voltage - DC Reverse(Vr)", parse_voltage),
        ("Drain to Source Voltage", parse_voltage),
        ("Collector - Emitter Voltage VCEO", parse_voltage),
        ("Reverse Stand-Off Voltage (Vrwm)", parse_voltage),
        ("Clamping Voltage", parse_voltage),
        ("Clamping Voltage@Ipp", parse_voltage),
        ("Isolation Voltage(Vrms)", parse_voltage),
        ("Voltage - Max", parse_voltage),
        ("Output Voltage", parse_voltage),
        ("Voltage Dropout", parse_voltage),
        ("Zener Voltage(Nom)", parse_voltage),
        ("Charging Saturation Voltage", parse_voltage),
        ("Coil Voltage", parse_voltage),
        ("Slew Rate", parse_voltage),
        ("Input Offset Voltage", parse_voltage),
        ("Voltage - Forward(Vf@If)", parse_forward_voltage),
        // Ratios
        ("Tolerance", parse_tolerance),
        ("Efficiency", parse_percentage),
        ("Frequency Stability", parse_ppm),
        // Power
        ("Power(Watts)", parse_power),
        ("Pd - Power Dissipation", parse_power),
        ("Peak Pulse Power", parse_power),
        ("Peak Pulse Power(Ppk)", parse_power),
        ("Peak Pulse Power (Ppk)", parse_power),
        ("Peak Pulse Power Dissipation (Ppp)", parse_power),
        // Currents
        ("Current - Continuous Drain(Id)", parse_current),
        ("Current - Collector(Ic)", parse_current),
        ("Current - Rectified", parse_current),
        ("Current Rating", parse_current),
        ("Current - Saturation(Isat)", parse_current),
        ("Current - Saturation (Isat)", parse_current),
        ("Output Current", parse_current),
        ("Hold Current", parse_current),
        ("Trip Current", parse_current),
        ("Charging Current", parse_current),
        ("Fast Charge Current", parse_current),
        ("Charge Current", parse_current),
        ("Charge Current - Max", parse_current),
        ("Forward Current(If)", parse_current),
        ("Forward Current (If)", parse_current),
        ("If - Forward Current", parse_current),
        ("Peak Pulse Current-Ipp (10/1000us)", parse_current),
        ("Quiescent Current(Iq)", parse_current),
        ("Quiescent Current", parse_current),
        ("Ripple Current", parse_current),
        // Resistances
        ("DC Resistance(DCR)", parse_resistance),
        ("RDS(on)", parse_resistance),
        ("Resistance", parse_resistance),
        ("Equivalent Series Resistance(ESR)", parse_resistance),
        // Reactive
        ("Capacitance", parse_capacitance),
        ("Load Capacitance", parse_capacitance_pf),
        ("Input Capacitance(Ciss)", parse_capacitance_pf),
        ("Input Capacitance (Ciss)", parse_capacitance_pf),
        ("Ciss", parse_capacitance_pf),
        ("Inductance", parse_inductance),
        // Frequencies
        ("Frequency", parse_frequency),
        ("Gain Bandwidth Product", parse_frequency),
        ("Sampling Rate", parse_frequency),
        ("Speed", parse_frequency),
        ("Max Frequency", parse_frequency),
        ("Operating Frequency", parse_frequency),
        ("CPU Maximum Speed", parse_frequency),
        // Counts and geometry
        ("Resolution(Bits)", parse_integer),
        ("Number of Bits", parse_integer),
        ("Number of Pins", parse_integer),
        ("Number of Rows", parse_integer),
        ("Lifetime", parse_integer),
        ("Pitch", parse_length_mm),
        // Signal
        ("Noise Figure", parse_decibels),
        ("Gain", parse_decibels),
        ("Common Mode Rejection Ratio(CMRR)", parse_decibels),
        // Memory
        ("Flash", parse_memory),
        ("Program Memory Size", parse_memory),
        ("Program Storage Size", parse_memory),
        ("SRAM", parse_memory),
        ("RAM Size", parse_memory),
        ("Capacity", parse_memory),
        ("Memory Size", parse_memory),
        // Optics
        ("Dominant Wavelength", parse_wavelength),
        ("Wavelength - Dominant", parse_wavelength),
        ("Luminous Intensity", parse_luminosity),
        ("Luminous Intensity (mcd)", parse_luminosity),
    ];

    let ranges: &[(&str, fn(&str) -> ValueRange)] = &[
        ("Operating Temperature", parse_temperature_range),
        ("Operating Temperature Range", parse_temperature_range),
        ("Input Voltage", parse_vin_range),
        ("Gate Threshold Voltage (Vgs(th))", parse_vgs_range),
        ("Gate Threshold Voltage", parse_vgs_range),
        ("Frequency Range", parse_frequency_range),
    ];

    let mut map: HashMap<&'static str, SpecParser> = HashMap::new();
    map.extend(scalars.iter().map(|(name, parse)| (*name, Scalar(*parse))));
    map.extend(ranges.iter().map(|(name, parse)| (*name, Range(*parse))));
    map.insert("Impedance @ Frequency", ImpedanceAtFrequency);
    map
});

/// Attributes whose values vary too much in format to parse; alternatives
/// compare them as trimmed, case-insensitive strings.
static STRING_COMPARED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "Temperature Coefficient",
        "Illumination Color",
        "type",
        "Type",
        "Output Type",
        "Peak Wavelength",
        "FET Type",
        "B Constant (25℃/100℃)",
        "Number of Positions",
        "Number of Pins",
        "Number of Positions or Pins",
        "Number of Rows",
        "Pitch",
        "Connector Type",
        "Gender",
        "Pins Structure",
        "Circuit",
        "Contact Form",
        "Mounting Type",
        "Self Lock / No Lock",
        "Positions",
        "Number of Poles Per Deck",
        "Rated Functioning Temperature",
        "Number of Resistors",
        "Number of Capacitors",
        "Number of Lines",
        "Number of Forward Channels",
        "Number of Reverse Channels",
        "Number of Poles",
        "Number of Turns",
        "Number of Coils",
        "Impedance",
        "Driver Circuitry",
        "Ratings",
        "Data Rate",
        "Data Rate(Max)",
        "Color",
        "Number of Segments",
        "Direction",
        "Encoder Type",
    ])
});

/// Should values of `attribute` be compared as strings rather than parsed?
pub fn is_string_compared(attribute: &str) -> bool {
    STRING_COMPARED.contains(attribute)
}
