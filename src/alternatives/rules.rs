//! Per-subcategory compatibility rules.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which way a rating may move for the part to stay a drop-in replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Candidate value must be at least the original's (voltage, current).
    Higher,
    /// Candidate value must be at most the original's (tolerance, RDS(on)).
    Lower,
}

/// What a candidate must share with the original part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityRule {
    /// Attribute that defines "the same part" (resistance for resistors).
    pub primary: String,
    /// Identity attributes that must be equal.
    #[serde(default)]
    pub must_match: Vec<String>,
    /// Ratings that may only improve, in check order.
    #[serde(default)]
    pub same_or_better: Vec<(String, Direction)>,
}

impl CompatibilityRule {
    pub fn new(primary: &str, must_match: &[&str], same_or_better: &[(&str, Direction)]) -> Self {
        Self {
            primary: primary.to_string(),
            must_match: must_match.iter().map(|s| s.to_string()).collect(),
            same_or_better: same_or_better.iter().map(|(name, dir)| (name.to_string(), *dir)).collect(),
        }
    }

    /// Every attribute the rule looks at: primary, must-match, then ratings.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary.as_str())
            .chain(self.must_match.iter().map(String::as_str))
            .chain(self.same_or_better.iter().map(|(name, _)| name.as_str()))
    }
}

/// Rules keyed by subcategory name, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: HashMap<String, CompatibilityRule>,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog rules.
    pub fn builtin() -> &'static RuleBook {
        &BUILTIN
    }

    pub fn insert(&mut self, subcategory: &str, rule: CompatibilityRule) {
        self.rules.insert(subcategory.to_lowercase(), rule);
    }

    pub fn get(&self, subcategory: &str) -> Option<&CompatibilityRule> {
        self.rules.get(&subcategory.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

static BUILTIN: Lazy<RuleBook> = Lazy::new(|| {
    let mut book = RuleBook::new();
    for (subcategory, primary, must_match, same_or_better) in BUILTIN_RULES {
        book.insert(subcategory, CompatibilityRule::new(primary, must_match, same_or_better));
    }
    book
});

type RuleRow = (&'static str, &'static str, &'static [&'static str], &'static [(&'static str, Direction)]);

use Direction::{Higher, Lower};

/// (subcategory, primary, must match, same or better)
const BUILTIN_RULES: &[RuleRow] = &[
    ("Chip Resistor - Surface Mount", "Resistance", &[], &[("Tolerance", Lower), ("Power(Watts)", Higher)]),
    ("Through Hole Resistors", "Resistance", &[], &[("Tolerance", Lower), ("Power(Watts)", Higher)]),
    ("Current Sense Resistors / Shunt Resistors", "Resistance", &[], &[("Tolerance", Lower), ("Power(Watts)", Higher)]),
    (
        "Resistor Networks, Arrays",
        "Resistance",
        &["Number of Resistors"],
        &[("Tolerance", Lower), ("Power(Watts)", Higher)],
    ),
    (
        "Potentiometers, Variable Resistors",
        "Resistance",
        &["Number of Turns"],
        &[("Power(Watts)", Higher), ("Tolerance", Lower)],
    ),
    (
        "Multilayer Ceramic Capacitors MLCC - SMD/SMT",
        "Capacitance",
        &["Temperature Coefficient"],
        &[("Voltage Rating", Higher), ("Tolerance", Lower)],
    ),
    (
        "Multilayer Ceramic Capacitors MLCC - Leaded",
        "Capacitance",
        &["Temperature Coefficient"],
        &[("Voltage Rating", Higher), ("Tolerance", Lower)],
    ),
    (
        "Through Hole Ceramic Capacitors",
        "Capacitance",
        &["Temperature Coefficient"],
        &[("Voltage Rating", Higher), ("Tolerance", Lower)],
    ),
    ("Aluminum Electrolytic Capacitors - SMD", "Capacitance", &[], &[("Voltage Rating", Higher)]),
    ("Aluminum Electrolytic Capacitors - Leaded", "Capacitance", &[], &[("Voltage Rating", Higher)]),
    ("Aluminum Electrolytic Capacitors (Can - Screw Terminals)", "Capacitance", &[], &[("Voltage Rating", Higher)]),
    ("Tantalum Capacitors", "Capacitance", &[], &[("Voltage Rating", Higher), ("Tolerance", Lower)]),
    ("Film Capacitors", "Capacitance", &[], &[("Voltage Rating", Higher), ("Tolerance", Lower)]),
    ("Polypropylene Film Capacitors (CBB)", "Capacitance", &[], &[("Voltage Rating", Higher), ("Tolerance", Lower)]),
    ("Polymer Aluminum Capacitors", "Capacitance", &[], &[("Voltage Rating", Higher)]),
    ("Hybrid Aluminum Electrolytic Capacitors", "Capacitance", &[], &[("Voltage Rating", Higher)]),
    ("Horn-Type Electrolytic Capacitors", "Capacitance", &[], &[("Voltage Rating", Higher)]),
    ("Niobium Oxide Capacitors", "Capacitance", &[], &[("Voltage Rating", Higher), ("Tolerance", Lower)]),
    ("Mica and PTFE Capacitors", "Capacitance", &[], &[("Voltage Rating", Higher), ("Tolerance", Lower)]),
    ("Safety Capacitors", "Capacitance", &["Ratings"], &[("Voltage(AC)", Higher), ("Tolerance", Lower)]),
    ("Capacitor Networks, Arrays", "Capacitance", &["Number of Capacitors"], &[("Voltage Rating", Higher)]),
    (
        "Inductors (SMD)",
        "Inductance",
        &[],
        &[("Current Rating", Higher), ("Current - Saturation (Isat)", Higher), ("DC Resistance(DCR)", Lower)],
    ),
    (
        "Power Inductors",
        "Inductance",
        &[],
        &[("Current Rating", Higher), ("Current - Saturation(Isat)", Higher), ("DC Resistance(DCR)", Lower)],
    ),
    (
        "Color Ring Inductors / Through Hole Inductors",
        "Inductance",
        &[],
        &[("Current Rating", Higher), ("DC Resistance(DCR)", Lower)],
    ),
    ("Wireless Charging Coils", "Inductance", &["Number of Coils"], &[("DC Resistance(DCR)", Lower)]),
    ("Ferrite Beads", "Impedance @ Frequency", &[], &[("Current Rating", Higher), ("DC Resistance(DCR)", Lower)]),
    (
        "Common Mode Filters",
        "Impedance @ Frequency",
        &["Number of Lines"],
        &[("Current Rating", Higher), ("Voltage Rating - DC", Higher)],
    ),
    (
        "MOSFETs",
        "Drain to Source Voltage",
        &[],
        &[("Drain to Source Voltage", Higher), ("Current - Continuous Drain(Id)", Higher), ("RDS(on)", Lower)],
    ),
    (
        "Silicon Carbide Field Effect Transistor (MOSFET)",
        "Drain to Source Voltage",
        &[],
        &[("Drain to Source Voltage", Higher), ("Current - Continuous Drain(Id)", Higher), ("RDS(on)", Lower)],
    ),
    ("JFETs", "FET Type", &["FET Type"], &[("Drain Current (Idss)", Higher), ("RDS(on)", Lower)]),
    (
        "Bipolar (BJT)",
        "type",
        &["type"],
        &[("Collector - Emitter Voltage VCEO", Higher), ("Current - Collector(Ic)", Higher)],
    ),
    (
        "Darlington Transistors",
        "Type",
        &["Type"],
        &[("Collector - Emitter Voltage VCEO", Higher), ("Current - Collector(Ic)", Higher)],
    ),
    ("Digital Transistors", "type", &["type"], &[("Collector - Emitter Voltage VCEO", Higher)]),
    (
        "Phototransistors",
        "Peak Wavelength",
        &["Peak Wavelength"],
        &[("Collector - Emitter Voltage VCEO", Higher), ("Current - Collector(Ic)", Higher)],
    ),
    (
        "IGBT Transistors / Modules",
        "Collector-Emitter Breakdown Voltage (Vces)",
        &[],
        &[
            ("Collector-Emitter Breakdown Voltage (Vces)", Higher),
            ("Current - Collector(Ic)", Higher),
            ("Vce Saturation(VCE(sat))", Lower),
        ],
    ),
    (
        "Schottky Diodes",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher), ("Voltage - Forward(Vf@If)", Lower)],
    ),
    (
        "Switching Diodes",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher)],
    ),
    ("Zener Diodes", "Zener Voltage(Nom)", &["Zener Voltage(Nom)"], &[("Pd - Power Dissipation", Higher)]),
    (
        "Diodes - General Purpose",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher)],
    ),
    (
        "Diodes - Rectifiers - Fast Recovery",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Average Rectified", Higher)],
    ),
    (
        "Fast Recovery / High Efficiency Diodes",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher)],
    ),
    (
        "Bridge Rectifiers",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher), ("Voltage - Forward(Vf@If)", Lower)],
    ),
    (
        "Super Barrier Rectifiers (SBR)",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher), ("Voltage - Forward(Vf@If)", Lower)],
    ),
    (
        "Avalanche Diodes",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher)],
    ),
    (
        "High Effic Rectifier",
        "Reverse Voltage",
        &[],
        &[("Reverse Voltage", Higher), ("Average Rectified Current", Higher)],
    ),
    (
        "SiC Diodes",
        "Voltage - DC Reverse(Vr)",
        &[],
        &[("Voltage - DC Reverse(Vr)", Higher), ("Current - Rectified", Higher)],
    ),
    (
        "ESD and Surge Protection (TVS/ESD)",
        "Reverse Stand-Off Voltage (Vrwm)",
        &[],
        &[("Clamping Voltage", Lower), ("Peak Pulse Power", Higher)],
    ),
    ("Varistors", "Varistor Voltage", &["Varistor Voltage"], &[("Clamping Voltage", Lower), ("Energy", Higher)]),
    (
        "Gas Discharge Tube Arresters (GDT)",
        "Voltage - DC Spark Over",
        &["Number of Poles"],
        &[("Impulse Discharge Current", Higher)],
    ),
    (
        "Semiconductor Discharge Tubes (TSS)",
        "Peak off - state voltage(Vdrm)",
        &[],
        &[("Peak Pulse Current-Ipp (10/1000us)", Higher)],
    ),
    ("LED Protection", "Trigger Voltage", &["Trigger Voltage"], &[("Hold Current", Higher)]),
    ("Resettable Fuses", "Hold Current", &["Hold Current", "Trip Current"], &[("Voltage - Max", Higher)]),
    ("Automotive Fuses", "Current Rating", &["Current Rating", "Type"], &[("Voltage Rating (DC)", Higher)]),
    (
        "Thermal Fuses (TCO)",
        "Rated Functioning Temperature",
        &["Rated Functioning Temperature"],
        &[("Current Rating", Higher), ("Voltage Rating", Higher)],
    ),
    ("Disposable fuses", "Current Rating", &["Current Rating", "Type"], &[("Voltage Rating (AC)", Higher)]),
    ("NTC Thermistors", "Resistance @ 25℃", &["Resistance @ 25℃", "B Constant (25℃/100℃)"], &[]),
    ("PTC Thermistors", "Resistance @ 25℃", &["Resistance @ 25℃"], &[]),
    ("LED Indication - Discrete", "Illumination Color", &["Illumination Color"], &[]),
    ("LED - High Brightness", "Illumination Color", &["Illumination Color"], &[]),
    ("Infrared (IR) LEDs", "Peak Wavelength", &["Peak Wavelength"], &[]),
    ("Ultraviolet LEDs (UVLED)", "Peak Wavelength", &["Peak Wavelength"], &[]),
    ("Light Bars, Arrays", "Color", &["Color", "Number of Segments"], &[]),
    (
        "Transistor, Photovoltaic Output Optoisolators",
        "Isolation Voltage(Vrms)",
        &[],
        &[("Isolation Voltage(Vrms)", Higher)],
    ),
    (
        "Logic Output Optoisolators",
        "Isolation Voltage(Vrms)",
        &[],
        &[("Isolation Voltage(Vrms)", Higher), ("Data Rate", Higher)],
    ),
    (
        "Triac, SCR Output Optoisolators",
        "Load Voltage",
        &[],
        &[("Load Voltage", Higher), ("Load Current", Higher), ("Isolation Voltage(Vrms)", Higher)],
    ),
    (
        "Gate Drive Optocoupler",
        "Isolation Voltage(Vrms)",
        &[],
        &[("Isolation Voltage(Vrms)", Higher), ("Output Current(Max)", Higher)],
    ),
    (
        "Photointerrupters - Slot Type - Transistor Output",
        "Peak Wavelength",
        &["Peak Wavelength"],
        &[("Load Voltage", Higher), ("Output Current", Higher)],
    ),
    ("Reflective Optical Interrupters", "Output Type", &["Output Type"], &[("Current - Collector(Ic)", Higher)]),
    ("Photoresistors", "Cell Resistance @ Illuminance", &[], &[("Voltage - Max", Higher)]),
    ("Crystals", "Frequency", &["Frequency", "Load Capacitance"], &[("Frequency Stability", Lower)]),
    ("Crystal Oscillators", "Frequency", &["Frequency", "Output Type"], &[("Frequency Stability", Lower)]),
    ("Ceramic Resonators", "Frequency", &["Frequency"], &[]),
    ("SAW Resonators", "Frequency", &["Frequency"], &[]),
    (
        "Temperature Compensated Crystal Oscillators (TCXO)",
        "Frequency",
        &["Frequency", "Output Type"],
        &[("Frequency Stability", Lower)],
    ),
    (
        "Voltage-Controlled Crystal Oscillators (VCXOs)",
        "Frequency",
        &["Frequency", "Output Type"],
        &[("Frequency Stability", Lower)],
    ),
    (
        "Oven Controlled Crystal Oscillators (OCXOs)",
        "Frequency",
        &["Frequency", "Output Type"],
        &[("Frequency Stability", Lower)],
    ),
    (
        "Voltage Regulators - Linear, Low Drop Out (LDO) Regulators",
        "Output Voltage",
        &["Output Voltage"],
        &[("Output Current", Higher), ("Voltage Dropout", Lower)],
    ),
    (
        "Voltage Reference",
        "Output Voltage",
        &["Output Voltage"],
        &[("Tolerance", Lower), ("Temperature Coefficient", Lower)],
    ),
    (
        "Digital Isolators",
        "Number of Forward Channels",
        &["Number of Forward Channels", "Number of Reverse Channels"],
        &[("Isolation Voltage(Vrms)", Higher), ("Data Rate(Max)", Higher)],
    ),
    (
        "Tactile Switches",
        "Mounting Type",
        &["Mounting Type"],
        &[("Voltage Rating", Higher), ("Contact Current", Higher)],
    ),
    (
        "DIP Switches",
        "Number of Positions",
        &["Number of Positions", "Type"],
        &[("Voltage Rating", Higher), ("Current Rating", Higher)],
    ),
    (
        "Slide Switches",
        "Circuit",
        &["Circuit", "Mounting Type"],
        &[("Voltage Rating", Higher), ("Current Rating", Higher)],
    ),
    ("Toggle Switches", "Circuit", &["Circuit"], &[("Voltage Rating (DC)", Higher), ("Current Rating", Higher)]),
    ("Rocker Switches", "Circuit", &["Circuit"], &[("Voltage Rating (DC)", Higher), ("Current Rating", Higher)]),
    (
        "Pushbutton Switches",
        "Self Lock / No Lock",
        &["Self Lock / No Lock"],
        &[("Voltage Rating", Higher), ("Contact Current", Higher)],
    ),
    (
        "Rotary Switches",
        "Positions",
        &["Positions", "Number of Poles Per Deck"],
        &[("Voltage Rating (DC)", Higher), ("Current Rating", Higher)],
    ),
    (
        "Power Relays",
        "Coil Voltage",
        &["Coil Voltage", "Contact Form"],
        &[("Contact Rating", Higher), ("Switching Voltage(Max)", Higher)],
    ),
    (
        "Signal Relays",
        "Coil Voltage",
        &["Coil Voltage", "Contact Form"],
        &[("Contact Rating", Higher), ("Switching Current(Max)", Higher)],
    ),
    (
        "Automotive Relays",
        "Coil Voltage",
        &["Coil Voltage", "Contact Form"],
        &[("Contact Rating", Higher), ("Switching Voltage(Max)", Higher)],
    ),
    (
        "Reed Relays",
        "Coil Voltage",
        &["Coil Voltage", "Contact Form"],
        &[("Switching Voltage(Max)", Higher), ("Switching Current(Max)", Higher)],
    ),
    (
        "Solid State Relays (MOS Output)",
        "Load Voltage",
        &[],
        &[("Load Voltage", Higher), ("Load Current", Higher), ("RDS(on)", Lower)],
    ),
    (
        "Solid State Relays (Triac Output)",
        "Load Voltage",
        &["Contact Form"],
        &[("Load Voltage", Higher), ("Load Current", Higher)],
    ),
    ("Pin Headers", "Pitch", &["Pitch", "Number of Pins", "Number of Rows"], &[("Current Rating", Higher)]),
    ("Female Headers", "Pitch", &["Pitch", "Number of Positions", "Number of Rows"], &[("Current Rating", Higher)]),
    (
        "Screw Terminal Blocks",
        "Number of Positions or Pins",
        &["Number of Positions or Pins"],
        &[("Voltage Rating (Max)", Higher), ("Current Rating", Higher)],
    ),
    (
        "Barrier Terminal Blocks",
        "Number of Positions or Pins",
        &["Pitch", "Number of Positions or Pins"],
        &[("Voltage Rating (Max)", Higher), ("Current Rating", Higher)],
    ),
    (
        "Pluggable System Terminal Block",
        "Number of Positions or Pins",
        &["Pitch", "Number of Positions or Pins"],
        &[("Voltage Rating (Max)", Higher), ("Current Rating", Higher)],
    ),
    ("USB Connectors", "Connector Type", &["Connector Type", "Gender"], &[]),
    ("HDMI Connectors", "Connector Type", &["Connector Type", "Gender"], &[]),
    ("DisplayPort (DP) Connector", "Connector Type", &["Connector Type"], &[]),
    (
        "Audio Connectors",
        "Connector Type",
        &["Connector Type"],
        &[("Voltage Rating", Higher), ("Current Rating", Higher)],
    ),
    ("Coaxial Connectors (RF)", "Connector Type", &["Connector Type", "Impedance"], &[]),
    (
        "IDC Connectors",
        "Number of Positions or Pins",
        &["Number of Positions or Pins", "Pitch"],
        &[("Current Rating", Higher)],
    ),
    (
        "Wire To Board Connector",
        "Pitch",
        &["Pitch", "Pins Structure"],
        &[("Current Rating", Higher), ("Voltage Rating", Higher)],
    ),
    (
        "Circular Connectors & Cable Connectors",
        "Number of Pins",
        &["Number of Pins", "Gender"],
        &[("Voltage Rating", Higher), ("Current Rating", Higher)],
    ),
    (
        "XLR (Cannon) Connectors",
        "Number of Pins",
        &["Number of Pins", "Gender"],
        &[("Voltage Rating", Higher), ("Current Rating", Higher)],
    ),
    (
        "DIN41612 Connectors",
        "Number of Pins",
        &["Pitch", "Number of Pins", "Number of Rows"],
        &[("Current Rating", Higher)],
    ),
    ("Shunts, Jumpers", "Pitch", &["Pitch", "Number of Positions"], &[("Current Rating", Higher)]),
    ("Speakers", "Impedance", &["Impedance"], &[("Rated Power", Higher)]),
    ("Buzzers", "Voltage - Supply", &["Driver Circuitry"], &[("Sound Pressure Level", Higher)]),
    ("Microphones", "Direction", &["Direction"], &[]),
    ("MEMS Microphones", "Output Type", &["Output Type"], &[]),
    ("Vibration Motors", "Voltage Rating", &[], &[("Voltage Rating", Higher), ("Current Rating", Higher)]),
    (
        "Rotary Encoders",
        "Encoder Type",
        &["Encoder Type"],
        &[("Rated Voltage (Max)", Higher), ("Current Rating (Max)", Higher)],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        let book = RuleBook::builtin();
        assert!(book.len() > 100);

        let rule = book.get("mosfets").expect("MOSFET rule");
        assert_eq!(rule.primary, "Drain to Source Voltage");
        assert!(rule.same_or_better.contains(&("RDS(on)".to_string(), Direction::Lower)));

        let rule = book.get("Chip Resistor - Surface Mount").expect("resistor rule");
        assert_eq!(rule.attributes().collect::<Vec<_>>(), vec!["Resistance", "Tolerance", "Power(Watts)"]);
        assert!(book.get("Unobtainium").is_none());
    }

    #[test]
    fn rules_deserialize_with_defaults() {
        let rule: CompatibilityRule = serde_json::from_str(r#"{"primary":"Capacitance"}"#).expect("valid rule");
        assert_eq!(rule, CompatibilityRule::new("Capacitance", &[], &[]));

        let rule: CompatibilityRule =
            serde_json::from_str(r#"{"primary":"Capacitance","same_or_better":[["Voltage Rating","higher"]]}"#)
                .expect("valid rule");
        assert_eq!(rule.same_or_better, vec![("Voltage Rating".to_string(), Direction::Higher)]);
    }
}
