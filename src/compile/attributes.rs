//! Attribute names: short aliases, the reverse index, and the precomputed
//! numeric columns a store may carry.

use crate::units::{SpecParser, parse_capacitance, parse_current, parse_frequency, parse_inductance, parse_memory};
use crate::units::{parse_power, parse_ppm, parse_resistance, parse_tolerance, parse_voltage};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Short names accepted in filters, and the catalog names they stand for.
const ATTRIBUTE_ALIASES: &[(&str, &[&str])] = &[
    // MOSFETs
    ("Vgs(th)", &["Gate Threshold Voltage (Vgs(th))", "Gate Threshold Voltage"]),
    ("Vds", &["Drain to Source Voltage"]),
    ("Id", &["Current - Continuous Drain(Id)"]),
    ("Rds(on)", &["RDS(on)"]),
    // Diodes
    ("Vr", &["Voltage - DC Reverse(Vr)"]),
    ("If", &["Current - Rectified"]),
    ("Vf", &["Voltage - Forward(Vf@If)"]),
    // Passives
    ("Capacitance", &["Capacitance"]),
    ("Voltage", &["Voltage Rating"]),
    ("Tolerance", &["Tolerance"]),
    ("Power", &["Power(Watts)", "Pd - Power Dissipation"]),
    ("Resistance", &["Resistance"]),
    ("Inductance", &["Inductance"]),
    ("DCR", &["DC Resistance(DCR)"]),
    ("Isat", &["Current - Saturation(Isat)", "Current - Saturation (Isat)"]),
    ("Frequency", &["Frequency"]),
    // BJTs
    ("Vceo", &["Collector - Emitter Voltage VCEO"]),
    ("Ic", &["Current - Collector(Ic)"]),
    // Regulators
    ("Vout", &["Output Voltage"]),
    ("Iout", &["Output Current"]),
];

static ALIASES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| ATTRIBUTE_ALIASES.iter().copied().collect());

/// Catalog name -> the first alias that lists it.
static REVERSE_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut reverse = HashMap::new();
    for (alias, names) in ATTRIBUTE_ALIASES {
        for name in *names {
            reverse.entry(*name).or_insert(*alias);
        }
    }
    reverse
});

/// Every catalog attribute name a filter `name` may refer to.
///
/// An alias expands to its list; a name with a registered parser stands for
/// itself; a catalog name listed under an alias brings its siblings along.
pub fn attribute_names(name: &str) -> Vec<&str> {
    if let Some(names) = ALIASES.get(name) {
        return names.to_vec();
    }
    if SpecParser::for_attribute(name).is_some() {
        return vec![name];
    }
    if let Some(alias) = REVERSE_ALIASES.get(name) {
        return ALIASES[alias].to_vec();
    }
    vec![name]
}

/// Parser for the first of `names` that has one.
pub(crate) fn parser_for(names: &[&str]) -> Option<SpecParser> {
    names.iter().find_map(|name| SpecParser::for_attribute(name))
}

// --- Numeric columns ---------------------------------------------------------

/// A precomputed numeric column and how to read a filter value for it.
#[derive(Debug, Clone, Copy)]
pub struct NumericColumn {
    pub column: &'static str,
    pub parse: fn(&str) -> Option<f64>,
}

const fn col(column: &'static str, parse: fn(&str) -> Option<f64>) -> NumericColumn {
    NumericColumn { column, parse }
}

const SPEC_TO_COLUMN: &[(&str, NumericColumn)] = &[
    // Passives
    ("Resistance", col("resistance_ohms", parse_resistance)),
    ("Capacitance", col("capacitance_f", parse_capacitance)),
    ("Inductance", col("inductance_h", parse_inductance)),
    ("DC Resistance(DCR)", col("dcr_ohms", parse_resistance)),
    ("DCR", col("dcr_ohms", parse_resistance)),
    ("Current - Saturation(Isat)", col("isat_a", parse_current)),
    ("Current - Saturation (Isat)", col("isat_a", parse_current)),
    ("Isat", col("isat_a", parse_current)),
    ("Voltage Rating", col("voltage_max_v", parse_voltage)),
    ("Voltage", col("voltage_max_v", parse_voltage)),
    ("Current Rating", col("current_max_a", parse_current)),
    ("Tolerance", col("tolerance_pct", parse_tolerance)),
    ("Power(Watts)", col("power_w", parse_power)),
    ("Power", col("power_w", parse_power)),
    ("Pd - Power Dissipation", col("power_w", parse_power)),
    // MOSFETs
    ("Drain to Source Voltage", col("vds_max_v", parse_voltage)),
    ("Vds", col("vds_max_v", parse_voltage)),
    ("Current - Continuous Drain(Id)", col("id_max_a", parse_current)),
    ("Id", col("id_max_a", parse_current)),
    ("RDS(on)", col("rds_on_ohms", parse_resistance)),
    ("Rds(on)", col("rds_on_ohms", parse_resistance)),
    // Diodes
    ("Voltage - DC Reverse(Vr)", col("vr_max_v", parse_voltage)),
    ("Vr", col("vr_max_v", parse_voltage)),
    ("Current - Rectified", col("if_max_a", parse_current)),
    ("If", col("if_max_a", parse_current)),
    ("Voltage - Forward(Vf@If)", col("vf_v", parse_voltage)),
    ("Vf", col("vf_v", parse_voltage)),
    // Regulators
    ("Output Voltage", col("vout_v", parse_voltage)),
    ("Vout", col("vout_v", parse_voltage)),
    ("Output Current", col("iout_max_a", parse_current)),
    ("Iout", col("iout_max_a", parse_current)),
    ("Voltage Dropout", col("vdropout_v", parse_voltage)),
    ("Quiescent Current(Iq)", col("iq_ua", parse_current)),
    ("Quiescent Current", col("iq_ua", parse_current)),
    // Converters, crystals, amplifiers
    ("Sampling Rate", col("sample_rate_hz", parse_frequency)),
    ("Load Capacitance", col("load_capacitance_pf", parse_capacitance)),
    ("Frequency Stability", col("freq_tolerance_ppm", parse_ppm)),
    ("Gain Bandwidth Product", col("gbw_hz", parse_frequency)),
    // Capacitors
    ("Ripple Current", col("ripple_current_a", parse_current)),
    ("Equivalent Series Resistance(ESR)", col("esr_ohms", parse_resistance)),
    ("ESR", col("esr_ohms", parse_resistance)),
    // MCUs and memories
    ("Flash", col("flash_size_bytes", parse_memory)),
    ("Program Memory Size", col("flash_size_bytes", parse_memory)),
    ("SRAM", col("ram_size_bytes", parse_memory)),
    ("RAM Size", col("ram_size_bytes", parse_memory)),
    ("Speed", col("clock_speed_hz", parse_frequency)),
    ("CPU Maximum Speed", col("clock_speed_hz", parse_frequency)),
    ("Capacity", col("memory_capacity_bits", parse_memory)),
    ("Memory Size", col("memory_capacity_bits", parse_memory)),
    // Chargers
    ("Charging Current", col("charge_current_a", parse_current)),
    ("Charge Current - Max", col("charge_current_a", parse_current)),
    // TVS / ESD
    ("Clamping Voltage", col("clamping_voltage_v", parse_voltage)),
    ("Reverse Stand-Off Voltage (Vrwm)", col("standoff_voltage_v", parse_voltage)),
    ("Peak Pulse Power(Ppk)", col("surge_power_w", parse_power)),
];

static COLUMNS: Lazy<HashMap<&'static str, NumericColumn>> = Lazy::new(|| SPEC_TO_COLUMN.iter().copied().collect());

/// The numeric column serving a filter on `name`, checking its aliases too.
pub fn numeric_column(name: &str) -> Option<NumericColumn> {
    std::iter::once(name).chain(attribute_names(name)).find_map(|n| COLUMNS.get(n).copied())
}

/// Catalog attribute names feeding each numeric column, for stores that
/// derive the columns from raw attributes.
pub(crate) fn column_sources() -> impl Iterator<Item = (&'static str, NumericColumn)> {
    SPEC_TO_COLUMN.iter().copied().filter(|(name, _)| !ALIASES.contains_key(name) || ALIASES[name].contains(name))
}
