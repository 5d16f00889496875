//! Unit normalization.
//!
//! Catalog attribute values and query tokens arrive as free-form strings
//! ("4k7", "100nF", "1/4W", "±20ppm", "-40℃~+85℃", "600Ω @ 100MHz"). This
//! module turns them into canonical SI numbers so every comparison in the
//! crate happens in one unit system.
//!
//! ## How the parts work together
//!
//! ```text
//! "4k7"        ── parse_resistance ──────────────> Some(4700.0)      (scalar.rs)
//! "1.5V~2.5V"  ── parse_vgs_range ───────────────> 1.5 ..= 2.5       (ranges.rs)
//! "600Ω@100MHz"── parse_impedance_at_frequency ──> (600, 1e8)        (ranges.rs)
//!
//! attribute name ── SpecParser::for_attribute ──> parser to apply    (registry.rs)
//! (value, unit)  ── format_quantity ────────────> "4.7kOhm"          (format.rs)
//! ```
//!
//! ## Contract
//!
//! Every `parse_*` function is total: it never panics and returns `None`
//! (or an empty [`ValueRange`]) for input it cannot read. Callers skip the
//! field. Non-finite numbers are never returned.
//!
//! ## Responsibilities by module
//!
//! - `scalar.rs`: one parser per physical quantity.
//! - `ranges.rs`: `min~max` range parsers and impedance-at-frequency pairs.
//! - `registry.rs`: attribute name -> parser lookup, plus the attributes
//!   that compare as plain strings.
//! - `format.rs`: SI-prefixed rendering that the scalar parsers read back.

#[path = "units/format.rs"]
mod format;
#[path = "units/ranges.rs"]
mod ranges;
#[path = "units/registry.rs"]
mod registry;
#[path = "units/scalar.rs"]
mod scalar;

#[cfg(test)]
#[path = "units/tests.rs"]
mod tests;

pub use format::format_quantity;
pub use ranges::{
    ImpedanceAtFrequency, ValueRange, impedance_matches, parse_frequency_range, parse_impedance_at_frequency,
    parse_temperature_range, parse_vgs_range, parse_vin_range,
};
pub use registry::{SpecParser, is_string_compared};
pub use scalar::{
    parse_capacitance, parse_capacitance_pf, parse_current, parse_decibels, parse_forward_voltage, parse_frequency,
    parse_inductance, parse_integer, parse_length_mm, parse_luminosity, parse_memory, parse_percentage, parse_power,
    parse_ppm, parse_resistance, parse_temperature, parse_tolerance, parse_voltage, parse_wavelength,
};
