//! Parametric search for electronics components.
//!
//! `partsift` turns free-text or structured part queries ("10k resistor 0603
//! 1%", "n-channel mosfet SOT-23 100V") into unit-aware filters, compiles
//! those filters into store predicates with a numeric post-filter, and ranks
//! alternative parts by engineering compatibility.
//!
//! ```text
//! text ── parse_query ──> ParsedQuery { subcategory, package, filters, free text }
//!                              │
//!        merge_spec_filters ───┤  (manual filters win)
//!                              v
//!            compile_filters ──> CompiledPredicate { clauses, post-filters }
//!                              │
//!                 search ──────┤── ComponentStore::execute (injected, read-only)
//!                              v
//!                        SearchResults
//!                              │
//!          find_alternatives ──> AlternativesReport (verified | similar, top-K)
//! ```
//!
//! The core is synchronous, holds no global mutable state and performs no
//! I/O of its own: every static table is built once on first use and only
//! read afterwards, so all entry points are safe to call from many threads.
//!
//! Logging goes through `tracing`; install a subscriber to see it.

use serde::Serialize;

#[macro_use]
mod macros;
mod alternatives;
mod api;
mod compile;
mod error;
mod extract;
mod mapping;
mod query;
mod search;
mod tolerance;
pub mod units;

pub use alternatives::{
    AlternativesOptions, AlternativesReport, Comparison, CompatibilityRule, CompatibilityVerdict, Confidence,
    Direction, MatchKind, RuleBook, Savings, ScoreBreakdown, ScoredAlternative, SpecComparison, verify,
};
pub use api::{
    compile_filters, find_alternatives, find_alternatives_with, merge_spec_filters, parse_query, parse_query_verbose,
    search, search_with,
};
pub use compile::{CompiledPredicate, FilterGroup, Operator, PostFilter, Predicate, SortKey, SortOrder, SpecFilter, SqlParam};
pub use error::{FilterError, QueryError, SearchError, StoreError};
pub use extract::{ConnectorSpec, MountingType};
pub use query::{ParseDetails, ParsedQuery, StageMetrics};
pub use search::{
    CategoryTable, Component, ComponentRow, ComponentStore, FeeTier, FeeTierCounts, FiltersApplied, LibraryFilter,
    MemoryStore, NameKind, NotFound, PageInfo, SearchConfig, SearchOutcome, SearchParams, SearchResults, StorePage,
    StoreQuery, SubcategoryInfo, render_attributes,
};
pub use tolerance::TolerancePolicy;

// --- Shared value types -------------------------------------------------------

/// Physical quantity (or count) carried by an extracted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    Resistance,
    Capacitance,
    Inductance,
    Voltage,
    Current,
    Frequency,
    Tolerance,
    Power,
    PinCount,
    PositionCount,
    PinStructure,
    Pitch,
    Dimensions,
    Impedance,
}

impl UnitType {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitType::Resistance => "resistance",
            UnitType::Capacitance => "capacitance",
            UnitType::Inductance => "inductance",
            UnitType::Voltage => "voltage",
            UnitType::Current => "current",
            UnitType::Frequency => "frequency",
            UnitType::Tolerance => "tolerance",
            UnitType::Power => "power",
            UnitType::PinCount => "pin_count",
            UnitType::PositionCount => "position_count",
            UnitType::PinStructure => "pin_structure",
            UnitType::Pitch => "pitch",
            UnitType::Dimensions => "dimensions",
            UnitType::Impedance => "impedance",
        }
    }

    /// Quantities that identify a part ("a 10k resistor") rather than rate
    /// it ("a 100V mosfet"). Identity quantities filter with "=", ratings
    /// with ">=".
    pub fn is_exact_match(self) -> bool {
        !matches!(self, UnitType::Voltage | UnitType::Current | UnitType::Power)
    }

    pub(crate) fn mask(self) -> UnitMask {
        match self {
            UnitType::Resistance => UnitMask::RESISTANCE,
            UnitType::Capacitance => UnitMask::CAPACITANCE,
            UnitType::Inductance => UnitMask::INDUCTANCE,
            UnitType::Voltage => UnitMask::VOLTAGE,
            UnitType::Current => UnitMask::CURRENT,
            UnitType::Frequency => UnitMask::FREQUENCY,
            UnitType::Tolerance => UnitMask::TOLERANCE,
            UnitType::Power => UnitMask::POWER,
            UnitType::PinCount => UnitMask::PIN_COUNT,
            UnitType::PositionCount => UnitMask::POSITION_COUNT,
            UnitType::PinStructure => UnitMask::PIN_STRUCTURE,
            UnitType::Pitch => UnitMask::PITCH,
            UnitType::Dimensions => UnitMask::DIMENSIONS,
            UnitType::Impedance => UnitMask::IMPEDANCE,
        }
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Set of unit types seen in one query; drives subcategory inference.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub(crate) struct UnitMask: u16 {
        const RESISTANCE     = 1 << 0;
        const CAPACITANCE    = 1 << 1;
        const INDUCTANCE     = 1 << 2;
        const VOLTAGE        = 1 << 3;
        const CURRENT        = 1 << 4;
        const FREQUENCY      = 1 << 5;
        const TOLERANCE      = 1 << 6;
        const POWER          = 1 << 7;
        const PIN_COUNT      = 1 << 8;
        const POSITION_COUNT = 1 << 9;
        const PIN_STRUCTURE  = 1 << 10;
        const PITCH          = 1 << 11;
        const DIMENSIONS     = 1 << 12;
        const IMPEDANCE      = 1 << 13;
    }
}

impl UnitMask {
    pub(crate) fn of(values: &[SpecValue]) -> UnitMask {
        values.iter().fold(UnitMask::empty(), |mask, v| mask | v.unit.mask())
    }
}

/// A numeric value found in query text.
///
/// `value` is in SI units (ohms, farads, volts, ...); counts and pitch are
/// plain numbers. `normalized` is the display form used as a filter value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecValue {
    pub raw: String,
    pub value: f64,
    pub unit: UnitType,
    pub normalized: String,
}

impl SpecValue {
    pub fn new(raw: impl Into<String>, value: f64, unit: UnitType, normalized: impl Into<String>) -> Self {
        Self { raw: raw.into(), value, unit, normalized: normalized.into() }
    }
}
