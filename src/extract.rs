//! Token extractors.
//!
//! Each extractor is a pure function `(text) -> (found, remaining_text)`.
//! None of them knows about the others; the query pipeline decides the
//! order they run in and what to do with what they find.
//!
//! ## How the parts work together
//!
//! ```text
//! "TP4056 charger SOT-23-6 leaded jst ph n-channel mosfet 30V 2A low rds"
//!   │
//!   ├─ models.rs      TP4056
//!   ├─ packages.rs    SOT-23-6          (USB designators suggest a subcategory)
//!   ├─ mounting.rs    Through Hole
//!   ├─ connectors.rs  JST PH 2.0mm
//!   ├─ types.rs       N-Channel + "mosfet" -> mosfets
//!   ├─ values.rs      30V, 2A           (all scanners, then spans.rs selection)
//!   └─ semantic.rs    RDS(on) < 50mOhm
//! ```
//!
//! ## Responsibilities by module
//!
//! - `spans.rs`: candidate spans, the greedy non-overlap selection, and
//!   word-boundary cutting shared by the phrase matchers.
//! - `values.rs`: numeric value scanners, run in a fixed priority order.
//! - `packages.rs`: package designators, normalized to one spelling.
//! - `models.rs`: vendor part-number families, with generic-term and
//!   package-shape rejection.
//! - `mounting.rs`: SMD versus through-hole wording.
//! - `connectors.rs`: connector series and brand aliases.
//! - `aliases.rs`: the keyword -> subcategory table.
//! - `types.rs`: component-type keywords, channel words and the
//!   subcategory redirects that depend on them.
//! - `semantic.rs`: descriptor phrases and noise words.
//!
//! ## Invariants
//!
//! - Static tables are built once and only read afterwards.
//! - Phrase tables match longest phrase first, on word boundaries.
//! - Offsets are byte offsets into the text handed to the extractor.

#[path = "extract/aliases.rs"]
mod aliases;
#[path = "extract/connectors.rs"]
mod connectors;
#[path = "extract/models.rs"]
mod models;
#[path = "extract/mounting.rs"]
mod mounting;
#[path = "extract/packages.rs"]
mod packages;
#[path = "extract/semantic.rs"]
mod semantic;
#[path = "extract/spans.rs"]
mod spans;
#[path = "extract/types.rs"]
mod types;
#[path = "extract/values.rs"]
mod values;

#[cfg(test)]
#[path = "extract/tests.rs"]
mod tests;

pub(crate) use aliases::ALIAS_LOOKUP;
pub use connectors::ConnectorSpec;
pub(crate) use connectors::{CONNECTOR_NOISE_WORDS, expand_connector_synonyms, extract_connector};
pub(crate) use models::extract_model_number;
pub use mounting::MountingType;
pub(crate) use mounting::extract_mounting_type;
pub(crate) use packages::extract_package;
pub(crate) use semantic::{SemanticHit, extract_semantic_descriptors, remove_noise_words};
pub(crate) use spans::collapse_whitespace;
pub(crate) use types::{
    CHIP_RESISTORS, ChannelMatch, MOSFETS, TypeMatch, extract_channel, extract_component_type,
    is_connector_subcategory, redirect_electrolytic, redirect_potentiometer,
};
pub(crate) use values::extract_values;
