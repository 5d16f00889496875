//! Natural-language query parser.
//!
//! A query runs through a fixed sequence of stages; each one claims tokens
//! from the remaining text and adds to an immutable `State` record.
//!
//! ```text
//! "n-channel mosfet SOT-23 100V"
//!   model_number          -
//!   package               SOT-23                       "n-channel mosfet 100V"
//!   mounting_type         -
//!   connector_series      -
//!   component_type        Type=N-Channel, mosfets      "100V"
//!   values                100V (voltage)               ""
//!   subcategory_inference (already known)
//!   semantic              -
//!   spec_filters          Vds >= 100V
//!   cleanup / free_text   ""
//! ```
//!
//! ## Invariants
//!
//! - Stage order is fixed; see `stages::STAGES`.
//! - A token is claimed by at most one stage: every stage removes what it
//!   recognised before the next one runs.
//! - No stage touches global mutable state, so parses run concurrently.

#[path = "query/cleanup.rs"]
mod cleanup;
#[path = "query/metrics.rs"]
mod metrics;
#[path = "query/stages.rs"]
mod stages;
#[path = "query/state.rs"]
mod state;

#[cfg(test)]
#[path = "query/tests.rs"]
mod tests;

use crate::compile::SpecFilter;
use crate::error::QueryError;
use crate::extract::{ConnectorSpec, MountingType};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Instant;

pub use metrics::{ParseDetails, StageMetrics};
use state::State;

/// Structured reading of a free-text query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedQuery {
    pub original: String,
    pub subcategory: Option<String>,
    pub package: Option<String>,
    pub model_number: Option<String>,
    pub mounting_type: Option<MountingType>,
    pub connector: Option<ConnectorSpec>,
    pub spec_filters: Vec<SpecFilter>,
    /// Text for the full-text search; may be empty when the structured
    /// fields say everything.
    pub free_text: String,
    /// What each stage detected, for display and debugging.
    pub diagnostics: BTreeMap<String, Value>,
}

impl From<State> for ParsedQuery {
    fn from(state: State) -> Self {
        ParsedQuery {
            original: state.original,
            subcategory: state.subcategory.map(str::to_string),
            package: state.package,
            model_number: state.model_number,
            mounting_type: state.mounting,
            connector: state.connector,
            spec_filters: state.filters,
            free_text: state.free_text,
            diagnostics: state.diagnostics.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

/// Reject queries that are too long or carry control characters other than
/// tab, CR and LF.
pub fn validate_query(query: &str, max_len: usize) -> Result<(), QueryError> {
    let len = query.chars().count();
    if len > max_len {
        return Err(QueryError::TooLong { len, max: max_len });
    }
    match query.chars().position(|c| c.is_control() && !matches!(c, '\t' | '\r' | '\n')) {
        Some(position) => Err(QueryError::ControlCharacter { position }),
        None => Ok(()),
    }
}

/// Run every stage over `query`.
pub fn parse(query: &str) -> ParsedQuery {
    let state = stages::STAGES.iter().fold(State::new(query), |state, (_, stage)| stage(state));
    state.into()
}

/// [`parse`], plus per-stage timings and residual text.
pub fn parse_with_details(query: &str) -> (ParsedQuery, ParseDetails) {
    let started = Instant::now();
    let mut details = ParseDetails::default();
    let mut state = State::new(query);

    for (name, stage) in stages::STAGES {
        let stage_started = Instant::now();
        state = stage(state);
        details.stages.push(StageMetrics {
            stage: *name,
            duration: stage_started.elapsed(),
            remaining: state.remaining.clone(),
            filters: state.filters.len(),
        });
    }

    details.total = started.elapsed();
    (state.into(), details)
}

/// Combine caller-supplied filters with parsed ones.
///
/// A manual filter wins over every parsed filter on the same attribute name
/// (case-insensitively); parsed filters on other names are appended in
/// order.
pub fn merge_spec_filters(manual: &[SpecFilter], parsed: &[SpecFilter]) -> Vec<SpecFilter> {
    let mut merged = manual.to_vec();
    merged.extend(
        parsed.iter().filter(|p| !manual.iter().any(|m| m.name.eq_ignore_ascii_case(&p.name))).cloned(),
    );
    merged
}
