//! Query pipeline metrics.
//!
//! [`super::parse`] runs the stages and keeps only the result.
//! [`super::parse_with_details`] also records, per stage, how long it took
//! and what text it left behind; use it to see which stage claimed a token.

use serde::Serialize;
use std::time::Duration;

/// Timing and residual text for one stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageMetrics {
    pub stage: &'static str,
    pub duration: Duration,
    /// `remaining` text after the stage ran.
    pub remaining: String,
    /// Number of spec filters accumulated so far.
    pub filters: usize,
}

/// Per-stage trace of one parse.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseDetails {
    pub total: Duration,
    pub stages: Vec<StageMetrics>,
}
