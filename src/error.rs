//! Error types.
//!
//! Only contract violations and store failures are errors. Unparseable values
//! degrade to `None`, and unknown category names come back as a typed
//! "not found" outcome from [`crate::search`], never as an `Err`.

use thiserror::Error;

/// A spec filter could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid filter operator '{0}' (expected one of =, >=, <=, >, <)")]
    InvalidOperator(String),
    #[error("invalid filter expression '{0}' (expected Name<op>Value)")]
    InvalidExpression(String),
}

/// A query string was rejected before parsing began.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query too long ({len} characters, max {max})")]
    TooLong { len: usize, max: usize },
    #[error("query contains an invalid control character at position {position}")]
    ControlCharacter { position: usize },
    #[error("query contains no searchable terms")]
    NoSearchableTerms,
}

/// Failure reported by an injected [`crate::ComponentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("failed to decode store data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors surfaced by [`crate::search`].
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
