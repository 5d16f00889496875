//! Spec-filter compiler.
//!
//! Turns structured [`SpecFilter`]s into store clauses. Two paths exist:
//!
//! ```text
//! SpecFilter ── group_filters ──> FilterGroup (Single | Grouped "=" values)
//!                                     │
//!            numeric column? ─────────┤ yes: ColumnBetween (±1%) / ColumnCompare
//!                                     │ no:  AttributeLike over the raw blob
//!                                     │      + PostFilter when the value is numeric
//!                                     v
//!                              CompiledPredicate { clauses, post_filters }
//! ```
//!
//! The column path is exact and cheap. The LIKE path only narrows the
//! candidate set: "< 50mOhm" as a substring would happily match "500mOhm",
//! so every numeric LIKE filter is re-checked on the fetched rows and the
//! caller over-fetches to compensate.
//!
//! ## Responsibilities by module
//!
//! - `filter.rs`: [`Operator`] and [`SpecFilter`]; illegal operators fail here.
//! - `group.rs`: OR-grouping of "=" filters on the same attribute.
//! - `attributes.rs`: alias expansion and the numeric column table.
//! - `like.rs`: LIKE escaping, value patterns and an evaluator for stores
//!   that match patterns themselves.
//! - `post_filter.rs`: numeric checks on fetched rows.
//! - `predicate.rs`: the clause type, SQL rendering and [`compile`].
//! - `fts.rs`, `sort.rs`: full-text expressions and result ordering.

#[path = "compile/attributes.rs"]
mod attributes;
#[path = "compile/filter.rs"]
mod filter;
#[path = "compile/fts.rs"]
mod fts;
#[path = "compile/group.rs"]
mod group;
#[path = "compile/like.rs"]
mod like;
#[path = "compile/post_filter.rs"]
mod post_filter;
#[path = "compile/predicate.rs"]
mod predicate;
#[path = "compile/sort.rs"]
mod sort;

#[cfg(test)]
#[path = "compile/tests.rs"]
mod tests;

pub(crate) use attributes::column_sources;
pub use filter::{Operator, SpecFilter};
pub(crate) use fts::fts_terms;
pub use fts::fts_expression;
pub use group::{FilterGroup, group_filters};
pub use like::like_match;
pub use post_filter::PostFilter;
pub(crate) use predicate::mounting_wording;
pub use predicate::{CompiledPredicate, Predicate, SqlParam, compile, where_clause};
pub use sort::{SortKey, SortOrder};
