//! An in-process [`ComponentStore`] over a vector of rows.
//!
//! Evaluates the same [`Predicate`]s a SQL backend renders, with the same
//! semantics: LIKE is ASCII case-insensitive, a missing numeric column never
//! matches, and full-text terms are prefix matches over the id, model,
//! manufacturer and description. Used by the command-line front end and
//! the tests.

use super::store::{ComponentRow, ComponentStore, FeeTier, FeeTierCounts, StorePage, StoreQuery, render_attributes};
use crate::compile::{Predicate, SortKey, SortOrder, column_sources, like_match, mounting_wording};
use crate::error::StoreError;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A row plus everything the predicates look at, computed once.
#[derive(Debug, Clone)]
struct Indexed {
    row: ComponentRow,
    /// Attribute blob in the canonical rendering the LIKE patterns expect.
    blob: String,
    columns: BTreeMap<String, f64>,
    /// Alphanumeric words of the searchable text, lowercase.
    words: Vec<String>,
}

impl Indexed {
    fn new(row: ComponentRow) -> Self {
        let (blob, pairs) = match row.decode_attributes() {
            Ok(pairs) => (render_attributes(&pairs), pairs),
            Err(_) => (row.attributes.clone(), Vec::new()),
        };

        let mut columns = BTreeMap::new();
        for (name, column) in column_sources() {
            if columns.contains_key(column.column) {
                continue;
            }
            let value = pairs.iter().find(|(n, _)| n == name).and_then(|(_, v)| (column.parse)(v));
            if let Some(value) = value {
                columns.insert(column.column.to_string(), value);
            }
        }
        columns.extend(row.columns.iter().map(|(k, v)| (k.clone(), *v)));

        let text = format!("{} {} {} {}", row.id, row.model, row.manufacturer, row.description);
        Indexed { blob, columns, words: words(&text), row }
    }

    fn matches(&self, predicate: &Predicate) -> bool {
        let row = &self.row;
        match predicate {
            Predicate::FullText { terms, match_all, .. } => {
                let mut hits = terms.iter().map(|term| phrase_prefix_match(&self.words, term));
                if *match_all { hits.all(|hit| hit) } else { hits.any(|hit| hit) }
            }
            Predicate::Subcategory { id } => row.subcategory_id == *id,
            Predicate::Subcategories { ids } => ids.contains(&row.subcategory_id),
            Predicate::FeeTier { tier } => row.fee_tier == *tier,
            Predicate::MinStock { stock } => row.stock >= *stock,
            Predicate::Packages { packages } => packages.iter().any(|p| *p == row.package),
            Predicate::Manufacturer { name } => row.manufacturer.to_lowercase() == name.to_lowercase(),
            Predicate::Mounting { mounting } => {
                let (a, b) = mounting_wording(*mounting);
                like_match(&format!("%{a}%"), &row.description) || like_match(&format!("%{b}%"), &row.description)
            }
            Predicate::ColumnBetween { column, low, high } => {
                self.columns.get(*column).is_some_and(|v| *v >= *low && *v <= *high)
            }
            Predicate::ColumnCompare { column, operator, value } => {
                self.columns.get(*column).is_some_and(|v| compare(*v, *operator, *value))
            }
            Predicate::AttributeLike { patterns } => patterns.iter().any(|p| like_match(p, &self.blob)),
            Predicate::AnyOf { predicates } => predicates.iter().any(|p| self.matches(p)),
        }
    }

    fn matches_all(&self, predicates: &[Predicate]) -> bool {
        predicates.iter().all(|p| self.matches(p))
    }
}

/// Plain SQL comparison; the tolerance band was applied at compile time.
fn compare(actual: f64, operator: crate::compile::Operator, target: f64) -> bool {
    use crate::compile::Operator::*;
    match operator {
        Eq => actual == target,
        Ge => actual >= target,
        Le => actual <= target,
        Gt => actual > target,
        Lt => actual < target,
    }
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).map(str::to_lowercase).collect()
}

/// A term's words appear consecutively in `haystack`, the last one as a
/// prefix ("li-ion" is the phrase "li ion*").
fn phrase_prefix_match(haystack: &[String], term: &str) -> bool {
    let needle = words(term);
    let Some((last, head)) = needle.split_last() else { return false };
    haystack.windows(needle.len()).any(|window| {
        window[..head.len()].iter().zip(head).all(|(a, b)| a == b) && window[head.len()].starts_with(last.as_str())
    })
}

/// Same order as [`SortOrder::to_sql`]: basic, preferred, extended, then
/// the primary key. Price ascending puts unpriced parts last.
fn order(a: &ComponentRow, b: &ComponentRow, sort: SortOrder) -> Ordering {
    let rank = |row: &ComponentRow| match row.fee_tier {
        FeeTier::Basic => 0,
        FeeTier::Preferred => 1,
        FeeTier::Extended => 2,
    };
    let by_tier = if sort.prefer_no_fee { rank(a).cmp(&rank(b)) } else { Ordering::Equal };
    let by_key = match sort.key {
        SortKey::Stock => b.stock.cmp(&a.stock),
        SortKey::Price => match (a.price, b.price) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    };
    by_tier.then(by_key)
}

/// Rows held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Vec<Indexed>,
}

impl MemoryStore {
    pub fn new(rows: Vec<ComponentRow>) -> Self {
        MemoryStore { rows: rows.into_iter().map(Indexed::new).collect() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row with catalog id `id`.
    pub fn get(&self, id: &str) -> Option<&ComponentRow> {
        self.rows.iter().map(|r| &r.row).find(|row| row.id == id)
    }

    /// Rows in subcategory `subcategory_id`, in catalog order.
    pub fn in_subcategory(&self, subcategory_id: u32) -> impl Iterator<Item = &ComponentRow> {
        self.rows.iter().map(|r| &r.row).filter(move |row| row.subcategory_id == subcategory_id)
    }
}

impl ComponentStore for MemoryStore {
    fn execute(&self, query: &StoreQuery) -> Result<StorePage, StoreError> {
        let mut fee_tiers = FeeTierCounts::default();
        for indexed in self.rows.iter().filter(|r| r.matches_all(&query.count_clauses)) {
            fee_tiers.add(indexed.row.fee_tier);
        }

        let mut matched: Vec<&ComponentRow> =
            self.rows.iter().filter(|r| r.matches_all(&query.clauses)).map(|r| &r.row).collect();
        let total = matched.len();
        matched.sort_by(|a, b| order(a, b, query.order));

        let rows = matched.into_iter().skip(query.offset).take(query.limit).cloned().collect();
        Ok(StorePage { rows, total, fee_tiers })
    }
}
