//! Parametric search over an injected component store.
//!
//! ```text
//! SearchParams ── validate ── connector synonyms ── smart parse (fills blanks)
//!                                                        │
//!        names: alias > exact > shortest containing ─────┤── NotFound { suggestions }
//!        packages: families, manufacturer: aliases       │
//!                                                        v
//!     clauses: fts, category, fee tier, stock, packages, manufacturer,
//!              mounting, spec filters ── StoreQuery ── ComponentStore::execute
//!                                                        │
//!                     decode rows ── post-filter ── truncate ── SearchResults
//! ```
//!
//! The store is called exactly once per search. When the compiled filters
//! carry post-filters the store is asked for `min(limit * 10, 500)` rows so
//! that rows rejected after the query do not starve the page.
//!
//! ## Responsibilities by module
//!
//! - `store.rs`: the [`ComponentStore`] boundary and row types.
//! - `memory.rs`: [`MemoryStore`], the in-process store.
//! - `names.rs`: subcategory and category resolution with suggestions.
//! - `resolvers.rs`: package families and manufacturer aliases.
//! - `mounting.rs`: mounting type of a catalog part.

#[path = "search/memory.rs"]
mod memory;
#[path = "search/mounting.rs"]
mod mounting;
#[path = "search/names.rs"]
mod names;
#[path = "search/resolvers.rs"]
mod resolvers;
#[path = "search/store.rs"]
mod store;

#[cfg(test)]
#[path = "search/tests.rs"]
mod tests;

pub use memory::MemoryStore;
pub use names::{CategoryTable, NameKind, NotFound, SubcategoryInfo};
pub use resolvers::{expand_package, resolve_manufacturer};
pub use store::{
    Component, ComponentRow, ComponentStore, FeeTier, FeeTierCounts, StorePage, StoreQuery, render_attributes,
};

use crate::compile::{self, Predicate, SortKey, SortOrder, SpecFilter, fts_expression, fts_terms, group_filters};
use crate::error::{QueryError, SearchError};
use crate::extract::{MountingType, expand_connector_synonyms};
use crate::query::{self, ParsedQuery};
use crate::tolerance::TolerancePolicy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Free text shorter than this is not worth a full-text clause.
const MIN_FREE_TEXT_LEN: usize = 2;

// --- Configuration ---------------------------------------------------------------

/// Limits and defaults of the search flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchConfig {
    pub max_query_len: usize,
    pub over_fetch_multiplier: usize,
    pub over_fetch_ceiling: usize,
    pub max_page_size: usize,
    pub default_page_size: usize,
    pub default_min_stock: u64,
    pub tolerance: TolerancePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_query_len: 500,
            over_fetch_multiplier: 10,
            over_fetch_ceiling: 500,
            max_page_size: 100,
            default_page_size: 20,
            default_min_stock: 10,
            tolerance: TolerancePolicy::default(),
        }
    }
}

impl SearchConfig {
    /// Rows to ask the store for: the page itself, or more of them when
    /// post-filters will drop some.
    pub fn fetch_size(&self, limit: usize, over_fetch: bool) -> usize {
        if over_fetch {
            (limit * self.over_fetch_multiplier).min(self.over_fetch_ceiling).max(limit)
        } else {
            limit
        }
    }
}

/// Fee-tier restriction requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryFilter {
    Basic,
    Preferred,
    Extended,
    /// Basic or preferred.
    NoFee,
}

impl LibraryFilter {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "basic" | "b" => Some(LibraryFilter::Basic),
            "preferred" | "p" => Some(LibraryFilter::Preferred),
            "extended" | "e" => Some(LibraryFilter::Extended),
            "no_fee" | "no-fee" | "nofee" => Some(LibraryFilter::NoFee),
            _ => None,
        }
    }

    pub fn accepts(self, tier: FeeTier) -> bool {
        match self {
            LibraryFilter::Basic => tier == FeeTier::Basic,
            LibraryFilter::Preferred => tier == FeeTier::Preferred,
            LibraryFilter::Extended => tier == FeeTier::Extended,
            LibraryFilter::NoFee => tier.is_no_fee(),
        }
    }

    fn predicate(self) -> Predicate {
        match self {
            LibraryFilter::Basic => Predicate::FeeTier { tier: FeeTier::Basic },
            LibraryFilter::Preferred => Predicate::FeeTier { tier: FeeTier::Preferred },
            LibraryFilter::Extended => Predicate::FeeTier { tier: FeeTier::Extended },
            LibraryFilter::NoFee => Predicate::AnyOf {
                predicates: vec![
                    Predicate::FeeTier { tier: FeeTier::Basic },
                    Predicate::FeeTier { tier: FeeTier::Preferred },
                ],
            },
        }
    }
}

/// One search request. Every field is optional; an empty request is
/// rejected for having nothing to search on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub subcategory_id: Option<u32>,
    pub subcategory: Option<String>,
    pub category: Option<String>,
    pub spec_filters: Vec<SpecFilter>,
    pub library: Option<LibraryFilter>,
    pub prefer_no_fee: bool,
    /// `None` uses [`SearchConfig::default_min_stock`].
    pub min_stock: Option<u64>,
    pub package: Option<String>,
    /// OR-ed; takes precedence over `package`.
    pub packages: Vec<String>,
    pub manufacturer: Option<String>,
    pub mounting: Option<MountingType>,
    pub match_all_terms: bool,
    pub sort: SortKey,
    /// `None` uses [`SearchConfig::default_page_size`]; capped at
    /// [`SearchConfig::max_page_size`].
    pub limit: Option<usize>,
    pub offset: usize,
    /// Run the query parser over `query` and use what it finds.
    pub smart_parse: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: None,
            subcategory_id: None,
            subcategory: None,
            category: None,
            spec_filters: Vec::new(),
            library: None,
            prefer_no_fee: true,
            min_stock: None,
            package: None,
            packages: Vec::new(),
            manufacturer: None,
            mounting: None,
            match_all_terms: true,
            sort: SortKey::Stock,
            limit: None,
            offset: 0,
            smart_parse: true,
        }
    }
}

impl SearchParams {
    pub fn query(text: impl Into<String>) -> Self {
        Self { query: Some(text.into()), ..Self::default() }
    }
}

// --- Results ---------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub limit: usize,
    pub offset: usize,
    pub returned: usize,
}

/// What the search actually ran with, after parsing and resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FiltersApplied {
    pub query: Option<String>,
    pub subcategory_id: Option<u32>,
    pub subcategory: Option<String>,
    pub subcategory_resolved: Option<String>,
    pub category: Option<String>,
    pub category_resolved: Option<String>,
    pub spec_filters: Vec<SpecFilter>,
    pub library: Option<LibraryFilter>,
    pub prefer_no_fee: bool,
    pub min_stock: u64,
    pub packages: Vec<String>,
    pub manufacturer: Option<String>,
    pub mounting: Option<MountingType>,
    pub match_all_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub results: Vec<Component>,
    /// Rows matching every store clause; post-filters are not reflected.
    pub total: usize,
    pub page_info: PageInfo,
    pub filters_applied: FiltersApplied,
    /// Matches per fee tier, ignoring any fee-tier restriction.
    pub fee_tiers: FeeTierCounts,
    pub no_fee_available: bool,
    /// Fetched rows dropped by a post-filter.
    pub post_filter_rejected: usize,
    /// Present when the query parser ran.
    pub parsed: Option<ParsedQuery>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    Found(SearchResults),
    NotFound(NotFound),
}

// --- Search flow -----------------------------------------------------------------

/// Resolved category restriction.
struct Scope {
    predicate: Option<Predicate>,
    subcategory_id: Option<u32>,
    subcategory_resolved: Option<String>,
    category_resolved: Option<String>,
}

fn resolve_scope(
    categories: &CategoryTable,
    subcategory_id: Option<u32>,
    subcategory: Option<&str>,
    category: Option<&str>,
) -> Result<Scope, NotFound> {
    let mut scope = Scope { predicate: None, subcategory_id, subcategory_resolved: None, category_resolved: None };

    if let Some(id) = subcategory_id {
        scope.subcategory_resolved = categories.subcategory(id).map(|s| s.name.clone());
        scope.predicate = Some(Predicate::Subcategory { id });
    } else if let Some(name) = subcategory.filter(|s| !s.trim().is_empty()) {
        let info = categories.resolve_subcategory(name)?;
        scope.subcategory_id = Some(info.id);
        scope.subcategory_resolved = Some(info.name.clone());
        scope.predicate = Some(Predicate::Subcategory { id: info.id });
    } else if let Some(name) = category.filter(|s| !s.trim().is_empty()) {
        let (display, ids) = categories.resolve_category(name)?;
        scope.category_resolved = Some(display.to_string());
        scope.predicate = Some(Predicate::Subcategories { ids: ids.to_vec() });
    }
    Ok(scope)
}

/// Run one search against `store`.
///
/// Unknown subcategory or category names are an `Ok(NotFound)`, not an
/// error. The store is queried once.
pub fn search<S: ComponentStore + ?Sized>(
    store: &S,
    categories: &CategoryTable,
    params: &SearchParams,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    let raw = params.query.as_deref().map(str::trim).filter(|q| !q.is_empty());
    if let Some(q) = raw {
        query::validate_query(q, config.max_query_len)?;
    }
    let mut text = raw.map(expand_connector_synonyms);

    let mut subcategory = params.subcategory.clone();
    let mut package = params.package.clone();
    let mut mounting = params.mounting;
    let mut spec_filters = params.spec_filters.clone();
    let mut parsed = None;

    if let Some(q) = text.clone().filter(|_| params.smart_parse) {
        let reading = query::parse(&q);
        if params.subcategory_id.is_none() && subcategory.is_none() && params.category.is_none() {
            subcategory = reading.subcategory.clone();
        }
        if package.is_none() && params.packages.is_empty() {
            package = reading.package.clone();
        }
        mounting = mounting.or(reading.mounting_type);
        spec_filters = query::merge_spec_filters(&spec_filters, &reading.spec_filters);

        let free = reading.free_text.trim();
        text = if free.chars().count() >= MIN_FREE_TEXT_LEN {
            Some(free.to_string())
        } else if !reading.spec_filters.is_empty() || reading.subcategory.is_some() {
            None
        } else {
            Some(q)
        };
        parsed = Some(reading);
    }

    let fts = text.as_deref().and_then(|q| fts_expression(q, params.match_all_terms));
    if text.is_some() && fts.is_none() {
        return Err(QueryError::NoSearchableTerms.into());
    }

    let structural = params.subcategory_id.is_some()
        || subcategory.is_some()
        || params.category.is_some()
        || !spec_filters.is_empty()
        || package.is_some()
        || !params.packages.is_empty()
        || params.manufacturer.is_some()
        || mounting.is_some();
    if fts.is_none() && !structural {
        return Err(QueryError::NoSearchableTerms.into());
    }

    let scope = match resolve_scope(categories, params.subcategory_id, subcategory.as_deref(), params.category.as_deref())
    {
        Ok(scope) => scope,
        Err(not_found) => {
            debug!(kind = ?not_found.kind, name = %not_found.name, "name did not resolve");
            return Ok(SearchOutcome::NotFound(not_found));
        }
    };

    let packages: Vec<String> = if params.packages.is_empty() {
        package.as_deref().map(expand_package).unwrap_or_default()
    } else {
        params.packages.iter().flat_map(|p| expand_package(p)).collect()
    };
    let manufacturer = params.manufacturer.as_deref().map(str::trim).filter(|m| !m.is_empty()).map(resolve_manufacturer);
    let min_stock = params.min_stock.unwrap_or(config.default_min_stock);
    let limit = params.limit.unwrap_or(config.default_page_size).clamp(1, config.max_page_size);

    let compiled = compile::compile(&group_filters(&spec_filters), &config.tolerance);

    let mut clauses = Vec::new();
    if let (Some(expression), Some(q)) = (&fts, &text) {
        clauses.push(Predicate::FullText {
            expression: expression.clone(),
            terms: fts_terms(q),
            match_all: params.match_all_terms,
        });
    }
    clauses.extend(scope.predicate.clone());
    let fee_clause = params.library.map(LibraryFilter::predicate);
    clauses.extend(fee_clause.clone());
    if min_stock > 0 {
        clauses.push(Predicate::MinStock { stock: min_stock });
    }
    if !packages.is_empty() {
        clauses.push(Predicate::Packages { packages: packages.clone() });
    }
    if let Some(name) = &manufacturer {
        clauses.push(Predicate::Manufacturer { name: name.clone() });
    }
    if let Some(mounting) = mounting {
        clauses.push(Predicate::Mounting { mounting });
    }
    clauses.extend(compiled.clauses.iter().cloned());

    // Fee-tier counts describe every tier, so they skip the fee clause.
    let count_clauses = clauses.iter().filter(|c| Some(*c) != fee_clause.as_ref()).cloned().collect();

    let fetch = config.fetch_size(limit, compiled.needs_over_fetch());
    let store_query = StoreQuery {
        clauses,
        count_clauses,
        order: SortOrder::new(params.sort, params.prefer_no_fee),
        limit: fetch,
        offset: params.offset,
    };
    let page = store.execute(&store_query)?;

    let fetched = page.rows.len();
    let mut rejected = 0;
    let mut results = Vec::with_capacity(limit.min(fetched));
    for row in &page.rows {
        let component = Component::from_row(row, categories);
        if !compiled.post_filters.iter().all(|f| f.accepts(&component.specs, &config.tolerance)) {
            rejected += 1;
            continue;
        }
        results.push(component);
        if results.len() >= limit {
            break;
        }
    }

    debug!(
        fetched,
        post_filter_rejected = rejected,
        returned = results.len(),
        total = page.total,
        "search finished"
    );

    Ok(SearchOutcome::Found(SearchResults {
        page_info: PageInfo { limit, offset: params.offset, returned: results.len() },
        results,
        total: page.total,
        filters_applied: FiltersApplied {
            query: text,
            subcategory_id: scope.subcategory_id,
            subcategory,
            subcategory_resolved: scope.subcategory_resolved,
            category: params.category.clone(),
            category_resolved: scope.category_resolved,
            spec_filters,
            library: params.library,
            prefer_no_fee: params.prefer_no_fee,
            min_stock,
            packages,
            manufacturer,
            mounting,
            match_all_terms: params.match_all_terms,
        },
        no_fee_available: page.fee_tiers.no_fee_available(),
        fee_tiers: page.fee_tiers,
        post_filter_rejected: rejected,
        parsed,
    }))
}
