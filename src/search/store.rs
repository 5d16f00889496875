//! The store boundary: what the search flow asks for and what comes back.

use super::mounting::detect_mounting;
use super::names::CategoryTable;
use crate::compile::{Predicate, SortOrder, SqlParam, where_clause};
use crate::error::StoreError;
use crate::extract::MountingType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Assembly-fee classification of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeTier {
    #[serde(alias = "b")]
    Basic,
    #[serde(alias = "p")]
    Preferred,
    #[default]
    #[serde(alias = "e")]
    Extended,
}

impl FeeTier {
    /// Single-letter code used by the catalog.
    pub fn code(self) -> char {
        match self {
            FeeTier::Basic => 'b',
            FeeTier::Preferred => 'p',
            FeeTier::Extended => 'e',
        }
    }

    /// Basic and preferred parts carry no extra assembly fee.
    pub fn is_no_fee(self) -> bool {
        matches!(self, FeeTier::Basic | FeeTier::Preferred)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeeTier::Basic => "basic",
            FeeTier::Preferred => "preferred",
            FeeTier::Extended => "extended",
        }
    }
}

/// Number of matching parts per fee tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FeeTierCounts {
    pub basic: usize,
    pub preferred: usize,
    pub extended: usize,
}

impl FeeTierCounts {
    pub fn add(&mut self, tier: FeeTier) {
        match tier {
            FeeTier::Basic => self.basic += 1,
            FeeTier::Preferred => self.preferred += 1,
            FeeTier::Extended => self.extended += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.basic + self.preferred + self.extended
    }

    pub fn no_fee_available(&self) -> bool {
        self.basic > 0 || self.preferred > 0
    }
}

/// One catalog row as the store returns it.
///
/// `attributes` is the raw blob: a JSON list of `[name, value]` pairs.
/// `columns` holds precomputed numeric columns (`resistance_ohms`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentRow {
    #[serde(alias = "lcsc")]
    pub id: String,
    #[serde(default, alias = "mpn")]
    pub model: String,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock: u64,
    #[serde(default)]
    pub price: Option<f64>,
    pub subcategory_id: u32,
    #[serde(default, alias = "library_type")]
    pub fee_tier: FeeTier,
    #[serde(default)]
    pub attributes: String,
    #[serde(default)]
    pub columns: BTreeMap<String, f64>,
}

impl ComponentRow {
    /// Decode the attribute blob. An empty blob is an empty list.
    pub fn decode_attributes(&self) -> Result<Vec<(String, String)>, serde_json::Error> {
        if self.attributes.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&self.attributes)
    }
}

/// Render attribute pairs as a blob: `[["Resistance", "10kΩ"], ...]`.
///
/// The `", "` separators are what the LIKE patterns expect.
pub fn render_attributes(pairs: &[(String, String)]) -> String {
    let quote = |s: &str| serde_json::Value::from(s).to_string();
    let items: Vec<String> = pairs.iter().map(|(n, v)| format!("[{}, {}]", quote(n), quote(v))).collect();
    format!("[{}]", items.join(", "))
}

/// A decoded row, ready for display and comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Component {
    pub id: String,
    pub model: String,
    pub manufacturer: String,
    pub package: String,
    pub description: String,
    pub stock: u64,
    pub price: Option<f64>,
    pub fee_tier: FeeTier,
    pub subcategory_id: u32,
    pub subcategory: Option<String>,
    pub category: Option<String>,
    pub mounting_type: Option<MountingType>,
    /// Attribute name/value pairs in catalog order.
    pub specs: Vec<(String, String)>,
}

impl Component {
    /// Decode `row`. A corrupt attribute blob is logged and the part keeps
    /// going with no attributes.
    pub fn from_row(row: &ComponentRow, categories: &CategoryTable) -> Self {
        let specs = row.decode_attributes().unwrap_or_else(|err| {
            warn!(id = %row.id, error = %err, "failed to decode attribute blob; treating the part as attribute-free");
            Vec::new()
        });
        let info = categories.subcategory(row.subcategory_id);
        let subcategory = info.map(|s| s.name.clone());
        let category = info.and_then(|s| s.category.clone());
        let mounting_type = detect_mounting(&row.package, category.as_deref(), subcategory.as_deref());

        Component {
            id: row.id.clone(),
            model: row.model.clone(),
            manufacturer: row.manufacturer.clone(),
            package: row.package.clone(),
            description: row.description.clone(),
            stock: row.stock,
            price: row.price,
            fee_tier: row.fee_tier,
            subcategory_id: row.subcategory_id,
            subcategory,
            category,
            mounting_type,
            specs,
        }
    }

    /// Value of attribute `name`, if the part has it.
    pub fn spec(&self, name: &str) -> Option<&str> {
        self.specs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }
}

/// Everything a store needs to run one search.
#[derive(Debug, Clone, Serialize)]
pub struct StoreQuery {
    /// Conditions for the result rows and `total`.
    pub clauses: Vec<Predicate>,
    /// Conditions for the fee-tier counts: `clauses` without the fee-tier
    /// restriction.
    pub count_clauses: Vec<Predicate>,
    pub order: SortOrder,
    pub limit: usize,
    pub offset: usize,
}

impl StoreQuery {
    /// SQL for the result page.
    pub fn select_sql(&self) -> (String, Vec<SqlParam>) {
        let (where_sql, mut params) = where_clause(&self.clauses);
        params.push(SqlParam::Integer(self.limit as i64));
        params.push(SqlParam::Integer(self.offset as i64));
        (format!("SELECT * FROM components WHERE {where_sql} {} LIMIT ? OFFSET ?", self.order.to_sql()), params)
    }

    /// SQL for the per-tier counts.
    pub fn fee_tier_count_sql(&self) -> (String, Vec<SqlParam>) {
        let (where_sql, params) = where_clause(&self.count_clauses);
        (format!("SELECT library_type, COUNT(*) FROM components WHERE {where_sql} GROUP BY library_type"), params)
    }
}

/// One page of rows plus the counts that describe the whole match.
#[derive(Debug, Clone, Default)]
pub struct StorePage {
    pub rows: Vec<ComponentRow>,
    /// Rows matching `clauses`, ignoring limit and offset.
    pub total: usize,
    /// Rows matching `count_clauses`, per tier.
    pub fee_tiers: FeeTierCounts,
}

/// Read-only access to the component catalog.
///
/// Implementations run the whole [`StoreQuery`] in one call; the search
/// flow calls `execute` once per search.
pub trait ComponentStore {
    fn execute(&self, query: &StoreQuery) -> Result<StorePage, StoreError>;
}
