use super::attributes::{attribute_names, numeric_column, parser_for};
use super::like::{attribute_contains, attribute_equals, attribute_exists, value_patterns};
use super::{FilterGroup, Operator, PostFilter, SortOrder};
use crate::TolerancePolicy;
use crate::extract::MountingType;
use crate::search::FeeTier;
use serde::Serialize;
use tracing::debug;

/// A bound parameter of a rendered clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Text(String),
    Integer(i64),
    Real(f64),
}

/// One store-side condition. All conditions of a query are AND-ed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Predicate {
    /// Prefix match over id, model, manufacturer and description.
    FullText { expression: String, terms: Vec<String>, match_all: bool },
    Subcategory { id: u32 },
    /// Any of the subcategories of a category.
    Subcategories { ids: Vec<u32> },
    FeeTier { tier: FeeTier },
    MinStock { stock: u64 },
    Packages { packages: Vec<String> },
    /// Case-insensitive equality.
    Manufacturer { name: String },
    /// Mounting wording in the description.
    Mounting { mounting: MountingType },
    /// Inclusive numeric band on a precomputed column.
    ColumnBetween { column: &'static str, low: f64, high: f64 },
    ColumnCompare { column: &'static str, operator: Operator, value: f64 },
    /// `attributes LIKE p1 OR attributes LIKE p2 ...`
    AttributeLike { patterns: Vec<String> },
    AnyOf { predicates: Vec<Predicate> },
}

impl Predicate {
    /// SQL condition text and its parameters, in placeholder order.
    pub fn to_sql(&self) -> (String, Vec<SqlParam>) {
        match self {
            Predicate::FullText { expression, .. } => (
                "lcsc IN (SELECT lcsc FROM components_fts WHERE components_fts MATCH ?)".to_string(),
                vec![SqlParam::Text(expression.clone())],
            ),
            Predicate::Subcategory { id } => ("subcategory_id = ?".to_string(), vec![SqlParam::Integer(*id as i64)]),
            Predicate::Subcategories { ids } => (
                format!("subcategory_id IN ({})", placeholders(ids.len())),
                ids.iter().map(|id| SqlParam::Integer(*id as i64)).collect(),
            ),
            Predicate::FeeTier { tier } => (format!("library_type = '{}'", tier.code()), vec![]),
            Predicate::MinStock { stock } => ("stock >= ?".to_string(), vec![SqlParam::Integer(*stock as i64)]),
            Predicate::Packages { packages } => (
                format!("package IN ({})", placeholders(packages.len())),
                packages.iter().map(|p| SqlParam::Text(p.clone())).collect(),
            ),
            Predicate::Manufacturer { name } => {
                ("LOWER(manufacturer) = LOWER(?)".to_string(), vec![SqlParam::Text(name.clone())])
            }
            Predicate::Mounting { mounting } => {
                let (a, b) = mounting_wording(*mounting);
                (
                    "(description LIKE ? OR description LIKE ?)".to_string(),
                    vec![SqlParam::Text(format!("%{a}%")), SqlParam::Text(format!("%{b}%"))],
                )
            }
            Predicate::ColumnBetween { column, low, high } => {
                (format!("{column} BETWEEN ? AND ?"), vec![SqlParam::Real(*low), SqlParam::Real(*high)])
            }
            Predicate::ColumnCompare { column, operator, value } => {
                (format!("{column} {operator} ?"), vec![SqlParam::Real(*value)])
            }
            Predicate::AttributeLike { patterns } => {
                let sql = vec!["attributes LIKE ? ESCAPE '\\'"; patterns.len()].join(" OR ");
                (format!("({sql})"), patterns.iter().map(|p| SqlParam::Text(p.clone())).collect())
            }
            Predicate::AnyOf { predicates } => {
                let mut params = Vec::new();
                let parts: Vec<String> = predicates
                    .iter()
                    .map(|p| {
                        let (sql, p_params) = p.to_sql();
                        params.extend(p_params);
                        sql
                    })
                    .collect();
                (format!("({})", parts.join(" OR ")), params)
            }
        }
    }
}

/// AND of `clauses` as a `WHERE` body; `1` when there are none.
pub fn where_clause(clauses: &[Predicate]) -> (String, Vec<SqlParam>) {
    let mut params = Vec::new();
    let parts: Vec<String> = clauses
        .iter()
        .map(|clause| {
            let (sql, p) = clause.to_sql();
            params.extend(p);
            sql
        })
        .collect();
    (if parts.is_empty() { "1".to_string() } else { parts.join(" AND ") }, params)
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(", ")
}

/// Description wording for each mounting type; either one matches.
pub(crate) fn mounting_wording(mounting: MountingType) -> (&'static str, &'static str) {
    match mounting {
        MountingType::ThroughHole => ("Through Hole", "Plugin"),
        MountingType::Smd => ("Surface Mount", "SMD"),
    }
}

// --- Compilation ---------------------------------------------------------------

/// Output of [`compile`]: AND-ed store clauses plus the checks to run on
/// fetched rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CompiledPredicate {
    pub clauses: Vec<Predicate>,
    pub post_filters: Vec<PostFilter>,
}

impl CompiledPredicate {
    /// Rows must be over-fetched when any check runs after the query.
    pub fn needs_over_fetch(&self) -> bool {
        !self.post_filters.is_empty()
    }

    /// `WHERE ...` body (without the keyword) and its parameters.
    pub fn where_sql(&self) -> (String, Vec<SqlParam>) {
        where_clause(&self.clauses)
    }

    /// Complete component query, including order and page.
    pub fn to_sql(&self, order: SortOrder, limit: usize, offset: usize) -> (String, Vec<SqlParam>) {
        let (where_sql, mut params) = self.where_sql();
        params.push(SqlParam::Integer(limit as i64));
        params.push(SqlParam::Integer(offset as i64));
        (format!("SELECT * FROM components WHERE {where_sql} {} LIMIT ? OFFSET ?", order.to_sql()), params)
    }
}

/// Compile grouped spec filters into store clauses.
///
/// Per group: a precomputed numeric column when one serves the attribute
/// and every value parses; otherwise LIKE patterns over the attribute blob,
/// plus a [`PostFilter`] whenever a value is numeric. In an "=" group,
/// values the parser cannot read stay in the OR as exact string matches.
/// An ordered filter ("<", ">=", ...) on an attribute with no parser keeps
/// only an attribute-exists clause: the comparison itself is dropped.
pub fn compile(groups: &[FilterGroup], policy: &TolerancePolicy) -> CompiledPredicate {
    let mut compiled = CompiledPredicate::default();

    for group in groups {
        let name = group.name();
        let operator = group.operator();
        let values = group.values();

        if let Some(column) = numeric_column(name) {
            let parsed: Option<Vec<f64>> = values.iter().map(|v| (column.parse)(v)).collect();
            if let Some(targets) = parsed {
                debug!(filter = name, column = column.column, %operator, "compiled onto numeric column");
                let mut per_value: Vec<Predicate> = targets
                    .iter()
                    .map(|&target| match operator {
                        Operator::Eq => {
                            let (low, high) = policy.equality_bounds(target);
                            Predicate::ColumnBetween { column: column.column, low, high }
                        }
                        _ => Predicate::ColumnCompare { column: column.column, operator, value: target },
                    })
                    .collect();
                compiled.clauses.push(if per_value.len() == 1 {
                    per_value.remove(0)
                } else {
                    Predicate::AnyOf { predicates: per_value }
                });
                continue;
            }
        }

        let names = attribute_names(name);
        let parser = parser_for(&names);
        let mut parsed: Vec<(&str, f64)> = Vec::new();
        let mut literals: Vec<&str> = Vec::new();
        if let Some(parser) = parser {
            for value in values.iter().copied() {
                match parser.scalar(value) {
                    Some(number) => parsed.push((value, number)),
                    None => literals.push(value),
                }
            }
        }
        let substring = name.eq_ignore_ascii_case("interface");
        let string_pattern = |n: &str, v: &str| if substring { attribute_contains(n, v) } else { attribute_equals(n, v) };

        let patterns: Vec<String> = match (parser, parsed.is_empty(), operator) {
            (Some(parser), false, _) => {
                debug!(filter = name, %operator, "compiled onto LIKE with numeric post-filter");
                compiled.post_filters.push(PostFilter {
                    name: name.to_string(),
                    attribute_names: names.iter().map(|n| n.to_string()).collect(),
                    operator,
                    targets: parsed.iter().map(|(_, n)| *n).collect(),
                    literals: literals.iter().map(|v| v.to_string()).collect(),
                    parser,
                });
                if operator == Operator::Eq && !parser.is_range() {
                    let mut patterns: Vec<String> = names
                        .iter()
                        .flat_map(|n| parsed.iter().flat_map(move |(raw, value)| value_patterns(n, raw, *value)))
                        .collect();
                    patterns.extend(names.iter().flat_map(|n| literals.iter().map(move |v| string_pattern(n, v))));
                    patterns
                } else {
                    names.iter().map(|n| attribute_exists(n)).collect()
                }
            }
            (_, _, Operator::Eq) => {
                debug!(filter = name, "compiled onto string LIKE");
                names.iter().flat_map(|n| values.iter().map(move |v| string_pattern(n, v))).collect()
            }
            _ => {
                debug!(filter = name, %operator, "no parser for ordered filter; requiring the attribute only");
                names.iter().map(|n| attribute_exists(n)).collect()
            }
        };

        if !patterns.is_empty() {
            compiled.clauses.push(Predicate::AttributeLike { patterns });
        }
    }

    compiled
}
