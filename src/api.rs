use crate::alternatives::{self, AlternativesOptions, AlternativesReport, RuleBook};
use crate::compile::{self, CompiledPredicate, SpecFilter};
use crate::error::{QueryError, SearchError};
use crate::query::{self, ParseDetails, ParsedQuery};
use crate::search::{self, CategoryTable, Component, ComponentStore, SearchConfig, SearchOutcome, SearchParams};
use crate::TolerancePolicy;

fn checked(text: &str) -> Result<&str, QueryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(QueryError::NoSearchableTerms);
    }
    query::validate_query(text, SearchConfig::default().max_query_len)?;
    Ok(text)
}

/// Parse free text into structured search fields.
///
/// # Example
/// ```
/// use partsift::parse_query;
///
/// let parsed = parse_query("10k resistor 0603 1%").unwrap();
/// assert_eq!(parsed.package.as_deref(), Some("0603"));
/// assert_eq!(parsed.spec_filters.len(), 2);
/// ```
pub fn parse_query(text: &str) -> Result<ParsedQuery, QueryError> {
    Ok(query::parse(checked(text)?))
}

/// [`parse_query`], plus per-stage timings and the text left after each
/// stage.
pub fn parse_query_verbose(text: &str) -> Result<(ParsedQuery, ParseDetails), QueryError> {
    Ok(query::parse_with_details(checked(text)?))
}

/// Compile filters into store predicates and numeric post-filters, using
/// the default tolerances.
pub fn compile_filters(filters: &[SpecFilter]) -> CompiledPredicate {
    compile::compile(&compile::group_filters(filters), &TolerancePolicy::default())
}

/// Manual filters win over parsed filters on the same attribute.
pub fn merge_spec_filters(manual: &[SpecFilter], parsed: &[SpecFilter]) -> Vec<SpecFilter> {
    query::merge_spec_filters(manual, parsed)
}

/// Search `store` with the default [`SearchConfig`].
pub fn search<S: ComponentStore + ?Sized>(
    store: &S,
    categories: &CategoryTable,
    params: &SearchParams,
) -> Result<SearchOutcome, SearchError> {
    search_with(store, categories, params, &SearchConfig::default())
}

/// Search `store` with explicit limits and tolerances.
pub fn search_with<S: ComponentStore + ?Sized>(
    store: &S,
    categories: &CategoryTable,
    params: &SearchParams,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    search::search(store, categories, params, config)
}

/// Rank alternatives to `original` with default options.
pub fn find_alternatives(original: &Component, pool: &[Component], rules: &RuleBook) -> AlternativesReport {
    find_alternatives_with(original, pool, rules, &AlternativesOptions::default())
}

pub fn find_alternatives_with(
    original: &Component,
    pool: &[Component],
    rules: &RuleBook,
    options: &AlternativesOptions,
) -> AlternativesReport {
    alternatives::find_alternatives(original, pool, rules, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::Operator;
    use crate::search::{ComponentRow, FeeTier, MemoryStore, SubcategoryInfo, render_attributes};

    #[test]
    fn parse_query_rejects_unusable_text() {
        let cases = vec![
            ("", QueryError::NoSearchableTerms),
            ("   \t ", QueryError::NoSearchableTerms),
            ("10k\u{7}resistor", QueryError::ControlCharacter { position: 3 }),
        ];
        for (input, expected) in cases {
            assert_eq!(parse_query(input), Err(expected), "input: {input:?}");
        }

        let long = "a".repeat(501);
        assert_eq!(parse_query(&long), Err(QueryError::TooLong { len: 501, max: 500 }));
    }

    #[test]
    fn parse_query_verbose_matches_parse_query() {
        let (parsed, details) = parse_query_verbose("  10k resistor 0603 1% ").unwrap();
        assert_eq!(parsed, parse_query("10k resistor 0603 1%").unwrap());
        assert!(!details.stages.is_empty());
    }

    #[test]
    fn compile_filters_splits_fast_and_slow_paths() {
        let compiled = compile_filters(&[
            SpecFilter::new("Resistance", Operator::Eq, "10k"),
            SpecFilter::new("Hold Current", Operator::Ge, "500mA"),
        ]);
        assert_eq!(compiled.clauses.len(), 2);
        assert_eq!(compiled.post_filters.len(), 1);
        assert!(compiled.needs_over_fetch());
    }

    #[test]
    fn end_to_end_search_and_alternatives() {
        let categories = CategoryTable::new(vec![SubcategoryInfo {
            id: 2,
            name: "Chip Resistor - Surface Mount".to_string(),
            category: Some("Resistors".to_string()),
        }]);
        let resistor = |id: &str, tier: FeeTier, value: &str| ComponentRow {
            id: id.to_string(),
            model: format!("RC0603-{id}"),
            manufacturer: "Acme".to_string(),
            package: "0603".to_string(),
            description: "Chip resistor".to_string(),
            stock: 5_000,
            price: Some(0.001),
            subcategory_id: 2,
            fee_tier: tier,
            attributes: render_attributes(&[
                ("Resistance".to_string(), value.to_string()),
                ("Tolerance".to_string(), "±1%".to_string()),
            ]),
            columns: Default::default(),
        };
        let store = MemoryStore::new(vec![
            resistor("R1", FeeTier::Extended, "10kΩ"),
            resistor("R2", FeeTier::Basic, "10kΩ"),
            resistor("R3", FeeTier::Basic, "22kΩ"),
        ]);

        let params = SearchParams::query("10k resistor 0603 1%");
        let results = match search(&store, &categories, &params) {
            Ok(SearchOutcome::Found(results)) => results,
            other => panic!("expected results, got {other:?}"),
        };
        let found: Vec<&str> = results.results.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(found, vec!["R2", "R1"]);

        let pool: Vec<Component> = store.in_subcategory(2).map(|row| Component::from_row(row, &categories)).collect();
        let original = pool.iter().find(|c| c.id == "R1").unwrap();
        let report = find_alternatives(original, &pool, RuleBook::builtin());
        let ranked: Vec<&str> = report.alternatives.iter().map(|a| a.component.id.as_str()).collect();
        assert_eq!(ranked, vec!["R2"]);
        assert_eq!(report.rejected, 1);
    }
}
