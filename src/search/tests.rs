use super::*;
use crate::compile::{Operator, SpecFilter};
use crate::error::QueryError;

const MOSFETS: u32 = 1;
const CHIP_RESISTORS: u32 = 2;
const MLCC: u32 = 3;
const MCUS: u32 = 4;
const PTC_FUSES: u32 = 5;
const ELECTROLYTICS: u32 = 6;

fn categories() -> CategoryTable {
    let sub = |id: u32, name: &str, category: &str| SubcategoryInfo {
        id,
        name: name.to_string(),
        category: Some(category.to_string()),
    };
    CategoryTable::new(vec![
        sub(MOSFETS, "MOSFETs", "Transistors"),
        sub(CHIP_RESISTORS, "Chip Resistor - Surface Mount", "Resistors"),
        sub(MLCC, "Multilayer Ceramic Capacitors MLCC - SMD/SMT", "Capacitors"),
        sub(MCUS, "Microcontrollers (MCU/MPU/SOC)", "Embedded Processors & Controllers"),
        sub(PTC_FUSES, "PTC Resettable Fuses", "Circuit Protection"),
        sub(ELECTROLYTICS, "Aluminum Electrolytic Capacitors - Leaded", "Capacitors"),
    ])
}

fn row(id: &str, subcategory_id: u32, stock: u64, attributes: &[(&str, &str)]) -> ComponentRow {
    let pairs: Vec<(String, String)> = attributes.iter().map(|(n, v)| (n.to_string(), v.to_string())).collect();
    ComponentRow {
        id: id.to_string(),
        model: format!("MODEL-{id}"),
        manufacturer: "Acme".to_string(),
        package: "SOT-23".to_string(),
        description: String::new(),
        stock,
        price: Some(0.01),
        subcategory_id,
        fee_tier: FeeTier::Extended,
        attributes: render_attributes(&pairs),
        columns: Default::default(),
    }
}

fn run(store: &MemoryStore, params: &SearchParams) -> SearchResults {
    match search(store, &categories(), params, &SearchConfig::default()) {
        Ok(SearchOutcome::Found(results)) => results,
        other => panic!("expected results for {params:?}, got {other:?}"),
    }
}

fn ids(results: &SearchResults) -> Vec<&str> {
    results.results.iter().map(|c| c.id.as_str()).collect()
}

fn structured(subcategory: &str, filters: Vec<SpecFilter>) -> SearchParams {
    SearchParams {
        subcategory: Some(subcategory.to_string()),
        spec_filters: filters,
        smart_parse: false,
        ..SearchParams::default()
    }
}

#[test]
fn equality_filter_accepts_one_percent() {
    let store = MemoryStore::new(vec![
        row("C1", MLCC, 300, &[("Voltage Rating", "25V")]),
        row("C2", MLCC, 200, &[("Voltage Rating", "25.2V")]),
        row("C3", MLCC, 100, &[("Voltage Rating", "26V")]),
    ]);
    let results = run(&store, &structured("mlcc", vec![SpecFilter::new("Voltage Rating", Operator::Eq, "25V")]));
    assert_eq!(ids(&results), vec!["C1", "C2"]);
    assert_eq!(results.total, 2);
    assert_eq!(results.filters_applied.subcategory_resolved.as_deref(), Some("Multilayer Ceramic Capacitors MLCC - SMD/SMT"));
}

#[test]
fn repeated_equality_filters_are_or_ed() {
    let store = MemoryStore::new(vec![
        row("M1", MCUS, 400, &[("Interface", "I2C、SPI")]),
        row("M2", MCUS, 300, &[("Interface", "UART")]),
        row("M3", MCUS, 200, &[("Interface", "SPI、UART")]),
        row("M4", MCUS, 100, &[("Interface", "CAN")]),
    ]);
    let filters = vec![
        SpecFilter::new("Interface", Operator::Eq, "I2C"),
        SpecFilter::new("Interface", Operator::Eq, "SPI"),
    ];
    let results = run(&store, &structured("Microcontrollers", filters));
    assert_eq!(ids(&results), vec!["M1", "M3"]);
}

#[test]
fn ordered_filter_compares_numbers_not_substrings() {
    let store = MemoryStore::new(vec![
        row("Q1", MOSFETS, 300, &[("RDS(on)", "30mΩ")]),
        row("Q2", MOSFETS, 200, &[("RDS(on)", "500mΩ")]),
        row("Q3", MOSFETS, 100, &[("RDS(on)", "45mOhm")]),
    ]);
    let results = run(&store, &structured("MOSFETs", vec![SpecFilter::new("Rds(on)", Operator::Lt, "50mOhm")]));
    assert_eq!(ids(&results), vec!["Q1", "Q3"]);
}

#[test]
fn post_filter_over_fetches_then_truncates() {
    let store = MemoryStore::new(vec![
        row("F1", PTC_FUSES, 900, &[("Hold Current", "100mA")]),
        row("F2", PTC_FUSES, 800, &[("Hold Current", "200mA")]),
        row("F3", PTC_FUSES, 700, &[("Hold Current", "750mA")]),
        row("F4", PTC_FUSES, 600, &[("Hold Current", "1.5A")]),
        row("F5", PTC_FUSES, 500, &[("Hold Current", "2A")]),
    ]);
    let params = SearchParams {
        limit: Some(2),
        ..structured("PTC Resettable Fuses", vec![SpecFilter::new("Hold Current", Operator::Ge, "500mA")])
    };
    let results = run(&store, &params);

    assert_eq!(ids(&results), vec!["F3", "F4"]);
    assert_eq!(results.post_filter_rejected, 2);
    assert_eq!(results.total, 5, "total counts store matches before post-filtering");
    assert_eq!(results.page_info, PageInfo { limit: 2, offset: 0, returned: 2 });
}

#[test]
fn fetch_size_is_capped() {
    let config = SearchConfig::default();
    let cases: Vec<(usize, bool, usize)> = vec![(20, false, 20), (20, true, 200), (100, true, 500), (1, true, 10)];
    for (limit, over_fetch, expected) in cases {
        assert_eq!(config.fetch_size(limit, over_fetch), expected, "limit {limit}, over-fetch {over_fetch}");
    }
}

#[test]
fn unknown_subcategory_is_not_found_with_suggestions() {
    let store = MemoryStore::new(vec![]);
    let outcome = search(&store, &categories(), &structured("quantum flux capacitor", vec![]), &SearchConfig::default())
        .expect("not an error");
    let SearchOutcome::NotFound(not_found) = outcome else { panic!("expected NotFound, got {outcome:?}") };
    assert_eq!(not_found.kind, NameKind::Subcategory);
    assert_eq!(not_found.name, "quantum flux capacitor");
    assert_eq!(
        not_found.suggestions,
        vec!["Multilayer Ceramic Capacitors MLCC - SMD/SMT", "Aluminum Electrolytic Capacitors - Leaded"]
    );
}

#[test]
fn unknown_category_is_not_found() {
    let store = MemoryStore::new(vec![]);
    let params = SearchParams { category: Some("motors".into()), smart_parse: false, ..SearchParams::default() };
    let outcome = search(&store, &categories(), &params, &SearchConfig::default()).expect("not an error");
    assert!(matches!(outcome, SearchOutcome::NotFound(NotFound { kind: NameKind::Category, .. })));
}

#[test]
fn category_spans_its_subcategories() {
    let store = MemoryStore::new(vec![
        row("C1", MLCC, 300, &[]),
        row("C2", ELECTROLYTICS, 200, &[]),
        row("R1", CHIP_RESISTORS, 100, &[]),
    ]);
    let params = SearchParams { category: Some("capacitors".into()), smart_parse: false, ..SearchParams::default() };
    let results = run(&store, &params);
    assert_eq!(ids(&results), vec!["C1", "C2"]);
    assert_eq!(results.filters_applied.category_resolved.as_deref(), Some("Capacitors"));
}

#[test]
fn corrupt_attribute_blob_keeps_the_row() {
    let mut broken = row("Q9", MOSFETS, 100, &[]);
    broken.attributes = "not json".to_string();
    let store = MemoryStore::new(vec![broken]);

    let results = run(&store, &structured("MOSFETs", vec![]));
    assert_eq!(ids(&results), vec!["Q9"]);
    assert!(results.results[0].specs.is_empty());
}

#[test]
fn fee_tier_counts_ignore_the_tier_restriction() {
    let tiered = |id: &str, stock: u64, tier: FeeTier| ComponentRow { fee_tier: tier, ..row(id, MOSFETS, stock, &[]) };
    let store = MemoryStore::new(vec![
        tiered("Q1", 400, FeeTier::Basic),
        tiered("Q2", 300, FeeTier::Extended),
        tiered("Q3", 200, FeeTier::Extended),
        tiered("Q4", 100, FeeTier::Preferred),
    ]);

    let params = SearchParams { library: Some(LibraryFilter::Extended), ..structured("MOSFETs", vec![]) };
    let results = run(&store, &params);
    assert_eq!(ids(&results), vec!["Q2", "Q3"]);
    assert_eq!(results.total, 2);
    assert_eq!(results.fee_tiers, FeeTierCounts { basic: 1, preferred: 1, extended: 2 });
    assert!(results.no_fee_available);

    let results = run(&store, &structured("MOSFETs", vec![]));
    assert_eq!(ids(&results), vec!["Q1", "Q4", "Q2", "Q3"], "basic, preferred, then extended");

    let params = SearchParams { library: Some(LibraryFilter::NoFee), ..structured("MOSFETs", vec![]) };
    assert_eq!(ids(&run(&store, &params)), vec!["Q1", "Q4"]);
}

#[test]
fn package_expands_to_its_family() {
    let packaged = |id: &str, stock: u64, package: &str| ComponentRow {
        package: package.to_string(),
        ..row(id, CHIP_RESISTORS, stock, &[])
    };
    let store = MemoryStore::new(vec![
        packaged("R1", 300, "0603"),
        packaged("R2", 200, "1608"),
        packaged("R3", 100, "0805"),
    ]);
    let params = SearchParams { package: Some("0603".into()), ..structured("Chip Resistor", vec![]) };
    let results = run(&store, &params);
    assert_eq!(ids(&results), vec!["R1", "R2"]);
    assert_eq!(results.filters_applied.packages, vec!["0603", "1608"]);
}

#[test]
fn min_stock_and_sort_by_price() {
    let priced = |id: &str, stock: u64, price: Option<f64>| ComponentRow { price, ..row(id, MOSFETS, stock, &[]) };
    let store = MemoryStore::new(vec![
        priced("Q1", 5000, Some(0.30)),
        priced("Q2", 4000, None),
        priced("Q3", 3000, Some(0.10)),
        priced("Q4", 5, Some(0.01)),
    ]);
    let params = SearchParams { sort: SortKey::Price, ..structured("MOSFETs", vec![]) };
    assert_eq!(ids(&run(&store, &params)), vec!["Q3", "Q1", "Q2"]);
}

#[test]
fn smart_parse_fills_subcategory_package_and_filters() {
    let resistor = |id: &str, stock: u64, package: &str, value: &str, tolerance: &str| ComponentRow {
        package: package.to_string(),
        ..row(id, CHIP_RESISTORS, stock, &[("Resistance", value), ("Tolerance", tolerance)])
    };
    let store = MemoryStore::new(vec![
        resistor("R1", 500, "0603", "10kΩ", "±1%"),
        resistor("R2", 400, "0603", "10kΩ", "±5%"),
        resistor("R3", 300, "0603", "1kΩ", "±1%"),
        resistor("R4", 200, "0805", "10kΩ", "±1%"),
    ]);

    let results = run(&store, &SearchParams::query("10k resistor 0603 1%"));
    assert_eq!(ids(&results), vec!["R1"]);
    assert_eq!(results.filters_applied.query, None, "fully structured queries need no full-text clause");
    assert_eq!(results.filters_applied.subcategory_id, Some(CHIP_RESISTORS));
    let parsed = results.parsed.expect("smart parse ran");
    assert_eq!(parsed.package.as_deref(), Some("0603"));
}

#[test]
fn manual_fields_win_over_parsed_ones() {
    let store = MemoryStore::new(vec![
        row("Q1", MOSFETS, 300, &[("Drain to Source Voltage", "60V")]),
        row("Q2", MOSFETS, 200, &[("Drain to Source Voltage", "100V")]),
    ]);
    let params = SearchParams {
        spec_filters: vec![SpecFilter::new("Vds", Operator::Ge, "50V")],
        package: Some("SOT-23".into()),
        ..SearchParams::query("n-channel mosfet SOT-23 100V")
    };
    let results = run(&store, &params);
    let vds: Vec<&SpecFilter> =
        results.filters_applied.spec_filters.iter().filter(|f| f.name.eq_ignore_ascii_case("vds")).collect();
    assert_eq!(vds, vec![&SpecFilter::new("Vds", Operator::Ge, "50V")]);
}

#[test]
fn full_text_matches_prefixes() {
    let named = |id: &str, stock: u64, model: &str| ComponentRow { model: model.to_string(), ..row(id, 99, stock, &[]) };
    let store = MemoryStore::new(vec![
        named("U1", 300, "TP4056"),
        named("U2", 200, "TP4056X"),
        named("U3", 100, "MCP73831"),
    ]);
    let results = run(&store, &SearchParams::query("TP4056"));
    assert_eq!(ids(&results), vec!["U1", "U2"]);
}

#[test]
fn rejected_queries() {
    let store = MemoryStore::new(vec![]);
    let config = SearchConfig::default();
    let cases: Vec<(SearchParams, QueryError)> = vec![
        (SearchParams::default(), QueryError::NoSearchableTerms),
        (SearchParams::query("   "), QueryError::NoSearchableTerms),
        (SearchParams::query("a".repeat(501)), QueryError::TooLong { len: 501, max: 500 }),
        (SearchParams::query("10k\u{0}"), QueryError::ControlCharacter { position: 3 }),
    ];
    for (params, expected) in cases {
        match search(&store, &categories(), &params, &config) {
            Err(SearchError::Query(err)) => assert_eq!(err, expected, "query {:?}", params.query),
            other => panic!("expected {expected:?} for {:?}, got {other:?}", params.query),
        }
    }
}

#[test]
fn store_query_renders_sql() {
    let query = StoreQuery {
        clauses: vec![Predicate::Subcategory { id: 7 }, Predicate::FeeTier { tier: FeeTier::Basic }],
        count_clauses: vec![Predicate::Subcategory { id: 7 }],
        order: SortOrder::new(SortKey::Stock, true),
        limit: 20,
        offset: 0,
    };
    let (sql, params) = query.select_sql();
    assert!(sql.starts_with("SELECT * FROM components WHERE subcategory_id = ? AND library_type = 'b' ORDER BY"));
    assert_eq!(params.len(), 3);

    let (sql, _) = query.fee_tier_count_sql();
    assert!(sql.ends_with("WHERE subcategory_id = ? GROUP BY library_type"));
}
