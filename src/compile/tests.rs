use super::*;
use super::attributes::{attribute_names, numeric_column};
use super::like::{escape_like, value_patterns};
use crate::TolerancePolicy;
use crate::error::FilterError;
use crate::units::SpecParser;

fn compile_filters(filters: &[SpecFilter]) -> CompiledPredicate {
    compile(&group_filters(filters), &TolerancePolicy::default())
}

fn blob(pairs: &[(&str, &str)]) -> String {
    let items: Vec<String> = pairs.iter().map(|(n, v)| format!("[\"{n}\", \"{v}\"]")).collect();
    format!("[{}]", items.join(", "))
}

fn like_matches(predicate: &Predicate, attributes: &str) -> bool {
    match predicate {
        Predicate::AttributeLike { patterns } => patterns.iter().any(|p| like_match(p, attributes)),
        other => panic!("expected a LIKE clause, got {other:?}"),
    }
}

#[test]
fn operators_parse_and_reject() {
    let cases: Vec<(&str, Option<Operator>)> = vec![
        ("=", Some(Operator::Eq)),
        (">=", Some(Operator::Ge)),
        ("<=", Some(Operator::Le)),
        (">", Some(Operator::Gt)),
        ("<", Some(Operator::Lt)),
        ("!=", None),
        ("=>", None),
        ("", None),
    ];

    for (input, expected) in cases {
        assert_eq!(input.parse::<Operator>().ok(), expected, "operator {input:?}");
    }
}

#[test]
fn filter_expressions() {
    let filter = SpecFilter::parse("Vds>=30V").expect("valid expression");
    assert_eq!(filter, SpecFilter::new("Vds", Operator::Ge, "30V"));

    let filter = SpecFilter::parse("Interface = I2C").expect("valid expression");
    assert_eq!((filter.name.as_str(), filter.value.as_str()), ("Interface", "I2C"));

    assert_eq!(SpecFilter::parse("Vds!=30V"), Err(FilterError::InvalidOperator("!=".into())));
    assert!(matches!(SpecFilter::parse("just words"), Err(FilterError::InvalidExpression(_))));
}

#[test]
fn filter_serde_rejects_illegal_operator() {
    let ok: SpecFilter = serde_json::from_str(r#"{"name":"Vds","op":">=","value":"30V"}"#).expect("legal");
    assert_eq!(ok.operator, Operator::Ge);
    assert_eq!(serde_json::to_string(&ok).expect("serializes"), r#"{"name":"Vds","op":">=","value":"30V"}"#);

    let err = serde_json::from_str::<SpecFilter>(r#"{"name":"Vds","op":"!=","value":"30V"}"#);
    assert!(err.is_err());
}

#[test]
fn equal_filters_on_one_name_group() {
    let filters = vec![
        SpecFilter::new("Interface", Operator::Eq, "I2C"),
        SpecFilter::new("Vds", Operator::Ge, "30V"),
        SpecFilter::new("interface", Operator::Eq, "SPI"),
        SpecFilter::new("Interface", Operator::Eq, "i2c"),
        SpecFilter::new("Vds", Operator::Le, "60V"),
    ];
    let groups = group_filters(&filters);

    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0], FilterGroup::Grouped { name: "Interface".into(), values: vec!["I2C".into(), "SPI".into()] });
    assert!(matches!(&groups[1], FilterGroup::Single(f) if f.operator == Operator::Ge));
    assert!(matches!(&groups[2], FilterGroup::Single(f) if f.operator == Operator::Le));
}

#[test]
fn grouped_interface_matches_list_value() {
    let compiled = compile_filters(&[
        SpecFilter::new("Interface", Operator::Eq, "I2C"),
        SpecFilter::new("Interface", Operator::Eq, "SPI"),
    ]);
    assert_eq!(compiled.clauses.len(), 1);
    assert!(!compiled.needs_over_fetch());

    let clause = &compiled.clauses[0];
    assert!(like_matches(clause, &blob(&[("Interface", "I2C、SPI")])));
    assert!(like_matches(clause, &blob(&[("Interface", "SPI")])));
    assert!(!like_matches(clause, &blob(&[("Interface", "UART")])));
}

#[test]
fn column_path_uses_one_percent_band() {
    let compiled = compile_filters(&[SpecFilter::new("Voltage", Operator::Eq, "25V")]);
    assert!(compiled.post_filters.is_empty());

    let Predicate::ColumnBetween { column, low, high } = compiled.clauses[0] else {
        panic!("expected a column band, got {:?}", compiled.clauses[0]);
    };
    assert_eq!(column, "voltage_max_v");
    assert!((low..=high).contains(&25.2));
    assert!(!(low..=high).contains(&26.0));

    let (sql, params) = compiled.clauses[0].to_sql();
    assert_eq!(sql, "voltage_max_v BETWEEN ? AND ?");
    assert_eq!(params.len(), 2);
}

#[test]
fn aliases_reach_columns() {
    let cases: Vec<(&str, &str)> = vec![
        ("Vds", "vds_max_v"),
        ("Drain to Source Voltage", "vds_max_v"),
        ("Rds(on)", "rds_on_ohms"),
        ("Power", "power_w"),
        ("Pd - Power Dissipation", "power_w"),
        ("Tolerance", "tolerance_pct"),
    ];
    for (name, column) in cases {
        assert_eq!(numeric_column(name).map(|c| c.column), Some(column), "column for {name:?}");
    }
    assert!(numeric_column("Vgs(th)").is_none());
    assert_eq!(attribute_names("Vgs(th)"), vec!["Gate Threshold Voltage (Vgs(th))", "Gate Threshold Voltage"]);
    assert_eq!(attribute_names("Isat").len(), 2);
    assert_eq!(attribute_names("RDS(on)"), vec!["RDS(on)"]);
    assert_eq!(attribute_names("Color"), vec!["Color"]);
}

#[test]
fn like_path_registers_post_filter() {
    let compiled = compile_filters(&[SpecFilter::new("Vgs(th)", Operator::Lt, "2.5V")]);
    assert!(compiled.needs_over_fetch());
    assert!(like_matches(&compiled.clauses[0], &blob(&[("Gate Threshold Voltage", "1V~2V")])));

    let post = &compiled.post_filters[0];
    let policy = TolerancePolicy::default();
    let row = |v: &str| vec![("Gate Threshold Voltage".to_string(), v.to_string())];
    assert!(post.accepts(&row("1V~2V"), &policy));
    assert!(!post.accepts(&row("1.5V~3V"), &policy));
    assert!(!post.accepts(&row("n/a"), &policy));
    assert!(!post.accepts(&[], &policy));
}

#[test]
fn equality_group_keeps_unparseable_values() {
    let compiled = compile_filters(&[
        SpecFilter::new("Capacitance", Operator::Eq, "10uF"),
        SpecFilter::new("Capacitance", Operator::Eq, "Custom"),
    ]);
    assert_eq!(compiled.clauses.len(), 1);
    let cases = vec![
        (blob(&[("Capacitance", "10uF")]), true),
        (blob(&[("Capacitance", "Custom")]), true),
        (blob(&[("Capacitance", "22uF")]), false),
    ];
    for (attributes, expected) in cases {
        assert_eq!(like_matches(&compiled.clauses[0], &attributes), expected, "blob {attributes}");
    }

    let post = &compiled.post_filters[0];
    assert_eq!(post.literals, vec!["Custom"]);
    let policy = TolerancePolicy::default();
    let row = |v: &str| vec![("Capacitance".to_string(), v.to_string())];
    assert!(post.accepts(&row("10uF"), &policy));
    assert!(post.accepts(&row("custom"), &policy));
    assert!(!post.accepts(&row("22uF"), &policy));
    assert!(!post.accepts(&row("Other"), &policy));
}

#[test]
fn ordered_filter_without_parser_only_requires_the_attribute() {
    // (operator, blob, expected)
    let cases = vec![
        (Operator::Gt, blob(&[("Color", "Red")]), true),
        (Operator::Lt, blob(&[("Color", "5")]), true),
        (Operator::Ge, blob(&[("Package", "0603")]), false),
    ];
    for (operator, attributes, expected) in cases {
        let compiled = compile_filters(&[SpecFilter::new("Color", operator, "5")]);
        assert_eq!(compiled.clauses.len(), 1, "Color {operator} 5");
        assert!(compiled.post_filters.is_empty(), "Color {operator} 5 has no post filter");
        assert_eq!(like_matches(&compiled.clauses[0], &attributes), expected, "Color {operator} 5 over {attributes}");
    }
}

#[test]
fn post_filter_is_not_fooled_by_substrings() {
    // "< 50mOhm" as a substring would match "500mOhm".
    let post = PostFilter {
        name: "RDS(on)".into(),
        attribute_names: vec!["RDS(on)".into()],
        operator: Operator::Lt,
        targets: vec![0.05],
        literals: vec![],
        parser: SpecParser::for_attribute("RDS(on)").expect("registered"),
    };
    let policy = TolerancePolicy::default();
    let row = |v: &str| vec![("RDS(on)".to_string(), v.to_string())];
    assert!(!post.accepts(&row("500mOhm"), &policy));
    assert!(post.accepts(&row("30mOhm"), &policy));
    assert!(!post.accepts(&row("50mOhm"), &policy));
}

#[test]
fn rds_less_than_rejects_larger_value() {
    let compiled = compile_filters(&[SpecFilter::new("RDS(on)", Operator::Lt, "50mOhm")]);
    let Predicate::ColumnCompare { column, operator, value } = compiled.clauses[0] else {
        panic!("expected a column comparison");
    };
    assert_eq!((column, operator), ("rds_on_ohms", Operator::Lt));
    let policy = TolerancePolicy::default();
    assert!(!policy.satisfies(0.5, operator, value));
    assert!(policy.satisfies(0.03, operator, value));
}

#[test]
fn string_filters_match_exact_value() {
    let compiled = compile_filters(&[SpecFilter::new("Type", Operator::Eq, "N-Channel")]);
    assert!(!compiled.needs_over_fetch());
    assert!(like_matches(&compiled.clauses[0], &blob(&[("Type", "N-Channel")])));
    assert!(!like_matches(&compiled.clauses[0], &blob(&[("Type", "N-Channel x2")])));
}

#[test]
fn value_patterns_examples() {
    let cases: Vec<(&str, &str, f64, Vec<&str>)> = vec![
        ("Resistance", "10kOhm", 10_000.0, vec![r#"%"Resistance", "10k%"#, r#"%"Resistance", "10K%"#]),
        ("Resistance", "10000", 10_000.0, vec![r#"%"Resistance", "10000%"#, r#"%"Resistance", "10k%"#]),
        ("Capacitance", "1uF", 1e-6, vec![r#"%"Capacitance", "1uF%"#, r#"%"Capacitance", "1uf%"#, r#"%"Capacitance", "1u%"#]),
        ("Tolerance", "1%", 1.0, vec![r#"%"Tolerance", "1\%%"#, r#"%"Tolerance", "±1\%%"#]),
    ];

    for (name, value, parsed, expected) in cases {
        assert_eq!(value_patterns(name, value, parsed), expected, "patterns for {name}={value}");
    }
}

#[test]
fn like_evaluation() {
    let cases: Vec<(&str, &str, bool)> = vec![
        ("%abc%", "xxabcxx", true),
        ("abc", "ABC", true),
        ("a_c", "abc", true),
        ("a\\_c", "abc", false),
        ("a\\_c", "a_c", true),
        ("100\\%", "100%", true),
        ("%\"Tolerance\", \"±1\\%%", "[[\"Tolerance\", \"±1%\"]]", true),
        ("%x", "abc", false),
        ("", "", true),
    ];
    for (pattern, text, expected) in cases {
        assert_eq!(like_match(pattern, text), expected, "{text:?} LIKE {pattern:?}");
    }
    assert_eq!(escape_like(r"50%_\"), r"50\%\_\\");
}

#[test]
fn sql_rendering() {
    assert_eq!(fts_expression("tp4056 li-ion", true).as_deref(), Some(r#""tp4056"* "li-ion"*"#));
    assert_eq!(fts_expression("a b", false).as_deref(), Some(r#""a"* OR "b"*"#));
    assert_eq!(fts_expression(r#"say"hi"#, true).as_deref(), Some(r#""say""hi"*"#));
    assert_eq!(fts_expression("   ", true), None);

    assert_eq!(SortOrder::new(SortKey::Stock, false).to_sql(), "ORDER BY stock DESC");
    assert_eq!(
        SortOrder::new(SortKey::Price, true).to_sql(),
        "ORDER BY CASE library_type WHEN 'b' THEN 1 WHEN 'p' THEN 2 ELSE 3 END, price ASC NULLS LAST"
    );

    let compiled = compile_filters(&[
        SpecFilter::new("Resistance", Operator::Eq, "10k"),
        SpecFilter::new("Resistance", Operator::Eq, "4k7"),
    ]);
    let (sql, params) = compiled.where_sql();
    assert_eq!(sql, "(resistance_ohms BETWEEN ? AND ? OR resistance_ohms BETWEEN ? AND ?)");
    assert_eq!(params.len(), 4);
}
