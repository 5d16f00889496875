use super::*;
use crate::compile::Operator;
use crate::error::QueryError;

fn filters(parsed: &ParsedQuery) -> Vec<(&str, Operator, &str)> {
    parsed.spec_filters.iter().map(|f| (f.name.as_str(), f.operator, f.value.as_str())).collect()
}

#[test]
fn parse_examples() {
    // (query, subcategory, package, filters, free text)
    #[allow(clippy::type_complexity)]
    let cases: Vec<(&str, Option<&str>, Option<&str>, Vec<(&str, Operator, &str)>, &str)> = vec![
        (
            "n-channel mosfet SOT-23 100V",
            Some("mosfets"),
            Some("SOT-23"),
            vec![("Type", Operator::Eq, "N-Channel"), ("Vds", Operator::Ge, "100V")],
            "",
        ),
        (
            "10k resistor 0603 1%",
            Some("chip resistor - surface mount"),
            Some("0603"),
            vec![("Resistance", Operator::Eq, "10kOhm"), ("Tolerance", Operator::Eq, "1%")],
            "",
        ),
        (
            "dual n-channel mosfet 30V",
            Some("mosfets"),
            None,
            vec![
                ("Type", Operator::Eq, "N-Channel"),
                ("Vds", Operator::Ge, "30V"),
                ("Number", Operator::Eq, "2 N-Channel"),
            ],
            "",
        ),
        (
            "100uF 25V electrolytic radial",
            Some("aluminum electrolytic capacitors - leaded"),
            None,
            vec![("Capacitance", Operator::Eq, "100uF"), ("Voltage Rating", Operator::Ge, "25V")],
            "",
        ),
        (
            "ferrite bead 600 0603",
            Some("ferrite beads"),
            Some("0603"),
            vec![("Impedance @ Frequency", Operator::Eq, "600Ohm")],
            "",
        ),
        (
            "10k trimmer",
            Some("potentiometers, variable resistors"),
            None,
            vec![("Resistance", Operator::Eq, "10kOhm")],
            "",
        ),
    ];

    for (query, subcategory, package, expected, free_text) in cases {
        let parsed = parse(query);
        assert_eq!(parsed.subcategory.as_deref(), subcategory, "subcategory for {query:?}");
        assert_eq!(parsed.package.as_deref(), package, "package for {query:?}");
        assert_eq!(filters(&parsed), expected, "filters for {query:?}");
        assert_eq!(parsed.free_text, free_text, "free text for {query:?}");
    }
}

#[test]
fn dual_mosfets_count_their_channel() {
    let cases = vec![
        ("dual p-channel mosfet", Some("2 P-Channel")),
        ("dual pmos 20V", Some("2 P-Channel")),
        ("dual mosfet", None),
    ];
    for (input, expected) in cases {
        let parsed = parse(input);
        let number = parsed.spec_filters.iter().find(|f| f.name == "Number").map(|f| f.value.as_str());
        assert_eq!(number, expected, "input: {input}");
        assert!(!parsed.free_text.to_lowercase().contains("dual"), "input: {input}");
    }
}

#[test]
fn model_number_becomes_the_free_text() {
    let parsed = parse("TP4056");
    assert_eq!(parsed.model_number.as_deref(), Some("TP4056"));
    assert_eq!(parsed.free_text, "TP4056");

    let parsed = parse("TP4056 lithium charger");
    assert_eq!(parsed.free_text, "TP4056");
}

#[test]
fn unrecognised_text_falls_back_to_the_query() {
    let parsed = parse("x");
    assert!(parsed.spec_filters.is_empty());
    assert_eq!(parsed.subcategory, None);
    assert_eq!(parsed.free_text, "x");
}

#[test]
fn voltage_is_claimed_once() {
    let parsed = parse("n-channel mosfet SOT-23 100V");
    let voltages = parsed.spec_filters.iter().filter(|f| f.value.ends_with('V')).count();
    assert_eq!(voltages, 1);
}

#[test]
fn connector_values_go_to_free_text() {
    let parsed = parse("jst ph 4 pin");
    let connector = parsed.connector.expect("JST PH is a known series");
    assert_eq!((connector.brand, connector.series), ("JST", "PH"));
    assert!(parsed.spec_filters.is_empty());
    assert_eq!(parsed.free_text, "JST PH 4P");
}

#[test]
fn header_rows_become_pin_structure() {
    let parsed = parse("pin header single row 8 pin 2.54mm");
    assert_eq!(parsed.subcategory.as_deref(), Some("pin headers"));
    assert!(parsed.spec_filters.is_empty());
    assert_eq!(parsed.free_text, "1x8P 2.54mm");

    let parsed = parse("pin header double row 16 pin");
    assert_eq!(parsed.free_text, "2x8P");
}

#[test]
fn mounting_is_reported() {
    let parsed = parse("through hole resistor 10k");
    assert_eq!(parsed.mounting_type, Some(MountingType::ThroughHole));
    assert_eq!(parsed.subcategory.as_deref(), Some("chip resistor - surface mount"));
}

#[test]
fn diagnostics_name_what_each_stage_found() {
    let parsed = parse("n-channel mosfet SOT-23 100V");
    assert_eq!(parsed.diagnostics.get("package"), Some(&Value::from("SOT-23")));
    assert_eq!(parsed.diagnostics.get("subcategory"), Some(&Value::from("mosfets")));
    assert!(parsed.diagnostics.contains_key("values"));
}

#[test]
fn details_cover_every_stage() {
    let (parsed, details) = parse_with_details("10k resistor 0603 1%");
    assert_eq!(parsed, parse("10k resistor 0603 1%"));
    assert_eq!(details.stages.len(), 11);
    assert_eq!(details.stages[0].stage, "model_number");
    assert_eq!(details.stages[10].stage, "free_text");
    let package_stage = &details.stages[1];
    assert_eq!(package_stage.remaining, "10k resistor 1%");
    assert!(details.stages.iter().all(|s| s.duration <= details.total));
}

#[test]
fn validation() {
    assert!(validate_query("10k resistor", 500).is_ok());
    assert!(validate_query("a\tb\r\n", 500).is_ok());
    assert_eq!(validate_query("abcdef", 5), Err(QueryError::TooLong { len: 6, max: 5 }));
    assert_eq!(validate_query("ab\u{0}c", 500), Err(QueryError::ControlCharacter { position: 2 }));
}

#[test]
fn manual_filters_win_by_name() {
    let manual = vec![SpecFilter::new("vds", Operator::Ge, "60V")];
    let parsed = vec![
        SpecFilter::new("Type", Operator::Eq, "N-Channel"),
        SpecFilter::new("Vds", Operator::Ge, "100V"),
    ];
    let merged = merge_spec_filters(&manual, &parsed);
    assert_eq!(merged, vec![SpecFilter::new("vds", Operator::Ge, "60V"), SpecFilter::new("Type", Operator::Eq, "N-Channel")]);
}
