use super::*;
use super::types::BJTS;
use crate::compile::Operator;
use crate::{SpecValue, UnitType};

fn normalized(values: &[SpecValue]) -> Vec<(UnitType, &str)> {
    values.iter().map(|v| (v.unit, v.normalized.as_str())).collect()
}

#[test]
fn value_examples() {
    // (input, expected (unit, normalized) list, expected remaining text)
    let cases: Vec<(&str, Vec<(UnitType, &str)>, &str)> = vec![
        ("10k resistor 1%", vec![(UnitType::Resistance, "10kOhm"), (UnitType::Tolerance, "1%")], "resistor"),
        ("4k7", vec![(UnitType::Resistance, "4k7")], ""),
        ("8MHz crystal", vec![(UnitType::Frequency, "8MHz")], "crystal"),
        ("100nF 50V", vec![(UnitType::Capacitance, "100nF"), (UnitType::Voltage, "50V")], ""),
        ("mosfet 100V 5A", vec![(UnitType::Voltage, "100V"), (UnitType::Current, "5A")], "mosfet"),
        ("1/4W", vec![(UnitType::Power, "1/4W")], ""),
        ("2x20 pin header", vec![(UnitType::PinStructure, "2x20P")], "pin header"),
        ("2.54mm", vec![(UnitType::Pitch, "2.54mm")], ""),
        ("5x5mm inductor", vec![(UnitType::Dimensions, "5x5mm")], "inductor"),
        ("10uH", vec![(UnitType::Inductance, "10uH")], ""),
    ];

    for (input, expected, rest) in cases {
        let (values, remaining) = extract_values(input);
        assert_eq!(normalized(&values), expected, "values for {input:?}");
        assert_eq!(remaining, rest, "remaining text for {input:?}");
    }
}

#[test]
fn value_magnitudes_are_si() {
    let (values, _) = extract_values("4k7 100nF 1/4W 8MHz 500mA");
    let got: Vec<f64> = values.iter().map(|v| v.value).collect();
    let expected = [4700.0, 100e-9, 0.25, 8e6, 0.5];
    assert_eq!(got.len(), expected.len());
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() <= e * 1e-9, "got {g}, expected {e}");
    }
}

#[test]
fn overlapping_spans_extract_once() {
    // "8MHz" must not also produce a resistance from "8M".
    let (values, _) = extract_values("8MHz");
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].unit, UnitType::Frequency);
}

#[test]
fn package_examples() {
    let cases: Vec<(&str, Option<&str>, &str)> = vec![
        ("sot23 mosfet", Some("SOT-23"), "mosfet"),
        ("0603 10k", Some("0603"), "10k"),
        ("qfn-32 mcu", Some("QFN-32"), "mcu"),
        ("to220 regulator", Some("TO-220"), "regulator"),
        ("diode M7", Some("SMA"), "diode"),
        ("schottky SMB", Some("SMB"), "schottky"),
        ("SMA connector", None, "SMA connector"),
    ];

    for (input, package, rest) in cases {
        let (hit, remaining) = extract_package(input);
        assert_eq!(hit.package.as_deref(), package, "package for {input:?}");
        assert_eq!(remaining, rest, "remaining text for {input:?}");
    }
}

#[test]
fn usb_designator_suggests_subcategory() {
    let (hit, remaining) = extract_package("usb-c receptacle");
    assert_eq!(hit.package, None);
    assert_eq!(hit.suggested_subcategory, Some("usb connectors"));
    assert_eq!(remaining, "usb-c receptacle");
}

#[test]
fn model_number_examples() {
    let cases: Vec<(&str, Option<&str>)> = vec![
        ("ESP32-S3-MINI-1 module", Some("ESP32-S3-MINI-1")),
        ("TP4056 lithium charger", Some("TP4056")),
        ("ams1117 3.3v", Some("ams1117")),
        ("STM32F103C8T6", Some("STM32F103C8T6")),
        ("SOT23", None),
        ("RJ45 jack", None),
        ("10k resistor 0603", None),
    ];

    for (input, expected) in cases {
        let (model, _) = extract_model_number(input);
        assert_eq!(model.as_deref(), expected, "model for {input:?}");
    }
}

#[test]
fn mounting_examples() {
    assert_eq!(extract_mounting_type("through hole resistor"), (Some(MountingType::ThroughHole), "resistor".into()));
    assert_eq!(extract_mounting_type("smd led"), (Some(MountingType::Smd), "led".into()));
    assert_eq!(extract_mounting_type("resistor"), (None, "resistor".into()));
    assert_eq!(MountingType::from_name("THT"), Some(MountingType::ThroughHole));
    assert_eq!(MountingType::from_name("smd resistor"), None);
}

#[test]
fn connector_series_examples() {
    let (spec, remaining) = extract_connector("jst ph 4 pin");
    let spec = spec.expect("JST PH is a known series");
    assert_eq!((spec.brand, spec.series, spec.pitch_mm), ("JST", "PH", Some(2.0)));
    assert_eq!(remaining, "4 pin");

    let (spec, _) = extract_connector("JST-XH connector");
    assert_eq!(spec.map(|s| s.series), Some("XH"));

    let (spec, _) = extract_connector("qwiic cable");
    assert_eq!(spec.map(|s| (s.brand, s.series)), Some(("JST", "SH")));

    let (spec, _) = extract_connector("u.fl antenna");
    assert_eq!(spec.map(|s| s.subcategory), Some("coaxial connectors (rf)"));

    assert_eq!(expand_connector_synonyms("u.fl antenna"), "IPEX antenna");
}

#[test]
fn component_type_examples() {
    let cases: Vec<(&str, Option<&str>, &str)> = vec![
        ("mosfet 30V", Some("mosfets"), "30V"),
        ("schottky diode 1A", Some("schottky diodes"), "1A"),
        ("10k resistor 1%", Some("chip resistor - surface mount"), "10k 1%"),
        ("leaded", None, "leaded"),
    ];

    for (input, subcategory, rest) in cases {
        let (found, remaining) = extract_component_type(input);
        assert_eq!(found.map(|t| t.subcategory), subcategory, "subcategory for {input:?}");
        assert_eq!(remaining, rest, "remaining text for {input:?}");
    }
}

#[test]
fn channel_words_imply_type_and_subcategory() {
    let (channel, remaining) = extract_channel("n-channel mosfet 30V");
    let channel = channel.expect("n-channel is a channel word");
    assert_eq!((channel.type_value, channel.implied_subcategory), ("N-Channel", MOSFETS));
    assert_eq!(remaining, "mosfet 30V");

    let (channel, _) = extract_channel("PNP 40V");
    assert_eq!(channel.map(|c| c.implied_subcategory), Some(BJTS));
}

#[test]
fn subcategory_redirects() {
    let redirected = redirect_electrolytic("aluminum electrolytic capacitors - smd", "radial 100uF", None);
    assert_eq!(redirected, Some(("aluminum electrolytic capacitors - leaded", "100uF".to_string())));

    let by_mounting =
        redirect_electrolytic("aluminum electrolytic capacitors - smd", "100uF", Some(MountingType::ThroughHole));
    assert_eq!(by_mounting.map(|(s, _)| s), Some("aluminum electrolytic capacitors - leaded"));

    let pot = redirect_potentiometer(Some(CHIP_RESISTORS), "trimmer");
    assert_eq!(pot, Some(("potentiometers, variable resistors", String::new())));
    assert_eq!(redirect_potentiometer(Some("mosfets"), "trimmer"), None);

    assert!(is_connector_subcategory("pin headers"));
    assert!(!is_connector_subcategory("mosfets"));
}

#[test]
fn semantic_descriptors_longest_first() {
    let (hits, remaining) = extract_semantic_descriptors("logic level low rds(on)");
    let phrases: Vec<&str> = hits.iter().map(|h| h.phrase).collect();
    assert_eq!(phrases, vec!["logic level", "low rds(on)"]);
    assert_eq!(hits[1].filter.operator, Operator::Lt);
    assert_eq!(hits[1].filter.value, "50mOhm");
    assert_eq!(remaining, "");

    let (hits, remaining) = extract_semantic_descriptors("x7r capacitor");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].filter.name, "Temperature Coefficient");
    assert_eq!(remaining, "capacitor");
}

#[test]
fn noise_words_are_dropped() {
    assert_eq!(remove_noise_words("resistor for the board", &[]), "resistor board");
    assert_eq!(remove_noise_words("usb power port", CONNECTOR_NOISE_WORDS), "usb");
}
