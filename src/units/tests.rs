use crate::UnitType;
use crate::units::*;

fn close(a: f64, b: f64) -> bool {
    if b == 0.0 { a.abs() < 1e-12 } else { ((a - b) / b).abs() < 1e-9 }
}

#[test]
fn resistance_examples() {
    let cases: Vec<(&str, Option<f64>)> = vec![
        ("4k7", Some(4700.0)),
        ("4K7", Some(4700.0)),
        ("4R7", Some(4.7)),
        ("1M5", Some(1_500_000.0)),
        ("0R", Some(0.0)),
        ("0", Some(0.0)),
        ("0Ω", Some(0.0)),
        ("10k", Some(10_000.0)),
        ("10kΩ", Some(10_000.0)),
        ("10kOhm", Some(10_000.0)),
        ("2.2MOhm", Some(2_200_000.0)),
        ("100", Some(100.0)),
        ("100Ω", Some(100.0)),
        ("50mΩ", Some(0.05)),
        ("50mOhm", Some(0.05)),
        ("25mohm", Some(0.025)),
        ("", None),
        ("   ", None),
        ("ohm", None),
    ];

    for (input, expected) in cases {
        let got = parse_resistance(input);
        match (got, expected) {
            (Some(g), Some(e)) => assert!(close(g, e), "parse_resistance({input:?}) = {g}, expected {e}"),
            (None, None) => {}
            _ => panic!("parse_resistance({input:?}) = {got:?}, expected {expected:?}"),
        }
    }
}

#[test]
fn scalar_quantity_examples() {
    let cases: Vec<(fn(&str) -> Option<f64>, &str, f64)> = vec![
        (parse_voltage, "100V", 100.0),
        (parse_voltage, "1.5kV", 1500.0),
        (parse_voltage, "550mV", 0.55),
        (parse_forward_voltage, "1.1V@1A", 1.1),
        (parse_forward_voltage, "550mV @ 3A", 0.55),
        (parse_current, "2A", 2.0),
        (parse_current, "500mA", 0.5),
        (parse_current, "10uA", 10e-6),
        (parse_current, "10µA", 10e-6),
        (parse_power, "1/4W", 0.25),
        (parse_power, "250mW", 0.25),
        (parse_power, "1W", 1.0),
        (parse_capacitance, "100nF", 100e-9),
        (parse_capacitance, "4.7uF", 4.7e-6),
        (parse_capacitance, "10pF", 10e-12),
        (parse_capacitance, "1µF", 1e-6),
        (parse_capacitance_pf, "12.5pF", 12.5),
        (parse_capacitance_pf, "1nF", 1000.0),
        (parse_inductance, "10uH", 10e-6),
        (parse_inductance, "100nH", 100e-9),
        (parse_frequency, "8MHz", 8e6),
        (parse_frequency, "32.768kHz", 32_768.0),
        (parse_frequency, "2.4GHz", 2.4e9),
        (parse_tolerance, "±1%", 1.0),
        (parse_ppm, "±20ppm", 20.0),
        (parse_decibels, "60dB", 60.0),
        (parse_temperature, "-40℃", -40.0),
        (parse_memory, "64KB", 65_536.0),
        (parse_memory, "1MB", 1_048_576.0),
        (parse_memory, "256Kbit", 32_768.0),
        (parse_wavelength, "625nm", 625.0),
        (parse_luminosity, "120mcd", 120.0),
        (parse_length_mm, "2.54mm", 2.54),
        (parse_integer, "40 Pin", 40.0),
    ];

    for (parse, input, expected) in cases {
        let got = parse(input);
        assert!(got.is_some_and(|g| close(g, expected)), "{input:?} parsed to {got:?}, expected {expected}");
    }
}

#[test]
fn parsers_are_total() {
    let junk = ["", "abc", "1.2.3V", "/W", "1/0W", "~", "@", "ΩΩΩ", "µ", "nan", "inf"];
    let parsers: [fn(&str) -> Option<f64>; 8] = [
        parse_voltage,
        parse_current,
        parse_power,
        parse_resistance,
        parse_capacitance,
        parse_inductance,
        parse_frequency,
        parse_memory,
    ];
    for parse in parsers {
        for input in junk {
            if let Some(v) = parse(input) {
                assert!(v.is_finite(), "{input:?} produced non-finite {v}");
            }
        }
    }
    assert_eq!(parse_power("1/0W"), None);
    assert_eq!(parse_voltage("1.2.3V"), None);
}

#[test]
fn format_round_trips_through_parsers() {
    let cases: Vec<(UnitType, fn(&str) -> Option<f64>, Vec<f64>)> = vec![
        (UnitType::Resistance, parse_resistance, vec![0.05, 4.7, 100.0, 4700.0, 10_000.0, 2_200_000.0]),
        (UnitType::Capacitance, parse_capacitance, vec![10e-12, 100e-9, 4.7e-6, 1e-3]),
        (UnitType::Inductance, parse_inductance, vec![100e-9, 10e-6, 2.2e-3]),
        (UnitType::Voltage, parse_voltage, vec![0.55, 3.3, 100.0, 1500.0]),
        (UnitType::Current, parse_current, vec![10e-6, 0.5, 2.0]),
        (UnitType::Frequency, parse_frequency, vec![50.0, 32_768.0, 8e6, 2.4e9]),
        (UnitType::Power, parse_power, vec![0.1, 0.25, 1.0, 1500.0]),
        (UnitType::Tolerance, parse_tolerance, vec![0.1, 1.0, 5.0]),
        (UnitType::Pitch, parse_length_mm, vec![1.0, 1.25, 2.54]),
    ];

    for (unit, parse, values) in cases {
        for value in values {
            let text = format_quantity(value, unit);
            let back = parse(&text);
            assert!(
                back.is_some_and(|b| ((b - value) / value).abs() < 1e-6),
                "{unit:?}: {value} -> {text:?} -> {back:?}"
            );
        }
    }
    assert_eq!(format_quantity(4700.0, UnitType::Resistance), "4.7kOhm");
    assert_eq!(format_quantity(100e-9, UnitType::Capacitance), "100nF");
    assert_eq!(format_quantity(0.0, UnitType::Resistance), "0Ohm");
}

#[test]
fn ranges_are_independently_optional() {
    let temp = parse_temperature_range("-40℃~+85℃");
    assert_eq!(temp, ValueRange::new(Some(-40.0), Some(85.0)));

    let open = parse_temperature_range("~125℃");
    assert_eq!(open.min, None);
    assert_eq!(open.max, Some(125.0));

    assert!(parse_temperature_range("85℃").is_empty());
    assert_eq!(parse_vgs_range("1.5V~2.5V"), ValueRange::new(Some(1.5), Some(2.5)));
    assert_eq!(parse_vgs_range("2V"), ValueRange::point(2.0));
    assert_eq!(parse_vin_range("2.7V to 5.5V"), ValueRange::new(Some(2.7), Some(5.5)));
    assert_eq!(parse_frequency_range("2.4GHz~2.5GHz"), ValueRange::new(Some(2.4e9), Some(2.5e9)));
    assert!(parse_vgs_range("").is_empty());
}

#[test]
fn impedance_at_frequency() {
    let z = parse_impedance_at_frequency("600Ω @ 100MHz").unwrap();
    assert_eq!(z.ohms, 600.0);
    assert_eq!(z.hertz, 100e6);

    let policy = crate::TolerancePolicy::default();
    assert!(impedance_matches("600Ω @ 100MHz", "600ohm@100MHz", &policy));
    assert!(!impedance_matches("600Ω @ 100MHz", "120Ω @ 100MHz", &policy));
    assert!(!impedance_matches("600Ω @ 100MHz", "600Ω @ 1GHz", &policy));
    assert!(impedance_matches("n/a", "N/A", &policy));
}

#[test]
fn registry_lookup() {
    let rds = SpecParser::for_attribute("RDS(on)").unwrap();
    assert!(rds.scalar("30mΩ@10V").is_some_and(|v| close(v, 0.03)));

    let vgs = SpecParser::for_attribute("Gate Threshold Voltage (Vgs(th))").unwrap();
    assert!(vgs.is_range());
    assert_eq!(vgs.range("1V~2.5V"), ValueRange::new(Some(1.0), Some(2.5)));

    let bead = SpecParser::for_attribute("Impedance @ Frequency").unwrap();
    assert_eq!(bead.scalar("600Ω @ 100MHz"), Some(600.0));
    assert_eq!(bead.scalar("600Ohm"), Some(600.0));

    assert!(SpecParser::for_attribute("Temperature Coefficient").is_none());
    assert!(is_string_compared("Temperature Coefficient"));
    assert!(!is_string_compared("Resistance"));
}
