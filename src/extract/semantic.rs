//! Descriptive phrases that imply spec filters ("logic level", "x7r",
//! "bidirectional") and the noise words dropped before free-text search.

use once_cell::sync::Lazy;

use super::spans::{cut_ranges, word_occurrences};
use crate::compile::{Operator, SpecFilter};

type Descriptor = (&'static str, Operator, &'static str);

const SEMANTIC_DESCRIPTORS: &[(&str, Descriptor)] = &[
    // MOSFET threshold and on-resistance
    ("low vgs", ("Vgs(th)", Operator::Lt, "2.5V")),
    ("low vgs(th)", ("Vgs(th)", Operator::Lt, "2.5V")),
    ("logic level", ("Vgs(th)", Operator::Lt, "2.5V")),
    ("logic-level", ("Vgs(th)", Operator::Lt, "2.5V")),
    ("low threshold", ("Vgs(th)", Operator::Lt, "2.5V")),
    ("low rds", ("RDS(on)", Operator::Lt, "50mOhm")),
    ("low rds(on)", ("RDS(on)", Operator::Lt, "50mOhm")),
    ("low on-resistance", ("RDS(on)", Operator::Lt, "50mOhm")),
    // TVS polarity
    ("bidirectional", ("Polarity", Operator::Eq, "Bidirectional")),
    ("unidirectional", ("Polarity", Operator::Eq, "Unidirectional")),
    // Interfaces
    ("i2c", ("Interface", Operator::Eq, "I2C")),
    ("spi", ("Interface", Operator::Eq, "SPI")),
    ("uart", ("Interface", Operator::Eq, "UART")),
    ("i2s", ("Interface", Operator::Eq, "I2S")),
    ("can", ("Interface", Operator::Eq, "CAN")),
    ("rs485", ("Interface", Operator::Eq, "RS485")),
    ("rs232", ("Interface", Operator::Eq, "RS232")),
    ("1-wire", ("Interface", Operator::Eq, "Single-bus")),
    ("one-wire", ("Interface", Operator::Eq, "Single-bus")),
    ("single-bus", ("Interface", Operator::Eq, "Single-bus")),
    // Channel and BJT type
    ("n-channel", ("Type", Operator::Eq, "N-Channel")),
    ("p-channel", ("Type", Operator::Eq, "P-Channel")),
    ("n channel", ("Type", Operator::Eq, "N-Channel")),
    ("p channel", ("Type", Operator::Eq, "P-Channel")),
    ("nmos", ("Type", Operator::Eq, "N-Channel")),
    ("pmos", ("Type", Operator::Eq, "P-Channel")),
    ("npn", ("Type", Operator::Eq, "NPN")),
    ("pnp", ("Type", Operator::Eq, "PNP")),
    // LED colour
    ("red", ("Illumination Color", Operator::Eq, "Red")),
    ("green", ("Illumination Color", Operator::Eq, "Green")),
    ("blue", ("Illumination Color", Operator::Eq, "Blue")),
    ("yellow", ("Illumination Color", Operator::Eq, "Yellow")),
    ("white", ("Illumination Color", Operator::Eq, "White")),
    ("orange", ("Illumination Color", Operator::Eq, "Orange")),
    ("amber", ("Illumination Color", Operator::Eq, "Amber")),
    // Capacitor dielectrics
    ("c0g", ("Temperature Coefficient", Operator::Eq, "C0G")),
    ("np0", ("Temperature Coefficient", Operator::Eq, "NP0")),
    ("x5r", ("Temperature Coefficient", Operator::Eq, "X5R")),
    ("x7r", ("Temperature Coefficient", Operator::Eq, "X7R")),
    ("x5s", ("Temperature Coefficient", Operator::Eq, "X5S")),
    ("x6s", ("Temperature Coefficient", Operator::Eq, "X6S")),
    ("x7s", ("Temperature Coefficient", Operator::Eq, "X7S")),
    ("y5v", ("Temperature Coefficient", Operator::Eq, "Y5V")),
    ("z5u", ("Temperature Coefficient", Operator::Eq, "Z5U")),
    // Regulator output
    ("fixed", ("Output Type", Operator::Eq, "Fixed")),
    ("adjustable", ("Output Type", Operator::Eq, "Adjustable")),
    ("variable", ("Output Type", Operator::Eq, "Adjustable")),
    // Precision
    ("precision", ("Tolerance", Operator::Le, "0.1%")),
    ("high precision", ("Tolerance", Operator::Le, "0.05%")),
];

static DESCRIPTORS_LONGEST_FIRST: Lazy<Vec<(&'static str, Descriptor)>> = Lazy::new(|| {
    longest_first!(SEMANTIC_DESCRIPTORS)
        .into_iter()
        .filter_map(|phrase| SEMANTIC_DESCRIPTORS.iter().find(|(k, _)| *k == phrase).copied())
        .collect()
});

/// A filter implied by a descriptive phrase, with the phrase that produced it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SemanticHit {
    pub phrase: &'static str,
    pub filter: SpecFilter,
}

/// Match every descriptor phrase in `text`, longest phrase first, removing
/// each one so shorter phrases cannot fire on its remains.
pub(crate) fn extract_semantic_descriptors(text: &str) -> (Vec<SemanticHit>, String) {
    let mut hits = Vec::new();
    let mut remaining = text.to_string();
    for (phrase, (attribute, operator, value)) in DESCRIPTORS_LONGEST_FIRST.iter() {
        let spans = word_occurrences(&remaining.to_ascii_lowercase(), phrase);
        if spans.is_empty() {
            continue;
        }
        hits.push(SemanticHit { phrase: *phrase, filter: SpecFilter::new(*attribute, *operator, *value) });
        remaining = cut_ranges(&remaining, &spans);
    }
    (hits, remaining)
}

// --- Noise words -------------------------------------------------------------

const NOISE_WORDS: &[&str] = &[
    "for", "with", "and", "or", "the", "a", "an", "to", "in", "of", "type", "chip", "component", "part", "parts",
    "electronic", "electronics", "antenna", "receptacle", "jack", "plug",
];

/// Drop filler words (and any `extra` words) from `text`, case-insensitively.
pub(crate) fn remove_noise_words(text: &str, extra: &[&str]) -> String {
    text.split_whitespace()
        .filter(|word| {
            let lower = word.to_lowercase();
            !NOISE_WORDS.contains(&lower.as_str()) && !extra.contains(&lower.as_str())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
