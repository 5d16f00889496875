//! Connector series and brand aliases ("JST PH", "Qwiic", "U.FL").

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::spans::collapse_whitespace;

/// A recognised connector family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConnectorSpec {
    pub brand: &'static str,
    pub series: &'static str,
    /// Contact pitch in millimetres, when the family has a single pitch.
    pub pitch_mm: Option<f64>,
    pub subcategory: &'static str,
}

const WIRE_TO_BOARD: &str = "wire to board connector";
const COAXIAL: &str = "coaxial connectors (rf)";

const fn series(brand: &'static str, series: &'static str, pitch: f64) -> ConnectorSpec {
    ConnectorSpec { brand, series, pitch_mm: Some(pitch), subcategory: WIRE_TO_BOARD }
}

const IPEX: ConnectorSpec = ConnectorSpec { brand: "I-PEX", series: "IPEX", pitch_mm: None, subcategory: COAXIAL };

const CONNECTOR_SERIES: &[(&str, ConnectorSpec)] = &[
    ("jst ph", series("JST", "PH", 2.0)),
    ("jst xh", series("JST", "XH", 2.5)),
    ("jst sh", series("JST", "SH", 1.0)),
    ("jst gh", series("JST", "GH", 1.25)),
    ("jst zh", series("JST", "ZH", 1.5)),
    ("jst eh", series("JST", "EH", 2.5)),
    ("jst vh", series("JST", "VH", 3.96)),
    ("molex picoblade", series("Molex", "PicoBlade", 1.25)),
    ("picoblade", series("Molex", "PicoBlade", 1.25)),
    ("molex micro-fit", series("Molex", "Micro-Fit", 3.0)),
    ("micro-fit", series("Molex", "Micro-Fit", 3.0)),
    ("molex mini-fit", series("Molex", "Mini-Fit", 4.2)),
    ("mini-fit", series("Molex", "Mini-Fit", 4.2)),
    ("dupont", series("Dupont", "Dupont", 2.54)),
    ("grove", series("Seeed", "Grove", 2.0)),
    ("qwiic", series("JST", "SH", 1.0)),
    ("stemma qt", series("JST", "SH", 1.0)),
    ("u.fl", IPEX),
    ("ipex", IPEX),
    ("i-pex", IPEX),
    ("ipx", IPEX),
    ("mhf", IPEX),
];

/// Phrase patterns, longest phrase first. Words inside a phrase may be
/// joined by spaces or hyphens ("jst-ph", "micro fit").
static SERIES_PATTERNS: Lazy<Vec<(Regex, ConnectorSpec)>> = Lazy::new(|| {
    longest_first!(CONNECTOR_SERIES)
        .into_iter()
        .filter_map(|phrase| {
            let spec = CONNECTOR_SERIES.iter().find(|(k, _)| *k == phrase).map(|(_, spec)| *spec)?;
            let body = phrase.split([' ', '-']).map(regex::escape).collect::<Vec<_>>().join(r"[\s-]*");
            let pattern = Regex::new(&format!(r"(?i)\b{body}\b")).expect("connector pattern must compile");
            Some((pattern, spec))
        })
        .collect()
});

/// Find the first connector family named in `text` and remove the phrase.
pub(crate) fn extract_connector(text: &str) -> (Option<ConnectorSpec>, String) {
    for (pattern, spec) in SERIES_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            let remaining = collapse_whitespace(&format!("{} {}", &text[..m.start()], &text[m.end()..]));
            return (Some(*spec), remaining);
        }
    }
    (None, text.to_string())
}

/// Rewrite spelling variants of the U.FL family to the catalog's "IPEX".
pub(crate) fn expand_connector_synonyms(text: &str) -> String {
    regex!(r"(?i)\b(?:u\.fl|mhf|i-pex|ipx)\b").replace_all(text, "IPEX").into_owned()
}

/// Words that describe what a connector carries rather than what it is.
pub(crate) const CONNECTOR_NOISE_WORDS: &[&str] = &["power", "data", "signal", "charging", "cable", "port"];
