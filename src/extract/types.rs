//! Component-type detection.
//!
//! ```text
//! "n-channel mosfet 30V" ── extract_channel ──> Type = N-Channel, implies "mosfets"
//!        "mosfet 30V"    ── extract_component_type ──> "mosfets" (keyword "mosfet")
//!                30V     ── left for the value extractor
//! ```
//!
//! Keywords match on word boundaries only ("led" never fires inside
//! "leaded") and are tried longest first, so "schottky diode" wins over
//! "diode". Every occurrence of the winning keyword is removed.

use super::aliases::{ALIAS_LOOKUP, KEYWORDS_LONGEST_FIRST};
use super::spans::{collapse_whitespace, cut_ranges, word_occurrences};
use crate::extract::MountingType;

/// The component-type keyword found in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TypeMatch {
    pub subcategory: &'static str,
    pub keyword: &'static str,
}

/// A channel or polarity word ("n-channel", "pnp") and what it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChannelMatch {
    /// Value for the `Type` attribute.
    pub type_value: &'static str,
    pub implied_subcategory: &'static str,
}

pub(crate) const MOSFETS: &str = "mosfets";
pub(crate) const BJTS: &str = "bipolar (bjt)";
pub(crate) const CHIP_RESISTORS: &str = "chip resistor - surface mount";
pub(crate) const POTENTIOMETERS: &str = "potentiometers, variable resistors";
const ELECTROLYTIC_SMD: &str = "aluminum electrolytic capacitors - smd";
const ELECTROLYTIC_LEADED: &str = "aluminum electrolytic capacitors - leaded";

/// Find and remove the first channel/polarity word.
pub(crate) fn extract_channel(text: &str) -> (Option<ChannelMatch>, String) {
    let patterns = [
        (regex!(r"(?i)\b(?:n[- ]?channel|nmos)\b"), ChannelMatch { type_value: "N-Channel", implied_subcategory: MOSFETS }),
        (regex!(r"(?i)\b(?:p[- ]?channel|pmos)\b"), ChannelMatch { type_value: "P-Channel", implied_subcategory: MOSFETS }),
        (regex!(r"(?i)\bnpn\b"), ChannelMatch { type_value: "NPN", implied_subcategory: BJTS }),
        (regex!(r"(?i)\bpnp\b"), ChannelMatch { type_value: "PNP", implied_subcategory: BJTS }),
    ];
    for (pattern, channel) in patterns {
        if pattern.is_match(text) {
            return (Some(channel), collapse_whitespace(&pattern.replace_all(text, " ")));
        }
    }
    (None, text.to_string())
}

/// Find the longest component-type keyword in `text` and remove it.
pub(crate) fn extract_component_type(text: &str) -> (Option<TypeMatch>, String) {
    let lower = text.to_ascii_lowercase();
    for keyword in KEYWORDS_LONGEST_FIRST.iter() {
        let spans = word_occurrences(&lower, keyword);
        if spans.is_empty() {
            continue;
        }
        let Some(subcategory) = ALIAS_LOOKUP.get(keyword) else { continue };
        let found = TypeMatch { subcategory: *subcategory, keyword: *keyword };
        return (Some(found), cut_ranges(text, &spans));
    }
    (None, text.to_string())
}

/// An electrolytic capacitor asked for with radial or through-hole wording
/// lives in the leaded subcategory.
///
/// Returns the new subcategory and the text with the modifier removed.
pub(crate) fn redirect_electrolytic(
    subcategory: &str,
    text: &str,
    mounting: Option<MountingType>,
) -> Option<(&'static str, String)> {
    if subcategory != ELECTROLYTIC_SMD {
        return None;
    }
    let modifier = regex!(r"(?i)\b(?:radial|through.?hole|pth|leaded)\b");
    if modifier.is_match(text) {
        return Some((ELECTROLYTIC_LEADED, collapse_whitespace(&modifier.replace_all(text, " "))));
    }
    (mounting == Some(MountingType::ThroughHole)).then(|| (ELECTROLYTIC_LEADED, text.to_string()))
}

/// Trimmer wording left after a resistor guess switches to potentiometers.
pub(crate) fn redirect_potentiometer(subcategory: Option<&str>, text: &str) -> Option<(&'static str, String)> {
    if subcategory.is_some_and(|s| s != CHIP_RESISTORS) {
        return None;
    }
    let wording = regex!(r"(?i)\b(?:trimmer|potentiometer|trimpot|variable\s*resistor)\b");
    wording.is_match(text).then(|| (POTENTIOMETERS, collapse_whitespace(&wording.replace_all(text, " "))))
}

/// Subcategories whose catalog entries carry little attribute data; values
/// found in their queries go to free text instead of spec filters.
pub(crate) fn is_connector_subcategory(subcategory: &str) -> bool {
    ["connector", "header", "terminal", "socket", "jumper"].iter().any(|word| subcategory.contains(word))
}
