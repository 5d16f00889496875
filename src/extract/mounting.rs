use serde::{Deserialize, Serialize};
use std::fmt;

use super::spans::collapse_whitespace;

/// How a part attaches to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountingType {
    #[serde(rename = "SMD")]
    Smd,
    #[serde(rename = "Through Hole")]
    ThroughHole,
}

impl MountingType {
    pub fn as_str(self) -> &'static str {
        match self {
            MountingType::Smd => "SMD",
            MountingType::ThroughHole => "Through Hole",
        }
    }

    /// Parse a caller-supplied mounting name ("smd", "THT", "through hole").
    pub fn from_name(name: &str) -> Option<Self> {
        match extract_mounting_type(name) {
            (Some(mounting), rest) if rest.is_empty() => Some(mounting),
            _ => None,
        }
    }
}

impl fmt::Display for MountingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First mounting keyword in `text`; through-hole wording is checked first.
pub(crate) fn extract_mounting_type(text: &str) -> (Option<MountingType>, String) {
    let patterns = [
        (regex!(r"(?i)\b(PTH|THT|through[- ]?hole|leaded)\b"), MountingType::ThroughHole),
        (regex!(r"(?i)\b(SMD|SMT|surface[- ]?mount)\b"), MountingType::Smd),
    ];
    for (pattern, mounting) in patterns {
        if let Some(m) = pattern.find(text) {
            let remaining = collapse_whitespace(&format!("{} {}", &text[..m.start()], &text[m.end()..]));
            return (Some(mounting), remaining);
        }
    }
    (None, text.to_string())
}
