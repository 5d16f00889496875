//! Mounting type of a catalog part, from its names and package.

use crate::extract::MountingType;

const THROUGH_HOLE_WORDING: &[&str] = &["THROUGH HOLE", "THROUGH-HOLE"];
const SMD_WORDING: &[&str] = &["SMD", "SMT", "SURFACE MOUNT"];

/// Package fragments of through-hole parts. Checked before [`SMD_PACKAGES`]
/// so "TO-220" is not caught by a shorter SMD fragment.
const THROUGH_HOLE_PACKAGES: &[&str] = &[
    "DIP", "SIP", "TO-92", "TO-126", "TO-220", "TO-247", "TO-264", "TO-3", "DO-41", "DO-35", "DO-201", "DO-15",
    "DO-27", "R-1", "R-6", "PIN", "THT", "AXIAL", "RADIAL", "PLUGIN", "P=", "HC-49", "HC-50", "HC-51", "HC-52",
    "THROUGH HOLE", "THROUGH-HOLE", "PUSH-PULL", "KBP", "KBL", "KBU", "MBS", "GBU", "DBS", "GBJ", "BR-", "插件",
    "弯插", "直插",
];

const SMD_PACKAGES: &[&str] = &[
    "0201", "0402", "0603", "0805", "1206", "1210", "1812", "2010", "2512", "01005", "SOT", "SOD", "SOP", "SOIC",
    "SSOP", "TSSOP", "TSOP", "MSOP", "SO-", "QFP", "QFN", "DFN", "MLF", "SON", "BGA", "CSP", "LGA", "PLCC", "TO-252",
    "TO-263", "TO-277", "DPAK", "D2PAK", "DO-214", "DO-218", "SMA", "SMB", "SMC", "SC-70", "SC-88", "SC-89", "LL-34",
    "LL-41", "MELF", "MC-306", "MC-146", "DT-26", "DT-38",
];

fn wording(name: &str) -> Option<MountingType> {
    let upper = name.to_uppercase();
    if THROUGH_HOLE_WORDING.iter().any(|w| upper.contains(w)) {
        Some(MountingType::ThroughHole)
    } else if SMD_WORDING.iter().any(|w| upper.contains(w)) {
        Some(MountingType::Smd)
    } else {
        None
    }
}

/// Best guess from subcategory name, then category name, then package.
/// `None` when nothing gives it away.
pub(crate) fn detect_mounting(
    package: &str,
    category: Option<&str>,
    subcategory: Option<&str>,
) -> Option<MountingType> {
    if let Some(found) = subcategory.and_then(wording).or_else(|| category.and_then(wording)) {
        return Some(found);
    }

    let upper = package.to_uppercase();
    if upper.is_empty() {
        return None;
    }
    if upper.contains("SMD") || upper.contains("SMT") {
        return Some(MountingType::Smd);
    }
    if THROUGH_HOLE_PACKAGES.iter().any(|p| upper.contains(p)) {
        return Some(MountingType::ThroughHole);
    }
    if SMD_PACKAGES.iter().any(|p| upper.contains(p)) || upper.starts_with(|c: char| c.is_ascii_digit()) {
        return Some(MountingType::Smd);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_before_package() {
        let cases: Vec<(&str, Option<&str>, Option<&str>, Option<MountingType>)> = vec![
            ("0603", None, Some("Chip Resistor - Surface Mount"), Some(MountingType::Smd)),
            ("Axial", None, Some("Through Hole Resistors"), Some(MountingType::ThroughHole)),
            ("TO-220-3", None, None, Some(MountingType::ThroughHole)),
            ("SOT-23", None, None, Some(MountingType::Smd)),
            ("DIP-8", None, None, Some(MountingType::ThroughHole)),
            ("Plugin,P=2.54mm", None, None, Some(MountingType::ThroughHole)),
            ("1x4P", None, None, Some(MountingType::Smd)),
            ("Module", None, None, None),
            ("", None, None, None),
        ];
        for (package, category, subcategory, expected) in cases {
            assert_eq!(detect_mounting(package, category, subcategory), expected, "mounting for {package:?}");
        }
    }
}
