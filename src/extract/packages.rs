//! Package / footprint detection.

use once_cell::sync::Lazy;
use regex::Regex;

use super::spans::collapse_whitespace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PackageKind {
    Imperial,
    SmdMetric,
    Metric,
    Sot,
    Sod,
    DiodeOutline,
    TransistorOutline,
    Qfn,
    Qfp,
    Bga,
    Csp,
    Dip,
    Tssop,
    Sop,
    So,
    Module,
    DiodeSmx,
    DiodeMxx,
    Usb,
}

/// Package patterns, tried in order; the first pattern with a match wins.
///
/// TSSOP-style names precede SOP, and bare "SO-8" comes after both, so the
/// longer families are never truncated.
static PACKAGE_PATTERNS: Lazy<Vec<(Regex, PackageKind)>> = Lazy::new(|| {
    let table: &[(&str, PackageKind)] = &[
        (r"\b(01005|0201|0402|0603|0805|1206|1210|1812|2010|2512)\b", PackageKind::Imperial),
        (
            r"\b(1610|1612|2012|2016|2520|2835|3014|3020|3030|3215|3225|3528|3535|5032|5050|5730|6035|7050|7060|8045|8080|9070)\b",
            PackageKind::SmdMetric,
        ),
        (r"(?i)\b(0402M|0603M|0805M|1206M)\b", PackageKind::Metric),
        (
            r"(?i)\b(SOT-?23(?:-\d+)?L?|SOT-?89(?:-\d+)?|SOT-?223(?:-\d+)?|SOT-?323(?:-\d+)?|SOT-?363(?:-\d+)?|SOT-?523(?:-\d+)?|SOT-?723(?:-\d+)?)\b",
            PackageKind::Sot,
        ),
        (r"(?i)\b(SOD-?(?:123FL|323FL|123|323|523|923|128|882|80|110))\b", PackageKind::Sod),
        (r"(?i)\b(DO-?(?:35|41|201|204|214|215|218|219|220)(?:AA|AB|AC|AD|AE|AF|AG)?)\b", PackageKind::DiodeOutline),
        (
            r"(?i)\b(TO-?92(?:S|L)?|TO-?220(?:F|FP|AB)?(?:-\d+)?|TO-?252(?:-\d+)?|TO-?263(?:-\d+)?|TO-?247(?:-\d+)?|TO-?251|TO-?3P(?:F)?|DPAK|D2PAK|D3PAK)\b",
            PackageKind::TransistorOutline,
        ),
        (
            r"(?i)\b((?:V)?QFN-?\d+(?:-EP)?(?:\([^)]+\))?|DFN-?\d+(?:-EP)?(?:\([^)]+\))?|WQFN-?\d+|TQFN-?\d+|UQFN-?\d+)\b",
            PackageKind::Qfn,
        ),
        (r"(?i)\b((?:L|T|H|PQ)?QFP-?\d+(?:\([^)]+\))?)\b", PackageKind::Qfp),
        (r"(?i)\b((?:FC|W|T|M|U|P|F)?BGA-?\d+(?:\([^)]+\))?)\b", PackageKind::Bga),
        (r"(?i)\b((?:WL|LF|U|FC|V)?CSP-?\d+(?:-EP)?(?:\([^)]+\))?)\b", PackageKind::Csp),
        (r"(?i)\b((?:P|S|SK|C)?DIP-?\d+(?:\([^)]+\))?|SIP-?\d+)\b", PackageKind::Dip),
        (r"(?i)\b(TSSOP-?\d+|SSOP-?\d+|MSOP-?\d+|QSOP-?\d+|HTSSOP-?\d+|VSSOP-?\d+)\b", PackageKind::Tssop),
        (r"(?i)\b(SOP-?\d+(?:-\d+)?(?:\([^)]+\))?|SOIC-?\d+(?:-\d+)?(?:\([^)]+\))?)\b", PackageKind::Sop),
        (r"(?i)\b(SO-?\d+)\b", PackageKind::So),
        (r"(?i)\b(SMD-?\d+|LGA-?\d+)\b", PackageKind::Module),
        (r"(?i)\b(SM[ABC])\b", PackageKind::DiodeSmx),
        (r"(?i)\b(M[478])\b", PackageKind::DiodeMxx),
        (r"(?i)\b(USB-?[ABC]|TYPE-?[ABC]|MICRO-?USB|MINI-?USB)\b", PackageKind::Usb),
    ];
    table
        .iter()
        .map(|(pattern, kind)| (Regex::new(pattern).expect("package pattern must compile"), *kind))
        .collect()
});

/// What the package stage found.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct PackageHit {
    /// Canonical package name ("SOT-23", "0603", "SMA").
    pub package: Option<String>,
    /// Subcategory implied by the package itself (USB receptacles).
    pub suggested_subcategory: Option<&'static str>,
}

/// Find the first package designator in `text`.
///
/// USB designators are not catalog package names (a USB-C receptacle is
/// listed as "SMD"); they suggest the USB connector subcategory instead and
/// stay in the text for free-text search.
pub(crate) fn extract_package(text: &str) -> (PackageHit, String) {
    for (pattern, kind) in PACKAGE_PATTERNS.iter() {
        let Some(m) = first_match(pattern, *kind, text) else { continue };

        if *kind == PackageKind::Usb {
            let hit = PackageHit { package: None, suggested_subcategory: Some("usb connectors") };
            return (hit, text.to_string());
        }

        let mut package = canonical_package(m.as_str());
        if *kind == PackageKind::DiodeMxx {
            package = match package.as_str() {
                "M8" => "SMB".to_string(),
                _ => "SMA".to_string(),
            };
        }
        let remaining = collapse_whitespace(&format!("{} {}", &text[..m.start()], &text[m.end()..]));
        return (PackageHit { package: Some(package), suggested_subcategory: None }, remaining);
    }
    (PackageHit::default(), text.to_string())
}

/// First match of `pattern`, skipping "SMA connector"-style hits for the
/// SMx diode packages.
fn first_match<'t>(pattern: &Regex, kind: PackageKind, text: &'t str) -> Option<regex::Match<'t>> {
    if kind != PackageKind::DiodeSmx {
        return pattern.find(text);
    }
    pattern.find_iter(text).find(|m| !text[m.end()..].trim_start().to_ascii_lowercase().starts_with("connector"))
}

/// Uppercase and restore the hyphen vendors often drop ("sot23" -> "SOT-23").
pub(crate) fn canonical_package(raw: &str) -> String {
    let upper = raw.to_uppercase();
    let upper = regex!(r"SOT(\d)").replace_all(&upper, "SOT-$1");
    let upper = regex!(r"SOD(\d)").replace_all(&upper, "SOD-$1");
    regex!(r"\bTO(\d)").replace_all(&upper, "TO-$1").into_owned()
}
