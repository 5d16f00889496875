//! Package families and manufacturer aliases.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A package name and the catalog spellings of the same footprint.
const PACKAGE_FAMILIES: &[(&str, &[&str])] = &[
    // Imperial chip sizes and their metric names
    ("0402", &["0402", "1005"]),
    ("0603", &["0603", "1608"]),
    ("0805", &["0805", "2012"]),
    ("1206", &["1206", "3216"]),
    ("sot-23", &["SOT-23", "SOT-23-3", "SOT-23-3L", "SOT-23(TO-236)"]),
    ("sot-23-5", &["SOT-23-5", "SOT-23-5L"]),
    ("sot-23-6", &["SOT-23-6", "SOT-23-6L"]),
    ("sot-223", &["SOT-223", "SOT-223-3", "SOT-223-3L", "SOT-223-4"]),
    ("sot-89", &["SOT-89", "SOT-89-3", "SOT-89-3L"]),
    ("to-252", &["TO-252", "TO-252-2", "TO-252-2L", "DPAK"]),
    ("to-263", &["TO-263", "TO-263-2", "D2PAK"]),
    ("to-220", &["TO-220", "TO-220-3", "TO-220F", "TO-220F-3"]),
    ("qfn-16", &["QFN-16", "QFN-16-EP(3x3)", "QFN-16-EP(4x4)", "QFN-16(3x3)", "VQFN-16"]),
    ("qfn-24", &["QFN-24", "QFN-24-EP(4x4)", "VQFN-24", "VQFN-24-EP(4x4)"]),
    ("qfn-32", &["QFN-32", "QFN-32-EP(5x5)", "VQFN-32", "VQFN-32-EP(5x5)"]),
];

/// Four-digit imperial sizes; a bare number in this set is a chip size,
/// not an SMD module footprint.
const IMPERIAL_CHIP_SIZES: &[&str] = &[
    "01005", "0201", "03015", "0402", "0603", "0612", "0805", "0806", "1008", "1206", "1210", "1212", "1218", "1806",
    "1808", "1812", "2010", "2220", "2410", "2512", "2920", "3920", "5930",
];

/// Metric SMD footprints of crystals, oscillators and LEDs ("3215" is
/// 3.2 x 1.5 mm).
const SMD_FAMILIES: &[(&str, &[&str])] = &[
    ("1610", &["SMD1610", "SMD1610-2P"]),
    ("1612", &["SMD1612-4P"]),
    ("2012", &["SMD2012-2P", "SMD2012-4P", "SMD2012-8P"]),
    ("2016", &["SMD2016", "SMD2016-2P", "SMD2016-4P", "SMD2016-6P"]),
    ("2520", &["SMD2520", "SMD2520-2P", "SMD2520-4P", "SMD2520-6P"]),
    ("2835", &["SMD2835", "SMD2835-2P", "SMD2835-3P", "SMD2835-4P", "SMD2835-6P"]),
    ("3014", &["SMD3014-2P"]),
    ("3020", &["SMD3020", "SMD3020-3P"]),
    ("3030", &["SMD3030", "SMD3030-2P", "SMD3030-3P", "SMD3030-4P", "SMD3030-6P", "SMD3030-7P"]),
    ("3215", &["SMD3215", "SMD3215-2P", "SMD3215-4P", "SMD3215-8P"]),
    ("3225", &["SMD3225", "SMD3225-2P", "SMD3225-4P", "SMD3225-6P", "SMD3225-10P", "SMD3225-14P", "SMD-3225_4P"]),
    ("3528", &["SMD3528", "SMD3528-2P", "SMD3528-3P", "SMD3528-4P", "SMD3528-6P"]),
    ("3535", &["SMD3535", "SMD3535-2P", "SMD3535-3P", "SMD3535-4P", "SMD3535-5P", "SMD3535-6P"]),
    ("5032", &["SMD5032", "SMD5032-2P", "SMD5032-4P", "SMD5032-6P", "SMD-5032-4P"]),
    ("5050", &["SMD5050", "SMD5050-2P", "SMD5050-4P", "SMD5050-6P", "SMD5050-8P"]),
    ("5730", &["SMD5730", "SMD5730-3P"]),
    ("6035", &["SMD6035-2P", "SMD6035-4P"]),
    ("7050", &["SMD7050", "SMD7050-2P", "SMD7050-4P", "SMD7050-6P", "SMD7050-10P"]),
    ("7060", &["SMD7060", "SMD7060-2P", "SMD7060-3P"]),
    ("8045", &["SMD8045-2P"]),
    ("8080", &["SMD8080-2P", "SMD8080-3P", "SMD8080-4P", "SMD8080-5P", "SMD8080-6P"]),
    ("9070", &["SMD9070-8P"]),
];

static FAMILIES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| PACKAGE_FAMILIES.iter().copied().collect());
static SMD: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| SMD_FAMILIES.iter().copied().collect());

/// Every catalog spelling of `package`.
///
/// `"0603"` -> `["0603", "1608"]`, `"3215"` and `"smd-3215"` -> the SMD3215
/// variants. Anything specific ("QFN-24-EP(4x4)") stays as given.
pub fn expand_package(package: &str) -> Vec<String> {
    let lower = package.trim().to_lowercase();
    let owned = |list: &[&str]| -> Vec<String> { list.iter().map(|p| p.to_string()).collect() };

    if let Some(family) = FAMILIES.get(lower.as_str()) {
        return owned(*family);
    }
    if regex!(r"^\d{4}$").is_match(&lower) && !IMPERIAL_CHIP_SIZES.contains(&lower.as_str()) {
        if let Some(family) = SMD.get(lower.as_str()) {
            return owned(*family);
        }
    }
    if let Some(caps) = regex!(r"^smd-?(\d{4,5})(?:-\d+p)?$").captures(&lower) {
        if let Some(family) = SMD.get(&caps[1]) {
            return owned(*family);
        }
    }
    vec![package.trim().to_string()]
}

// --- Manufacturers -------------------------------------------------------------

const KNOWN_MANUFACTURERS: &[&str] = &[
    "YAGEO", "Samsung Electro-Mechanics", "Murata Electronics", "TDK Corporation", "Panasonic", "Wurth Elektronik",
    "Bourns", "Littelfuse", "KEMET", "UNI-ROYAL(Uniroyal Elec)", "FH (Guangdong Fenghua Advanced Tech)", "FOJAN",
    "Sunlord", "Texas Instruments", "STMicroelectronics", "NXP Semicon", "Microchip Tech", "Analog Devices",
    "Analog Devices Inc./Maxim Integrated", "onsemi", "Infineon Technologies", "Infineon/Cypress Semicon",
    "Renesas Electronics", "ROHM Semicon", "Vishay Intertech", "Diodes Incorporated", "Nexperia", "Torex Semicon",
    "TOSHIBA", "SGMICRO", "XLSEMI", "GOFORD", "3PEAK", "Wuxi NCE Power Semiconductor", "Advanced Monolithic Systems",
    "HXY MOSFET", "Alpha & Omega Semicon", "JSMSEMI", "MSKSEMI", "GigaDevice Semicon Beijing",
    "WCH(Jiangsu Qin Heng)", "Espressif Systems", "Nordic Semicon", "Raspberry Pi", "Everlight Elec", "Worldsemi",
    "XINGLIGHT", "Kingbright", "JST", "MOLEX", "HANRUN(Zhongshan HanRun Elec)", "SHOU HAN", "TE Connectivity",
    "BOOMELE(Boom Precision Elec)", "YXC Crystal Oscillators", "Winbond Elec", "Richtek Tech", "Sensirion",
    "ShangHai Consonance Elec", "Jiangsu Changjing Electronics Technology Co., Ltd.", "UTC(Unisonic Tech)",
];

/// Abbreviations and alternate names, lowercase.
const MANUFACTURER_ALIASES: &[(&str, &str)] = &[
    ("ti", "Texas Instruments"),
    ("texas", "Texas Instruments"),
    ("st", "STMicroelectronics"),
    ("stm", "STMicroelectronics"),
    ("stmicro", "STMicroelectronics"),
    ("nxp", "NXP Semicon"),
    ("nxp semiconductor", "NXP Semicon"),
    ("microchip", "Microchip Tech"),
    ("microchip technology", "Microchip Tech"),
    ("adi", "Analog Devices"),
    ("analog", "Analog Devices"),
    ("maxim", "Analog Devices Inc./Maxim Integrated"),
    ("maxim integrated", "Analog Devices Inc./Maxim Integrated"),
    ("on", "onsemi"),
    ("on semi", "onsemi"),
    ("on semiconductor", "onsemi"),
    ("infineon", "Infineon Technologies"),
    ("cypress", "Infineon/Cypress Semicon"),
    ("renesas", "Renesas Electronics"),
    ("rohm", "ROHM Semicon"),
    ("rohm semiconductor", "ROHM Semicon"),
    ("vishay", "Vishay Intertech"),
    ("vishay intertechnology", "Vishay Intertech"),
    ("diodes", "Diodes Incorporated"),
    ("diodes inc", "Diodes Incorporated"),
    ("torex", "Torex Semicon"),
    ("fh", "FH (Guangdong Fenghua Advanced Tech)"),
    ("fenghua", "FH (Guangdong Fenghua Advanced Tech)"),
    ("uniroyal", "UNI-ROYAL(Uniroyal Elec)"),
    ("uni-royal", "UNI-ROYAL(Uniroyal Elec)"),
    ("changjing", "Jiangsu Changjing Electronics Technology Co., Ltd."),
    ("jscj", "Jiangsu Changjing Electronics Technology Co., Ltd."),
    ("boomele", "BOOMELE(Boom Precision Elec)"),
    ("hxy", "HXY MOSFET"),
    ("utc", "UTC(Unisonic Tech)"),
    ("sg micro", "SGMICRO"),
    ("xl semiconductor", "XLSEMI"),
    ("nce", "Wuxi NCE Power Semiconductor"),
    ("nce power", "Wuxi NCE Power Semiconductor"),
    ("goford semiconductor", "GOFORD"),
    ("threepeak", "3PEAK"),
    ("ams", "Advanced Monolithic Systems"),
    ("aos", "Alpha & Omega Semicon"),
    ("alpha omega", "Alpha & Omega Semicon"),
    ("jsm", "JSMSEMI"),
    ("msk", "MSKSEMI"),
    ("gd", "GigaDevice Semicon Beijing"),
    ("gigadevice", "GigaDevice Semicon Beijing"),
    ("wch", "WCH(Jiangsu Qin Heng)"),
    ("qinheng", "WCH(Jiangsu Qin Heng)"),
    ("ch32", "WCH(Jiangsu Qin Heng)"),
    ("espressif", "Espressif Systems"),
    ("nordic", "Nordic Semicon"),
    ("murata", "Murata Electronics"),
    ("samsung", "Samsung Electro-Mechanics"),
    ("tdk", "TDK Corporation"),
    ("wurth", "Wurth Elektronik"),
    ("hanrun", "HANRUN(Zhongshan HanRun Elec)"),
    ("te", "TE Connectivity"),
    ("yxc", "YXC Crystal Oscillators"),
    ("winbond", "Winbond Elec"),
    ("richtek", "Richtek Tech"),
    ("consonance", "ShangHai Consonance Elec"),
];

static MANUFACTURERS: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    KNOWN_MANUFACTURERS
        .iter()
        .map(|name| (name.to_lowercase(), *name))
        .chain(MANUFACTURER_ALIASES.iter().map(|(alias, name)| (alias.to_string(), *name)))
        .collect()
});

/// Catalog spelling of a manufacturer name (`"ti"` -> `"Texas
/// Instruments"`). Unknown names come back trimmed; the store compares
/// case-insensitively.
pub fn resolve_manufacturer(name: &str) -> String {
    let trimmed = name.trim();
    MANUFACTURERS.get(&trimmed.to_lowercase()).map_or_else(|| trimmed.to_string(), |exact| exact.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_expansion() {
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("0603", vec!["0603", "1608"]),
            ("SOT-23", vec!["SOT-23", "SOT-23-3", "SOT-23-3L", "SOT-23(TO-236)"]),
            ("3215", vec!["SMD3215", "SMD3215-2P", "SMD3215-4P", "SMD3215-8P"]),
            ("smd-5050", vec!["SMD5050", "SMD5050-2P", "SMD5050-4P", "SMD5050-6P", "SMD5050-8P"]),
            ("SMD3215-2P", vec!["SMD3215", "SMD3215-2P", "SMD3215-4P", "SMD3215-8P"]),
            ("1210", vec!["1210"]),
            ("QFN-24-EP(4x4)", vec!["QFN-24-EP(4x4)"]),
        ];
        for (package, expected) in cases {
            assert_eq!(expand_package(package), expected, "family of {package:?}");
        }
    }

    #[test]
    fn manufacturer_resolution() {
        let cases: Vec<(&str, &str)> = vec![
            ("TI", "Texas Instruments"),
            ("texas instruments", "Texas Instruments"),
            ("on semi", "onsemi"),
            ("yageo", "YAGEO"),
            ("Some Unknown Fab ", "Some Unknown Fab"),
        ];
        for (name, expected) in cases {
            assert_eq!(resolve_manufacturer(name), expected, "manufacturer {name:?}");
        }
    }
}
