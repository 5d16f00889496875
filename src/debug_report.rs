use partsift::{
    AlternativesReport, Component, FeeTier, MatchKind, NameKind, ParseDetails, ParsedQuery, SearchOutcome,
    SearchResults,
};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

use ansi::Palette;

fn section(title: &str, palette: &Palette) {
    println!("\n{}", palette.paint(format!("━━━ {title} ━━━"), ansi::GRAY));
}

fn field(label: &str, value: Option<String>, palette: &Palette) {
    let value = match value {
        Some(value) => palette.paint(value, ansi::GREEN),
        None => palette.dim("-"),
    };
    println!("  {:<14} {}", palette.dim(format!("{label}:")), value);
}

fn tier(fee_tier: FeeTier, palette: &Palette) -> String {
    let color = if fee_tier.is_no_fee() { ansi::GREEN } else { ansi::YELLOW };
    palette.paint(fee_tier.as_str(), color)
}

fn price(price: Option<f64>) -> String {
    price.map(|p| format!("${p:.4}")).unwrap_or_else(|| "-".to_string())
}

fn component_line(idx: usize, part: &Component, palette: &Palette) {
    println!(
        "  {} {} {} {} {}",
        palette.paint(format!("[{idx}]"), ansi::GRAY),
        palette.bold(palette.paint(&part.id, ansi::CYAN)),
        palette.paint(&part.model, ansi::BLUE),
        palette.dim("│"),
        palette.dim(&part.manufacturer),
    );
    println!(
        "      {} {}  {} {}  {} {}  {} {}",
        palette.dim("package:"),
        palette.paint(&part.package, ansi::YELLOW),
        palette.dim("stock:"),
        part.stock,
        palette.dim("price:"),
        price(part.price),
        palette.dim("tier:"),
        tier(part.fee_tier, palette),
    );
}

// --- Parse ---

pub fn print_parse(parsed: &ParsedQuery, details: &ParseDetails, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", parsed.original), ansi::CYAN)));

    section("Reading", &palette);
    print_reading(parsed, &palette);

    section("Stages", &palette);
    for stage in &details.stages {
        println!(
            "  {:<24} {:>10}  {} {}",
            palette.paint(stage.stage, ansi::BLUE),
            palette.dim(format!("{:?}", stage.duration)),
            palette.paint(format!("{} filters", stage.filters), ansi::YELLOW),
            palette.dim(format!("\"{}\"", stage.remaining)),
        );
    }

    section("Timing", &palette);
    println!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    println!();
}

fn print_reading(parsed: &ParsedQuery, palette: &Palette) {
    field("subcategory", parsed.subcategory.clone(), palette);
    field("package", parsed.package.clone(), palette);
    field("model", parsed.model_number.clone(), palette);
    field("mounting", parsed.mounting_type.map(|m| m.to_string()), palette);
    field("connector", parsed.connector.map(|c| format!("{} {}", c.brand, c.series)), palette);
    field("free text", Some(parsed.free_text.clone()).filter(|t| !t.is_empty()), palette);

    if parsed.spec_filters.is_empty() {
        println!("  {}", palette.dim("No spec filters"));
    }
    for filter in &parsed.spec_filters {
        println!("  {} {}", palette.paint("•", ansi::GRAY), palette.paint(filter.to_string(), ansi::GREEN));
    }
}

// --- Search ---

pub fn print_search(outcome: &SearchOutcome, color: bool) {
    let palette = Palette::new(color);
    match outcome {
        SearchOutcome::Found(results) => print_results(results, &palette),
        SearchOutcome::NotFound(not_found) => {
            let kind = match not_found.kind {
                NameKind::Subcategory => "subcategory",
                NameKind::Category => "category",
            };
            println!("\n{} {kind} '{}'", palette.paint("✗ Unknown", ansi::RED), not_found.name);
            if !not_found.suggestions.is_empty() {
                println!("\n{}", palette.paint("Did you mean:", ansi::YELLOW));
                for suggestion in &not_found.suggestions {
                    println!("  • {suggestion}");
                }
            }
            println!();
        }
    }
}

fn print_results(results: &SearchResults, palette: &Palette) {
    let applied = &results.filters_applied;
    section("Search", palette);
    field("query", applied.query.clone(), palette);
    field("subcategory", applied.subcategory_resolved.clone(), palette);
    field("category", applied.category_resolved.clone(), palette);
    field("packages", Some(applied.packages.join(", ")).filter(|p| !p.is_empty()), palette);
    field("manufacturer", applied.manufacturer.clone(), palette);
    field("mounting", applied.mounting.map(|m| m.to_string()), palette);
    for filter in &applied.spec_filters {
        println!("  {} {}", palette.paint("•", ansi::GRAY), palette.paint(filter.to_string(), ansi::GREEN));
    }

    section("Results", palette);
    if results.results.is_empty() {
        println!("{}", palette.dim("  No parts matched"));
    }
    for (idx, part) in results.results.iter().enumerate() {
        component_line(idx, part, palette);
    }

    section("Totals", palette);
    let tiers = &results.fee_tiers;
    println!(
        "  Matched: {}  │  basic {}  preferred {}  extended {}  │  Shown: {}",
        palette.paint(results.total.to_string(), ansi::GREEN),
        tiers.basic,
        tiers.preferred,
        tiers.extended,
        results.page_info.returned,
    );
    if results.post_filter_rejected > 0 {
        println!("  {}", palette.dim(format!("{} fetched rows failed a numeric filter", results.post_filter_rejected)));
    }
    if !results.no_fee_available {
        println!("  {}", palette.paint("No basic/preferred part matches", ansi::YELLOW));
    }
    println!();
}

// --- Alternatives ---

pub fn print_alternatives(report: &AlternativesReport, color: bool) {
    let palette = Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Alternatives for {}", report.original.id), ansi::CYAN)));
    component_line(0, &report.original, &palette);

    let kind = match report.match_kind {
        MatchKind::Verified => palette.paint("verified", ansi::GREEN),
        MatchKind::Similar => palette.paint("similar", ansi::YELLOW),
    };
    println!("\n  {} {}  {} {:?}", palette.dim("match:"), kind, palette.dim("confidence:"), report.confidence);
    if let (Some(name), Some(value)) = (&report.primary_attribute, &report.primary_value) {
        println!("  {} {name} = {value}", palette.dim("primary:"));
    }
    println!("  {}", palette.bold(&report.summary));

    section("Ranked", &palette);
    for (idx, alternative) in report.alternatives.iter().enumerate() {
        component_line(idx, &alternative.component, &palette);
        let b = alternative.breakdown;
        println!(
            "      {} {}  {}",
            palette.dim("score:"),
            palette.bold(palette.paint(alternative.score.to_string(), ansi::GREEN)),
            palette.dim(format!(
                "(tier {} stock {} package {} maker {} price {})",
                b.fee_tier, b.availability, b.package, b.same_manufacturer, b.price
            )),
        );
        if let Some(verdict) = alternative.verdict.as_ref().filter(|v| !v.fully_verified()) {
            println!("      {} {}", palette.paint("unverified:", ansi::YELLOW), verdict.specs_unparseable.join(", "));
        }
    }
    println!(
        "  {}",
        palette.dim(format!("{} rejected, {} with unverifiable specs", report.rejected, report.unverifiable))
    );

    let Some(comparison) = &report.comparison else {
        println!();
        return;
    };
    section("Comparison", &palette);
    for spec in &comparison.specs {
        println!(
            "  {:<32} {:>16}  →  {}",
            spec.name,
            spec.original.as_deref().unwrap_or("-"),
            palette.paint(spec.recommended.as_deref().unwrap_or("-"), ansi::GREEN),
        );
    }
    let savings = comparison.savings;
    println!(
        "\n  Savings per unit: {}  {}",
        palette.bold(palette.paint(format!("${:.4}", savings.total_per_unit), ansi::GREEN)),
        palette.dim(format!("(assembly fee ${:.2}, price ${:.4})", savings.assembly_fee, savings.unit_price_diff)),
    );
    println!();
}
