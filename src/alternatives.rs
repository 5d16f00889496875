//! Alternative-part ranking.
//!
//! Given an original part and a pool of parts from the same subcategory,
//! keep the ones that are drop-in compatible and rank them, preferring
//! parts without an assembly fee.
//!
//! ```text
//! pool ── exclude original / other subcategories / package / fee tier
//!   │
//!   ├── RuleBook::get(subcategory) ── none ──> every part, "similar", low confidence
//!   │
//!   ├── verify(original, candidate, rule) ── incompatible ──> rejected
//!   │
//!   ├── score (fee tier, stock, package, manufacturer, price)
//!   │
//!   └── top_k ──> AlternativesReport { alternatives, comparison, savings }
//! ```
//!
//! ## Responsibilities by module
//! - `rules`: the compatibility rule table, keyed by subcategory name.
//! - `verdict`: spec-by-spec checks of one candidate against a rule.
//! - `scoring`: the ranking rubric and bounded top-K selection.
//! - `report`: report, options and savings types.

#[path = "alternatives/report.rs"]
mod report;
#[path = "alternatives/rules.rs"]
mod rules;
#[path = "alternatives/scoring.rs"]
mod scoring;
#[path = "alternatives/verdict.rs"]
mod verdict;


pub use report::{AlternativesOptions, AlternativesReport, Comparison, Confidence, MatchKind, Savings, ScoredAlternative, SpecComparison};
pub use rules::{CompatibilityRule, Direction, RuleBook};
pub use scoring::ScoreBreakdown;
pub use verdict::{CompatibilityVerdict, verify};

use crate::search::Component;
use tracing::debug;

/// Package with any tantalum case height suffix removed, uppercase.
fn package_key(package: &str) -> String {
    regex!(r"-\d+(?:\.\d+)?\(mm\)$").replace(package.trim(), "").to_uppercase()
}

fn summary(original: &Component, match_kind: MatchKind, alternatives: &[ScoredAlternative], primary: Option<&str>) -> String {
    if match_kind == MatchKind::Similar {
        return "No compatibility rules for this category. Showing similar parts for manual comparison.".to_string();
    }
    if original.fee_tier.is_no_fee() {
        return "Original part is already basic/preferred - no assembly fee savings possible".to_string();
    }
    if alternatives.is_empty() {
        return match primary {
            Some(value) => format!("No compatible alternatives found matching {value}"),
            None => "No compatible alternatives found".to_string(),
        };
    }
    let no_fee = alternatives.iter().filter(|a| a.component.fee_tier.is_no_fee()).count();
    if no_fee > 0 {
        format!("Found {no_fee} basic/preferred alternative(s) that avoid the assembly fee")
    } else {
        format!("Found {} alternative(s), but all are extended", alternatives.len())
    }
}

/// Rank replacements for `original` from `pool`.
///
/// Only parts in the original's subcategory are considered. With a rule for
/// that subcategory, candidates that fail it are dropped and the rest are
/// "verified"; without one, every candidate is returned as "similar".
pub fn find_alternatives(
    original: &Component,
    pool: &[Component],
    rules: &RuleBook,
    options: &AlternativesOptions,
) -> AlternativesReport {
    let original_package = package_key(&original.package);
    let candidates: Vec<&Component> = pool
        .iter()
        .filter(|c| c.id != original.id && c.subcategory_id == original.subcategory_id)
        .filter(|c| !options.same_package || package_key(&c.package) == original_package)
        .filter(|c| options.fee_tier.is_none_or(|filter| filter.accepts(c.fee_tier)))
        .collect();

    let rule = original.subcategory.as_deref().and_then(|name| rules.get(name));
    let match_kind = if rule.is_some() { MatchKind::Verified } else { MatchKind::Similar };

    let mut rejected = 0;
    let mut survivors = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let verdict = match rule {
            Some(rule) => {
                let verdict = verify(original, candidate, rule, &options.tolerance);
                if !verdict.is_compatible {
                    rejected += 1;
                    continue;
                }
                Some(verdict)
            }
            None => None,
        };
        survivors.push((candidate, verdict));
    }

    let cheapest = scoring::cheapest(survivors.iter().map(|(c, _)| *c));
    let scored = survivors.into_iter().map(|(candidate, verdict)| {
        let breakdown = scoring::score(candidate, original, cheapest);
        let alternative = ScoredAlternative { component: candidate.clone(), score: breakdown.total(), breakdown, verdict };
        (alternative.score, candidate.id.clone(), alternative)
    });
    let alternatives: Vec<ScoredAlternative> =
        scoring::top_k(scored, options.effective_limit()).into_iter().map(|(_, alternative)| alternative).collect();

    let unverifiable =
        alternatives.iter().filter(|a| a.verdict.as_ref().is_some_and(|v| !v.fully_verified())).count();
    let confidence = match match_kind {
        MatchKind::Similar => Confidence::Low,
        MatchKind::Verified if unverifiable > 0 => Confidence::Medium,
        MatchKind::Verified => Confidence::High,
    };

    let primary_attribute = rule.map(|r| r.primary.clone());
    let primary_value = primary_attribute.as_deref().and_then(|name| original.spec(name)).map(str::to_string);
    let comparison = alternatives.first().map(|best| match rule {
        Some(rule) => Comparison::new(original, &best.component, rule.attributes()),
        None => Comparison::new(original, &best.component, std::iter::empty()),
    });

    debug!(
        original = %original.id,
        pool = pool.len(),
        rejected,
        unverifiable,
        returned = alternatives.len(),
        kind = ?match_kind,
        "ranked alternatives"
    );

    AlternativesReport {
        summary: summary(original, match_kind, &alternatives, primary_value.as_deref()),
        original: original.clone(),
        match_kind,
        confidence,
        primary_attribute,
        primary_value,
        alternatives,
        rejected,
        unverifiable,
        comparison,
    }
}
