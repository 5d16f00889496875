//! Report types returned by `find_alternatives`.

use super::scoring::ScoreBreakdown;
use super::verdict::CompatibilityVerdict;
use crate::TolerancePolicy;
use crate::search::{Component, FeeTier, LibraryFilter};
use serde::Serialize;

/// Extra assembly fee charged per extended-tier part type.
pub(crate) const EXTENDED_ASSEMBLY_FEE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Candidates passed the subcategory's compatibility rule.
    Verified,
    /// No rule exists; candidates are merely from the same subcategory.
    Similar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAlternative {
    pub component: Component,
    pub score: i32,
    pub breakdown: ScoreBreakdown,
    /// `None` for similar parts, which are never verified.
    pub verdict: Option<CompatibilityVerdict>,
}

/// Per-unit savings of the best alternative over the original.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Savings {
    pub assembly_fee: f64,
    pub unit_price_diff: f64,
    pub total_per_unit: f64,
}

impl Savings {
    pub(crate) fn between(original: &Component, best: &Component) -> Self {
        let assembly_fee = if original.fee_tier == FeeTier::Extended && best.fee_tier.is_no_fee() {
            EXTENDED_ASSEMBLY_FEE
        } else {
            0.0
        };
        let unit_price_diff = round4(original.price.unwrap_or(0.0) - best.price.unwrap_or(0.0));
        Savings { assembly_fee, unit_price_diff, total_per_unit: round4(assembly_fee + unit_price_diff) }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// One attribute, side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecComparison {
    pub name: String,
    pub original: Option<String>,
    pub recommended: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub original_id: String,
    pub recommended_id: String,
    pub original_fee_tier: FeeTier,
    pub recommended_fee_tier: FeeTier,
    pub original_price: Option<f64>,
    pub recommended_price: Option<f64>,
    pub original_stock: u64,
    pub recommended_stock: u64,
    pub specs: Vec<SpecComparison>,
    pub savings: Savings,
}

impl Comparison {
    pub(crate) fn new<'a>(original: &Component, best: &Component, attributes: impl Iterator<Item = &'a str>) -> Self {
        let mut specs: Vec<SpecComparison> = Vec::new();
        for name in attributes {
            if specs.iter().any(|s| s.name == name) {
                continue;
            }
            specs.push(SpecComparison {
                name: name.to_string(),
                original: original.spec(name).map(str::to_string),
                recommended: best.spec(name).map(str::to_string),
            });
        }
        Comparison {
            original_id: original.id.clone(),
            recommended_id: best.id.clone(),
            original_fee_tier: original.fee_tier,
            recommended_fee_tier: best.fee_tier,
            original_price: original.price,
            recommended_price: best.price,
            original_stock: original.stock,
            recommended_stock: best.stock,
            specs,
            savings: Savings::between(original, best),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativesReport {
    pub original: Component,
    pub match_kind: MatchKind,
    pub confidence: Confidence,
    pub summary: String,
    pub primary_attribute: Option<String>,
    pub primary_value: Option<String>,
    /// Best first.
    pub alternatives: Vec<ScoredAlternative>,
    /// Candidates that failed the rule.
    pub rejected: usize,
    /// Returned alternatives with at least one spec that could not be
    /// compared.
    pub unverifiable: usize,
    pub comparison: Option<Comparison>,
}

impl AlternativesReport {
    /// Alternatives without the extended-tier assembly fee.
    pub fn no_fee_count(&self) -> usize {
        self.alternatives.iter().filter(|a| a.component.fee_tier.is_no_fee()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlternativesOptions {
    pub limit: usize,
    /// Hard cap on `limit`.
    pub max_alternatives: usize,
    /// Only parts in the original's package. Tantalum height suffixes
    /// ("-21(mm)") are ignored.
    pub same_package: bool,
    pub fee_tier: Option<LibraryFilter>,
    pub tolerance: TolerancePolicy,
}

impl Default for AlternativesOptions {
    fn default() -> Self {
        Self {
            limit: 10,
            max_alternatives: 50,
            same_package: false,
            fee_tier: None,
            tolerance: TolerancePolicy::default(),
        }
    }
}

impl AlternativesOptions {
    pub(crate) fn effective_limit(&self) -> usize {
        self.limit.min(self.max_alternatives)
    }
}
