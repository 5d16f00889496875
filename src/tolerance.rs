//! Numeric tolerance policy.
//!
//! Stored catalog values are rounded, typed by hand, or printed with fewer
//! significant digits than a query, so no comparison in the crate is
//! bit-exact. Every band lives here and a single [`TolerancePolicy`] value is
//! threaded through the filter compiler, the post-filter and the
//! compatibility engine.
//!
//! ```text
//! "=" filter      |actual - target| <= 1% of target     (1e-9 absolute at 0)
//! ordered filter  strict/loose compare with 1e-9 relative slack (1e-15 at 0)
//! alternative     |cand - orig| < 2% of orig             (1e-9 absolute at 0)
//! same-or-better  cand >= orig * 0.98  |  cand <= orig * 1.02
//! ```

use crate::alternatives::Direction;
use crate::compile::Operator;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TolerancePolicy {
    /// Relative half-width of the band accepted by "=" filters.
    pub filter_equality: f64,
    /// Relative tolerance for alternative-part verification.
    pub alternative_match: f64,
    /// Absolute band used instead of a relative one when the target is 0.
    pub zero_epsilon: f64,
    /// Relative slack applied to ordered comparisons.
    pub comparison_epsilon: f64,
    /// Absolute slack applied to ordered comparisons against 0.
    pub zero_comparison_epsilon: f64,
}

impl Default for TolerancePolicy {
    fn default() -> Self {
        Self {
            filter_equality: 0.01,
            alternative_match: 0.02,
            zero_epsilon: 1e-9,
            comparison_epsilon: 1e-9,
            zero_comparison_epsilon: 1e-15,
        }
    }
}

impl TolerancePolicy {
    /// Half-width of the "=" band around `target`.
    pub fn equality_band(&self, target: f64) -> f64 {
        if target == 0.0 { self.zero_epsilon } else { target.abs() * self.filter_equality }
    }

    /// Inclusive `(low, high)` bounds for an "=" filter, as used by BETWEEN.
    pub fn equality_bounds(&self, target: f64) -> (f64, f64) {
        let band = self.equality_band(target);
        (target - band, target + band)
    }

    fn comparison_slack(&self, target: f64) -> f64 {
        if target == 0.0 { self.zero_comparison_epsilon } else { target.abs() * self.comparison_epsilon }
    }

    /// Does `actual <op> target` hold under this policy?
    pub fn satisfies(&self, actual: f64, op: Operator, target: f64) -> bool {
        let slack = self.comparison_slack(target);
        match op {
            Operator::Eq => (actual - target).abs() <= self.equality_band(target),
            Operator::Ge => actual >= target - slack,
            Operator::Le => actual <= target + slack,
            Operator::Gt => actual > target + slack,
            Operator::Lt => actual < target - slack,
        }
    }

    /// Primary/must-match equality for alternative parts.
    pub fn alternative_matches(&self, original: f64, candidate: f64) -> bool {
        if original == 0.0 {
            return candidate.abs() <= self.zero_epsilon;
        }
        ((candidate - original) / original).abs() < self.alternative_match
    }

    /// Is `candidate` at least as good as `original` in `direction`?
    pub fn same_or_better(&self, direction: Direction, original: f64, candidate: f64) -> bool {
        match direction {
            Direction::Higher => candidate >= original * (1.0 - self.alternative_match),
            Direction::Lower => candidate <= original * (1.0 + self.alternative_match),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_band_is_relative_with_zero_fallback() {
        let policy = TolerancePolicy::default();
        assert!(policy.satisfies(25.2, Operator::Eq, 25.0));
        assert!(!policy.satisfies(26.0, Operator::Eq, 25.0));
        assert!(policy.satisfies(0.0, Operator::Eq, 0.0));
        assert!(!policy.satisfies(0.001, Operator::Eq, 0.0));

        let (low, high) = policy.equality_bounds(100.0);
        assert!((low - 99.0).abs() < 1e-9 && (high - 101.0).abs() < 1e-9);
    }

    #[test]
    fn ordered_comparisons_respect_strictness() {
        let policy = TolerancePolicy::default();
        let cases: Vec<(f64, Operator, f64, bool)> = vec![
            (100.0, Operator::Ge, 100.0, true),
            (99.0, Operator::Ge, 100.0, false),
            (100.0, Operator::Gt, 100.0, false),
            (0.05, Operator::Lt, 0.05, false),
            (0.5, Operator::Lt, 0.05, false),
            (0.04, Operator::Lt, 0.05, true),
            (0.05, Operator::Le, 0.05, true),
        ];
        for (actual, op, target, expected) in cases {
            assert_eq!(policy.satisfies(actual, op, target), expected, "{actual} {op} {target}");
        }
    }

    #[test]
    fn same_or_better_allows_two_percent_slack() {
        let policy = TolerancePolicy::default();
        assert!(policy.same_or_better(Direction::Higher, 30.0, 29.5));
        assert!(!policy.same_or_better(Direction::Higher, 30.0, 29.0));
        assert!(policy.same_or_better(Direction::Lower, 0.030, 0.025));
        assert!(!policy.same_or_better(Direction::Lower, 0.030, 0.040));
        assert!(policy.alternative_matches(10_000.0, 10_100.0));
        assert!(!policy.alternative_matches(10_000.0, 10_300.0));
    }
}
