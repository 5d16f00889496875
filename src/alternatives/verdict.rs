//! Spec-by-spec compatibility checks between an original part and a
//! candidate.

use super::rules::CompatibilityRule;
use crate::TolerancePolicy;
use crate::search::Component;
use crate::units::{SpecParser, impedance_matches, is_string_compared};
use serde::Serialize;

/// Outcome of checking one candidate against a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityVerdict {
    pub is_compatible: bool,
    /// Attributes compared and found compatible.
    pub specs_verified: Vec<String>,
    /// Attributes that could not be compared: missing on one side or not
    /// parseable. These never disqualify a candidate.
    pub specs_unparseable: Vec<String>,
}

impl CompatibilityVerdict {
    pub fn fully_verified(&self) -> bool {
        self.specs_unparseable.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueMatch {
    Match,
    Mismatch,
    Unverifiable,
}

fn same_text(a: &str, b: &str) -> ValueMatch {
    if a.trim().to_lowercase() == b.trim().to_lowercase() { ValueMatch::Match } else { ValueMatch::Mismatch }
}

/// Are two stored values of `attribute` the same, within the alternative
/// tolerance? When neither side parses the raw text is compared instead.
pub(crate) fn values_match(attribute: &str, original: &str, candidate: &str, policy: &TolerancePolicy) -> ValueMatch {
    let parser = SpecParser::for_attribute(attribute);
    if matches!(parser, Some(SpecParser::ImpedanceAtFrequency)) {
        return if impedance_matches(original, candidate, policy) { ValueMatch::Match } else { ValueMatch::Mismatch };
    }
    if is_string_compared(attribute) {
        return same_text(original, candidate);
    }
    let Some(parser) = parser else { return same_text(original, candidate) };
    match (parser.scalar(original), parser.scalar(candidate)) {
        (Some(a), Some(b)) if policy.alternative_matches(a, b) => ValueMatch::Match,
        (Some(_), Some(_)) => ValueMatch::Mismatch,
        (None, None) => same_text(original, candidate),
        _ => ValueMatch::Unverifiable,
    }
}

/// Check `candidate` against `rule`.
///
/// The primary attribute must match when both parts carry it. Must-match
/// attributes must be equal; same-or-better ratings may only improve. A
/// value present on one side only, or parsed on one side only, is recorded
/// as unparseable and does not fail the candidate.
pub fn verify(
    original: &Component,
    candidate: &Component,
    rule: &CompatibilityRule,
    policy: &TolerancePolicy,
) -> CompatibilityVerdict {
    let mut verdict = CompatibilityVerdict { is_compatible: true, ..Default::default() };
    let incompatible = |verdict: CompatibilityVerdict| CompatibilityVerdict { is_compatible: false, ..verdict };

    if let (Some(a), Some(b)) = (original.spec(&rule.primary), candidate.spec(&rule.primary)) {
        match values_match(&rule.primary, a, b, policy) {
            ValueMatch::Match => verdict.specs_verified.push(rule.primary.clone()),
            ValueMatch::Mismatch => return incompatible(verdict),
            ValueMatch::Unverifiable => verdict.specs_unparseable.push(rule.primary.clone()),
        }
    }

    for name in &rule.must_match {
        match (original.spec(name), candidate.spec(name)) {
            (Some(a), Some(b)) => match values_match(name, a, b, policy) {
                ValueMatch::Match => verdict.specs_verified.push(name.clone()),
                ValueMatch::Mismatch => return incompatible(verdict),
                ValueMatch::Unverifiable => verdict.specs_unparseable.push(name.clone()),
            },
            (None, None) => {}
            _ => verdict.specs_unparseable.push(name.clone()),
        }
    }

    for (name, direction) in &rule.same_or_better {
        let (a, b) = match (original.spec(name), candidate.spec(name)) {
            (Some(a), Some(b)) => (a, b),
            (None, None) => continue,
            _ => {
                verdict.specs_unparseable.push(name.clone());
                continue;
            }
        };
        let parsed = SpecParser::for_attribute(name).and_then(|p| Some((p.scalar(a)?, p.scalar(b)?)));
        match parsed {
            Some((a, b)) if policy.same_or_better(*direction, a, b) => {
                if !verdict.specs_verified.contains(name) {
                    verdict.specs_verified.push(name.clone());
                }
            }
            Some(_) => return incompatible(verdict),
            None => verdict.specs_unparseable.push(name.clone()),
        }
    }

    verdict
}
