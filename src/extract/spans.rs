//! Span bookkeeping for the numeric extractors.
//!
//! Several value patterns can claim the same characters ("8MHz" is a
//! frequency, but "8M" also looks like a resistance). Every pattern reports
//! candidates; a single greedy pass then keeps a non-overlapping subset.
//!
//! ## Invariants
//!
//! - Candidates are sorted by `start` with a *stable* sort, so at equal
//!   starts the candidate reported first (by the earlier pattern) wins.
//! - A candidate is kept only if it starts at or after the end of the last
//!   kept candidate. Overlaps never survive, partial or full.

use crate::SpecValue;

/// One value claimed by a pattern, with its byte span in the input.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
    pub value: SpecValue,
}

impl Candidate {
    pub fn new(start: usize, end: usize, value: SpecValue) -> Self {
        Self { start, end, value }
    }
}

/// Does `position` fall inside any already-reported candidate?
pub(crate) fn inside_any(position: usize, found: &[Candidate]) -> bool {
    found.iter().any(|c| c.start <= position && position < c.end)
}

/// Greedy interval selection: earliest start first, first-reported wins ties.
pub(crate) fn select_non_overlapping(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| c.start);

    let mut kept: Vec<Candidate> = Vec::with_capacity(candidates.len());
    let mut last_end = 0usize;
    for candidate in candidates {
        if kept.is_empty() || candidate.start >= last_end {
            last_end = candidate.end;
            kept.push(candidate);
        }
    }
    kept
}

/// Remove the kept spans from `text`, joining the gaps with single spaces.
pub(crate) fn remove_spans(text: &str, kept: &[Candidate]) -> String {
    let ranges: Vec<(usize, usize)> = kept.iter().map(|c| (c.start, c.end)).collect();
    cut_ranges(text, &ranges)
}

/// Cut sorted, non-overlapping byte ranges out of `text`.
pub(crate) fn cut_ranges(text: &str, ranges: &[(usize, usize)]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }
    let mut parts: Vec<&str> = Vec::with_capacity(ranges.len() + 1);
    let mut cursor = 0usize;
    for &(start, end) in ranges {
        parts.push(&text[cursor..start]);
        cursor = end;
    }
    parts.push(&text[cursor..]);
    collapse_whitespace(&parts.join(" "))
}

/// Byte ranges of `needle` in `haystack` that sit on word boundaries.
///
/// `haystack` should be the ASCII-lowercased text so the ranges carry over
/// to the original unchanged.
pub(crate) fn word_occurrences(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    haystack
        .match_indices(needle)
        .map(|(start, m)| (start, start + m.len()))
        .filter(|&(start, end)| !is_word(haystack[..start].chars().next_back()) && !is_word(haystack[end..].chars().next()))
        .collect()
}

/// Trim and squeeze runs of whitespace to one space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitType;

    fn candidate(start: usize, end: usize, tag: &str) -> Candidate {
        Candidate::new(start, end, SpecValue::new(tag, 0.0, UnitType::Voltage, tag))
    }

    #[test]
    fn keeps_first_reported_on_equal_start() {
        let kept = select_non_overlapping(vec![
            candidate(4, 8, "b"),
            candidate(0, 3, "first"),
            candidate(0, 5, "second"),
            candidate(3, 6, "c"),
        ]);
        let tags: Vec<&str> = kept.iter().map(|c| c.value.raw.as_str()).collect();
        assert_eq!(tags, vec!["first", "c"]);
    }

    #[test]
    fn adjacent_spans_both_survive() {
        let kept = select_non_overlapping(vec![candidate(0, 3, "a"), candidate(3, 5, "b")]);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn removes_spans_and_collapses_gaps() {
        let text = "10k resistor 1%";
        let kept = vec![candidate(0, 3, "10k"), candidate(13, 15, "1%")];
        assert_eq!(remove_spans(text, &kept), "resistor");
        assert!(inside_any(1, &kept));
        assert!(!inside_any(3, &kept));
    }

    #[test]
    fn word_occurrences_respect_boundaries() {
        let text = "led ledger led-strip";
        assert_eq!(word_occurrences(text, "led"), vec![(0, 3), (11, 14)]);
        assert_eq!(cut_ranges(text, &word_occurrences(text, "led")), "ledger -strip");
    }
}
