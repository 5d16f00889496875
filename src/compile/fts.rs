/// Full-text match expression: each whitespace token quoted (inner quotes
/// doubled) and prefix-matched, joined by AND (space) or OR.
///
/// `tp4056 li-ion` -> `"tp4056"* "li-ion"*`. Returns `None` for an empty
/// query.
pub fn fts_expression(query: &str, match_all: bool) -> Option<String> {
    let terms: Vec<String> =
        query.split_whitespace().map(|token| format!("\"{}\"*", token.replace('"', "\"\""))).collect();
    if terms.is_empty() {
        return None;
    }
    Some(terms.join(if match_all { " " } else { " OR " }))
}

/// Whitespace tokens of a full-text query, lowercased, for stores that
/// evaluate the match themselves.
pub(crate) fn fts_terms(query: &str) -> Vec<String> {
    query.split_whitespace().map(|token| token.trim_matches('"').to_lowercase()).filter(|t| !t.is_empty()).collect()
}
