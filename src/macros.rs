/// Compile a regular expression once and hand out a `&'static Regex`.
///
/// Every built-in pattern in the crate goes through this macro, so a pattern
/// is compiled on first use and shared by all callers afterwards. The pattern
/// must be a constant expression (a literal or `concat!` of literals); a typo
/// in one is a programming error and panics on first use.
#[macro_export]
macro_rules! regex {
    ($pat:expr) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect("built-in pattern must compile"));
        &*RE
    }};
}

/// Build a longest-first phrase list from a static table.
///
/// Phrase tables (component aliases, semantic descriptors, connector series)
/// must be matched longest phrase first so "low rds(on)" wins over "low rds".
#[macro_export]
macro_rules! longest_first {
    ($table:expr) => {{
        let mut keys: Vec<&'static str> = $table.iter().map(|(k, _)| *k).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        keys
    }};
}
