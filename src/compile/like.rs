//! LIKE patterns over the raw attribute blob.
//!
//! The blob is a JSON list of `["name", "value"]` pairs rendered with a
//! `", "` separator, so `%"Resistance", "10k%` finds a resistance value
//! starting with "10k". Patterns use `\` as the escape character.

const MAX_VALUE_PATTERNS: usize = 3;

/// Escape LIKE wildcards (and the escape character itself).
pub fn escape_like(value: &str) -> String {
    value.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Pattern matching any value of attribute `name`.
pub(crate) fn attribute_exists(name: &str) -> String {
    format!("%\"{}\"%", escape_like(name))
}

/// Pattern matching `name` whose value is exactly `value`.
pub(crate) fn attribute_equals(name: &str, value: &str) -> String {
    format!("%\"{}\", \"{}\"%", escape_like(name), escape_like(value))
}

/// Pattern matching `name` with `value` anywhere after it; for list-valued
/// attributes such as "I2C、SPI".
pub(crate) fn attribute_contains(name: &str, value: &str) -> String {
    format!("%\"{}\"%{}%", escape_like(name), escape_like(value))
}

fn is_integer(value: f64) -> bool {
    (value - value.round()).abs() < 1e-9
}

/// Prefix patterns for a numeric "=" filter on `name`: the value as typed,
/// its case-flipped spelling, and one normalized spelling
/// (`10000` -> `10k`, `1e-6` -> `1u`, `1` -> `±1%`). At most three.
pub fn value_patterns(name: &str, value: &str, parsed: f64) -> Vec<String> {
    let name_escaped = escape_like(name);
    let trimmed = regex!(r"(?i)\s*(?:ohms?|Ω)$").replace(value.trim(), "");
    let value_escaped = escape_like(&trimmed);
    let prefix = |v: &str| format!("%\"{name_escaped}\", \"{v}%");

    let mut patterns = vec![prefix(&value_escaped)];

    let lower = value_escaped.to_lowercase();
    let upper = value_escaped.to_uppercase();
    if lower != upper {
        patterns.push(prefix(if value_escaped == lower { &upper } else { &lower }));
    }

    let name_lower = name.to_lowercase();
    let normalized = if name_lower.contains("resistance") && parsed >= 1000.0 && is_integer(parsed / 1000.0) {
        Some(format!("{}k", (parsed / 1000.0).round() as i64))
    } else if name_lower.contains("capacitance") && parsed * 1e6 >= 1.0 && is_integer(parsed * 1e6) {
        Some(format!("{}u", (parsed * 1e6).round() as i64))
    } else if name_lower.contains("tolerance") && is_integer(parsed) {
        Some(format!("±{}\\%", parsed.round() as i64))
    } else {
        None
    };
    if let Some(pattern) = normalized.map(|v| prefix(&v)) {
        if !patterns.contains(&pattern) {
            patterns.push(pattern);
        }
    }

    patterns.truncate(MAX_VALUE_PATTERNS);
    patterns
}

// --- Evaluation --------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    /// `%`
    Any,
    /// `_`
    One,
    Literal(char),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => Token::Any,
            '_' => Token::One,
            '\\' => Token::Literal(chars.next().unwrap_or('\\')),
            other => Token::Literal(other),
        });
    }
    tokens
}

/// `text LIKE pattern ESCAPE '\'`, ASCII case-insensitive like SQLite's
/// default LIKE.
pub fn like_match(pattern: &str, text: &str) -> bool {
    let pattern = tokenize(pattern);
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Last '%' seen and the text position it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some(Token::Any) => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(Token::One) => {
                p += 1;
                t += 1;
            }
            Some(Token::Literal(c)) if c.eq_ignore_ascii_case(&text[t]) => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    p = star + 1;
                    t = absorbed + 1;
                    backtrack = Some((star, absorbed + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|token| *token == Token::Any)
}
