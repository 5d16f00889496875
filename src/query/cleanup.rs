use crate::extract::collapse_whitespace;
use regex::Regex;

/// Drop what no catalog search can use: single letters left over from
/// removed tokens and hyphens orphaned by them ("- -F" -> "").
pub(crate) fn clean_residual_text(text: &str) -> String {
    let text = regex!(r"\b[A-Za-z]\b").replace_all(text, "");
    let text = regex!(r"\s*-\s*").replace_all(&text, " ");
    collapse_whitespace(&text)
}

/// Remove every match of `pattern` and squeeze the gaps.
pub(crate) fn remove_word(text: &str, pattern: &Regex) -> String {
    collapse_whitespace(&pattern.replace_all(text, " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_cleanup() {
        let cases: Vec<(&str, &str)> = vec![
            ("- -F", ""),
            ("x  receptacle", "receptacle"),
            ("li-ion charger", "li ion charger"),
            ("ws2812b", "ws2812b"),
        ];
        for (input, expected) in cases {
            assert_eq!(clean_residual_text(input), expected, "cleanup of {input:?}");
        }
        assert_eq!(remove_word("dual dual mosfet", regex!(r"(?i)\bdual\b")), "mosfet");
    }
}
