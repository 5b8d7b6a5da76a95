// crates/sbml-pkg/src/sid.rs

//! Identifier grammars used by `id`, `metaid` and `sboTerm` attributes.

use crate::types::SBO_TERM_MAX;
use alloc::format;
use alloc::string::String;

/// Returns `true` if `s` matches the SId grammar:
/// `(letter | '_') (letter | digit | '_')*`.
pub fn is_valid_sid(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// UnitSId shares the SId grammar.
pub fn is_valid_unit_sid(s: &str) -> bool {
    is_valid_sid(s)
}

/// Returns `true` if `s` is a valid XML `ID` (NCName): a letter or `_`
/// followed by letters, digits, `.`, `-` or `_`.
pub fn is_valid_meta_id(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

/// Parses an `SBO:NNNNNNN` term into its number.
///
/// Exactly seven digits are required after the prefix.
pub fn parse_sbo_term(s: &str) -> Option<u32> {
    let digits = s.strip_prefix("SBO:")?;
    if digits.len() != 7 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats an SBO term number as `SBO:NNNNNNN`.
pub fn format_sbo_term(term: u32) -> String {
    format!("SBO:{:07}", term)
}

/// Returns `true` if `term` lies in the SBO number range.
pub fn is_valid_sbo_term(term: u32) -> bool {
    term <= SBO_TERM_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sid_grammar() {
        assert!(is_valid_sid("foo"));
        assert!(is_valid_sid("_x1"));
        assert!(is_valid_sid("A_b_9"));
        assert!(!is_valid_sid(""));
        assert!(!is_valid_sid("1abc"));
        assert!(!is_valid_sid("a-b"));
        assert!(!is_valid_sid("a b"));
        assert!(!is_valid_sid("a.b"));
    }

    #[test]
    fn test_meta_id_grammar() {
        assert!(is_valid_meta_id("_m1"));
        assert!(is_valid_meta_id("meta.id-2"));
        assert!(!is_valid_meta_id("1meta"));
        assert!(!is_valid_meta_id("a:b"));
        assert!(!is_valid_meta_id(""));
    }

    #[test]
    fn test_sbo_terms() {
        assert_eq!(parse_sbo_term("SBO:0000123"), Some(123));
        assert_eq!(parse_sbo_term("SBO:123"), None);
        assert_eq!(parse_sbo_term("0000123"), None);
        assert_eq!(parse_sbo_term("SBO:00001x3"), None);
        assert_eq!(format_sbo_term(42), "SBO:0000042");
        assert!(is_valid_sbo_term(9_999_999));
        assert!(!is_valid_sbo_term(10_000_000));
    }
}
