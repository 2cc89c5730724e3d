//! Where does the expression at a traced position end?
//!
//! Trace positions mark the start of an expression or call. The end is
//! approximated by the longest token run within a fixed lookahead window:
//! an optional `new ` or operator/punctuation run, then a word, then an
//! optional closing bracket.

use super::units::{unit_len, Utf16Index};
use crate::utils::config::{END_FALLBACK_UNITS, END_LOOKAHEAD_UNITS};
use regex::Regex;
use std::sync::LazyLock;

static EXPRESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:new |[.=\[ !&<>^%+\-|]*)?[0-9A-Za-z_]+\]?").unwrap());

/// UTF-16 offset one past the expression starting at `start`
///
/// Falls back to `start + 5` when nothing recognisable starts there. The
/// result may exceed the text length; callers clamp.
pub fn find_end(code: &str, start: usize) -> usize {
    find_end_in(&Utf16Index::new(code), start)
}

/// [`find_end`] over an index built once per source
pub fn find_end_in(index: &Utf16Index<'_>, start: usize) -> usize {
    let window = index.slice(start, start.saturating_add(END_LOOKAHEAD_UNITS));

    match EXPRESSION.find(window) {
        Some(m) => start + unit_len(&window[..m.end()]),
        None => start.saturating_add(END_FALLBACK_UNITS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(find_end("foo(1)", 0), 3);
        assert_eq!(find_end("a = bar(x)", 4), 7);
    }

    #[test]
    fn test_new_prefix() {
        assert_eq!(find_end("new Point(1, 2)", 0), 9);
    }

    #[test]
    fn test_operator_run_and_bracket() {
        assert_eq!(find_end("x += y;", 1), 6);
        assert_eq!(find_end("a[i] = 1", 1), 4);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(find_end("(a, b)", 0), 5);
        assert_eq!(find_end("abc", 10), 15);
    }

    #[test]
    fn test_window_is_bounded() {
        let long = "x".repeat(250);
        assert_eq!(find_end(&long, 0), 100);
    }

    #[test]
    fn test_counts_code_units_not_bytes() {
        assert_eq!(find_end("éé foo()", 2), 6);
        assert_eq!(find_end("😀 foo()", 3), 6);
        assert_eq!(find_end("😀 foo()", 0), 5);
    }
}
