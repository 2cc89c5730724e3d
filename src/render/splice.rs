//! Position-addressed text replacement.
//!
//! Replacements are addressed in UTF-16 offsets of the untouched source
//! and applied in one left-to-right pass. Overlapping candidates lose to the
//! replacement applied before them; among equal starts the earliest
//! registered one is applied.

use super::units::Utf16Index;

/// Replace code units `start..end` of the source with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Replacement {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Apply `replacements` to `code`
///
/// Offsets past the end of `code` clamp to its end. Never panics on any
/// overlap pattern.
pub fn apply_replacements(code: &str, replacements: Vec<Replacement>) -> String {
    apply_replacements_in(&Utf16Index::new(code), replacements)
}

/// [`apply_replacements`] over an index built once per source
pub fn apply_replacements_in(index: &Utf16Index<'_>, mut replacements: Vec<Replacement>) -> String {
    // Stable: ties keep registration order
    replacements.sort_by_key(|r| r.start);

    let to_byte = |offset: usize| index.byte(offset);

    let mut out = index.text().to_string();
    let mut shift: isize = 0;
    let mut prev_end: isize = -1;

    for replacement in &replacements {
        let start = to_byte(replacement.start) as isize + shift;
        let end = to_byte(replacement.end.max(replacement.start)) as isize + shift;

        if prev_end > start {
            continue;
        }

        out.replace_range(start as usize..end as usize, &replacement.text);

        let diff = replacement.text.len() as isize - (end - start);
        shift += diff;
        prev_end = end + diff;
    }

    out
}
