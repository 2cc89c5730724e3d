//! UTF-16 code-unit addressing.
//!
//! Engine source positions count UTF-16 code units, so a character outside
//! the Basic Multilingual Plane occupies two positions. Sources are held as
//! UTF-8; every positioned read goes through a unit-to-byte table.

/// Unit-to-byte table over one source text
#[derive(Debug, Clone)]
pub struct Utf16Index<'a> {
    text: &'a str,
    /// Byte position of every unit, plus one entry for the end of the text
    bytes: Vec<usize>,
}

impl<'a> Utf16Index<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        for (i, c) in text.char_indices() {
            // The second unit of a surrogate pair maps to the start of its character
            bytes.extend(std::iter::repeat(i).take(c.len_utf16()));
        }
        bytes.push(text.len());

        Self { text, bytes }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length of the text in code units
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte position of unit `offset`, clamped to the end of the text
    pub fn byte(&self, offset: usize) -> usize {
        self.bytes[offset.min(self.len())]
    }

    /// Units `start..end`, clamped to the text
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let start = self.byte(start);
        let end = self.byte(end).max(start);
        &self.text[start..end]
    }

    /// Units between the previous newline and `offset`
    ///
    /// Offsets past the end count only up to the end of the text.
    pub fn column(&self, offset: usize) -> usize {
        let before = &self.text[..self.byte(offset)];
        let line = match before.rfind('\n') {
            Some(i) => &before[i + 1..],
            None => before,
        };
        unit_len(line)
    }
}

/// Length of `text` in UTF-16 code units
pub fn unit_len(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_astral_character_takes_two_units() {
        let index = Utf16Index::new("a😀b");
        assert_eq!(index.len(), 4);
        assert_eq!(index.byte(1), 1);
        assert_eq!(index.byte(3), 5);
        assert_eq!(index.slice(3, 4), "b");
        assert_eq!(index.slice(1, 3), "😀");
    }

    #[test]
    fn test_slice_clamps() {
        let index = Utf16Index::new("abcdef");
        assert_eq!(index.slice(1, 3), "bc");
        assert_eq!(index.slice(4, 20), "ef");
        assert_eq!(index.slice(10, 20), "");
        assert_eq!(index.slice(3, 1), "");
    }

    #[test]
    fn test_column() {
        let index = Utf16Index::new("ab\n 😀cd");
        assert_eq!(index.column(2), 2);
        assert_eq!(index.column(3), 0);
        assert_eq!(index.column(6), 3);
        assert_eq!(index.column(8), 5);
    }

    #[test]
    fn test_column_past_end_is_bounded() {
        let index = Utf16Index::new("ab\ncd");
        assert_eq!(index.column(usize::MAX), 2);
        assert!(Utf16Index::new("").is_empty());
    }
}
