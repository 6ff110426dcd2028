// Source positions shared by the tokenizer, parser and evaluator.

use core::{fmt, ops::Range};

/// Byte range into the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }

    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }

    /// The text this span covers, or `None` if it is out of bounds or splits
    /// a character.
    pub fn str_of<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.0.clone())
    }
}

/// 0-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_of() {
        let source = "(+ 1 λ)";
        assert_eq!(Span::new(1, 2).str_of(source), Some("+"));
        assert_eq!(Span::new(5, 7).str_of(source), Some("λ"));
        // Inside the two-byte `λ`.
        assert_eq!(Span::new(5, 6).str_of(source), None);
        assert_eq!(Span::new(7, 20).str_of(source), None);
    }
}
