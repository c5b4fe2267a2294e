use std::fmt;

/// Half-open byte range `[start, end)` into the document text.
///
/// Spans produced by the locator always begin and end on ASCII delimiter or
/// key boundaries, so slicing with them never splits a UTF-8 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The span covering all of `text`.
    #[must_use]
    pub const fn of(text: &str) -> Self {
        Self::new(0, text.len())
    }

    /// The text covered by this span, or `None` when it is out of range or
    /// splits a UTF-8 sequence.
    #[must_use]
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
