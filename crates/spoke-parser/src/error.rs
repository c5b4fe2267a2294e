//! Structural error types for spoke-parser.

/// Fatal extraction errors. Once block boundaries cannot be trusted no
/// partial catalog is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error(
        "Unbalanced document: block opened at line {line} (byte {offset}) is never closed ({depth} open at end of input)"
    )]
    Unbalanced {
        offset: usize,
        line: usize,
        depth: usize,
    },

    #[error("Unbalanced document: closing delimiter at line {line} (byte {offset}) has no opener")]
    StrayCloser { offset: usize, line: usize },

    #[error("Root label '{label}' not found")]
    MissingRoot { label: String },

    #[error("Document declares no labeled blocks")]
    EmptyCatalog,
}

/// One-based line number of a byte offset.
pub(crate) fn line_of(text: &str, offset: usize) -> usize {
    let end = offset.min(text.len());
    text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
