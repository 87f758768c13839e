//! Token kinds for the macro literal tokenizer.
//!
//! A normalized literal is a sequence of bracketed segments, optionally
//! interleaved with `<X>` flag markers. Anything else outside brackets is
//! kept as `Text` so callers can decide whether to ignore it.

/// Classification for a token produced by [`tokenize`](crate::literal::tokenize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Inner text of a `[...]` segment, brackets excluded, not trimmed.
    Segment(String),
    /// Letters of a `<...>` flag marker, angle brackets excluded.
    Flag(String),
    /// A run of other characters outside any segment.
    Text(String),
}

