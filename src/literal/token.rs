//! Token model tying a `TokenKind` to its span in the normalized literal.
use crate::literal::token_kind::TokenKind;

/// A literal token with inclusive start and exclusive end byte offsets.
///
/// Offsets cover the whole token including its delimiters, so
/// `&normalized[t.start..t.end]` of a segment token is `"[...]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

