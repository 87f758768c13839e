//! Lexical handling of raw macro literals.
//!
//! The stages here turn the text a host captured from source metadata into a
//! [`MacroExpression`], without knowing anything about individual macro types:
//!
//! - `normalize`  : strips concatenation noise and collapses whitespace.
//! - `brackets`   : single pass `[`/`]` balance check, fails fast.
//! - `token_kind` : classification of literal atoms (segments, flags, stray text).
//! - `token`      : token struct pairing a `TokenKind` with byte offsets.
//! - `tokenizer`  : O(n) scan of a normalized literal into tokens.
//! - `expression` : segment extraction and flag handling.
//!
//! Segments are matched without nesting: a segment runs from a `[` to the
//! first `]` after it. A `[` inside a SQL fragment is kept as plain text of
//! the enclosing segment and a `]` inside one ends the segment early.
//!
//! ```rust
//! use sqlmacro::{extract, normalize};
//!
//! let normalized = normalize("\"[truncate]\" + \n \"[ses_sys_arg]\"");
//! assert_eq!(normalized, "[truncate][ses_sys_arg]");
//! let expr = extract("[truncate][ses_sys_arg]", &normalized).unwrap();
//! assert_eq!(expr.segments, vec!["truncate", "ses_sys_arg"]);
//! ```

pub mod brackets;
pub mod expression;
pub mod normalize;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use brackets::check_brackets;
pub use expression::{MacroExpression, MacroFlag, extract};
pub use normalize::normalize;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_from_raw_source_text() {
        let raw = "\"<A>[select][select * from crt_sys_arg]\"\r\n + \"[][user_id = :user_id]\"";
        let normalized = normalize(raw);
        assert!(check_brackets(&normalized).is_ok());
        let expr = extract(raw, &normalized).unwrap();
        assert!(expr.has_alias);
        assert_eq!(
            expr.segments,
            vec!["select", "select * from crt_sys_arg", "", "user_id = :user_id"]
        );
    }
}
