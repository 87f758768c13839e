use crate::literal::{token::Token, token_kind::TokenKind};

/// Splits a normalized literal into segments, flags and stray text.
///
/// Behavior:
/// - `[` opens a segment that ends at the *first* following `]`; nested
///   brackets are not tracked. An unterminated `[` yields `Text`.
/// - `<` followed by ASCII letters and `>` outside a segment is a flag marker.
///   Any other `<` starts ordinary text.
/// - Whitespace outside segments is skipped.
///
/// Never fails; O(n) in the input length.
pub fn tokenize(literal: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let bytes = literal.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        if c == b'[' {
            if let Some(close) = literal[i + 1..].find(']') {
                let end = i + 1 + close;
                out.push(Token::new(
                    TokenKind::Segment(literal[i + 1..end].to_string()),
                    start,
                    end + 1,
                ));
                i = end + 1;
                continue;
            }
            out.push(Token::new(
                TokenKind::Text(literal[i..].to_string()),
                start,
                bytes.len(),
            ));
            break;
        }

        if c == b'<' {
            if let Some(len) = flag_len(&bytes[i + 1..]) {
                let end = i + 1 + len;
                out.push(Token::new(
                    TokenKind::Flag(literal[i + 1..end].to_string()),
                    start,
                    end + 1,
                ));
                i = end + 1;
                continue;
            }
        }

        // Stray text runs until the next structural character.
        i += 1;
        while i < bytes.len() && !matches!(bytes[i], b'[' | b'<') && !bytes[i].is_ascii_whitespace()
        {
            i += 1;
        }
        out.push(Token::new(
            TokenKind::Text(literal[start..i].to_string()),
            start,
            i,
        ));
    }

    out
}

/// Number of letters in a `<...>` marker body, if `rest` starts with one.
fn flag_len(rest: &[u8]) -> Option<usize> {
    let len = rest.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    (len > 0 && rest.get(len) == Some(&b'>')).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::token_kind::TokenKind;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn segments_in_source_order() {
        assert_eq!(
            kinds("[select][select * from t][]"),
            vec![
                TokenKind::Segment("select".into()),
                TokenKind::Segment("select * from t".into()),
                TokenKind::Segment(String::new()),
            ]
        );
    }

    #[test]
    fn segment_spans_include_brackets() {
        let toks = tokenize("[ab][c]");
        assert_eq!((toks[0].start, toks[0].end), (0, 4));
        assert_eq!((toks[1].start, toks[1].end), (4, 7));
    }

    #[test]
    fn flags_outside_segments() {
        assert_eq!(
            kinds("<A>[exists]<T>[t]"),
            vec![
                TokenKind::Flag("A".into()),
                TokenKind::Segment("exists".into()),
                TokenKind::Flag("T".into()),
                TokenKind::Segment("t".into()),
            ]
        );
    }

    #[test]
    fn angle_brackets_inside_segment_are_sql() {
        assert_eq!(
            kinds("[exists][t][a<:b and c<>1]"),
            vec![
                TokenKind::Segment("exists".into()),
                TokenKind::Segment("t".into()),
                TokenKind::Segment("a<:b and c<>1".into()),
            ]
        );
    }

    #[test]
    fn nested_open_bracket_stays_in_segment() {
        assert_eq!(
            kinds("[a[b]c]"),
            vec![
                TokenKind::Segment("a[b".into()),
                TokenKind::Text("c]".into()),
            ]
        );
    }

    #[test]
    fn stray_text_and_unterminated_segment() {
        assert_eq!(
            kinds("x <1> [open"),
            vec![
                TokenKind::Text("x".into()),
                TokenKind::Text("<1>".into()),
                TokenKind::Text("[open".into()),
            ]
        );
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        assert_eq!(
            kinds("[select][名称 = :name]"),
            vec![
                TokenKind::Segment("select".into()),
                TokenKind::Segment("名称 = :name".into()),
            ]
        );
    }
}
