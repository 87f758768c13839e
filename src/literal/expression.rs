use crate::*;

/// Single letter markers that change how a macro is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MacroFlag {
    /// `<A>`: generate column aliases.
    #[display("A")]
    Alias,
    /// `<T>`: a condition parameter is a complete statement ("total SQL").
    #[display("T")]
    TotalSql,
}

impl MacroFlag {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(MacroFlag::Alias),
            'T' => Some(MacroFlag::TotalSql),
            _ => None,
        }
    }
}

/// A literal split into its positional segments.
///
/// `segments[0]` is the macro name with any inline flag marker removed;
/// the remaining segments are the parameters exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroExpression {
    pub raw: String,
    pub normalized: String,
    pub has_alias: bool,
    pub flags: Vec<MacroFlag>,
    pub segments: Vec<String>,
}

impl MacroExpression {
    pub fn name(&self) -> &str {
        self.segments.first().map(|s| s.trim()).unwrap_or_default()
    }

    pub fn has_flag(&self, flag: MacroFlag) -> bool {
        self.flags.contains(&flag)
    }
}

/// Extracts segments and flags from a literal that passed the bracket check.
///
/// Flags may be written between segments (`[exists]<T>[...]`) or inside the
/// name segment (`[exists<T>]`). Stray text outside segments is ignored.
pub fn extract(raw: &str, normalized: &str) -> Outcome<MacroExpression> {
    let mut segments = Vec::new();
    let mut flags = Vec::new();

    for token in tokenize(normalized) {
        match token.kind {
            TokenKind::Segment(text) if segments.is_empty() => {
                let (name, inline) = split_inline_flags(&text);
                if let Some(inline) = inline {
                    push_flags(inline, &mut flags, normalized)?;
                }
                segments.push(name.to_string());
            }
            TokenKind::Segment(text) => segments.push(text),
            TokenKind::Flag(letters) => push_flags(&letters, &mut flags, normalized)?,
            TokenKind::Text(text) => {
                trace!("Ignoring text outside segments at {:?}: {text:?}", token.start..token.end);
            }
        }
    }

    if segments.is_empty() {
        return Err(
            Diagnostic::new(ErrorKind::Format, "syntax invalid, see documentation")
                .with_context(normalized),
        );
    }

    Ok(MacroExpression {
        raw: raw.to_string(),
        normalized: normalized.to_string(),
        has_alias: flags.contains(&MacroFlag::Alias),
        flags,
        segments,
    })
}

/// Splits `name<XY>` into `("name", Some("XY"))`.
fn split_inline_flags(segment: &str) -> (&str, Option<&str>) {
    let trimmed = segment.trim();
    if let Some((name, rest)) = trimmed.split_once('<') {
        if let Some(letters) = rest.strip_suffix('>') {
            if !letters.is_empty() && letters.chars().all(|c| c.is_ascii_alphabetic()) {
                return (name.trim_end(), Some(letters));
            }
        }
    }
    (segment, None)
}

fn push_flags(
    letters: &str,
    flags: &mut Vec<MacroFlag>,
    normalized: &str,
) -> Outcome {
    for c in letters.chars() {
        let flag = MacroFlag::from_char(c).ok_or_else(|| {
            Diagnostic::new(ErrorKind::Format, format!("unknown macro flag <{c}>"))
                .with_context(normalized)
        })?;
        if !flags.contains(&flag) {
            flags.push(flag);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parts(s: &str) -> MacroExpression {
        extract(s, &normalize(s)).unwrap()
    }

    #[test]
    fn segment_zero_is_macro_name() {
        let expr = parts("[getSequence][sps_sequence][entrustseq]");
        assert_eq!(expr.name(), "getSequence");
        assert_eq!(expr.segments.len(), 3);
        assert!(!expr.has_alias);
        assert!(expr.flags.is_empty());
    }

    #[test]
    fn leading_alias_marker() {
        let expr = parts("<A>[select][select * from crt_sys_arg]");
        assert!(expr.has_alias);
        assert_eq!(expr.flags, vec![MacroFlag::Alias]);
        assert_eq!(expr.segments[0], "select");
    }

    #[rstest]
    #[case("[exists]<T>[t][select count(0) from t]")]
    #[case("[exists<T>][t][select count(0) from t]")]
    #[case("[exists<t>][t][select count(0) from t]")]
    fn total_sql_flag_positions(#[case] s: &str) {
        let expr = parts(s);
        assert!(expr.has_flag(MacroFlag::TotalSql));
        assert_eq!(expr.name(), "exists");
        assert_eq!(expr.segments[2], "select count(0) from t");
    }

    #[test]
    fn combined_flags_are_deduplicated() {
        let expr = parts("<A>[exists<TA>][t][x]");
        assert_eq!(expr.flags, vec![MacroFlag::Alias, MacroFlag::TotalSql]);
        assert!(expr.has_alias);
    }

    #[test]
    fn unknown_flag_is_format_error() {
        let err = extract("[exists]<Z>[t]", "[exists]<Z>[t]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
        assert_eq!(err.message, "unknown macro flag <Z>");
    }

    #[test]
    fn parameter_text_is_not_trimmed() {
        let expr = parts("[select][ select 1 ][  ]");
        assert_eq!(expr.segments[1], " select 1 ");
        assert_eq!(expr.segments[2], " ");
    }

    #[test]
    fn raw_and_normalized_are_kept() {
        let raw = "\"[truncate]\" + \"[t]\"";
        let expr = parts(raw);
        assert_eq!(expr.raw, raw);
        assert_eq!(expr.normalized, "[truncate][t]");
    }

    #[test]
    fn no_segment_is_format_error() {
        let err = extract("x", "x").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Format);
    }
}
