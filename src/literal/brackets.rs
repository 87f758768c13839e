use crate::*;

/// Checks that every `]` closes an earlier `[` and every `[` is closed.
///
/// A string without any bracket cannot be a macro literal at all and is
/// reported as such. Stops at the first unmatched `]`.
pub fn check_brackets(normalized: &str) -> Outcome {
    if !normalized.contains(['[', ']']) {
        return Err(Diagnostic::new(
            ErrorKind::Format,
            "syntax invalid, see documentation",
        )
        .with_context(normalized));
    }

    let mut depth = 0usize;
    for c in normalized.chars() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => {
                return Err(
                    Diagnostic::new(ErrorKind::Format, "missing left bracket [")
                        .with_context(normalized),
                );
            }
            ']' => depth -= 1,
            _ => {}
        }
    }

    if depth == 0 {
        Ok(())
    } else {
        Err(Diagnostic::new(ErrorKind::Format, "missing right bracket ]").with_context(normalized))
    }
}
