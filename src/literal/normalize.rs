/// Removes concatenation noise from a literal as captured from source code.
///
/// Drops every `"`, `+`, `\r` and `\n`, collapses any whitespace run to a
/// single space, then joins segments split by a space (`] [` becomes `][`).
/// Never fails, and `normalize(&normalize(s)) == normalize(s)`.
///
/// NOTE: `+` is removed everywhere, including inside SQL fragments, because
/// hosts hand over the raw concatenation expression (`"[a]" + "[b]"`).
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        if matches!(c, '"' | '+' | '\r' | '\n') {
            continue;
        }
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    if pending_space {
        out.push(' ');
    }

    out.replace("] [", "][")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[truncate][t]", "[truncate][t]")]
    #[case("\"[truncate]\" + \"[t]\"", "[truncate][t]")]
    #[case("[select]\r\n\t   [select  *\tfrom t]", "[select][select * from t]")]
    #[case("[a] \n [b]", "[a][b]")]
    #[case("  [a]  ", " [a] ")]
    #[case("", "")]
    #[case("a+b", "ab")]
    fn normalizes(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[rstest]
    #[case("\"[exists]\" +\n    \"[t][a = :a]\"")]
    #[case("] ] [ [")]
    #[case("]\t\t[x] \r\n [y]")]
    #[case("\" \" \" \"")]
    #[case("[a]   [b]  [c]")]
    fn normalization_is_idempotent(#[case] raw: &str) {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn output_has_no_noise_characters() {
        let out = normalize("\"[a]\"\r\n+\"[b  c]\"");
        assert!(!out.contains(['"', '+', '\r', '\n']));
        assert!(!out.contains("  "));
    }
}
