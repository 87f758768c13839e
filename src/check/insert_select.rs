//! `insertSelect`: `[target][source][field mapping][condition]`.
use super::Params;
use crate::*;
use std::collections::HashSet;

pub(super) fn check(p: &Params) -> Outcome {
    p.no_extra(5)?;
    let target = p.table(1, "[target table]")?;
    let source = p.table(2, "[source table]")?;

    let mut mapping = Vec::new();
    if let Some(list) = p.get(3) {
        let mut targets = HashSet::new();
        for entry in split_top_level(list).into_iter().map(str::trim) {
            let (to, from) = field_mapping(entry).ok_or_else(|| {
                p.invalid(
                    format!("invalid field mapping '{entry}', expected target=source"),
                    list,
                )
            })?;
            if !targets.insert(to.to_ascii_lowercase()) {
                return Err(p.rule(format!("target column '{to}' is mapped twice"), list));
            }
            mapping.push((to, from));
        }
    }

    let condition = p.get(4);
    if let Some(condition) = condition {
        p.condition(source, condition, "[condition]")?;
    }

    let sql = insert_select_statement(target, source, &mapping, condition);
    trace!("InsertSelect statement {sql:?}");
    p.statement(&sql, "[insertSelect] statement")
}

#[cfg(test)]
mod tests {
    use crate::testing::*;
    use crate::*;

    #[rstest]
    #[case("[insertSelect][a][b]")]
    #[case("[insertSelect][a][b][x=y, z = w]")]
    #[case("[insertSelect][a][b][][x = :x]")]
    fn valid(#[case] literal: &str) {
        common_init();
        assert_eq!(validate(literal), None);
    }

    #[rstest]
    #[case("[insertSelect][a]", ErrorKind::Arity)]
    #[case("[insertSelect][a][b c]", ErrorKind::Pattern)]
    #[case("[insertSelect][a][b][x]", ErrorKind::Pattern)]
    #[case("[insertSelect][a][b][x=y*2]", ErrorKind::Pattern)]
    #[case("[insertSelect][a][b][x=y,X=z]", ErrorKind::SemanticRule)]
    #[case("[insertSelect][a][b][][x = ]", ErrorKind::SqlSyntax)]
    #[case("[insertSelect][a][b][][x = :x][y]", ErrorKind::SemanticRule)]
    fn invalid(#[case] literal: &str, #[case] kind: ErrorKind) {
        common_init();
        let diagnostic = validate(literal).expect("literal should be rejected");
        assert_eq!(diagnostic.kind, kind, "{diagnostic}");
    }

    #[test]
    fn composes_mapped_statement() {
        let oracle = RecordingOracle::default();
        let validator = Validator::new(&oracle);
        assert_eq!(
            validator.validate("[insertSelect][a][b][x=y][k = :k]"),
            None
        );
        assert_eq!(
            oracle.statements().last().map(String::as_str),
            Some("INSERT INTO a (x) SELECT y FROM b WHERE k = :k")
        );
    }
}
