use super::Params;
use crate::*;

/// `select`, `selectList`: `[sql][query fields][condition][dynamic condition][group/order clause]`.
pub(super) fn check(p: &Params) -> Outcome {
    p.no_extra(6)?;
    let sql = p.require(1, "[sql]")?;
    p.statement(sql, "[sql]")?;
    clauses(p, 2)
}

/// Checks the optional trailing parameters shared by the select family,
/// starting at the `[query fields]` segment.
pub(super) fn clauses(p: &Params, fields_at: usize) -> Outcome {
    if let Some(fields) = p.get(fields_at) {
        p.parse(&fields_probe(fields), "[query fields]", fields)?;
    }
    if let Some(condition) = p.get(fields_at + 1) {
        p.condition(DUAL, condition, "[condition]")?;
    }
    if let Some(dynamic) = p.get(fields_at + 2) {
        p.dynamic_condition(DUAL, dynamic)?;
    }
    if let Some(tail) = p.get(fields_at + 3) {
        p.parse(&tail_probe(tail), "[group/order clause]", tail)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::testing::*;
    use crate::*;

    #[rstest]
    #[case("[select][select 1]")]
    #[case("[selectList][select a, b from t][][][a = :a][order by b desc]")]
    #[case("[select][select * from t][][a = 1][][group by a]")]
    #[case("[select][select * from t][][][][]")]
    fn valid(#[case] literal: &str) {
        common_init();
        assert_eq!(validate(literal), None);
    }

    #[rstest]
    #[case("[select]", ErrorKind::Arity)]
    #[case("[select][ ]", ErrorKind::Arity)]
    #[case("[select][select from]", ErrorKind::SqlSyntax)]
    #[case("[select][select 1; select 2]", ErrorKind::SqlSyntax)]
    #[case("[select][select * from t][count(]", ErrorKind::SqlSyntax)]
    #[case("[select][select * from t][][a = ]", ErrorKind::SqlSyntax)]
    #[case("[select][select * from t][][][a = 1]", ErrorKind::SemanticRule)]
    #[case("[select][select * from t][][][][order a]", ErrorKind::SqlSyntax)]
    #[case("[select][select * from t][][][][][x]", ErrorKind::SemanticRule)]
    fn invalid(#[case] literal: &str, #[case] kind: ErrorKind) {
        common_init();
        let diagnostic = validate(literal).expect("literal should be rejected");
        assert_eq!(diagnostic.kind, kind, "{diagnostic}");
    }

    #[test]
    fn parse_failure_carries_oracle_message() {
        let diagnostic = validate("[select][select * from t][][a = ]").unwrap();
        assert_eq!(diagnostic.message, "cannot parse [condition]");
        assert_eq!(diagnostic.context.as_deref(), Some("a ="));
        assert!(diagnostic.detail.is_some());
        assert_eq!(diagnostic.template, MacroType::Select.usage().map(|u| u.template));
    }
}
