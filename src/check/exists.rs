//! `exists` and `delete`: a table, a WHERE condition and an optional dynamic
//! condition. With `<T>` the condition segment is a complete statement.
use super::Params;
use crate::*;

pub(super) fn check(p: &Params) -> Outcome {
    p.no_extra(4)?;
    let table = p.table(1, "[table]")?;

    if p.has_flag(MacroFlag::TotalSql) {
        if p.len() > 3 {
            return Err(p.rule(
                "[dynamic condition] is not allowed in <T> mode",
                p.normalized(),
            ));
        }
        let sql = p.require(2, "[condition]")?;
        return p.statement(sql, "[condition] statement");
    }

    let condition = p.get(2);
    let dynamic = p.get(3);
    if condition.is_none() && dynamic.is_none() {
        return p.require(2, "[condition]").map(|_| ());
    }

    if let Some(condition) = condition {
        p.require_bind(condition, "[condition]")?;
        p.condition(table, condition, "[condition]")?;
    }
    if let Some(dynamic) = dynamic {
        p.dynamic_condition(table, dynamic)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::testing::*;
    use crate::*;

    #[rstest]
    #[case("[exists][t][a = :a]")]
    #[case("[exists][t][][a = :a, /*#OR*/ b = :b]")]
    #[case("[delete][t][a = 1 and b = :b][c > :c]")]
    #[case("[exists]<T>[t][select count(0) from t where a = :a]")]
    #[case("[delete<T>][t][delete from t where a = :a]")]
    fn valid(#[case] literal: &str) {
        common_init();
        assert_eq!(validate(literal), None);
    }

    #[rstest]
    #[case("[exists][t1][status='A']", ErrorKind::SemanticRule)]
    #[case("[exists][t][a = '10:30']", ErrorKind::SemanticRule)]
    #[case("[exists][t1]", ErrorKind::Arity)]
    #[case("[exists][t1][][ ]", ErrorKind::Arity)]
    #[case("[exists][][a = :a]", ErrorKind::Arity)]
    #[case("[exists][t.x][a = :a]", ErrorKind::Pattern)]
    #[case("[exists][t][a = = :a]", ErrorKind::SqlSyntax)]
    #[case("[exists][t][a = :a][b = 1]", ErrorKind::SemanticRule)]
    #[case("[exists][t][a = :a][b = :b,]", ErrorKind::Pattern)]
    #[case("[exists][t][a = :a][b = :b][c]", ErrorKind::SemanticRule)]
    #[case("[exists]<T>[t][select count(0) from t][a = :a]", ErrorKind::SemanticRule)]
    #[case("[exists]<T>[t][select count(0) from]", ErrorKind::SqlSyntax)]
    fn invalid(#[case] literal: &str, #[case] kind: ErrorKind) {
        common_init();
        let diagnostic = validate(literal).expect("literal should be rejected");
        assert_eq!(diagnostic.kind, kind, "{diagnostic}");
        assert!(diagnostic.template.is_some());
    }
}
