//! `selectPage` and `selectRowNum`: the select family plus a paging block.
use super::{Params, select};
use crate::*;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Paging {
    /// `pageNo`, `pageSize` and `rownum`.
    Page,
    /// `rownum` only.
    RowNum,
}

impl Paging {
    fn label(self) -> &'static str {
        match self {
            Paging::Page => "[paging]",
            Paging::RowNum => "[rownum]",
        }
    }

    /// Canonical spelling of an accepted key.
    fn key(self, key: &str) -> Option<&'static str> {
        let keys: &[&'static str] = match self {
            Paging::Page => &["pageNo", "pageSize", "rownum"],
            Paging::RowNum => &["rownum"],
        };
        keys.iter().copied().find(|k| k.eq_ignore_ascii_case(key))
    }
}

pub(super) fn check(p: &Params, paging: Paging) -> Outcome {
    p.no_extra(7)?;
    let sql = p.require(1, "[sql]")?;
    p.statement(sql, "[sql]")?;
    paging_block(p, paging)?;
    select::clauses(p, 3)
}

fn paging_block(p: &Params, paging: Paging) -> Outcome {
    let label = paging.label();
    let block = p.require(2, label)?;

    let mut seen = HashSet::new();
    for pair in parse_pairs(block) {
        let key = paging
            .key(pair.key)
            .ok_or_else(|| p.invalid(format!("unknown {label} key '{}'", pair.key), block))?;
        let value = pair.value.unwrap_or_default();
        if !is_page_value(value) {
            return Err(p.invalid(
                format!("{key} must be a positive integer or a bind variable, found '{value}'"),
                block,
            ));
        }
        if !seen.insert(key) {
            return Err(p.rule(format!("duplicate {label} key '{key}'"), block));
        }
    }

    if seen.contains("rownum") {
        Ok(())
    } else {
        Err(p.rule(format!("{label} must set rownum"), block))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::*;
    use crate::*;

    #[rstest]
    #[case("[selectPage][select * from t][rownum=10]")]
    #[case("[selectPage][select * from t][PAGENO=:p, pagesize=20, RowNum=:n][a][][a = :a][order by a]")]
    #[case("[selectRowNum][select * from t][rownum = :rownum]")]
    #[case("[selectRowNum][select * from t][rownum=1][a, b][a = 1]")]
    fn valid(#[case] literal: &str) {
        common_init();
        assert_eq!(validate(literal), None);
    }

    #[rstest]
    #[case("[selectPage][select * from t]", ErrorKind::Arity)]
    #[case("[selectPage][select * from t][pageNo=1]", ErrorKind::SemanticRule)]
    #[case("[selectPage][select * from t][rownum=0]", ErrorKind::Pattern)]
    #[case("[selectPage][select * from t][rownum=-5]", ErrorKind::Pattern)]
    #[case("[selectPage][select * from t][rownum]", ErrorKind::Pattern)]
    #[case("[selectPage][select * from t][rownum=1,limit=5]", ErrorKind::Pattern)]
    #[case("[selectPage][select * from t][rownum=1,ROWNUM=2]", ErrorKind::SemanticRule)]
    #[case("[selectRowNum][select * from t][pageNo=1,rownum=1]", ErrorKind::Pattern)]
    #[case("[selectRowNum][select from][rownum=1]", ErrorKind::SqlSyntax)]
    #[case("[selectRowNum][select * from t][rownum=1][][][a = 1]", ErrorKind::SemanticRule)]
    #[case("[selectRowNum][select * from t][rownum=1][][][][][x]", ErrorKind::SemanticRule)]
    fn invalid(#[case] literal: &str, #[case] kind: ErrorKind) {
        common_init();
        let diagnostic = validate(literal).expect("literal should be rejected");
        assert_eq!(diagnostic.kind, kind, "{diagnostic}");
    }

    #[test]
    fn missing_rownum_names_the_block() {
        let diagnostic = validate("[selectPage][select * from t][pageSize=10]").unwrap();
        assert_eq!(diagnostic.message, "[paging] must set rownum");
        assert_eq!(diagnostic.context.as_deref(), Some("pageSize=10"));
    }
}
