use super::Params;
use crate::*;
use std::collections::HashSet;

/// `insert`, `batchInsert`, `getSerialNo`: `[table][field list]`.
pub(super) fn check_fields(p: &Params) -> Outcome {
    p.no_extra(3)?;
    let table = p.table(1, "[table]")?;
    let fields = p.require(2, "[field list]")?;

    let mut pairs = field_pairs(p, fields, "[field list]")?;
    pairs.sort_by(|a, b| a.key.cmp(b.key));
    let sql = insert_probe(table, &pairs);
    trace!("Insert probe {sql:?}");
    p.parse(&sql, "[field list]", fields)
}

/// Parses a `column[=value]` list, rejecting malformed or repeated columns.
pub(super) fn field_pairs<'a>(p: &Params, list: &'a str, label: &str) -> Outcome<Vec<Pair<'a>>> {
    let pairs = parse_pairs(list);
    let mut seen = HashSet::new();
    for pair in &pairs {
        if pair.key.is_empty() {
            return Err(p.invalid(format!("empty entry in {label}"), list));
        }
        if !is_table_name(pair.key) {
            return Err(p.invalid(format!("invalid field name '{}'", pair.key), list));
        }
        if pair.value.is_some_and(str::is_empty) {
            return Err(p.invalid(format!("missing value for field '{}'", pair.key), list));
        }
        if !seen.insert(pair.key.to_ascii_lowercase()) {
            return Err(p.rule(format!("duplicate field '{}'", pair.key), list));
        }
    }
    Ok(pairs)
}

/// `batchDelete`, `getPrefetchSeq`: `[table][condition]`.
pub(super) fn check_condition(p: &Params) -> Outcome {
    p.no_extra(3)?;
    let table = p.table(1, "[table]")?;
    let condition = p.require(2, "[condition]")?;
    if p.macro_type == MacroType::BatchDelete {
        p.require_bind(condition, "[condition]")?;
    }
    p.condition(table, condition, "[condition]")
}

#[cfg(test)]
mod tests {
    use crate::testing::*;
    use crate::*;

    #[rstest]
    #[case("[insert][t][a]")]
    #[case("[insert][t][b = :b, a, c = hs_nvl(:c, 0)]")]
    #[case("[batchInsert][t][a=:a,b='x,y']")]
    #[case("[getSerialNo][t][serial_type=:serial_type]")]
    #[case("[batchDelete][t][a = :a]")]
    #[case("[getPrefetchSeq][t][sequence_name = 'entrust']")]
    fn valid(#[case] literal: &str) {
        common_init();
        assert_eq!(validate(literal), None);
    }

    #[rstest]
    #[case("[insert][t]", ErrorKind::Arity)]
    #[case("[insert][t-1][a]", ErrorKind::Pattern)]
    #[case("[insert][t][a,,b]", ErrorKind::Pattern)]
    #[case("[insert][t][a.b=:x]", ErrorKind::Pattern)]
    #[case("[insert][t][a=]", ErrorKind::Pattern)]
    #[case("[insert][t][a=:a,A]", ErrorKind::SemanticRule)]
    #[case("[insert][t][a=(]", ErrorKind::SqlSyntax)]
    #[case("[insert][t][a][b]", ErrorKind::SemanticRule)]
    #[case("[batchDelete][t][a = 1]", ErrorKind::SemanticRule)]
    #[case("[getPrefetchSeq][t][a =]", ErrorKind::SqlSyntax)]
    fn invalid(#[case] literal: &str, #[case] kind: ErrorKind) {
        common_init();
        let diagnostic = validate(literal).expect("literal should be rejected");
        assert_eq!(diagnostic.kind, kind, "{diagnostic}");
    }

    #[test]
    fn probe_lists_keys_in_sorted_order() {
        let oracle = RecordingOracle::default();
        let validator = Validator::new(&oracle);
        assert_eq!(validator.validate("[insert][t][b=:b,a]"), None);
        assert_eq!(
            oracle.statements(),
            vec!["INSERT INTO t (a, b) VALUES (:a, :b)".to_string()]
        );
    }
}
