//! `update` in full form (`[update ...statement...]`) or table form
//! (`[table][set fields][condition][set clause]`).
use super::{Params, insert::field_pairs};
use crate::*;

pub(super) fn check(p: &Params) -> Outcome {
    let first = p.require(1, "[table] or UPDATE statement")?;
    if is_full_statement(first) {
        if p.len() > 2 {
            return Err(p.rule(
                "a complete UPDATE statement accepts no further parameters",
                p.normalized(),
            ));
        }
        return p.statement(first, "[update] statement");
    }

    p.no_extra(5)?;
    let table = p.table(1, "[table]")?;
    let fields = p.get(2);
    let condition = p.get(3);
    let clause = p.get(4);

    let mut set = Vec::new();
    if let Some(fields) = fields {
        let pairs = field_pairs(p, fields, "[set fields]")?;
        let list = assignments(&pairs);
        p.parse(&set_probe(table, &list), "[set fields]", fields)?;
        set.push(list);
    }
    if let Some(condition) = condition {
        p.condition(table, condition, "[condition]")?;
    }
    if let Some(clause) = clause {
        p.parse(&set_probe(table, clause), "[set clause]", clause)?;
        set.push(clause.to_string());
    }
    if set.is_empty() {
        return p.require(2, "[set fields] or [set clause]").map(|_| ());
    }

    let mut sql = set_probe(table, &set.join(", "));
    if let Some(condition) = condition {
        sql = format!("{sql} WHERE {condition}");
    }
    trace!("Update statement {sql:?}");
    p.statement(&sql, "[update] statement")
}

/// `update` followed by whitespace; `update_log` is a table name.
fn is_full_statement(first: &str) -> bool {
    let lower = first.trim().to_ascii_lowercase();
    lower
        .strip_prefix("update")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_whitespace)
}
