use itertools::Itertools;

/// Placeholder table for probes that need a FROM clause but no real table.
pub const DUAL: &str = "dual";

/// Marker that joins a dynamic clause with `OR` instead of `AND`.
pub const OR_MARKER: &str = "/*#OR*/";

/// Splits on commas outside parentheses and single-quoted strings.
///
/// `hs_nvl(a, 0) = :x, b = ','` yields `["hs_nvl(a, 0) = :x", " b = ','"]`.
/// Pieces are not trimmed and empty pieces are kept.
pub fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut quoted = false;
    let mut start = 0;

    for (i, c) in list.char_indices() {
        match c {
            '\'' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => depth -= 1,
            ',' if !quoted && depth <= 0 => {
                parts.push(&list[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&list[start..]);
    parts
}

/// One `key` or `key=value` entry of a parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair<'a> {
    pub key: &'a str,
    /// `None` for a bare key, which binds the parameter of the same name.
    pub value: Option<&'a str>,
}

impl Pair<'_> {
    /// The value expression, with a bare key bound as `:key`.
    pub fn value_or_bind(&self) -> String {
        match self.value {
            Some(value) => value.to_string(),
            None => format!(":{}", self.key),
        }
    }
}

/// Parses a comma separated `key[=value]` list, splitting each entry on its
/// first `=`. Keys and values are trimmed; empty entries are kept as empty
/// keys so callers can report them.
pub fn parse_pairs(list: &str) -> Vec<Pair<'_>> {
    split_top_level(list)
        .into_iter()
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => Pair {
                key: key.trim(),
                value: Some(value.trim()),
            },
            None => Pair {
                key: entry.trim(),
                value: None,
            },
        })
        .collect()
}

/// How a dynamic clause attaches to the clauses before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Joiner {
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicClause<'a> {
    pub joiner: Joiner,
    pub text: &'a str,
}

/// Splits a dynamic condition into clauses, resolving the OR marker.
pub fn dynamic_clauses(condition: &str) -> Vec<DynamicClause<'_>> {
    split_top_level(condition)
        .into_iter()
        .map(str::trim)
        .map(|clause| match clause.strip_prefix(OR_MARKER) {
            Some(rest) => DynamicClause {
                joiner: Joiner::Or,
                text: rest.trim(),
            },
            None => DynamicClause {
                joiner: Joiner::And,
                text: clause,
            },
        })
        .collect()
}

/// Rewrites a dynamic condition into a plain WHERE clause body.
pub fn rewrite_dynamic_condition(condition: &str) -> String {
    dynamic_clauses(condition)
        .into_iter()
        .enumerate()
        .map(|(i, clause)| match i {
            0 => clause.text.to_string(),
            _ => format!("{} {}", clause.joiner, clause.text),
        })
        .join(" ")
}

pub fn where_probe(table: &str, condition: &str) -> String {
    format!("SELECT * FROM {table} WHERE {condition}")
}

pub fn fields_probe(fields: &str) -> String {
    format!("SELECT {fields} FROM {DUAL}")
}

/// Probe for a trailing ORDER BY / GROUP BY clause.
pub fn tail_probe(clause: &str) -> String {
    format!("SELECT * FROM {DUAL} {clause}")
}

pub fn insert_probe(table: &str, pairs: &[Pair<'_>]) -> String {
    format!(
        "INSERT INTO {table} ({}) VALUES ({})",
        pairs.iter().map(|p| p.key).join(", "),
        pairs.iter().map(Pair::value_or_bind).join(", ")
    )
}

pub fn set_probe(table: &str, assignments: &str) -> String {
    format!("UPDATE {table} SET {assignments}")
}

pub fn assignments(pairs: &[Pair<'_>]) -> String {
    pairs
        .iter()
        .map(|p| format!("{} = {}", p.key, p.value_or_bind()))
        .join(", ")
}

/// `INSERT INTO target [(cols)] SELECT cols|* FROM source [WHERE ...]`.
pub fn insert_select_statement(
    target: &str,
    source: &str,
    mapping: &[(&str, &str)],
    condition: Option<&str>,
) -> String {
    let mut sql = if mapping.is_empty() {
        format!("INSERT INTO {target} SELECT * FROM {source}")
    } else {
        format!(
            "INSERT INTO {target} ({}) SELECT {} FROM {source}",
            mapping.iter().map(|(t, _)| t).join(", "),
            mapping.iter().map(|(_, s)| s).join(", ")
        )
    };
    if let Some(condition) = condition {
        sql.push_str(" WHERE ");
        sql.push_str(condition);
    }
    sql
}
