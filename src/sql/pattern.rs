//! Character-class rules for identifiers and parameter values.
//!
//! `\w` here means ASCII word characters only: table names end up in
//! generated source code.
use regex::Regex;
use std::sync::LazyLock;

/// Table name: one or more word characters.
static TABLE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// Strict identifier: starts with a letter.
static STRICT_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").unwrap());

/// A named bind variable such as `:client_id`. `::type` casts do not count.
static BIND_VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^:]):[A-Za-z0-9_]+").unwrap());

/// `target = source` column mapping.
static FIELD_MAPPING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_]+)\s*=\s*([A-Za-z0-9_]+)$").unwrap());

/// Paging value: a positive integer literal or a bind variable.
static PAGE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[1-9][0-9]*|:[A-Za-z0-9_]+)$").unwrap());

pub fn is_table_name(s: &str) -> bool {
    TABLE_NAME.is_match(s)
}

pub fn is_strict_identifier(s: &str) -> bool {
    STRICT_IDENTIFIER.is_match(s)
}

/// True when `fragment` references a bind variable outside string literals.
pub fn has_bind_variable(fragment: &str) -> bool {
    BIND_VARIABLE.is_match(&without_strings(fragment))
}

/// Blanks out single-quoted literals, quotes included.
fn without_strings(fragment: &str) -> String {
    let mut quoted = false;
    fragment
        .chars()
        .map(|c| {
            if c == '\'' {
                quoted = !quoted;
                ' '
            } else if quoted {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Splits a `target = source` mapping into its two column names.
pub fn field_mapping(pair: &str) -> Option<(&str, &str)> {
    let caps = FIELD_MAPPING.captures(pair)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

pub fn is_page_value(s: &str) -> bool {
    PAGE_VALUE.is_match(s)
}
