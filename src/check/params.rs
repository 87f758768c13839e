use crate::*;

/// Positional view over a literal's segments for one checker run.
pub(super) struct Params<'a> {
    pub macro_type: MacroType,
    expr: &'a MacroExpression,
    oracle: &'a dyn SqlOracle,
}

impl<'a> Params<'a> {
    pub fn new(macro_type: MacroType, expr: &'a MacroExpression, oracle: &'a dyn SqlOracle) -> Self {
        Self {
            macro_type,
            expr,
            oracle,
        }
    }

    /// Number of segments, counting the macro name.
    pub fn len(&self) -> usize {
        self.expr.segments.len()
    }

    pub fn normalized(&self) -> &'a str {
        &self.expr.normalized
    }

    pub fn has_flag(&self, flag: MacroFlag) -> bool {
        self.expr.has_flag(flag)
    }

    /// Trimmed segment text, `None` when missing or blank.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.expr
            .segments
            .get(index)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    pub fn require(&self, index: usize, label: &str) -> Outcome<&'a str> {
        self.get(index).ok_or_else(|| {
            Diagnostic::new(ErrorKind::Arity, format!("missing {label}"))
                .with_context(self.normalized())
        })
    }

    /// Rejects segments beyond `max`, the template length including the name.
    pub fn no_extra(&self, max: usize) -> Outcome {
        if self.len() <= max {
            return Ok(());
        }
        Err(Diagnostic::new(
            ErrorKind::SemanticRule,
            format!(
                "[{}] accepts at most {} parameter(s), found {}",
                self.macro_type,
                max - 1,
                self.len() - 1
            ),
        )
        .with_context(self.normalized()))
    }

    pub fn table(&self, index: usize, label: &str) -> Outcome<&'a str> {
        let table = self.require(index, label)?;
        if is_table_name(table) {
            Ok(table)
        } else {
            Err(self.invalid(format!("invalid {label} '{table}'"), table))
        }
    }

    pub fn invalid(&self, message: impl Into<String>, fragment: &str) -> Diagnostic {
        Diagnostic::new(ErrorKind::Pattern, message).with_context(fragment)
    }

    pub fn rule(&self, message: impl Into<String>, fragment: &str) -> Diagnostic {
        Diagnostic::new(ErrorKind::SemanticRule, message).with_context(fragment)
    }

    /// Hands `sql` to the oracle, reporting `fragment` as the offending text.
    pub fn parse(&self, sql: &str, label: &str, fragment: &str) -> Outcome {
        self.oracle.parse(sql).map_err(|err| {
            debug!("Oracle rejected {sql:?}: {err}");
            Diagnostic::new(ErrorKind::SqlSyntax, format!("cannot parse {label}"))
                .with_context(fragment)
                .with_detail(err.cause())
        })
    }

    pub fn statement(&self, sql: &str, label: &str) -> Outcome {
        self.parse(sql, label, sql)
    }

    pub fn condition(&self, table: &str, condition: &str, label: &str) -> Outcome {
        self.parse(&where_probe(table, condition), label, condition)
    }

    pub fn require_bind(&self, fragment: &str, label: &str) -> Outcome {
        if has_bind_variable(fragment) {
            Ok(())
        } else {
            Err(self.rule(format!("{label} must reference a bind variable"), fragment))
        }
    }

    /// Checks a dynamic condition clause by clause, then as one WHERE body.
    pub fn dynamic_condition(&self, table: &str, condition: &str) -> Outcome {
        const LABEL: &str = "[dynamic condition]";
        for clause in dynamic_clauses(condition) {
            if clause.text.is_empty() {
                return Err(self.invalid(format!("empty clause in {LABEL}"), condition));
            }
            self.require_bind(clause.text, "every [dynamic condition] clause")?;
        }
        let rewritten = rewrite_dynamic_condition(condition);
        trace!("Dynamic condition rewritten to {rewritten:?}");
        self.parse(&where_probe(table, &rewritten), LABEL, condition)
    }
}
