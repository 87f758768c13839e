//! The validation pipeline: normalize, check brackets, extract, dispatch.
use crate::*;
use std::sync::LazyLock;

/// Validates macro literals against a SQL oracle.
///
/// Holds no state besides the oracle, so one validator can be shared
/// between threads when the oracle allows it.
#[derive(Debug, Clone, Default)]
pub struct Validator<O = SqlParserOracle> {
    oracle: O,
}

impl<O: SqlOracle> Validator<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// `None` when the literal is valid.
    pub fn validate(&self, raw: &str) -> Option<Diagnostic> {
        self.check(raw).err()
    }

    pub fn check(&self, raw: &str) -> Outcome {
        let normalized = normalize(raw);
        trace!("Normalized {raw:?} to {normalized:?}");

        check_brackets(&normalized)?;
        let expr = extract(raw, &normalized)?;
        debug!(
            "Extracted {} segment(s), flags {:?}",
            expr.segments.len(),
            expr.flags
        );

        let name = expr.name();
        let macro_type = MacroType::from_name(name).ok_or_else(|| {
            Diagnostic::new(
                ErrorKind::UnknownMacro,
                format!("cannot resolve macro name: {name}"),
            )
            .with_context(&normalized)
        })?;

        match macro_type.checker() {
            Some(checker) => {
                trace!("Dispatching [{macro_type}] to {checker:?}");
                checker.check(macro_type, &expr, &self.oracle)
            }
            None => {
                debug!("[{macro_type}] has no checker, accepting {normalized:?}");
                Ok(())
            }
        }
    }
}

impl Validator {
    /// Validator using the dialect from [`config()`].
    pub fn from_config() -> Result<Self> {
        Ok(Self::new(SqlParserOracle::from_config()?))
    }
}

static DEFAULT: LazyLock<Validator> = LazyLock::new(|| {
    Validator::from_config().unwrap_or_else(|err| {
        warn!("Falling back to the generic SQL dialect: {err}");
        Validator::default()
    })
});

/// Validates one macro literal with the configured dialect.
///
/// Returns `None` for a valid literal, otherwise the first problem found.
pub fn validate(raw: &str) -> Option<Diagnostic> {
    DEFAULT.validate(raw)
}
