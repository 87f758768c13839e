use crate::*;
use sqlparser::parser::ParserError;
use std::cell::RefCell;

/// Rejects every statement with [`RejectingOracle::MESSAGE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectingOracle;

impl RejectingOracle {
    pub const MESSAGE: &'static str = "rejected by test oracle";
}

impl SqlOracle for RejectingOracle {
    fn parse(&self, _sql: &str) -> Result {
        Err(ParserError::ParserError(Self::MESSAGE.to_string()).into())
    }
}

/// Records every statement it is asked about, delegating to the generic
/// `sqlparser` oracle.
#[derive(Debug, Default)]
pub struct RecordingOracle {
    inner: SqlParserOracle,
    seen: RefCell<Vec<String>>,
}

impl RecordingOracle {
    pub fn statements(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl SqlOracle for RecordingOracle {
    fn parse(&self, sql: &str) -> Result {
        self.seen.borrow_mut().push(sql.to_string());
        self.inner.parse(sql)
    }
}

mod tests {
    use super::*;

    #[test]
    fn recording_oracle_keeps_order_and_verdict() {
        let oracle = RecordingOracle::default();
        assert!(oracle.parse("SELECT 1").is_ok());
        assert!(oracle.parse("SELECT").is_err());
        assert_eq!(oracle.statements(), vec!["SELECT 1", "SELECT"]);
    }

    #[test]
    fn rejecting_oracle_cause_is_message() {
        let err = RejectingOracle.parse("SELECT 1").unwrap_err();
        assert_eq!(err.cause(), RejectingOracle::MESSAGE);
    }
}
