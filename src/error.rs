use sqlparser::parser::ParserError;

/// Failures outside of macro validation itself.
///
/// Validation problems are never reported through this type; they become a
/// [`Diagnostic`](crate::Diagnostic). `Error` covers the plumbing around it:
/// loading configuration, reading input and the SQL oracle's own result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid query: {0}")]
    InvalidQuery(ParserError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl From<ParserError> for Error {
    fn from(value: ParserError) -> Self {
        Error::InvalidQuery(value)
    }
}

impl Error {
    /// Human readable cause without the variant prefix.
    ///
    /// Used when an oracle failure is folded into a diagnostic's detail line,
    /// where the "Invalid query" prefix would only repeat the message.
    pub fn cause(&self) -> String {
        match self {
            Error::InvalidQuery(ParserError::ParserError(msg))
            | Error::InvalidQuery(ParserError::TokenizerError(msg)) => msg.clone(),
            Error::InvalidQuery(other) => other.to_string(),
            Error::Config(msg) => msg.clone(),
            Error::Io(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parser_error_converts_into_invalid_query() {
        let err: Error = ParserError::ParserError("Expected: end of statement".into()).into();
        assert!(matches!(err, Error::InvalidQuery(_)));
        assert_eq!(err.cause(), "Expected: end of statement");
    }

    #[test]
    fn recursion_limit_cause_keeps_parser_wording() {
        let err: Error = ParserError::RecursionLimitExceeded.into();
        assert_eq!(err.cause(), ParserError::RecursionLimitExceeded.to_string());
    }

    #[test]
    fn display_keeps_variant_prefix() {
        let err = Error::Config("unknown dialect 'oracle'".into());
        assert_eq!(err.to_string(), "Configuration error: unknown dialect 'oracle'");
    }
}
