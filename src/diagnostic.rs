//! Structured validation diagnostics and their rendered text form.
use crate::*;
use std::fmt;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorKind {
    /// Malformed bracket structure or an unrecognised flag marker.
    #[display("format error")]
    Format,
    /// Macro name outside the allow-list.
    #[display("unknown macro")]
    UnknownMacro,
    /// A mandatory segment is missing or blank.
    #[display("missing parameter")]
    Arity,
    /// An identifier or parameter does not have the required shape.
    #[display("invalid parameter")]
    Pattern,
    /// A synthesized statement was rejected by the SQL parser.
    #[display("sql syntax error")]
    SqlSyntax,
    /// Parameters are individually fine but do not compose.
    #[display("invalid composition")]
    SemanticRule,
}

/// A single, displayable validation failure.
///
/// `template` and `doc` are absent only for failures that happen before a
/// macro type is known (bracket errors, unknown macro names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
    pub context: Option<String>,
    pub detail: Option<String>,
    pub template: Option<&'static str>,
    pub doc: Option<&'static str>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
            detail: None,
            template: None,
            doc: None,
        }
    }

    /// Echo of the literal or fragment the failure refers to.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Underlying cause, usually the SQL parser's message.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_usage(mut self, usage: &Usage) -> Self {
        self.template = Some(usage.template);
        self.doc = Some(usage.doc);
        self
    }

    /// Only attaches usage if none is present yet.
    pub(crate) fn or_usage(self, usage: &Usage) -> Self {
        if self.template.is_some() {
            self
        } else {
            self.with_usage(usage)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(context) = &self.context {
            write!(f, "\n  at: {context}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, "\n  cause: {detail}")?;
        }
        if let Some(template) = self.template {
            write!(f, "\n\nusage: {template}")?;
        }
        if let Some(doc) = self.doc {
            write!(f, "\n\n{}", doc.trim_end())?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Result of a validation stage: `Err` carries the diagnostic to report.
pub type Outcome<T = ()> = std::result::Result<T, Diagnostic>;
