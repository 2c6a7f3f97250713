//! Diagnostics reported alongside a generation run.
//!
//! Diagnostics never abort generation. Fatal problems are
//! [`GenerateError`](crate::core::GenerateError)s instead.

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticKind {
    /// A source file could not be read or parsed and was skipped.
    ParseError,
    /// A `min_deposit` value could not be normalised; `"0"` was used.
    InvalidAmount,
    /// An exported method is declared on a type other than the state type.
    ReceiverMismatch,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::ParseError => Severity::Error,
            DiagnosticKind::InvalidAmount | DiagnosticKind::ReceiverMismatch => Severity::Warning,
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::ParseError => write!(f, "parse-error"),
            DiagnosticKind::InvalidAmount => write!(f, "invalid-amount"),
            DiagnosticKind::ReceiverMismatch => write!(f, "receiver-mismatch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Project-relative path of the file concerned, if any.
    pub file: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, file: Option<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            file,
            message: message.into(),
        }
    }

    pub fn parse_error(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::ParseError, Some(file.into()), message)
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}: {}", file, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
