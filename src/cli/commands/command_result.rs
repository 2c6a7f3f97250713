use std::path::PathBuf;

use crate::{
    cli::exit_status::ExitStatus,
    issues::{Diagnostic, Severity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Generate,
    Check,
    Init,
}

#[derive(Debug)]
pub enum CommandSummary {
    Generate(GenerateSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

/// Where the generated source went.
#[derive(Debug)]
pub enum Destination {
    File(PathBuf),
    Stdout(String),
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub state_name: String,
    pub exports: Vec<String>,
    pub destination: Destination,
}

#[derive(Debug)]
pub struct CheckSummary {
    pub state_name: String,
    pub exports: Vec<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running neargo commands
#[derive(Debug)]
pub struct CommandResult {
    pub kind: CommandKind,
    /// `None` when the command was rejected.
    pub summary: Option<CommandSummary>,
    /// Why the command was rejected (validation failure, existing config).
    pub failure: Option<String>,
    /// Diagnostics collected while scanning and generating.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of Go files scanned.
    pub files_scanned: usize,
}

impl CommandResult {
    /// A command that was refused, reported with exit status 1.
    pub fn rejected(
        kind: CommandKind,
        failure: impl Into<String>,
        diagnostics: Vec<Diagnostic>,
        files_scanned: usize,
    ) -> Self {
        Self {
            kind,
            summary: None,
            failure: Some(failure.into()),
            diagnostics,
            files_scanned,
        }
    }

    pub fn parse_error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.failure.is_some() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
