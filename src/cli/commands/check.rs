use anyhow::Result;

use super::{
    CheckSummary, CommandKind, CommandResult, CommandSummary,
    helper::{Project, RunOutcome, run_generator},
};
use crate::cli::args::CheckCommand;

/// Validate the project the way `generate` would, without writing output.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let project = Project::load(&cmd.common)?;

    let result = match run_generator(&project)? {
        RunOutcome::Generated(generation) => CommandResult {
            kind: CommandKind::Check,
            summary: Some(CommandSummary::Check(CheckSummary {
                state_name: generation.state_name,
                exports: generation.exports,
            })),
            failure: None,
            diagnostics: generation.diagnostics,
            files_scanned: generation.files_scanned,
        },
        RunOutcome::Rejected {
            error,
            diagnostics,
            files_scanned,
        } => CommandResult::rejected(
            CommandKind::Check,
            error.to_string(),
            diagnostics,
            files_scanned,
        ),
    };

    Ok(result)
}
