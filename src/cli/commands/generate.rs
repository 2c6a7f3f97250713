use std::fs;

use anyhow::{Context, Result};

use super::{
    CommandKind, CommandResult, CommandSummary, Destination, GenerateSummary,
    helper::{Project, RunOutcome, run_generator},
};
use crate::cli::args::GenerateCommand;

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let project = Project::load(&cmd.common)?;

    let generation = match run_generator(&project)? {
        RunOutcome::Generated(generation) => generation,
        RunOutcome::Rejected {
            error,
            diagnostics,
            files_scanned,
        } => {
            return Ok(CommandResult::rejected(
                CommandKind::Generate,
                error.to_string(),
                diagnostics,
                files_scanned,
            ));
        }
    };

    let destination = if cmd.stdout {
        Destination::Stdout(generation.source)
    } else {
        let path = project.output_path(cmd.output.as_deref());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, &generation.source)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Destination::File(path)
    };

    Ok(CommandResult {
        kind: CommandKind::Generate,
        summary: Some(CommandSummary::Generate(GenerateSummary {
            state_name: generation.state_name,
            exports: generation.exports,
            destination,
        })),
        failure: None,
        diagnostics: generation.diagnostics,
        files_scanned: generation.files_scanned,
    })
}
