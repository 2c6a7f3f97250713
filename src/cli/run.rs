use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, generate::generate, init::init},
};

/// Dispatch to the command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary, diagnostics and any validation failure
/// - `Err` on internal errors (I/O, config, scan)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
