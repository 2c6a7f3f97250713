//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Write the generated contract glue file
//! - `check`: Validate annotations without writing anything
//! - `init`: Create a `.neargorc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Go project root to scan (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file, relative to the source root (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated source instead of writing it
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate export wrappers for @contract annotated methods
    Generate(GenerateCommand),
    /// Validate @contract annotations without writing output
    Check(CheckCommand),
    /// Initialize a new .neargorc.json configuration file
    Init,
}
