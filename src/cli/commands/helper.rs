use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{GenerateError, GenerateOptions, Generation, Generator},
    issues::Diagnostic,
};

/// Source root and configuration of one invocation.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Resolve the project from CLI arguments and the nearest config file.
    ///
    /// Priority: CLI flags > config file > defaults.
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let start = common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let loaded = load_config(&start)?;
        if common.verbose && !loaded.from_file {
            eprintln!("Note: No .neargorc.json found, using default configuration");
        }
        let config = loaded.config;

        let root = match &common.source_root {
            Some(root) => root.clone(),
            None => PathBuf::from(&config.source_root),
        };

        Ok(Self { root, config })
    }

    pub fn output_path(&self, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(output) if output.is_absolute() => output.to_path_buf(),
            Some(output) => self.root.join(output),
            None => self.config.output_path(&self.root),
        }
    }
}

/// Outcome of a generator run as seen by a command.
pub enum RunOutcome {
    Generated(Generation),
    /// Validation failed; diagnostics gathered before the failure are kept.
    Rejected {
        error: GenerateError,
        diagnostics: Vec<Diagnostic>,
        files_scanned: usize,
    },
}

/// Run the generator, separating validation failures from internal errors.
pub fn run_generator(project: &Project) -> Result<RunOutcome> {
    let options = GenerateOptions::with_ignores(&project.config.ignores)?;
    let analysis = Generator::new(options)
        .analyze(&project.root)
        .with_context(|| format!("Failed to scan {}", project.root.display()))?;

    let diagnostics = analysis.diagnostics.clone();
    let files_scanned = analysis.files_scanned;

    match analysis.into_generation() {
        Ok(generation) => Ok(RunOutcome::Generated(generation)),
        Err(error) if error.is_validation() => Ok(RunOutcome::Rejected {
            error,
            diagnostics,
            files_scanned,
        }),
        Err(error) => Err(error.into()),
    }
}
