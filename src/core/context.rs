//! The generation pipeline.
//!
//! ## Phases
//! 1. **Scan**: walk the source root for `.go` files
//! 2. **Extract**: parse every file in parallel and collect records
//! 3. **Validate**: check the cross-file annotation rules
//! 4. **Generate**: render the Go source
//!
//! Scan and validation errors are fatal. A file that cannot be read or
//! parsed is skipped and reported as a diagnostic.

use std::{fs, path::Path};

use glob::Pattern;
use rayon::prelude::*;

use crate::{
    core::{
        data::{FileExtraction, FileRecord, MethodRecord, SourcePath, StateRecord},
        error::GenerateError,
        extract::FileExtractor,
        file_scanner::{relative_path, scan_files},
        generate::{generate_code, to_snake_case},
        parsers::parse_go_source,
        validate::validate,
    },
    issues::{Diagnostic, DiagnosticKind},
};

/// Settings of one generator run.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Extra glob patterns matched against project-relative paths.
    pub ignores: Vec<Pattern>,
}

impl GenerateOptions {
    /// Compile ignore patterns, failing on the first invalid one.
    pub fn with_ignores(patterns: &[String]) -> Result<Self, GenerateError> {
        let ignores = patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| GenerateError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ignores })
    }
}

/// Records aggregated from every scanned file, in scan order.
#[derive(Debug, Default)]
pub struct Analysis {
    pub files_scanned: usize,
    pub methods: Vec<MethodRecord>,
    pub states: Vec<StateRecord>,
    pub files: Vec<FileRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    /// Methods that get an export wrapper.
    pub fn exported_methods(&self) -> Vec<&MethodRecord> {
        self.methods.iter().filter(|m| m.is_exported()).collect()
    }

    /// Validate the records and render the Go source.
    pub fn into_generation(mut self) -> Result<Generation, GenerateError> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        let state = validate(&self.methods, &self.states)?;

        let exported = self.exported_methods();
        diagnostics.extend(receiver_mismatches(&exported, state));

        let source = generate_code(&exported, state, &self.files, &mut diagnostics);

        Ok(Generation {
            source,
            state_name: state.name.clone(),
            exports: exported.iter().map(|m| to_snake_case(&m.name)).collect(),
            diagnostics,
            files_scanned: self.files_scanned,
        })
    }
}

/// Result of a successful run.
#[derive(Debug)]
pub struct Generation {
    /// The generated Go file.
    pub source: String,
    pub state_name: String,
    /// Export names in emission order.
    pub exports: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
    pub files_scanned: usize,
}

/// Outcome of processing a single file.
enum FileOutcome {
    Extracted(Box<FileExtraction>),
    OtherPackage,
    Failed(Diagnostic),
}

pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Scan and extract without validating.
    pub fn analyze(&self, root: &Path) -> Result<Analysis, GenerateError> {
        let paths = scan_files(root, &self.options.ignores)?;

        let outcomes: Vec<FileOutcome> = paths
            .par_iter()
            .map(|path| process_file(path, root))
            .collect();

        let mut analysis = Analysis {
            files_scanned: paths.len(),
            ..Analysis::default()
        };
        for outcome in outcomes {
            match outcome {
                FileOutcome::Extracted(extraction) => {
                    let extraction = *extraction;
                    analysis.methods.extend(extraction.methods);
                    analysis.states.extend(extraction.states);
                    analysis.files.push(extraction.file);
                }
                FileOutcome::OtherPackage => {}
                FileOutcome::Failed(diagnostic) => analysis.diagnostics.push(diagnostic),
            }
        }

        Ok(analysis)
    }

    /// Run the whole pipeline.
    pub fn run(&self, root: &Path) -> Result<Generation, GenerateError> {
        self.analyze(root)?.into_generation()
    }
}

/// Generate the contract glue for the Go project at `root`.
///
/// Diagnostics are dropped; use [`Generator::run`] to inspect them.
pub fn generate(root: &Path) -> Result<String, GenerateError> {
    Generator::new(GenerateOptions::default())
        .run(root)
        .map(|generation| generation.source)
}

fn process_file(path: &Path, root: &Path) -> FileOutcome {
    let relative = relative_path(path, root);

    let code = match fs::read_to_string(path) {
        Ok(code) => code,
        Err(err) => {
            return FileOutcome::Failed(Diagnostic::parse_error(
                relative,
                format!("failed to read file: {}", err),
            ));
        }
    };

    let parsed = match parse_go_source(code, &relative) {
        Ok(parsed) => parsed,
        Err(err) => return FileOutcome::Failed(Diagnostic::parse_error(relative, err.to_string())),
    };

    let source_path = SourcePath {
        absolute: path.to_path_buf(),
        relative,
    };
    match FileExtractor::new(&parsed, source_path).extract() {
        Some(extraction) => FileOutcome::Extracted(Box::new(extraction)),
        None => FileOutcome::OtherPackage,
    }
}

fn receiver_mismatches(exported: &[&MethodRecord], state: &StateRecord) -> Vec<Diagnostic> {
    exported
        .iter()
        .filter(|m| m.receiver_type != state.name)
        .map(|m| {
            Diagnostic::new(
                DiagnosticKind::ReceiverMismatch,
                Some(m.file.relative.clone()),
                format!(
                    "method '{}' is declared on '{}' but will be called on state type '{}'",
                    m.name, m.receiver_type, state.name
                ),
            )
        })
        .collect()
}
