use std::path::PathBuf;

use thiserror::Error;

use crate::core::collect::AnnotationKind;

/// Fatal generation errors.
///
/// Validation variants are checked in declaration order and each names the
/// offending state or method.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to scan source tree: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid ignore pattern \"{pattern}\": {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no struct with @contract:state found")]
    NoState,

    #[error(
        "found {} structs with @contract:state, only 1 is allowed ({})",
        names.len(),
        names.join(", ")
    )]
    AmbiguousState { names: Vec<String> },

    #[error(
        "found {} methods with @contract:init, only 1 is allowed ({})",
        names.len(),
        names.join(", ")
    )]
    AmbiguousInit { names: Vec<String> },

    #[error("method '{method}' cannot be both {first} and {second}")]
    IncompatibleAnnotations {
        method: String,
        first: AnnotationKind,
        second: AnnotationKind,
    },

    #[error("no methods with @contract annotations found")]
    NothingToExport,
}

impl GenerateError {
    /// Whether the error comes from the annotation rules rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::NoState
                | Self::AmbiguousState { .. }
                | Self::AmbiguousInit { .. }
                | Self::IncompatibleAnnotations { .. }
                | Self::NothingToExport
        )
    }
}
