//! Core generation engine.
//!
//! - `file_scanner`: source tree walk
//! - `parsers`: Go parsing via tree-sitter
//! - `collect`: doc comments and `@contract:` annotations
//! - `extract`: per-file records
//! - `validate`: cross-file annotation rules
//! - `amount`: deposit literal normalisation
//! - `generate`: Go source emission
//! - `context`: the pipeline tying the phases together

pub mod amount;
pub mod collect;
pub mod context;
pub mod data;
pub mod error;
pub mod extract;
pub mod file_scanner;
pub mod generate;
pub mod parsers;
pub mod validate;

pub use context::{Analysis, GenerateOptions, Generation, Generator, generate};
pub use data::{FieldRecord, FileRecord, MethodRecord, Param, SourcePath, StateRecord};
pub use error::GenerateError;
