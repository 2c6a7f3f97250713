//! neargo - contract glue generator for NEAR Go smart contracts
//!
//! neargo scans a Go project for `@contract:` annotations and generates
//! the export wrappers, state accessors and payment checks that bind the
//! annotated methods to the NEAR runtime.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, extraction, validation and code generation
//! - `issues`: Diagnostics reported alongside a run

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;

pub use crate::core::{GenerateError, generate};
