//! Source parsers.
//!
//! - `go`: Go source parser (uses tree-sitter-go for the syntax tree)

pub mod go;

pub use go::{ParsedGo, parse_go_source};
