//! Record extraction from parsed Go files.
//!
//! - `file_extractor`: walks one file's top level into method, state and file records
//! - `type_signature`: renders type expressions as canonical text

pub mod file_extractor;
pub mod type_signature;

pub use file_extractor::{ENTRY_PACKAGE, FileExtractor};
pub use type_signature::{receiver_type_name, render_type};
