//! Data types shared across the generation pipeline.
//!
//! - `records`: method, state and file records built during extraction

pub mod records;

pub use records::{
    FieldRecord, FileExtraction, FileRecord, MethodRecord, Param, SourcePath, StateRecord,
};
