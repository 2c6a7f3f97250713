//! Records produced by extraction and consumed by validation and generation.

use std::path::PathBuf;

use crate::core::collect::{AnnotationKind, AnnotationSet};

/// Where a record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePath {
    pub absolute: PathBuf,
    /// Project-relative path with `/` separators.
    pub relative: String,
}

/// One method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    /// Textual type signature, e.g. `[]string` or `*promise.PromiseResult`.
    pub type_sig: String,
    /// Declared as `...T`; `type_sig` holds `[]T`.
    pub variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, type_sig: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_sig: type_sig.into(),
            variadic: false,
        }
    }
}

/// A method carrying at least one `@contract:` annotation.
#[derive(Debug, Clone)]
pub struct MethodRecord {
    pub name: String,
    /// Receiver type with pointers stripped (`*Contract` -> `Contract`).
    pub receiver_type: String,
    pub params: Vec<Param>,
    pub returns: Vec<String>,
    pub annotations: AnnotationSet,
    pub file: SourcePath,
    pub source_code: String,
}

impl MethodRecord {
    pub fn is_public(&self) -> bool {
        self.annotations.is_public()
    }

    pub fn is_private(&self) -> bool {
        self.annotations.contains(AnnotationKind::Private)
    }

    pub fn is_mutating(&self) -> bool {
        self.annotations.is_mutating()
    }

    pub fn is_payable(&self) -> bool {
        self.annotations.contains(AnnotationKind::Payable)
    }

    pub fn is_init(&self) -> bool {
        self.annotations.contains(AnnotationKind::Init)
    }

    pub fn is_promise_callback(&self) -> bool {
        self.annotations.contains(AnnotationKind::PromiseCallback)
    }

    pub fn min_deposit(&self) -> Option<&str> {
        self.annotations.min_deposit()
    }

    /// Whether an export wrapper is generated for this method.
    pub fn is_exported(&self) -> bool {
        (self.is_public() || self.is_init()) && !self.is_private()
    }
}

/// One field of the state struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub name: String,
    pub type_sig: String,
}

/// The struct tagged `@contract:state`.
#[derive(Debug, Clone)]
pub struct StateRecord {
    pub name: String,
    pub fields: Vec<FieldRecord>,
    pub file: SourcePath,
    pub source_code: String,
}

/// One scanned `package main` file.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub file: SourcePath,
    /// Top-level declarations (doc comments included) in source order.
    pub declarations: Vec<String>,
    /// Import specs, e.g. `"fmt"` or `sdk "github.com/x/y"`.
    pub imports: Vec<String>,
    pub is_state_file: bool,
}

/// Everything extracted from one file.
#[derive(Debug, Clone)]
pub struct FileExtraction {
    pub methods: Vec<MethodRecord>,
    pub states: Vec<StateRecord>,
    pub file: FileRecord,
}
