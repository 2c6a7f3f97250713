//! Comment collection.
//!
//! - `annotation`: `@contract:` annotation grammar
//! - `doc_comments`: Go doc-comment group association on tree-sitter nodes

pub mod annotation;
pub mod doc_comments;

pub use annotation::{
    ANNOTATION_PREFIX, Annotation, AnnotationKind, AnnotationSet, STATE_TAG, has_state_tag,
};
pub use doc_comments::{DocGroup, declaration_siblings, doc_group};
