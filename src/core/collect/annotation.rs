//! `@contract:` annotation parsing.
//!
//! Annotations live in `//` doc comments directly above a method:
//!
//! ```go
//! // @contract:init
//! // @contract:payable min_deposit=1NEAR
//! func (c *Contract) Init(owner string) { ... }
//! ```
//!
//! Each line contributes one [`Annotation`]; lines accumulate into an
//! [`AnnotationSet`] and never clear what an earlier line set.

use std::collections::BTreeMap;
use std::fmt;

/// Prefix shared by every generator annotation.
pub const ANNOTATION_PREFIX: &str = "@contract:";

/// Tag marking the single struct that holds contract state.
pub const STATE_TAG: &str = "@contract:state";

const MIN_DEPOSIT_ARG: &str = "min_deposit=";

/// A single recognised method annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    Init,
    Public,
    Private,
    View,
    Mutating,
    Payable { min_deposit: Option<String> },
    PromiseCallback,
}

/// Payload-free discriminant of [`Annotation`], used for set membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnnotationKind {
    Init,
    Public,
    Private,
    View,
    Mutating,
    Payable,
    PromiseCallback,
}

impl AnnotationKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Public => "public",
            Self::Private => "private",
            Self::View => "view",
            Self::Mutating => "mutating",
            Self::Payable => "payable",
            Self::PromiseCallback => "promise_callback",
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ANNOTATION_PREFIX, self.keyword())
    }
}

impl Annotation {
    /// Parse one comment line.
    ///
    /// # Arguments
    /// * `comment` - Raw comment text including the `//` marker
    ///
    /// # Returns
    /// - `Some(Annotation)` for a recognised `@contract:<keyword>` line
    /// - `None` for block comments, ordinary prose and unknown keywords
    pub fn parse(comment: &str) -> Option<Self> {
        let text = comment.trim().strip_prefix("//")?.trim();
        let rest = text.strip_prefix(ANNOTATION_PREFIX)?;

        let mut parts = rest.split_whitespace();
        let annotation = match parts.next()? {
            "init" => Self::Init,
            "public" => Self::Public,
            "private" => Self::Private,
            "view" => Self::View,
            "mutating" => Self::Mutating,
            "promise_callback" => Self::PromiseCallback,
            "payable" => Self::Payable {
                min_deposit: parts
                    .filter_map(|arg| arg.strip_prefix(MIN_DEPOSIT_ARG))
                    .filter(|value| !value.is_empty())
                    .last()
                    .map(str::to_string),
            },
            _ => return None,
        };
        Some(annotation)
    }

    pub fn kind(&self) -> AnnotationKind {
        match self {
            Self::Init => AnnotationKind::Init,
            Self::Public => AnnotationKind::Public,
            Self::Private => AnnotationKind::Private,
            Self::View => AnnotationKind::View,
            Self::Mutating => AnnotationKind::Mutating,
            Self::Payable { .. } => AnnotationKind::Payable,
            Self::PromiseCallback => AnnotationKind::PromiseCallback,
        }
    }
}

/// Accumulated annotations of one method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    entries: BTreeMap<AnnotationKind, Annotation>,
}

impl AnnotationSet {
    /// Build a set from the comment lines of a doc group.
    pub fn from_comments<'a>(comments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut set = Self::default();
        for comment in comments {
            if let Some(annotation) = Annotation::parse(comment) {
                set.insert(annotation);
            }
        }
        set
    }

    /// Add an annotation.
    ///
    /// A repeated `payable` line only replaces the minimum deposit when it
    /// carries one itself.
    pub fn insert(&mut self, annotation: Annotation) {
        let keeps_existing = matches!(annotation, Annotation::Payable { min_deposit: None })
            && self.entries.contains_key(&AnnotationKind::Payable);
        if !keeps_existing {
            self.entries.insert(annotation.kind(), annotation);
        }
    }

    pub fn contains(&self, kind: AnnotationKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn contains_all(&self, kinds: &[AnnotationKind]) -> bool {
        kinds.iter().all(|kind| self.contains(*kind))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = AnnotationKind> + '_ {
        self.entries.keys().copied()
    }

    /// Every keyword except `private` makes a method callable from outside.
    pub fn is_public(&self) -> bool {
        self.kinds().any(|kind| kind != AnnotationKind::Private)
    }

    pub fn is_mutating(&self) -> bool {
        self.contains(AnnotationKind::Mutating) || self.contains(AnnotationKind::Init)
    }

    pub fn min_deposit(&self) -> Option<&str> {
        match self.entries.get(&AnnotationKind::Payable) {
            Some(Annotation::Payable { min_deposit }) => min_deposit.as_deref(),
            _ => None,
        }
    }
}

/// Whether any comment of a doc group carries the state tag.
///
/// Unlike method annotations, block comments count too.
pub fn has_state_tag<'a>(comments: impl IntoIterator<Item = &'a str>) -> bool {
    comments.into_iter().any(|text| text.contains(STATE_TAG))
}
