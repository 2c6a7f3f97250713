//! Cross-file rules checked before any code is emitted.

use crate::core::{
    collect::AnnotationKind,
    data::{MethodRecord, StateRecord},
    error::GenerateError,
};

/// Annotation pairs a single method may not combine.
pub const FORBIDDEN_COMBINATIONS: &[(AnnotationKind, AnnotationKind)] = &[
    (AnnotationKind::View, AnnotationKind::Mutating),
    (AnnotationKind::View, AnnotationKind::Payable),
    (AnnotationKind::Init, AnnotationKind::View),
];

/// Validate the aggregated records.
///
/// Checks, in order:
/// 1. Exactly one state struct
/// 2. At most one `@contract:init` method
/// 3. No method combines a [`FORBIDDEN_COMBINATIONS`] pair
/// 4. At least one annotated method
///
/// # Returns
/// The single state record on success.
pub fn validate<'a>(
    methods: &[MethodRecord],
    states: &'a [StateRecord],
) -> Result<&'a StateRecord, GenerateError> {
    let state = match states {
        [] => return Err(GenerateError::NoState),
        [state] => state,
        _ => {
            return Err(GenerateError::AmbiguousState {
                names: states.iter().map(|s| s.name.clone()).collect(),
            });
        }
    };

    let init_methods: Vec<String> = methods
        .iter()
        .filter(|m| m.is_init())
        .map(|m| m.name.clone())
        .collect();
    if init_methods.len() > 1 {
        return Err(GenerateError::AmbiguousInit {
            names: init_methods,
        });
    }

    for method in methods {
        check_combinations(method)?;
    }

    if methods.is_empty() {
        return Err(GenerateError::NothingToExport);
    }

    Ok(state)
}

fn check_combinations(method: &MethodRecord) -> Result<(), GenerateError> {
    let conflict = FORBIDDEN_COMBINATIONS
        .iter()
        .find(|(first, second)| method.annotations.contains_all(&[*first, *second]));

    match conflict {
        Some((first, second)) => Err(GenerateError::IncompatibleAnnotations {
            method: method.name.clone(),
            first: *first,
            second: *second,
        }),
        None => Ok(()),
    }
}
