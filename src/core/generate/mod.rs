//! Go source generation.
//!
//! The emitted file is, in order: header, merged imports, passthrough
//! declarations grouped by file, state accessors, export wrappers and the
//! payment helper. The same input always yields byte-identical output.

pub mod exports;
pub mod naming;
pub mod params;
pub mod scaffold;
pub mod types;
pub mod writer;

pub use exports::{PromiseContinuation, export_function};
pub use naming::{capitalize_first, to_snake_case};
pub use writer::GoWriter;

use crate::{
    core::{
        amount::normalize_amount,
        data::{FileRecord, MethodRecord, StateRecord},
    },
    issues::{Diagnostic, DiagnosticKind},
};

/// Render the generated Go file.
///
/// `exports` are the methods that get wrappers, in emission order.
/// Deposit values that cannot be normalised are reported and replaced
/// with `"0"`.
pub fn generate_code(
    exports: &[&MethodRecord],
    state: &StateRecord,
    files: &[FileRecord],
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    let mut writer = GoWriter::new();

    writer.raw(scaffold::HEADER).blank().line("package main").blank();

    let needs_promise = exports.iter().any(|method| method.is_promise_callback());
    scaffold::write_imports(&mut writer, &scaffold::merged_imports(files, needs_promise));
    scaffold::write_passthrough(&mut writer, files);
    scaffold::write_state_accessors(&mut writer, state);

    writer.line("// ===== Generated Exports =====");
    for method in exports {
        let floor = payment_floor(method, diagnostics);
        writer.raw(export_function(method, floor.as_deref())).blank();
    }

    writer.line("// ===== Helper Functions =====");
    scaffold::write_payment_helper(&mut writer);
    writer.blank();

    writer.finish()
}

/// Normalised minimum deposit of a payable method, if it declares one.
fn payment_floor(method: &MethodRecord, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
    if !method.is_payable() {
        return None;
    }
    let raw = method.min_deposit()?;
    match normalize_amount(raw) {
        Ok(yocto) => Some(yocto),
        Err(err) => {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::InvalidAmount,
                Some(method.file.relative.clone()),
                format!(
                    "invalid min_deposit on '{}': {}, using 0",
                    method.name, err
                ),
            ));
            Some("0".to_string())
        }
    }
}
