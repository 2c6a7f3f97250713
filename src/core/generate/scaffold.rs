//! Fixed parts of the generated file: header, import block, state
//! accessors and the payment helper.

use std::collections::BTreeSet;

use crate::core::{
    data::{FileRecord, StateRecord},
    generate::writer::GoWriter,
};

pub const HEADER: &str = "// Code generated by NEAR contract generator. DO NOT EDIT.\n\
// This file uses encoding/json for both state serialization and parameter parsing.\n";

pub const REQUIRED_IMPORTS: &[&str] = &[
    "contractBuilder \"github.com/vlmoon99/near-sdk-go/contract\"",
    "\"github.com/vlmoon99/near-sdk-go/env\"",
    "\"github.com/vlmoon99/near-sdk-go/types\"",
    "encodingJson \"encoding/json\"",
];

pub const PROMISE_IMPORT: &str = "\"github.com/vlmoon99/near-sdk-go/promise\"";

/// Merge the support imports with every collected import.
///
/// Duplicates collapse and the result is sorted.
pub fn merged_imports(files: &[FileRecord], needs_promise: bool) -> BTreeSet<String> {
    let mut imports: BTreeSet<String> = REQUIRED_IMPORTS.iter().map(|s| s.to_string()).collect();
    if needs_promise {
        imports.insert(PROMISE_IMPORT.to_string());
    }
    imports.extend(
        files
            .iter()
            .flat_map(|file| &file.imports)
            .map(|import| import.trim())
            .filter(|import| !import.is_empty())
            .map(str::to_string),
    );
    imports
}

pub fn write_imports(writer: &mut GoWriter, imports: &BTreeSet<String>) {
    writer.line("import (").indent();
    for import in imports {
        writer.line(import);
    }
    writer.dedent().line(")").blank();
}

/// Write each file's declarations under a `From:` banner.
pub fn write_passthrough(writer: &mut GoWriter, files: &[FileRecord]) {
    for file in files {
        writer.line(format!("// ===== From: {} =====", file.file.relative));
        for declaration in &file.declarations {
            writer.raw(declaration).blank().blank();
        }
    }
}

/// `defaultInit`, `getState` and `setState` for the state type.
pub fn write_state_accessors(writer: &mut GoWriter, state: &StateRecord) {
    let name = &state.name;

    writer
        .line(format!("func defaultInit() *{} {{", name))
        .indent()
        .line(format!("return &{}{{}}", name))
        .dedent()
        .line("}");

    writer
        .line(format!("func getState() *{} {{", name))
        .indent()
        .line("val, err := env.StateRead()")
        .line("if err != nil || len(val) == 0 {")
        .indent()
        .line("return defaultInit()")
        .dedent()
        .line("}")
        .line(format!("var state {}", name))
        .line("err = encodingJson.Unmarshal(val, &state)")
        .line("if err != nil {")
        .indent()
        .line("env.PanicStr(\"Failed to deserialize state\")")
        .dedent()
        .line("}")
        .line("return &state")
        .dedent()
        .line("}");

    writer
        .line(format!("func setState(state *{}) {{", name))
        .indent()
        .line("val, err := encodingJson.Marshal(state)")
        .line("if err != nil {")
        .indent()
        .line("env.PanicStr(\"Failed to serialize state\")")
        .dedent()
        .line("}")
        .line("err = env.StateWrite(val)")
        .line("if err != nil {")
        .indent()
        .line("env.PanicStr(\"Failed to write state\")")
        .dedent()
        .line("}")
        .dedent()
        .line("}");
}

/// `validatePayment`, shared by every payable export.
pub fn write_payment_helper(writer: &mut GoWriter) {
    writer
        .line("func validatePayment(minDepositYoctoStr string) bool {")
        .indent()
        .line("minRequired, err := types.U128FromString(minDepositYoctoStr)")
        .line("if err != nil {")
        .indent()
        .line("env.LogString(\"Invalid min deposit config: \" + minDepositYoctoStr)")
        .line("return false")
        .dedent()
        .line("}")
        .line("attachedDeposit, err := env.GetAttachedDeposit()")
        .line("if err != nil {")
        .indent()
        .line("env.LogString(\"Failed to get attached deposit\")")
        .line("return false")
        .dedent()
        .line("}")
        .blank()
        .line("// Check if attachedDeposit < minRequired")
        .line("if attachedDeposit.Cmp(minRequired) < 0 {")
        .indent()
        .line("env.LogString(\"Insufficient payment\")")
        .line("return false")
        .dedent()
        .line("}")
        .line("return true")
        .dedent()
        .line("}");
}
