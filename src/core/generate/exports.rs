//! Export wrapper generation.
//!
//! One wrapper per exported method, executing
//! `AcquireState -> PaymentGuard? -> DecodeParams -> Invoke -> PersistState? -> EmitResult?`.
//! Every step may abort the call through `env.PanicStr`; state is only
//! persisted after the method returned successfully.

use crate::core::{
    data::{MethodRecord, Param},
    generate::{
        naming::to_snake_case,
        params::ParamDecoding,
        types::{PROMISE_RESULT, PROMISE_RESULT_PTR, PROMISE_RESULT_SLICE, is_promise_result},
        writer::GoWriter,
    },
};

/// Continuation a promise callback is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromiseContinuation {
    Single,
    Multiple,
}

impl PromiseContinuation {
    pub fn for_method(method: &MethodRecord) -> Option<Self> {
        if !method.is_promise_callback() {
            return None;
        }
        let multiple = method
            .params
            .iter()
            .any(|param| param.type_sig == PROMISE_RESULT_SLICE);
        Some(if multiple { Self::Multiple } else { Self::Single })
    }

    fn write_open(self, writer: &mut GoWriter) {
        match self {
            Self::Multiple => writer
                .line("// Promise Callback Wrapper (Multiple Results)")
                .line("contractBuilder.HandlePromiseResults(func(promRes []promise.PromiseResult) error {"),
            Self::Single => writer
                .line("// Promise Callback Wrapper (Single Result)")
                .line("contractBuilder.HandlePromiseResult(func(promRes *promise.PromiseResult) error {"),
        };
    }
}

/// What the method returns, split into data values and a trailing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReturnShape {
    data_values: usize,
    returns_error: bool,
}

impl ReturnShape {
    fn of(method: &MethodRecord) -> Self {
        let returns_error = method.returns.last().is_some_and(|ty| ty == "error");
        let data_values = method.returns.len() - usize::from(returns_error);
        Self {
            data_values,
            returns_error,
        }
    }

    /// Left-hand side of the call statement, empty when nothing is returned.
    fn bindings(self) -> String {
        let mut names: Vec<String> = match self.data_values {
            0 => Vec::new(),
            1 => vec!["result".to_string()],
            n => (0..n).map(|i| format!("result{}", i)).collect(),
        };
        if self.returns_error {
            names.push("callErr".to_string());
        }
        if names.is_empty() {
            String::new()
        } else {
            format!("{} := ", names.join(", "))
        }
    }
}

/// Generate the export wrapper for `method`.
///
/// `payment_floor` is the normalised yoctoNEAR minimum for payable methods
/// that declare one.
pub fn export_function(method: &MethodRecord, payment_floor: Option<&str>) -> String {
    let export_name = to_snake_case(&method.name);
    let mut writer = GoWriter::new();

    writer
        .line(format!(
            "// Export: {} (from {})",
            export_name, method.file.relative
        ))
        .line(format!("//go:export {}", export_name))
        .line(format!("func {}() {{", export_name))
        .indent()
        .line("contractBuilder.HandleClientJSONInput(func(input *contractBuilder.ContractInput) error {")
        .indent();

    write_state_acquisition(&mut writer, method);

    if let Some(floor) = payment_floor {
        writer
            .line(format!("if !validatePayment(\"{}\") {{", floor))
            .indent()
            .line("env.PanicStr(\"Insufficient payment\")")
            .dedent()
            .line("}")
            .blank();
    }

    let continuation = PromiseContinuation::for_method(method);
    if let Some(continuation) = continuation {
        continuation.write_open(&mut writer);
        writer.indent();
    }

    let decoded: Vec<&Param> = method
        .params
        .iter()
        .filter(|param| continuation.is_none() || !is_promise_result(&param.type_sig))
        .collect();
    let decoding = ParamDecoding::plan(&decoded);
    decoding.write(&mut writer);
    writer.blank();

    write_invocation(&mut writer, method, continuation.is_some(), &decoding);

    writer.line("return nil");
    if continuation.is_some() {
        writer.dedent().line("})").line("return nil");
    }
    writer.dedent().line("})").dedent().line("}");

    writer.finish()
}

fn write_state_acquisition(writer: &mut GoWriter, method: &MethodRecord) {
    if method.is_init() {
        writer
            .line("// Initialization: Check if already initialized")
            .line("existingVal, _ := env.StateRead()")
            .line("if len(existingVal) > 0 {")
            .indent()
            .line("env.PanicStr(\"Contract already initialized\")")
            .dedent()
            .line("}")
            .line("state := defaultInit()");
    } else {
        writer.line("state := getState()");
    }
    writer.blank();
}

fn write_invocation(
    writer: &mut GoWriter,
    method: &MethodRecord,
    in_continuation: bool,
    decoding: &ParamDecoding<'_>,
) {
    let shape = ReturnShape::of(method);
    let arguments: Vec<String> = method
        .params
        .iter()
        .map(|param| match param.type_sig.as_str() {
            PROMISE_RESULT if in_continuation => "*promRes".to_string(),
            PROMISE_RESULT_PTR | PROMISE_RESULT_SLICE if in_continuation => "promRes".to_string(),
            _ => decoding.argument(param),
        })
        .collect();

    writer
        .line("// Call method")
        .line(format!(
            "{}state.{}({})",
            shape.bindings(),
            method.name,
            arguments.join(", ")
        ))
        .blank();

    if shape.returns_error {
        writer
            .line("if callErr != nil {")
            .indent()
            .line("env.PanicStr(callErr.Error())")
            .dedent()
            .line("}")
            .blank();
    }

    if method.is_mutating() {
        writer.line("setState(state)").blank();
    }

    if shape.data_values > 1 {
        let values: Vec<String> = (0..shape.data_values)
            .map(|i| format!("result{}", i))
            .collect();
        writer.line(format!(
            "result := []interface{{}}{{{}}}",
            values.join(", ")
        ));
    }

    if shape.data_values > 0 {
        writer
            .line("resultJSON, err := encodingJson.Marshal(result)")
            .line("if err != nil {")
            .indent()
            .line("env.PanicStr(\"Failed to marshal result to JSON\")")
            .dedent()
            .line("}")
            .line("contractBuilder.ReturnValue(string(resultJSON))");
    }
}
