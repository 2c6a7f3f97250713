//! Type-signature classification for parameter decoding.

/// Raw input bytes, bound without decoding.
pub const RAW_BYTES: &str = "[]byte";

pub const PROMISE_RESULT: &str = "promise.PromiseResult";
pub const PROMISE_RESULT_PTR: &str = "*promise.PromiseResult";
pub const PROMISE_RESULT_SLICE: &str = "[]promise.PromiseResult";

const BASIC_TYPES: &[&str] = &[
    "string",
    "bool",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "byte",
    "rune",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "[]byte",
    "[]string",
    "[]int",
    "[]int64",
    "[]float64",
    "[]bool",
    "map[string]string",
    "map[string]interface{}",
];

/// Whether a parameter of this type is decoded as a field of the
/// synthesised params struct rather than as the whole payload.
///
/// Covers primitives, pointers to primitives, slices of basic types and
/// any map.
pub fn is_basic_type(type_sig: &str) -> bool {
    if BASIC_TYPES.contains(&type_sig) {
        return true;
    }
    if let Some(base) = type_sig.strip_prefix('*') {
        return BASIC_TYPES.contains(&base);
    }
    if let Some(element) = type_sig.strip_prefix("[]") {
        return is_basic_type(element);
    }
    type_sig.starts_with("map[")
}

/// Whether the parameter receives a promise continuation result.
pub fn is_promise_result(type_sig: &str) -> bool {
    matches!(
        type_sig,
        PROMISE_RESULT | PROMISE_RESULT_PTR | PROMISE_RESULT_SLICE
    )
}
