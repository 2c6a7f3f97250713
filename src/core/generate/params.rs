//! Parameter decoding for export wrappers.

use crate::core::{
    data::Param,
    generate::{
        naming::capitalize_first,
        types::{RAW_BYTES, is_basic_type},
        writer::GoWriter,
    },
};

/// How the raw call input is turned into method arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamDecoding<'m> {
    /// No arguments to decode.
    None,
    /// A single `[]byte` parameter bound to the input as-is.
    RawBytes(&'m Param),
    /// A single compound parameter decoded from the whole JSON payload.
    Whole(&'m Param),
    /// An anonymous struct with one JSON-tagged field per parameter.
    Fields(Vec<&'m Param>),
}

impl<'m> ParamDecoding<'m> {
    /// Choose the decoding for the parameters that come from the call input.
    pub fn plan(params: &[&'m Param]) -> Self {
        match params {
            [] => Self::None,
            [param] if param.type_sig == RAW_BYTES => Self::RawBytes(*param),
            [param] if !is_basic_type(&param.type_sig) => Self::Whole(*param),
            _ => Self::Fields(params.to_vec()),
        }
    }

    /// Emit the decoding statements.
    pub fn write(&self, writer: &mut GoWriter) {
        match self {
            Self::None => {
                writer.line("// No parameters to parse");
            }
            Self::RawBytes(param) => {
                writer
                    .line("// Parse input parameters")
                    .line(format!("var params {}", param.type_sig))
                    .line("// Raw bytes requested, skipping JSON unmarshal")
                    .line("params = input.Data");
            }
            Self::Whole(param) => {
                writer
                    .line("// Parse input parameters")
                    .line(format!("var params {}", param.type_sig));
                write_unmarshal(
                    writer,
                    &format!("Failed to parse {} parameter", param.type_sig),
                );
            }
            Self::Fields(params) => {
                writer.line("// Parse input parameters").line("var params struct {");
                writer.indent();
                for param in params {
                    writer.line(format!(
                        "{} {} `json:\"{}\"`",
                        capitalize_first(&param.name),
                        param.type_sig,
                        param.name
                    ));
                }
                writer.dedent().line("}");
                write_unmarshal(writer, "Failed to parse input parameters");
            }
        }
    }

    /// Call-site expression for a decoded parameter.
    pub fn argument(&self, param: &Param) -> String {
        let expression = match self {
            Self::RawBytes(_) | Self::Whole(_) => "params".to_string(),
            Self::None | Self::Fields(_) => format!("params.{}", capitalize_first(&param.name)),
        };
        if param.variadic {
            format!("{}...", expression)
        } else {
            expression
        }
    }
}

fn write_unmarshal(writer: &mut GoWriter, failure: &str) {
    writer
        .line("err := encodingJson.Unmarshal(input.Data, &params)")
        .line("if err != nil {")
        .indent()
        .line(format!("env.PanicStr(\"{}\")", failure))
        .dedent()
        .line("}");
}
