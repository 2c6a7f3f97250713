//! Per-file extraction.
//!
//! Walks the top level of one parsed file and produces:
//! 1. A [`MethodRecord`] for every annotated method
//! 2. A [`StateRecord`] for every struct tagged `@contract:state`
//! 3. One [`FileRecord`] with verbatim declarations and imports for passthrough

use tree_sitter::Node;

use crate::core::{
    collect::{AnnotationSet, DocGroup, declaration_siblings, doc_group, has_state_tag},
    data::{FieldRecord, FileExtraction, FileRecord, MethodRecord, Param, SourcePath, StateRecord},
    extract::type_signature::{receiver_type_name, render_type},
    parsers::ParsedGo,
};

/// Package that holds the contract entry point.
pub const ENTRY_PACKAGE: &str = "main";

/// Top-level node kinds re-emitted verbatim.
const PASSTHROUGH_KINDS: &[&str] = &[
    "function_declaration",
    "method_declaration",
    "type_declaration",
    "var_declaration",
    "const_declaration",
];

/// Extracts records from one parsed file.
pub struct FileExtractor<'a> {
    parsed: &'a ParsedGo,
    path: SourcePath,
}

impl<'a> FileExtractor<'a> {
    pub fn new(parsed: &'a ParsedGo, path: SourcePath) -> Self {
        Self { parsed, path }
    }

    /// Run extraction.
    ///
    /// Returns `None` when the file belongs to another package.
    pub fn extract(self) -> Option<FileExtraction> {
        if self.parsed.package_name() != Some(ENTRY_PACKAGE) {
            return None;
        }

        let root = self.parsed.root();
        let siblings = declaration_siblings(root);

        let mut methods = Vec::new();
        let mut states = Vec::new();
        let mut declarations = Vec::new();
        let mut imports = Vec::new();

        for (index, node) in siblings.iter().enumerate() {
            match node.kind() {
                "import_declaration" => self.collect_imports(*node, &mut imports),
                kind if PASSTHROUGH_KINDS.contains(&kind) => {
                    let doc = doc_group(&siblings, index);
                    match kind {
                        "type_declaration" => self.collect_states(*node, &doc, &mut states),
                        "method_declaration" => {
                            if let Some(method) = self.extract_method(*node, &doc) {
                                methods.push(method);
                            }
                        }
                        _ => {}
                    }
                    let first = doc.first().unwrap_or(*node);
                    declarations.push(self.parsed.span_text(first, *node).to_string());
                }
                _ => {}
            }
        }

        let is_state_file = !states.is_empty();
        Some(FileExtraction {
            methods,
            states,
            file: FileRecord {
                file: self.path,
                declarations,
                imports,
                is_state_file,
            },
        })
    }

    fn collect_imports(&self, declaration: Node<'_>, imports: &mut Vec<String>) {
        let mut cursor = declaration.walk();
        for child in declaration.named_children(&mut cursor) {
            match child.kind() {
                "import_spec" => imports.push(self.parsed.text(child).to_string()),
                "import_spec_list" => {
                    let mut inner = child.walk();
                    imports.extend(
                        child
                            .named_children(&mut inner)
                            .filter(|spec| spec.kind() == "import_spec")
                            .map(|spec| self.parsed.text(spec).to_string()),
                    );
                }
                _ => {}
            }
        }
    }

    /// Collect state structs from a `type` declaration.
    ///
    /// The tag may sit on the whole declaration or, inside `type ( ... )`,
    /// on an individual spec.
    fn collect_states(
        &self,
        declaration: Node<'_>,
        block_doc: &DocGroup<'_>,
        states: &mut Vec<StateRecord>,
    ) {
        let source = self.parsed.source.as_str();
        let block_tagged = has_state_tag(block_doc.texts(source));
        let specs = declaration_siblings(declaration);

        for (index, spec) in specs.iter().enumerate() {
            if !matches!(spec.kind(), "type_spec" | "type_alias") {
                continue;
            }
            let tagged = block_tagged || has_state_tag(doc_group(&specs, index).texts(source));
            if !tagged {
                continue;
            }
            if let Some(state) = self.extract_state(*spec) {
                states.push(state);
            }
        }
    }

    fn extract_state(&self, spec: Node<'_>) -> Option<StateRecord> {
        let name = spec.child_by_field_name("name")?;
        let struct_type = spec.child_by_field_name("type")?;
        if struct_type.kind() != "struct_type" {
            return None;
        }

        let mut fields = Vec::new();
        let mut cursor = struct_type.walk();
        let field_list = struct_type
            .named_children(&mut cursor)
            .find(|child| child.kind() == "field_declaration_list");

        if let Some(field_list) = field_list {
            let mut cursor = field_list.walk();
            for field in field_list
                .named_children(&mut cursor)
                .filter(|child| child.kind() == "field_declaration")
            {
                let Some(type_node) = field.child_by_field_name("type") else {
                    continue;
                };
                let type_sig = render_type(type_node, &self.parsed.source);
                let mut names = field.walk();
                fields.extend(field.children_by_field_name("name", &mut names).map(|name| {
                    FieldRecord {
                        name: self.parsed.text(name).to_string(),
                        type_sig: type_sig.clone(),
                    }
                }));
            }
        }

        Some(StateRecord {
            name: self.parsed.text(name).to_string(),
            fields,
            file: self.path.clone(),
            source_code: self.parsed.span_text(spec, struct_type).to_string(),
        })
    }

    fn extract_method(&self, method: Node<'_>, doc: &DocGroup<'_>) -> Option<MethodRecord> {
        let source = self.parsed.source.as_str();
        let annotations = AnnotationSet::from_comments(doc.texts(source));
        if annotations.is_empty() {
            return None;
        }

        let name = method.child_by_field_name("name")?;
        let receiver_type = method
            .child_by_field_name("receiver")
            .and_then(|receiver| {
                let mut cursor = receiver.walk();
                let declaration = receiver
                    .named_children(&mut cursor)
                    .find(|child| child.kind() == "parameter_declaration");
                declaration
            })
            .and_then(|declaration| declaration.child_by_field_name("type"))
            .map(|ty| receiver_type_name(ty, source))
            .unwrap_or_else(|| "Unknown".to_string());

        let params = method
            .child_by_field_name("parameters")
            .map(|list| self.extract_params(list))
            .unwrap_or_default();

        let returns = method
            .child_by_field_name("result")
            .map(|result| self.extract_returns(result))
            .unwrap_or_default();

        Some(MethodRecord {
            name: self.parsed.text(name).to_string(),
            receiver_type,
            params,
            returns,
            annotations,
            file: self.path.clone(),
            source_code: self.parsed.text(method).to_string(),
        })
    }

    /// One [`Param`] per declared name; unnamed parameters become `argN`.
    fn extract_params(&self, list: Node<'_>) -> Vec<Param> {
        let source = self.parsed.source.as_str();
        let mut params = Vec::new();
        let mut cursor = list.walk();

        for declaration in list.named_children(&mut cursor) {
            let variadic = match declaration.kind() {
                "parameter_declaration" => false,
                "variadic_parameter_declaration" => true,
                _ => continue,
            };
            let Some(type_node) = declaration.child_by_field_name("type") else {
                continue;
            };
            let rendered = render_type(type_node, source);
            let type_sig = if variadic {
                format!("[]{}", rendered)
            } else {
                rendered
            };

            let mut names = declaration.walk();
            let declared: Vec<String> = declaration
                .children_by_field_name("name", &mut names)
                .map(|name| self.parsed.text(name).to_string())
                .collect();

            if declared.is_empty() {
                params.push(Param {
                    name: format!("arg{}", params.len()),
                    type_sig,
                    variadic,
                });
            } else {
                params.extend(declared.into_iter().map(|name| Param {
                    name,
                    type_sig: type_sig.clone(),
                    variadic,
                }));
            }
        }

        params
    }

    /// One signature per result value, so `(a, b int)` yields two entries.
    fn extract_returns(&self, result: Node<'_>) -> Vec<String> {
        let source = self.parsed.source.as_str();
        if result.kind() != "parameter_list" {
            return vec![render_type(result, source)];
        }

        let mut returns = Vec::new();
        let mut cursor = result.walk();
        for declaration in result
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "parameter_declaration")
        {
            let Some(type_node) = declaration.child_by_field_name("type") else {
                continue;
            };
            let type_sig = render_type(type_node, source);
            let mut names = declaration.walk();
            let count = declaration
                .children_by_field_name("name", &mut names)
                .count()
                .max(1);
            returns.extend(std::iter::repeat_n(type_sig, count));
        }
        returns
    }
}
