//! Textual rendering of Go type expressions.
//!
//! Generated glue only needs type signatures as text (struct fields,
//! `var params T` declarations, promise-type detection), so types are
//! normalised to their canonical spelling instead of being resolved.

use tree_sitter::Node;

/// Render a type node as canonical Go text.
///
/// Common shapes are normalised (`[] byte` -> `[]byte`, `map[string] int`
/// -> `map[string]int`); anything else keeps its source text with
/// whitespace runs collapsed.
pub fn render_type(node: Node<'_>, source: &str) -> String {
    let text = || collapse_whitespace(&source[node.byte_range()]);

    match node.kind() {
        "type_identifier" | "identifier" | "package_identifier" => text(),
        "pointer_type" => match first_named_child(node) {
            Some(inner) => format!("*{}", render_type(inner, source)),
            None => text(),
        },
        "slice_type" => match node.child_by_field_name("element") {
            Some(element) => format!("[]{}", render_type(element, source)),
            None => text(),
        },
        "array_type" => match (
            node.child_by_field_name("length"),
            node.child_by_field_name("element"),
        ) {
            (Some(length), Some(element)) => format!(
                "[{}]{}",
                collapse_whitespace(&source[length.byte_range()]),
                render_type(element, source)
            ),
            _ => text(),
        },
        "map_type" => match (
            node.child_by_field_name("key"),
            node.child_by_field_name("value"),
        ) {
            (Some(key), Some(value)) => format!(
                "map[{}]{}",
                render_type(key, source),
                render_type(value, source)
            ),
            _ => text(),
        },
        "qualified_type" => match (
            node.child_by_field_name("package"),
            node.child_by_field_name("name"),
        ) {
            (Some(package), Some(name)) => format!(
                "{}.{}",
                &source[package.byte_range()],
                &source[name.byte_range()]
            ),
            _ => text(),
        },
        "interface_type" if node.named_child_count() == 0 => "interface{}".to_string(),
        "generic_type" => match (
            node.child_by_field_name("type"),
            node.child_by_field_name("type_arguments"),
        ) {
            (Some(base), Some(arguments)) => {
                let mut cursor = arguments.walk();
                let rendered: Vec<String> = arguments
                    .named_children(&mut cursor)
                    .filter(|child| child.kind() != "comment")
                    .map(|child| render_type(child, source))
                    .collect();
                format!("{}[{}]", render_type(base, source), rendered.join(", "))
            }
            _ => text(),
        },
        "parenthesized_type" | "type_elem" => match first_named_child(node) {
            Some(inner) if node.named_child_count() == 1 => render_type(inner, source),
            _ => text(),
        },
        _ => text(),
    }
}

/// Name of the receiver type with pointers and type arguments removed.
pub fn receiver_type_name(node: Node<'_>, source: &str) -> String {
    match node.kind() {
        "type_identifier" | "identifier" => source[node.byte_range()].to_string(),
        "pointer_type" | "parenthesized_type" => first_named_child(node)
            .map(|inner| receiver_type_name(inner, source))
            .unwrap_or_else(unknown_receiver),
        "generic_type" => node
            .child_by_field_name("type")
            .map(|base| receiver_type_name(base, source))
            .unwrap_or_else(unknown_receiver),
        _ => unknown_receiver(),
    }
}

fn unknown_receiver() -> String {
    "Unknown".to_string()
}

fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let child = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment");
    child
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
