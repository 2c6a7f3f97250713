use anyhow::{Context, Result, anyhow};
use tree_sitter::{Node, Parser, Tree};

/// A parsed Go source file.
///
/// Holds the source buffer next to the syntax tree so node spans can be
/// sliced back into verbatim text.
pub struct ParsedGo {
    pub source: String,
    pub tree: Tree,
}

impl ParsedGo {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Verbatim source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        &self.source[node.byte_range()]
    }

    /// Verbatim source text from the start of `first` to the end of `last`.
    pub fn span_text(&self, first: Node<'_>, last: Node<'_>) -> &str {
        &self.source[first.start_byte()..last.end_byte()]
    }

    /// Package name from the `package` clause, if present.
    pub fn package_name(&self) -> Option<&str> {
        let root = self.root();
        let mut cursor = root.walk();
        let clause = root
            .named_children(&mut cursor)
            .find(|child| child.kind() == "package_clause")?;

        let mut cursor = clause.walk();
        let name = clause
            .named_children(&mut cursor)
            .find(|child| child.kind() == "package_identifier")?;
        Some(self.text(name))
    }
}

/// Parse Go source code into a syntax tree.
///
/// tree-sitter recovers from syntax errors, so any ERROR or MISSING node in
/// the result is reported as a parse failure instead of a partial tree.
pub fn parse_go_source(code: String, file_path: &str) -> Result<ParsedGo> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .context("Failed to load the Go grammar")?;

    let tree = parser
        .parse(&code, None)
        .ok_or_else(|| anyhow!("Failed to parse go source: {}", file_path))?;

    let root = tree.root_node();
    if root.has_error() {
        let position = first_error_position(root)
            .map(|(row, column)| format!(" at {}:{}", row + 1, column + 1))
            .unwrap_or_default();
        return Err(anyhow!("syntax error{}", position));
    }

    Ok(ParsedGo { source: code, tree })
}

fn first_error_position(node: Node<'_>) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let point = node.start_position();
        return Some((point.row, point.column));
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error_position)
}
