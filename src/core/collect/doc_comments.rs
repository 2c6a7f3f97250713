//! Doc-comment association.
//!
//! tree-sitter keeps comments as sibling nodes instead of attaching them to
//! declarations, so the Go rule is rebuilt here: a doc group is the run of
//! consecutive comments ending on the line right above a declaration.
//!
//! ```go
//! x := 1 // trailing, belongs to the previous line
//!
//! // Counter is the state.   <- group start
//! // @contract:state         <- group end
//! type Counter struct { ... }
//! ```
//!
//! Blank lines break a group, and a comment sharing a line with the code
//! before it starts no group at all.

use tree_sitter::Node;

/// Comments forming the doc of one declaration, in source order.
#[derive(Debug, Clone, Default)]
pub struct DocGroup<'t> {
    pub comments: Vec<Node<'t>>,
}

impl<'t> DocGroup<'t> {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// First comment of the group, where the declaration's verbatim text begins.
    pub fn first(&self) -> Option<Node<'t>> {
        self.comments.first().copied()
    }

    /// Comment texts sliced from `source`.
    pub fn texts<'s>(&self, source: &'s str) -> Vec<&'s str> {
        self.comments
            .iter()
            .map(|comment| &source[comment.byte_range()])
            .collect()
    }
}

/// Children of `parent` relevant for doc association, statement terminators removed.
pub fn declaration_siblings<'t>(parent: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = parent.walk();
    parent
        .children(&mut cursor)
        .filter(|child| !matches!(child.kind(), "\n" | ";" | "\0"))
        .collect()
}

/// Doc group attached to `siblings[index]`.
pub fn doc_group<'t>(siblings: &[Node<'t>], index: usize) -> DocGroup<'t> {
    let Some(target) = siblings.get(index) else {
        return DocGroup::default();
    };

    let mut comments = Vec::new();
    let mut next_row = target.start_position().row;
    let mut required_gap_exact = true;

    for position in (0..index).rev() {
        let candidate = siblings[position];
        if candidate.kind() != "comment" {
            break;
        }

        let end_row = candidate.end_position().row;
        let adjacent = if required_gap_exact {
            end_row + 1 == next_row
        } else {
            end_row + 1 >= next_row
        };
        if !adjacent {
            break;
        }

        let start_row = candidate.start_position().row;
        let trails_code = position > 0 && {
            let before = siblings[position - 1];
            let end = before.end_position();
            before.kind() != "comment" && end.row == start_row && end.column > 0
        };
        if trails_code {
            break;
        }

        comments.push(candidate);
        next_row = start_row;
        required_gap_exact = false;
    }

    comments.reverse();
    DocGroup { comments }
}
