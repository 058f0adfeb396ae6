//! Treeviz formatter for nodes
//!
//! Treeviz is a visual representation of the node tree, one line per node, which makes it
//! quick to scan:
//!
//!     ├─ Heading: h1 Title
//!     │ └─ Text: Title
//!     └─ Paragraph: See mod::fn and Epsilon.
//!       ├─ Text: See
//!       ├─ DocsLink: mod::fn -> /docs/mod/fn
//!       ...
//!
//! Nesting is encoded as indentation, two columns per level. Labels are truncated. Table cells
//! and list items are listed under their table or list.

use super::registry::{FormatError, Formatter};
use crate::docmark::ast::{AstNode, Node};

const MAX_LABEL: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(nodes: &[Node]) -> String {
    let mut result = String::new();
    append_children(&mut result, nodes, "");
    result
}

fn append_line(result: &mut String, prefix: &str, is_last: bool, kind: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        kind,
        truncate(label, MAX_LABEL)
    ));
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_node(result: &mut String, node: &Node, prefix: &str, is_last: bool) {
    append_line(
        result,
        prefix,
        is_last,
        node.node_type(),
        &node.display_label(),
    );
    let new_prefix = child_prefix(prefix, is_last);

    match node {
        Node::List(list) => {
            let items = list.items();
            for (i, item) in items.iter().enumerate() {
                let last = i == items.len() - 1;
                append_line(result, &new_prefix, last, item.node_type(), &item.display_label());
                append_children(result, item.children(), &child_prefix(&new_prefix, last));
            }
        }
        Node::Table(table) => {
            let rows: Vec<(&str, &[_])> = std::iter::once(("Header", table.headers()))
                .chain(table.rows().iter().map(|row| ("Row", row.as_slice())))
                .collect();
            for (i, (kind, cells)) in rows.iter().enumerate() {
                let last = i == rows.len() - 1;
                append_line(result, &new_prefix, last, kind, &format!("{} cells", cells.len()));
                let row_prefix = child_prefix(&new_prefix, last);
                for (j, cell) in cells.iter().enumerate() {
                    let cell_last = j == cells.len() - 1;
                    append_line(result, &row_prefix, cell_last, "Cell", cell.plaintext());
                    append_children(result, cell.nodes(), &child_prefix(&row_prefix, cell_last));
                }
            }
        }
        other => append_children(result, other.children(), &new_prefix),
    }
}

fn append_children(result: &mut String, children: &[Node], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

/// Formatter for the `treeviz` format.
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn render(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(nodes))
    }

    fn description(&self) -> &'static str {
        "One line per node tree view"
    }
}
