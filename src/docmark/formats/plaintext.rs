//! Plaintext extraction
//!
//! Every node already carries its plaintext; a document's plaintext is its top-level blocks,
//! one per line. Used for search indexing and page descriptions.

use super::registry::{FormatError, Formatter};
use crate::docmark::ast::{AstNode, Node};

pub fn to_plaintext(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(AstNode::plaintext)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formatter for the `plaintext` format.
pub struct PlaintextFormatter;

impl Formatter for PlaintextFormatter {
    fn name(&self) -> &'static str {
        "plaintext"
    }

    fn render(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(to_plaintext(nodes))
    }

    fn description(&self) -> &'static str {
        "Text without markup, one block per line"
    }
}
