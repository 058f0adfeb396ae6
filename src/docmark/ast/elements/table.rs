//! Table element
//!
//!     Rows are kept exactly as written: a row may have fewer or more cells than the header.
//!     Each cell holds the inline nodes built from its text.

use super::super::node::{concat_plaintext, Node};
use super::super::traits::AstNode;
use crate::docmark::token::Alignment;
use serde::Serialize;

/// One header or body cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    nodes: Vec<Node>,
    plaintext: String,
}

impl TableCell {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            plaintext: concat_plaintext(&nodes),
            nodes,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn plaintext(&self) -> &str {
        &self.plaintext
    }
}

/// GFM table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    headers: Vec<TableCell>,
    alignments: Vec<Alignment>,
    rows: Vec<Vec<TableCell>>,
    #[serde(skip)]
    plaintext: String,
}

impl Table {
    pub fn new(
        headers: Vec<TableCell>,
        alignments: Vec<Alignment>,
        rows: Vec<Vec<TableCell>>,
    ) -> Self {
        let mut lines = vec![tab_joined(&headers)];
        lines.extend(rows.iter().map(|row| tab_joined(row)));
        Self {
            plaintext: lines.join("\n"),
            headers,
            alignments,
            rows,
        }
    }

    pub fn headers(&self) -> &[TableCell] {
        &self.headers
    }

    /// Header cells as plain labels.
    pub fn header_labels(&self) -> Vec<&str> {
        self.headers.iter().map(TableCell::plaintext).collect()
    }

    /// Alignment per header column.
    pub fn alignments(&self) -> &[Alignment] {
        &self.alignments
    }

    /// Alignment of column `index`; columns past the header are unaligned.
    pub fn alignment(&self, index: usize) -> Alignment {
        self.alignments
            .get(index)
            .copied()
            .unwrap_or(Alignment::None)
    }

    pub fn rows(&self) -> &[Vec<TableCell>] {
        &self.rows
    }
}

fn tab_joined(cells: &[TableCell]) -> String {
    cells
        .iter()
        .map(TableCell::plaintext)
        .collect::<Vec<_>>()
        .join("\t")
}

impl AstNode for Table {
    fn node_type(&self) -> &'static str {
        "Table"
    }

    fn display_label(&self) -> String {
        format!("{} columns, {} rows", self.headers.len(), self.rows.len())
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}
