//! Container elements
//!
//!     Containers own their children. Plaintext is computed bottom-up from the already built
//!     children:
//!
//!     - Heading, Paragraph: children concatenated.
//!     - BlockQuote: optional heading line, then children joined by newlines.
//!     - List: items joined by newlines. ListItem: children joined by spaces.

use super::super::node::{concat_plaintext, join_plaintext, Node};
use super::super::slug::slugify;
use super::super::traits::AstNode;
use super::text::label;
use serde::Serialize;

/// ATX or setext heading. The id is the slug of its plaintext.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    level: u8,
    id: String,
    children: Vec<Node>,
    #[serde(skip)]
    plaintext: String,
}

impl Heading {
    pub fn new(level: u8, children: Vec<Node>) -> Self {
        let plaintext = concat_plaintext(&children);
        Self {
            level,
            id: slugify(&plaintext),
            children,
            plaintext,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl AstNode for Heading {
    fn node_type(&self) -> &'static str {
        "Heading"
    }

    fn display_label(&self) -> String {
        format!("h{} {}", self.level, label(&self.plaintext, 40))
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    children: Vec<Node>,
    #[serde(skip)]
    plaintext: String,
}

impl Paragraph {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            plaintext: concat_plaintext(&children),
            children,
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        label(&self.plaintext, 40)
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}

/// `>` quote. A leading heading is lifted out of the children into `heading`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockQuote {
    heading: Option<String>,
    children: Vec<Node>,
    #[serde(skip)]
    plaintext: String,
}

impl BlockQuote {
    pub fn new(heading: Option<String>, children: Vec<Node>) -> Self {
        let body = join_plaintext(&children, "\n");
        let plaintext = match &heading {
            Some(heading) => format!("{heading}\n{body}"),
            None => body,
        };
        Self {
            heading,
            children,
            plaintext,
        }
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl AstNode for BlockQuote {
    fn node_type(&self) -> &'static str {
        "BlockQuote"
    }

    fn display_label(&self) -> String {
        match &self.heading {
            Some(heading) => label(heading, 40),
            None => format!("{} items", self.children.len()),
        }
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}

/// Bullet or ordered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    ordered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<u64>,
    items: Vec<ListItem>,
    #[serde(skip)]
    plaintext: String,
}

impl List {
    pub fn new(ordered: bool, start: Option<u64>, items: Vec<ListItem>) -> Self {
        let plaintext = items
            .iter()
            .map(|item| item.plaintext.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            ordered,
            start,
            items,
            plaintext,
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// First number of an ordered list.
    pub fn start(&self) -> Option<u64> {
        self.start
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }
}

impl AstNode for List {
    fn node_type(&self) -> &'static str {
        "List"
    }

    fn display_label(&self) -> String {
        let kind = if self.ordered { "ordered" } else { "bullet" };
        format!("{} {} items", kind, self.items.len())
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    children: Vec<Node>,
    #[serde(skip)]
    plaintext: String,
}

impl ListItem {
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            plaintext: join_plaintext(&children, " "),
            children,
        }
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        "ListItem"
    }

    fn display_label(&self) -> String {
        label(&self.plaintext, 40)
    }

    fn plaintext(&self) -> &str {
        &self.plaintext
    }
}
