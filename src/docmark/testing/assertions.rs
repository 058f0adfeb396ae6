//! Fluent assertion API for nodes

use super::matchers::TextMatch;
use crate::docmark::ast::{
    AstNode, BlockQuote, CodeBlock, DocsLink, GlossaryLink, Heading, Link, List, Node, Paragraph,
    Table,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a node sequence
pub fn assert_nodes(nodes: &[Node]) -> NodesAssertion<'_> {
    NodesAssertion {
        nodes,
        context: "items".to_string(),
    }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct NodesAssertion<'a> {
    nodes: &'a [Node],
    context: String,
}

impl<'a> NodesAssertion<'a> {
    /// Assert the number of nodes
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.nodes.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} nodes, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.nodes)
        );
        self
    }

    /// Assert the node types, in order
    pub fn kinds(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self.nodes.iter().map(|node| node.node_type()).collect();
        assert_eq!(actual, expected, "{}: node types differ", self.context);
        self
    }

    /// Assert on a specific node by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.nodes.len(),
            "{}: index {} out of bounds ({} nodes: [{}])",
            self.context,
            index,
            self.nodes.len(),
            summarize(self.nodes)
        );
        assertion(NodeAssertion {
            node: &self.nodes[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

macro_rules! variant_assertion {
    ($(#[$doc:meta])* $method:ident, $variant:ident, $assertion:ident, $field:ident) => {
        $(#[$doc])*
        pub fn $method(self) -> $assertion<'a> {
            match self.node {
                Node::$variant(element) => $assertion {
                    $field: element,
                    context: self.context,
                },
                other => panic!(
                    "{}: Expected {}, found {}",
                    self.context,
                    stringify!($variant),
                    other.node_type()
                ),
            }
        }
    };
}

impl<'a> NodeAssertion<'a> {
    /// Assert the node's plaintext
    pub fn plaintext(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(self.node.plaintext(), &format!("{}.plaintext", self.context));
        self
    }

    /// Assert the node's type name
    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.node.node_type(),
            expected,
            "{}: unexpected node type",
            self.context
        );
        self
    }

    /// Assert the node's direct children
    pub fn children<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodesAssertion<'a>),
    {
        assertion(NodesAssertion {
            nodes: self.node.children(),
            context: format!("{}.children", self.context),
        });
        self
    }

    variant_assertion!(
        /// Assert this node is a Heading
        assert_heading, Heading, HeadingAssertion, heading
    );
    variant_assertion!(
        /// Assert this node is a Paragraph
        assert_paragraph, Paragraph, ParagraphAssertion, paragraph
    );
    variant_assertion!(assert_link, Link, LinkAssertion, link);
    variant_assertion!(assert_docs_link, DocsLink, DocsLinkAssertion, link);
    variant_assertion!(assert_glossary_link, GlossaryLink, GlossaryLinkAssertion, link);
    variant_assertion!(assert_table, Table, TableAssertion, table);
    variant_assertion!(assert_list, List, ListAssertion, list);
    variant_assertion!(assert_blockquote, BlockQuote, BlockQuoteAssertion, quote);
    variant_assertion!(assert_code_block, CodeBlock, CodeBlockAssertion, code);

    /// Assert this node is a literal Text with the given content
    pub fn assert_text(self, expected: &str) -> Self {
        match self.node {
            Node::Text(text) => assert_eq!(
                text.content(),
                Some(expected),
                "{}: unexpected text content",
                self.context
            ),
            other => panic!(
                "{}: Expected Text, found {}",
                self.context,
                other.node_type()
            ),
        }
        self
    }
}

fn child_assertion<'a>(nodes: &'a [Node], context: &str, index: usize) -> NodeAssertion<'a> {
    assert!(
        index < nodes.len(),
        "{}: child index {} out of bounds ({} children: [{}])",
        context,
        index,
        nodes.len(),
        summarize(nodes)
    );
    NodeAssertion {
        node: &nodes[index],
        context: format!("{}.children[{}]", context, index),
    }
}

// ============================================================================
// Element Assertions
// ============================================================================

pub struct HeadingAssertion<'a> {
    heading: &'a Heading,
    context: String,
}

impl<'a> HeadingAssertion<'a> {
    pub fn level(self, expected: u8) -> Self {
        assert_eq!(
            self.heading.level(),
            expected,
            "{}: heading level",
            self.context
        );
        self
    }

    pub fn id(self, expected: &str) -> Self {
        assert_eq!(self.heading.id(), expected, "{}: heading id", self.context);
        self
    }

    pub fn text(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(self.heading.plaintext(), &self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(child_assertion(self.heading.children(), &self.context, index));
        self
    }
}

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    pub fn text(self, expected: impl Into<TextMatch>) -> Self {
        expected
            .into()
            .assert(self.paragraph.plaintext(), &self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.paragraph.children();
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize(children)
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assertion(child_assertion(self.paragraph.children(), &self.context, index));
        self
    }
}

pub struct LinkAssertion<'a> {
    link: &'a Link,
    context: String,
}

impl LinkAssertion<'_> {
    pub fn url(self, expected: &str) -> Self {
        assert_eq!(self.link.url(), expected, "{}: link url", self.context);
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.link.text(), expected, "{}: link text", self.context);
        self
    }

    pub fn title(self, expected: Option<&str>) -> Self {
        assert_eq!(self.link.title(), expected, "{}: link title", self.context);
        self
    }
}

pub struct DocsLinkAssertion<'a> {
    link: &'a DocsLink,
    context: String,
}

impl DocsLinkAssertion<'_> {
    pub fn path(self, expected: &str) -> Self {
        assert_eq!(self.link.path(), expected, "{}: docs link path", self.context);
        self
    }

    pub fn url(self, expected: &str) -> Self {
        assert_eq!(self.link.url(), expected, "{}: docs link url", self.context);
        self
    }
}

pub struct GlossaryLinkAssertion<'a> {
    link: &'a GlossaryLink,
    context: String,
}

impl GlossaryLinkAssertion<'_> {
    pub fn term(self, expected: &str) -> Self {
        assert_eq!(self.link.term(), expected, "{}: glossary term", self.context);
        self
    }

    pub fn link_text(self, expected: &str) -> Self {
        assert_eq!(
            self.link.link_text(),
            expected,
            "{}: glossary link text",
            self.context
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.link.name(), expected, "{}: glossary name", self.context);
        self
    }

    pub fn url(self, expected: &str) -> Self {
        assert_eq!(self.link.url(), expected, "{}: glossary url", self.context);
        self
    }

    pub fn desc(self, expected: impl Into<TextMatch>) -> Self {
        expected.into().assert(self.link.desc(), &self.context);
        self
    }
}

pub struct TableAssertion<'a> {
    table: &'a Table,
    context: String,
}

impl TableAssertion<'_> {
    pub fn headers(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.table.header_labels(),
            expected,
            "{}: table headers",
            self.context
        );
        self
    }

    pub fn row_count(self, expected: usize) -> Self {
        assert_eq!(
            self.table.rows().len(),
            expected,
            "{}: table row count",
            self.context
        );
        self
    }

    /// Assert the plaintext of every cell in row `index`
    pub fn row(self, index: usize, expected: &[&str]) -> Self {
        let row = self.table.rows().get(index).unwrap_or_else(|| {
            panic!(
                "{}: row {} out of bounds ({} rows)",
                self.context,
                index,
                self.table.rows().len()
            )
        });
        let actual: Vec<_> = row.iter().map(|cell| cell.plaintext()).collect();
        assert_eq!(actual, expected, "{}: row {}", self.context, index);
        self
    }
}

pub struct ListAssertion<'a> {
    list: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn ordered(self, expected: bool) -> Self {
        assert_eq!(
            self.list.is_ordered(),
            expected,
            "{}: list ordered",
            self.context
        );
        self
    }

    pub fn start(self, expected: Option<u64>) -> Self {
        assert_eq!(self.list.start(), expected, "{}: list start", self.context);
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.list.items().len(),
            expected,
            "{}: list item count",
            self.context
        );
        self
    }

    /// Assert the children of item `index`
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodesAssertion<'a>),
    {
        let items = self.list.items();
        assert!(
            index < items.len(),
            "{}: item {} out of bounds ({} items)",
            self.context,
            index,
            items.len()
        );
        assertion(NodesAssertion {
            nodes: items[index].children(),
            context: format!("{}.items[{}]", self.context, index),
        });
        self
    }
}

pub struct BlockQuoteAssertion<'a> {
    quote: &'a BlockQuote,
    context: String,
}

impl<'a> BlockQuoteAssertion<'a> {
    pub fn heading(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.quote.heading(),
            expected,
            "{}: blockquote heading",
            self.context
        );
        self
    }

    pub fn children<F>(self, assertion: F) -> Self
    where
        F: FnOnce(NodesAssertion<'a>),
    {
        assertion(NodesAssertion {
            nodes: self.quote.children(),
            context: format!("{}.children", self.context),
        });
        self
    }
}

pub struct CodeBlockAssertion<'a> {
    code: &'a CodeBlock,
    context: String,
}

impl CodeBlockAssertion<'_> {
    pub fn language(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.code.language(),
            expected,
            "{}: code language",
            self.context
        );
        self
    }

    pub fn highlighted(self, expected: bool) -> Self {
        assert_eq!(
            self.code.is_highlighted(),
            expected,
            "{}: code highlighted",
            self.context
        );
        self
    }

    pub fn code(self, expected: &str) -> Self {
        assert_eq!(self.code.code(), expected, "{}: code", self.context);
        self
    }
}
