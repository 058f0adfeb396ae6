//! Testing utilities
//!
//! Two tools, meant to be used together in compiler tests:
//!
//! 1. **[fixtures]**: small, fixed knowledge bases so tests never depend on real data files.
//! 2. **[assert_nodes]**: a fluent assertion API over node sequences.
//!
//! Matching on nodes by hand gets long fast:
//!
//! ```rust-example
//! match &nodes[1] {
//!     Node::Paragraph(p) => match &p.children()[1] {
//!         Node::DocsLink(link) => assert_eq!(link.url(), "/docs/mod/fn"),
//!         other => panic!("Expected DocsLink, got {:?}", other),
//!     },
//!     other => panic!("Expected Paragraph, got {:?}", other),
//! }
//! ```
//!
//! With the fluent API the same check reads:
//!
//! ```rust-example
//! use docmark::docmark::testing::{assert_nodes, fixtures};
//!
//! let nodes = fixtures::compiler().parse(source)?;
//! assert_nodes(&nodes)
//!     .item(1, |item| {
//!         item.assert_paragraph()
//!             .child(1, |child| {
//!                 child.assert_docs_link().url("/docs/mod/fn");
//!             });
//!     });
//! ```
//!
//! Failures name the path to the offending node, e.g. `items[1].children[1]`.

mod assertions;
mod matchers;

pub mod fixtures;

pub use assertions::{
    assert_nodes, BlockQuoteAssertion, CodeBlockAssertion, DocsLinkAssertion,
    GlossaryLinkAssertion, HeadingAssertion, LinkAssertion, ListAssertion, NodeAssertion,
    NodesAssertion, ParagraphAssertion, TableAssertion,
};
pub use matchers::TextMatch;
