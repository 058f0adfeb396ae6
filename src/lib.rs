//! # docmark
//!
//! A markdown compiler for documentation sites.
//!
//! Source text is parsed by comrak and lowered into a token tree, with the inline extensions
//! scanning its text along the way. A builder then turns that tree into an immutable, typed
//! semantic tree of [`Node`](docmark::ast::Node)s.
//! On top of standard markdown, two inline extensions cross-reference an external knowledge base:
//!
//!     [[crate::module::item]]          symbol link, resolved against the API symbol index
//!     @[term]{optional display text}   glossary link, resolved against the glossary and basis tables
//!
//! Missing references never fail a document: they produce a `#` link plus a diagnostic.
//!
//! File Layout
//!
//! src/docmark
//!   ├── ast          Semantic tree (nodes, slugs)
//!   ├── token        Token tree produced by lexing
//!   ├── lexing       comrak parse lowered to tokens
//!   ├── inlines      Inline extension registry (symbol and glossary links)
//!   ├── resolvers    Knowledge base lookups
//!   ├── building     Token tree to semantic tree
//!   ├── compiler     The facade tying it all together
//!   └── formats      Renderers for the semantic tree (html, plaintext, treeviz, json)
//!
//! For testing guidelines, see the [testing module](docmark::testing).

pub mod docmark;

pub use docmark::ast::{slugify, Node};
pub use docmark::compiler::{Compilation, Compiler, CompilerBuilder};
pub use docmark::diagnostics::{Diagnostic, DiagnosticKind, LinkContext};
pub use docmark::error::{CompileError, CompileResult};
pub use docmark::resolvers::KnowledgeBase;
