//! Compiler facade
//!
//!     [`Compiler`] is the entry point: source text in, [`Node`]s out.
//!
//!         source --lexing--> tokens --building--> nodes
//!                    |
//!                    +-- resolvers (symbols, glossary, basis) -> diagnostics
//!
//!     The compiler holds only read-only collaborators: the knowledge base, the extension
//!     registry, the highlighter and the link settings. Token buffers and diagnostics are
//!     created per call, so one compiler can be shared across threads and reused for any
//!     number of documents.
//!
//!     Unresolved references never fail a compile. They are returned alongside the nodes by
//!     [`Compiler::compile`]; [`Compiler::parse`] drops them after logging.

use crate::docmark::ast::Node;
use crate::docmark::building::TreeBuilder;
use crate::docmark::config::{DocmarkConfig, Table};
use crate::docmark::diagnostics::Diagnostic;
use crate::docmark::error::{CompileError, CompileResult};
use crate::docmark::highlight::{Highlighter, PlainHighlighter, RustHighlighter};
use crate::docmark::inlines::{ExtensionRegistry, LinkSettings};
use crate::docmark::lexing::Lexer;
use crate::docmark::resolvers::{KnowledgeBase, KnowledgeBaseError};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Result of compiling one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub nodes: Vec<Node>,
    /// Unresolved references, in source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Compiles markdown documents against a knowledge base.
#[derive(Clone)]
pub struct Compiler {
    knowledge: KnowledgeBase,
    registry: Arc<ExtensionRegistry>,
    highlighter: Arc<dyn Highlighter>,
    links: LinkSettings,
}

impl Compiler {
    /// A compiler with the default extensions, Rust highlighting and link settings.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self::builder().knowledge(knowledge).build()
    }

    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// Build a compiler from configuration, loading the configured lookup tables.
    pub fn from_config(config: &DocmarkConfig) -> Result<Self, KnowledgeBaseError> {
        let knowledge = KnowledgeBase::load(
            config.knowledge.path(Table::Symbols),
            config.knowledge.path(Table::Glossary),
            config.knowledge.path(Table::Basis),
        )?;
        Ok(Self::builder()
            .knowledge(knowledge)
            .highlighter(highlighter_for(&config.compiler.highlight_language))
            .links(config.compiler.link_settings())
            .build())
    }

    /// Compile `source` into nodes, discarding diagnostics.
    pub fn parse(&self, source: &str) -> CompileResult<Vec<Node>> {
        self.compile(source).map(|compilation| compilation.nodes)
    }

    /// Compile `source` into nodes and the diagnostics recorded along the way.
    pub fn compile(&self, source: &str) -> CompileResult<Compilation> {
        let mut lexer = Lexer::new(&self.registry, &self.knowledge, &self.links);
        let tokens = lexer.lex(source)?;
        let diagnostics = lexer.finish();

        let nodes = TreeBuilder::new(self.highlighter.as_ref()).build(tokens)?;
        tracing::debug!(
            nodes = nodes.len(),
            diagnostics = diagnostics.len(),
            "compiled document"
        );
        Ok(Compilation { nodes, diagnostics })
    }

    /// Read and parse a UTF-8 file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> CompileResult<Vec<Node>> {
        self.compile_file(path).map(|compilation| compilation.nodes)
    }

    /// Read and compile a UTF-8 file.
    pub fn compile_file(&self, path: impl AsRef<Path>) -> CompileResult<Compilation> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| CompileError::io(path, err))?;
        let _span = tracing::debug_span!("compile_file", path = %path.display()).entered();
        self.compile(&source)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn registry(&self) -> &ExtensionRegistry {
        &self.registry
    }

    pub fn highlighter(&self) -> &dyn Highlighter {
        self.highlighter.as_ref()
    }

    pub fn links(&self) -> &LinkSettings {
        &self.links
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(KnowledgeBase::empty())
    }
}

impl fmt::Debug for Compiler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("knowledge", &self.knowledge)
            .field("extensions", &self.registry.names())
            .field("highlight_language", &self.highlighter.language())
            .field("links", &self.links)
            .finish()
    }
}

/// The built-in highlighter for `language`: Rust gets real highlighting, anything else is
/// only escaped.
pub fn highlighter_for(language: &str) -> Arc<dyn Highlighter> {
    if language == RustHighlighter.language() {
        Arc::new(RustHighlighter::new())
    } else {
        Arc::new(PlainHighlighter::new(language))
    }
}

/// Assembles a [`Compiler`]; every part falls back to its default.
pub struct CompilerBuilder {
    knowledge: KnowledgeBase,
    registry: Option<ExtensionRegistry>,
    highlighter: Arc<dyn Highlighter>,
    links: LinkSettings,
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            knowledge: KnowledgeBase::empty(),
            registry: None,
            highlighter: Arc::new(RustHighlighter::new()),
            links: LinkSettings::default(),
        }
    }

    pub fn knowledge(mut self, knowledge: KnowledgeBase) -> Self {
        self.knowledge = knowledge;
        self
    }

    /// Replace the inline extensions. Without this the symbol and glossary links are used.
    pub fn registry(mut self, registry: ExtensionRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn highlighter(mut self, highlighter: Arc<dyn Highlighter>) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn links(mut self, links: LinkSettings) -> Self {
        self.links = links;
        self
    }

    pub fn build(self) -> Compiler {
        Compiler {
            knowledge: self.knowledge,
            registry: Arc::new(self.registry.unwrap_or_default()),
            highlighter: self.highlighter,
            links: self.links,
        }
    }
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
