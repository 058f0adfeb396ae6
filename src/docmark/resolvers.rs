//! Reference resolvers
//!
//!     The inline extensions resolve identifiers against three read-only lookup tables:
//!
//!     - symbols:  API path (`core::module::func`) -> documentation url
//!     - glossary: term key -> display name and short description
//!     - basis:    term key -> description paragraphs
//!
//!     Each table sits behind a small trait so callers can plug in whatever backs their index
//!     (a generated docs index, a fixture, a database snapshot). The tables shipped here are
//!     plain maps that deserialize from JSON or YAML files.
//!
//!     A [`KnowledgeBase`] bundles the three resolvers behind `Arc`s. It is cheap to clone and
//!     is shared read-only by every compile; reloading means building a new one and swapping it.

mod basis;
mod glossary;
mod loader;
mod symbols;

pub use basis::{BasisEntry, BasisResolver, BasisTable, BASIS_PREFIX};
pub use glossary::{GlossaryEntry, GlossaryResolver, GlossaryTable};
pub use loader::{load_table, KnowledgeBaseError, TableFormat};
pub use symbols::{SymbolEntry, SymbolResolver, SymbolTable};

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// The three resolvers consulted while compiling a document.
#[derive(Clone)]
pub struct KnowledgeBase {
    symbols: Arc<dyn SymbolResolver>,
    glossary: Arc<dyn GlossaryResolver>,
    basis: Arc<dyn BasisResolver>,
}

impl KnowledgeBase {
    /// A knowledge base where every lookup misses.
    pub fn empty() -> Self {
        Self {
            symbols: Arc::new(SymbolTable::default()),
            glossary: Arc::new(GlossaryTable::default()),
            basis: Arc::new(BasisTable::default()),
        }
    }

    pub fn with_symbols(mut self, symbols: impl SymbolResolver + 'static) -> Self {
        self.symbols = Arc::new(symbols);
        self
    }

    pub fn with_glossary(mut self, glossary: impl GlossaryResolver + 'static) -> Self {
        self.glossary = Arc::new(glossary);
        self
    }

    pub fn with_basis(mut self, basis: impl BasisResolver + 'static) -> Self {
        self.basis = Arc::new(basis);
        self
    }

    /// Load whichever tables are given; missing ones stay empty.
    pub fn load(
        symbols: Option<&Path>,
        glossary: Option<&Path>,
        basis: Option<&Path>,
    ) -> Result<Self, KnowledgeBaseError> {
        let mut kb = Self::empty();
        if let Some(path) = symbols {
            kb = kb.with_symbols(load_table::<SymbolTable>(path)?);
        }
        if let Some(path) = glossary {
            kb = kb.with_glossary(load_table::<GlossaryTable>(path)?);
        }
        if let Some(path) = basis {
            kb = kb.with_basis(load_table::<BasisTable>(path)?);
        }
        Ok(kb)
    }

    pub fn symbols(&self) -> &dyn SymbolResolver {
        self.symbols.as_ref()
    }

    pub fn glossary(&self) -> &dyn GlossaryResolver {
        self.glossary.as_ref()
    }

    pub fn basis(&self) -> &dyn BasisResolver {
        self.basis.as_ref()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for KnowledgeBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnowledgeBase").finish_non_exhaustive()
    }
}
