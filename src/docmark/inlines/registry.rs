//! Ordered registry of inline extensions.

use super::{GlossaryLinkExtension, Resolution, SymbolLinkExtension};
use crate::docmark::token::Token;

/// Result of a successful extension match.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineMatch {
    /// Number of source bytes consumed, starting at the match offset.
    pub len: usize,
    pub token: Token,
}

/// A custom inline syntax.
pub trait InlineExtension: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Cheap check whether the syntax could start at `offset`.
    fn can_start_at(&self, src: &str, offset: usize) -> bool;

    /// Match the syntax at `offset` and resolve it. `None` hands the offset to the next
    /// extension; if none matches, the character stays text.
    fn try_match(
        &self,
        src: &str,
        offset: usize,
        resolution: &mut Resolution<'_>,
    ) -> Option<InlineMatch>;
}

/// Extensions in the order they are consulted.
pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn InlineExtension>>,
}

impl ExtensionRegistry {
    /// A registry with no extensions: plain markdown.
    pub fn new() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    /// Symbol links first, then glossary links.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SymbolLinkExtension::new());
        registry.register(GlossaryLinkExtension::new());
        registry
    }

    /// Append an extension; it is consulted after every extension registered before it.
    pub fn register<E: InlineExtension + 'static>(&mut self, extension: E) {
        self.extensions.push(Box::new(extension));
    }

    /// Try every extension at `offset`, in order. The first match wins.
    pub fn match_at(
        &self,
        src: &str,
        offset: usize,
        resolution: &mut Resolution<'_>,
    ) -> Option<InlineMatch> {
        self.extensions
            .iter()
            .filter(|ext| ext.can_start_at(src, offset))
            .find_map(|ext| ext.try_match(src, offset, resolution))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.extensions.iter().map(|ext| ext.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
