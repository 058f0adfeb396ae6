//! Diagnostics
//!
//!     Resolver misses are recoverable: the link is still produced (pointing at `#`) and the
//!     miss is recorded here so a build can report content gaps without failing. Every
//!     compile call owns a fresh [`Diagnostics`] collector; nothing is shared between calls.
//!
//!     Each recorded diagnostic is also emitted as a `tracing` warning, so build logs show
//!     misses even when the caller ignores the returned list.

use serde::Serialize;
use std::fmt;

/// The kind of a diagnostic. Only resolver misses exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    ResolverMiss,
}

/// Which inline extension triggered the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkContext {
    SymbolLink,
    GlossaryLink,
}

impl LinkContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkContext::SymbolLink => "symbol link",
            LinkContext::GlossaryLink => "glossary link",
        }
    }
}

/// A single non-fatal diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub identifier: String,
    pub context: LinkContext,
}

impl Diagnostic {
    pub fn resolver_miss(identifier: impl Into<String>, context: LinkContext) -> Self {
        Self {
            kind: DiagnosticKind::ResolverMiss,
            identifier: identifier.into(),
            context,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::ResolverMiss => write!(
                f,
                "unresolved {} `{}`",
                self.context.as_str(),
                self.identifier
            ),
        }
    }
}

/// Ordered collector for the diagnostics of one compile call.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolver miss and mirror it to the log.
    pub fn resolver_miss(&mut self, identifier: &str, context: LinkContext) {
        tracing::warn!(
            identifier,
            context = context.as_str(),
            "could not resolve reference"
        );
        self.entries
            .push(Diagnostic::resolver_miss(identifier, context));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.resolver_miss("core::a", LinkContext::SymbolLink);
        diagnostics.resolver_miss("epsilon", LinkContext::GlossaryLink);

        let entries = diagnostics.into_vec();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].identifier, "core::a");
        assert_eq!(entries[0].context, LinkContext::SymbolLink);
        assert_eq!(entries[1].identifier, "epsilon");
        assert_eq!(entries[1].context, LinkContext::GlossaryLink);
    }

    #[test]
    fn display_names_link_kind() {
        let diagnostic = Diagnostic::resolver_miss("mod::fn", LinkContext::SymbolLink);
        assert_eq!(diagnostic.to_string(), "unresolved symbol link `mod::fn`");
    }
}
