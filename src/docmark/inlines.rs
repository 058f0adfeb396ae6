//! Inline extensions
//!
//!     Standard inline markdown is parsed by comrak and lowered in [lexing](super::lexing).
//!     The text that parse leaves behind is scanned by an ordered registry of extensions that
//!     recognize custom syntaxes:
//!
//!         [[core::module::func]]          symbol link      -> Token::DocsLink
//!         @[derivative]{the derivative}   glossary link    -> Token::GlossaryLink
//!
//!     At every offset of a text run each extension is asked, in registration order, whether it
//!     can start there and then tries to match. The first extension that matches wins, which
//!     makes declaration order the tie-break when two extensions could start at the same offset.
//!     Text no extension claims stays text, so a malformed `[[` ends up literal.
//!
//!     Matching and resolution are separate steps: an extension first matches the raw syntax,
//!     then resolves the captured identifier against the [`KnowledgeBase`]. A failed lookup
//!     still yields a token (pointing at `#`) and records a diagnostic.

mod glossary_link;
mod registry;
mod symbol_link;

pub use glossary_link::{GlossaryLinkExtension, MISSING_GLOSSARY_TERM};
pub use registry::{ExtensionRegistry, InlineExtension, InlineMatch};
pub use symbol_link::SymbolLinkExtension;

use crate::docmark::diagnostics::Diagnostics;
use crate::docmark::resolvers::KnowledgeBase;

/// Url prefixes for resolved glossary and basis links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    pub glossary_base_url: String,
    pub basis_base_url: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            glossary_base_url: "/glossary".to_string(),
            basis_base_url: "/basis".to_string(),
        }
    }
}

/// Everything an extension needs to resolve what it matched.
pub struct Resolution<'a> {
    pub knowledge: &'a KnowledgeBase,
    pub links: &'a LinkSettings,
    pub diagnostics: &'a mut Diagnostics,
}
