//! Symbol links: `[[core::module::func]]`
//!
//! The path is one or more identifiers separated by `::`. An identifier is made of ASCII
//! letters, digits and underscores, optionally ending in `!` (macros).

use super::{InlineExtension, InlineMatch, Resolution};
use crate::docmark::diagnostics::LinkContext;
use crate::docmark::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;

static SYMBOL_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[\[((?:[A-Za-z0-9_]+!?::)*[A-Za-z0-9_]+!?)\]\]").unwrap()
});

/// Url used when a path is not in the symbol index.
pub const UNRESOLVED_URL: &str = "#";

#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolLinkExtension;

impl SymbolLinkExtension {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, path: &str, resolution: &mut Resolution<'_>) -> Token {
        let url = match resolution.knowledge.symbols().resolve_symbol(path) {
            Some(entry) => entry.url,
            None => {
                resolution
                    .diagnostics
                    .resolver_miss(path, LinkContext::SymbolLink);
                UNRESOLVED_URL.to_string()
            }
        };

        Token::DocsLink {
            path: path.to_string(),
            url,
        }
    }
}

impl InlineExtension for SymbolLinkExtension {
    fn name(&self) -> &'static str {
        "symbol_link"
    }

    fn can_start_at(&self, src: &str, offset: usize) -> bool {
        src[offset..].starts_with("[[")
    }

    fn try_match(
        &self,
        src: &str,
        offset: usize,
        resolution: &mut Resolution<'_>,
    ) -> Option<InlineMatch> {
        let captures = SYMBOL_LINK.captures(&src[offset..])?;
        let whole = captures.get(0)?;
        let path = captures.get(1)?.as_str();

        Some(InlineMatch {
            len: whole.end(),
            token: self.resolve(path, resolution),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docmark::diagnostics::Diagnostics;
    use crate::docmark::inlines::LinkSettings;
    use crate::docmark::resolvers::{KnowledgeBase, SymbolTable};

    fn run(kb: &KnowledgeBase, src: &str) -> (Option<InlineMatch>, Diagnostics) {
        let links = LinkSettings::default();
        let mut diagnostics = Diagnostics::new();
        let found = {
            let mut resolution = Resolution {
                knowledge: kb,
                links: &links,
                diagnostics: &mut diagnostics,
            };
            SymbolLinkExtension.try_match(src, 0, &mut resolution)
        };
        (found, diagnostics)
    }

    #[test]
    fn resolves_known_paths() {
        let kb = KnowledgeBase::empty()
            .with_symbols(SymbolTable::from_iter([("core::module::func", "/docs/func")]));
        let (found, diagnostics) = run(&kb, "[[core::module::func]] tail");
        let found = found.unwrap();

        assert_eq!(found.len, "[[core::module::func]]".len());
        assert_eq!(
            found.token,
            Token::DocsLink {
                path: "core::module::func".into(),
                url: "/docs/func".into()
            }
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn unknown_paths_point_at_hash_and_warn_once() {
        let kb = KnowledgeBase::empty();
        let (found, diagnostics) = run(&kb, "[[core::missing]]");

        assert_eq!(
            found.unwrap().token,
            Token::DocsLink {
                path: "core::missing".into(),
                url: "#".into()
            }
        );
        let entries = diagnostics.into_vec();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].identifier, "core::missing");
        assert_eq!(entries[0].context, LinkContext::SymbolLink);
    }

    #[test]
    fn accepts_single_segments_and_macros() {
        let kb = KnowledgeBase::empty();
        assert!(run(&kb, "[[Polynomial]]").0.is_some());
        assert!(run(&kb, "[[polyfit::assert_fits!]]").0.is_some());
    }

    #[test]
    fn rejects_malformed_paths() {
        let kb = KnowledgeBase::empty();
        for src in ["[[]]", "[[a::]]", "[[a b]]", "[[a::b]", "[[a!b]]", "[[::a]]"] {
            let (found, diagnostics) = run(&kb, src);
            assert!(found.is_none(), "{} should not match", src);
            assert!(diagnostics.is_empty());
        }
    }

    #[test]
    fn only_starts_at_double_bracket() {
        assert!(SymbolLinkExtension.can_start_at("x [[a]]", 2));
        assert!(!SymbolLinkExtension.can_start_at("x [a]", 2));
    }
}
