//! Glossary links: `@[term]` and `@[term]{display text}`
//!
//! The term is looked up in the glossary first and in the basis dictionary second. Documents
//! may address a basis entry explicitly with a `basis-` prefix (`@[basis-chebyshev]`); the
//! prefix is dropped when the basis dictionary does not know the full term.

use super::{InlineExtension, InlineMatch, Resolution};
use crate::docmark::diagnostics::LinkContext;
use crate::docmark::resolvers::{BasisEntry, BASIS_PREFIX};
use crate::docmark::token::Token;
use once_cell::sync::Lazy;
use regex::Regex;

static GLOSSARY_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@\[([^\]]+)\](?:\{([^}]+)\})?").unwrap());

/// Description shown for terms found in neither table.
pub const MISSING_GLOSSARY_TERM: &str = "Missing Glossary Term — Please report this issue.";

#[derive(Debug, Clone, Copy, Default)]
pub struct GlossaryLinkExtension;

struct Resolved {
    name: String,
    url: String,
    desc: String,
}

impl GlossaryLinkExtension {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, term: &str, resolution: &mut Resolution<'_>) -> Resolved {
        if let Some(entry) = resolution.knowledge.glossary().resolve_term(term) {
            return Resolved {
                name: entry.name,
                url: format!("{}#{}", resolution.links.glossary_base_url, term),
                desc: entry.short_desc,
            };
        }

        if let Some((key, entry)) = lookup_basis(term, resolution) {
            return Resolved {
                name: entry.name.clone().unwrap_or_else(|| term.to_string()),
                url: format!("{}#{}", resolution.links.basis_base_url, key),
                desc: entry.description(),
            };
        }

        resolution
            .diagnostics
            .resolver_miss(term, LinkContext::GlossaryLink);
        Resolved {
            name: term.to_string(),
            url: "#".to_string(),
            desc: MISSING_GLOSSARY_TERM.to_string(),
        }
    }
}

fn lookup_basis<'t>(term: &'t str, resolution: &Resolution<'_>) -> Option<(&'t str, BasisEntry)> {
    let basis = resolution.knowledge.basis();
    if let Some(entry) = basis.resolve_basis(term) {
        return Some((term, entry));
    }
    let key = term.strip_prefix(BASIS_PREFIX)?;
    basis.resolve_basis(key).map(|entry| (key, entry))
}

impl InlineExtension for GlossaryLinkExtension {
    fn name(&self) -> &'static str {
        "glossary_link"
    }

    fn can_start_at(&self, src: &str, offset: usize) -> bool {
        src[offset..].starts_with("@[")
    }

    fn try_match(
        &self,
        src: &str,
        offset: usize,
        resolution: &mut Resolution<'_>,
    ) -> Option<InlineMatch> {
        let captures = GLOSSARY_LINK.captures(&src[offset..])?;
        let whole = captures.get(0)?;
        let term = captures.get(1)?.as_str();
        let display = captures.get(2).map(|m| m.as_str());

        let resolved = self.resolve(term, resolution);
        let link_text = display
            .map(str::to_string)
            .unwrap_or_else(|| resolved.name.clone());

        Some(InlineMatch {
            len: whole.end(),
            token: Token::GlossaryLink {
                term: term.to_string(),
                link_text,
                name: resolved.name,
                url: resolved.url,
                desc: resolved.desc,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docmark::diagnostics::Diagnostics;
    use crate::docmark::inlines::LinkSettings;
    use crate::docmark::resolvers::{BasisTable, GlossaryTable, KnowledgeBase};

    fn knowledge() -> KnowledgeBase {
        let mut glossary = GlossaryTable::new();
        glossary.insert("derivative", "Derivative", "rate of change");
        let mut basis = BasisTable::new();
        basis.insert("chebyshev", Some("Chebyshev"), ["Orthogonal.", "Stable."]);
        basis.insert("legendre", None, ["Orthogonal on [-1, 1]."]);
        KnowledgeBase::empty().with_glossary(glossary).with_basis(basis)
    }

    fn run(kb: &KnowledgeBase, src: &str) -> (Token, Diagnostics) {
        let links = LinkSettings::default();
        let mut diagnostics = Diagnostics::new();
        let found = {
            let mut resolution = Resolution {
                knowledge: kb,
                links: &links,
                diagnostics: &mut diagnostics,
            };
            GlossaryLinkExtension.try_match(src, 0, &mut resolution)
        };
        (found.expect("glossary link to match").token, diagnostics)
    }

    #[test]
    fn explicit_display_text_wins() {
        let (token, diagnostics) = run(&knowledge(), "@[derivative]{the derivative}");
        match token {
            Token::GlossaryLink {
                link_text, name, url, desc, ..
            } => {
                assert_eq!(link_text, "the derivative");
                assert_eq!(name, "Derivative");
                assert_eq!(url, "/glossary#derivative");
                assert_eq!(desc, "rate of change");
            }
            other => panic!("Unexpected token: {:?}", other),
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn display_defaults_to_resolved_name() {
        let (token, _) = run(&knowledge(), "@[derivative]");
        match token {
            Token::GlossaryLink { link_text, .. } => assert_eq!(link_text, "Derivative"),
            other => panic!("Unexpected token: {:?}", other),
        }
    }

    #[test]
    fn falls_back_to_basis() {
        let (token, diagnostics) = run(&knowledge(), "@[chebyshev]");
        match token {
            Token::GlossaryLink { name, url, desc, .. } => {
                assert_eq!(name, "Chebyshev");
                assert_eq!(url, "/basis#chebyshev");
                assert_eq!(desc, "Orthogonal.\n\nStable.");
            }
            other => panic!("Unexpected token: {:?}", other),
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn basis_prefix_is_stripped_for_lookup() {
        let (token, _) = run(&knowledge(), "@[basis-legendre]");
        match token {
            Token::GlossaryLink {
                term, name, url, ..
            } => {
                assert_eq!(term, "basis-legendre");
                assert_eq!(name, "basis-legendre");
                assert_eq!(url, "/basis#legendre");
            }
            other => panic!("Unexpected token: {:?}", other),
        }
    }

    #[test]
    fn missing_terms_still_produce_a_link() {
        let (token, diagnostics) = run(&knowledge(), "@[epsilon]");
        match token {
            Token::GlossaryLink {
                link_text, name, url, desc, ..
            } => {
                assert_eq!(link_text, "epsilon");
                assert_eq!(name, "epsilon");
                assert_eq!(url, "#");
                assert_eq!(desc, MISSING_GLOSSARY_TERM);
            }
            other => panic!("Unexpected token: {:?}", other),
        }
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn empty_braces_are_not_display_text() {
        let links = LinkSettings::default();
        let kb = knowledge();
        let mut diagnostics = Diagnostics::new();
        let mut resolution = Resolution {
            knowledge: &kb,
            links: &links,
            diagnostics: &mut diagnostics,
        };
        let found = GlossaryLinkExtension
            .try_match("@[derivative]{}", 0, &mut resolution)
            .unwrap();
        assert_eq!(found.len, "@[derivative]".len());
    }
}
