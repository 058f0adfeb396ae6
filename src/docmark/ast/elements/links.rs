//! Link elements
//!
//!     Standard links get their url normalized: anything that is not absolute (`http://`,
//!     `https://`), rooted (`/`) or a fragment (`#`) is treated as site-relative and rooted.
//!     Images keep their url as written.
//!
//!     DocsLink and GlossaryLink come from the inline extensions and only hold values that
//!     were already resolved while lexing.

use super::super::traits::AstNode;
use super::text::label;
use serde::Serialize;

const KEPT_PREFIXES: [&str; 4] = ["http://", "https://", "/", "#"];

/// Root a site-relative url: `relative/path` becomes `/relative/path`.
pub fn normalize_url(url: &str) -> String {
    if KEPT_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// `[text](url "title")`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    url: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Link {
    pub fn new(url: &str, text: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: normalize_url(url),
            text: text.into(),
            title,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl AstNode for Link {
    fn node_type(&self) -> &'static str {
        "Link"
    }

    fn display_label(&self) -> String {
        format!("{} -> {}", label(&self.text, 30), self.url)
    }

    fn plaintext(&self) -> &str {
        &self.text
    }
}

/// `![alt](url "title")`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    url: String,
    alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>, alt: impl Into<String>, title: Option<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
            title,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl AstNode for Image {
    fn node_type(&self) -> &'static str {
        "Image"
    }

    fn display_label(&self) -> String {
        format!("{} ({})", label(&self.alt, 30), self.url)
    }

    fn plaintext(&self) -> &str {
        &self.alt
    }
}

/// `[[path::to::item]]`, resolved against the symbol table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocsLink {
    path: String,
    url: String,
}

impl DocsLink {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl AstNode for DocsLink {
    fn node_type(&self) -> &'static str {
        "DocsLink"
    }

    fn display_label(&self) -> String {
        format!("{} -> {}", self.path, self.url)
    }

    fn plaintext(&self) -> &str {
        &self.path
    }
}

/// `@[term]{display}`, resolved against the glossary and basis tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlossaryLink {
    term: String,
    link_text: String,
    name: String,
    url: String,
    desc: String,
}

impl GlossaryLink {
    pub fn new(
        term: impl Into<String>,
        link_text: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            link_text: link_text.into(),
            name: name.into(),
            url: url.into(),
            desc: desc.into(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Text shown in the page: the explicit display text, else the resolved name.
    pub fn link_text(&self) -> &str {
        &self.link_text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }
}

impl AstNode for GlossaryLink {
    fn node_type(&self) -> &'static str {
        "GlossaryLink"
    }

    fn display_label(&self) -> String {
        format!("{} -> {}", self.term, self.url)
    }

    fn plaintext(&self) -> &str {
        &self.link_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url("relative/path"), "/relative/path");
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
        assert_eq!(normalize_url("#anchor"), "#anchor");
        assert_eq!(normalize_url("/already/rooted"), "/already/rooted");
    }

    #[test]
    fn test_link_normalizes_but_image_does_not() {
        let link = Link::new("guide.html", "Guide", None);
        assert_eq!(link.url(), "/guide.html");
        assert_eq!(link.plaintext(), "Guide");

        let image = Image::new("img/plot.png", "Plot", Some("A plot".into()));
        assert_eq!(image.url(), "img/plot.png");
        assert_eq!(image.plaintext(), "Plot");
    }

    #[test]
    fn test_reference_plaintext() {
        assert_eq!(DocsLink::new("mod::fn", "#").plaintext(), "mod::fn");
        let link = GlossaryLink::new("epsilon", "tiny", "Epsilon", "/glossary#epsilon", "small");
        assert_eq!(link.plaintext(), "tiny");
        assert_eq!(link.name(), "Epsilon");
    }
}
