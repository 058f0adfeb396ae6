//! Syntax highlighting
//!
//!     Highlighting is a capability injected into the compiler: one [`Highlighter`] handles one
//!     language, named by [`Highlighter::language`]. Code blocks tagged with that language and
//!     every code span go through it; everything else is stored as written.
//!
//!     The default [`RustHighlighter`] tokenizes with logos and wraps tokens in `hljs-*` classed
//!     spans, so the output works with any highlight.js stylesheet.

use crate::docmark::formats::html::escape_html;
use logos::Logos;

/// Turns source code of a single language into highlighted HTML.
pub trait Highlighter: Send + Sync {
    /// The code block language tag this highlighter handles (e.g. `rust`).
    fn language(&self) -> &str;

    /// Highlight `code`, returning HTML. Implementations must escape the source.
    fn highlight(&self, code: &str) -> String;
}

/// Escapes code without adding any markup.
#[derive(Debug, Clone)]
pub struct PlainHighlighter {
    language: String,
}

impl PlainHighlighter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl Highlighter for PlainHighlighter {
    fn language(&self) -> &str {
        &self.language
    }

    fn highlight(&self, code: &str) -> String {
        escape_html(code)
    }
}

/// Rust tokens relevant for highlighting.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RustToken {
    #[regex(r"//[^\n]*")]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)'")]
    Str,

    #[regex(r"'[A-Za-z_][A-Za-z0-9_]*", priority = 1)]
    Lifetime,

    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?((i|u)(8|16|32|64|128|size)|f32|f64)?")]
    #[regex(r"0x[0-9a-fA-F_]+")]
    #[regex(r"0b[01_]+")]
    Number,

    #[regex(r"#!?\[[^\]\n]*\]")]
    Attribute,

    #[token("as")]
    #[token("async")]
    #[token("await")]
    #[token("break")]
    #[token("const")]
    #[token("continue")]
    #[token("crate")]
    #[token("dyn")]
    #[token("else")]
    #[token("enum")]
    #[token("extern")]
    #[token("fn")]
    #[token("for")]
    #[token("if")]
    #[token("impl")]
    #[token("in")]
    #[token("let")]
    #[token("loop")]
    #[token("match")]
    #[token("mod")]
    #[token("move")]
    #[token("mut")]
    #[token("pub")]
    #[token("ref")]
    #[token("return")]
    #[token("self")]
    #[token("Self")]
    #[token("static")]
    #[token("struct")]
    #[token("super")]
    #[token("trait")]
    #[token("type")]
    #[token("unsafe")]
    #[token("use")]
    #[token("where")]
    #[token("while")]
    Keyword,

    #[token("true")]
    #[token("false")]
    #[token("None")]
    #[token("Some")]
    #[token("Ok")]
    #[token("Err")]
    Literal,

    #[token("bool")]
    #[token("char")]
    #[token("str")]
    #[token("i8")]
    #[token("i16")]
    #[token("i32")]
    #[token("i64")]
    #[token("i128")]
    #[token("isize")]
    #[token("u8")]
    #[token("u16")]
    #[token("u32")]
    #[token("u64")]
    #[token("u128")]
    #[token("usize")]
    #[token("f32")]
    #[token("f64")]
    PrimitiveType,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*!")]
    Macro,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
}

impl RustToken {
    fn class(self) -> Option<&'static str> {
        match self {
            RustToken::Comment => Some("hljs-comment"),
            RustToken::Str => Some("hljs-string"),
            RustToken::Lifetime => Some("hljs-symbol"),
            RustToken::Number => Some("hljs-number"),
            RustToken::Attribute => Some("hljs-meta"),
            RustToken::Keyword => Some("hljs-keyword"),
            RustToken::Literal => Some("hljs-literal"),
            RustToken::PrimitiveType => Some("hljs-type"),
            RustToken::Macro => Some("hljs-built_in"),
            RustToken::Ident | RustToken::Whitespace => None,
        }
    }
}

/// highlight.js compatible Rust highlighter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustHighlighter;

impl RustHighlighter {
    pub fn new() -> Self {
        Self
    }
}

impl Highlighter for RustHighlighter {
    fn language(&self) -> &str {
        "rust"
    }

    fn highlight(&self, code: &str) -> String {
        let mut html = String::with_capacity(code.len() * 2);
        for (token, span) in RustToken::lexer(code).spanned() {
            let text = escape_html(&code[span]);
            match token.ok().and_then(RustToken::class) {
                Some(class) => {
                    html.push_str("<span class=\"");
                    html.push_str(class);
                    html.push_str("\">");
                    html.push_str(&text);
                    html.push_str("</span>");
                }
                None => html.push_str(&text),
            }
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_idents() {
        let html = RustHighlighter.highlight("let x = fit;");
        assert_eq!(
            html,
            "<span class=\"hljs-keyword\">let</span> x = fit;"
        );
    }

    #[test]
    fn keyword_prefix_is_an_ident() {
        assert_eq!(RustHighlighter.highlight("letter"), "letter");
    }

    #[test]
    fn strings_are_escaped() {
        let html = RustHighlighter.highlight("\"<a>\"");
        assert_eq!(html, "<span class=\"hljs-string\">&quot;&lt;a&gt;&quot;</span>");
    }

    #[test]
    fn macros_and_numbers() {
        let html = RustHighlighter.highlight("vec![1, 2]");
        assert_eq!(
            html,
            "<span class=\"hljs-built_in\">vec!</span>[<span class=\"hljs-number\">1</span>, <span class=\"hljs-number\">2</span>]"
        );
    }

    #[test]
    fn comments_run_to_end_of_line() {
        let html = RustHighlighter.highlight("// note\nx");
        assert_eq!(html, "<span class=\"hljs-comment\">// note</span>\nx");
    }

    #[test]
    fn unknown_characters_pass_through_escaped() {
        assert_eq!(RustHighlighter.highlight("a & b"), "a &amp; b");
    }

    #[test]
    fn plain_highlighter_only_escapes() {
        let plain = PlainHighlighter::new("rust");
        assert_eq!(plain.language(), "rust");
        assert_eq!(plain.highlight("a < b"), "a &lt; b");
    }
}
