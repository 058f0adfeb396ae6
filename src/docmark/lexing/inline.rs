//! Inline lowering
//!
//!     Comrak splits text at every character it once considered markup (`[`, `@`, `]`, escapes),
//!     so consecutive text literals and soft breaks are merged back into one run before
//!     anything looks at them. The registered extensions then scan that run: at each offset
//!     every extension is asked in registration order, the first match becomes a reference
//!     token, and whatever no extension claims stays text.
//!
//!     Emphasis, strong, link labels and image alt text lower their children the same way and
//!     keep the joined result as their text. A reference inside them is resolved (and reported
//!     when it misses) and contributes its display text.

use super::Lexer;
use crate::docmark::error::{CompileError, CompileResult};
use crate::docmark::token::Token;
use comrak::nodes::{AstNode, NodeValue};

impl Lexer<'_> {
    /// Lower the inline children of `parent`.
    pub(super) fn inlines<'n>(
        &mut self,
        parent: &'n AstNode<'n>,
        context: &'static str,
    ) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut run = String::new();

        for child in parent.children() {
            let data = child.data.borrow();
            match &data.value {
                NodeValue::Text(literal) => run.push_str(literal),
                NodeValue::SoftBreak => run.push('\n'),
                value => {
                    // Text before this node resolves first, so diagnostics stay in source order.
                    self.scan(&mut run, &mut tokens);
                    let token = self.inline(child, value, context)?;
                    tokens.push(token);
                }
            }
        }

        self.scan(&mut run, &mut tokens);
        Ok(tokens)
    }

    fn inline<'n>(
        &mut self,
        node: &'n AstNode<'n>,
        value: &NodeValue,
        context: &'static str,
    ) -> CompileResult<Token> {
        let token = match value {
            NodeValue::LineBreak => Token::Br,
            NodeValue::Code(code) => Token::Codespan {
                text: code.literal.clone(),
            },
            NodeValue::HtmlInline(html) => Token::Html { text: html.clone() },
            NodeValue::Emph => Token::Em {
                text: self.label(node)?,
            },
            NodeValue::Strong => Token::Strong {
                text: self.label(node)?,
            },
            NodeValue::Link(link) => Token::Link {
                href: link.url.clone(),
                title: title(&link.title),
                text: self.label(node)?,
            },
            NodeValue::Image(link) => Token::Image {
                href: link.url.clone(),
                title: title(&link.title),
                text: self.label(node)?,
            },
            other => return Err(CompileError::unsupported(super::node_kind(&other), context)),
        };
        Ok(token)
    }

    /// Text of an inline container, with references inside it resolved.
    fn label<'n>(&mut self, node: &'n AstNode<'n>) -> CompileResult<String> {
        let tokens = self.inlines(node, "inline markup")?;
        Ok(Token::joined_text(&tokens))
    }

    /// Run the extension registry over a merged text run, draining it into `tokens`.
    fn scan(&mut self, run: &mut String, tokens: &mut Vec<Token>) {
        if run.is_empty() {
            return;
        }
        let text = std::mem::take(run);
        let registry = self.registry;
        let mut resolution = self.resolution();

        let mut plain_from = 0;
        let mut pos = 0;
        while pos < text.len() {
            if let Some(found) = registry.match_at(&text, pos, &mut resolution) {
                if plain_from < pos {
                    tokens.push(Token::text(&text[plain_from..pos]));
                }
                tokens.push(found.token);
                pos += found.len;
                plain_from = pos;
                continue;
            }
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
        if plain_from < text.len() {
            tokens.push(Token::text(&text[plain_from..]));
        }
    }
}

fn title(raw: &str) -> Option<String> {
    (!raw.is_empty()).then(|| raw.to_string())
}
