//! Block lowering
//!
//!     Each comrak block node becomes one block token:
//!
//!         Heading        -> heading (atx and setext alike)
//!         Paragraph      -> paragraph, or text with inline tokens inside a tight list item
//!         BlockQuote     -> blockquote
//!         List / Item    -> list / list_item
//!         Table          -> table (the header row, then body rows)
//!         CodeBlock      -> code (fenced and indented alike)
//!         HtmlBlock      -> html
//!         ThematicBreak  -> hr
//!
//!     Tightness comes from comrak: a list is loose when its items, or blocks inside one
//!     item, are separated by blank lines. Table rows are as wide as the header row; GFM pads
//!     short rows with empty cells and drops extra ones.

use super::Lexer;
use crate::docmark::error::{CompileError, CompileResult};
use crate::docmark::token::{Alignment, TableCell, Token};
use comrak::nodes::{AstNode, ListType, NodeValue, TableAlignment};

impl Lexer<'_> {
    /// Lower every block child of `parent`.
    pub(super) fn blocks<'n>(
        &mut self,
        parent: &'n AstNode<'n>,
        context: &'static str,
    ) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        for child in parent.children() {
            let token = self.block(child, context, false)?;
            tracing::trace!(
                kind = token.kind(),
                line = child.data.borrow().sourcepos.start.line,
                "block token"
            );
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn block<'n>(
        &mut self,
        node: &'n AstNode<'n>,
        context: &'static str,
        tight: bool,
    ) -> CompileResult<Token> {
        let data = node.data.borrow();
        let token = match &data.value {
            NodeValue::Heading(heading) => {
                let tokens = self.inlines(node, "heading")?;
                Token::Heading {
                    depth: heading.level,
                    text: Token::joined_text(&tokens),
                    tokens,
                }
            }
            NodeValue::Paragraph if tight => {
                let tokens = self.inlines(node, "text")?;
                Token::Text {
                    text: Token::joined_text(&tokens),
                    tokens: Some(tokens),
                }
            }
            NodeValue::Paragraph => {
                let tokens = self.inlines(node, "paragraph")?;
                Token::Paragraph {
                    text: Token::joined_text(&tokens),
                    tokens,
                }
            }
            NodeValue::BlockQuote => Token::Blockquote {
                tokens: self.blocks(node, "blockquote")?,
            },
            NodeValue::List(list) => {
                let ordered = matches!(list.list_type, ListType::Ordered);
                let items = node
                    .children()
                    .map(|item| self.list_item(item, list.tight))
                    .collect::<CompileResult<Vec<_>>>()?;
                Token::List {
                    ordered,
                    start: ordered.then_some(list.start as u64),
                    loose: !list.tight,
                    items,
                }
            }
            NodeValue::Table(table) => {
                let align = table.alignments.iter().map(alignment).collect();
                self.table(node, align)?
            }
            NodeValue::CodeBlock(code) => Token::Code {
                lang: language(&code.info),
                text: strip_final_newline(&code.literal),
            },
            NodeValue::HtmlBlock(html) => Token::Html {
                text: html.literal.trim_end_matches('\n').to_string(),
            },
            NodeValue::ThematicBreak => Token::Hr,
            other => return Err(CompileError::unsupported(super::node_kind(&other), context)),
        };
        Ok(token)
    }

    fn list_item<'n>(&mut self, node: &'n AstNode<'n>, tight: bool) -> CompileResult<Token> {
        let data = node.data.borrow();
        if !matches!(data.value, NodeValue::Item(_)) {
            return Err(CompileError::unsupported(super::node_kind(&data.value), "list"));
        }
        let tokens = node
            .children()
            .map(|child| self.block(child, "list item", tight))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(Token::ListItem { tokens })
    }

    fn table<'n>(&mut self, node: &'n AstNode<'n>, align: Vec<Alignment>) -> CompileResult<Token> {
        let mut header = Vec::new();
        let mut rows = Vec::new();
        for row in node.children() {
            let is_header = match &row.data.borrow().value {
                NodeValue::TableRow(is_header) => *is_header,
                other => return Err(CompileError::unsupported(super::node_kind(&other), "table")),
            };
            let cells = row
                .children()
                .map(|cell| self.table_cell(cell))
                .collect::<CompileResult<Vec<_>>>()?;
            if is_header {
                header = cells;
            } else {
                rows.push(cells);
            }
        }
        Ok(Token::Table { header, align, rows })
    }

    fn table_cell<'n>(&mut self, node: &'n AstNode<'n>) -> CompileResult<TableCell> {
        let data = node.data.borrow();
        if !matches!(data.value, NodeValue::TableCell) {
            return Err(CompileError::unsupported(super::node_kind(&data.value), "table row"));
        }
        let tokens = self.inlines(node, "table cell")?;
        Ok(TableCell {
            text: Token::joined_text(&tokens),
            tokens,
        })
    }
}

fn alignment(align: &TableAlignment) -> Alignment {
    match align {
        TableAlignment::None => Alignment::None,
        TableAlignment::Left => Alignment::Left,
        TableAlignment::Center => Alignment::Center,
        TableAlignment::Right => Alignment::Right,
    }
}

/// The first word of a fence's info string.
fn language(info: &str) -> Option<String> {
    info.split_whitespace().next().map(str::to_string)
}

fn strip_final_newline(literal: &str) -> String {
    literal.strip_suffix('\n').unwrap_or(literal).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docmark::lexing::tests::lex_with;
    use crate::docmark::resolvers::KnowledgeBase;

    fn lex(source: &str) -> Vec<Token> {
        lex_with(source, &KnowledgeBase::empty()).0
    }

    fn kinds(tokens: &[Token]) -> Vec<&'static str> {
        tokens.iter().map(Token::kind).collect()
    }

    fn item_kinds(list: &Token) -> Vec<Vec<&'static str>> {
        match list {
            Token::List { items, .. } => items
                .iter()
                .map(|item| match item {
                    Token::ListItem { tokens } => kinds(tokens),
                    other => panic!("Unexpected token: {:?}", other),
                })
                .collect(),
            other => panic!("Unexpected token: {:?}", other),
        }
    }

    #[test]
    fn headings_keep_depth_and_text() {
        let tokens = lex("## Fitting *curves*\n\nSetext\n---\n");
        match &tokens[..] {
            [Token::Heading { depth: 2, text, .. }, Token::Heading { depth: 2, .. }] => {
                assert_eq!(text, "Fitting curves");
            }
            other => panic!("Unexpected tokens: {:?}", other),
        }
    }

    #[test]
    fn fenced_and_indented_code() {
        let tokens = lex("```rust title\nfn main() {}\n```\n\n    indented\n");
        assert_eq!(
            tokens,
            vec![
                Token::Code {
                    lang: Some("rust".into()),
                    text: "fn main() {}".into(),
                },
                Token::Code {
                    lang: None,
                    text: "indented".into(),
                },
            ]
        );
    }

    #[test]
    fn tight_items_hold_text_tokens() {
        let tokens = lex("- a\n- b\n");
        assert_eq!(item_kinds(&tokens[0]), vec![vec!["text"], vec!["text"]]);
        assert!(matches!(tokens[0], Token::List { loose: false, .. }));
    }

    #[test]
    fn loose_items_hold_paragraphs() {
        let tokens = lex("- a\n\n- b\n");
        assert_eq!(
            item_kinds(&tokens[0]),
            vec![vec!["paragraph"], vec!["paragraph"]]
        );
    }

    #[test]
    fn empty_item_keeps_list_tight() {
        let tokens = lex("- a\n-\n- c\n");
        assert!(matches!(tokens[0], Token::List { loose: false, .. }));
        assert_eq!(item_kinds(&tokens[0]), vec![vec!["text"], vec![], vec!["text"]]);
    }

    #[test]
    fn ordered_lists_keep_their_start() {
        let tokens = lex("3) three\n4) four\n");
        assert!(matches!(
            tokens[0],
            Token::List {
                ordered: true,
                start: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn nested_lists() {
        let tokens = lex("- outer\n  - inner a\n  - inner b\n- second");
        assert_eq!(item_kinds(&tokens[0]), vec![vec!["text", "list"], vec!["text"]]);
    }

    #[test]
    fn changing_bullet_starts_new_list() {
        assert_eq!(kinds(&lex("- a\n- b\n+ c")), vec!["list", "list"]);
    }

    #[test]
    fn blockquotes_hold_blocks() {
        let tokens = lex("> # Note\n> body\n");
        match &tokens[0] {
            Token::Blockquote { tokens } => assert_eq!(kinds(tokens), vec!["heading", "paragraph"]),
            other => panic!("Unexpected token: {:?}", other),
        }
    }

    #[test]
    fn table_rows_take_the_header_width() {
        let tokens = lex("| a | b |\n|:--|--:|\n| 1 | 2 |\n| 3 |\n| 4 | 5 | 6 |");
        match &tokens[0] {
            Token::Table { header, align, rows } => {
                assert_eq!(header.len(), 2);
                assert_eq!(header[0].text, "a");
                assert_eq!(align, &vec![Alignment::Left, Alignment::Right]);
                let widths: Vec<_> = rows.iter().map(Vec::len).collect();
                assert_eq!(widths, vec![2, 2, 2]);
                assert_eq!(rows[1][1].text, "");
            }
            other => panic!("Unexpected token: {:?}", other),
        }
    }

    #[test]
    fn table_needs_matching_delimiter_row() {
        assert_eq!(kinds(&lex("| a | b |\n|---|\n| 1 | 2 |")), vec!["paragraph"]);
    }

    #[test]
    fn escaped_pipes_stay_in_cells() {
        let tokens = lex("| a \\| b | c |\n|---|---|\n");
        match &tokens[0] {
            Token::Table { header, .. } => assert_eq!(header[0].text, "a | b"),
            other => panic!("Unexpected token: {:?}", other),
        }
    }

    #[test]
    fn html_blocks_run_to_blank_line() {
        let tokens = lex("<div class=\"note\">\n*raw*\n</div>\n\ntext");
        assert_eq!(
            tokens[0],
            Token::Html {
                text: "<div class=\"note\">\n*raw*\n</div>".into()
            }
        );
        assert_eq!(kinds(&tokens), vec!["html", "paragraph"]);
    }

    #[test]
    fn inline_tag_at_line_start_stays_in_paragraph() {
        assert_eq!(kinds(&lex("<kbd>Ctrl</kbd> to copy")), vec!["paragraph"]);
    }

    #[test]
    fn rules_and_blank_lines() {
        assert_eq!(kinds(&lex("a\n\n***\n\n\n\nb")), vec!["paragraph", "hr", "paragraph"]);
    }
}
