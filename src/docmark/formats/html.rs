//! HTML rendering
//!
//!     Renders nodes into the body of a page. Nodes are self-describing, so rendering never
//!     looks anything up: links carry their resolved urls, code carries its highlighted markup.
//!
//!     Conventions:
//!         - Text is escaped; raw html and highlighted code are emitted as-is.
//!         - Headings get `id` attributes from their slug, for in-page anchors.
//!         - Symbol links render as `[path]`; glossary links carry their description in a
//!           bootstrap tooltip.
//!         - Block elements end with a newline, inline elements don't.

use super::registry::{FormatError, Formatter};
use crate::docmark::ast::{
    BlockQuote, CodeBlock, GlossaryLink, Image, Link, List, Node, Table, TableCell,
};
use crate::docmark::token::Alignment;
use std::fmt::Write;

/// Escape text for use in element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render nodes to HTML.
pub fn render_html(nodes: &[Node]) -> String {
    let mut html = String::new();
    for node in nodes {
        render_node(&mut html, node);
    }
    html
}

fn render_nodes(html: &mut String, nodes: &[Node]) {
    for node in nodes {
        render_node(html, node);
    }
}

fn render_node(html: &mut String, node: &Node) {
    match node {
        Node::Text(text) => match text.content() {
            Some(content) => html.push_str(&escape_html(content)),
            None => render_nodes(html, text.children()),
        },
        Node::Strong(strong) => {
            let _ = write!(html, "<strong>{}</strong>", escape_html(strong.content()));
        }
        Node::Em(em) => {
            let _ = write!(html, "<em>{}</em>", escape_html(em.content()));
        }
        Node::BlockQuote(quote) => render_blockquote(html, quote),
        Node::Table(table) => render_table(html, table),
        Node::HorizontalRule => html.push_str("<hr>\n"),
        Node::List(list) => render_list(html, list),
        Node::ListItem(item) => {
            html.push_str("<li>");
            render_nodes(html, item.children());
            html.push_str("</li>\n");
        }
        Node::Image(image) => render_image(html, image),
        Node::CodeBlock(code) => render_code_block(html, code),
        Node::CodeSpan(code) => {
            let _ = write!(html, "<code>{}</code>", code.content());
        }
        Node::Heading(heading) => {
            let _ = write!(html, "<h{} id=\"{}\">", heading.level(), heading.id());
            render_nodes(html, heading.children());
            let _ = writeln!(html, "</h{}>", heading.level());
        }
        Node::Paragraph(paragraph) => {
            html.push_str("<p>");
            render_nodes(html, paragraph.children());
            html.push_str("</p>\n");
        }
        Node::Link(link) => render_link(html, link),
        Node::DocsLink(link) => {
            let _ = write!(
                html,
                "<a href=\"{}\">[{}]</a>",
                escape_html(link.url()),
                escape_html(link.path())
            );
        }
        Node::GlossaryLink(link) => render_glossary_link(html, link),
        Node::LineBreak => html.push_str("<br>\n"),
        Node::RawHtml(raw) => html.push_str(raw.html()),
    }
}

fn render_blockquote(html: &mut String, quote: &BlockQuote) {
    html.push_str("<blockquote>\n");
    if let Some(heading) = quote.heading() {
        let _ = writeln!(
            html,
            "<p class=\"blockquote-heading\"><strong>{}</strong></p>",
            escape_html(heading)
        );
    }
    render_nodes(html, quote.children());
    html.push_str("</blockquote>\n");
}

fn render_list(html: &mut String, list: &List) {
    let tag = if list.is_ordered() { "ol" } else { "ul" };
    match list.start() {
        Some(start) if list.is_ordered() && start != 1 => {
            let _ = writeln!(html, "<ol start=\"{start}\">");
        }
        _ => {
            let _ = writeln!(html, "<{tag}>");
        }
    }
    for item in list.items() {
        html.push_str("<li>");
        render_nodes(html, item.children());
        html.push_str("</li>\n");
    }
    let _ = writeln!(html, "</{tag}>");
}

fn render_table(html: &mut String, table: &Table) {
    html.push_str("<table>\n<thead>\n");
    render_row(html, table, table.headers(), "th");
    html.push_str("</thead>\n");
    if !table.rows().is_empty() {
        html.push_str("<tbody>\n");
        for row in table.rows() {
            render_row(html, table, row, "td");
        }
        html.push_str("</tbody>\n");
    }
    html.push_str("</table>\n");
}

fn render_row(html: &mut String, table: &Table, cells: &[TableCell], tag: &str) {
    html.push_str("<tr>\n");
    for (index, cell) in cells.iter().enumerate() {
        match table.alignment(index) {
            Alignment::None => {
                let _ = write!(html, "<{tag}>");
            }
            Alignment::Left => {
                let _ = write!(html, "<{tag} align=\"left\">");
            }
            Alignment::Center => {
                let _ = write!(html, "<{tag} align=\"center\">");
            }
            Alignment::Right => {
                let _ = write!(html, "<{tag} align=\"right\">");
            }
        }
        render_nodes(html, cell.nodes());
        let _ = writeln!(html, "</{tag}>");
    }
    html.push_str("</tr>\n");
}

fn render_image(html: &mut String, image: &Image) {
    let _ = write!(
        html,
        "<img src=\"{}\" alt=\"{}\"",
        escape_html(image.url()),
        escape_html(image.alt())
    );
    if let Some(title) = image.title() {
        let _ = write!(html, " title=\"{}\"", escape_html(title));
    }
    html.push('>');
}

fn render_link(html: &mut String, link: &Link) {
    let _ = write!(html, "<a href=\"{}\"", escape_html(link.url()));
    if let Some(title) = link.title() {
        let _ = write!(html, " title=\"{}\"", escape_html(title));
    }
    let _ = write!(html, ">{}</a>", escape_html(link.text()));
}

fn render_glossary_link(html: &mut String, link: &GlossaryLink) {
    let _ = write!(
        html,
        "<a class=\"glossary-link\" href=\"{}\" data-bs-toggle=\"tooltip\" data-bs-title=\"{}\">{}</a>",
        escape_html(link.url()),
        escape_html(link.desc()),
        escape_html(link.link_text())
    );
}

fn render_code_block(html: &mut String, code: &CodeBlock) {
    match code.language() {
        Some(language) => {
            let _ = write!(
                html,
                "<pre><code class=\"language-{}\">",
                escape_html(language)
            );
        }
        None => html.push_str("<pre><code>"),
    }
    if code.is_highlighted() {
        html.push_str(code.content());
    } else {
        html.push_str(&escape_html(code.content()));
    }
    html.push_str("</code></pre>\n");
}

/// Formatter for the `html` format.
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, nodes: &[Node]) -> Result<String, FormatError> {
        Ok(render_html(nodes))
    }

    fn description(&self) -> &'static str {
        "HTML page body"
    }
}
