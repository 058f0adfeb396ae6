//! End-to-end compiler scenarios
//!
//! Each test compiles a small page against the fixture knowledge base (or an empty one) and
//! checks the resulting node tree with the fluent assertion API.

use docmark::docmark::inlines::MISSING_GLOSSARY_TERM;
use docmark::docmark::testing::{assert_nodes, fixtures, TextMatch};
use docmark::{Compiler, DiagnosticKind, KnowledgeBase, LinkContext};

const TITLE_PAGE: &str = "# Title\n\nSee [[mod::fn]] and @[epsilon].\n";

#[test]
fn test_title_page_resolves_everything() {
    let compilation = fixtures::compiler().compile(TITLE_PAGE).unwrap();

    assert!(compilation.diagnostics.is_empty());
    assert_nodes(&compilation.nodes)
        .item_count(2)
        .item(0, |item| {
            item.assert_heading().level(1).id("title").text("Title");
        })
        .item(1, |item| {
            item.assert_paragraph()
                .text("See mod::fn and Epsilon.")
                .child_count(5)
                .child(1, |child| {
                    child
                        .assert_docs_link()
                        .path("mod::fn")
                        .url("/docs/mod/fn");
                })
                .child(3, |child| {
                    child
                        .assert_glossary_link()
                        .term("epsilon")
                        .name("Epsilon")
                        .link_text("Epsilon")
                        .url("/glossary#epsilon")
                        .desc("small quantity");
                });
        });
}

#[test]
fn test_title_page_with_empty_tables() {
    let compilation = Compiler::new(KnowledgeBase::empty())
        .compile(TITLE_PAGE)
        .unwrap();

    assert_nodes(&compilation.nodes).item(1, |item| {
        item.assert_paragraph()
            .child(1, |child| {
                child.assert_docs_link().path("mod::fn").url("#");
            })
            .child(3, |child| {
                child
                    .assert_glossary_link()
                    .term("epsilon")
                    .name("epsilon")
                    .link_text("epsilon")
                    .url("#")
                    .desc(MISSING_GLOSSARY_TERM);
            });
    });

    let misses: Vec<_> = compilation
        .diagnostics
        .iter()
        .map(|d| (d.kind, d.identifier.as_str(), d.context))
        .collect();
    assert_eq!(
        misses,
        vec![
            (DiagnosticKind::ResolverMiss, "mod::fn", LinkContext::SymbolLink),
            (DiagnosticKind::ResolverMiss, "epsilon", LinkContext::GlossaryLink),
        ]
    );
}

#[test]
fn test_two_by_two_table() {
    let source = "| Method | Degree |\n|--------|-------:|\n| `fit` | 3 |\n| [[mod::fn]] | 5 |\n";
    let nodes = fixtures::compiler().parse(source).unwrap();

    assert_nodes(&nodes).item_count(1).item(0, |item| {
        item.assert_table()
            .headers(&["Method", "Degree"])
            .row_count(2)
            .row(0, &["fit", "3"])
            .row(1, &["mod::fn", "5"]);
    });
}

#[test]
fn test_rows_take_the_header_width() {
    let source = "| a | b |\n|---|---|\n| 1 |\n| 1 | 2 | 3 |\n";
    let nodes = fixtures::compiler().parse(source).unwrap();

    assert_nodes(&nodes).item(0, |item| {
        item.assert_table()
            .row(0, &["1", ""])
            .row(1, &["1", "2"]);
    });
}

#[test]
fn test_basis_terms_resolve_after_glossary() {
    let compilation = fixtures::compiler()
        .compile("@[basis-chebyshev] and @[fourier]{Fourier series}")
        .unwrap();

    assert!(compilation.diagnostics.is_empty());
    assert_nodes(&compilation.nodes).item(0, |item| {
        item.assert_paragraph()
            .child(0, |child| {
                child
                    .assert_glossary_link()
                    .term("basis-chebyshev")
                    .name("Chebyshev")
                    .url("/basis#chebyshev")
                    .desc("Orthogonal polynomials on [-1, 1].\n\nWell suited to approximation.");
            })
            .child(2, |child| {
                child
                    .assert_glossary_link()
                    .name("fourier")
                    .link_text("Fourier series")
                    .url("/basis#fourier");
            });
    });
}

#[test]
fn test_blockquote_with_heading() {
    let source = "> ### Note\n> Fits are **not** unique.\n";
    let nodes = fixtures::compiler().parse(source).unwrap();

    assert_nodes(&nodes).item_count(1).item(0, |item| {
        item.plaintext("Note\nFits are not unique.")
            .assert_blockquote()
            .heading(Some("Note"))
            .children(|children| {
                children.kinds(&["Paragraph"]);
            });
    });
}

#[test]
fn test_blockquote_heading_is_its_plaintext() {
    let nodes = fixtures::compiler().parse("> ## Note *x*\n> body\n").unwrap();

    assert_nodes(&nodes).item(0, |item| {
        item.assert_blockquote().heading(Some("Note x"));
    });
}

#[test]
fn test_heading_ids_join_inline_children() {
    let nodes = fixtures::compiler().parse("## a`b`\n").unwrap();

    assert_nodes(&nodes).item(0, |item| {
        item.assert_heading().text("ab").id("ab");
    });
}

#[test]
fn test_empty_item_keeps_list_tight() {
    let nodes = fixtures::compiler().parse("- a\n-\n- c\n").unwrap();

    assert_nodes(&nodes).item(0, |item| {
        item.assert_list()
            .item_count(3)
            .item(0, |children| {
                children.kinds(&["Text"]);
            })
            .item(2, |children| {
                children.kinds(&["Text"]);
            });
    });
}

#[test]
fn test_lists() {
    let source = "\
- first [[mod::fn]]
- second
  1. nested
  2. more

3) three
4) four
";
    let nodes = fixtures::compiler().parse(source).unwrap();

    assert_nodes(&nodes)
        .kinds(&["List", "List"])
        .item(0, |item| {
            item.plaintext("first mod::fn\nsecond nested\nmore")
                .assert_list()
                .ordered(false)
                .item_count(2)
                .item(1, |children| {
                    children.kinds(&["Text", "List"]);
                });
        })
        .item(1, |item| {
            item.assert_list().ordered(true).start(Some(3)).item_count(2);
        });
}

#[test]
fn test_code_highlighting() {
    let source = "```rust\nlet x = 1;\n```\n\n```python\nx = 1\n```\n\nCall `fit()` first.\n";
    let nodes = fixtures::compiler().parse(source).unwrap();

    assert_nodes(&nodes)
        .kinds(&["CodeBlock", "CodeBlock", "Paragraph"])
        .item(0, |item| {
            item.assert_code_block()
                .language(Some("rust"))
                .highlighted(true)
                .code("let x = 1;");
        })
        .item(1, |item| {
            item.assert_code_block()
                .language(Some("python"))
                .highlighted(false);
        })
        .item(2, |item| {
            item.plaintext("Call fit() first.");
        });
}

#[test]
fn test_setext_headings_and_rules() {
    let nodes = fixtures::compiler()
        .parse("Overview\n========\n\n***\n\nDetails\n-------\n")
        .unwrap();

    assert_nodes(&nodes)
        .kinds(&["Heading", "HorizontalRule", "Heading"])
        .item(0, |item| {
            item.assert_heading().level(1).id("overview");
        })
        .item(1, |item| {
            item.plaintext("---");
        })
        .item(2, |item| {
            item.assert_heading().level(2).id("details");
        });
}

#[test]
fn test_raw_html_passthrough() {
    let nodes = fixtures::compiler()
        .parse("<div class=\"warning\">\nCareful\n</div>\n\nPress <kbd>q</kbd>.\n")
        .unwrap();

    assert_nodes(&nodes)
        .kinds(&["RawHtml", "Paragraph"])
        .item(0, |item| {
            item.plaintext("<div class=\"warning\">\nCareful\n</div>");
        })
        .item(1, |item| {
            item.plaintext("Press <kbd>q</kbd>.");
        });
}

#[test]
fn test_empty_document() {
    let compilation = fixtures::compiler().compile("").unwrap();
    assert!(compilation.nodes.is_empty());
    assert!(compilation.diagnostics.is_empty());

    let blank = fixtures::compiler().parse("\n\n   \n").unwrap();
    assert!(blank.is_empty());
}

#[test]
fn test_paragraph_plaintext_keeps_soft_breaks() {
    let nodes = fixtures::compiler()
        .parse("Fits use\n[[mod::fn]] for\nthe basis.\n")
        .unwrap();

    assert_nodes(&nodes).item(0, |item| {
        item.plaintext("Fits use\nmod::fn for\nthe basis.")
            .plaintext(TextMatch::Flowed("Fits use mod::fn for the basis.".into()));
    });
}
