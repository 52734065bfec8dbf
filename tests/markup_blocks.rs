//! Markup parser behaviour: block classification and inline spans.

use concepta::formats::{blocks_to_string, OutputFormat};
use concepta::markup::{classify_line, extract_spans, parse, LineKind, Span};
use concepta::testing::assert_blocks;
use insta::assert_snapshot;
use rstest::rstest;

#[test]
fn plain_text_is_one_paragraph() {
    assert_blocks(&parse("hello world"))
        .count(1)
        .block(0, |block| {
            block.is_paragraph().span_count(1).plain(0, "hello world");
        });
}

#[test]
fn bold_and_italic() {
    assert_blocks(&parse("**bold** and *italic*"))
        .count(1)
        .block(0, |block| {
            block
                .is_paragraph()
                .span_count(3)
                .bold(0, "bold")
                .plain(1, " and ")
                .italic(2, "italic");
        });
}

#[test]
fn every_block_kind() {
    assert_blocks(&parse("> quoted\n- item\n1. first\n\nplain"))
        .kinds(&["quote", "bullet", "numbered", "break", "paragraph"])
        .block(0, |block| {
            block.is_quote().text("quoted");
        })
        .block(1, |block| {
            block.is_bullet().text("item");
        })
        .block(2, |block| {
            block.is_numbered("1").text("first");
        })
        .block(3, |block| {
            block.is_break().span_count(0);
        })
        .block(4, |block| {
            block.is_paragraph().text("plain");
        });
}

#[rstest]
#[case::quote("> note", LineKind::Quote("note"))]
#[case::quote_needs_space(">note", LineKind::Paragraph(">note"))]
#[case::bullet("- item", LineKind::Bullet("item"))]
#[case::dash_without_space("-item", LineKind::Paragraph("-item"))]
#[case::numbered("12. twelfth", LineKind::Numbered("12", "twelfth"))]
#[case::numbered_needs_space("3.14 is pi", LineKind::Paragraph("3.14 is pi"))]
#[case::huge_ordinal("99999999999999999999. x", LineKind::Numbered("99999999999999999999", "x"))]
#[case::leading_zeros("007. x", LineKind::Numbered("007", "x"))]
#[case::fence("```csharp", LineKind::Fence)]
#[case::whitespace_only(" \t ", LineKind::Blank)]
#[case::indented_bullet("  - item", LineKind::Paragraph("  - item"))]
fn line_classification(#[case] line: &str, #[case] expected: LineKind<'_>) {
    assert_eq!(classify_line(line), expected);
}

#[test]
fn fences_are_dropped() {
    let blocks = parse("before\n```\nvar x = 1;\n```\nafter");
    assert_blocks(&blocks)
        .kinds(&["paragraph", "paragraph", "paragraph"])
        .block(1, |block| {
            block.text("var x = 1;");
        });
}

#[test]
fn crlf_matches_lf() {
    assert_eq!(parse("- a\r\n\r\n> b\r\n"), parse("- a\n\n> b\n"));
    assert_blocks(&parse("- a\r\n\r\n> b\r\n")).kinds(&["bullet", "break", "quote", "break"]);
}

#[rstest]
#[case::code("use `var` here", vec![
    Span::Plain("use ".into()),
    Span::InlineCode("var".into()),
    Span::Plain(" here".into()),
])]
#[case::non_greedy("*a* and *b*", vec![
    Span::Italic("a".into()),
    Span::Plain(" and ".into()),
    Span::Italic("b".into()),
])]
#[case::unmatched_marker("2 * 3 = 6", vec![Span::Plain("2 * 3 = 6".into())])]
#[case::empty_pairs("**** and ``", vec![
    Span::Bold(String::new()),
    Span::Plain(" and ".into()),
    Span::InlineCode(String::new()),
])]
#[case::lone_double_star("a ** b", vec![
    Span::Plain("a ".into()),
    Span::Italic(String::new()),
    Span::Plain(" b".into()),
])]
#[case::code_inside_bold_is_not_rescanned("**see `x`**", vec![Span::Bold("see `x`".into())])]
#[case::italic_does_not_cross_bold("*a **b** c*", vec![
    Span::Plain("*a ".into()),
    Span::Bold("b".into()),
    Span::Plain(" c*".into()),
])]
fn inline_spans(#[case] text: &str, #[case] expected: Vec<Span>) {
    assert_eq!(extract_spans(text), expected);
}

#[test]
fn simple_format_snapshot() {
    let text = "> **Tip:** prefer `readonly` fields\n- first *point*\n\n10. tenth";
    let out = blocks_to_string(&parse(text), OutputFormat::Simple).unwrap();
    assert_snapshot!(out, @r###"
    <quote> [bold("Tip:"), plain(" prefer "), code("readonly"), plain(" fields")]
    <bullet> [plain("first "), italic("point")]
    <break>
    <numbered 10> [plain("tenth")]
    "###);
}
