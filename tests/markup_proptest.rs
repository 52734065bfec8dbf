//! Property-based tests for the markup parser

use concepta::markup::{extract_spans, parse, Span};
use proptest::prelude::*;

/// Marker-free text.
const WORDS: &str = "[a-z][a-z ]{0,6}";

fn formatted_span() -> impl Strategy<Value = Span> {
    prop_oneof![
        WORDS.prop_map(Span::Bold),
        WORDS.prop_map(Span::Italic),
        WORDS.prop_map(Span::InlineCode),
    ]
}

fn render(span: &Span) -> String {
    match span {
        Span::Plain(text) => text.clone(),
        Span::Bold(text) => format!("**{}**", text),
        Span::Italic(text) => format!("*{}*", text),
        Span::InlineCode(text) => format!("`{}`", text),
    }
}

/// Alternating plain and formatted spans, always starting and ending with plain text so no two
/// delimiters touch.
fn span_sequence() -> impl Strategy<Value = Vec<Span>> {
    (
        WORDS,
        prop::collection::vec((formatted_span(), WORDS), 0..5),
    )
        .prop_map(|(lead, rest)| {
            let mut spans = vec![Span::Plain(lead)];
            for (formatted, plain) in rest {
                spans.push(formatted);
                spans.push(Span::Plain(plain));
            }
            spans
        })
}

proptest! {
    #[test]
    fn rendered_spans_parse_back(spans in span_sequence()) {
        let text: String = spans.iter().map(render).collect();
        prop_assert_eq!(extract_spans(&text), spans);
    }

    #[test]
    fn span_text_is_source_without_markers(spans in span_sequence()) {
        let text: String = spans.iter().map(render).collect();
        let joined: String = extract_spans(&text).iter().map(Span::text).collect();
        let expected: String = text.chars().filter(|c| *c != '*' && *c != '`').collect();
        prop_assert_eq!(joined, expected);
    }

    #[test]
    fn marker_free_text_is_one_plain_span(text in "[^*`]{1,40}") {
        prop_assert_eq!(extract_spans(&text), vec![Span::Plain(text.clone())]);
    }

    #[test]
    fn non_marker_characters_survive(text in "[a-z *`]{0,30}") {
        // Unpaired markers survive as plain text, so dropping all markers from both sides
        // must agree.
        let joined: String = extract_spans(&text).iter().map(Span::text).collect();
        let strip = |s: &str| s.chars().filter(|c| *c != '*' && *c != '`').collect::<String>();
        prop_assert_eq!(strip(&joined), strip(&text));
    }

    #[test]
    fn one_block_per_line_without_fences(lines in prop::collection::vec("[^\n`\r]{0,20}", 1..8)) {
        let text = lines.join("\n");
        let blocks = parse(&text);
        if text.is_empty() {
            prop_assert!(blocks.is_empty());
        } else {
            prop_assert_eq!(blocks.len(), lines.len());
            for (block, line) in blocks.iter().zip(&lines) {
                prop_assert_eq!(block.is_break(), line.trim().is_empty());
            }
        }
    }

    #[test]
    fn parse_is_total(text in "\\PC{0,80}") {
        let blocks = parse(&text);
        prop_assert!(blocks.len() <= text.split('\n').count());
    }
}
