//! Inline span extraction
//!
//! Extraction runs one step per delimiter, in precedence order. A step scans the text left
//! to right: at each opening marker it looks ahead for the next closing marker and, when one
//! follows with something in between, cuts the pair out as a span. Later steps only see the
//! literal pieces between spans, never the inside of a span, so there is no way for a marker
//! to be matched twice or for a span's content to be reinterpreted. A pair with nothing
//! between its markers still forms a span, with empty text.

use super::nodes::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    /// Extraction order. Bold must precede italic so `**` is never read as two `*`.
    const PRECEDENCE: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => "**",
            Delimiter::Italic => "*",
            Delimiter::Code => "`",
        }
    }

    fn wrap(self, text: &str) -> Span {
        let text = text.to_string();
        match self {
            Delimiter::Bold => Span::Bold(text),
            Delimiter::Italic => Span::Italic(text),
            Delimiter::Code => Span::InlineCode(text),
        }
    }
}

/// Working state between steps: text still open to matching, or a finished span.
#[derive(Debug)]
enum Segment {
    Literal(String),
    Extracted(Span),
}

/// Extract inline spans from one line of block content.
///
/// Markers without a partner stay in the output as plain text. Adjacent plain pieces are
/// merged.
pub fn extract_spans(text: &str) -> Vec<Span> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = vec![Segment::Literal(text.to_string())];
    for delimiter in Delimiter::PRECEDENCE {
        segments = segments
            .into_iter()
            .flat_map(|segment| match segment {
                Segment::Literal(literal) => scan(&literal, delimiter),
                extracted => vec![extracted],
            })
            .collect();
    }

    let mut spans = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(literal) => match spans.last_mut() {
                Some(Span::Plain(existing)) => existing.push_str(&literal),
                _ => spans.push(Span::Plain(literal)),
            },
            Segment::Extracted(span) => spans.push(span),
        }
    }
    spans
}

/// One extraction step over a literal piece.
fn scan(text: &str, delimiter: Delimiter) -> Vec<Segment> {
    let marker = delimiter.marker();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(open) = rest.find(marker) {
        let inner = &rest[open + marker.len()..];
        let Some(close) = inner.find(marker) else {
            break;
        };
        literal.push_str(&rest[..open]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Extracted(delimiter.wrap(&inner[..close])));
        rest = &inner[close + marker.len()..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Span {
        Span::Plain(text.into())
    }

    #[test]
    fn parses_plain_text() {
        assert_eq!(extract_spans("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn empty_text_has_no_spans() {
        assert!(extract_spans("").is_empty());
    }

    #[test]
    fn bold_before_italic() {
        assert_eq!(
            extract_spans("**bold** and *italic*"),
            vec![
                Span::Bold("bold".into()),
                plain(" and "),
                Span::Italic("italic".into())
            ]
        );
    }

    #[test]
    fn code_span() {
        assert_eq!(
            extract_spans("call `Dispose()` early"),
            vec![
                plain("call "),
                Span::InlineCode("Dispose()".into()),
                plain(" early")
            ]
        );
    }

    #[test]
    fn bold_content_is_not_rescanned() {
        assert_eq!(
            extract_spans("**a `b` c**"),
            vec![Span::Bold("a `b` c".into())]
        );
    }

    #[test]
    fn italic_does_not_cross_bold() {
        assert_eq!(
            extract_spans("*a **b** c*"),
            vec![plain("*a "), Span::Bold("b".into()), plain(" c*")]
        );
    }

    #[test]
    fn code_keeps_stars_when_no_pair_around_it() {
        assert_eq!(
            extract_spans("`a * b`"),
            vec![Span::InlineCode("a * b".into())]
        );
    }

    #[test]
    fn bold_is_non_greedy() {
        assert_eq!(
            extract_spans("**a** b **c**"),
            vec![
                Span::Bold("a".into()),
                plain(" b "),
                Span::Bold("c".into())
            ]
        );
        assert_eq!(
            extract_spans("***x***"),
            vec![Span::Bold("*x".into()), plain("*")]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(extract_spans("2 * 3 = 6"), vec![plain("2 * 3 = 6")]);
        assert_eq!(extract_spans("open `tick"), vec![plain("open `tick")]);
    }

    #[test]
    fn empty_pairs_are_empty_spans() {
        assert_eq!(extract_spans("****"), vec![Span::Bold(String::new())]);
        assert_eq!(extract_spans("``"), vec![Span::InlineCode(String::new())]);
        assert_eq!(
            extract_spans("a ** b"),
            vec![plain("a "), Span::Italic(String::new()), plain(" b")]
        );
        assert_eq!(
            extract_spans("** x *y*"),
            vec![Span::Italic(String::new()), plain(" x "), Span::Italic("y".into())]
        );
    }

    #[test]
    fn placeholder_lookalikes_are_plain_text() {
        assert_eq!(
            extract_spans("__BOLD_0__ and **real**"),
            vec![plain("__BOLD_0__ and "), Span::Bold("real".into())]
        );
    }
}
