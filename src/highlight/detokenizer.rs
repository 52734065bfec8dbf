//! Detokenizer for highlighted lines
//!
//! Turns tokens back into source text. Since token contents are exact slices this is plain
//! concatenation, and it is what the lossless reconstruction tests check against.

use super::tokens::{Line, Token};

/// Trait for converting a token stream element back to its source text
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        self.content.clone()
    }
}

impl ToSourceString for Line {
    fn to_source_string(&self) -> String {
        detokenize(&self.tokens)
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.content.len()).sum());
    for token in tokens {
        result.push_str(&token.content);
    }
    result
}

/// Rebuild a whole code sample, joining lines with `\n`.
pub fn detokenize_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(ToSourceString::to_source_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{highlight, tokenize};

    #[test]
    fn test_detokenize_declaration() {
        let source = "public class EmailService : IEmailService";
        assert_eq!(detokenize(&tokenize(source).tokens), source);
    }

    #[test]
    fn test_detokenize_with_comment_and_string() {
        let source = "    _emailService.SendEmail(\"Welcome!\"); // greet";
        assert_eq!(tokenize(source).to_source_string(), source);
    }

    #[test]
    fn test_detokenize_lines_roundtrip() {
        let source = "public void RegisterUser(User user)\n{\n    // Registration logic\n}";
        assert_eq!(detokenize_lines(&highlight(source)), source);
    }

    #[test]
    fn test_detokenize_empty() {
        assert_eq!(detokenize(&[]), "");
    }
}
