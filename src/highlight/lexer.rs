//! Line tokenizer for code samples
//!
//! The raw scan is done by logos over [Lexeme]. Lexemes are then turned into public
//! [Token]s, which is where identifiers get their keyword/type/method/property class.
//!
//! logos picks the longest match among its rules, while highlighting wants "first rule in
//! priority order that matches". The two agree here because the only rules sharing a first
//! character are the ones starting with `/`, and there the comment rules are both earlier and
//! longer than the operator. Rules that can fail after a promising start (`/*` without `*/`,
//! `"` without a closing quote) reject through their callback; the lexer then reports an
//! error at that position, which [tokenize_with] answers with a one character fallback token
//! before restarting the scan on the next character.

use super::tokens::{Line, Token, TokenKind};
use super::vocabulary::Vocabulary;
use logos::{Lexer, Logos};

/// Raw lexemes recognized by logos. Classification of identifiers happens later.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"\s+")]
    Whitespace,

    // Single line comment runs to the end of the line
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("\"", string_literal)]
    StringLiteral,

    #[regex(r"[0-9]+", fractional_part)]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[regex(r"[{}()\[\];,.=+\-*/<>!&|]")]
    Operator,
}

/// Extends `/*` up to the first `*/` on the line, or rejects.
///
/// The close may reuse the opener's `*`, so `/*/` is already a complete comment.
fn block_comment(lex: &mut Lexer<Lexeme>) -> bool {
    if lex.remainder().starts_with('/') {
        lex.bump(1);
        return true;
    }
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => false,
    }
}

/// Extends `"` up to the closing quote, skipping backslash escapes, or rejects.
fn string_literal(lex: &mut Lexer<Lexeme>) -> bool {
    let mut chars = lex.remainder().char_indices();
    while let Some((index, ch)) = chars.next() {
        match ch {
            '"' => {
                lex.bump(index + 1);
                return true;
            }
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    false
}

/// Swallows `.digits` after the integer part when present.
fn fractional_part(lex: &mut Lexer<Lexeme>) -> bool {
    let remainder = lex.remainder();
    if let Some(after_dot) = remainder.strip_prefix('.') {
        let digits = after_dot
            .bytes()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        if digits > 0 {
            lex.bump(1 + digits);
        }
    }
    true
}

fn is_operator_char(ch: char) -> bool {
    "{}()[];,.=+-*/<>!&|".contains(ch)
}

/// Token for a position no rule accepted.
fn fallback_token(ch: char) -> Token {
    let kind = if is_operator_char(ch) {
        TokenKind::Operator
    } else {
        TokenKind::Text
    };
    Token::new(kind, ch.to_string())
}

/// Whether the text after an identifier opens a call, allowing whitespace before `(`.
fn opens_call(rest: &str) -> bool {
    rest.trim_start().starts_with('(')
}

fn classify(lexeme: Lexeme, slice: &str, rest: &str, vocabulary: &Vocabulary) -> Token {
    let kind = match lexeme {
        Lexeme::Whitespace => TokenKind::Whitespace,
        Lexeme::LineComment | Lexeme::BlockComment => TokenKind::Comment,
        Lexeme::StringLiteral => TokenKind::String,
        Lexeme::Number => TokenKind::Number,
        Lexeme::Identifier => vocabulary.classify(slice, opens_call(rest)),
        Lexeme::Operator => TokenKind::Operator,
    };
    Token::new(kind, slice)
}

/// Tokenize a single line with an explicit vocabulary.
///
/// Never fails. Empty input gives no tokens, and the token contents always concatenate back
/// to `line`.
pub fn tokenize_with(line: &str, vocabulary: &Vocabulary) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < line.len() {
        let scanned = &line[offset..];
        let mut lexer = Lexeme::lexer(scanned);
        let mut resume_at = None;

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            match result {
                Ok(lexeme) => {
                    tokens.push(classify(
                        lexeme,
                        lexer.slice(),
                        &scanned[span.end..],
                        vocabulary,
                    ));
                }
                Err(_) => {
                    let start = offset + span.start;
                    if let Some(ch) = line[start..].chars().next() {
                        tokens.push(fallback_token(ch));
                        resume_at = Some(start + ch.len_utf8());
                    }
                    break;
                }
            }
        }

        match resume_at {
            Some(next) => offset = next,
            None => break,
        }
    }

    tokens
}

/// Tokenize a single line with the default (C#) vocabulary. The line is numbered 1.
pub fn tokenize(line: &str) -> Line {
    Line::new(1, tokenize_with(line, Vocabulary::csharp()))
}

/// Tokenize a multi-line code sample with an explicit vocabulary.
///
/// Lines are split on `\n` and numbered from 1. No state is carried from one line to the
/// next. An empty sample yields one empty line.
pub fn highlight_with(source: &str, vocabulary: &Vocabulary) -> Vec<Line> {
    source
        .split('\n')
        .enumerate()
        .map(|(index, line)| Line::new(index + 1, tokenize_with(line, vocabulary)))
        .collect()
}

/// Tokenize a multi-line code sample with the default (C#) vocabulary.
pub fn highlight(source: &str) -> Vec<Line> {
    highlight_with(source, Vocabulary::csharp())
}
