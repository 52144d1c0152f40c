//! Tokenizer for workout description sources.
//!
//! Produces span-based tokens without storing text; values are sliced from
//! source only when needed. Trivia (whitespace, newlines, comments) never
//! reaches the parser, but newlines advance the line counter every token carries.
//!
//! ## Error handling
//!
//! A character no rule accepts becomes a one-character `Garbage` token and an
//! `UnrecognizedCharacter` diagnostic; scanning resumes at the next character.

use chrono::Weekday;
use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::token::TokenKind;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Zero-copy token: kind + span + 1-based line, text retrieved via [`token_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: TextRange,
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: TextRange, line: u32) -> Self {
        Self { kind, span, line }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Streaming tokenizer. Cloning yields an independent cursor at the same position.
#[derive(Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    /// Offset of `inner`'s input within `source`; moves forward after each unrecognized character.
    base: usize,
    line: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            base: 0,
            line: 1,
        }
    }

    fn restart_at(&mut self, offset: usize) {
        self.base = offset;
        self.inner = TokenKind::lexer(&self.source[offset..]);
    }

    fn classify(&self, kind: TokenKind, range: &Range<usize>) -> TokenKind {
        let text = &self.source[range.clone()];
        match kind {
            TokenKind::Word => classify_word(text),
            TokenKind::QuotedName => TokenKind::Id,
            other => other,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let result = self.inner.next()?;
            let span = self.inner.span();
            let range = self.base + span.start..self.base + span.end;

            match result {
                Ok(TokenKind::Newline) => {
                    self.line += range.len() as u32;
                }
                Ok(kind) if kind.is_trivia() => {}
                Ok(kind) => {
                    let kind = self.classify(kind, &range);
                    return Some(Token::new(kind, range_to_text_range(range), self.line));
                }
                Err(()) => {
                    let start = range.start;
                    let width = self.source[start..].chars().next().map_or(1, char::len_utf8);
                    self.restart_at(start + width);
                    return Some(Token::new(
                        TokenKind::Garbage,
                        range_to_text_range(start..start + width),
                        self.line,
                    ));
                }
            }
        }
    }
}

/// Reserved words first, then all-digit words (`3` / `3*`), then weekdays.
fn classify_word(text: &str) -> TokenKind {
    if let Some(keyword) = TokenKind::keyword(text) {
        return keyword;
    }

    let (name, repeat) = split_repeat_marker(text);
    if name.bytes().all(|b| b.is_ascii_digit()) {
        return if repeat {
            TokenKind::IntRep
        } else {
            TokenKind::Int
        };
    }

    if !repeat && name.parse::<Weekday>().is_ok() {
        return TokenKind::Weekday;
    }

    TokenKind::Id
}

fn split_repeat_marker(text: &str) -> (&str, bool) {
    match text.strip_suffix('*') {
        Some(rest) => (rest.trim_end_matches([' ', '\t']), true),
        None => (text, false),
    }
}

/// Tokenizes the whole source, reporting every unrecognized character.
///
/// `Garbage` tokens are kept in the stream so callers can see where they were.
pub fn lex(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let tokens: Vec<Token> = Lexer::new(source).collect();

    for token in tokens.iter().filter(|t| t.kind == TokenKind::Garbage) {
        let text = token_text(source, token);
        diagnostics
            .report(DiagnosticKind::UnrecognizedCharacter, token.span)
            .message(format!("`{}` at line {}", text.escape_default(), token.line))
            .emit();
    }

    (tokens, diagnostics)
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[Range::<usize>::from(token.span)]
}

/// The value of a name or integer token: quotes and the `*` repeat marker removed.
pub fn token_value<'s>(source: &'s str, token: &Token) -> &'s str {
    let (text, _) = split_repeat_marker(token_text(source, token));
    for quote in ['"', '\''] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

/// Contents of a string literal with backslash escapes resolved.
pub fn string_value(source: &str, token: &Token) -> String {
    let text = token_text(source, token);
    let inner = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text);

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
