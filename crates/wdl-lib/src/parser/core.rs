//! Parser state machine and low-level operations.

use rowan::{TextRange, TextSize};

use super::lexer::{Token, token_text};
use super::symbol_table::SymbolTable;
use super::token::{TokenKind, TokenSet};
use crate::ast::{CredentialField, Document};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Longest slice of unconsumed input quoted in syntax error hints.
const REMAINING_INPUT_PREVIEW: usize = 40;

pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Marker for an aborted parse. The reason is already in the parser's diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bail;

pub(crate) type PResult<T> = std::result::Result<T, Bail>;

#[derive(Debug)]
pub struct ParseResult {
    pub document: Document,
    pub symbols: SymbolTable,
    /// Warnings only; any error aborts the parse.
    pub diagnostics: Diagnostics,
}

#[derive(Debug)]
pub struct ParseFailure {
    pub diagnostics: Diagnostics,
    pub recursion_limit_exceeded: bool,
}

/// Single-pass parser with semantic actions. Owns the symbol table of its parse session.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    /// Significant tokens only: trivia and unrecognized characters are dropped by the caller.
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) diagnostics: Diagnostics,
    pub(super) symbols: SymbolTable,
    pub(super) credentials_seen: Vec<(CredentialField, TextRange)>,
    pub(super) depth: u32,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    recursion_limit: u32,
    recursion_limit_exceeded: bool,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
            symbols: SymbolTable::default(),
            credentials_seen: Vec::new(),
            depth: 0,
            debug_fuel: std::cell::Cell::new(256),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            recursion_limit_exceeded: false,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, ParseFailure> {
        match self.parse_document() {
            Ok(document) => Ok(ParseResult {
                document,
                symbols: self.symbols,
                diagnostics: self.diagnostics,
            }),
            Err(Bail) => Err(ParseFailure {
                diagnostics: self.diagnostics,
                recursion_limit_exceeded: self.recursion_limit_exceeded,
            }),
        }
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth(&self, lookahead: usize) -> Option<TokenKind> {
        self.ensure_progress();
        self.tokens.get(self.pos + lookahead).map(|t| t.kind)
    }

    pub(super) fn current(&self) -> Option<TokenKind> {
        self.nth(0)
    }

    pub(super) fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.current_token()
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    pub(super) fn currently_is_one_of(&self, set: TokenSet) -> bool {
        self.current().is_some_and(|kind| set.contains(kind))
    }

    pub(super) fn next_is(&self, kind: TokenKind) -> bool {
        self.nth(1) == Some(kind)
    }

    pub(super) fn bump(&mut self) -> Token {
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    pub(super) fn eat_token(&mut self, kind: TokenKind) -> Option<Token> {
        self.currently_is(kind).then(|| self.bump())
    }

    /// On mismatch: report a syntax error and abort.
    pub(super) fn expect(&mut self, kind: TokenKind, what: &str) -> PResult<Token> {
        match self.eat_token(kind) {
            Some(token) => Ok(token),
            None => Err(self.error_unexpected(what)),
        }
    }

    pub(super) fn text(&self, token: &Token) -> &'src str {
        token_text(self.source, token)
    }

    fn last_line(&self) -> u32 {
        self.tokens.last().map_or(1, |t| t.line)
    }

    /// Reports the current token (or end of input) as a syntax error.
    pub(super) fn error_unexpected(&mut self, expected: &str) -> Bail {
        let Some(token) = self.current_token().copied() else {
            let line = self.last_line();
            tracing::debug!(line, expected, "syntax error at end of input");
            self.diagnostics
                .report(DiagnosticKind::UnexpectedEof, self.current_span())
                .message(format!(
                    "expected {expected}, found end of input at line {line}"
                ))
                .emit();
            return Bail;
        };

        let text = self.text(&token);
        let remaining = &self.source[usize::from(token.span.start())..];
        tracing::debug!(
            line = token.line,
            token = ?token.kind,
            remaining,
            "syntax error"
        );

        let found = match token.kind.describe() {
            quoted if quoted.starts_with('`') => quoted.to_string(),
            described => format!("{described} `{text}`"),
        };
        self.diagnostics
            .report(DiagnosticKind::UnexpectedToken, token.span)
            .message(format!(
                "expected {expected}, found {found} at line {}",
                token.line
            ))
            .hint(format!("remaining input: {}", preview(remaining)))
            .emit();
        Bail
    }

    /// Reports a definition or value error at `range` and aborts.
    pub(super) fn error_at(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        detail: impl Into<String>,
    ) -> Bail {
        self.diagnostics.report(kind, range).message(detail).emit();
        Bail
    }

    pub(super) fn enter_recursion(&mut self) -> PResult<()> {
        if self.depth >= self.recursion_limit {
            self.recursion_limit_exceeded = true;
            tracing::debug!(limit = self.recursion_limit, "recursion limit exceeded");
            return Err(Bail);
        }
        self.depth += 1;
        self.reset_debug_fuel();
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }
}

fn preview(remaining: &str) -> String {
    let mut chars = remaining.chars();
    let head: String = chars.by_ref().take(REMAINING_INPUT_PREVIEW).collect();
    if chars.next().is_some() {
        format!("{:?}...", head)
    } else {
        format!("{:?}", head)
    }
}
