//! Parser infrastructure for workout description sources.
//!
//! # Architecture
//!
//! - Zero-copy lexing: tokens carry spans, text is sliced only when a value is needed
//! - Single pass: every production builds its AST node and performs its semantic
//!   action (definition, reference resolution, range normalization) on the spot
//! - Session-scoped names: the symbol table lives in the parser, so nothing leaks
//!   between two parses
//!
//! # Failure model
//!
//! There is no recovery. The first syntax, definition or value error aborts
//! the parse and no AST is produced. Unrecognized characters are reported by
//! the lexer and skipped, so they never reach the grammar.

pub mod lexer;
pub mod token;

mod core;
mod grammar;
mod invariants;
mod symbol_table;

#[cfg(test)]
mod tests;

pub use core::{DEFAULT_RECURSION_LIMIT, ParseFailure, ParseResult, Parser};
pub use lexer::{Lexer, Token, lex, token_text};
pub use symbol_table::{Namespace, Symbol, SymbolTable};
pub use token::{TokenKind, TokenSet};

/// Tokens the grammar sees: unrecognized characters dropped.
pub fn significant_tokens(tokens: &[Token]) -> Vec<Token> {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Garbage)
        .copied()
        .collect()
}
