//! One compilation of one source text.
//!
//! Each session owns its own symbol table, so independent sources never see
//! each other's definitions.

use crate::ast::Document;
use crate::diagnostics::{Diagnostics, ErrorClass};
use crate::emit::{self, CompiledFile};
use crate::parser::{
    DEFAULT_RECURSION_LIMIT, ParseFailure, Parser, SymbolTable, lex, significant_tokens,
};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum nesting depth of repeat groups.
    pub recursion_limit: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

pub struct ParseSession<'src> {
    source: &'src str,
    config: SessionConfig,
}

impl<'src> ParseSession<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            config: SessionConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    /// Tokenizes and parses the source.
    ///
    /// Fails when the grammar rejects the source or when any character was
    /// unrecognized, even if the remaining tokens formed a valid document.
    pub fn parse(self) -> Result<Parsed> {
        let (tokens, mut diagnostics) = lex(self.source);
        if !diagnostics.is_empty() {
            tracing::debug!(
                count = diagnostics.len(),
                "unrecognized characters skipped"
            );
        }

        let parser = Parser::new(self.source, significant_tokens(&tokens))
            .with_recursion_limit(self.config.recursion_limit);

        match parser.parse() {
            Ok(result) => {
                if diagnostics.has_errors() {
                    diagnostics.extend(result.diagnostics);
                    return Err(Error::Lexical(diagnostics));
                }
                Ok(Parsed {
                    document: result.document,
                    symbols: result.symbols,
                    warnings: result.diagnostics,
                })
            }
            Err(ParseFailure {
                recursion_limit_exceeded: true,
                ..
            }) => Err(Error::RecursionLimitExceeded),
            Err(failure) => {
                let class = failure
                    .diagnostics
                    .first_error_class()
                    .unwrap_or(ErrorClass::Syntax);
                diagnostics.extend(failure.diagnostics);
                Err(Error::from_class(class, diagnostics))
            }
        }
    }

    /// Parses and lowers every workout, plan and credential in the source.
    pub fn compile(self) -> Result<CompiledFile> {
        Ok(self.parse()?.compile())
    }
}

/// A successfully parsed source.
#[derive(Debug)]
pub struct Parsed {
    pub document: Document,
    pub symbols: SymbolTable,
    pub warnings: Diagnostics,
}

impl Parsed {
    pub fn compile(&self) -> CompiledFile {
        emit::compile(&self.document)
    }
}
