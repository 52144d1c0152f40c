//! WDL: compiler front end for the Workout Description Language.
//!
//! Sources describe workouts, reusable duration/intensity aliases, multi-week
//! programs and calendar plans. They compile into the JSON workout payloads a
//! fitness backend accepts.
//!
//! # Example
//!
//! ```
//! use wdl_lib::ParseSession;
//!
//! let source = r#"
//!     intensities { easy 5:30 - 6:00 }
//!     run "Easy 5k" { warmup 10:00  run 5 @ easy  cooldown }
//! "#;
//!
//! let compiled = ParseSession::new(source).compile().expect("valid source");
//! assert_eq!(compiled.workouts[0].workout_name, "Easy 5k");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod emit;
pub mod parser;

mod session;

#[cfg(test)]
mod session_tests;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, ErrorClass, Severity};
pub use emit::{CompiledFile, Credentials};
pub use session::{ParseSession, Parsed, SessionConfig};

/// Errors that can occur while compiling a source.
///
/// Every variant except `RecursionLimitExceeded` carries the diagnostics that
/// explain it, including any unrecognized characters reported before the failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("source contains {} unrecognized characters", .0.count_of(ErrorClass::Lexical))]
    Lexical(Diagnostics),

    #[error("syntax error: {}", .0.summary(ErrorClass::Syntax))]
    Syntax(Diagnostics),

    #[error("definition error: {}", .0.summary(ErrorClass::Definition))]
    Definition(Diagnostics),

    #[error("invalid value: {}", .0.summary(ErrorClass::Value))]
    Value(Diagnostics),

    /// Repeat groups nested too deeply.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    pub(crate) fn from_class(class: ErrorClass, diagnostics: Diagnostics) -> Self {
        match class {
            ErrorClass::Lexical => Error::Lexical(diagnostics),
            ErrorClass::Syntax => Error::Syntax(diagnostics),
            ErrorClass::Definition => Error::Definition(diagnostics),
            ErrorClass::Value => Error::Value(diagnostics),
        }
    }

    pub fn class(&self) -> Option<ErrorClass> {
        match self {
            Error::Lexical(_) => Some(ErrorClass::Lexical),
            Error::Syntax(_) => Some(ErrorClass::Syntax),
            Error::Definition(_) => Some(ErrorClass::Definition),
            Error::Value(_) => Some(ErrorClass::Value),
            Error::RecursionLimitExceeded => None,
        }
    }

    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::Lexical(d) | Error::Syntax(d) | Error::Definition(d) | Error::Value(d) => {
                Some(d)
            }
            Error::RecursionLimitExceeded => None,
        }
    }
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses `source` with the default session configuration.
pub fn parse(source: &str) -> Result<Parsed> {
    ParseSession::new(source).parse()
}

/// Parses and compiles `source` with the default session configuration.
pub fn compile(source: &str) -> Result<CompiledFile> {
    ParseSession::new(source).compile()
}
