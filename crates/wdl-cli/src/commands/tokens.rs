//! Show the token stream of a source file.

use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use wdl_lib::parser::{Token, lex, token_text};

use super::{CommandError, render_diagnostics, run_each};

pub struct TokensArgs {
    pub file: PathBuf,
    pub color: bool,
}

pub fn run(args: TokensArgs) -> ExitCode {
    run_each(std::slice::from_ref(&args.file), args.color, |file| {
        let (tokens, diagnostics) = lex(&file.content);
        print!("{}", format_tokens(&file.content, &tokens));

        if diagnostics.has_errors() {
            eprintln!("{}", render_diagnostics(file, &diagnostics, args.color));
            return Err(CommandError::Reported {
                count: diagnostics.error_count(),
            });
        }
        Ok(())
    })
}

/// `line:start..end Kind "text"`, one token per line. Trivia is not included.
pub fn format_tokens(source: &str, tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "{}:{}..{} {:?} {:?}",
            token.line,
            u32::from(token.span.start()),
            u32::from(token.span.end()),
            token.kind,
            token_text(source, token)
        );
    }
    out
}
