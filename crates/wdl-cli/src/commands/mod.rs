pub mod ast;
pub mod check;
pub mod compile;
pub mod estimate;
pub mod source_loader;
pub mod tokens;

#[cfg(test)]
mod estimate_tests;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use wdl_lib::{Diagnostics, ParseSession, Parsed};

use source_loader::{SourceFile, load_source};

/// Failure of one file; the remaining files are still processed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Compile(#[from] wdl_lib::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// Diagnostics were already printed.
    #[error("{count} errors")]
    Reported { count: usize },
}

/// Runs `action` on every file in order, reporting each failure on stderr.
///
/// Exits with failure when any file failed to load or to process.
pub fn run_each(
    paths: &[PathBuf],
    color: bool,
    mut action: impl FnMut(&SourceFile) -> Result<(), CommandError>,
) -> ExitCode {
    let mut failed = 0usize;

    for path in paths {
        let file = match load_source(path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("error: {err}");
                failed += 1;
                continue;
            }
        };

        if let Err(err) = action(&file) {
            tracing::debug!(file = %file.name, error = %err, "file failed");
            if let Some(report) = render_failure(&file, &err, color) {
                eprintln!("{report}");
            }
            failed += 1;
        }
    }

    if failed > 0 {
        tracing::info!(failed, total = paths.len(), "finished with failures");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Parses `file`, printing any warnings.
pub fn parse_source(
    file: &SourceFile,
    recursion_limit: Option<u32>,
    color: bool,
) -> Result<Parsed, CommandError> {
    let mut session = ParseSession::new(&file.content);
    if let Some(limit) = recursion_limit {
        session = session.with_recursion_limit(limit);
    }

    let parsed = session.parse()?;
    if !parsed.warnings.is_empty() {
        eprintln!("{}", render_diagnostics(file, &parsed.warnings, color));
    }
    Ok(parsed)
}

pub fn render_diagnostics(file: &SourceFile, diagnostics: &Diagnostics, color: bool) -> String {
    diagnostics
        .printer()
        .source(&file.content)
        .path(&file.name)
        .colored(color)
        .render()
}

/// Text for a failed file; `None` when its diagnostics were already printed.
pub fn render_failure(file: &SourceFile, err: &CommandError, color: bool) -> Option<String> {
    let report = match err {
        CommandError::Compile(err) => match err.diagnostics() {
            Some(diagnostics) => render_diagnostics(file, diagnostics, color),
            None => format!("error: {}: {err}", file.name),
        },
        CommandError::Reported { .. } => return None,
        other => format!("error: {}: {other}", file.name),
    };
    Some(report)
}
