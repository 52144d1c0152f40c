//! Validate source files.

use std::path::PathBuf;
use std::process::ExitCode;

use super::{parse_source, run_each};

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CheckArgs) -> ExitCode {
    // Silent on success (like cargo check)
    run_each(&args.files, args.color, |file| {
        let parsed = parse_source(file, args.recursion_limit, args.color)?;
        tracing::info!(
            file = %file.name,
            definitions = parsed.document.definitions.len(),
            "source is valid"
        );
        Ok(())
    })
}
