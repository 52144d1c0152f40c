//! Compile source files to JSON payloads.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wdl_lib::CompiledFile;

use super::source_loader::SourceFile;
use super::{CommandError, parse_source, run_each};

pub struct CompileArgs {
    pub files: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub compact: bool,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: CompileArgs) -> ExitCode {
    if let Some(dir) = &args.out_dir
        && let Err(err) = fs::create_dir_all(dir)
    {
        eprintln!("error: failed to create '{}': {err}", dir.display());
        return ExitCode::FAILURE;
    }

    run_each(&args.files, args.color, |file| {
        let json = compile_file(file, &args)?;
        match &args.out_dir {
            Some(dir) => write_output(&output_path(dir, file), &json),
            None => {
                println!("{json}");
                Ok(())
            }
        }
    })
}

/// Parses and lowers one file into its JSON text.
pub fn compile_file(file: &SourceFile, args: &CompileArgs) -> Result<String, CommandError> {
    let parsed = parse_source(file, args.recursion_limit, args.color)?;
    let compiled = parsed.compile();
    tracing::debug!(
        file = %file.name,
        workouts = compiled.workouts.len(),
        plans = compiled.plans.len(),
        credentials = compiled.credentials.is_complete(),
        "compiled"
    );
    Ok(render_json(&compiled, args.compact)?)
}

pub fn render_json(compiled: &CompiledFile, compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(compiled)
    } else {
        serde_json::to_string_pretty(compiled)
    }
}

/// `<dir>/<file-stem>.json`
pub fn output_path(dir: &Path, file: &SourceFile) -> PathBuf {
    dir.join(format!("{}.json", file.stem))
}

fn write_output(path: &Path, json: &str) -> Result<(), CommandError> {
    fs::write(path, format!("{json}\n")).map_err(|source| CommandError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote output");
    Ok(())
}
