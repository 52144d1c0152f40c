//! Show the AST of a source file.

use std::path::PathBuf;
use std::process::ExitCode;

use wdl_lib::ast::dump;

use super::{parse_source, run_each};

pub struct AstArgs {
    pub file: PathBuf,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: AstArgs) -> ExitCode {
    run_each(std::slice::from_ref(&args.file), args.color, |file| {
        let parsed = parse_source(file, args.recursion_limit, args.color)?;
        print!("{}", dump(&parsed.document));
        Ok(())
    })
}
