//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Logging flags are global and accepted by every subcommand.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("wdl")
        .about("Compile workout descriptions into workout payloads")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(log_level_arg())
        .arg(log_file_arg())
        .subcommand(check_command())
        .subcommand(compile_command())
        .subcommand(estimate_command())
        .subcommand(tokens_command())
        .subcommand(ast_command())
}

/// Validate source files.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate workout description files")
        .after_help(
            r#"EXAMPLES:
  wdl check week.wdl                # silent on success
  wdl check plans/*.wdl             # every file is checked"#,
        )
        .arg(files_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Compile source files to JSON.
pub fn compile_command() -> Command {
    Command::new("compile")
        .about("Compile workout description files to JSON")
        .after_help(
            r#"EXAMPLES:
  wdl compile week.wdl              # pretty JSON on stdout
  wdl compile week.wdl --compact    # one line per file
  wdl compile *.wdl -o out/         # out/<stem>.json per file"#,
        )
        .arg(files_arg())
        .arg(out_dir_arg())
        .arg(compact_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Estimate durations and distances.
pub fn estimate_command() -> Command {
    Command::new("estimate")
        .about("Estimate duration and distance of workouts and programs")
        .after_help(
            r#"OUTPUT:
  `?` marks an unknown value, `~` a sum that skipped unknown steps."#,
        )
        .arg(files_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Dump the token stream.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the token stream of a file")
        .arg(file_arg())
        .arg(color_arg())
}

/// Dump the AST.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the AST of a file")
        .arg(file_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}
