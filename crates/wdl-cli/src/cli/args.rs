//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// One or more source files (positional). `-` reads stdin.
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Workout description files (use \"-\" for stdin)")
}

/// A single source file (positional). `-` reads stdin.
pub fn file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Workout description file (use \"-\" for stdin)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Maximum repeat nesting depth (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("DEPTH")
        .value_parser(value_parser!(u32).range(1..))
        .help("Maximum nesting depth of repeat groups [default: 256]")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Write one JSON file per input (--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write <file-stem>.json per input into DIR instead of stdout")
}

/// Log verbosity (--log-level). Global.
pub fn log_level_arg() -> Arg {
    Arg::new("log_level")
        .long("log-level")
        .value_name("LEVEL")
        .value_parser(["error", "warn", "info", "debug", "trace"])
        .global(true)
        .help("Log level; overrides RUST_LOG [default: warn]")
}

/// Log destination (--log-file). Global.
pub fn log_file_arg() -> Arg {
    Arg::new("log_file")
        .long("log-file")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .global(true)
        .help("Write logs to PATH instead of stderr")
}
