//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the raw color choice;
//! the `Into<*Args>` impls resolve it against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::compile::CompileArgs;
use crate::commands::estimate::EstimateArgs;
use crate::commands::tokens::TokensArgs;
use crate::logging::LogConfig;

pub struct LogParams {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl LogParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            level: m.get_one::<String>("log_level").cloned(),
            file: m.get_one::<PathBuf>("log_file").cloned(),
        }
    }
}

impl From<LogParams> for LogConfig {
    fn from(p: LogParams) -> Self {
        Self {
            level: p.level,
            file: p.file,
        }
    }
}

pub struct CheckParams {
    pub files: Vec<PathBuf>,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: parse_files(m),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            files: p.files,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CompileParams {
    pub files: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub compact: bool,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: parse_files(m),
            out_dir: m.get_one::<PathBuf>("out_dir").cloned(),
            compact: m.get_flag("compact"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            files: p.files,
            out_dir: p.out_dir,
            compact: p.compact,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct EstimateParams {
    pub files: Vec<PathBuf>,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl EstimateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: parse_files(m),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<EstimateParams> for EstimateArgs {
    fn from(p: EstimateParams) -> Self {
        Self {
            files: p.files,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub file: PathBuf,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: parse_file(m),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            file: p.file,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub file: PathBuf,
    pub recursion_limit: Option<u32>,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            file: parse_file(m),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            file: p.file,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_files(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default()
}

fn parse_file(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("file")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
