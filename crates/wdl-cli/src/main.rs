mod cli;
mod commands;
mod logging;

use std::process::ExitCode;

use cli::{
    AstParams, CheckParams, CompileParams, EstimateParams, LogParams, TokensParams, build_cli,
};
use logging::LogConfig;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let log_config: LogConfig = LogParams::from_matches(&matches).into();
    if let Err(err) = logging::init(&log_config) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into())
        }
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            commands::compile::run(params.into())
        }
        Some(("estimate", m)) => {
            let params = EstimateParams::from_matches(m);
            commands::estimate::run(params.into())
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into())
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    }
}
