//! Print duration and distance estimates.
//!
//! `?` marks an unknown value; a `~` prefix marks a sum that skipped unknown steps.

use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use wdl_lib::ast::{Definition, Document, Estimable, Estimate};

use super::{parse_source, run_each};

pub struct EstimateArgs {
    pub files: Vec<PathBuf>,
    pub recursion_limit: Option<u32>,
    pub color: bool,
}

pub fn run(args: EstimateArgs) -> ExitCode {
    let headers = args.files.len() > 1;
    run_each(&args.files, args.color, |file| {
        let parsed = parse_source(file, args.recursion_limit, args.color)?;
        if headers {
            println!("# {}", file.name);
        }
        print!("{}", estimate_report(&parsed.document));
        Ok(())
    })
}

/// One line per workout and program, programs followed by their weeks.
pub fn estimate_report(document: &Document) -> String {
    let mut out = String::new();
    for def in &document.definitions {
        match def {
            Definition::Workout(workout) => {
                let _ = writeln!(
                    out,
                    "{} {:?}: {}",
                    workout.kind.keyword(),
                    workout.name,
                    summary(workout)
                );
            }
            Definition::Program(program) => {
                let _ = writeln!(out, "program {:?}: {}", program.name, summary(program));
                for week in &program.weeks {
                    let _ = writeln!(out, "  week {}: {}", week.number, summary(week));
                    for workout in &week.workouts {
                        let _ = writeln!(
                            out,
                            "    {} {:?}: {}",
                            workout.kind.keyword(),
                            workout.name,
                            summary(workout)
                        );
                    }
                }
            }
            _ => {}
        }
    }
    out
}

fn summary(item: &impl Estimable) -> String {
    format!(
        "{}, {}",
        format_duration(item.duration_estimate()),
        format_distance(item.distance_estimate())
    )
}

/// `h:mm:ss`, rounded to the second.
pub fn format_duration(estimate: Option<Estimate>) -> String {
    let Some(estimate) = estimate else {
        return "?".to_string();
    };
    let total = estimate.value.round().max(0.0) as u64;
    format!(
        "{}{}:{:02}:{:02}",
        partial_marker(estimate),
        total / 3600,
        total / 60 % 60,
        total % 60
    )
}

/// Kilometers with two decimals.
pub fn format_distance(estimate: Option<Estimate>) -> String {
    let Some(estimate) = estimate else {
        return "?".to_string();
    };
    format!("{}{:.2} km", partial_marker(estimate), estimate.value / 1000.0)
}

fn partial_marker(estimate: Estimate) -> &'static str {
    if estimate.partial { "~" } else { "" }
}
