use indoc::indoc;
use wdl_lib::ast::Estimate;

use super::estimate::{estimate_report, format_distance, format_duration};

#[test]
fn report_lists_workouts_and_program_weeks() {
    let source = indoc! {r#"
        intensities { easy 5:00 - 5:00 }
        run "Tempo" { warmup 10:00  run 5 @ easy  cooldown }
        strength gym { other 300 cal }
        program base {
          week 1 { run a { run 30:00 @ easy } }
          week 2 { run b { run 10 } run c { rest 5:00 } }
        }
    "#};
    let parsed = wdl_lib::parse(source).unwrap();

    insta::assert_snapshot!(estimate_report(&parsed.document), @r#"
    run "Tempo": ~0:35:00, ~5.00 km
    strength "gym": ?, ?
    program "base": ~0:35:00, ~16.00 km
      week 1: 0:30:00, 6.00 km
        run "a": 0:30:00, 6.00 km
      week 2: ~0:05:00, ~10.00 km
        run "b": ?, 10.00 km
        run "c": 0:05:00, ?
    "#);
}

#[test]
fn report_skips_definitions_and_plans() {
    let source = "durations { d 5:00 } plan p 2024-01-01 { week { mon x } }";
    let parsed = wdl_lib::parse(source).unwrap();

    assert_eq!(estimate_report(&parsed.document), "");
}

#[test]
fn duration_format() {
    assert_eq!(format_duration(None), "?");
    assert_eq!(format_duration(Some(Estimate::exact(3725.4))), "1:02:05");
    assert_eq!(
        format_duration(Some(Estimate {
            value: 59.6,
            partial: true
        })),
        "~0:01:00"
    );
}

#[test]
fn distance_format() {
    assert_eq!(format_distance(None), "?");
    assert_eq!(format_distance(Some(Estimate::exact(12346.0))), "12.35 km");
    assert_eq!(
        format_distance(Some(Estimate {
            value: 400.0,
            partial: true
        })),
        "~0.40 km"
    );
}
