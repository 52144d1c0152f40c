use indoc::indoc;

use crate::ast::dump;
use crate::{Error, ErrorClass, ParseSession};

fn dump_valid(source: &str) -> String {
    let parsed = crate::parse(source).expect("source should parse");
    dump(&parsed.document)
}

fn parse_error(source: &str) -> Error {
    match crate::parse(source) {
        Ok(parsed) => panic!("expected an error, got {:#?}", parsed.document),
        Err(err) => err,
    }
}

fn diagnostics_text(err: &Error) -> String {
    err.diagnostics()
        .expect("error should carry diagnostics")
        .to_string()
}

#[test]
fn duration_and_intensity_definitions() {
    let source = indoc! {r#"
        durations {
          long 1:30:00
          track 0.4
          burn 300 cal
          climb above 160 bpm
          alias long
        }
        intensities {
          easy 6:00 - 5:30
          cad 180 - 170 spm
          z2 hr zone 2
          aerobic 150 - 140 bpm
          pz power zone 3
          watts 200 - 250 w
          alias easy
        }
    "#};

    insta::assert_snapshot!(dump_valid(source), @r"
    Document
      Durations
        long = time 1:30:00
        track = distance 400m
        burn = calories 300
        climb = hr above 160
        alias = ref long -> time 1:30:00
      Intensities
        easy = pace 5:30-6:00
        cad = cadence 170-180
        z2 = hr zone 2
        aerobic = hr 140-150
        pz = power zone 3
        watts = power 200-250
        alias = ref easy -> pace 5:30-6:00
    ");
}

#[test]
fn workout_with_nested_repeats() {
    let source = indoc! {r#"
        intensities {
          easy 5:30 - 6:00
        }
        run "Track Tuesday" {
          warmup 10:00 @ easy
          3* {
            run 0.4 @ 4:00 - 4:10
            rest 1:30
          }
          2* recover above 120 bpm
          cooldown
        }
    "#};

    insta::assert_snapshot!(dump_valid(source), @r#"
    Document
      Intensities
        easy = pace 5:30-6:00
      Workout run "Track Tuesday"
        Step warmup time 10:00 @ ref easy -> pace 5:30-6:00
        Repeat 3
          Step run distance 400m @ pace 4:00-4:10
          Step rest time 1:30
        Repeat 2
          Step recover hr above 120
        Step cooldown
    "#);
}

#[test]
fn strength_workout_steps() {
    let source = indoc! {"
        strength core {
          other 200 cal @ power zone 2
          rest @ hr zone 1
          other below 100 bpm
        }
    "};

    insta::assert_snapshot!(dump_valid(source), @r#"
    Document
      Workout strength "core"
        Step other calories 200 @ power zone 2
        Step rest @ hr zone 1
        Step other hr below 100
    "#);
}

#[test]
fn program_and_plan() {
    let source = indoc! {"
        program base {
          week 1 {
            run easy { run 5 }
          }
          week 2 {
            run easy2 { run 6 }
            strength gym { other }
          }
        }
        plan spring 2024-03-04 {
          week { mon easy Wednesday gym }
          week { SUN easy2 }
        }
    "};

    insta::assert_snapshot!(dump_valid(source), @r#"
    Document
      Program "base"
        Week 1
          Workout run "easy"
            Step run distance 5000m
        Week 2
          Workout run "easy2"
            Step run distance 6000m
          Workout strength "gym"
            Step other
      Plan "spring" 2024-03-04
        Week 1
          monday "easy"
          wednesday "gym"
        Week 2
          sunday "easy2"
    "#);
}

#[test]
fn program_workouts_are_listed_in_document_order() {
    let source = indoc! {"
        run first { run 1 }
        program base {
          week 1 { run second { run 2 } }
        }
        run third { run 3 }
    "};

    let parsed = crate::parse(source).unwrap();
    let names: Vec<_> = parsed
        .document
        .workouts()
        .map(|w| w.name.as_str())
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn garmin_credentials() {
    let source = r#"garmin { username "john" password "s3cr\"et" }"#;

    insta::assert_snapshot!(dump_valid(source), @r#"
    Document
      Garmin
        username "john"
        password "<redacted>"
    "#);

    let parsed = crate::parse(source).unwrap();
    let password = parsed.document.credentials().nth(1).unwrap();
    assert_eq!(password.value, r#"s3cr"et"#);
}

#[test]
fn redefined_credential_is_a_warning() {
    let source = r#"garmin { username "a" } garmin { username "b" }"#;

    let parsed = crate::parse(source).unwrap();
    assert_eq!(parsed.warnings.warning_count(), 1);
    insta::assert_snapshot!(parsed.warnings.to_string(), @"warning at 33..41: `username` is set more than once; the last value wins (related: previously set here at 9..17)");

    let compiled = parsed.compile();
    assert_eq!(compiled.credentials.username.as_deref(), Some("b"));
}

#[test]
fn definitions_are_visible_to_later_definitions_only() {
    let err = parse_error("run x { run a } durations { a 5:00 }");

    assert_eq!(err.class(), Some(ErrorClass::Definition));
    insta::assert_snapshot!(diagnostics_text(&err), @"error at 12..13: duration `a` is not defined (hint: define it in a `durations { ... }` block first)");
}

#[test]
fn durations_can_reference_earlier_durations() {
    let source = "durations { a 5:00 b a } run x { run b }";

    insta::assert_snapshot!(dump_valid(source), @r#"
    Document
      Durations
        a = time 5:00
        b = ref a -> time 5:00
      Workout run "x"
        Step run ref b -> time 5:00
    "#);
}

#[test]
fn duplicate_duration() {
    let source = "durations {\n  a 5:00\n  a 6:00\n}";
    let err = parse_error(source);

    assert!(matches!(err, Error::Definition(_)));
    insta::assert_snapshot!(diagnostics_text(&err), @"error at 23..24: duration `a` is already defined (related: first defined here at 14..15)");
}

#[test]
fn duplicate_intensity() {
    let err = parse_error("intensities { z hr zone 1 z hr zone 2 }");

    assert!(matches!(err, Error::Definition(_)));
    insta::assert_snapshot!(err.to_string(), @"definition error: intensity `z` is already defined");
}

#[test]
fn undefined_intensity() {
    let err = parse_error("run x { run @ fast }");

    assert!(matches!(err, Error::Definition(_)));
    insta::assert_snapshot!(diagnostics_text(&err), @"error at 14..18: intensity `fast` is not defined (hint: define it in an `intensities { ... }` block first)");
}

#[test]
fn unexpected_token() {
    let err = parse_error("run x { jog }");

    assert!(matches!(err, Error::Syntax(_)));
    insta::assert_snapshot!(diagnostics_text(&err), @r#"error at 8..11: expected a step, found a name `jog` at line 1 (hint: remaining input: "jog }")"#);
}

#[test]
fn unexpected_keyword() {
    let err = parse_error("run x {\n  run 5\n  week\n}");

    insta::assert_snapshot!(err.to_string(), @"syntax error: expected a step or `}`, found `week` at line 3");
}

#[test]
fn unexpected_end_of_input() {
    let err = parse_error("run x {");

    assert!(matches!(err, Error::Syntax(_)));
    insta::assert_snapshot!(diagnostics_text(&err), @"error at 7..7: expected a step, found end of input at line 1");
}

#[test]
fn empty_source_is_rejected() {
    let err = parse_error("");

    insta::assert_snapshot!(diagnostics_text(&err), @"error at 0..0: expected a top-level definition, found end of input at line 1");
}

#[test]
fn comments_only_source_is_rejected() {
    let err = parse_error("# nothing here\n");

    assert!(matches!(err, Error::Syntax(_)));
}

#[test]
fn empty_blocks_are_rejected() {
    assert!(matches!(parse_error("durations { }"), Error::Syntax(_)));
    assert!(matches!(parse_error("run x { }"), Error::Syntax(_)));
    assert!(matches!(parse_error("program p { }"), Error::Syntax(_)));
}

#[test]
fn repeat_without_body() {
    let err = parse_error("run x { 3* }");

    insta::assert_snapshot!(err.to_string(), @"syntax error: expected `{` or a step after the repeat count, found `}` at line 1");
}

#[test]
fn intensity_range_needs_a_unit() {
    let err = parse_error("intensities { a 150 - 160 }");

    insta::assert_snapshot!(err.to_string(), @"syntax error: expected `spm`, `bpm` or `w`, found `}` at line 1");
}

#[test]
fn range_missing_its_second_end() {
    let pace = parse_error("intensities { a 5:30 - }");
    let cadence = parse_error("intensities { a 180 - }");

    insta::assert_snapshot!(pace.to_string(), @"syntax error: expected the other end of the pace range, found `}` at line 1");
    insta::assert_snapshot!(cadence.to_string(), @"syntax error: expected the other end of the range, found `}` at line 1");
}

#[test]
fn duplicate_weekday_in_plan_week() {
    let err = parse_error("plan p 2024-01-01 { week { mon a Monday b } }");

    assert!(matches!(err, Error::Definition(_)));
    insta::assert_snapshot!(diagnostics_text(&err), @"error at 33..39: `monday` is already scheduled in this week (related: first scheduled here at 27..30)");
}

#[test]
fn same_weekday_in_different_weeks() {
    let parsed = crate::parse("plan p 2024-01-01 { week { mon a } week { mon b } }").unwrap();

    let plan = parsed.document.plans().next().unwrap();
    assert_eq!(plan.weeks.len(), 2);
}

#[test]
fn weekday_followed_by_digits_is_a_name() {
    let err = parse_error("plan p 2024-01-01 { week { monday2 a } }");

    insta::assert_snapshot!(err.to_string(), @"syntax error: expected a weekday, found a name `monday2` at line 1");
}

#[test]
fn weekdays_match_any_case_but_only_standard_abbreviations() {
    let parsed = crate::parse("plan p 2024-01-01 { week { tHu a FRIDAY b } }").unwrap();
    let plan = parsed.document.plans().next().unwrap();
    let days: Vec<_> = plan.weeks[0].days.keys().copied().collect();
    assert_eq!(days, [chrono::Weekday::Thu, chrono::Weekday::Fri]);

    let err = parse_error("plan p 2024-01-01 { week { tues a } }");
    insta::assert_snapshot!(err.to_string(), @"syntax error: expected a weekday, found a name `tues` at line 1");
}

#[test]
fn duplicate_program_week() {
    let err = parse_error("program p { week 1 { run a { run 1 } } week 1 { run b { run 1 } } }");

    assert!(matches!(err, Error::Definition(_)));
    insta::assert_snapshot!(err.to_string(), @"definition error: week 1 is already defined in this program");
}

#[test]
fn invalid_calendar_date() {
    let err = parse_error("plan p 2024-02-30 { week { mon a } }");

    assert!(matches!(err, Error::Value(_)));
    insta::assert_snapshot!(diagnostics_text(&err), @"error at 7..17: invalid date: 2024-02-30");
}

#[test]
fn zero_pace() {
    let err = parse_error("intensities { stop 0:00 - 5:00 }");

    assert!(matches!(err, Error::Value(_)));
    insta::assert_snapshot!(diagnostics_text(&err), @"error at 19..23: pace cannot be zero: 0:00 (hint: a pace is written as minutes per kilometer, e.g. `5:30`)");
}

#[test]
fn integer_out_of_range() {
    let err = parse_error("run x { run 4294967296 cal }");

    assert!(matches!(err, Error::Value(_)));
    insta::assert_snapshot!(err.to_string(), @"invalid value: integer out of range: 4294967296");
}

#[test]
fn zero_repeat_count_is_accepted() {
    let parsed = crate::parse("run x { 0* run 1 }").unwrap();

    insta::assert_snapshot!(dump(&parsed.document), @r#"
    Document
      Workout run "x"
        Repeat 0
          Step run distance 1000m
    "#);
}

#[test]
fn unrecognized_character_fails_a_valid_document() {
    let err = parse_error("run x { run 5 $ }");

    assert!(matches!(err, Error::Lexical(_)));
    insta::assert_snapshot!(err.to_string(), @"source contains 1 unrecognized characters");
}

#[test]
fn unrecognized_character_is_reported_with_syntax_errors() {
    let err = parse_error("run x { jog $ }");

    assert!(matches!(err, Error::Syntax(_)));
    insta::assert_snapshot!(err.to_string(), @"syntax error: expected a step, found a name `jog` at line 1");
    let diagnostics = err.diagnostics().unwrap();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(
        diagnostics.as_slice()[0].kind,
        crate::DiagnosticKind::UnrecognizedCharacter
    );
}

#[test]
fn recursion_limit() {
    let source = "run x { 2* 2* 2* run }";

    let err = ParseSession::new(source)
        .with_recursion_limit(2)
        .parse()
        .unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
    assert!(err.diagnostics().is_none());

    assert!(ParseSession::new(source).with_recursion_limit(3).parse().is_ok());
}

#[test]
fn symbols_are_exposed_after_parsing() {
    let parsed = crate::parse("durations { a 5:00 b 1 } intensities { z hr zone 1 }").unwrap();

    assert_eq!(parsed.symbols.durations.names().collect::<Vec<_>>(), ["a", "b"]);
    assert!(parsed.symbols.intensities.contains("z"));
}
