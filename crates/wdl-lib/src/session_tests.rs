use indoc::indoc;

use crate::{Error, ErrorClass, ParseSession, SessionConfig};

#[test]
fn default_config() {
    assert_eq!(SessionConfig::default().recursion_limit, 256);
}

#[test]
fn sessions_do_not_share_definitions() {
    let first = ParseSession::new("durations { warm 10:00 } run a { warmup warm }");
    assert!(first.parse().is_ok());

    let err = ParseSession::new("run b { warmup warm }").parse().unwrap_err();
    assert!(matches!(err, Error::Definition(_)));
}

#[test]
fn same_names_in_separate_sessions() {
    let source = "intensities { easy 6:00 - 5:30 }";

    assert!(ParseSession::new(source).parse().is_ok());
    assert!(ParseSession::new(source).parse().is_ok());
}

#[test]
fn with_config() {
    let config = SessionConfig { recursion_limit: 1 };

    let err = ParseSession::new("run x { 2* 2* run }")
        .with_config(config)
        .parse()
        .unwrap_err();
    assert!(matches!(err, Error::RecursionLimitExceeded));
    insta::assert_snapshot!(err.to_string(), @"recursion limit exceeded");
}

#[test]
fn compile_runs_both_stages() {
    let source = indoc! {r#"
        intensities { easy 5:30 - 6:00 }
        run "Easy 5k" { warmup 10:00  run 5 @ easy  cooldown }
        plan p 2024-06-03 { week { mon "Easy 5k" } }
    "#};

    let compiled = ParseSession::new(source).compile().unwrap();
    assert_eq!(compiled.workouts.len(), 1);
    assert_eq!(compiled.workouts[0].workout_name, "Easy 5k");
    assert_eq!(compiled.plans[0].weeks[0].days[0].workout_name, "Easy 5k");
}

#[test]
fn compile_propagates_parse_errors() {
    let err = crate::compile("run x { run 1 } run").unwrap_err();

    assert_eq!(err.class(), Some(ErrorClass::Syntax));
    insta::assert_snapshot!(err.to_string(), @"syntax error: expected a workout name, found end of input at line 1");
}

#[test]
fn lexical_errors_count_every_character() {
    let err = crate::parse("run x { run 5 } $ %").unwrap_err();

    assert_eq!(err.class(), Some(ErrorClass::Lexical));
    assert_eq!(err.diagnostics().unwrap().error_count(), 2);
}

#[test]
fn warnings_survive_a_lexical_failure() {
    let err = crate::parse(r#"garmin { password "a" password "b" } ~"#).unwrap_err();

    let diagnostics = err.diagnostics().unwrap();
    assert!(matches!(err, Error::Lexical(_)));
    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn rendered_error_points_into_the_source() {
    let source = "run x {\n  run 5 @ fast\n}\n";
    let err = crate::parse(source).unwrap_err();

    let rendered = err.diagnostics().unwrap().render(source);
    assert!(rendered.contains("intensity `fast` is not defined"));
    assert!(rendered.contains("run 5 @ fast"));
    assert!(rendered.contains("^^^^"));
}
