use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidDate, range(0, 10))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.to_string(), @"error at 0..10: invalid date");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UndefinedDuration, range(4, 9))
        .message("long")
        .emit();

    insta::assert_snapshot!(
        diagnostics.to_string(),
        @"error at 4..9: duration `long` is not defined (hint: define it in a `durations { ... }` block first)"
    );
}

#[test]
fn standard_template_appends_detail() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidInteger, range(0, 20))
        .message("99999999999999999999")
        .emit();

    insta::assert_snapshot!(
        diagnostics.to_string(),
        @"error at 0..20: integer out of range: 99999999999999999999"
    );
}

#[test]
fn warnings_do_not_count_as_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::CredentialRedefined, range(0, 8))
        .message("username")
        .emit();

    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(diagnostics.first_error_class(), None);
}

#[test]
fn take_warnings_leaves_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::CredentialRedefined, range(0, 8))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnrecognizedCharacter, range(9, 10))
        .emit();

    let warnings = diagnostics.take_warnings();

    assert_eq!(warnings.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.first_error_class(), Some(ErrorClass::Lexical));
}

#[test]
fn kinds_map_to_error_classes() {
    assert_eq!(DiagnosticKind::UnexpectedEof.class(), ErrorClass::Syntax);
    assert_eq!(DiagnosticKind::DuplicateWeekday.class(), ErrorClass::Definition);
    assert_eq!(DiagnosticKind::InvalidPace.class(), ErrorClass::Value);
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DuplicateIntensity, range(12, 16))
        .message("easy")
        .related_to("first defined here", range(0, 4))
        .emit();

    let result = diagnostics.render("easy @ 5:00\neasy");
    assert!(result.starts_with("error: intensity `easy` is already defined"));
    assert!(result.contains("1 | easy @ 5:00"));
    assert!(result.contains("2 | easy"));
    assert!(result.contains("first defined here"));
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidDate, range(0, 10))
        .message("2024-02-30")
        .emit();

    let result = diagnostics
        .printer()
        .source("2024-02-30")
        .path("plan.wdl")
        .render();
    assert!(result.starts_with("error: invalid date: 2024-02-30"));
    assert!(result.contains("--> plan.wdl:1:1"));
    assert!(result.contains("^^^^^^^^^^"));
}

#[test]
fn printer_renders_hints() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UndefinedIntensity, range(4, 8))
        .message("fast")
        .hint("intensity names are case sensitive")
        .emit();

    let result = diagnostics.render("run fast");
    assert!(result.contains("intensity `fast` is not defined"));
    assert!(result.contains("intensities { ... }"));
    assert!(result.contains("case sensitive"));
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(0, 5))
        .message("unexpected `hello` at line 1")
        .emit();

    let result = diagnostics.render_colored("hello", true);
    assert!(result.contains("unexpected `hello`"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.render("source").is_empty());
}

#[test]
fn printer_zero_width_span_at_end() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedEof, TextRange::empty(3.into()))
        .message("unexpected end of input; expected `}`")
        .emit();

    let result = diagnostics.render("abc");
    assert!(result.contains("expected `}`"));
}

#[test]
fn summary_picks_the_first_error_of_a_class() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnrecognizedCharacter, range(0, 1))
        .message("`$` at line 1")
        .emit();
    diagnostics
        .report(DiagnosticKind::UndefinedDuration, range(4, 9))
        .message("long")
        .emit();

    assert_eq!(diagnostics.count_of(ErrorClass::Lexical), 1);
    assert_eq!(diagnostics.count_of(ErrorClass::Value), 0);
    assert_eq!(
        diagnostics.summary(ErrorClass::Definition),
        "duration `long` is not defined"
    );
    assert_eq!(diagnostics.summary(ErrorClass::Syntax), "");
}
