//! Programs (numbered weeks of workouts) and plans (calendar weeks).

use chrono::Weekday;
use indexmap::IndexMap;
use rowan::TextRange;

use crate::ast::{Plan, PlanWeek, Program, ProgramWeek, weekday_name};
use crate::diagnostics::DiagnosticKind;
use crate::parser::core::{Bail, PResult, Parser};
use crate::parser::lexer::token_value;
use crate::parser::token::TokenKind;
use crate::parser::token::token_sets::WORKOUT_TYPES;

impl Parser<'_> {
    /// `program name { (week INT { workout+ })+ }`
    pub(super) fn parse_program(&mut self) -> PResult<Program> {
        self.assert_current(TokenKind::KwProgram);
        self.bump();
        let name_token = self.expect(TokenKind::Id, "a program name")?;
        let name = token_value(self.source, &name_token).to_string();
        self.expect(TokenKind::BraceOpen, "`{` after the program name")?;

        let mut weeks: Vec<ProgramWeek> = Vec::new();
        let mut week_spans: Vec<TextRange> = Vec::new();
        loop {
            self.expect(TokenKind::KwWeek, "`week`")?;
            let number_token = self.expect(TokenKind::Int, "a week number")?;
            let number = self.int_value(&number_token)?;

            if let Some(i) = weeks.iter().position(|w| w.number == number) {
                self.diagnostics
                    .report(DiagnosticKind::DuplicateWeek, number_token.span)
                    .message(number.to_string())
                    .related_to("first defined here", week_spans[i])
                    .emit();
                return Err(Bail);
            }

            self.expect(TokenKind::BraceOpen, "`{` after the week number")?;
            let mut workouts = vec![self.parse_workout()?];
            while self.eat_token(TokenKind::BraceClose).is_none() {
                if !self.currently_is_one_of(WORKOUT_TYPES) {
                    return Err(self.error_unexpected("a workout or `}`"));
                }
                workouts.push(self.parse_workout()?);
            }

            weeks.push(ProgramWeek { number, workouts });
            week_spans.push(number_token.span);

            if self.eat_token(TokenKind::BraceClose).is_some() {
                break;
            }
        }

        tracing::debug!(name = %name, weeks = weeks.len(), "parsed program");
        Ok(Program { name, weeks })
    }

    /// `plan name DATE { (week { (WEEKDAY name)+ })+ }`
    pub(super) fn parse_plan(&mut self) -> PResult<Plan> {
        self.assert_current(TokenKind::KwPlan);
        self.bump();
        let name_token = self.expect(TokenKind::Id, "a plan name")?;
        let name = token_value(self.source, &name_token).to_string();
        let date_token = self.expect(TokenKind::Date, "a start date (YYYY-MM-DD)")?;
        let start = self.date_value(&date_token)?;
        self.expect(TokenKind::BraceOpen, "`{` after the start date")?;

        let mut weeks = Vec::new();
        loop {
            self.expect(TokenKind::KwWeek, "`week`")?;
            weeks.push(self.parse_plan_week()?);

            if self.eat_token(TokenKind::BraceClose).is_some() {
                break;
            }
        }

        tracing::debug!(name = %name, %start, weeks = weeks.len(), "parsed plan");
        Ok(Plan { name, start, weeks })
    }

    /// `{ (WEEKDAY name)+ }`; each weekday at most once.
    fn parse_plan_week(&mut self) -> PResult<PlanWeek> {
        self.expect(TokenKind::BraceOpen, "`{` after `week`")?;

        let mut days = IndexMap::new();
        let mut day_spans: IndexMap<Weekday, TextRange> = IndexMap::new();
        loop {
            let day_token = self.expect(TokenKind::Weekday, "a weekday")?;
            let text = token_value(self.source, &day_token);
            let Ok(day) = text.parse::<Weekday>() else {
                return Err(self.error_unexpected("a weekday"));
            };

            if let Some(first) = day_spans.get(&day) {
                self.diagnostics
                    .report(DiagnosticKind::DuplicateWeekday, day_token.span)
                    .message(weekday_name(day))
                    .related_to("first scheduled here", *first)
                    .emit();
                return Err(Bail);
            }

            let workout_token = self.expect(TokenKind::Id, "a workout name")?;
            let workout = token_value(self.source, &workout_token).to_string();
            day_spans.insert(day, day_token.span);
            days.insert(day, workout);

            if self.eat_token(TokenKind::BraceClose).is_some() {
                break;
            }
        }

        Ok(PlanWeek { days })
    }
}
