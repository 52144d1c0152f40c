//! Workouts, steps and repeat groups.

use crate::ast::{ExerciseStep, RepeatGroup, Step, StepType, Workout, WorkoutKind};
use crate::parser::core::{PResult, Parser};
use crate::parser::lexer::token_value;
use crate::parser::token::TokenKind;
use crate::parser::token::token_sets::{DURATION_FIRST, STEP_FIRST, WORKOUT_TYPES};

impl Parser<'_> {
    /// `workout := (run | strength) name { step+ }`
    pub(super) fn parse_workout(&mut self) -> PResult<Workout> {
        if !self.currently_is_one_of(WORKOUT_TYPES) {
            return Err(self.error_unexpected("`run` or `strength`"));
        }
        let kind = match self.bump().kind {
            TokenKind::KwStrength => WorkoutKind::Strength,
            _ => WorkoutKind::Run,
        };

        let name_token = self.expect(TokenKind::Id, "a workout name")?;
        let name = token_value(self.source, &name_token).to_string();
        let steps = self.parse_step_block()?;

        tracing::debug!(name = %name, kind = kind.keyword(), steps = steps.len(), "parsed workout");
        Ok(Workout { kind, name, steps })
    }

    /// `{ step+ }`
    fn parse_step_block(&mut self) -> PResult<Vec<Step>> {
        self.expect(TokenKind::BraceOpen, "`{`")?;

        let mut steps = Vec::new();
        loop {
            if !self.currently_is_one_of(STEP_FIRST) {
                let expected = if steps.is_empty() {
                    "a step"
                } else {
                    "a step or `}`"
                };
                return Err(self.error_unexpected(expected));
            }
            steps.push(self.parse_step()?);

            if self.eat_token(TokenKind::BraceClose).is_some() {
                return Ok(steps);
            }
        }
    }

    /// ```text
    /// step := step_type duration? (`@` intensity)?
    ///       | REPEAT { step+ }
    ///       | REPEAT step
    /// ```
    fn parse_step(&mut self) -> PResult<Step> {
        match self.current() {
            Some(TokenKind::IntRep) => Ok(Step::Repeat(self.parse_repeat()?)),
            _ => Ok(Step::Exercise(self.parse_exercise()?)),
        }
    }

    fn parse_repeat(&mut self) -> PResult<RepeatGroup> {
        self.assert_current(TokenKind::IntRep);
        let count_token = self.bump();
        let iterations = self.int_value(&count_token)?;

        self.enter_recursion()?;
        let steps = if self.currently_is(TokenKind::BraceOpen) {
            self.parse_step_block()
        } else if self.currently_is_one_of(STEP_FIRST) {
            self.parse_step().map(|step| vec![step])
        } else {
            Err(self.error_unexpected("`{` or a step after the repeat count"))
        };
        self.exit_recursion();

        Ok(RepeatGroup {
            iterations,
            steps: steps?,
        })
    }

    fn parse_exercise(&mut self) -> PResult<ExerciseStep> {
        let step_type = match self.current() {
            Some(TokenKind::KwWarmup) => StepType::Warmup,
            Some(TokenKind::KwCooldown) => StepType::Cooldown,
            Some(TokenKind::KwRun) => StepType::Interval,
            Some(TokenKind::KwRecover) => StepType::Recovery,
            Some(TokenKind::KwRest) => StepType::Rest,
            Some(TokenKind::KwOther) => StepType::Other,
            _ => return Err(self.error_unexpected("a step")),
        };
        self.bump();

        let duration = if self.currently_is_one_of(DURATION_FIRST) {
            Some(self.parse_duration()?)
        } else {
            None
        };

        let intensity = if self.eat_token(TokenKind::At).is_some() {
            Some(self.parse_intensity()?)
        } else {
            None
        };

        let step = ExerciseStep {
            step_type,
            duration,
            intensity,
        };
        tracing::trace!(?step, "parsed step");
        Ok(step)
    }
}
