//! Grammar productions for workout description sources.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Every production builds its AST node directly; names are registered and
//! resolved against the session's symbol table as they are reduced.

mod schedules;
mod values;
mod workouts;

use std::sync::Arc;

use super::core::{Bail, PResult, Parser};
use super::lexer::{string_value, token_value};
use super::token::TokenKind;
use super::token::token_sets::{CREDENTIAL_VALUES, DEFINITION_FIRST};
use crate::ast::{
    CredentialDef, CredentialField, Definition, Document, DurationDef, IntensityDef,
};
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    /// `document := definition+`
    pub(crate) fn parse_document(&mut self) -> PResult<Document> {
        let mut definitions = vec![self.parse_definition()?];
        while !self.eof() {
            definitions.push(self.parse_definition()?);
        }
        Ok(Document { definitions })
    }

    fn parse_definition(&mut self) -> PResult<Definition> {
        if !self.currently_is_one_of(DEFINITION_FIRST) {
            return Err(self.error_unexpected("a top-level definition"));
        }

        let def = match self.current() {
            Some(TokenKind::KwDurations) => self.parse_durations()?,
            Some(TokenKind::KwIntensities) => self.parse_intensities()?,
            Some(TokenKind::KwGarmin) => self.parse_garmin()?,
            Some(TokenKind::KwProgram) => Definition::Program(self.parse_program()?),
            Some(TokenKind::KwPlan) => Definition::Plan(self.parse_plan()?),
            _ => Definition::Workout(self.parse_workout()?),
        };
        Ok(def)
    }

    /// `durations { (name duration)+ }`
    fn parse_durations(&mut self) -> PResult<Definition> {
        self.assert_current(TokenKind::KwDurations);
        self.bump();
        self.expect(TokenKind::BraceOpen, "`{` after `durations`")?;

        let mut defs = Vec::new();
        loop {
            let name_token = self.expect(TokenKind::Id, "a duration name")?;
            let name = token_value(self.source, &name_token);
            let duration = Arc::new(self.parse_duration()?);

            if let Err(first) =
                self.symbols
                    .durations
                    .define(name, Arc::clone(&duration), name_token.span)
            {
                self.diagnostics
                    .report(DiagnosticKind::DuplicateDuration, name_token.span)
                    .message(name)
                    .related_to("first defined here", first)
                    .emit();
                return Err(Bail);
            }

            tracing::debug!(name, "defined duration");
            defs.push(DurationDef {
                name: name.to_string(),
                duration,
            });

            if self.eat_token(TokenKind::BraceClose).is_some() {
                break;
            }
        }

        Ok(Definition::Durations(defs))
    }

    /// `intensities { (name intensity)+ }`
    fn parse_intensities(&mut self) -> PResult<Definition> {
        self.assert_current(TokenKind::KwIntensities);
        self.bump();
        self.expect(TokenKind::BraceOpen, "`{` after `intensities`")?;

        let mut defs = Vec::new();
        loop {
            let name_token = self.expect(TokenKind::Id, "an intensity name")?;
            let name = token_value(self.source, &name_token);
            let intensity = Arc::new(self.parse_intensity()?);

            if let Err(first) =
                self.symbols
                    .intensities
                    .define(name, Arc::clone(&intensity), name_token.span)
            {
                self.diagnostics
                    .report(DiagnosticKind::DuplicateIntensity, name_token.span)
                    .message(name)
                    .related_to("first defined here", first)
                    .emit();
                return Err(Bail);
            }

            tracing::debug!(name, "defined intensity");
            defs.push(IntensityDef {
                name: name.to_string(),
                intensity,
            });

            if self.eat_token(TokenKind::BraceClose).is_some() {
                break;
            }
        }

        Ok(Definition::Intensities(defs))
    }

    /// `garmin { ((username | password) value)+ }`
    ///
    /// Setting a field twice is allowed; the last value wins and a warning is reported.
    fn parse_garmin(&mut self) -> PResult<Definition> {
        self.assert_current(TokenKind::KwGarmin);
        self.bump();
        self.expect(TokenKind::BraceOpen, "`{` after `garmin`")?;

        let mut defs = Vec::new();
        loop {
            let field = match self.current() {
                Some(TokenKind::KwUsername) => CredentialField::Username,
                Some(TokenKind::KwPassword) => CredentialField::Password,
                _ => return Err(self.error_unexpected("`username` or `password`")),
            };
            let field_token = self.bump();

            if !self.currently_is_one_of(CREDENTIAL_VALUES) {
                return Err(self.error_unexpected("a quoted credential value"));
            }
            let value_token = self.bump();
            let value = match value_token.kind {
                TokenKind::StringLit => string_value(self.source, &value_token),
                _ => token_value(self.source, &value_token).to_string(),
            };

            let previous = self
                .credentials_seen
                .iter()
                .find(|(seen, _)| *seen == field)
                .map(|(_, span)| *span);
            if let Some(previous) = previous {
                self.diagnostics
                    .report(DiagnosticKind::CredentialRedefined, field_token.span)
                    .message(field.as_str())
                    .related_to("previously set here", previous)
                    .emit();
            }
            self.credentials_seen.push((field, field_token.span));

            tracing::debug!(field = field.as_str(), "captured credential");
            defs.push(CredentialDef { field, value });

            if self.eat_token(TokenKind::BraceClose).is_some() {
                break;
            }
        }

        Ok(Definition::Garmin(defs))
    }
}
