//! Durations, intensities and literal conversions.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::ast::{Bounds, Distance, Duration, HeartRateCompare, Intensity, Time};
use crate::diagnostics::DiagnosticKind;
use crate::parser::core::{PResult, Parser};
use crate::parser::lexer::{Token, token_value};
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// ```text
    /// duration := TIME | INT | FLOAT | INT `cal`
    ///           | (`above` | `below`) INT `bpm` | name
    /// ```
    pub(super) fn parse_duration(&mut self) -> PResult<Duration> {
        match self.current() {
            Some(TokenKind::Time) => {
                let token = self.bump();
                Ok(Duration::Time(self.time_value(&token)?))
            }
            Some(TokenKind::Int) if self.next_is(TokenKind::KwCal) => {
                let token = self.bump();
                self.bump();
                Ok(Duration::Calories(self.int_value(&token)?))
            }
            Some(TokenKind::Int | TokenKind::Float) => {
                let token = self.bump();
                Ok(Duration::Distance(self.distance_value(&token)?))
            }
            Some(TokenKind::KwAbove | TokenKind::KwBelow) => {
                let compare = if self.bump().kind == TokenKind::KwAbove {
                    HeartRateCompare::Above
                } else {
                    HeartRateCompare::Below
                };
                let token = self.expect(TokenKind::Int, "a heart rate")?;
                let bpm = self.int_value(&token)?;
                self.expect(TokenKind::KwBpm, "`bpm`")?;
                Ok(Duration::HeartRate { compare, bpm })
            }
            Some(TokenKind::Id) => {
                let token = self.bump();
                let name = token_value(self.source, &token);
                let Some(target) = self.symbols.durations.get(name) else {
                    return Err(self.error_at(DiagnosticKind::UndefinedDuration, token.span, name));
                };
                Ok(Duration::Ref {
                    name: name.to_string(),
                    target: Arc::clone(target),
                })
            }
            _ => Err(self.error_unexpected("a duration")),
        }
    }

    /// ```text
    /// intensity := TIME `-` TIME
    ///            | INT `-` INT (`spm` | `bpm` | `w`)
    ///            | (`hr` | `power`) `zone` INT
    ///            | name
    /// ```
    pub(super) fn parse_intensity(&mut self) -> PResult<Intensity> {
        match self.current() {
            Some(TokenKind::Time) => {
                let first = self.bump();
                self.expect(TokenKind::Hyphen, "`-` in a pace range")?;
                let second = self.expect(TokenKind::Time, "the other end of the pace range")?;
                let a = self.pace_value(&first)?;
                let b = self.pace_value(&second)?;
                Ok(Intensity::Pace(Bounds::new(a, b)))
            }
            Some(TokenKind::Int) => {
                let first = self.bump();
                self.expect(TokenKind::Hyphen, "`-` in a range")?;
                let second = self.expect(TokenKind::Int, "the other end of the range")?;
                let bounds = Bounds::new(self.int_value(&first)?, self.int_value(&second)?);
                match self.current() {
                    Some(TokenKind::KwSpm) => {
                        self.bump();
                        Ok(Intensity::Cadence(bounds))
                    }
                    Some(TokenKind::KwBpm) => {
                        self.bump();
                        Ok(Intensity::HeartRate(bounds))
                    }
                    Some(TokenKind::KwWatts) => {
                        self.bump();
                        Ok(Intensity::Power(bounds))
                    }
                    _ => Err(self.error_unexpected("`spm`, `bpm` or `w`")),
                }
            }
            Some(TokenKind::KwHr) => {
                self.bump();
                self.expect(TokenKind::KwZone, "`zone`")?;
                let token = self.expect(TokenKind::Int, "a heart rate zone number")?;
                Ok(Intensity::HeartRateZone(self.int_value(&token)?))
            }
            Some(TokenKind::KwPower) => {
                self.bump();
                self.expect(TokenKind::KwZone, "`zone`")?;
                let token = self.expect(TokenKind::Int, "a power zone number")?;
                Ok(Intensity::PowerZone(self.int_value(&token)?))
            }
            Some(TokenKind::Id) => {
                let token = self.bump();
                let name = token_value(self.source, &token);
                let Some(target) = self.symbols.intensities.get(name) else {
                    return Err(self.error_at(
                        DiagnosticKind::UndefinedIntensity,
                        token.span,
                        name,
                    ));
                };
                Ok(Intensity::Ref {
                    name: name.to_string(),
                    target: Arc::clone(target),
                })
            }
            _ => Err(self.error_unexpected("an intensity")),
        }
    }

    pub(super) fn int_value(&mut self, token: &Token) -> PResult<u32> {
        let text = token_value(self.source, token);
        text.parse()
            .map_err(|_| self.error_at(DiagnosticKind::InvalidInteger, token.span, text))
    }

    pub(super) fn time_value(&mut self, token: &Token) -> PResult<Time> {
        let text = token_value(self.source, token);
        parse_time(text)
            .ok_or_else(|| self.error_at(DiagnosticKind::InvalidInteger, token.span, text))
    }

    /// A time read as minutes per kilometer; zero would mean infinite speed.
    fn pace_value(&mut self, token: &Token) -> PResult<Time> {
        let time = self.time_value(token)?;
        if time.total_seconds() == 0 {
            let text = token_value(self.source, token);
            return Err(self.error_at(DiagnosticKind::InvalidPace, token.span, text));
        }
        Ok(time)
    }

    fn distance_value(&mut self, token: &Token) -> PResult<Distance> {
        let text = token_value(self.source, token);
        Distance::from_km_literal(text)
            .ok_or_else(|| self.error_at(DiagnosticKind::InvalidDistance, token.span, text))
    }

    pub(super) fn date_value(&mut self, token: &Token) -> PResult<NaiveDate> {
        let text = token_value(self.source, token);
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map_err(|_| self.error_at(DiagnosticKind::InvalidDate, token.span, text))
    }
}

/// `[h:]m:s`. The tokenizer already limits minutes and seconds to two digits below 60.
fn parse_time(text: &str) -> Option<Time> {
    let mut parts = text.rsplit(':');
    let seconds = parts.next()?.parse().ok()?;
    let minutes = parts.next()?.parse().ok()?;
    let hours = match parts.next() {
        Some(hours) => hours.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Time::new(hours, minutes, seconds)
}
