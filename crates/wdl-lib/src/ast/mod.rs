//! Typed AST for workout description sources.
//!
//! One tagged union per category (definition, duration, intensity, step).
//! References are resolved while parsing and hold an `Arc` to their target,
//! so a finished [`Document`] does not depend on the parse session's symbol table.

mod dump;
mod estimate;


use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use indexmap::IndexMap;

pub use dump::dump;
pub use estimate::{Estimable, Estimate};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Every workout in document order, including those nested in program weeks.
    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.definitions.iter().flat_map(|def| {
            let (workout, program) = match def {
                Definition::Workout(w) => (Some(w), None),
                Definition::Program(p) => (None, Some(p)),
                _ => (None, None),
            };
            workout
                .into_iter()
                .chain(program.into_iter().flat_map(|p| p.workouts()))
        })
    }

    pub fn programs(&self) -> impl Iterator<Item = &Program> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Program(p) => Some(p),
            _ => None,
        })
    }

    pub fn plans(&self) -> impl Iterator<Item = &Plan> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Plan(p) => Some(p),
            _ => None,
        })
    }

    pub fn credentials(&self) -> impl Iterator<Item = &CredentialDef> {
        self.definitions
            .iter()
            .filter_map(|def| match def {
                Definition::Garmin(defs) => Some(defs),
                _ => None,
            })
            .flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Durations(Vec<DurationDef>),
    Intensities(Vec<IntensityDef>),
    Garmin(Vec<CredentialDef>),
    Workout(Workout),
    Program(Program),
    Plan(Plan),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationDef {
    pub name: String,
    pub duration: Arc<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntensityDef {
    pub name: String,
    pub intensity: Arc<Intensity>,
}

/// Clock time `h:mm:ss`; minutes and seconds are below 60 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hours: u32,
    minutes: u8,
    seconds: u8,
}

impl Time {
    /// Returns `None` when minutes or seconds are out of range.
    pub fn new(hours: u32, minutes: u8, seconds: u8) -> Option<Self> {
        (minutes < 60 && seconds < 60).then_some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        (u64::from(self.hours) * 60 + u64::from(self.minutes)) * 60 + u64::from(self.seconds)
    }

    /// Speed in m/s when this time is read as a pace per kilometer.
    pub fn pace_to_speed(&self) -> Option<f64> {
        match self.total_seconds() {
            0 => None,
            secs => Some(1000.0 / secs as f64),
        }
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.hours > 0 {
            write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            write!(f, "{}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// A distance held exactly in whole meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance {
    meters: u64,
}

impl Distance {
    /// Parses a kilometer literal (`5`, `5.`, `.25`, `10.55`) without going through floating point.
    ///
    /// Returns `None` on overflow or when the literal has more than two fractional digits.
    pub fn from_km_literal(text: &str) -> Option<Self> {
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };
        let mut fraction_meters = 0u64;
        let mut scale = 100u64;
        for digit in fraction.bytes() {
            fraction_meters += u64::from(digit - b'0') * scale;
            scale /= 10;
        }

        let meters = whole.checked_mul(1000)?.checked_add(fraction_meters)?;
        Some(Self { meters })
    }

    pub fn meters(&self) -> u64 {
        self.meters
    }

    pub fn km(&self) -> f64 {
        self.meters as f64 / 1000.0
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}km", self.km())
    }
}

/// Two-ended range; `min <= max` regardless of the order the ends were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> Bounds<T> {
    pub fn new(a: T, b: T) -> Self {
        if a > b {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }
}

impl<T: Copy> Bounds<T> {
    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeartRateCompare {
    Above,
    Below,
}

impl HeartRateCompare {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Below => "below",
        }
    }
}

/// End condition of a step.
#[derive(Debug, Clone, PartialEq)]
pub enum Duration {
    Time(Time),
    Distance(Distance),
    Calories(u32),
    HeartRate { compare: HeartRateCompare, bpm: u32 },
    Ref { name: String, target: Arc<Duration> },
}

impl Duration {
    /// Follows references down to a concrete duration.
    pub fn resolved(&self) -> &Duration {
        let mut current = self;
        while let Duration::Ref { target, .. } = current {
            current = target;
        }
        current
    }

    /// Seconds, when this duration is an explicit time.
    pub fn seconds(&self) -> Option<u64> {
        match self.resolved() {
            Duration::Time(time) => Some(time.total_seconds()),
            _ => None,
        }
    }

    /// Meters, when this duration is an explicit distance.
    pub fn meters(&self) -> Option<u64> {
        match self.resolved() {
            Duration::Distance(distance) => Some(distance.meters()),
            _ => None,
        }
    }
}

/// Target effort of a step.
#[derive(Debug, Clone, PartialEq)]
pub enum Intensity {
    /// Minutes per kilometer.
    Pace(Bounds<Time>),
    /// Steps per minute.
    Cadence(Bounds<u32>),
    HeartRateZone(u32),
    /// Beats per minute.
    HeartRate(Bounds<u32>),
    PowerZone(u32),
    /// Watts.
    Power(Bounds<u32>),
    Ref { name: String, target: Arc<Intensity> },
}

impl Intensity {
    pub fn resolved(&self) -> &Intensity {
        let mut current = self;
        while let Intensity::Ref { target, .. } = current {
            current = target;
        }
        current
    }

    /// Mean of the range's speeds in m/s; only paces have one.
    pub fn average_speed(&self) -> Option<f64> {
        match self.resolved() {
            Intensity::Pace(pace) => {
                let fast = pace.min().pace_to_speed()?;
                let slow = pace.max().pace_to_speed()?;
                Some((fast + slow) / 2.0)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    Warmup,
    Cooldown,
    /// Written `run`.
    Interval,
    /// Written `recover`.
    Recovery,
    Rest,
    Other,
}

impl StepType {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Cooldown => "cooldown",
            Self::Interval => "run",
            Self::Recovery => "recover",
            Self::Rest => "rest",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseStep {
    pub step_type: StepType,
    pub duration: Option<Duration>,
    pub intensity: Option<Intensity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepeatGroup {
    pub iterations: u32,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Exercise(ExerciseStep),
    Repeat(RepeatGroup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// Endurance workout, written `run`.
    Run,
    Strength,
}

impl WorkoutKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Strength => "strength",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub kind: WorkoutKind,
    pub name: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramWeek {
    pub number: u32,
    pub workouts: Vec<Workout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub weeks: Vec<ProgramWeek>,
}

impl Program {
    pub fn workouts(&self) -> impl Iterator<Item = &Workout> {
        self.weeks.iter().flat_map(|week| week.workouts.iter())
    }
}

/// Full lowercase name of a weekday, the form used in dumps and payloads.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// One calendar week: weekday → workout name. Each weekday appears at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanWeek {
    pub days: IndexMap<Weekday, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub name: String,
    pub start: NaiveDate,
    pub weeks: Vec<PlanWeek>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    Username,
    Password,
}

impl CredentialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct CredentialDef {
    pub field: CredentialField,
    pub value: String,
}

impl std::fmt::Debug for CredentialDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self.field {
            CredentialField::Username => self.value.as_str(),
            CredentialField::Password => "<redacted>",
        };
        f.debug_struct("CredentialDef")
            .field("field", &self.field)
            .field("value", &value)
            .finish()
    }
}
