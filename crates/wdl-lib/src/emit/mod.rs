//! Lowers a parsed [`Document`] into backend payloads.
//!
//! Pure tree transform with exhaustive matches over the AST. Step order
//! numbers start at 1 on every nesting level: a repeat group takes one slot
//! among its siblings and numbers its own children from 1 again.

mod payload;

#[cfg(test)]
mod emit_tests;

use serde::Serialize;

pub use payload::{
    EndCondition, ExecutableStep, PlanDayPayload, PlanPayload, PlanWeekPayload, RepeatGroupStep,
    SportType, StepTypeRef, TargetType, WorkoutPayload, WorkoutSegment, WorkoutStep,
};

use crate::ast::{
    CredentialField, Document, Duration, ExerciseStep, HeartRateCompare, Intensity, Plan,
    RepeatGroup, Step, Workout, weekday_name,
};

/// Everything a source compiles to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledFile {
    /// Top-level workouts and program workouts, in document order.
    pub workouts: Vec<WorkoutPayload>,
    pub plans: Vec<PlanPayload>,
    /// Account fields from `garmin { ... }` blocks. Never serialized.
    #[serde(skip)]
    pub credentials: Credentials,
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub fn compile(document: &Document) -> CompiledFile {
    let mut credentials = Credentials::default();
    for def in document.credentials() {
        let slot = match def.field {
            CredentialField::Username => &mut credentials.username,
            CredentialField::Password => &mut credentials.password,
        };
        *slot = Some(def.value.clone());
    }

    CompiledFile {
        workouts: document.workouts().map(lower_workout).collect(),
        plans: document.plans().map(lower_plan).collect(),
        credentials,
    }
}

pub fn lower_workout(workout: &Workout) -> WorkoutPayload {
    let sport_type = SportType::from(workout.kind);
    tracing::debug!(name = %workout.name, "lowering workout");

    WorkoutPayload {
        workout_name: workout.name.clone(),
        sport_type,
        workout_segments: vec![WorkoutSegment {
            segment_order: 1,
            sport_type,
            workout_steps: lower_steps(&workout.steps),
        }],
    }
}

/// Numbers `steps` 1..=N on their own level.
fn lower_steps(steps: &[Step]) -> Vec<WorkoutStep> {
    steps
        .iter()
        .zip(1u32..)
        .map(|(step, order)| lower_step(step, order))
        .collect()
}

fn lower_step(step: &Step, order: u32) -> WorkoutStep {
    match step {
        Step::Exercise(step) => WorkoutStep::Executable(lower_exercise(step, order)),
        Step::Repeat(group) => WorkoutStep::RepeatGroup(lower_repeat(group, order)),
    }
}

fn lower_repeat(group: &RepeatGroup, order: u32) -> RepeatGroupStep {
    tracing::trace!(order, iterations = group.iterations, "emitted repeat group");
    RepeatGroupStep {
        step_order: order,
        step_type: StepTypeRef::REPEAT,
        number_of_iterations: group.iterations,
        workout_steps: lower_steps(&group.steps),
    }
}

fn lower_exercise(step: &ExerciseStep, order: u32) -> ExecutableStep {
    let end = end_condition(step.duration.as_ref());
    let target = target(step.intensity.as_ref());
    let step_type = StepTypeRef::from(step.step_type);
    tracing::trace!(
        order,
        step_type = step_type.step_type_key,
        end = end.condition.condition_type_key,
        target = target.target_type.workout_target_type_key,
        "emitted step"
    );

    ExecutableStep {
        step_order: order,
        step_type,
        end_condition: end.condition,
        end_condition_value: end.value,
        end_condition_compare: end.compare,
        target_type: target.target_type,
        target_value_one: target.value_one,
        target_value_two: target.value_two,
        zone_number: target.zone_number,
    }
}

struct End {
    condition: EndCondition,
    value: Option<u64>,
    compare: Option<&'static str>,
}

fn end_condition(duration: Option<&Duration>) -> End {
    let Some(duration) = duration else {
        return End {
            condition: EndCondition::LAP_BUTTON,
            value: None,
            compare: None,
        };
    };

    match duration {
        Duration::Time(time) => End {
            condition: EndCondition::TIME,
            value: Some(time.total_seconds()),
            compare: None,
        },
        Duration::Distance(distance) => End {
            condition: EndCondition::DISTANCE,
            value: Some(distance.meters()),
            compare: None,
        },
        Duration::Calories(calories) => End {
            condition: EndCondition::CALORIES,
            value: Some(u64::from(*calories)),
            compare: None,
        },
        Duration::HeartRate { compare, bpm } => End {
            condition: EndCondition::HEART_RATE,
            value: Some(u64::from(*bpm)),
            compare: Some(match compare {
                HeartRateCompare::Above => "gt",
                HeartRateCompare::Below => "lt",
            }),
        },
        Duration::Ref { target, .. } => end_condition(Some(&**target)),
    }
}

struct Target {
    target_type: TargetType,
    value_one: Option<f64>,
    value_two: Option<f64>,
    zone_number: Option<u32>,
}

impl Target {
    fn range(target_type: TargetType, one: f64, two: f64) -> Self {
        Self {
            target_type,
            value_one: Some(one),
            value_two: Some(two),
            zone_number: None,
        }
    }

    fn zone(target_type: TargetType, zone: u32) -> Self {
        Self {
            target_type,
            value_one: None,
            value_two: None,
            zone_number: Some(zone),
        }
    }
}

fn target(intensity: Option<&Intensity>) -> Target {
    let Some(intensity) = intensity else {
        return Target {
            target_type: TargetType::NO_TARGET,
            value_one: None,
            value_two: None,
            zone_number: None,
        };
    };

    match intensity {
        // The faster pace (shorter time) gives the higher speed.
        Intensity::Pace(pace) => Target {
            target_type: TargetType::SPEED_ZONE,
            value_one: pace.min().pace_to_speed(),
            value_two: pace.max().pace_to_speed(),
            zone_number: None,
        },
        Intensity::Cadence(spm) => Target::range(
            TargetType::CADENCE_ZONE,
            f64::from(spm.min()),
            f64::from(spm.max()),
        ),
        Intensity::HeartRateZone(zone) => Target::zone(TargetType::HEART_RATE_ZONE, *zone),
        Intensity::HeartRate(bpm) => Target::range(
            TargetType::HEART_RATE_ZONE,
            f64::from(bpm.min()),
            f64::from(bpm.max()),
        ),
        Intensity::PowerZone(zone) => Target::zone(TargetType::POWER_ZONE, *zone),
        Intensity::Power(watts) => Target::range(
            TargetType::POWER_ZONE,
            f64::from(watts.min()),
            f64::from(watts.max()),
        ),
        Intensity::Ref { target, .. } => self::target(Some(&**target)),
    }
}

pub fn lower_plan(plan: &Plan) -> PlanPayload {
    PlanPayload {
        plan_name: plan.name.clone(),
        start_date: plan.start,
        weeks: plan
            .weeks
            .iter()
            .zip(1u32..)
            .map(|(week, week_number)| PlanWeekPayload {
                week_number,
                days: week
                    .days
                    .iter()
                    .map(|(day, workout)| PlanDayPayload {
                        weekday: weekday_name(*day),
                        workout_name: workout.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
