//! Vendor workout schema.
//!
//! Field names follow the backend's camelCase JSON exactly; optional fields
//! are left out when a step does not use them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::ast::{StepType, WorkoutKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPayload {
    pub workout_name: String,
    pub sport_type: SportType,
    pub workout_segments: Vec<WorkoutSegment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportType {
    pub sport_type_id: u32,
    pub sport_type_key: &'static str,
}

impl From<WorkoutKind> for SportType {
    fn from(kind: WorkoutKind) -> Self {
        let (sport_type_id, sport_type_key) = match kind {
            WorkoutKind::Run => (1, "running"),
            WorkoutKind::Strength => (3, "strength"),
        };
        Self {
            sport_type_id,
            sport_type_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSegment {
    pub segment_order: u32,
    pub sport_type: SportType,
    pub workout_steps: Vec<WorkoutStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum WorkoutStep {
    #[serde(rename = "ExecutableStepDTO")]
    Executable(ExecutableStep),
    #[serde(rename = "RepeatGroupDTO")]
    RepeatGroup(RepeatGroupStep),
}

impl WorkoutStep {
    pub fn step_order(&self) -> u32 {
        match self {
            WorkoutStep::Executable(step) => step.step_order,
            WorkoutStep::RepeatGroup(group) => group.step_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutableStep {
    pub step_order: u32,
    pub step_type: StepTypeRef,
    pub end_condition: EndCondition,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_condition_value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_condition_compare: Option<&'static str>,
    pub target_type: TargetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value_one: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value_two: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatGroupStep {
    pub step_order: u32,
    pub step_type: StepTypeRef,
    pub number_of_iterations: u32,
    pub workout_steps: Vec<WorkoutStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTypeRef {
    pub step_type_id: u32,
    pub step_type_key: &'static str,
}

impl StepTypeRef {
    pub const REPEAT: StepTypeRef = StepTypeRef {
        step_type_id: 6,
        step_type_key: "repeat",
    };
}

impl From<StepType> for StepTypeRef {
    fn from(step_type: StepType) -> Self {
        let (step_type_id, step_type_key) = match step_type {
            StepType::Warmup => (1, "warmup"),
            StepType::Cooldown => (2, "cooldown"),
            StepType::Interval => (3, "interval"),
            StepType::Recovery => (4, "recovery"),
            StepType::Rest => (5, "rest"),
            StepType::Other => (7, "other"),
        };
        Self {
            step_type_id,
            step_type_key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndCondition {
    pub condition_type_id: u32,
    pub condition_type_key: &'static str,
}

impl EndCondition {
    pub const LAP_BUTTON: EndCondition = EndCondition::new(1, "lap.button");
    pub const TIME: EndCondition = EndCondition::new(2, "time");
    pub const DISTANCE: EndCondition = EndCondition::new(3, "distance");
    pub const CALORIES: EndCondition = EndCondition::new(4, "calories");
    pub const HEART_RATE: EndCondition = EndCondition::new(6, "heart.rate");

    const fn new(condition_type_id: u32, condition_type_key: &'static str) -> Self {
        Self {
            condition_type_id,
            condition_type_key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetType {
    pub workout_target_type_id: u32,
    pub workout_target_type_key: &'static str,
}

impl TargetType {
    pub const NO_TARGET: TargetType = TargetType::new(1, "no.target");
    pub const POWER_ZONE: TargetType = TargetType::new(2, "power.zone");
    pub const CADENCE_ZONE: TargetType = TargetType::new(3, "cadence.zone");
    pub const HEART_RATE_ZONE: TargetType = TargetType::new(4, "heart.rate.zone");
    pub const SPEED_ZONE: TargetType = TargetType::new(6, "speed.zone");

    const fn new(workout_target_type_id: u32, workout_target_type_key: &'static str) -> Self {
        Self {
            workout_target_type_id,
            workout_target_type_key,
        }
    }
}

/// Calendar plan as data: which workout goes on which weekday of which week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPayload {
    pub plan_name: String,
    pub start_date: NaiveDate,
    pub weeks: Vec<PlanWeekPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWeekPayload {
    pub week_number: u32,
    pub days: Vec<PlanDayPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDayPayload {
    pub weekday: &'static str,
    pub workout_name: String,
}
