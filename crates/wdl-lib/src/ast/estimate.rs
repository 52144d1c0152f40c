//! Duration and distance estimation over the AST.
//!
//! A step answers directly when its duration is the requested quantity, and
//! converts through the intensity's average speed when it is the other one.
//! Aggregates sum their children and skip the ones that cannot be estimated;
//! a skipped child marks the sum as `partial`.

use std::ops::Add;

use super::{ExerciseStep, Program, ProgramWeek, RepeatGroup, Step, Workout};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
    /// Set when at least one child of an aggregate had no estimate.
    pub partial: bool,
}

impl Estimate {
    pub fn exact(value: f64) -> Self {
        Self {
            value,
            partial: false,
        }
    }

    fn scale(self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            partial: self.partial,
        }
    }

    fn mark_partial(self, partial: bool) -> Self {
        Self {
            value: self.value,
            partial: self.partial || partial,
        }
    }
}

impl Add for Estimate {
    type Output = Estimate;

    fn add(self, rhs: Estimate) -> Estimate {
        Estimate {
            value: self.value + rhs.value,
            partial: self.partial || rhs.partial,
        }
    }
}

pub trait Estimable {
    /// Total time in seconds, `None` when unknown.
    fn duration_estimate(&self) -> Option<Estimate>;

    /// Total distance in meters, `None` when unknown.
    fn distance_estimate(&self) -> Option<Estimate>;
}

/// Sums the known estimates. `None` only when nothing was known.
fn sum_known(estimates: impl IntoIterator<Item = Option<Estimate>>) -> Option<Estimate> {
    let mut total: Option<Estimate> = None;
    let mut skipped = false;

    for estimate in estimates {
        match estimate {
            Some(e) => total = Some(total.map_or(e, |t| t + e)),
            None => skipped = true,
        }
    }

    total.map(|t| t.mark_partial(skipped))
}

impl Estimable for ExerciseStep {
    fn duration_estimate(&self) -> Option<Estimate> {
        let duration = self.duration.as_ref()?;
        if let Some(seconds) = duration.seconds() {
            return Some(Estimate::exact(seconds as f64));
        }

        let meters = duration.meters()?;
        let speed = self.intensity.as_ref()?.average_speed()?;
        Some(Estimate::exact(meters as f64 / speed))
    }

    fn distance_estimate(&self) -> Option<Estimate> {
        let duration = self.duration.as_ref()?;
        if let Some(meters) = duration.meters() {
            return Some(Estimate::exact(meters as f64));
        }

        let seconds = duration.seconds()?;
        let speed = self.intensity.as_ref()?.average_speed()?;
        Some(Estimate::exact(seconds as f64 * speed))
    }
}

impl Estimable for RepeatGroup {
    fn duration_estimate(&self) -> Option<Estimate> {
        sum_known(self.steps.iter().map(Estimable::duration_estimate))
            .map(|e| e.scale(f64::from(self.iterations)))
    }

    fn distance_estimate(&self) -> Option<Estimate> {
        sum_known(self.steps.iter().map(Estimable::distance_estimate))
            .map(|e| e.scale(f64::from(self.iterations)))
    }
}

impl Estimable for Step {
    fn duration_estimate(&self) -> Option<Estimate> {
        match self {
            Step::Exercise(step) => step.duration_estimate(),
            Step::Repeat(group) => group.duration_estimate(),
        }
    }

    fn distance_estimate(&self) -> Option<Estimate> {
        match self {
            Step::Exercise(step) => step.distance_estimate(),
            Step::Repeat(group) => group.distance_estimate(),
        }
    }
}

impl Estimable for Workout {
    fn duration_estimate(&self) -> Option<Estimate> {
        sum_known(self.steps.iter().map(Estimable::duration_estimate))
    }

    fn distance_estimate(&self) -> Option<Estimate> {
        sum_known(self.steps.iter().map(Estimable::distance_estimate))
    }
}

impl Estimable for ProgramWeek {
    fn duration_estimate(&self) -> Option<Estimate> {
        sum_known(self.workouts.iter().map(Estimable::duration_estimate))
    }

    fn distance_estimate(&self) -> Option<Estimate> {
        sum_known(self.workouts.iter().map(Estimable::distance_estimate))
    }
}

impl Estimable for Program {
    fn duration_estimate(&self) -> Option<Estimate> {
        sum_known(self.weeks.iter().map(Estimable::duration_estimate))
    }

    fn distance_estimate(&self) -> Option<Estimate> {
        sum_known(self.weeks.iter().map(Estimable::distance_estimate))
    }
}
