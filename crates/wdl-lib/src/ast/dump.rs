//! Indented text dump of a [`Document`], used by `wdl ast` and snapshot tests.

use std::fmt::Write;

use super::{
    CredentialField, Definition, Document, Duration, ExerciseStep, Intensity, Step, Workout,
    weekday_name,
};

pub fn dump(document: &Document) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = format_document(document, &mut out);
    out
}

fn format_document(document: &Document, w: &mut impl Write) -> std::fmt::Result {
    writeln!(w, "Document")?;
    for def in &document.definitions {
        format_definition(def, 1, w)?;
    }
    Ok(())
}

fn format_definition(def: &Definition, indent: usize, w: &mut impl Write) -> std::fmt::Result {
    let prefix = "  ".repeat(indent);
    match def {
        Definition::Durations(defs) => {
            writeln!(w, "{prefix}Durations")?;
            for def in defs {
                writeln!(w, "{prefix}  {} = {}", def.name, DurationText(&def.duration))?;
            }
        }
        Definition::Intensities(defs) => {
            writeln!(w, "{prefix}Intensities")?;
            for def in defs {
                writeln!(w, "{prefix}  {} = {}", def.name, IntensityText(&def.intensity))?;
            }
        }
        Definition::Garmin(defs) => {
            writeln!(w, "{prefix}Garmin")?;
            for def in defs {
                let value = match def.field {
                    CredentialField::Username => def.value.as_str(),
                    CredentialField::Password => "<redacted>",
                };
                writeln!(w, "{prefix}  {} {:?}", def.field.as_str(), value)?;
            }
        }
        Definition::Workout(workout) => format_workout(workout, indent, w)?,
        Definition::Program(program) => {
            writeln!(w, "{prefix}Program {:?}", program.name)?;
            for week in &program.weeks {
                writeln!(w, "{prefix}  Week {}", week.number)?;
                for workout in &week.workouts {
                    format_workout(workout, indent + 2, w)?;
                }
            }
        }
        Definition::Plan(plan) => {
            writeln!(w, "{prefix}Plan {:?} {}", plan.name, plan.start)?;
            for (i, week) in plan.weeks.iter().enumerate() {
                writeln!(w, "{prefix}  Week {}", i + 1)?;
                for (day, workout) in &week.days {
                    writeln!(w, "{prefix}    {} {workout:?}", weekday_name(*day))?;
                }
            }
        }
    }
    Ok(())
}

fn format_workout(workout: &Workout, indent: usize, w: &mut impl Write) -> std::fmt::Result {
    let prefix = "  ".repeat(indent);
    writeln!(w, "{prefix}Workout {} {:?}", workout.kind.keyword(), workout.name)?;
    format_steps(&workout.steps, indent + 1, w)
}

fn format_steps(steps: &[Step], indent: usize, w: &mut impl Write) -> std::fmt::Result {
    let prefix = "  ".repeat(indent);
    for step in steps {
        match step {
            Step::Exercise(step) => writeln!(w, "{prefix}{}", StepText(step))?,
            Step::Repeat(group) => {
                writeln!(w, "{prefix}Repeat {}", group.iterations)?;
                format_steps(&group.steps, indent + 1, w)?;
            }
        }
    }
    Ok(())
}

struct StepText<'a>(&'a ExerciseStep);

impl std::fmt::Display for StepText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {}", self.0.step_type.keyword())?;
        if let Some(duration) = &self.0.duration {
            write!(f, " {}", DurationText(duration))?;
        }
        if let Some(intensity) = &self.0.intensity {
            write!(f, " @ {}", IntensityText(intensity))?;
        }
        Ok(())
    }
}

struct DurationText<'a>(&'a Duration);

impl std::fmt::Display for DurationText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Duration::Time(time) => write!(f, "time {time}"),
            Duration::Distance(distance) => write!(f, "distance {}m", distance.meters()),
            Duration::Calories(calories) => write!(f, "calories {calories}"),
            Duration::HeartRate { compare, bpm } => write!(f, "hr {} {bpm}", compare.as_str()),
            Duration::Ref { name, target } => {
                write!(f, "ref {name} -> {}", DurationText(target.resolved()))
            }
        }
    }
}

struct IntensityText<'a>(&'a Intensity);

impl std::fmt::Display for IntensityText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Intensity::Pace(pace) => write!(f, "pace {}-{}", pace.min(), pace.max()),
            Intensity::Cadence(spm) => write!(f, "cadence {}-{}", spm.min(), spm.max()),
            Intensity::HeartRateZone(zone) => write!(f, "hr zone {zone}"),
            Intensity::HeartRate(bpm) => write!(f, "hr {}-{}", bpm.min(), bpm.max()),
            Intensity::PowerZone(zone) => write!(f, "power zone {zone}"),
            Intensity::Power(watts) => write!(f, "power {}-{}", watts.min(), watts.max()),
            Intensity::Ref { name, target } => {
                write!(f, "ref {name} -> {}", IntensityText(target.resolved()))
            }
        }
    }
}
