use indoc::indoc;
use serde_json::{Value, json};

use crate::CompiledFile;

fn compile(source: &str) -> CompiledFile {
    crate::compile(source).expect("source should compile")
}

/// Steps of the first workout's only segment, as JSON.
fn steps_json(source: &str) -> Value {
    let compiled = compile(source);
    let workout = serde_json::to_value(&compiled.workouts[0]).unwrap();
    workout["workoutSegments"][0]["workoutSteps"].clone()
}

#[test]
fn workout_payload() {
    let compiled = compile("run x { warmup 10:00  run 5.0 @ 5:30 - 5:00  cooldown }");

    let actual = serde_json::to_value(&compiled.workouts[0]).unwrap();
    let expected = json!({
        "workoutName": "x",
        "sportType": { "sportTypeId": 1, "sportTypeKey": "running" },
        "workoutSegments": [{
            "segmentOrder": 1,
            "sportType": { "sportTypeId": 1, "sportTypeKey": "running" },
            "workoutSteps": [
                {
                    "type": "ExecutableStepDTO",
                    "stepOrder": 1,
                    "stepType": { "stepTypeId": 1, "stepTypeKey": "warmup" },
                    "endCondition": { "conditionTypeId": 2, "conditionTypeKey": "time" },
                    "endConditionValue": 600,
                    "targetType": { "workoutTargetTypeId": 1, "workoutTargetTypeKey": "no.target" }
                },
                {
                    "type": "ExecutableStepDTO",
                    "stepOrder": 2,
                    "stepType": { "stepTypeId": 3, "stepTypeKey": "interval" },
                    "endCondition": { "conditionTypeId": 3, "conditionTypeKey": "distance" },
                    "endConditionValue": 5000,
                    "targetType": { "workoutTargetTypeId": 6, "workoutTargetTypeKey": "speed.zone" },
                    "targetValueOne": 1000.0 / 300.0,
                    "targetValueTwo": 1000.0 / 330.0
                },
                {
                    "type": "ExecutableStepDTO",
                    "stepOrder": 3,
                    "stepType": { "stepTypeId": 2, "stepTypeKey": "cooldown" },
                    "endCondition": { "conditionTypeId": 1, "conditionTypeKey": "lap.button" },
                    "targetType": { "workoutTargetTypeId": 1, "workoutTargetTypeKey": "no.target" }
                }
            ]
        }]
    });
    assert_eq!(actual, expected);
}

#[test]
fn pace_speeds_are_meters_per_second() {
    let steps = steps_json("run x { run @ 5:00 - 5:30 }");

    let one = steps[0]["targetValueOne"].as_f64().unwrap();
    let two = steps[0]["targetValueTwo"].as_f64().unwrap();
    assert!((one - 3.333).abs() < 1e-3);
    assert!((two - 3.030).abs() < 1e-3);
}

#[test]
fn time_and_distance_end_conditions() {
    let steps = steps_json("run x { run 5:30  run 1:00:00  run 5  run .25 }");

    let values: Vec<_> = steps
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["endConditionValue"].clone())
        .collect();
    assert_eq!(values, [json!(330), json!(3600), json!(5000), json!(250)]);
}

#[test]
fn repeat_groups_number_their_own_steps() {
    let source = indoc! {"
        run x {
          warmup
          3* {
            run 0.4
            2* rest 1:00
          }
          cooldown
        }
    "};

    let steps = steps_json(source);
    assert_eq!(steps[0]["stepOrder"], 1);
    assert_eq!(steps[2]["stepOrder"], 3);

    let group = &steps[1];
    assert_eq!(group["type"], "RepeatGroupDTO");
    assert_eq!(group["stepOrder"], 2);
    assert_eq!(group["numberOfIterations"], 3);
    assert_eq!(
        group["stepType"],
        json!({ "stepTypeId": 6, "stepTypeKey": "repeat" })
    );
    assert_eq!(group["workoutSteps"][0]["stepOrder"], 1);

    let inner = &group["workoutSteps"][1];
    assert_eq!(inner["type"], "RepeatGroupDTO");
    assert_eq!(inner["stepOrder"], 2);
    assert_eq!(inner["numberOfIterations"], 2);
    assert_eq!(inner["workoutSteps"][0]["stepOrder"], 1);
    assert_eq!(inner["workoutSteps"][0]["stepType"]["stepTypeKey"], "rest");
}

#[test]
fn step_order_accessor() {
    let compiled = compile("run x { run 3* run  rest }");

    let orders: Vec<_> = compiled.workouts[0].workout_segments[0]
        .workout_steps
        .iter()
        .map(|s| s.step_order())
        .collect();
    assert_eq!(orders, [1, 2, 3]);
}

#[test]
fn heart_rate_end_conditions() {
    let steps = steps_json("run x { run above 160 bpm  recover below 120 bpm }");

    assert_eq!(
        steps[0]["endCondition"],
        json!({ "conditionTypeId": 6, "conditionTypeKey": "heart.rate" })
    );
    assert_eq!(steps[0]["endConditionValue"], 160);
    assert_eq!(steps[0]["endConditionCompare"], "gt");
    assert_eq!(steps[1]["endConditionValue"], 120);
    assert_eq!(steps[1]["endConditionCompare"], "lt");
    assert_eq!(steps[1]["stepType"]["stepTypeId"], 4);
}

#[test]
fn calories_end_condition() {
    let steps = steps_json("strength x { other 250 cal }");

    assert_eq!(
        steps[0]["endCondition"],
        json!({ "conditionTypeId": 4, "conditionTypeKey": "calories" })
    );
    assert_eq!(steps[0]["endConditionValue"], 250);
    assert_eq!(
        steps[0]["stepType"],
        json!({ "stepTypeId": 7, "stepTypeKey": "other" })
    );
}

#[test]
fn zone_and_range_targets() {
    let source = indoc! {"
        run x {
          run @ hr zone 3
          run @ power zone 4
          run @ 180 - 170 spm
          run @ 140 - 150 bpm
          run @ 200 - 250 w
          run @ 150 - 140 bpm
          run @ 250 - 200 w
        }
    "};

    let steps = steps_json(source);
    let target = |i: usize| {
        let step = &steps[i];
        json!({
            "type": step["targetType"]["workoutTargetTypeKey"],
            "one": step.get("targetValueOne"),
            "two": step.get("targetValueTwo"),
            "zone": step.get("zoneNumber"),
        })
    };

    assert_eq!(
        target(0),
        json!({ "type": "heart.rate.zone", "one": null, "two": null, "zone": 3 })
    );
    assert_eq!(
        target(1),
        json!({ "type": "power.zone", "one": null, "two": null, "zone": 4 })
    );
    assert_eq!(
        target(2),
        json!({ "type": "cadence.zone", "one": 170.0, "two": 180.0, "zone": null })
    );
    assert_eq!(
        target(3),
        json!({ "type": "heart.rate.zone", "one": 140.0, "two": 150.0, "zone": null })
    );
    assert_eq!(
        target(4),
        json!({ "type": "power.zone", "one": 200.0, "two": 250.0, "zone": null })
    );
    assert_eq!(target(5), target(3));
    assert_eq!(target(6), target(4));
}

#[test]
fn references_lower_like_their_targets() {
    let with_refs = indoc! {"
        durations { base 5:00  long base }
        intensities { easy 6:00 - 5:30  chill easy }
        run x { run long @ chill }
    "};
    let inline = "run x { run 5:00 @ 5:30 - 6:00 }";

    assert_eq!(steps_json(with_refs), steps_json(inline));
}

#[test]
fn strength_sport_type() {
    let compiled = compile("strength gym { rest 1:00 }");

    let workout = serde_json::to_value(&compiled.workouts[0]).unwrap();
    assert_eq!(
        workout["sportType"],
        json!({ "sportTypeId": 3, "sportTypeKey": "strength" })
    );
    assert_eq!(workout["workoutSegments"][0]["workoutSteps"][0]["stepType"]["stepTypeId"], 5);
}

#[test]
fn program_workouts_are_compiled() {
    let source = indoc! {"
        program base {
          week 1 { run a { run 1 } }
          week 2 { run b { run 2 } strength c { other } }
        }
    "};

    let names: Vec<_> = compile(source)
        .workouts
        .into_iter()
        .map(|w| w.workout_name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn plan_payload() {
    let source = indoc! {"
        plan spring 2024-03-04 {
          week { tue easy  sat long }
          week { Mon easy }
        }
    "};

    let compiled = compile(source);
    let actual = serde_json::to_value(&compiled.plans).unwrap();
    let expected = json!([{
        "planName": "spring",
        "startDate": "2024-03-04",
        "weeks": [
            {
                "weekNumber": 1,
                "days": [
                    { "weekday": "tuesday", "workoutName": "easy" },
                    { "weekday": "saturday", "workoutName": "long" }
                ]
            },
            {
                "weekNumber": 2,
                "days": [{ "weekday": "monday", "workoutName": "easy" }]
            }
        ]
    }]);
    assert_eq!(actual, expected);
}

#[test]
fn credentials_are_collected_but_never_serialized() {
    let source = r#"
        garmin { username "runner" password "hunter2" }
        run x { run 1 }
    "#;

    let compiled = compile(source);
    assert!(compiled.credentials.is_complete());
    assert_eq!(compiled.credentials.password.as_deref(), Some("hunter2"));

    let json = serde_json::to_value(&compiled).unwrap();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(keys, ["plans", "workouts"]);

    let debug = format!("{:?}", compiled.credentials);
    assert!(debug.contains("runner"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn incomplete_credentials() {
    let compiled = compile(r#"garmin { username "runner" } run x { run 1 }"#);

    assert!(!compiled.credentials.is_complete());
}
