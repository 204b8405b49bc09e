//! Workout plan templates
//!
//! Three fixed seven-day templates, one per split. Day slots are
//! Monday-anchored: `day1` is Monday and `day7` is Sunday.

use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CoreError, CoreResult};
use crate::workout_log::{LoggedExercise, WorkoutLog};

/// Rep range prefilled when a log is started from the plan
pub const DEFAULT_REP_RANGE: &str = "8-12";

/// Named weekly workout organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorkoutSplit {
    #[default]
    #[serde(rename = "Full Body")]
    FullBody,
    #[serde(rename = "Upper/Lower")]
    UpperLower,
    #[serde(rename = "Push/Pull/Legs")]
    PushPullLegs,
}

impl WorkoutSplit {
    pub const ALL: [WorkoutSplit; 3] = [
        WorkoutSplit::FullBody,
        WorkoutSplit::UpperLower,
        WorkoutSplit::PushPullLegs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutSplit::FullBody => "Full Body",
            WorkoutSplit::UpperLower => "Upper/Lower",
            WorkoutSplit::PushPullLegs => "Push/Pull/Legs",
        }
    }

    fn template(&self) -> &'static [DayTemplate; 7] {
        match self {
            WorkoutSplit::FullBody => &FULL_BODY,
            WorkoutSplit::UpperLower => &UPPER_LOWER,
            WorkoutSplit::PushPullLegs => &PUSH_PULL_LEGS,
        }
    }
}

impl fmt::Display for WorkoutSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutSplit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutSplit::ALL
            .into_iter()
            .find(|split| split.as_str() == s)
            .ok_or_else(|| CoreError::InvalidSplit(s.to_string()))
    }
}

// ============================================================================
// Templates
// ============================================================================

struct DayTemplate {
    name: &'static str,
    exercises: &'static [&'static str],
    sets: u32,
}

/// Name shared by every rest slot; light mobility may still be listed
pub const REST_DAY: &str = "Rest";

const fn day(name: &'static str, exercises: &'static [&'static str], sets: u32) -> DayTemplate {
    DayTemplate { name, exercises, sets }
}

const fn rest(exercises: &'static [&'static str], sets: u32) -> DayTemplate {
    day(REST_DAY, exercises, sets)
}

const MOBILITY_REST: &[&str] = &["Mobility Work", "Light Cardio"];

const PUSH_PULL_LEGS: [DayTemplate; 7] = [
    day("Push", &["Bench Press", "Overhead Press", "Tricep Extensions", "Lateral Raises"], 4),
    day("Pull", &["Deadlifts", "Barbell Rows", "Pull-ups", "Bicep Curls"], 4),
    day("Legs", &["Squats", "Romanian Deadlifts", "Leg Press", "Calf Raises"], 4),
    rest(&["Mobility Work", "Light Cardio (optional)"], 1),
    day("Push", &["Incline Press", "Dumbbell Press", "Tricep Pushdowns", "Chest Flies"], 4),
    day("Pull", &["Pull-ups", "Seated Rows", "Face Pulls", "Hammer Curls"], 4),
    day("Legs", &["Front Squats", "Lunges", "Leg Extensions", "Leg Curls"], 4),
];

const UPPER_LOWER: [DayTemplate; 7] = [
    day("Upper", &["Bench Press", "Barbell Rows", "Overhead Press", "Pull-ups"], 4),
    day("Lower", &["Squats", "Romanian Deadlifts", "Lunges", "Calf Raises"], 4),
    rest(MOBILITY_REST, 1),
    day("Upper", &["Incline Press", "Lat Pulldowns", "Lateral Raises", "Bicep Curls"], 4),
    day("Lower", &["Deadlifts", "Leg Press", "Leg Curls", "Leg Extensions"], 4),
    rest(MOBILITY_REST, 1),
    day("Full Body", &["Push-ups", "Pull-ups", "Goblet Squats", "Planks"], 3),
];

const FULL_BODY: [DayTemplate; 7] = [
    day("Full Body A", &["Squats", "Bench Press", "Barbell Rows", "Shoulder Press"], 3),
    rest(MOBILITY_REST, 1),
    day("Full Body B", &["Deadlifts", "Incline Press", "Pull-ups", "Lunges"], 3),
    rest(MOBILITY_REST, 1),
    day("Full Body C", &["Front Squats", "Dips", "Seated Rows", "Bulgarian Split Squats"], 3),
    day("Active Recovery", &["Light Cardio", "Core Work", "Mobility"], 2),
    // complete rest
    rest(&[], 0),
];

// ============================================================================
// Plan
// ============================================================================

/// One day slot of a workout plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub name: String,
    pub exercises: Vec<String>,
    pub sets: u32,
}

impl WorkoutDay {
    fn from_template(template: &DayTemplate) -> Self {
        Self {
            name: template.name.to_string(),
            exercises: template.exercises.iter().map(|e| e.to_string()).collect(),
            sets: template.sets,
        }
    }

    /// Rest slots are named as such; "Active Recovery" is a light training day
    pub fn is_rest(&self) -> bool {
        self.name == REST_DAY
    }

    /// Prefill a workout log from this day: planned sets, default reps, no load
    pub fn to_log_template(&self) -> WorkoutLog {
        WorkoutLog {
            name: self.name.clone(),
            exercises: self
                .exercises
                .iter()
                .map(|name| LoggedExercise {
                    name: name.clone(),
                    sets: self.sets,
                    reps: DEFAULT_REP_RANGE.to_string(),
                    weight: 0.0,
                })
                .collect(),
        }
    }
}

/// A full week of training for one split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub split: WorkoutSplit,
    pub day1: WorkoutDay,
    pub day2: WorkoutDay,
    pub day3: WorkoutDay,
    pub day4: WorkoutDay,
    pub day5: WorkoutDay,
    pub day6: WorkoutDay,
    pub day7: WorkoutDay,
}

impl WorkoutPlan {
    /// Day slots in order, Monday first
    pub fn days(&self) -> [&WorkoutDay; 7] {
        [
            &self.day1, &self.day2, &self.day3, &self.day4, &self.day5, &self.day6, &self.day7,
        ]
    }

    /// Slot scheduled for a calendar weekday
    pub fn day_for(&self, weekday: Weekday) -> &WorkoutDay {
        self.days()[weekday.num_days_from_monday() as usize]
    }

    /// Slot scheduled for a calendar date
    pub fn day_for_date(&self, date: chrono::NaiveDate) -> &WorkoutDay {
        self.day_for(date.weekday())
    }
}

/// Build the fixed weekly plan for a split
pub fn generate_workout_plan(split: WorkoutSplit) -> WorkoutPlan {
    let [d1, d2, d3, d4, d5, d6, d7] = split.template();
    WorkoutPlan {
        split,
        day1: WorkoutDay::from_template(d1),
        day2: WorkoutDay::from_template(d2),
        day3: WorkoutDay::from_template(d3),
        day4: WorkoutDay::from_template(d4),
        day5: WorkoutDay::from_template(d5),
        day6: WorkoutDay::from_template(d6),
        day7: WorkoutDay::from_template(d7),
    }
}

/// Build the weekly plan for a split given by name
pub fn generate_workout_plan_by_name(split: &str) -> CoreResult<WorkoutPlan> {
    Ok(generate_workout_plan(split.parse()?))
}
