//! Logged workouts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{CoreError, CoreResult};
use crate::validation::{validate_non_negative, validate_required};

/// Workout records keyed by date; one record per date
pub type WorkoutLogs = BTreeMap<NaiveDate, WorkoutLog>;

/// A single exercise as performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    pub name: String,
    pub sets: u32,
    /// Rep range as entered, e.g. "8-12"
    pub reps: String,
    /// Load in kg, 0 for bodyweight
    #[serde(default)]
    pub weight: f64,
}

/// A workout as logged for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub name: String,
    pub exercises: Vec<LoggedExercise>,
}

impl WorkoutLog {
    /// Every exercise needs a name, at least one set, reps and a non-negative load
    pub fn check(&self) -> CoreResult<()> {
        validate_required("workout name", &self.name)?;
        if self.exercises.is_empty() {
            return Err(CoreError::InvalidInput(
                "a workout needs at least one exercise".to_string(),
            ));
        }
        for exercise in &self.exercises {
            validate_required("exercise name", &exercise.name)?;
            validate_required("reps", &exercise.reps)?;
            if exercise.sets == 0 {
                return Err(CoreError::InvalidInput(format!(
                    "{} needs at least one set",
                    exercise.name
                )));
            }
            validate_non_negative("weight", exercise.weight)?;
        }
        Ok(())
    }

    /// Total sets across all exercises
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }
}
