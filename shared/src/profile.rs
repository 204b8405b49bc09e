//! User profile types
//!
//! The profile is the only user-edited input to the calculators. Ranges are
//! enforced by [`Profile::check`] on every write path; the calculators
//! themselves only guard what they index on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::errors::{CoreError, CoreResult};
use crate::validation::validate_finite;
use crate::workout_plan::WorkoutSplit;

/// Gender as entered on the profile form
///
/// Only `Male` selects the male BMR constant; `Female` and `Other` share the
/// female constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Body-composition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Goal {
    /// Daily calorie adjustment relative to maintenance
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Cut => -300.0,
            Goal::Maintain => 0.0,
            Goal::Bulk => 300.0,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Goal::Cut => "Cut",
            Goal::Maintain => "Maintain",
            Goal::Bulk => "Bulk",
        };
        f.write_str(s)
    }
}

impl FromStr for Goal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cut" => Ok(Goal::Cut),
            "Maintain" => Ok(Goal::Maintain),
            "Bulk" => Ok(Goal::Bulk),
            other => Err(CoreError::InvalidInput(format!("unknown goal: {other}"))),
        }
    }
}

/// User profile as stored in the user document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    pub gender: Gender,
    /// Age in years
    #[validate(range(min = 16, max = 100, message = "Age must be between 16 and 100"))]
    pub age: u32,
    /// Height in centimeters
    #[serde(rename = "height")]
    #[validate(
        custom(function = "validate_finite"),
        range(min = 120.0, max = 250.0, message = "Height must be between 120 and 250 cm")
    )]
    pub height_cm: f64,
    /// Weight in kilograms
    #[serde(rename = "weight")]
    #[validate(
        custom(function = "validate_finite"),
        range(min = 30.0, max = 300.0, message = "Weight must be between 30 and 300 kg")
    )]
    pub weight_kg: f64,
    pub goal: Goal,
    /// 1 (sedentary) to 5 (extra active)
    #[validate(range(min = 1, max = 5, message = "Activity level must be between 1 and 5"))]
    pub activity_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_split: Option<WorkoutSplit>,
}

impl Profile {
    /// Validate every field range, mapping failures to [`CoreError::InvalidInput`]
    pub fn check(&self) -> CoreResult<()> {
        self.validate().map_err(CoreError::from)
    }
}
