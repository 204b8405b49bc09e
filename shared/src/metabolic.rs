//! Metabolic calculations
//!
//! Derives daily energy and macro targets from a profile.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no side effects, same profile gives same targets
//! 2. **Fail Fast**: an activity level outside the multiplier table is an error
//! 3. **Integer Output**: targets are rounded once, at the end

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, CoreResult};
use crate::profile::{Gender, Goal, Profile};

// ============================================================================
// Activity Multipliers
// ============================================================================

/// TDEE multipliers indexed by activity level 1..=5
pub const ACTIVITY_MULTIPLIERS: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];

/// Share of the calorie target allotted to carbohydrates
const CARB_SHARE: f64 = 0.40;
/// Share of the calorie target allotted to fat
const FAT_SHARE: f64 = 0.30;
const KCAL_PER_GRAM_CARB: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Protein per kg of body weight while bulking
const PROTEIN_PER_KG_BULK: f64 = 1.8;
/// Protein per kg of body weight while cutting or maintaining
const PROTEIN_PER_KG_DEFAULT: f64 = 2.2;

/// Look up the activity multiplier for a 1-based activity level
pub fn activity_multiplier(level: u8) -> CoreResult<f64> {
    level
        .checked_sub(1)
        .and_then(|idx| ACTIVITY_MULTIPLIERS.get(usize::from(idx)))
        .copied()
        .ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "activity level must be between 1 and 5, got {level}"
            ))
        })
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Everyone else: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Calculate Total Daily Energy Expenditure (unrounded)
pub fn calculate_tdee(profile: &Profile) -> CoreResult<f64> {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    );
    Ok(bmr * activity_multiplier(profile.activity_level)?)
}

// ============================================================================
// Targets
// ============================================================================

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// Energy and macro targets derived from a profile
///
/// Carbs and fat are fixed 40% / 30% shares of the calorie target and
/// protein is weight-based, so the three do not necessarily add back up to
/// the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedTargets {
    pub maintenance_calories: u32,
    pub daily_calorie_target: u32,
    pub macros: Macros,
}

/// Calculate maintenance calories, the goal-adjusted target and macros
pub fn calculate_targets(profile: &Profile) -> CoreResult<CalculatedTargets> {
    let tdee = calculate_tdee(profile)?;
    let target = tdee + profile.goal.calorie_adjustment();

    let protein_per_kg = match profile.goal {
        Goal::Bulk => PROTEIN_PER_KG_BULK,
        Goal::Cut | Goal::Maintain => PROTEIN_PER_KG_DEFAULT,
    };

    Ok(CalculatedTargets {
        maintenance_calories: round_to_u32(tdee),
        daily_calorie_target: round_to_u32(target),
        macros: Macros {
            protein: round_to_u32(protein_per_kg * profile.weight_kg),
            carbs: round_to_u32(target * CARB_SHARE / KCAL_PER_GRAM_CARB),
            fat: round_to_u32(target * FAT_SHARE / KCAL_PER_GRAM_FAT),
        },
    })
}

/// Round to the nearest integer, saturating at zero
pub(crate) fn round_to_u32(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
