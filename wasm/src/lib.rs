//! FitFlow WASM Module
//!
//! Browser bindings for the FitFlow calculators. Inputs and outputs are JSON
//! strings shaped like the matching fields of the user document; errors come
//! back as plain messages.

use fitflow_shared::{
    generate_diet_plan, generate_workout_plan_by_name, CalculatedTargets, Profile, WeightEntries,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

/// Energy and macro targets for a profile
#[wasm_bindgen]
pub fn calculate_targets(profile_json: &str) -> Result<String, String> {
    let profile: Profile = serde_json::from_str(profile_json).map_err(|e| e.to_string())?;
    profile.check().map_err(|e| e.to_string())?;
    let targets = fitflow_shared::calculate_targets(&profile).map_err(|e| e.to_string())?;
    to_json(&targets)
}

/// Weekly change display string for a `{ "YYYY-MM-DD": kg }` map
#[wasm_bindgen]
pub fn weekly_weight_change(entries_json: &str) -> Result<String, String> {
    let entries: WeightEntries = serde_json::from_str(entries_json).map_err(|e| e.to_string())?;
    Ok(fitflow_shared::weekly_weight_change(&entries))
}

/// Weekly workout plan for a split name such as "Upper/Lower"
#[wasm_bindgen]
pub fn workout_plan(split: &str) -> Result<String, String> {
    let plan = generate_workout_plan_by_name(split).map_err(|e| e.to_string())?;
    to_json(&plan)
}

/// Weekly diet plan for calculated targets
#[wasm_bindgen]
pub fn diet_plan(targets_json: &str) -> Result<String, String> {
    let targets: CalculatedTargets =
        serde_json::from_str(targets_json).map_err(|e| e.to_string())?;
    to_json(&generate_diet_plan(&targets))
}
