//! Input validation functions
//!
//! Field-level checks for profile and log input. Profile ranges use the
//! `validator` derive; log entries are checked by hand since their rules
//! span nested collections.

use validator::{ValidationError, ValidationErrors};

use crate::errors::{CoreError, CoreResult};

/// Lowest loggable body weight in kg
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Highest loggable body weight in kg
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Reject NaN and infinities, which slip through range checks
pub fn validate_finite<T: std::borrow::Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    if value.borrow().is_finite() {
        Ok(())
    } else {
        let mut err = ValidationError::new("finite");
        err.message = Some("Must be a valid number".into());
        Err(err)
    }
}

/// Flatten validator output into a single readable message
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Validate a logged body weight (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> CoreResult<()> {
    if !weight_kg.is_finite() {
        return Err(CoreError::InvalidInput(
            "Weight must be a valid number".to_string(),
        ));
    }
    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(CoreError::InvalidInput(format!(
            "Weight must be between {MIN_WEIGHT_KG} and {MAX_WEIGHT_KG} kg"
        )));
    }
    Ok(())
}

/// Validate a non-negative nutrient or load amount
pub fn validate_non_negative(field: &str, value: f64) -> CoreResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Validate a required text field
pub fn validate_required(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}
