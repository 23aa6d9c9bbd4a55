//! Input validation for user body statistics
//!
//! The three anthropometric fields (age, height, weight) are mandatory for
//! any calculation; a zero or absent value fails with a single user-facing
//! message and no partial result. Optional measurements are rejected when
//! nonsensical (zero, negative, NaN) rather than silently propagated into
//! BMI/WHR values.

use crate::errors::CalcError;
use crate::types::UserStats;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be greater than 0 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm <= 0.0 {
        return Err("Height must be greater than 0 cm".to_string());
    }
    Ok(())
}

/// Validate a circumference measurement (waist or hip, in cm)
pub fn validate_circumference_cm(label: &str, value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{label} must be a valid number"));
    }
    if value <= 0.0 {
        return Err(format!("{label} must be greater than 0 cm"));
    }
    Ok(())
}

/// Validate nightly sleep duration in hours
pub fn validate_sleep_hours(hours: f64) -> Result<(), String> {
    if hours.is_nan() || hours.is_infinite() {
        return Err("Sleep hours must be a valid number".to_string());
    }
    if hours <= 0.0 || hours > 24.0 {
        return Err("Sleep hours must be between 0 and 24".to_string());
    }
    Ok(())
}

/// Validate target calories for macro derivation
pub fn validate_target_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Target calories must be a valid number".to_string());
    }
    if calories <= 0.0 {
        return Err("Target calories must be greater than 0".to_string());
    }
    Ok(())
}

/// Validate a full [`UserStats`] record before calculation
///
/// Mandatory completeness first (the single user-facing alert), then range
/// checks on everything that was supplied.
pub fn validate_stats(stats: &UserStats) -> Result<(), CalcError> {
    if stats.age == 0 || stats.height == 0.0 || stats.weight == 0.0 {
        return Err(CalcError::MissingInput);
    }

    validate_height_cm(stats.height).map_err(CalcError::InvalidInput)?;
    validate_weight_kg(stats.weight).map_err(CalcError::InvalidInput)?;

    if let Some(waist) = stats.waist {
        validate_circumference_cm("Waist", waist).map_err(CalcError::InvalidInput)?;
    }
    if let Some(hip) = stats.hip {
        validate_circumference_cm("Hip", hip).map_err(CalcError::InvalidInput)?;
    }
    if let Some(sleep) = stats.sleep_hours {
        validate_sleep_hours(sleep).map_err(CalcError::InvalidInput)?;
    }

    Ok(())
}
