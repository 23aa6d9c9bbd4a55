//! NutriPlan WASM Module
//!
//! WebAssembly bindings over the shared calculation core so the browser can
//! compute BMR/TDEE and the full plan without a round-trip to the backend.

use nutriplan_shared::energy;
use nutriplan_shared::types::{Gender, UserStats};
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    energy::calculate_bmi(weight_kg, height_cm)
}

/// Calculate BMR (Mifflin-St Jeor)
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, is_male: bool) -> f64 {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    energy::calculate_bmr(weight_kg, height_cm, age_years, gender)
}

/// Run the full plan calculation on a JSON-encoded `UserStats`
///
/// Returns the `TdeeResult` as JSON; validation failures surface as a JS
/// error carrying the user-facing message.
#[wasm_bindgen]
pub fn calculate_plan(stats_json: &str) -> Result<String, JsValue> {
    plan_from_json(stats_json).map_err(|e| JsValue::from_str(&e))
}

/// JSON-in/JSON-out plan calculation, independent of the JS boundary
fn plan_from_json(stats_json: &str) -> Result<String, String> {
    let stats: UserStats =
        serde_json::from_str(stats_json).map_err(|e| format!("Invalid stats payload: {e}"))?;

    let result = energy::calculate_plan(&stats).map_err(|e| e.to_string())?;

    serde_json::to_string(&result).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.86).abs() < 0.1);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }

    #[test]
    fn test_bmr_matches_reference() {
        assert_eq!(calculate_bmr(70.0, 175.0, 30, true), 1648.75);
        assert_eq!(calculate_bmr(70.0, 175.0, 30, false), 1482.75);
    }

    #[test]
    fn test_plan_round_trip() {
        let stats = r#"{
            "gender": "male",
            "age": 30,
            "height": 175,
            "weight": 70,
            "activity": "sedentary",
            "goal": "lose",
            "dietPreference": "balanced"
        }"#;
        let result = plan_from_json(stats).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["bmr"], 1648.75);
        assert_eq!(value["targetCalories"], 1478.5);
    }

    #[test]
    fn test_plan_rejects_incomplete_stats() {
        let stats = r#"{
            "gender": "male",
            "age": 0,
            "height": 175,
            "weight": 70,
            "activity": "sedentary",
            "goal": "lose",
            "dietPreference": "balanced"
        }"#;
        let err = plan_from_json(stats).unwrap_err();
        assert!(err.contains("Vui lòng nhập đầy đủ"));
    }
}
