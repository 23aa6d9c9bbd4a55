//! Energy plan API routes
//!
//! Synchronous calculation endpoints: nothing here touches the AI client.

use crate::error::ApiError;
use crate::services::PlanService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use nutriplan_shared::types::{DietPreference, Goal, MacroTargets, TdeeResult, UserStats};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create plan routes
pub fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/targets", post(targets))
}

/// POST /api/v1/plan/calculate - full TDEE and health analysis
async fn calculate(Json(stats): Json<UserStats>) -> Result<Json<TdeeResult>, ApiError> {
    let result = PlanService::calculate(&stats)?;
    Ok(Json(result))
}

/// Macro target derivation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TargetsRequest {
    #[validate(range(min = 1.0, message = "target calories must be positive"))]
    pub target_calories: f64,
    #[validate(range(min = 1.0, message = "weight must be positive"))]
    pub weight_kg: f64,
    pub diet_preference: DietPreference,
    pub goal: Goal,
}

/// Macro target derivation response: the outward meal-plan contract fields
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetsResponse {
    pub target_calories: u32,
    pub diet_preference: DietPreference,
    pub macros: MacroTargets,
}

/// POST /api/v1/plan/targets - derive macro gram targets
async fn targets(Json(req): Json<TargetsRequest>) -> Result<Json<TargetsResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let macros = PlanService::macro_targets(
        req.target_calories,
        req.weight_kg,
        req.diet_preference,
        req.goal,
    )?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let target_calories = req.target_calories.round() as u32;

    Ok(Json(TargetsResponse {
        target_calories,
        diet_preference: req.diet_preference,
        macros,
    }))
}
