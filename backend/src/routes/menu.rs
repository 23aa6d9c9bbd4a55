//! Meal-plan API routes
//!
//! Menu generation and dish alternatives call the AI client; the swap
//! endpoint is a pure totals recomputation.

use crate::error::ApiError;
use crate::services::PlanService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use nutriplan_shared::menu::{DailyMenu, MealDetail, MealSlot};
use nutriplan_shared::types::{DietPreference, MealPlanRequest, UserStats};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create menu routes
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_menu))
        .route("/alternatives", post(alternatives))
        .route("/swap", post(swap))
}

/// Generated menu plus the request that produced it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub menu: DailyMenu,
    /// The contract sent to the generator (targets, diet, health context)
    pub plan: MealPlanRequest,
    pub generated_at: DateTime<Utc>,
}

/// POST /api/v1/menu - compute targets and generate a daily menu
async fn generate_menu(
    State(state): State<AppState>,
    Json(stats): Json<UserStats>,
) -> Result<Json<MenuResponse>, ApiError> {
    let result = PlanService::calculate(&stats)?;
    let plan = PlanService::build_meal_plan_request(&stats, &result);
    let menu = state.menu.generate_daily_menu(&plan).await?;

    Ok(Json(MenuResponse {
        menu,
        plan,
        generated_at: Utc::now(),
    }))
}

/// Dish alternatives request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AlternativesRequest {
    pub slot: MealSlot,
    pub current_dish_name: String,
    #[validate(range(min = 1, message = "target calories must be positive"))]
    pub target_calories: u32,
    pub diet_preference: DietPreference,
}

/// Dish alternatives response
#[derive(Debug, Serialize)]
pub struct AlternativesResponse {
    pub alternatives: Vec<MealDetail>,
}

/// POST /api/v1/menu/alternatives - three replacement dishes for one slot
async fn alternatives(
    State(state): State<AppState>,
    Json(req): Json<AlternativesRequest>,
) -> Result<Json<AlternativesResponse>, ApiError> {
    req.validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let alternatives = state
        .menu
        .dish_alternatives(
            req.slot,
            &req.current_dish_name,
            req.target_calories,
            req.diet_preference,
        )
        .await?;

    Ok(Json(AlternativesResponse { alternatives }))
}

/// Meal swap request: an existing menu and the replacement for one slot
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub menu: DailyMenu,
    pub slot: MealSlot,
    pub replacement: MealDetail,
}

/// POST /api/v1/menu/swap - replace one meal, recomputing daily totals
///
/// Pure function over the posted snapshot; the caller replaces its state
/// atomically with the returned menu.
async fn swap(Json(req): Json<SwapRequest>) -> Json<DailyMenu> {
    Json(req.menu.with_meal_replaced(req.slot, req.replacement))
}
