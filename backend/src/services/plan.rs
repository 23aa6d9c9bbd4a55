//! Plan service - energy calculation and macro derivation
//!
//! Thin orchestration over the pure calculators in `nutriplan-shared`; the
//! service adds input validation with API-shaped errors and assembles the
//! outward meal-plan contract.

use nutriplan_shared::energy::calculate_plan;
use nutriplan_shared::macro_targets::derive_macro_targets;
use nutriplan_shared::types::{
    DietPreference, Goal, MacroTargets, MealPlanRequest, TdeeResult, UserStats,
};
use nutriplan_shared::validation::{validate_target_calories, validate_weight_kg};

use crate::error::ApiError;

/// Plan service
pub struct PlanService;

impl PlanService {
    /// Run the full TDEE / health-analysis calculation
    pub fn calculate(stats: &UserStats) -> Result<TdeeResult, ApiError> {
        Ok(calculate_plan(stats)?)
    }

    /// Derive macro gram targets for explicit inputs
    pub fn macro_targets(
        target_calories: f64,
        weight_kg: f64,
        preference: DietPreference,
        goal: Goal,
    ) -> Result<MacroTargets, ApiError> {
        validate_target_calories(target_calories).map_err(ApiError::Validation)?;
        validate_weight_kg(weight_kg).map_err(ApiError::Validation)?;
        Ok(derive_macro_targets(
            target_calories,
            weight_kg,
            preference,
            goal,
        ))
    }

    /// Assemble the complete outward contract toward the meal-plan client
    ///
    /// Target calories are rounded to a whole number before macro
    /// derivation, matching what the generator is told to hit.
    pub fn build_meal_plan_request(
        stats: &UserStats,
        result: &TdeeResult,
    ) -> MealPlanRequest {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let target_calories = result.target_calories.round() as u32;
        let macros = derive_macro_targets(
            f64::from(target_calories),
            stats.weight,
            stats.diet_preference,
            stats.goal,
        );

        MealPlanRequest {
            name: stats.name.clone(),
            target_calories,
            weight_kg: stats.weight,
            goal_label: stats.goal.label().to_string(),
            diet_preference: stats.diet_preference,
            macros,
            health_context: result.health_analysis.context_summary(),
        }
    }
}
