//! Macro-nutrient gram target derivation
//!
//! Orders the three macros the way a clinical plan does: protein is anchored
//! to bodyweight first, fat is taken as a diet-dependent share, and
//! carbohydrate absorbs whatever calories remain.

use crate::types::{DietPreference, Goal, MacroTargets};

/// Absolute protein ceiling in grams
const PROTEIN_CAP_G: f64 = 190.0;

/// Minimum carbohydrate grams regardless of remaining calories
const CARB_FLOOR_G: f64 = 20.0;

/// Calories per gram of protein and carbohydrate
const KCAL_PER_G_PROTEIN_CARB: f64 = 4.0;

/// Calories per gram of fat
const KCAL_PER_G_FAT: f64 = 9.0;

/// Derive integer gram targets for protein, carbs and fat
///
/// Steps are ordered; each consumes the previous step's remainder:
///
/// 1. Protein: 2.0 g/kg for muscle gain or high-protein diets, 1.8 g/kg for
///    low-carb / fasting, else 1.5 g/kg — capped at 190 g absolute.
/// 2. Fat: share of total calories for low-carb (50%),
///    Mediterranean/MIND (35%) and DASH (25%); otherwise a flat
///    0.9 g/kg bodyweight.
/// 3. If protein + fat already exceed the calorie budget, fat is reduced by
///    20% once and the remainder recomputed.
/// 4. Carbohydrate takes the remaining calories, floored at 20 g.
///
/// Total and deterministic for positive inputs; grams are rounded.
pub fn derive_macro_targets(
    target_calories: f64,
    weight_kg: f64,
    preference: DietPreference,
    goal: Goal,
) -> MacroTargets {
    let grams_per_kg = if goal == Goal::Gain || preference == DietPreference::HighProtein {
        2.0
    } else if matches!(
        preference,
        DietPreference::LowCarb | DietPreference::Fasting
    ) {
        1.8
    } else {
        1.5
    };
    let protein_g = (weight_kg * grams_per_kg).min(PROTEIN_CAP_G);

    let mut fat_g = match preference {
        DietPreference::LowCarb => (target_calories * 0.50) / KCAL_PER_G_FAT,
        DietPreference::Mediterranean | DietPreference::Mind => {
            (target_calories * 0.35) / KCAL_PER_G_FAT
        }
        DietPreference::Dash => (target_calories * 0.25) / KCAL_PER_G_FAT,
        _ => weight_kg * 0.9,
    };

    let mut remaining =
        target_calories - (protein_g * KCAL_PER_G_PROTEIN_CARB + fat_g * KCAL_PER_G_FAT);
    if remaining < 0.0 {
        // Single correction pass, no further iteration
        fat_g *= 0.8;
        remaining =
            target_calories - (protein_g * KCAL_PER_G_PROTEIN_CARB + fat_g * KCAL_PER_G_FAT);
    }

    let carb_g = (remaining / KCAL_PER_G_PROTEIN_CARB).max(CARB_FLOOR_G);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let to_grams = |g: f64| g.round() as u32;

    MacroTargets {
        protein_grams: to_grams(protein_g),
        carb_grams: to_grams(carb_g),
        fat_grams: to_grams(fat_g),
    }
}
