//! Daily menu model returned by the meal-plan client
//!
//! Mirrors the JSON-schema-constrained shape the generative model replies
//! with: five meals, per-meal macro totals, micronutrient highlights and a
//! structured advice block. Wire format is camelCase.

use serde::{Deserialize, Serialize};

/// One ingredient or dish component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    /// Portion, e.g. "150g" or "1 bát"
    pub quantity: String,
    pub calories: f64,
    /// Grams of protein
    pub protein: f64,
    /// Grams of carbohydrate
    pub carbs: f64,
    /// Grams of fat
    pub fat: f64,
}

/// A single meal with its components and totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealDetail {
    /// e.g. "Phở Bò Tái"
    pub main_dish_name: String,
    pub items: Vec<FoodItem>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    /// Key micronutrients present, e.g. "Canxi", "Sắt"
    pub micronutrients: Vec<String>,
}

/// One entry of the suggested dining schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// Time window, e.g. "07:00 - 07:30"
    pub time: String,
    pub activity: String,
}

/// Structured advice accompanying the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceContent {
    pub summary: String,
    pub health_tips: Vec<String>,
    pub micronutrient_focus: String,
    pub dining_schedule: Vec<ScheduleItem>,
}

/// The five meal slots of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
}

impl MealSlot {
    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Bữa sáng",
            MealSlot::MorningSnack => "Bữa phụ sáng",
            MealSlot::Lunch => "Bữa trưa",
            MealSlot::AfternoonSnack => "Bữa phụ chiều",
            MealSlot::Dinner => "Bữa tối",
        }
    }

    /// All slots in day order
    pub fn all() -> [MealSlot; 5] {
        [
            MealSlot::Breakfast,
            MealSlot::MorningSnack,
            MealSlot::Lunch,
            MealSlot::AfternoonSnack,
            MealSlot::Dinner,
        ]
    }
}

/// A complete generated day of meals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMenu {
    pub breakfast: MealDetail,
    pub morning_snack: MealDetail,
    pub lunch: MealDetail,
    pub afternoon_snack: MealDetail,
    pub dinner: MealDetail,
    pub total_daily_calories: f64,
    pub total_daily_protein: f64,
    pub total_daily_carbs: f64,
    pub total_daily_fat: f64,
    pub advice: AdviceContent,
}

impl DailyMenu {
    /// Borrow the meal in a slot
    pub fn meal(&self, slot: MealSlot) -> &MealDetail {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::MorningSnack => &self.morning_snack,
            MealSlot::Lunch => &self.lunch,
            MealSlot::AfternoonSnack => &self.afternoon_snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Replace one meal, shifting the daily totals by the delta between the
    /// new and old meal totals
    ///
    /// The menu is an immutable snapshot: swapping produces a new value, the
    /// previous one is discarded atomically by the caller.
    #[must_use]
    pub fn with_meal_replaced(mut self, slot: MealSlot, new_meal: MealDetail) -> DailyMenu {
        let old = self.meal(slot);
        let (old_calories, old_protein, old_carbs, old_fat) =
            (old.total_calories, old.total_protein, old.total_carbs, old.total_fat);
        self.total_daily_calories += new_meal.total_calories - old_calories;
        self.total_daily_protein += new_meal.total_protein - old_protein;
        self.total_daily_carbs += new_meal.total_carbs - old_carbs;
        self.total_daily_fat += new_meal.total_fat - old_fat;

        match slot {
            MealSlot::Breakfast => self.breakfast = new_meal,
            MealSlot::MorningSnack => self.morning_snack = new_meal,
            MealSlot::Lunch => self.lunch = new_meal,
            MealSlot::AfternoonSnack => self.afternoon_snack = new_meal,
            MealSlot::Dinner => self.dinner = new_meal,
        }
        self
    }
}
