//! Core domain types for nutrition planning
//!
//! All enumerations are closed: lookup tables (activity multipliers, goal
//! adjustments, display labels) are exhaustive `match` expressions, so adding
//! a new tier or diet is a compile-time event rather than a runtime surprise.
//!
//! Wire format: camelCase field names, snake_case enum tags (`sedentary`,
//! `low_carb`, ...), matching what the web client sends and renders.

use serde::{Deserialize, Serialize};

// ============================================================================
// User Input Types
// ============================================================================

/// Biological gender for BMR and risk-cutoff calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Nam",
            Gender::Female => "Nữ",
        }
    }
}

/// Activity level for TDEE calculation (5 ordered tiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise, desk job
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Athletes, heavy physical labor
    VeryActive,
}

impl ActivityLevel {
    /// PAL multiplier applied to BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Ít vận động (Làm văn phòng, ít tập)",
            ActivityLevel::Light => "Nhẹ (Tập 1-3 ngày/tuần)",
            ActivityLevel::Moderate => "Vừa (Tập 3-5 ngày/tuần)",
            ActivityLevel::Active => "Năng động (Tập 6-7 ngày/tuần)",
            ActivityLevel::VeryActive => "Rất năng động (VĐV, lao động nặng)",
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Daily calorie adjustment applied on top of TDEE
    pub fn adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -500.0,
            Goal::Maintain => 0.0,
            Goal::Gain => 500.0,
        }
    }

    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Giảm cân (-0.5kg/tuần)",
            Goal::Maintain => "Giữ cân nặng hiện tại",
            Goal::Gain => "Tăng cân (+0.5kg/tuần)",
        }
    }
}

/// Dietary style preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    #[default]
    Balanced,
    LowCarb,
    HighProtein,
    Mediterranean,
    Dash,
    Mind,
    Fasting,
}

impl DietPreference {
    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            DietPreference::Balanced => "Cân bằng (Dễ duy trì)",
            DietPreference::LowCarb => "Giảm mỡ nhanh (Low Carb)",
            DietPreference::HighProtein => "Tăng cơ (Ưu tiên Đạm)",
            DietPreference::Mediterranean => "Địa Trung Hải (Tốt cho tim mạch)",
            DietPreference::Dash => "DASH (Ngừa cao huyết áp)",
            DietPreference::Mind => "MIND (Tốt cho trí não)",
            DietPreference::Fasting => "Intermittent Fasting (16:8)",
        }
    }

    /// Wire tag used in prompts and API payloads
    pub fn tag(&self) -> &'static str {
        match self {
            DietPreference::Balanced => "balanced",
            DietPreference::LowCarb => "low_carb",
            DietPreference::HighProtein => "high_protein",
            DietPreference::Mediterranean => "mediterranean",
            DietPreference::Dash => "dash",
            DietPreference::Mind => "mind",
            DietPreference::Fasting => "fasting",
        }
    }
}

/// User body statistics, immutable per calculation call
///
/// Age, height and weight are mandatory for any calculation; the remaining
/// health stats refine the risk analysis when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub name: String,
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub diet_preference: DietPreference,

    /// Waist circumference in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Hip circumference in centimeters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_smoker: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
}

// ============================================================================
// Analysis Result Types
// ============================================================================

/// BMI classification bands, Asian (IDI & WPRO) cutoffs
///
/// Bands are population constants and never vary by locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiClass::Underweight => "Thiếu cân",
            BmiClass::Normal => "Bình thường",
            BmiClass::Overweight => "Thừa cân",
            BmiClass::Obese => "Béo phì",
        }
    }
}

/// Risk band used for WHR and overall metabolic risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Normal,
    High,
}

impl RiskLevel {
    /// Vietnamese display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Thấp",
            RiskLevel::Normal => "Bình thường",
            RiskLevel::High => "Cao",
        }
    }
}

/// Derived health risk snapshot
///
/// Recomputed wholesale on every calculation, never partially updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAnalysis {
    pub bmi: f64,
    pub bmi_classification: BmiClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whr_risk: Option<RiskLevel>,
    pub metabolic_risk: RiskLevel,
    /// Free-text advisory notes, Vietnamese
    pub notes: Vec<String>,
}

impl HealthAnalysis {
    /// Compose the free-text health summary passed to the meal-plan client
    pub fn context_summary(&self) -> String {
        format!(
            "SỨC KHỎE: BMI {:.1} ({}). {}",
            self.bmi,
            self.bmi_classification.label(),
            self.notes.join(" ")
        )
    }
}

/// Status of one row in the scientific-basis checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Pass,
    Warning,
    Info,
}

/// One row of the scientific-basis checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationItem {
    pub criteria: String,
    pub status: ValidationStatus,
    pub scientific_basis: String,
    pub detail: String,
}

/// Aggregate calculation result
///
/// Created on a "calculate" action, replaced wholesale on recalculation,
/// discarded on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdeeResult {
    pub bmr: f64,
    pub tdee: f64,
    /// TDEE plus goal adjustment, floored at [`MIN_TARGET_CALORIES`]
    pub target_calories: f64,
    pub health_analysis: HealthAnalysis,
    pub validation: Vec<ValidationItem>,
}

/// Safe minimum for daily target calories
pub const MIN_TARGET_CALORIES: f64 = 1200.0;

// ============================================================================
// Macro Targets
// ============================================================================

/// Target macro-nutrient grams, derived and ephemeral
///
/// Consumed only as input to the meal-plan request; not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub protein_grams: u32,
    pub carb_grams: u32,
    pub fat_grams: u32,
}

/// The complete outward contract toward the meal-plan client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    #[serde(default)]
    pub name: String,
    pub target_calories: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    pub goal_label: String,
    pub diet_preference: DietPreference,
    pub macros: MacroTargets,
    /// Free-text summary composed from [`HealthAnalysis::context_summary`]
    #[serde(default)]
    pub health_context: String,
}
