//! Energy expenditure and health risk calculations
//!
//! Pure functions mapping [`UserStats`] to BMR, TDEE, target calories, a
//! health risk analysis and the scientific-basis checklist.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: no side effects, deterministic
//! 2. **Evidence-Based**: Mifflin-St Jeor BMR, Asian (IDI & WPRO) BMI bands
//! 3. **Type Safety**: closed enums drive every lookup table

use crate::errors::CalcError;
use crate::types::{
    BmiClass, DietPreference, Gender, Goal, HealthAnalysis, RiskLevel, TdeeResult, UserStats,
    ValidationItem, ValidationStatus, MIN_TARGET_CALORIES,
};
use crate::validation::validate_stats;

/// WHR cutoff above which central-adiposity risk is high
fn whr_risk_cutoff(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 0.9,
        Gender::Female => 0.8,
    }
}

/// Absolute waist cutoff (cm) used when hip circumference is unknown
fn waist_cutoff_cm(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 90.0,
        Gender::Female => 80.0,
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into the Asian (IDI & WPRO) bands
///
/// Half-open bands: <18.5 underweight, [18.5, 23) normal,
/// [23, 25) overweight, ≥25 obese.
pub fn classify_bmi(bmi: f64) -> BmiClass {
    if bmi < 18.5 {
        BmiClass::Underweight
    } else if bmi < 23.0 {
        BmiClass::Normal
    } else if bmi < 25.0 {
        BmiClass::Overweight
    } else {
        BmiClass::Obese
    }
}

/// Derive the health risk analysis from body statistics
///
/// WHR is computed only when both waist and hip are present; a lone waist
/// measurement is compared against the absolute Asian cutoff and contributes
/// an advisory note without a numeric WHR.
pub fn analyze_health(stats: &UserStats) -> HealthAnalysis {
    let bmi = calculate_bmi(stats.weight, stats.height);

    let mut notes = Vec::new();
    if stats.is_smoker.unwrap_or(false) {
        notes.push("Hút thuốc làm tăng nhu cầu Vitamin C (ổi, cam, ớt chuông).".to_string());
    }
    if stats.sleep_hours.is_some_and(|h| h < 6.0) {
        notes.push(
            "Thiếu ngủ gây tăng hormone Ghrelin (thèm ăn). Cần kiểm soát carb vào buổi tối."
                .to_string(),
        );
    }

    let mut whr = None;
    let mut whr_risk = None;
    let mut metabolic_risk = RiskLevel::Low;

    match (stats.waist, stats.hip) {
        (Some(waist), Some(hip)) => {
            let ratio = waist / hip;
            whr = Some(ratio);
            if ratio > whr_risk_cutoff(stats.gender) {
                whr_risk = Some(RiskLevel::High);
                metabolic_risk = RiskLevel::High;
                notes.push(
                    "Cảnh báo mỡ nội tạng cao. Ưu tiên Carb hấp thu chậm (Gạo lứt, khoai lang) để ổn định đường huyết."
                        .to_string(),
                );
            } else {
                whr_risk = Some(RiskLevel::Normal);
            }
        }
        (Some(waist), None) => {
            if waist > waist_cutoff_cm(stats.gender) {
                notes.push("Vòng eo vượt chuẩn Á Đông. Cần giảm mỡ vùng bụng.".to_string());
            }
        }
        _ => {}
    }

    HealthAnalysis {
        bmi,
        bmi_classification: classify_bmi(bmi),
        whr,
        whr_risk,
        metabolic_risk,
        notes,
    }
}

/// Build the fixed 4-row scientific-basis checklist
pub fn build_validation(stats: &UserStats, bmi: f64) -> Vec<ValidationItem> {
    let bmi_status = if !(18.5..23.0).contains(&bmi) {
        ValidationStatus::Warning
    } else {
        ValidationStatus::Pass
    };

    vec![
        ValidationItem {
            criteria: "Chỉ số BMI".to_string(),
            status: bmi_status,
            scientific_basis: "Chuẩn IDI & WPRO (Châu Á)".to_string(),
            detail: format!(
                "BMI của bạn là {bmi:.1}. Mức lý tưởng cho người Việt là 18.5 - 22.9."
            ),
        },
        ValidationItem {
            criteria: "Chiến lược Calories".to_string(),
            status: ValidationStatus::Pass,
            scientific_basis: "Nguyên tắc Cân bằng Năng lượng (CICO)".to_string(),
            detail: match stats.goal {
                Goal::Lose => "Thâm hụt 500kcal/ngày để giảm ~0.5kg mỡ/tuần an toàn.",
                Goal::Gain => "Dư thừa 500kcal/ngày để tối ưu hóa việc xây dựng cơ bắp.",
                Goal::Maintain => "Duy trì mức Calories bằng TDEE để giữ cân ổn định.",
            }
            .to_string(),
        },
        ValidationItem {
            criteria: "Hệ số vận động".to_string(),
            status: ValidationStatus::Info,
            scientific_basis: "Hệ số PAL (Physical Activity Level)".to_string(),
            detail: format!(
                "Áp dụng hệ số x{} cho nhóm \"{}\".",
                stats.activity.multiplier(),
                stats.activity.label()
            ),
        },
        ValidationItem {
            criteria: "Chế độ ăn".to_string(),
            status: ValidationStatus::Pass,
            scientific_basis: stats.diet_preference.label().to_string(),
            detail: match stats.diet_preference {
                DietPreference::HighProtein => {
                    "Ưu tiên 2.0g-2.2g Protein/kg trọng lượng để bảo vệ cơ bắp."
                }
                DietPreference::LowCarb => {
                    "Giảm carbohydrate để thúc đẩy quá trình Ketosis nhẹ hoặc giảm tích nước."
                }
                DietPreference::Dash => {
                    "Tập trung giảm Natri, tăng Kali/Magie để kiểm soát huyết áp."
                }
                _ => "Phân bổ Macro cân bằng theo khuyến nghị của Viện Dinh Dưỡng.",
            }
            .to_string(),
        },
    ]
}

/// Run the complete calculation: BMR, TDEE, target calories, health
/// analysis and checklist
///
/// Fails fast with [`CalcError::MissingInput`] when age, height or weight is
/// absent or zero; no partial result is produced.
pub fn calculate_plan(stats: &UserStats) -> Result<TdeeResult, CalcError> {
    validate_stats(stats)?;

    let bmr = calculate_bmr(stats.weight, stats.height, stats.age, stats.gender);
    let tdee = bmr * stats.activity.multiplier();
    let target_calories = (tdee + stats.goal.adjustment()).max(MIN_TARGET_CALORIES);

    let health_analysis = analyze_health(stats);
    let validation = build_validation(stats, health_analysis.bmi);

    Ok(TdeeResult {
        bmr,
        tdee,
        target_calories,
        health_analysis,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityLevel;
    use proptest::prelude::*;
    use rstest::rstest;

    fn stats(
        gender: Gender,
        age: u32,
        height: f64,
        weight: f64,
        activity: ActivityLevel,
        goal: Goal,
    ) -> UserStats {
        UserStats {
            name: String::new(),
            gender,
            age,
            height,
            weight,
            activity,
            goal,
            diet_preference: DietPreference::Balanced,
            waist: None,
            hip: None,
            is_smoker: None,
            sleep_hours: None,
        }
    }

    // =========================================================================
    // BMR / TDEE / Target Tests
    // =========================================================================

    #[test]
    fn reference_male_moderate_maintain() {
        // 65kg, 170cm, 25y male: 10*65 + 6.25*170 - 5*25 + 5 = 1592.5
        let result = calculate_plan(&stats(
            Gender::Male,
            25,
            170.0,
            65.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        ))
        .unwrap();
        assert_eq!(result.bmr, 1592.5);
        assert_eq!(result.tdee, 1592.5 * 1.55);
        assert_eq!(result.target_calories, 1592.5 * 1.55);
    }

    #[test]
    fn reference_male_sedentary_lose() {
        // 70kg, 175cm, 30y male: BMR = 700 + 1093.75 - 150 + 5 = 1648.75
        let result = calculate_plan(&stats(
            Gender::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Sedentary,
            Goal::Lose,
        ))
        .unwrap();
        assert_eq!(result.bmr, 1648.75);
        assert_eq!(result.tdee, 1978.5);
        assert_eq!(result.target_calories, 1478.5);
    }

    #[test]
    fn female_offset_is_166_below_male() {
        let male = calculate_bmr(65.0, 170.0, 25, Gender::Male);
        let female = calculate_bmr(65.0, 170.0, 25, Gender::Female);
        assert_eq!(male - female, 166.0);
    }

    #[test]
    fn target_calories_floored_at_1200() {
        // Small, older, sedentary, cutting: raw target well below the floor
        let result = calculate_plan(&stats(
            Gender::Female,
            70,
            150.0,
            40.0,
            ActivityLevel::Sedentary,
            Goal::Lose,
        ))
        .unwrap();
        assert_eq!(result.target_calories, 1200.0);
    }

    // =========================================================================
    // BMI Classification Tests
    // =========================================================================

    #[rstest]
    #[case(18.49, BmiClass::Underweight)]
    #[case(18.5, BmiClass::Normal)]
    #[case(22.99, BmiClass::Normal)]
    #[case(23.0, BmiClass::Overweight)]
    #[case(24.99, BmiClass::Overweight)]
    #[case(25.0, BmiClass::Obese)]
    fn bmi_bands_are_half_open(#[case] bmi: f64, #[case] expected: BmiClass) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn bmi_band_labels() {
        assert_eq!(classify_bmi(18.5).label(), "Bình thường");
        assert_eq!(classify_bmi(23.0).label(), "Thừa cân");
        assert_eq!(classify_bmi(25.0).label(), "Béo phì");
        assert_eq!(classify_bmi(17.0).label(), "Thiếu cân");
    }

    // =========================================================================
    // WHR / Risk Analysis Tests
    // =========================================================================

    #[test]
    fn high_whr_male_flags_metabolic_risk() {
        let mut s = stats(
            Gender::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        s.waist = Some(95.0);
        s.hip = Some(100.0);
        let analysis = analyze_health(&s);
        assert_eq!(analysis.whr, Some(0.95));
        assert_eq!(analysis.whr_risk, Some(RiskLevel::High));
        assert_eq!(analysis.metabolic_risk, RiskLevel::High);
        assert!(analysis.notes.iter().any(|n| n.contains("mỡ nội tạng")));
    }

    #[test]
    fn normal_whr_female_stays_low_risk() {
        let mut s = stats(
            Gender::Female,
            30,
            160.0,
            55.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        s.waist = Some(70.0);
        s.hip = Some(100.0);
        let analysis = analyze_health(&s);
        assert_eq!(analysis.whr, Some(0.7));
        assert_eq!(analysis.whr_risk, Some(RiskLevel::Normal));
        assert_eq!(analysis.metabolic_risk, RiskLevel::Low);
        assert!(analysis.notes.is_empty());
    }

    #[test]
    fn whr_exactly_at_cutoff_is_not_high_risk() {
        let mut s = stats(
            Gender::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        s.waist = Some(90.0);
        s.hip = Some(100.0);
        let analysis = analyze_health(&s);
        assert_eq!(analysis.whr_risk, Some(RiskLevel::Normal));
        assert_eq!(analysis.metabolic_risk, RiskLevel::Low);
    }

    #[test]
    fn waist_only_above_cutoff_adds_note_without_whr() {
        let mut s = stats(
            Gender::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        s.waist = Some(95.0);
        let analysis = analyze_health(&s);
        assert!(analysis.whr.is_none());
        assert!(analysis.whr_risk.is_none());
        assert!(analysis.notes.iter().any(|n| n.contains("Vòng eo")));
    }

    #[test]
    fn lifestyle_notes_appended_in_order() {
        let mut s = stats(
            Gender::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        s.is_smoker = Some(true);
        s.sleep_hours = Some(5.0);
        s.waist = Some(95.0);
        s.hip = Some(100.0);
        let analysis = analyze_health(&s);
        assert_eq!(analysis.notes.len(), 3);
        assert!(analysis.notes[0].contains("Vitamin C"));
        assert!(analysis.notes[1].contains("Ghrelin"));
        assert!(analysis.notes[2].contains("mỡ nội tạng"));
    }

    #[test]
    fn six_hours_sleep_is_not_flagged() {
        let mut s = stats(
            Gender::Male,
            30,
            175.0,
            70.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        s.sleep_hours = Some(6.0);
        assert!(analyze_health(&s).notes.is_empty());
    }

    // =========================================================================
    // Checklist Tests
    // =========================================================================

    #[test]
    fn checklist_has_exactly_four_rows() {
        let s = stats(
            Gender::Male,
            25,
            170.0,
            65.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        let result = calculate_plan(&s).unwrap();
        assert_eq!(result.validation.len(), 4);
        assert_eq!(result.validation[0].criteria, "Chỉ số BMI");
        assert_eq!(result.validation[1].criteria, "Chiến lược Calories");
        assert_eq!(result.validation[2].criteria, "Hệ số vận động");
        assert_eq!(result.validation[3].criteria, "Chế độ ăn");
    }

    #[test]
    fn bmi_row_warns_outside_healthy_band() {
        // 65kg @ 170cm -> BMI 22.49, in band
        let healthy = stats(
            Gender::Male,
            25,
            170.0,
            65.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        let rows = build_validation(&healthy, calculate_bmi(65.0, 170.0));
        assert_eq!(rows[0].status, ValidationStatus::Pass);

        // 80kg @ 170cm -> BMI 27.7, obese band
        let heavy = stats(
            Gender::Male,
            25,
            170.0,
            80.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        let rows = build_validation(&heavy, calculate_bmi(80.0, 170.0));
        assert_eq!(rows[0].status, ValidationStatus::Warning);
    }

    #[test]
    fn activity_row_embeds_multiplier() {
        let s = stats(
            Gender::Male,
            25,
            170.0,
            65.0,
            ActivityLevel::Light,
            Goal::Maintain,
        );
        let rows = build_validation(&s, 22.0);
        assert_eq!(rows[2].status, ValidationStatus::Info);
        assert!(rows[2].detail.contains("x1.375"));
    }

    #[test]
    fn missing_mandatory_input_produces_no_partial_result() {
        let s = stats(
            Gender::Male,
            0,
            170.0,
            65.0,
            ActivityLevel::Moderate,
            Goal::Maintain,
        );
        assert_eq!(calculate_plan(&s), Err(CalcError::MissingInput));
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Target calories never fall below the safe minimum
        #[test]
        fn prop_target_floor_always_holds(
            weight in 30.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..90,
        ) {
            for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
                let result = calculate_plan(&stats(
                    Gender::Female, age, height, weight, ActivityLevel::Sedentary, goal,
                )).unwrap();
                prop_assert!(result.target_calories >= MIN_TARGET_CALORIES);
            }
        }

        /// Male BMR exceeds female BMR for identical stats
        #[test]
        fn prop_male_bmr_higher(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..90,
        ) {
            let male = calculate_bmr(weight, height, age, Gender::Male);
            let female = calculate_bmr(weight, height, age, Gender::Female);
            prop_assert!(male > female);
        }

        /// TDEE scales with the activity tier
        #[test]
        fn prop_tdee_monotonic_in_activity(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..90,
        ) {
            let tiers = [
                ActivityLevel::Sedentary,
                ActivityLevel::Light,
                ActivityLevel::Moderate,
                ActivityLevel::Active,
                ActivityLevel::VeryActive,
            ];
            let bmr = calculate_bmr(weight, height, age, Gender::Male);
            for pair in tiers.windows(2) {
                prop_assert!(bmr * pair[0].multiplier() < bmr * pair[1].multiplier());
            }
        }

        /// The analysis is deterministic: identical input, identical output
        #[test]
        fn prop_calculation_is_pure(
            weight in 30.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18u32..90,
        ) {
            let s = stats(Gender::Male, age, height, weight, ActivityLevel::Moderate, Goal::Lose);
            let a = calculate_plan(&s).unwrap();
            let b = calculate_plan(&s).unwrap();
            prop_assert_eq!(a.bmr, b.bmr);
            prop_assert_eq!(a.tdee, b.tdee);
            prop_assert_eq!(a.target_calories, b.target_calories);
            prop_assert_eq!(a.health_analysis.bmi, b.health_analysis.bmi);
        }
    }
}
