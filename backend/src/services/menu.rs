//! Menu service - AI meal-plan generation
//!
//! Builds the nutritionist prompt from the computed targets, asks Gemini for
//! a schema-constrained JSON menu and deserializes it into the shared menu
//! types. The menu swap operation is pure and never touches the model.

use nutriplan_shared::menu::{DailyMenu, MealDetail, MealSlot};
use nutriplan_shared::types::{DietPreference, MealPlanRequest};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::llm::GeminiClient;

/// Standing instruction for the generator: a senior clinical nutritionist
/// producing practical Vietnamese menus with micronutrient coverage.
const SYSTEM_INSTRUCTION: &str = "\
Bạn là Chuyên gia Dinh dưỡng Lâm sàng & Khoa học Thực phẩm cấp cao (Senior Clinical Nutritionist).
Tôn chỉ làm việc:
1. KHOA HỌC: Tuân thủ chuẩn RNI (Việt Nam) & WHO.
2. DỄ ỨNG DỤNG (PRACTICALITY):
   - Ưu tiên nguyên liệu có sẵn tại chợ dân sinh hoặc siêu thị Việt Nam (WinMart, CoopMart).
   - BỮA SÁNG (QUAN TRỌNG): Người Việt thường rất bận rộn. Gợi ý món làm TRONG VÒNG 5-10 PHÚT hoặc món nước (Bún/Phở) dễ mua/dễ nấu. Ưu tiên: Bánh mì trứng/chả, Xôi (lượng vừa phải), Yến mạch nấu kiểu Việt, Trứng luộc/ốp, Ngũ cốc. TRÁNH CÁC MÓN ÂU PHỨC TẠP như Nướng lò (Baking) vào buổi sáng.
3. DỮ LIỆU LỚN (BIG DATA): Truy cập kho dữ liệu ẩm thực Việt Nam. SÁNG TẠO nhưng GẦN GŨI.
4. TỐI ƯU VI CHẤT (MICRONUTRIENTS - QUAN TRỌNG):
   - Thực đơn không chỉ đủ Macro mà phải giàu Micro.
   - Canxi: Từ sữa, cá nhỏ ăn xương, tôm, rau dền.
   - Magie: Từ hạt điều, hạnh nhân, chuối, rau ngót.
   - Kali: Chuối, khoai lang, nước dừa.
   - Kẽm: Thịt bò, hàu, gan, lòng đỏ trứng.
   - Sắt: Thịt đỏ, rau muống, cải bó xôi.
5. CÁ NHÂN HÓA: Gọi tên người dùng thân mật.

ĐẶC BIỆT CHÚ Ý CÁC CHẾ ĐỘ ĂN:
- MEDITERRANEAN (Địa Trung Hải): Ưu tiên cá, dầu thực vật, rau quả.
- DASH: Giảm mặn, tăng Kali/Magie.
- MIND: Tốt cho não bộ.
- FASTING (16:8): Dồn năng lượng vào bữa chính.";

/// Diet-specific requirement appended to the menu prompt
fn diet_note(preference: DietPreference) -> &'static str {
    match preference {
        DietPreference::Mediterranean => {
            "Tuân thủ chế độ ĐỊA TRUNG HẢI: Dùng nhiều cá, dầu thực vật lành mạnh, ngũ cốc nguyên cám."
        }
        DietPreference::Dash => "Tuân thủ chế độ DASH: Nhạt (ít muối), giàu Kali/Magie.",
        DietPreference::Mind => {
            "Tuân thủ chế độ MIND (Tốt cho não): Ưu tiên rau lá xanh đậm, các loại hạt, cá béo."
        }
        DietPreference::Fasting => {
            "Tuân thủ chế độ FASTING (Nhịn ăn gián đoạn): Dồn năng lượng vào Bữa Trưa và Tối."
        }
        DietPreference::LowCarb => "Hạn chế tinh bột, ưu tiên rau xanh và đạm/béo tốt.",
        DietPreference::HighProtein => "Tối ưu cho việc xây dựng cơ bắp.",
        DietPreference::Balanced => "Cân bằng dinh dưỡng, đa dạng thực phẩm.",
    }
}

/// Diet emphasis used when proposing dish alternatives
fn diet_focus(preference: DietPreference) -> &'static str {
    match preference {
        DietPreference::Mediterranean => "chuẩn Địa Trung Hải",
        DietPreference::Dash => "ít muối",
        DietPreference::Mind => "tốt cho não bộ",
        DietPreference::Fasting => "mật độ dinh dưỡng cao",
        _ => "cân bằng dinh dưỡng",
    }
}

// ============================================================================
// Response Schemas
// ============================================================================

fn food_item_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "Tên nguyên liệu/món ăn (vd: Bún, Thịt bò, Nước dùng)" },
            "quantity": { "type": "STRING", "description": "Định lượng (vd: 150g, 1 bát)" },
            "calories": { "type": "NUMBER" },
            "protein": { "type": "NUMBER", "description": "Gam đạm" },
            "carbs": { "type": "NUMBER", "description": "Gam tinh bột" },
            "fat": { "type": "NUMBER", "description": "Gam chất béo" }
        },
        "required": ["name", "quantity", "calories", "protein", "carbs", "fat"]
    })
}

fn meal_detail_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "mainDishName": { "type": "STRING", "description": "Tên món chính (vd: Phở Bò Tái)" },
            "items": { "type": "ARRAY", "items": food_item_schema() },
            "totalCalories": { "type": "NUMBER" },
            "totalProtein": { "type": "NUMBER" },
            "totalCarbs": { "type": "NUMBER" },
            "totalFat": { "type": "NUMBER" },
            "micronutrients": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Danh sách các vi chất quan trọng có trong bữa này. BẮT BUỘC PHẢI CÓ 3-5 chất từ danh sách: Canxi, Magie, Kali, Kẽm, Sắt."
            }
        },
        "required": ["mainDishName", "items", "totalCalories", "totalProtein", "totalCarbs", "totalFat", "micronutrients"]
    })
}

fn advice_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING", "description": "Lời khuyên tổng quan ngắn gọn, súc tích, mang tính động viên." },
            "healthTips": { "type": "ARRAY", "items": { "type": "STRING" }, "description": "3-4 đầu dòng quan trọng nhất cần ghi nhớ (ngắn gọn)." },
            "micronutrientFocus": { "type": "STRING", "description": "Giải thích về các vi chất đã bổ sung trong thực đơn và tác dụng của chúng." },
            "diningSchedule": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "time": { "type": "STRING", "description": "Khung giờ (vd: 07:00 - 07:30)" },
                        "activity": { "type": "STRING", "description": "Hoạt động ăn uống/sinh hoạt gợi ý" }
                    },
                    "required": ["time", "activity"]
                },
                "description": "Lịch trình ăn uống gợi ý trong ngày."
            }
        },
        "required": ["summary", "healthTips", "micronutrientFocus", "diningSchedule"]
    })
}

fn daily_menu_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "breakfast": meal_detail_schema(),
            "morningSnack": meal_detail_schema(),
            "lunch": meal_detail_schema(),
            "afternoonSnack": meal_detail_schema(),
            "dinner": meal_detail_schema(),
            "totalDailyCalories": { "type": "NUMBER" },
            "totalDailyProtein": { "type": "NUMBER" },
            "totalDailyCarbs": { "type": "NUMBER" },
            "totalDailyFat": { "type": "NUMBER" },
            "advice": advice_schema()
        },
        "required": ["breakfast", "morningSnack", "lunch", "afternoonSnack", "dinner", "totalDailyCalories", "totalDailyProtein", "totalDailyCarbs", "totalDailyFat", "advice"]
    })
}

fn alternatives_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "alternatives": {
                "type": "ARRAY",
                "items": meal_detail_schema(),
                "description": "Danh sách 3 lựa chọn thay thế"
            }
        },
        "required": ["alternatives"]
    })
}

#[derive(Debug, Deserialize)]
struct AlternativesPayload {
    alternatives: Vec<MealDetail>,
}

// ============================================================================
// Service
// ============================================================================

/// Meal-plan generation service
#[derive(Debug)]
pub struct MenuService {
    llm: GeminiClient,
}

impl MenuService {
    /// Create the service around a configured Gemini client
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }

    /// Whether the underlying AI client has credentials
    pub fn is_configured(&self) -> bool {
        self.llm.is_configured()
    }

    fn menu_prompt(request: &MealPlanRequest) -> String {
        let name = if request.name.trim().is_empty() {
            "Bạn"
        } else {
            request.name.trim()
        };
        let health = if request.health_context.trim().is_empty() {
            "Sức khỏe bình thường."
        } else {
            request.health_context.trim()
        };

        format!(
            "Khách hàng: {name}.\n\
             Lập thực đơn khoa học 1 ngày cho người Việt nặng {weight}kg.\n\
             Tổng năng lượng mục tiêu: {calories} kcal.\n\
             Chiến lược chính: {goal}.\n\
             Phong cách ăn uống: {diet} (Yêu cầu: {note}).\n\n\
             THÔNG TIN SỨC KHỎE:\n{health}\n\n\
             MỤC TIÊU MACRO (GRAMS):\n\
             - Protein: ~{protein}g\n\
             - Carbs: ~{carbs}g\n\
             - Fat: ~{fat}g\n\n\
             YÊU CẦU CỤ THỂ:\n\
             1. Đa dạng hóa nhưng THỰC TẾ. Bữa sáng phải Nhanh - Gọn - Lẹ (Ưu tiên món Việt dễ làm).\n\
             2. TỐI ƯU HÓA VI CHẤT: Trong thực đơn phải xuất hiện các nguyên liệu giàu Canxi, Magie, Kali, Kẽm, Sắt.\n\
             3. Nguyên liệu dễ mua ở chợ Việt Nam.\n\
             4. Tính toán chính xác Macro từng món.\n\
             5. Đưa ra lời khuyên có cấu trúc, bao gồm lịch trình ăn uống gợi ý.\n\n\
             Cấu trúc 5 bữa (Sáng, Phụ sáng, Trưa, Phụ chiều, Tối).",
            name = name,
            weight = request.weight_kg,
            calories = request.target_calories,
            goal = request.goal_label,
            diet = request.diet_preference.tag(),
            note = diet_note(request.diet_preference),
            health = health,
            protein = request.macros.protein_grams,
            carbs = request.macros.carb_grams,
            fat = request.macros.fat_grams,
        )
    }

    fn alternatives_prompt(
        slot: MealSlot,
        current_dish: &str,
        target_calories: u32,
        preference: DietPreference,
    ) -> String {
        format!(
            "Bữa hiện tại: \"{current_dish}\" ({meal}).\n\
             Yêu cầu: 3 món thay thế (~{target_calories} kcal) tuân thủ chế độ {diet}.\n\
             Tiêu chí: {focus}. Ưu tiên món Việt dễ nấu, nguyên liệu phổ thông, giàu vi chất (Kẽm, Sắt, Canxi).\n\n\
             Phân loại:\n\
             1. Món truyền thống (Healthy version).\n\
             2. Món chế biến nhanh (Dưới 15p).\n\
             3. Món thanh đạm (Ít gia vị).",
            meal = slot.label(),
            diet = preference.tag(),
            focus = diet_focus(preference),
        )
    }

    /// Generate a full day's menu for the computed targets
    #[instrument(skip(self, request), fields(calories = request.target_calories, diet = request.diet_preference.tag()))]
    pub async fn generate_daily_menu(
        &self,
        request: &MealPlanRequest,
    ) -> Result<DailyMenu, ApiError> {
        let prompt = Self::menu_prompt(request);
        let schema = daily_menu_schema();

        let text = self
            .llm
            .generate_json(SYSTEM_INSTRUCTION, &prompt, &schema)
            .await?;

        let menu: DailyMenu = serde_json::from_str(&text)
            .map_err(|e| ApiError::Upstream(format!("AI returned a malformed menu: {e}")))?;

        info!(
            calories = menu.total_daily_calories,
            "Generated daily menu"
        );
        Ok(menu)
    }

    /// Ask for three alternative dishes for one meal slot
    #[instrument(skip(self, current_dish))]
    pub async fn dish_alternatives(
        &self,
        slot: MealSlot,
        current_dish: &str,
        target_calories: u32,
        preference: DietPreference,
    ) -> Result<Vec<MealDetail>, ApiError> {
        let prompt = Self::alternatives_prompt(slot, current_dish, target_calories, preference);
        let schema = alternatives_schema();

        let text = self
            .llm
            .generate_json(SYSTEM_INSTRUCTION, &prompt, &schema)
            .await?;

        let payload: AlternativesPayload = serde_json::from_str(&text)
            .map_err(|e| ApiError::Upstream(format!("AI returned malformed alternatives: {e}")))?;

        Ok(payload.alternatives)
    }
}
