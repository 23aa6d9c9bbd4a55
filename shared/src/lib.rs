//! NutriPlan Shared Library
//!
//! Pure calculation core and domain types shared by the backend and WASM
//! modules: energy expenditure (BMR/TDEE), health risk analysis, macro
//! target derivation and the daily menu model. No I/O lives here.

pub mod energy;
pub mod errors;
pub mod macro_targets;
pub mod menu;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use energy::*;
pub use errors::*;
pub use macro_targets::*;
pub use types::*;

// Menu types are exported under their module to keep the root namespace small
pub use menu::{DailyMenu, MealDetail, MealSlot};
