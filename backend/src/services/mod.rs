//! Business logic services

pub mod menu;
pub mod plan;

pub use menu::MenuService;
pub use plan::PlanService;
