//! Application state management
//!
//! Shared state passed to all request handlers via Axum's state extraction.
//! Everything is created once at startup and cheap to clone (Arc'd).

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::GeminiClient;
use crate::services::MenuService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Meal-plan generation service (owns the Gemini client)
    pub menu: Arc<MenuService>,
}

impl AppState {
    /// Create a new application state
    ///
    /// The HTTP client inside the Gemini client is built once here and
    /// reused for every request.
    pub fn new(config: AppConfig) -> Self {
        let client = GeminiClient::from_config(&config.gemini);
        Self {
            config: Arc::new(config),
            menu: Arc::new(MenuService::new(client)),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clone_is_cheap() {
        let state = AppState::new(AppConfig::default());
        // Clone should be O(1) - just Arc increments
        let _cloned = state.clone();
    }
}
