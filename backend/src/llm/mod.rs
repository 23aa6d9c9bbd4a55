//! LLM integration layer
//!
//! The meal-plan generator is delegated to a hosted generative model; this
//! module owns the HTTP client and the error surface toward it.

mod gemini;

pub use gemini::{GeminiClient, LlmError};
