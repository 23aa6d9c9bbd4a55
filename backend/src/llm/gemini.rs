//! Google Gemini client for schema-constrained JSON generation
//!
//! Every call sets `response_mime_type: application/json` plus a response
//! schema, so the model's reply parses directly into the menu types without
//! free-text scraping.
//!
//! The API key comes from configuration (`NP__GEMINI__API_KEY`) and is held
//! in a [`SecretString`]; it is appended to the request URL as Google
//! requires but never logged.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, instrument};

use crate::config::GeminiConfig;

/// Errors from the Gemini client
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("AI client has no API key configured")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse Gemini response: {0}")]
    Parse(String),

    #[error("No content in Gemini response")]
    Empty,
}

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerationConfig<'a>,
}

/// Content block: a role plus text parts
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<TextPart>,
}

/// Text part of a content block
#[derive(Debug, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

/// Generation configuration forcing a JSON reply
#[derive(Debug, Serialize)]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// API error body from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Google Gemini `generateContent` client
pub struct GeminiClient {
    api_key: SecretString,
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from configuration
    pub fn from_config(config: &GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            api_key: SecretString::new(config.api_key.clone()),
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Whether a non-empty API key is present
    pub fn is_configured(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose_secret()
        )
    }

    /// Request a JSON document matching `schema` from the model
    ///
    /// Returns the raw JSON text of the first candidate; callers deserialize
    /// it into their own types.
    #[instrument(skip(self, system_instruction, prompt, schema), fields(model = %self.model))]
    pub async fn generate_json(
        &self,
        system_instruction: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, LlmError> {
        if !self.is_configured() {
            return Err(LlmError::NotConfigured);
        }

        let request = GeminiRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![TextPart {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Some(Content {
                role: None,
                parts: vec![TextPart {
                    text: system_instruction.to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
                temperature: None,
            },
        };

        debug!("Sending structured generation request to Gemini");

        let response = self
            .client
            .post(self.build_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| LlmError::Http(e.to_string()))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        if let Some(err) = gemini_response.error {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: err.message,
            });
        }

        let text = gemini_response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(LlmError::Empty)?;

        debug!("Received structured Gemini response");
        Ok(text)
    }

    /// Map API error status to appropriate error type
    ///
    /// For rate limit (429) errors, returns a user-friendly message that
    /// exposes the retry hint from Gemini.
    fn map_api_error(status: u16, response_text: &str) -> LlmError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_string(), |e| e.message);

        match status {
            429 => LlmError::RateLimited(Self::extract_quota_message(&message)),
            _ => LlmError::Api { status, message },
        }
    }

    /// Extract a user-friendly quota message from a Gemini rate-limit error
    ///
    /// Gemini embeds hints like "Please retry in 6.406453963s."
    fn extract_quota_message(message: &str) -> String {
        if let Some(retry_pos) = message.find("Please retry in ") {
            let after_prefix = &message[retry_pos + 16..];
            if let Some(s_pos) = after_prefix.find('s') {
                if let Ok(seconds) = after_prefix[..s_pos].parse::<f64>() {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "AI đang bận. Vui lòng thử lại sau {seconds_int} giây."
                    );
                }
            }
        }
        "AI đang bận. Vui lòng thử lại!".to_string()
    }
}

impl Debug for GeminiClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
