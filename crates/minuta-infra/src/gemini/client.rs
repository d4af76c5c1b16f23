//! GeminiProvider -- concrete [`LlmProvider`] implementation for the
//! Google Generative Language API.
//!
//! Sends requests to the `generateContent` endpoint with the API key in
//! the `x-goog-api-key` header. The key is wrapped in
//! [`secrecy::SecretString`] and is never logged or included in `Debug`
//! output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use minuta_core::llm::LlmProvider;
use minuta_types::credential::ApiCredential;
use minuta_types::error::GenerateError;
use minuta_types::llm::{CompletionRequest, CompletionResponse, MessageRole};

use super::types::{
    GeminiContent, GeminiErrorResponse, GeminiRequest, GeminiResponse, GenerationConfig,
    ThinkingConfig,
};

/// Gemini LLM provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the HTTP request header. It never appears in Debug
/// output or tracing logs.
#[derive(Debug)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl GeminiProvider {
    const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Create a new Gemini provider with a resolved key.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(300)) // 5 min timeout for long drafts
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a provider from a credential-resolution outcome.
    ///
    /// `Missing` and `Invalid` both classify as
    /// [`GenerateError::NotConfigured`] before any network call.
    pub fn from_credential(credential: ApiCredential) -> Result<Self, GenerateError> {
        match credential {
            ApiCredential::Present(token) => Ok(Self::new(token)),
            ApiCredential::Missing | ApiCredential::Invalid => Err(GenerateError::NotConfigured),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a model.
    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| {
                let role = match m.role {
                    MessageRole::User => "user",
                    MessageRole::Model => "model",
                };
                GeminiContent::text(Some(role), m.text.clone())
            })
            .collect();

        let generation_config =
            if request.temperature.is_some() || request.thinking_budget.is_some() {
                Some(GenerationConfig {
                    temperature: request.temperature,
                    thinking_config: request.thinking_budget.map(|thinking_budget| {
                        ThinkingConfig { thinking_budget }
                    }),
                })
            } else {
                None
            };

        GeminiRequest {
            contents,
            system_instruction: request
                .system_instruction
                .as_deref()
                .map(|text| GeminiContent::text(None, text)),
            generation_config,
        }
    }

    /// Classify a non-2xx response into the typed error taxonomy.
    ///
    /// Classification happens here, at the point of failure; callers
    /// match on the variant, never on message text.
    fn classify_failure(status: reqwest::StatusCode, body: &str) -> GenerateError {
        let api_error = serde_json::from_str::<GeminiErrorResponse>(body)
            .ok()
            .map(|e| e.error);
        let message = api_error
            .as_ref()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| body.to_string());

        match status.as_u16() {
            401 | 403 => GenerateError::AuthenticationRejected,
            400 => {
                // Gemini reports a bad key as 400 INVALID_ARGUMENT.
                if message.contains("API key") {
                    GenerateError::AuthenticationRejected
                } else {
                    GenerateError::InvalidRequest(message)
                }
            }
            _ => GenerateError::Transport(format!("HTTP {status}: {message}")),
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug to prevent
// accidental exposure of the API key.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, GenerateError> {
        let body = Self::to_gemini_request(request);
        let url = self.url(&request.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(status, &error_body));
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Transport(format!("failed to parse response: {e}")))?;

        let text = gemini_resp.text();
        if text.trim().is_empty() {
            return Err(GenerateError::EmptyResponse);
        }

        Ok(CompletionResponse {
            text,
            model: gemini_resp
                .model_version
                .unwrap_or_else(|| request.model.clone()),
        })
    }
}
