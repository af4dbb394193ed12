use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::error::ApiError;
use crate::core::http_client::build_http_client;
use crate::features::ai::dto::{Content, GenerateContentRequest, GenerateContentResponse, Part};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const UPSTREAM_BODY_SNIPPET_LEN: usize = 512;

pub struct GeminiClient {
    config: Arc<AppConfig>,
    http_client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, ApiError> {
        let http_client = build_http_client()
            .map_err(|err| ApiError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Asks the configured Gemini model for a single-word answer to
    /// `question`. One upstream call, no retry.
    pub async fn answer_one_word(&self, question: &str) -> Result<String, ApiError> {
        let Some(api_key) = self.config.gemini_api_key.as_deref() else {
            return Err(ApiError::service_unavailable(
                "Gemini API key not configured".to_string(),
            ));
        };

        let prompt = format!(
            "Answer this question with ONLY a single word (no punctuation, no explanation): {question}"
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!(
            "{GEMINI_API_BASE}/models/{}:generateContent?key={api_key}",
            self.config.gemini_model
        );

        tracing::debug!(model = %self.config.gemini_model, "sending question upstream");

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ApiError::upstream(format!("Gemini API error: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            let snippet = body.chars().take(UPSTREAM_BODY_SNIPPET_LEN).collect::<String>();
            tracing::warn!(status = %status, "Gemini request failed");
            return Err(ApiError::upstream(format!(
                "Gemini API error: {status}: {snippet}"
            )));
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|err| {
            ApiError::upstream(format!("Gemini API error: unreadable response: {err}"))
        })?;

        let text = payload
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or_else(|| {
                ApiError::upstream("Gemini API error: response contained no text".to_string())
            })?;

        Ok(first_word(text))
    }
}

// The model is instructed to answer in one word but does not always comply.
fn first_word(answer: &str) -> String {
    answer.split_whitespace().next().unwrap_or_default().to_string()
}
