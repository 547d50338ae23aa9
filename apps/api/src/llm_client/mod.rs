/// LLM Client: the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the provider directly.
/// All model interactions MUST go through this module.
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;
pub mod schema;

use schema::Schema;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model for pathway generation, the highest-quality structured call.
pub const PRO_MODEL: &str = "gemini-2.5-pro";
/// Model for skill-gap analysis and coach chat.
pub const FLASH_MODEL: &str = "gemini-2.5-flash";

/// Errors raised by the client. Callers classify these into the
/// operation-specific taxonomy in `errors::AppError`.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key is missing or empty")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited by the model provider: {message}")]
    RateLimited { message: String },

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types: generateContent request/response envelope
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// One conversation turn on the wire. `role` is `user` or `model`;
/// the system instruction content carries no role.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: &str) -> Self {
        Self::turn("user", text)
    }

    pub fn model(text: &str) -> Self {
        Self::turn("model", text)
    }

    pub fn turn(role: &str, text: &str) -> Self {
        Content {
            role: Some(role.to_string()),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn system(text: &str) -> Self {
        Content {
            role: None,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Schema>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    /// Returns `None` when there is no candidate or the text is blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Error envelope returned by the provider on non-2xx responses.
#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Transport seam
// ────────────────────────────────────────────────────────────────────────────

/// Raw reply from the transport: HTTP status plus unparsed body.
/// Classification and JSON decoding happen in `GeminiClient`.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

/// The transport trait. Production uses `HttpTransport`; tests inject a
/// recording mock so failure classification can be exercised offline.
///
/// Carried in `GeminiClient` as `Arc<dyn GeminiTransport>`.
#[async_trait]
pub trait GeminiTransport: Send + Sync {
    async fn execute(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<TransportReply, LlmError>;
}

/// reqwest-backed transport against the hosted Gemini API.
pub struct HttpTransport {
    client: Client,
    api_key: String,
    base_url: String,
}

impl HttpTransport {
    fn new(api_key: String) -> Self {
        HttpTransport {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url: GEMINI_API_URL.to_string(),
        }
    }
}

#[async_trait]
impl GeminiTransport for HttpTransport {
    async fn execute(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<TransportReply, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportReply { status, body })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single Gemini client shared by all operations.
///
/// Construction validates the credential synchronously: a missing key fails
/// here, before any network activity. No retry is performed anywhere in this
/// client; retry is a caller decision.
#[derive(Clone)]
pub struct GeminiClient {
    transport: Arc<dyn GeminiTransport>,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }
        Ok(GeminiClient {
            transport: Arc::new(HttpTransport::new(api_key.to_string())),
        })
    }

    /// Test/alternate-backend constructor.
    #[allow(dead_code)]
    pub fn with_transport(transport: Arc<dyn GeminiTransport>) -> Self {
        GeminiClient { transport }
    }

    /// Sends one request and classifies the reply.
    /// 429 → `RateLimited`; other non-2xx → `Api`; 2xx → decoded envelope.
    async fn request(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let reply = self.transport.execute(model, request).await?;

        if reply.status == 429 {
            return Err(LlmError::RateLimited {
                message: provider_message(&reply.body),
            });
        }

        if !(200..300).contains(&reply.status) {
            return Err(LlmError::Api {
                status: reply.status,
                message: provider_message(&reply.body),
            });
        }

        let response: GenerateContentResponse = serde_json::from_str(&reply.body)?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={:?}, output_tokens={:?}",
                model, usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(response)
    }

    /// Structured generation: one user prompt constrained to a JSON response
    /// schema, deserialized into `T`.
    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        model: &str,
        prompt: &str,
        system: &str,
        response_schema: Schema,
    ) -> Result<T, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt)],
            system_instruction: Some(Content::system(system)),
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(response_schema),
            }),
        };

        let response = self.request(model, &request).await?;
        let text = response.text().ok_or(LlmError::EmptyResponse)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(&text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }

    /// Conversational exchange: replays `history` in order, appends the new
    /// user message, returns the model's free-text reply.
    /// Empty reply text surfaces as `EmptyResponse`; the caller decides
    /// whether that is a hard failure.
    pub async fn chat(
        &self,
        model: &str,
        system: &str,
        history: &[Content],
        message: &str,
    ) -> Result<String, LlmError> {
        let mut contents = history.to_vec();
        contents.push(Content::user(message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::system(system)),
            generation_config: None,
        };

        let response = self.request(model, &request).await?;
        response.text().ok_or(LlmError::EmptyResponse)
    }
}

/// Extracts the provider's error message from a failure body, falling back to
/// the raw body when it is not the documented error envelope.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<GeminiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
pub mod testing {
    //! Recording mock transport shared by unit tests across modules.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// Scripted transport: pops one canned reply per call and records every
    /// request body it sees.
    pub struct MockTransport {
        replies: Mutex<Vec<TransportReply>>,
        calls: AtomicUsize,
        pub requests: Mutex<Vec<serde_json::Value>>,
    }

    impl MockTransport {
        pub fn new(replies: Vec<TransportReply>) -> Self {
            MockTransport {
                replies: Mutex::new(replies),
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn replying(status: u16, body: &str) -> Self {
            Self::new(vec![TransportReply {
                status,
                body: body.to_string(),
            }])
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GeminiTransport for MockTransport {
        async fn execute(
            &self,
            _model: &str,
            request: &GenerateContentRequest,
        ) -> Result<TransportReply, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests
                .lock()
                .unwrap()
                .push(serde_json::to_value(request).unwrap());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .ok_or(LlmError::EmptyResponse)
        }
    }

    /// Wraps `text` in the generateContent success envelope.
    pub fn candidate_envelope(text: &str) -> String {
        serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": text}], "role": "model"},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 34}
        })
        .to_string()
    }
}
