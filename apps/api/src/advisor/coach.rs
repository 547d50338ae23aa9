//! Career coach: the one conversational, free-text operation.
//!
//! Each call is a stateless exchange: the caller supplies prior turns and the
//! new message; history replays in original order with roles preserved.
//! Empty model text is a soft failure converted to a fixed fallback string;
//! transport/provider failures still surface as hard errors.

use tracing::info;

use crate::advisor::prompts::COACH_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::{Content, FLASH_MODEL, GeminiClient, LlmError};
use crate::models::chat::ChatTurn;

/// Returned instead of an error when the model produces no text.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't process that. Could you rephrase your question?";

const RATE_LIMIT_MESSAGE: &str =
    "Whoops! Too many messages. Please take a quick break and I'll be back in a second.";
const GENERIC_MESSAGE: &str =
    "I had trouble connecting to my knowledge base. Please check your connection and try again.";

/// Sends `message` to the coach persona and returns the reply text.
/// `message` must be non-empty; blank input is the caller's no-op, checked
/// at the handler boundary before this function runs.
pub async fn get_career_advice(
    llm: &GeminiClient,
    history: &[ChatTurn],
    message: &str,
) -> Result<String, AppError> {
    info!("Coach message received ({} prior turns)", history.len());

    let contents: Vec<Content> = history.iter().map(ChatTurn::to_content).collect();

    match llm.chat(FLASH_MODEL, COACH_SYSTEM, &contents, message).await {
        Ok(text) => Ok(text),
        // Soft failure: empty text becomes a placeholder reply, not an error.
        Err(LlmError::EmptyResponse) => Ok(FALLBACK_REPLY.to_string()),
        Err(LlmError::MissingApiKey) => Err(AppError::Configuration(
            "API key is missing. Please ensure your environment is configured correctly."
                .to_string(),
        )),
        Err(LlmError::RateLimited { .. }) => {
            Err(AppError::RateLimited(RATE_LIMIT_MESSAGE.to_string()))
        }
        Err(_) => Err(AppError::Advice(GENERIC_MESSAGE.to_string())),
    }
}
