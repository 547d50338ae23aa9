//! Pathway generation: one structured call returning a full `CareerPathway`.

use tracing::info;

use crate::advisor::prompts::{pathway_schema, PATHWAY_PROMPT_TEMPLATE};
use crate::advisor::validation::validate_pathway;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{GeminiClient, LlmError, PRO_MODEL};
use crate::models::pathway::CareerPathway;

const RATE_LIMIT_MESSAGE: &str =
    "The AI service is currently busy (rate limit). Please wait a moment and try again.";
const EMPTY_MESSAGE: &str = "The AI returned an empty response. Please try again.";
const GENERIC_MESSAGE: &str =
    "Failed to generate your personalized pathway. Please check your connection and try again.";

/// Generates a personalized learning pathway for `goal` given the user's
/// free-text `background`. Returns a fully-shaped pathway or a classified
/// error, never a partial object. No internal retry.
pub async fn generate_career_pathway(
    llm: &GeminiClient,
    goal: &str,
    background: &str,
) -> Result<CareerPathway, AppError> {
    info!("Generating career pathway for goal '{goal}'");

    let prompt = PATHWAY_PROMPT_TEMPLATE
        .replace("{goal}", goal)
        .replace("{background}", background);

    let pathway: CareerPathway = llm
        .generate_json(PRO_MODEL, &prompt, JSON_ONLY_SYSTEM, pathway_schema())
        .await
        .map_err(classify)?;

    validate_pathway(&pathway).map_err(|violations| {
        AppError::Parse(format!(
            "The generated pathway violated the response schema: {}",
            violations.join("; ")
        ))
    })?;

    info!(
        "Pathway generated: {} modules, match {}%",
        pathway.modules.len(),
        pathway.match_percentage
    );

    Ok(pathway)
}

fn classify(err: LlmError) -> AppError {
    match err {
        LlmError::MissingApiKey => AppError::Configuration(
            "API key is missing. Please ensure your environment is configured correctly."
                .to_string(),
        ),
        LlmError::RateLimited { .. } => AppError::RateLimited(RATE_LIMIT_MESSAGE.to_string()),
        LlmError::EmptyResponse => AppError::EmptyResponse(EMPTY_MESSAGE.to_string()),
        LlmError::Parse(e) => {
            AppError::Parse(format!("Could not read the generated pathway: {e}"))
        }
        LlmError::Api { message, .. } if !message.trim().is_empty() => {
            AppError::Generation(message)
        }
        LlmError::Api { .. } | LlmError::Http(_) => {
            AppError::Generation(GENERIC_MESSAGE.to_string())
        }
    }
}
