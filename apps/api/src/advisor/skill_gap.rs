//! Skill-gap analysis: one structured call returning a list of `Skill`s.

use tracing::info;

use crate::advisor::prompts::{skill_gap_schema, SKILL_GAP_PROMPT_TEMPLATE};
use crate::advisor::validation::validate_skills;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{FLASH_MODEL, GeminiClient, LlmError};
use crate::models::skill::Skill;

const RATE_LIMIT_MESSAGE: &str =
    "The AI service is currently busy (rate limit). Please wait a moment and try again.";
const EMPTY_MESSAGE: &str = "Skill gap analysis returned no data. Please try again.";
const GENERIC_MESSAGE: &str =
    "Skill gap analysis failed. Please verify the target role and try again.";

/// Analyzes the gap between `current_skills` (may be empty) and what
/// `target_role` demands. The returned order is the model's; nothing re-sorts.
pub async fn analyze_skill_gap(
    llm: &GeminiClient,
    current_skills: &[String],
    target_role: &str,
) -> Result<Vec<Skill>, AppError> {
    info!(
        "Analyzing skill gap for role '{target_role}' ({} current skills)",
        current_skills.len()
    );

    let prompt = SKILL_GAP_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{current_skills}", &current_skills.join(", "));

    let skills: Vec<Skill> = llm
        .generate_json(FLASH_MODEL, &prompt, JSON_ONLY_SYSTEM, skill_gap_schema())
        .await
        .map_err(classify)?;

    validate_skills(&skills).map_err(|violations| {
        AppError::Parse(format!(
            "Skill gap analysis violated the response schema: {}",
            violations.join("; ")
        ))
    })?;

    if let Some(widest) = skills.iter().max_by(|a, b| a.gap().total_cmp(&b.gap())) {
        info!(
            "Skill gap analyzed: {} skills, widest gap {} ({})",
            skills.len(),
            widest.gap(),
            widest.name
        );
    }

    Ok(skills)
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
            AppError::Parse(format!("Could not read the skill gap analysis: {e}"))
        }
        LlmError::Api { message, .. } if !message.trim().is_empty() => {
            AppError::Generation(format!("Skill gap analysis failed: {message}"))
        }
        LlmError::Api { .. } | LlmError::Http(_) => {
            AppError::Generation(GENERIC_MESSAGE.to_string())
        }
    }
}
