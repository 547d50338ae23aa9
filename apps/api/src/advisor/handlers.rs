//! Axum route handlers for the advisory API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::advisor::coach::get_career_advice;
use crate::advisor::pathway::generate_career_pathway;
use crate::advisor::skill_gap::analyze_skill_gap;
use crate::errors::AppError;
use crate::models::chat::{ChatMessage, ChatTurn};
use crate::models::pathway::CareerPathway;
use crate::models::skill::Skill;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PathwayRequest {
    pub goal: String,
    #[serde(default)]
    pub background: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize)]
pub struct CoachRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CoachResponse {
    pub reply: ChatMessage,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/pathways
///
/// Generates a personalized career pathway for the given goal and background.
pub async fn handle_generate_pathway(
    State(state): State<AppState>,
    Json(request): Json<PathwayRequest>,
) -> Result<Json<CareerPathway>, AppError> {
    if request.goal.trim().is_empty() {
        return Err(AppError::Validation("goal cannot be empty".to_string()));
    }

    let pathway = generate_career_pathway(&state.llm, &request.goal, &request.background).await?;

    Ok(Json(pathway))
}

/// POST /api/v1/skills/gap
///
/// Scores current vs target proficiency for the skills the target role needs.
/// `currentSkills` may be empty; a blank slate is a valid starting point.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    if request.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "targetRole cannot be empty".to_string(),
        ));
    }

    let skills = analyze_skill_gap(&state.llm, &request.current_skills, &request.target_role).await?;

    Ok(Json(SkillGapResponse { skills }))
}

/// POST /api/v1/coach/messages
///
/// Sends one message to the coach. A blank message never reaches the model;
/// the caller-side no-op is enforced here, before any provider call.
pub async fn handle_coach_message(
    State(state): State<AppState>,
    Json(request): Json<CoachRequest>,
) -> Result<Json<CoachResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let text = get_career_advice(&state.llm, &request.history, &request.message).await?;

    Ok(Json(CoachResponse {
        reply: ChatMessage::from_model(text),
    }))
}
