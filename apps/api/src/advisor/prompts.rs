//! Prompt templates and response schemas for the advisory operations.

use crate::llm_client::schema::Schema;

/// Pathway generation prompt. Replace `{goal}` and `{background}` before sending.
pub const PATHWAY_PROMPT_TEMPLATE: &str = "Generate a personalized career learning pathway \
    for a user wanting to become a {goal}. User background: {background}.";

/// Skill-gap analysis prompt. Replace `{target_role}` and `{current_skills}`
/// (comma-joined; may be blank) before sending.
pub const SKILL_GAP_PROMPT_TEMPLATE: &str = "Analyze the skill gap for a {target_role} \
    based on these current skills: {current_skills}. \
    Return a list of skills with levels (0-100) and target levels.";

/// Persona for the coach chat. Free text, no response schema.
pub const COACH_SYSTEM: &str = "You are an expert career coach and industry analyst. \
    Provide encouraging, data-driven advice to help users bridge the gap between \
    education and employment.";

/// Response schema for pathway generation: one CareerPathway object with a
/// module array. Enum domains ride in `description` hints; the provider treats
/// them as guidance, so typed deserialization remains the enforcement point.
pub fn pathway_schema() -> Schema {
    let module = Schema::object(
        vec![
            ("id", Schema::string()),
            ("title", Schema::string()),
            ("description", Schema::string()),
            ("duration", Schema::string()),
            (
                "type",
                Schema::string().describe("course, project, or certification"),
            ),
            ("skills", Schema::array(Schema::string())),
            ("status", Schema::string().describe("not_started")),
        ],
        &[
            "id",
            "title",
            "description",
            "duration",
            "type",
            "skills",
            "status",
        ],
    );

    Schema::object(
        vec![
            ("id", Schema::string()),
            ("goal", Schema::string()),
            (
                "marketDemand",
                Schema::string().describe("high, medium, or low"),
            ),
            ("estimatedSalary", Schema::string()),
            ("matchPercentage", Schema::number()),
            ("modules", Schema::array(module)),
        ],
        &[
            "id",
            "goal",
            "marketDemand",
            "estimatedSalary",
            "matchPercentage",
            "modules",
        ],
    )
}

/// Response schema for skill-gap analysis: an array of Skill objects.
pub fn skill_gap_schema() -> Schema {
    Schema::array(Schema::object(
        vec![
            ("name", Schema::string()),
            ("level", Schema::number()),
            ("targetLevel", Schema::number()),
            (
                "category",
                Schema::string().describe("technical, soft, or domain"),
            ),
        ],
        &["name", "level", "targetLevel", "category"],
    ))
}
