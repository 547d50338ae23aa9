//! Skill-gap data model: one entry per competency, produced per analysis call.
//! No identity beyond `name`; nothing persists across calls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Domain,
}

/// Current vs target proficiency in one named competency.
/// `level` and `target_level` are 0–100; range is enforced by
/// `advisor::validation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: f64,
    pub target_level: f64,
    pub category: SkillCategory,
}

impl Skill {
    /// The numeric gap between target and current proficiency.
    /// Negative when the user already exceeds the target.
    pub fn gap(&self) -> f64 {
        self.target_level - self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_deserializes_camel_case_target_level() {
        let skill: Skill = serde_json::from_str(
            r#"{"name": "SQL", "level": 35, "targetLevel": 80, "category": "technical"}"#,
        )
        .unwrap();
        assert_eq!(skill.name, "SQL");
        assert_eq!(skill.category, SkillCategory::Technical);
        assert!((skill.gap() - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gap_can_be_negative() {
        let skill = Skill {
            name: "Excel".to_string(),
            level: 90.0,
            target_level: 60.0,
            category: SkillCategory::Domain,
        };
        assert!((skill.gap() + 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let result = serde_json::from_str::<Skill>(
            r#"{"name": "SQL", "level": 35, "targetLevel": 80, "category": "mystical"}"#,
        );
        assert!(result.is_err());
    }
}
