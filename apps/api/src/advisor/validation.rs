//! Response hardening: explicit range checks on model output.
//!
//! Typed deserialization already rejects out-of-domain enum strings; this
//! layer covers what the type system cannot: numeric ranges. Out-of-range
//! values are rejected, never clamped.

use crate::models::pathway::CareerPathway;
use crate::models::skill::Skill;

fn in_range(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

/// Checks a generated pathway. Returns every violation found, not just the first.
pub fn validate_pathway(pathway: &CareerPathway) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();

    if !in_range(pathway.match_percentage) {
        violations.push(format!(
            "matchPercentage {} outside [0, 100]",
            pathway.match_percentage
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Checks every skill's `level` and `targetLevel`.
pub fn validate_skills(skills: &[Skill]) -> Result<(), Vec<String>> {
    let mut violations = Vec::new();

    for skill in skills {
        if !in_range(skill.level) {
            violations.push(format!(
                "skill '{}': level {} outside [0, 100]",
                skill.name, skill.level
            ));
        }
        if !in_range(skill.target_level) {
            violations.push(format!(
                "skill '{}': targetLevel {} outside [0, 100]",
                skill.name, skill.target_level
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pathway::MarketDemand;
    use crate::models::skill::SkillCategory;

    fn pathway_with_match(match_percentage: f64) -> CareerPathway {
        CareerPathway {
            id: "pw-1".to_string(),
            goal: "Data Analyst".to_string(),
            market_demand: MarketDemand::High,
            estimated_salary: "$90,000".to_string(),
            match_percentage,
            modules: vec![],
        }
    }

    fn skill(name: &str, level: f64, target_level: f64) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            target_level,
            category: SkillCategory::Technical,
        }
    }

    #[test]
    fn test_in_range_pathway_passes() {
        assert!(validate_pathway(&pathway_with_match(0.0)).is_ok());
        assert!(validate_pathway(&pathway_with_match(72.5)).is_ok());
        assert!(validate_pathway(&pathway_with_match(100.0)).is_ok());
    }

    #[test]
    fn test_out_of_range_match_percentage_is_rejected_not_clamped() {
        let err = validate_pathway(&pathway_with_match(150.0)).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err[0].contains("matchPercentage 150"));

        assert!(validate_pathway(&pathway_with_match(-1.0)).is_err());
    }

    #[test]
    fn test_non_finite_match_percentage_is_rejected() {
        assert!(validate_pathway(&pathway_with_match(f64::NAN)).is_err());
        assert!(validate_pathway(&pathway_with_match(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_valid_skills_pass() {
        let skills = vec![skill("SQL", 35.0, 80.0), skill("Communication", 0.0, 100.0)];
        assert!(validate_skills(&skills).is_ok());
    }

    #[test]
    fn test_each_skill_violation_is_reported() {
        let skills = vec![skill("SQL", -5.0, 80.0), skill("Python", 40.0, 120.0)];
        let err = validate_skills(&skills).unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err[0].contains("SQL"));
        assert!(err[1].contains("targetLevel 120"));
    }

    #[test]
    fn test_empty_skill_list_passes() {
        assert!(validate_skills(&[]).is_ok());
    }
}
