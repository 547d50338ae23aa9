//! Career pathway data model: the structured output of pathway generation.
//!
//! Wire field names are camelCase (`marketDemand`, `matchPercentage`, ...),
//! matching what the response schema asks the model to emit. Enum domains are
//! enforced by typed deserialization: an out-of-domain string fails the parse.

use serde::{Deserialize, Serialize};

/// Labor-market demand for the target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketDemand {
    High,
    Medium,
    Low,
}

/// Kind of learning module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Course,
    Project,
    Certification,
}

/// Client-local module progress. The model always emits `not_started`;
/// transitions happen on the caller's side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// One step of a generated pathway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(rename = "type")]
    pub module_type: ModuleType,
    pub skills: Vec<String>,
    pub status: ModuleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

/// A generated, ordered set of learning modules aimed at a target role.
/// Immutable once returned; held by the caller for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathway {
    pub id: String,
    pub goal: String,
    pub market_demand: MarketDemand,
    pub estimated_salary: String,
    /// How well the user's background matches the goal. Must be in [0, 100];
    /// range is enforced by `advisor::validation`, not here.
    pub match_percentage: f64,
    pub modules: Vec<LearningModule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHWAY_JSON: &str = r#"{
        "id": "pw-1",
        "goal": "Senior Frontend Engineer",
        "marketDemand": "high",
        "estimatedSalary": "$120,000 - $160,000",
        "matchPercentage": 72,
        "modules": [
            {
                "id": "m-1",
                "title": "Advanced React Patterns",
                "description": "Hooks, suspense, and server components in depth.",
                "duration": "4 weeks",
                "type": "course",
                "skills": ["React", "TypeScript"],
                "status": "not_started"
            }
        ]
    }"#;

    #[test]
    fn test_pathway_deserializes_camel_case_wire_names() {
        let pathway: CareerPathway = serde_json::from_str(PATHWAY_JSON).unwrap();
        assert_eq!(pathway.goal, "Senior Frontend Engineer");
        assert_eq!(pathway.market_demand, MarketDemand::High);
        assert_eq!(pathway.estimated_salary, "$120,000 - $160,000");
        assert!((pathway.match_percentage - 72.0).abs() < f64::EPSILON);
        assert_eq!(pathway.modules.len(), 1);
        assert_eq!(pathway.modules[0].module_type, ModuleType::Course);
        assert_eq!(pathway.modules[0].status, ModuleStatus::NotStarted);
        assert!(pathway.modules[0].provider.is_none());
    }

    #[test]
    fn test_pathway_serializes_back_to_camel_case() {
        let pathway: CareerPathway = serde_json::from_str(PATHWAY_JSON).unwrap();
        let json = serde_json::to_value(&pathway).unwrap();
        assert_eq!(json["marketDemand"], "high");
        assert_eq!(json["matchPercentage"], 72.0);
        assert_eq!(json["modules"][0]["type"], "course");
        assert_eq!(json["modules"][0]["status"], "not_started");
    }

    #[test]
    fn test_unknown_market_demand_is_rejected() {
        let json = PATHWAY_JSON.replace(r#""high""#, r#""volcanic""#);
        assert!(serde_json::from_str::<CareerPathway>(&json).is_err());
    }

    #[test]
    fn test_unknown_module_type_is_rejected() {
        let json = PATHWAY_JSON.replace(r#""course""#, r#""bootcamp""#);
        assert!(serde_json::from_str::<CareerPathway>(&json).is_err());
    }

    #[test]
    fn test_missing_required_module_field_is_rejected() {
        let json = PATHWAY_JSON.replace(r#""duration": "4 weeks","#, "");
        assert!(serde_json::from_str::<CareerPathway>(&json).is_err());
    }

    #[test]
    fn test_optional_provider_roundtrips() {
        let json = PATHWAY_JSON.replace(
            r#""status": "not_started""#,
            r#""status": "not_started", "provider": "Coursera""#,
        );
        let pathway: CareerPathway = serde_json::from_str(&json).unwrap();
        assert_eq!(pathway.modules[0].provider.as_deref(), Some("Coursera"));
    }
}
