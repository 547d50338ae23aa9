//! Declarative response schemas for structured generation.
//!
//! The Gemini API accepts a `responseSchema` inside `generationConfig` when
//! `responseMimeType` is `application/json`. These types serialize to that
//! wire format (type names are SCREAMING CASE on the wire: `OBJECT`, `ARRAY`, ...).

use std::collections::BTreeMap;

use serde::Serialize;

/// Wire-level schema type tags understood by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Array,
    Object,
}

/// A JSON response schema node.
///
/// Built with the constructors below rather than literal structs; `BTreeMap`
/// keeps property order stable so serialized schemas are deterministic.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    fn leaf(schema_type: SchemaType) -> Self {
        Schema {
            schema_type,
            description: None,
            properties: None,
            items: None,
            required: None,
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn array(items: Schema) -> Self {
        Schema {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    pub fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        Schema {
            properties: Some(
                properties
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
            required: Some(required.iter().map(|s| s.to_string()).collect()),
            ..Self::leaf(SchemaType::Object)
        }
    }

    /// Attaches a semantic hint (the provider treats `description` as guidance,
    /// e.g. enum domains like "high, medium, or low").
    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
