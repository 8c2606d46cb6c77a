//! Agent specification value objects.
//!
//! These are the strictly-typed outputs of the normalizer: once constructed
//! they satisfy every invariant simultaneously and are never mutated. Wire
//! field names are camelCase, matching the JSON contract with the upstream
//! generative-model response parser.

use serde::{Deserialize, Serialize};

use super::digest;
use super::error::Result;

/// Fixed vocabulary for input field types.
///
/// Unknown values coming from the model are coerced to [`InputFieldType::Text`]
/// rather than rejected — the model routinely invents plausible-but-unlisted
/// category names.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputFieldType {
    #[default]
    Text,
    Number,
    Boolean,
    File,
    Select,
}

impl InputFieldType {
    /// Map a raw string into the fixed set, falling back to `Text`.
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "text" => Self::Text,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "file" => Self::File,
            "select" => Self::Select,
            _ => Self::Text,
        }
    }
}

/// Formality register of the agent's replies. Defaults to `Neutral`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Casual,
    #[default]
    Neutral,
    Formal,
}

impl Formality {
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "casual" => Self::Casual,
            "neutral" => Self::Neutral,
            "formal" => Self::Formal,
            _ => Self::Neutral,
        }
    }
}

/// Verbosity of the agent's replies. Defaults to `Balanced`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Concise,
    #[default]
    Balanced,
    Detailed,
}

impl Verbosity {
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "concise" => Self::Concise,
            "balanced" => Self::Balanced,
            "detailed" => Self::Detailed,
            _ => Self::Balanced,
        }
    }
}

/// Execution backend selection.
///
/// Unlike the coercible enums above, an out-of-vocabulary value here is a
/// hard failure: this field selects a concrete downstream backend and a
/// silently wrong choice is unacceptable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModelPreference {
    Flash,
    Pro,
}

impl ModelPreference {
    /// Strict parse — `None` means the value is outside the vocabulary.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "flash" => Some(Self::Flash),
            "pro" => Some(Self::Pro),
            _ => None,
        }
    }
}

/// A single declared input of the agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    /// Non-empty field name.
    pub name: String,

    /// Type from the fixed vocabulary (unknowns coerced to `text`).
    #[serde(rename = "type")]
    pub field_type: InputFieldType,

    /// Whether the caller must supply this field. Strictly boolean on the
    /// wire; truthy/falsy stand-ins are rejected.
    pub required: bool,

    /// Free text, may be empty.
    pub description: String,

    /// Optional validation expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
}

/// A single declared output of the agent.
///
/// `field_type` is deliberately open vocabulary (non-empty free text), not an
/// enumeration — output types are more varied than input types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutputField {
    /// Non-empty field name.
    pub name: String,

    /// Non-empty free-text type.
    #[serde(rename = "type")]
    pub field_type: String,

    /// Free text, may be empty.
    pub description: String,
}

/// An external data source the agent reads from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataSource {
    pub name: String,

    #[serde(rename = "type")]
    pub source_type: String,

    /// Arbitrary key/value configuration. Non-object wire values become an
    /// empty map.
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// A third-party integration the agent calls out to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub name: String,

    #[serde(rename = "type")]
    pub integration_type: String,

    /// Free text; no enumeration constraint.
    pub auth_type: String,

    /// Same default-to-empty rule as [`DataSource::config`].
    pub config: serde_json::Map<String, serde_json::Value>,
}

/// A known failure mode and how the agent should handle it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCase {
    /// Non-empty description of the failure mode.
    pub description: String,

    /// Non-empty mitigation strategy.
    pub mitigation: String,
}

/// How the agent communicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AgentPersonality {
    /// Free text.
    pub tone: String,

    pub formality: Formality,

    pub verbosity: Verbosity,
}

/// Optional tuning block. Every field inside is itself optional, but
/// present-and-invalid values are hard failures (no silent defaults here).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_preference: Option<ModelPreference>,

    /// Strictly positive, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_response_time: Option<f64>,

    /// Strictly positive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_constraint: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_requirements: Option<Vec<String>>,
}

/// The normalized description of a user-requested agent.
///
/// Constructed once per normalization call by [`crate::normalizer::normalize`]
/// and immutable thereafter. Every invariant holds simultaneously: canonical
/// id, non-empty purpose, at least one input and one output requirement, and
/// a complexity score in `[1, 10]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentSpec {
    /// Canonical 8-4-4-4-12 hex identifier. Preserved verbatim when the
    /// source id already matched the shape, freshly generated otherwise.
    pub id: String,

    /// Non-empty statement of what the agent is for.
    pub core_purpose: String,

    /// At least one element.
    pub input_requirements: Vec<InputField>,

    /// At least one element.
    pub output_requirements: Vec<OutputField>,

    pub data_sources: Vec<DataSource>,

    pub integrations: Vec<Integration>,

    pub edge_cases: Vec<EdgeCase>,

    pub personality: AgentPersonality,

    /// Free text, may be empty.
    pub communication_style: String,

    /// Integer in `[1, 10]`, matching the range the complexity-estimation
    /// service produces.
    pub complexity_score: u8,

    /// Labels for fields the model inferred rather than the user stated.
    pub inferred_fields: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<AdvancedOptions>,
}

impl AgentSpec {
    /// SHA-256 hex fingerprint of the canonical JSON serialization.
    ///
    /// Stable across field ordering and float/integer encoding differences;
    /// downstream registries use it to deduplicate identical generations.
    pub fn fingerprint(&self) -> Result<String> {
        let json = serde_json::to_value(self)?;
        digest::compute_fingerprint(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_spec() -> AgentSpec {
        AgentSpec {
            id: "a1b2c3d4-e5f6-7890-abcd-ef0123456789".to_string(),
            core_purpose: "Summarize incoming support tickets".to_string(),
            input_requirements: vec![InputField {
                name: "ticket".to_string(),
                field_type: InputFieldType::Text,
                required: true,
                description: "Raw ticket body".to_string(),
                validation: None,
            }],
            output_requirements: vec![OutputField {
                name: "summary".to_string(),
                field_type: "markdown".to_string(),
                description: String::new(),
            }],
            data_sources: Vec::new(),
            integrations: Vec::new(),
            edge_cases: Vec::new(),
            personality: AgentPersonality {
                tone: "helpful".to_string(),
                formality: Formality::Neutral,
                verbosity: Verbosity::Balanced,
            },
            communication_style: "email".to_string(),
            complexity_score: 4,
            inferred_fields: Vec::new(),
            advanced_options: None,
        }
    }

    #[test]
    fn test_agent_spec_serde_roundtrip() {
        let spec = sample_spec();
        let json = serde_json::to_string(&spec).expect("serialize");
        let deserialized: AgentSpec = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(spec, deserialized);
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let spec = sample_spec();
        let value = serde_json::to_value(&spec).expect("to_value");
        let obj = value.as_object().expect("object");
        assert!(obj.contains_key("corePurpose"));
        assert!(obj.contains_key("inputRequirements"));
        assert!(obj.contains_key("complexityScore"));
        assert_eq!(obj["inputRequirements"][0]["type"], "text");
        assert_eq!(obj["outputRequirements"][0]["type"], "markdown");
    }

    #[test]
    fn test_absent_advanced_options_omitted_on_wire() {
        let value = serde_json::to_value(sample_spec()).expect("to_value");
        assert!(value.get("advancedOptions").is_none());
    }

    #[test]
    fn test_input_field_type_coerce_known_values() {
        assert_eq!(InputFieldType::coerce("number"), InputFieldType::Number);
        assert_eq!(InputFieldType::coerce("select"), InputFieldType::Select);
        assert_eq!(InputFieldType::coerce("file"), InputFieldType::File);
    }

    #[test]
    fn test_input_field_type_coerce_unknown_falls_back_to_text() {
        assert_eq!(InputFieldType::coerce("mailbox"), InputFieldType::Text);
        assert_eq!(InputFieldType::coerce(""), InputFieldType::Text);
        assert_eq!(InputFieldType::coerce("TEXT"), InputFieldType::Text);
    }

    #[test]
    fn test_formality_and_verbosity_coerce_defaults() {
        assert_eq!(Formality::coerce("formal"), Formality::Formal);
        assert_eq!(Formality::coerce("chill"), Formality::Neutral);
        assert_eq!(Verbosity::coerce("detailed"), Verbosity::Detailed);
        assert_eq!(Verbosity::coerce("short"), Verbosity::Balanced);
    }

    #[test]
    fn test_model_preference_strict_parse() {
        assert_eq!(ModelPreference::parse("flash"), Some(ModelPreference::Flash));
        assert_eq!(ModelPreference::parse("pro"), Some(ModelPreference::Pro));
        assert_eq!(ModelPreference::parse("ultra"), None);
        assert_eq!(ModelPreference::parse("Flash"), None);
    }

    #[test]
    fn test_fingerprint_stable_and_hex() {
        let spec = sample_spec();
        let fp1 = spec.fingerprint().expect("fingerprint");
        let fp2 = spec.fingerprint().expect("fingerprint again");
        assert_eq!(fp1, fp2);
        assert_eq!(fp1.len(), 64);
        assert!(fp1.chars().all(|c: char| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_changes_on_field_delta() {
        let spec = sample_spec();
        let mut modified = spec.clone();
        modified.core_purpose = "Summarize incoming sales leads".to_string();
        assert_ne!(
            spec.fingerprint().expect("fingerprint"),
            modified.fingerprint().expect("fingerprint modified"),
        );
    }
}
