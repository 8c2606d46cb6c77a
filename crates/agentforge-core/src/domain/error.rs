//! Domain-level error taxonomy for AgentForge.

use serde::{Deserialize, Serialize};

/// A single violated constraint, addressed by its path in the source document.
///
/// `field_path` uses dotted/indexed notation matching the wire field names,
/// e.g. `inputRequirements[2].name` or `advancedOptions.modelPreference`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Violation {
    /// Where in the document the constraint was violated.
    pub field_path: String,

    /// Human-readable explanation, suitable for a retry-with-feedback prompt.
    pub reason: String,
}

impl Violation {
    pub fn new(field_path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            reason: reason.into(),
        }
    }
}

/// Aggregated outcome of a failed normalization pass.
///
/// Carries every hard-failure constraint violated across the whole document,
/// in document field order, so a caller can present a complete correction
/// list to the generative model in one round trip.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("agent spec rejected with {} violation(s)", .violations.len())]
pub struct ValidationFailure {
    /// Violations found (never empty for a returned failure).
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Whether a violation references the given field path.
    pub fn mentions(&self, field_path: &str) -> bool {
        self.violations.iter().any(|v| v.field_path == field_path)
    }
}

/// AgentForge domain errors.
#[derive(Debug, thiserror::Error)]
pub enum AgentForgeError {
    #[error("invalid agent spec: {0}")]
    InvalidAgentSpec(String),

    #[error("spec rejected: {0}")]
    Rejected(#[from] ValidationFailure),

    #[error("non-finite number not permitted in canonical JSON")]
    NonFiniteNumber,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for AgentForge domain operations.
pub type Result<T> = std::result::Result<T, AgentForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_display_counts_violations() {
        let failure = ValidationFailure::new(vec![
            Violation::new("corePurpose", "must be a non-empty string"),
            Violation::new("complexityScore", "must be an integer in [1, 10]"),
        ]);
        assert!(failure.to_string().contains("2 violation(s)"));
    }

    #[test]
    fn test_validation_failure_mentions_field_path() {
        let failure = ValidationFailure::new(vec![Violation::new(
            "inputRequirements",
            "must contain at least one element",
        )]);
        assert!(failure.mentions("inputRequirements"));
        assert!(!failure.mentions("outputRequirements"));
    }

    #[test]
    fn test_agentforge_error_display() {
        let err = AgentForgeError::InvalidAgentSpec("missing corePurpose".to_string());
        assert!(err.to_string().contains("invalid agent spec"));

        let err = AgentForgeError::Rejected(ValidationFailure::new(vec![Violation::new(
            "edgeCases[0].mitigation",
            "must be a non-empty string",
        )]));
        assert!(err.to_string().contains("spec rejected"));
    }

    #[test]
    fn test_violation_serde_roundtrip() {
        let violation = Violation::new("personality.formality", "unexpected value");
        let json = serde_json::to_string(&violation).expect("serialize");
        let deserialized: Violation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(violation, deserialized);
    }
}
