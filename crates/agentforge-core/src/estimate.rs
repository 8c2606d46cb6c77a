//! Boundary interface for the external complexity-estimation service.
//!
//! The core does not implement estimation; it only defines the contract it
//! consumes. Implementations live with the callers (build tooling, API
//! layer) and are handed in at the seam as a trait object or generic.

use serde::{Deserialize, Serialize};

/// Derived cost/time/token metrics for building and running an agent.
///
/// `score` shares the `[1, 10]` range enforced on
/// [`AgentSpec::complexity_score`](crate::domain::AgentSpec).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityEstimate {
    /// Complexity score in `[1, 10]`.
    pub score: u8,

    /// Estimated wall-clock build time.
    pub build_time_minutes: f64,

    /// Estimated cost per agent execution.
    pub cost_per_execution: f64,

    /// API quota units consumed per execution.
    pub api_quota_usage: u32,

    /// Tokens consumed to build the agent.
    pub build_tokens: u64,

    /// One-off build cost.
    pub build_cost: f64,
}

/// Scores an agent description for complexity.
pub trait ComplexityEstimator {
    fn estimate(&self, description: &str) -> ComplexityEstimate;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-output estimator for exercising the boundary.
    struct FixedEstimator(ComplexityEstimate);

    impl ComplexityEstimator for FixedEstimator {
        fn estimate(&self, _description: &str) -> ComplexityEstimate {
            self.0.clone()
        }
    }

    #[test]
    fn test_estimator_trait_object_usable() {
        let estimator: Box<dyn ComplexityEstimator> = Box::new(FixedEstimator(ComplexityEstimate {
            score: 6,
            build_time_minutes: 45.0,
            cost_per_execution: 0.002,
            api_quota_usage: 3,
            build_tokens: 120_000,
            build_cost: 1.8,
        }));

        let estimate = estimator.estimate("Summarize emails");
        assert_eq!(estimate.score, 6);
        assert!((1..=10).contains(&estimate.score));
    }

    #[test]
    fn test_estimate_serde_roundtrip() {
        let estimate = ComplexityEstimate {
            score: 3,
            build_time_minutes: 12.5,
            cost_per_execution: 0.0007,
            api_quota_usage: 1,
            build_tokens: 40_000,
            build_cost: 0.6,
        };
        let json = serde_json::to_string(&estimate).expect("serialize");
        assert!(json.contains("buildTimeMinutes"));
        let deserialized: ComplexityEstimate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(estimate, deserialized);
    }
}
