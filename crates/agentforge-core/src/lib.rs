//! AgentForge Core Library
//!
//! Turns JSON documents produced by a generative language model — describing
//! a user-requested agent — into strictly-typed, invariant-respecting
//! [`AgentSpec`] values, or a complete list of violated constraints.

pub mod domain;
pub mod estimate;
pub mod normalizer;
pub mod obs;
pub mod telemetry;

pub use domain::{
    AdvancedOptions, AgentForgeError, AgentPersonality, AgentSpec, DataSource, EdgeCase,
    Formality, InputField, InputFieldType, Integration, ModelPreference, OutputField, Result,
    ValidationFailure, Verbosity, Violation,
};

pub use estimate::{ComplexityEstimate, ComplexityEstimator};
pub use normalizer::normalize;
pub use telemetry::init_tracing;

/// AgentForge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
