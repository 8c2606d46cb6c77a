//! Domain models for AgentForge.
//!
//! Canonical definitions for the core entities:
//! - `AgentSpec`: Immutable, invariant-respecting description of an agent
//! - `ValidationFailure`: Aggregated constraint violations from normalization
//! - Identifier and fingerprint helpers

pub mod agent_spec;
pub mod digest;
pub mod error;
pub mod ident;

// Re-export main types and errors
pub use agent_spec::{
    AdvancedOptions, AgentPersonality, AgentSpec, DataSource, EdgeCase, Formality, InputField,
    InputFieldType, Integration, ModelPreference, OutputField, Verbosity,
};
pub use error::{AgentForgeError, Result, ValidationFailure, Violation};
