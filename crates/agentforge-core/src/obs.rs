//! Structured observability hooks for spec normalization.
//!
//! Events are emitted at `info!`/`debug!` level through `tracing`; configure
//! output via [`crate::telemetry::init_tracing`] and the `RUST_LOG` env var.

use tracing::{debug, info};

/// Emit event: a document passed normalization.
pub fn emit_spec_normalized(spec_id: &str, inputs: usize, outputs: usize, complexity: u8) {
    info!(
        event = "spec.normalized",
        spec_id = %spec_id,
        inputs = inputs,
        outputs = outputs,
        complexity = complexity,
    );
}

/// Emit event: a document was rejected with the given violation count.
pub fn emit_spec_rejected(violation_count: usize) {
    info!(event = "spec.rejected", violations = violation_count);
}

/// Emit event: a malformed or missing id was replaced.
pub fn emit_id_regenerated(new_id: &str) {
    debug!(event = "spec.id_regenerated", new_id = %new_id);
}
