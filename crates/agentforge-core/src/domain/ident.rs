//! Canonical agent identifier handling.
//!
//! Agent ids are 8-4-4-4-12 hexadecimal-grouped strings, matched
//! case-insensitively. A malformed or missing id is never grounds for
//! rejection — the normalizer replaces it with a freshly generated one,
//! discarding the malformed identity.

use std::sync::OnceLock;

use regex::Regex;
use uuid::Uuid;

static CANONICAL_ID: OnceLock<Regex> = OnceLock::new();

fn canonical_id_pattern() -> &'static Regex {
    CANONICAL_ID.get_or_init(|| {
        Regex::new(
            r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
        )
        .expect("canonical id pattern is valid")
    })
}

/// Whether `candidate` has the canonical 8-4-4-4-12 hex shape.
pub fn is_canonical(candidate: &str) -> bool {
    canonical_id_pattern().is_match(candidate)
}

/// Generate a fresh canonical identifier.
///
/// Draws from the process-wide uuid v4 source; safe to call concurrently
/// without coordination. Output is lowercase hyphenated.
pub fn fresh() -> String {
    Uuid::new_v4().to_string()
}
