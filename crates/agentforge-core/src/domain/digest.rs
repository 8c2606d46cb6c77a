//! Canonical JSON fingerprints for normalized specs.
//!
//! Two structurally identical specs must hash identically regardless of
//! object key order or integer-vs-float number encoding, so downstream
//! tooling can key caches and registries on the fingerprint. Canonical form:
//! integer-valued floats collapsed to integers, NaN/Infinity rejected,
//! object keys sorted by UTF-16 code units (RFC 8785 §3.2.3), compact
//! serialization, SHA-256 over the bytes.

use sha2::{Digest, Sha256};

use super::error::{AgentForgeError, Result};

/// Recursively rewrite a value into canonical form: numbers normalized,
/// object keys sorted. Array order is significant and preserved.
fn canonicalize(value: &serde_json::Value) -> Result<serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_by(|a, b| {
                let a16: Vec<u16> = a.encode_utf16().collect();
                let b16: Vec<u16> = b.encode_utf16().collect();
                a16.cmp(&b16)
            });

            let mut sorted = serde_json::Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key])?);
            }
            Ok(serde_json::Value::Object(sorted))
        }
        serde_json::Value::Array(items) => Ok(serde_json::Value::Array(
            items.iter().map(canonicalize).collect::<Result<Vec<_>>>()?,
        )),
        serde_json::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return Ok(serde_json::Value::Number(n.clone()));
            }
            let f = n.as_f64().unwrap_or(f64::NAN);
            if !f.is_finite() {
                return Err(AgentForgeError::NonFiniteNumber);
            }
            // Integer-valued floats collapse to the integer representation
            if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Ok(serde_json::Value::Number(serde_json::Number::from(
                    f as i64,
                )))
            } else {
                Ok(serde_json::Value::Number(n.clone()))
            }
        }
        other => Ok(other.clone()),
    }
}

/// Compact canonical JSON text for `value`.
pub fn canonical_json(value: &serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string(&canonicalize(value)?)?)
}

/// SHA-256 hex digest of the canonical JSON form of `value`.
pub fn compute_fingerprint(value: &serde_json::Value) -> Result<String> {
    let canonical = canonical_json(value)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
