//! Tolerant normalization of generative-model agent descriptions.
//!
//! Maps an arbitrary decoded JSON value into an [`AgentSpec`] or a
//! [`ValidationFailure`] listing every violated constraint. Model output is
//! adversarial-by-nature: fields arrive missing, mistyped, out of vocabulary,
//! or structurally malformed. The pipeline runs a lenient coercion pass
//! (per-field defaulting, never reported) and a strict invariant pass whose
//! hard failures are accumulated across the whole document — never
//! short-circuited — so a retry-with-feedback loop gets the complete
//! correction list in one round trip.
//!
//! Two-tier policy:
//! - Recoverable deviations: unknown coercible enum values, non-object
//!   `config`, malformed `id`. Corrected in place, reported nowhere.
//! - Hard failures: empty required arrays or text, non-boolean `required`,
//!   out-of-range `complexityScore`, invalid `modelPreference`, non-positive
//!   numeric constraints, broken `edgeCases` elements.

use serde_json::Value;

use crate::domain::agent_spec::{
    AdvancedOptions, AgentPersonality, AgentSpec, DataSource, EdgeCase, Formality, InputField,
    InputFieldType, Integration, ModelPreference, OutputField, Verbosity,
};
use crate::domain::error::{ValidationFailure, Violation};
use crate::domain::ident;
use crate::obs;

// ---------------------------------------------------------------------------
// Violation accumulator
// ---------------------------------------------------------------------------

/// Collects hard-failure violations in document field order.
#[derive(Debug, Default)]
struct Violations {
    entries: Vec<Violation>,
}

impl Violations {
    fn push(&mut self, field_path: impl Into<String>, reason: impl Into<String>) {
        self.entries.push(Violation::new(field_path, reason));
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Coercion helpers (lenient pass)
// ---------------------------------------------------------------------------

/// Read a free-text field: strings pass through, anything else becomes `""`.
fn text_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Read a field with a non-empty-text constraint. Missing, mistyped, or empty
/// values record a hard violation and yield `""` so processing continues.
fn require_text(value: Option<&Value>, path: &str, violations: &mut Violations) -> String {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => {
            violations.push(path, "must be a non-empty string");
            String::new()
        }
    }
}

/// Read an array field: missing or non-array values read as empty.
fn elements(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Read an open key/value config: non-object values (null, arrays, scalars)
/// silently become an empty map.
fn config_or_empty(value: Option<&Value>) -> serde_json::Map<String, Value> {
    match value {
        Some(Value::Object(map)) => map.clone(),
        _ => serde_json::Map::new(),
    }
}

/// Keep string entries of an array, dropping everything else.
fn string_labels(value: Option<&Value>) -> Vec<String> {
    elements(value)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Per-record readers
// ---------------------------------------------------------------------------

fn read_input_field(value: &Value, path: &str, violations: &mut Violations) -> InputField {
    let Some(obj) = value.as_object() else {
        violations.push(path, "expected an object");
        return InputField {
            name: String::new(),
            field_type: InputFieldType::default(),
            required: false,
            description: String::new(),
            validation: None,
        };
    };

    let name = require_text(obj.get("name"), &format!("{path}.name"), violations);

    let required = match obj.get("required") {
        Some(Value::Bool(b)) => *b,
        // Strictly boolean: truthy stand-ins ("yes", 1) are not accepted
        _ => {
            violations.push(format!("{path}.required"), "must be a boolean");
            false
        }
    };

    InputField {
        name,
        field_type: obj
            .get("type")
            .and_then(Value::as_str)
            .map(InputFieldType::coerce)
            .unwrap_or_default(),
        required,
        description: text_or_empty(obj.get("description")),
        validation: obj
            .get("validation")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn read_output_field(value: &Value, path: &str, violations: &mut Violations) -> OutputField {
    let Some(obj) = value.as_object() else {
        violations.push(path, "expected an object");
        return OutputField {
            name: String::new(),
            field_type: String::new(),
            description: String::new(),
        };
    };

    OutputField {
        name: require_text(obj.get("name"), &format!("{path}.name"), violations),
        // Open vocabulary, but still required to be non-empty
        field_type: require_text(obj.get("type"), &format!("{path}.type"), violations),
        description: text_or_empty(obj.get("description")),
    }
}

fn read_data_source(value: &Value, path: &str, violations: &mut Violations) -> DataSource {
    let Some(obj) = value.as_object() else {
        violations.push(path, "expected an object");
        return DataSource {
            name: String::new(),
            source_type: String::new(),
            config: serde_json::Map::new(),
        };
    };

    DataSource {
        name: text_or_empty(obj.get("name")),
        source_type: text_or_empty(obj.get("type")),
        config: config_or_empty(obj.get("config")),
    }
}

fn read_integration(value: &Value, path: &str, violations: &mut Violations) -> Integration {
    let Some(obj) = value.as_object() else {
        violations.push(path, "expected an object");
        return Integration {
            name: String::new(),
            integration_type: String::new(),
            auth_type: String::new(),
            config: serde_json::Map::new(),
        };
    };

    Integration {
        name: text_or_empty(obj.get("name")),
        integration_type: text_or_empty(obj.get("type")),
        auth_type: text_or_empty(obj.get("authType")),
        config: config_or_empty(obj.get("config")),
    }
}

fn read_edge_case(value: &Value, path: &str, violations: &mut Violations) -> EdgeCase {
    let Some(obj) = value.as_object() else {
        violations.push(path, "expected an object");
        return EdgeCase {
            description: String::new(),
            mitigation: String::new(),
        };
    };

    EdgeCase {
        description: require_text(
            obj.get("description"),
            &format!("{path}.description"),
            violations,
        ),
        mitigation: require_text(
            obj.get("mitigation"),
            &format!("{path}.mitigation"),
            violations,
        ),
    }
}

/// Personality never hard-fails: every field either passes through or
/// coerces to its designated default.
fn read_personality(value: Option<&Value>) -> AgentPersonality {
    let obj = match value {
        Some(Value::Object(map)) => map,
        _ => {
            return AgentPersonality {
                tone: String::new(),
                formality: Formality::default(),
                verbosity: Verbosity::default(),
            }
        }
    };

    AgentPersonality {
        tone: text_or_empty(obj.get("tone")),
        formality: obj
            .get("formality")
            .and_then(Value::as_str)
            .map(Formality::coerce)
            .unwrap_or_default(),
        verbosity: obj
            .get("verbosity")
            .and_then(Value::as_str)
            .map(Verbosity::coerce)
            .unwrap_or_default(),
    }
}

fn read_complexity_score(value: Option<&Value>, violations: &mut Violations) -> u8 {
    match value.and_then(Value::as_i64) {
        Some(score) if (1..=10).contains(&score) => score as u8,
        // Non-integer and out-of-range alike: no clamping, no rounding
        _ => {
            violations.push("complexityScore", "must be an integer between 1 and 10");
            0
        }
    }
}

fn read_positive_number(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    violations: &mut Violations,
) -> Option<f64> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_f64() {
            Some(n) if n > 0.0 => Some(n),
            _ => {
                violations.push(
                    format!("advancedOptions.{key}"),
                    "must be a strictly positive number",
                );
                None
            }
        },
    }
}

/// Advanced options are optional as a block (non-object reads as absent),
/// but present sub-fields are validated strictly: this block configures the
/// downstream execution backend, so nothing in it may be silently defaulted.
fn read_advanced_options(
    value: Option<&Value>,
    violations: &mut Violations,
) -> Option<AdvancedOptions> {
    let obj = match value {
        Some(Value::Object(map)) => map,
        _ => return None,
    };

    let model_preference = match obj.get("modelPreference") {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = value.as_str().and_then(ModelPreference::parse);
            if parsed.is_none() {
                violations.push(
                    "advancedOptions.modelPreference",
                    "must be one of: flash, pro",
                );
            }
            parsed
        }
    };

    let max_response_time = read_positive_number(obj, "maxResponseTime", violations);
    let cost_constraint = read_positive_number(obj, "costConstraint", violations);

    let integration_requirements = match obj.get("integrationRequirements") {
        Some(Value::Array(_)) => Some(string_labels(obj.get("integrationRequirements"))),
        _ => None,
    };

    Some(AdvancedOptions {
        model_preference,
        max_response_time,
        cost_constraint,
        integration_requirements,
    })
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Normalize a raw decoded JSON value into an [`AgentSpec`].
///
/// On success the returned spec satisfies every invariant simultaneously.
/// On failure the [`ValidationFailure`] enumerates every violated hard
/// constraint with its field path; partial objects are never returned.
///
/// The only side effect is identifier generation, drawn from the
/// process-wide uuid source; `normalize` is otherwise pure and safe to call
/// concurrently.
pub fn normalize(raw: &Value) -> Result<AgentSpec, ValidationFailure> {
    // A non-object root is processed as an empty document so that every
    // required-field violation is still collected in one pass.
    let empty = serde_json::Map::new();
    let doc = raw.as_object().unwrap_or(&empty);

    let mut violations = Violations::default();

    // 1. Identifier: keep canonical ids verbatim, replace everything else
    let id = match doc.get("id").and_then(Value::as_str) {
        Some(candidate) if ident::is_canonical(candidate) => candidate.to_string(),
        _ => {
            let generated = ident::fresh();
            obs::emit_id_regenerated(&generated);
            generated
        }
    };

    // 2. Scalar required fields
    let core_purpose = require_text(doc.get("corePurpose"), "corePurpose", &mut violations);

    // 3. Input requirements: per-element validation plus minimum-one rule
    let input_elements = elements(doc.get("inputRequirements"));
    let input_requirements: Vec<InputField> = input_elements
        .iter()
        .enumerate()
        .map(|(i, v)| read_input_field(v, &format!("inputRequirements[{i}]"), &mut violations))
        .collect();
    if input_requirements.is_empty() {
        violations.push("inputRequirements", "must contain at least one element");
    }

    // 4. Output requirements: same minimum-one rule, open-vocabulary types
    let output_elements = elements(doc.get("outputRequirements"));
    let output_requirements: Vec<OutputField> = output_elements
        .iter()
        .enumerate()
        .map(|(i, v)| read_output_field(v, &format!("outputRequirements[{i}]"), &mut violations))
        .collect();
    if output_requirements.is_empty() {
        violations.push("outputRequirements", "must contain at least one element");
    }

    // 5. Data sources and integrations may be empty
    let data_sources: Vec<DataSource> = elements(doc.get("dataSources"))
        .iter()
        .enumerate()
        .map(|(i, v)| read_data_source(v, &format!("dataSources[{i}]"), &mut violations))
        .collect();

    let integrations: Vec<Integration> = elements(doc.get("integrations"))
        .iter()
        .enumerate()
        .map(|(i, v)| read_integration(v, &format!("integrations[{i}]"), &mut violations))
        .collect();

    // 6. Edge cases may be empty, but present elements must be complete
    let edge_cases: Vec<EdgeCase> = elements(doc.get("edgeCases"))
        .iter()
        .enumerate()
        .map(|(i, v)| read_edge_case(v, &format!("edgeCases[{i}]"), &mut violations))
        .collect();

    // 7. Personality (fully coercible)
    let personality = read_personality(doc.get("personality"));

    let communication_style = text_or_empty(doc.get("communicationStyle"));

    // 8. Complexity score (hard range check)
    let complexity_score = read_complexity_score(doc.get("complexityScore"), &mut violations);

    // 9. Inferred field labels
    let inferred_fields = string_labels(doc.get("inferredFields"));

    // 10. Advanced options (optional block, strict sub-fields)
    let advanced_options = read_advanced_options(doc.get("advancedOptions"), &mut violations);

    if !violations.is_empty() {
        obs::emit_spec_rejected(violations.entries.len());
        return Err(ValidationFailure::new(violations.entries));
    }

    let spec = AgentSpec {
        id,
        core_purpose,
        input_requirements,
        output_requirements,
        data_sources,
        integrations,
        edge_cases,
        personality,
        communication_style,
        complexity_score,
        inferred_fields,
        advanced_options,
    };

    obs::emit_spec_normalized(
        &spec.id,
        spec.input_requirements.len(),
        spec.output_requirements.len(),
        spec.complexity_score,
    );

    Ok(spec)
}
