use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("{}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
///
/// On failure every violation is reported, in validator order.
pub fn validate_json(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator =
        validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    let violations: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::Invalid(violations))
    }
}
