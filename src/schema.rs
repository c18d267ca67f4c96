//! Structural validation of authoring documents against their `$schema`.
//!
//! The flattener treats validation as an oracle: it hands over the document
//! and the reference found in it, and only cares whether the answer is
//! "valid" or a list of violations.

use crate::error::FrameError;
use ahash::AHashMap;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// The answer of a schema check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    /// One human-readable message per violation.
    Invalid(Vec<String>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }
}

/// Decides whether a document conforms to the schema named by `schema_ref`.
///
/// An `Err` means the check itself could not run (unknown or broken schema).
pub trait SchemaValidator {
    fn validate(&self, document: &Value, schema_ref: &str) -> Result<ValidationOutcome, FrameError>;
}

/// Accepts every document. For callers that validated upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllValidator;

impl SchemaValidator for AcceptAllValidator {
    fn validate(
        &self,
        _document: &Value,
        _schema_ref: &str,
    ) -> Result<ValidationOutcome, FrameError> {
        Ok(ValidationOutcome::Valid)
    }
}

/// JSON Schema validation backed by the `jsonschema` crate.
///
/// Schemas are looked up among the preloaded ones first. A reference that is
/// not preloaded is read from disk when it names a local file (a plain path or
/// a `file://` URL). Remote retrieval is left to the caller, who preloads the
/// fetched document with [`JsonSchemaValidator::with_schema`].
#[derive(Debug, Clone, Default)]
pub struct JsonSchemaValidator {
    schemas: AHashMap<String, Value>,
}

impl JsonSchemaValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, reference: &str, schema: Value) -> Self {
        self.schemas.insert(reference.to_string(), schema);
        self
    }

    fn resolve(&self, reference: &str) -> Result<Value, FrameError> {
        if let Some(schema) = self.schemas.get(reference) {
            return Ok(schema.clone());
        }

        let path = reference.strip_prefix("file://").unwrap_or(reference);
        if !Path::new(path).is_file() {
            return Err(FrameError::SchemaUnavailable(reference.to_string()));
        }
        let content = fs::read_to_string(path).map_err(|e| FrameError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| FrameError::InvalidSchemaDocument {
            reference: reference.to_string(),
            message: e.to_string(),
        })
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn validate(
        &self,
        document: &Value,
        schema_ref: &str,
    ) -> Result<ValidationOutcome, FrameError> {
        let schema = self.resolve(schema_ref)?;
        let validator =
            jsonschema::validator_for(&schema).map_err(|e| FrameError::InvalidSchemaDocument {
                reference: schema_ref.to_string(),
                message: e.to_string(),
            })?;

        let errors: Vec<String> = validator
            .iter_errors(document)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("/: {}", e)
                } else {
                    format!("{}: {}", path, e)
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(ValidationOutcome::Valid)
        } else {
            Ok(ValidationOutcome::Invalid(errors))
        }
    }
}
