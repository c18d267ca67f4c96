use std::fmt;
use thiserror::Error;

/// The entity that owns a data binding, used to point error messages at the right node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingOwner {
    Block(String),
    Trigger(String),
}

impl fmt::Display for BindingOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingOwner::Block(key) => write!(f, "{} block", key),
            BindingOwner::Trigger(name) => write!(f, "{} trigger", name),
        }
    }
}

/// Errors that can occur while flattening or rebuilding a frame.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("Please provide $schema for the json file")]
    MissingSchema,

    #[error("Schema '{0}' could not be resolved")]
    SchemaUnavailable(String),

    #[error("Schema '{reference}' is not a valid JSON Schema: {message}")]
    InvalidSchemaDocument { reference: String, message: String },

    #[error("The {block_key} block is used in slot '{slot}', which its parent does not declare")]
    InvalidSlot { block_key: String, slot: String },

    #[error(
        "No matching variable found for {owner} in data entry with key '{data_key}': '{value}' is not a declared variable"
    )]
    UnresolvedVariableReference {
        owner: BindingOwner,
        data_key: String,
        value: String,
    },

    #[error("The {name} trigger can not have sub-triggers because it is defined with \"END\" then")]
    InvalidTriggerChain { name: String },

    #[error("Duplicate block keys found: {}", keys.join(","))]
    DuplicateBlockKey { keys: Vec<String> },

    #[error("First block's keyType must be '{expected}', found '{key_type}'")]
    InvalidRootBlock { key_type: String, expected: String },

    #[error("Frame nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("Failed to parse frame JSON: {0}")]
    JsonParseError(String),

    #[error("Could not access '{path}': {message}")]
    Io { path: String, message: String },
}

impl FrameError {
    pub(crate) fn io(path: &str, e: std::io::Error) -> Self {
        FrameError::Io {
            path: path.to_string(),
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for FrameError {
    fn from(e: serde_json::Error) -> Self {
        FrameError::JsonParseError(e.to_string())
    }
}
