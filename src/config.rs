use crate::error::FrameError;
use serde::Deserialize;
use std::fs;

/// Knobs shared by the flattener and the rebuilder.
///
/// Every field has a default, so a config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformConfig {
    /// Slot assigned to blocks that do not name one.
    pub default_slot: String,
    /// Key type reserved for the tree root.
    pub root_key_type: String,
    /// Reject documents whose first root block is not `root_key_type`.
    pub enforce_root_key_type: bool,
    /// Maximum block or trigger nesting depth.
    pub max_depth: usize,
    /// Copied into `Frame::project_id`.
    pub project_id: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            default_slot: "content".to_string(),
            root_key_type: "ROOT".to_string(),
            enforce_root_key_type: true,
            max_depth: 256,
            project_id: String::new(),
        }
    }
}

impl TransformConfig {
    pub fn from_file(path: &str) -> Result<Self, FrameError> {
        let content = fs::read_to_string(path).map_err(|e| FrameError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}
