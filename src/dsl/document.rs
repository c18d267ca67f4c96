use super::definition::FrameDsl;
use crate::error::FrameError;
use std::fs;

impl FrameDsl {
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads an authoring document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, FrameError> {
        let content = fs::read_to_string(path).map_err(|e| FrameError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, FrameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save(&self, path: &str) -> Result<(), FrameError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| FrameError::io(path, e))
    }
}
