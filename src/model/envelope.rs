use super::frame::Frame;
use crate::error::FrameError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Output shape of local generation: `{ "data": { "frameProduction": Frame } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameProductionEnvelope {
    pub data: FrameProductionData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameProductionData {
    pub frame_production: Frame,
}

/// Shape of a fetched frame: `{ "frame": Frame }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEnvelope {
    pub frame: Frame,
}

/// Input of the remote sync call. `frame_json` is the compact JSON encoding of the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncFrameInput {
    pub route: String,
    pub frame_json: String,
}

impl FrameProductionEnvelope {
    pub fn new(frame: Frame) -> Self {
        Self {
            data: FrameProductionData {
                frame_production: frame,
            },
        }
    }

    pub fn into_frame(self) -> Frame {
        self.data.frame_production
    }
}

impl SyncFrameInput {
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        Ok(Self {
            route: frame.route.clone(),
            frame_json: serde_json::to_string(frame)?,
        })
    }
}

impl Frame {
    /// Parses a flat frame from any of the shapes it travels in: a bare frame,
    /// `{ "frame": .. }`, or `{ "data": { "frameProduction": .. } }`.
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        let value: Value = serde_json::from_str(json)?;
        if value.pointer("/data/frameProduction").is_some() {
            let envelope: FrameProductionEnvelope = serde_json::from_value(value)?;
            Ok(envelope.into_frame())
        } else if value.get("frame").is_some() {
            let envelope: FrameEnvelope = serde_json::from_value(value)?;
            Ok(envelope.frame)
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    pub fn from_file(path: &str) -> Result<Self, FrameError> {
        let content = std::fs::read_to_string(path).map_err(|e| FrameError::io(path, e))?;
        Self::from_json(&content)
    }
}
