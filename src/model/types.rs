use serde::{Deserialize, Serialize};
use std::fmt;

/// The presentation kind of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameKind {
    #[default]
    Frame,
    BottomSheet,
    Dialog,
}

/// Declared type of a frame variable. Values are always carried string-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VariableType {
    #[default]
    String,
    Int,
    Long,
    Double,
    Float,
    Boolean,
}

/// Controls whether and when the next trigger in a chain runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThenMode {
    #[default]
    Next,
    End,
    Success,
    Failure,
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameKind::Frame => write!(f, "FRAME"),
            FrameKind::BottomSheet => write!(f, "BOTTOM_SHEET"),
            FrameKind::Dialog => write!(f, "DIALOG"),
        }
    }
}

impl fmt::Display for ThenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThenMode::Next => write!(f, "NEXT"),
            ThenMode::End => write!(f, "END"),
            ThenMode::Success => write!(f, "SUCCESS"),
            ThenMode::Failure => write!(f, "FAILURE"),
        }
    }
}
