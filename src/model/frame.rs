use super::types::{FrameKind, ThenMode, VariableType};
use serde::{Deserialize, Serialize};

/// The flat, production representation of a frame.
///
/// Every entity carries its own id and points at its owner by foreign key.
/// Blocks and triggers are stored pre-order; their tree shape is recovered via
/// `parent_id`, never by nesting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Frame {
    pub id: String,
    pub name: String,
    pub route: String,
    pub route_arguments: Vec<RouteArgument>,
    #[serde(rename = "type")]
    pub kind: FrameKind,
    pub is_starter: bool,
    pub project_id: String,
    pub checksum: String,
    pub variables: Vec<Variable>,
    pub blocks: Vec<Block>,
    pub actions: Vec<Action>,
}

/// A named `{placeholder}` parsed out of a frame route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteArgument {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variable {
    pub id: String,
    pub frame_id: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: VariableType,
}

/// A node of the render tree. `parent_id` is empty for the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub id: String,
    pub frame_id: String,
    pub key_type: String,
    pub key: String,
    pub visibility_key: String,
    pub position: usize,
    pub slot: String,
    pub integration_version: i32,
    pub parent_id: String,
    pub data: Vec<BlockData>,
    pub properties: Vec<BlockProperty>,
    pub slots: Vec<BlockSlot>,
    pub integration_deprecated: bool,
    pub integration_deprecated_reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockProperty {
    pub id: String,
    pub block_id: String,
    pub key: String,
    pub value_mobile: String,
    pub value_tablet: String,
    pub value_desktop: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub value_picker: String,
    pub value_picker_group: String,
    pub value_picker_options: String,
    pub deprecated: bool,
    pub deprecated_reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockData {
    pub id: String,
    pub block_id: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub deprecated: bool,
    pub deprecated_reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockSlot {
    pub id: String,
    pub block_id: String,
    pub slot: String,
    pub description: String,
    pub deprecated: bool,
    pub deprecated_reason: String,
}

/// An event handler owned by the block whose `key` matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    pub id: String,
    pub frame_id: String,
    pub key: String,
    pub event: String,
    pub triggers: Vec<ActionTrigger>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionTrigger {
    pub id: String,
    pub action_id: String,
    pub parent_id: String,
    pub key_type: String,
    pub then: ThenMode,
    pub name: String,
    pub integration_version: i32,
    pub properties: Vec<TriggerProperty>,
    pub data: Vec<TriggerData>,
    pub integration_deprecated: bool,
    pub integration_deprecated_reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerProperty {
    pub id: String,
    pub action_trigger_id: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub value_picker: String,
    pub value_picker_group: String,
    pub value_picker_options: String,
    pub deprecated: bool,
    pub deprecated_reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriggerData {
    pub id: String,
    pub action_trigger_id: String,
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub deprecated: bool,
    pub deprecated_reason: String,
}

impl Frame {
    /// Blocks without a parent, in list order.
    pub fn root_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.parent_id.is_empty())
    }

    /// Direct children of the block with `block_id`, in list order.
    pub fn children_of<'a>(&'a self, block_id: &'a str) -> impl Iterator<Item = &'a Block> {
        self.blocks.iter().filter(move |b| b.parent_id == block_id)
    }

    /// Actions owned by the block with `block_key`.
    pub fn actions_of<'a>(&'a self, block_key: &'a str) -> impl Iterator<Item = &'a Action> {
        self.actions.iter().filter(move |a| a.key == block_key)
    }
}

impl Action {
    /// Triggers that start a chain.
    pub fn root_triggers(&self) -> impl Iterator<Item = &ActionTrigger> {
        self.triggers.iter().filter(|t| t.parent_id.is_empty())
    }

    pub fn children_of<'a>(
        &'a self,
        trigger_id: &'a str,
    ) -> impl Iterator<Item = &'a ActionTrigger> {
        self.triggers
            .iter()
            .filter(move |t| t.parent_id == trigger_id)
    }
}
