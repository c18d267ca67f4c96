use crate::model::{FrameKind, ThenMode, VariableType};
use serde::{Deserialize, Deserializer, Serialize};

/// The human-authored, nested description of a frame.
///
/// This is the shape of the JSON files authors edit. Blocks own their children,
/// their actions and their triggers directly; nothing is shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDsl {
    #[serde(rename = "$schema", default)]
    pub schema: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub route: String,
    #[serde(rename = "type", default)]
    pub kind: FrameKind,
    #[serde(default)]
    pub is_starter: bool,
    #[serde(default)]
    pub variables: Vec<VariableDsl>,
    #[serde(default)]
    pub blocks: Vec<BlockDsl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableDsl {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: VariableType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDsl {
    pub key_type: String,
    pub key: String,
    #[serde(default)]
    pub visibility_key: String,
    /// Slot of the parent this block is placed in. `None` for the root.
    #[serde(
        default,
        deserialize_with = "deserialize_slot",
        skip_serializing_if = "Option::is_none"
    )]
    pub slot: Option<String>,
    #[serde(default)]
    pub integration_version: i32,
    #[serde(default)]
    pub properties: Vec<PropertyDsl>,
    #[serde(default)]
    pub data: Vec<DataDsl>,
    #[serde(default)]
    pub slots: Vec<SlotDsl>,
    #[serde(default)]
    pub actions: Vec<ActionDsl>,
    #[serde(default)]
    pub blocks: Vec<BlockDsl>,
}

/// A block property with per-breakpoint values.
///
/// `value` is an authoring shorthand: when present and non-empty it is used
/// for all three breakpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDsl {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub value_mobile: String,
    #[serde(default)]
    pub value_tablet: String,
    #[serde(default)]
    pub value_desktop: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_picker: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_picker_group: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_picker_options: String,
}

/// A data binding. `value` must name a frame variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataDsl {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotDsl {
    pub slot: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionDsl {
    /// Key of the owning block.
    #[serde(default)]
    pub key: String,
    pub event: String,
    #[serde(default)]
    pub triggers: Vec<TriggerDsl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerDsl {
    pub key_type: String,
    #[serde(default)]
    pub then: ThenMode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub integration_version: i32,
    #[serde(default)]
    pub properties: Vec<TriggerPropertyDsl>,
    #[serde(default)]
    pub data: Vec<DataDsl>,
    #[serde(default)]
    pub triggers: Vec<TriggerDsl>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerPropertyDsl {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_picker: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_picker_group: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value_picker_options: String,
}

impl PropertyDsl {
    /// Resolves `(mobile, tablet, desktop)`, applying the `value` shorthand.
    pub fn breakpoints(&self) -> (&str, &str, &str) {
        match self.value.as_deref() {
            Some(v) if !v.is_empty() => (v, v, v),
            _ => (&self.value_mobile, &self.value_tablet, &self.value_desktop),
        }
    }
}

/// Authors write the root slot as absent, `null`, `"null"` or `""`; all mean unset.
fn deserialize_slot<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty() && s != "null"))
}
