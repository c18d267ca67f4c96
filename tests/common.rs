//! Common test utilities for building frame documents and flatteners.
use framegen::prelude::*;
use serde_json::json;

#[allow(dead_code)]
pub const SCHEMA_REF: &str = "https://schema.example.com/frame.json";

/// A profile screen: ROOT > COLUMN > (TEXT, BUTTON), with one action whose
/// trigger chain is `log click > count up > go home` plus a sibling `toast`.
#[allow(dead_code)]
pub const PROFILE_FRAME_JSON: &str = r#"{
  "$schema": "https://schema.example.com/frame.json",
  "name": "profile",
  "route": "/user/{id}/profile/{tab}",
  "type": "FRAME",
  "isStarter": true,
  "variables": [
    { "key": "title", "value": "Profile", "type": "STRING" },
    { "key": "visible", "value": "true", "type": "BOOLEAN" },
    { "key": "count", "value": "0", "type": "INT" }
  ],
  "blocks": [
    {
      "keyType": "ROOT",
      "key": "root",
      "visibilityKey": "visible",
      "integrationVersion": 1,
      "slots": [{ "slot": "content" }],
      "blocks": [
        {
          "keyType": "COLUMN",
          "key": "column",
          "visibilityKey": "visible",
          "slot": "content",
          "integrationVersion": 1,
          "slots": [{ "slot": "content" }, { "slot": "footer" }],
          "properties": [
            { "key": "padding", "valueMobile": "8", "valueTablet": "12", "valueDesktop": "16", "type": "INT" }
          ],
          "blocks": [
            {
              "keyType": "TEXT",
              "key": "title_text",
              "visibilityKey": "visible",
              "slot": "content",
              "integrationVersion": 2,
              "data": [{ "key": "text", "value": "title", "type": "STRING" }],
              "properties": [
                { "key": "fontSize", "valueMobile": "14", "valueTablet": "16", "valueDesktop": "18", "type": "INT" }
              ]
            },
            {
              "keyType": "BUTTON",
              "key": "button1",
              "visibilityKey": "visible",
              "slot": "footer",
              "integrationVersion": 1,
              "data": [{ "key": "label", "value": "title", "type": "STRING" }],
              "actions": [
                {
                  "key": "button1",
                  "event": "onClick",
                  "triggers": [
                    {
                      "keyType": "LOG",
                      "then": "NEXT",
                      "name": "log click",
                      "integrationVersion": 1,
                      "properties": [{ "key": "level", "value": "info", "type": "STRING" }],
                      "data": [{ "key": "message", "value": "title", "type": "STRING" }],
                      "triggers": [
                        {
                          "keyType": "INCREMENT",
                          "then": "SUCCESS",
                          "name": "count up",
                          "integrationVersion": 1,
                          "data": [{ "key": "target", "value": "count", "type": "INT" }],
                          "triggers": [
                            { "keyType": "NAVIGATE", "then": "END", "name": "go home", "integrationVersion": 1 }
                          ]
                        }
                      ]
                    },
                    { "keyType": "TOAST", "then": "END", "name": "toast", "integrationVersion": 1 }
                  ]
                }
              ]
            }
          ]
        }
      ]
    }
  ]
}"#;

/// Parses the profile fixture.
#[allow(dead_code)]
pub fn profile_dsl() -> FrameDsl {
    FrameDsl::from_json(PROFILE_FRAME_JSON).expect("fixture must parse")
}

/// The frame schema used by the tests, registered under [`SCHEMA_REF`].
#[allow(dead_code)]
pub fn frame_schema_validator() -> JsonSchemaValidator {
    JsonSchemaValidator::new().with_schema(
        SCHEMA_REF,
        json!({
            "type": "object",
            "required": ["$schema", "name", "route", "type", "blocks"],
            "properties": {
                "name": { "type": "string", "minLength": 1 },
                "route": { "type": "string", "pattern": "^/" },
                "type": { "enum": ["FRAME", "BOTTOM_SHEET", "DIALOG"] },
                "blocks": { "type": "array", "maxItems": 1 }
            }
        }),
    )
}

#[allow(dead_code)]
pub fn flattener() -> Flattener {
    Flattener::builder(frame_schema_validator()).build()
}

/// Flattens and unwraps, failing the test on rejection or error.
#[allow(dead_code)]
pub fn flatten_ok(flattener: &Flattener, dsl: &FrameDsl) -> Frame {
    match flattener.flatten(dsl).expect("flatten must succeed") {
        FlattenOutcome::Flattened(frame) => frame,
        FlattenOutcome::SchemaRejected(v) => panic!("Unexpected schema rejection: {:?}", v),
    }
}

/// A block with no slots, children, or bindings.
#[allow(dead_code)]
pub fn plain_block(key_type: &str, key: &str) -> BlockDsl {
    BlockDsl {
        key_type: key_type.to_string(),
        key: key.to_string(),
        visibility_key: "visible".to_string(),
        integration_version: 1,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn block_by_key<'a>(frame: &'a Frame, key: &str) -> &'a Block {
    frame
        .blocks
        .iter()
        .find(|b| b.key == key)
        .unwrap_or_else(|| panic!("block '{}' not found", key))
}

#[allow(dead_code)]
pub fn trigger_by_name<'a>(frame: &'a Frame, name: &str) -> &'a ActionTrigger {
    frame
        .actions
        .iter()
        .flat_map(|a| a.triggers.iter())
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("trigger '{}' not found", name))
}
