//! Integration tests for framegen
//!
//! End-to-end runs over files and the wire envelopes.
//!
mod common;
use common::*;
use framegen::prelude::*;
use serde_json::{Value, json};
use std::fs;

#[test]
fn test_generate_then_pull_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let dsl_path = dir.path().join("profile.json");
    let flat_path = dir.path().join("profile.flat.json");
    fs::write(&dsl_path, PROFILE_FRAME_JSON).unwrap();
    let dsl_path = dsl_path.to_str().unwrap();
    let flat_path = flat_path.to_str().unwrap();

    // gen: DSL file -> production envelope
    let dsl = FrameDsl::from_file(dsl_path).unwrap();
    let frame = flatten_ok(&flattener(), &dsl);
    let envelope = FrameProductionEnvelope::new(frame.clone());
    fs::write(flat_path, serde_json::to_string(&envelope).unwrap()).unwrap();

    // pull: flat file -> DSL file, schema carried over from the old file
    let fetched = Frame::from_file(flat_path).unwrap();
    assert_eq!(fetched, frame);
    let rebuilt = Rebuilder::new().rebuild(&fetched, &dsl.schema).unwrap();
    rebuilt.save(dsl_path).unwrap();

    let reloaded = FrameDsl::from_file(dsl_path).unwrap();
    assert_eq!(reloaded, dsl);
}

#[test]
fn test_production_envelope_shape() {
    let frame = flatten_ok(&flattener(), &profile_dsl());
    let value = serde_json::to_value(FrameProductionEnvelope::new(frame)).unwrap();

    let production = &value["data"]["frameProduction"];
    assert_eq!(production["name"], "profile");
    assert_eq!(production["isStarter"], true);
    assert_eq!(
        production["routeArguments"],
        json!([{ "name": "id" }, { "name": "tab" }])
    );
    assert_eq!(
        production["blocks"][1]["parentId"],
        production["blocks"][0]["id"]
    );
    assert_eq!(production["blocks"][3]["position"], 1);
    assert_eq!(production["blocks"][2]["data"][0]["value"], "title");
    assert_eq!(production["actions"][0]["triggers"][2]["then"], "END");
    assert!(production.get("$schema").is_none());
}

#[test]
fn test_sync_payload_embeds_frame_as_string() {
    let frame = flatten_ok(&flattener(), &profile_dsl());
    let input = SyncFrameInput::from_frame(&frame).unwrap();

    assert_eq!(input.route, "/user/{id}/profile/{tab}");
    let embedded: Frame = serde_json::from_str(&input.frame_json).unwrap();
    assert_eq!(embedded, frame);

    let value = serde_json::to_value(&input).unwrap();
    assert!(value["frameJson"].is_string());
}

#[test]
fn test_frame_from_json_accepts_every_envelope() {
    let frame = flatten_ok(&flattener(), &profile_dsl());
    let bare = serde_json::to_value(&frame).unwrap();

    let shapes: Vec<Value> = vec![
        bare.clone(),
        json!({ "frame": bare.clone() }),
        json!({ "data": { "frameProduction": bare } }),
        serde_json::to_value(FrameEnvelope {
            frame: frame.clone(),
        })
        .unwrap(),
    ];
    for shape in shapes {
        let parsed = Frame::from_json(&shape.to_string()).unwrap();
        assert_eq!(parsed, frame);
    }

    let envelope = FrameProductionEnvelope::new(frame.clone());
    assert_eq!(envelope.into_frame(), frame);
}

#[test]
fn test_config_and_schema_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let schema_path = dir.path().join("frame.schema.json");
    let config_json = r#"{ "projectId": "p-7", "defaultSlot": "content" }"#;
    let schema_json = r#"{ "type": "object", "required": ["name", "blocks"] }"#;
    fs::write(&config_path, config_json).unwrap();
    fs::write(&schema_path, schema_json).unwrap();

    let config = TransformConfig::from_file(config_path.to_str().unwrap()).unwrap();
    let mut dsl = profile_dsl();
    dsl.schema = format!("file://{}", schema_path.display());

    let flattener = Flattener::builder(JsonSchemaValidator::new())
        .with_config(config)
        .build();
    let frame = flatten_ok(&flattener, &dsl);
    assert_eq!(frame.project_id, "p-7");
    assert_eq!(frame.blocks.len(), 4);
}

#[test]
fn test_missing_file_reports_path() {
    let err = FrameDsl::from_file("/definitely/not/here.json").unwrap_err();
    match err {
        FrameError::Io { path, .. } => assert_eq!(path, "/definitely/not/here.json"),
        other => panic!("Expected Io error, got {:?}", other),
    }
}
