//! Unit tests for the public building blocks: errors, enums, routes, ids.
mod common;
use framegen::prelude::*;

#[test]
fn test_binding_owner_display() {
    let block = BindingOwner::Block("title_text".to_string());
    let trigger = BindingOwner::Trigger("count up".to_string());
    assert_eq!(block.to_string(), "title_text block");
    assert_eq!(trigger.to_string(), "count up trigger");
}

#[test]
fn test_error_messages_name_the_offender() {
    let slot = FrameError::InvalidSlot {
        block_key: "card".to_string(),
        slot: "header".to_string(),
    };
    assert!(slot.to_string().contains("card"));
    assert!(slot.to_string().contains("header"));

    let chain = FrameError::InvalidTriggerChain {
        name: "go home".to_string(),
    };
    assert!(chain.to_string().contains("go home"));
    assert!(chain.to_string().contains("\"END\""));

    let dupes = FrameError::DuplicateBlockKey {
        keys: vec!["a".to_string(), "b".to_string(), "c".to_string()],
    };
    assert_eq!(dupes.to_string(), "Duplicate block keys found: a,b,c");

    let depth = FrameError::DepthLimitExceeded { limit: 256 };
    assert!(depth.to_string().contains("256"));
}

#[test]
fn test_json_errors_convert() {
    let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: FrameError = parse.unwrap_err().into();
    assert!(matches!(err, FrameError::JsonParseError(_)));
}

#[test]
fn test_enum_display_matches_wire_names() {
    assert_eq!(FrameKind::BottomSheet.to_string(), "BOTTOM_SHEET");
    assert_eq!(ThenMode::Failure.to_string(), "FAILURE");
    assert_eq!(
        serde_json::to_value(VariableType::Boolean).unwrap(),
        serde_json::json!("BOOLEAN")
    );
}

#[test]
fn test_extract_route_arguments_keeps_order_and_duplicates() {
    let names: Vec<String> = extract_route_arguments("/a/{x}/b/{y}/{x}")
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["x", "y", "x"]);
    assert!(extract_route_arguments("/static/path").is_empty());
}

#[test]
fn test_uuid_issuer_yields_distinct_ids() {
    let issuer = UuidIssuer;
    let a = issuer.new_id();
    let b = issuer.new_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}
