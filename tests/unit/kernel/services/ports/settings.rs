use super::*;

#[test]
fn empty_object_uses_field_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.gesture_threshold_ms, None);
    assert!(settings.keybindings.is_empty());
}

#[test]
fn author_is_not_a_setting() {
    let settings: Settings =
        serde_json::from_str(r#"{ "author": { "display_name": "Ada" } }"#).unwrap();
    assert_eq!(settings.gesture_threshold_ms, None);
    assert!(settings.keybindings.is_empty());
}

#[test]
fn keybinding_rules_parse() {
    let json = r#"{
        "gesture_threshold_ms": 300,
        "keybindings": [ { "key": "ctrl+s", "command": "splitGesture" } ]
    }"#;
    let settings: Settings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.gesture_threshold_ms, Some(300));
    assert_eq!(
        settings.keybindings,
        vec![KeybindingRule {
            key: "ctrl+s".to_string(),
            command: "splitGesture".to_string(),
        }]
    );
}

#[test]
fn unset_threshold_is_not_serialized() {
    let settings = Settings {
        gesture_threshold_ms: None,
        ..Settings::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    assert!(!json.contains("gesture_threshold_ms"));
}
