use super::*;

#[test]
fn default_gesture_bindings() {
    let service = KeybindingService::with_defaults();
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Enter)),
        Some(Command::SplitGesture)
    );
    assert_eq!(
        service.resolve(&Key::shift(KeyCode::Enter)),
        Some(Command::InsertNewline)
    );
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Backspace)),
        Some(Command::Backspace)
    );
    assert_eq!(
        service.resolve(&Key::ctrl(KeyCode::Char('a'))),
        Some(Command::SelectAll)
    );
    assert_eq!(
        service.resolve(&Key::sup(KeyCode::Char('a'))),
        Some(Command::SelectAll)
    );
}

#[test]
fn unbound_characters_insert_text() {
    let service = KeybindingService::new();
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Char('x'))),
        Some(Command::InsertChar('x'))
    );
    assert_eq!(
        service.resolve(&Key::shift(KeyCode::Char('x'))),
        Some(Command::InsertChar('X'))
    );
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Tab)),
        Some(Command::InsertChar('\t'))
    );
    assert_eq!(service.resolve(&Key::ctrl(KeyCode::Char('z'))), None);
    assert_eq!(service.resolve(&Key::simple(KeyCode::Esc)), None);
}

#[test]
fn rules_rebind_and_count_skips() {
    let mut service = KeybindingService::new();
    let rules = vec![
        KeybindingRule {
            key: "ctrl+enter".to_string(),
            command: "splitGesture".to_string(),
        },
        KeybindingRule {
            key: "ctrl+banana".to_string(),
            command: "quit".to_string(),
        },
        KeybindingRule {
            key: "ctrl+k".to_string(),
            command: "explode".to_string(),
        },
    ];

    assert_eq!(service.apply_rules(&rules), 2);
    assert_eq!(
        service.resolve(&Key::ctrl(KeyCode::Enter)),
        Some(Command::SplitGesture)
    );
}

#[test]
fn rules_override_defaults() {
    let mut service = KeybindingService::new();
    let rules = vec![KeybindingRule {
        key: "enter".to_string(),
        command: "insertNewline".to_string(),
    }];

    assert_eq!(service.apply_rules(&rules), 0);
    assert_eq!(
        service.resolve(&Key::simple(KeyCode::Enter)),
        Some(Command::InsertNewline)
    );
    assert_eq!(service.bindings.len(), default_keybindings().len());
}
