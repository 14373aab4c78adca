use super::*;

#[test]
fn defaults_without_settings() {
    let service = ConfigService::new();
    assert_eq!(service.composer(), &ComposerConfig::default());
}

#[test]
fn settings_override_threshold_only() {
    let settings = Settings {
        gesture_threshold_ms: Some(350),
        keybindings: Vec::new(),
    };

    let service = ConfigService::from_settings(&settings);
    assert_eq!(service.composer().gesture_threshold_ms, 350);
    assert_eq!(service.composer().block_gap, ComposerConfig::default().block_gap);
}

#[test]
fn zero_threshold_is_ignored() {
    let mut service = ConfigService::new();
    service.composer.gesture_threshold_ms = 800;
    service.apply_settings(&Settings {
        gesture_threshold_ms: Some(0),
        ..Settings::default()
    });
    assert_eq!(service.composer().gesture_threshold_ms, 800);
}

#[test]
fn unset_threshold_keeps_current() {
    let mut service = ConfigService::new();
    service.composer.gesture_threshold_ms = 120;
    service.apply_settings(&Settings {
        gesture_threshold_ms: None,
        ..Settings::default()
    });
    assert_eq!(service.composer().gesture_threshold_ms, 120);
}
