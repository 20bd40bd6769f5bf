use crate::config::{Config, HotkeyConfig};

use std::fs;

use overlay_core::{HotkeyBinding, KeyCode, ModifierFlags};

/// WHAT: Missing config file produces defaults and writes them
/// WHY: First launch must work without any setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_config_file_when_loading_then_default_binding_and_file_created() {
    // Given: Empty directory
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Default binding, file written
    assert_eq!(config.hotkey_binding(), HotkeyBinding::DEFAULT);
    assert!(path.exists());
}

/// WHAT: A captured binding survives save and load
/// WHY: The shortcut is written once per capture and read at startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_binding_when_loading_then_same_binding_returned() {
    // Given: Config with Control + Shift + K saved
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let binding = HotkeyBinding::new(KeyCode::K, ModifierFlags::CONTROL | ModifierFlags::SHIFT);
    let mut config = Config::default();
    config.set_hotkey_binding(binding);
    config.save_to(&path).unwrap();

    // When: Loading
    let loaded = Config::load_from(&path).unwrap();

    // Then: Same binding, no temp file left behind
    assert_eq!(loaded.hotkey_binding(), binding);
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: Raw mask format is stable
/// WHY: Existing settings files store key code and raw modifier mask
#[test]
#[allow(clippy::unwrap_used)]
fn given_raw_toml_when_loading_then_binding_parsed() {
    // Given: key 10 with Control (1 << 18)
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[hotkey]\nkey_code = 10\nmodifiers = 262144\n").unwrap();

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Control + §
    assert_eq!(
        config.hotkey,
        HotkeyConfig {
            key_code: 10,
            modifiers: 262144
        }
    );
    assert_eq!(config.hotkey_binding(), HotkeyBinding::DEFAULT);
}

/// WHAT: Unparsable config falls back to defaults
/// WHY: A corrupt file must never crash startup
#[test]
#[allow(clippy::unwrap_used)]
fn given_malformed_config_when_loading_then_defaults_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[hotkey]\nkey_code = \"section\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.hotkey_binding(), HotkeyBinding::DEFAULT);
}

/// WHAT: Stored binding without modifiers falls back to the default
/// WHY: A bare key is never a valid global shortcut
#[test]
#[allow(clippy::unwrap_used)]
fn given_stored_bare_key_when_resolving_binding_then_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[hotkey]\nkey_code = 0\nmodifiers = 65536\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.hotkey_binding(), HotkeyBinding::DEFAULT);
}

/// WHAT: Stored key code unknown to the host falls back to the default
/// WHY: An unregistrable key would leave the user without a shortcut
#[test]
#[allow(clippy::unwrap_used)]
fn given_stored_unknown_key_code_when_resolving_binding_then_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[hotkey]\nkey_code = 999\nmodifiers = 262144\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.hotkey_binding(), HotkeyBinding::DEFAULT);
}

/// WHAT: Missing hotkey section uses the default
/// WHY: Older or hand-written files may omit it
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_config_file_when_loading_then_default_binding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.hotkey_binding(), HotkeyBinding::DEFAULT);
}
