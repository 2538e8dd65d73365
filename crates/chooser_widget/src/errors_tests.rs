//! Tests for chooser error types.

use super::*;

#[test]
fn missing_handle_names_the_handle() {
    let error = ChooserError::MissingHandle {
        handle: "editor".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("\"editor\""));
    assert!(message.contains("layout"));
}

#[test]
fn required_config_missing_names_the_key() {
    let error = ChooserError::RequiredConfigMissing {
        key: "input_name".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Required input config value \"input_name\" is missing."
    );
}

#[test]
fn defaults_unavailable_names_path_and_reason() {
    let error = ChooserError::DefaultsUnavailable {
        path: "/etc/chooser/defaults.toml".to_string(),
        reason: "no such file".to_string(),
    };

    let message = error.to_string();
    assert!(message.contains("/etc/chooser/defaults.toml"));
    assert!(message.contains("no such file"));
}

#[test]
fn errors_are_comparable() {
    let a = ChooserError::RequiredConfigMissing {
        key: "input_name".to_string(),
    };
    let b = ChooserError::RequiredConfigMissing {
        key: "input_name".to_string(),
    };

    assert_eq!(a, b);
}
