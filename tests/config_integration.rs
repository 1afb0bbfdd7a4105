//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use css_toolbox::config::{AppConfig, ClipboardBackend};
use serial_test::serial;
use std::fs;
use toolbox_core::{EditorKind, WallWidth};

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("CSSTB_SESSION__START_EDITOR", "gradients");
    std::env::set_var("CSSTB_CLIPBOARD__ACK_MILLIS", "500");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("CSSTB_SESSION__START_EDITOR");
    std::env::remove_var("CSSTB_CLIPBOARD__ACK_MILLIS");

    assert_eq!(config.session.start_kind().unwrap(), EditorKind::Gradients);
    assert_eq!(config.clipboard.ack_millis, 500);
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config.session.start_editor, defaults.session.start_editor);
    assert_eq!(config.shapes.default_sides, defaults.shapes.default_sides);
    assert_eq!(config.clipboard.backend, ClipboardBackend::File);
    assert_eq!(config.clipboard.ack_millis, 2000);
    assert!(config.presets.library.is_none());
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[shapes]\ndefault_sides = 20\nwall_width = \"arc\"\n\n[clipboard]\nbackend = \"file\"\npath = \"a.txt\"\nack_millis = 2000\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("user.toml"),
        "[shapes]\nwall_width = \"chord\"\n\n[clipboard]\nbackend = \"stdout\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.clipboard.backend, ClipboardBackend::Stdout);
    assert_eq!(config.clipboard.path, "a.txt");
    assert_eq!(config.shapes.default_sides, 20);

    let shapes = config.shapes.to_shapes_state().unwrap();
    assert_eq!(shapes.params.wall_width, WallWidth::Chord);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(dir.path().join("nothing-here")).unwrap();
    assert_eq!(config.preview.path, "preview.html");
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_malformed_value_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("user.toml"), "[clipboard]\nbackend = \"carrier-pigeon\"\n").unwrap();

    let err = AppConfig::load_from(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}
