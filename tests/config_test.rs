//! Integration tests for Settings loading from an explicit config file.
//!
//! These run without a global config or AVLTREE_* variables, so the explicit
//! file is layered directly over compiled defaults.

use std::fs;

use tempfile::TempDir;

use avltree::application::{ApplicationError, RenderStyle};
use avltree::config::Settings;
use avltree::domain::TraversalOrder;

#[test]
fn given_partial_config_file_when_load_then_overrides_only_given_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avltree.toml");
    fs::write(
        &path,
        r#"
default_order = "levelorder"
style = "tree"
"#,
    )
    .unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.default_order, TraversalOrder::LevelOrder);
    assert_eq!(settings.style, RenderStyle::Tree);
    assert!(!settings.allow_negative, "default kept");
    assert!(settings.show_steps, "default kept");
}

#[test]
fn given_unknown_order_in_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avltree.toml");
    fs::write(&path, "default_order = \"zigzag\"\n").unwrap();

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load(Some(&dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_template_when_parsed_then_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avltree.toml");
    fs::write(&path, Settings::template()).unwrap();

    let settings = Settings::load(Some(&path)).expect("template is valid TOML");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_settings_when_serialized_then_file_reloads_to_same_values() {
    let original = Settings {
        default_order: TraversalOrder::PostOrder,
        allow_negative: true,
        show_steps: false,
        style: RenderStyle::Tree,
    };
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("avltree.toml");
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    assert_eq!(Settings::load(Some(&path)).unwrap(), original);
}
