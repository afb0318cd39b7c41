mod common;

use common::Driver;
use crossterm::event::{KeyCode, KeyModifiers};
use donate_away::config::Config;
use donate_away::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use donate_away::state::DashboardTab;
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);

    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    // Untouched vim bindings still resolve.
    assert_eq!(
        loaded
            .keymap
            .get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_handwritten_toml_keymap() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
theme = "light"

[keymap]
preset = "vim"

[[keymap.overrides]]
key = "ctrl+n"
action = "next_tab"
description = "Next dashboard tab"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('n'), KeyModifiers::CONTROL),
        Some(Action::NextTab)
    );
    // Tab was the preset key for next_tab and is shadowed now.
    assert_eq!(
        config.keymap.get_action(KeyCode::Tab, KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_override_shadows_preset_binding() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("w", Action::MoveUp)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE),
        None
    );
    assert_eq!(
        keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_display_reflects_overrides() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("x", Action::Quit)],
    };
    assert_eq!(keymap.key_display(Action::Quit), "X");
    assert!(keymap.footer_dashboard().contains("X: Quit"));
}

#[test]
fn test_vim_keys_switch_dashboard_tabs() {
    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    let mut d = Driver::with_config(config);
    d.choose_ngo_role().sign_in("123", "123");

    d.press(KeyCode::Char('l'));
    assert_eq!(d.app.navigation().dashboard_tab(), DashboardTab::Pickups);
    d.press(KeyCode::Char('h')).press(KeyCode::Char('h'));
    assert_eq!(d.app.navigation().dashboard_tab(), DashboardTab::Profile);
}
