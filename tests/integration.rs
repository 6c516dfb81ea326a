// SPDX-License-Identifier: MPL-2.0
use bannerboard::config::{self, Config, GeneralConfig, StoreConfig};
use bannerboard::i18n::{self, I18n, Language};
use bannerboard::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en".to_string()),
            theme_mode: ThemeMode::Dark,
        },
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded, initial_config);
    let language = i18n::resolve_language(None, loaded.general.language.as_deref());
    let i18n_en = I18n::new(language);
    assert_eq!(i18n_en.tr("logout"), "Logout");

    // 2. Change config to es
    let spanish_config = Config {
        general: GeneralConfig {
            language: Some("es".to_string()),
            ..initial_config.general
        },
    };
    config::save_to_path(&spanish_config, &temp_config_file_path)
        .expect("Failed to write spanish config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load spanish config from path");
    let language = i18n::resolve_language(None, loaded.general.language.as_deref());
    assert_eq!(language, Language::Es);
    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
}

#[test]
fn test_cli_language_beats_config() {
    assert_eq!(i18n::resolve_language(Some("en"), Some("es")), Language::En);
    assert_eq!(i18n::resolve_language(Some("xx"), Some("es")), Language::Es);
    assert_eq!(i18n::resolve_language(None, None), Language::Pt);
}

#[test]
fn test_missing_key_falls_back_to_raw_key() {
    let i18n = I18n::new(Language::En);
    assert_eq!(i18n.tr("no-such-key"), "no-such-key");
}

#[test]
fn test_store_config_from_environment_lookup() {
    let store = StoreConfig::from_lookup(|name| match name {
        config::ENV_STORE_URL => Some("https://project.example.co/".to_string()),
        config::ENV_STORE_KEY => Some("anon".to_string()),
        _ => None,
    });
    assert_eq!(store.url, "https://project.example.co");
    assert!(store.is_complete());

    let empty = StoreConfig::from_lookup(|_| None);
    assert!(!empty.is_complete());
    assert!(empty.url.is_empty());
}
