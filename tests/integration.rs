// SPDX-License-Identifier: MPL-2.0
use bibliosena::config::{self, Config};
use bibliosena::favorites::{FavoriteIndicators, FavoritesStore};
use bibliosena::i18n::I18n;
use bibliosena::session::{self, SessionKind};
use bibliosena::storage::{keys, FileStore, KeyValueStore};
use bibliosena::ui::theming::ThemeMode;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("toast-title-info"), "Information");

    let mut spanish = loaded;
    spanish.general.language = Some("es".to_string());
    config::save_to_path(&spanish, &config_path).expect("Failed to write config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "es");
    assert_eq!(i18n.tr("toast-title-info"), "Información");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    let i18n = I18n::new(Some("es".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "es");
}

#[test]
fn partial_settings_file_fills_in_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[general]\ntheme_mode = \"light\"\n\n[notifications]\ntoast_duration_ms = 90000\n",
    )
    .expect("write settings");

    let config = config::load_from_path(&path).expect("valid settings");
    assert_eq!(config.general.theme_mode, ThemeMode::Light);
    assert_eq!(config.backend.api_url, "http://127.0.0.1:5000");
    assert!(config.login.particles);
    assert_eq!(config.notifications.toast_duration(), Duration::from_secs(30));
}

#[test]
fn invalid_settings_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[general\ntheme_mode = ").expect("write settings");

    assert!(config::load_from_path(&path).is_err());
}

#[test]
fn favorites_survive_reopening_the_store() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("local_storage.json");

    let favorites = FavoritesStore::new(FileStore::new(&path));
    assert!(favorites.toggle("libro-1"));
    assert!(favorites.toggle("libro-2"));
    assert!(!favorites.toggle("libro-1"));

    let reopened = FavoritesStore::new(FileStore::new(&path));
    assert_eq!(reopened.list(), vec!["libro-2".to_string()]);

    let raw = fs::read_to_string(&path).expect("storage file");
    let map: serde_json::Value = serde_json::from_str(&raw).expect("json object");
    assert_eq!(map[keys::FAVORITES], r#"["libro-2"]"#);
}

#[test]
fn corrupt_storage_file_reads_as_no_favorites() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("local_storage.json");
    fs::write(&path, "{ not json").expect("write storage");

    let favorites = FavoritesStore::new(FileStore::new(&path));
    assert!(favorites.list().is_empty());
    assert!(!favorites.contains("libro-1"));
}

#[test]
fn corrupt_storage_file_recovers_on_first_write() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("local_storage.json");
    fs::write(&path, "{ truncated").expect("write storage");

    let favorites = FavoritesStore::new(FileStore::new(&path));
    assert!(favorites.toggle("libro-9"));
    assert_eq!(favorites.list(), vec!["libro-9".to_string()]);

    let store = FileStore::new(&path);
    session::store_login(&store, "admin-token", None).expect("store login");
    assert_eq!(session::token(&store).as_deref(), Some("admin-token"));
    assert_eq!(favorites.list(), vec!["libro-9".to_string()]);
}

#[test]
fn indicators_follow_the_stored_list() {
    let dir = tempdir().expect("temp dir");
    let favorites = FavoritesStore::new(FileStore::new(dir.path().join("local_storage.json")));
    favorites.toggle("a");

    let stored = favorites.list();
    let mut indicators = FavoriteIndicators::initialize(["a", "b"], &stored);
    assert!(indicators.list[0].active);
    assert!(!indicators.list[1].active);

    favorites.toggle("b");
    favorites.refresh_indicators("b", &mut indicators);
    assert!(indicators.list.iter().all(|toggle| toggle.active));
}

#[test]
fn session_lifecycle_on_disk() {
    let dir = tempdir().expect("temp dir");
    let store = FileStore::new(dir.path().join("local_storage.json"));

    assert_eq!(session::kind(&store), SessionKind::Guest);
    assert_eq!(session::display_name(&store), session::GUEST_NAME);

    let profile = serde_json::from_str(r#"{"id":"42","name":"Ana","documento":"1001"}"#)
        .expect("profile");
    session::store_login(&store, "user-42", Some(&profile)).expect("store login");

    assert_eq!(session::kind(&store), SessionKind::User("42".to_string()));
    assert_eq!(session::display_name(&store), "Ana");
    assert_eq!(store.get_item(keys::MY_ID).unwrap().as_deref(), Some("42"));

    session::logout(&store);
    for key in [keys::TOKEN, keys::USER_DATA, keys::MY_ID] {
        assert_eq!(store.get_item(key).unwrap(), None);
    }
}

#[test]
fn admin_token_greets_the_administrator() {
    let dir = tempdir().expect("temp dir");
    let store = FileStore::new(dir.path().join("local_storage.json"));
    session::store_login(&store, "admin-token", None).expect("store login");

    assert_eq!(session::kind(&store), SessionKind::Admin);
    assert_eq!(session::display_name(&store), session::ADMIN_NAME);
}
