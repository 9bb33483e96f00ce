//! Tests for the pieces around the store: preferences, config, login flow,
//! handles and auto-dismissal.

use std::io::Write as _;
use std::time::{Duration, Instant};
use upkeep_core::{ComparisonItem, NotificationKind, ThemeMode};
use upkeep_store::auth::{DEFAULT_LOGIN_ERROR, LOGIN_LOADING_KEY, UNEXPECTED_LOGIN_ERROR};
use upkeep_store::{
    dispatch_configured, ConfigError, DismissScheduler, JsonFilePreferences, LoginFlow,
    PreferenceStore, ThemePreferenceSync, UiAction, UiConfig, UiError, UiSelectors, UiStore,
};
use upkeep_test_utils::fixtures::{sample_config, SAMPLE_CONFIG_TOML};
use upkeep_test_utils::{FakeAuth, UnreachableAuth};

// === Preferences ===

#[test]
fn json_preferences_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    let mut prefs = JsonFilePreferences::new(&path);
    assert_eq!(prefs.get("theme").unwrap(), None);
    prefs.set("theme", "dark").unwrap();
    prefs.set("density", "compact").unwrap();

    let reopened = JsonFilePreferences::new(&path);
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(reopened.get("density").unwrap().as_deref(), Some("compact"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["theme"], "dark");
}

#[test]
fn corrupt_preferences_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(JsonFilePreferences::new(&path).get("theme").is_err());
}

#[test]
fn theme_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let sync = ThemePreferenceSync::new(JsonFilePreferences::new(&path), "theme", ThemeMode::Light);
        let mut store = UiStore::new();
        sync.restore(&mut store);
        sync.attach(&mut store);
        store.dispatch(UiAction::ToggleTheme);
    }

    let sync = ThemePreferenceSync::new(JsonFilePreferences::new(&path), "theme", ThemeMode::Light);
    let mut store = UiStore::new();
    assert_eq!(sync.restore(&mut store), ThemeMode::Dark);
    assert!(store.state().is_dark());
}

#[test]
fn unwritable_preferences_never_break_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes every write fail.
    let path = dir.path().join("prefs.json");
    std::fs::create_dir_all(&path).unwrap();

    let sync = ThemePreferenceSync::new(JsonFilePreferences::new(&path), "theme", ThemeMode::Dark);
    let mut store = UiStore::new();
    assert_eq!(sync.restore(&mut store), ThemeMode::Dark);
    sync.attach(&mut store);
    store.dispatch(UiAction::ToggleTheme);
    assert!(store.state().is_light());
}

// === Config ===

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CONFIG_TOML.as_bytes()).unwrap();
    let config = UiConfig::load_from(file.path()).unwrap();
    assert_eq!(config, sample_config());
    assert_eq!(config.comparison.max_items, 4);
}

#[test]
fn invalid_config_values_are_rejected_on_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let text = SAMPLE_CONFIG_TOML.replace("max_items = 4", "max_items = 0");
    file.write_all(text.as_bytes()).unwrap();
    assert!(matches!(
        UiConfig::load_from(file.path()),
        Err(ConfigError::InvalidValue {
            field: "comparison.max_items",
            ..
        })
    ));
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        UiConfig::load_from(&dir.path().join("absent.toml")),
        Err(ConfigError::Io(_))
    ));
}

// === Login flow ===

#[test]
fn login_success_leaves_no_trace() {
    let mut store = UiStore::new();
    let mut auth = FakeAuth::new("ops@upkeep.io", "hunter2");
    let flow = LoginFlow::new(sample_config().notifications);
    assert!(flow.submit(&mut store, &mut auth, "ops@upkeep.io", "hunter2").unwrap());
    assert_eq!(auth.attempts.len(), 1);
    assert!(!store.state().is_loading(LOGIN_LOADING_KEY));
    assert!(store.state().notifications.is_empty());
}

#[test]
fn login_rejection_shows_error_toast() {
    let mut store = UiStore::new();
    let mut auth = FakeAuth::new("ops@upkeep.io", "hunter2");
    let flow = LoginFlow::default();
    assert!(!flow.submit(&mut store, &mut auth, "ops@upkeep.io", "wrong").unwrap());
    let toast = &store.state().notifications[0];
    assert_eq!(toast.kind, NotificationKind::Error);
    assert_eq!(toast.message, DEFAULT_LOGIN_ERROR);

    let mut auth = FakeAuth::new("ops@upkeep.io", "hunter2").with_rejection("Too many attempts");
    flow.submit(&mut store, &mut auth, "ops@upkeep.io", "wrong").unwrap();
    assert_eq!(store.state().notifications[1].message, "Too many attempts");
}

#[test]
fn login_service_failure_shows_generic_toast() {
    let mut store = UiStore::new();
    let ok = LoginFlow::default()
        .submit(&mut store, &mut UnreachableAuth, "ops@upkeep.io", "pw")
        .unwrap();
    assert!(!ok);
    assert_eq!(store.state().notifications[0].message, UNEXPECTED_LOGIN_ERROR);
}

#[test]
fn invalid_credentials_never_reach_the_service() {
    let mut store = UiStore::new();
    let mut auth = FakeAuth::new("ops@upkeep.io", "pw");
    let result = LoginFlow::default().submit(&mut store, &mut auth, "   ", "pw");
    assert!(matches!(result, Err(UiError::InvalidCredentials { .. })));
    assert!(auth.attempts.is_empty());
    assert_eq!(store.dispatch_count(), 0);
}

// === Handles and dismissal ===

#[test]
fn comparison_cap_comes_from_config() {
    let config = sample_config();
    let mut store = UiStore::new();
    let mut tray = store.comparison();
    for id in 0..config.comparison.max_items as i64 {
        assert!(tray
            .add_capped(ComparisonItem::new(id), config.comparison.max_items)
            .unwrap());
    }
    let err = tray
        .add_capped(ComparisonItem::new(99_i64), config.comparison.max_items)
        .unwrap_err();
    assert_eq!(err.to_string(), "Comparison tray is full (4 items)");
}

#[test]
fn toasts_expire_by_kind_duration() {
    let start = Instant::now();
    let mut store = UiStore::new();
    let mut scheduler = DismissScheduler::new();

    let mut notifier = store.notifier(sample_config().notifications);
    let info = notifier.show_info("Synced");
    let warning = notifier.show_warning("Low stock");
    let error = notifier.show_error("Upload failed");
    scheduler.sync(store.state(), start);

    assert_eq!(scheduler.fire_due(&mut store, start + Duration::from_millis(3000)), 1);
    assert!(store.state().notification(info).is_none());

    store.notifier(sample_config().notifications).dismiss(warning);
    scheduler.sync(store.state(), start);
    assert!(!scheduler.is_scheduled(warning));

    assert_eq!(scheduler.fire_due(&mut store, start + Duration::from_millis(5000)), 1);
    assert!(store.state().notification(error).is_none());
    assert_eq!(scheduler.pending(), 0);
}

// === Replay input ===

#[test]
fn replayed_duplicate_notification_line_adds_one_toast() {
    let line = r#"{"type":"addNotification","payload":{"id":"0190a5b2-7c3e-7d4f-8a1b-2c3d4e5f6a7b","request":{"message":"Saved"}}}"#;
    let config = UiConfig::default();
    let mut store = UiStore::new();
    for _ in 0..2 {
        let action: UiAction = serde_json::from_str(line).unwrap();
        dispatch_configured(&mut store, &config, action).unwrap();
    }
    assert_eq!(store.state().notifications.len(), 1);
    assert_eq!(store.dispatch_count(), 2);
}

#[test]
fn demo_actions_replay_cleanly() {
    let text = include_str!("../../demos/actions.ndjson");
    let mut config = UiConfig::from_toml(include_str!("../../demos/upkeep-ui.toml")).unwrap();
    config.notifications.success_ms = 2500;
    let mut store = UiStore::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let action: UiAction = serde_json::from_str(line).unwrap();
        dispatch_configured(&mut store, &config, action).unwrap();
    }
    let state = store.state();
    assert_eq!(state.notifications[0].duration_ms, 2500);
    assert_eq!(state.filters.search, "boiler");
    assert_eq!(state.pagination.current_page, 2);
    assert_eq!(state.comparison_count(), 1);
    assert!(state.is_dark());
    assert!(!state.is_modal_open("editUser"));
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.onboarding.completed_steps, vec![0]);
}

#[test]
fn demo_config_is_valid() {
    let config = UiConfig::from_toml(include_str!("../../demos/upkeep-ui.toml")).unwrap();
    config.validate().unwrap();
}
