//! Persisted user preferences.
//!
//! The store itself never touches disk. [`ThemePreferenceSync`] is the
//! collaborator that restores the theme mode at start-up and writes it back
//! whenever the theme slice changes.

use crate::store::UiStore;
use crate::UiAction;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use upkeep_core::{Slices, ThemeMode, UiState};

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key/value storage for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a pretty-printed JSON object on disk.
///
/// Every `set` rewrites the whole file; parent directories are created on
/// demand. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let values = serde_json::from_str::<BTreeMap<String, String>>(&contents)?;
        Ok(values)
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }
}

/// Keeps the persisted theme mode in step with the store.
pub struct ThemePreferenceSync<P> {
    prefs: Rc<RefCell<P>>,
    key: String,
    fallback: ThemeMode,
}

impl<P: PreferenceStore + 'static> ThemePreferenceSync<P> {
    pub fn new(prefs: P, key: impl Into<String>, fallback: ThemeMode) -> Self {
        Self {
            prefs: Rc::new(RefCell::new(prefs)),
            key: key.into(),
            fallback,
        }
    }

    /// The stored mode, or the fallback when nothing usable is stored.
    ///
    /// Read failures and unparsable values are logged and fall back.
    pub fn stored_mode(&self) -> ThemeMode {
        let stored = match self.prefs.borrow().get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read theme preference");
                None
            }
        };
        match stored.map(|raw| raw.parse::<ThemeMode>()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!(key = %self.key, error = %e, "ignoring stored theme");
                self.fallback
            }
            None => self.fallback,
        }
    }

    /// Dispatch the stored (or fallback) mode into `store`.
    pub fn restore(&self, store: &mut UiStore) -> ThemeMode {
        let mode = self.stored_mode();
        store.dispatch(UiAction::SetThemeMode(mode));
        tracing::info!(theme = %mode, "restored theme preference");
        mode
    }

    /// Register a subscriber that persists the mode whenever the theme slice
    /// changes. Write failures are logged and never reach the dispatcher.
    pub fn attach(&self, store: &mut UiStore) -> crate::store::SubscriptionId {
        let prefs = Rc::clone(&self.prefs);
        let key = self.key.clone();
        store.subscribe(move |state: &UiState, changed: Slices| {
            if changed.contains(Slices::THEME) {
                persist_mode(&mut *prefs.borrow_mut(), &key, state.theme.mode);
            }
        })
    }

    /// Write the current mode unconditionally.
    pub fn persist(&self, state: &UiState) {
        persist_mode(&mut *self.prefs.borrow_mut(), &self.key, state.theme.mode);
    }

    /// Shared handle to the underlying storage.
    pub fn preferences(&self) -> Rc<RefCell<P>> {
        Rc::clone(&self.prefs)
    }
}

fn persist_mode<P: PreferenceStore>(prefs: &mut P, key: &str, mode: ThemeMode) {
    match prefs.set(key, mode.as_str()) {
        Ok(()) => tracing::debug!(key, theme = %mode, "persisted theme preference"),
        Err(e) => tracing::warn!(key, error = %e, "failed to persist theme preference"),
    }
}
