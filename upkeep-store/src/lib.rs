//! Upkeep Store - UI State Manager
//!
//! The single owner of the client's UI state. Views describe what happened
//! as a [`UiAction`]; [`reduce`] turns the current [`UiState`] and an action
//! into the next state; [`UiStore`] holds the current value, counts
//! dispatches and tells subscribers which slices changed.
//!
//! Around that core sit the collaborators a real client needs: borrowed
//! handles for common dispatches, an auto-dismiss scheduler for toasts,
//! theme persistence, the login flow, TOML configuration and tracing set-up.

pub mod action;
pub mod auth;
pub mod config;
pub mod dismiss;
pub mod error;
pub mod handles;
pub mod prefs;
pub mod reducer;
pub mod replay;
pub mod selectors;
pub mod store;
pub mod telemetry;

pub use action::UiAction;
pub use auth::{AuthError, AuthService, LoginFlow, LoginOutcome};
pub use config::{ComparisonConfig, ConfigError, LogFormat, NotificationDurations, UiConfig};
pub use dismiss::DismissScheduler;
pub use error::{UiError, UiResult};
pub use handles::{ComparisonHandle, DrawerHandle, LoadingHandle, ModalHandle, Notifier};
pub use prefs::{
    JsonFilePreferences, MemoryPreferences, PreferenceError, PreferenceStore, ThemePreferenceSync,
};
pub use reducer::{reduce, transition};
pub use replay::dispatch_configured;
pub use selectors::{PaginationView, UiSelectors, ViewModeFlags};
pub use store::{SubscriptionId, UiStore};

pub use upkeep_core::{Slices, UiState};
