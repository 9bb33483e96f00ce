//! Upkeep Core - UI State Records
//!
//! Plain data structures for the client-side UI state of the Upkeep
//! maintenance tracker. Every sub-record of the [`UiState`] aggregate lives
//! here together with the record-level edits it supports.
//!
//! This crate does not dispatch anything and performs no I/O. The store,
//! the action type and the reducer live in `upkeep-store`.

pub mod enums;
pub mod error;
pub mod filters;
pub mod identity;
pub mod interaction;
pub mod layout;
pub mod modal;
pub mod notification;
pub mod onboarding;
pub mod pagination;
pub mod state;

pub use enums::{DrawerSide, FontSize, NotificationKind, SortOrder, ThemeMode, ViewMode};
pub use error::ParseError;
pub use filters::{DateRange, FilterPatch, Filters, PriceRange};
pub use identity::{ItemId, NotificationId};
pub use interaction::{
    Comparison, ComparisonItem, DragDrop, Forms, Loading, QuickActions, Selection,
    GLOBAL_LOADING_KEY, RECENT_SEARCH_LIMIT,
};
pub use layout::{
    ActiveTabs, DrawerState, Drawers, Layout, Sidebar, ThemeSettings, DEFAULT_PRIMARY_COLOR,
};
pub use modal::{ModalRegistry, ModalState, DEFAULT_MODALS};
pub use notification::{Notification, NotificationRequest, DEFAULT_NOTIFICATION_DURATION_MS};
pub use onboarding::Onboarding;
pub use pagination::Pagination;
pub use state::{Slices, UiState};

/// Opaque JSON payload carried by modals, drag sources and comparison items.
pub type Payload = serde_json::Value;
