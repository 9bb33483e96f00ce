//! The `UiState` aggregate.

use crate::enums::{DrawerSide, ViewMode};
use crate::filters::Filters;
use crate::identity::{ItemId, NotificationId};
use crate::interaction::{Comparison, DragDrop, Forms, Loading, QuickActions, Selection};
use crate::layout::{ActiveTabs, DrawerState, Drawers, Layout, Sidebar, ThemeSettings};
use crate::modal::{ModalRegistry, ModalState};
use crate::notification::Notification;
use crate::onboarding::Onboarding;
use crate::pagination::Pagination;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

bitflags! {
    /// One bit per sub-record of [`UiState`]. Serializes as the flag names
    /// joined by `|`, e.g. `"FILTERS | PAGINATION"`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Slices: u32 {
        const MODALS = 1 << 0;
        const SIDEBAR = 1 << 1;
        const FILTERS = 1 << 2;
        const PAGINATION = 1 << 3;
        const VIEW_MODE = 1 << 4;
        const ACTIVE_TABS = 1 << 5;
        const LOADING = 1 << 6;
        const NOTIFICATIONS = 1 << 7;
        const THEME = 1 << 8;
        const LAYOUT = 1 << 9;
        const FORMS = 1 << 10;
        const SELECTION = 1 << 11;
        const DRAWERS = 1 << 12;
        const QUICK_ACTIONS = 1 << 13;
        const ONBOARDING = 1 << 14;
        const COMPARISON = 1 << 15;
        const DRAG_DROP = 1 << 16;
    }
}

/// Every piece of interaction state the views share.
///
/// Sub-records sit behind `Arc`: cloning a `UiState` is cheap, and an edit
/// through `Arc::make_mut` copies only the record it touches. A clone handed
/// to a consumer therefore never observes later edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub modals: Arc<ModalRegistry>,
    pub sidebar: Arc<Sidebar>,
    pub filters: Arc<Filters>,
    pub pagination: Arc<Pagination>,
    pub view_mode: ViewMode,
    pub active_tabs: Arc<ActiveTabs>,
    pub loading: Arc<Loading>,
    pub notifications: Arc<Vec<Notification>>,
    pub theme: Arc<ThemeSettings>,
    pub layout: Arc<Layout>,
    pub forms: Arc<Forms>,
    pub selection: Arc<Selection>,
    pub drawers: Arc<Drawers>,
    pub quick_actions: Arc<QuickActions>,
    pub onboarding: Arc<Onboarding>,
    pub comparison: Arc<Comparison>,
    pub drag_drop: Arc<DragDrop>,
}

impl Default for UiState {
    fn default() -> Self {
        Self::initial()
    }
}

impl UiState {
    /// The start-up aggregate. A full reset returns exactly this value.
    pub fn initial() -> Self {
        Self {
            modals: Arc::new(ModalRegistry::default()),
            sidebar: Arc::new(Sidebar::default()),
            filters: Arc::new(Filters::default()),
            pagination: Arc::new(Pagination::default()),
            view_mode: ViewMode::Grid,
            active_tabs: Arc::new(ActiveTabs::default()),
            loading: Arc::new(Loading::default()),
            notifications: Arc::new(Vec::new()),
            theme: Arc::new(ThemeSettings::default()),
            layout: Arc::new(Layout::default()),
            forms: Arc::new(Forms::default()),
            selection: Arc::new(Selection::default()),
            drawers: Arc::new(Drawers::default()),
            quick_actions: Arc::new(QuickActions::default()),
            onboarding: Arc::new(Onboarding::default()),
            comparison: Arc::new(Comparison::default()),
            drag_drop: Arc::new(DragDrop::default()),
        }
    }

    // ------------------------------------------------------------------
    // Lookups that never create entries
    // ------------------------------------------------------------------

    pub fn modal(&self, name: &str) -> Option<&ModalState> {
        self.modals.get(name)
    }

    pub fn is_modal_open(&self, name: &str) -> bool {
        self.modals.is_open(name)
    }

    pub fn is_loading(&self, key: &str) -> bool {
        self.loading.is_loading(key)
    }

    pub fn drawer(&self, side: DrawerSide) -> &DrawerState {
        self.drawers.get(side)
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selection.contains(id)
    }

    pub fn is_in_comparison(&self, id: &ItemId) -> bool {
        self.comparison.contains(id)
    }

    pub fn notification(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    // ------------------------------------------------------------------
    // Structural sharing
    // ------------------------------------------------------------------

    /// Point every sub-record that is value-equal to the one in `previous`
    /// back at `previous`'s allocation, and report which ones differ.
    ///
    /// After this call a slice is unchanged exactly when its `Arc`s are
    /// pointer-equal, which is what [`UiState::changed_since`] checks.
    pub fn share_unchanged(&mut self, previous: &UiState) -> Slices {
        let mut changed = Slices::empty();
        changed |= share(&mut self.modals, &previous.modals, Slices::MODALS);
        changed |= share(&mut self.sidebar, &previous.sidebar, Slices::SIDEBAR);
        changed |= share(&mut self.filters, &previous.filters, Slices::FILTERS);
        changed |= share(&mut self.pagination, &previous.pagination, Slices::PAGINATION);
        if self.view_mode != previous.view_mode {
            changed |= Slices::VIEW_MODE;
        }
        changed |= share(&mut self.active_tabs, &previous.active_tabs, Slices::ACTIVE_TABS);
        changed |= share(&mut self.loading, &previous.loading, Slices::LOADING);
        changed |= share(
            &mut self.notifications,
            &previous.notifications,
            Slices::NOTIFICATIONS,
        );
        changed |= share(&mut self.theme, &previous.theme, Slices::THEME);
        changed |= share(&mut self.layout, &previous.layout, Slices::LAYOUT);
        changed |= share(&mut self.forms, &previous.forms, Slices::FORMS);
        changed |= share(&mut self.selection, &previous.selection, Slices::SELECTION);
        changed |= share(&mut self.drawers, &previous.drawers, Slices::DRAWERS);
        changed |= share(
            &mut self.quick_actions,
            &previous.quick_actions,
            Slices::QUICK_ACTIONS,
        );
        changed |= share(&mut self.onboarding, &previous.onboarding, Slices::ONBOARDING);
        changed |= share(&mut self.comparison, &previous.comparison, Slices::COMPARISON);
        changed |= share(&mut self.drag_drop, &previous.drag_drop, Slices::DRAG_DROP);
        changed
    }

    /// Slices whose allocation differs from `previous`. Only meaningful after
    /// [`UiState::share_unchanged`] has run on `self`.
    pub fn changed_since(&self, previous: &UiState) -> Slices {
        let mut changed = Slices::empty();
        changed.set(Slices::MODALS, !Arc::ptr_eq(&self.modals, &previous.modals));
        changed.set(Slices::SIDEBAR, !Arc::ptr_eq(&self.sidebar, &previous.sidebar));
        changed.set(Slices::FILTERS, !Arc::ptr_eq(&self.filters, &previous.filters));
        changed.set(
            Slices::PAGINATION,
            !Arc::ptr_eq(&self.pagination, &previous.pagination),
        );
        changed.set(Slices::VIEW_MODE, self.view_mode != previous.view_mode);
        changed.set(
            Slices::ACTIVE_TABS,
            !Arc::ptr_eq(&self.active_tabs, &previous.active_tabs),
        );
        changed.set(Slices::LOADING, !Arc::ptr_eq(&self.loading, &previous.loading));
        changed.set(
            Slices::NOTIFICATIONS,
            !Arc::ptr_eq(&self.notifications, &previous.notifications),
        );
        changed.set(Slices::THEME, !Arc::ptr_eq(&self.theme, &previous.theme));
        changed.set(Slices::LAYOUT, !Arc::ptr_eq(&self.layout, &previous.layout));
        changed.set(Slices::FORMS, !Arc::ptr_eq(&self.forms, &previous.forms));
        changed.set(
            Slices::SELECTION,
            !Arc::ptr_eq(&self.selection, &previous.selection),
        );
        changed.set(Slices::DRAWERS, !Arc::ptr_eq(&self.drawers, &previous.drawers));
        changed.set(
            Slices::QUICK_ACTIONS,
            !Arc::ptr_eq(&self.quick_actions, &previous.quick_actions),
        );
        changed.set(
            Slices::ONBOARDING,
            !Arc::ptr_eq(&self.onboarding, &previous.onboarding),
        );
        changed.set(
            Slices::COMPARISON,
            !Arc::ptr_eq(&self.comparison, &previous.comparison),
        );
        changed.set(
            Slices::DRAG_DROP,
            !Arc::ptr_eq(&self.drag_drop, &previous.drag_drop),
        );
        changed
    }
}

fn share<T: PartialEq>(next: &mut Arc<T>, previous: &Arc<T>, slice: Slices) -> Slices {
    if Arc::ptr_eq(next, previous) {
        return Slices::empty();
    }
    if **next == **previous {
        *next = Arc::clone(previous);
        Slices::empty()
    } else {
        slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_serialize_by_name() {
        let changed = Slices::FILTERS | Slices::PAGINATION;
        let json = serde_json::to_string(&changed).unwrap();
        assert_eq!(json, "\"FILTERS | PAGINATION\"");
        let back: Slices = serde_json::from_str(&json).unwrap();
        assert_eq!(back, changed);
    }

    #[test]
    fn test_initial_literals() {
        let state = UiState::initial();
        assert!(state.sidebar.is_open);
        assert_eq!(state.sidebar.active_section, "dashboard");
        assert_eq!(state.filters.category, "all");
        assert_eq!(state.pagination.current_page, 1);
        assert_eq!(state.pagination.page_size, 10);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert_eq!(state.theme.primary_color, "#3b82f6");
        assert!(state.notifications.is_empty());
        assert!(state.modal("createUser").is_some());
        assert!(state.modal("nope").is_none());
    }

    #[test]
    fn test_clone_shares_every_slice() {
        let state = UiState::initial();
        let copy = state.clone();
        assert!(copy.changed_since(&state).is_empty());
    }

    #[test]
    fn test_share_unchanged_restores_identity_for_equal_values() {
        let previous = UiState::initial();
        let mut next = previous.clone();
        Arc::make_mut(&mut next.sidebar).is_open = true;
        Arc::make_mut(&mut next.filters).search = "leak".to_string();

        let changed = next.share_unchanged(&previous);
        assert_eq!(changed, Slices::FILTERS);
        assert!(Arc::ptr_eq(&next.sidebar, &previous.sidebar));
        assert_eq!(next.changed_since(&previous), Slices::FILTERS);
    }

    #[test]
    fn test_make_mut_never_touches_the_previous_value() {
        let previous = UiState::initial();
        let mut next = previous.clone();
        Arc::make_mut(&mut next.selection).toggle(ItemId::from("a"));
        assert!(previous.selection.is_empty());
        assert!(next.is_selected(&ItemId::from("a")));
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(UiState::initial()).unwrap();
        assert_eq!(json["viewMode"], "grid");
        assert_eq!(json["dragDrop"]["isDragging"], false);
        assert_eq!(json["modals"]["createUser"]["isOpen"], false);
        assert_eq!(json["filters"]["dateRange"]["start"], serde_json::Value::Null);
        let back: UiState = serde_json::from_value(json).unwrap();
        assert_eq!(back, UiState::initial());
    }
}
