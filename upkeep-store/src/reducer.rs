//! The pure transition function.
//!
//! `reduce` never fails and never performs I/O. Each arm edits only the
//! sub-record it owns through `Arc::make_mut`, so every other slice of the
//! returned state still shares its allocation with the input.

use crate::action::UiAction;
use std::sync::Arc;
use upkeep_core::{Filters, Slices, UiState, GLOBAL_LOADING_KEY};

/// Apply `action` to `state` and return the next aggregate.
pub fn reduce(state: &UiState, action: UiAction) -> UiState {
    transition(state, action).0
}

/// Like [`reduce`], also reporting which slices changed value.
///
/// Slices that were touched but end up value-equal to the input are pointed
/// back at the input's allocation, so pointer identity and the returned set
/// always agree.
pub fn transition(state: &UiState, action: UiAction) -> (UiState, Slices) {
    let mut next = state.clone();
    apply(&mut next, action);
    let changed = next.share_unchanged(state);
    (next, changed)
}

fn apply(s: &mut UiState, action: UiAction) {
    match action {
        // Modals
        UiAction::OpenModal { name, data } => Arc::make_mut(&mut s.modals).open(name, data),
        UiAction::CloseModal(name) => {
            if s.modals.contains(&name) {
                Arc::make_mut(&mut s.modals).close(&name);
            }
        }
        UiAction::CloseAllModals => Arc::make_mut(&mut s.modals).close_all(),
        UiAction::UpdateModalData { name, data } => {
            if s.modals.contains(&name) {
                Arc::make_mut(&mut s.modals).update_data(&name, data);
            }
        }

        // Sidebar
        UiAction::ToggleSidebar => {
            let sidebar = Arc::make_mut(&mut s.sidebar);
            sidebar.is_open = !sidebar.is_open;
        }
        UiAction::SetSidebarOpen(open) => Arc::make_mut(&mut s.sidebar).is_open = open,
        UiAction::ToggleSidebarCollapse => {
            let sidebar = Arc::make_mut(&mut s.sidebar);
            sidebar.is_collapsed = !sidebar.is_collapsed;
        }
        UiAction::SetActiveSection(section) => {
            Arc::make_mut(&mut s.sidebar).active_section = section
        }

        // Filters
        UiAction::SetFilter(patch) => Arc::make_mut(&mut s.filters).apply(patch),
        UiAction::SetSearch(search) => Arc::make_mut(&mut s.filters).search = search,
        UiAction::SetCategory(category) => Arc::make_mut(&mut s.filters).category = category,
        UiAction::SetStatus(status) => Arc::make_mut(&mut s.filters).status = status,
        UiAction::SetDateRange(range) => Arc::make_mut(&mut s.filters).date_range = range,
        UiAction::SetSortBy(sort_by) => Arc::make_mut(&mut s.filters).sort_by = sort_by,
        UiAction::ToggleSortOrder => Arc::make_mut(&mut s.filters).toggle_sort_order(),
        UiAction::AddTag(tag) => {
            if !s.filters.has_tag(&tag) {
                Arc::make_mut(&mut s.filters).add_tag(tag);
            }
        }
        UiAction::RemoveTag(tag) => {
            if s.filters.has_tag(&tag) {
                Arc::make_mut(&mut s.filters).remove_tag(&tag);
            }
        }
        UiAction::ClearTags => Arc::make_mut(&mut s.filters).tags.clear(),
        UiAction::SetPriceRange(range) => Arc::make_mut(&mut s.filters).price = range,
        UiAction::ResetFilters => s.filters = Arc::new(Filters::default()),

        // Pagination
        UiAction::SetPage(page) => Arc::make_mut(&mut s.pagination).set_page(page),
        UiAction::SetPageSize(size) => Arc::make_mut(&mut s.pagination).set_page_size(size),
        UiAction::SetTotalItems(total) => {
            Arc::make_mut(&mut s.pagination).set_total_items(total)
        }
        UiAction::NextPage => {
            if s.pagination.has_next() {
                Arc::make_mut(&mut s.pagination).next_page();
            }
        }
        UiAction::PreviousPage => {
            if s.pagination.has_previous() {
                Arc::make_mut(&mut s.pagination).previous_page();
            }
        }

        // View mode and tabs
        UiAction::SetViewMode(mode) => s.view_mode = mode,
        UiAction::ToggleViewMode => s.view_mode = s.view_mode.next(),
        UiAction::SetActiveTab { section, tab } => {
            Arc::make_mut(&mut s.active_tabs).set(section, tab)
        }

        // Loading
        UiAction::SetLoading { key, value } => Arc::make_mut(&mut s.loading).set(key, value),
        UiAction::SetGlobalLoading(value) => {
            Arc::make_mut(&mut s.loading).set(GLOBAL_LOADING_KEY, value)
        }

        // Notifications
        // Ids stay unique: a replayed or cloned add is ignored.
        UiAction::AddNotification { id, request } => {
            if s.notification(id).is_none() {
                Arc::make_mut(&mut s.notifications).push(request.into_notification(id));
            }
        }
        UiAction::RemoveNotification(id) => {
            if s.notification(id).is_some() {
                Arc::make_mut(&mut s.notifications).retain(|n| n.id != id);
            }
        }
        UiAction::ClearNotifications => {
            if !s.notifications.is_empty() {
                Arc::make_mut(&mut s.notifications).clear();
            }
        }

        // Theme and layout
        UiAction::SetThemeMode(mode) => Arc::make_mut(&mut s.theme).mode = mode,
        UiAction::ToggleTheme => Arc::make_mut(&mut s.theme).toggle_mode(),
        UiAction::SetPrimaryColor(color) => Arc::make_mut(&mut s.theme).primary_color = color,
        UiAction::SetFontSize(size) => Arc::make_mut(&mut s.theme).font_size = size,
        UiAction::ToggleCompactMode => {
            let layout = Arc::make_mut(&mut s.layout);
            layout.compact_mode = !layout.compact_mode;
        }
        UiAction::ToggleToolbar => {
            let layout = Arc::make_mut(&mut s.layout);
            layout.show_toolbar = !layout.show_toolbar;
        }
        UiAction::ToggleFooter => {
            let layout = Arc::make_mut(&mut s.layout);
            layout.show_footer = !layout.show_footer;
        }

        // Forms
        UiAction::SetFormDirty(dirty) => Arc::make_mut(&mut s.forms).is_dirty = dirty,
        UiAction::SetHasUnsavedChanges(unsaved) => {
            Arc::make_mut(&mut s.forms).has_unsaved_changes = unsaved
        }
        UiAction::SetActiveForm(form) => Arc::make_mut(&mut s.forms).active_form = form,

        // Selection
        UiAction::ToggleSelection(id) => Arc::make_mut(&mut s.selection).toggle(id),
        UiAction::SelectAll(ids) => Arc::make_mut(&mut s.selection).select_all(ids),
        UiAction::DeselectAll => Arc::make_mut(&mut s.selection).deselect_all(),
        UiAction::SetBulkAction(action) => Arc::make_mut(&mut s.selection).bulk_action = action,

        // Drawers
        UiAction::OpenDrawer { side, content } => {
            Arc::make_mut(&mut s.drawers).open(side, content)
        }
        UiAction::CloseDrawer(side) => Arc::make_mut(&mut s.drawers).close(side),
        UiAction::ToggleDrawer(side) => Arc::make_mut(&mut s.drawers).toggle(side),

        // Quick actions
        UiAction::ToggleQuickActions => {
            let quick = Arc::make_mut(&mut s.quick_actions);
            quick.is_open = !quick.is_open;
        }
        UiAction::AddRecentSearch(search) => {
            Arc::make_mut(&mut s.quick_actions).remember_search(search)
        }
        UiAction::ClearRecentSearches => {
            Arc::make_mut(&mut s.quick_actions).recent_searches.clear()
        }

        // Onboarding
        UiAction::StartOnboarding => Arc::make_mut(&mut s.onboarding).start(),
        UiAction::NextOnboardingStep => Arc::make_mut(&mut s.onboarding).next(),
        UiAction::PreviousOnboardingStep => Arc::make_mut(&mut s.onboarding).previous(),
        UiAction::SkipOnboarding => Arc::make_mut(&mut s.onboarding).skip(),
        UiAction::CompleteOnboarding => Arc::make_mut(&mut s.onboarding).complete(),

        // Comparison
        UiAction::ToggleComparison => Arc::make_mut(&mut s.comparison).toggle(),
        UiAction::AddToComparison(item) => {
            if !s.comparison.contains(&item.id) {
                Arc::make_mut(&mut s.comparison).add(item);
            }
        }
        UiAction::RemoveFromComparison(id) => {
            if s.comparison.contains(&id) {
                Arc::make_mut(&mut s.comparison).remove(&id);
            }
        }
        UiAction::ClearComparison => Arc::make_mut(&mut s.comparison).items.clear(),

        // Drag and drop
        UiAction::StartDragging(item) => Arc::make_mut(&mut s.drag_drop).start(item),
        UiAction::EndDragging => Arc::make_mut(&mut s.drag_drop).end(),
        UiAction::SetDropZone(zone) => Arc::make_mut(&mut s.drag_drop).drop_zone = zone,

        UiAction::ResetUi => *s = UiState::initial(),
    }
}
