//! Derived read-only views over [`UiState`].
//!
//! The per-record accessors live on `UiState` itself; this module adds the
//! computed views that views would otherwise recompute by hand.

use serde::Serialize;
use upkeep_core::{Pagination, UiState, ViewMode};

/// Pagination record plus the values derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<&Pagination> for PaginationView {
    fn from(p: &Pagination) -> Self {
        Self {
            current_page: p.current_page,
            page_size: p.page_size,
            total_items: p.total_items,
            total_pages: p.total_pages(),
            has_next: p.has_next(),
            has_previous: p.has_previous(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModeFlags {
    pub is_grid: bool,
    pub is_list: bool,
    pub is_kanban: bool,
    pub is_table: bool,
}

impl From<ViewMode> for ViewModeFlags {
    fn from(mode: ViewMode) -> Self {
        Self {
            is_grid: mode == ViewMode::Grid,
            is_list: mode == ViewMode::List,
            is_kanban: mode == ViewMode::Kanban,
            is_table: mode == ViewMode::Table,
        }
    }
}

/// Computed accessors over the aggregate.
pub trait UiSelectors {
    fn pagination_view(&self) -> PaginationView;
    fn view_mode_flags(&self) -> ViewModeFlags;
    fn selection_count(&self) -> usize;
    fn has_selection(&self) -> bool;
    fn comparison_count(&self) -> usize;
    fn is_dark(&self) -> bool;
    fn is_light(&self) -> bool {
        !self.is_dark()
    }
    /// True while any loading key is set.
    fn is_busy(&self) -> bool;
    fn has_notifications(&self) -> bool;
}

impl UiSelectors for UiState {
    fn pagination_view(&self) -> PaginationView {
        PaginationView::from(&*self.pagination)
    }

    fn view_mode_flags(&self) -> ViewModeFlags {
        ViewModeFlags::from(self.view_mode)
    }

    fn selection_count(&self) -> usize {
        self.selection.len()
    }

    fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    fn comparison_count(&self) -> usize {
        self.comparison.items.len()
    }

    fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    fn is_busy(&self) -> bool {
        self.loading.any()
    }

    fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reduce, UiAction};
    use upkeep_core::{ComparisonItem, ItemId};

    #[test]
    fn test_pagination_view_derives_totals() {
        let state = reduce(&UiState::initial(), UiAction::SetTotalItems(95));
        let view = state.pagination_view();
        assert_eq!(view.total_pages, 10);
        assert!(view.has_next);
        assert!(!view.has_previous);
    }

    #[test]
    fn test_empty_collection_has_no_pages() {
        let view = UiState::initial().pagination_view();
        assert_eq!(view.total_pages, 0);
        assert!(!view.has_next);
    }

    #[test]
    fn test_view_mode_flags_exactly_one_set() {
        for mode in ViewMode::all() {
            let flags = ViewModeFlags::from(*mode);
            let set = [flags.is_grid, flags.is_list, flags.is_kanban, flags.is_table]
                .iter()
                .filter(|f| **f)
                .count();
            assert_eq!(set, 1, "{mode}");
        }
    }

    #[test]
    fn test_counts_and_theme() {
        let mut state = UiState::initial();
        for action in [
            UiAction::ToggleSelection(ItemId::from("a")),
            UiAction::AddToComparison(ComparisonItem::new("b")),
            UiAction::ToggleTheme,
            UiAction::set_loading("processing", true),
        ] {
            state = reduce(&state, action);
        }
        assert_eq!(state.selection_count(), 1);
        assert!(state.has_selection());
        assert_eq!(state.comparison_count(), 1);
        assert!(state.is_dark());
        assert!(!state.is_light());
        assert!(state.is_busy());
    }
}
