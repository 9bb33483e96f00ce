//! Transition requests accepted by [`crate::reduce`].

use serde::{Deserialize, Serialize};
use upkeep_core::{
    ComparisonItem, DateRange, DrawerSide, FilterPatch, FontSize, ItemId, NotificationId,
    NotificationRequest, Payload, PriceRange, ThemeMode, ViewMode,
};

/// Every transition the UI state manager knows.
///
/// On the wire an action is `{"type": "<camelCaseName>", "payload": ...}`;
/// variants without data omit `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum UiAction {
    // ------------------------------------------------------------------
    // Modals
    // ------------------------------------------------------------------
    /// Open a modal, registering the name if it is new.
    OpenModal {
        name: String,
        #[serde(default)]
        data: Option<Payload>,
    },
    /// Close a registered modal and drop its data.
    CloseModal(String),
    CloseAllModals,
    /// Replace the data of a registered modal without changing visibility.
    UpdateModalData {
        name: String,
        #[serde(default)]
        data: Option<Payload>,
    },

    // ------------------------------------------------------------------
    // Sidebar
    // ------------------------------------------------------------------
    ToggleSidebar,
    SetSidebarOpen(bool),
    ToggleSidebarCollapse,
    SetActiveSection(String),

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------
    /// Shallow merge: only the fields present in the patch are written.
    SetFilter(FilterPatch),
    SetSearch(String),
    SetCategory(String),
    SetStatus(String),
    SetDateRange(DateRange),
    SetSortBy(String),
    ToggleSortOrder,
    AddTag(String),
    RemoveTag(String),
    ClearTags,
    SetPriceRange(PriceRange),
    ResetFilters,

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------
    SetPage(u32),
    SetPageSize(u32),
    SetTotalItems(u64),
    NextPage,
    PreviousPage,

    // ------------------------------------------------------------------
    // View mode and tabs
    // ------------------------------------------------------------------
    SetViewMode(ViewMode),
    ToggleViewMode,
    SetActiveTab {
        section: String,
        tab: String,
    },

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------
    SetLoading {
        key: String,
        value: bool,
    },
    SetGlobalLoading(bool),

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------
    /// The id is fixed when the action is built so that reducing stays
    /// deterministic. Payloads read from JSON without an id get a fresh one.
    AddNotification {
        #[serde(default = "NotificationId::new")]
        id: NotificationId,
        request: NotificationRequest,
    },
    RemoveNotification(NotificationId),
    ClearNotifications,

    // ------------------------------------------------------------------
    // Theme and layout
    // ------------------------------------------------------------------
    SetThemeMode(ThemeMode),
    ToggleTheme,
    SetPrimaryColor(String),
    SetFontSize(FontSize),
    ToggleCompactMode,
    ToggleToolbar,
    ToggleFooter,

    // ------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------
    SetFormDirty(bool),
    SetHasUnsavedChanges(bool),
    SetActiveForm(Option<String>),

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------
    ToggleSelection(ItemId),
    SelectAll(Vec<ItemId>),
    DeselectAll,
    SetBulkAction(Option<String>),

    // ------------------------------------------------------------------
    // Drawers
    // ------------------------------------------------------------------
    OpenDrawer {
        side: DrawerSide,
        #[serde(default)]
        content: Option<String>,
    },
    CloseDrawer(DrawerSide),
    ToggleDrawer(DrawerSide),

    // ------------------------------------------------------------------
    // Quick actions
    // ------------------------------------------------------------------
    ToggleQuickActions,
    AddRecentSearch(String),
    ClearRecentSearches,

    // ------------------------------------------------------------------
    // Onboarding
    // ------------------------------------------------------------------
    StartOnboarding,
    NextOnboardingStep,
    PreviousOnboardingStep,
    SkipOnboarding,
    CompleteOnboarding,

    // ------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------
    ToggleComparison,
    AddToComparison(ComparisonItem),
    RemoveFromComparison(ItemId),
    ClearComparison,

    // ------------------------------------------------------------------
    // Drag and drop
    // ------------------------------------------------------------------
    StartDragging(Payload),
    EndDragging,
    SetDropZone(Option<String>),

    /// Replace the whole aggregate with the start-up value.
    ResetUi,
}

impl UiAction {
    /// Build an `AddNotification` with a freshly minted id.
    pub fn add_notification(request: NotificationRequest) -> Self {
        UiAction::AddNotification {
            id: NotificationId::new(),
            request,
        }
    }

    pub fn open_modal(name: impl Into<String>, data: Option<Payload>) -> Self {
        UiAction::OpenModal {
            name: name.into(),
            data,
        }
    }

    pub fn set_loading(key: impl Into<String>, value: bool) -> Self {
        UiAction::SetLoading {
            key: key.into(),
            value,
        }
    }

    /// Stable name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::OpenModal { .. } => "open_modal",
            UiAction::CloseModal(_) => "close_modal",
            UiAction::CloseAllModals => "close_all_modals",
            UiAction::UpdateModalData { .. } => "update_modal_data",
            UiAction::ToggleSidebar => "toggle_sidebar",
            UiAction::SetSidebarOpen(_) => "set_sidebar_open",
            UiAction::ToggleSidebarCollapse => "toggle_sidebar_collapse",
            UiAction::SetActiveSection(_) => "set_active_section",
            UiAction::SetFilter(_) => "set_filter",
            UiAction::SetSearch(_) => "set_search",
            UiAction::SetCategory(_) => "set_category",
            UiAction::SetStatus(_) => "set_status",
            UiAction::SetDateRange(_) => "set_date_range",
            UiAction::SetSortBy(_) => "set_sort_by",
            UiAction::ToggleSortOrder => "toggle_sort_order",
            UiAction::AddTag(_) => "add_tag",
            UiAction::RemoveTag(_) => "remove_tag",
            UiAction::ClearTags => "clear_tags",
            UiAction::SetPriceRange(_) => "set_price_range",
            UiAction::ResetFilters => "reset_filters",
            UiAction::SetPage(_) => "set_page",
            UiAction::SetPageSize(_) => "set_page_size",
            UiAction::SetTotalItems(_) => "set_total_items",
            UiAction::NextPage => "next_page",
            UiAction::PreviousPage => "previous_page",
            UiAction::SetViewMode(_) => "set_view_mode",
            UiAction::ToggleViewMode => "toggle_view_mode",
            UiAction::SetActiveTab { .. } => "set_active_tab",
            UiAction::SetLoading { .. } => "set_loading",
            UiAction::SetGlobalLoading(_) => "set_global_loading",
            UiAction::AddNotification { .. } => "add_notification",
            UiAction::RemoveNotification(_) => "remove_notification",
            UiAction::ClearNotifications => "clear_notifications",
            UiAction::SetThemeMode(_) => "set_theme_mode",
            UiAction::ToggleTheme => "toggle_theme",
            UiAction::SetPrimaryColor(_) => "set_primary_color",
            UiAction::SetFontSize(_) => "set_font_size",
            UiAction::ToggleCompactMode => "toggle_compact_mode",
            UiAction::ToggleToolbar => "toggle_toolbar",
            UiAction::ToggleFooter => "toggle_footer",
            UiAction::SetFormDirty(_) => "set_form_dirty",
            UiAction::SetHasUnsavedChanges(_) => "set_has_unsaved_changes",
            UiAction::SetActiveForm(_) => "set_active_form",
            UiAction::ToggleSelection(_) => "toggle_selection",
            UiAction::SelectAll(_) => "select_all",
            UiAction::DeselectAll => "deselect_all",
            UiAction::SetBulkAction(_) => "set_bulk_action",
            UiAction::OpenDrawer { .. } => "open_drawer",
            UiAction::CloseDrawer(_) => "close_drawer",
            UiAction::ToggleDrawer(_) => "toggle_drawer",
            UiAction::ToggleQuickActions => "toggle_quick_actions",
            UiAction::AddRecentSearch(_) => "add_recent_search",
            UiAction::ClearRecentSearches => "clear_recent_searches",
            UiAction::StartOnboarding => "start_onboarding",
            UiAction::NextOnboardingStep => "next_onboarding_step",
            UiAction::PreviousOnboardingStep => "previous_onboarding_step",
            UiAction::SkipOnboarding => "skip_onboarding",
            UiAction::CompleteOnboarding => "complete_onboarding",
            UiAction::ToggleComparison => "toggle_comparison",
            UiAction::AddToComparison(_) => "add_to_comparison",
            UiAction::RemoveFromComparison(_) => "remove_from_comparison",
            UiAction::ClearComparison => "clear_comparison",
            UiAction::StartDragging(_) => "start_dragging",
            UiAction::EndDragging => "end_dragging",
            UiAction::SetDropZone(_) => "set_drop_zone",
            UiAction::ResetUi => "reset_ui",
        }
    }
}
