//! Upkeep Test Utilities
//!
//! Shared test infrastructure for the Upkeep workspace:
//! - Proptest generators for records and actions
//! - Fake authentication services
//! - Fixtures for common scenarios
//! - Assertions about change sets and structural sharing

pub use upkeep_core::{
    ComparisonItem, DateRange, DrawerSide, FilterPatch, Filters, FontSize, ItemId,
    NotificationId, NotificationKind, NotificationRequest, PriceRange, Slices, SortOrder,
    ThemeMode, UiState, ViewMode, DEFAULT_MODALS,
};
pub use upkeep_store::{AuthError, AuthService, LoginOutcome, UiAction, UiConfig, UiStore};

// ============================================================================
// FAKE AUTH SERVICES
// ============================================================================

/// Accepts exactly one email/password pair and records every attempt.
#[derive(Debug, Clone)]
pub struct FakeAuth {
    email: String,
    password: String,
    rejection: Option<String>,
    pub attempts: Vec<String>,
}

impl FakeAuth {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            rejection: None,
            attempts: Vec::new(),
        }
    }

    /// Message returned alongside a rejected login.
    pub fn with_rejection(mut self, message: impl Into<String>) -> Self {
        self.rejection = Some(message.into());
        self
    }
}

impl AuthService for FakeAuth {
    fn login(&mut self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        self.attempts.push(email.to_string());
        if email == self.email && password == self.password {
            Ok(LoginOutcome::success())
        } else {
            Ok(LoginOutcome::failure(self.rejection.clone()))
        }
    }
}

/// Always fails to answer.
#[derive(Debug, Clone, Default)]
pub struct UnreachableAuth;

impl AuthService for UnreachableAuth {
    fn login(&mut self, _email: &str, _password: &str) -> Result<LoginOutcome, AuthError> {
        Err(AuthError("connection refused".to_string()))
    }
}

// ============================================================================
// GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for UI records and actions.

    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const TAGS: &[&str] = &["urgent", "roof", "hvac", "plumbing", "electrical"];
    const CATEGORIES: &[&str] = &["all", "hvac", "roofing"];
    const STATUSES: &[&str] = &["all", "open", "closed"];
    const SORT_KEYS: &[&str] = &["createdAt", "name", "price"];

    // === Identity ===

    /// Small pool so that sequences revisit the same ids.
    pub fn arb_item_id() -> impl Strategy<Value = ItemId> {
        prop_oneof![
            (0i64..8).prop_map(ItemId::from),
            "item-[a-d]".prop_map(ItemId::new),
        ]
    }

    pub fn arb_notification_id() -> impl Strategy<Value = NotificationId> {
        any::<[u8; 16]>().prop_map(|bytes| NotificationId::from_uuid(uuid::Uuid::from_bytes(bytes)))
    }

    // === Enums ===

    pub fn arb_view_mode() -> impl Strategy<Value = ViewMode> {
        prop_oneof![
            Just(ViewMode::Grid),
            Just(ViewMode::List),
            Just(ViewMode::Kanban),
            Just(ViewMode::Table),
        ]
    }

    pub fn arb_drawer_side() -> impl Strategy<Value = DrawerSide> {
        prop_oneof![Just(DrawerSide::Left), Just(DrawerSide::Right)]
    }

    pub fn arb_theme_mode() -> impl Strategy<Value = ThemeMode> {
        prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
    }

    pub fn arb_font_size() -> impl Strategy<Value = FontSize> {
        prop_oneof![
            Just(FontSize::Small),
            Just(FontSize::Medium),
            Just(FontSize::Large),
        ]
    }

    pub fn arb_notification_kind() -> impl Strategy<Value = NotificationKind> {
        prop_oneof![
            Just(NotificationKind::Success),
            Just(NotificationKind::Error),
            Just(NotificationKind::Warning),
            Just(NotificationKind::Info),
        ]
    }

    pub fn arb_sort_order() -> impl Strategy<Value = SortOrder> {
        prop_oneof![Just(SortOrder::Asc), Just(SortOrder::Desc)]
    }

    // === Payloads and records ===

    pub fn arb_payload() -> impl Strategy<Value = serde_json::Value> {
        prop_oneof![
            Just(serde_json::Value::Null),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-z]{0,8}".prop_map(|s| json!(s)),
            (any::<u16>(), "[a-z]{1,6}").prop_map(|(id, name)| json!({"id": id, "name": name})),
        ]
    }

    pub fn arb_modal_name() -> impl Strategy<Value = String> {
        prop_oneof![
            3 => prop::sample::select(DEFAULT_MODALS).prop_map(str::to_string),
            1 => "custom[A-C]".prop_map(String::from),
        ]
    }

    pub fn arb_tag() -> impl Strategy<Value = String> {
        prop::sample::select(TAGS).prop_map(str::to_string)
    }

    pub fn arb_date() -> impl Strategy<Value = Option<chrono::NaiveDate>> {
        prop::option::of((2020i32..2030, 1u32..=12, 1u32..=28))
            .prop_map(|ymd| ymd.and_then(|(y, m, d)| chrono::NaiveDate::from_ymd_opt(y, m, d)))
    }

    pub fn arb_date_range() -> impl Strategy<Value = DateRange> {
        (arb_date(), arb_date()).prop_map(|(start, end)| DateRange::new(start, end))
    }

    pub fn arb_price_range() -> impl Strategy<Value = PriceRange> {
        (0u32..500, 500u32..5000).prop_map(|(min, max)| PriceRange::new(min.into(), max.into()))
    }

    pub fn arb_filter_patch() -> impl Strategy<Value = FilterPatch> {
        (
            prop::option::of("[a-z ]{0,10}"),
            prop::option::of(prop::sample::select(CATEGORIES)),
            prop::option::of(prop::sample::select(STATUSES)),
            prop::option::of(arb_date_range()),
            prop::option::of(prop::sample::select(SORT_KEYS)),
            prop::option::of(arb_sort_order()),
            prop::option::of(prop::collection::vec(arb_tag(), 0..4)),
            prop::option::of(arb_price_range()),
        )
            .prop_map(
                |(search, category, status, date_range, sort_by, sort_order, tags, price)| {
                    let mut patch = FilterPatch::new();
                    if let Some(v) = search {
                        patch = patch.search(v);
                    }
                    if let Some(v) = category {
                        patch = patch.category(v);
                    }
                    if let Some(v) = status {
                        patch = patch.status(v);
                    }
                    if let Some(v) = date_range {
                        patch = patch.date_range(v);
                    }
                    if let Some(v) = sort_by {
                        patch = patch.sort_by(v);
                    }
                    if let Some(v) = sort_order {
                        patch = patch.sort_order(v);
                    }
                    if let Some(v) = tags {
                        patch = patch.tags(v);
                    }
                    if let Some(v) = price {
                        patch = patch.price(v);
                    }
                    patch
                },
            )
    }

    pub fn arb_notification_request() -> impl Strategy<Value = NotificationRequest> {
        (
            prop::option::of(arb_notification_kind()),
            "[A-Za-z ]{1,20}",
            prop::option::of(1u64..10_000),
        )
            .prop_map(|(kind, message, duration)| {
                let mut request = NotificationRequest::new(message);
                request.kind = kind;
                request.duration_ms = duration;
                request
            })
    }

    pub fn arb_comparison_item() -> impl Strategy<Value = ComparisonItem> {
        (arb_item_id(), prop::option::of("[A-Z][a-z]{2,8}")).prop_map(|(id, name)| {
            let item = ComparisonItem::new(id);
            match name {
                Some(name) => item.with_attribute("name", json!(name)),
                None => item,
            }
        })
    }

    // === Actions, grouped by slice ===

    pub fn arb_modal_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            (arb_modal_name(), prop::option::of(arb_payload()))
                .prop_map(|(name, data)| UiAction::OpenModal { name, data }),
            arb_modal_name().prop_map(UiAction::CloseModal),
            Just(UiAction::CloseAllModals),
            (arb_modal_name(), prop::option::of(arb_payload()))
                .prop_map(|(name, data)| UiAction::UpdateModalData { name, data }),
        ]
        .boxed()
    }

    pub fn arb_filter_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            arb_filter_patch().prop_map(UiAction::SetFilter),
            "[a-z]{0,6}".prop_map(UiAction::SetSearch),
            "[a-z]{1,6}".prop_map(UiAction::SetCategory),
            "[a-z]{1,6}".prop_map(UiAction::SetStatus),
            arb_date_range().prop_map(UiAction::SetDateRange),
            Just(UiAction::ToggleSortOrder),
            arb_tag().prop_map(UiAction::AddTag),
            arb_tag().prop_map(UiAction::RemoveTag),
            Just(UiAction::ClearTags),
            arb_price_range().prop_map(UiAction::SetPriceRange),
        ]
        .boxed()
    }

    pub fn arb_pagination_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            1 => (0u32..20).prop_map(UiAction::SetPage),
            1 => (0u32..50).prop_map(UiAction::SetPageSize),
            1 => (0u64..500).prop_map(UiAction::SetTotalItems),
            3 => Just(UiAction::NextPage),
            3 => Just(UiAction::PreviousPage),
        ]
        .boxed()
    }

    pub fn arb_chrome_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            Just(UiAction::ToggleSidebar),
            any::<bool>().prop_map(UiAction::SetSidebarOpen),
            Just(UiAction::ToggleSidebarCollapse),
            arb_view_mode().prop_map(UiAction::SetViewMode),
            Just(UiAction::ToggleViewMode),
            ("[a-z]{1,6}", "[a-z]{1,6}")
                .prop_map(|(section, tab)| UiAction::SetActiveTab { section, tab }),
            Just(UiAction::ToggleTheme),
            arb_theme_mode().prop_map(UiAction::SetThemeMode),
            arb_font_size().prop_map(UiAction::SetFontSize),
            prop_oneof![
                Just(UiAction::ToggleCompactMode),
                Just(UiAction::ToggleToolbar),
                Just(UiAction::ToggleFooter),
            ],
        ]
        .boxed()
    }

    pub fn arb_notification_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            3 => (arb_notification_id(), arb_notification_request())
                .prop_map(|(id, request)| UiAction::AddNotification { id, request }),
            1 => arb_notification_id().prop_map(UiAction::RemoveNotification),
            1 => Just(UiAction::ClearNotifications),
        ]
        .boxed()
    }

    pub fn arb_selection_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            3 => arb_item_id().prop_map(UiAction::ToggleSelection),
            1 => prop::collection::vec(arb_item_id(), 0..6).prop_map(UiAction::SelectAll),
            1 => Just(UiAction::DeselectAll),
            1 => prop::option::of("[a-z]{1,6}").prop_map(UiAction::SetBulkAction),
            1 => any::<bool>().prop_map(UiAction::SetFormDirty),
            1 => prop::option::of("[a-z]{1,6}").prop_map(UiAction::SetActiveForm),
            1 => ("[a-z]{1,6}", any::<bool>())
                .prop_map(|(key, value)| UiAction::SetLoading { key, value }),
        ]
        .boxed()
    }

    pub fn arb_drawer_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            (arb_drawer_side(), prop::option::of("[a-z]{1,6}"))
                .prop_map(|(side, content)| UiAction::OpenDrawer { side, content }),
            arb_drawer_side().prop_map(UiAction::CloseDrawer),
            arb_drawer_side().prop_map(UiAction::ToggleDrawer),
            Just(UiAction::ToggleQuickActions),
            "[a-z]{1,3}".prop_map(UiAction::AddRecentSearch),
            Just(UiAction::ClearRecentSearches),
        ]
        .boxed()
    }

    pub fn arb_onboarding_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            1 => Just(UiAction::StartOnboarding),
            3 => Just(UiAction::NextOnboardingStep),
            1 => Just(UiAction::PreviousOnboardingStep),
            1 => Just(UiAction::SkipOnboarding),
            1 => Just(UiAction::CompleteOnboarding),
        ]
        .boxed()
    }

    pub fn arb_comparison_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            1 => Just(UiAction::ToggleComparison),
            3 => arb_comparison_item().prop_map(UiAction::AddToComparison),
            1 => arb_item_id().prop_map(UiAction::RemoveFromComparison),
            1 => Just(UiAction::ClearComparison),
            1 => arb_payload().prop_map(UiAction::StartDragging),
            1 => Just(UiAction::EndDragging),
            1 => prop::option::of("[a-z]{1,6}").prop_map(UiAction::SetDropZone),
        ]
        .boxed()
    }

    /// Any action except `ResetUi`.
    pub fn arb_ui_action() -> BoxedStrategy<UiAction> {
        prop_oneof![
            arb_modal_action(),
            arb_filter_action(),
            arb_pagination_action(),
            arb_chrome_action(),
            arb_notification_action(),
            arb_selection_action(),
            arb_drawer_action(),
            arb_onboarding_action(),
            arb_comparison_action(),
        ]
        .boxed()
    }

    pub fn arb_action_sequence(max_len: usize) -> impl Strategy<Value = Vec<UiAction>> {
        prop::collection::vec(arb_ui_action(), 0..max_len)
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Pre-built scenarios.

    use super::*;
    use upkeep_store::reduce;

    /// A complete, valid configuration file.
    pub const SAMPLE_CONFIG_TOML: &str = r#"
preferences_path = "upkeep/prefs.json"
theme_key = "theme"
fallback_theme = "light"
log_format = "pretty"

[notifications]
success_ms = 3000
error_ms = 5000
warning_ms = 4000
info_ms = 3000

[comparison]
max_items = 4
"#;

    pub fn sample_config() -> UiConfig {
        match UiConfig::from_toml(SAMPLE_CONFIG_TOML) {
            Ok(config) => config,
            Err(e) => panic!("sample config must parse: {e}"),
        }
    }

    /// Fold `actions` over the initial state.
    pub fn state_after<I>(actions: I) -> UiState
    where
        I: IntoIterator<Item = UiAction>,
    {
        actions
            .into_iter()
            .fold(UiState::initial(), |state, action| reduce(&state, action))
    }

    /// A state with something set in most slices.
    pub fn busy_state() -> UiState {
        state_after([
            UiAction::open_modal("editUser", Some(serde_json::json!({"id": 42}))),
            UiAction::ToggleSidebar,
            UiAction::SetSearch("boiler".to_string()),
            UiAction::AddTag("urgent".to_string()),
            UiAction::SetTotalItems(120),
            UiAction::NextPage,
            UiAction::ToggleViewMode,
            UiAction::SetGlobalLoading(true),
            UiAction::add_notification(NotificationRequest::new("Saved")),
            UiAction::ToggleTheme,
            UiAction::SelectAll(vec![ItemId::from(1_i64), ItemId::from(2_i64)]),
            UiAction::OpenDrawer {
                side: DrawerSide::Right,
                content: Some("details".to_string()),
            },
            UiAction::AddRecentSearch("pump".to_string()),
            UiAction::StartOnboarding,
            UiAction::ToggleComparison,
            UiAction::AddToComparison(ComparisonItem::new("unit-7")),
            UiAction::StartDragging(serde_json::json!({"id": 3})),
        ])
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub mod assertions {
    //! Checks about change sets and structural sharing.

    use super::*;

    /// Every slice outside `changed` still shares its allocation with
    /// `before`, and every slice inside it does not.
    #[track_caller]
    pub fn assert_sharing_matches(before: &UiState, after: &UiState, changed: Slices) {
        let actual = after.changed_since(before);
        assert_eq!(
            actual, changed,
            "pointer identity {:?} disagrees with reported changes {:?}",
            actual, changed
        );
    }

    #[track_caller]
    pub fn assert_unique<T: PartialEq + std::fmt::Debug>(items: &[T]) {
        for (i, item) in items.iter().enumerate() {
            assert!(
                !items[i + 1..].contains(item),
                "duplicate entry {:?} in {:?}",
                item,
                items
            );
        }
    }
}
