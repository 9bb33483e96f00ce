//! Borrowed convenience wrappers that turn calls into dispatches.

use crate::action::UiAction;
use crate::config::NotificationDurations;
use crate::error::UiError;
use crate::store::UiStore;
use upkeep_core::{
    ComparisonItem, DrawerSide, ItemId, NotificationId, NotificationKind, NotificationRequest,
    Payload,
};

impl UiStore {
    pub fn notifier(&mut self, durations: NotificationDurations) -> Notifier<'_> {
        Notifier {
            store: self,
            durations,
        }
    }

    pub fn modal(&mut self, name: impl Into<String>) -> ModalHandle<'_> {
        ModalHandle {
            store: self,
            name: name.into(),
        }
    }

    pub fn drawer(&mut self, side: DrawerSide) -> DrawerHandle<'_> {
        DrawerHandle { store: self, side }
    }

    pub fn loading(&mut self, key: impl Into<String>) -> LoadingHandle<'_> {
        LoadingHandle {
            store: self,
            key: key.into(),
        }
    }

    pub fn comparison(&mut self) -> ComparisonHandle<'_> {
        ComparisonHandle { store: self }
    }
}

/// Shows toasts with per-kind default durations.
pub struct Notifier<'a> {
    store: &'a mut UiStore,
    durations: NotificationDurations,
}

impl Notifier<'_> {
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let request = NotificationRequest::new(message)
            .with_kind(kind)
            .with_duration_ms(self.durations.for_kind(kind));
        self.show_request(request)
    }

    /// Show a fully specified request; unset fields take the reducer defaults.
    pub fn show_request(&mut self, request: NotificationRequest) -> NotificationId {
        let id = NotificationId::new();
        self.store
            .dispatch(UiAction::AddNotification { id, request });
        id
    }

    pub fn show_success(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Success, message)
    }

    pub fn show_error(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Error, message)
    }

    pub fn show_warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Warning, message)
    }

    pub fn show_info(&mut self, message: impl Into<String>) -> NotificationId {
        self.show(NotificationKind::Info, message)
    }

    pub fn dismiss(&mut self, id: NotificationId) {
        self.store.dispatch(UiAction::RemoveNotification(id));
    }
}

pub struct ModalHandle<'a> {
    store: &'a mut UiStore,
    name: String,
}

impl ModalHandle<'_> {
    pub fn open(&mut self, data: Option<Payload>) {
        self.store
            .dispatch(UiAction::open_modal(self.name.clone(), data));
    }

    pub fn close(&mut self) {
        self.store.dispatch(UiAction::CloseModal(self.name.clone()));
    }

    pub fn update_data(&mut self, data: Option<Payload>) {
        self.store.dispatch(UiAction::UpdateModalData {
            name: self.name.clone(),
            data,
        });
    }

    pub fn is_open(&self) -> bool {
        self.store.state().is_modal_open(&self.name)
    }

    pub fn data(&self) -> Option<&Payload> {
        self.store
            .state()
            .modal(&self.name)
            .and_then(|m| m.data.as_ref())
    }
}

pub struct DrawerHandle<'a> {
    store: &'a mut UiStore,
    side: DrawerSide,
}

impl DrawerHandle<'_> {
    pub fn open(&mut self, content: Option<String>) {
        self.store.dispatch(UiAction::OpenDrawer {
            side: self.side,
            content,
        });
    }

    pub fn close(&mut self) {
        self.store.dispatch(UiAction::CloseDrawer(self.side));
    }

    pub fn toggle(&mut self) {
        self.store.dispatch(UiAction::ToggleDrawer(self.side));
    }

    pub fn is_open(&self) -> bool {
        self.store.state().drawer(self.side).is_open
    }

    pub fn content(&self) -> Option<&str> {
        self.store.state().drawer(self.side).content.as_deref()
    }
}

pub struct LoadingHandle<'a> {
    store: &'a mut UiStore,
    key: String,
}

impl LoadingHandle<'_> {
    pub fn start(&mut self) {
        self.store.dispatch(UiAction::set_loading(self.key.clone(), true));
    }

    pub fn stop(&mut self) {
        self.store.dispatch(UiAction::set_loading(self.key.clone(), false));
    }

    pub fn is_loading(&self) -> bool {
        self.store.state().is_loading(&self.key)
    }
}

pub struct ComparisonHandle<'a> {
    store: &'a mut UiStore,
}

impl ComparisonHandle<'_> {
    /// Add `item` unless the tray already holds `max` entries.
    ///
    /// Returns `Ok(false)` when an item with the same id is already present.
    pub fn add_capped(&mut self, item: ComparisonItem, max: usize) -> Result<bool, UiError> {
        let tray = &self.store.state().comparison;
        if tray.contains(&item.id) {
            return Ok(false);
        }
        if tray.items.len() >= max {
            tracing::debug!(max, "comparison tray full");
            return Err(UiError::ComparisonFull { max });
        }
        self.store.dispatch(UiAction::AddToComparison(item));
        Ok(true)
    }

    pub fn remove(&mut self, id: ItemId) {
        self.store.dispatch(UiAction::RemoveFromComparison(id));
    }

    pub fn clear(&mut self) {
        self.store.dispatch(UiAction::ClearComparison);
    }

    pub fn toggle(&mut self) {
        self.store.dispatch(UiAction::ToggleComparison);
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.store.state().is_in_comparison(id)
    }

    pub fn len(&self) -> usize {
        self.store.state().comparison.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notifier_uses_kind_durations() {
        let mut store = UiStore::new();
        let id = store
            .notifier(NotificationDurations::default())
            .show_error("Save failed");
        let n = store.state().notification(id).unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.duration_ms, 5000);

        let id = store
            .notifier(NotificationDurations::default())
            .show_warning("Careful");
        assert_eq!(store.state().notification(id).unwrap().duration_ms, 4000);
    }

    #[test]
    fn test_notifier_dismiss() {
        let mut store = UiStore::new();
        let mut notifier = store.notifier(NotificationDurations::default());
        let id = notifier.show_success("Saved");
        notifier.dismiss(id);
        assert!(store.state().notifications.is_empty());
    }

    #[test]
    fn test_modal_handle() {
        let mut store = UiStore::new();
        let mut modal = store.modal("deleteConfirm");
        modal.open(Some(json!({"id": 4})));
        assert!(modal.is_open());
        assert_eq!(modal.data(), Some(&json!({"id": 4})));
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.data(), None);
    }

    #[test]
    fn test_drawer_and_loading_handles() {
        let mut store = UiStore::new();
        let mut drawer = store.drawer(DrawerSide::Left);
        drawer.open(Some("nav".into()));
        assert!(drawer.is_open());
        assert_eq!(drawer.content(), Some("nav"));

        let mut loading = store.loading("uploadingFile");
        loading.start();
        assert!(loading.is_loading());
        loading.stop();
        assert!(!loading.is_loading());
    }

    #[test]
    fn test_comparison_cap() {
        let mut store = UiStore::new();
        let mut tray = store.comparison();
        assert!(tray.add_capped(ComparisonItem::new(1_i64), 2).unwrap());
        assert!(tray.add_capped(ComparisonItem::new(2_i64), 2).unwrap());
        assert!(!tray.add_capped(ComparisonItem::new(2_i64), 2).unwrap());
        assert!(matches!(
            tray.add_capped(ComparisonItem::new(3_i64), 2),
            Err(UiError::ComparisonFull { max: 2 })
        ));
        assert_eq!(tray.len(), 2);
    }
}
