//! Auto-dismissal of toast notifications.
//!
//! The reducer has no clock. The consumer owns this scheduler, feeds it the
//! current `Instant`, and lets it dispatch `RemoveNotification` for toasts
//! whose display time has run out.

use crate::action::UiAction;
use crate::store::UiStore;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use upkeep_core::{NotificationId, UiState};

#[derive(Debug, Clone, Default)]
pub struct DismissScheduler {
    deadlines: BTreeMap<NotificationId, Instant>,
}

impl DismissScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss `id` once `duration_ms` has passed after `now`. Rescheduling
    /// an id replaces its deadline.
    pub fn schedule(&mut self, id: NotificationId, duration_ms: u64, now: Instant) {
        let deadline = now + Duration::from_millis(duration_ms);
        self.deadlines.insert(id, deadline);
    }

    /// Forget `id`, e.g. after a manual dismissal. Returns whether it was
    /// pending.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    pub fn is_scheduled(&self, id: NotificationId) -> bool {
        self.deadlines.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Ids whose deadline is at or before `now`, in id order.
    pub fn due(&self, now: Instant) -> Vec<NotificationId> {
        self.deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Earliest pending deadline, for a caller that wants to sleep until it.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Remove and return the due ids.
    pub fn drain_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let due = self.due(now);
        for id in &due {
            self.deadlines.remove(id);
        }
        due
    }

    /// Dispatch `RemoveNotification` for every due id. Returns how many
    /// were dismissed.
    pub fn fire_due(&mut self, store: &mut UiStore, now: Instant) -> usize {
        let due = self.drain_due(now);
        for id in &due {
            tracing::debug!(notification = %id, "auto-dismissing notification");
            store.dispatch(UiAction::RemoveNotification(*id));
        }
        due.len()
    }

    /// Track every notification in `state` that is not yet scheduled and
    /// drop deadlines for notifications no longer shown.
    pub fn sync(&mut self, state: &UiState, now: Instant) {
        self.deadlines
            .retain(|id, _| state.notifications.iter().any(|n| n.id == *id));
        for notification in state.notifications.iter() {
            if !self.deadlines.contains_key(&notification.id) {
                self.schedule(notification.id, notification.duration_ms, now);
            }
        }
    }
}
