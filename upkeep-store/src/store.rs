//! The dispatching store.

use crate::action::UiAction;
use crate::reducer::transition;
use std::fmt;
use upkeep_core::{Slices, UiState};

/// Token returned by [`UiStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&UiState, Slices)>;

/// Owns the current [`UiState`] and fans changes out to subscribers.
///
/// Dispatch is synchronous. Listeners run in registration order after the
/// new state is installed, and only when at least one slice changed. They
/// receive the state by shared reference, so they cannot dispatch back into
/// the store while it is notifying.
pub struct UiStore {
    state: UiState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    dispatch_count: u64,
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UiStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dispatch_count", &self.dispatch_count)
            .finish()
    }
}

impl UiStore {
    pub fn new() -> Self {
        Self::with_state(UiState::initial())
    }

    pub fn with_state(state: UiState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 0,
            dispatch_count: 0,
        }
    }

    /// Apply `action` and return the slices whose value changed.
    pub fn dispatch(&mut self, action: UiAction) -> Slices {
        let name = action.name();
        let (next, changed) = transition(&self.state, action);
        self.state = next;
        self.dispatch_count += 1;

        tracing::debug!(
            action = name,
            changed = ?changed,
            dispatch = self.dispatch_count,
            "dispatched ui action"
        );

        if !changed.is_empty() {
            for (_, listener) in self.listeners.iter_mut() {
                listener(&self.state, changed);
            }
        }
        changed
    }

    /// Dispatch every action in order and return the union of changes.
    pub fn dispatch_all<I>(&mut self, actions: I) -> Slices
    where
        I: IntoIterator<Item = UiAction>,
    {
        actions
            .into_iter()
            .fold(Slices::empty(), |acc, action| acc | self.dispatch(action))
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&UiState, Slices) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// A detached copy. Later dispatches never show through it.
    pub fn snapshot(&self) -> UiState {
        self.state.clone()
    }

    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }
}
