//! Dispatch with configured defaults applied.
//!
//! `upkeep-replay` feeds every action through [`dispatch_configured`] so the
//! `[notifications]` durations and the `[comparison]` cap from the config
//! behave the way they do behind [`Notifier`](crate::Notifier) and
//! [`ComparisonHandle`](crate::ComparisonHandle).

use crate::action::UiAction;
use crate::config::UiConfig;
use crate::error::UiResult;
use crate::store::UiStore;
use upkeep_core::Slices;

/// Dispatch `action`, filling in what the config decides.
///
/// An `AddNotification` without a duration gets the configured one for its
/// kind. An `AddToComparison` goes through the capped tray and fails with
/// [`UiError::ComparisonFull`](crate::UiError::ComparisonFull) when full.
/// Everything else is dispatched unchanged.
pub fn dispatch_configured(
    store: &mut UiStore,
    config: &UiConfig,
    action: UiAction,
) -> UiResult<Slices> {
    match action {
        UiAction::AddNotification { id, mut request } => {
            if request.duration_ms.is_none() {
                let kind = request.kind.unwrap_or_default();
                request.duration_ms = Some(config.notifications.for_kind(kind));
            }
            Ok(store.dispatch(UiAction::AddNotification { id, request }))
        }
        UiAction::AddToComparison(item) => {
            let before = store.snapshot();
            store
                .comparison()
                .add_capped(item, config.comparison.max_items)?;
            Ok(store.state().changed_since(&before))
        }
        other => Ok(store.dispatch(other)),
    }
}
