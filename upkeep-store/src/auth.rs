//! Login form flow against an external authentication service.

use crate::action::UiAction;
use crate::config::NotificationDurations;
use crate::error::{UiError, UiResult};
use crate::store::UiStore;
use serde::{Deserialize, Serialize};

pub const LOGIN_LOADING_KEY: &str = "login";
pub const DEFAULT_LOGIN_ERROR: &str = "Invalid credentials. Please try again.";
pub const UNEXPECTED_LOGIN_ERROR: &str = "Something went wrong. Please try again.";

/// What the service answered for a login attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoginOutcome {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: Option<String>) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// The service could not give an answer at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct AuthError(pub String);

pub trait AuthService {
    fn login(&mut self, email: &str, password: &str) -> Result<LoginOutcome, AuthError>;
}

/// Drives the loading flag and error toast around a login call.
#[derive(Debug, Clone, Default)]
pub struct LoginFlow {
    durations: NotificationDurations,
}

impl LoginFlow {
    pub fn new(durations: NotificationDurations) -> Self {
        Self { durations }
    }

    /// Reject credentials the service should never see.
    pub fn validate(email: &str, password: &str) -> UiResult<()> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(UiError::InvalidCredentials {
                reason: "email must contain '@'",
            });
        }
        if password.is_empty() {
            return Err(UiError::InvalidCredentials {
                reason: "password must not be empty",
            });
        }
        Ok(())
    }

    /// Validate, call the service with the `login` loading key set, and show
    /// an error toast on failure. Returns whether the login succeeded.
    ///
    /// Validation failures dispatch nothing.
    pub fn submit<S: AuthService + ?Sized>(
        &self,
        store: &mut UiStore,
        service: &mut S,
        email: &str,
        password: &str,
    ) -> UiResult<bool> {
        Self::validate(email, password)?;
        let email = email.trim();

        store.dispatch(UiAction::set_loading(LOGIN_LOADING_KEY, true));
        let result = service.login(email, password);
        store.dispatch(UiAction::set_loading(LOGIN_LOADING_KEY, false));

        let message = match result {
            Ok(outcome) if outcome.success => {
                tracing::info!("login succeeded");
                return Ok(true);
            }
            Ok(outcome) => {
                tracing::info!(error = ?outcome.error, "login rejected");
                outcome
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_LOGIN_ERROR.to_string())
            }
            Err(e) => {
                tracing::warn!(error = %e, "authentication service failed");
                UNEXPECTED_LOGIN_ERROR.to_string()
            }
        };
        store.notifier(self.durations).show_error(message);
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upkeep_core::NotificationKind;

    struct Scripted(Result<LoginOutcome, AuthError>, Vec<String>);

    impl AuthService for Scripted {
        fn login(&mut self, email: &str, _password: &str) -> Result<LoginOutcome, AuthError> {
            self.1.push(email.to_string());
            self.0.clone()
        }
    }

    #[test]
    fn test_validation_dispatches_nothing() {
        let mut store = UiStore::new();
        let mut service = Scripted(Ok(LoginOutcome::success()), Vec::new());
        let flow = LoginFlow::default();
        assert!(matches!(
            flow.submit(&mut store, &mut service, "no-at-sign", "pw"),
            Err(UiError::InvalidCredentials { .. })
        ));
        assert!(matches!(
            flow.submit(&mut store, &mut service, "a@b.c", ""),
            Err(UiError::InvalidCredentials { .. })
        ));
        assert_eq!(store.dispatch_count(), 0);
        assert!(service.1.is_empty());
    }

    #[test]
    fn test_success_clears_loading_without_toast() {
        let mut store = UiStore::new();
        let mut service = Scripted(Ok(LoginOutcome::success()), Vec::new());
        let ok = LoginFlow::default()
            .submit(&mut store, &mut service, "  tech@upkeep.io ", "secret")
            .unwrap();
        assert!(ok);
        assert_eq!(service.1, vec!["tech@upkeep.io"]);
        assert!(!store.state().is_loading(LOGIN_LOADING_KEY));
        assert!(store.state().notifications.is_empty());
    }

    #[test]
    fn test_rejection_uses_service_message_or_default() {
        let mut store = UiStore::new();
        let mut service = Scripted(
            Ok(LoginOutcome::failure(Some("Account locked".into()))),
            Vec::new(),
        );
        let flow = LoginFlow::default();
        assert!(!flow.submit(&mut store, &mut service, "a@b.c", "x").unwrap());
        let toast = &store.state().notifications[0];
        assert_eq!(toast.kind, NotificationKind::Error);
        assert_eq!(toast.message, "Account locked");
        assert_eq!(toast.duration_ms, 5000);

        let mut service = Scripted(Ok(LoginOutcome::failure(None)), Vec::new());
        flow.submit(&mut store, &mut service, "a@b.c", "x").unwrap();
        assert_eq!(store.state().notifications[1].message, DEFAULT_LOGIN_ERROR);
    }

    #[test]
    fn test_service_error_shows_generic_message() {
        let mut store = UiStore::new();
        let mut service = Scripted(Err(AuthError("timeout".into())), Vec::new());
        assert!(!LoginFlow::default()
            .submit(&mut store, &mut service, "a@b.c", "x")
            .unwrap());
        assert_eq!(
            store.state().notifications[0].message,
            UNEXPECTED_LOGIN_ERROR
        );
    }
}
