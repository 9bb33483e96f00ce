//! Toast notifications.

use crate::enums::NotificationKind;
use crate::identity::NotificationId;
use serde::{Deserialize, Serialize};

/// Display time applied when a request does not name one.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}

/// What a caller asks to show. Kind and duration fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<NotificationKind>,
    pub message: String,
    #[serde(rename = "duration", default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: None,
            message: message.into(),
            duration_ms: None,
        }
    }

    pub fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn into_notification(self, id: NotificationId) -> Notification {
        Notification {
            id,
            kind: self.kind.unwrap_or_default(),
            message: self.message,
            duration_ms: self.duration_ms.unwrap_or(DEFAULT_NOTIFICATION_DURATION_MS),
        }
    }
}
