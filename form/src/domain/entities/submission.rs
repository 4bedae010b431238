//! Submission outcome entities
//!
//! What one submission attempt produced, and the transient status message
//! the presentation layer shows for it.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SUCCESS_MESSAGE: &str = "Application submitted successfully!";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// How long a status message stays up before auto-dismissing
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Outcome of one submission attempt; there is no partial success
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// Transient status message with an auto-dismiss duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    #[serde(skip)]
    pub duration: Duration,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            duration,
            raised_at: Utc::now(),
        }
    }

    pub fn from_result(result: &SubmissionResult, duration: Duration) -> Self {
        let kind = if result.success {
            NotificationKind::Success
        } else {
            NotificationKind::Error
        };
        Self::new(kind, result.message.clone(), duration)
    }

    /// When the view should take the message down
    pub fn dismiss_at(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.duration)
            .ok()
            .and_then(|d| self.raised_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.dismiss_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_result_carries_fixed_message() {
        let result = SubmissionResult::succeeded();
        assert!(result.success);
        assert_eq!(result.message, "Application submitted successfully!");
    }

    #[test]
    fn notification_kind_follows_result() {
        let ok = Notification::from_result(
            &SubmissionResult::succeeded(),
            DEFAULT_NOTIFICATION_DURATION,
        );
        let err = Notification::from_result(
            &SubmissionResult::failed("Error submitting: NOT_FOUND"),
            DEFAULT_NOTIFICATION_DURATION,
        );

        assert_eq!(ok.kind, NotificationKind::Success);
        assert_eq!(err.kind, NotificationKind::Error);
        assert_eq!(err.message, "Error submitting: NOT_FOUND");
    }

    #[test]
    fn notification_expires_after_duration() {
        let notification = Notification::new(
            NotificationKind::Success,
            "done",
            Duration::from_secs(5),
        );
        let raised = notification.raised_at;

        assert!(!notification.is_expired(raised + chrono::Duration::seconds(4)));
        assert!(notification.is_expired(raised + chrono::Duration::seconds(5)));
    }
}
