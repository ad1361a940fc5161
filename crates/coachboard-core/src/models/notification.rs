//! In-app notification records

use super::Priority;
use crate::view::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-bar notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: String,
    /// Route the notification links to.
    #[serde(default)]
    pub action_url: Option<String>,
    pub priority: Priority,
}

impl Record for Notification {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type() {
        let json = r#"{
            "id": "1",
            "title": "New Client Appointment",
            "message": "Sarah Johnson has scheduled a new appointment",
            "type": "info",
            "isRead": false,
            "createdAt": "2024-08-26T08:30:00Z",
            "actionUrl": "/calendar/appointments",
            "priority": "medium"
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.action_url.as_deref(), Some("/calendar/appointments"));
    }
}
