//! Check-in records
//!
//! One record type backs all four check-in screens (all / quick view /
//! submitted / upcoming / unsubmitted); each screen has its own store and the
//! fields that do not apply to a lifecycle stage stay `None`.

use super::Priority;
use crate::view::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInStatus {
    /// Answered by the client.
    Submitted,
    /// Waiting for the client.
    Pending,
    /// Past its due date without an answer.
    Overdue,
    /// Scheduled for a future date.
    Scheduled,
    /// Sent to the client, not yet answered.
    Sent,
}

impl CheckInStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckInStatus::Submitted => "submitted",
            CheckInStatus::Pending => "pending",
            CheckInStatus::Overdue => "overdue",
            CheckInStatus::Scheduled => "scheduled",
            CheckInStatus::Sent => "sent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckInStatus::Submitted => "Submitted",
            CheckInStatus::Pending => "Pending",
            CheckInStatus::Overdue => "Overdue",
            CheckInStatus::Scheduled => "Scheduled",
            CheckInStatus::Sent => "Sent",
        }
    }
}

impl fmt::Display for CheckInStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client check-in (questionnaire round-trip).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub id: String,
    pub client_name: String,
    pub client_mobile: String,
    pub group: String,
    pub subscription: String,
    /// Name of the check-in form ("Weekly Progress", ...).
    pub check_in: String,
    pub status: CheckInStatus,
    /// Next scheduled round as `YYYY-MM-DD`.
    #[serde(default)]
    pub next_check_in: Option<String>,
    #[serde(default)]
    pub related_programs: Option<String>,
    #[serde(default)]
    pub program_report: Option<String>,
    /// Submission time as RFC 3339.
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    /// Coach-applied label ("Positive", "Needs Attention", ...).
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub automatic_cycle: bool,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// When an upcoming round is scheduled, RFC 3339.
    #[serde(default)]
    pub scheduled_for: Option<String>,
    /// When an unanswered round was sent, RFC 3339.
    #[serde(default)]
    pub send_at: Option<String>,
    /// Team member who assigned or sent the round.
    #[serde(default)]
    pub assigned_by: Option<String>,
    #[serde(default)]
    pub team_note: Option<String>,
}

impl CheckIn {
    pub fn label_str(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

impl Record for CheckIn {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        let status: CheckInStatus = serde_json::from_str("\"submitted\"").unwrap();
        assert_eq!(status, CheckInStatus::Submitted);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"submitted\"");
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "1",
            "clientName": "Sarah Johnson",
            "clientMobile": "+1 (555) 123-4567",
            "group": "Weight Loss",
            "subscription": "Premium",
            "checkIn": "Weekly Progress",
            "status": "pending"
        }"#;
        let checkin: CheckIn = serde_json::from_str(json).unwrap();
        assert!(checkin.note.is_none());
        assert!(!checkin.automatic_cycle);
        assert_eq!(checkin.label_str(), "");
    }
}
