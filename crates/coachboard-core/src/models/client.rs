//! Client and follow-up records

use super::Priority;
use crate::view::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Subscription status of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    Active,
    Inactive,
    Pending,
    OnHold,
    Prestart,
    Expired,
    Refunded,
    NoSubscription,
}

impl ClientStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Pending => "pending",
            ClientStatus::OnHold => "on-hold",
            ClientStatus::Prestart => "prestart",
            ClientStatus::Expired => "expired",
            ClientStatus::Refunded => "refunded",
            ClientStatus::NoSubscription => "no-subscription",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
            ClientStatus::Pending => "Pending",
            ClientStatus::OnHold => "On Hold",
            ClientStatus::Prestart => "Pre-start",
            ClientStatus::Expired => "Expired",
            ClientStatus::Refunded => "Refunded",
            ClientStatus::NoSubscription => "No Subscription",
        }
    }

    pub fn all() -> &'static [ClientStatus] {
        &[
            ClientStatus::Active,
            ClientStatus::Inactive,
            ClientStatus::Pending,
            ClientStatus::OnHold,
            ClientStatus::Prestart,
            ClientStatus::Expired,
            ClientStatus::Refunded,
            ClientStatus::NoSubscription,
        ]
    }
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coached client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: ClientStatus,
    /// Join date as `YYYY-MM-DD`.
    pub join_date: String,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Record for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Kind of scheduled follow-up with a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FollowUpKind {
    CheckIn,
    Assessment,
    Payment,
    ProgramUpdate,
    Other,
}

impl FollowUpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowUpKind::CheckIn => "check-in",
            FollowUpKind::Assessment => "assessment",
            FollowUpKind::Payment => "payment",
            FollowUpKind::ProgramUpdate => "program-update",
            FollowUpKind::Other => "other",
        }
    }
}

impl fmt::Display for FollowUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowUpStatus {
    Pending,
    Completed,
    Overdue,
}

impl FollowUpStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowUpStatus::Pending => "pending",
            FollowUpStatus::Completed => "completed",
            FollowUpStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for FollowUpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pending piece of client work assigned to a team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUp {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub kind: FollowUpKind,
    pub priority: Priority,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,
    pub status: FollowUpStatus,
    pub description: String,
    pub assigned_to: String,
    pub created_at: String,
}

impl Record for FollowUp {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ClientStatus::OnHold).unwrap(),
            "\"on-hold\""
        );
        assert_eq!(
            serde_json::to_string(&ClientStatus::NoSubscription).unwrap(),
            "\"no-subscription\""
        );
        let status: ClientStatus = serde_json::from_str("\"prestart\"").unwrap();
        assert_eq!(status, ClientStatus::Prestart);
    }

    #[test]
    fn test_followup_kind_wire_strings() {
        assert_eq!(FollowUpKind::ProgramUpdate.as_str(), "program-update");
        assert_eq!(
            serde_json::to_string(&FollowUpKind::CheckIn).unwrap(),
            "\"check-in\""
        );
    }
}
