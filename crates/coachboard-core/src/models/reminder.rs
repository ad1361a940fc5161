//! Client reminder and reminder-type records

use crate::view::Record;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Active,
    Paused,
    Completed,
}

impl ReminderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderStatus::Active => "active",
            ReminderStatus::Paused => "paused",
            ReminderStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReminderStatus::Active => "Active",
            ReminderStatus::Paused => "Paused",
            ReminderStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ReminderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recurring or one-off reminder attached to a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    /// Reminder title ("Weekly Progress Check").
    pub reminder: String,
    pub client: String,
    pub client_phone: String,
    pub subscription: String,
    pub group: String,
    /// Cadence label: "Daily", "Weekly", "Bi-weekly", "Monthly", "One-time".
    pub schedule_type: String,
    /// Next fire time as RFC 3339.
    pub schedule_date: String,
    /// Display time ("10:00 AM").
    pub schedule_time: String,
    pub assigned_to: String,
    pub status: ReminderStatus,
}

impl Record for Reminder {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Category of a reminder type, driving its color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderCategory {
    Warning,
    Success,
    Info,
    Error,
    Timeout,
    Custom,
}

impl ReminderCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ReminderCategory::Warning => "warning",
            ReminderCategory::Success => "success",
            ReminderCategory::Info => "info",
            ReminderCategory::Error => "error",
            ReminderCategory::Timeout => "timeout",
            ReminderCategory::Custom => "custom",
        }
    }

    pub fn all() -> &'static [ReminderCategory] {
        &[
            ReminderCategory::Warning,
            ReminderCategory::Success,
            ReminderCategory::Info,
            ReminderCategory::Error,
            ReminderCategory::Timeout,
            ReminderCategory::Custom,
        ]
    }
}

impl fmt::Display for ReminderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reusable reminder template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ReminderCategory,
    /// Hex display color ("#f59e0b").
    pub color: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub usage_count: u64,
}

impl Record for ReminderType {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ReminderCategory::Timeout).unwrap(),
            "\"timeout\""
        );
        assert_eq!(ReminderCategory::all().len(), 6);
    }
}
