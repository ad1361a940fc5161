//! Domain models for coachboard
//!
//! Record types for every list page plus the dashboard overview metrics.
//! Categorical attributes are real enums serialized to the wire strings the
//! mobile/web clients use (`"on-hold"`, `"no-show"`, ...); timestamps stay
//! ISO-8601 strings and are parsed only where a predicate or display needs a
//! calendar date.

pub mod appointment;
pub mod checkin;
pub mod client;
pub mod lead;
pub mod metrics;
pub mod notification;
pub mod reminder;
pub mod request;

pub use appointment::{Appointment, AppointmentStatus, AppointmentType};
pub use checkin::{CheckIn, CheckInStatus};
pub use client::{Client, ClientStatus, FollowUp, FollowUpKind, FollowUpStatus};
pub use lead::{Lead, LeadResponse, LeadSource, LeadStatus, Referrer, ReferrerStatus};
pub use metrics::{
    BusinessGrowth, ClientBreakdown, CountShare, DashboardMetrics, PlanProgress, PlanStatus,
    SubscriptionStatus,
};
pub use notification::{Notification, NotificationKind};
pub use reminder::{Reminder, ReminderCategory, ReminderStatus, ReminderType};
pub use request::{AppRequest, RequestKind, RequestStatus};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority shared by follow-ups, quick-view check-ins and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
