//! Record store
//!
//! All list pages read from fixed, ordered, in-memory collections seeded at
//! startup (see [`crate::seed`]). The engine never mutates records; edit and
//! delete actions only log intent through the bulk-action sink. A production
//! deployment would put an async-fetching implementation behind
//! [`RecordSource`] and leave the filtering/selection logic untouched.

use crate::error::CoreError;
use crate::models::{
    Appointment, CheckIn, Client, ClientBreakdown, DashboardMetrics, FollowUp, Lead, LeadResponse,
    Notification, Referrer, Reminder, ReminderType, AppRequest,
};
use std::str::FromStr;

/// A synchronous provider of one record collection.
pub trait RecordSource<R> {
    fn list(&self) -> &[R];
}

/// Borrowed slice as a record source.
pub struct StaticSource<'a, R>(pub &'a [R]);

impl<'a, R> RecordSource<R> for StaticSource<'a, R> {
    fn list(&self) -> &[R] {
        self.0
    }
}

/// Record domains addressable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Clients,
    Appointments,
    Leads,
    FollowUps,
    Checkins,
    Reminders,
    ReminderTypes,
    WorkoutRequests,
    DietRequests,
    LeadResponses,
    Referrers,
    Notifications,
}

impl Domain {
    pub fn name(self) -> &'static str {
        match self {
            Domain::Clients => "clients",
            Domain::Appointments => "appointments",
            Domain::Leads => "leads",
            Domain::FollowUps => "followups",
            Domain::Checkins => "checkins",
            Domain::Reminders => "reminders",
            Domain::ReminderTypes => "reminder-types",
            Domain::WorkoutRequests => "workout-requests",
            Domain::DietRequests => "diet-requests",
            Domain::LeadResponses => "lead-responses",
            Domain::Referrers => "referrers",
            Domain::Notifications => "notifications",
        }
    }

    pub fn all() -> &'static [Domain] {
        &[
            Domain::Clients,
            Domain::Appointments,
            Domain::Leads,
            Domain::FollowUps,
            Domain::Checkins,
            Domain::Reminders,
            Domain::ReminderTypes,
            Domain::WorkoutRequests,
            Domain::DietRequests,
            Domain::LeadResponses,
            Domain::Referrers,
            Domain::Notifications,
        ]
    }
}

impl FromStr for Domain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Domain::all()
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| CoreError::unknown_domain(s))
    }
}

/// Central, immutable data store backing every screen.
pub struct DataStore {
    pub(crate) clients: Vec<Client>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) leads: Vec<Lead>,
    pub(crate) follow_ups: Vec<FollowUp>,
    /// All check-ins, mixed lifecycle stages.
    pub(crate) checkins: Vec<CheckIn>,
    /// Pinned subset shown on the quick-view screen.
    pub(crate) quick_view_checkins: Vec<CheckIn>,
    pub(crate) submitted_checkins: Vec<CheckIn>,
    pub(crate) upcoming_checkins: Vec<CheckIn>,
    pub(crate) unsubmitted_checkins: Vec<CheckIn>,
    pub(crate) reminders: Vec<Reminder>,
    pub(crate) reminder_types: Vec<ReminderType>,
    pub(crate) workout_requests: Vec<AppRequest>,
    pub(crate) diet_requests: Vec<AppRequest>,
    pub(crate) lead_responses: Vec<LeadResponse>,
    pub(crate) referrers: Vec<Referrer>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) metrics: DashboardMetrics,
}

impl DataStore {
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn client(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn follow_ups(&self) -> &[FollowUp] {
        &self.follow_ups
    }

    pub fn checkins(&self) -> &[CheckIn] {
        &self.checkins
    }

    pub fn quick_view_checkins(&self) -> &[CheckIn] {
        &self.quick_view_checkins
    }

    pub fn submitted_checkins(&self) -> &[CheckIn] {
        &self.submitted_checkins
    }

    pub fn upcoming_checkins(&self) -> &[CheckIn] {
        &self.upcoming_checkins
    }

    pub fn unsubmitted_checkins(&self) -> &[CheckIn] {
        &self.unsubmitted_checkins
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    pub fn reminder_types(&self) -> &[ReminderType] {
        &self.reminder_types
    }

    pub fn workout_requests(&self) -> &[AppRequest] {
        &self.workout_requests
    }

    pub fn diet_requests(&self) -> &[AppRequest] {
        &self.diet_requests
    }

    pub fn lead_responses(&self) -> &[LeadResponse] {
        &self.lead_responses
    }

    pub fn referrers(&self) -> &[Referrer] {
        &self.referrers
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Dashboard metrics with the client breakdown recomputed from the
    /// client store; the remaining figures are seeded business values.
    pub fn metrics(&self) -> DashboardMetrics {
        let mut metrics = self.metrics.clone();
        metrics.client_breakdown = ClientBreakdown::from_clients(&self.clients);
        metrics.total_clients = self.clients.len() as u64;
        metrics.active_clients = metrics.client_breakdown.active.count;
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_round_trip() {
        for domain in Domain::all() {
            let parsed: Domain = domain.name().parse().unwrap();
            assert_eq!(parsed, *domain);
        }
    }

    #[test]
    fn test_unknown_domain_errors() {
        let err = "invoices".parse::<Domain>().unwrap_err();
        assert!(err.to_string().contains("invoices"));
    }

    #[test]
    fn test_static_source_lists_slice() {
        let values = vec![1, 2, 3];
        let source = StaticSource(&values);
        assert_eq!(source.list(), &[1, 2, 3]);
    }
}
