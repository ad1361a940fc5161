//! Declarative route table
//!
//! Maps the URL-style paths of the dashboard to pages. The TUI navigates by
//! `Page`; the CLI prints the table and accepts paths for deep links. The
//! only parameterized route is the client profile (`/clients/:id`).

use std::fmt;

/// Every navigable screen of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Clients,
    ClientProfile(String),
    ClientFollowUp,
    CalendarAppointments,
    CalendarNext,
    CalendarReports,
    CalendarAvailable,
    Leads,
    LeadsCharts,
    LeadsResponses,
    LeadsReferrers,
    CheckinsAll,
    CheckinsQuickView,
    CheckinsSubmitted,
    CheckinsUpcoming,
    CheckinsUnsubmitted,
    RequestsWorkout,
    RequestsDiet,
    Reminders,
    ReminderTypes,
    Profile,
    Settings,
    MobileCustomization,
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    EmailVerification,
    /// Catch-all for unknown paths; keeps the offending path for display.
    NotFound(String),
}

/// Static routes: (path, title). The parameterized client profile and the
/// catch-all are handled in `Page::parse`.
pub const ROUTES: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/clients", "All Clients"),
    ("/clients/followup", "Follow up"),
    ("/calendar/appointments", "Appointments"),
    ("/calendar/next", "Next Appointment"),
    ("/calendar/reports", "Appointment Report"),
    ("/calendar/available", "Available Appointment"),
    ("/leads", "Leads"),
    ("/leads/charts", "Leads Charts"),
    ("/leads/responses", "Lead Responses"),
    ("/leads/referrers", "Lead Referrers"),
    ("/checkins", "All Check-ins"),
    ("/checkins/quick", "Quick View"),
    ("/checkins/submitted", "Submitted Check-ins"),
    ("/checkins/upcoming", "Upcoming Check-ins"),
    ("/checkins/unsubmitted", "Unsubmitted Check-ins"),
    ("/requests/workout", "Workout Requests"),
    ("/requests/diet", "Diet Requests"),
    ("/reminders", "All Reminders"),
    ("/reminders/types", "Reminder Types"),
    ("/profile", "Personal Profile"),
    ("/settings", "Theme Editor"),
    ("/mobile-customization", "Mobile Customization"),
    ("/login", "Login"),
    ("/signup", "Sign Up"),
    ("/forgot-password", "Forgot Password"),
    ("/reset-password", "Reset Password"),
    ("/verify-email", "Email Verification"),
];

impl Page {
    /// Resolve a path to a page. Unknown paths resolve to `NotFound` rather
    /// than erroring, matching the catch-all route.
    pub fn parse(path: &str) -> Page {
        let path = path.trim_end_matches('/');
        let path = if path.is_empty() { "/" } else { path };
        match path {
            "/" => Page::Dashboard,
            "/clients" => Page::Clients,
            "/clients/followup" => Page::ClientFollowUp,
            "/calendar/appointments" => Page::CalendarAppointments,
            "/calendar/next" => Page::CalendarNext,
            "/calendar/reports" => Page::CalendarReports,
            "/calendar/available" => Page::CalendarAvailable,
            "/leads" => Page::Leads,
            "/leads/charts" => Page::LeadsCharts,
            "/leads/responses" => Page::LeadsResponses,
            "/leads/referrers" => Page::LeadsReferrers,
            "/checkins" => Page::CheckinsAll,
            "/checkins/quick" => Page::CheckinsQuickView,
            "/checkins/submitted" => Page::CheckinsSubmitted,
            "/checkins/upcoming" => Page::CheckinsUpcoming,
            "/checkins/unsubmitted" => Page::CheckinsUnsubmitted,
            "/requests/workout" => Page::RequestsWorkout,
            "/requests/diet" => Page::RequestsDiet,
            "/reminders" => Page::Reminders,
            "/reminders/types" => Page::ReminderTypes,
            "/profile" => Page::Profile,
            "/settings" => Page::Settings,
            "/mobile-customization" => Page::MobileCustomization,
            "/login" => Page::Login,
            "/signup" => Page::Signup,
            "/forgot-password" => Page::ForgotPassword,
            "/reset-password" => Page::ResetPassword,
            "/verify-email" => Page::EmailVerification,
            _ => {
                if let Some(id) = path.strip_prefix("/clients/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Page::ClientProfile(id.to_string());
                    }
                }
                Page::NotFound(path.to_string())
            }
        }
    }

    /// Canonical path for this page.
    pub fn path(&self) -> String {
        match self {
            Page::Dashboard => "/".to_string(),
            Page::Clients => "/clients".to_string(),
            Page::ClientProfile(id) => format!("/clients/{id}"),
            Page::ClientFollowUp => "/clients/followup".to_string(),
            Page::CalendarAppointments => "/calendar/appointments".to_string(),
            Page::CalendarNext => "/calendar/next".to_string(),
            Page::CalendarReports => "/calendar/reports".to_string(),
            Page::CalendarAvailable => "/calendar/available".to_string(),
            Page::Leads => "/leads".to_string(),
            Page::LeadsCharts => "/leads/charts".to_string(),
            Page::LeadsResponses => "/leads/responses".to_string(),
            Page::LeadsReferrers => "/leads/referrers".to_string(),
            Page::CheckinsAll => "/checkins".to_string(),
            Page::CheckinsQuickView => "/checkins/quick".to_string(),
            Page::CheckinsSubmitted => "/checkins/submitted".to_string(),
            Page::CheckinsUpcoming => "/checkins/upcoming".to_string(),
            Page::CheckinsUnsubmitted => "/checkins/unsubmitted".to_string(),
            Page::RequestsWorkout => "/requests/workout".to_string(),
            Page::RequestsDiet => "/requests/diet".to_string(),
            Page::Reminders => "/reminders".to_string(),
            Page::ReminderTypes => "/reminders/types".to_string(),
            Page::Profile => "/profile".to_string(),
            Page::Settings => "/settings".to_string(),
            Page::MobileCustomization => "/mobile-customization".to_string(),
            Page::Login => "/login".to_string(),
            Page::Signup => "/signup".to_string(),
            Page::ForgotPassword => "/forgot-password".to_string(),
            Page::ResetPassword => "/reset-password".to_string(),
            Page::EmailVerification => "/verify-email".to_string(),
            Page::NotFound(path) => path.clone(),
        }
    }

    /// Screen title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Clients => "All Clients",
            Page::ClientProfile(_) => "Client Profile",
            Page::ClientFollowUp => "Follow up",
            Page::CalendarAppointments => "Appointments",
            Page::CalendarNext => "Next Appointment",
            Page::CalendarReports => "Appointment Report",
            Page::CalendarAvailable => "Available Appointment",
            Page::Leads => "Leads",
            Page::LeadsCharts => "Leads Charts",
            Page::LeadsResponses => "Lead Responses",
            Page::LeadsReferrers => "Lead Referrers",
            Page::CheckinsAll => "All Check-ins",
            Page::CheckinsQuickView => "Quick View",
            Page::CheckinsSubmitted => "Submitted Check-ins",
            Page::CheckinsUpcoming => "Upcoming Check-ins",
            Page::CheckinsUnsubmitted => "Unsubmitted Check-ins",
            Page::RequestsWorkout => "Workout Requests",
            Page::RequestsDiet => "Diet Requests",
            Page::Reminders => "All Reminders",
            Page::ReminderTypes => "Reminder Types",
            Page::Profile => "Personal Profile",
            Page::Settings => "Theme Editor",
            Page::MobileCustomization => "Mobile Customization",
            Page::Login => "Login",
            Page::Signup => "Sign Up",
            Page::ForgotPassword => "Forgot Password",
            Page::ResetPassword => "Reset Password",
            Page::EmailVerification => "Email Verification",
            Page::NotFound(_) => "Not Found",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_static_route_round_trips() {
        for (path, _) in ROUTES {
            let page = Page::parse(path);
            assert!(!matches!(page, Page::NotFound(_)), "unmapped: {path}");
            assert_eq!(page.path(), *path);
        }
    }

    #[test]
    fn test_client_profile_parameter() {
        let page = Page::parse("/clients/42");
        assert_eq!(page, Page::ClientProfile("42".to_string()));
        assert_eq!(page.path(), "/clients/42");
        assert_eq!(page.title(), "Client Profile");
    }

    #[test]
    fn test_followup_is_not_a_profile() {
        assert_eq!(Page::parse("/clients/followup"), Page::ClientFollowUp);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert!(matches!(
            Page::parse("/finance/invoices"),
            Page::NotFound(_)
        ));
        assert!(matches!(Page::parse("/clients/1/edit"), Page::NotFound(_)));
    }

    #[test]
    fn test_trailing_slash_normalized() {
        assert_eq!(Page::parse("/checkins/"), Page::CheckinsAll);
        assert_eq!(Page::parse(""), Page::Dashboard);
    }
}
