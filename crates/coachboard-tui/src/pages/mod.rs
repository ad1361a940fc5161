//! Page state and dispatch
//!
//! `PageState` holds the live state of the current screen. List screens are
//! all instances of the generic [`ListPage`]; the rest render statically.

pub mod dashboard;
pub mod info;
pub mod list_page;

pub use list_page::{Feedback, ListPage};

use coachboard_core::catalog;
use coachboard_core::models::{
    AppRequest, Appointment, CheckIn, Client, FollowUp, Lead, LeadResponse, Referrer, Reminder,
    ReminderType,
};
use coachboard_core::view::Precision;
use coachboard_core::{ColorScheme, DataStore, Page};
use crossterm::event::KeyCode;
use ratatui::{layout::Rect, Frame};

/// Live state of the current screen.
pub enum PageState {
    Dashboard,
    Clients(ListPage<Client>),
    FollowUps(ListPage<FollowUp>),
    Appointments(ListPage<Appointment>),
    Leads(ListPage<Lead>),
    LeadResponses(ListPage<LeadResponse>),
    Referrers(ListPage<Referrer>),
    CheckinsAll(ListPage<CheckIn>),
    CheckinsQuickView(ListPage<CheckIn>),
    CheckinsSubmitted(ListPage<CheckIn>),
    CheckinsUpcoming(ListPage<CheckIn>),
    CheckinsUnsubmitted(ListPage<CheckIn>),
    Reminders(ListPage<Reminder>),
    ReminderTypes(ListPage<ReminderType>),
    WorkoutRequests(ListPage<AppRequest>),
    DietRequests(ListPage<AppRequest>),
    ClientProfile(String),
    /// Presentational screens and the catch-all.
    Info(Page),
}

impl PageState {
    /// Build fresh page state for a route. Filter and selection state is
    /// per-visit: navigating away and back resets it.
    pub fn build(page: &Page, store: &'static DataStore) -> Self {
        match page {
            Page::Dashboard => PageState::Dashboard,
            Page::Clients => PageState::Clients(ListPage::new(catalog::clients::all(), store.clients())),
            Page::ClientFollowUp => {
                PageState::FollowUps(ListPage::new(catalog::clients::follow_ups(), store.follow_ups()))
            }
            Page::CalendarAppointments => PageState::Appointments(ListPage::new(
                catalog::calendar::appointments(),
                store.appointments(),
            )),
            Page::Leads => PageState::Leads(ListPage::new(catalog::leads::all(), store.leads())),
            Page::LeadsResponses => PageState::LeadResponses(ListPage::new(
                catalog::leads::responses(),
                store.lead_responses(),
            )),
            Page::LeadsReferrers => {
                PageState::Referrers(ListPage::new(catalog::leads::referrers(), store.referrers()))
            }
            Page::CheckinsAll => {
                PageState::CheckinsAll(ListPage::new(catalog::checkins::all(), store.checkins()))
            }
            Page::CheckinsQuickView => PageState::CheckinsQuickView(ListPage::new(
                catalog::checkins::quick_view(),
                store.quick_view_checkins(),
            )),
            Page::CheckinsSubmitted => PageState::CheckinsSubmitted(ListPage::new(
                catalog::checkins::submitted(),
                store.submitted_checkins(),
            )),
            Page::CheckinsUpcoming => PageState::CheckinsUpcoming(ListPage::new(
                catalog::checkins::upcoming(),
                store.upcoming_checkins(),
            )),
            Page::CheckinsUnsubmitted => PageState::CheckinsUnsubmitted(ListPage::new(
                catalog::checkins::unsubmitted(),
                store.unsubmitted_checkins(),
            )),
            Page::Reminders => {
                PageState::Reminders(ListPage::new(catalog::reminders::all(), store.reminders()))
            }
            Page::ReminderTypes => PageState::ReminderTypes(ListPage::new(
                catalog::reminders::types(),
                store.reminder_types(),
            )),
            Page::RequestsWorkout => PageState::WorkoutRequests(ListPage::new(
                catalog::requests::workout(),
                store.workout_requests(),
            )),
            Page::RequestsDiet => PageState::DietRequests(ListPage::new(
                catalog::requests::diet(),
                store.diet_requests(),
            )),
            Page::ClientProfile(id) => PageState::ClientProfile(id.clone()),
            other => PageState::Info(other.clone()),
        }
    }

    /// Whether the page is currently capturing text input.
    pub fn searching(&self) -> bool {
        self.with_list(|p| p.searching()).unwrap_or(false)
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Option<Feedback> {
        self.with_list_mut(|p| p.handle_key(key)).flatten()
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        store: &'static DataStore,
        scheme: ColorScheme,
        precision: Precision,
        focused: bool,
    ) {
        match self {
            PageState::Dashboard => dashboard::render(frame, area, store, scheme, precision),
            PageState::ClientProfile(id) => {
                info::render_client_profile(frame, area, store, id, scheme)
            }
            PageState::Info(page) => info::render(frame, area, page, scheme),
            PageState::Clients(p) => p.render(frame, area, scheme, precision, focused),
            PageState::FollowUps(p) => p.render(frame, area, scheme, precision, focused),
            PageState::Appointments(p) => p.render(frame, area, scheme, precision, focused),
            PageState::Leads(p) => p.render(frame, area, scheme, precision, focused),
            PageState::LeadResponses(p) => p.render(frame, area, scheme, precision, focused),
            PageState::Referrers(p) => p.render(frame, area, scheme, precision, focused),
            PageState::CheckinsAll(p) => p.render(frame, area, scheme, precision, focused),
            PageState::CheckinsQuickView(p) => p.render(frame, area, scheme, precision, focused),
            PageState::CheckinsSubmitted(p) => p.render(frame, area, scheme, precision, focused),
            PageState::CheckinsUpcoming(p) => p.render(frame, area, scheme, precision, focused),
            PageState::CheckinsUnsubmitted(p) => p.render(frame, area, scheme, precision, focused),
            PageState::Reminders(p) => p.render(frame, area, scheme, precision, focused),
            PageState::ReminderTypes(p) => p.render(frame, area, scheme, precision, focused),
            PageState::WorkoutRequests(p) => p.render(frame, area, scheme, precision, focused),
            PageState::DietRequests(p) => p.render(frame, area, scheme, precision, focused),
        }
    }

    fn with_list<T>(&self, f: impl FnOnce(&dyn ListPageOps) -> T) -> Option<T> {
        self.as_list().map(f)
    }

    fn with_list_mut<T>(&mut self, f: impl FnOnce(&mut dyn ListPageOps) -> T) -> Option<T> {
        self.as_list_mut().map(f)
    }

    fn as_list(&self) -> Option<&dyn ListPageOps> {
        match self {
            PageState::Clients(p) => Some(p),
            PageState::FollowUps(p) => Some(p),
            PageState::Appointments(p) => Some(p),
            PageState::Leads(p) => Some(p),
            PageState::LeadResponses(p) => Some(p),
            PageState::Referrers(p) => Some(p),
            PageState::CheckinsAll(p) => Some(p),
            PageState::CheckinsQuickView(p) => Some(p),
            PageState::CheckinsSubmitted(p) => Some(p),
            PageState::CheckinsUpcoming(p) => Some(p),
            PageState::CheckinsUnsubmitted(p) => Some(p),
            PageState::Reminders(p) => Some(p),
            PageState::ReminderTypes(p) => Some(p),
            PageState::WorkoutRequests(p) => Some(p),
            PageState::DietRequests(p) => Some(p),
            _ => None,
        }
    }

    fn as_list_mut(&mut self) -> Option<&mut dyn ListPageOps> {
        match self {
            PageState::Clients(p) => Some(p),
            PageState::FollowUps(p) => Some(p),
            PageState::Appointments(p) => Some(p),
            PageState::Leads(p) => Some(p),
            PageState::LeadResponses(p) => Some(p),
            PageState::Referrers(p) => Some(p),
            PageState::CheckinsAll(p) => Some(p),
            PageState::CheckinsQuickView(p) => Some(p),
            PageState::CheckinsSubmitted(p) => Some(p),
            PageState::CheckinsUpcoming(p) => Some(p),
            PageState::CheckinsUnsubmitted(p) => Some(p),
            PageState::Reminders(p) => Some(p),
            PageState::ReminderTypes(p) => Some(p),
            PageState::WorkoutRequests(p) => Some(p),
            PageState::DietRequests(p) => Some(p),
            _ => None,
        }
    }
}

/// Object-safe subset of list-page behavior used for dispatch.
trait ListPageOps {
    fn searching(&self) -> bool;
    fn handle_key(&mut self, key: KeyCode) -> Option<Feedback>;
}

impl<R: coachboard_core::view::Record + 'static> ListPageOps for ListPage<R> {
    fn searching(&self) -> bool {
        ListPage::searching(self)
    }

    fn handle_key(&mut self, key: KeyCode) -> Option<Feedback> {
        ListPage::handle_key(self, key)
    }
}
