//! Informational panes for presentational screens
//!
//! Auth, settings, profile and calendar-report screens are forms without
//! behavior in this build; they render as static panes. Unknown paths get
//! the not-found pane.

use coachboard_core::{ColorScheme, DataStore, Page};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::render_empty_state;
use crate::theme::{BaseColors, FocusStyle};

fn description(page: &Page) -> &'static str {
    match page {
        Page::Login | Page::Signup => "Account access form",
        Page::ForgotPassword | Page::ResetPassword => "Password recovery form",
        Page::EmailVerification => "Email verification notice",
        Page::Profile => "Personal profile and account settings form",
        Page::Settings => "Theme editor and branding settings form",
        Page::MobileCustomization => "Mobile app customization form",
        Page::CalendarNext => "Next appointment per client",
        Page::CalendarReports => "Appointment attendance report",
        Page::CalendarAvailable => "Open appointment slots",
        Page::LeadsCharts => "Lead conversion and source charts",
        _ => "This screen is informational",
    }
}

pub fn render(frame: &mut Frame, area: Rect, page: &Page, scheme: ColorScheme) {
    match page {
        Page::NotFound(path) => {
            render_empty_state(
                frame,
                area,
                "Not Found",
                &format!("No screen is mapped to {path}"),
                "Press Esc to return to the dashboard",
                scheme,
            );
        }
        _ => {
            render_empty_state(
                frame,
                area,
                page.title(),
                description(page),
                "This screen has no list data; navigate with the sidebar",
                scheme,
            );
        }
    }
}

/// Client profile screen, keyed by the id from the route.
pub fn render_client_profile(
    frame: &mut Frame,
    area: Rect,
    store: &DataStore,
    id: &str,
    scheme: ColorScheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FocusStyle::focused_border(scheme)))
        .title(Span::styled(
            " Client Profile ",
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(client) = store.client(id) else {
        render_empty_state(
            frame,
            inner,
            "Client Profile",
            &format!("No client with id {id}"),
            "Press Esc to return",
            scheme,
        );
        return;
    };

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{label:<12}"),
                Style::default().fg(BaseColors::muted(scheme)),
            ),
            Span::styled(value, Style::default().fg(BaseColors::fg(scheme))),
        ])
    };

    let mut lines = vec![
        field("Name", client.name.clone()),
        field("Email", client.email.clone()),
        field("Phone", client.phone.clone()),
        field("Status", client.status.label().to_string()),
        field("Joined", client.join_date.clone()),
        field(
            "Program",
            client.program.clone().unwrap_or_else(|| "-".to_string()),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Appointments",
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let appointments: Vec<_> = store
        .appointments()
        .iter()
        .filter(|a| a.client_id == client.id)
        .collect();
    if appointments.is_empty() {
        lines.push(Line::from(Span::styled(
            "  none scheduled",
            Style::default().fg(BaseColors::muted(scheme)),
        )));
    }
    for appointment in appointments {
        lines.push(Line::from(Span::styled(
            format!(
                "  {} {} · {} · {} · {}",
                appointment.date,
                appointment.time,
                appointment.kind,
                appointment.coach,
                appointment.status
            ),
            Style::default().fg(BaseColors::fg(scheme)),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Open follow-ups",
        Style::default()
            .fg(BaseColors::fg(scheme))
            .add_modifier(Modifier::BOLD),
    )));
    for follow_up in store.follow_ups().iter().filter(|f| f.client_id == client.id) {
        lines.push(Line::from(Span::styled(
            format!(
                "  {} · {} · due {} · {}",
                follow_up.kind, follow_up.priority, follow_up.due_date, follow_up.status
            ),
            Style::default().fg(BaseColors::fg(scheme)),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
