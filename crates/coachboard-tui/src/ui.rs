//! Screen layout: header bar, sidebar, page content, toast overlay

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::sidebar::Sidebar;
use crate::theme::{BaseColors, FocusStyle};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_header(frame, vertical[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(40)])
        .split(vertical[1]);

    let sidebar = Sidebar {
        nav: &app.nav,
        current: &app.page,
        branding: &app.config.branding,
        focused: app.focus == Focus::Sidebar,
    };
    sidebar.render(frame, body[0], app.scheme);

    let precision = app.config.preferences.stat_precision;
    let focused = app.focus == Focus::Content;
    app.page_state
        .render(frame, body[1], app.store, app.scheme, precision, focused);

    app.toasts.render(frame, area, app.scheme);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = app.scheme;
    let unread = app.store.unread_notifications();

    let left = vec![
        Span::styled(
            format!(" {} ", app.page.title()),
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.page.path(),
            Style::default().fg(BaseColors::muted(scheme)),
        ),
    ];

    let right = format!(
        "🔔 {unread}  ·  Tab focus · / search · q quit  · {} ",
        app.config.branding.tagline
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FocusStyle::unfocused_border(scheme)));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(right.len() as u16)])
        .split(inner);

    frame.render_widget(Paragraph::new(Line::from(left)), columns[0]);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            right,
            Style::default().fg(BaseColors::muted(scheme)),
        )))
        .alignment(ratatui::layout::Alignment::Right),
        columns[1],
    );
}
