//! Dashboard overview page

use coachboard_core::catalog::Tone;
use coachboard_core::models::{CountShare, PlanProgress};
use coachboard_core::view::Precision;
use coachboard_core::{ColorScheme, DataStore};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::render_stat_cards;
use crate::theme::{tone_color, BaseColors, FocusStyle};
use coachboard_core::catalog::StatCard;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    store: &DataStore,
    scheme: ColorScheme,
    precision: Precision,
) {
    let metrics = store.metrics();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);

    let cards = vec![
        StatCard::count(
            "Total Clients",
            metrics.total_clients as usize,
            "On the roster",
            Tone::Neutral,
        ),
        StatCard::count(
            "Active Clients",
            metrics.active_clients as usize,
            "With a running subscription",
            Tone::Success,
        ),
        StatCard::count(
            "Team Members",
            metrics.active_team_members as usize,
            "Active today",
            Tone::Info,
        ),
        StatCard::count(
            "Unread",
            store.unread_notifications(),
            "Notifications",
            Tone::Warning,
        ),
    ];
    render_stat_cards(frame, chunks[0], &cards, scheme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_breakdown(frame, body[0], store, scheme, precision);
    render_plans(frame, body[1], store, scheme);

    render_subscription(frame, chunks[2], store, scheme);
}

fn share_line(
    label: &str,
    share: CountShare,
    tone: Tone,
    scheme: ColorScheme,
    precision: Precision,
) -> Line<'static> {
    let bar_len = (share.percentage / 10.0).round() as usize;
    let bar: String = "█".repeat(bar_len.min(10)) + &"░".repeat(10usize.saturating_sub(bar_len));
    Line::from(vec![
        Span::styled(
            format!("{label:<16}"),
            Style::default().fg(BaseColors::fg(scheme)),
        ),
        Span::styled(bar, Style::default().fg(tone_color(tone, scheme))),
        Span::styled(
            format!(" {:>3}  {}", share.count, precision.format(share.percentage)),
            Style::default().fg(BaseColors::muted(scheme)),
        ),
    ])
}

fn render_breakdown(
    frame: &mut Frame,
    area: Rect,
    store: &DataStore,
    scheme: ColorScheme,
    precision: Precision,
) {
    let metrics = store.metrics();
    let b = &metrics.client_breakdown;

    let lines = vec![
        share_line("Active", b.active, Tone::Success, scheme, precision),
        share_line("On Hold", b.on_hold, Tone::Warning, scheme, precision),
        share_line("Pre-start", b.prestart, Tone::Info, scheme, precision),
        share_line("Expired", b.expired, Tone::Danger, scheme, precision),
        share_line("Refunded", b.refunded, Tone::Danger, scheme, precision),
        share_line("No Subscription", b.no_subscription, Tone::Neutral, scheme, precision),
        Line::from(""),
        Line::from(Span::styled(
            format!("Total: {}", b.total),
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FocusStyle::unfocused_border(scheme)))
        .title(Span::styled(
            " Client Status ",
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn plan_line(label: &str, progress: PlanProgress, scheme: ColorScheme) -> Line<'static> {
    let pct = progress.percent();
    let bar_len = (pct / 10.0).round() as usize;
    let bar: String = "█".repeat(bar_len.min(10)) + &"░".repeat(10usize.saturating_sub(bar_len));
    let tone = if pct >= 100.0 {
        Tone::Success
    } else if pct > 0.0 {
        Tone::Warning
    } else {
        Tone::Neutral
    };
    Line::from(vec![
        Span::styled(
            format!("{label:<12}"),
            Style::default().fg(BaseColors::fg(scheme)),
        ),
        Span::styled(bar, Style::default().fg(tone_color(tone, scheme))),
        Span::styled(
            format!(" {}/{}", progress.current, progress.total),
            Style::default().fg(BaseColors::muted(scheme)),
        ),
    ])
}

fn render_plans(frame: &mut Frame, area: Rect, store: &DataStore, scheme: ColorScheme) {
    let metrics = store.metrics();
    let growth = &metrics.business_growth;

    let lines = vec![
        plan_line("Diet", metrics.plan_status.diet, scheme),
        plan_line("Resistance", metrics.plan_status.resistance, scheme),
        plan_line("Fitness", metrics.plan_status.fitness, scheme),
        plan_line("Mobility", metrics.plan_status.mobility, scheme),
        Line::from(""),
        Line::from(vec![
            Span::styled("New clients today: ", Style::default().fg(BaseColors::muted(scheme))),
            Span::styled(
                growth.daily_new_clients.count.to_string(),
                Style::default().fg(BaseColors::fg(scheme)),
            ),
            Span::styled("   Renewals today: ", Style::default().fg(BaseColors::muted(scheme))),
            Span::styled(
                growth.daily_renewals.count.to_string(),
                Style::default().fg(BaseColors::fg(scheme)),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FocusStyle::unfocused_border(scheme)))
        .title(Span::styled(
            " Plans & Growth ",
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_subscription(frame: &mut Frame, area: Rect, store: &DataStore, scheme: ColorScheme) {
    let metrics = store.metrics();
    let sub = &metrics.subscription;
    let (message, tone) = if sub.is_expiring {
        (
            format!(
                "Subscription expiring in {}d {}h ({:.0}% remaining)",
                sub.days_left, sub.hours_left, sub.remaining_percentage
            ),
            Tone::Warning,
        )
    } else {
        ("Subscription active".to_string(), Tone::Success)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tone_color(tone, scheme)));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default()
                .fg(tone_color(tone, scheme))
                .add_modifier(Modifier::BOLD),
        )))
        .block(block),
        area,
    );
}
