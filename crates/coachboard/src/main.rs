//! coachboard - dashboard TUI and headless CLI

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, FilterArgs};
use coachboard_core::catalog::{self, PageSpec, StatCard};
use coachboard_core::models::Notification;
use coachboard_core::routes::{Page, ROUTES};
use coachboard_core::view::{Column, Dimension, FilterValue, Precision, Record};
use coachboard_core::{export_records_to_csv, seed, AppConfig, Domain};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load();
    let store = seed::store();

    match cli.command {
        None | Some(Command::Tui { path: None }) => {
            coachboard_tui::run(store, config, None)?;
        }
        Some(Command::Tui { path: Some(path) }) => {
            coachboard_tui::run(store, config, Some(Page::parse(&path)))?;
        }
        Some(Command::List { domain, filters }) => {
            run_domain(&domain, &filters, Output::Table, &config)?;
        }
        Some(Command::Stats { domain }) => {
            run_domain(&domain, &FilterArgs::default(), Output::Stats, &config)?;
        }
        Some(Command::Routes) => print_routes(),
        Some(Command::Export {
            domain,
            output,
            filters,
        }) => {
            run_domain(&domain, &filters, Output::Csv(output), &config)?;
        }
    }

    Ok(())
}

enum Output {
    Table,
    Stats,
    Csv(PathBuf),
}

fn run_domain(domain: &str, filters: &FilterArgs, out: Output, config: &AppConfig) -> Result<()> {
    let store = seed::store();
    let domain: Domain = domain.parse()?;
    let precision = config.preferences.stat_precision;

    match domain {
        Domain::Clients => emit(catalog::clients::all(), store.clients(), filters, out, precision),
        Domain::FollowUps => emit(
            catalog::clients::follow_ups(),
            store.follow_ups(),
            filters,
            out,
            precision,
        ),
        Domain::Appointments => emit(
            catalog::calendar::appointments(),
            store.appointments(),
            filters,
            out,
            precision,
        ),
        Domain::Leads => emit(catalog::leads::all(), store.leads(), filters, out, precision),
        Domain::LeadResponses => emit(
            catalog::leads::responses(),
            store.lead_responses(),
            filters,
            out,
            precision,
        ),
        Domain::Referrers => emit(
            catalog::leads::referrers(),
            store.referrers(),
            filters,
            out,
            precision,
        ),
        Domain::Checkins => emit(catalog::checkins::all(), store.checkins(), filters, out, precision),
        Domain::Reminders => emit(
            catalog::reminders::all(),
            store.reminders(),
            filters,
            out,
            precision,
        ),
        Domain::ReminderTypes => emit(
            catalog::reminders::types(),
            store.reminder_types(),
            filters,
            out,
            precision,
        ),
        Domain::WorkoutRequests => emit(
            catalog::requests::workout(),
            store.workout_requests(),
            filters,
            out,
            precision,
        ),
        Domain::DietRequests => emit(
            catalog::requests::diet(),
            store.diet_requests(),
            filters,
            out,
            precision,
        ),
        Domain::Notifications => {
            emit_notifications(store.notifications(), filters, out, precision)
        }
    }
}

/// Apply the shared filter flags and print / export one list view.
fn emit<R: Record + 'static>(
    spec: PageSpec<R>,
    records: &'static [R],
    filters: &FilterArgs,
    out: Output,
    precision: Precision,
) -> Result<()> {
    let mut list = spec.list_view(records);
    if let Some(q) = &filters.search {
        list.set_filter("search", FilterValue::Text(q.clone()));
    }
    if let Some(s) = &filters.status {
        list.set_filter("status", FilterValue::Choice(s.clone()));
    }
    if let Some(g) = &filters.group {
        list.set_filter("group", FilterValue::Choice(g.clone()));
    }
    if let Some(l) = &filters.label {
        list.set_filter("label", FilterValue::Choice(l.clone()));
    }

    let view = list.view();
    match out {
        Output::Table => {
            print_table(&view, spec.columns, spec.title);
        }
        Output::Stats => {
            print_stats(&(spec.stats)(records, precision), spec.title);
        }
        Output::Csv(path) => {
            export_records_to_csv(&view, spec.columns, &path)?;
            info!(rows = view.len(), path = %path.display(), "exported");
            println!("Exported {} rows to {}", view.len(), path.display());
        }
    }
    Ok(())
}

/// Notifications have no screen of their own (they live in the top bar), so
/// the CLI instantiates the engine with an inline page config.
fn emit_notifications(
    records: &'static [Notification],
    filters: &FilterArgs,
    out: Output,
    _precision: Precision,
) -> Result<()> {
    const COLUMNS: &[Column<Notification>] = &[
        Column { header: "ID", value: |n| format!("#{}", n.id) },
        Column { header: "Title", value: |n| n.title.clone() },
        Column { header: "Message", value: |n| n.message.clone() },
        Column { header: "Type", value: |n| n.kind.to_string() },
        Column { header: "Priority", value: |n| n.priority.label().to_string() },
        Column {
            header: "Read",
            value: |n| if n.is_read { "yes" } else { "no" }.to_string(),
        },
    ];

    let dimensions = vec![
        Dimension::text(
            "search",
            vec![
                |n: &Notification| Some(n.title.as_str()),
                |n: &Notification| Some(n.message.as_str()),
            ],
        ),
        Dimension::category("status", |n: &Notification| n.kind.as_str()),
    ];

    let mut list = coachboard_core::ListView::new(records, dimensions);
    if let Some(q) = &filters.search {
        list.set_filter("search", FilterValue::Text(q.clone()));
    }
    if let Some(s) = &filters.status {
        list.set_filter("status", FilterValue::Choice(s.clone()));
    }

    let view = list.view();
    match out {
        Output::Table => print_table(&view, COLUMNS, "Notifications"),
        Output::Stats => {
            let unread = view.iter().filter(|n| !n.is_read).count();
            println!("Notifications: {} total, {} unread", records.len(), unread);
        }
        Output::Csv(path) => {
            export_records_to_csv(&view, COLUMNS, &path)?;
            println!("Exported {} rows to {}", view.len(), path.display());
        }
    }
    Ok(())
}

fn print_table<R>(view: &[&R], columns: &[Column<R>], title: &str) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(columns.iter().map(|c| Cell::new(c.header)));

    for record in view {
        table.add_row(columns.iter().map(|c| Cell::new((c.value)(record))));
    }

    println!("{title} ({} rows)", view.len());
    println!("{table}");
}

fn print_stats(cards: &[StatCard], title: &str) {
    println!("{title}");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Metric", "Value", "Detail"]);
    for card in cards {
        table.add_row([card.label, card.value.as_str(), card.detail]);
    }
    println!("{table}");
}

fn print_routes() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(["Path", "Title"]);
    for (path, title) in ROUTES {
        table.add_row([*path, *title]);
    }
    table.add_row(["/clients/:id", "Client Profile"]);
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_domain_fails() {
        let config = AppConfig::default();
        let err = run_domain("invoices", &FilterArgs::default(), Output::Table, &config);
        assert!(err.is_err());
    }

    #[test]
    fn test_export_filtered_view() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkins.csv");
        let filters = FilterArgs {
            status: Some("submitted".to_string()),
            ..Default::default()
        };
        let config = AppConfig::default();
        run_domain("checkins", &filters, Output::Csv(path.clone()), &config).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Header plus only the submitted rows.
        let submitted = seed::store()
            .checkins()
            .iter()
            .filter(|c| c.status.as_str() == "submitted")
            .count();
        assert_eq!(content.lines().count(), submitted + 1);
    }
}
