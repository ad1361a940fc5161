use coachboard_core::view::{Column, Record, Selection};
use coachboard_core::ColorScheme;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::theme::{status_tone, tone_color, BaseColors, FocusStyle};

/// Generic record table with a checkbox column.
///
/// The header checkbox reflects the engine's all-selected state; row
/// checkboxes reflect membership in the selection set.
pub struct RecordTable<'a, R: Record> {
    pub title: String,
    pub rows: &'a [&'a R],
    pub columns: &'a [Column<R>],
    pub selection: &'a Selection,
    pub all_selected: bool,
    pub focused: bool,
}

impl<'a, R: Record> RecordTable<'a, R> {
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &mut TableState,
        scheme: ColorScheme,
    ) {
        let border_color = if self.focused {
            FocusStyle::focused_border(scheme)
        } else {
            FocusStyle::unfocused_border(scheme)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ({}) ", self.title, self.rows.len()),
                Style::default()
                    .fg(BaseColors::fg(scheme))
                    .add_modifier(Modifier::BOLD),
            ));

        let header_checkbox = if self.all_selected { "[x]" } else { "[ ]" };
        let mut header_cells = vec![Cell::from(header_checkbox)];
        header_cells.extend(self.columns.iter().map(|c| {
            Cell::from(Span::styled(
                c.header,
                Style::default()
                    .fg(BaseColors::fg(scheme))
                    .add_modifier(Modifier::BOLD),
            ))
        }));
        let header = Row::new(header_cells).height(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|record| {
                let checked = self.selection.contains(record.id());
                let checkbox = if checked { "[x]" } else { "[ ]" };
                let mut cells = vec![Cell::from(checkbox)];
                cells.extend(self.columns.iter().map(|column| {
                    let value = (column.value)(record);
                    let tone = status_tone(&value);
                    let style = if column.header == "Status" || column.header == "Label" {
                        Style::default().fg(tone_color(tone, scheme))
                    } else {
                        Style::default().fg(BaseColors::fg(scheme))
                    };
                    Cell::from(Span::styled(value, style))
                }));
                let mut row = Row::new(cells).height(1);
                if checked {
                    row = row.style(Style::default().add_modifier(Modifier::BOLD));
                }
                row
            })
            .collect();

        let mut widths = vec![Constraint::Length(3)];
        widths.extend(self.columns.iter().map(|c| match c.header {
            "ID" => Constraint::Length(5),
            "Status" | "Label" | "Priority" | "Read" | "Active" => Constraint::Length(12),
            _ => Constraint::Min(10),
        }));

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(
                Style::default()
                    .bg(FocusStyle::focused_bg(scheme))
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, state);
    }
}
