//! Sidebar navigation tree
//!
//! Collapsible sections with active-path highlighting. The row model and
//! open-section state live in `coachboard_core::nav`; this module renders
//! the visible rows and maps the cursor to navigation targets.

use coachboard_core::nav::{NavRow, NavState};
use coachboard_core::{Branding, ColorScheme, Page};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::theme::{BaseColors, FocusStyle};

pub struct Sidebar<'a> {
    pub nav: &'a NavState,
    pub current: &'a Page,
    pub branding: &'a Branding,
    pub focused: bool,
}

impl<'a> Sidebar<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect, scheme: ColorScheme) {
        let border_color = if self.focused {
            FocusStyle::focused_border(scheme)
        } else {
            FocusStyle::unfocused_border(scheme)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Span::styled(
                format!(" {} ", self.branding.app_name),
                Style::default()
                    .fg(BaseColors::fg(scheme))
                    .add_modifier(Modifier::BOLD),
            ));

        let rows = self.nav.rows(self.current);
        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let is_cursor = self.focused && self.nav.cursor == i;
                self.render_row(row, is_cursor, scheme)
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(self.nav.cursor.min(rows.len().saturating_sub(1))));

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_row(&self, row: &NavRow, is_cursor: bool, scheme: ColorScheme) -> ListItem<'static> {
        let current_path = self.current.path();
        let line = match row {
            NavRow::Link { title, path } => {
                let active = *path == current_path;
                let style = self.row_style(active, is_cursor, scheme);
                Line::from(Span::styled(format!(" {title}"), style))
            }
            NavRow::SectionHeader { title, open, active } => {
                let chevron = if *open { "▾" } else { "▸" };
                let style = self.row_style(*active, is_cursor, scheme);
                Line::from(Span::styled(format!(" {chevron} {title}"), style))
            }
            NavRow::Leaf { title, active, .. } => {
                let style = self.row_style(*active, is_cursor, scheme);
                Line::from(Span::styled(format!("    {title}"), style))
            }
        };
        ListItem::new(line)
    }

    fn row_style(&self, active: bool, is_cursor: bool, scheme: ColorScheme) -> Style {
        let mut style = if active {
            Style::default()
                .fg(FocusStyle::focused_border(scheme))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(BaseColors::muted(scheme))
        };
        if is_cursor {
            style = style.bg(FocusStyle::focused_bg(scheme));
        }
        style
    }
}
