//! Generic list page
//!
//! One renderer and key handler for every list screen; behavior comes from
//! the page's [`PageSpec`] (dimensions, controls, columns, stats, actions).

use coachboard_core::catalog::{PageSpec, Tone};
use coachboard_core::export::export_records_to_csv;
use coachboard_core::view::{FilterValue, ListView, LogSink, Precision, Record};
use coachboard_core::ColorScheme;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, TableState},
    Frame,
};
use tracing::debug;

use crate::components::{render_empty_state, render_stat_cards, RecordTable, SearchBar};
use crate::theme::{BaseColors, FocusStyle};

/// Feedback for the toast stack.
pub struct Feedback {
    pub message: String,
    pub tone: Tone,
}

/// State of one instantiated list page.
pub struct ListPage<R: Record + 'static> {
    spec: PageSpec<R>,
    list: ListView<'static, R>,
    search: SearchBar,
    /// Selected option per control; 0 is the "all" sentinel.
    control_idx: Vec<usize>,
    /// Control focused for cycling with Enter.
    focused_control: usize,
    cursor: usize,
    table_state: TableState,
}

impl<R: Record + 'static> ListPage<R> {
    pub fn new(spec: PageSpec<R>, records: &'static [R]) -> Self {
        let list = spec.list_view(records);
        let search = SearchBar::new().with_placeholder(spec.search_placeholder);
        let control_idx = vec![0; spec.controls.len()];
        let mut table_state = TableState::default();
        table_state.select(Some(0));
        Self {
            spec,
            list,
            search,
            control_idx,
            focused_control: 0,
            cursor: 0,
            table_state,
        }
    }

    pub fn title(&self) -> &'static str {
        self.spec.title
    }

    pub fn searching(&self) -> bool {
        self.search.active
    }

    fn apply_search(&mut self) {
        self.list
            .set_filter("search", FilterValue::Text(self.search.query.clone()));
        self.clamp_cursor();
    }

    fn cycle_control(&mut self) {
        let Some(control) = self.spec.controls.get(self.focused_control) else {
            return;
        };
        let slot = &mut self.control_idx[self.focused_control];
        *slot = (*slot + 1) % (control.options.len() + 1);
        let value = if *slot == 0 {
            FilterValue::All
        } else {
            control.options[*slot - 1].value.to_filter_value()
        };
        self.list.set_filter(control.dimension, value);
        self.clamp_cursor();
    }

    fn reset(&mut self) {
        self.search.clear();
        self.control_idx.iter_mut().for_each(|i| *i = 0);
        self.list.reset_filters();
        self.cursor = 0;
        self.table_state.select(Some(0));
    }

    fn clamp_cursor(&mut self) {
        let len = self.list.view().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
        self.table_state.select(Some(self.cursor));
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.list.view().len() as i32;
        if len == 0 {
            return;
        }
        self.cursor = (self.cursor as i32 + delta).clamp(0, len - 1) as usize;
        self.table_state.select(Some(self.cursor));
    }

    /// Handle a key; returns user feedback when an action fired.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Feedback> {
        if self.search.active {
            match key {
                KeyCode::Esc | KeyCode::Enter => self.search.active = false,
                KeyCode::Backspace => {
                    self.search.pop();
                    self.apply_search();
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.apply_search();
                }
                _ => {}
            }
            return None;
        }

        match key {
            KeyCode::Char('/') => self.search.active = true,
            KeyCode::Left => {
                if self.focused_control > 0 {
                    self.focused_control -= 1;
                }
            }
            KeyCode::Right => {
                if self.focused_control + 1 < self.spec.controls.len() {
                    self.focused_control += 1;
                }
            }
            KeyCode::Enter => self.cycle_control(),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Char(' ') => {
                let view = self.list.view();
                if let Some(record) = view.get(self.cursor) {
                    let id = record.id().to_string();
                    let checked = !self.list.selection().contains(&id);
                    self.list.select_one(&id, checked);
                }
            }
            KeyCode::Char('a') => {
                let select = !self.list.all_selected();
                self.list.select_all(select);
            }
            KeyCode::Char('c') => self.list.clear_selection(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('x') => return Some(self.export_view()),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                return self.dispatch_action(c as usize - '0' as usize);
            }
            _ => {}
        }
        None
    }

    fn dispatch_action(&mut self, number: usize) -> Option<Feedback> {
        if number == 0 || number > self.spec.actions.len() {
            return None;
        }
        if self.list.selection().is_empty() {
            return Some(Feedback {
                message: "No rows selected".to_string(),
                tone: Tone::Warning,
            });
        }
        let action = self.spec.actions[number - 1];
        let ids = self.list.dispatch(action, &LogSink);
        debug!(action = action.as_str(), count = ids.len(), "page action");
        Some(Feedback {
            message: format!("{} ({} rows)", action.label(), ids.len()),
            tone: Tone::Success,
        })
    }

    fn export_view(&mut self) -> Feedback {
        let view = self.list.view();
        let slug = self.spec.title.to_lowercase().replace(' ', "-");
        let path = std::env::temp_dir().join(format!("coachboard-{slug}.csv"));
        match export_records_to_csv(&view, self.spec.columns, &path) {
            Ok(()) => Feedback {
                message: format!("Exported {} rows to {}", view.len(), path.display()),
                tone: Tone::Success,
            },
            Err(e) => Feedback {
                message: format!("Export failed: {e}"),
                tone: Tone::Danger,
            },
        }
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        scheme: ColorScheme,
        precision: Precision,
        focused: bool,
    ) {
        let selection_len = self.list.selection().len();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(if selection_len > 0 { 1 } else { 0 }),
                Constraint::Min(3),
            ])
            .split(area);

        let cards = (self.spec.stats)(self.list.records(), precision);
        render_stat_cards(frame, chunks[0], &cards, scheme);

        self.render_filter_bar(frame, chunks[1], scheme, focused);

        if selection_len > 0 {
            self.render_bulk_bar(frame, chunks[2], scheme, selection_len);
        }

        let view = self.list.view();
        if view.is_empty() {
            render_empty_state(
                frame,
                chunks[3],
                self.spec.title,
                "No records match the current filters",
                "Press r to reset filters",
                scheme,
            );
            return;
        }

        let table = RecordTable {
            title: self.spec.title.to_string(),
            rows: &view,
            columns: self.spec.columns,
            selection: self.list.selection(),
            all_selected: self.list.all_selected(),
            focused,
        };
        table.render(frame, chunks[3], &mut self.table_state, scheme);
    }

    fn render_filter_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        scheme: ColorScheme,
        focused: bool,
    ) {
        let mut constraints = vec![Constraint::Min(20)];
        constraints.extend(
            self.spec
                .controls
                .iter()
                .map(|_| Constraint::Length(22)),
        );
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        self.search.render(frame, chunks[0], scheme);

        for (i, control) in self.spec.controls.iter().enumerate() {
            let selected = self.control_idx[i];
            let label = if selected == 0 {
                control.all_label
            } else {
                control.options[selected - 1].label
            };
            let is_focused = focused && !self.search.active && self.focused_control == i;
            let border = if is_focused {
                FocusStyle::focused_border(scheme)
            } else {
                FocusStyle::unfocused_border(scheme)
            };
            let paragraph = Paragraph::new(Line::from(vec![Span::styled(
                label,
                Style::default().fg(BaseColors::fg(scheme)),
            )]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(Span::styled(
                        format!(" {} ", control.dimension),
                        Style::default().fg(BaseColors::muted(scheme)),
                    )),
            );
            frame.render_widget(paragraph, chunks[i + 1]);
        }
    }

    fn render_bulk_bar(
        &self,
        frame: &mut Frame,
        area: Rect,
        scheme: ColorScheme,
        selection_len: usize,
    ) {
        let mut spans = vec![Span::styled(
            format!(" {selection_len} selected "),
            Style::default()
                .fg(FocusStyle::focused_border(scheme))
                .add_modifier(Modifier::BOLD),
        )];
        for (i, action) in self.spec.actions.iter().enumerate() {
            spans.push(Span::styled(
                format!("[{}] {}  ", i + 1, action.label()),
                Style::default().fg(BaseColors::fg(scheme)),
            ));
        }
        spans.push(Span::styled(
            "[c] Clear",
            Style::default().fg(BaseColors::muted(scheme)),
        ));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
