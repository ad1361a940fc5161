use coachboard_core::ColorScheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::{BaseColors, FocusStyle};

/// Reusable search bar component for filtering lists
pub struct SearchBar {
    /// Current search query
    pub query: String,
    /// Whether the search bar is capturing keystrokes
    pub active: bool,
    /// Placeholder text when empty
    pub placeholder: String,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            active: false,
            placeholder: "Type to search...".to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Render the search bar
    pub fn render(&self, frame: &mut Frame, area: Rect, scheme: ColorScheme) {
        let (text, style) = if self.query.is_empty() {
            (
                self.placeholder.as_str(),
                Style::default().fg(BaseColors::muted(scheme)),
            )
        } else {
            (self.query.as_str(), Style::default().fg(BaseColors::fg(scheme)))
        };

        let border_color = if self.active {
            FocusStyle::focused_border(scheme)
        } else {
            FocusStyle::unfocused_border(scheme)
        };

        let search_line = Line::from(vec![
            Span::styled("/ ", Style::default().fg(FocusStyle::focused_border(scheme))),
            Span::styled(text, style),
            if self.active {
                Span::styled(
                    "_",
                    Style::default()
                        .fg(FocusStyle::focused_border(scheme))
                        .add_modifier(Modifier::SLOW_BLINK),
                )
            } else {
                Span::raw("")
            },
        ]);

        let paragraph = Paragraph::new(search_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(Span::styled(
                    " Search ",
                    Style::default()
                        .fg(BaseColors::fg(scheme))
                        .add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(paragraph, area);
    }
}

/// Highlight search matches in text.
///
/// Returns owned spans with case-insensitive matches rendered on a yellow
/// background, the way the table rows echo the active query.
pub fn highlight_matches(text: &str, query: &str) -> Vec<Span<'static>> {
    if query.is_empty() {
        return vec![Span::raw(text.to_string())];
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();

    let mut spans = Vec::new();
    let mut last_end = 0;

    for (idx, _) in text_lower.match_indices(&query_lower) {
        if idx < last_end {
            continue;
        }
        if idx > last_end {
            spans.push(Span::raw(text[last_end..idx].to_string()));
        }

        let match_end = idx + query.len();
        spans.push(Span::styled(
            text[idx..match_end].to_string(),
            Style::default()
                .bg(ratatui::style::Color::Yellow)
                .fg(ratatui::style::Color::Black)
                .add_modifier(Modifier::BOLD),
        ));

        last_end = match_end;
    }

    if last_end < text.len() {
        spans.push(Span::raw(text[last_end..].to_string()));
    }

    if spans.is_empty() {
        vec![Span::raw(text.to_string())]
    } else {
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_empty_query() {
        let spans = highlight_matches("hello world", "");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_highlight_single_match() {
        let spans = highlight_matches("hello world", "world");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_highlight_case_insensitive() {
        let spans = highlight_matches("Sarah Johnson", "SARAH");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_highlight_no_match() {
        let spans = highlight_matches("hello world", "xyz");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn test_query_editing() {
        let mut bar = SearchBar::new();
        bar.push('s');
        bar.push('a');
        assert_eq!(bar.query, "sa");
        bar.pop();
        assert_eq!(bar.query, "s");
        bar.clear();
        assert!(bar.is_empty());
    }
}
