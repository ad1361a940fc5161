use coachboard_core::ColorScheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::{BaseColors, FocusStyle};

/// Defined empty state: zero rows is a valid view, not an error.
pub fn render_empty_state(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    hint: &str,
    scheme: ColorScheme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FocusStyle::unfocused_border(scheme)))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(BaseColors::fg(scheme))
                .add_modifier(Modifier::BOLD),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top_pad = inner.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::from(""); top_pad as usize];
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(BaseColors::fg(scheme)),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(BaseColors::muted(scheme)),
    )));

    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        inner,
    );
}
