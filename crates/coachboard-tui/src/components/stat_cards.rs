use coachboard_core::catalog::StatCard;
use coachboard_core::ColorScheme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::{tone_color, BaseColors, FocusStyle};

/// Render a row of summary cards above a list.
pub fn render_stat_cards(frame: &mut Frame, area: Rect, cards: &[StatCard], scheme: ColorScheme) {
    if cards.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FocusStyle::unfocused_border(scheme)))
            .title(Span::styled(
                format!(" {} ", card.label),
                Style::default().fg(BaseColors::fg(scheme)),
            ));

        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default()
                    .fg(tone_color(card.tone, scheme))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                card.detail,
                Style::default().fg(BaseColors::muted(scheme)),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), *chunk);
    }
}
