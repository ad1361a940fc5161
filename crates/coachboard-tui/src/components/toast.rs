use coachboard_core::catalog::Tone;
use coachboard_core::ColorScheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

use crate::theme::tone_color;

const TOAST_TTL: Duration = Duration::from_secs(3);

/// A transient feedback message (bulk action dispatched, export written).
pub struct Toast {
    pub message: String,
    pub tone: Tone,
    created: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
            created: Instant::now(),
        }
    }

    fn expired(&self) -> bool {
        self.created.elapsed() > TOAST_TTL
    }
}

/// Queue of active toasts, newest rendered closest to the bottom edge.
#[derive(Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, message: impl Into<String>, tone: Tone) {
        self.toasts.push(Toast::new(message, tone));
    }

    /// Drop expired toasts; call once per frame.
    pub fn tick(&mut self) {
        self.toasts.retain(|t| !t.expired());
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, scheme: ColorScheme) {
        for (i, toast) in self.toasts.iter().rev().take(3).enumerate() {
            let width = (toast.message.len() as u16 + 4).min(area.width.saturating_sub(2));
            let toast_area = Rect {
                x: area.x + area.width.saturating_sub(width + 1),
                y: area.y + area.height.saturating_sub(3 * (i as u16 + 1) + 1),
                width,
                height: 3,
            };
            let color = tone_color(toast.tone, scheme);
            let paragraph = Paragraph::new(Line::from(Span::styled(
                toast.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
            frame.render_widget(Clear, toast_area);
            frame.render_widget(paragraph, toast_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_tick() {
        let mut stack = ToastStack::default();
        assert!(stack.is_empty());
        stack.push("exported 3 rows", Tone::Success);
        stack.tick();
        assert!(!stack.is_empty());
    }
}
