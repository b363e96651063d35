//! One-line banner for submission outcomes.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::state::{AppState, Severity};

pub struct NotificationBar;

impl NotificationBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NotificationBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NotificationBar {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.notification.open && key.code == KeyCode::Esc {
            state.notification.dismiss();
            return EventResult::Handled;
        }
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if !state.notification.open {
            return;
        }

        let (fg, marker) = match state.notification.severity {
            Severity::Success => (Color::Green, "✔"),
            Severity::Error => (Color::Red, "✘"),
        };

        let line = Line::from(vec![
            Span::styled(format!(" {marker} "), Style::default().fg(fg)),
            Span::styled(
                state.notification.message.clone(),
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
