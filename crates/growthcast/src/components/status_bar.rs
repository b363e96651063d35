use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult, styles::HELP_COLOR};
use crate::state::AppState;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        if state.form.editing.is_some() {
            "type value | Enter: apply | Esc: cancel"
        } else if state.submitting {
            "submitting... | j/k: nav | Tab: section | q: quit"
        } else {
            "j/k: nav | Tab: section | h/l: slider | Enter: edit | Space: fold | Ctrl+S: update forecast | q: quit"
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![Span::styled(
            Self::help_text(state),
            Style::default().fg(HELP_COLOR),
        )];
        if state.dirty {
            spans.push(Span::styled(
                "  * unsaved changes",
                Style::default().fg(Color::Yellow),
            ));
        }
        if state.submitting {
            spans.push(Span::styled(
                "  [updating...]",
                Style::default().fg(Color::Cyan),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
