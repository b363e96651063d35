//! Shared styling for the form widgets.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Color for the focused section border and focused row label.
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Color for help and secondary text.
pub const HELP_COLOR: Color = Color::DarkGray;

/// Color for section titles.
pub const HEADER_COLOR: Color = Color::Cyan;

/// Bordered block for a form section, with a `[-]`/`[+]` collapse marker
/// and a border color reflecting focus.
pub fn section_block(title: &str, expanded: bool, focused: bool) -> Block<'static> {
    let marker = if expanded { "[-]" } else { "[+]" };
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {marker} {title} "))
}

/// Label style for a form row, highlighted when focused.
pub fn row_label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
