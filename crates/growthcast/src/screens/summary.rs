//! Read-only panel showing the latest forecast summary from the service.
//!
//! The summary shape belongs to the service; rows with the expected keys
//! get a formatted table, anything else falls back to raw JSON.

use crossterm::event::KeyEvent;
use growthcast_api::YearlySummary;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use serde_json::Value;

use crate::components::styles::{HEADER_COLOR, HELP_COLOR};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_currency;

pub struct SummaryPanel;

impl SummaryPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummaryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SummaryPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Forecast Summary ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = match &state.last_summary {
            Some(summary) => summary_lines(summary),
            None => vec![Line::from(Span::styled(
                "Submit the parameters (Ctrl+S) to compute a forecast.",
                Style::default().fg(HELP_COLOR),
            ))],
        };

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

fn summary_lines(summary: &YearlySummary) -> Vec<Line<'static>> {
    let Value::Array(entries) = summary else {
        return raw_json_lines(summary);
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:<6}{:>12}{:>12}{:>12}",
            "Year", "Income", "Expenses", "EBITDA"
        ),
        Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD),
    ))];

    for entry in entries {
        match year_row(entry) {
            Some(line) => lines.push(line),
            None => lines.push(Line::raw(entry.to_string())),
        }
    }
    lines
}

fn year_row(entry: &Value) -> Option<Line<'static>> {
    let year = entry.get("year").and_then(Value::as_i64)?;
    let income = entry.get("income").and_then(Value::as_f64);
    let expenses = entry.get("expenses").and_then(Value::as_f64);
    let ebitda = entry.get("ebitda").and_then(Value::as_f64);

    let money = |v: Option<f64>| v.map(format_currency).unwrap_or_else(|| "-".to_string());

    let ebitda_style = match ebitda {
        Some(v) if v < 0.0 => Style::default().fg(Color::Red),
        Some(_) => Style::default().fg(Color::Green),
        None => Style::default(),
    };

    Some(Line::from(vec![
        Span::raw(format!("{year:<6}")),
        Span::raw(format!("{:>12}", money(income))),
        Span::raw(format!("{:>12}", money(expenses))),
        Span::styled(format!("{:>12}", money(ebitda)), ebitda_style),
    ]))
}

fn raw_json_lines(summary: &YearlySummary) -> Vec<Line<'static>> {
    let pretty = serde_json::to_string_pretty(summary).unwrap_or_else(|_| summary.to_string());
    pretty.lines().map(|l| Line::raw(l.to_string())).collect()
}
