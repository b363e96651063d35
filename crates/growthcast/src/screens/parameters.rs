//! The parameter form: three sections of editable model inputs.
//!
//! Initial counts and pricing fields are edited inline as text; growth
//! rates are sliders adjusted with h/l. Every edit only touches the local
//! working copy — nothing reaches the service until the form is submitted.

use crossterm::event::{KeyCode, KeyEvent};
use growthcast_api::{ActorType, GROWTH_YEARS};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::components::slider::{slider_line, nudge};
use crate::components::styles::{HEADER_COLOR, row_label_style, section_block};
use crate::components::{Component, EventResult};
use crate::fields::{FieldSpec, INITIAL_FIELDS, PRICING_FIELDS};
use crate::state::{AppState, Section};
use crate::util::input::EditBuffer;

const LABEL_WIDTH: usize = 34;
const SLIDER_BAR_WIDTH: usize = 20;

/// Heights of the three sections when expanded (rows plus borders).
fn section_height(section: Section, expanded: bool) -> u16 {
    if !expanded {
        return 3;
    }
    match section {
        Section::InitialValues => INITIAL_FIELDS.len() as u16 + 2,
        // One header line plus a slider per year, per actor type.
        Section::GrowthRates => (3 * (GROWTH_YEARS + 1)) as u16 + 2,
        Section::Pricing => PRICING_FIELDS.len() as u16 + 2,
    }
}

fn scalar_field(section: Section, row: usize) -> Option<&'static FieldSpec> {
    match section {
        Section::InitialValues => INITIAL_FIELDS.get(row),
        Section::Pricing => PRICING_FIELDS.get(row),
        Section::GrowthRates => None,
    }
}

/// Map a growth-section row to its actor type and year index.
fn growth_row(row: usize) -> (ActorType, usize) {
    (ActorType::ALL[row / GROWTH_YEARS], row % GROWTH_YEARS)
}

pub struct ParametersScreen;

impl ParametersScreen {
    pub fn new() -> Self {
        Self
    }

    fn adjust_slider(&self, state: &mut AppState, steps: i32) -> EventResult {
        if state.form.section != Section::GrowthRates {
            return EventResult::NotHandled;
        }
        let (actor, year) = growth_row(state.form.row);
        let current = state.params.growth_rate_percent(actor, year);
        let next = nudge(current, steps);
        if next != current {
            state.params.set_growth_rate(actor, year, next);
            state.mark_dirty();
        }
        EventResult::Handled
    }

    fn begin_edit(&self, state: &mut AppState) -> EventResult {
        let Some(field) = scalar_field(state.form.section, state.form.row) else {
            return EventResult::NotHandled;
        };
        state.form.editing = Some(EditBuffer::new(field.edit_value(&state.params)));
        EventResult::Handled
    }

    fn handle_editing_key(&self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => {
                if let Some(buffer) = state.form.editing.take()
                    && let Some(field) = scalar_field(state.form.section, state.form.row)
                {
                    match field.commit(&mut state.params, &buffer.value) {
                        Ok(()) => state.mark_dirty(),
                        Err(err) => {
                            // Unparseable input: keep the previous value.
                            tracing::debug!(input = %buffer.value, %err, "discarding field edit");
                        }
                    }
                }
            }
            KeyCode::Esc => state.form.editing = None,
            KeyCode::Backspace => {
                if let Some(buffer) = state.form.editing.as_mut() {
                    buffer.backspace();
                }
            }
            KeyCode::Delete => {
                if let Some(buffer) = state.form.editing.as_mut() {
                    buffer.delete();
                }
            }
            KeyCode::Left => {
                if let Some(buffer) = state.form.editing.as_mut() {
                    buffer.move_left();
                }
            }
            KeyCode::Right => {
                if let Some(buffer) = state.form.editing.as_mut() {
                    buffer.move_right();
                }
            }
            KeyCode::Home => {
                if let Some(buffer) = state.form.editing.as_mut() {
                    buffer.move_home();
                }
            }
            KeyCode::End => {
                if let Some(buffer) = state.form.editing.as_mut() {
                    buffer.move_end();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buffer) = state.form.editing.as_mut() {
                    buffer.insert_char(c);
                }
            }
            _ => {}
        }
        EventResult::Handled
    }
}

impl Default for ParametersScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ParametersScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        // An open edit buffer captures every key.
        if state.form.editing.is_some() {
            return self.handle_editing_key(key, state);
        }

        match key.code {
            KeyCode::Tab => {
                state.form.next_section();
                EventResult::Handled
            }
            KeyCode::BackTab => {
                state.form.prev_section();
                EventResult::Handled
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.form.next_row();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.form.prev_row();
                EventResult::Handled
            }
            KeyCode::Char(' ') => {
                state.form.toggle_expanded();
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => self.adjust_slider(state, -1),
            KeyCode::Char('l') | KeyCode::Right => self.adjust_slider(state, 1),
            KeyCode::Enter => self.begin_edit(state),
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut constraints: Vec<Constraint> = Section::ALL
            .iter()
            .map(|s| Constraint::Length(section_height(*s, state.form.is_expanded(*s))))
            .collect();
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for section in Section::ALL {
            render_section(frame, chunks[section.index()], section, state);
        }
    }
}

fn render_section(frame: &mut Frame, area: Rect, section: Section, state: &AppState) {
    let focused = state.form.section == section;
    let expanded = state.form.is_expanded(section);
    let block = section_block(section.title(), expanded, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !expanded {
        return;
    }

    let lines = match section {
        Section::GrowthRates => growth_lines(state, focused),
        _ => scalar_lines(section, state, focused),
    };
    frame.render_widget(Paragraph::new(lines), inner);
}

fn scalar_lines(section: Section, state: &AppState, section_focused: bool) -> Vec<Line<'static>> {
    let fields: &[FieldSpec] = match section {
        Section::InitialValues => &INITIAL_FIELDS,
        Section::Pricing => &PRICING_FIELDS,
        Section::GrowthRates => unreachable!(),
    };

    fields
        .iter()
        .enumerate()
        .map(|(row, field)| {
            let focused = section_focused && state.form.row == row;
            let mut spans = vec![Span::styled(
                format!("{:<width$}", field.label, width = LABEL_WIDTH),
                row_label_style(focused),
            )];

            match state.form.editing.as_ref() {
                Some(buffer) if focused => spans.extend(buffer.as_line().spans),
                _ => spans.push(Span::styled(
                    field.display(&state.params),
                    Style::default(),
                )),
            }
            Line::from(spans)
        })
        .collect()
}

fn growth_lines(state: &AppState, section_focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(3 * (GROWTH_YEARS + 1));
    for (actor_index, actor) in ActorType::ALL.into_iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{} Growth Rates (% per month)", actor.label()),
            Style::default().fg(HEADER_COLOR),
        )));
        for year in 0..GROWTH_YEARS {
            let row = actor_index * GROWTH_YEARS + year;
            let focused = section_focused && state.form.row == row;
            lines.push(slider_line(
                &format!("  Year {}", year + 1),
                state.params.growth_rate_percent(actor, year),
                SLIDER_BAR_WIDTH,
                focused,
            ));
        }
    }
    lines
}
