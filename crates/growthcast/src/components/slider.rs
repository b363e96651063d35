//! Horizontal slider line for the growth-rate editors.
//!
//! Sliders carry a percentage value on a fixed 0–30 range with a 0.5 step,
//! rendered as a filled bar with a one-decimal caption.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::styles::FOCUS_COLOR;

/// Slider range and step for the growth-rate widgets (percent units).
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 30.0;
pub const SLIDER_STEP: f64 = 0.5;

/// Nudge a percentage value one step in the given direction, snapped to the
/// step grid and clamped to the slider range.
pub fn nudge(percent: f64, steps: i32) -> f64 {
    let snapped = (percent / SLIDER_STEP).round() * SLIDER_STEP;
    (snapped + steps as f64 * SLIDER_STEP).clamp(SLIDER_MIN, SLIDER_MAX)
}

/// Render one slider row: label, bar, and percentage caption.
pub fn slider_line(label: &str, percent: f64, bar_width: usize, focused: bool) -> Line<'static> {
    let ratio = ((percent - SLIDER_MIN) / (SLIDER_MAX - SLIDER_MIN)).clamp(0.0, 1.0);
    let filled = (ratio * bar_width as f64).round() as usize;

    let bar_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let label_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{label:<10}"), label_style),
        Span::raw("["),
        Span::styled("█".repeat(filled), bar_style),
        Span::styled("░".repeat(bar_width.saturating_sub(filled)), Style::default().fg(Color::DarkGray)),
        Span::raw("] "),
        Span::styled(format!("{percent:>5.1}%"), label_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_moves_by_half_percent_steps() {
        assert_eq!(nudge(8.0, 1), 8.5);
        assert_eq!(nudge(8.0, -1), 7.5);
    }

    #[test]
    fn nudge_snaps_off_grid_values_first() {
        // 8.3 snaps to 8.5, then steps up
        assert_eq!(nudge(8.3, 1), 9.0);
    }

    #[test]
    fn nudge_clamps_to_the_slider_range() {
        assert_eq!(nudge(0.0, -1), 0.0);
        assert_eq!(nudge(30.0, 1), 30.0);
        assert_eq!(nudge(29.8, 1), 30.0);
    }

    #[test]
    fn caption_shows_one_decimal() {
        let line = slider_line("Year 1", 12.0, 10, false);
        let text: String = line.spans.iter().map(|s| s.content.clone()).collect();
        assert!(text.contains("12.0%"));
    }
}
