// ABOUTME: Log panel widget — renders fetched log lines into styled ratatui Lines.
// ABOUTME: Lines reporting eye strain are highlighted so they stand out while scrolling.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render log lines for display, with a placeholder when there are none.
pub fn render_log_lines(logs: &[String]) -> Vec<Line<'static>> {
    if logs.is_empty() {
        return vec![Line::from(Span::styled(
            "No logs yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))];
    }

    logs.iter()
        .map(|line| {
            let style = if line.contains("No eye strain") {
                Style::default().fg(Color::Gray)
            } else if line.contains("strain") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(line.clone(), style))
        })
        .collect()
}

/// Scroll offset from the top for a panel of `height` rows, given an offset from the bottom.
pub fn top_offset(total_lines: usize, height: u16, from_bottom: u16) -> u16 {
    let total = total_lines.min(u16::MAX as usize) as u16;
    let max_scroll = total.saturating_sub(height);
    max_scroll.saturating_sub(from_bottom.min(max_scroll))
}
