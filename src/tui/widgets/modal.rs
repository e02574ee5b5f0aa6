// ABOUTME: Modal widget — blocking prompt drawn centered over the screen.
// ABOUTME: Alert modals are red with a kind-specific title; messages are yellow.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::ModalKind;

const DISMISS_HINT: &str = "Press Enter to dismiss";

/// Border/title color for a modal kind.
pub fn modal_color(kind: ModalKind) -> Color {
    match kind {
        ModalKind::Alert(_) => Color::Red,
        ModalKind::Message => Color::Yellow,
    }
}

/// Body lines of a modal: the text, a blank line, and the dismiss hint.
pub fn modal_lines(kind: ModalKind, text: &str) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = text
        .lines()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        DISMISS_HINT,
        Style::default().fg(modal_color(kind)),
    )));
    lines
}

/// Centered rectangle sized to fit `text` inside `area`, including borders.
pub fn modal_area(area: Rect, text: &str) -> Rect {
    let text_width = text
        .lines()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(DISMISS_HINT.len()))
        .max()
        .unwrap_or(0) as u16;
    let text_lines = text.lines().count().max(1) as u16;

    let width = text_width.saturating_add(6).min(area.width);
    let height = (text_lines + 4).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertKind;

    #[test]
    fn lines_include_text_and_hint() {
        let lines = modal_lines(ModalKind::Alert(AlertKind::Fatigue), "Fatigue detected");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].spans[0].content, "Fatigue detected");
        assert!(lines[2].spans[0].content.contains("Enter"));
    }

    #[test]
    fn alert_modal_is_red() {
        assert_eq!(modal_color(ModalKind::Alert(AlertKind::Strain)), Color::Red);
        assert_eq!(modal_color(ModalKind::Message), Color::Yellow);
    }

    #[test]
    fn area_is_centered_and_fits() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = modal_area(area, "Eye strain detected: Blink count low in the last minute.");
        assert!(rect.width <= 80 && rect.height <= 24);
        assert_eq!(rect.x, (80 - rect.width) / 2);
        assert_eq!(rect.y, (24 - rect.height) / 2);
        assert_eq!(rect.height, 5);
    }

    #[test]
    fn area_clamps_to_small_terminal() {
        let area = Rect::new(0, 0, 20, 3);
        let rect = modal_area(area, "a rather long message that cannot fit");
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 3);
    }
}
