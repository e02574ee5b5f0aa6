// ABOUTME: Controls row widget — camera selector and the single start/stop control.
// ABOUTME: The control label reflects session state; the selector dims while locked.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Render the camera selector and start/stop control as one line.
pub fn controls_line(
    cameras: &[String],
    selected: usize,
    locked: bool,
    control_label: &str,
    pending: bool,
) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled(" Camera: ", Style::default().fg(Color::White))];

    for (i, camera) in cameras.iter().enumerate() {
        let label = format!(" {} ", camera);
        let style = if i == selected {
            let base = Style::default().add_modifier(Modifier::BOLD);
            if locked {
                base.fg(Color::Gray)
            } else {
                base.fg(Color::Black).bg(Color::Cyan)
            }
        } else {
            dim
        };
        spans.push(Span::styled(label, style));
    }

    spans.push(Span::raw("   "));

    let control_style = if pending {
        dim
    } else if control_label == "Stop" {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    };
    spans.push(Span::styled(format!(" [ {} ] ", control_label), control_style));

    let hint = if pending { "  working..." } else { "  Enter" };
    spans.push(Span::styled(hint, dim));

    Line::from(spans)
}
