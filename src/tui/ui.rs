// ABOUTME: Main TUI rendering function — assembles header, controls, feed, logs, and status bar.
// ABOUTME: Splits the terminal frame into vertical chunks and draws any open modal on top.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::state::TuiState;
use crate::tui::widgets::controls::controls_line;
use crate::tui::widgets::logs::{render_log_lines, top_offset};
use crate::tui::widgets::modal::{modal_area, modal_color, modal_lines};
use crate::tui::widgets::status::{StatusBarParams, status_line};

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(1), // Header
            Constraint::Length(1), // Controls
            Constraint::Length(3), // Live feed
            Constraint::Min(3),    // Logs
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Header
    let header = Line::from(vec![
        Span::styled(
            " blinkwatch",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", state.server_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    // Controls
    let controls = controls_line(
        &state.cameras,
        state.selected_camera,
        state.session_active,
        state.control_label(),
        state.toggle_pending,
    );
    frame.render_widget(Paragraph::new(controls), chunks[1]);

    // Live feed sink
    let feed_text = match &state.feed_url {
        Some(url) => Span::styled(url.clone(), Style::default().fg(Color::Green)),
        None => Span::styled("No active feed", Style::default().fg(Color::DarkGray)),
    };
    let feed = Paragraph::new(Line::from(feed_text))
        .block(Block::default().borders(Borders::ALL).title(" Live feed "));
    frame.render_widget(feed, chunks[2]);

    // Logs
    let log_chunk = chunks[3];
    let inner_height = log_chunk.height.saturating_sub(2);
    let log_lines = render_log_lines(&state.logs);
    let max_from_bottom = (log_lines.len() as u16).saturating_sub(inner_height);
    if state.log_scroll > max_from_bottom {
        state.log_scroll = max_from_bottom;
    }
    let scroll = top_offset(log_lines.len(), inner_height, state.log_scroll);
    let logs = Paragraph::new(log_lines)
        .block(Block::default().borders(Borders::ALL).title(" Logs  [c] clear "))
        .scroll((scroll, 0));
    frame.render_widget(logs, log_chunk);

    // Status bar
    let status = status_line(&StatusBarParams {
        session_active: state.session_active,
        session_camera: state.session_camera.as_deref(),
        arming: &state.arming,
        last_poll: state.last_poll,
        last_error: state.last_error.as_deref(),
    });
    frame.render_widget(Paragraph::new(status), chunks[4]);

    // Modal on top of everything else.
    if let Some(modal) = state.current_modal() {
        let rect = modal_area(area, &modal.text);
        let color = modal_color(modal.kind);
        let mut title = format!(" {} ", modal.title);
        if state.modals.len() > 1 {
            title.push_str(&format!("(+{}) ", state.modals.len() - 1));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        let body = Paragraph::new(modal_lines(modal.kind, &modal.text))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(Clear, rect);
        frame.render_widget(body, rect);
    }
}
