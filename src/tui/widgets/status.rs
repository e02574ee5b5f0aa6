// ABOUTME: Status bar widget — session state, per-kind arming, last poll time, and last error.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use chrono::{DateTime, Local};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::alert::{AlertArm, AlertArming, ArmState};

/// Everything the status bar shows.
pub struct StatusBarParams<'a> {
    pub session_active: bool,
    pub session_camera: Option<&'a str>,
    pub arming: &'a AlertArming,
    pub last_poll: Option<DateTime<Local>>,
    pub last_error: Option<&'a str>,
}

/// Render the status bar line.
pub fn status_line(params: &StatusBarParams) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();

    if params.session_active {
        let camera = params.session_camera.unwrap_or("?");
        spans.push(Span::styled(
            format!(" ● LIVE cam {} ", camera),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(" ○ idle ", dim));
    }

    spans.push(Span::styled("| ", dim));
    spans.push(arm_span("strain", &params.arming.strain));
    spans.push(Span::styled("| ", dim));
    spans.push(arm_span("fatigue", &params.arming.fatigue));
    spans.push(Span::styled("| ", dim));
    spans.push(Span::styled(
        format!("last poll {} ", format_poll_time(params.last_poll)),
        Style::default().fg(Color::White),
    ));

    if let Some(error) = params.last_error {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            format!("{} ", error),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}

fn arm_span(name: &str, arm: &AlertArm) -> Span<'static> {
    let (label, color) = match arm.state() {
        ArmState::Armed => ("armed", Color::Cyan),
        ArmState::Fired => ("fired", Color::Yellow),
    };
    Span::styled(
        format!("{} {} ({}) ", name, label, arm.fired_count()),
        Style::default().fg(color),
    )
}

/// Format the last poll time as HH:MM:SS, or a dash before the first poll.
pub fn format_poll_time(at: Option<DateTime<Local>>) -> String {
    match at {
        Some(at) => at.format("%H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
