// ABOUTME: E2E tests for TUI rendering using ratatui's TestBackend.
// ABOUTME: Verifies the header, start/stop control, feed panel, logs, status bar, and alert modal.

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use tokio::sync::oneshot;

use blinkwatch::alert::AlertKind;
use blinkwatch::monitor::MonitorEvent;
use blinkwatch::tui::state::TuiState;
use blinkwatch::tui::ui;

/// Extract a single row of text from the terminal buffer as a String.
fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buf = terminal.backend().buffer();
    let width = buf.area.width;
    (0..width)
        .map(|x| {
            buf.cell((x, y))
                .map(|c| c.symbol().chars().next().unwrap_or(' '))
                .unwrap_or(' ')
        })
        .collect()
}

/// Extract all text from the terminal buffer as a single string (rows joined by newlines).
fn all_text(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    let height = buf.area.height;
    (0..height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn new_state() -> TuiState {
    TuiState::new(
        "http://127.0.0.1:5000".to_string(),
        vec!["0".to_string(), "1".to_string()],
        "0",
    )
}

fn draw(state: &mut TuiState) -> Terminal<TestBackend> {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();
    terminal
}

/// A fresh state shows the app name, the server, an idle Start control,
/// and the empty-feed and empty-log placeholders.
#[test]
fn renders_idle_state() {
    let mut state = new_state();
    let terminal = draw(&mut state);

    let header = row_text(&terminal, 0);
    assert!(header.contains("blinkwatch"), "header: {:?}", header);
    assert!(header.contains("http://127.0.0.1:5000"), "header: {:?}", header);

    let controls = row_text(&terminal, 1);
    assert!(controls.contains("[ Start ]"), "controls: {:?}", controls);

    let text = all_text(&terminal);
    assert!(text.contains("No active feed"));
    assert!(text.contains("No logs yet"));

    let status = row_text(&terminal, 23);
    assert!(status.contains("idle"), "status: {:?}", status);
    assert!(status.contains("strain armed"), "status: {:?}", status);
}

/// Once a session starts the control flips to Stop and the feed panel
/// shows the stream address.
#[test]
fn renders_active_session() {
    let mut state = new_state();
    state.apply_event(MonitorEvent::SessionStarted {
        camera: "1".to_string(),
        feed_url: "http://127.0.0.1:5000/video_feed".to_string(),
        already_running: false,
    });
    let terminal = draw(&mut state);

    assert!(row_text(&terminal, 1).contains("[ Stop ]"));
    let text = all_text(&terminal);
    assert!(text.contains("http://127.0.0.1:5000/video_feed"));
    assert!(row_text(&terminal, 23).contains("LIVE cam 1"));
}

/// Log lines from the service appear verbatim in the logs panel.
#[test]
fn renders_log_lines() {
    let mut state = new_state();
    state.apply_event(MonitorEvent::LogsReplaced(vec![
        "10:00:00 - 10:01:00: No eye strain (Blinks: 15)".to_string(),
        "10:01:00 - 10:02:00: Eye strain (Blinks: 4)".to_string(),
    ]));
    let terminal = draw(&mut state);

    let text = all_text(&terminal);
    assert!(text.contains("No eye strain (Blinks: 15)"));
    assert!(text.contains("Eye strain (Blinks: 4)"));
    assert!(!text.contains("No logs yet"));
}

/// An alert prompt is drawn over the screen with its message and the
/// dismiss hint; a second queued prompt is counted in the title.
#[test]
fn renders_alert_modal_with_queue_count() {
    let mut state = new_state();
    let (tx1, _rx1) = oneshot::channel();
    let (tx2, _rx2) = oneshot::channel();
    state.apply_event(MonitorEvent::AlertPrompt {
        kind: AlertKind::Fatigue,
        text: AlertKind::Fatigue.prompt_text().to_string(),
        responder: tx1,
    });
    state.apply_event(MonitorEvent::AlertPrompt {
        kind: AlertKind::Strain,
        text: AlertKind::Strain.prompt_text().to_string(),
        responder: tx2,
    });
    let terminal = draw(&mut state);

    let text = all_text(&terminal);
    assert!(text.contains("Fatigue detected"), "screen:\n{}", text);
    assert!(text.contains("Press Enter to dismiss"));
    assert!(text.contains("(+1)"));
    assert!(!text.contains("Eye strain detected"));
}

/// A rejected start shows the server's message as an error modal.
#[test]
fn renders_start_rejection() {
    let mut state = new_state();
    state.apply_event(MonitorEvent::StartRejected {
        message: "camera busy".to_string(),
    });
    let terminal = draw(&mut state);

    assert!(all_text(&terminal).contains("Error: camera busy"));
    assert!(row_text(&terminal, 1).contains("[ Start ]"));
}

/// Transport errors surface in the status bar without interrupting the screen.
#[test]
fn renders_last_error_in_status_bar() {
    let mut state = new_state();
    state.apply_event(MonitorEvent::Error("Log fetch failed".to_string()));
    let terminal = draw(&mut state);

    assert!(row_text(&terminal, 23).contains("Log fetch failed"));
}
