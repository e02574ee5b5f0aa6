// ABOUTME: TUI event loop — owns the terminal and multiplexes keys, monitor events, and redraws.
// ABOUTME: Key actions become UserCommands; monitor events are folded into TuiState.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::monitor::events::{MonitorEvent, UserCommand};
use crate::tui::input::{InputResult, handle_key};
use crate::tui::state::TuiState;
use crate::tui::ui;

/// Redraw cadence when nothing else happens, so the clock-driven parts stay fresh.
const REDRAW_INTERVAL: Duration = Duration::from_millis(500);

/// Take over the terminal and run until the user quits or the monitor goes away.
pub async fn run(
    state: &mut TuiState,
    events: mpsc::Receiver<MonitorEvent>,
    commands: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = drive(&mut terminal, state, events, commands).await;
    ratatui::restore();
    result
}

async fn drive(
    terminal: &mut DefaultTerminal,
    state: &mut TuiState,
    mut events: mpsc::Receiver<MonitorEvent>,
    commands: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut keys = EventStream::new();
    let mut redraw = tokio::time::interval(REDRAW_INTERVAL);

    loop {
        terminal.draw(|frame| ui::render(frame, state))?;

        tokio::select! {
            maybe_event = keys.next() => {
                let Some(event) = maybe_event else { break };
                let Event::Key(key) = event? else { continue };
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match handle_key(state, key) {
                    InputResult::Toggle(camera) => {
                        if commands.send(UserCommand::Toggle { camera }).await.is_err() {
                            break;
                        }
                    }
                    InputResult::ClearLogs => {
                        if commands.send(UserCommand::ClearLogs).await.is_err() {
                            break;
                        }
                    }
                    InputResult::Quit => break,
                    InputResult::Dismissed(_) | InputResult::None => {}
                }
            }
            maybe_monitor = events.recv() => {
                match maybe_monitor {
                    Some(event) => state.apply_event(event),
                    None => break,
                }
            }
            _ = redraw.tick() => {}
        }
    }

    // Release anyone still waiting on a prompt so their tasks can finish.
    while state.dismiss_modal().is_some() {}
    Ok(())
}
