use crate::app::{
    action::Action,
    command::Command,
    debounce::Debouncer,
    handler::{handle_command, Services},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    services: Services,
    debounce: Duration,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, debounce, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    services: Services,
    debounce: Duration,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);
    let mut debouncer = Debouncer::new(debounce, action_tx.clone());

    // Session bootstrap
    handle_command(Command::LoadTranscript, &services, action_tx.clone())?;

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        let Some(action) = action else {
            continue;
        };
        let command = reducer::update(&mut app_state, action);

        if app_state.should_quit {
            break;
        }

        match command {
            Some(Command::ScheduleSuggestions(query)) => {
                debouncer.trigger(Action::SuggestionQueryDue(query));
            }
            Some(Command::CancelSuggestions) => debouncer.cancel(),
            Some(other) => handle_command(other, &services, action_tx.clone())?,
            None => {}
        }
    }

    debouncer.cancel();
    if app_state.dictation.listening {
        services.stop_dictation().await;
    }

    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
