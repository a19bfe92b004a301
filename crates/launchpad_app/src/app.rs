use std::io::{self, BufRead};
use std::sync::mpsc;
use std::time::Duration;

use flow_logging::flow_info;
use launchpad_core::{update, AppState, Msg, ViewMode};
use launchpad_engine::ProvisionSettings;

use crate::effects::EffectRunner;
use crate::render;

/// Base URL of the provisioning service when `LAUNCHPAD_SERVICE_URL` is
/// unset.
const DEFAULT_SERVICE_URL: &str = "http://localhost:3000";

/// How long to wait for engine messages before re-checking the channel.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub fn run() -> io::Result<()> {
    let service_url = std::env::var("LAUNCHPAD_SERVICE_URL")
        .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());
    let settings = ProvisionSettings::new(&service_url)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    flow_info!("provisioning endpoint: {}", settings.endpoint());

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(settings, msg_tx);

    render::banner();
    let mut state = AppState::new();
    render::render(&state.view());

    loop {
        match state.view().mode {
            ViewMode::EntryForm => {
                let Some(idea) = read_idea()? else {
                    // stdin closed; nothing more to submit.
                    break;
                };
                state = dispatch(state, Msg::IdeaChanged(idea), &runner);
                state = dispatch(state, Msg::SubmitClicked, &runner);
                render_if_dirty(&mut state);
            }
            ViewMode::ProgressNarration => match msg_rx.recv_timeout(POLL_INTERVAL) {
                Ok(msg) => {
                    state = dispatch(state, msg, &runner);
                    render_if_dirty(&mut state);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => break,
            },
            ViewMode::SuccessInstructions => {
                flow_info!(
                    "attempt {} deployed; exiting",
                    flow_logging::get_active_attempt()
                );
                break;
            }
        }
    }

    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.enqueue(effects);
    state
}

fn render_if_dirty(state: &mut AppState) {
    if state.consume_dirty() {
        render::render(&state.view());
    }
}

/// Reads one idea line from stdin. Returns `None` once stdin is closed.
fn read_idea() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
