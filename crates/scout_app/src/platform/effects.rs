use std::time::Duration;

use scout_core::{update, AppState, AppViewModel, Effect, Msg};
use scout_engine::{EngineEvent, EngineHandle};
use scout_logging::{scout_debug, scout_info, scout_warn};

/// How long the driver waits for an engine event before redrawing.
const TICK: Duration = Duration::from_millis(100);

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Submit { session, request } => {
                    scout_info!(
                        "Submit session={} url={} code_len={}",
                        session,
                        request.url,
                        request.code.len()
                    );
                    self.engine.submit(session, request);
                }
                Effect::FetchStatus { session, task_id } => {
                    self.engine.fetch_status(session, task_id);
                }
                Effect::FetchResult {
                    session,
                    result_file,
                } => {
                    self.engine.fetch_result(session, result_file);
                }
                Effect::SchedulePoll { session, delay } => {
                    self.engine.schedule_poll(session, delay);
                }
                Effect::CancelPolling => {
                    if self.engine.cancel_polling() {
                        scout_debug!("poll timer cancelled");
                    }
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine completion.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }

    pub fn has_pending_poll(&self) -> bool {
        self.engine.has_pending_poll()
    }

    /// Teardown: no timer may outlive the app.
    pub fn shutdown(&self) {
        if self.engine.cancel_polling() {
            scout_info!("cancelled pending status check on exit");
        }
    }
}

/// Applies one message and executes the resulting effects.
pub fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

/// Pumps engine events into the state machine until it leaves the loading states.
///
/// `on_tick` is called after every event and every idle tick so the caller
/// can animate its loading indicator.
pub fn drive(
    mut state: AppState,
    runner: &EffectRunner,
    mut on_tick: impl FnMut(&AppViewModel),
) -> AppState {
    while state.is_loading() {
        if let Some(msg) = runner.next_msg(TICK) {
            state = dispatch(state, msg, runner);
        }
        on_tick(&state.view());
    }
    state
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Submitted { session, result } => Msg::SubmitCompleted {
            session,
            result: result.map_err(|err| {
                scout_warn!("Submit failed session={}: {}", session, err);
                err.to_string()
            }),
        },
        EngineEvent::StatusFetched { session, result } => Msg::StatusReceived {
            session,
            result: result.map_err(|err| err.to_string()),
        },
        EngineEvent::ResultFetched { session, result } => Msg::ResultReceived {
            session,
            result: result.map_err(|err| err.to_string()),
        },
        EngineEvent::PollDue { session } => Msg::PollDue { session },
    }
}
