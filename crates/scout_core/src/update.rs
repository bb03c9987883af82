use crate::{
    validate_submission, AppState, Effect, FlowError, FlowState, Msg, SessionId, Severity,
    TaskStatus,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlChanged(value) => {
            state.set_url(value);
            Vec::new()
        }
        Msg::CodeChanged(value) => {
            state.set_code(value);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::NotificationClosed => {
            state.close_notification();
            Vec::new()
        }
        Msg::SubmitCompleted { session, result } => {
            if !state.is_current(session) || *state.flow() != FlowState::Submitting {
                return (state, Vec::new());
            }
            match result {
                Ok(status) => submit_replied(&mut state, session, status),
                Err(text) => fail(&mut state, FlowError::Transport(text)),
            }
        }
        Msg::StatusReceived { session, result } => {
            if !state.is_current(session) {
                return (state, Vec::new());
            }
            let FlowState::Polling { task_id, polls } = state.flow().clone() else {
                return (state, Vec::new());
            };
            match result {
                Ok(status) => status_replied(&mut state, session, task_id, polls, status),
                Err(text) => fail(&mut state, FlowError::Transport(text)),
            }
        }
        Msg::PollDue { session } => match state.flow() {
            FlowState::Polling { task_id, .. } if state.is_current(session) => {
                vec![Effect::FetchStatus {
                    session,
                    task_id: task_id.clone(),
                }]
            }
            _ => Vec::new(),
        },
        Msg::ResultReceived { session, result } => {
            if !state.is_current(session) {
                return (state, Vec::new());
            }
            let FlowState::FetchingResult { message, .. } = state.flow().clone() else {
                return (state, Vec::new());
            };
            match result {
                Ok(event) => {
                    state.resolve_completed(event, message);
                    Vec::new()
                }
                Err(text) => fail(&mut state, FlowError::Transport(text)),
            }
        }
    };

    (state, effects)
}

fn submit(state: &mut AppState) -> Vec<Effect> {
    // The button is disabled while a submission is in flight.
    if state.is_loading() {
        return Vec::new();
    }
    let request = match validate_submission(&state.url().value, &state.code().value) {
        Ok(request) => request,
        Err(error) => {
            state.notify(error.to_string(), Severity::Error);
            return Vec::new();
        }
    };
    let session = state.begin_session();
    vec![Effect::CancelPolling, Effect::Submit { session, request }]
}

fn submit_replied(state: &mut AppState, session: SessionId, status: TaskStatus) -> Vec<Effect> {
    match status {
        TaskStatus::Success {
            result_file,
            message,
        } => fetch_result(state, session, result_file, message),
        TaskStatus::Error { message } => fail(state, FlowError::Backend(message)),
        TaskStatus::Pending {
            task_id: Some(task_id),
            ..
        } => {
            state.set_flow(FlowState::Polling {
                task_id: task_id.clone(),
                polls: 0,
            });
            vec![Effect::FetchStatus { session, task_id }]
        }
        other => fail(
            state,
            FlowError::Backend(format!(
                "unexpected reply to submission: status {}",
                other.name()
            )),
        ),
    }
}

fn status_replied(
    state: &mut AppState,
    session: SessionId,
    task_id: String,
    polls: u32,
    status: TaskStatus,
) -> Vec<Effect> {
    match status {
        TaskStatus::Scraped {
            result_file,
            message,
        } => {
            let mut effects = vec![Effect::CancelPolling];
            effects.extend(fetch_result(state, session, result_file, message));
            effects
        }
        TaskStatus::Error { message } => fail(state, FlowError::Backend(message)),
        _ => {
            let polls = polls + 1;
            let policy = state.policy();
            if policy.max_polls.is_some_and(|max| polls >= max) {
                return fail(state, FlowError::DeadlineExceeded { polls });
            }
            state.set_flow(FlowState::Polling { task_id, polls });
            vec![Effect::SchedulePoll {
                session,
                delay: policy.interval,
            }]
        }
    }
}

fn fetch_result(
    state: &mut AppState,
    session: SessionId,
    result_file: String,
    message: String,
) -> Vec<Effect> {
    state.set_flow(FlowState::FetchingResult {
        result_file: result_file.clone(),
        message,
    });
    vec![Effect::FetchResult {
        session,
        result_file,
    }]
}

fn fail(state: &mut AppState, error: FlowError) -> Vec<Effect> {
    state.resolve_failed(error);
    vec![Effect::CancelPolling]
}
