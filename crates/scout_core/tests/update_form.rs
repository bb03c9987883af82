use std::sync::Once;

use scout_core::{update, AppState, Effect, FlowLabel, FlowState, Msg, Severity, SubmissionRequest};

const EVENT_URL: &str = "https://www.ticketmaster.com/some-tour-2025/event/0A005F3B9A1C2D";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scout_logging::initialize_for_tests);
}

fn fill_form(state: AppState, url: &str, code: &str) -> AppState {
    let (state, _) = update(state, Msg::UrlChanged(url.to_string()));
    let (state, _) = update(state, Msg::CodeChanged(code.to_string()));
    state
}

#[test]
fn untouched_form_is_not_flagged() {
    init_logging();
    let view = AppState::new().view();

    assert!(view.form.url_valid);
    assert!(view.form.code_valid);
    assert!(!view.form.submit_flagged);
    assert!(view.form.submit_enabled);
    assert_eq!(view.flow, FlowLabel::Idle);
}

#[test]
fn live_validity_tracks_each_field() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::UrlChanged("https://www.tick".into()));
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert!(!view.form.url_valid);
    assert!(view.form.code_valid);
    assert!(view.form.submit_flagged);

    let (state, _) = update(state, Msg::UrlChanged(EVENT_URL.into()));
    assert!(state.view().form.url_valid);
    assert!(!state.view().form.submit_flagged);

    let (state, _) = update(state, Msg::CodeChanged(String::new()));
    let view = state.view();
    assert!(view.form.url_valid);
    assert!(!view.form.code_valid);
    assert!(view.form.submit_flagged);
    assert_eq!(view.form.url, EVENT_URL);
}

#[test]
fn invalid_url_is_rejected_without_network() {
    init_logging();
    for url in ["", "https://example.com", "https://www.ticketmaster.com/a/b/c"] {
        let state = fill_form(AppState::new(), url, "CODE");
        let (next, effects) = update(state, Msg::SubmitClicked);

        assert!(effects.is_empty(), "{url:?} produced effects");
        assert_eq!(*next.flow(), FlowState::Idle);
        assert_eq!(next.session(), 0);
        let notification = next.notification().expect("notification");
        assert_eq!(notification.message, "invalid vendor URL");
        assert_eq!(notification.severity, Severity::Error);
    }
}

#[test]
fn missing_access_code_is_rejected_without_network() {
    init_logging();
    let state = fill_form(AppState::new(), EVENT_URL, "");
    let (next, effects) = update(state, Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(*next.flow(), FlowState::Idle);
    assert_eq!(
        next.notification().map(|n| n.message.as_str()),
        Some("access code is required")
    );
}

#[test]
fn valid_submit_starts_a_session() {
    init_logging();
    let state = fill_form(AppState::new(), EVENT_URL, "CODE-1");
    let (next, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(next.session(), 1);
    assert_eq!(*next.flow(), FlowState::Submitting);
    assert!(next.notification().is_none());
    let view = next.view();
    assert!(view.is_loading);
    assert!(!view.form.submit_enabled);
    assert_eq!(
        effects,
        vec![
            Effect::CancelPolling,
            Effect::Submit {
                session: 1,
                request: SubmissionRequest {
                    url: EVENT_URL.to_string(),
                    code: "CODE-1".to_string(),
                },
            },
        ]
    );
}

#[test]
fn submit_while_loading_is_ignored() {
    init_logging();
    let state = fill_form(AppState::new(), EVENT_URL, "CODE");
    let (state, _) = update(state, Msg::SubmitClicked);
    let (next, effects) = update(state.clone(), Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn closing_notification_only_hides_it() {
    init_logging();
    let state = fill_form(AppState::new(), "bad", "CODE");
    let (state, _) = update(state, Msg::SubmitClicked);
    assert!(state.notification().is_some());

    let (mut next, effects) = update(state, Msg::NotificationClosed);
    assert!(effects.is_empty());
    assert!(next.notification().is_none());
    assert_eq!(next.url().value, "bad");
    assert_eq!(next.code().value, "CODE");
    assert!(next.consume_dirty());

    let (mut again, _) = update(next, Msg::NotificationClosed);
    assert!(!again.consume_dirty());
}
