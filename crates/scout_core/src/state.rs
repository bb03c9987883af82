use std::time::Duration;

use crate::view_model::AppViewModel;
use crate::{is_access_code_valid, is_vendor_event_url, EventDetails, FlowError, SessionId};

/// Delay between two status checks of the same task.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// How long a pending task is polled before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// Non-terminal status replies tolerated per session; `None` polls forever.
    pub max_polls: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_polls: None,
        }
    }
}

/// One form input and its live validity.
///
/// A field nobody has typed into yet counts as valid so the submit button
/// starts un-flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            valid: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    Submitting,
    Polling {
        task_id: String,
        polls: u32,
    },
    /// Waiting for `/result/{result_file}`; `message` is shown once it lands.
    FetchingResult {
        result_file: String,
        message: String,
    },
    Resolved(Resolution),
}

impl FlowState {
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            FlowState::Submitting | FlowState::Polling { .. } | FlowState::FetchingResult { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Completed { message: String },
    Failed(FlowError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    url: FieldState,
    code: FieldState,
    flow: FlowState,
    session: SessionId,
    event: Option<EventDetails>,
    notification: Option<Notification>,
    policy: PollPolicy,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PollPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(self)
    }

    pub fn flow(&self) -> &FlowState {
        &self.flow
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn policy(&self) -> PollPolicy {
        self.policy
    }

    pub fn is_loading(&self) -> bool {
        self.flow.is_loading()
    }

    pub fn url(&self) -> &FieldState {
        &self.url
    }

    pub fn code(&self) -> &FieldState {
        &self.code
    }

    pub fn event(&self) -> Option<&EventDetails> {
        self.event.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_url(&mut self, value: String) {
        self.url.valid = is_vendor_event_url(&value);
        self.url.value = value;
        self.dirty = true;
    }

    pub(crate) fn set_code(&mut self, value: String) {
        self.code.valid = is_access_code_valid(&value);
        self.code.value = value;
        self.dirty = true;
    }

    /// Mints the token for a new submission and enters `Submitting`.
    ///
    /// Data from the previous submission is dropped.
    pub(crate) fn begin_session(&mut self) -> SessionId {
        self.session += 1;
        self.flow = FlowState::Submitting;
        self.notification = None;
        self.event = None;
        self.dirty = true;
        self.session
    }

    pub(crate) fn is_current(&self, session: SessionId) -> bool {
        session == self.session
    }

    pub(crate) fn set_flow(&mut self, flow: FlowState) {
        self.flow = flow;
        self.dirty = true;
    }

    pub(crate) fn resolve_completed(&mut self, event: EventDetails, message: String) {
        self.event = Some(event);
        self.notify(message.clone(), Severity::Info);
        self.set_flow(FlowState::Resolved(Resolution::Completed { message }));
    }

    pub(crate) fn resolve_failed(&mut self, error: FlowError) {
        self.notify(error.to_string(), Severity::Error);
        self.set_flow(FlowState::Resolved(Resolution::Failed(error)));
    }

    pub(crate) fn notify(&mut self, message: String, severity: Severity) {
        self.notification = Some(Notification { message, severity });
        self.dirty = true;
    }

    pub(crate) fn close_notification(&mut self) {
        if self.notification.take().is_some() {
            self.dirty = true;
        }
    }
}
