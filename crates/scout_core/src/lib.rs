//! Scout core: pure submit/poll state machine, input validation and view-model helpers.
mod effect;
mod error;
mod model;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use error::FlowError;
pub use model::{
    EventDetails, Scalar, SeatCount, SeatRow, Section, SessionId, SubmissionRequest, TaskStatus,
};
pub use msg::Msg;
pub use state::{
    AppState, FieldState, FlowState, Notification, PollPolicy, Resolution, Severity,
    DEFAULT_POLL_INTERVAL,
};
pub use update::update;
pub use validate::{is_access_code_valid, is_vendor_event_url, validate_submission};
pub use view_model::{AppViewModel, EventView, FlowLabel, FormView, SeatRowView};
