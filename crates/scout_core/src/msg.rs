use crate::{EventDetails, SessionId, TaskStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the URL field.
    UrlChanged(String),
    /// User edited the access code field.
    CodeChanged(String),
    /// User pressed the submit button.
    SubmitClicked,
    /// User dismissed the notification.
    NotificationClosed,
    /// Reply of `POST /scrape`. `Err` carries the transport failure text.
    SubmitCompleted {
        session: SessionId,
        result: Result<TaskStatus, String>,
    },
    /// Reply of `GET /status/{task_id}`.
    StatusReceived {
        session: SessionId,
        result: Result<TaskStatus, String>,
    },
    /// The poll timer for `session` fired.
    PollDue { session: SessionId },
    /// Reply of `GET /result/{result_file}`.
    ResultReceived {
        session: SessionId,
        result: Result<EventDetails, String>,
    },
}
