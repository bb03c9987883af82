use std::fmt;

use scout_core::{EventDetails, SessionId, TaskStatus};

/// Completion reported by the engine, tagged with the session that asked for it.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Submitted {
        session: SessionId,
        result: Result<TaskStatus, ApiError>,
    },
    StatusFetched {
        session: SessionId,
        result: Result<TaskStatus, ApiError>,
    },
    ResultFetched {
        session: SessionId,
        result: Result<EventDetails, ApiError>,
    },
    PollDue {
        session: SessionId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "invalid response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}
