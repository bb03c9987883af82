use thiserror::Error;

/// Every way a submission can end without event data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("invalid vendor URL")]
    InvalidUrl,
    #[error("access code is required")]
    MissingAccessCode,
    /// The backend answered with `status: error`; its message is shown as is.
    #[error("{0}")]
    Backend(String),
    #[error("Error: {0}")]
    Transport(String),
    #[error("gave up after {polls} status checks without a result")]
    DeadlineExceeded { polls: u32 },
}
