use std::time::Duration;

use crate::{SessionId, SubmissionRequest};

/// IO the shell must perform on behalf of [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Submit {
        session: SessionId,
        request: SubmissionRequest,
    },
    FetchStatus {
        session: SessionId,
        task_id: String,
    },
    FetchResult {
        session: SessionId,
        result_file: String,
    },
    /// Arm the single poll timer; it reports back with `Msg::PollDue`.
    SchedulePoll { session: SessionId, delay: Duration },
    /// Disarm the poll timer if one is pending.
    CancelPolling,
}
