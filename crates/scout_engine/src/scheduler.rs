use std::sync::{mpsc, Mutex};
use std::time::Duration;

use scout_core::SessionId;
use scout_logging::{scout_debug, scout_trace};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::EngineEvent;

struct PendingPoll {
    session: SessionId,
    task: JoinHandle<()>,
}

/// Owns the single outstanding poll timer.
///
/// Arming a new timer aborts the previous one, so at most one
/// `EngineEvent::PollDue` can be in the future at any time. Dropping the
/// scheduler aborts the pending timer as well.
pub struct PollScheduler {
    runtime: Handle,
    events: mpsc::Sender<EngineEvent>,
    pending: Mutex<Option<PendingPoll>>,
}

impl PollScheduler {
    pub fn new(runtime: Handle, events: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            runtime,
            events,
            pending: Mutex::new(None),
        }
    }

    /// Arms the timer: after `delay`, `PollDue { session }` is emitted.
    pub fn schedule(&self, session: SessionId, delay: Duration) {
        let events = self.events.clone();
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            scout_trace!("poll timer fired session={}", session);
            let _ = events.send(EngineEvent::PollDue { session });
        });

        let previous = self.lock().replace(PendingPoll { session, task });
        if let Some(previous) = previous {
            if !previous.task.is_finished() {
                scout_debug!(
                    "replacing poll timer of session {} with session {}",
                    previous.session,
                    session
                );
            }
            previous.task.abort();
        }
    }

    /// Disarms the timer. Returns `true` if a timer was still waiting.
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(pending) => {
                let was_waiting = !pending.task.is_finished();
                pending.task.abort();
                if was_waiting {
                    scout_debug!("cancelled poll timer of session {}", pending.session);
                }
                was_waiting
            }
            None => false,
        }
    }

    /// True while a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|pending| !pending.task.is_finished())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<PendingPoll>> {
        // The guarded value stays consistent even if a holder panicked.
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for PollScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
