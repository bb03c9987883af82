use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scout_core::{SessionId, SubmissionRequest};
use scout_logging::{scout_debug, scout_info, scout_warn};

use crate::api::{ApiSettings, ReqwestScrapeApi, ScrapeApi};
use crate::scheduler::PollScheduler;
use crate::{EngineError, EngineEvent};

enum EngineCommand {
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
}

/// Background tokio runtime executing backend requests and the poll timer.
///
/// Requests are queued and answered asynchronously through
/// [`EngineHandle::try_recv`] / [`EngineHandle::recv_timeout`]. Timer calls
/// take effect immediately. Dropping the handle stops the runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    scheduler: PollScheduler,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, EngineError> {
        let api = ReqwestScrapeApi::new(&settings)?;
        scout_info!("engine using backend {}", settings.base_url);
        Self::with_api(Arc::new(api))
    }

    pub fn with_api(api: Arc<dyn ScrapeApi>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let scheduler = PollScheduler::new(runtime.handle().clone(), event_tx.clone());

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
            scout_debug!("engine command channel closed; stopping runtime");
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            scheduler,
        })
    }

    pub fn submit(&self, session: SessionId, request: SubmissionRequest) {
        self.send(EngineCommand::Submit { session, request });
    }

    pub fn fetch_status(&self, session: SessionId, task_id: impl Into<String>) {
        self.send(EngineCommand::FetchStatus {
            session,
            task_id: task_id.into(),
        });
    }

    pub fn fetch_result(&self, session: SessionId, result_file: impl Into<String>) {
        self.send(EngineCommand::FetchResult {
            session,
            result_file: result_file.into(),
        });
    }

    pub fn schedule_poll(&self, session: SessionId, delay: Duration) {
        scout_debug!("next status check for session {} in {:?}", session, delay);
        self.scheduler.schedule(session, delay);
    }

    pub fn cancel_polling(&self) -> bool {
        self.scheduler.cancel()
    }

    pub fn has_pending_poll(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            scout_warn!("engine thread is gone; command dropped");
        }
    }
}

async fn handle_command(
    api: &dyn ScrapeApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Submit { session, request } => {
            scout_info!("submitting session={} url={}", session, request.url);
            let result = api.submit(&request).await;
            log_outcome("scrape", session, result.as_ref().map(|s| s.name()));
            EngineEvent::Submitted { session, result }
        }
        EngineCommand::FetchStatus { session, task_id } => {
            scout_debug!("checking status session={} task_id={}", session, task_id);
            let result = api.status(&task_id).await;
            log_outcome("status", session, result.as_ref().map(|s| s.name()));
            EngineEvent::StatusFetched { session, result }
        }
        EngineCommand::FetchResult {
            session,
            result_file,
        } => {
            scout_info!("fetching result session={} file={}", session, result_file);
            let result = api.result(&result_file).await;
            log_outcome("result", session, result.as_ref().map(|e| e.title.as_str()));
            EngineEvent::ResultFetched { session, result }
        }
    };
    let _ = event_tx.send(event);
}

fn log_outcome(endpoint: &str, session: SessionId, outcome: Result<&str, &crate::ApiError>) {
    match outcome {
        Ok(summary) => scout_info!("{} reply session={}: {}", endpoint, session, summary),
        Err(err) => scout_warn!(
            "{} request failed session={} ({}): {}",
            endpoint,
            session,
            err.kind,
            err
        ),
    }
}
