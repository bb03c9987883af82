//! Scout engine: HTTP client, poll timer and effect execution.
mod api;
mod engine;
mod http;
mod scheduler;
mod types;

pub use api::{ApiSettings, ReqwestScrapeApi, ScrapeApi, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use http::{get_json, post_json};
pub use scheduler::PollScheduler;
pub use types::{ApiError, EngineError, EngineEvent, FailureKind};
