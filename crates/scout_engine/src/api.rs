use std::time::Duration;

use reqwest::Client;
use scout_core::{EventDetails, SubmissionRequest, TaskStatus};
use serde::Deserialize;
use url::Url;

use crate::http::{get_json, post_json};
use crate::{ApiError, FailureKind};

/// Backend the app talks to. Not exposed on the command line.
pub const DEFAULT_BASE_URL: &str = "https://home.automasterticket.com/api";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The three endpoints of the scraping backend.
#[async_trait::async_trait]
pub trait ScrapeApi: Send + Sync {
    /// `POST /scrape`
    async fn submit(&self, request: &SubmissionRequest) -> Result<TaskStatus, ApiError>;
    /// `GET /status/{task_id}`
    async fn status(&self, task_id: &str) -> Result<TaskStatus, ApiError>;
    /// `GET /result/{result_file}`
    async fn result(&self, result_file: &str) -> Result<EventDetails, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestScrapeApi {
    client: Client,
    base: Url,
}

impl ReqwestScrapeApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{base} cannot be used as a base url"),
            ));
        }
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, base })
    }

    /// Appends path segments to the base url, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait::async_trait]
impl ScrapeApi for ReqwestScrapeApi {
    async fn submit(&self, request: &SubmissionRequest) -> Result<TaskStatus, ApiError> {
        let reply: TaskReply = post_json(&self.client, self.endpoint(&["scrape"]), request).await?;
        reply.into_status()
    }

    async fn status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        let reply: TaskReply = get_json(&self.client, self.endpoint(&["status", task_id])).await?;
        reply.into_status()
    }

    async fn result(&self, result_file: &str) -> Result<EventDetails, ApiError> {
        get_json(&self.client, self.endpoint(&["result", result_file])).await
    }
}

/// Wire shape shared by the scrape and status replies. The scrape reply
/// names the result file at the top level, the status reply nests it
/// under `result`.
#[derive(Debug, Deserialize)]
struct TaskReply {
    status: String,
    #[serde(default)]
    task_id: Option<String>,
    #[serde(default)]
    result_file: Option<String>,
    #[serde(default)]
    result: Option<ResultRef>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResultRef {
    result_file: String,
}

impl TaskReply {
    fn into_status(self) -> Result<TaskStatus, ApiError> {
        let message = self.message.unwrap_or_default();
        let result_file = self.result_file.or(self.result.map(|r| r.result_file));
        let require_file = |status: &str| {
            result_file.clone().ok_or_else(|| {
                ApiError::new(
                    FailureKind::Decode,
                    format!("invalid response body: status {status} without result_file"),
                )
            })
        };

        Ok(match self.status.as_str() {
            "pending" => TaskStatus::Pending {
                task_id: self.task_id,
                message,
            },
            "success" => TaskStatus::Success {
                result_file: require_file("success")?,
                message,
            },
            "scraped" => TaskStatus::Scraped {
                result_file: require_file("scraped")?,
                message,
            },
            "error" => TaskStatus::Error { message },
            _ => TaskStatus::Other {
                status: self.status.clone(),
                message,
            },
        })
    }
}
