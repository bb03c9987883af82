//! The two request helpers every endpoint goes through.
//!
//! Both perform exactly one request and either return the decoded JSON
//! body or an [`ApiError`]. Non-2xx statuses are errors; bodies are decoded
//! with `serde_json` so malformed payloads surface as `FailureKind::Decode`.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{ApiError, FailureKind};

const APPLICATION_JSON: &str = "application/json";

pub async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, ApiError> {
    send(client.get(url)).await
}

pub async fn post_json<B, T>(client: &Client, url: Url, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let payload = serde_json::to_vec(body).map_err(|err| {
        ApiError::new(FailureKind::Decode, format!("invalid request body: {err}"))
    })?;
    send(
        client
            .post(url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(payload),
    )
    .await
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .header(ACCEPT, APPLICATION_JSON)
        .send()
        .await
        .map_err(map_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::new(
            FailureKind::HttpStatus(status.as_u16()),
            format!("http status {status}"),
        ));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    serde_json::from_slice(&bytes).map_err(|err| {
        ApiError::new(FailureKind::Decode, format!("invalid response body: {err}"))
    })
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
