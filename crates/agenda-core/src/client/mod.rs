//! Thin HTTP client for a remote agenda service.

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Location, SessionView, Speaker};
use crate::ratings::RatingSummary;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid client configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Agenda HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Agenda API error: {0}")]
    Api(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Query arguments accepted by `GET /v1/sessions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
struct NameQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateRequest {
    pub rating: i64,
}

#[derive(Clone)]
pub struct AgendaClient {
    base_url: String,
    client: reqwest::Client,
}

impl AgendaClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base_url = normalize_base_url(base_url)?;
        Ok(Self {
            base_url,
            client: reqwest::Client::builder().build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_sessions(&self, query: &SessionQuery) -> ClientResult<Vec<SessionView>> {
        let request = self.client.get(self.url("/v1/sessions")).query(query);
        send_json(request).await
    }

    pub async fn get_session(&self, id: &str) -> ClientResult<SessionView> {
        let path = format!("/v1/sessions/{}", urlencoding::encode(id));
        send_json(self.client.get(self.url(&path))).await
    }

    pub async fn list_speakers(&self, name: Option<&str>) -> ClientResult<Vec<Speaker>> {
        let request = self
            .client
            .get(self.url("/v1/speakers"))
            .query(&NameQuery { name });
        send_json(request).await
    }

    pub async fn list_locations(&self, name: Option<&str>) -> ClientResult<Vec<Location>> {
        let request = self
            .client
            .get(self.url("/v1/locations"))
            .query(&NameQuery { name });
        send_json(request).await
    }

    pub async fn rate_session(&self, id: &str, rating: i64) -> ClientResult<RatingSummary> {
        let path = format!("/v1/sessions/{}/rating", urlencoding::encode(id));
        let request = self
            .client
            .post(self.url(&path))
            .json(&RateRequest { rating });
        send_json(request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
    let response = request.header("Accept", "application/json").send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = parse_api_error(status, &body);
        tracing::debug!(status = status.as_u16(), %message, "Agenda API request failed");
        return Err(if status == StatusCode::NOT_FOUND {
            ClientError::NotFound(message)
        } else {
            ClientError::Api(message)
        });
    }

    Ok(response.json::<T>().await?)
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: &str) -> ClientResult<String> {
    let base_url = raw.trim();
    if base_url.is_empty() {
        return Err(ClientError::InvalidConfiguration(
            "base URL must not be empty".to_string(),
        ));
    }
    if base_url.starts_with("http://") || base_url.starts_with("https://") {
        Ok(base_url.trim_end_matches('/').to_string())
    } else {
        Err(ClientError::InvalidConfiguration(
            "base URL must include http:// or https://".to_string(),
        ))
    }
}
