use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde_json::Value;

use crate::error::PollError;

const BODY_LOG_LIMIT: usize = 200;

/// Where poll cycles get their raw payload from.
pub trait HomeworkSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// Homework status API over HTTP.
#[derive(Clone)]
pub struct PracticumClient {
    endpoint: String,
    token: String,
    client: Client,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        log::debug!("homework_api_request from_date={}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(PollError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            log::warn!(
                "homework_api_unexpected_status status={} body={}",
                status.as_u16(),
                truncate_chars(&body, BODY_LOG_LIMIT)
            );
            return Err(PollError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(PollError::Transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
