use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use taskchat_core::{parse_response, ChatError, ChatTransport};
use taskchat_types::UserQuery;

use crate::config::ClientConfig;
use crate::request_logger::{log_request, log_response};

/// Posts queries to the chat endpoint with reqwest
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
    verbose: bool,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
            verbose: config.verbose,
        })
    }

    fn map_error(&self, err: reqwest::Error) -> ChatError {
        match self.timeout {
            Some(timeout) if err.is_timeout() => ChatError::Timeout(timeout),
            _ => ChatError::Network(err.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl ChatTransport for HttpTransport {
    async fn send(&self, query: &UserQuery) -> Result<String, ChatError> {
        log_request(&self.endpoint, query, self.verbose);

        let response = self
            .client
            .post(&self.endpoint)
            .json(query)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        log::debug!("Response status {} ({} bytes)", status, body.len());
        log_response(status, &body, self.verbose);

        parse_response(status, &body)
    }
}
