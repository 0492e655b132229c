use std::time::Duration;

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use taskchat_core::{parse_response, ChatError, ChatTransport};
use taskchat_types::UserQuery;

/// Posts queries with the browser's fetch API
pub struct FetchTransport {
    endpoint: String,
    timeout: Option<Duration>,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }

    async fn post(&self, query: &UserQuery) -> Result<String, ChatError> {
        log::debug!("POST {}", self.endpoint);

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(query)
            .map_err(|e| ChatError::Network(format!("Failed to serialize query: {}", e)))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Network(format!("Failed to read body: {}", e)))?;

        log::debug!("Response status {} ({} bytes)", status, body.len());
        parse_response(status, &body)
    }
}

#[async_trait(?Send)]
impl ChatTransport for FetchTransport {
    async fn send(&self, query: &UserQuery) -> Result<String, ChatError> {
        let Some(timeout) = self.timeout else {
            return self.post(query).await;
        };

        // The fetch keeps running in the browser; its result is dropped
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        let request = Box::pin(self.post(query));
        match future::select(request, TimeoutFuture::new(millis)).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ChatError::Timeout(timeout)),
        }
    }
}
