use anyhow::{bail, Context, Result};
use std::time::Duration;

use crate::cli::Cli;

/// Path the chat endpoint answers on when only a host is given
pub const DEFAULT_QUERY_PATH: &str = "user_query";

/// Settings shared by every mode that talks to the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
    pub verbose: bool,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
            verbose: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build from CLI flags (which already fall back to TASKCHAT_* env vars)
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let endpoint = normalize_endpoint(&cli.endpoint);
        let url = reqwest::Url::parse(&endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", cli.endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Endpoint must be an http(s) URL, got: {}", cli.endpoint);
        }

        let timeout = match cli.timeout_secs {
            Some(0) | None => None,
            Some(secs) => Some(Duration::from_secs(secs)),
        };

        Ok(Self {
            endpoint,
            timeout,
            verbose: cli.verbose,
        })
    }
}

/// Append the default query path to a bare host URL
pub fn normalize_endpoint(url: &str) -> String {
    let url = url.trim();
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    match rest.trim_end_matches('/').split_once('/') {
        Some((_, path)) if !path.is_empty() => url.to_string(),
        _ => format!("{}://{}/{}", scheme, rest.trim_end_matches('/'), DEFAULT_QUERY_PATH),
    }
}
