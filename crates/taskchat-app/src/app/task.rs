use anyhow::{anyhow, bail, Result};
use std::cell::RefCell;

use taskchat_core::{submit, ChatPanel, ChatTransport, Clock, Sender};

use crate::config::ClientConfig;
use crate::transport::HttpTransport;

/// Run in ask mode - send one message, print the reply and exit
pub async fn run_ask_mode(config: &ClientConfig, text: String, pretty: bool) -> Result<()> {
    let transport = HttpTransport::new(config)?;
    let reply = ask(&transport, &taskchat_core::SystemClock, text).await?;

    if pretty {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "response": reply,
                "endpoint": config.endpoint,
            }))?
        );
    } else {
        println!("{}", reply);
    }

    Ok(())
}

/// Push one message through a fresh chat panel and return the reply text
pub async fn ask<T, C>(transport: &T, clock: &C, text: String) -> Result<String>
where
    T: ChatTransport + ?Sized,
    C: Clock + ?Sized,
{
    let panel = RefCell::new(ChatPanel::new());
    panel.borrow_mut().set_draft(text);

    if !submit(&panel, transport, clock).await {
        bail!("Nothing to send: the message is empty");
    }

    let state = panel.borrow();
    if let Some(error) = state.last_error() {
        bail!("Request failed: {}", error);
    }

    state
        .messages()
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Bot)
        .map(|m| m.text.clone())
        .ok_or_else(|| anyhow!("No reply received"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use taskchat_core::ChatError;
    use taskchat_types::UserQuery;

    struct Echo;

    #[async_trait(?Send)]
    impl ChatTransport for Echo {
        async fn send(&self, query: &UserQuery) -> Result<String, ChatError> {
            Ok(format!("echo: {}", query.message))
        }
    }

    struct Down;

    #[async_trait(?Send)]
    impl ChatTransport for Down {
        async fn send(&self, _query: &UserQuery) -> Result<String, ChatError> {
            Err(ChatError::Network("connection refused".to_string()))
        }
    }

    struct Zero;

    impl Clock for Zero {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    #[tokio::test]
    async fn returns_reply() {
        let reply = ask(&Echo, &Zero, "hello".to_string()).await.unwrap();
        assert_eq!(reply, "echo: hello");
    }

    #[tokio::test]
    async fn blank_message_is_an_error() {
        let err = ask(&Echo, &Zero, "   ".to_string()).await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let err = ask(&Down, &Zero, "hello".to_string()).await.unwrap_err();
        assert_eq!(err.to_string(), "Request failed: request failed: connection refused");
    }
}
