mod common;

use std::cell::RefCell;
use std::time::Duration;

use taskchat::{ClientConfig, HttpTransport};
use taskchat_core::{submit, ChatError, ChatPanel, ChatTransport, Sender, SystemClock};
use taskchat_types::UserQuery;

fn transport_for(url: String) -> HttpTransport {
    HttpTransport::new(&ClientConfig::new(url)).unwrap()
}

#[tokio::test]
async fn posts_message_and_returns_response() {
    let addr = common::spawn_mock_endpoint().await;
    let transport = transport_for(format!("http://{}/user_query", addr));

    let reply = transport.send(&UserQuery::new("hello")).await.unwrap();
    assert_eq!(reply, "echo: hello");
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let addr = common::spawn_mock_endpoint().await;
    let transport = transport_for(format!("http://{}/server_error", addr));

    let err = transport.send(&UserQuery::new("hello")).await.unwrap_err();
    assert_eq!(
        err,
        ChatError::Status {
            status: 500,
            body: "boom".to_string()
        }
    );
}

#[tokio::test]
async fn missing_response_field_is_malformed() {
    let addr = common::spawn_mock_endpoint().await;
    let transport = transport_for(format!("http://{}/missing_field", addr));

    let err = transport.send(&UserQuery::new("hello")).await.unwrap_err();
    assert!(matches!(err, ChatError::MalformedResponse(_)));
}

#[tokio::test]
async fn unknown_route_is_a_status_error() {
    let addr = common::spawn_mock_endpoint().await;
    let transport = transport_for(format!("http://{}/nowhere", addr));

    let err = transport.send(&UserQuery::new("hello")).await.unwrap_err();
    assert!(matches!(err, ChatError::Status { status: 404, .. }));
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let addr = common::closed_port().await;
    let transport = transport_for(format!("http://{}/user_query", addr));

    let err = transport.send(&UserQuery::new("hello")).await.unwrap_err();
    assert!(matches!(err, ChatError::Network(_)));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let addr = common::spawn_mock_endpoint().await;
    let timeout = Duration::from_millis(200);
    let config = ClientConfig::new(format!("http://{}/slow", addr)).with_timeout(timeout);
    let transport = HttpTransport::new(&config).unwrap();

    let err = transport.send(&UserQuery::new("hello")).await.unwrap_err();
    assert_eq!(err, ChatError::Timeout(timeout));
}

#[tokio::test]
async fn panel_round_trip_over_http() {
    let addr = common::spawn_mock_endpoint().await;
    let transport = transport_for(format!("http://{}/user_query", addr));

    let panel = RefCell::new(ChatPanel::new());
    panel.borrow_mut().set_draft("hello");
    assert!(submit(&panel, &transport, &SystemClock).await);

    let state = panel.borrow();
    let senders: Vec<_> = state.messages().iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Bot]);
    assert_eq!(state.messages()[1].text, "echo: hello");
    assert!(state.messages()[0].id < state.messages()[1].id);
    assert!(!state.is_busy());
}

#[tokio::test]
async fn panel_survives_unreachable_endpoint() {
    let addr = common::closed_port().await;
    let transport = transport_for(format!("http://{}/user_query", addr));

    let panel = RefCell::new(ChatPanel::new());
    panel.borrow_mut().set_draft("hello");
    assert!(submit(&panel, &transport, &SystemClock).await);

    let state = panel.borrow();
    assert_eq!(state.messages().len(), 1);
    assert!(!state.is_busy());
    assert!(state.last_error().is_some());
}
