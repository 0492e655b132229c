use async_trait::async_trait;
use taskchat_types::{QueryResponse, UserQuery};

use crate::error::ChatError;
use crate::safe_truncate;

/// Longest response body kept in a `ChatError::Status`
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Carries one user query to the chat endpoint and returns the reply text.
///
/// Futures are not required to be `Send` so browser fetch futures qualify.
#[async_trait(?Send)]
pub trait ChatTransport {
    async fn send(&self, query: &UserQuery) -> Result<String, ChatError>;
}

/// Interpret a finished HTTP exchange.
///
/// Non-2xx statuses and bodies without a string `response` field are both
/// failures; neither yields a reply.
pub fn parse_response(status: u16, body: &str) -> Result<String, ChatError> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Status {
            status,
            body: safe_truncate(body, MAX_ERROR_BODY_CHARS),
        });
    }

    serde_json::from_str::<QueryResponse>(body)
        .map(|parsed| parsed.response)
        .map_err(|e| ChatError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_yields_response_text() {
        assert_eq!(
            parse_response(200, r#"{"response":"hi"}"#),
            Ok("hi".to_string())
        );
    }

    #[test]
    fn non_success_status_is_an_error() {
        let err = parse_response(500, r#"{"detail":"boom"}"#).unwrap_err();
        assert_eq!(
            err,
            ChatError::Status {
                status: 500,
                body: r#"{"detail":"boom"}"#.to_string()
            }
        );
    }

    #[test]
    fn missing_response_field_is_malformed() {
        assert!(matches!(
            parse_response(200, r#"{"message":"hi"}"#),
            Err(ChatError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_response(200, "not json"),
            Err(ChatError::MalformedResponse(_))
        ));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(2000);
        match parse_response(502, &body) {
            Err(ChatError::Status { body, .. }) => {
                assert_eq!(body.chars().count(), MAX_ERROR_BODY_CHARS);
                assert!(body.ends_with("..."));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
