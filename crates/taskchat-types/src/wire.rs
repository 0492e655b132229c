use serde::{Deserialize, Serialize};

/// Body posted to the chat endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub message: String,
}

impl UserQuery {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by the chat endpoint. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_query_wire_shape() {
        let json = serde_json::to_value(UserQuery::new("hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "hello" }));
    }

    #[test]
    fn response_requires_response_field() {
        let ok: QueryResponse =
            serde_json::from_str(r#"{"response":"hi","extra":1}"#).unwrap();
        assert_eq!(ok.response, "hi");

        assert!(serde_json::from_str::<QueryResponse>(r#"{"answer":"hi"}"#).is_err());
        assert!(serde_json::from_str::<QueryResponse>(r#"{"response":null}"#).is_err());
    }
}
