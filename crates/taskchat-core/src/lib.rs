//! Chat panel state, input control model and inline markdown formatting.
//!
//! Nothing in here touches the DOM or the network directly; the browser
//! frontend and the native client plug in their own `ChatTransport` and
//! `Clock`.

pub mod clock;
pub mod error;
pub mod input;
pub mod markdown;
pub mod panel;
pub mod transport;

pub use clock::{Clock, SystemClock};
pub use error::ChatError;
pub use input::InputProps;
pub use markdown::{format_text, render_message_html};
pub use panel::{submit, submit_with, ChatPanel, PendingQuery};
pub use transport::{parse_response, ChatTransport};

pub use taskchat_types::{Message, MessageId, QueryResponse, Sender, UserQuery};

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::safe_truncate;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(safe_truncate("hello", 10), "hello");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(safe_truncate("héllo wörld", 8), "héllo...");
        assert_eq!(safe_truncate("abcdef", 2), "...");
    }
}
