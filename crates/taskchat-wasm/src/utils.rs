use std::time::Duration;

use taskchat_core::Clock;
use taskchat_types::{Sender, DEFAULT_ENDPOINT};
use web_sys::Element;

/// Clock backed by `Date.now()`
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

/// Settings read from the chat root element's data attributes
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub endpoint: String,
    pub timeout: Option<Duration>,
}

impl PageConfig {
    pub fn from_element(root: &Element) -> Self {
        Self::from_attributes(
            root.get_attribute("data-endpoint"),
            root.get_attribute("data-timeout-ms"),
        )
    }

    fn from_attributes(endpoint: Option<String>, timeout_ms: Option<String>) -> Self {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        Self {
            endpoint,
            timeout: parse_timeout_ms(timeout_ms.as_deref()),
        }
    }
}

/// Positive millisecond count, anything else means no timeout
fn parse_timeout_ms(value: Option<&str>) -> Option<Duration> {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

/// CSS classes for a message bubble
pub fn message_class(sender: Sender) -> &'static str {
    match sender {
        Sender::User => "message user",
        Sender::Bot => "message bot",
    }
}

/// Escape HTML to prevent XSS
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
