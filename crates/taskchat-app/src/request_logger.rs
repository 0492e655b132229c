use colored::Colorize;

use taskchat_core::safe_truncate;
use taskchat_types::UserQuery;

const MAX_LOGGED_CHARS: usize = 5000;

/// Dump an outgoing request to stderr (verbose mode only)
pub fn log_request(url: &str, query: &UserQuery, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_cyan());
    eprintln!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    eprintln!("{}", "═".repeat(80).bright_cyan());

    for line in describe_url(url) {
        eprintln!("{}", line);
    }

    eprintln!("\n{}", "Headers:".bright_yellow());
    eprintln!("  Content-Type: application/json");

    eprintln!("\n{}", "Request Body:".bright_yellow());
    match serde_json::to_string_pretty(query) {
        Ok(json) => eprintln!("{}", truncate_for_log(&json)),
        Err(e) => eprintln!("{}", format!("Error serializing request: {}", e).red()),
    }

    eprintln!("{}", "═".repeat(80).bright_cyan());
}

/// Dump a response to stderr (verbose mode only)
pub fn log_response(status: u16, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    eprintln!("\n{}", "═".repeat(80).bright_green());
    eprintln!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    eprintln!("{}", "═".repeat(80).bright_green());

    let status_line = format!("Status: {}", status);
    if (200..300).contains(&status) {
        eprintln!("{}", status_line.green());
    } else {
        eprintln!("{}", status_line.red());
    }

    eprintln!("\n{}", "Response Body:".bright_yellow());
    let pretty = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| body.to_string());
    eprintln!("{}", truncate_for_log(&pretty));

    eprintln!("{}", "═".repeat(80).bright_green());
}

/// URL, host, port and scheme lines for the request dump
fn describe_url(url: &str) -> Vec<String> {
    let Ok(parsed) = reqwest::Url::parse(url) else {
        return vec![format!("URL: {}", url)];
    };

    let port = parsed
        .port()
        .map(|p| p.to_string())
        .unwrap_or_else(|| {
            if parsed.scheme() == "https" {
                "443 (default)".to_string()
            } else {
                "80 (default)".to_string()
            }
        });

    vec![
        format!("URL: {}", url),
        format!("Host: {}", parsed.host_str().unwrap_or("unknown")),
        format!("Port: {}", port),
        format!("Scheme: {}", parsed.scheme()),
    ]
}

fn truncate_for_log(text: &str) -> String {
    if text.chars().count() > MAX_LOGGED_CHARS {
        format!(
            "{}\n... (truncated, total {} bytes)",
            safe_truncate(text, MAX_LOGGED_CHARS),
            text.len()
        )
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_explicit_and_default_ports() {
        assert_eq!(
            describe_url("http://127.0.0.1:8000/user_query"),
            vec![
                "URL: http://127.0.0.1:8000/user_query",
                "Host: 127.0.0.1",
                "Port: 8000",
                "Scheme: http",
            ]
        );
        assert_eq!(describe_url("https://example.com/q")[2], "Port: 443 (default)");
        assert_eq!(describe_url("nonsense"), vec!["URL: nonsense"]);
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "y".repeat(MAX_LOGGED_CHARS + 10);
        let logged = truncate_for_log(&body);
        assert!(logged.ends_with(&format!("(truncated, total {} bytes)", body.len())));
        assert_eq!(truncate_for_log("short"), "short");
    }
}
