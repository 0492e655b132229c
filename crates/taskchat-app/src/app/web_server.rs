use anyhow::{Context, Result};
use colored::Colorize;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::web::server::{WebServer, WebServerConfig};

/// Run the web server
pub async fn run_web_server(
    client_config: &ClientConfig,
    bind: &str,
    port: u16,
    web_dir: Option<PathBuf>,
) -> Result<()> {
    // Parse bind address
    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address: {}:{}", bind, port))?;

    println!("{}", "🌐 Starting taskchat web server...".bright_cyan().bold());
    println!("   Address: {}", addr);
    println!("   Chat endpoint: {}", client_config.endpoint);

    let config = WebServerConfig {
        bind_addr: addr,
        endpoint: client_config.endpoint.clone(),
        timeout: client_config.timeout,
        web_dir,
    };

    WebServer::new(config).start().await
}
