//! taskchat application library
//!
//! Terminal chat client, one-shot queries, markdown rendering and the
//! static server for the browser frontend.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod request_logger;
pub mod transport;
pub mod web;

pub use cli::{Cli, Commands};
pub use config::{normalize_endpoint, ClientConfig};
pub use transport::HttpTransport;
