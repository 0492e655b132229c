// Browser frontend hosting
pub mod routes;
pub mod server;

pub use routes::{create_router, render_index, AppState};
pub use server::{WebServer, WebServerConfig};
