pub mod render;
pub mod repl;
pub mod task;
pub mod web_server;

pub use render::run_render_mode;
pub use repl::run_repl_mode;
pub use task::run_ask_mode;
pub use web_server::run_web_server;
