use anyhow::Result;
use clap::Parser;

use taskchat::app::{run_ask_mode, run_render_mode, run_repl_mode, run_web_server};
use taskchat::{logging, ClientConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    let config = ClientConfig::from_cli(&cli)?;
    log::debug!("Using endpoint {}", config.endpoint);

    match cli.command.clone().unwrap_or(Commands::Chat) {
        Commands::Chat => run_repl_mode(&config).await,
        Commands::Ask { text, pretty } => run_ask_mode(&config, text, pretty).await,
        Commands::Render { file } => run_render_mode(file.as_deref()),
        Commands::Serve {
            bind,
            port,
            web_dir,
        } => run_web_server(&config, &bind, port, web_dir).await,
    }
}
