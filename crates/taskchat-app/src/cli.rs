use clap::{Parser, Subcommand};
use std::path::PathBuf;

use taskchat_types::DEFAULT_ENDPOINT;

/// CLI arguments for taskchat
#[derive(Parser, Debug)]
#[command(name = "taskchat")]
#[command(about = "taskchat - chat with a task assistant endpoint from the terminal or the browser")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Chat endpoint that receives {"message": ...} and answers {"response": ...}
    /// A bare host such as http://127.0.0.1:8000 gets /user_query appended
    #[arg(long, global = true, value_name = "URL", env = "TASKCHAT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Give up on a request after this many seconds (default: wait indefinitely)
    #[arg(long, global = true, value_name = "SECS", env = "TASKCHAT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive chat in the terminal (default)
    Chat,

    /// Send a single message, print the reply and exit
    Ask {
        /// Message text
        text: String,

        /// Print the reply as pretty JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Render markdown from a file (or stdin) to the HTML shown in the chat
    Render {
        /// Input file, stdin when omitted
        file: Option<PathBuf>,
    },

    /// Serve the browser chat page
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1", env = "TASKCHAT_WEB_BIND")]
        bind: String,

        /// Port
        #[arg(long, default_value = "3000", env = "TASKCHAT_WEB_PORT")]
        port: u16,

        /// Directory with the built frontend (wasm-pack output under pkg/)
        #[arg(long, value_name = "DIR", env = "TASKCHAT_WEB_DIR")]
        web_dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["taskchat"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.timeout_secs, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "taskchat",
            "ask",
            "hello there",
            "--pretty",
            "--endpoint",
            "http://localhost:9000",
            "--timeout-secs",
            "30",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Commands::Ask {
                text: "hello there".to_string(),
                pretty: true
            })
        );
        assert_eq!(cli.endpoint, "http://localhost:9000");
        assert_eq!(cli.timeout_secs, Some(30));
    }

    #[test]
    fn serve_flags() {
        let cli = Cli::try_parse_from(["taskchat", "serve", "--port", "8080", "--web-dir", "dist"])
            .unwrap();
        match cli.command {
            Some(Commands::Serve { bind, port, web_dir }) => {
                assert_eq!(bind, "127.0.0.1");
                assert_eq!(port, 8080);
                assert_eq!(web_dir, Some(PathBuf::from("dist")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
