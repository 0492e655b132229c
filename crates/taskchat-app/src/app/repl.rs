use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::cell::RefCell;

use taskchat_core::{submit, ChatPanel, Message, Sender, SystemClock};

use crate::config::ClientConfig;
use crate::transport::HttpTransport;

/// Run interactive REPL mode
pub async fn run_repl_mode(config: &ClientConfig) -> Result<()> {
    println!("{}", "🤖 taskchat - Ask me anything".bright_cyan().bold());
    println!("{}", format!("Endpoint: {}", config.endpoint).bright_black());
    match config.timeout {
        Some(timeout) => println!(
            "{}",
            format!("Request timeout: {}s", timeout.as_secs()).bright_black()
        ),
        None => println!(
            "{}",
            "No request timeout: a stuck request blocks until the server answers".bright_black()
        ),
    }
    println!("{}", "Type 'exit' or 'quit' to exit, or '/help' for commands\n".bright_black());

    let transport = HttpTransport::new(config)?;
    let panel = RefCell::new(ChatPanel::new());
    let mut printed = 0;

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        match readline {
            Ok(line) => {
                let command = line.trim();

                if command.is_empty() {
                    continue;
                }

                if command == "exit" || command == "quit" {
                    println!("{}", "Goodbye!".bright_cyan());
                    break;
                }

                if command == "/help" {
                    print_help();
                    continue;
                }

                if command == "/history" {
                    print_history(panel.borrow().messages());
                    continue;
                }

                let _ = rl.add_history_entry(command);

                panel.borrow_mut().set_draft(line);
                println!("{}", "Thinking...".bright_black().italic());
                submit(&panel, &transport, &SystemClock).await;

                let state = panel.borrow();
                for message in &state.messages()[printed..] {
                    if message.sender == Sender::Bot {
                        print_bot_message(message);
                    }
                }
                printed = state.messages().len();

                if let Some(error) = state.last_error() {
                    eprintln!("{} {}\n", "Error:".bright_red().bold(), error);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C (type 'exit' to quit)".bright_yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(err) => {
                eprintln!("{} {}", "Error:".bright_red().bold(), err);
                break;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("{} Commands:", "💡".bright_yellow());
    println!("  /history                - Show this session's messages");
    println!("  /help                   - Show this help");
    println!("  exit, quit              - Leave");
}

fn print_history(messages: &[Message]) {
    if messages.is_empty() {
        println!("{} No messages yet", "ℹ️".bright_blue());
        return;
    }

    for message in messages {
        let label = match message.sender {
            Sender::User => "You:".bright_green().bold(),
            Sender::Bot => "Bot:".bright_blue().bold(),
        };
        println!("{} {}", label, message.text);
    }
    println!();
}

fn print_bot_message(message: &Message) {
    println!("{} {}\n", "Bot:".bright_blue().bold(), message.text);
}
