use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use taskchat_core::render_message_html;

/// Print the chat HTML for a markdown file, or stdin when no file is given
pub fn run_render_mode(file: Option<&Path>) -> Result<()> {
    let source = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    println!("{}", render_message_html(&source));
    Ok(())
}
