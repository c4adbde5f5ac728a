//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments and dispatches to the chat
//! view or to the line-classification pipe.


use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::classify;
use crate::core::config::ChatConfig;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "causerie")]
#[command(about = "A terminal chat view with /me and /w line commands")]
#[command(
    long_about = "Causerie is a full-screen terminal chat view. Lines starting with /me are \
drawn as italic actions, lines starting with /w become tinted whispers behind a [Whisper] \
tag, and everything else is split into sender and body on the first colon.\n\n\
Controls:\n\
  Type              Compose a line in the input box\n\
  Enter             Send the line\n\
  Left/Right        Move the cursor\n\
  Home/End          Jump within the line\n\
  PageUp/PageDown   Scroll the transcript\n\
  Esc               Close the chat view and exit\n\
  Ctrl+C            Quit"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read settings from this file instead of the platform config path
    #[arg(short = 'c', long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the configured font size, in pixels
    #[arg(long, global = true, value_name = "PX")]
    pub font_size: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat view (default)
    Chat,
    /// Read raw lines on stdin and print one JSON classification per line
    Classify,
    /// Print the resolved configuration file path
    ConfigPath,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let mut config = match &args.config {
                Some(path) => ChatConfig::load_from_path(path)?,
                None => ChatConfig::load()?,
            };
            if let Some(font_size) = args.font_size {
                config.font_size = font_size;
            }
            run_chat(config)
        }
        Commands::Classify => classify_lines(io::stdin().lock(), io::stdout().lock()),
        Commands::ConfigPath => {
            let path = args.config.unwrap_or_else(ChatConfig::config_path);
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Turns log output on when `RUST_LOG` asks for it. Left off otherwise so
/// log lines cannot land in the middle of the alternate screen.
fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }
}

/// Classifies every line of `input` and writes one JSON object per line.
fn classify_lines(input: impl BufRead, mut output: impl Write) -> Result<(), Box<dyn Error>> {
    for line in input.lines() {
        let line = line?;
        serde_json::to_writer(&mut output, &classify(&line))?;
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}
