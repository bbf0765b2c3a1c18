//! Command-line interface parsing and startup
//!
//! Parses arguments, optionally wires file logging, and hands off to the
//! shell event loop.

use std::error::Error;
use std::fs::File;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::ui::chat_loop::run_shell;

#[derive(Parser)]
#[command(name = "omnidev")]
#[command(about = "A terminal-based multimodal AI assistant shell")]
#[command(
    long_about = "OmniDev is a full-screen terminal shell for multimodal AI conversations. \
It offers a chat sidebar with search, a model picker, image aspect-ratio hints, \
and file attachments on outgoing drafts.\n\n\
Controls:\n\
  Type              Enter your message in the input field\n\
  Enter             Send the message\n\
  Shift+Enter       Insert a line break (Alt+Enter on terminals that swallow Shift)\n\
  Ctrl+B            Toggle the chat sidebar\n\
  Ctrl+F            Search chats in the sidebar\n\
  Ctrl+G            Toggle incognito mode\n\
  Ctrl+O            Open the model picker\n\
  Ctrl+T            Attach a file by path\n\
  Ctrl+X            Remove the last attachment\n\
  Ctrl+R            Choose an output aspect ratio\n\
  Ctrl+Y            Copy the latest assistant message\n\
  Up/Down           Scroll through chat history\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    /// Model to select at startup
    #[arg(short = 'm', long, value_name = "MODEL", default_value = "gpt-4")]
    pub model: String,

    /// Start the session in incognito mode
    #[arg(long)]
    pub incognito: bool,

    /// Enable logging to the specified file
    #[arg(short = 'l', long, value_name = "FILE")]
    pub log: Option<String>,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Logging only goes to a file. The alternate screen owns stderr and
    // stdout, so without --log every event is a no-op.
    if let Some(path) = &args.log {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    run_shell(args.model, args.incognito).await
}
