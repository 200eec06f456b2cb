//! chatrelay-bot entry point.

use anyhow::Result;
use chatrelay_bot::run_bot;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chatrelay-bot", about = "Telegram chat relay: LLM chat with debate mode and web search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot and poll for messages.
    Run {
        /// Telegram bot token; overrides the BOT_TOKEN env var.
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run_bot(token).await,
    }
}
