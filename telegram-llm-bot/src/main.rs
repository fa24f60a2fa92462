//! telegram-llm-bot: entry point. Combines the telegram-bot CLI with the chat handler.

use anyhow::Result;
use clap::Parser;
use llm_client::EnvLlmConfig;
use telegram_bot::{load_config, Cli, Commands};
use telegram_llm_bot::{run_bot_with_llm, SERVICE_NAME};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token, SERVICE_NAME)?;
            let llm_config = EnvLlmConfig::from_env()?;
            run_bot_with_llm(config, llm_config).await
        }
    }
}
