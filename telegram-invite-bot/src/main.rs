//! telegram-invite-bot: entry point. Combines the telegram-bot CLI with the invite handler.

use anyhow::Result;
use clap::Parser;
use telegram_bot::{load_config, Cli, Commands};
use telegram_invite_bot::{run_bot_with_invites, InviteConfig, SERVICE_NAME};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token, SERVICE_NAME)?;
            let invite_config = InviteConfig::from_env()?;
            run_bot_with_invites(config, invite_config).await
        }
    }
}
