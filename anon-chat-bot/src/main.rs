//! Binary for the anonymous chat relay bot.

use anyhow::Result;
use anon_chat_bot::{list_reports, load_config, resolve_database, run_bot, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Reports {
            limit,
            database,
            json,
        } => list_reports(&resolve_database(database), limit, json).await,
    }
}
