//! CLI: run the bot, or inspect stored reports. Config from env and optional CLI args.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{database_url_from_env, BotConfig};

#[derive(Parser)]
#[command(name = "anon-chat-bot")]
#[command(about = "Anonymous 1:1 chat relay bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// List the most recent user reports, newest first.
    Reports {
        #[arg(short, long, default_value = "20")]
        limit: i64,
        /// SQLite file; defaults to BOT_DB / DATABASE_URL.
        #[arg(long)]
        database: Option<String>,
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Loads config from env; `token` overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Database for operator commands: the flag wins over the environment.
pub fn resolve_database(database: Option<String>) -> String {
    database.unwrap_or_else(database_url_from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["anon-chat-bot", "run", "--token", "abc"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                token: Some("abc".to_string())
            }
        );
    }

    #[test]
    fn test_parse_reports_defaults() {
        let cli = Cli::try_parse_from(["anon-chat-bot", "reports"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Reports {
                limit: 20,
                database: None,
                json: false
            }
        );
    }

    #[test]
    fn test_parse_reports_options() {
        let cli = Cli::try_parse_from([
            "anon-chat-bot",
            "reports",
            "-l",
            "5",
            "--database",
            "x.db",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Commands::Reports {
                limit: 5,
                database: Some("x.db".to_string()),
                json: true
            }
        );
        assert_eq!(resolve_database(Some("x.db".to_string())), "x.db");
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["anon-chat-bot"]).is_err());
    }
}
