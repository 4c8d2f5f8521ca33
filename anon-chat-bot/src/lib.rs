//! # Anonymous chat relay bot
//!
//! Pairs strangers one-to-one and relays their messages through the bot. Wires dbot-core,
//! handler-chain, dbot-telegram and storage; loads config from env and runs the dispatcher.
//!
//! Pairing state lives in memory ([`PairingEngine`]); profiles, reports and the forward log live
//! in SQLite.

pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod handlers;
pub mod health;
pub mod pairing;
pub mod relay;
pub mod runner;
pub mod service;
pub mod texts;

pub use cli::{load_config, resolve_database, Cli, Commands};
pub use command::{CallbackAction, Command};
pub use components::{build_bot_components, build_handler_chain, BotComponents, ChatComponents};
pub use config::{BaseConfig, BotConfig, ChatConfig};
pub use handlers::{CallbackHandler, CommandHandler, LoggingHandler, RelayHandler};
pub use pairing::{LeaveOutcome, PairOutcome, PairingEngine, PairingError, PairingStats};
pub use relay::{Relay, RelayOutcome, RetractOutcome};
pub use runner::{list_reports, run_bot};
pub use service::ChatService;
