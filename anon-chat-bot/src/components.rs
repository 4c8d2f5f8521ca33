//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use dbot_core::Bot as CoreBot;
use dbot_telegram::{build_teloxide_bot, TelegramBotAdapter};
use handler_chain::HandlerChain;
use storage::Database;
use tokio::sync::RwLock;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::handlers::{CallbackHandler, CommandHandler, LoggingHandler, RelayHandler};
use crate::pairing::PairingEngine;
use crate::relay::Relay;
use crate::service::ChatService;

/// Transport-independent parts: database, pairing state, relay and the shared service.
/// Tests build this directly with a mock [`CoreBot`].
#[derive(Clone)]
pub struct ChatComponents {
    pub bot: Arc<dyn CoreBot>,
    pub database: Database,
    pub engine: Arc<PairingEngine>,
    pub relay: Relay,
    pub service: ChatService,
}

impl ChatComponents {
    pub fn new(bot: Arc<dyn CoreBot>, database: Database, payment_url: &str) -> Self {
        let engine = Arc::new(PairingEngine::new());
        let relay = Relay::new(bot.clone(), engine.clone(), database.forwards.clone());
        let service = ChatService::new(
            bot.clone(),
            engine.clone(),
            relay.clone(),
            database.clone(),
            payment_url,
        );
        Self {
            bot,
            database,
            engine,
            relay,
            service,
        }
    }
}

/// Everything run_bot needs: chat components plus the teloxide Bot used for polling.
pub struct BotComponents {
    pub chat: ChatComponents,
    pub teloxide_bot: teloxide::Bot,
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Opens the database and builds the Telegram-backed components.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let database = Database::connect(config.database_url())
        .await
        .map_err(|e| {
            error!(
                error = %e,
                database_url = %config.database_url(),
                "Failed to initialize storage"
            );
            anyhow::anyhow!("Failed to initialize storage: {}", e)
        })?;

    let teloxide_bot = build_teloxide_bot(config.bot_token(), config.telegram_api_url())?;
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let chat = ChatComponents::new(bot, database, config.payment_url());

    info!(database_url = %config.database_url(), "Bot components ready");
    Ok(BotComponents {
        chat,
        teloxide_bot,
        bot_username: Arc::new(RwLock::new(None)),
    })
}

/// Chain order: logging → callbacks → commands → relay.
pub fn build_handler_chain(
    components: &ChatComponents,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CallbackHandler::new(
            components.service.clone(),
            components.bot.clone(),
        )))
        .add_handler(Arc::new(CommandHandler::new(
            components.service.clone(),
            components.bot.clone(),
            bot_username,
        )))
        .add_handler(Arc::new(RelayHandler::new(components.relay.clone())))
}
