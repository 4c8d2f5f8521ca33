//! Update dispatcher: converts teloxide messages and callback queries to core::Message and passes
//! them to the HandlerChain. Chain failures are logged and answered with a generic error text; the
//! process never stops on a bad update.

use anyhow::Result;
use dbot_core::{Bot as CoreBot, Chat, HandlerResponse, Message, ToCoreMessage};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tracing::{error, info, instrument, warn};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Runs one core message through the chain and turns failures into a user notice.
#[derive(Clone)]
pub struct UpdateProcessor {
    chain: HandlerChain,
    bot: Arc<dyn CoreBot>,
    error_reply: String,
}

impl UpdateProcessor {
    /// `error_reply` is sent to the user's private chat when the chain returns an error.
    pub fn new(chain: HandlerChain, bot: Arc<dyn CoreBot>, error_reply: impl Into<String>) -> Self {
        Self {
            chain,
            bot,
            error_reply: error_reply.into(),
        }
    }

    /// Returns the chain's response, or None if the chain failed (already logged and reported).
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    pub async fn process(&self, message: &Message) -> Option<HandlerResponse> {
        match self.chain.handle(message).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Handler chain failed");
                let chat = Chat::private(message.user.id);
                if let Err(send_err) = self.bot.send_message(&chat, &self.error_reply).await {
                    warn!(error = %send_err, user_id = message.user.id, "Failed to send error notice");
                }
                None
            }
        }
    }
}

async fn on_message(msg: teloxide::types::Message, processor: UpdateProcessor) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        kind = core_msg.message_type(),
        "Received message"
    );
    processor.process(&core_msg).await;
    Ok(())
}

async fn on_callback_query(
    bot: teloxide::Bot,
    query: CallbackQuery,
    processor: UpdateProcessor,
) -> ResponseResult<()> {
    // Acknowledge first so the client stops its loading spinner even if handling fails.
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, "Failed to answer callback query");
    }

    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        data = %core_msg.content,
        "Received callback query"
    );
    processor.process(&core_msg).await;
    Ok(())
}

/// Starts long polling with the given teloxide Bot and processor; returns on Ctrl+C.
///
/// Calls get_me() first and stores the username into `bot_username` so command parsing can accept
/// `/command@BotName`.
#[instrument(skip(bot, processor, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    processor: UpdateProcessor,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands with @BotName suffix are matched loosely"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    info!("Bot started polling");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![processor])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}
