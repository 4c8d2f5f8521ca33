//! Slash-command handler.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::command::Command;
use crate::service::ChatService;
use crate::texts;

/// Answers slash commands with a reply in the same chat and stops the chain, so commands are
/// never relayed to the partner. Non-command updates pass through.
pub struct CommandHandler {
    service: ChatService,
    bot: Arc<dyn Bot>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        service: ChatService,
        bot: Arc<dyn Bot>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        Self {
            service,
            bot,
            bot_username,
        }
    }

    async fn execute(&self, command: Command, message: &Message) -> Result<String> {
        let user = message.user.id;
        match command {
            Command::Start => {
                self.bot
                    .send_keyboard(&message.chat, texts::WELCOME, &texts::main_menu())
                    .await?;
                Ok(texts::WELCOME.to_string())
            }
            Command::Chat => {
                if !message.chat.is_private() {
                    return Ok(texts::PRIVATE_ONLY.to_string());
                }
                self.service.start_chat(user).await
            }
            Command::Exit => self.service.leave_chat(user).await,
            Command::Profile => self.service.show_profile(user).await,
            Command::Set { field, value } => self.service.set_field(user, &field, &value).await,
            Command::Rules => Ok(texts::RULES.to_string()),
            Command::Report { reason } => self.service.report_partner(user, &reason).await,
            Command::DeleteLast => self.service.delete_last(user).await,
            Command::Previous => self.service.previous_partner(user).await,
            Command::Payment => Ok(self.service.payment()),
            Command::Help => Ok(texts::HELP.to_string()),
            Command::Unknown(name) => {
                debug!(user_id = user, command = %name, "Unknown command");
                Ok(texts::UNKNOWN_COMMAND.to_string())
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(text) = message.text().filter(|_| message.is_command()) else {
            return Ok(HandlerResponse::Continue);
        };

        let username = self.bot_username.read().await.clone();
        let Some(command) = Command::parse(text, username.as_deref()) else {
            debug!(user_id = message.user.id, "Command addressed to another bot");
            return Ok(HandlerResponse::Stop);
        };

        info!(user_id = message.user.id, command = ?command, "Handling command");
        let is_start = command == Command::Start;
        let reply = self.execute(command, message).await?;
        if !is_start {
            self.bot.reply_to(message, &reply).await?;
        }
        Ok(HandlerResponse::Reply(reply))
    }
}
